use super::cell::{Age, CellState, Level};
use super::config::BlurParams;
use super::grid::Frame;

/// Trait for local update rules.
/// A rule reads the active frame and returns the next state of one cell.
pub trait Rule: Send + Sync {
    /// Cell domain the rule operates on
    type Cell: CellState;

    /// Name of the rule
    fn name(&self) -> &'static str;

    /// Short description
    fn description(&self) -> &'static str;

    /// Compute the next state of the cell at `(x, y)`
    fn evolve(&self, frame: &Frame<'_, Self::Cell>, x: u32, y: u32) -> Self::Cell;
}

/// Tag selecting which rule a configuration runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RuleKind {
    /// Conway's Life (B3/S23) with bounded aging of survivors
    #[default]
    LifeAging,
    /// Four-sample box blur diffusion
    BoxBlur,
}

impl RuleKind {
    /// Get all available rule kinds
    pub fn all() -> Vec<RuleKind> {
        vec![RuleKind::LifeAging, RuleKind::BoxBlur]
    }

    pub fn name(&self) -> &'static str {
        match self {
            RuleKind::LifeAging => "Life",
            RuleKind::BoxBlur => "Blur",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RuleKind::LifeAging => "B3/S23 with aging",
            RuleKind::BoxBlur => "Box blur diffusion",
        }
    }

    /// The other rule kind
    pub fn next(self) -> Self {
        match self {
            RuleKind::LifeAging => RuleKind::BoxBlur,
            RuleKind::BoxBlur => RuleKind::LifeAging,
        }
    }
}

/// Life with bounded aging.
/// Equal to plain Conway Life when `max_generations == 1`.
#[derive(Clone, Copy, Debug)]
pub struct LifeAging {
    pub max_generations: u32,
}

impl LifeAging {
    pub const fn new(max_generations: u32) -> Self {
        Self { max_generations }
    }
}

impl Rule for LifeAging {
    type Cell = Age;

    fn name(&self) -> &'static str {
        "Life"
    }

    fn description(&self) -> &'static str {
        "B3/S23 - survivors age up to the cap"
    }

    fn evolve(&self, frame: &Frame<'_, Age>, x: u32, y: u32) -> Age {
        let neighbors = frame.count_live_neighbors(x, y);
        frame.at(x, y).evolve(neighbors, self.max_generations)
    }
}

/// Box blur diffusion.
/// Samples the four axis neighbors `distance` cells away; a sample that falls
/// off the grid reads the cell's own value instead.
#[derive(Clone, Copy, Debug)]
pub struct BoxBlur {
    params: BlurParams,
    drift: f32,
}

impl BoxBlur {
    pub fn new(params: BlurParams, pointer_active: bool) -> Self {
        Self {
            params,
            drift: params.drift_for(pointer_active),
        }
    }
}

impl Rule for BoxBlur {
    type Cell = Level;

    fn name(&self) -> &'static str {
        "Blur"
    }

    fn description(&self) -> &'static str {
        "Four-sample box blur, reflecting boundary"
    }

    fn evolve(&self, frame: &Frame<'_, Level>, x: u32, y: u32) -> Level {
        let d = self.params.distance as i64;
        let current = frame.at(x, y).value();
        let sample = |dx, dy| frame.offset(x, y, dx, dy).map_or(current, Level::value);

        let (up, down) = (sample(0, -d), sample(0, d));
        let (left, right) = (sample(-d, 0), sample(d, 0));
        // pairwise sums keep a uniform field exact
        let blurred = ((up + down) + (left + right)) * 0.25;

        let blended = current + (blurred - current) * self.params.ratio;
        Level::new(blended + self.drift)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::grid::{Grid, InitPolicy};

    #[test]
    fn test_life_aging_rules() {
        let mut grid = Grid::new(3, 3, InitPolicy::AllDead).unwrap();
        grid.set(1, 0, Age(1)).unwrap();
        grid.set(1, 1, Age(2)).unwrap();
        grid.set(1, 2, Age(1)).unwrap();

        let rule = LifeAging::new(3);
        let frame = grid.frame();
        // center survives with 2 neighbors and ages
        assert_eq!(rule.evolve(&frame, 1, 1), Age(3));
        // ends die with 1 neighbor
        assert_eq!(rule.evolve(&frame, 1, 0), Age::DEAD);
        // side cells are born with 3 neighbors
        assert_eq!(rule.evolve(&frame, 0, 1), Age::NEWBORN);
        // corners see only 2
        assert_eq!(rule.evolve(&frame, 0, 0), Age::DEAD);
    }

    #[test]
    fn test_blur_substitutes_own_value_off_grid() {
        let mut grid = Grid::new(5, 1, InitPolicy::AllDead).unwrap();
        grid.set(0, 0, Level::new(0.4)).unwrap();
        grid.set(2, 0, Level::new(0.8)).unwrap();

        let rule = BoxBlur::new(BlurParams { ratio: 1.0, ..BlurParams::default() }, false);
        // up, down and left are off grid -> 0.4 each; right is (2, 0) = 0.8
        let next = rule.evolve(&grid.frame(), 0, 0).value();
        assert!((next - 0.5).abs() < 1e-6, "got {}", next);
    }

    #[test]
    fn test_blur_blends_by_ratio() {
        let mut grid = Grid::new(5, 5, InitPolicy::AllDead).unwrap();
        grid.set(2, 2, Level::FULL).unwrap();

        let rule = BoxBlur::new(BlurParams::default(), false);
        // all four samples are 0.0: 1.0 + (0.0 - 1.0) * 0.8
        let next = rule.evolve(&grid.frame(), 2, 2).value();
        assert!((next - 0.2).abs() < 1e-6, "got {}", next);
    }

    #[test]
    fn test_blur_drift_is_clamped() {
        let grid = Grid::new(3, 3, InitPolicy::AllNeutral(Level::FULL)).unwrap();
        let params = BlurParams { drift: 0.5, ..BlurParams::default() };

        let up = BoxBlur::new(params, false).evolve(&grid.frame(), 1, 1);
        assert_eq!(up, Level::FULL);

        let down = BoxBlur::new(params, true).evolve(&grid.frame(), 1, 1);
        assert!((down.value() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_rule_kind_names_are_unique() {
        let names: Vec<_> = RuleKind::all().iter().map(|k| k.name()).collect();
        assert_eq!(names, vec!["Life", "Blur"]);
        assert_eq!(RuleKind::LifeAging.next(), RuleKind::BoxBlur);
    }
}
