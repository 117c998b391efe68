use super::cell::{Age, CellState, Level};
use super::error::Result;
use super::grid::{Grid, InitPolicy};
use super::rules::RuleKind;

/// Initial fill choice that applies to either cell domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Fill {
    /// Baseline everywhere
    Dead,
    /// Life: baseline. Blur: the 0.5 mid level.
    Neutral,
    #[default]
    Random,
}

/// Mid level the diffusion backdrop starts from
pub const NEUTRAL_LEVEL: f32 = 0.5;

impl Fill {
    fn for_life(self) -> InitPolicy<Age> {
        match self {
            Fill::Dead | Fill::Neutral => InitPolicy::AllDead,
            Fill::Random => InitPolicy::UniformRandom,
        }
    }

    fn for_blur(self) -> InitPolicy<Level> {
        match self {
            Fill::Dead => InitPolicy::AllDead,
            Fill::Neutral => InitPolicy::AllNeutral(Level::new(NEUTRAL_LEVEL)),
            Fill::Random => InitPolicy::UniformRandom,
        }
    }
}

/// The grid a session steps, tagged with its cell domain.
#[derive(Clone, Debug)]
pub enum Field {
    Life(Grid<Age>),
    Blur(Grid<Level>),
}

impl Field {
    /// Create a field whose cell domain matches `kind`
    pub fn new(kind: RuleKind, width: u32, height: u32, fill: Fill) -> Result<Self> {
        Ok(match kind {
            RuleKind::LifeAging => Field::Life(Grid::new(width, height, fill.for_life())?),
            RuleKind::BoxBlur => Field::Blur(Grid::new(width, height, fill.for_blur())?),
        })
    }

    /// Rule kind whose cells this field stores
    pub fn kind(&self) -> RuleKind {
        match self {
            Field::Life(_) => RuleKind::LifeAging,
            Field::Blur(_) => RuleKind::BoxBlur,
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            Field::Life(grid) => grid.dimensions(),
            Field::Blur(grid) => grid.dimensions(),
        }
    }

    /// Migrate to new extents (see `Grid::resize`)
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        match self {
            Field::Life(grid) => grid.resize(width, height),
            Field::Blur(grid) => grid.resize(width, height),
        }
    }

    /// Refill in place, keeping dimensions
    pub fn reinitialize(&mut self, fill: Fill) {
        match self {
            Field::Life(grid) => grid.reinitialize(fill.for_life()),
            Field::Blur(grid) => grid.reinitialize(fill.for_blur()),
        }
    }

    /// Refill uniformly at random
    pub fn randomize(&mut self) {
        self.reinitialize(Fill::Random);
    }

    pub fn clear(&mut self) {
        match self {
            Field::Life(grid) => grid.clear(),
            Field::Blur(grid) => grid.clear(),
        }
    }

    pub fn population(&self) -> usize {
        match self {
            Field::Life(grid) => grid.population(),
            Field::Blur(grid) => grid.population(),
        }
    }

    pub fn is_live_at(&self, x: u32, y: u32) -> Result<bool> {
        Ok(match self {
            Field::Life(grid) => grid.get(x, y)?.is_live(),
            Field::Blur(grid) => grid.get(x, y)?.is_live(),
        })
    }

    /// Display weight of a cell in `[0, 1]`: age over the cap for life cells,
    /// the level itself for diffusion cells
    pub fn shade_at(&self, x: u32, y: u32, max_generations: u32) -> Result<f32> {
        Ok(match self {
            Field::Life(grid) => {
                let age = grid.get(x, y)?.0.min(max_generations.max(1));
                age as f32 / max_generations.max(1) as f32
            }
            Field::Blur(grid) => grid.get(x, y)?.value(),
        })
    }
}
