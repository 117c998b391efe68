use rand::Rng;

/// State stored in one grid cell.
/// Each rule kind has its own cell type so a grid can never mix domains.
pub trait CellState: Copy + PartialEq + Send + Sync + std::fmt::Debug + 'static {
    /// Dead / neutral value used for cleared and newly exposed cells
    const BASELINE: Self;

    /// Whether the cell counts as live for neighbor counting
    fn is_live(self) -> bool;

    /// Value drawn by the uniform-random fill policy
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self;
}

/// Life cell with bounded aging.
/// `0` is dead, `1..=max_generations` is alive with that age.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Age(pub u32);

impl Age {
    pub const DEAD: Age = Age(0);
    pub const NEWBORN: Age = Age(1);

    /// Check if the cell is currently alive (any age)
    pub const fn is_alive(self) -> bool {
        self.0 >= 1
    }

    /// Pointer press semantics: dead cells are born, live cells die
    pub const fn toggle(self) -> Self {
        if self.is_alive() { Age::DEAD } else { Age::NEWBORN }
    }

    /// Pure function to compute the next state:
    /// 1. Dead cell with exactly 3 live neighbors is born at age 1
    /// 2. Live cell with 2-3 neighbors survives and ages, capped at `max_generations`
    /// 3. All other cases result in death
    pub fn evolve(self, neighbors: u8, max_generations: u32) -> Self {
        match (self.is_alive(), neighbors) {
            (true, 2 | 3) => Age(self.0.saturating_add(1).min(max_generations)),
            (false, 3) => Age::NEWBORN,
            _ => Age::DEAD,
        }
    }
}

impl CellState for Age {
    const BASELINE: Self = Age::DEAD;

    fn is_live(self) -> bool {
        self.is_alive()
    }

    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random_bool(0.5) { Age::NEWBORN } else { Age::DEAD }
    }
}

/// Diffusion cell, a real value kept inside `[0.0, 1.0]`.
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug, Default)]
pub struct Level(f32);

impl Level {
    pub const ZERO: Level = Level(0.0);
    pub const FULL: Level = Level(1.0);

    /// Build a level, clamping into `[0, 1]`. NaN maps to 0.
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            Level::ZERO
        } else {
            Level(value.clamp(0.0, 1.0))
        }
    }

    pub const fn value(self) -> f32 {
        self.0
    }
}

impl CellState for Level {
    const BASELINE: Self = Level::ZERO;

    fn is_live(self) -> bool {
        self.0 > 0.0
    }

    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Level::new(rng.random::<f32>())
    }
}
