use super::cell::Age;
use super::error::{EngineError, Result};
use super::grid::Grid;

/// Represents a pattern that can be stamped onto a life grid
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: u32,
    pub height: u32,
    pub cells: Vec<(u32, u32)>, // Relative coordinates of live cells
}

impl Pattern {
    /// Create a new pattern from live cell coordinates
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(u32, u32)>) -> Self {
        let width = cells.iter().map(|(x, _)| *x).max().unwrap_or(0) + 1;
        let height = cells.iter().map(|(_, y)| *y).max().unwrap_or(0) + 1;
        Self { name, description, width, height, cells }
    }

    /// Stamp newborn cells with the pattern's top-left corner at `(x, y)`.
    /// Every target cell is checked first; nothing is written unless all fit.
    pub fn place_on(&self, grid: &mut Grid<Age>, x: u32, y: u32) -> Result<()> {
        let (width, height) = grid.dimensions();
        let targets = self
            .cells
            .iter()
            .map(|&(dx, dy)| match (x.checked_add(dx), y.checked_add(dy)) {
                (Some(tx), Some(ty)) if tx < width && ty < height => Ok((tx, ty)),
                _ => Err(EngineError::OutOfBounds {
                    x: x.saturating_add(dx),
                    y: y.saturating_add(dy),
                    width,
                    height,
                }),
            })
            .collect::<Result<Vec<_>>>()?;

        for (tx, ty) in targets {
            grid.set(tx, ty, Age::NEWBORN)?;
        }
        Ok(())
    }

    /// Stamp the pattern centered on `(cx, cy)`, shifted inward when it would
    /// cross an edge. Fails only when the pattern is larger than the grid.
    pub fn place_centered(&self, grid: &mut Grid<Age>, cx: u32, cy: u32) -> Result<()> {
        let (width, height) = grid.dimensions();
        let x = cx
            .saturating_sub(self.width / 2)
            .min(width.saturating_sub(self.width));
        let y = cy
            .saturating_sub(self.height / 2)
            .min(height.saturating_sub(self.height));
        self.place_on(grid, x, y)
    }
}

/// Small library of classic Life patterns
pub mod presets {
    use super::*;

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new("Block", "Still life", vec![(0, 0), (1, 0), (0, 1), (1, 1)])
    }

    /// Blinker - period 2 oscillator (vertical phase)
    pub fn blinker() -> Pattern {
        Pattern::new("Blinker", "Oscillator (period 2)", vec![(1, 0), (1, 1), (1, 2)])
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (1, 0), (2, 0), (3, 0),
                (0, 1), (1, 1), (2, 1),
            ],
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (1, 0),
                (0, 1),
                (3, 2),
                (2, 3), (3, 3),
            ],
        )
    }

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2),
            ],
        )
    }

    /// R-pentomino - classic methuselah
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah - stabilizes at gen 1103",
            vec![
                (1, 0), (2, 0),
                (0, 1), (1, 1),
                (1, 2),
            ],
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![block(), blinker(), toad(), beacon(), glider(), r_pentomino()]
    }
}
