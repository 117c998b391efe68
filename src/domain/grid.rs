use super::cell::{Age, CellState, Level};
use super::error::{EngineError, Result};
use rand::Rng;

/// How the active buffer is filled when a grid is created or reinitialized.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InitPolicy<C> {
    /// Every cell at the rule kind's baseline
    AllDead,
    /// Every cell at the given value
    AllNeutral(C),
    /// Every cell drawn independently from `CellState::random`
    UniformRandom,
}

/// Grid owns the two same-shaped cell buffers of a bounded (non-toroidal) world.
///
/// `buffers[active]` holds the latest generation; the other one is the shadow
/// a step writes into before `swap_buffers` flips the roles.
#[derive(Clone, Debug)]
pub struct Grid<C> {
    width: u32,
    height: u32,
    buffers: [Vec<C>; 2],
    active: usize,
}

impl<C: CellState> Grid<C> {
    /// Create a grid, filling the active buffer per `policy`
    pub fn new(width: u32, height: u32, policy: InitPolicy<C>) -> Result<Self> {
        Self::new_with_rng(width, height, policy, &mut rand::rng())
    }

    /// Same as `new` with a caller-supplied random source
    pub fn new_with_rng<R: Rng + ?Sized>(
        width: u32,
        height: u32,
        policy: InitPolicy<C>,
        rng: &mut R,
    ) -> Result<Self> {
        let len = checked_len(width, height)?;
        let mut grid = Self {
            width,
            height,
            buffers: [vec![C::BASELINE; len], vec![C::BASELINE; len]],
            active: 0,
        };
        grid.fill(policy, rng);
        Ok(grid)
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Convert 2D coordinates to 1D index, or report them out of bounds
    fn index(&self, x: u32, y: u32) -> Result<usize> {
        if x < self.width && y < self.height {
            Ok(y as usize * self.width as usize + x as usize)
        } else {
            Err(EngineError::OutOfBounds { x, y, width: self.width, height: self.height })
        }
    }

    /// Read a cell of the active buffer
    pub fn get(&self, x: u32, y: u32) -> Result<C> {
        let idx = self.index(x, y)?;
        Ok(self.buffers[self.active][idx])
    }

    /// Write a cell of the active buffer
    pub fn set(&mut self, x: u32, y: u32, value: C) -> Result<()> {
        let idx = self.index(x, y)?;
        self.buffers[self.active][idx] = value;
        Ok(())
    }

    /// Change extents, keeping every cell of the overlapping region.
    /// Newly exposed cells start at the baseline; the shadow is cleared.
    pub fn resize(&mut self, new_width: u32, new_height: u32) -> Result<()> {
        let len = checked_len(new_width, new_height)?;
        let (old_width, old_height) = self.dimensions();
        let keep_w = old_width.min(new_width) as usize;
        let keep_h = old_height.min(new_height) as usize;

        let old = &self.buffers[self.active];
        let mut migrated = vec![C::BASELINE; len];
        for y in 0..keep_h {
            let src = y * old_width as usize;
            let dst = y * new_width as usize;
            migrated[dst..dst + keep_w].copy_from_slice(&old[src..src + keep_w]);
        }

        log::debug!(
            "resized grid {}x{} -> {}x{} ({}x{} cells kept)",
            old_width, old_height, new_width, new_height, keep_w, keep_h
        );

        self.width = new_width;
        self.height = new_height;
        self.buffers = [migrated, vec![C::BASELINE; len]];
        self.active = 0;
        Ok(())
    }

    /// Exchange the roles of active and shadow without touching cell data
    pub fn swap_buffers(&mut self) {
        self.active ^= 1;
    }

    /// Refill the active buffer in place with a new policy
    pub fn reinitialize(&mut self, policy: InitPolicy<C>) {
        self.fill(policy, &mut rand::rng());
    }

    /// Clear all cells to the baseline
    pub fn clear(&mut self) {
        self.buffers[self.active].iter_mut().for_each(|cell| *cell = C::BASELINE);
    }

    fn fill<R: Rng + ?Sized>(&mut self, policy: InitPolicy<C>, rng: &mut R) {
        let cells = &mut self.buffers[self.active];
        match policy {
            InitPolicy::AllDead => cells.iter_mut().for_each(|c| *c = C::BASELINE),
            InitPolicy::AllNeutral(value) => cells.iter_mut().for_each(|c| *c = value),
            InitPolicy::UniformRandom => cells.iter_mut().for_each(|c| *c = C::random(rng)),
        }
        self.buffers[self.active ^ 1].iter_mut().for_each(|c| *c = C::BASELINE);
    }

    /// Count live cells in the active buffer
    pub fn population(&self) -> usize {
        self.buffers[self.active].iter().filter(|c| c.is_live()).count()
    }

    /// Iterate over all active cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (u32, u32, C)> + '_ {
        let width = self.width as usize;
        self.buffers[self.active]
            .iter()
            .enumerate()
            .map(move |(i, &cell)| ((i % width) as u32, (i / width) as u32, cell))
    }

    /// Read-only view of the active buffer
    pub fn frame(&self) -> Frame<'_, C> {
        Frame {
            cells: &self.buffers[self.active],
            width: self.width,
            height: self.height,
        }
    }

    /// Split into the active view and the writable shadow for one step pass.
    /// The borrow checker keeps the pass from reading what it writes.
    pub(crate) fn split_for_step(&mut self) -> (Frame<'_, C>, &mut [C]) {
        let (width, height, current) = (self.width, self.height, self.active);
        let [first, second] = &mut self.buffers;
        let (active, shadow) = if current == 0 { (first, second) } else { (second, first) };
        (Frame { cells: active.as_slice(), width, height }, shadow.as_mut_slice())
    }
}

impl Grid<Age> {
    /// Pointer press: dead cells are born, live cells die
    pub fn toggle(&mut self, x: u32, y: u32) -> Result<Age> {
        let next = self.get(x, y)?.toggle();
        self.set(x, y, next)?;
        Ok(next)
    }
}

impl Grid<Level> {
    /// Pointer hover: full level while pressed, empty otherwise
    pub fn paint(&mut self, x: u32, y: u32, pressed: bool) -> Result<()> {
        self.set(x, y, if pressed { Level::FULL } else { Level::ZERO })
    }
}

fn checked_len(width: u32, height: u32) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(EngineError::InvalidDimensions { width, height });
    }
    Ok(width as usize * height as usize)
}

/// Borrowed view of one buffer, used by rules while a step is in flight.
#[derive(Clone, Copy)]
pub struct Frame<'a, C> {
    cells: &'a [C],
    width: u32,
    height: u32,
}

impl<'a, C: CellState> Frame<'a, C> {
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Cell at an in-bounds coordinate. Callers iterate the frame's own extents.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the frame. Use `offset(x, y, 0, 0)` for
    /// a checked read.
    #[inline]
    pub fn at(&self, x: u32, y: u32) -> C {
        assert!(
            x < self.width && y < self.height,
            "({}, {}) outside {}x{} frame",
            x, y, self.width, self.height
        );
        self.cells[y as usize * self.width as usize + x as usize]
    }

    /// Cell at `(x + dx, y + dy)`, or `None` when that falls outside the grid
    #[inline]
    pub fn offset(&self, x: u32, y: u32, dx: i64, dy: i64) -> Option<C> {
        let nx = x as i64 + dx;
        let ny = y as i64 + dy;
        if nx < 0 || ny < 0 || nx >= self.width as i64 || ny >= self.height as i64 {
            return None;
        }
        Some(self.at(nx as u32, ny as u32))
    }

    /// Count live cells among the up-to-8 surrounding cells.
    /// Neighbors outside the grid are skipped, never wrapped.
    pub fn count_live_neighbors(&self, x: u32, y: u32) -> u8 {
        (-1..=1)
            .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .filter_map(|(dx, dy)| self.offset(x, y, dx, dy))
            .filter(|cell| cell.is_live())
            .count() as u8
    }
}
