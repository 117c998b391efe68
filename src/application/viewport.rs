/// Smallest and largest cell edge, in pixels
pub const MIN_CELL_SIZE: f32 = 1.0;
pub const MAX_CELL_SIZE: f32 = 100.0;
pub const DEFAULT_CELL_SIZE: f32 = 15.0;

/// Viewport maps between screen pixels and grid cells for a fixed cell size.
/// The grid always covers the whole screen; its extents follow the cell size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    cell_size: f32,
}

impl Viewport {
    pub fn new(cell_size: f32) -> Self {
        Self {
            cell_size: clamp_cell_size(cell_size),
        }
    }

    pub const fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Change the cell size, clamped to `[1, 100]`
    pub fn set_cell_size(&mut self, cell_size: f32) {
        self.cell_size = clamp_cell_size(cell_size);
    }

    /// Grid extents that fit a screen: `floor(extent / cell_size)` per axis.
    /// Can be zero when the screen is smaller than one cell.
    pub fn grid_dimensions(&self, screen_width: f32, screen_height: f32) -> (u32, u32) {
        let w = (screen_width.max(0.0) / self.cell_size).floor() as u32;
        let h = (screen_height.max(0.0) / self.cell_size).floor() as u32;
        (w, h)
    }

    /// Convert screen coordinates to the grid cell under them, if any
    pub fn screen_to_grid(&self, screen_x: f32, screen_y: f32, grid: (u32, u32)) -> Option<(u32, u32)> {
        if screen_x < 0.0 || screen_y < 0.0 {
            return None;
        }
        let gx = (screen_x / self.cell_size).floor() as u32;
        let gy = (screen_y / self.cell_size).floor() as u32;
        (gx < grid.0 && gy < grid.1).then_some((gx, gy))
    }

    /// Convert grid coordinates to the top-left screen corner of the cell
    pub fn grid_to_screen(&self, grid_x: u32, grid_y: u32) -> (f32, f32) {
        (grid_x as f32 * self.cell_size, grid_y as f32 * self.cell_size)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(DEFAULT_CELL_SIZE)
    }
}

fn clamp_cell_size(cell_size: f32) -> f32 {
    if cell_size.is_nan() {
        DEFAULT_CELL_SIZE
    } else {
        cell_size.clamp(MIN_CELL_SIZE, MAX_CELL_SIZE)
    }
}
