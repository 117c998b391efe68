mod button;

pub use button::Button;

use macroquad::prelude::screen_width;

pub const PANEL_WIDTH: f32 = 200.0;
pub const BUTTON_HEIGHT: f32 = 32.0;
const BUTTON_GAP: f32 = 6.0;

/// Step interval change per key press, in ms
pub const INTERVAL_STEP_MS: i64 = 10;
/// Cell size change per key press, in pixels
pub const CELL_SIZE_STEP: f32 = 1.0;

/// Every control the panel and keyboard can trigger
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    TogglePause,
    StepOnce,
    Clear,
    Randomize,
    CycleRule,
    CycleMirror,
    CycleShade,
    CycleShape,
    ToggleGridLines,
    ToggleRespawn,
    RandomizeColors,
    TogglePanel,
    Faster,
    Slower,
    MoreGenerations,
    FewerGenerations,
    LargerCells,
    SmallerCells,
    /// Stamp the preset with this index under the cursor
    Stamp(usize),
}

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Whether a screen point is covered by the open panel
pub fn over_panel(pos: (f32, f32), panel_shown: bool) -> bool {
    panel_shown && pos.0 >= panel_x()
}

/// Create panel buttons with standard layout
pub fn create_buttons() -> Vec<Button> {
    let px = panel_x() + 10.0;
    let width = PANEL_WIDTH - 20.0;
    [
        ("Play/Pause", Action::TogglePause),
        ("Step", Action::StepOnce),
        ("Clear", Action::Clear),
        ("Random", Action::Randomize),
        ("Rule", Action::CycleRule),
        ("Mirror", Action::CycleMirror),
        ("Colors", Action::RandomizeColors),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (label, action))| {
        let y = 20.0 + i as f32 * (BUTTON_HEIGHT + BUTTON_GAP);
        Button::new(px, y, width, BUTTON_HEIGHT, label, action)
    })
    .collect()
}

/// Y coordinate below the last button, where the status text starts
pub fn status_top(button_count: usize) -> f32 {
    20.0 + button_count as f32 * (BUTTON_HEIGHT + BUTTON_GAP) + 10.0
}
