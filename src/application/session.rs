use std::time::Instant;

use crate::domain::{
    Field, Fill, MirrorMode, Pattern, Result, RuleConfig, RuleEngine, RuleKind, Strategy,
    clamp_generations, mirror,
};

use super::lifecycle::{LifecycleController, RunState};
use super::viewport::Viewport;

/// Session orchestrates the simulation.
/// This is the application layer that ties the field, its configuration,
/// the engine and the cadence together for the driver loop.
pub struct Session {
    field: Field,
    config: RuleConfig,
    engine: RuleEngine,
    lifecycle: LifecycleController,
    viewport: Viewport,
    /// Fill used when the field is created or respawned
    pub fill: Fill,
    /// Reinitialize instead of migrating when the extents change
    pub respawn_on_resize: bool,
    pointer_active: bool,
    last_pressed: Option<(u32, u32)>,
    /// Wall time of the most recent step
    pub last_step_time_ms: f32,
}

impl Session {
    /// Create a running session over a `width` x `height` field
    pub fn new(width: u32, height: u32, config: RuleConfig, fill: Fill, now: Instant) -> Result<Self> {
        let field = Field::new(config.rule_kind, width, height, fill)?;
        log::info!("new {}x{} {} session", width, height, config.rule_kind.name());
        Ok(Self {
            field,
            lifecycle: LifecycleController::new(config.step_interval_ms, now),
            config,
            engine: RuleEngine::default(),
            viewport: Viewport::default(),
            fill,
            respawn_on_resize: false,
            pointer_active: false,
            last_pressed: None,
            last_step_time_ms: 0.0,
        })
    }

    /// Create a session whose field covers a screen at the given cell size
    pub fn for_screen(
        screen_width: f32,
        screen_height: f32,
        viewport: Viewport,
        config: RuleConfig,
        fill: Fill,
        now: Instant,
    ) -> Result<Self> {
        let (width, height) = viewport.grid_dimensions(screen_width, screen_height);
        let mut session = Self::new(width, height, config, fill, now)?;
        session.viewport = viewport;
        Ok(session)
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn lifecycle(&self) -> &LifecycleController {
        &self.lifecycle
    }

    pub fn generation(&self) -> u64 {
        self.lifecycle.generation()
    }

    pub fn is_running(&self) -> bool {
        self.lifecycle.state() == RunState::Running
    }

    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.engine.set_strategy(strategy);
    }

    /// Update simulation for one frame.
    /// Step errors are logged and swallowed so the session keeps ticking.
    pub fn tick(&mut self, now: Instant) -> bool {
        let stepped = self.lifecycle.tick(now, || {
            let start = Instant::now();
            let result = self.engine.step_with_pointer(&mut self.field, &self.config, self.pointer_active);
            self.last_step_time_ms = start.elapsed().as_secs_f32() * 1000.0;
            result
        });
        match stepped {
            Ok(stepped) => stepped,
            Err(err) => {
                log::warn!("step skipped: {}", err);
                false
            }
        }
    }

    /// Advance one generation while paused
    pub fn step_once(&mut self, now: Instant) -> bool {
        let stepped = self.lifecycle.step_once(now, || {
            self.engine.step_with_pointer(&mut self.field, &self.config, self.pointer_active)
        });
        stepped.unwrap_or_else(|err| {
            log::warn!("step-once skipped: {}", err);
            false
        })
    }

    pub fn pause(&mut self) {
        self.lifecycle.pause();
    }

    pub fn resume(&mut self) {
        self.lifecycle.resume();
    }

    pub fn toggle_running(&mut self) {
        self.lifecycle.toggle();
    }

    /// Set the step interval (clamped to `[1, 750]` ms)
    pub fn set_step_interval_ms(&mut self, step_interval_ms: u32, now: Instant) {
        self.config = self.config.clone().with_step_interval_ms(step_interval_ms);
        self.lifecycle.set_step_interval_ms(self.config.step_interval_ms, now);
    }

    /// Adjust the step interval by `delta` ms
    pub fn adjust_step_interval(&mut self, delta: i64, now: Instant) {
        let next = (self.config.step_interval_ms as i64 + delta).clamp(0, u32::MAX as i64) as u32;
        self.set_step_interval_ms(next, now);
    }

    /// Set the age cap (clamped to `[1, 64]`)
    pub fn set_max_generations(&mut self, max_generations: u32) {
        self.config.max_generations = clamp_generations(max_generations);
    }

    pub fn adjust_max_generations(&mut self, delta: i64) {
        let next = (self.config.max_generations as i64 + delta).clamp(0, u32::MAX as i64) as u32;
        self.set_max_generations(next);
    }

    pub fn set_mirror_mode(&mut self, mode: MirrorMode) {
        self.config.mirror_mode = mode;
        self.last_pressed = None;
    }

    pub fn cycle_mirror_mode(&mut self) {
        self.set_mirror_mode(self.config.mirror_mode.next());
    }

    /// Switch rules. The field is replaced wholesale since the cell domain changes.
    pub fn set_rule_kind(&mut self, kind: RuleKind) -> Result<()> {
        if kind == self.config.rule_kind && self.field.kind() == kind {
            return Ok(());
        }
        let (width, height) = self.field.dimensions();
        self.field = Field::new(kind, width, height, self.fill)?;
        self.config.rule_kind = kind;
        self.lifecycle.reset_generation();
        self.last_pressed = None;
        log::info!("switched to {} rule", kind.name());
        Ok(())
    }

    pub fn cycle_rule_kind(&mut self) -> Result<()> {
        self.set_rule_kind(self.config.rule_kind.next())
    }

    /// Change extents: migrate the overlap, or respawn when configured to
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        if (width, height) == self.field.dimensions() {
            return Ok(());
        }
        if self.respawn_on_resize {
            self.field = Field::new(self.field.kind(), width, height, self.fill)?;
            self.lifecycle.reset_generation();
            log::info!("respawned field at {}x{}", width, height);
        } else {
            self.field.resize(width, height)?;
        }
        self.last_pressed = None;
        Ok(())
    }

    /// Re-derive extents after the screen changed size
    pub fn resize_to_screen(&mut self, screen_width: f32, screen_height: f32) -> Result<()> {
        let (width, height) = self.viewport.grid_dimensions(screen_width, screen_height);
        self.resize(width, height)
    }

    /// Change the cell size and re-derive extents
    pub fn set_cell_size(&mut self, cell_size: f32, screen_width: f32, screen_height: f32) -> Result<()> {
        self.viewport.set_cell_size(cell_size);
        self.resize_to_screen(screen_width, screen_height)
    }

    /// Clear all cells and reset the generation counter
    pub fn clear(&mut self) {
        self.field.clear();
        self.lifecycle.reset_generation();
    }

    /// Refill with the session's fill policy
    pub fn reinitialize(&mut self) {
        self.field.reinitialize(self.fill);
        self.lifecycle.reset_generation();
    }

    /// Refill uniformly at random
    pub fn randomize(&mut self) {
        self.field.randomize();
        self.lifecycle.reset_generation();
    }

    /// Stored cell shown at a display cell under the current mirror mode
    pub fn stored_cell(&self, x: u32, y: u32) -> (u32, u32) {
        let (width, height) = self.field.dimensions();
        mirror(x, y, width, height, self.config.mirror_mode)
    }

    /// Display weight in `[0, 1]` of what is drawn at a display cell
    pub fn shade_at_display(&self, x: u32, y: u32) -> Result<f32> {
        let (sx, sy) = self.stored_cell(x, y);
        self.field.shade_at(sx, sy, self.config.max_generations)
    }

    /// Pointer pressed on a display cell: toggles life cells, fills blur cells
    pub fn press(&mut self, x: u32, y: u32) -> Result<()> {
        let (sx, sy) = self.stored_cell(x, y);
        self.pointer_active = true;
        self.last_pressed = Some((sx, sy));
        match &mut self.field {
            Field::Life(grid) => grid.toggle(sx, sy).map(|_| ()),
            Field::Blur(grid) => grid.paint(sx, sy, true),
        }
    }

    /// Pointer dragged onto a display cell. Only acts once per stored cell.
    pub fn drag(&mut self, x: u32, y: u32) -> Result<()> {
        if self.last_pressed == Some(self.stored_cell(x, y)) {
            return Ok(());
        }
        self.press(x, y)
    }

    pub fn release(&mut self) {
        self.pointer_active = false;
    }

    pub fn pointer_active(&self) -> bool {
        self.pointer_active
    }

    /// Pointer hovering over a display cell. Blur fields track the cursor,
    /// filling while pressed and emptying otherwise; life fields ignore hover.
    pub fn hover(&mut self, x: u32, y: u32, pressed: bool) -> Result<()> {
        let (sx, sy) = self.stored_cell(x, y);
        self.pointer_active = pressed;
        match &mut self.field {
            Field::Life(_) => Ok(()),
            Field::Blur(grid) => grid.paint(sx, sy, pressed),
        }
    }

    /// Stamp a pattern centered on a display cell (life fields only)
    pub fn stamp(&mut self, pattern: &Pattern, x: u32, y: u32) -> Result<()> {
        let (sx, sy) = self.stored_cell(x, y);
        match &mut self.field {
            Field::Life(grid) => pattern.place_centered(grid, sx, sy),
            Field::Blur(_) => {
                log::debug!("ignoring {} stamp on a blur field", pattern.name);
                Ok(())
            }
        }
    }
}
