mod palette;

pub use palette::{CellShape, Palette, ShadeMode};

use macroquad::prelude::*;

use crate::application::Session;
use crate::domain::{Field, presets};
use crate::ui::{Button, PANEL_WIDTH, panel_x, status_top};

/// Display-only options; none of these affect the simulation
#[derive(Clone, Debug)]
pub struct ViewOptions {
    pub palette: Palette,
    pub shade_mode: ShadeMode,
    pub cell_shape: CellShape,
    pub show_grid_lines: bool,
    pub show_panel: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            shade_mode: ShadeMode::default(),
            cell_shape: CellShape::default(),
            show_grid_lines: true,
            show_panel: true,
        }
    }
}

/// Format large numbers with K/M suffixes
fn format_number(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

/// Draw every display cell, reading the stored cell through the mirror
pub fn draw_field(session: &Session, view: &ViewOptions) {
    let (width, height) = session.field().dimensions();
    let viewport = session.viewport();
    let size = viewport.cell_size();
    let max_generations = session.config().max_generations;

    for y in 0..height {
        for x in 0..width {
            let (sx, sy) = session.stored_cell(x, y);
            let color = match session.field() {
                Field::Life(grid) => grid
                    .get(sx, sy)
                    .map(|age| view.palette.life_color(view.shade_mode, age.0, max_generations)),
                Field::Blur(grid) => grid
                    .get(sx, sy)
                    .map(|level| view.palette.level_color(level.value())),
            };
            let Ok(color) = color else { continue };
            let (px, py) = viewport.grid_to_screen(x, y);
            match view.cell_shape {
                CellShape::Square => draw_rectangle(px, py, size, size, color),
                CellShape::Circle => {
                    let half = size / 2.0;
                    draw_circle(px + half, py + half, CellShape::circle_radius(size), color);
                }
            }
        }
    }

    if view.show_grid_lines {
        draw_grid_lines(width, height, size, view.palette.grid);
    }
}

/// Overlay lines between cells across the whole screen
fn draw_grid_lines(width: u32, height: u32, cell_size: f32, color: Color) {
    for i in 1..width {
        let x = i as f32 * cell_size;
        draw_line(x, 0.0, x, screen_height(), 1.0, color);
    }
    for j in 1..height {
        let y = j as f32 * cell_size;
        draw_line(0.0, y, screen_width(), y, 1.0, color);
    }
}

/// Draw control panel background
fn draw_panel_background() {
    draw_rectangle(
        panel_x(),
        0.0,
        PANEL_WIDTH,
        screen_height(),
        Color::from_rgba(30, 30, 30, 230),
    );
}

/// Draw the control panel with buttons, settings and help
pub fn draw_controls(session: &Session, view: &ViewOptions, buttons: &[Button], mouse_pos: (f32, f32)) {
    draw_panel_background();
    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let px = panel_x() + 10.0;
    let config = session.config();
    let (gw, gh) = session.field().dimensions();
    let value_color = Color::from_rgba(180, 180, 180, 255);

    let status = if session.is_running() { "Running" } else { "Paused" };
    let status_color = if session.is_running() {
        Color::from_rgba(0, 255, 0, 255)
    } else {
        Color::from_rgba(255, 165, 0, 255)
    };

    let lines = [
        (format!("{} | {}", config.rule_kind.name(), status), status_color),
        (format!("Generation: {}", session.generation()), WHITE),
        (format!("Update delay: {} ms", config.step_interval_ms), value_color),
        (format!("Cell age: {}", config.max_generations), value_color),
        (format!("Mirror: {}", config.mirror_mode.name()), value_color),
        (format!("Shading: {}", view.shade_mode.name()), value_color),
        (format!("Shape: {}", view.cell_shape.name()), value_color),
        (format!("Cell size: {:.0}", session.viewport().cell_size()), value_color),
        (format!("Grid: {}x{} ({})", gw, gh, format_number(gw as usize * gh as usize)), value_color),
        (format!("Live: {}", format_number(session.field().population())), value_color),
        (
            format!("Respawn on resize: {}", if session.respawn_on_resize { "on" } else { "off" }),
            value_color,
        ),
        (format!("Step: {:.2} ms | FPS: {}", session.last_step_time_ms, get_fps()), GRAY),
    ];

    let mut y = status_top(buttons.len());
    for (text, color) in lines.iter() {
        draw_text(text, px, y, 16.0, *color);
        y += 18.0;
    }

    y += 8.0;
    let help = [
        "Space: play/pause  N: step",
        "C: clear  R: random",
        "K: rule  M: mirror  S: shading",
        "Up/Down: delay  Left/Right: age",
        "[ ]: cell size  G: grid lines",
        "O: cell shape",
        "T: respawn  P: colors  H: panel",
    ];
    for text in help {
        draw_text(text, px, y, 13.0, GRAY);
        y += 15.0;
    }

    let stamps = presets::all_patterns()
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{}:{}", i + 1, p.name))
        .collect::<Vec<_>>();
    for chunk in stamps.chunks(2) {
        draw_text(&chunk.join("  "), px, y, 13.0, GRAY);
        y += 15.0;
    }
}
