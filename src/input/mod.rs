use std::time::Instant;

use macroquad::prelude::{
    KeyCode, MouseButton, is_key_pressed, is_mouse_button_down, is_mouse_button_pressed,
    is_mouse_button_released,
};

use crate::application::Session;
use crate::domain::{RuleKind, presets};
use crate::rendering::ViewOptions;
use crate::ui::{Action, Button, CELL_SIZE_STEP, INTERVAL_STEP_MS, over_panel};

/// Grid cell under the cursor, if the cursor is over the field
fn cell_under(session: &Session, view: &ViewOptions, mouse_pos: (f32, f32)) -> Option<(u32, u32)> {
    if over_panel(mouse_pos, view.show_panel) {
        return None;
    }
    session
        .viewport()
        .screen_to_grid(mouse_pos.0, mouse_pos.1, session.field().dimensions())
}

/// Pointer input on the field. Life fields toggle on press and on each new
/// cell while dragging; blur fields follow the cursor.
pub fn handle_pointer(session: &mut Session, view: &ViewOptions, mouse_pos: (f32, f32)) {
    if is_mouse_button_released(MouseButton::Left) {
        session.release();
    }
    let Some((gx, gy)) = cell_under(session, view, mouse_pos) else {
        return;
    };

    let result = match session.field().kind() {
        RuleKind::LifeAging if is_mouse_button_pressed(MouseButton::Left) => session.press(gx, gy),
        RuleKind::LifeAging if is_mouse_button_down(MouseButton::Left) => session.drag(gx, gy),
        RuleKind::LifeAging => Ok(()),
        RuleKind::BoxBlur => session.hover(gx, gy, is_mouse_button_down(MouseButton::Left)),
    };
    if let Err(err) = result {
        log::warn!("pointer input ignored: {}", err);
    }
}

/// Apply one control action
pub fn apply_action(
    action: Action,
    session: &mut Session,
    view: &mut ViewOptions,
    mouse_pos: (f32, f32),
    now: Instant,
    screen: (f32, f32),
) {
    let result = match action {
        Action::TogglePause => {
            session.toggle_running();
            Ok(())
        }
        Action::StepOnce => {
            session.step_once(now);
            Ok(())
        }
        Action::Clear => {
            session.clear();
            Ok(())
        }
        Action::Randomize => {
            session.randomize();
            Ok(())
        }
        Action::CycleRule => session.cycle_rule_kind(),
        Action::CycleMirror => {
            session.cycle_mirror_mode();
            Ok(())
        }
        Action::CycleShade => {
            view.shade_mode = view.shade_mode.next();
            Ok(())
        }
        Action::CycleShape => {
            view.cell_shape = view.cell_shape.next();
            Ok(())
        }
        Action::ToggleGridLines => {
            view.show_grid_lines = !view.show_grid_lines;
            Ok(())
        }
        Action::ToggleRespawn => {
            session.respawn_on_resize = !session.respawn_on_resize;
            Ok(())
        }
        Action::RandomizeColors => {
            view.palette = view.palette.randomized(&mut rand::rng());
            Ok(())
        }
        Action::TogglePanel => {
            view.show_panel = !view.show_panel;
            Ok(())
        }
        Action::Faster => {
            session.adjust_step_interval(-INTERVAL_STEP_MS, now);
            Ok(())
        }
        Action::Slower => {
            session.adjust_step_interval(INTERVAL_STEP_MS, now);
            Ok(())
        }
        Action::MoreGenerations => {
            session.adjust_max_generations(1);
            Ok(())
        }
        Action::FewerGenerations => {
            session.adjust_max_generations(-1);
            Ok(())
        }
        Action::LargerCells => {
            let size = session.viewport().cell_size() + CELL_SIZE_STEP;
            session.set_cell_size(size, screen.0, screen.1)
        }
        Action::SmallerCells => {
            let size = session.viewport().cell_size() - CELL_SIZE_STEP;
            session.set_cell_size(size, screen.0, screen.1)
        }
        Action::Stamp(index) => match (presets::all_patterns().get(index), cell_under(session, view, mouse_pos)) {
            (Some(pattern), Some((gx, gy))) => session.stamp(pattern, gx, gy),
            _ => Ok(()),
        },
    };
    if let Err(err) = result {
        log::warn!("{:?} ignored: {}", action, err);
    }
}

/// Process keyboard shortcuts
pub fn process_keyboard_input(
    session: &mut Session,
    view: &mut ViewOptions,
    mouse_pos: (f32, f32),
    now: Instant,
    screen: (f32, f32),
) {
    let bindings: [(KeyCode, Action); 24] = [
        (KeyCode::Space, Action::TogglePause),
        (KeyCode::N, Action::StepOnce),
        (KeyCode::C, Action::Clear),
        (KeyCode::R, Action::Randomize),
        (KeyCode::K, Action::CycleRule),
        (KeyCode::M, Action::CycleMirror),
        (KeyCode::S, Action::CycleShade),
        (KeyCode::O, Action::CycleShape),
        (KeyCode::G, Action::ToggleGridLines),
        (KeyCode::T, Action::ToggleRespawn),
        (KeyCode::P, Action::RandomizeColors),
        (KeyCode::H, Action::TogglePanel),
        (KeyCode::Up, Action::Faster),
        (KeyCode::Down, Action::Slower),
        (KeyCode::Right, Action::MoreGenerations),
        (KeyCode::Left, Action::FewerGenerations),
        (KeyCode::RightBracket, Action::LargerCells),
        (KeyCode::LeftBracket, Action::SmallerCells),
        (KeyCode::Key1, Action::Stamp(0)),
        (KeyCode::Key2, Action::Stamp(1)),
        (KeyCode::Key3, Action::Stamp(2)),
        (KeyCode::Key4, Action::Stamp(3)),
        (KeyCode::Key5, Action::Stamp(4)),
        (KeyCode::Key6, Action::Stamp(5)),
    ];

    for (key, action) in bindings {
        if is_key_pressed(key) {
            apply_action(action, session, view, mouse_pos, now, screen);
        }
    }
}

/// Process panel button clicks
pub fn process_button_clicks(
    session: &mut Session,
    view: &mut ViewOptions,
    buttons: &[Button],
    mouse_pos: (f32, f32),
    now: Instant,
    screen: (f32, f32),
) {
    if !view.show_panel {
        return;
    }
    for button in buttons.iter().filter(|b| b.is_clicked(mouse_pos)) {
        apply_action(button.action(), session, view, mouse_pos, now, screen);
    }
}
