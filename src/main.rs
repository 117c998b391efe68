use std::time::Instant;

use conway_machine::{
    RuleConfig, Session, Viewport,
    domain::Fill,
    input, rendering::{self, ViewOptions}, ui,
};
use macroquad::prelude::{
    Conf, clear_background, mouse_position, next_frame, screen_height, screen_width,
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway Machine".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let mut session = match Session::for_screen(
        screen_width(),
        screen_height(),
        Viewport::default(),
        RuleConfig::default(),
        Fill::Random,
        Instant::now(),
    ) {
        Ok(session) => session,
        Err(err) => {
            log::error!("could not create session: {}", err);
            return;
        }
    };
    let mut view = ViewOptions::default();
    let mut screen = (screen_width(), screen_height());

    loop {
        let now = Instant::now();
        let mouse_pos = mouse_position();

        // Follow window resizes
        let current = (screen_width(), screen_height());
        if current != screen {
            screen = current;
            if let Err(err) = session.resize_to_screen(screen.0, screen.1) {
                log::warn!("resize to {}x{} ignored: {}", screen.0, screen.1, err);
            }
        }

        // Recreate buttons with current panel position
        let buttons = ui::create_buttons();

        input::process_button_clicks(&mut session, &mut view, &buttons, mouse_pos, now, screen);
        input::process_keyboard_input(&mut session, &mut view, mouse_pos, now, screen);
        input::handle_pointer(&mut session, &view, mouse_pos);

        session.tick(now);

        clear_background(view.palette.dead);
        rendering::draw_field(&session, &view);
        if view.show_panel {
            rendering::draw_controls(&session, &view, &buttons, mouse_pos);
        }

        next_frame().await;
    }
}
