use creatures::simulation::ecosystem::Ecosystem;
use creatures::simulation::params::Params;
use macroquad::prelude::*;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod graphics;
mod ui;

fn window_conf() -> Conf {
    Conf {
        window_title: "Creatures".to_owned(),
        window_width: 760,
        window_height: 780,
        high_dpi: true,
        ..Default::default()
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("creatures=info")))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[macroquad::main(window_conf)]
async fn main() {
    init_tracing();

    let params = match std::env::args().nth(1) {
        Some(path) => match Params::load_from_file(&path) {
            Ok(params) => params,
            Err(e) => {
                tracing::error!(path = %path, error = %e, "failed to load parameters");
                return;
            }
        },
        None => Params::default(),
    };

    let mut ecosystem = match Ecosystem::new(params) {
        Ok(ecosystem) => ecosystem,
        Err(e) => {
            tracing::error!(error = %e, "failed to create ecosystem");
            return;
        }
    };
    tracing::info!("starting creatures simulation");

    let frame_texture = graphics::FrameTexture::new(ecosystem.frame());
    let mut ui_state = ui::UIState::new();

    loop {
        let stats = ecosystem.step();
        ui_state.record(&ecosystem, &stats);

        if is_mouse_button_pressed(MouseButton::Left) && !ui_state.pointer_over_ui {
            ecosystem.spawn_random_creature();
        }

        clear_background(DARKGRAY);
        frame_texture.upload(ecosystem.frame());
        let area = Rect::new(
            0.0,
            0.0,
            (screen_width() - ui_state.panel_width).max(0.0),
            screen_height(),
        );
        frame_texture.draw(graphics::letterbox(ecosystem.frame(), area));

        ui::draw_ui(&mut ui_state, &ecosystem);
        ui::process_egui();

        next_frame().await
    }
}
