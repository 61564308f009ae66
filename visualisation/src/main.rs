mod cli_args;
mod drag;
mod draw_polygon;
mod headless;
mod logging;
mod scenes;
mod simulation_renderer;

use clap::Parser;
use cli_args::CliArgs;
use collision_engine::{ Simulation, SimulationConfig };
use color_eyre::eyre::{ ContextCompat, Result, WrapErr };
use drag::Drag;
use macroquad::{ prelude::*, ui::{ self, root_ui } };
use scenes::Scene;
use simulation_renderer::MacroquadRenderer;

fn window_conf(title: &str) -> Conf {
    Conf {
        window_title: title.to_owned(),
        ..Default::default()
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = CliArgs::parse();

    if args.list_scenes {
        for scene in scenes::get_all_scenes() {
            println!("{:<10} {}", scene.id(), scene.name());
        }
        return Ok(());
    }

    let config = match &args.config {
        Some(path) => SimulationConfig::load(path)
            .wrap_err_with(|| format!("loading {}", path.display()))?,
        None => SimulationConfig::default(),
    };

    let directive = args.log_level.as_deref().unwrap_or(config.log_level.as_directive());
    logging::setup_logging(directive)?;

    let scene = scenes::find_scene(&args.scene)
        .with_context(|| format!("no scene named {:?}, see --list-scenes", args.scene))?;
    tracing::info!(scene = scene.name(), "loading scene");

    let world_state = scene.create_world_state(config.clone())?;
    let dt = config.dt();

    if args.headless {
        headless::run(world_state, args.frames, dt)?;
        return Ok(());
    }

    macroquad::Window::from_config(
        window_conf(scene.name()),
        visualise(scene, config, world_state.into_simulation()?),
    );
    Ok(())
}

async fn visualise(scene: Box<dyn Scene>, config: SimulationConfig, mut simulation: Simulation) {
    let dt = config.dt();
    let mut renderer = MacroquadRenderer::new(config.width, config.height);
    let mut drag = Drag::default();

    // Setup ui skin
    {
        let label_style = root_ui().style_builder()
            .font_size(32)
            .text_color(WHITE)
            .build();
        let skin = ui::Skin {
            label_style,
            ..root_ui().default_skin()
        };
        root_ui().push_skin(&skin);
    }

    loop {
        if is_key_pressed(KeyCode::Space) {
            renderer.paused = !renderer.paused;
        }

        if is_key_pressed(KeyCode::R) {
            drag.release();
            match scene.create_world_state(config.clone()).and_then(|world| world.into_simulation()) {
                Ok(reset) => simulation = reset,
                Err(error) => tracing::error!(%error, "could not reset the scene"),
            }
        }

        let cursor = renderer.screen_to_world(mouse_position().into());
        if is_mouse_button_pressed(MouseButton::Left) {
            drag.press(simulation.world_state(), cursor);
        }
        if is_mouse_button_down(MouseButton::Left) {
            drag.hold(simulation.world_state_mut(), cursor);
        } else {
            drag.release();
        }

        let flow = if renderer.paused {
            simulation.redraw(&mut renderer)
        } else {
            simulation.advance(dt, &mut renderer)
        };
        if flow.is_break() {
            break;
        }

        next_frame().await;
    }
}
