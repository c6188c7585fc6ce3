mod components;
mod config;
#[cfg(not(target_arch = "wasm32"))]
mod headless;
mod input;
mod lift;
mod player;
mod render;
mod simulation;

use bevy::prelude::*;
use simulation::Simulation;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let headless = args.iter().any(|a| a == "--headless");

    let (startup_config, config_warnings) = config::load_startup_config();
    let layout = startup_config.layout.clone();
    let mut app = App::new();

    if headless {
        #[cfg(not(target_arch = "wasm32"))]
        {
            app.add_plugins(MinimalPlugins.set(bevy::app::ScheduleRunnerPlugin::run_loop(
                std::time::Duration::from_secs_f64(1.0 / 60.0),
            )))
            .add_plugins(bevy::log::LogPlugin::default())
            .add_plugins(headless::HeadlessPlugin);
            println!("[Liftwarp] Starting in HEADLESS mode; type key names (ArrowLeft, 3, ...) on stdin");
        }
    } else {
        let assets_dir = startup_config
            .assets_dir
            .clone()
            .unwrap_or_else(|| "assets".to_string());
        if assets_dir != "assets" {
            println!("[Liftwarp] Using game assets dir: {}", assets_dir);
        }

        let window_title = startup_config
            .window_title
            .clone()
            .unwrap_or_else(|| "Lift Warp".to_string());

        let mut plugins = DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: window_title,
                    resolution: startup_config.window_size().into(),
                    resizable: false,
                    canvas: Some("#gameCanvas".to_string()),
                    present_mode: bevy::window::PresentMode::AutoVsync,
                    ..default()
                }),
                ..default()
            })
            .set(bevy::asset::AssetPlugin {
                file_path: assets_dir,
                ..default()
            });

        if startup_config.nearest_filter() {
            plugins = plugins.set(bevy::render::texture::ImagePlugin::default_nearest());
            println!("[Liftwarp] Texture filter: nearest (pixel-art mode)");
        }

        app.add_plugins(plugins);
        let bg = startup_config.background_color.unwrap_or([0.0, 0.0, 0.0]);
        app.insert_resource(ClearColor(Color::srgb(bg[0], bg[1], bg[2])));
        app.add_plugins(render::RenderPlugin);
        println!("[Liftwarp] Starting in WINDOWED mode");
    }

    app.insert_resource(config_warnings)
        .add_systems(Startup, config::log_config_warnings)
        .insert_resource(Simulation::new(layout, startup_config.stage))
        .add_plugins(input::InputPlugin)
        .add_plugins(simulation::SimulationPlugin);

    app.run();
}
