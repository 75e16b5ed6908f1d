//! Dapper Dasher entry point.
//!
//! A small side-scroller written in Rust using:
//! - **raylib** for windowing, input and graphics
//! - **bevy_ecs** for entity-component-system architecture
//!
//! The runner jumps over drifting nebulae while three background layers
//! scroll at different speeds. Touching a nebula loses the run; reaching the
//! finish line behind the last nebula wins it.
//!
//! # Main Loop
//!
//! 1. Load `config.ini` (optional) and validate it
//! 2. Open the window and load the five textures; any failure is fatal
//! 3. Spawn the level and register observers and systems
//! 4. Run the main loop until the window is closed:
//!    - Update time and input, runner physics, movement, animation
//!    - Check collisions and the finish line
//!    - Render backgrounds, sprites and end messages
//! 5. Unload textures before the window closes
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --config ./config.ini
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info, warn};
use std::path::PathBuf;

use dasher::game;
use dasher::resources::debugmode::DebugMode;
use dasher::resources::gameconfig::GameConfig;
use dasher::resources::texturestore::TextureStore;
use dasher::systems::gamestate::check_pending_state;
use dasher::systems::input::update_input_state;
use dasher::systems::parallax::parallax_scroll;
use dasher::systems::physics::runner_physics;
use dasher::systems::render::render_system;
use dasher::systems::time::update_world_time;

/// Dapper Dasher
#[derive(Parser)]
#[command(version, about = "Jump over the nebulae and reach the finish line.")]
struct Cli {
    /// Path to the INI configuration file. Missing file means defaults.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Start with the debug overlay enabled (toggle with F11).
    #[arg(long)]
    debug: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // --------------- Configuration ---------------
    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }
    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        std::process::exit(1);
    }

    // --------------- Raylib window & assets ---------------
    let (mut rl, thread) = raylib::init()
        .size(config.window_width as i32, config.window_height as i32)
        .title(&config.title)
        .build();
    rl.set_target_fps(config.target_fps);

    let mut textures = TextureStore::new();
    if let Err(e) = game::load_textures(&mut textures, &mut rl, &thread, &config.assets) {
        error!("{}", e);
        std::process::exit(1);
    }
    let level_textures = match game::LevelTextures::from_store(&textures) {
        Ok(sizes) => sizes,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    game::insert_resources(&mut world, config);
    if cli.debug {
        world.insert_resource(DebugMode {});
    }
    world.insert_non_send_resource(textures);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);
    game::register_observers(&mut world);

    game::spawn_level(&mut world, &level_textures);
    game::start(&mut world);

    let mut update = game::gameplay_schedule();
    update.add_systems(update_input_state.before(runner_physics));
    update.add_systems(
        render_system
            .after(check_pending_state)
            .after(parallax_scroll),
    );

    if let Err(e) = update.initialize(&mut world) {
        error!("Failed to initialize schedule: {:?}", e);
        std::process::exit(1);
    }

    // --------------- Main loop ---------------
    info!("Press SPACE to jump, F11 for debug overlay");
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers(); // Clear changed components for next frame
    }

    // Textures must go before the window closes.
    if let Some(mut textures) = world.remove_non_send_resource::<TextureStore>() {
        textures.unload_all();
    }
    info!("Bye!");
}
