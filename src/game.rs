//! Level setup and the gameplay schedule.
//!
//! Everything here works on a plain [`World`] so the whole game can be
//! ticked headless in tests. `main` adds the Raylib-bound input and render
//! systems on top of [`gameplay_schedule`].

use arrayvec::ArrayVec;
use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use log::info;
use raylib::prelude::{RaylibHandle, RaylibThread, Vector2};

use crate::components::animation::{Animation, NEBULA_MAX_FRAME, RUNNER_MAX_FRAME};
use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::parallax::ParallaxLayer;
use crate::components::rigidbody::RigidBody;
use crate::components::runner::{FinishLine, Nebula, Runner};
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::events::gamestate::{GameStateChangedEvent, observe_gamestate_change_event};
use crate::events::switchdebug::switch_debug_observer;
use crate::resources::gameconfig::{AssetPaths, GameConfig, NEBULA_CAPACITY};
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::input::InputState;
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::TextureStore;
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::animation;
use crate::systems::collision::{collision_detector, collision_observer};
use crate::systems::gamestate::{check_pending_state, outcome_system, state_is_playing};
use crate::systems::movement::movement;
use crate::systems::parallax::parallax_scroll;
use crate::systems::physics::runner_physics;

pub const RUNNER_TEX: &str = "runner";
pub const NEBULA_TEX: &str = "nebula";
pub const BACKGROUND_TEX: &str = "background";
pub const MIDGROUND_TEX: &str = "midground";
pub const FOREGROUND_TEX: &str = "foreground";

/// Runner sheet layout: one row of six cells.
const RUNNER_SHEET_GRID: (i32, i32) = (6, 1);
/// Nebula sheet layout: eight by eight cells, only the first row is played.
const NEBULA_SHEET_GRID: (i32, i32) = (8, 8);

const BACKGROUND_SCALE: f32 = 2.0;
const BACKGROUND_SPEED: f32 = 20.0;
const MIDGROUND_SPEED: f32 = 40.0;
const FOREGROUND_SPEED: f32 = 80.0;

/// Pixel sizes of the loaded textures, as needed to lay out the level.
#[derive(Debug, Clone, Copy)]
pub struct LevelTextures {
    pub runner: (i32, i32),
    pub nebula: (i32, i32),
    pub background_width: i32,
    pub midground_width: i32,
    pub foreground_width: i32,
}

impl LevelTextures {
    /// Read sizes from a store that holds every level texture.
    pub fn from_store(store: &TextureStore) -> Result<Self, String> {
        let size = |key: &str| {
            store
                .size(key)
                .ok_or_else(|| format!("Texture '{}' is not loaded", key))
        };
        Ok(Self {
            runner: size(RUNNER_TEX)?,
            nebula: size(NEBULA_TEX)?,
            background_width: size(BACKGROUND_TEX)?.0,
            midground_width: size(MIDGROUND_TEX)?.0,
            foreground_width: size(FOREGROUND_TEX)?.0,
        })
    }
}

/// Load the five level textures. Stops at the first failure.
pub fn load_textures(
    store: &mut TextureStore,
    rl: &mut RaylibHandle,
    th: &RaylibThread,
    assets: &AssetPaths,
) -> Result<(), String> {
    store.load(rl, th, RUNNER_TEX, &assets.runner)?;
    store.load(rl, th, NEBULA_TEX, &assets.nebula)?;
    store.load(rl, th, BACKGROUND_TEX, &assets.background)?;
    store.load(rl, th, MIDGROUND_TEX, &assets.midground)?;
    store.load(rl, th, FOREGROUND_TEX, &assets.foreground)?;
    Ok(())
}

/// Top-left spawn positions of the nebulae: lined up on the floor, starting
/// just past the right edge of the window.
pub fn nebula_spawn_positions(
    config: &GameConfig,
    nebula_height: f32,
) -> ArrayVec<Vector2, NEBULA_CAPACITY> {
    let window_width = config.window_width as f32;
    let floor = config.window_height as f32 - nebula_height;
    (0..config.nebula_count.min(NEBULA_CAPACITY))
        .map(|i| Vector2 {
            x: window_width + config.nebula_spacing * i as f32,
            y: floor,
        })
        .collect()
}

/// Insert the resources the gameplay systems read.
pub fn insert_resources(world: &mut World, config: GameConfig) {
    world.insert_resource(WorldTime::default());
    world.insert_resource(ScreenSize {
        w: config.window_width as i32,
        h: config.window_height as i32,
    });
    world.insert_resource(InputState::default());
    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());
    world.insert_resource(config);
}

/// Register the global observers.
pub fn register_observers(world: &mut World) {
    world.spawn(Observer::new(observe_gamestate_change_event));
    world.spawn(Observer::new(collision_observer));
    world.spawn(Observer::new(switch_debug_observer));
    // Ensure the observers are registered before any system triggers events.
    world.flush();
}

/// Spawn the runner, the nebulae, the finish line and the background layers.
///
/// Reads [`GameConfig`] from the world.
pub fn spawn_level(world: &mut World, textures: &LevelTextures) {
    let config = world.resource::<GameConfig>().clone();
    let window_width = config.window_width as f32;
    let window_height = config.window_height as f32;

    // Runner, centred horizontally, standing on the floor
    let (runner_w, runner_h) = Animation::cell_size(
        textures.runner.0,
        textures.runner.1,
        RUNNER_SHEET_GRID.0,
        RUNNER_SHEET_GRID.1,
    );
    world.spawn((
        Runner::default(),
        Sprite::new(RUNNER_TEX),
        Animation::new(
            runner_w,
            runner_h,
            RUNNER_MAX_FRAME,
            config.runner_frame_duration,
        ),
        MapPosition::new(
            window_width / 2.0 - runner_w / 2.0,
            window_height - runner_h,
        ),
        RigidBody::new(),
        BoxCollider::new(runner_w, runner_h),
        ZIndex(1),
    ));

    // Nebulae
    let (nebula_w, nebula_h) = Animation::cell_size(
        textures.nebula.0,
        textures.nebula.1,
        NEBULA_SHEET_GRID.0,
        NEBULA_SHEET_GRID.1,
    );
    let positions = nebula_spawn_positions(&config, nebula_h);
    for pos in positions.iter() {
        world.spawn((
            Nebula,
            Sprite::new(NEBULA_TEX),
            Animation::new(
                nebula_w,
                nebula_h,
                NEBULA_MAX_FRAME,
                config.nebula_frame_duration,
            ),
            MapPosition::new(pos.x, pos.y),
            RigidBody::with_horizontal(config.nebula_velocity),
            BoxCollider::inset(nebula_w, nebula_h, config.collision_padding),
            ZIndex(0),
        ));
    }

    // Finish line trails the last nebula
    let finish_x = positions.last().map_or(window_width, |p| p.x);
    world.spawn((
        FinishLine,
        MapPosition::new(finish_x, 0.0),
        RigidBody::with_horizontal(config.nebula_velocity),
    ));

    // Background layers, far to near
    let layers = [
        (BACKGROUND_TEX, textures.background_width, BACKGROUND_SPEED, -3),
        (MIDGROUND_TEX, textures.midground_width, MIDGROUND_SPEED, -2),
        (FOREGROUND_TEX, textures.foreground_width, FOREGROUND_SPEED, -1),
    ];
    for (key, width, speed, z) in layers {
        world.spawn((
            ParallaxLayer::new(key, width as f32, BACKGROUND_SCALE, speed),
            ZIndex(z),
        ));
    }

    info!(
        "Level ready: {} nebulae, finish line at x={}",
        positions.len(),
        finish_x
    );
}

/// Request the Setup -> Playing transition and apply it immediately.
pub fn start(world: &mut World) {
    world.resource_mut::<NextGameState>().set(GameStates::Playing);
    world.trigger(GameStateChangedEvent {});
}

/// Systems that advance the game, without input polling or rendering.
///
/// Gameplay runs only while playing; the background and state transitions
/// run every frame.
pub fn gameplay_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems(
        (
            runner_physics,
            movement,
            animation,
            collision_detector,
            outcome_system,
        )
            .chain()
            .run_if(state_is_playing),
    );
    update.add_systems(check_pending_state.after(outcome_system));
    update.add_systems(parallax_scroll);
    update
}
