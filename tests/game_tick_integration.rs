//! Game tick integration tests.
//!
//! These run the gameplay schedule on a headless world (no window, no
//! textures) and check physics, animation, collision and outcome over
//! sequences of frames.

use bevy_ecs::prelude::*;

use dasher::components::animation::Animation;
use dasher::components::mapposition::MapPosition;
use dasher::components::parallax::ParallaxLayer;
use dasher::components::rigidbody::RigidBody;
use dasher::components::runner::{FinishLine, Nebula, Runner};
use dasher::game::{self, LevelTextures};
use dasher::resources::gameconfig::GameConfig;
use dasher::resources::gamestate::{GameState, GameStates, NextGameState};
use dasher::resources::input::InputState;
use dasher::systems::time::update_world_time;

const DT: f32 = 1.0 / 60.0;
const EPSILON: f32 = 1e-3;

// Runner cells are 64x128, nebula cells 200x200.
const TEXTURES: LevelTextures = LevelTextures {
    runner: (384, 128),
    nebula: (1600, 1600),
    background_width: 256,
    midground_width: 256,
    foreground_width: 256,
};

const FLOOR_Y: f32 = 358.0 - 128.0;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn make_world() -> World {
    let mut world = World::new();
    game::insert_resources(&mut world, GameConfig::new());
    game::register_observers(&mut world);
    game::spawn_level(&mut world, &TEXTURES);
    game::start(&mut world);
    world
}

fn tick(world: &mut World, schedule: &mut Schedule, frames: usize) {
    for _ in 0..frames {
        update_world_time(world, DT);
        schedule.run(world);
    }
}

fn state(world: &World) -> GameStates {
    *world.resource::<GameState>().get()
}

fn runner_entity(world: &mut World) -> Entity {
    world
        .query_filtered::<Entity, With<Runner>>()
        .single(world)
        .unwrap()
}

fn finish_line_entity(world: &mut World) -> Entity {
    world
        .query_filtered::<Entity, With<FinishLine>>()
        .single(world)
        .unwrap()
}

fn nebula_positions(world: &mut World) -> Vec<(f32, f32)> {
    let mut q = world.query_filtered::<&MapPosition, With<Nebula>>();
    let mut positions: Vec<(f32, f32)> = q.iter(world).map(|p| (p.pos.x, p.pos.y)).collect();
    positions.sort_by(|a, b| a.0.total_cmp(&b.0));
    positions
}

fn despawn_nebulae(world: &mut World) {
    let nebulae: Vec<Entity> = world
        .query_filtered::<Entity, With<Nebula>>()
        .iter(world)
        .collect();
    for nebula in nebulae {
        world.despawn(nebula);
    }
}

fn press_jump(world: &mut World, pressed: bool) {
    world.resource_mut::<InputState>().jump.just_pressed = pressed;
}

#[test]
fn level_spawns_in_playing_state() {
    let mut world = make_world();
    assert_eq!(state(&world), GameStates::Playing);

    let runner = runner_entity(&mut world);
    let pos = world.get::<MapPosition>(runner).unwrap();
    assert!(approx_eq(pos.pos.x, 256.0 - 32.0));
    assert!(approx_eq(pos.pos.y, FLOOR_Y));

    let nebulae = nebula_positions(&mut world);
    assert_eq!(nebulae.len(), 6);
    for (i, (x, y)) in nebulae.iter().enumerate() {
        assert!(approx_eq(*x, 512.0 + 300.0 * i as f32));
        assert!(approx_eq(*y, 358.0 - 200.0));
    }

    let finish = finish_line_entity(&mut world);
    let finish_x = world.get::<MapPosition>(finish).unwrap().pos.x;
    assert!(approx_eq(finish_x, 512.0 + 300.0 * 5.0));

    let layers = world.query::<&ParallaxLayer>().iter(&world).count();
    assert_eq!(layers, 3);
}

#[test]
fn standing_runner_hits_first_nebula_and_loses() {
    let mut world = make_world();
    let mut schedule = game::gameplay_schedule();

    tick(&mut world, &mut schedule, 60);
    assert_eq!(state(&world), GameStates::Playing);
    let runner = runner_entity(&mut world);
    assert!(!world.get::<Runner>(runner).unwrap().collided);

    tick(&mut world, &mut schedule, 60);
    assert!(world.get::<Runner>(runner).unwrap().collided);
    assert_eq!(state(&world), GameStates::Lost);
}

#[test]
fn collision_is_sticky_and_gameplay_freezes_after_loss() {
    let mut world = make_world();
    let mut schedule = game::gameplay_schedule();
    tick(&mut world, &mut schedule, 120);
    assert_eq!(state(&world), GameStates::Lost);

    let frozen = nebula_positions(&mut world);
    let layer_offsets: Vec<f32> = world
        .query::<&ParallaxLayer>()
        .iter(&world)
        .map(|l| l.offset)
        .collect();

    tick(&mut world, &mut schedule, 60);

    let runner = runner_entity(&mut world);
    assert!(world.get::<Runner>(runner).unwrap().collided);
    assert_eq!(state(&world), GameStates::Lost);
    assert_eq!(nebula_positions(&mut world), frozen);

    let moved: Vec<f32> = world
        .query::<&ParallaxLayer>()
        .iter(&world)
        .map(|l| l.offset)
        .collect();
    assert_ne!(moved, layer_offsets);
}

#[test]
fn reaching_finish_line_wins() {
    let mut world = make_world();
    let mut schedule = game::gameplay_schedule();
    despawn_nebulae(&mut world);

    tick(&mut world, &mut schedule, 500);
    assert_eq!(state(&world), GameStates::Playing);

    tick(&mut world, &mut schedule, 100);
    assert_eq!(state(&world), GameStates::Won);

    let finish = finish_line_entity(&mut world);
    let finish_x = world.get::<MapPosition>(finish).unwrap().pos.x;
    tick(&mut world, &mut schedule, 30);
    assert_eq!(state(&world), GameStates::Won);
    assert_eq!(world.get::<MapPosition>(finish).unwrap().pos.x, finish_x);
}

#[test]
fn collided_flag_beats_finish_line_in_same_frame() {
    let mut world = make_world();
    let mut schedule = game::gameplay_schedule();

    let runner = runner_entity(&mut world);
    world.get_mut::<Runner>(runner).unwrap().collided = true;
    let finish = finish_line_entity(&mut world);
    world.get_mut::<MapPosition>(finish).unwrap().pos.x = 0.0;

    tick(&mut world, &mut schedule, 1);
    assert_eq!(state(&world), GameStates::Lost);
}

#[test]
fn terminal_state_ignores_later_requests() {
    let mut world = make_world();
    let mut schedule = game::gameplay_schedule();
    tick(&mut world, &mut schedule, 120);
    assert_eq!(state(&world), GameStates::Lost);

    world.resource_mut::<NextGameState>().set(GameStates::Won);
    tick(&mut world, &mut schedule, 1);
    assert_eq!(state(&world), GameStates::Lost);
}

#[test]
fn finish_line_moves_with_nebulae() {
    let mut world = make_world();
    let mut schedule = game::gameplay_schedule();
    tick(&mut world, &mut schedule, 30);

    let last_nebula_x = nebula_positions(&mut world).last().unwrap().0;
    let finish = finish_line_entity(&mut world);
    let finish_x = world.get::<MapPosition>(finish).unwrap().pos.x;
    assert_eq!(finish_x, last_nebula_x);
    assert!((finish_x - (2012.0 - 200.0 * 0.5)).abs() < 0.01);
}

#[test]
fn jump_sets_impulse_then_becomes_airborne() {
    let mut world = make_world();
    let mut schedule = game::gameplay_schedule();
    let runner = runner_entity(&mut world);

    press_jump(&mut world, true);
    tick(&mut world, &mut schedule, 1);
    press_jump(&mut world, false);

    assert!(approx_eq(
        world.get::<RigidBody>(runner).unwrap().velocity.y,
        -600.0
    ));
    assert!(!world.get::<Runner>(runner).unwrap().airborne);
    assert!(approx_eq(
        world.get::<MapPosition>(runner).unwrap().pos.y,
        FLOOR_Y - 10.0
    ));

    tick(&mut world, &mut schedule, 1);
    assert!(world.get::<Runner>(runner).unwrap().airborne);
    assert!(approx_eq(
        world.get::<RigidBody>(runner).unwrap().velocity.y,
        -600.0 + 1000.0 * DT
    ));
}

#[test]
fn jump_is_ignored_while_airborne() {
    let mut world = make_world();
    let mut schedule = game::gameplay_schedule();
    let runner = runner_entity(&mut world);

    press_jump(&mut world, true);
    tick(&mut world, &mut schedule, 2);
    press_jump(&mut world, false);

    assert!(world.get::<Runner>(runner).unwrap().airborne);
    assert!(approx_eq(
        world.get::<RigidBody>(runner).unwrap().velocity.y,
        -600.0 + 1000.0 * DT
    ));
}

#[test]
fn runner_lands_back_on_the_floor() {
    let mut world = make_world();
    let mut schedule = game::gameplay_schedule();
    despawn_nebulae(&mut world);
    let runner = runner_entity(&mut world);

    press_jump(&mut world, true);
    tick(&mut world, &mut schedule, 1);
    press_jump(&mut world, false);

    tick(&mut world, &mut schedule, 30);
    assert!(world.get::<MapPosition>(runner).unwrap().pos.y < FLOOR_Y - 100.0);

    tick(&mut world, &mut schedule, 70);
    assert_eq!(world.get::<MapPosition>(runner).unwrap().pos.y, FLOOR_Y);
    assert!(!world.get::<Runner>(runner).unwrap().airborne);
    assert_eq!(world.get::<RigidBody>(runner).unwrap().velocity.y, 0.0);
}

#[test]
fn airborne_runner_keeps_its_frame() {
    let mut world = make_world();
    let mut schedule = game::gameplay_schedule();
    let runner = runner_entity(&mut world);

    press_jump(&mut world, true);
    tick(&mut world, &mut schedule, 1);
    press_jump(&mut world, false);

    let before = *world.get::<Animation>(runner).unwrap();
    tick(&mut world, &mut schedule, 12);
    let after = *world.get::<Animation>(runner).unwrap();

    assert!(world.get::<Runner>(runner).unwrap().airborne);
    assert_eq!(after.frame_index, before.frame_index);
    assert_eq!(after.elapsed, before.elapsed);
    assert_eq!(after.frame_rect.x, before.frame_rect.x);
}

#[test]
fn grounded_runner_and_nebulae_animate_on_cadence() {
    let mut world = make_world();
    let mut schedule = game::gameplay_schedule();
    let runner = runner_entity(&mut world);

    // Nebula frames last 1/16 s: three frames at 60 FPS are not enough, four are.
    tick(&mut world, &mut schedule, 3);
    let mut q = world.query_filtered::<&Animation, With<Nebula>>();
    assert!(q.iter(&world).all(|a| a.frame_index == 0));

    // The drawn cell trails the index: the first advance still shows cell 0.
    tick(&mut world, &mut schedule, 1);
    let mut q = world.query_filtered::<&Animation, With<Nebula>>();
    for anim in q.iter(&world) {
        assert_eq!(anim.frame_index, 1);
        assert_eq!(anim.frame_rect.x, 0.0);
    }

    // Runner frames last 1/12 s: advanced once after five frames.
    tick(&mut world, &mut schedule, 1);
    let anim = world.get::<Animation>(runner).unwrap();
    assert_eq!(anim.frame_index, 1);
    assert_eq!(anim.frame_rect.x, 0.0);

    tick(&mut world, &mut schedule, 3);
    let mut q = world.query_filtered::<&Animation, With<Nebula>>();
    for anim in q.iter(&world) {
        assert_eq!(anim.frame_index, 2);
        assert_eq!(anim.frame_rect.x, 200.0);
    }

    tick(&mut world, &mut schedule, 2);
    let anim = world.get::<Animation>(runner).unwrap();
    assert_eq!(anim.frame_index, 2);
    assert_eq!(anim.frame_rect.x, 64.0);
}

#[test]
fn landed_runner_rests_exactly_on_the_floor() {
    let mut world = make_world();
    let mut schedule = game::gameplay_schedule();
    despawn_nebulae(&mut world);
    let runner = runner_entity(&mut world);

    press_jump(&mut world, true);
    tick(&mut world, &mut schedule, 1);
    press_jump(&mut world, false);

    let mut was_airborne = false;
    let mut landed = false;
    for _ in 0..150 {
        tick(&mut world, &mut schedule, 1);
        let airborne = world.get::<Runner>(runner).unwrap().airborne;
        if was_airborne && !airborne {
            landed = true;
        }
        if landed {
            assert!(!airborne);
            assert_eq!(world.get::<MapPosition>(runner).unwrap().pos.y, FLOOR_Y);
        }
        was_airborne |= airborne;
    }
    assert!(landed);
}

#[test]
fn runner_below_the_floor_is_put_back_on_it() {
    let mut world = make_world();
    let mut schedule = game::gameplay_schedule();
    let runner = runner_entity(&mut world);
    world.get_mut::<MapPosition>(runner).unwrap().pos.y = FLOOR_Y + 7.0;
    world.get_mut::<RigidBody>(runner).unwrap().velocity.y = 420.0;

    tick(&mut world, &mut schedule, 1);
    assert_eq!(world.get::<MapPosition>(runner).unwrap().pos.y, FLOOR_Y);
    assert_eq!(world.get::<RigidBody>(runner).unwrap().velocity.y, 0.0);
    assert!(!world.get::<Runner>(runner).unwrap().airborne);
}

#[test]
fn detected_collision_and_finish_crossing_in_one_tick_loses() {
    let mut world = make_world();
    let mut schedule = game::gameplay_schedule();
    let runner = runner_entity(&mut world);
    let runner_x = world.get::<MapPosition>(runner).unwrap().pos.x;

    // Padded nebula box starts at the runner's left edge and overlaps it.
    let nebula = world
        .query_filtered::<Entity, With<Nebula>>()
        .iter(&world)
        .next()
        .unwrap();
    world.get_mut::<MapPosition>(nebula).unwrap().pos.x = runner_x - 50.0;
    let finish = finish_line_entity(&mut world);
    world.get_mut::<MapPosition>(finish).unwrap().pos.x = runner_x;

    assert!(!world.get::<Runner>(runner).unwrap().collided);
    assert_eq!(state(&world), GameStates::Playing);

    tick(&mut world, &mut schedule, 1);
    assert!(world.get::<Runner>(runner).unwrap().collided);
    assert_eq!(state(&world), GameStates::Lost);
}

#[test]
fn spawn_positions_are_bounded_by_capacity() {
    let mut config = GameConfig::new();
    config.nebula_count = 4;
    config.nebula_spacing = 100.0;
    let positions = game::nebula_spawn_positions(&config, 50.0);
    assert_eq!(positions.len(), 4);
    assert_eq!(positions[3].x, 512.0 + 300.0);
    assert_eq!(positions[3].y, 358.0 - 50.0);

    config.nebula_count = 100;
    let positions = game::nebula_spawn_positions(&config, 50.0);
    assert_eq!(positions.len(), positions.capacity());
}
