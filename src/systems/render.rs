//! Rendering.
//!
//! [`render_system`] is an exclusive system: it borrows the Raylib handle out
//! of the world for the duration of the frame, draws, and puts it back.
//!
//! Draw order
//! 1. Parallax layers, back to front, each twice side by side.
//! 2. Depending on [`GameStates`]:
//!    - `Lost`: the "Game Over!" message only.
//!    - `Won`: the "You Win!" message and the runner.
//!    - otherwise: nebulae, then the runner (by [`ZIndex`]).
//! 3. Debug overlay when [`DebugMode`] is present.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::animation::Animation;
use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::parallax::ParallaxLayer;
use crate::components::runner::{FinishLine, Nebula};
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::resources::debugmode::DebugMode;
use crate::resources::gamestate::{GameState, GameStates};
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::TextureStore;

const MESSAGE_FONT_SIZE: i32 = 50;

struct SpriteDraw {
    tex_key: String,
    source: Rectangle,
    position: Vector2,
    z: ZIndex,
    is_nebula: bool,
}

pub fn render_system(world: &mut World) {
    let Some(mut rl) = world.remove_non_send_resource::<RaylibHandle>() else {
        return;
    };
    let Some(th) = world.remove_non_send_resource::<RaylibThread>() else {
        world.insert_non_send_resource(rl);
        return;
    };

    {
        let mut d = rl.begin_drawing(&th);
        d.clear_background(Color::WHITE);
        render_pass(world, &mut d);
        render_debug_ui(world, &mut d);
    }

    world.insert_non_send_resource(th);
    world.insert_non_send_resource(rl);
}

/// Draw backgrounds, sprites and end messages.
pub fn render_pass(world: &mut World, d: &mut RaylibDrawHandle) {
    let state = *world.resource::<GameState>().get();
    let screen = *world.resource::<ScreenSize>();

    let mut layers: Vec<(ParallaxLayer, ZIndex)> = {
        let mut q = world.query::<(&ParallaxLayer, &ZIndex)>();
        q.iter(world).map(|(l, z)| (l.clone(), *z)).collect()
    };
    layers.sort_by_key(|(_, z)| *z);

    let mut sprites: Vec<SpriteDraw> = {
        let mut q = world.query::<(&Sprite, &Animation, &MapPosition, &ZIndex, Has<Nebula>)>();
        q.iter(world)
            .map(|(s, a, p, z, is_nebula)| SpriteDraw {
                tex_key: s.tex_key.clone(),
                source: a.frame_rect,
                position: p.pos,
                z: *z,
                is_nebula,
            })
            .collect()
    };
    sprites.sort_by_key(|s| s.z);

    let Some(textures) = world.get_non_send_resource::<TextureStore>() else {
        return;
    };

    for (layer, _z) in layers.iter() {
        if let Some(tex) = textures.get(&layer.tex_key) {
            for copy in 0..2 {
                let position = Vector2 {
                    x: layer.offset + copy as f32 * layer.scaled_width(),
                    y: 0.0,
                };
                d.draw_texture_ex(tex, position, 0.0, layer.scale, Color::WHITE);
            }
        }
    }

    match state {
        GameStates::Lost => draw_message(d, screen, "Game Over!"),
        GameStates::Won => {
            draw_message(d, screen, "You Win!");
            for sprite in sprites.iter().filter(|s| !s.is_nebula) {
                if let Some(tex) = textures.get(&sprite.tex_key) {
                    d.draw_texture_rec(tex, sprite.source, sprite.position, Color::WHITE);
                }
            }
        }
        GameStates::Setup | GameStates::Playing => {
            for sprite in sprites.iter() {
                if let Some(tex) = textures.get(&sprite.tex_key) {
                    d.draw_texture_rec(tex, sprite.source, sprite.position, Color::WHITE);
                }
            }
        }
    }
}

fn draw_message(d: &mut RaylibDrawHandle, screen: ScreenSize, text: &str) {
    d.draw_text(
        text,
        screen.w / 4,
        screen.h / 2,
        MESSAGE_FONT_SIZE,
        Color::WHITE,
    );
}

/// Draw collider boxes, the finish line and FPS when debug mode is on.
pub fn render_debug_ui(world: &mut World, d: &mut RaylibDrawHandle) {
    if !world.contains_resource::<DebugMode>() {
        return;
    }
    let screen = *world.resource::<ScreenSize>();

    let mut colliders = world.query::<(&BoxCollider, &MapPosition)>();
    for (collider, position) in colliders.iter(world) {
        let (x, y, w, h) = collider.get_aabb(position.pos);
        d.draw_rectangle_lines(x as i32, y as i32, w as i32, h as i32, Color::RED);
    }

    let mut finish_lines = world.query_filtered::<&MapPosition, With<FinishLine>>();
    for position in finish_lines.iter(world) {
        let x = position.pos.x as i32;
        d.draw_line(x, 0, x, screen.h, Color::GREEN);
    }

    let state = *world.resource::<GameState>().get();
    let text = format!("DEBUG (F11) | FPS: {} | {:?}", d.get_fps(), state);
    d.draw_text(&text, 10, 10, 10, Color::BLACK);
}
