//! Scrolling background layer.
//!
//! Each layer is drawn twice side by side, the second copy one scaled
//! texture width to the right of the first, so the scroll wraps without a
//! visible seam.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Debug)]
pub struct ParallaxLayer {
    /// Texture key in [`TextureStore`](crate::resources::texturestore::TextureStore).
    pub tex_key: String,
    /// Texture width in pixels, before scaling.
    pub width: f32,
    /// Draw scale applied to the texture.
    pub scale: f32,
    /// Scroll speed in pixels per second (leftwards).
    pub speed: f32,
    /// Current horizontal offset, in `(-width * scale, 0]`.
    pub offset: f32,
}

impl ParallaxLayer {
    pub fn new(tex_key: impl Into<String>, width: f32, scale: f32, speed: f32) -> Self {
        Self {
            tex_key: tex_key.into(),
            width,
            scale,
            speed,
            offset: 0.0,
        }
    }

    /// Width of one drawn copy of the layer.
    pub fn scaled_width(&self) -> f32 {
        self.width * self.scale
    }

    /// Move the layer left by `speed * delta`, wrapping to 0 after a full copy.
    pub fn scroll(&mut self, delta: f32) {
        self.offset -= self.speed * delta;
        if self.offset <= -self.scaled_width() {
            self.offset = 0.0;
        }
    }
}
