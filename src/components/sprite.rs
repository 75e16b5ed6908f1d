use bevy_ecs::prelude::Component;

/// Sprite is identified by a texture key in the
/// [`TextureStore`](crate::resources::texturestore::TextureStore).
/// The source rectangle comes from the entity's
/// [`Animation`](super::animation::Animation).
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
}

impl Sprite {
    pub fn new(tex_key: impl Into<String>) -> Self {
        Self {
            tex_key: tex_key.into(),
        }
    }
}
