//! Texture store resource.
//!
//! A non-send resource owning every texture the game draws, keyed by string
//! IDs. Textures are loaded once before the main loop and released once
//! after it with [`TextureStore::unload_all`].
//!
//! Note: This is a non-send resource because Raylib textures must be
//! accessed from the main thread only.

use std::path::Path;

use log::info;
use raylib::prelude::*;
use rustc_hash::FxHashMap;

/// Map of texture keys to loaded textures.
///
/// This is a non-send resource; use `NonSend<TextureStore>` in system parameters.
// NonSend resource: insert with insert_non_send_resource and access via NonSend/NonSendMut
#[derive(Default)]
pub struct TextureStore {
    textures: FxHashMap<String, Texture2D>,
}

impl TextureStore {
    /// Create an empty texture store.
    pub fn new() -> Self {
        Self {
            textures: FxHashMap::default(),
        }
    }

    /// Load the image at `path` and store it under `id`.
    pub fn load(
        &mut self,
        rl: &mut RaylibHandle,
        th: &RaylibThread,
        id: impl Into<String>,
        path: &Path,
    ) -> Result<(), String> {
        let id = id.into();
        let path_str = path
            .to_str()
            .ok_or_else(|| format!("Texture path for '{}' is not valid UTF-8: {:?}", id, path))?;
        let texture = rl
            .load_texture(th, path_str)
            .map_err(|e| format!("Failed to load texture '{}' from {:?}: {}", id, path, e))?;
        info!(
            "Loaded texture '{}' ({}x{}) from {:?}",
            id, texture.width, texture.height, path
        );
        self.add(id, texture);
        Ok(())
    }

    /// Add a texture with the given key.
    pub fn add(&mut self, id: impl Into<String>, texture: Texture2D) {
        self.textures.insert(id.into(), texture);
    }

    /// Get a texture by its key.
    pub fn get(&self, id: impl AsRef<str>) -> Option<&Texture2D> {
        self.textures.get(id.as_ref())
    }

    /// Pixel size of a loaded texture.
    pub fn size(&self, id: impl AsRef<str>) -> Option<(i32, i32)> {
        self.get(id).map(|t| (t.width, t.height))
    }

    /// Release every texture. Raylib unloads each one as it is dropped.
    pub fn unload_all(&mut self) {
        let count = self.textures.len();
        self.textures.clear();
        info!("Unloaded {} textures", count);
    }
}
