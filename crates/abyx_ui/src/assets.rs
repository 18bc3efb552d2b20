//! Sprite atlas.
//!
//! Every [`SpriteId`] is resolved to a loaded image once at startup. A missing
//! file is fatal; nothing is loaded lazily during play.

use std::collections::HashMap;

use abyx_shared::{SpriteId, Vec2};
use tracing::{debug, info};

use crate::error::{UiError, UiResult};
use crate::render::ImageHandle;

/// A loaded image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    /// Backend handle.
    pub handle: ImageHandle,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// What the simulation needs from an image loader.
pub trait AssetLoader {
    /// Loads the image at `path`, or `None` if it does not exist.
    fn load_image(&mut self, path: &str) -> Option<ImageInfo>;
}

/// Loader backed by a table of known paths and sizes.
///
/// Hands out sequential handles. Used by the headless sandbox and tests.
#[derive(Clone, Debug, Default)]
pub struct AssetManifest {
    sizes: HashMap<String, (u32, u32)>,
    next_handle: u32,
}

impl AssetManifest {
    /// Creates an empty manifest.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Manifest listing every sprite path, each `width` × `height` pixels.
    #[must_use]
    pub fn with_all_sprites(width: u32, height: u32) -> Self {
        let mut manifest = Self::new();
        for id in SpriteId::ALL {
            manifest.insert(id.path(), width, height);
        }
        manifest
    }

    /// Registers `path`.
    pub fn insert(&mut self, path: &str, width: u32, height: u32) {
        self.sizes.insert(path.to_owned(), (width, height));
    }

    /// Forgets `path`.
    pub fn remove(&mut self, path: &str) {
        self.sizes.remove(path);
    }
}

impl AssetLoader for AssetManifest {
    fn load_image(&mut self, path: &str) -> Option<ImageInfo> {
        let &(width, height) = self.sizes.get(path)?;
        let handle = ImageHandle(self.next_handle);
        self.next_handle += 1;
        Some(ImageInfo {
            handle,
            width,
            height,
        })
    }
}

/// An image with its size in world units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Sprite {
    /// Backend handle.
    pub image: ImageHandle,
    /// Pixel size, one pixel per world unit.
    pub size: Vec2,
}

/// Every sprite the game draws.
#[derive(Clone, Debug)]
pub struct SpriteAtlas {
    sprites: [Sprite; SpriteId::COUNT],
}

impl SpriteAtlas {
    /// Loads every sprite through `loader`.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::MissingAsset`] for the first path the loader cannot
    /// resolve.
    pub fn load(loader: &mut dyn AssetLoader) -> UiResult<Self> {
        let mut sprites = [Sprite::default(); SpriteId::COUNT];
        for id in SpriteId::ALL {
            let path = id.path();
            let info = loader.load_image(path).ok_or_else(|| UiError::MissingAsset {
                path: path.to_owned(),
            })?;
            debug!(path, width = info.width, height = info.height, "sprite loaded");
            #[allow(clippy::cast_precision_loss)]
            let size = Vec2::new(info.width as f32, info.height as f32);
            sprites[id.index()] = Sprite {
                image: info.handle,
                size,
            };
        }
        info!(count = SpriteId::COUNT, "sprite atlas ready");
        Ok(Self { sprites })
    }

    /// Sprite for `id`.
    #[inline]
    #[must_use]
    pub fn get(&self, id: SpriteId) -> &Sprite {
        &self.sprites[id.index()]
    }
}
