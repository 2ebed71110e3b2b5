//! Fixed-capacity texture registry.
//!
//! Textures are loaded on demand, filtered with the registry's filter mode
//! and released all at once. There is no partial release: a skeleton's atlas
//! pages live until the renderer shuts down.

use std::path::Path;

use image::RgbaImage;
use rigdraw_core::TextureHandle;
use rigdraw_core::sampler::FilterMode;

use crate::backend::{GpuTextureId, ImmediateBackend, TextureImage};
use crate::error::GraphicsError;

/// Default maximum number of live textures.
pub const MAX_TEXTURES: usize = 10;

/// A texture held by the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredTexture {
    pub gpu: GpuTextureId,
    pub label: String,
    pub width: u32,
    pub height: u32,
}

/// Pool of loaded textures, keyed by load order.
#[derive(Debug)]
pub struct TextureRegistry {
    entries: Vec<RegisteredTexture>,
    capacity: usize,
    filter: FilterMode,
    generation: u32,
}

impl TextureRegistry {
    /// Create a registry holding up to [`MAX_TEXTURES`] bilinear-filtered textures.
    pub fn new() -> Self {
        Self::with_capacity(MAX_TEXTURES)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
            filter: FilterMode::Linear,
            generation: 0,
        }
    }

    /// Set the filter applied to textures loaded from now on.
    pub fn with_filter(mut self, filter: FilterMode) -> Self {
        self.filter = filter;
        self
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn filter(&self) -> FilterMode {
        self.filter
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    /// Generation stamped into handles issued now.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Load an image file and register it.
    ///
    /// Fails with [`GraphicsError::CapacityExceeded`] without touching the
    /// file when the registry is full.
    pub fn load<B: ImmediateBackend + ?Sized>(
        &mut self,
        backend: &mut B,
        path: impl AsRef<Path>,
    ) -> Result<TextureHandle, GraphicsError> {
        let path = path.as_ref();
        self.check_capacity(&path.display().to_string())?;

        let image = image::open(path)
            .map_err(|source| GraphicsError::ImageDecode {
                path: path.display().to_string(),
                source,
            })?
            .to_rgba8();
        self.load_image(backend, &path.display().to_string(), &image)
    }

    /// Decode an encoded image held in memory and register it.
    pub fn load_from_memory<B: ImmediateBackend + ?Sized>(
        &mut self,
        backend: &mut B,
        label: &str,
        bytes: &[u8],
    ) -> Result<TextureHandle, GraphicsError> {
        self.check_capacity(label)?;

        let image = image::load_from_memory(bytes)
            .map_err(|source| GraphicsError::ImageDecode {
                path: label.to_string(),
                source,
            })?
            .to_rgba8();
        self.load_image(backend, label, &image)
    }

    /// Register already decoded pixels.
    pub fn load_image<B: ImmediateBackend + ?Sized>(
        &mut self,
        backend: &mut B,
        label: &str,
        image: &RgbaImage,
    ) -> Result<TextureHandle, GraphicsError> {
        self.check_capacity(label)?;

        let gpu = backend.create_texture(&TextureImage {
            label,
            width: image.width(),
            height: image.height(),
            pixels: image.as_raw(),
        })?;
        backend.set_texture_filter(gpu, self.filter);

        let index = self.entries.len() as u32;
        self.entries.push(RegisteredTexture {
            gpu,
            label: label.to_string(),
            width: image.width(),
            height: image.height(),
        });
        let handle = TextureHandle::new(index, self.generation);
        log::debug!(
            "Loaded texture {:?} ({}x{}, {} filtering) as {}",
            label,
            image.width(),
            image.height(),
            self.filter.name(),
            handle
        );
        Ok(handle)
    }

    /// Look up a texture; handles from before the last release resolve to `None`.
    pub fn get(&self, handle: TextureHandle) -> Option<&RegisteredTexture> {
        if handle.generation() != self.generation {
            return None;
        }
        self.entries.get(handle.index() as usize)
    }

    /// Backend texture behind a handle.
    pub fn resolve(&self, handle: TextureHandle) -> Option<GpuTextureId> {
        self.get(handle).map(|texture| texture.gpu)
    }

    /// Destroy every registered texture, newest first, and empty the registry.
    ///
    /// Calling this on an empty registry does nothing.
    pub fn release_all<B: ImmediateBackend + ?Sized>(&mut self, backend: &mut B) {
        if self.entries.is_empty() {
            return;
        }
        let count = self.entries.len();
        while let Some(texture) = self.entries.pop() {
            backend.destroy_texture(texture.gpu);
        }
        self.generation = self.generation.wrapping_add(1);
        log::debug!("Released {} textures", count);
    }

    fn check_capacity(&self, label: &str) -> Result<(), GraphicsError> {
        if self.is_full() {
            log::warn!(
                "Texture registry full ({} textures), not loading {:?}",
                self.capacity,
                label
            );
            return Err(GraphicsError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        Ok(())
    }
}

impl Default for TextureRegistry {
    fn default() -> Self {
        Self::new()
    }
}
