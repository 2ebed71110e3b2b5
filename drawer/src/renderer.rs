use std::path::Path;

use image::RgbaImage;
use rigdraw_core::math::Vec3;
use rigdraw_core::{Skeleton, TextureHandle};
use rigdraw_graphics::{GraphicsError, ImmediateBackend, TextureRegistry};

use crate::config::RenderConfig;
use crate::drawer::SkeletonDrawer;
use crate::report::FrameReport;

/// Rendering context for skeletons: backend, textures and drawer.
///
/// Create once at renderer initialization. Every texture loaded through it
/// is released when it is dropped.
///
/// # Example
///
/// ```ignore
/// let mut renderer = SpineRenderer::new(backend, RenderConfig::default());
/// let atlas = renderer.load_texture("hero.png")?;
/// // build the skeleton with `atlas` as its attachments' texture...
///
/// // Each frame, after the animation runtime posed the skeleton:
/// let report = renderer.draw_skeleton(&skeleton, vec3(0.0, 0.0, 0.0));
/// ```
pub struct SpineRenderer<B: ImmediateBackend> {
    backend: B,
    textures: TextureRegistry,
    drawer: SkeletonDrawer,
    config: RenderConfig,
}

impl<B: ImmediateBackend> SpineRenderer<B> {
    pub fn new(backend: B, config: RenderConfig) -> Self {
        log::info!(
            "Skeleton renderer on {} backend ({} textures, {} vertices per attachment)",
            backend.name(),
            config.max_textures,
            config.max_vertices_per_attachment
        );
        Self {
            textures: TextureRegistry::with_capacity(config.max_textures)
                .with_filter(config.texture_filter),
            drawer: SkeletonDrawer::new(&config),
            backend,
            config,
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn textures(&self) -> &TextureRegistry {
        &self.textures
    }

    pub fn drawer(&self) -> &SkeletonDrawer {
        &self.drawer
    }

    /// Load an image file into the texture registry.
    pub fn load_texture(&mut self, path: impl AsRef<Path>) -> Result<TextureHandle, GraphicsError> {
        self.textures.load(&mut self.backend, path)
    }

    /// Register already decoded pixels.
    pub fn load_texture_image(
        &mut self,
        label: &str,
        image: &RgbaImage,
    ) -> Result<TextureHandle, GraphicsError> {
        self.textures.load_image(&mut self.backend, label, image)
    }

    /// Decode an encoded image held in memory and register it.
    pub fn load_texture_from_memory(
        &mut self,
        label: &str,
        bytes: &[u8],
    ) -> Result<TextureHandle, GraphicsError> {
        self.textures
            .load_from_memory(&mut self.backend, label, bytes)
    }

    /// Destroy every loaded texture. Handles issued so far stop resolving.
    pub fn release_textures(&mut self) {
        self.textures.release_all(&mut self.backend);
    }

    /// Draw one posed skeleton at `position`.
    pub fn draw_skeleton(&mut self, skeleton: &Skeleton, position: Vec3) -> FrameReport {
        self.drawer
            .draw_skeleton(&mut self.backend, &self.textures, skeleton, position)
    }
}

impl<B: ImmediateBackend> Drop for SpineRenderer<B> {
    fn drop(&mut self) {
        self.release_textures();
    }
}

#[cfg(test)]
mod tests {
    use rigdraw_graphics::DummyBackend;

    use super::*;

    #[test]
    fn test_registry_follows_config() {
        let config = RenderConfig::default().with_max_textures(2);
        let mut renderer = SpineRenderer::new(DummyBackend::new(), config);
        let image = RgbaImage::new(1, 1);
        assert!(renderer.load_texture_image("a", &image).is_ok());
        assert!(renderer.load_texture_image("b", &image).is_ok());
        assert!(matches!(
            renderer.load_texture_image("c", &image),
            Err(GraphicsError::CapacityExceeded { capacity: 2 })
        ));
        assert_eq!(renderer.textures().len(), 2);
        assert_eq!(renderer.backend().live_textures().len(), 2);
    }

    #[test]
    fn test_release_textures() {
        let mut renderer = SpineRenderer::new(DummyBackend::new(), RenderConfig::default());
        let handle = renderer
            .load_texture_image("atlas", &RgbaImage::new(4, 4))
            .unwrap();
        renderer.release_textures();
        assert!(renderer.textures().get(handle).is_none());
        assert!(renderer.backend().live_textures().is_empty());
        renderer.release_textures();
    }
}
