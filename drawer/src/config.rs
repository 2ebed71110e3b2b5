//! Renderer configuration.

use rigdraw_core::sampler::FilterMode;
use rigdraw_graphics::MAX_TEXTURES;

/// Default scratch buffer capacity, in vertices.
pub const MAX_VERTICES_PER_ATTACHMENT: usize = 2048;

/// Load-time rendering options.
///
/// Defaults reproduce plain single-faced drawing: no depth separation
/// between slots, no wireframe.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Maximum number of live textures.
    pub max_textures: usize,
    /// Scratch buffer capacity; larger attachments are skipped.
    pub max_vertices_per_attachment: usize,
    /// Depth step subtracted per slot.
    pub layer_spacing: f32,
    /// Depth bias at the start of every frame.
    pub layer_spacing_base: f32,
    /// Also draw the back face of regions.
    pub double_faced: bool,
    /// Outline every mesh triangle.
    pub wireframe: bool,
    /// Filter applied to loaded textures.
    pub texture_filter: FilterMode,
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_textures(mut self, max_textures: usize) -> Self {
        self.max_textures = max_textures;
        self
    }

    pub fn with_max_vertices_per_attachment(mut self, max_vertices: usize) -> Self {
        self.max_vertices_per_attachment = max_vertices;
        self
    }

    /// Set the starting depth bias and the per-slot step.
    pub fn with_layer_spacing(mut self, base: f32, step: f32) -> Self {
        self.layer_spacing_base = base;
        self.layer_spacing = step;
        self
    }

    pub fn with_double_faced(mut self, enabled: bool) -> Self {
        self.double_faced = enabled;
        self
    }

    pub fn with_wireframe(mut self, enabled: bool) -> Self {
        self.wireframe = enabled;
        self
    }

    pub fn with_texture_filter(mut self, filter: FilterMode) -> Self {
        self.texture_filter = filter;
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_textures: MAX_TEXTURES,
            max_vertices_per_attachment: MAX_VERTICES_PER_ATTACHMENT,
            layer_spacing: 0.0,
            layer_spacing_base: 0.0,
            double_faced: false,
            wireframe: false,
            texture_filter: FilterMode::Linear,
        }
    }
}
