//! Immediate-mode backend abstraction.
//!
//! Mirrors the compatibility-profile style of drawing: bind a texture,
//! open a primitive batch, set per-vertex attributes, emit positions, close
//! the batch. Attribute setters latch state that the next
//! [`vertex3f`](ImmediateBackend::vertex3f) call consumes.
//!
//! # Available Backends
//!
//! - [`dummy::DummyBackend`]: records calls without rasterizing

pub mod dummy;

use rigdraw_core::Color;
use rigdraw_core::math::Vec2;
use rigdraw_core::sampler::FilterMode;

use crate::error::GraphicsError;

/// Backend-side texture identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GpuTextureId(pub u32);

/// Primitive kind of a batch opened with [`ImmediateBackend::begin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveMode {
    Lines,
    Triangles,
    Quads,
}

impl PrimitiveMode {
    /// Vertices consumed by one primitive.
    pub fn vertices_per_primitive(&self) -> usize {
        match self {
            Self::Lines => 2,
            Self::Triangles => 3,
            Self::Quads => 4,
        }
    }
}

/// Decoded RGBA8 pixels handed to [`ImmediateBackend::create_texture`].
#[derive(Debug, Clone, Copy)]
pub struct TextureImage<'a> {
    pub label: &'a str,
    pub width: u32,
    pub height: u32,
    /// Tightly packed rows, 4 bytes per pixel.
    pub pixels: &'a [u8],
}

/// Rendering backend driven by the skeleton drawer.
///
/// Implementations are single-threaded and own all GPU-side state.
pub trait ImmediateBackend {
    /// Short backend name for logs.
    fn name(&self) -> &'static str;

    /// Whether [`PrimitiveMode::Quads`] batches are accepted.
    ///
    /// Callers fall back to triangle pairs when this returns `false`.
    fn supports_quads(&self) -> bool {
        true
    }

    /// Upload pixels and return the new texture.
    fn create_texture(&mut self, image: &TextureImage<'_>) -> Result<GpuTextureId, GraphicsError>;

    fn set_texture_filter(&mut self, texture: GpuTextureId, filter: FilterMode);

    fn destroy_texture(&mut self, texture: GpuTextureId);

    /// Bind a texture for subsequent batches, or unbind with `None`.
    fn set_texture(&mut self, texture: Option<GpuTextureId>);

    fn push_matrix(&mut self);

    fn pop_matrix(&mut self);

    fn begin(&mut self, mode: PrimitiveMode);

    fn end(&mut self);

    fn color4f(&mut self, r: f32, g: f32, b: f32, a: f32);

    fn tex_coord2f(&mut self, u: f32, v: f32);

    fn normal3f(&mut self, x: f32, y: f32, z: f32);

    /// Emit a vertex using the latched color, texcoord and normal.
    fn vertex3f(&mut self, x: f32, y: f32, z: f32);

    /// Draw the outline of a screen-plane triangle.
    fn draw_triangle_lines(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Color);

    /// Convenience wrapper over [`color4f`](Self::color4f).
    fn color(&mut self, color: Color) {
        self.color4f(color.r, color.g, color.b, color.a);
    }
}
