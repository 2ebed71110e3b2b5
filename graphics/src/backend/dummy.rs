//! Dummy backend for testing and headless runs.
//!
//! This backend doesn't rasterize anything. Every call is appended to a
//! command log, which tests inspect directly or replay into
//! [`RecordedBatch`]es.

use rigdraw_core::Color;
use rigdraw_core::math::Vec2;
use rigdraw_core::sampler::FilterMode;

use crate::error::GraphicsError;

use super::{GpuTextureId, ImmediateBackend, PrimitiveMode, TextureImage};

/// One recorded backend call.
#[derive(Debug, Clone, PartialEq)]
pub enum BackendCommand {
    CreateTexture {
        texture: GpuTextureId,
        label: String,
        width: u32,
        height: u32,
    },
    SetTextureFilter {
        texture: GpuTextureId,
        filter: FilterMode,
    },
    DestroyTexture(GpuTextureId),
    SetTexture(Option<GpuTextureId>),
    PushMatrix,
    PopMatrix,
    Begin(PrimitiveMode),
    End,
    Color(Color),
    TexCoord([f32; 2]),
    Normal([f32; 3]),
    Vertex([f32; 3]),
    TriangleLines {
        points: [[f32; 2]; 3],
        color: Color,
    },
}

/// A vertex with the attribute state latched when it was emitted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordedVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
    pub normal: [f32; 3],
    pub color: Color,
}

/// Everything emitted between one `begin` and its `end`.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedBatch {
    pub mode: PrimitiveMode,
    pub texture: Option<GpuTextureId>,
    pub vertices: Vec<RecordedVertex>,
}

/// Dummy immediate-mode backend.
#[derive(Debug)]
pub struct DummyBackend {
    commands: Vec<BackendCommand>,
    supports_quads: bool,
    next_texture: u32,
    live_textures: Vec<GpuTextureId>,
    matrix_depth: usize,
    in_batch: bool,
}

impl DummyBackend {
    /// Create a dummy backend that accepts quad batches.
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            supports_quads: true,
            next_texture: 1,
            live_textures: Vec::new(),
            matrix_depth: 0,
            in_batch: false,
        }
    }

    /// Create a dummy backend that only accepts lines and triangles.
    pub fn triangles_only() -> Self {
        Self {
            supports_quads: false,
            ..Self::new()
        }
    }

    /// Recorded commands in call order.
    pub fn commands(&self) -> &[BackendCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the log empty.
    pub fn take_commands(&mut self) -> Vec<BackendCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Forget recorded commands. Texture and matrix state are kept.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Textures created and not yet destroyed, in creation order.
    pub fn live_textures(&self) -> &[GpuTextureId] {
        &self.live_textures
    }

    pub fn matrix_depth(&self) -> usize {
        self.matrix_depth
    }

    /// Number of primitive batches opened.
    pub fn begin_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, BackendCommand::Begin(_)))
            .count()
    }

    /// Number of wireframe outlines drawn.
    pub fn outline_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, BackendCommand::TriangleLines { .. }))
            .count()
    }

    /// Replay the command log into per-batch vertex lists.
    pub fn batches(&self) -> Vec<RecordedBatch> {
        let mut batches = Vec::new();
        let mut current: Option<RecordedBatch> = None;
        let mut texture = None;
        let mut color = Color::WHITE;
        let mut uv = [0.0; 2];
        let mut normal = [0.0, 0.0, 1.0];

        for command in &self.commands {
            match command {
                BackendCommand::SetTexture(bound) => texture = *bound,
                BackendCommand::Begin(mode) => {
                    current = Some(RecordedBatch {
                        mode: *mode,
                        texture,
                        vertices: Vec::new(),
                    });
                }
                BackendCommand::End => batches.extend(current.take()),
                BackendCommand::Color(c) => color = *c,
                BackendCommand::TexCoord(t) => uv = *t,
                BackendCommand::Normal(n) => normal = *n,
                BackendCommand::Vertex(position) => {
                    if let Some(batch) = current.as_mut() {
                        batch.vertices.push(RecordedVertex {
                            position: *position,
                            uv,
                            normal,
                            color,
                        });
                    }
                }
                _ => {}
            }
        }
        batches
    }
}

impl Default for DummyBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ImmediateBackend for DummyBackend {
    fn name(&self) -> &'static str {
        "Dummy"
    }

    fn supports_quads(&self) -> bool {
        self.supports_quads
    }

    fn create_texture(&mut self, image: &TextureImage<'_>) -> Result<GpuTextureId, GraphicsError> {
        let expected = image.width as usize * image.height as usize * 4;
        if expected == 0 || image.pixels.len() != expected {
            return Err(GraphicsError::ResourceCreationFailed(format!(
                "texture {:?}: {}x{} needs {} bytes, got {}",
                image.label,
                image.width,
                image.height,
                expected,
                image.pixels.len()
            )));
        }

        let texture = GpuTextureId(self.next_texture);
        self.next_texture += 1;
        log::trace!(
            "DummyBackend: creating texture {:?} ({}x{}) as {:?}",
            image.label,
            image.width,
            image.height,
            texture
        );
        self.live_textures.push(texture);
        self.commands.push(BackendCommand::CreateTexture {
            texture,
            label: image.label.to_string(),
            width: image.width,
            height: image.height,
        });
        Ok(texture)
    }

    fn set_texture_filter(&mut self, texture: GpuTextureId, filter: FilterMode) {
        self.commands
            .push(BackendCommand::SetTextureFilter { texture, filter });
    }

    fn destroy_texture(&mut self, texture: GpuTextureId) {
        match self.live_textures.iter().position(|t| *t == texture) {
            Some(index) => {
                self.live_textures.remove(index);
            }
            None => log::warn!("DummyBackend: destroying unknown texture {:?}", texture),
        }
        self.commands.push(BackendCommand::DestroyTexture(texture));
    }

    fn set_texture(&mut self, texture: Option<GpuTextureId>) {
        self.commands.push(BackendCommand::SetTexture(texture));
    }

    fn push_matrix(&mut self) {
        self.matrix_depth += 1;
        self.commands.push(BackendCommand::PushMatrix);
    }

    fn pop_matrix(&mut self) {
        if self.matrix_depth == 0 {
            log::warn!("DummyBackend: matrix stack underflow");
        } else {
            self.matrix_depth -= 1;
        }
        self.commands.push(BackendCommand::PopMatrix);
    }

    fn begin(&mut self, mode: PrimitiveMode) {
        if self.in_batch {
            log::warn!("DummyBackend: begin({:?}) inside an open batch", mode);
        }
        if mode == PrimitiveMode::Quads && !self.supports_quads {
            log::warn!("DummyBackend: quads requested from a triangles-only backend");
        }
        self.in_batch = true;
        self.commands.push(BackendCommand::Begin(mode));
    }

    fn end(&mut self) {
        if !self.in_batch {
            log::warn!("DummyBackend: end() without begin()");
        }
        self.in_batch = false;
        self.commands.push(BackendCommand::End);
    }

    fn color4f(&mut self, r: f32, g: f32, b: f32, a: f32) {
        self.commands
            .push(BackendCommand::Color(Color::new(r, g, b, a)));
    }

    fn tex_coord2f(&mut self, u: f32, v: f32) {
        self.commands.push(BackendCommand::TexCoord([u, v]));
    }

    fn normal3f(&mut self, x: f32, y: f32, z: f32) {
        self.commands.push(BackendCommand::Normal([x, y, z]));
    }

    fn vertex3f(&mut self, x: f32, y: f32, z: f32) {
        self.commands.push(BackendCommand::Vertex([x, y, z]));
    }

    fn draw_triangle_lines(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Color) {
        self.commands.push(BackendCommand::TriangleLines {
            points: [[a.x, a.y], [b.x, b.y], [c.x, c.y]],
            color,
        });
    }
}
