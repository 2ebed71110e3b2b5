//! Renderer-owned texture handles referenced by attachments.

use std::fmt;

/// Opaque handle to a texture held by a texture registry.
///
/// The generation is bumped every time the registry is emptied, so handles
/// issued before a release never resolve to textures loaded afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle {
    index: u32,
    generation: u32,
}

impl TextureHandle {
    pub const fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Slot index inside the registry.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Registry generation the handle was issued in.
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Display for TextureHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "texture#{}@{}", self.index, self.generation)
    }
}
