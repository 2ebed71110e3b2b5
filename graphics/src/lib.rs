//! # rigdraw graphics
//!
//! The rendering side of rigdraw:
//!
//! - [`ImmediateBackend`] - begin/vertex/end style interface a renderer implements
//! - [`DummyBackend`] - records every call, for tests and headless runs
//! - [`TextureRegistry`] - fixed-capacity pool of loaded textures
//!
//! Rasterization, matrix stacks and GPU resource lifetime stay with the
//! backend implementation.

pub mod backend;
pub mod error;
pub mod resources;

pub use backend::dummy::{BackendCommand, DummyBackend, RecordedBatch, RecordedVertex};
pub use backend::{GpuTextureId, ImmediateBackend, PrimitiveMode, TextureImage};
pub use error::GraphicsError;
pub use resources::texture::{MAX_TEXTURES, RegisteredTexture, TextureRegistry};

pub use rigdraw_core::sampler::FilterMode;

/// Graphics library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
