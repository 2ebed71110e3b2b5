//! # rigdraw core
//!
//! Shared types for the rigdraw workspace and a read-only model of a posed
//! skeleton: bones with computed world transforms, slots in draw order and
//! the attachments bound to them.
//!
//! Nothing here animates. The animation runtime is expected to have
//! produced final bone world transforms before a [`Skeleton`] is drawn.

pub mod color;
pub mod math;
pub mod sampler;
pub mod skeleton;
pub mod texture;

pub use color::Color;
pub use skeleton::{
    AtlasRect, Attachment, AttachmentKind, Bone, BoneWeight, MeshAttachment, MeshVertices,
    RegionAttachment, RegionFrame, Skeleton, SkeletonError, Slot,
};
pub use texture::TextureHandle;

/// Core library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log the crate version once at startup.
pub fn init() {
    log::info!("rigdraw core v{} initialized", VERSION);
}
