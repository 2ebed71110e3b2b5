use rigdraw_core::{AttachmentKind, SkeletonError, TextureHandle};
use thiserror::Error;

/// Reasons a slot is left out of a frame.
///
/// None of these abort the frame; the offending slot is skipped and the
/// walk continues.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DrawError {
    #[error("{required} vertices exceed the scratch capacity of {capacity}")]
    CapacityExceeded { required: usize, capacity: usize },
    #[error("unsupported {kind} attachment: {detail}")]
    UnsupportedAttachment {
        kind: AttachmentKind,
        detail: &'static str,
    },
    #[error("{0} is not loaded")]
    MissingTexture(TextureHandle),
    #[error("triangle index {index} out of range ({vertex_count} vertices)")]
    InvalidMeshIndex { index: u16, vertex_count: usize },
    #[error("triangle list of {0} indices is not a multiple of 3")]
    IncompleteTriangles(usize),
    #[error("draw order entry {index} out of range ({count} slots)")]
    InvalidSlot { index: usize, count: usize },
    #[error(transparent)]
    Skeleton(#[from] SkeletonError),
}
