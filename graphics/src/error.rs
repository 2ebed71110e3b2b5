//! Graphics error types.

use thiserror::Error;

/// Errors that can occur in the graphics layer.
#[derive(Debug, Error)]
pub enum GraphicsError {
    /// The texture registry holds as many textures as it may.
    #[error("texture registry full ({capacity} textures)")]
    CapacityExceeded { capacity: usize },
    /// Image file could not be read or decoded.
    #[error("failed to load image {path}: {source}")]
    ImageDecode {
        path: String,
        #[source]
        source: image::ImageError,
    },
    /// The backend refused to create a resource.
    #[error("resource creation failed: {0}")]
    ResourceCreationFailed(String),
}
