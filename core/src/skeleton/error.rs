use thiserror::Error;

/// Errors produced while reading posed skeleton data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkeletonError {
    #[error("bone index {bone} out of range ({count} bones)")]
    BoneOutOfRange { bone: usize, count: usize },
    #[error("world vertex output too small: need {required} floats, have {available}")]
    OutputTooSmall { required: usize, available: usize },
}
