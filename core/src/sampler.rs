//! Texture sampling policy shared between the registry and backends.

/// How a backend samples a texture between texels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterMode {
    /// Pick the closest texel. Keeps pixel art crisp.
    Nearest,
    /// Blend the four closest texels.
    #[default]
    Linear,
}

impl FilterMode {
    /// Lowercase name for logs and CLI values.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Nearest => "nearest",
            Self::Linear => "linear",
        }
    }
}
