use std::fmt;

use super::mesh::MeshAttachment;
use super::region::RegionAttachment;

/// Attachment kind, without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttachmentKind {
    Region,
    Mesh,
    BoundingBox,
    Point,
    Clipping,
    Path,
}

impl AttachmentKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Region => "region",
            Self::Mesh => "mesh",
            Self::BoundingBox => "bounding box",
            Self::Point => "point",
            Self::Clipping => "clipping",
            Self::Path => "path",
        }
    }

    /// Whether the kind produces textured geometry.
    pub fn is_renderable(&self) -> bool {
        matches!(self, Self::Region | Self::Mesh)
    }
}

impl fmt::Display for AttachmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Shape bound to a slot.
///
/// Only [`Region`](Self::Region) and [`Mesh`](Self::Mesh) carry geometry.
/// The remaining variants exist in skeleton data but draw nothing.
#[derive(Debug, Clone)]
pub enum Attachment {
    Region(RegionAttachment),
    Mesh(MeshAttachment),
    BoundingBox { name: String },
    Point { name: String },
    Clipping { name: String },
    Path { name: String },
}

impl Attachment {
    pub fn kind(&self) -> AttachmentKind {
        match self {
            Self::Region(_) => AttachmentKind::Region,
            Self::Mesh(_) => AttachmentKind::Mesh,
            Self::BoundingBox { .. } => AttachmentKind::BoundingBox,
            Self::Point { .. } => AttachmentKind::Point,
            Self::Clipping { .. } => AttachmentKind::Clipping,
            Self::Path { .. } => AttachmentKind::Path,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Region(region) => region.name(),
            Self::Mesh(mesh) => mesh.name(),
            Self::BoundingBox { name }
            | Self::Point { name }
            | Self::Clipping { name }
            | Self::Path { name } => name,
        }
    }
}

impl From<RegionAttachment> for Attachment {
    fn from(region: RegionAttachment) -> Self {
        Self::Region(region)
    }
}

impl From<MeshAttachment> for Attachment {
    fn from(mesh: MeshAttachment) -> Self {
        Self::Mesh(mesh)
    }
}
