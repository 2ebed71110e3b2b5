use crate::texture::TextureHandle;

use super::bone::Bone;
use super::error::SkeletonError;
use super::slot::Slot;

/// Influence of one bone on a weighted mesh vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoneWeight {
    pub bone: usize,
    /// Vertex position in the bone's local space.
    pub x: f32,
    pub y: f32,
    pub weight: f32,
}

/// Local vertex positions of a mesh.
#[derive(Debug, Clone, PartialEq)]
pub enum MeshVertices {
    /// Positions local to the slot's bone.
    Unweighted(Vec<[f32; 2]>),
    /// Per-vertex list of bone influences; weights of a vertex sum to 1.
    Weighted(Vec<Vec<BoneWeight>>),
}

impl MeshVertices {
    /// Number of logical vertices.
    pub fn len(&self) -> usize {
        match self {
            Self::Unweighted(positions) => positions.len(),
            Self::Weighted(weights) => weights.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of deform floats a slot must provide to animate this mesh.
    pub fn deform_len(&self) -> usize {
        match self {
            Self::Unweighted(positions) => positions.len() * 2,
            Self::Weighted(weights) => weights.iter().map(Vec::len).sum::<usize>() * 2,
        }
    }
}

/// A deformable triangulated surface.
///
/// `uvs` holds two floats per logical vertex. `triangles` holds three
/// vertex indices per triangle.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshAttachment {
    name: String,
    texture: TextureHandle,
    vertices: MeshVertices,
    uvs: Vec<f32>,
    triangles: Vec<u16>,
}

impl MeshAttachment {
    pub fn new(
        name: impl Into<String>,
        texture: TextureHandle,
        vertices: MeshVertices,
        uvs: Vec<f32>,
        triangles: Vec<u16>,
    ) -> Self {
        Self {
            name: name.into(),
            texture,
            vertices,
            uvs,
            triangles,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn texture(&self) -> TextureHandle {
        self.texture
    }

    pub fn vertices(&self) -> &MeshVertices {
        &self.vertices
    }

    pub fn uvs(&self) -> &[f32] {
        &self.uvs
    }

    pub fn triangles(&self) -> &[u16] {
        &self.triangles
    }

    /// Declared number of logical vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of floats [`compute_world_vertices`](Self::compute_world_vertices) writes.
    pub fn world_vertices_length(&self) -> usize {
        self.vertex_count() * 2
    }

    /// Compute interleaved world positions for every vertex into `out`.
    ///
    /// Applies the slot's deform when it is long enough for this mesh and
    /// ignores it otherwise. Returns the number of floats written.
    pub fn compute_world_vertices(
        &self,
        bones: &[Bone],
        slot: &Slot,
        out: &mut [f32],
    ) -> Result<usize, SkeletonError> {
        let required = self.world_vertices_length();
        if out.len() < required {
            return Err(SkeletonError::OutputTooSmall {
                required,
                available: out.len(),
            });
        }

        let bone_at = |index: usize| {
            bones.get(index).ok_or(SkeletonError::BoneOutOfRange {
                bone: index,
                count: bones.len(),
            })
        };
        let deform = (slot.deform.len() >= self.vertices.deform_len()).then_some(&slot.deform[..]);

        match &self.vertices {
            MeshVertices::Unweighted(positions) => {
                let bone = bone_at(slot.bone)?;
                for (i, position) in positions.iter().enumerate() {
                    let (vx, vy) = match deform {
                        Some(deform) => (deform[i * 2], deform[i * 2 + 1]),
                        None => (position[0], position[1]),
                    };
                    let (x, y) = bone.transform_point(vx, vy);
                    out[i * 2] = x;
                    out[i * 2 + 1] = y;
                }
            }
            MeshVertices::Weighted(vertices) => {
                let mut f = 0;
                for (i, weights) in vertices.iter().enumerate() {
                    let mut wx = 0.0;
                    let mut wy = 0.0;
                    for weight in weights {
                        let bone = bone_at(weight.bone)?;
                        let (dx, dy) = match deform {
                            Some(deform) => (deform[f], deform[f + 1]),
                            None => (0.0, 0.0),
                        };
                        f += 2;
                        let (x, y) = bone.transform_point(weight.x + dx, weight.y + dy);
                        wx += x * weight.weight;
                        wy += y * weight.weight;
                    }
                    out[i * 2] = wx;
                    out[i * 2 + 1] = wy;
                }
            }
        }

        Ok(required)
    }
}
