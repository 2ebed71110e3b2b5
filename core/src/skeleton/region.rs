use crate::math::sin_cos_deg;
use crate::texture::TextureHandle;

use super::bone::Bone;

/// Placement of a region relative to its bone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionFrame {
    pub x: f32,
    pub y: f32,
    /// Rotation in degrees.
    pub rotation: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    pub width: f32,
    pub height: f32,
}

impl RegionFrame {
    /// Unrotated, unscaled frame of the given size centered on the bone.
    pub fn sized(width: f32, height: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            rotation: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            width,
            height,
        }
    }

    pub fn with_position(mut self, x: f32, y: f32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale_x: f32, scale_y: f32) -> Self {
        self.scale_x = scale_x;
        self.scale_y = scale_y;
        self
    }
}

/// Normalized rectangle of an atlas page.
///
/// `rotated` marks regions packed rotated 90 degrees in the atlas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtlasRect {
    pub u: f32,
    pub v: f32,
    pub u2: f32,
    pub v2: f32,
    pub rotated: bool,
}

impl AtlasRect {
    /// The whole page, unrotated.
    pub const FULL: Self = Self {
        u: 0.0,
        v: 0.0,
        u2: 1.0,
        v2: 1.0,
        rotated: false,
    };
}

/// A textured rectangle bound to a single bone.
///
/// Corners are stored in the order bottom-right, bottom-left, top-left,
/// top-right, as interleaved `x, y` pairs. UVs follow the same order.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionAttachment {
    name: String,
    texture: TextureHandle,
    offsets: [f32; 8],
    uvs: [f32; 8],
}

impl RegionAttachment {
    /// Build a region from its bone-local frame and atlas rectangle.
    pub fn new(
        name: impl Into<String>,
        texture: TextureHandle,
        frame: &RegionFrame,
        rect: &AtlasRect,
    ) -> Self {
        Self {
            name: name.into(),
            texture,
            offsets: corner_offsets(frame),
            uvs: corner_uvs(rect),
        }
    }

    /// Build a region from precomputed corner offsets and UVs.
    pub fn from_raw(
        name: impl Into<String>,
        texture: TextureHandle,
        offsets: [f32; 8],
        uvs: [f32; 8],
    ) -> Self {
        Self {
            name: name.into(),
            texture,
            offsets,
            uvs,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn texture(&self) -> TextureHandle {
        self.texture
    }

    pub fn offsets(&self) -> &[f32; 8] {
        &self.offsets
    }

    pub fn uvs(&self) -> &[f32; 8] {
        &self.uvs
    }

    /// Transform the four corners into world space.
    pub fn compute_world_vertices(&self, bone: &Bone, out: &mut [f32; 8]) {
        for (local, world) in self.offsets.chunks_exact(2).zip(out.chunks_exact_mut(2)) {
            let (x, y) = bone.transform_point(local[0], local[1]);
            world[0] = x;
            world[1] = y;
        }
    }
}

fn corner_offsets(frame: &RegionFrame) -> [f32; 8] {
    let local_x = -frame.width / 2.0 * frame.scale_x;
    let local_y = -frame.height / 2.0 * frame.scale_y;
    let local_x2 = local_x + frame.width * frame.scale_x;
    let local_y2 = local_y + frame.height * frame.scale_y;

    let (sin, cos) = sin_cos_deg(frame.rotation);
    let x_cos = local_x * cos + frame.x;
    let x_sin = local_x * sin;
    let y_cos = local_y * cos + frame.y;
    let y_sin = local_y * sin;
    let x2_cos = local_x2 * cos + frame.x;
    let x2_sin = local_x2 * sin;
    let y2_cos = local_y2 * cos + frame.y;
    let y2_sin = local_y2 * sin;

    [
        x2_cos - y_sin,
        y_cos + x2_sin,
        x_cos - y_sin,
        y_cos + x_sin,
        x_cos - y2_sin,
        y2_cos + x_sin,
        x2_cos - y2_sin,
        y2_cos + x2_sin,
    ]
}

fn corner_uvs(rect: &AtlasRect) -> [f32; 8] {
    let AtlasRect { u, v, u2, v2, .. } = *rect;
    if rect.rotated {
        [u2, v, u2, v2, u, v2, u, v]
    } else {
        [u2, v2, u, v2, u, v, u2, v]
    }
}
