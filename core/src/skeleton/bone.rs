use crate::math::sin_cos_deg;

/// World transform of a bone, as computed by the animation runtime.
///
/// Maps a bone-local point `(x, y)` to world space:
///
/// ```text
/// world_x = a * x + b * y + world_x
/// world_y = c * x + d * y + world_y
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bone {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub world_x: f32,
    pub world_y: f32,
}

impl Bone {
    pub const IDENTITY: Self = Self {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        world_x: 0.0,
        world_y: 0.0,
    };

    /// Pure translation.
    pub fn from_translation(x: f32, y: f32) -> Self {
        Self {
            world_x: x,
            world_y: y,
            ..Self::IDENTITY
        }
    }

    /// Translation, rotation (degrees) and non-uniform scale, no shear.
    pub fn from_transform(x: f32, y: f32, rotation: f32, scale_x: f32, scale_y: f32) -> Self {
        let (sin, cos) = sin_cos_deg(rotation);
        Self {
            a: cos * scale_x,
            b: -sin * scale_y,
            c: sin * scale_x,
            d: cos * scale_y,
            world_x: x,
            world_y: y,
        }
    }

    /// Transform a bone-local point to world space.
    #[inline]
    pub fn transform_point(&self, x: f32, y: f32) -> (f32, f32) {
        (
            self.a * x + self.b * y + self.world_x,
            self.c * x + self.d * y + self.world_y,
        )
    }
}

impl Default for Bone {
    fn default() -> Self {
        Self::IDENTITY
    }
}
