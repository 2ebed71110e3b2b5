//! Math type aliases and helper functions.

pub use nalgebra;

/// 2D vector (f32).
pub type Vec2 = nalgebra::Vector2<f32>;

/// 3D vector (f32).
pub type Vec3 = nalgebra::Vector3<f32>;

/// Multiplier converting degrees to radians.
pub const DEG_RAD: f32 = std::f32::consts::PI / 180.0;

/// Shorthand for [`Vec2::new`].
#[inline]
pub fn vec2(x: f32, y: f32) -> Vec2 {
    Vec2::new(x, y)
}

/// Shorthand for [`Vec3::new`].
#[inline]
pub fn vec3(x: f32, y: f32, z: f32) -> Vec3 {
    Vec3::new(x, y, z)
}

/// Sine and cosine of an angle given in degrees.
#[inline]
pub fn sin_cos_deg(degrees: f32) -> (f32, f32) {
    (degrees * DEG_RAD).sin_cos()
}
