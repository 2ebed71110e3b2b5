use rigdraw_core::Color;

/// A textured, colored vertex staged in the scratch buffer.
///
/// Positions are relative to the frame's draw position; UVs are
/// normalized.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub x: f32,
    pub y: f32,
    pub u: f32,
    pub v: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Vertex {
    #[inline]
    pub fn new(position: [f32; 2], uv: [f32; 2], color: Color) -> Self {
        Self {
            x: position[0],
            y: position[1],
            u: uv[0],
            v: uv[1],
            r: color.r,
            g: color.g,
            b: color.b,
            a: color.a,
        }
    }

    pub fn position(&self) -> [f32; 2] {
        [self.x, self.y]
    }

    pub fn uv(&self) -> [f32; 2] {
        [self.u, self.v]
    }

    pub fn color(&self) -> Color {
        Color::new(self.r, self.g, self.b, self.a)
    }
}
