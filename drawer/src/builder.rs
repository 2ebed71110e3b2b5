//! Attachment to vertex conversion.
//!
//! Builders write into a [`ScratchBuffer`] from a start offset and return
//! the number of vertices written. A build either writes everything or
//! nothing.

use rigdraw_core::Color;

use crate::error::DrawError;
use crate::scratch::ScratchBuffer;
use crate::vertex::Vertex;

/// Vertices staged per region: two triangles sharing the c0-c2 diagonal.
pub const REGION_VERTEX_COUNT: usize = 6;

const REGION_CORNERS: [usize; REGION_VERTEX_COUNT] = [0, 1, 2, 2, 3, 0];

/// Tint of a slot: skeleton color times slot color, per channel.
///
/// Not clamped.
#[inline]
pub fn tint(skeleton: Color, slot: Color) -> Color {
    skeleton.modulate(slot)
}

/// Stage a region quad as `c0 c1 c2 c2 c3 c0`.
///
/// `world` and `uvs` hold the four corners as interleaved pairs.
pub fn build_region(
    scratch: &mut ScratchBuffer,
    start: usize,
    world: &[f32; 8],
    uvs: &[f32; 8],
    tint: Color,
) -> Result<usize, DrawError> {
    scratch.ensure_room(start, REGION_VERTEX_COUNT)?;

    let window = scratch.window(start, REGION_VERTEX_COUNT);
    for (vertex, &corner) in window.iter_mut().zip(&REGION_CORNERS) {
        *vertex = Vertex::new(
            [world[corner * 2], world[corner * 2 + 1]],
            [uvs[corner * 2], uvs[corner * 2 + 1]],
            tint,
        );
    }
    Ok(REGION_VERTEX_COUNT)
}

/// Stage one vertex per triangle index, in index list order.
///
/// Index `i` reads position `world[2i..2i+2]` and UV `uvs[2i..2i+2]`.
pub fn build_mesh(
    scratch: &mut ScratchBuffer,
    start: usize,
    world: &[f32],
    uvs: &[f32],
    triangles: &[u16],
    tint: Color,
) -> Result<usize, DrawError> {
    let count = triangles.len();
    scratch.ensure_room(start, count)?;
    if count % 3 != 0 {
        return Err(DrawError::IncompleteTriangles(count));
    }

    let vertex_count = world.len().min(uvs.len()) / 2;
    if let Some(&index) = triangles.iter().find(|&&i| i as usize >= vertex_count) {
        return Err(DrawError::InvalidMeshIndex {
            index,
            vertex_count,
        });
    }

    let window = scratch.window(start, count);
    for (vertex, &index) in window.iter_mut().zip(triangles) {
        let i = index as usize * 2;
        *vertex = Vertex::new([world[i], world[i + 1]], [uvs[i], uvs[i + 1]], tint);
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORLD: [f32; 8] = [1.0, -1.0, -1.0, -1.0, -1.0, 1.0, 1.0, 1.0];
    const UVS: [f32; 8] = [1.0, 1.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0];

    #[test]
    fn test_tint_example() {
        assert_eq!(
            tint(Color::WHITE, Color::new(0.5, 0.2, 1.0, 1.0)),
            Color::new(0.5, 0.2, 1.0, 1.0)
        );
    }

    #[test]
    fn test_region_emits_six_with_shared_diagonal() {
        let mut scratch = ScratchBuffer::new(16);
        let written = build_region(&mut scratch, 0, &WORLD, &UVS, Color::WHITE).unwrap();
        assert_eq!(written, 6);

        let positions: Vec<[f32; 2]> = scratch.as_slice().iter().map(Vertex::position).collect();
        let corner = |c: usize| [WORLD[c * 2], WORLD[c * 2 + 1]];
        assert_eq!(
            positions,
            vec![corner(0), corner(1), corner(2), corner(2), corner(3), corner(0)]
        );
        assert_eq!(scratch.as_slice()[4].uv(), [1.0, 0.0]);
    }

    #[test]
    fn test_region_carries_tint() {
        let mut scratch = ScratchBuffer::new(6);
        let color = Color::new(0.1, 0.2, 0.3, 0.4);
        build_region(&mut scratch, 0, &WORLD, &UVS, color).unwrap();
        assert!(scratch.as_slice().iter().all(|v| v.color() == color));
    }

    #[test]
    fn test_region_needs_room_for_all_six() {
        let mut scratch = ScratchBuffer::new(5);
        let err = build_region(&mut scratch, 0, &WORLD, &UVS, Color::WHITE).unwrap_err();
        assert_eq!(
            err,
            DrawError::CapacityExceeded {
                required: 6,
                capacity: 5
            }
        );
        assert!(scratch.is_empty());
    }

    #[test]
    fn test_mesh_follows_index_list() {
        let world = [0.0, 0.0, 10.0, 0.0, 10.0, 10.0, 0.0, 10.0];
        let uvs = [0.0, 1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0];
        let triangles = [0, 1, 2, 2, 3, 0];
        let mut scratch = ScratchBuffer::new(16);

        let written = build_mesh(&mut scratch, 0, &world, &uvs, &triangles, Color::RED).unwrap();
        assert_eq!(written, triangles.len());
        for (vertex, &index) in scratch.as_slice().iter().zip(&triangles) {
            let i = index as usize * 2;
            assert_eq!(vertex.position(), [world[i], world[i + 1]]);
            assert_eq!(vertex.uv(), [uvs[i], uvs[i + 1]]);
            assert_eq!(vertex.color(), Color::RED);
        }
    }

    #[test]
    fn test_mesh_over_capacity_writes_nothing() {
        let world = [0.0; 6];
        let uvs = [0.0; 6];
        let triangles = [0, 1, 2, 0, 1, 2];
        let mut scratch = ScratchBuffer::new(5);

        let err = build_mesh(&mut scratch, 0, &world, &uvs, &triangles, Color::WHITE).unwrap_err();
        assert_eq!(
            err,
            DrawError::CapacityExceeded {
                required: 6,
                capacity: 5
            }
        );
        assert_eq!(scratch.len(), 0);
    }

    #[test]
    fn test_mesh_rejects_bad_index() {
        let world = [0.0; 6];
        let uvs = [0.0; 4];
        let mut scratch = ScratchBuffer::new(8);

        let err = build_mesh(&mut scratch, 0, &world, &uvs, &[0, 1, 2], Color::WHITE).unwrap_err();
        assert_eq!(
            err,
            DrawError::InvalidMeshIndex {
                index: 2,
                vertex_count: 2
            }
        );
        assert!(scratch.is_empty());
    }

    #[test]
    fn test_mesh_rejects_partial_triangle() {
        let mut scratch = ScratchBuffer::new(8);
        let err = build_mesh(&mut scratch, 0, &[0.0; 4], &[0.0; 4], &[0, 1], Color::WHITE);
        assert_eq!(err, Err(DrawError::IncompleteTriangles(2)));
    }

    #[test]
    fn test_build_at_offset() {
        let mut scratch = ScratchBuffer::new(12);
        build_region(&mut scratch, 6, &WORLD, &UVS, Color::WHITE).unwrap();
        assert_eq!(scratch.len(), 12);
        assert_eq!(scratch.as_slice()[6].position(), [1.0, -1.0]);
    }
}
