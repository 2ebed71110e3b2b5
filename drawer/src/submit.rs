//! Primitive submission of staged vertices.

use rigdraw_core::Color;
use rigdraw_core::math::{Vec3, vec2};
use rigdraw_graphics::{GpuTextureId, ImmediateBackend, PrimitiveMode};

use crate::vertex::Vertex;
use crate::winding::WindingOrder;

/// Submit a staged region as one quad, plus its back face when
/// `double_faced` is set. Returns the number of batches submitted.
pub(crate) fn submit_region<B: ImmediateBackend + ?Sized>(
    backend: &mut B,
    texture: GpuTextureId,
    vertices: &[Vertex],
    winding: WindingOrder,
    position: Vec3,
    bias: f32,
    double_faced: bool,
) -> usize {
    backend.set_texture(Some(texture));
    backend.push_matrix();

    emit_quad(backend, vertices, winding.corner_indices(), position, position.z + bias);
    let mut submissions = 1;

    if double_faced {
        emit_quad(
            backend,
            vertices,
            winding.reversed().corner_indices(),
            position,
            position.z - bias,
        );
        submissions += 1;
    }

    backend.pop_matrix();
    backend.set_texture(None);
    log::trace!(
        "Submitted region on {:?}: {} batches at z {}",
        texture,
        submissions,
        position.z + bias
    );
    submissions
}

/// Submit staged mesh vertices as one triangle list.
///
/// Each triangle is emitted in reverse index order. When `wireframe` is set
/// every triangle is outlined afterwards, the first one in red.
pub(crate) fn submit_mesh<B: ImmediateBackend + ?Sized>(
    backend: &mut B,
    texture: GpuTextureId,
    vertices: &[Vertex],
    position: Vec3,
    bias: f32,
    wireframe: bool,
) -> usize {
    backend.set_texture(Some(texture));
    backend.push_matrix();

    backend.begin(PrimitiveMode::Triangles);
    backend.normal3f(0.0, 0.0, 1.0);
    for triangle in vertices.chunks_exact(3) {
        for vertex in triangle.iter().rev() {
            emit_vertex(backend, vertex, position, position.z + bias);
        }
    }
    backend.end();

    backend.pop_matrix();
    backend.set_texture(None);
    log::trace!(
        "Submitted mesh on {:?}: {} vertices at z {}",
        texture,
        vertices.len(),
        position.z + bias
    );

    if wireframe {
        for (i, triangle) in vertices.chunks_exact(3).enumerate() {
            let corner = |v: &Vertex| vec2(v.x + position.x, v.y + position.y);
            backend.draw_triangle_lines(
                corner(&triangle[0]),
                corner(&triangle[1]),
                corner(&triangle[2]),
                if i == 0 { Color::RED } else { Color::GREEN },
            );
        }
    }
    1
}

fn emit_quad<B: ImmediateBackend + ?Sized>(
    backend: &mut B,
    vertices: &[Vertex],
    corners: [usize; 4],
    position: Vec3,
    z: f32,
) {
    if backend.supports_quads() {
        backend.begin(PrimitiveMode::Quads);
        backend.normal3f(0.0, 0.0, 1.0);
        for index in corners {
            emit_vertex(backend, &vertices[index], position, z);
        }
    } else {
        let [a, b, c, d] = corners;
        backend.begin(PrimitiveMode::Triangles);
        backend.normal3f(0.0, 0.0, 1.0);
        for index in [a, b, c, c, d, a] {
            emit_vertex(backend, &vertices[index], position, z);
        }
    }
    backend.end();
}

#[inline]
fn emit_vertex<B: ImmediateBackend + ?Sized>(
    backend: &mut B,
    vertex: &Vertex,
    position: Vec3,
    z: f32,
) {
    backend.color4f(vertex.r, vertex.g, vertex.b, vertex.a);
    backend.tex_coord2f(vertex.u, vertex.v);
    backend.vertex3f(position.x + vertex.x, position.y + vertex.y, z);
}
