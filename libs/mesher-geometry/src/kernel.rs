//! # Geometry Kernel
//!
//! Small shared routines over triangle corners and flat vertex buffers.

use glam::DVec3;
use mesher_types::Aabb;

/// Reads the vertex at `index` out of a flat x,y,z buffer.
///
/// # Panics
///
/// Panics if the buffer is shorter than `3 * (index + 1)`.
#[inline]
pub fn vertex_at(vertices: &[f64], index: usize) -> DVec3 {
    DVec3::new(
        vertices[index * 3],
        vertices[index * 3 + 1],
        vertices[index * 3 + 2],
    )
}

/// Unnormalized face normal: cross product of the edges `(v1 - v0)` and
/// `(v2 - v0)`.
///
/// Callers accumulating normals must not normalize until accumulation is
/// finished.
#[inline]
pub fn face_normal(v0: DVec3, v1: DVec3, v2: DVec3) -> DVec3 {
    (v1 - v0).cross(v2 - v0)
}

/// Triangle area: half the magnitude of the face-normal cross product.
#[inline]
pub fn triangle_area(v0: DVec3, v1: DVec3, v2: DVec3) -> f64 {
    0.5 * face_normal(v0, v1, v2).length()
}

/// Signed volume of the tetrahedron spanned by a triangle and the origin:
/// scalar triple product divided by six.
///
/// Summed over all faces of a closed, consistently wound mesh this yields
/// the enclosed volume; for open meshes the sum is meaningless.
#[inline]
pub fn tetrahedron_signed_volume(v0: DVec3, v1: DVec3, v2: DVec3) -> f64 {
    v0.dot(v1.cross(v2)) / 6.0
}

/// Component-wise min/max bounding box over a flat vertex buffer.
///
/// Returns [`Aabb::ZERO`] for an empty buffer.
pub fn bounding_box(vertices: &[f64]) -> Aabb {
    if vertices.len() < 3 {
        return Aabb::ZERO;
    }

    let mut aabb = Aabb::new(vertex_at(vertices, 0), vertex_at(vertices, 0));
    for index in 1..vertices.len() / 3 {
        aabb.include(vertex_at(vertices, index));
    }
    aabb
}
