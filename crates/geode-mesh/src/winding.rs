//! Winding order validation for sphere meshes.
//!
//! Every triangle should be counter-clockwise when viewed from outside the
//! sphere so back-face culling keeps the near hemisphere.

use geode_math::Vector3;

use crate::mesh::Mesh;
use crate::vertex::Vertex;

/// Whether `v0 -> v1 -> v2` turns counter-clockwise seen from outside a
/// sphere centered at the origin.
///
/// Degenerate (zero-area) triangles count as not outward.
pub fn triangle_winds_outward(v0: Vector3, v1: Vector3, v2: Vector3) -> bool {
    let face_normal = (v1 - v0).cross(v2 - v0);
    let centroid = (v0 + v1 + v2) / 3.0;
    face_normal.dot(centroid) > 0.0
}

/// Number of triangles in `mesh` that wind inward (or are degenerate).
pub fn count_inward_triangles<V: Vertex>(mesh: &Mesh<V>) -> usize {
    mesh.triangles
        .iter()
        .filter(|tri| {
            let [v0, v1, v2] = mesh.triangle_positions(tri);
            !triangle_winds_outward(v0, v1, v2)
        })
        .count()
}
