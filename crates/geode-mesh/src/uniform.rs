//! Uniform 4-way subdivision (geodesic icosphere refinement).
//!
//! ```text
//!             v0
//!             /\
//!            /  \
//!        m0 /____\ m2
//!          /\    /\
//!         /  \  /  \
//!        /____\/____\
//!      v1     m1     v2
//! ```

use crate::mesh::Mesh;
use crate::midpoint_cache::MidpointCache;
use crate::vertex::Vertex;

/// Split every triangle into four using each vertex kind's own midpoint rule.
///
/// Triangle count grows 4x per pass; each shared edge gains exactly one vertex.
pub fn subdivide_uniform<V: Vertex>(mesh: Mesh<V>) -> Mesh<V> {
    subdivide_uniform_with(mesh, V::midpoint)
}

/// Split every triangle into four, deriving edge midpoints with `midpoint`.
///
/// The input vertex list is kept as the prefix of the output; new midpoints
/// are appended in the order their edges are first met. Children are emitted
/// per parent as the three corner triangles followed by the center one, all
/// with the parent's winding.
pub fn subdivide_uniform_with<V, F>(mesh: Mesh<V>, midpoint: F) -> Mesh<V>
where
    F: Fn(&V, &V) -> V,
{
    let Mesh {
        mut vertices,
        triangles,
    } = mesh;

    // Closed meshes have E = 3T/2.
    let mut cache = MidpointCache::with_capacity(triangles.len() * 3 / 2);
    let mut refined = Vec::with_capacity(triangles.len() * 4);

    for &[v0, v1, v2] in &triangles {
        let m0 = cache.get_or_create(&mut vertices, v0, v1, &midpoint);
        let m1 = cache.get_or_create(&mut vertices, v1, v2, &midpoint);
        let m2 = cache.get_or_create(&mut vertices, v2, v0, &midpoint);

        refined.push([v0, m0, m2]);
        refined.push([v1, m1, m0]);
        refined.push([v2, m2, m1]);
        refined.push([m0, m1, m2]);
    }

    tracing::trace!(
        parents = triangles.len(),
        split_edges = cache.len(),
        "uniform pass complete"
    );

    Mesh::new(vertices, refined)
}
