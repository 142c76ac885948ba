//! Longest-edge bisection: each pass splits every triangle in two across
//! its longest edge, interpolating vertex attributes at the new midpoint.

use geode_math::{Vector3, Vector3Ext};

use crate::mesh::Mesh;
use crate::midpoint_cache::MidpointCache;
use crate::vertex::Vertex;

/// Index of the longest edge of a triangle with the given corner positions.
///
/// Edge `e` runs from corner `e` to corner `(e + 1) % 3`. Ties go to the lowest
/// edge index: a later edge must be strictly longer to win. This is a fixed
/// policy that keeps output deterministic, not a geometric preference.
pub fn longest_edge(corners: [Vector3; 3]) -> usize {
    let mut best = 0;
    let mut best_len = (corners[1] - corners[0]).squared_length();
    for edge in 1..3 {
        let len = (corners[(edge + 1) % 3] - corners[edge]).squared_length();
        if len > best_len {
            best = edge;
            best_len = len;
        }
    }
    best
}

/// Bisect every triangle using each vertex kind's own midpoint rule.
pub fn subdivide_longest_edge<V: Vertex>(mesh: Mesh<V>) -> Mesh<V> {
    subdivide_longest_edge_with(mesh, V::midpoint)
}

/// Bisect every triangle across its longest edge, deriving midpoints with `midpoint`.
///
/// Edge lengths use positions only; color and other attributes never influence
/// which edge is split. For parent `(p, q, r)` split on edge `p`–`q` with
/// midpoint `m`, the children are `(p, m, r)` then `(m, q, r)`, both keeping
/// the parent's winding.
pub fn subdivide_longest_edge_with<V, F>(mesh: Mesh<V>, midpoint: F) -> Mesh<V>
where
    V: Vertex,
    F: Fn(&V, &V) -> V,
{
    let Mesh {
        mut vertices,
        triangles,
    } = mesh;

    let mut cache = MidpointCache::with_capacity(triangles.len());
    let mut refined = Vec::with_capacity(triangles.len() * 2);

    for tri in &triangles {
        let edge = longest_edge(tri.map(|i| vertices[i as usize].position()));
        let p = tri[edge];
        let q = tri[(edge + 1) % 3];
        let r = tri[(edge + 2) % 3];

        let m = cache.get_or_create(&mut vertices, p, q, &midpoint);

        refined.push([p, m, r]);
        refined.push([m, q, r]);
    }

    tracing::trace!(
        parents = triangles.len(),
        split_edges = cache.len(),
        "bisection pass complete"
    );

    Mesh::new(vertices, refined)
}
