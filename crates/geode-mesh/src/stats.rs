//! Summary numbers for a generated mesh, for logs and sanity checks.

use rustc_hash::FxHashSet;

use crate::mesh::Mesh;
use crate::midpoint_cache::EdgeKey;
use crate::vertex::Vertex;

/// Size and shape summary of a mesh.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshStats {
    pub vertices: usize,
    pub triangles: usize,
    /// Distinct index-based edges.
    pub edges: usize,
    /// Smallest vertex distance from the origin.
    pub min_radius: f32,
    /// Largest vertex distance from the origin.
    pub max_radius: f32,
    /// Distinct vertex colors (0 for position-only meshes).
    pub distinct_colors: usize,
}

impl MeshStats {
    /// Compute the summary for `mesh`.
    pub fn compute<V: Vertex>(mesh: &Mesh<V>) -> Self {
        let mut edges = FxHashSet::default();
        for &[a, b, c] in &mesh.triangles {
            edges.insert(EdgeKey::new(a, b));
            edges.insert(EdgeKey::new(b, c));
            edges.insert(EdgeKey::new(c, a));
        }

        let (min_radius, max_radius) = mesh
            .vertices
            .iter()
            .map(|v| v.position().length())
            .fold((f32::INFINITY, 0.0_f32), |(lo, hi), r| (lo.min(r), hi.max(r)));

        // f32 is not Hash; compare colors by bit pattern.
        let distinct_colors = mesh
            .vertices
            .iter()
            .filter_map(|v| v.color())
            .map(|c| c.to_array().map(f32::to_bits))
            .collect::<FxHashSet<_>>()
            .len();

        Self {
            vertices: mesh.vertex_count(),
            triangles: mesh.triangle_count(),
            edges: edges.len(),
            min_radius: if mesh.vertices.is_empty() { 0.0 } else { min_radius },
            max_radius,
            distinct_colors,
        }
    }

    /// Largest deviation of any vertex from the unit sphere.
    pub fn unit_sphere_error(&self) -> f32 {
        (1.0 - self.min_radius).abs().max((self.max_radius - 1.0).abs())
    }

    /// `V - E + F`; 2 for a closed genus-0 surface with no seams.
    pub fn euler_characteristic(&self) -> i64 {
        self.vertices as i64 - self.edges as i64 + self.triangles as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polyhedron::{icosahedron, seamed_cube};

    #[test]
    fn test_icosahedron_stats() {
        let stats = MeshStats::compute(&icosahedron());
        assert_eq!(stats.vertices, 12);
        assert_eq!(stats.triangles, 20);
        assert_eq!(stats.edges, 30);
        assert_eq!(stats.euler_characteristic(), 2);
        assert_eq!(stats.distinct_colors, 0);
        assert!(stats.unit_sphere_error() < 1e-6);
    }

    #[test]
    fn test_seamed_cube_stats() {
        let stats = MeshStats::compute(&seamed_cube());
        assert_eq!(stats.vertices, 24);
        assert_eq!(stats.triangles, 12);
        // 4 boundary edges + 1 diagonal per face; nothing shared across faces.
        assert_eq!(stats.edges, 30);
        assert_eq!(stats.distinct_colors, 6);
    }

    #[test]
    fn test_empty_mesh_stats() {
        let mesh: Mesh<crate::vertex::PlainVertex> = Mesh::default();
        let stats = MeshStats::compute(&mesh);
        assert_eq!(stats.vertices, 0);
        assert_eq!(stats.min_radius, 0.0);
        assert_eq!(stats.max_radius, 0.0);
    }
}
