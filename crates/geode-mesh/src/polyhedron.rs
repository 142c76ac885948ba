//! Seed meshes that subdivision starts from.

use geode_math::Vector3;

use crate::cube_face::CubeFace;
use crate::mesh::{Mesh, Triangle};
use crate::vertex::{ColoredVertex, PlainVertex};

// Golden-ratio construction: (±X, 0, ±Z) and its cyclic permutations have unit length.
const X: f32 = 0.525_731_1;
const Z: f32 = 0.850_650_8;

/// The 12 vertices of a regular icosahedron inscribed in the unit sphere.
pub const ICOSAHEDRON_VERTICES: [Vector3; 12] = [
    Vector3::new(-X, 0.0, Z),
    Vector3::new(X, 0.0, Z),
    Vector3::new(-X, 0.0, -Z),
    Vector3::new(X, 0.0, -Z),
    Vector3::new(0.0, Z, X),
    Vector3::new(0.0, Z, -X),
    Vector3::new(0.0, -Z, X),
    Vector3::new(0.0, -Z, -X),
    Vector3::new(Z, X, 0.0),
    Vector3::new(-Z, X, 0.0),
    Vector3::new(Z, -X, 0.0),
    Vector3::new(-Z, -X, 0.0),
];

/// The 20 faces of the icosahedron, counter-clockwise seen from outside.
#[rustfmt::skip]
pub const ICOSAHEDRON_TRIANGLES: [Triangle; 20] = [
    [0, 1, 4], [0, 4, 9], [9, 4, 5], [4, 8, 5], [4, 1, 8],
    [8, 1, 10], [8, 10, 3], [5, 8, 3], [5, 3, 2], [2, 3, 7],
    [7, 3, 10], [7, 10, 6], [7, 6, 11], [11, 6, 0], [0, 6, 1],
    [6, 10, 1], [9, 11, 0], [9, 2, 11], [9, 5, 2], [7, 11, 2],
];

/// Position-only icosahedron: 12 vertices, 20 triangles.
pub fn icosahedron() -> Mesh<PlainVertex> {
    Mesh::new(
        ICOSAHEDRON_VERTICES.map(PlainVertex::new).to_vec(),
        ICOSAHEDRON_TRIANGLES.to_vec(),
    )
}

/// Cube whose faces each own their four corners: 24 vertices, 12 triangles.
///
/// Corners are projected onto the unit sphere and painted with their face's
/// palette color. Coincident corners of neighbouring faces keep separate
/// indices, so no pass ever blends colors across a face boundary.
pub fn seamed_cube() -> Mesh<ColoredVertex> {
    let mut vertices = Vec::with_capacity(24);
    let mut triangles = Vec::with_capacity(12);

    for face in CubeFace::ALL {
        let base = vertices.len() as u32;
        let color = face.color();
        vertices.extend(
            face.corners()
                .map(|corner| ColoredVertex::new(color, corner.normalize())),
        );
        triangles.push([base, base + 1, base + 2]);
        triangles.push([base, base + 2, base + 3]);
    }

    Mesh::new(vertices, triangles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::winding::count_inward_triangles;

    #[test]
    fn test_icosahedron_vertices_on_unit_sphere() {
        for v in ICOSAHEDRON_VERTICES {
            assert!(
                (v.length() - 1.0).abs() < 1e-6,
                "Icosahedron vertex {v} has length {}",
                v.length()
            );
        }
    }

    #[test]
    fn test_icosahedron_edges_have_equal_length() {
        let mesh = icosahedron();
        let reference = ICOSAHEDRON_VERTICES[0].distance_squared(ICOSAHEDRON_VERTICES[1]);
        for tri in &mesh.triangles {
            let [a, b, c] = mesh.triangle_positions(tri);
            for len in [a.distance_squared(b), b.distance_squared(c), c.distance_squared(a)] {
                assert!((len - reference).abs() < 1e-5, "uneven edge in {tri:?}");
            }
        }
    }

    #[test]
    fn test_icosahedron_winds_outward() {
        assert_eq!(count_inward_triangles(&icosahedron()), 0);
    }

    #[test]
    fn test_icosahedron_every_vertex_has_valence_five() {
        let mut valence = [0usize; 12];
        for tri in ICOSAHEDRON_TRIANGLES {
            for i in tri {
                valence[i as usize] += 1;
            }
        }
        assert!(valence.iter().all(|&v| v == 5), "valences: {valence:?}");
    }

    #[test]
    fn test_seamed_cube_counts() {
        let cube = seamed_cube();
        assert_eq!(cube.vertex_count(), 24);
        assert_eq!(cube.triangle_count(), 12);
        assert_eq!(cube.validate(), Ok(()));
    }

    #[test]
    fn test_seamed_cube_corners_on_unit_sphere() {
        for v in seamed_cube().vertices {
            assert!((v.position.length() - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_seamed_cube_winds_outward() {
        assert_eq!(count_inward_triangles(&seamed_cube()), 0);
    }

    #[test]
    fn test_seamed_cube_triangles_stay_within_one_face() {
        let cube = seamed_cube();
        for tri in &cube.triangles {
            let colors = tri.map(|i| cube.vertices[i as usize].color);
            assert_eq!(colors[0], colors[1]);
            assert_eq!(colors[1], colors[2]);
        }
    }
}
