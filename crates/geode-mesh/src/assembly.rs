//! Mesh assembly: pick a seed polyhedron and a refinement strategy, then run
//! the strategy pass by pass.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::bisection::subdivide_longest_edge;
use crate::error::MeshError;
use crate::gpu::GpuMesh;
use crate::mesh::{Mesh, VertexSink};
use crate::polyhedron::{icosahedron, seamed_cube};
use crate::stats::MeshStats;
use crate::uniform::subdivide_uniform;
use crate::vertex::{ColoredVertex, PlainVertex, Vertex};
use crate::winding::count_inward_triangles;

/// Seed mesh that subdivision starts from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BasePolyhedron {
    /// Regular icosahedron, position-only vertices.
    #[default]
    Icosahedron,
    /// Cube with per-face vertex copies and per-face colors.
    SeamedCube,
}

impl BasePolyhedron {
    pub const ALL: [BasePolyhedron; 2] = [BasePolyhedron::Icosahedron, BasePolyhedron::SeamedCube];

    /// Canonical kebab-case name.
    pub fn name(self) -> &'static str {
        match self {
            BasePolyhedron::Icosahedron => "icosahedron",
            BasePolyhedron::SeamedCube => "seamed-cube",
        }
    }
}

/// Refinement applied on every pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SubdivisionAlgorithm {
    /// Split every triangle into four at its edge midpoints.
    #[default]
    UniformFourWay,
    /// Split every triangle into two across its longest edge.
    LongestEdgeBisection,
}

impl SubdivisionAlgorithm {
    pub const ALL: [SubdivisionAlgorithm; 2] = [
        SubdivisionAlgorithm::UniformFourWay,
        SubdivisionAlgorithm::LongestEdgeBisection,
    ];

    /// Canonical kebab-case name.
    pub fn name(self) -> &'static str {
        match self {
            SubdivisionAlgorithm::UniformFourWay => "uniform-four-way",
            SubdivisionAlgorithm::LongestEdgeBisection => "longest-edge-bisection",
        }
    }

    /// Triangles produced per input triangle.
    pub fn growth_factor(self) -> usize {
        match self {
            SubdivisionAlgorithm::UniformFourWay => 4,
            SubdivisionAlgorithm::LongestEdgeBisection => 2,
        }
    }

    /// Upper bound on edges split per input triangle.
    fn max_new_vertices_per_triangle(self) -> usize {
        match self {
            SubdivisionAlgorithm::UniformFourWay => 3,
            SubdivisionAlgorithm::LongestEdgeBisection => 1,
        }
    }
}

/// Lowercase with separators stripped, so `SeamedCube`, `seamed-cube` and
/// `seamed_cube` all match.
fn squash(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for BasePolyhedron {
    type Err = MeshError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match squash(s).as_str() {
            "icosahedron" | "ico" => Ok(BasePolyhedron::Icosahedron),
            "seamedcube" | "cube" => Ok(BasePolyhedron::SeamedCube),
            _ => Err(MeshError::UnknownBasePolyhedron(s.to_string())),
        }
    }
}

impl FromStr for SubdivisionAlgorithm {
    type Err = MeshError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match squash(s).as_str() {
            "uniformfourway" | "uniform" | "4way" => Ok(SubdivisionAlgorithm::UniformFourWay),
            "longestedgebisection" | "longestedge" | "bisection" => {
                Ok(SubdivisionAlgorithm::LongestEdgeBisection)
            }
            _ => Err(MeshError::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for BasePolyhedron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for SubdivisionAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether one more pass keeps every vertex index representable as `u32`.
fn pass_fits_u32(vertices: usize, triangles: usize, algorithm: SubdivisionAlgorithm) -> bool {
    triangles
        .checked_mul(algorithm.max_new_vertices_per_triangle())
        .and_then(|added| added.checked_add(vertices))
        .is_some_and(|total| total <= u32::MAX as usize)
}

/// Run exactly one pass of `algorithm` over `mesh`.
///
/// Fails with [`MeshError::IndexOverflow`] if the pass could create vertices
/// that a `u32` index cannot address.
pub fn subdivide_once<V: Vertex>(
    mesh: Mesh<V>,
    algorithm: SubdivisionAlgorithm,
) -> Result<Mesh<V>, MeshError> {
    if !pass_fits_u32(mesh.vertex_count(), mesh.triangle_count(), algorithm) {
        return Err(MeshError::IndexOverflow {
            vertices: mesh.vertex_count(),
            triangles: mesh.triangle_count(),
        });
    }
    Ok(match algorithm {
        SubdivisionAlgorithm::UniformFourWay => subdivide_uniform(mesh),
        SubdivisionAlgorithm::LongestEdgeBisection => subdivide_longest_edge(mesh),
    })
}

/// Apply `algorithm` to `mesh` `iterations` times.
///
/// Each pass consumes the previous pass's lists and builds its own midpoint
/// cache. Zero iterations returns `mesh` unchanged.
pub fn refine<V: Vertex>(
    mut mesh: Mesh<V>,
    algorithm: SubdivisionAlgorithm,
    iterations: u32,
) -> Result<Mesh<V>, MeshError> {
    for pass in 1..=iterations {
        mesh = subdivide_once(mesh, algorithm)?;
        debug!(
            "{} pass {}/{}: {} vertices, {} triangles",
            algorithm,
            pass,
            iterations,
            mesh.vertex_count(),
            mesh.triangle_count()
        );
    }
    Ok(mesh)
}

/// Build a sphere mesh from a seed polyhedron.
///
/// The icosahedron yields [`SphereMesh::Plain`], the seamed cube
/// [`SphereMesh::Colored`]. Either algorithm runs on either seed.
pub fn build(
    base: BasePolyhedron,
    algorithm: SubdivisionAlgorithm,
    iterations: u32,
) -> Result<SphereMesh, MeshError> {
    let mesh = match base {
        BasePolyhedron::Icosahedron => {
            SphereMesh::Plain(refine(icosahedron(), algorithm, iterations)?)
        }
        BasePolyhedron::SeamedCube => {
            SphereMesh::Colored(refine(seamed_cube(), algorithm, iterations)?)
        }
    };
    info!(
        "Built {} sphere ({}, {} iterations): {} vertices, {} triangles",
        base,
        algorithm,
        iterations,
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(mesh)
}

/// A validated build request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct MeshRequest {
    pub base: BasePolyhedron,
    pub algorithm: SubdivisionAlgorithm,
    pub iterations: u32,
}

impl MeshRequest {
    /// Validate a request whose iteration count comes from untyped input.
    ///
    /// Negative counts are rejected with [`MeshError::InvalidArgument`], never clamped.
    pub fn new(
        base: BasePolyhedron,
        algorithm: SubdivisionAlgorithm,
        iterations: i64,
    ) -> Result<Self, MeshError> {
        let iterations = u32::try_from(iterations).map_err(|_| {
            MeshError::InvalidArgument(format!(
                "iteration count must be a non-negative 32-bit integer, got {iterations}"
            ))
        })?;
        Ok(Self {
            base,
            algorithm,
            iterations,
        })
    }

    /// Run the request.
    pub fn build(&self) -> Result<SphereMesh, MeshError> {
        build(self.base, self.algorithm, self.iterations)
    }
}

/// A finished sphere mesh of either vertex kind.
#[derive(Clone, Debug, PartialEq)]
pub enum SphereMesh {
    Plain(Mesh<PlainVertex>),
    Colored(Mesh<ColoredVertex>),
}

impl SphereMesh {
    pub fn vertex_count(&self) -> usize {
        match self {
            SphereMesh::Plain(m) => m.vertex_count(),
            SphereMesh::Colored(m) => m.vertex_count(),
        }
    }

    pub fn triangle_count(&self) -> usize {
        match self {
            SphereMesh::Plain(m) => m.triangle_count(),
            SphereMesh::Colored(m) => m.triangle_count(),
        }
    }

    /// Whether vertices carry a color attribute.
    pub fn has_color(&self) -> bool {
        matches!(self, SphereMesh::Colored(_))
    }

    pub fn as_plain(&self) -> Option<&Mesh<PlainVertex>> {
        match self {
            SphereMesh::Plain(m) => Some(m),
            SphereMesh::Colored(_) => None,
        }
    }

    pub fn as_colored(&self) -> Option<&Mesh<ColoredVertex>> {
        match self {
            SphereMesh::Plain(_) => None,
            SphereMesh::Colored(m) => Some(m),
        }
    }

    pub fn validate(&self) -> Result<(), MeshError> {
        match self {
            SphereMesh::Plain(m) => m.validate(),
            SphereMesh::Colored(m) => m.validate(),
        }
    }

    pub fn stats(&self) -> MeshStats {
        match self {
            SphereMesh::Plain(m) => MeshStats::compute(m),
            SphereMesh::Colored(m) => MeshStats::compute(m),
        }
    }

    /// Number of triangles facing the sphere center.
    pub fn inward_triangles(&self) -> usize {
        match self {
            SphereMesh::Plain(m) => count_inward_triangles(m),
            SphereMesh::Colored(m) => count_inward_triangles(m),
        }
    }

    /// Submit every triangle corner to `sink` in winding order.
    pub fn draw<S: VertexSink + ?Sized>(&self, sink: &mut S) {
        match self {
            SphereMesh::Plain(m) => m.draw(sink),
            SphereMesh::Colored(m) => m.draw(sink),
        }
    }

    /// Pack into upload-ready buffers.
    pub fn to_gpu(&self) -> GpuMesh {
        match self {
            SphereMesh::Plain(m) => GpuMesh::from_mesh(m),
            SphereMesh::Colored(m) => GpuMesh::from_mesh(m),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip_through_from_str() {
        for base in BasePolyhedron::ALL {
            assert_eq!(base.name().parse::<BasePolyhedron>(), Ok(base));
            assert_eq!(base.to_string(), base.name());
        }
        for algorithm in SubdivisionAlgorithm::ALL {
            assert_eq!(algorithm.name().parse::<SubdivisionAlgorithm>(), Ok(algorithm));
        }
    }

    #[test]
    fn test_from_str_accepts_variant_spellings() {
        assert_eq!(
            "SeamedCube".parse::<BasePolyhedron>(),
            Ok(BasePolyhedron::SeamedCube)
        );
        assert_eq!(
            "seamed_cube".parse::<BasePolyhedron>(),
            Ok(BasePolyhedron::SeamedCube)
        );
        assert_eq!(
            "LongestEdgeBisection".parse::<SubdivisionAlgorithm>(),
            Ok(SubdivisionAlgorithm::LongestEdgeBisection)
        );
        assert_eq!(
            "uniform".parse::<SubdivisionAlgorithm>(),
            Ok(SubdivisionAlgorithm::UniformFourWay)
        );
    }

    #[test]
    fn test_from_str_rejects_unknown_names() {
        assert_eq!(
            "dodecahedron".parse::<BasePolyhedron>(),
            Err(MeshError::UnknownBasePolyhedron("dodecahedron".into()))
        );
        assert_eq!(
            "loop".parse::<SubdivisionAlgorithm>(),
            Err(MeshError::UnknownAlgorithm("loop".into()))
        );
    }

    #[test]
    fn test_request_rejects_negative_iterations() {
        let result = MeshRequest::new(
            BasePolyhedron::Icosahedron,
            SubdivisionAlgorithm::UniformFourWay,
            -1,
        );
        assert!(matches!(result, Err(MeshError::InvalidArgument(_))));
    }

    #[test]
    fn test_request_accepts_zero_iterations() {
        let request = MeshRequest::new(
            BasePolyhedron::SeamedCube,
            SubdivisionAlgorithm::LongestEdgeBisection,
            0,
        )
        .unwrap();
        assert_eq!(request.iterations, 0);
        let mesh = request.build().unwrap();
        assert_eq!(mesh.triangle_count(), 12);
        assert!(mesh.has_color());
    }

    #[test]
    fn test_pass_capacity_check() {
        let uniform = SubdivisionAlgorithm::UniformFourWay;
        let bisection = SubdivisionAlgorithm::LongestEdgeBisection;
        assert!(pass_fits_u32(42, 80, uniform));
        let limit = u32::MAX as usize;
        assert!(pass_fits_u32(limit - 3, 1, uniform));
        assert!(!pass_fits_u32(limit - 2, 1, uniform));
        assert!(pass_fits_u32(limit - 1, 1, bisection));
        assert!(!pass_fits_u32(limit, 1, bisection));
        assert!(!pass_fits_u32(0, usize::MAX, uniform));
    }

    #[test]
    fn test_refine_zero_iterations_is_identity() {
        let base = seamed_cube();
        let refined = refine(base.clone(), SubdivisionAlgorithm::UniformFourWay, 0).unwrap();
        assert_eq!(refined, base);
    }

    #[test]
    fn test_subdivide_once_matches_growth_factor() {
        for algorithm in SubdivisionAlgorithm::ALL {
            let mesh = subdivide_once(icosahedron(), algorithm).unwrap();
            assert_eq!(mesh.triangle_count(), 20 * algorithm.growth_factor());
        }
    }

    #[test]
    fn test_sphere_mesh_accessors() {
        let plain = build(BasePolyhedron::Icosahedron, SubdivisionAlgorithm::UniformFourWay, 1)
            .unwrap();
        assert!(plain.as_plain().is_some());
        assert!(plain.as_colored().is_none());
        assert!(!plain.has_color());
        assert_eq!(plain.validate(), Ok(()));
        assert_eq!(plain.inward_triangles(), 0);
        assert_eq!(plain.to_gpu().indices.len(), plain.triangle_count() * 3);

        let mut corners: Vec<(geode_math::Vector3, Option<geode_math::Vector3>)> = Vec::new();
        plain.draw(&mut corners);
        assert_eq!(corners.len(), 80 * 3);
    }
}
