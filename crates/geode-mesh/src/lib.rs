//! Procedural sphere meshes: base polyhedra, edge-midpoint deduplication,
//! uniform and longest-edge subdivision, and pass-by-pass mesh assembly.

mod assembly;
mod bisection;
mod cube_face;
mod error;
mod gpu;
mod mesh;
mod midpoint_cache;
mod polyhedron;
mod stats;
mod uniform;
mod vertex;
mod winding;


pub use assembly::{
    BasePolyhedron, MeshRequest, SphereMesh, SubdivisionAlgorithm, build, refine, subdivide_once,
};
pub use bisection::{longest_edge, subdivide_longest_edge, subdivide_longest_edge_with};
pub use cube_face::CubeFace;
pub use error::MeshError;
pub use gpu::{GpuMesh, GpuVertex};
pub use mesh::{Mesh, Triangle, VertexSink};
pub use midpoint_cache::{EdgeKey, MidpointCache};
pub use polyhedron::{ICOSAHEDRON_TRIANGLES, ICOSAHEDRON_VERTICES, icosahedron, seamed_cube};
pub use stats::MeshStats;
pub use uniform::{subdivide_uniform, subdivide_uniform_with};
pub use vertex::{ColoredVertex, PlainVertex, Vertex};
pub use winding::{count_inward_triangles, triangle_winds_outward};
