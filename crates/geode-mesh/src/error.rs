//! Mesh generation error types.

/// Errors surfaced while building or validating a sphere mesh.
///
/// Every variant is a contract violation by the caller; generation performs
/// no I/O, so nothing here is worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MeshError {
    /// A request parameter is out of its valid domain (e.g. negative iterations).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The next pass could create more vertices than a `u32` index can address.
    #[error(
        "subdivision would overflow u32 indices ({vertices} vertices, {triangles} triangles before the pass)"
    )]
    IndexOverflow {
        /// Vertex count before the rejected pass.
        vertices: usize,
        /// Triangle count before the rejected pass.
        triangles: usize,
    },

    /// A triangle references a vertex that does not exist.
    #[error("triangle {triangle} references vertex {index}, but the mesh has {vertex_count} vertices")]
    IndexOutOfRange {
        /// Position of the offending triangle in the triangle list.
        triangle: usize,
        /// The out-of-range vertex index.
        index: u32,
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },

    /// A base polyhedron name that is not recognised.
    #[error("unknown base polyhedron: {0:?}")]
    UnknownBasePolyhedron(String),

    /// A subdivision algorithm name that is not recognised.
    #[error("unknown subdivision algorithm: {0:?}")]
    UnknownAlgorithm(String),
}
