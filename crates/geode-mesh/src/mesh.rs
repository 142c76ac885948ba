//! Indexed triangle mesh and the draw-stream hand-off to a renderer.

use geode_math::Vector3;

use crate::error::MeshError;
use crate::vertex::Vertex;

/// Three vertex indices, counter-clockwise when seen from outside the sphere.
pub type Triangle = [u32; 3];

/// Receives the corners of a mesh one at a time, in draw order.
///
/// Implemented by whatever sits between the mesh and the graphics API
/// (immediate-mode submission, a vertex buffer builder, a test recorder).
pub trait VertexSink {
    /// Submit one triangle corner. `color` is `None` for position-only meshes.
    fn submit(&mut self, position: Vector3, color: Option<Vector3>);
}

impl VertexSink for Vec<(Vector3, Option<Vector3>)> {
    fn submit(&mut self, position: Vector3, color: Option<Vector3>) {
        self.push((position, color));
    }
}

/// An ordered vertex list paired with an ordered triangle list.
///
/// Vertex order is creation order: base vertices first, then each pass's
/// midpoints in the order they were first requested.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Mesh<V> {
    pub vertices: Vec<V>,
    pub triangles: Vec<Triangle>,
}

impl<V> Mesh<V> {
    /// Wrap existing vertex and triangle lists.
    pub fn new(vertices: Vec<V>, triangles: Vec<Triangle>) -> Self {
        Self {
            vertices,
            triangles,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Flattened index buffer, three entries per triangle.
    pub fn indices(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }

    /// Check that every triangle index addresses an existing vertex.
    pub fn validate(&self) -> Result<(), MeshError> {
        let vertex_count = self.vertices.len();
        for (triangle, tri) in self.triangles.iter().enumerate() {
            if let Some(&index) = tri.iter().find(|&&i| i as usize >= vertex_count) {
                return Err(MeshError::IndexOutOfRange {
                    triangle,
                    index,
                    vertex_count,
                });
            }
        }
        Ok(())
    }
}

impl<V: Vertex> Mesh<V> {
    /// Vertex positions, in vertex order.
    pub fn positions(&self) -> Vec<Vector3> {
        self.vertices.iter().map(Vertex::position).collect()
    }

    /// Corner positions of triangle `tri`.
    pub fn triangle_positions(&self, tri: &Triangle) -> [Vector3; 3] {
        tri.map(|i| self.vertices[i as usize].position())
    }

    /// Walk every triangle and submit its three corners in winding order.
    pub fn draw<S: VertexSink + ?Sized>(&self, sink: &mut S) {
        for tri in &self.triangles {
            for &i in tri {
                let v = &self.vertices[i as usize];
                sink.submit(v.position(), v.color());
            }
        }
    }
}
