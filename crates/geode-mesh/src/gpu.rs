//! GPU-ready interleaved vertex and index buffers.

use crate::mesh::Mesh;
use crate::vertex::Vertex;

/// Color given to vertices that carry none.
const DEFAULT_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// One interleaved vertex: position then RGBA color, 16-byte aligned fields.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuVertex {
    /// xyz position, w = 1.
    pub position: [f32; 4],
    /// rgba color, a = 1.
    pub color: [f32; 4],
}

static_assertions::assert_eq_size!(GpuVertex, [u8; 32]);

impl GpuVertex {
    /// Pack a mesh vertex. Position-only vertices are painted opaque white.
    pub fn from_vertex<V: Vertex>(v: &V) -> Self {
        let p = v.position();
        let color = v
            .color()
            .map_or(DEFAULT_COLOR, |c| [c.x, c.y, c.z, 1.0]);
        Self {
            position: [p.x, p.y, p.z, 1.0],
            color,
        }
    }
}

/// Vertex and index buffers ready for upload.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GpuMesh {
    pub vertices: Vec<GpuVertex>,
    pub indices: Vec<u32>,
}

impl GpuMesh {
    /// Pack `mesh`, keeping vertex order and triangle winding.
    pub fn from_mesh<V: Vertex>(mesh: &Mesh<V>) -> Self {
        Self {
            vertices: mesh.vertices.iter().map(GpuVertex::from_vertex).collect(),
            indices: mesh.indices(),
        }
    }

    /// Raw bytes of the vertex buffer.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw bytes of the index buffer.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}
