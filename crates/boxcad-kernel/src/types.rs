use serde::{Deserialize, Serialize};

/// Errors from kernel operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum KernelError {
    #[error("boolean operation failed: {reason}")]
    BooleanFailed { reason: String },

    #[error("tessellation failed: {reason}")]
    TessellationFailed { reason: String },

    #[error("invalid geometry: {message}")]
    InvalidGeometry { message: String },
}

/// Tessellated triangle mesh as flat arrays.
///
/// Vertices are non-indexed: position and normal arrays run parallel, and
/// `indices` is sequential. Keeps the mesh-format writers trivial.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TriangleMesh {
    /// Vertex positions, 3 floats per vertex.
    pub vertices: Vec<f32>,
    /// Per-vertex normals, 3 floats per vertex.
    pub normals: Vec<f32>,
    /// Triangle indices into the vertex array, 3 per triangle.
    pub indices: Vec<u32>,
}

impl TriangleMesh {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}
