//! CPU-side mesh geometry
//!
//! Pure data handed to the present stage; no backend-specific layout here.

/// Vertex with position and normal
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// Position in model space
    pub position: [f32; 3],

    /// Normal vector
    pub normal: [f32; 3],
}

/// Indexed triangle mesh
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    /// Vertex buffer
    pub vertices: Vec<Vertex>,

    /// Triangle index buffer, three indices per triangle
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Create a mesh from raw buffers
    pub fn new(vertices: Vec<Vertex>, indices: Vec<u32>) -> Self {
        Self { vertices, indices }
    }

    /// Number of triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// True when the mesh has no geometry
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}
