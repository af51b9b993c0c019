//! Static triangle meshes
//!
//! A mesh is the vertex buffer plus the vertex count needed to draw it.

use std::fmt;

use wgpu::util::DeviceExt;

use crate::pipeline::Vertex;

/// Mesh upload failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// No vertices were supplied
    Empty,
    /// The vertex count is not a whole number of triangles
    IncompleteTriangle { vertex_count: usize },
    /// The vertex count does not fit a draw call
    TooLarge { vertex_count: usize },
}

impl fmt::Display for MeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeshError::Empty => write!(f, "Mesh has no vertices"),
            MeshError::IncompleteTriangle { vertex_count } => {
                write!(f, "Mesh has {} vertices, not a multiple of 3", vertex_count)
            }
            MeshError::TooLarge { vertex_count } => {
                write!(f, "Mesh has {} vertices, too many for one draw", vertex_count)
            }
        }
    }
}

impl std::error::Error for MeshError {}

/// Check that `vertices` forms a triangle list and return its vertex count
pub fn validate_vertices(vertices: &[Vertex]) -> Result<u32, MeshError> {
    let vertex_count = vertices.len();
    if vertex_count == 0 {
        return Err(MeshError::Empty);
    }
    if vertex_count % 3 != 0 {
        return Err(MeshError::IncompleteTriangle { vertex_count });
    }
    u32::try_from(vertex_count).map_err(|_| MeshError::TooLarge { vertex_count })
}

/// Vertex buffer holding a triangle list
pub struct TriangleMesh {
    buffer: wgpu::Buffer,
    vertex_count: u32,
    label: String,
}

impl TriangleMesh {
    /// Upload `vertices` into a static vertex buffer
    pub fn upload(device: &wgpu::Device, label: &str, vertices: &[Vertex]) -> Result<Self, MeshError> {
        let vertex_count = validate_vertices(vertices)?;

        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        Ok(Self {
            buffer,
            vertex_count,
            label: label.to_string(),
        })
    }

    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    pub fn triangle_count(&self) -> u32 {
        self.vertex_count / 3
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}
