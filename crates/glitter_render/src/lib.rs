//! Triangle rendering library
//!
//! This crate provides the wgpu plumbing for the Glitter demos: a window-bound
//! GPU context, WGSL shader compilation, program linking and static meshes.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`shader::compile_shader`] - WGSL compilation with error capture
//! - [`pipeline::ShaderProgram`] - A vertex stage linked with a fragment stage
//! - [`mesh::TriangleMesh`] - Static vertex buffer for a list of triangles
//! - [`renderer::Renderer`] - Clear, draw and present one frame

pub mod context;
pub mod geometry;
pub mod mesh;
pub mod pipeline;
pub mod renderer;
pub mod shader;

pub use context::{ContextError, ContextOptions, RenderContext};
pub use mesh::{MeshError, TriangleMesh};
pub use pipeline::{LinkedProgram, ProgramError, ShaderProgram, Vertex};
pub use renderer::{DrawBatch, RenderError, Renderer};
pub use shader::{compile_shader, FragmentStage, ShaderError, ShaderStage};
