//! Rendering pipeline components
//!
//! Vertex layout and shader programs for drawing flat-colored triangles.

pub mod program;
pub mod types;

pub use program::{LinkedProgram, ProgramError, ShaderProgram};
pub use types::Vertex;
