//! 01 - Hello Triangle
//!
//! The smallest Glitter demo: one orange triangle drawn with one program.
//!
//! This demo shows:
//! - Creating a window with winit
//! - Compiling a vertex and a fragment shader
//! - Linking them into a program and uploading one triangle
//! - Clearing and drawing every frame until Escape is pressed
//!
//! Run with: `cargo run --example 01_hello_triangle`

use std::process::ExitCode;

use glitter::SceneKind;

fn main() -> ExitCode {
    glitter::run(Some(SceneKind::HelloTriangle))
}
