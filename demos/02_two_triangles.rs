//! 02 - Two Triangles
//!
//! Two triangles side by side, each drawn with its own program: the shared
//! vertex stage linked once with an orange and once with a yellow fragment
//! stage. The yellow triangle is drawn second.
//!
//! Press W to toggle wireframe where the adapter supports it.
//!
//! Run with: `cargo run --example 02_two_triangles`

use std::process::ExitCode;

use glitter::SceneKind;

fn main() -> ExitCode {
    glitter::run(Some(SceneKind::TwoTriangles))
}
