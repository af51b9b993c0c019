//! Glitter - triangle demos on wgpu
//!
//! Draws the scene named in configuration (`scene.kind`).

use std::process::ExitCode;

fn main() -> ExitCode {
    glitter::run(None)
}
