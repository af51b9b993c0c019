//! Application systems
//!
//! The window and the GPU work it drives, kept out of the event handler.

mod render;
mod window;

pub use render::{RenderSystem, SetupError};
pub use window::{WindowError, WindowSystem};
