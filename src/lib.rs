//! Glitter - triangle demos on wgpu
//!
//! Opens a window, compiles the bundled shaders, uploads static triangles and
//! redraws them until the window closes or Escape is pressed.

pub mod app;
pub mod config;
pub mod input;
pub mod logging;
pub mod scene;
pub mod systems;

pub use app::run;
pub use scene::SceneKind;
