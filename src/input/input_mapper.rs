//! Input mapping from raw events to semantic actions
//!
//! Maps keyboard input to the few actions the demos understand.

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Actions triggered by key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Close the window and exit (Escape)
    Exit,
    /// Toggle borderless fullscreen (F key)
    ToggleFullscreen,
    /// Toggle line rasterization (W key)
    ToggleWireframe,
}

/// Maps raw input events to semantic actions
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Only presses map to actions; releases and unbound keys return `None`.
    pub fn map_keyboard(key: KeyCode, state: ElementState) -> Option<InputAction> {
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Escape => Some(InputAction::Exit),
            KeyCode::KeyF => Some(InputAction::ToggleFullscreen),
            KeyCode::KeyW => Some(InputAction::ToggleWireframe),
            _ => None,
        }
    }
}
