//! WGSL shader sources and compilation
//!
//! Shader sources are compiled into the binary. Compilation runs under a
//! validation error scope so a broken shader surfaces as a [`ShaderError`]
//! instead of reaching the device's uncaptured-error handler.

use std::fmt;

/// Vertex stage shared by every program
pub const TRIANGLE_VERTEX_SOURCE: &str = include_str!("shaders/triangle.wgsl");
/// Solid orange fragment stage
pub const ORANGE_FRAGMENT_SOURCE: &str = include_str!("shaders/orange.wgsl");
/// Solid yellow fragment stage
pub const YELLOW_FRAGMENT_SOURCE: &str = include_str!("shaders/yellow.wgsl");

/// Entry point of the vertex stage
pub const VERTEX_ENTRY_POINT: &str = "vs_main";
/// Entry point of every fragment stage
pub const FRAGMENT_ENTRY_POINT: &str = "fs_main";

/// Pipeline stage a shader module is compiled for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => write!(f, "vertex"),
            ShaderStage::Fragment => write!(f, "fragment"),
        }
    }
}

/// The bundled fragment stages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentStage {
    /// Fills with (1.0, 0.5, 0.2)
    Orange,
    /// Fills with (1.0, 1.0, 0.0)
    Yellow,
}

impl FragmentStage {
    /// WGSL source of this stage
    pub fn source(&self) -> &'static str {
        match self {
            FragmentStage::Orange => ORANGE_FRAGMENT_SOURCE,
            FragmentStage::Yellow => YELLOW_FRAGMENT_SOURCE,
        }
    }

    /// Debug label for the compiled module
    pub fn label(&self) -> &'static str {
        match self {
            FragmentStage::Orange => "Orange Fragment Shader",
            FragmentStage::Yellow => "Yellow Fragment Shader",
        }
    }
}

/// Shader compilation failure
#[derive(Debug, Clone)]
pub enum ShaderError {
    /// The module failed validation; `log` holds the compiler output
    Compile {
        stage: ShaderStage,
        label: String,
        log: String,
    },
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderError::Compile { stage, label, log } => {
                write!(f, "{} shader '{}' failed to compile:\n{}", stage, label, log)
            }
        }
    }
}

impl std::error::Error for ShaderError {}

/// Log level for a compiler message
///
/// Errors stay at debug; the returned [`ShaderError`] is reported once by the caller.
fn message_level(message_type: &wgpu::CompilationMessageType) -> log::Level {
    match message_type {
        wgpu::CompilationMessageType::Warning => log::Level::Warn,
        _ => log::Level::Debug,
    }
}

/// Compile a WGSL module for `stage`
///
/// Compiler messages are forwarded to the log. Any validation error turns into
/// [`ShaderError::Compile`].
pub fn compile_shader(
    device: &wgpu::Device,
    stage: ShaderStage,
    label: &str,
    source: &str,
) -> Result<wgpu::ShaderModule, ShaderError> {
    device.push_error_scope(wgpu::ErrorFilter::Validation);
    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    });

    let info = pollster::block_on(module.get_compilation_info());
    for message in &info.messages {
        let line = message
            .location
            .as_ref()
            .map(|loc| format!("{}:{}", loc.line_number, loc.line_position))
            .unwrap_or_else(|| "?".to_string());
        log::log!(
            message_level(&message.message_type),
            "{} ({}): {}",
            label,
            line,
            message.message
        );
    }

    if let Some(error) = pollster::block_on(device.pop_error_scope()) {
        return Err(ShaderError::Compile {
            stage,
            label: label.to_string(),
            log: error.to_string(),
        });
    }

    log::debug!("Compiled {} shader '{}'", stage, label);
    Ok(module)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_source_entry_point() {
        assert!(TRIANGLE_VERTEX_SOURCE.contains("@vertex"));
        assert!(TRIANGLE_VERTEX_SOURCE.contains(&format!("fn {}(", VERTEX_ENTRY_POINT)));
        assert!(TRIANGLE_VERTEX_SOURCE.contains("@location(0) position: vec3<f32>"));
    }

    #[test]
    fn test_fragment_sources_entry_point() {
        for stage in [FragmentStage::Orange, FragmentStage::Yellow] {
            let source = stage.source();
            assert!(source.contains("@fragment"), "{:?} lacks @fragment", stage);
            assert!(source.contains(&format!("fn {}(", FRAGMENT_ENTRY_POINT)));
        }
    }

    #[test]
    fn test_fragment_colors() {
        assert!(FragmentStage::Orange.source().contains("vec4<f32>(1.0, 0.5, 0.2, 1.0)"));
        assert!(FragmentStage::Yellow.source().contains("vec4<f32>(1.0, 1.0, 0.0, 1.0)"));
    }

    #[test]
    fn test_compiler_errors_not_logged_as_errors() {
        assert_eq!(message_level(&wgpu::CompilationMessageType::Error), log::Level::Debug);
        assert_eq!(message_level(&wgpu::CompilationMessageType::Warning), log::Level::Warn);
        assert_eq!(message_level(&wgpu::CompilationMessageType::Info), log::Level::Debug);
    }

    #[test]
    fn test_shader_error_display() {
        let err = ShaderError::Compile {
            stage: ShaderStage::Fragment,
            label: "Broken".to_string(),
            log: "unknown identifier".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "fragment shader 'Broken' failed to compile:\nunknown identifier"
        );
    }
}
