//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - Shader compilation and program linking for the scene
//! - Mesh upload and frame rendering

use std::fmt;
use std::sync::Arc;
use winit::window::Window;
use glitter_render::{
    compile_shader,
    context::describe_adapter,
    shader::TRIANGLE_VERTEX_SOURCE,
    ContextError, ContextOptions, DrawBatch, LinkedProgram, MeshError, ProgramError,
    RenderContext, RenderError, Renderer, ShaderError, ShaderStage, TriangleMesh,
};
use crate::config::RenderingConfig;
use crate::scene::Scene;

/// Failures that stop the application before the first frame
#[derive(Debug)]
pub enum SetupError {
    Context(ContextError),
    Shader(ShaderError),
    Program(ProgramError),
    Mesh(MeshError),
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::Context(e) => write!(f, "GPU context: {}", e),
            SetupError::Shader(e) => write!(f, "Shader: {}", e),
            SetupError::Program(e) => write!(f, "Program: {}", e),
            SetupError::Mesh(e) => write!(f, "Mesh: {}", e),
        }
    }
}

impl std::error::Error for SetupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SetupError::Context(e) => Some(e),
            SetupError::Shader(e) => Some(e),
            SetupError::Program(e) => Some(e),
            SetupError::Mesh(e) => Some(e),
        }
    }
}

impl From<ContextError> for SetupError {
    fn from(err: ContextError) -> Self {
        SetupError::Context(err)
    }
}

impl From<ShaderError> for SetupError {
    fn from(err: ShaderError) -> Self {
        SetupError::Shader(err)
    }
}

impl From<ProgramError> for SetupError {
    fn from(err: ProgramError) -> Self {
        SetupError::Program(err)
    }
}

impl From<MeshError> for SetupError {
    fn from(err: MeshError) -> Self {
        SetupError::Mesh(err)
    }
}

/// A linked program and the mesh it draws
struct SceneDraw {
    program: LinkedProgram,
    mesh: TriangleMesh,
}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    renderer: Renderer,
    draws: Vec<SceneDraw>,
    wireframe: bool,
}

impl RenderSystem {
    /// Create the GPU context and build every draw of `scene`
    pub fn new(
        window: Arc<Window>,
        render_config: &RenderingConfig,
        vsync: bool,
        scene: &Scene,
    ) -> Result<Self, SetupError> {
        let options = ContextOptions {
            vsync,
            power_preference: render_config.power_preference.into(),
        };
        let context = pollster::block_on(RenderContext::new(window, options))?;
        log::info!("GPU: {}", describe_adapter(context.adapter_info()));

        let with_wireframe = context.supports_wireframe();
        let wireframe = if render_config.wireframe && !with_wireframe {
            log::warn!("Wireframe requested but the adapter lacks line rasterization; using fill");
            false
        } else {
            render_config.wireframe
        };

        let device = &context.device;
        let vertex = compile_shader(
            device,
            ShaderStage::Vertex,
            "Triangle Vertex Shader",
            TRIANGLE_VERTEX_SOURCE,
        )?;

        let mut draws = Vec::with_capacity(scene.draws().len());
        for draw in scene.draws() {
            let fragment = compile_shader(
                device,
                ShaderStage::Fragment,
                draw.fragment.label(),
                draw.fragment.source(),
            )?;
            let program = LinkedProgram::link(
                device,
                context.format(),
                &vertex,
                &fragment,
                with_wireframe,
                draw.label,
            )?;
            let mesh = TriangleMesh::upload(device, draw.label, draw.vertices)?;
            log::info!(
                "Program '{}' drawing '{}': {} vertices, {} triangle(s)",
                program.select(false).label(),
                mesh.label(),
                mesh.vertex_count(),
                mesh.triangle_count()
            );
            draws.push(SceneDraw { program, mesh });
        }

        Ok(Self {
            context,
            renderer: Renderer::new(render_config.clear_color),
            draws,
            wireframe,
        })
    }

    /// Handle window resize (the viewport follows the surface size)
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
    }

    /// Reconfigure the surface after it was lost
    pub fn recover_surface(&mut self) {
        self.context.reconfigure();
    }

    /// Toggle line rasterization, returning the new state
    pub fn toggle_wireframe(&mut self) -> bool {
        if self.context.supports_wireframe() {
            self.wireframe = !self.wireframe;
            log::info!("Wireframe: {}", if self.wireframe { "ON" } else { "OFF" });
        } else {
            log::warn!("Wireframe not supported by this adapter");
        }
        self.wireframe
    }

    pub fn wireframe(&self) -> bool {
        self.wireframe
    }

    /// Whether the surface currently has a drawable area
    pub fn is_drawable(&self) -> bool {
        self.context.is_drawable()
    }

    /// Render a single frame
    ///
    /// Skipped while the window has no drawable area.
    pub fn render_frame(&self) -> Result<(), RenderError> {
        if !self.context.is_drawable() {
            return Ok(());
        }

        let batches: Vec<DrawBatch<'_>> = self
            .draws
            .iter()
            .map(|draw| DrawBatch {
                program: draw.program.select(self.wireframe),
                mesh: &draw.mesh,
            })
            .collect();

        self.renderer.render(&self.context, &batches)
    }
}
