//! Per-frame rendering
//!
//! Acquire the surface texture, clear it, draw each batch in order, submit and
//! present.

use std::fmt;

use crate::context::RenderContext;
use crate::mesh::TriangleMesh;
use crate::pipeline::ShaderProgram;

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// Surface was lost or outdated (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

/// One draw call: a program and the mesh it draws
#[derive(Clone, Copy)]
pub struct DrawBatch<'a> {
    pub program: &'a ShaderProgram,
    pub mesh: &'a TriangleMesh,
}

/// Clears the frame and draws batches
pub struct Renderer {
    clear_color: wgpu::Color,
}

impl Renderer {
    pub fn new(clear_color: [f32; 4]) -> Self {
        Self {
            clear_color: to_wgpu_color(clear_color),
        }
    }

    pub fn clear_color(&self) -> wgpu::Color {
        self.clear_color
    }

    /// Render a single frame
    ///
    /// Batches are drawn in order, so later batches cover earlier ones.
    pub fn render(&self, context: &RenderContext, batches: &[DrawBatch<'_>]) -> Result<(), RenderError> {
        let output = match context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                return Err(RenderError::SurfaceLost)
            }
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Triangle Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            for batch in batches {
                render_pass.set_pipeline(batch.program.pipeline());
                render_pass.set_vertex_buffer(0, batch.mesh.buffer().slice(..));
                render_pass.draw(0..batch.mesh.vertex_count(), 0..1);
            }
        }

        context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

/// Convert an RGBA array to a wgpu clear color
pub fn to_wgpu_color(rgba: [f32; 4]) -> wgpu::Color {
    wgpu::Color {
        r: rgba[0] as f64,
        g: rgba[1] as f64,
        b: rgba[2] as f64,
        a: rgba[3] as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_display() {
        assert_eq!(format!("{}", RenderError::SurfaceLost), "Surface lost");
        assert_eq!(format!("{}", RenderError::OutOfMemory), "Out of memory");
        assert_eq!(
            format!("{}", RenderError::Other("test".to_string())),
            "Render error: test"
        );
    }

    #[test]
    fn test_clear_color_conversion() {
        let renderer = Renderer::new([0.2, 0.3, 0.3, 1.0]);
        let color = renderer.clear_color();
        assert!((color.r - 0.2).abs() < 1e-6);
        assert!((color.g - 0.3).abs() < 1e-6);
        assert!((color.b - 0.3).abs() < 1e-6);
        assert_eq!(color.a, 1.0);
    }
}
