//! Shader programs
//!
//! A program is a vertex stage linked with a fragment stage into a render
//! pipeline. Linking runs under a validation error scope, the same way shader
//! compilation does, so interface mismatches are reported instead of ignored.

use std::fmt;

use super::types::Vertex;
use crate::shader::{FRAGMENT_ENTRY_POINT, VERTEX_ENTRY_POINT};

/// Program link failure
#[derive(Debug, Clone)]
pub enum ProgramError {
    /// Pipeline creation failed validation; `log` holds the driver message
    Link { label: String, log: String },
}

impl fmt::Display for ProgramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgramError::Link { label, log } => {
                write!(f, "program '{}' failed to link:\n{}", label, log)
            }
        }
    }
}

impl std::error::Error for ProgramError {}

/// A linked render pipeline for one polygon mode
pub struct ShaderProgram {
    pipeline: wgpu::RenderPipeline,
    polygon_mode: wgpu::PolygonMode,
    label: String,
}

impl ShaderProgram {
    /// Link `vertex` and `fragment` into a triangle-list pipeline
    pub fn link(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        vertex: &wgpu::ShaderModule,
        fragment: &wgpu::ShaderModule,
        polygon_mode: wgpu::PolygonMode,
        label: &str,
    ) -> Result<Self, ProgramError> {
        device.push_error_scope(wgpu::ErrorFilter::Validation);

        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some(label),
            bind_group_layouts: &[],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(label),
            layout: Some(&layout),
            vertex: wgpu::VertexState {
                module: vertex,
                entry_point: Some(VERTEX_ENTRY_POINT),
                buffers: &[Vertex::buffer_layout()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: fragment,
                entry_point: Some(FRAGMENT_ENTRY_POINT),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // Static triangles are wound both ways; draw both faces
                cull_mode: None,
                unclipped_depth: false,
                polygon_mode,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        if let Some(error) = pollster::block_on(device.pop_error_scope()) {
            return Err(ProgramError::Link {
                label: label.to_string(),
                log: error.to_string(),
            });
        }

        log::debug!("Linked program '{}' ({:?})", label, polygon_mode);
        Ok(Self {
            pipeline,
            polygon_mode,
            label: label.to_string(),
        })
    }

    pub fn pipeline(&self) -> &wgpu::RenderPipeline {
        &self.pipeline
    }

    pub fn polygon_mode(&self) -> wgpu::PolygonMode {
        self.polygon_mode
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// A program linked for fill and, where supported, line rasterization
pub struct LinkedProgram {
    fill: ShaderProgram,
    wireframe: Option<ShaderProgram>,
}

impl LinkedProgram {
    /// Link the fill variant, and the line variant when `with_wireframe` is set
    pub fn link(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        vertex: &wgpu::ShaderModule,
        fragment: &wgpu::ShaderModule,
        with_wireframe: bool,
        label: &str,
    ) -> Result<Self, ProgramError> {
        let fill = ShaderProgram::link(
            device,
            surface_format,
            vertex,
            fragment,
            wgpu::PolygonMode::Fill,
            label,
        )?;

        let wireframe = if with_wireframe {
            Some(ShaderProgram::link(
                device,
                surface_format,
                vertex,
                fragment,
                wgpu::PolygonMode::Line,
                &format!("{} (wireframe)", label),
            )?)
        } else {
            None
        };

        Ok(Self { fill, wireframe })
    }

    /// Program for the requested mode, falling back to fill
    pub fn select(&self, wireframe: bool) -> &ShaderProgram {
        match (&self.wireframe, wireframe) {
            (Some(line), true) => line,
            _ => &self.fill,
        }
    }

    pub fn has_wireframe(&self) -> bool {
        self.wireframe.is_some()
    }
}
