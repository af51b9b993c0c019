//! Demo scenes
//!
//! A scene is the ordered list of triangles to draw and the fragment stage each
//! one is drawn with.

use std::fmt;

use glitter_render::geometry::{FIRST_TRIANGLE, HELLO_TRIANGLE, SECOND_TRIANGLE};
use glitter_render::{FragmentStage, Vertex};
use serde::{Deserialize, Serialize};

/// Which demo to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneKind {
    /// One orange triangle, one program
    HelloTriangle,
    /// An orange and a yellow triangle, two programs
    #[default]
    TwoTriangles,
}

impl fmt::Display for SceneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneKind::HelloTriangle => write!(f, "hello_triangle"),
            SceneKind::TwoTriangles => write!(f, "two_triangles"),
        }
    }
}

/// One mesh drawn with one fragment stage
#[derive(Debug, Clone, Copy)]
pub struct DrawSpec {
    pub label: &'static str,
    pub vertices: &'static [Vertex],
    pub fragment: FragmentStage,
}

/// Ordered draws for a scene
#[derive(Debug, Clone)]
pub struct Scene {
    kind: SceneKind,
    draws: Vec<DrawSpec>,
}

impl Scene {
    pub fn for_kind(kind: SceneKind) -> Self {
        let draws = match kind {
            SceneKind::HelloTriangle => vec![DrawSpec {
                label: "Hello Triangle",
                vertices: &HELLO_TRIANGLE,
                fragment: FragmentStage::Orange,
            }],
            SceneKind::TwoTriangles => vec![
                DrawSpec {
                    label: "First Triangle",
                    vertices: &FIRST_TRIANGLE,
                    fragment: FragmentStage::Orange,
                },
                DrawSpec {
                    label: "Second Triangle",
                    vertices: &SECOND_TRIANGLE,
                    fragment: FragmentStage::Yellow,
                },
            ],
        };
        Self { kind, draws }
    }

    pub fn kind(&self) -> SceneKind {
        self.kind
    }

    /// Draws in submission order
    pub fn draws(&self) -> &[DrawSpec] {
        &self.draws
    }

    pub fn vertex_count(&self) -> usize {
        self.draws.iter().map(|d| d.vertices.len()).sum()
    }
}
