//! Static triangle geometry
//!
//! All positions are already in NDC, so the vertex stage passes them through.

use crate::pipeline::Vertex;

/// Single centered triangle
pub const HELLO_TRIANGLE: [Vertex; 3] = [
    Vertex::new(-0.5, -0.5, 0.0),
    Vertex::new(0.5, -0.5, 0.0),
    Vertex::new(0.0, 0.5, 0.0),
];

/// Left triangle of the two-triangle scene
pub const FIRST_TRIANGLE: [Vertex; 3] = [
    Vertex::new(-0.5, 0.5, 0.0),
    Vertex::new(-1.0, -0.5, 0.0),
    Vertex::new(0.0, -0.5, 0.0),
];

/// Right triangle of the two-triangle scene
pub const SECOND_TRIANGLE: [Vertex; 3] = [
    Vertex::new(0.0, -0.5, 0.0),
    Vertex::new(0.5, 0.5, 0.0),
    Vertex::new(1.0, -0.5, 0.0),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn area(tri: &[Vertex; 3]) -> f32 {
        let [a, b, c] = tri.map(|v| v.position);
        ((b[0] - a[0]) * (c[1] - a[1]) - (c[0] - a[0]) * (b[1] - a[1])).abs() / 2.0
    }

    #[test]
    fn test_triangles_in_ndc() {
        for tri in [&HELLO_TRIANGLE, &FIRST_TRIANGLE, &SECOND_TRIANGLE] {
            for v in tri {
                assert!(v.position.iter().all(|c| (-1.0f32..=1.0).contains(c)), "{:?} outside NDC", v);
            }
        }
    }

    #[test]
    fn test_triangles_not_degenerate() {
        assert!((area(&HELLO_TRIANGLE) - 0.5).abs() < 1e-6);
        assert!((area(&FIRST_TRIANGLE) - 0.5).abs() < 1e-6);
        assert!((area(&SECOND_TRIANGLE) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_two_triangles_share_a_vertex() {
        assert_eq!(FIRST_TRIANGLE[2], SECOND_TRIANGLE[0]);
    }
}
