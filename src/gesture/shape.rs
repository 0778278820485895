//! Shape signature and distance composition
//!
//! Defines the comparable form of a gesture and the per-axis DTW distance
//! between two shapes.

use crate::geometry::vector::Vec2;
use crate::matching::dtw::dtw_distance;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A gesture's path shape: an ordered sequence of unit motion vectors.
///
/// Construction normalizes every move to unit length into a fresh owned
/// buffer (the caller's vectors are left untouched). Zero-magnitude moves
/// stay zero rather than failing; they contribute zero to both axis
/// series, which lowers their local DTW cost relative to a unit vector.
/// A shape is immutable after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    moves: Vec<Vec2>,
}

impl Shape {
    /// Build a shape from raw motion vectors
    pub fn new(moves: &[Vec2]) -> Self {
        Self {
            moves: moves.iter().map(Vec2::normalized).collect(),
        }
    }

    /// The normalized move sequence
    pub fn moves(&self) -> &[Vec2] {
        &self.moves
    }

    /// Number of moves in the shape
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Whether the shape has no moves. An empty shape is a valid query;
    /// against any non-empty reference it costs the degenerate alignment,
    /// not a crash.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Dissimilarity to another shape.
    ///
    /// The x-components and y-components of the two move sequences are
    /// warped independently, then the two per-axis costs are combined as
    /// orthogonal error components: `sqrt(dx^2 + dy^2)`. Warping each
    /// axis on its own tolerates speed variation that differs between
    /// horizontal and vertical motion, at the cost of losing correlation
    /// between the axes. Existing reference distances depend on this
    /// exact composition.
    pub fn distance_to(&self, other: &Shape) -> f64 {
        let dx = dtw_distance(&self.axis_series(|v| v.x), &other.axis_series(|v| v.x));
        let dy = dtw_distance(&self.axis_series(|v| v.y), &other.axis_series(|v| v.y));
        (dx * dx + dy * dy).sqrt()
    }

    fn axis_series(&self, component: impl Fn(&Vec2) -> f64) -> Vec<f64> {
        self.moves.iter().map(component).collect()
    }
}

/// A reference shape registered under a gesture label.
///
/// Plain composition: consumers that need the shape use the `shape` field
/// directly. Multiple entries may share a name; each is one exemplar of
/// that gesture class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedShape {
    /// Gesture label
    pub name: String,
    /// The reference shape itself
    pub shape: Shape,
}

impl NamedShape {
    /// Build a named shape from raw motion vectors
    pub fn new(moves: &[Vec2], name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shape: Shape::new(moves),
        }
    }
}

impl fmt::Display for NamedShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NamedGesture({})", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_normalizes_moves() {
        let shape = Shape::new(&[Vec2::new(0.0, 100.0), Vec2::new(-3.0, 4.0)]);
        for v in shape.moves() {
            assert!((v.magnitude() - 1.0).abs() < 1e-9);
        }
        assert_eq!(shape.moves()[0], Vec2::new(0.0, 1.0));
    }

    #[test]
    fn test_construction_keeps_zero_moves() {
        let shape = Shape::new(&[Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0)]);
        assert_eq!(shape.moves()[0], Vec2::new(0.0, 0.0));
        assert_eq!(shape.moves()[1], Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_construction_does_not_alias_input() {
        let moves = vec![Vec2::new(5.0, 0.0)];
        let shape = Shape::new(&moves);
        // Caller's buffer is untouched; the shape owns a normalized copy.
        assert_eq!(moves[0], Vec2::new(5.0, 0.0));
        assert_eq!(shape.moves()[0], Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let shape = Shape::new(&[
            Vec2::new(1.0, 0.0),
            Vec2::new(-1.0, -1.0),
            Vec2::new(1.0, 0.0),
        ]);
        assert_eq!(shape.distance_to(&shape), 0.0);
    }

    #[test]
    fn test_distance_is_scale_invariant() {
        let small = Shape::new(&[Vec2::new(1.0, 1.0), Vec2::new(1.0, -1.0)]);
        let large = Shape::new(&[Vec2::new(80.0, 80.0), Vec2::new(80.0, -80.0)]);
        assert!(small.distance_to(&large) < 1e-9);
    }

    #[test]
    fn test_distance_combines_axes_euclidean() {
        // Single-move shapes: each axis warp degenerates to one local
        // cost, so the combined distance is the plain Euclidean distance
        // between the two unit vectors.
        let right = Shape::new(&[Vec2::new(1.0, 0.0)]);
        let up = Shape::new(&[Vec2::new(0.0, 1.0)]);
        let expected = (1.0f64 * 1.0 + 1.0 * 1.0).sqrt();
        assert!((right.distance_to(&up) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_empty_shape_distance_is_degenerate_alignment() {
        let empty = Shape::new(&[]);
        let line = Shape::new(&[Vec2::new(1.0, 0.0), Vec2::new(1.0, 0.0)]);
        // x-series sums |1| + |1| = 2, y-series sums 0.
        assert!((empty.distance_to(&line) - 2.0).abs() < 1e-9);
        assert_eq!(empty.distance_to(&empty), 0.0);
    }

    #[test]
    fn test_distance_symmetric_for_these_operands() {
        let a = Shape::new(&[Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)]);
        let b = Shape::new(&[Vec2::new(0.0, -1.0)]);
        assert!((a.distance_to(&b) - b.distance_to(&a)).abs() < 1e-9);
    }

    #[test]
    fn test_named_shape_display() {
        let named = NamedShape::new(&[Vec2::new(0.0, 1.0)], "vline");
        assert_eq!(named.to_string(), "NamedGesture(vline)");
    }

    #[test]
    fn test_named_shape_composes_shape() {
        let named = NamedShape::new(&[Vec2::new(0.0, 42.0)], "vline");
        assert_eq!(named.shape.moves()[0], Vec2::new(0.0, 1.0));
        assert_eq!(named.name, "vline");
    }
}
