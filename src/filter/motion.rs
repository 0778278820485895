//! Motion vector extraction and noise filtering
//!
//! A raw trace arrives as absolute positions sampled over time. This
//! module turns consecutive positions into relative motion vectors, drops
//! near-zero movements (sensor jitter, idle hover between strokes), and
//! collapses runs of same-direction vectors so that one deliberate stroke
//! becomes one move.

use crate::geometry::vector::Vec2;
use crate::gesture::shape::Shape;
use serde::{Deserialize, Serialize};

/// Default magnitude below which a movement counts as idle noise
pub const DEFAULT_IDLE_MAGNITUDE_THRESHOLD: f64 = 5.0;

/// Default angle (degrees) under which a vector continues the previous
/// stroke direction
pub const DEFAULT_DIRECTION_ANGLE_THRESHOLD_DEG: f64 = 20.0;

/// An absolute position sampled by the input source.
///
/// The capture side may deliver 3D positions; `z` is accepted and ignored
/// (the recognizer is strictly planar).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct TracePoint {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

impl TracePoint {
    /// Create a planar trace point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }
}

/// Noise filter for raw motion vectors
#[derive(Debug, Clone)]
pub struct MotionFilter {
    /// Movements with magnitude at or below this are dropped
    pub idle_magnitude_threshold: f64,
    /// A vector within this angle of the last kept vector is dropped
    pub direction_angle_threshold_deg: f64,
}

impl MotionFilter {
    /// Create with default thresholds
    pub fn new() -> Self {
        Self {
            idle_magnitude_threshold: DEFAULT_IDLE_MAGNITUDE_THRESHOLD,
            direction_angle_threshold_deg: DEFAULT_DIRECTION_ANGLE_THRESHOLD_DEG,
        }
    }

    /// Create with custom thresholds
    pub fn with_thresholds(idle_magnitude: f64, direction_angle_deg: f64) -> Self {
        Self {
            idle_magnitude_threshold: idle_magnitude,
            direction_angle_threshold_deg: direction_angle_deg,
        }
    }

    /// Relative motion vectors between consecutive trace points.
    ///
    /// Produces `points.len() - 1` vectors; fewer than 2 points yield an
    /// empty sequence. `z` is projected away.
    pub fn to_motion_vectors(points: &[TracePoint]) -> Vec<Vec2> {
        points
            .windows(2)
            .map(|w| Vec2::new(w[1].x - w[0].x, w[1].y - w[0].y))
            .collect()
    }

    /// Drop vectors whose magnitude is at or below the idle threshold
    pub fn filter_by_magnitude(&self, vectors: &[Vec2]) -> Vec<Vec2> {
        vectors
            .iter()
            .copied()
            .filter(|v| v.magnitude() > self.idle_magnitude_threshold)
            .collect()
    }

    /// Collapse runs of same-direction vectors.
    ///
    /// The first vector is kept unconditionally. Each subsequent vector is
    /// compared against the last vector *kept* (the accumulator, not the
    /// raw stream) and survives only if the unsigned angle between the two
    /// exceeds the direction threshold. Fewer than 2 vectors pass through
    /// unchanged.
    pub fn filter_by_direction(&self, vectors: &[Vec2]) -> Vec<Vec2> {
        if vectors.len() < 2 {
            return vectors.to_vec();
        }

        let mut kept = Vec::with_capacity(vectors.len());
        kept.push(vectors[0]);

        for v in &vectors[1..] {
            let last = kept[kept.len() - 1];
            if last.angle_between(v) > self.direction_angle_threshold_deg {
                kept.push(*v);
            }
        }

        kept
    }

    /// Full filter pipeline: magnitude gate, then direction collapse on
    /// the survivors
    pub fn filter(&self, vectors: &[Vec2]) -> Vec<Vec2> {
        self.filter_by_direction(&self.filter_by_magnitude(vectors))
    }

    /// Build a query shape straight from a raw trace
    pub fn shape_from_trace(&self, points: &[TracePoint]) -> Shape {
        Shape::new(&self.filter(&Self::to_motion_vectors(points)))
    }
}

impl Default for MotionFilter {
    fn default() -> Self {
        Self::new()
    }
}
