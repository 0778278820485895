//! 2D motion vector
//!
//! The fundamental unit of a gesture: a relative movement between two
//! sampled positions.

use serde::{Deserialize, Serialize};

/// A 2D vector (relative motion between two trace points)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    /// Create a new vector
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean magnitude
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Unit-length copy of this vector.
    ///
    /// A zero-magnitude vector cannot be scaled to unit length; it is
    /// returned unchanged rather than dividing by zero. Downstream
    /// matching treats such degenerate moves as contributing zero to both
    /// axis series.
    pub fn normalized(&self) -> Self {
        let mag = self.magnitude();
        if mag < 1e-12 {
            return *self;
        }
        Self {
            x: self.x / mag,
            y: self.y / mag,
        }
    }

    /// Unsigned angle to another vector, in degrees (0-180).
    ///
    /// Returns 0 when either operand has zero magnitude, so a degenerate
    /// vector reads as "same direction" to the direction filter and is
    /// coalesced away deterministically.
    pub fn angle_between(&self, other: &Vec2) -> f64 {
        let mags = self.magnitude() * other.magnitude();
        if mags < 1e-12 {
            return 0.0;
        }

        let cos = ((self.x * other.x + self.y * other.y) / mags).clamp(-1.0, 1.0);
        cos.acos().to_degrees()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude() {
        let v = Vec2::new(3.0, 4.0);
        assert!((v.magnitude() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_normalized_unit_length() {
        let v = Vec2::new(10.0, -10.0).normalized();
        assert!((v.magnitude() - 1.0).abs() < 1e-9);
        assert!(v.x > 0.0 && v.y < 0.0);
    }

    #[test]
    fn test_normalized_zero_vector_stays_zero() {
        let v = Vec2::new(0.0, 0.0).normalized();
        assert_eq!(v, Vec2::new(0.0, 0.0));
    }

    #[test]
    fn test_angle_between_orthogonal() {
        let a = Vec2::new(1.0, 0.0);
        let b = Vec2::new(0.0, 1.0);
        assert!((a.angle_between(&b) - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_angle_between_opposite() {
        let a = Vec2::new(1.0, 0.0);
        let b = Vec2::new(-2.0, 0.0);
        assert!((a.angle_between(&b) - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_angle_between_is_unsigned() {
        let a = Vec2::new(1.0, 0.0);
        let up = Vec2::new(1.0, 1.0);
        let down = Vec2::new(1.0, -1.0);
        assert!((a.angle_between(&up) - a.angle_between(&down)).abs() < 1e-9);
    }

    #[test]
    fn test_angle_between_zero_vector() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(1.0, 0.0);
        assert_eq!(a.angle_between(&b), 0.0);
    }

    #[test]
    fn test_angle_between_scale_invariant() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(100.0, 200.0);
        assert!(a.angle_between(&b) < 1e-6);
    }
}
