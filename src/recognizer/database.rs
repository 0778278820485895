//! Reference database and nearest-neighbor search
//!
//! Holds the registered exemplars in insertion order and ranks them
//! against a query shape by per-axis DTW distance.

use super::seed::seed_defaults;
use crate::gesture::shape::{NamedShape, Shape};
use crate::geometry::vector::Vec2;
use crate::{Error, Result};
use std::cmp::Ordering;
use tracing::{debug, info};

/// Default rejection threshold: a best match farther than this is
/// reported as no match rather than a low-confidence guess
pub const DEFAULT_REJECTION_THRESHOLD: f64 = 3.0;

/// One scored candidate from a recognition query
#[derive(Debug, Clone)]
pub struct GestureMatch<'a> {
    /// Dissimilarity between the query and this exemplar
    pub distance: f64,
    /// The exemplar that produced the distance
    pub gesture: &'a NamedShape,
}

/// Insertion-ordered collection of named reference shapes.
///
/// Names need not be unique; several entries under the same label are
/// several exemplars of one gesture class. Entries are only ever added,
/// never removed or updated.
#[derive(Debug, Clone)]
pub struct GestureDatabase {
    data: Vec<NamedShape>,
    /// Maximum acceptable best-match distance
    pub rejection_threshold: f64,
}

impl GestureDatabase {
    /// Create an empty database with the default rejection threshold
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            rejection_threshold: DEFAULT_REJECTION_THRESHOLD,
        }
    }

    /// Create an empty database with a custom rejection threshold
    pub fn with_rejection_threshold(threshold: f64) -> Self {
        Self {
            data: Vec::new(),
            rejection_threshold: threshold,
        }
    }

    /// Create a database seeded with the built-in exemplar set
    pub fn with_default_gestures() -> Self {
        let mut db = Self::new();
        seed_defaults(&mut db);
        db
    }

    /// Register an exemplar from raw motion vectors
    pub fn add_gesture(&mut self, moves: &[Vec2], name: impl Into<String>) {
        self.add_named(NamedShape::new(moves, name));
    }

    /// Register a prebuilt exemplar
    pub fn add_named(&mut self, gesture: NamedShape) {
        debug!(name = %gesture.name, moves = gesture.shape.len(), "registered gesture exemplar");
        self.data.push(gesture);
    }

    /// Number of registered exemplars
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the database has no exemplars
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate the exemplars in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &NamedShape> {
        self.data.iter()
    }

    /// Score every exemplar against the query, ascending by distance.
    ///
    /// The sort is stable, so exemplars at equal distance keep their
    /// insertion order. Each `distance_to` call is pure and touches only
    /// immutable shape data; the scan is sequential but safe to fan out
    /// should candidate sets ever warrant it. Repeated calls with the
    /// same query and an unmodified database return identical rankings.
    pub fn rank_matches(&self, query: &Shape) -> Vec<GestureMatch<'_>> {
        let mut matches: Vec<GestureMatch<'_>> = self
            .data
            .iter()
            .map(|g| GestureMatch {
                distance: g.shape.distance_to(query),
                gesture: g,
            })
            .collect();

        // Distances are finite and non-negative, so the fallback arm is
        // unreachable in practice.
        matches.sort_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(Ordering::Equal)
        });

        matches
    }

    /// Find the closest exemplar, rejecting weak matches.
    ///
    /// Fails with [`Error::NoMatch`] when the database is empty or the
    /// best candidate's distance exceeds the rejection threshold. A
    /// successful match is reported through the logging layer with its
    /// name and distance before being returned.
    pub fn recognize(&self, query: &Shape) -> Result<&NamedShape> {
        let matches = self.rank_matches(query);

        let best = matches.first().ok_or(Error::NoMatch {
            best_distance: None,
            threshold: self.rejection_threshold,
        })?;

        if best.distance > self.rejection_threshold {
            return Err(Error::NoMatch {
                best_distance: Some(best.distance),
                threshold: self.rejection_threshold,
            });
        }

        info!(
            name = %best.gesture.name,
            distance = best.distance,
            "successfully matched gesture"
        );
        Ok(best.gesture)
    }
}

impl Default for GestureDatabase {
    fn default() -> Self {
        Self::new()
    }
}
