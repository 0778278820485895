//! # Gesture Recognizer
//!
//! A freehand 2D gesture recognition engine. A finished pointer trace is
//! reduced to a scale- and speed-independent shape signature, compared
//! against a database of named reference shapes with per-axis dynamic time
//! warping, and either matched to the nearest reference or rejected when
//! nothing is close enough.
//!
//! ## Quick Start
//!
//! ```
//! use gesture_recognizer::filter::motion::{MotionFilter, TracePoint};
//! use gesture_recognizer::recognizer::database::GestureDatabase;
//!
//! // A straight upward stroke, as sampled by some input source.
//! let trace = vec![
//!     TracePoint::new(0.0, 0.0),
//!     TracePoint::new(0.0, 50.0),
//!     TracePoint::new(0.0, 100.0),
//! ];
//!
//! let filter = MotionFilter::new();
//! let query = filter.shape_from_trace(&trace);
//!
//! let db = GestureDatabase::with_default_gestures();
//! let matched = db.recognize(&query).expect("vertical stroke is seeded");
//! assert_eq!(matched.name, "vline");
//! ```
//!
//! ## Architecture
//!
//! The system is organized into the following modules:
//!
//! - [`geometry`]: 2D vector primitives (magnitude, normalization, angles)
//! - [`filter`]: raw trace to motion vectors, with noise suppression
//! - [`gesture`]: shape signatures and the per-axis distance composition
//! - [`matching`]: dynamic time warping over scalar sequences
//! - [`recognizer`]: the reference database and nearest-neighbor search
//! - [`app`]: CLI and configuration management
//!
//! ## Recognition Pipeline
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │  Raw trace  │───▶│ MotionFilter│───▶│    Shape    │───▶│  DTW per    │
//! │  (points)   │    │ (mag + dir) │    │ (unit moves)│    │  axis       │
//! └─────────────┘    └─────────────┘    └─────────────┘    └─────────────┘
//!                                                                 │
//!                                                                 ▼
//! ┌─────────────┐    ┌─────────────┐                       ┌─────────────┐
//! │  NamedShape │◀───│  Rejection  │◀──────────────────────│   Ranked    │
//! │  or NoMatch │    │  threshold  │                       │   matches   │
//! └─────────────┘    └─────────────┘                       └─────────────┘
//! ```

pub mod geometry;
pub mod filter;
pub mod gesture;
pub mod matching;
pub mod recognizer;
pub mod app;

// Re-export commonly used types
pub use filter::motion::{MotionFilter, TracePoint};
pub use geometry::vector::Vec2;
pub use gesture::shape::{NamedShape, Shape};
pub use matching::dtw::dtw_distance;
pub use recognizer::database::{GestureDatabase, GestureMatch};

/// Result type alias for the gesture recognizer
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the gesture recognizer
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No reference gesture was close enough to the query. Recoverable:
    /// callers typically prompt for a fresh trace. `best_distance` is
    /// `None` when the database had no entries at all.
    #[error("no gesture matched within threshold {threshold}")]
    NoMatch {
        best_distance: Option<f64>,
        threshold: f64,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
