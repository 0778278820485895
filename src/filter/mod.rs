//! Trace filtering
//!
//! Converts a raw sampled point trace into the motion vectors a shape is
//! built from, suppressing idle jitter and collapsing same-direction runs.

pub mod motion;

pub use motion::{MotionFilter, TracePoint};
