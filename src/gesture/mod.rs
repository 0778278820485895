//! Gesture shape signatures
//!
//! A shape is the direction profile of a finished gesture: an ordered
//! sequence of unit motion vectors, independent of the scale or speed of
//! the original trace.

pub mod shape;

pub use shape::{NamedShape, Shape};
