//! Sequence matching
//!
//! Dynamic time warping over scalar sequences. The recognizer runs one
//! warp per axis and combines the two costs into a single dissimilarity.

pub mod dtw;

pub use dtw::dtw_distance;
