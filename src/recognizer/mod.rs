//! Gesture recognition
//!
//! Owns the set of named reference shapes and answers nearest-neighbor
//! queries with threshold-based rejection.

pub mod database;
pub mod seed;

pub use database::{GestureDatabase, GestureMatch};

use once_cell::sync::Lazy;
use parking_lot::RwLock;

static SHARED: Lazy<RwLock<GestureDatabase>> =
    Lazy::new(|| RwLock::new(GestureDatabase::with_default_gestures()));

/// Process-wide default database, seeded with the built-in exemplars.
///
/// Construction happens once, on first access, behind an explicit
/// synchronization primitive; concurrent first callers block instead of
/// racing. Prefer passing an explicitly owned [`GestureDatabase`] around —
/// this handle exists for hosts that want a single ambient instance.
/// Take the read lock for queries and the write lock for `add_gesture`.
pub fn shared() -> &'static RwLock<GestureDatabase> {
    &SHARED
}
