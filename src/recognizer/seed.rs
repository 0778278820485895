//! Built-in exemplar set
//!
//! Seeds a database with the canonical strokes: horizontal and vertical
//! lines, a zigzag, and a swept family of two-move check marks. The set
//! is a deterministic fixture; tests pin its exact census (2 hline,
//! 2 vline, 1 zet, 49 vup, 49 vdown — 196 entries).

use super::database::GestureDatabase;
use crate::geometry::vector::Vec2;

/// Number of steps in each check-mark sweep axis: 0.5 to 2.0 in steps of
/// 0.25, bounds inclusive
const SWEEP_STEPS: usize = 7;

const SWEEP_START: f64 = 0.5;
const SWEEP_STEP: f64 = 0.25;

/// Register the built-in exemplars into `db`
pub fn seed_defaults(db: &mut GestureDatabase) {
    db.add_gesture(&[Vec2::new(-1.0, 0.0)], "hline");
    db.add_gesture(&[Vec2::new(1.0, 0.0)], "hline");

    db.add_gesture(&[Vec2::new(0.0, -1.0)], "vline");
    db.add_gesture(&[Vec2::new(0.0, 1.0)], "vline");

    db.add_gesture(
        &[Vec2::new(1.0, 0.0), Vec2::new(-1.0, -1.0), Vec2::new(1.0, 0.0)],
        "zet",
    );

    // Integer-indexed sweep so the exemplar count never drifts with
    // floating-point accumulation.
    for xi in 0..SWEEP_STEPS {
        for yi in 0..SWEEP_STEPS {
            let x = SWEEP_START + xi as f64 * SWEEP_STEP;
            let y = SWEEP_START + yi as f64 * SWEEP_STEP;

            db.add_gesture(&[Vec2::new(x, y), Vec2::new(x, -y)], "vup");
            db.add_gesture(&[Vec2::new(x, -y), Vec2::new(x, y)], "vdown");
        }
    }
}
