//! Dynamic Time Warping
//!
//! Computes the minimum-cost monotonic alignment between two scalar
//! sequences of possibly different lengths, tolerant of local stretching
//! and compression. This is the classic unconstrained formulation with an
//! absolute-difference local cost and no warping window.

/// DTW distance between two scalar sequences.
///
/// The alignment cost is accumulated over a `(len(a)+1) x (len(b)+1)`
/// table: `D[0][0] = 0`, the rest of the first row and column are +inf
/// (the warping path must start at the origin), and
/// `D[i][j] = |a[i-1] - b[j-1]| + min(D[i-1][j], D[i][j-1], D[i-1][j-1])`.
/// The result is `D[len(a)][len(b)]`.
///
/// If either sequence is empty there is no table to build; the degenerate
/// alignment cost is the sum of absolute values of the non-empty side
/// (0 when both are empty).
///
/// Symmetric in its two arguments, but reversing both sequences can
/// change the result; callers must not rely on reversal invariance.
///
/// Pure and deterministic; O(len(a) * len(b)) time and space per call.
/// Each call owns its own table, so independent comparisons are safe to
/// run concurrently.
pub fn dtw_distance(a: &[f64], b: &[f64]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return a.iter().chain(b.iter()).map(|v| v.abs()).sum();
    }

    let n = a.len();
    let m = b.len();

    let mut table = vec![f64::INFINITY; (n + 1) * (m + 1)];
    table[0] = 0.0;

    // Row-major: table[i * (m + 1) + j]
    for i in 1..=n {
        for j in 1..=m {
            let cost = (a[i - 1] - b[j - 1]).abs();
            let up = table[(i - 1) * (m + 1) + j];
            let left = table[i * (m + 1) + j - 1];
            let diag = table[(i - 1) * (m + 1) + j - 1];
            table[i * (m + 1) + j] = cost + up.min(left).min(diag);
        }
    }

    table[n * (m + 1) + m]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_empty() {
        assert_eq!(dtw_distance(&[], &[]), 0.0);
    }

    #[test]
    fn test_one_side_empty_sums_absolute_values() {
        assert_eq!(dtw_distance(&[], &[2.0]), 2.0);
        assert_eq!(dtw_distance(&[-2.0], &[]), 2.0);
        assert_eq!(dtw_distance(&[], &[1.0, -3.0, 2.0]), 6.0);
    }

    #[test]
    fn test_identical_sequences_cost_zero() {
        assert_eq!(dtw_distance(&[1.0, 1.0, 1.0], &[1.0, 1.0, 1.0]), 0.0);
        assert_eq!(dtw_distance(&[0.5, -0.25, 3.0], &[0.5, -0.25, 3.0]), 0.0);
    }

    #[test]
    fn test_single_element_local_cost() {
        assert_eq!(dtw_distance(&[0.0], &[5.0]), 5.0);
    }

    #[test]
    fn test_warping_absorbs_stretching() {
        // Same profile sampled at different rates: the doubled samples
        // align onto their originals at zero cost.
        let a = [0.0, 1.0, 2.0];
        let b = [0.0, 0.0, 1.0, 1.0, 2.0, 2.0];
        assert_eq!(dtw_distance(&a, &b), 0.0);
    }

    #[test]
    fn test_known_small_alignment() {
        // Best path aligns 1->1 and 2->2, paying only for the extra 5.
        let a = [1.0, 2.0];
        let b = [1.0, 2.0, 7.0];
        assert_eq!(dtw_distance(&a, &b), 5.0);
    }

    #[test]
    fn test_result_non_negative() {
        let a = [-3.0, 2.5, -1.0, 0.0];
        let b = [4.0, -2.0];
        assert!(dtw_distance(&a, &b) >= 0.0);
    }

    #[test]
    fn test_length_mismatch_does_not_panic() {
        let a: Vec<f64> = (0..40).map(|i| (i as f64 * 0.2).sin()).collect();
        let b: Vec<f64> = (0..7).map(|i| (i as f64 * 0.9).cos()).collect();
        let d = dtw_distance(&a, &b);
        assert!(d.is_finite());
    }

    #[test]
    fn test_inputs_unchanged() {
        let a = [1.0, 2.0, 3.0];
        let b = [3.0, 2.0, 1.0];
        let _ = dtw_distance(&a, &b);
        assert_eq!(a, [1.0, 2.0, 3.0]);
        assert_eq!(b, [3.0, 2.0, 1.0]);
    }
}
