//! First missing positive integer.

use std::collections::HashSet;

/// Smallest positive integer absent from `values`.
pub fn first_missing_positive(values: &[i64]) -> i64 {
    let present: HashSet<i64> = values.iter().copied().filter(|v| *v > 0).collect();
    let mut candidate = 1;
    while present.contains(&candidate) {
        candidate += 1;
    }
    candidate
}
