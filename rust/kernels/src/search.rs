//! Binary search over a sorted slice.

/// Index of `target` in the sorted `values`, or `-1` when absent.
///
/// With duplicate elements the returned index is whichever probe the halving
/// lands on; the choice is deterministic for a given input.
pub fn binary_search(values: &[i64], target: i64) -> i64 {
    let mut low = 0usize;
    let mut high = values.len();
    while low < high {
        let mid = low + (high - low) / 2;
        if values[mid] == target {
            return mid as i64;
        }
        if values[mid] < target {
            low = mid + 1;
        } else {
            high = mid;
        }
    }
    -1
}
