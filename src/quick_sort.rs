//! Quicksort
//!
//! Divide and conquer over inclusive index ranges with the midpoint of each
//! range as pivot. Partitioning scans `left` up towards the pivot looking for
//! a value greater than it and `right` down towards the pivot looking for a
//! value less than it, then swaps the two. When one side has stopped on the
//! pivot itself the swap relocates the pivot, so its tracked index follows it
//! to the other side. Once the cursors meet, the range splits into
//! `[start, pivot]` and `[pivot + 1, end]`.
//!
//! Ranges are kept on an explicit stack and the left sub-range is always
//! handled first, which gives the same element order as plain recursion
//! without tying the depth to the call stack. Already sorted and reverse
//! sorted inputs still split evenly with a midpoint pivot.
//!
//! Complexity: O(n log n) average, O(n²) worst case

use crate::error::Result;
use crate::sequence::require_input;
use tracing::trace;

const OPERATION: &str = "sort_quick";

/// Sort a sequence in ascending order using quicksort.
pub fn sort_quick(input: Option<&[i32]>) -> Result<Vec<i32>> {
    let seq = require_input(input, OPERATION)?;
    trace!(len = seq.len(), "quicksort");

    let mut data = seq.to_vec();
    let mut ranges = vec![(0, data.len() - 1)];
    while let Some((start, end)) = ranges.pop() {
        if end <= start {
            continue;
        }
        let pivot = partition(&mut data, start, end);
        // pushed in reverse so that [start, pivot] is popped first
        ranges.push((pivot + 1, end));
        ranges.push((start, pivot));
    }
    Ok(data)
}

/// Partition `data[start..=end]` around its midpoint value.
///
/// Returns the final index of the pivot: everything in `[start, pivot]` is
/// `<=` the pivot value and everything in `(pivot, end]` is `>=` it.
fn partition(data: &mut [i32], start: usize, end: usize) -> usize {
    let mut pivot = start + (end - start) / 2;
    let pivot_value = data[pivot];

    let mut left = start;
    let mut right = end;
    while left < right {
        while left < pivot && data[left] <= pivot_value {
            left += 1;
        }
        while right > pivot && data[right] >= pivot_value {
            right -= 1;
        }

        if left < right {
            data.swap(left, right);
            if left == pivot {
                pivot = right;
            } else if right == pivot {
                pivot = left;
            }
        }
    }
    pivot
}
