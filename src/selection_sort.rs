//! Selection Sort
//!
//! Repeatedly moves the maximum of the unsorted prefix `[0, last]` to `last`
//! and shrinks the prefix by one.
//!
//! Complexity: O(n²) comparisons, at most n - 1 swaps

use crate::error::Result;
use crate::sequence::require_input;
use tracing::trace;

const OPERATION: &str = "sort_selection";

/// Sort a sequence in ascending order using selection sort.
///
/// The scan starts with the element at `last` as the candidate and only a
/// strictly greater element replaces it, so equal values are never swapped.
pub fn sort_selection(input: Option<&[i32]>) -> Result<Vec<i32>> {
    let seq = require_input(input, OPERATION)?;
    trace!(len = seq.len(), "selection sort");

    let mut data = seq.to_vec();
    let mut last = data.len() - 1;
    while last > 0 {
        let mut max_index = last;
        for i in 0..=last {
            if data[i] > data[max_index] {
                max_index = i;
            }
        }
        if max_index != last {
            data.swap(max_index, last);
        }
        last -= 1;
    }
    Ok(data)
}
