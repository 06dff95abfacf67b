//! Cocktail Sort
//!
//! Bidirectional bubble sort. Each round makes a forward pass that carries
//! the largest remaining value to `right`, then a backward pass that carries
//! the smallest remaining value to `left`. Either pass finishing without a
//! swap means the whole range is sorted and the sort stops.
//!
//! Complexity: O(n²) comparisons, O(n) for already sorted input

use crate::error::Result;
use crate::sequence::require_input;
use tracing::trace;

const OPERATION: &str = "sort_cocktail";

/// Sort a sequence in ascending order using cocktail (shaker) sort.
pub fn sort_cocktail(input: Option<&[i32]>) -> Result<Vec<i32>> {
    let seq = require_input(input, OPERATION)?;
    trace!(len = seq.len(), "cocktail sort");

    let mut data = seq.to_vec();
    let mut left = 0;
    let mut right = data.len() - 1;
    while left < right {
        let mut swapped = false;
        for k in left..right {
            if data[k] > data[k + 1] {
                data.swap(k, k + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
        right -= 1;

        swapped = false;
        for k in (left + 1..=right).rev() {
            if data[k - 1] > data[k] {
                data.swap(k - 1, k);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
        left += 1;
    }
    Ok(data)
}
