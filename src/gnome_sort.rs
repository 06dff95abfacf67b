//! Gnome Sort
//!
//! Walks a pair of adjacent cursors through the sequence. An out-of-order
//! pair is swapped and the cursors step back to re-check the pair behind;
//! an ordered pair moves them forward.
//!
//! Complexity: O(n²) comparisons, the backward steps are bounded by the
//! number of inversions

use crate::error::Result;
use crate::sequence::require_input;
use tracing::trace;

const OPERATION: &str = "sort_gnome";

/// Sort a sequence in ascending order using gnome sort.
pub fn sort_gnome(input: Option<&[i32]>) -> Result<Vec<i32>> {
    let seq = require_input(input, OPERATION)?;
    trace!(len = seq.len(), "gnome sort");

    let mut data = seq.to_vec();
    let mut i = 0;
    let mut j = 1;
    while j < data.len() {
        if data[i] > data[j] {
            data.swap(i, j);
            if i > 0 {
                i -= 1;
                j -= 1;
            } else {
                i += 1;
                j += 1;
            }
        } else {
            i += 1;
            j += 1;
        }
    }
    Ok(data)
}
