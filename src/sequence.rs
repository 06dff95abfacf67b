//! Sequence helpers shared by all operations.
//!
//! A sequence is borrowed as `Option<&[i32]>` at the API boundary so that an
//! absent input can be told apart from an empty one. Every operation validates
//! through [`require_input`] and then works on a private copy.

use crate::error::{Result, SorterError};
use tracing::debug;

/// Check that an input sequence is present and non-empty.
///
/// Missing input is reported before empty input.
pub(crate) fn require_input<'a>(
    input: Option<&'a [i32]>,
    operation: &'static str,
) -> Result<&'a [i32]> {
    match input {
        None => {
            debug!(operation, "rejecting missing input");
            Err(SorterError::MissingInput { operation })
        }
        Some([]) => {
            debug!(operation, "rejecting empty input");
            Err(SorterError::EmptyInput { operation })
        }
        Some(seq) => Ok(seq),
    }
}

/// Return a copy of `seq` with the elements at `i` and `j` exchanged.
///
/// The algorithms themselves swap inside their own working buffer; this is
/// the same exchange offered as a non-mutating operation.
pub fn swap(seq: &[i32], i: usize, j: usize) -> Result<Vec<i32>> {
    let len = seq.len();
    for index in [i, j] {
        if index >= len {
            return Err(SorterError::IndexOutOfBounds { index, len });
        }
    }

    let mut out = seq.to_vec();
    out.swap(i, j);
    Ok(out)
}

/// Check if a slice is sorted in ascending order.
#[inline]
pub fn is_sorted(data: &[i32]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

/// Check if `a` and `b` hold the same multiset of values.
pub fn is_permutation(a: &[i32], b: &[i32]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}
