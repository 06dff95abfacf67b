//! Integer Sequence Sorting
//!
//! Textbook rearrangements of `i32` sequences:
//! - **Shuffle**: Fisher-Yates walk that always swaps with a lower index
//! - **Selection Sort**: moves the prefix maximum to the end each pass
//! - **Gnome Sort**: swap-and-step-back over adjacent pairs
//! - **Cocktail Sort**: bubble sort alternating direction, stops early
//! - **Quicksort**: midpoint pivot with pivot-tracking partition
//!
//! Every operation borrows its input as `Option<&[i32]>` and returns a new
//! `Vec<i32>`; the caller's data is never modified. `None` is rejected with
//! [`SorterError::MissingInput`] and an empty slice with
//! [`SorterError::EmptyInput`].
//!
//! ```
//! use int_sorter::{sort_quick, SorterError};
//!
//! let data = vec![3, 1, 2];
//! assert_eq!(sort_quick(Some(&data)), Ok(vec![1, 2, 3]));
//! assert!(matches!(sort_quick(None), Err(SorterError::MissingInput { .. })));
//! ```

pub mod algorithm;
pub mod cocktail_sort;
pub mod error;
pub mod gnome_sort;
pub mod quick_sort;
pub mod selection_sort;
pub mod sequence;
pub mod shuffle;

pub use algorithm::Algorithm;
pub use cocktail_sort::sort_cocktail;
pub use error::{Result, SorterError};
pub use gnome_sort::sort_gnome;
pub use quick_sort::sort_quick;
pub use selection_sort::sort_selection;
pub use sequence::{is_permutation, is_sorted, swap};
pub use shuffle::{shuffle, shuffle_with_rng};
