//! End-to-end checks of the public API on fixed inputs.

use int_sorter::{
    shuffle, sort_cocktail, sort_gnome, sort_quick, sort_selection, swap, Result, SorterError,
};

type Operation = fn(Option<&[i32]>) -> Result<Vec<i32>>;

const SORTS: [(&str, Operation); 4] = [
    ("sort_selection", sort_selection),
    ("sort_gnome", sort_gnome),
    ("sort_cocktail", sort_cocktail),
    ("sort_quick", sort_quick),
];

fn all_operations() -> Vec<(&'static str, Operation)> {
    let mut ops = SORTS.to_vec();
    ops.push(("shuffle", shuffle));
    ops
}

#[test]
fn test_single_element() {
    for (name, op) in all_operations() {
        assert_eq!(op(Some(&[5])).unwrap(), vec![5], "{name}");
    }
}

#[test]
fn test_three_elements() {
    for (name, sort) in SORTS {
        assert_eq!(sort(Some(&[3, 1, 2])).unwrap(), vec![1, 2, 3], "{name}");
    }
}

#[test]
fn test_all_equal() {
    for (name, op) in all_operations() {
        assert_eq!(op(Some(&[1, 1, 1])).unwrap(), vec![1, 1, 1], "{name}");
    }
}

#[test]
fn test_reverse_sorted_quick() {
    assert_eq!(
        sort_quick(Some(&[5, 4, 3, 2, 1])).unwrap(),
        vec![1, 2, 3, 4, 5]
    );
}

#[test]
fn test_empty_input() {
    for (name, op) in all_operations() {
        assert_eq!(
            op(Some(&[])),
            Err(SorterError::EmptyInput { operation: name })
        );
    }
}

#[test]
fn test_missing_input() {
    for (name, op) in all_operations() {
        assert_eq!(
            op(None),
            Err(SorterError::MissingInput { operation: name })
        );
    }
}

#[test]
fn test_two_elements_shuffle_is_deterministic() {
    for _ in 0..100 {
        assert_eq!(shuffle(Some(&[2, 1])).unwrap(), vec![1, 2]);
    }
}

#[test]
fn test_negative_and_extreme_values() {
    let data = vec![0, i32::MIN, 17, -17, i32::MAX, -1, 17];
    let expected = vec![i32::MIN, -17, -1, 0, 17, 17, i32::MAX];
    for (name, sort) in SORTS {
        assert_eq!(sort(Some(&data)).unwrap(), expected, "{name}");
    }
}

#[test]
fn test_public_swap() {
    assert_eq!(swap(&[1, 2, 3], 0, 1).unwrap(), vec![2, 1, 3]);
    assert_eq!(
        swap(&[1, 2, 3], 1, 9),
        Err(SorterError::IndexOutOfBounds { index: 9, len: 3 })
    );
}
