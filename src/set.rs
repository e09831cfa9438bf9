use std::cmp::{Ordering};

/// Returns `true` if `a` and `b` contain the same elements, in any order.
///
/// Both are copied and sorted, then compared element by element, so
/// repeated elements must be repeated equally often in each. Neither input
/// is modified.
///
/// Elements that are unordered with respect to each other (e.g. NaN) sort as
/// if equal, and so may give surprising answers.
///
/// ```
/// use ndgrid::{are_equal_sets};
/// assert!(are_equal_sets(&[1, 2, 3], &[2, 1, 3]));
/// assert!(!are_equal_sets(&[1, 2, 3], &[2, 3, 4]));
/// ```
pub fn are_equal_sets<T: PartialOrd + Clone>(a: &[T], b: &[T]) -> bool {
    if a.len() != b.len() { return false; }
    let sorted = |items: &[T]| {
        let mut items = items.to_vec();
        items.sort_by(|x, y| x.partial_cmp(y).unwrap_or(Ordering::Equal));
        items
    };
    sorted(a) == sorted(b)
}

// ----------------------------------------------------------------------------
