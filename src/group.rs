//! Grouping flat sequences, and reshaping nested ones.

use itertools::{Itertools};
use log::{warn};

use super::{Error, Result, Nested, length};
use super::index::{too_many_points};

fn group_owned<T>(items: Vec<T>, group_size: usize) -> Result<Vec<Vec<T>>> {
    if group_size == 0 {
        return Err(Error::invalid("group size must be positive"));
    }
    let chunks = items.into_iter().chunks(group_size);
    let groups: Vec<Vec<T>> = chunks.into_iter().map(|chunk| chunk.collect()).collect();
    Ok(groups)
}

/// Splits `items` into consecutive groups of `group_size` elements.
///
/// If `items.len()` is not a multiple of `group_size`, the last group holds
/// the remainder. No group is ever empty, so an empty `items` gives no groups.
///
/// Fails if `group_size` is zero.
///
/// ```
/// use ndgrid::{group};
/// assert_eq!(group(&[1, 2, 3, 4, 5, 6, 7], 2), Ok(vec![vec![1, 2], vec![3, 4], vec![5, 6], vec![7]]));
/// ```
pub fn group<T: Clone>(items: &[T], group_size: usize) -> Result<Vec<Vec<T>>> {
    group_owned(items.to_vec(), group_size)
}

/// Rearranges the items of `nested` into the given dimensions.
///
/// The items are first flattened, then grouped by the size of the last axis,
/// then those groups are grouped by the size of the next axis, and so on out
/// to the first axis. The result has depth `dimensions.len()`, or 1 if
/// `dimensions` is empty.
///
/// If the number of items is not [`length(dimensions)`] the result is
/// ragged: the last group at each level holds whatever remains. Nothing is
/// dropped or invented. If there are too many items, the result has more
/// than `dimensions[0]` children.
///
/// Fails if any axis has size 0, or if the dimensions hold more items than
/// fit in a `usize`.
///
/// [`length(dimensions)`]: super::length()
///
/// ```
/// use ndgrid::{reshape, nested};
/// assert_eq!(
///     reshape(nested![[1, 2], [3, 4], [5, 6]], &[2, 3]),
///     Ok(nested![[1, 2, 3], [4, 5, 6]]),
/// );
/// ```
pub fn reshape<T>(nested: Nested<T>, dimensions: &[usize]) -> Result<Nested<T>> {
    let items = nested.flatten();
    let expected = length(dimensions)?;
    if items.len() != expected {
        warn!("reshaping {} items into dimensions {:?}, which hold {}", items.len(), dimensions, expected);
    }
    let mut groups: Vec<Nested<T>> = items.into_iter().map(Nested::Item).collect();
    for &size in dimensions.iter().rev() {
        groups = group_owned(groups, size)?.into_iter().map(Nested::List).collect();
    }
    // The last pass leaves a list of (normally) one group. Unwrap it.
    Ok(groups.into_iter().flat_map(Nested::into_children).collect())
}

/// Merges trailing axes so that `dimensions` has `num_dimensions` axes.
///
/// The first `num_dimensions - 1` axes are unchanged. The last axis of the
/// result is the product of all the remaining axes. The [`length()`] of the
/// result equals that of `dimensions`.
///
/// Fails unless `1 <= num_dimensions <= dimensions.len()`, or if the merged
/// axis is too long for a `usize`.
///
/// [`length()`]: super::length()
///
/// ```
/// use ndgrid::{reduce_dimensions};
/// assert_eq!(reduce_dimensions(&[10, 4, 3, 2], 2), Ok(vec![10, 24]));
/// ```
pub fn reduce_dimensions(dimensions: &[usize], num_dimensions: usize) -> Result<Vec<usize>> {
    if num_dimensions == 0 || num_dimensions > dimensions.len() {
        return Err(Error::invalid(format!(
            "cannot reduce {} dimensions to {}", dimensions.len(), num_dimensions,
        )));
    }
    let (kept, merged) = dimensions.split_at(num_dimensions - 1);
    let mut result = kept.to_vec();
    result.push(length(merged).map_err(|_| too_many_points(dimensions))?);
    Ok(result)
}

// ----------------------------------------------------------------------------
