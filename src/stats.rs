//! Reductions over sequences of numbers.
//!
//! These are generic over the numeric traits of [`num_traits`], so they work
//! for integers and floats alike, except [`normalize()`], which needs
//! division that doesn't truncate.

use num_traits::{Float, Num};

use super::{Error, Result};

/// Returns the sum of `items`, or `0` if there are none.
///
/// ```
/// use ndgrid::{sum};
/// assert_eq!(sum(&[3, 4, 5]), 12);
/// assert_eq!(sum::<i32>(&[]), 0);
/// ```
pub fn sum<T: Num + Copy>(items: &[T]) -> T {
    items.iter().copied().reduce(|a, b| a + b).unwrap_or_else(T::zero)
}

/// Returns the product of `items`, or `0` if there are none.
///
/// Note that the product of no items is `0`, not `1`. For the number of points
/// in a grid, use [`length()`] instead.
///
/// [`length()`]: super::length()
///
/// ```
/// use ndgrid::{prod};
/// assert_eq!(prod(&[3, 4, 5]), 60);
/// assert_eq!(prod::<i32>(&[]), 0);
/// ```
pub fn prod<T: Num + Copy>(items: &[T]) -> T {
    items.iter().copied().reduce(|a, b| a * b).unwrap_or_else(T::zero)
}

/// Keeps whichever of `best` and each later `item` is `better`. Once an
/// unordered item (i.e. a NaN) is seen, it is kept.
fn extremum<T: PartialOrd + Copy>(
    items: &[T],
    name: &'static str,
    better: impl Fn(&T, &T) -> bool,
) -> Result<T> {
    let (&first, rest) = items.split_first().ok_or(Error::Empty(name))?;
    Ok(rest.iter().fold(first, |best, &item| {
        let unordered = |x: &T| x.partial_cmp(x).is_none();
        if unordered(&best) { best }
        else if unordered(&item) || better(&item, &best) { item }
        else { best }
    }))
}

/// Returns the largest of `items`. If any item is NaN, returns NaN.
///
/// Fails if `items` is empty.
///
/// ```
/// use ndgrid::{max};
/// assert_eq!(max(&[3, 9, 5]), Ok(9));
/// assert!(max(&[1.0, f64::NAN]).unwrap().is_nan());
/// ```
pub fn max<T: PartialOrd + Copy>(items: &[T]) -> Result<T> {
    extremum(items, "max", |item, best| item > best)
}

/// Returns the smallest of `items`. If any item is NaN, returns NaN.
///
/// Fails if `items` is empty.
pub fn min<T: PartialOrd + Copy>(items: &[T]) -> Result<T> {
    extremum(items, "min", |item, best| item < best)
}

/// Scales `items` so that the largest becomes `target`.
///
/// If the largest item is zero, every item of the result is infinite or NaN.
///
/// Fails if `items` is empty.
///
/// ```
/// use ndgrid::{normalize};
/// assert_eq!(normalize(&[1.0, 2.0, 4.0], 1.0), Ok(vec![0.25, 0.5, 1.0]));
/// ```
pub fn normalize<F: Float>(items: &[F], target: F) -> Result<Vec<F>> {
    let multiplier = target / max(items)?;
    Ok(items.iter().map(|&x| x * multiplier).collect())
}

/// Returns the sum over all axes of the distance between the coordinates of
/// `a` and `b`.
///
/// Fails if `a` and `b` have different lengths.
///
/// ```
/// use ndgrid::{manhattan_distance};
/// assert_eq!(manhattan_distance(&[1usize, 5, 2], &[4, 3, 2]), Ok(5));
/// ```
pub fn manhattan_distance<T: Num + PartialOrd + Copy>(a: &[T], b: &[T]) -> Result<T> {
    if a.len() != b.len() {
        return Err(Error::invalid(format!(
            "cannot measure between points with {} and {} coordinates", a.len(), b.len(),
        )));
    }
    Ok(a.iter().zip(b).fold(T::zero(), |total, (&x, &y)| {
        total + if x > y { x - y } else { y - x }
    }))
}

// ----------------------------------------------------------------------------
