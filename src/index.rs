//! Conversions between points of an N-dimensional grid and their indices.
//!
//! A grid is described by its dimensions, a slice of axis sizes. Axis 0 is
//! the outermost, and the last axis varies fastest (row-major order). Every
//! point of the grid has a unique index in `0..length(dimensions)`.

use super::{Error, Result};

/// Returns the number of points in a grid of the given dimensions.
///
/// A grid with no axes has exactly one point, the empty point.
///
/// Fails if the number of points does not fit in a `usize`.
///
/// ```
/// use ndgrid::{length};
/// assert_eq!(length(&[4, 3, 2]), Ok(24));
/// assert_eq!(length(&[]), Ok(1));
/// ```
pub fn length(dimensions: &[usize]) -> Result<usize> {
    if dimensions.contains(&0) { return Ok(0); }
    dimensions.iter()
        .try_fold(1usize, |n, &size| n.checked_mul(size))
        .ok_or_else(|| too_many_points(dimensions))
}

pub(crate) fn too_many_points(dimensions: &[usize]) -> Error {
    Error::invalid(format!("dimensions {:?} have more points than fit in usize", dimensions))
}

fn check_axes(dimensions: &[usize]) -> Result<()> {
    if dimensions.contains(&0) {
        return Err(Error::invalid(format!("dimensions {:?} contain an axis of size 0", dimensions)));
    }
    Ok(())
}

/// Returns the index of `point` in a grid of the given dimensions.
///
/// Fails if `point` has the wrong number of coordinates, if any coordinate
/// does not fit in its axis, or if the index does not fit in a `usize`.
///
/// ```
/// use ndgrid::{point_to_index};
/// assert_eq!(point_to_index(&[3, 4], &[10, 20]), Ok(64));
/// assert_eq!(point_to_index(&[9, 19], &[10, 20]), Ok(199));
/// ```
pub fn point_to_index(point: &[usize], dimensions: &[usize]) -> Result<usize> {
    if point.len() != dimensions.len() {
        return Err(Error::invalid(format!(
            "point {:?} has {} coordinates but the grid has {} axes",
            point, point.len(), dimensions.len(),
        )));
    }
    // `None` once the multiplier no longer fits. That only matters if a later
    // coordinate is non-zero.
    let mut multiplier = Some(1usize);
    let mut index = 0usize;
    for (&coordinate, &size) in point.iter().zip(dimensions).rev() {
        if coordinate >= size {
            return Err(Error::OutOfBounds {index: coordinate, length: size});
        }
        if coordinate > 0 {
            index = multiplier
                .and_then(|m| m.checked_mul(coordinate))
                .and_then(|offset| index.checked_add(offset))
                .ok_or_else(|| too_many_points(dimensions))?;
        }
        multiplier = multiplier.and_then(|m| m.checked_mul(size));
    }
    Ok(index)
}

/// Returns the point whose index is `index` in a grid of the given
/// dimensions. This is the inverse of [`point_to_index()`].
///
/// Fails if any axis has size 0, if the grid has more points than fit in a
/// `usize`, or if `index` is not less than [`length(dimensions)`].
///
/// [`length(dimensions)`]: length()
///
/// ```
/// use ndgrid::{index_to_point};
/// assert_eq!(index_to_point(64, &[10, 20]), Ok(vec![3, 4]));
/// assert_eq!(index_to_point(23, &[4, 3, 2]), Ok(vec![3, 2, 1]));
/// ```
pub fn index_to_point(index: usize, dimensions: &[usize]) -> Result<Vec<usize>> {
    check_axes(dimensions)?;
    let length = length(dimensions)?;
    if index >= length {
        return Err(Error::OutOfBounds {index, length});
    }
    let mut multiplier = length;
    let mut index = index;
    Ok(dimensions.iter().map(|&size| {
        multiplier /= size;
        let factor = index / multiplier;
        index -= factor * multiplier;
        factor
    }).collect())
}

/// Calls `f` on every point of a grid of the given dimensions, in index
/// order.
///
/// Equivalent to, but more efficient than,
/// ```text
/// for i in 0..length(dimensions)? { f(&index_to_point(i, dimensions)?); }
/// ```
///
/// ```
/// use ndgrid::{each};
/// let mut points = Vec::new();
/// each(&[2, 2], |p| points.push(p.to_vec()));
/// assert_eq!(points, [[0, 0], [0, 1], [1, 0], [1, 1]]);
/// ```
pub fn each(dimensions: &[usize], mut f: impl FnMut(&[usize])) {
    if dimensions.contains(&0) { return; }
    let mut point = vec![0; dimensions.len()];
    loop {
        f(&point);
        // Increment `point` like an odometer, last axis first.
        let mut axis = dimensions.len();
        loop {
            if axis == 0 { return; }
            axis -= 1;
            point[axis] += 1;
            if point[axis] < dimensions[axis] { break; }
            point[axis] = 0;
        }
    }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const GRIDS: &[&[usize]] = &[
        &[],
        &[1],
        &[7],
        &[10, 20],
        &[4, 3, 2],
        &[2, 1, 3, 2],
    ];

    #[test]
    fn lengths() {
        assert_eq!(length(&[]), Ok(1));
        assert_eq!(length(&[7]), Ok(7));
        assert_eq!(length(&[10, 4, 3, 2]), Ok(240));
        assert_eq!(length(&[5, 0, 2]), Ok(0));
    }

    #[test]
    fn huge_grids() {
        const MAX: usize = usize::MAX;
        assert_eq!(length(&[MAX, 1]), Ok(MAX));
        assert_eq!(length(&[MAX, MAX, 0]), Ok(0));
        assert!(matches!(length(&[MAX, 2]), Err(Error::InvalidArgument(_))));
        // Indices that fit are fine even if the grid is too big to count.
        assert_eq!(point_to_index(&[0, 0], &[MAX, MAX]), Ok(0));
        assert_eq!(point_to_index(&[0, 7], &[MAX, MAX]), Ok(7));
        assert_eq!(point_to_index(&[1, 0], &[MAX, MAX]), Ok(MAX));
        assert_eq!(point_to_index(&[0, 0, 3], &[MAX, MAX, MAX]), Ok(3));
        assert!(matches!(point_to_index(&[2, 0], &[MAX, MAX]), Err(Error::InvalidArgument(_))));
        assert!(matches!(point_to_index(&[1, 1], &[MAX, MAX]), Err(Error::InvalidArgument(_))));
        assert!(matches!(point_to_index(&[1, 0, 0], &[MAX, MAX, MAX]), Err(Error::InvalidArgument(_))));
        assert!(matches!(index_to_point(0, &[MAX, MAX]), Err(Error::InvalidArgument(_))));
        assert_eq!(index_to_point(MAX - 1, &[MAX, 1]), Ok(vec![MAX - 1, 0]));
    }

    #[test]
    fn known_indices() {
        assert_eq!(point_to_index(&[3, 4], &[10, 20]), Ok(64));
        assert_eq!(point_to_index(&[9, 19], &[10, 20]), Ok(199));
        assert_eq!(point_to_index(&[0, 0], &[10, 20]), Ok(0));
        assert_eq!(point_to_index(&[1, 2, 1], &[4, 3, 2]), Ok(11));
        assert_eq!(point_to_index(&[], &[]), Ok(0));
    }

    #[test]
    fn known_points() {
        assert_eq!(index_to_point(199, &[10, 20]), Ok(vec![9, 19]));
        assert_eq!(index_to_point(11, &[4, 3, 2]), Ok(vec![1, 2, 1]));
        assert_eq!(index_to_point(0, &[]), Ok(vec![]));
    }

    #[test]
    fn round_trip() {
        for &dimensions in GRIDS {
            for index in 0..length(dimensions).unwrap() {
                let point = index_to_point(index, dimensions).unwrap();
                assert_eq!(point.len(), dimensions.len());
                assert_eq!(point_to_index(&point, dimensions), Ok(index));
            }
        }
    }

    #[test]
    fn each_matches_index_to_point() {
        for &dimensions in GRIDS {
            let mut index = 0;
            each(dimensions, |point| {
                assert_eq!(index_to_point(index, dimensions).unwrap(), point);
                index += 1;
            });
            assert_eq!(Ok(index), length(dimensions));
        }
        let mut calls = 0;
        each(&[3, 0], |_| calls += 1);
        assert_eq!(calls, 0);
    }

    #[test]
    fn bad_points() {
        assert!(matches!(point_to_index(&[1], &[10, 20]), Err(Error::InvalidArgument(_))));
        assert_eq!(point_to_index(&[10, 0], &[10, 20]), Err(Error::OutOfBounds {index: 10, length: 10}));
        assert_eq!(point_to_index(&[0, 20], &[10, 20]), Err(Error::OutOfBounds {index: 20, length: 20}));
    }

    #[test]
    fn bad_indices() {
        assert_eq!(index_to_point(200, &[10, 20]), Err(Error::OutOfBounds {index: 200, length: 200}));
        assert_eq!(index_to_point(1, &[]), Err(Error::OutOfBounds {index: 1, length: 1}));
        assert!(matches!(index_to_point(0, &[3, 0]), Err(Error::InvalidArgument(_))));
    }
}
