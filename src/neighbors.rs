//! Box-shaped neighborhoods in N-dimensional grids.
//!
//! The neighborhood of radius `r` around a point contains every point whose
//! coordinates each differ from the centre by at most `r`, i.e. a hypercube
//! (Chebyshev distance). The centre itself is included.
//!
//! At the edge of the grid, a neighborhood is either clipped, or wraps around
//! to the opposite edge, as if the grid were a torus.

use std::collections::{VecDeque};
use std::iter::{once};

use itertools::{Itertools};
use log::{trace};

use super::{Result, index_to_point, point_to_index};

/// The coordinates within `radius` of `position` on an axis of length `size`,
/// in increasing order of offset. `position` must be less than `size`.
fn axis_coordinates(position: usize, size: usize, radius: usize, wrap: bool) -> Vec<usize> {
    // When wrapping, reaching past half way would revisit coordinates.
    let limit = if wrap { size / 2 } else { size - 1 };
    let reach = radius.min(limit);
    trace!("axis of length {} at {}: radius {} reaches {}", size, position, radius, reach);
    // `reach <= size / 2` when wrapping, so one wrap is always enough.
    let room = size - 1 - position;
    let below = (1..=reach).rev().filter_map(|d| {
        if d <= position {
            Some(position - d)
        } else if wrap {
            Some(size - (d - position))
        } else {
            None
        }
    });
    let above = (1..=reach).filter_map(|d| {
        if d <= room {
            Some(position + d)
        } else if wrap {
            Some(d - room - 1)
        } else {
            None
        }
    });
    below.chain(once(position)).chain(above).collect()
}

/// The points of the neighborhood, possibly with repeats. `center` must be a
/// point of the grid.
fn expand(center: &[usize], radius: usize, dimensions: &[usize], wrap: bool) -> Vec<Vec<usize>> {
    let mut points: Vec<VecDeque<usize>> = vec![VecDeque::new()];
    for (&position, &size) in center.iter().zip(dimensions).rev() {
        let coordinates = axis_coordinates(position, size, radius, wrap);
        points = points.into_iter().flat_map(|point| {
            coordinates.iter().map(move |&c| {
                let mut point = point.clone();
                point.push_front(c);
                point
            })
        }).collect();
    }
    points.into_iter().map(Vec::from).collect()
}

/// Returns the indices of the points within `radius` of the point at `index`
/// in a grid of the given dimensions. If `wrap` is `true`, each axis wraps
/// around; otherwise the neighborhood is clipped at the edges of the grid.
///
/// The result contains no repeats, and includes `index` itself. Its order is
/// well defined: the neighbors are enumerated as if by nested loops over the
/// axes, the last axis in the outermost loop and the first axis in the
/// innermost, each loop counting from `-radius` to `radius` (after clipping).
///
/// Fails if `index` is not a valid index into the grid, or if the grid has
/// more points than fit in a `usize`.
///
/// ```
/// use ndgrid::{neighbors};
/// assert_eq!(neighbors(0, 2, &[10], false), Ok(vec![0, 1, 2]));
/// assert_eq!(neighbors(0, 2, &[10], true), Ok(vec![8, 9, 0, 1, 2]));
/// assert_eq!(neighbors(0, 2, &[20, 10], false), Ok(vec![0, 10, 20, 1, 11, 21, 2, 12, 22]));
/// ```
pub fn neighbors(index: usize, radius: usize, dimensions: &[usize], wrap: bool) -> Result<Vec<usize>> {
    let center = index_to_point(index, dimensions)?;
    let indices = expand(&center, radius, dimensions, wrap).iter()
        .map(|point| point_to_index(point, dimensions))
        .collect::<Result<Vec<_>>>()?;
    Ok(indices.into_iter().unique().collect())
}

// ----------------------------------------------------------------------------

/// The shape of a neighborhood: how far it reaches, and what happens at the
/// edges of the grid.
///
/// ```
/// use ndgrid::{Neighborhood};
/// let moore = Neighborhood::default().wrapping(true);
/// assert_eq!(moore.indices(4, &[3, 3]), Ok(vec![0, 3, 6, 1, 4, 7, 2, 5, 8]));
/// assert_eq!(moore.indices(0, &[3, 3]), Ok(vec![8, 2, 5, 6, 0, 3, 7, 1, 4]));
/// assert_eq!(moore.points(4, &[5]), Ok(vec![vec![3], vec![4], vec![0]]));
/// ```
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub struct Neighborhood {
    /// The maximum distance along each axis.
    pub radius: usize,

    /// Whether each axis wraps around.
    pub wrap: bool,
}

impl Default for Neighborhood {
    fn default() -> Self { Self::new(1) }
}

impl Neighborhood {
    /// A neighborhood of the given radius that does not wrap.
    pub fn new(radius: usize) -> Self { Self {radius, wrap: false} }

    /// The same neighborhood with a different radius.
    pub fn with_radius(self, radius: usize) -> Self { Self {radius, ..self} }

    /// The same neighborhood, wrapping around the edges if `wrap` is `true`.
    pub fn wrapping(self, wrap: bool) -> Self { Self {wrap, ..self} }

    /// Equivalent to `neighbors(index, self.radius, dimensions, self.wrap)`.
    pub fn indices(&self, index: usize, dimensions: &[usize]) -> Result<Vec<usize>> {
        neighbors(index, self.radius, dimensions, self.wrap)
    }

    /// Like [`Self::indices()`] but returns points instead of indices, in the
    /// same order.
    pub fn points(&self, index: usize, dimensions: &[usize]) -> Result<Vec<Vec<usize>>> {
        let center = index_to_point(index, dimensions)?;
        Ok(expand(&center, self.radius, dimensions, self.wrap).into_iter().unique().collect())
    }
}

// ----------------------------------------------------------------------------
