//! A pure-Rust library of small utilities for N-dimensional grids.
//!
//! A grid is described by its dimensions, a `&[usize]` of axis sizes, and
//! its data is stored as a flat sequence in row-major order: the first axis
//! varies slowest and the last axis varies fastest. This crate converts
//! between the flat and the N-dimensional views of such a grid:
//!
//! - [`point_to_index()`] and [`index_to_point()`] convert between the
//!   coordinates of a point and its position in the flat sequence.
//! - [`group()`] and [`reshape()`] convert between a flat sequence and a
//!   [`Nested`] one, whose nesting follows the dimensions.
//! - [`reduce_dimensions()`] merges trailing axes.
//! - [`neighbors()`] and [`Neighborhood`] enumerate the indices around a
//!   point, with or without wrapping around the edges of the grid.
//!
//! It also provides a few reductions over sequences of numbers, such as
//! [`sum()`] and [`max()`], and a multiset comparison, [`are_equal_sets()`].
//!
//! Nothing here has any state. Functions that can be given meaningless
//! arguments return a [`Result`], failing with an [`Error`] that says what was
//! wrong. Functions that cannot are infallible.
//!
//! ```
//! use ndgrid::{neighbors, index_to_point};
//! // The 3x3 block around the point (1, 1) of a 4x5 grid.
//! let block = neighbors(6, 1, &[4, 5], false).unwrap();
//! assert_eq!(block, [0, 5, 10, 1, 6, 11, 2, 7, 12]);
//! assert_eq!(index_to_point(12, &[4, 5]), Ok(vec![2, 2]));
//! ```

mod error;
pub use error::{Error, Result};

pub mod nested;
pub use nested::{Nested};

mod index;
pub use index::{length, point_to_index, index_to_point, each};

mod group;
pub use group::{group, reshape, reduce_dimensions};

mod stats;
pub use stats::{sum, prod, max, min, normalize, manhattan_distance};

mod neighbors;
pub use neighbors::{neighbors, Neighborhood};

mod set;
pub use set::{are_equal_sets};
