//! Sequences nested to any depth.
//!
//! A [`Nested<T>`] is either a single `T` or a list of `Nested<T>`s. Nothing
//! forces the lists at one level to have equal lengths, or even equal depths;
//! [`Nested::shape()`] tells you whether they do.
//!
//! The canonical form of a `Nested<T>` is the `Vec<T>` returned by
//! [`Nested::flatten()`], which lists the items in order, ignoring all
//! structure. Two `Nested<T>`s with the same canonical form hold the same
//! data, possibly arranged in different shapes. [`reshape()`] converts
//! between them.
//!
//! [`reshape()`]: super::reshape()

/// A `T`, or a list of `Nested<T>`s.
///
/// Literals are most easily written using the [`nested!`] macro.
///
/// [`nested!`]: crate::nested!
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum Nested<T> {
    Item(T),
    List(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// Constructs a one-dimensional `List` of `Item`s.
    ///
    /// ```
    /// use ndgrid::{Nested, nested};
    /// assert_eq!(Nested::list(1..4), nested![1, 2, 3]);
    /// ```
    pub fn list(items: impl IntoIterator<Item=T>) -> Self {
        Nested::List(items.into_iter().map(Nested::Item).collect())
    }

    /// Returns the `T` if `self` is an `Item`.
    pub fn as_item(&self) -> Option<&T> {
        match self {
            Nested::Item(t) => Some(t),
            Nested::List(_) => None,
        }
    }

    /// Returns the children if `self` is a `List`.
    pub fn as_list(&self) -> Option<&[Nested<T>]> {
        match self {
            Nested::Item(_) => None,
            Nested::List(children) => Some(children),
        }
    }

    /// Removes one level of structure: a `List` becomes its children, and an
    /// `Item` becomes a list containing only itself.
    pub fn into_children(self) -> Vec<Nested<T>> {
        match self {
            Nested::List(children) => children,
            item => vec![item],
        }
    }

    /// The number of `T`s, at any depth.
    pub fn len(&self) -> usize {
        match self {
            Nested::Item(_) => 1,
            Nested::List(children) => children.iter().map(Nested::len).sum(),
        }
    }

    /// `true` if `self` contains no `T`s.
    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// The maximum number of `List`s enclosing any `Item`. An `Item` has depth
    /// 0 and an empty `List` has depth 1.
    ///
    /// ```
    /// use ndgrid::{Nested, nested};
    /// assert_eq!(nested![[1, 2], [3]].depth(), 2);
    /// assert_eq!(Nested::<u8>::List(vec![]).depth(), 1);
    /// ```
    pub fn depth(&self) -> usize {
        match self {
            Nested::Item(_) => 0,
            Nested::List(children) => 1 + children.iter().map(Nested::depth).max().unwrap_or(0),
        }
    }

    /// The dimensions of `self`, if it is rectangular. Returns `None` if the
    /// `List`s at some level differ in length or in depth.
    ///
    /// ```
    /// use ndgrid::{nested};
    /// assert_eq!(nested![[1, 2, 3], [4, 5, 6]].shape(), Some(vec![2, 3]));
    /// assert_eq!(nested![[1, 2, 3], [4, 5]].shape(), None);
    /// ```
    pub fn shape(&self) -> Option<Vec<usize>> {
        match self {
            Nested::Item(_) => Some(Vec::new()),
            Nested::List(children) => {
                let mut shapes = children.iter().map(Nested::shape);
                let inner = match shapes.next() {
                    None => Vec::new(),
                    Some(first) => {
                        let first = first?;
                        for shape in shapes {
                            if shape? != first { return None; }
                        }
                        first
                    },
                };
                let mut shape = Vec::with_capacity(1 + inner.len());
                shape.push(children.len());
                shape.extend(inner);
                Some(shape)
            },
        }
    }

    /// Returns the canonical form of `self`: all the `T`s in order.
    ///
    /// ```
    /// use ndgrid::{nested};
    /// assert_eq!(nested![[1, 2], 3, [[4], []]].flatten(), [1, 2, 3, 4]);
    /// ```
    pub fn flatten(self) -> Vec<T> {
        let mut items = Vec::with_capacity(self.len());
        self.flatten_into(&mut items);
        items
    }

    fn flatten_into(self, items: &mut Vec<T>) {
        match self {
            Nested::Item(t) => items.push(t),
            Nested::List(children) => for child in children { child.flatten_into(items); },
        }
    }
}

impl<T> From<Vec<Nested<T>>> for Nested<T> {
    fn from(children: Vec<Nested<T>>) -> Self { Nested::List(children) }
}

impl<T> FromIterator<Nested<T>> for Nested<T> {
    fn from_iter<I: IntoIterator<Item=Nested<T>>>(iter: I) -> Self {
        Nested::List(iter.into_iter().collect())
    }
}

// ----------------------------------------------------------------------------

/// Constructs a [`Nested`] `List` from bracketed literals.
///
/// Each element is either a bracketed list or a single token tree. Wrap
/// negative numbers and other compound expressions in parentheses.
///
/// ```
/// use ndgrid::{Nested, nested};
/// let n: Nested<i32> = nested![[1, (-2)], [3]];
/// assert_eq!(n, Nested::List(vec![
///     Nested::List(vec![Nested::Item(1), Nested::Item(-2)]),
///     Nested::List(vec![Nested::Item(3)]),
/// ]));
/// ```
#[macro_export]
macro_rules! nested {
    (@element [$($x:tt),* $(,)?]) => {
        $crate::Nested::List(vec![$($crate::nested!(@element $x)),*])
    };
    (@element $x:expr) => {
        $crate::Nested::Item($x)
    };
    ($($x:tt),* $(,)?) => {
        $crate::Nested::List(vec![$($crate::nested!(@element $x)),*])
    };
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn macro_builds_lists() {
        let n: Nested<u8> = nested![[1, 2], 3];
        assert_eq!(n, Nested::List(vec![
            Nested::List(vec![Nested::Item(1), Nested::Item(2)]),
            Nested::Item(3),
        ]));
        let empty: Nested<u8> = nested![];
        assert_eq!(empty, Nested::List(vec![]));
    }

    #[test]
    fn len_and_depth() {
        let n = nested![[[1, 2], [3, 4]], [[5, 6], [7, 8]]];
        assert_eq!(n.len(), 8);
        assert_eq!(n.depth(), 3);
        assert!(!n.is_empty());
        assert_eq!(Nested::Item(5).depth(), 0);
        assert!(Nested::<u8>::List(vec![Nested::List(vec![])]).is_empty());
    }

    #[test]
    fn shape() {
        assert_eq!(Nested::Item(1).shape(), Some(vec![]));
        assert_eq!(Nested::<u8>::List(vec![]).shape(), Some(vec![0]));
        assert_eq!(nested![1, 2, 3].shape(), Some(vec![3]));
        assert_eq!(nested![[[1], [2]], [[3], [4]], [[5], [6]]].shape(), Some(vec![3, 2, 1]));
        // Ragged.
        assert_eq!(nested![[1, 2], [3]].shape(), None);
        // Mixed depth.
        assert_eq!(nested![[1, 2], 3].shape(), None);
        assert_eq!(nested![[[1]], [2]].shape(), None);
    }

    #[test]
    fn flatten() {
        assert_eq!(Nested::Item(7).flatten(), [7]);
        assert!(Nested::<u8>::List(vec![]).flatten().is_empty());
        assert_eq!(nested![[[1, 2], [3]], 4, [[], [5]]].flatten(), [1, 2, 3, 4, 5]);
    }

    #[test]
    fn into_children() {
        assert_eq!(nested![[1], 2].into_children(), vec![nested![1], Nested::Item(2)]);
        assert_eq!(Nested::Item(2).into_children(), vec![Nested::Item(2)]);
    }

    #[test]
    fn conversions() {
        let n: Nested<char> = vec![Nested::Item('a'), Nested::list("bc".chars())].into();
        assert_eq!(n, nested!['a', ['b', 'c']]);
        let m: Nested<usize> = (0..3).map(|i| Nested::list(0..i)).collect();
        assert_eq!(m, nested![[], [0], [0, 1]]);
        assert_eq!(m.as_list().map(<[_]>::len), Some(3));
        assert_eq!(Nested::Item(4).as_item(), Some(&4));
        assert_eq!(Nested::Item(4).as_list(), None);
    }
}
