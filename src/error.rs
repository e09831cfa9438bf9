use thiserror::{Error};

/// The ways in which a function of this crate can reject its arguments.
///
/// Arguments that are merely unusual (e.g. a [`reshape()`] that does not
/// exactly fill its dimensions) are not errors. Only arguments for which no
/// sensible answer exists are rejected.
///
/// [`reshape()`]: super::reshape()
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An argument is outside the domain of the function, e.g. a group size of
    /// zero, or two points with different numbers of coordinates.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A coordinate or an index does not fit in its axis or grid.
    #[error("index {index} is out of bounds for length {length}")]
    OutOfBounds { index: usize, length: usize },

    /// A reduction that needs at least one element was given none.
    #[error("{0} of an empty sequence")]
    Empty(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Error::InvalidArgument(message.into())
    }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(Error::invalid("group size is zero").to_string(), "invalid argument: group size is zero");
        assert_eq!(Error::OutOfBounds {index: 7, length: 6}.to_string(), "index 7 is out of bounds for length 6");
        assert_eq!(Error::Empty("max").to_string(), "max of an empty sequence");
    }
}
