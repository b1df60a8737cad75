use thiserror::Error;

/// The error type for fallible container operations.
///
/// `K` is the key type carried by [`Error::OutOfRange`]. Operations that cannot fail with a
/// missing key use the default `Error<()>`.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error<K = ()> {
    /// The position is a sentinel or no longer denotes an element of the container.
    #[error("position does not denote an element of this container")]
    InvalidIterator,
    /// The key is not present in the map.
    #[error("key {0:?} is not present in the map")]
    OutOfRange(K),
}

