//! Result alias and combinators that keep call sites free of `unwrap`.

use crate::error::Error;

/// The standard Result type for zk-janitor core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for [`Result`] values produced by this crate.
pub trait ResultExt<T> {
    /// Inspect the error without consuming the Result.
    fn inspect_error<F: FnOnce(&Error)>(self, f: F) -> Self;
}

impl<T> ResultExt<T> for Result<T> {
    fn inspect_error<F: FnOnce(&Error)>(self, f: F) -> Self {
        if let Err(ref e) = self {
            f(e);
        }
        self
    }
}

/// Tap-style combinator for any Result type.
pub trait GenericResultExt<T, E> {
    /// Perform a side effect on the Err value without consuming the Result.
    fn tap_err<F: FnOnce(&E)>(self, f: F) -> Self;
}

impl<T, E> GenericResultExt<T, E> for std::result::Result<T, E> {
    fn tap_err<F: FnOnce(&E)>(self, f: F) -> Self {
        if let Err(ref e) = self {
            f(e);
        }
        self
    }
}
