use thiserror::Error;

use crate::property::PropertyError;

/// Errors produced by the operations in this crate.
///
/// Nothing here is ever retried or logged-and-dropped internally; every error goes straight
/// back to the caller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArrayError {
    /// A required argument was unusable, e.g. a blank property name.
    ///
    /// This is a mistake in the call itself, not in the data.
    #[error("invalid argument `{}`: {}", .name, .reason)]
    InvalidArgument {
        name: &'static str,
        reason: String,
    },
    #[error("index {} is out of range for an array of length {}", .index, .len)]
    IndexOutOfRange { index: isize, len: usize },
    /// A property read failed while grouping.  The accessor's error is kept as-is.
    #[error(transparent)]
    PropertyAccess(#[from] PropertyError),
}

impl ArrayError {
    pub(crate) fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        ArrayError::InvalidArgument { name, reason: reason.into() }
    }
}
