//! Error types for collection operations.
//!
//! Every accessor call is a network call, so callers handle these as normal
//! operational conditions. Nothing in redcoll swallows, logs or retries an
//! error; each one reaches the caller of the operation that raised it.
//!
//! | Variant | Raised | I/O issued |
//! |---------|--------|------------|
//! | `Validation` | empty key, missing pool, bad pool config | never |
//! | `Connectivity` | store unreachable, pool exhausted | maybe |
//! | `OutOfRange` | list index outside `[0, len)` | sometimes |
//! | `Command` | store rejected the command | yes |

use thiserror::Error;

/// Boxed source error carried by [`Error::Connectivity`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// All redcoll errors.
#[derive(Debug, Error)]
pub enum Error {
    /// A required argument is missing or empty.
    #[error("validation error: {0}")]
    Validation(String),

    /// The store is unreachable or the pool cannot supply a connection.
    #[error("connectivity error: {0}")]
    Connectivity(#[source] BoxError),

    /// A list index is outside the valid bounds.
    #[error("list index {index} out of range{}", bounds(.len))]
    OutOfRange {
        /// The rejected index
        index: usize,
        /// List length observed by the store, if it was consulted
        len: Option<usize>,
    },

    /// The store rejected the command (wrong type at key, etc.).
    #[error("store command error: {0}")]
    Command(String),
}

fn bounds(len: &Option<usize>) -> String {
    match len {
        Some(len) => format!(" for list of length {}", len),
        None => String::new(),
    }
}

/// Result type for redcoll operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wrap any error as a connectivity failure.
    pub fn connectivity(err: impl Into<BoxError>) -> Self {
        Error::Connectivity(err.into())
    }

    /// Check if this is a validation error.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// Check if this is a connectivity error.
    pub fn is_connectivity(&self) -> bool {
        matches!(self, Error::Connectivity(_))
    }

    /// Check if this is an out-of-range error.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Error::OutOfRange { .. })
    }

    /// Check if the store rejected the command.
    pub fn is_command(&self) -> bool {
        matches!(self, Error::Command(_))
    }
}

// Pool checkout failures (timeout waiting for a free connection, or the
// manager failing to connect) are connectivity failures.
impl From<r2d2::Error> for Error {
    fn from(e: r2d2::Error) -> Self {
        Error::Connectivity(Box::new(e))
    }
}
