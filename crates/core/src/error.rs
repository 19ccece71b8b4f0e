//! Error types for Brook.

use alloc::string::String;
use core::fmt;

/// Result type alias for Brook operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types for Brook stream and binding operations.
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// An upstream stream terminated with a failure.
    Upstream {
        message: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Upstream { message } => {
                write!(f, "Upstream stream failed: {}", message)
            }
        }
    }
}

impl Error {
    /// Creates an upstream failure error.
    pub fn upstream(message: impl Into<String>) -> Self {
        Error::Upstream {
            message: message.into(),
        }
    }
}
