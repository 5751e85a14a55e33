//! Errors raised by native method implementations.

use thiserror::Error;

/// An error raised inside a native callable.
///
/// Native delegates return these from their bodies; the runtime wraps them in
/// [`RuntimeError::Native`](crate::RuntimeError::Native) without altering the
/// variant or message.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NativeError {
    /// An argument index past the end of the argument slots was requested.
    #[error("argument index {index} out of bounds (have {count})")]
    ArgumentIndexOutOfBounds { index: usize, count: usize },

    /// An argument slot held a value of the wrong kind.
    #[error("argument {index}: expected {expected}, got {actual}")]
    Conversion {
        index: usize,
        expected: &'static str,
        actual: &'static str,
    },

    /// The receiver slot did not hold what the method expected.
    #[error("invalid receiver: {message}")]
    InvalidThis { message: String },

    /// Any other failure raised by user code.
    #[error("{message}")]
    Other { message: String },
}

impl NativeError {
    /// Create an invalid-receiver error.
    pub fn invalid_this(message: impl Into<String>) -> Self {
        NativeError::InvalidThis {
            message: message.into(),
        }
    }

    /// Create a free-form error.
    pub fn other(message: impl Into<String>) -> Self {
        NativeError::Other {
            message: message.into(),
        }
    }
}
