//! Error handling module
//!
//! Centralized error types for the circulation core.

/// Library-wide Result type
pub type LibraryResult<T> = Result<T, LibraryError>;

/// Library error types
///
/// Borrow and return refusals are ordinary `false` outcomes, not errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LibraryError {
    /// An argument was outside its accepted range. Displays the message as-is.
    #[error("{0}")]
    InvalidArgument(String),

    /// The late fee does not fit in a `Decimal`
    #[error("Late fee exceeds the maximum representable amount")]
    FeeOverflow,
}

impl LibraryError {
    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}
