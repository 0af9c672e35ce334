use thiserror::Error;

use crate::ds::value::Value;

/// Failures surfaced by composition and resolution.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExtendError {
    /// A non-object was passed where an object was required.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A field was invoked but did not resolve to a method.
    #[error("'{0}' is not a function")]
    NotCallable(String),
    /// A user-supplied method body or cook hook failed.
    #[error("method failure: {0}")]
    MethodError(String),
}

/// Result type for value-returning operations.
pub type ValueResult = Result<Value, ExtendError>;
