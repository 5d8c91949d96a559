//! Application-level errors
//!
//! The taxonomy callers see: invalid input is surfaced verbatim, an
//! unresolvable address names the offending text, and provider failures
//! only reach this layer once every tier for a sub-operation is exhausted.

use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Caller-supplied input violates a precondition; never retried
    #[error("{0}")]
    InvalidInput(String),

    /// An input address could not be geocoded by any available provider
    #[error("Could not resolve address '{0}'")]
    UnresolvedAddress(String),

    /// An external provider chain was exhausted for a sub-operation
    #[error("External service error: {0}")]
    ExternalService(String),

    /// All directions providers failed or found no route for a pair
    #[error("Routing failed: {0}")]
    RoutingFailed(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Check if this error is retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::ExternalService(_))
    }
}
