//! Routing error types

use thiserror::Error;

/// Errors that can occur while routing a pair of coordinates
#[derive(Debug, Error)]
pub enum RoutingError {
    /// Connection to the directions service failed
    #[error("Directions connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request to the directions service failed
    #[error("Directions request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse a directions response
    #[error("Directions parse error: {0}")]
    ParseError(String),

    /// Request timeout
    #[error("Directions request timed out")]
    Timeout,

    /// The provider answered but found no drivable route for the pair
    #[error("No route found from {from} to {to}")]
    NoRoute {
        /// Origin coordinate description
        from: String,
        /// Destination coordinate description
        to: String,
    },

    /// Configuration error
    #[error("Directions configuration error: {0}")]
    ConfigurationError(String),
}

impl RoutingError {
    /// Whether the fallback provider is worth trying after this error
    ///
    /// A well-formed "no route" answer is final for the pair; transport
    /// and server failures are not.
    #[must_use]
    pub const fn is_fallback_worthy(&self) -> bool {
        !matches!(self, Self::NoRoute { .. } | Self::ConfigurationError(_))
    }
}
