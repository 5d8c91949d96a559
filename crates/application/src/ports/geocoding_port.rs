//! Geocoding port
//!
//! Defines the interface for address suggestion and resolution. Adapters
//! in the infrastructure layer implement this port on top of the
//! geocoding provider chain.

use async_trait::async_trait;
use domain::Coordinate;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for geocoding operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Ranked, deduplicated suggestion labels for a free-text query
    ///
    /// "Nothing matched" is an empty list, not an error.
    async fn suggest(&self, query: &str) -> Result<Vec<String>, ApplicationError>;

    /// Best single match for an address
    ///
    /// `Ok(None)` when no provider produced a usable candidate.
    async fn resolve(&self, address: &str) -> Result<Option<Coordinate>, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn GeocodingPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn GeocodingPort>();
    }

    #[tokio::test]
    async fn test_mock_port() {
        let mut mock = MockGeocodingPort::new();
        mock.expect_suggest()
            .returning(|_| Ok(vec!["123 Main St, Springfield".to_string()]));

        let suggestions = mock.suggest("123 Main").await.unwrap();
        assert_eq!(suggestions.len(), 1);
    }
}
