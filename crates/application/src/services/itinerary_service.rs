//! Multi-stop itinerary planning service
//!
//! Resolves every stop serially, then routes consecutive pairs in order.
//! Serial geocoding is deliberate: the free-tier providers behind the
//! geocoding port are rate-sensitive, and partially configured credentials
//! push some calls onto slower fallback paths.

use std::sync::Arc;

use domain::{Coordinate, Itinerary, Segment};
use tracing::{debug, info, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::{GeocodingPort, RoutingPort};

/// Minimum number of stops in a plan (start and end)
pub const MIN_STOPS: usize = 2;

/// Maximum number of stops in a plan
pub const MAX_STOPS: usize = 12;

/// Service for planning multi-stop driving itineraries
pub struct ItineraryService {
    geocoding: Arc<dyn GeocodingPort>,
    routing: Arc<dyn RoutingPort>,
}

impl std::fmt::Debug for ItineraryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItineraryService")
            .field("geocoding", &"<GeocodingPort>")
            .field("routing", &"<RoutingPort>")
            .finish()
    }
}

impl ItineraryService {
    /// Create a new itinerary service
    #[must_use]
    pub fn new(geocoding: Arc<dyn GeocodingPort>, routing: Arc<dyn RoutingPort>) -> Self {
        Self { geocoding, routing }
    }

    /// Plan a complete itinerary over an ordered list of addresses
    ///
    /// All-or-nothing: one unresolvable address or one unroutable pair
    /// aborts the whole plan.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` when fewer than 2 or more than 12 non-empty
    ///   addresses remain after trimming
    /// - `UnresolvedAddress` naming the first address no provider could
    ///   geocode
    /// - `RoutingFailed` when a consecutive pair could not be routed
    #[instrument(skip(self, addresses), fields(stops = addresses.len()))]
    pub async fn plan(&self, addresses: &[String]) -> Result<Itinerary, ApplicationError> {
        let stops: Vec<String> = addresses
            .iter()
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty())
            .collect();

        if stops.len() < MIN_STOPS {
            return Err(ApplicationError::InvalidInput(
                "need at least start and end".to_string(),
            ));
        }
        if stops.len() > MAX_STOPS {
            return Err(ApplicationError::InvalidInput("too many stops".to_string()));
        }

        // Strictly serial, in input order. Every address must resolve
        // before the first routing call is made.
        let mut coordinates: Vec<Coordinate> = Vec::with_capacity(stops.len());
        for address in &stops {
            debug!(%address, "Resolving stop");
            match self.geocoding.resolve(address).await? {
                Some(coordinate) => coordinates.push(coordinate),
                None => {
                    warn!(%address, "Address did not resolve, aborting plan");
                    return Err(ApplicationError::UnresolvedAddress(address.clone()));
                },
            }
        }

        // Segment order is itinerary order; no reordering or optimization.
        let mut segments: Vec<Segment> = Vec::with_capacity(stops.len() - 1);
        for pair in coordinates.windows(2) {
            let segment = self
                .routing
                .route(&pair[0], &pair[1])
                .await
                .map_err(|e| match e {
                    ApplicationError::RoutingFailed(_) => e,
                    other => ApplicationError::RoutingFailed(other.to_string()),
                })?;
            segments.push(segment);
        }

        let itinerary = Itinerary::new(stops, coordinates, segments)
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;

        info!(
            stops = itinerary.stop_count(),
            total_distance_meters = itinerary.total_distance_meters,
            total_duration_seconds = itinerary.total_duration_seconds,
            "Itinerary planned"
        );

        Ok(itinerary)
    }
}

#[cfg(test)]
mod tests {
    use mockall::Sequence;
    use mockall::predicate::eq;

    use super::*;
    use crate::ports::{MockGeocodingPort, MockRoutingPort};

    fn coordinate_for(address: &str) -> Coordinate {
        // deterministic fake coordinates keyed by address length
        #[allow(clippy::cast_precision_loss)]
        let offset = address.len() as f64 / 100.0;
        Coordinate::new_unchecked(-77.0 - offset, 38.0 + offset)
    }

    fn resolving_geocoder() -> MockGeocodingPort {
        let mut mock = MockGeocodingPort::new();
        mock.expect_resolve()
            .returning(|address| Ok(Some(coordinate_for(address))));
        mock
    }

    fn segment_router(distance: f64, duration: f64) -> MockRoutingPort {
        let mut mock = MockRoutingPort::new();
        mock.expect_route().returning(move |_, _| {
            Ok(Segment::new(
                distance,
                duration,
                "mock",
                serde_json::Value::Null,
            ))
        });
        mock
    }

    fn service(geocoding: MockGeocodingPort, routing: MockRoutingPort) -> ItineraryService {
        ItineraryService::new(Arc::new(geocoding), Arc::new(routing))
    }

    fn addresses(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[tokio::test]
    async fn test_two_stop_plan_has_one_segment() {
        let service = service(resolving_geocoder(), segment_router(4_500_000.0, 150_000.0));

        let itinerary = service
            .plan(&addresses(&[
                "1600 Pennsylvania Ave NW, Washington, DC",
                "1 Infinite Loop, Cupertino, CA",
            ]))
            .await
            .unwrap();

        assert_eq!(itinerary.segments.len(), 1);
        assert!(itinerary.total_distance_meters > 0.0);
        assert!(itinerary.total_duration_seconds > 0.0);
    }

    #[tokio::test]
    async fn test_totals_are_segment_sums() {
        let mut routing = MockRoutingPort::new();
        let mut distances = vec![3000.0, 2000.0, 1000.0];
        routing.expect_route().times(3).returning(move |_, _| {
            let distance = distances.pop().unwrap_or_default();
            Ok(Segment::new(
                distance,
                distance / 10.0,
                "mock",
                serde_json::Value::Null,
            ))
        });

        let service = service(resolving_geocoder(), routing);
        let itinerary = service
            .plan(&addresses(&["a one", "b two", "c three", "d four"]))
            .await
            .unwrap();

        assert_eq!(itinerary.segments.len(), 3);
        let expected: f64 = itinerary.segments.iter().map(|s| s.distance_meters).sum();
        assert!((itinerary.total_distance_meters - expected).abs() < 1e-9);
        assert!((itinerary.total_distance_meters - 6000.0).abs() < 1e-9);
        assert!((itinerary.total_duration_seconds - 600.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_single_stop_is_invalid_without_any_calls() {
        // no expectations: any port call would panic the mock
        let service = service(MockGeocodingPort::new(), MockRoutingPort::new());

        let result = service.plan(&addresses(&["onlyonestop"])).await;

        let Err(ApplicationError::InvalidInput(msg)) = result else {
            unreachable!("expected InvalidInput");
        };
        assert_eq!(msg, "need at least start and end");
    }

    #[tokio::test]
    async fn test_empty_entries_are_dropped_before_validation() {
        let service = service(MockGeocodingPort::new(), MockRoutingPort::new());

        let result = service
            .plan(&addresses(&["  ", "only one real stop", "\t"]))
            .await;

        assert!(matches!(result, Err(ApplicationError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_thirteen_stops_rejected_without_any_calls() {
        let service = service(MockGeocodingPort::new(), MockRoutingPort::new());

        let thirteen: Vec<String> = (1..=13).map(|i| format!("stop number {i}")).collect();
        let result = service.plan(&thirteen).await;

        let Err(ApplicationError::InvalidInput(msg)) = result else {
            unreachable!("expected InvalidInput");
        };
        assert_eq!(msg, "too many stops");
    }

    #[tokio::test]
    async fn test_twelve_stops_accepted() {
        let service = service(resolving_geocoder(), segment_router(100.0, 10.0));

        let twelve: Vec<String> = (1..=12).map(|i| format!("stop number {i}")).collect();
        let itinerary = service.plan(&twelve).await.unwrap();

        assert_eq!(itinerary.stop_count(), 12);
        assert_eq!(itinerary.segments.len(), 11);
    }

    #[tokio::test]
    async fn test_unresolved_address_aborts_before_routing() {
        let mut geocoding = MockGeocodingPort::new();
        geocoding
            .expect_resolve()
            .with(eq("first stop"))
            .times(1)
            .returning(|a| Ok(Some(coordinate_for(a))));
        geocoding
            .expect_resolve()
            .with(eq("middle of nowhere"))
            .times(1)
            .returning(|_| Ok(None));
        // the third address must never be attempted

        let mut routing = MockRoutingPort::new();
        routing.expect_route().times(0);

        let service = service(geocoding, routing);
        let result = service
            .plan(&addresses(&["first stop", "middle of nowhere", "third stop"]))
            .await;

        let Err(ApplicationError::UnresolvedAddress(address)) = result else {
            unreachable!("expected UnresolvedAddress");
        };
        assert_eq!(address, "middle of nowhere");
    }

    #[tokio::test]
    async fn test_addresses_resolved_serially_in_input_order() {
        let mut geocoding = MockGeocodingPort::new();
        let mut seq = Sequence::new();
        for stop in ["alpha road", "bravo road", "charlie road"] {
            geocoding
                .expect_resolve()
                .with(eq(stop))
                .times(1)
                .in_sequence(&mut seq)
                .returning(|a| Ok(Some(coordinate_for(a))));
        }

        let service = service(geocoding, segment_router(100.0, 10.0));
        service
            .plan(&addresses(&["alpha road", "bravo road", "charlie road"]))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_routing_failure_aborts_the_plan() {
        let mut routing = MockRoutingPort::new();
        routing.expect_route().times(1).returning(|_, _| {
            Err(ApplicationError::RoutingFailed(
                "No route found from 0, 0 to 1, 1".to_string(),
            ))
        });

        let service = service(resolving_geocoder(), routing);
        let result = service.plan(&addresses(&["start here", "end there"])).await;

        let Err(ApplicationError::RoutingFailed(msg)) = result else {
            unreachable!("expected RoutingFailed");
        };
        assert!(msg.contains("No route found"));
    }

    #[tokio::test]
    async fn test_non_routing_errors_are_wrapped_as_routing_failures() {
        let mut routing = MockRoutingPort::new();
        routing.expect_route().times(1).returning(|_, _| {
            Err(ApplicationError::ExternalService(
                "directions providers exhausted".to_string(),
            ))
        });

        let service = service(resolving_geocoder(), routing);
        let result = service.plan(&addresses(&["start here", "end there"])).await;

        assert!(matches!(result, Err(ApplicationError::RoutingFailed(_))));
    }

    #[tokio::test]
    async fn test_input_addresses_are_trimmed_in_result() {
        let service = service(resolving_geocoder(), segment_router(100.0, 10.0));

        let itinerary = service
            .plan(&addresses(&["  start here  ", "end there\n"]))
            .await
            .unwrap();

        assert_eq!(itinerary.addresses[0], "start here");
        assert_eq!(itinerary.addresses[1], "end there");
    }
}
