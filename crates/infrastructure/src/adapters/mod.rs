//! Adapters - Application port implementations over integration clients

mod geocoding_adapter;
mod routing_adapter;

pub use geocoding_adapter::GeocodingAdapter;
pub use routing_adapter::RoutingAdapter;
