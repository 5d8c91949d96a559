//! Infrastructure layer for Waymark
//!
//! Configuration loading and the adapters that implement the application
//! ports on top of the integration clients.

pub mod adapters;
pub mod config;

pub use adapters::{GeocodingAdapter, RoutingAdapter};
pub use config::{AppConfig, ServerConfig};
