//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `gateway` - Scoring gateway clients (HTTP, caching decorator, mock)
//! - `http` - REST API served to the dashboard front end

pub mod gateway;
pub mod http;

pub use gateway::{CachedScoringGateway, HttpGatewayConfig, HttpScoringGateway, MockScoringGateway};
pub use http::build_router;
