//! Scoring Gateway Adapters.
//!
//! Implementations of the ScoringGateway port.
//!
//! ## Available Adapters
//!
//! - `HttpScoringGateway` - reqwest client for the remote scoring API
//! - `CachedScoringGateway` - Memoising decorator over any gateway
//! - `MockScoringGateway` - Configurable in-memory mock for testing

mod cached_gateway;
mod http_gateway;
mod mock_gateway;

pub use cached_gateway::CachedScoringGateway;
pub use http_gateway::{HttpGatewayConfig, HttpScoringGateway};
pub use mock_gateway::MockScoringGateway;
