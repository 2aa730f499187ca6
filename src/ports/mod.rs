//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ScoringGateway` - Remote data and prediction service

mod scoring_gateway;

pub use scoring_gateway::{GatewayError, ScoringGateway};
