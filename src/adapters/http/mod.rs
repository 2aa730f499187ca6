//! HTTP adapters - REST API implementations.
//!
//! Exposes the dashboard queries as JSON endpoints.

pub mod app;
pub mod dashboard;

// Re-export key types for convenience
pub use app::build_router;
pub use dashboard::{dashboard_routes, DashboardAppState};
