//! Router assembly: dashboard routes plus the tower-http middleware stack.

use std::sync::Arc;

use axum::Router;
use http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::ports::ScoringGateway;

use super::dashboard::{dashboard_routes, DashboardAppState};

/// Builds the full application router over a scoring gateway.
pub fn build_router(gateway: Arc<dyn ScoringGateway>, server: &ServerConfig) -> Router {
    dashboard_routes(DashboardAppState::new(gateway))
        .layer(cors_layer(&server.cors_origins_list()))
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(TraceLayer::new_for_http())
}

/// Any origin when none are configured, otherwise only the listed ones.
/// Origins that are not valid header values are skipped.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        let values: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match origin.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(values)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET])
        .allow_headers(Any)
}
