//! HTTP routes for dashboard endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{
    analyze_feature, get_explanation, get_prediction, get_user_summary, health, list_features,
    list_users, DashboardAppState,
};

/// Creates the dashboard router with all routes.
pub fn dashboard_routes(state: DashboardAppState) -> Router {
    Router::new()
        .route("/health", get(health))
        // GET /api/users
        .route("/api/users", get(list_users))
        // GET /api/features
        .route("/api/features", get(list_features))
        // GET /api/users/:user_id/summary
        .route("/api/users/:user_id/summary", get(get_user_summary))
        // GET /api/users/:user_id/prediction?amount=&annuity=
        .route("/api/users/:user_id/prediction", get(get_prediction))
        // GET /api/users/:user_id/explanation?amount=&annuity=
        .route("/api/users/:user_id/explanation", get(get_explanation))
        // GET /api/users/:user_id/features/:feature_id
        .route("/api/users/:user_id/features/:feature_id", get(analyze_feature))
        .with_state(state)
}
