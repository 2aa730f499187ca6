//! HTTP handlers for dashboard endpoints.
//!
//! These handlers connect Axum routes to application layer query handlers.

use std::sync::Arc;

use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::{
    AnalyzeFeatureHandler, AnalyzeFeatureQuery, DashboardError, ExplainPredictionHandler,
    ExplainPredictionQuery, GetFeatureCatalogHandler, GetPredictionHandler, GetPredictionQuery,
    GetUserSummaryHandler, GetUserSummaryQuery, ListUsersHandler,
};
use crate::domain::foundation::{FeatureId, UserId};
use crate::ports::{GatewayError, ScoringGateway};

use super::dto::{
    ErrorResponse, ExplanationResponse, FeatureAnalysis, FeatureListResponse, HealthResponse,
    LoanTermsParams, PredictionResponse, UserListResponse, UserSummary,
};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Dashboard API error that implements IntoResponse.
#[derive(Debug)]
pub enum DashboardApiError {
    BadRequest(String),
    NotFound(String),
    Unprocessable(String),
    BadGateway(String),
}

impl IntoResponse for DashboardApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            DashboardApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            DashboardApiError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, ErrorResponse::not_found(msg))
            }
            DashboardApiError::Unprocessable(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, ErrorResponse::unprocessable(msg))
            }
            DashboardApiError::BadGateway(msg) => {
                (StatusCode::BAD_GATEWAY, ErrorResponse::bad_gateway(msg))
            }
        };
        (status, Json(error)).into_response()
    }
}

impl From<DashboardError> for DashboardApiError {
    fn from(error: DashboardError) -> Self {
        match error {
            DashboardError::FeatureNotFound(id) => {
                DashboardApiError::NotFound(format!("Feature {} not found", id))
            }
            DashboardError::Gateway(GatewayError::NotFound(what)) => {
                DashboardApiError::NotFound(format!("Gateway has no {}", what))
            }
            DashboardError::Gateway(err) if err.is_transport() => {
                tracing::warn!(error = %err, "Scoring gateway unreachable");
                DashboardApiError::BadGateway(err.to_string())
            }
            DashboardError::Gateway(err) => {
                tracing::warn!(error = %err, "Scoring gateway broke its contract");
                DashboardApiError::BadGateway(err.to_string())
            }
            DashboardError::DataIntegrity(msg) => {
                tracing::warn!(error = %msg, "Rejected malformed gateway data");
                DashboardApiError::Unprocessable(msg)
            }
            DashboardError::InvalidInput(msg) => DashboardApiError::BadRequest(msg),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing dashboard dependencies.
#[derive(Clone)]
pub struct DashboardAppState {
    pub gateway: Arc<dyn ScoringGateway>,
}

impl DashboardAppState {
    pub fn new(gateway: Arc<dyn ScoringGateway>) -> Self {
        Self { gateway }
    }

    pub fn list_users_handler(&self) -> ListUsersHandler {
        ListUsersHandler::new(self.gateway.clone())
    }

    pub fn feature_catalog_handler(&self) -> GetFeatureCatalogHandler {
        GetFeatureCatalogHandler::new(self.gateway.clone())
    }

    pub fn user_summary_handler(&self) -> GetUserSummaryHandler {
        GetUserSummaryHandler::new(self.gateway.clone())
    }

    pub fn prediction_handler(&self) -> GetPredictionHandler {
        GetPredictionHandler::new(self.gateway.clone())
    }

    pub fn explanation_handler(&self) -> ExplainPredictionHandler {
        ExplainPredictionHandler::new(self.gateway.clone())
    }

    pub fn analyze_feature_handler(&self) -> AnalyzeFeatureHandler {
        AnalyzeFeatureHandler::new(self.gateway.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Path Parsing
// ════════════════════════════════════════════════════════════════════════════════

fn parse_user_id(raw: &str) -> Result<UserId, DashboardApiError> {
    raw.parse()
        .map_err(|_| DashboardApiError::BadRequest("Invalid user ID".to_string()))
}

fn parse_feature_id(raw: &str) -> Result<FeatureId, DashboardApiError> {
    raw.parse()
        .map_err(|_| DashboardApiError::BadRequest("Invalid feature ID".to_string()))
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// GET /api/users
pub async fn list_users(
    State(state): State<DashboardAppState>,
) -> Result<Json<UserListResponse>, DashboardApiError> {
    let user_ids = state.list_users_handler().handle().await?;
    Ok(Json(UserListResponse { user_ids }))
}

/// GET /api/features
///
/// Returns the selectable features, identifier columns excluded.
pub async fn list_features(
    State(state): State<DashboardAppState>,
) -> Result<Json<FeatureListResponse>, DashboardApiError> {
    let catalog = state.feature_catalog_handler().handle().await?;
    Ok(Json(FeatureListResponse::from(&catalog)))
}

/// GET /api/users/:user_id/summary
pub async fn get_user_summary(
    State(state): State<DashboardAppState>,
    Path(user_id_str): Path<String>,
) -> Result<Json<UserSummary>, DashboardApiError> {
    let user_id = parse_user_id(&user_id_str)?;

    let summary = state
        .user_summary_handler()
        .handle(GetUserSummaryQuery { user_id })
        .await?;

    Ok(Json(summary))
}

/// GET /api/users/:user_id/prediction?amount=&annuity=
pub async fn get_prediction(
    State(state): State<DashboardAppState>,
    Path(user_id_str): Path<String>,
    Query(params): Query<LoanTermsParams>,
) -> Result<Json<PredictionResponse>, DashboardApiError> {
    let user_id = parse_user_id(&user_id_str)?;

    let query = GetPredictionQuery {
        user_id: user_id.clone(),
        terms: params.into(),
    };
    let result = state.prediction_handler().handle(query).await?;

    Ok(Json(PredictionResponse::new(user_id, result)))
}

/// GET /api/users/:user_id/explanation?amount=&annuity=
pub async fn get_explanation(
    State(state): State<DashboardAppState>,
    Path(user_id_str): Path<String>,
    Query(params): Query<LoanTermsParams>,
) -> Result<Json<ExplanationResponse>, DashboardApiError> {
    let user_id = parse_user_id(&user_id_str)?;

    let query = ExplainPredictionQuery {
        user_id: user_id.clone(),
        terms: params.into(),
    };
    let result = state.explanation_handler().handle(query).await?;

    Ok(Json(ExplanationResponse::new(user_id, result)))
}

/// GET /api/users/:user_id/features/:feature_id
///
/// Returns the delta indicator and distribution chart for one feature.
pub async fn analyze_feature(
    State(state): State<DashboardAppState>,
    Path((user_id_str, feature_id_str)): Path<(String, String)>,
) -> Result<Json<FeatureAnalysis>, DashboardApiError> {
    let query = AnalyzeFeatureQuery {
        user_id: parse_user_id(&user_id_str)?,
        feature_id: parse_feature_id(&feature_id_str)?,
    };

    let analysis = state.analyze_feature_handler().handle(query).await?;

    Ok(Json(analysis))
}
