//! Application handlers.
//!
//! Query handlers that orchestrate domain operations over the scoring gateway.

pub mod dashboard;

pub use dashboard::{
    AnalyzeFeatureHandler, AnalyzeFeatureQuery,
    DashboardError,
    ExplainPredictionHandler, ExplainPredictionQuery, ExplainPredictionResult,
    GetFeatureCatalogHandler,
    GetPredictionHandler, GetPredictionQuery, GetPredictionResult,
    GetUserSummaryHandler, GetUserSummaryQuery,
    ListUsersHandler,
};
