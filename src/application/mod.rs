//! Application layer - Queries and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! The dashboard is read-only, so every handler here is a query handler.

pub mod handlers;

pub use handlers::{
    AnalyzeFeatureHandler, AnalyzeFeatureQuery,
    DashboardError,
    ExplainPredictionHandler, ExplainPredictionQuery, ExplainPredictionResult,
    GetFeatureCatalogHandler,
    GetPredictionHandler, GetPredictionQuery, GetPredictionResult,
    GetUserSummaryHandler, GetUserSummaryQuery,
    ListUsersHandler,
};
