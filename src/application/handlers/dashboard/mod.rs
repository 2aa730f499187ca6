//! Dashboard query handlers.
//!
//! Read-only handlers behind each dashboard panel: user list, feature catalog,
//! user summary, risk prediction, prediction explanation and feature analysis.

mod analyze_feature;
mod error;
mod explain_prediction;
mod get_feature_catalog;
mod get_prediction;
mod get_user_summary;
mod list_users;

pub use analyze_feature::{AnalyzeFeatureHandler, AnalyzeFeatureQuery};
pub use error::DashboardError;
pub use explain_prediction::{
    ExplainPredictionHandler, ExplainPredictionQuery, ExplainPredictionResult,
};
pub use get_feature_catalog::GetFeatureCatalogHandler;
pub use get_prediction::{GetPredictionHandler, GetPredictionQuery, GetPredictionResult};
pub use get_user_summary::{GetUserSummaryHandler, GetUserSummaryQuery};
pub use list_users::ListUsersHandler;
