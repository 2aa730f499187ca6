//! Errors surfaced by dashboard query handlers.

use crate::domain::dashboard::{AnalysisError, SummaryError};
use crate::domain::foundation::FeatureId;
use crate::domain::scoring::LoanTermsError;
use crate::ports::GatewayError;

/// Errors that can occur while answering a dashboard query.
///
/// Each one degrades a single panel; none of them is fatal to the process.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DashboardError {
    #[error("Feature not found: {0}")]
    FeatureNotFound(FeatureId),

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Data integrity error: {0}")]
    DataIntegrity(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<AnalysisError> for DashboardError {
    fn from(err: AnalysisError) -> Self {
        DashboardError::DataIntegrity(err.to_string())
    }
}

impl From<LoanTermsError> for DashboardError {
    fn from(err: LoanTermsError) -> Self {
        DashboardError::DataIntegrity(err.to_string())
    }
}

impl From<SummaryError> for DashboardError {
    fn from(err: SummaryError) -> Self {
        DashboardError::DataIntegrity(err.to_string())
    }
}
