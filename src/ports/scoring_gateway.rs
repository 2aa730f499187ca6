//! ScoringGateway port - the remote data and prediction service.
//!
//! Every piece of data the dashboard shows comes through this port: the
//! user list, the feature catalog, population samples, user records, model
//! predictions and prediction explanations. Adapters are responsible for
//! translating the gateway's `"null"` sentinel into
//! [`FeatureValue::Missing`](crate::domain::feature::FeatureValue) and for
//! rejecting payloads that violate the contract.

use async_trait::async_trait;

use crate::domain::feature::{FeatureDescriptor, PopulationSample, UserRecord};
use crate::domain::foundation::{FeatureId, UserId};
use crate::domain::scoring::{LoanTerms, PredictionExplanation, RiskPrediction};

/// Port for the remote scoring gateway.
#[async_trait]
pub trait ScoringGateway: Send + Sync {
    /// Identifiers of every user the gateway can score.
    async fn list_users(&self) -> Result<Vec<UserId>, GatewayError>;

    /// Full feature catalog, including identifier and label columns.
    async fn list_features(&self) -> Result<Vec<FeatureDescriptor>, GatewayError>;

    /// Population values of one feature, split by loan outcome.
    async fn feature_sample(&self, feature_id: &FeatureId) -> Result<PopulationSample, GatewayError>;

    /// Raw record of one user.
    async fn user_record(&self, user_id: &UserId) -> Result<UserRecord, GatewayError>;

    /// Default-risk prediction for a user under the given loan terms.
    async fn predict(&self, user_id: &UserId, terms: LoanTerms) -> Result<RiskPrediction, GatewayError>;

    /// Per-feature explanation of the prediction.
    async fn explain(
        &self,
        user_id: &UserId,
        terms: LoanTerms,
    ) -> Result<PredictionExplanation, GatewayError>;
}

/// Errors raised while talking to the gateway.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GatewayError {
    /// Connection refused, DNS failure, reset...
    #[error("gateway unavailable: {0}")]
    Unavailable(String),

    #[error("gateway timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    #[error("gateway resource not found: {0}")]
    NotFound(String),

    /// Non-success status other than 404.
    #[error("gateway returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// Payload does not match the contract (missing fields, bad probabilities).
    #[error("invalid gateway response: {0}")]
    InvalidResponse(String),
}

impl GatewayError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound(resource.into())
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse(message.into())
    }

    /// True when the gateway could not be reached at all.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Unavailable(_) | Self::Timeout { .. })
    }
}
