//! HTTP DTOs for dashboard endpoints.
//!
//! The dashboard is read-only, so we only have response DTOs plus the query
//! string for loan terms. Domain view models that are already designed for
//! serialization are re-exported directly.

pub use crate::domain::dashboard::{FeatureAnalysis, UserSummary};

use serde::{Deserialize, Serialize};

use crate::application::{ExplainPredictionResult, GetPredictionResult};
use crate::domain::feature::{FeatureCatalog, FeatureDescriptor, FeatureValue, ValueType};
use crate::domain::foundation::{FeatureId, UserId};
use crate::domain::scoring::LoanTerms;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// `?amount=&annuity=` query string. Both default to the user's current loan.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct LoanTermsParams {
    pub amount: Option<f64>,
    pub annuity: Option<f64>,
}

impl From<LoanTermsParams> for LoanTerms {
    fn from(params: LoanTermsParams) -> Self {
        LoanTerms::new(params.amount, params.annuity)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserListResponse {
    pub user_ids: Vec<UserId>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeatureSummary {
    pub id: FeatureId,
    pub name: String,
    pub label: String,
    pub description: String,
    pub value_type: ValueType,
}

impl From<&FeatureDescriptor> for FeatureSummary {
    fn from(descriptor: &FeatureDescriptor) -> Self {
        Self {
            id: descriptor.id.clone(),
            name: descriptor.name.clone(),
            label: descriptor.label(),
            description: descriptor.description.clone(),
            value_type: descriptor.value_type,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FeatureListResponse {
    pub features: Vec<FeatureSummary>,
}

impl From<&FeatureCatalog> for FeatureListResponse {
    fn from(catalog: &FeatureCatalog) -> Self {
        Self {
            features: catalog.iter().map(FeatureSummary::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PredictionResponse {
    pub user_id: UserId,
    pub terms: LoanTerms,
    pub solvent: f64,
    pub insolvent: f64,
    pub solvent_percent: u8,
    pub insolvent_percent: u8,
    pub solvent_text: String,
    pub insolvent_text: String,
}

impl PredictionResponse {
    pub fn new(user_id: UserId, result: GetPredictionResult) -> Self {
        let prediction = result.prediction;
        Self {
            user_id,
            terms: result.terms,
            solvent: prediction.solvent().value(),
            insolvent: prediction.insolvent().value(),
            solvent_percent: prediction.solvent().as_percent(),
            insolvent_percent: prediction.insolvent().as_percent(),
            solvent_text: prediction.solvent_text(),
            insolvent_text: prediction.insolvent_text(),
        }
    }
}

/// One feature contribution, strongest first.
#[derive(Debug, Clone, Serialize)]
pub struct ContributionView {
    pub feature: String,
    pub value: FeatureValue,
    pub contribution: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExplanationResponse {
    pub user_id: UserId,
    pub terms: LoanTerms,
    pub expected_value: f64,
    pub output_value: f64,
    pub contributions: Vec<ContributionView>,
}

impl ExplanationResponse {
    pub fn new(user_id: UserId, result: ExplainPredictionResult) -> Self {
        let explanation = &result.explanation;
        Self {
            user_id,
            terms: result.terms,
            expected_value: explanation.expected_value,
            output_value: explanation.output_value(),
            contributions: explanation
                .contributions()
                .into_iter()
                .map(|c| ContributionView {
                    feature: c.feature.to_string(),
                    value: c.value.clone(),
                    contribution: c.contribution,
                })
                .collect(),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new("NOT_FOUND", message)
    }

    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self::new("DATA_INTEGRITY", message)
    }

    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self::new("BAD_GATEWAY", message)
    }
}
