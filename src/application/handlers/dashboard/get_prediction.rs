//! GetPredictionHandler - Query handler for a user's default-risk score.
//!
//! Loan terms the caller leaves unspecified default to the user's current
//! credit amount and annuity, which requires fetching the user record first.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::scoring::{LoanTerms, RiskPrediction};
use crate::ports::ScoringGateway;

use super::DashboardError;

/// Query to score a user under given loan terms.
#[derive(Debug, Clone)]
pub struct GetPredictionQuery {
    pub user_id: UserId,
    pub terms: LoanTerms,
}

/// Result: the prediction together with the terms actually scored.
#[derive(Debug, Clone, PartialEq)]
pub struct GetPredictionResult {
    pub terms: LoanTerms,
    pub prediction: RiskPrediction,
}

/// Handler for risk predictions. Never cached.
pub struct GetPredictionHandler {
    gateway: Arc<dyn ScoringGateway>,
}

impl GetPredictionHandler {
    pub fn new(gateway: Arc<dyn ScoringGateway>) -> Self {
        Self { gateway }
    }

    pub async fn handle(&self, query: GetPredictionQuery) -> Result<GetPredictionResult, DashboardError> {
        let terms = resolve_terms(self.gateway.as_ref(), &query.user_id, query.terms).await?;
        let prediction = self.gateway.predict(&query.user_id, terms).await?;

        tracing::debug!(
            user_id = %query.user_id,
            solvent = prediction.solvent().value(),
            "Scored user"
        );

        Ok(GetPredictionResult { terms, prediction })
    }
}

/// Completes partial loan terms from the user's record.
///
/// The gateway only accepts both terms, so anything still unset after the
/// record fallback is rejected before scoring.
pub(super) async fn resolve_terms(
    gateway: &dyn ScoringGateway,
    user_id: &UserId,
    terms: LoanTerms,
) -> Result<LoanTerms, DashboardError> {
    validate_terms(&terms)?;
    if terms.is_complete() {
        return Ok(terms);
    }
    let record = gateway.user_record(user_id).await?;
    let terms = terms.or_from_record(&record)?;
    if !terms.is_complete() {
        return Err(DashboardError::InvalidInput(format!(
            "user {} has no current loan to default from; pass amount and annuity",
            user_id
        )));
    }
    Ok(terms)
}

fn validate_terms(terms: &LoanTerms) -> Result<(), DashboardError> {
    for (field, value) in [("amount", terms.amount), ("annuity", terms.annuity)] {
        if let Some(v) = value {
            if !v.is_finite() || v < 0.0 {
                return Err(DashboardError::InvalidInput(format!(
                    "{} must be a non-negative number, got {}",
                    field, v
                )));
            }
        }
    }
    Ok(())
}
