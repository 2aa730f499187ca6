//! ExplainPredictionHandler - Query handler for per-feature contributions.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::scoring::{LoanTerms, PredictionExplanation};
use crate::ports::ScoringGateway;

use super::get_prediction::resolve_terms;
use super::DashboardError;

/// Query to explain a user's prediction under given loan terms.
#[derive(Debug, Clone)]
pub struct ExplainPredictionQuery {
    pub user_id: UserId,
    pub terms: LoanTerms,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExplainPredictionResult {
    pub terms: LoanTerms,
    pub explanation: PredictionExplanation,
}

/// Handler for prediction explanations.
pub struct ExplainPredictionHandler {
    gateway: Arc<dyn ScoringGateway>,
}

impl ExplainPredictionHandler {
    pub fn new(gateway: Arc<dyn ScoringGateway>) -> Self {
        Self { gateway }
    }

    pub async fn handle(
        &self,
        query: ExplainPredictionQuery,
    ) -> Result<ExplainPredictionResult, DashboardError> {
        let terms = resolve_terms(self.gateway.as_ref(), &query.user_id, query.terms).await?;
        let explanation = self.gateway.explain(&query.user_id, terms).await?;
        Ok(ExplainPredictionResult { terms, explanation })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::gateway::MockScoringGateway;
    use crate::domain::feature::UserRecord;

    fn user() -> UserId {
        UserId::new("100002").unwrap()
    }

    #[tokio::test]
    async fn test_returns_gateway_explanation() {
        let record = UserRecord::new()
            .with("AMT_CREDIT", 500_000.0)
            .with("AMT_ANNUITY", 20_000.0);
        let explanation = PredictionExplanation {
            explained_values: vec![0.3, -0.1],
            expected_value: 0.2,
            user_data: record.clone(),
        };
        let mock = MockScoringGateway::new()
            .with_record(user(), record)
            .with_explanation(explanation.clone());
        let handler = ExplainPredictionHandler::new(Arc::new(mock.clone()));

        let result = handler
            .handle(ExplainPredictionQuery {
                user_id: user(),
                terms: LoanTerms::new(Some(600_000.0), None),
            })
            .await
            .unwrap();

        assert_eq!(result.explanation, explanation);
        assert_eq!(result.terms, LoanTerms::new(Some(600_000.0), Some(20_000.0)));
        assert_eq!(mock.last_terms(), Some(result.terms));
    }

    #[tokio::test]
    async fn test_unknown_user_is_gateway_not_found() {
        let handler = ExplainPredictionHandler::new(Arc::new(MockScoringGateway::new()));

        let result = handler
            .handle(ExplainPredictionQuery {
                user_id: user(),
                terms: LoanTerms::new(None, None),
            })
            .await;

        assert!(matches!(
            result,
            Err(DashboardError::Gateway(crate::ports::GatewayError::NotFound(_)))
        ));
    }
}
