//! Mock Scoring Gateway for testing.
//!
//! Provides a configurable in-memory implementation of the ScoringGateway
//! port, allowing tests to run without a live scoring API.
//!
//! # Features
//!
//! - Pre-configured users, catalog, samples, records and predictions
//! - Error injection for failure handling tests
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let gateway = MockScoringGateway::new()
//!     .with_users(vec![user_id.clone()])
//!     .with_prediction(0.9, 0.1);
//!
//! let prediction = gateway.predict(&user_id, terms).await?;
//! assert_eq!(prediction.solvent().as_percent(), 90);
//! ```

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::feature::{FeatureDescriptor, PopulationSample, UserRecord};
use crate::domain::foundation::{FeatureId, UserId};
use crate::domain::scoring::{LoanTerms, PredictionExplanation, RiskPrediction};
use crate::ports::{GatewayError, ScoringGateway};

/// Mock scoring gateway for testing.
#[derive(Debug, Clone, Default)]
pub struct MockScoringGateway {
    users: Vec<UserId>,
    features: Vec<FeatureDescriptor>,
    samples: HashMap<FeatureId, PopulationSample>,
    records: HashMap<UserId, UserRecord>,
    prediction: Option<(f64, f64)>,
    explanation: Option<PredictionExplanation>,
    /// When set, every call fails with this error.
    failure: Option<GatewayError>,
    /// Call history for verification: operation name and loan terms if any.
    calls: Arc<Mutex<Vec<(&'static str, Option<LoanTerms>)>>>,
}

impl MockScoringGateway {
    /// Creates an empty mock. Lookups of unknown resources return NotFound.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(mut self, users: Vec<UserId>) -> Self {
        self.users = users;
        self
    }

    pub fn with_features(mut self, features: Vec<FeatureDescriptor>) -> Self {
        self.features = features;
        self
    }

    pub fn with_sample(mut self, feature_id: FeatureId, sample: PopulationSample) -> Self {
        self.samples.insert(feature_id, sample);
        self
    }

    pub fn with_record(mut self, user_id: UserId, record: UserRecord) -> Self {
        self.records.insert(user_id, record);
        self
    }

    /// Raw `(negative_pred, positive_pred)` pair, validated on each call.
    pub fn with_prediction(mut self, negative: f64, positive: f64) -> Self {
        self.prediction = Some((negative, positive));
        self
    }

    pub fn with_explanation(mut self, explanation: PredictionExplanation) -> Self {
        self.explanation = Some(explanation);
        self
    }

    /// Makes every call fail with `error`.
    pub fn failing(mut self, error: GatewayError) -> Self {
        self.failure = Some(error);
        self
    }

    /// Number of calls made to `operation`.
    pub fn call_count(&self, operation: &str) -> usize {
        self.calls
            .lock()
            .map(|calls| calls.iter().filter(|(op, _)| *op == operation).count())
            .unwrap_or(0)
    }

    /// Loan terms passed to the most recent `predict` or `explain` call.
    pub fn last_terms(&self) -> Option<LoanTerms> {
        self.calls
            .lock()
            .ok()
            .and_then(|calls| calls.iter().rev().find_map(|(_, terms)| *terms))
    }

    fn record_call(&self, operation: &'static str, terms: Option<LoanTerms>) -> Result<(), GatewayError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((operation, terms));
        }
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ScoringGateway for MockScoringGateway {
    async fn list_users(&self) -> Result<Vec<UserId>, GatewayError> {
        self.record_call("list_users", None)?;
        Ok(self.users.clone())
    }

    async fn list_features(&self) -> Result<Vec<FeatureDescriptor>, GatewayError> {
        self.record_call("list_features", None)?;
        Ok(self.features.clone())
    }

    async fn feature_sample(&self, feature_id: &FeatureId) -> Result<PopulationSample, GatewayError> {
        self.record_call("feature_sample", None)?;
        self.samples
            .get(feature_id)
            .cloned()
            .ok_or_else(|| GatewayError::not_found(format!("feature {}", feature_id)))
    }

    async fn user_record(&self, user_id: &UserId) -> Result<UserRecord, GatewayError> {
        self.record_call("user_record", None)?;
        self.records
            .get(user_id)
            .cloned()
            .ok_or_else(|| GatewayError::not_found(format!("user {}", user_id)))
    }

    async fn predict(&self, user_id: &UserId, terms: LoanTerms) -> Result<RiskPrediction, GatewayError> {
        self.record_call("predict", Some(terms))?;
        let (negative, positive) = self
            .prediction
            .ok_or_else(|| GatewayError::not_found(format!("prediction for {}", user_id)))?;
        RiskPrediction::try_new(negative, positive)
            .map_err(|e| GatewayError::invalid_response(e.to_string()))
    }

    async fn explain(
        &self,
        user_id: &UserId,
        terms: LoanTerms,
    ) -> Result<PredictionExplanation, GatewayError> {
        self.record_call("explain", Some(terms))?;
        self.explanation
            .clone()
            .ok_or_else(|| GatewayError::not_found(format!("explanation for {}", user_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let gateway = MockScoringGateway::new();
        let err = gateway
            .user_record(&UserId::new("1").unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::NotFound(_)));
    }

    #[tokio::test]
    async fn failing_mock_fails_every_call() {
        let gateway = MockScoringGateway::new()
            .with_users(vec![UserId::new("1").unwrap()])
            .failing(GatewayError::unavailable("down"));
        assert_eq!(
            gateway.list_users().await.unwrap_err(),
            GatewayError::unavailable("down")
        );
        assert_eq!(gateway.call_count("list_users"), 1);
    }

    #[tokio::test]
    async fn invalid_prediction_is_rejected() {
        let gateway = MockScoringGateway::new().with_prediction(0.9, 0.9);
        let err = gateway
            .predict(&UserId::new("1").unwrap(), LoanTerms::new(None, None))
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn tracks_loan_terms() {
        let gateway = MockScoringGateway::new().with_prediction(0.6, 0.4);
        let terms = LoanTerms::new(Some(5.0), Some(1.0));
        gateway.predict(&UserId::new("1").unwrap(), terms).await.unwrap();
        assert_eq!(gateway.last_terms(), Some(terms));
    }
}
