//! AnalyzeFeatureHandler - Query handler for the "User analysis" panel.
//!
//! Resolves the feature in the catalog, fetches the population sample and the
//! user's record concurrently, then builds the delta and chart together.

use std::sync::Arc;

use crate::domain::dashboard::FeatureAnalysis;
use crate::domain::feature::FeatureCatalog;
use crate::domain::foundation::{FeatureId, UserId};
use crate::ports::ScoringGateway;

use super::DashboardError;

/// Query to compare one user against the population on one feature.
#[derive(Debug, Clone)]
pub struct AnalyzeFeatureQuery {
    pub user_id: UserId,
    pub feature_id: FeatureId,
}

pub struct AnalyzeFeatureHandler {
    gateway: Arc<dyn ScoringGateway>,
}

impl AnalyzeFeatureHandler {
    pub fn new(gateway: Arc<dyn ScoringGateway>) -> Self {
        Self { gateway }
    }

    pub async fn handle(&self, query: AnalyzeFeatureQuery) -> Result<FeatureAnalysis, DashboardError> {
        let catalog = FeatureCatalog::from_descriptors(self.gateway.list_features().await?);
        let descriptor = catalog
            .get(&query.feature_id)
            .ok_or_else(|| DashboardError::FeatureNotFound(query.feature_id.clone()))?;

        let (sample, record) = tokio::try_join!(
            self.gateway.feature_sample(&query.feature_id),
            self.gateway.user_record(&query.user_id),
        )?;

        let analysis = FeatureAnalysis::build(descriptor, record.get(&descriptor.name), &sample)
            .map_err(|e| {
                tracing::warn!(
                    user_id = %query.user_id,
                    feature_id = %query.feature_id,
                    error = %e,
                    "Feature analysis rejected malformed data"
                );
                e
            })?;

        Ok(analysis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::gateway::MockScoringGateway;
    use crate::domain::dashboard::Emphasis;
    use crate::domain::feature::{FeatureDescriptor, FeatureValue, PopulationSample, UserRecord};

    fn user() -> UserId {
        UserId::new("100002").unwrap()
    }

    fn fid(id: &str) -> FeatureId {
        FeatureId::new(id).unwrap()
    }

    fn gateway() -> MockScoringGateway {
        let numeric = PopulationSample::new(
            vec![FeatureValue::Number(10.0), FeatureValue::Number(20.0)],
            vec![FeatureValue::Number(30.0)],
        );
        let categorical = PopulationSample::new(
            vec![
                FeatureValue::from("A"),
                FeatureValue::from("A"),
                FeatureValue::from("B"),
                FeatureValue::Missing,
            ],
            vec![FeatureValue::from("A"), FeatureValue::from("C")],
        );
        MockScoringGateway::new()
            .with_features(vec![
                FeatureDescriptor::new(fid("0"), "SK_ID_CURR", "", "int64"),
                FeatureDescriptor::new(fid("1"), "AMT_CREDIT", "Credit amount", "float64"),
                FeatureDescriptor::new(fid("2"), "NAME_CONTRACT_TYPE", "Contract type", "object"),
            ])
            .with_sample(fid("1"), numeric)
            .with_sample(fid("2"), categorical)
            .with_record(
                user(),
                UserRecord::new()
                    .with("AMT_CREDIT", 25.0)
                    .with("NAME_CONTRACT_TYPE", FeatureValue::Missing),
            )
    }

    #[tokio::test]
    async fn test_numerical_feature_analysis() {
        let handler = AnalyzeFeatureHandler::new(Arc::new(gateway()));

        let analysis = handler
            .handle(AnalyzeFeatureQuery { user_id: user(), feature_id: fid("1") })
            .await
            .unwrap();

        assert_eq!(analysis.user_value, "25");
        assert_eq!(analysis.delta.display_text.as_deref(), Some("+25%"));
        assert_eq!(analysis.delta.emphasis, Emphasis::Positive);
        assert_eq!(analysis.chart.user_marker_count(), 1);
    }

    #[tokio::test]
    async fn test_missing_user_value_suppresses_delta() {
        let handler = AnalyzeFeatureHandler::new(Arc::new(gateway()));

        let analysis = handler
            .handle(AnalyzeFeatureQuery { user_id: user(), feature_id: fid("2") })
            .await
            .unwrap();

        assert_eq!(analysis.user_value, "N/A");
        assert!(analysis.delta.is_suppressed());
    }

    #[tokio::test]
    async fn test_hidden_or_unknown_feature_is_not_found() {
        let handler = AnalyzeFeatureHandler::new(Arc::new(gateway()));

        for id in ["0", "99"] {
            let result = handler
                .handle(AnalyzeFeatureQuery { user_id: user(), feature_id: fid(id) })
                .await;
            assert!(matches!(result, Err(DashboardError::FeatureNotFound(_))));
        }
    }

    #[tokio::test]
    async fn test_malformed_sample_is_data_integrity_error() {
        let mock = gateway().with_sample(
            fid("1"),
            PopulationSample::new(vec![FeatureValue::from("oops")], vec![]),
        );
        let handler = AnalyzeFeatureHandler::new(Arc::new(mock));

        let result = handler
            .handle(AnalyzeFeatureQuery { user_id: user(), feature_id: fid("1") })
            .await;

        assert!(matches!(result, Err(DashboardError::DataIntegrity(_))));
    }
}
