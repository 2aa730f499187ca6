//! Caching Scoring Gateway - memoising decorator over any ScoringGateway.
//!
//! The catalog, population samples and user records never change while the
//! process runs, so successful responses are kept for the lifetime of the
//! decorator. Explanations depend on caller-chosen loan terms; only the most
//! recent one per user is kept, which bounds the map by the gateway's user
//! population. Errors are never cached. Predictions always go to the inner
//! gateway.

use async_trait::async_trait;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::feature::{FeatureDescriptor, PopulationSample, UserRecord};
use crate::domain::foundation::{FeatureId, UserId};
use crate::domain::scoring::{LoanTerms, PredictionExplanation, RiskPrediction};
use crate::ports::{GatewayError, ScoringGateway};

#[derive(Default)]
struct Cache {
    users: RwLock<Option<Vec<UserId>>>,
    features: RwLock<Option<Vec<FeatureDescriptor>>>,
    samples: RwLock<HashMap<FeatureId, PopulationSample>>,
    records: RwLock<HashMap<UserId, UserRecord>>,
    explanations: RwLock<HashMap<UserId, (LoanTerms, PredictionExplanation)>>,
}

/// Memoising wrapper around another gateway.
pub struct CachedScoringGateway {
    inner: Arc<dyn ScoringGateway>,
    cache: Cache,
}

impl CachedScoringGateway {
    pub fn new(inner: Arc<dyn ScoringGateway>) -> Self {
        Self {
            inner,
            cache: Cache::default(),
        }
    }
}

async fn cached_value<T, F>(slot: &RwLock<Option<T>>, fetch: F) -> Result<T, GatewayError>
where
    T: Clone,
    F: std::future::Future<Output = Result<T, GatewayError>>,
{
    if let Some(value) = slot.read().await.as_ref() {
        return Ok(value.clone());
    }
    let value = fetch.await?;
    *slot.write().await = Some(value.clone());
    Ok(value)
}

async fn cached_entry<K, T, F>(
    map: &RwLock<HashMap<K, T>>,
    key: K,
    fetch: F,
) -> Result<T, GatewayError>
where
    K: Eq + Hash,
    T: Clone,
    F: std::future::Future<Output = Result<T, GatewayError>>,
{
    if let Some(value) = map.read().await.get(&key) {
        tracing::trace!("gateway cache hit");
        return Ok(value.clone());
    }
    let value = fetch.await?;
    map.write().await.insert(key, value.clone());
    Ok(value)
}

#[async_trait]
impl ScoringGateway for CachedScoringGateway {
    async fn list_users(&self) -> Result<Vec<UserId>, GatewayError> {
        cached_value(&self.cache.users, self.inner.list_users()).await
    }

    async fn list_features(&self) -> Result<Vec<FeatureDescriptor>, GatewayError> {
        cached_value(&self.cache.features, self.inner.list_features()).await
    }

    async fn feature_sample(&self, feature_id: &FeatureId) -> Result<PopulationSample, GatewayError> {
        cached_entry(
            &self.cache.samples,
            feature_id.clone(),
            self.inner.feature_sample(feature_id),
        )
        .await
    }

    async fn user_record(&self, user_id: &UserId) -> Result<UserRecord, GatewayError> {
        cached_entry(
            &self.cache.records,
            user_id.clone(),
            self.inner.user_record(user_id),
        )
        .await
    }

    async fn predict(&self, user_id: &UserId, terms: LoanTerms) -> Result<RiskPrediction, GatewayError> {
        self.inner.predict(user_id, terms).await
    }

    async fn explain(
        &self,
        user_id: &UserId,
        terms: LoanTerms,
    ) -> Result<PredictionExplanation, GatewayError> {
        if let Some((cached_terms, explanation)) = self.cache.explanations.read().await.get(user_id) {
            if *cached_terms == terms {
                tracing::trace!("gateway cache hit");
                return Ok(explanation.clone());
            }
        }
        let explanation = self.inner.explain(user_id, terms).await?;
        self.cache
            .explanations
            .write()
            .await
            .insert(user_id.clone(), (terms, explanation.clone()));
        Ok(explanation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::gateway::MockScoringGateway;
    use crate::domain::feature::FeatureValue;

    fn user() -> UserId {
        UserId::new("100002").unwrap()
    }

    #[tokio::test]
    async fn second_lookup_is_served_from_cache() {
        let mock = Arc::new(
            MockScoringGateway::new().with_record(user(), UserRecord::new().with("AMT_CREDIT", 1.0)),
        );
        let cached = CachedScoringGateway::new(mock.clone());

        let first = cached.user_record(&user()).await.unwrap();
        let second = cached.user_record(&user()).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(mock.call_count("user_record"), 1);
    }

    #[tokio::test]
    async fn errors_are_not_cached() {
        let mock = Arc::new(MockScoringGateway::new());
        let cached = CachedScoringGateway::new(mock.clone());

        assert!(cached.user_record(&user()).await.is_err());
        assert!(cached.user_record(&user()).await.is_err());
        assert_eq!(mock.call_count("user_record"), 2);
    }

    #[tokio::test]
    async fn predictions_always_reach_inner_gateway() {
        let mock = Arc::new(MockScoringGateway::new().with_prediction(0.7, 0.3));
        let cached = CachedScoringGateway::new(mock.clone());
        let terms = LoanTerms::new(Some(1.0), Some(1.0));

        cached.predict(&user(), terms).await.unwrap();
        cached.predict(&user(), terms).await.unwrap();
        assert_eq!(mock.call_count("predict"), 2);
    }

    #[tokio::test]
    async fn samples_are_keyed_by_feature() {
        let a = FeatureId::new("1").unwrap();
        let b = FeatureId::new("2").unwrap();
        let mock = Arc::new(
            MockScoringGateway::new()
                .with_sample(a.clone(), PopulationSample::new(vec![FeatureValue::Number(1.0)], vec![]))
                .with_sample(b.clone(), PopulationSample::new(vec![FeatureValue::Number(2.0)], vec![])),
        );
        let cached = CachedScoringGateway::new(mock.clone());

        cached.feature_sample(&a).await.unwrap();
        cached.feature_sample(&b).await.unwrap();
        cached.feature_sample(&a).await.unwrap();
        assert_eq!(mock.call_count("feature_sample"), 2);
    }

    #[tokio::test]
    async fn explanations_keep_one_entry_per_user() {
        let mock = Arc::new(MockScoringGateway::new().with_explanation(PredictionExplanation {
            explained_values: vec![0.1],
            expected_value: 0.2,
            user_data: UserRecord::new().with("AMT_CREDIT", 1.0),
        }));
        let cached = CachedScoringGateway::new(mock.clone());

        for amount in 0..1_000 {
            let terms = LoanTerms::new(Some(f64::from(amount)), Some(10.0));
            cached.explain(&user(), terms).await.unwrap();
        }
        assert_eq!(cached.cache.explanations.read().await.len(), 1);
        assert_eq!(mock.call_count("explain"), 1_000);

        let latest = LoanTerms::new(Some(999.0), Some(10.0));
        cached.explain(&user(), latest).await.unwrap();
        assert_eq!(mock.call_count("explain"), 1_000);

        let other = UserId::new("100003").unwrap();
        cached.explain(&other, latest).await.unwrap();
        assert_eq!(cached.cache.explanations.read().await.len(), 2);
    }
}
