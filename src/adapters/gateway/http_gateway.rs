//! HTTP Scoring Gateway - reqwest implementation of the ScoringGateway port.
//!
//! Talks JSON to the remote scoring API:
//!
//! | Operation        | Request                                 |
//! |------------------|-----------------------------------------|
//! | `list_users`     | `GET  /user/user_list`                  |
//! | `list_features`  | `GET  /data/feature_list`               |
//! | `feature_sample` | `GET  /data/feature_data/{feature_id}`  |
//! | `user_record`    | `GET  /data/user_data/{user_id}`        |
//! | `predict`        | `POST /model/predict/{user_id}`         |
//! | `explain`        | `POST /model/shap_values/{user_id}`     |
//!
//! The client timeout bounds every call; there are no retries.
//!
//! # Configuration
//!
//! ```ignore
//! let config = HttpGatewayConfig::new("https://scoring.example.com")
//!     .with_timeout(Duration::from_secs(10));
//!
//! let gateway = HttpScoringGateway::new(config)?;
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::time::Duration;

use crate::config::GatewayConfig;
use crate::domain::feature::{FeatureDescriptor, FeatureValue, PopulationSample, UserRecord};
use crate::domain::foundation::{FeatureId, UserId};
use crate::domain::scoring::{LoanTerms, PredictionExplanation, RiskPrediction};
use crate::ports::{GatewayError, ScoringGateway};

/// Configuration for the HTTP gateway client.
#[derive(Debug, Clone)]
pub struct HttpGatewayConfig {
    /// Base URL of the scoring API, without trailing slash.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl HttpGatewayConfig {
    /// Creates a new configuration with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl From<&GatewayConfig> for HttpGatewayConfig {
    fn from(config: &GatewayConfig) -> Self {
        Self::new(config.base_url()).with_timeout(config.timeout())
    }
}

/// reqwest-backed scoring gateway.
pub struct HttpScoringGateway {
    config: HttpGatewayConfig,
    base_url: Url,
    client: Client,
}

impl HttpScoringGateway {
    /// Creates a new gateway client with the given configuration.
    pub fn new(config: HttpGatewayConfig) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GatewayError::unavailable(format!("Failed to create HTTP client: {}", e)))?;

        let base_url = Url::parse(&config.base_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| {
                GatewayError::unavailable(format!("Invalid gateway base URL: {}", config.base_url))
            })?;

        Ok(Self {
            config,
            base_url,
            client,
        })
    }

    /// Appends path segments to the base URL. Each segment is percent-encoded,
    /// so ids containing `/`, `?` or `#` stay inside their own segment.
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn map_send_error(&self, e: reqwest::Error) -> GatewayError {
        if e.is_timeout() {
            GatewayError::Timeout {
                timeout_secs: self.config.timeout.as_secs(),
            }
        } else if e.is_connect() {
            GatewayError::unavailable(format!("Connection failed: {}", e))
        } else {
            GatewayError::unavailable(e.to_string())
        }
    }

    async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, GatewayError> {
        let url = self.url(segments);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;
        self.parse_response(&url, response).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<T, GatewayError> {
        let url = self.url(segments);
        tracing::debug!("POST {}", url);

        let response = self
            .client
            .post(url.clone())
            .json(body)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;
        self.parse_response(&url, response).await
    }

    /// Checks the status and decodes the JSON body.
    async fn parse_response<T: DeserializeOwned>(
        &self,
        url: &Url,
        response: Response,
    ) -> Result<T, GatewayError> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Gateway returned {} for {}", status, url);
            return Err(match status {
                StatusCode::NOT_FOUND => GatewayError::not_found(url.to_string()),
                _ => GatewayError::Status {
                    status: status.as_u16(),
                    body,
                },
            });
        }

        response.json::<T>().await.map_err(|e| {
            if e.is_timeout() {
                GatewayError::Timeout {
                    timeout_secs: self.config.timeout.as_secs(),
                }
            } else {
                GatewayError::invalid_response(format!("Failed to parse {}: {}", url, e))
            }
        })
    }
}

#[async_trait]
impl ScoringGateway for HttpScoringGateway {
    async fn list_users(&self) -> Result<Vec<UserId>, GatewayError> {
        let response: UserListResponse = self.get(&["user", "user_list"]).await?;
        Ok(response.user_id_list)
    }

    async fn list_features(&self) -> Result<Vec<FeatureDescriptor>, GatewayError> {
        let response: FeatureListResponse = self.get(&["data", "feature_list"]).await?;
        response.into_descriptors()
    }

    async fn feature_sample(&self, feature_id: &FeatureId) -> Result<PopulationSample, GatewayError> {
        let response: FeatureDataResponse = self
            .get(&["data", "feature_data", feature_id.as_str()])
            .await?;
        Ok(PopulationSample::new(
            response.negative_data,
            response.positive_data,
        ))
    }

    async fn user_record(&self, user_id: &UserId) -> Result<UserRecord, GatewayError> {
        let response: UserDataResponse = self.get(&["data", "user_data", user_id.as_str()]).await?;
        Ok(UserRecord::from_json_map(response.user_data))
    }

    async fn predict(&self, user_id: &UserId, terms: LoanTerms) -> Result<RiskPrediction, GatewayError> {
        let response: PredictResponse = self
            .post(&["model", "predict", user_id.as_str()], &ScoringRequest::from(terms))
            .await?;
        RiskPrediction::try_new(response.negative_pred, response.positive_pred)
            .map_err(|e| GatewayError::invalid_response(e.to_string()))
    }

    async fn explain(
        &self,
        user_id: &UserId,
        terms: LoanTerms,
    ) -> Result<PredictionExplanation, GatewayError> {
        let response: ShapResponse = self
            .post(&["model", "shap_values", user_id.as_str()], &ScoringRequest::from(terms))
            .await?;
        PredictionExplanation::try_new(
            response.explained_values,
            response.expected_value,
            UserRecord::from_json_map(response.user_data),
        )
        .map_err(|e| GatewayError::invalid_response(e.to_string()))
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Wire types
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Serialize)]
struct ScoringRequest {
    amount: Option<f64>,
    annuity: Option<f64>,
}

impl From<LoanTerms> for ScoringRequest {
    fn from(terms: LoanTerms) -> Self {
        Self {
            amount: terms.amount,
            annuity: terms.annuity,
        }
    }
}

#[derive(Debug, Deserialize)]
struct UserListResponse {
    user_id_list: Vec<UserId>,
}

#[derive(Debug, Deserialize)]
struct FeatureListResponse {
    feature_list: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct FeatureEntry {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(rename = "type")]
    dtype: String,
}

impl FeatureListResponse {
    fn into_descriptors(self) -> Result<Vec<FeatureDescriptor>, GatewayError> {
        self.feature_list
            .into_iter()
            .map(|(id, entry)| {
                let feature_id = FeatureId::new(id)
                    .map_err(|e| GatewayError::invalid_response(e.to_string()))?;
                let entry: FeatureEntry = serde_json::from_value(entry).map_err(|e| {
                    GatewayError::invalid_response(format!("feature {}: {}", feature_id, e))
                })?;
                Ok(FeatureDescriptor::new(
                    feature_id,
                    entry.name,
                    entry.description,
                    entry.dtype,
                ))
            })
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct FeatureDataResponse {
    negative_data: Vec<FeatureValue>,
    positive_data: Vec<FeatureValue>,
}

#[derive(Debug, Deserialize)]
struct UserDataResponse {
    user_data: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    negative_pred: f64,
    positive_pred: f64,
}

#[derive(Debug, Deserialize)]
struct ShapResponse {
    explained_values: Vec<f64>,
    expected_value: f64,
    user_data: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn config_trims_trailing_slash() {
        let config = HttpGatewayConfig::new("http://localhost:8000/");
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn config_from_app_config() {
        let app = GatewayConfig {
            base_url: "https://scoring.example.com/".to_string(),
            timeout_secs: 7,
            cache_enabled: true,
        };
        let config = HttpGatewayConfig::from(&app);
        assert_eq!(config.base_url, "https://scoring.example.com");
        assert_eq!(config.timeout, Duration::from_secs(7));
    }

    #[test]
    fn url_joins_segments() {
        let gateway = HttpScoringGateway::new(HttpGatewayConfig::new("http://gw")).unwrap();
        assert_eq!(
            gateway.url(&["data", "user_data", "42"]).as_str(),
            "http://gw/data/user_data/42"
        );

        let prefixed = HttpScoringGateway::new(HttpGatewayConfig::new("http://gw/api/")).unwrap();
        assert_eq!(prefixed.url(&["user", "user_list"]).path(), "/api/user/user_list");
    }

    #[test]
    fn url_keeps_hostile_ids_inside_one_segment() {
        let gateway = HttpScoringGateway::new(HttpGatewayConfig::new("http://gw")).unwrap();

        let url = gateway.url(&["data", "user_data", "../../model/predict/7"]);
        assert_eq!(url.path(), "/data/user_data/..%2F..%2Fmodel%2Fpredict%2F7");

        let url = gateway.url(&["data", "user_data", "7?x=1#frag"]);
        assert_eq!(url.path(), "/data/user_data/7%3Fx=1%23frag");
        assert_eq!(url.query(), None);
        assert_eq!(url.fragment(), None);
    }

    #[test]
    fn rejects_unparseable_base_url() {
        let result = HttpScoringGateway::new(HttpGatewayConfig::new("not a url"));
        assert!(matches!(result, Err(GatewayError::Unavailable(_))));
    }

    #[test]
    fn feature_list_maps_dtype_to_value_type() {
        let response: FeatureListResponse = serde_json::from_value(json!({
            "feature_list": {
                "0": {"name": "CODE_GENDER", "description": "Gender", "type": "object"},
                "1": {"name": "AMT_CREDIT", "description": "Credit", "type": "float64"}
            }
        }))
        .unwrap();

        let descriptors = response.into_descriptors().unwrap();
        assert_eq!(descriptors.len(), 2);
        assert_eq!(descriptors[0].value_type, crate::domain::feature::ValueType::Categorical);
        assert_eq!(descriptors[1].value_type, crate::domain::feature::ValueType::Numerical);
        assert_eq!(descriptors[1].dtype, "float64");
    }

    #[test]
    fn feature_list_rejects_entries_without_type() {
        let response: FeatureListResponse = serde_json::from_value(json!({
            "feature_list": {"0": {"name": "CODE_GENDER"}}
        }))
        .unwrap();
        assert!(matches!(
            response.into_descriptors(),
            Err(GatewayError::InvalidResponse(_))
        ));
    }

    #[test]
    fn feature_data_translates_sentinel() {
        let response: FeatureDataResponse = serde_json::from_value(json!({
            "negative_data": [1.5, "null"],
            "positive_data": ["null"]
        }))
        .unwrap();
        assert_eq!(response.negative_data[1], FeatureValue::Missing);
        assert_eq!(response.positive_data, vec![FeatureValue::Missing]);
    }

    #[test]
    fn scoring_request_serializes_terms() {
        let body = ScoringRequest::from(LoanTerms::new(Some(1000.0), None));
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"amount": 1000.0, "annuity": null})
        );
    }
}
