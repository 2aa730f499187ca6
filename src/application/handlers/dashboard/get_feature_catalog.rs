//! GetFeatureCatalogHandler - Query handler for the selectable features.

use std::sync::Arc;

use crate::domain::feature::FeatureCatalog;
use crate::ports::ScoringGateway;

use super::DashboardError;

/// Handler for building the feature catalog offered to the analyst.
///
/// Identifier and label columns are filtered out by the catalog itself.
pub struct GetFeatureCatalogHandler {
    gateway: Arc<dyn ScoringGateway>,
}

impl GetFeatureCatalogHandler {
    pub fn new(gateway: Arc<dyn ScoringGateway>) -> Self {
        Self { gateway }
    }

    pub async fn handle(&self) -> Result<FeatureCatalog, DashboardError> {
        let descriptors = self.gateway.list_features().await?;
        Ok(FeatureCatalog::from_descriptors(descriptors))
    }
}
