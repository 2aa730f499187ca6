//! ListUsersHandler - Query handler for the selectable user identifiers.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::ports::ScoringGateway;

use super::DashboardError;

/// Handler for listing users known to the gateway.
pub struct ListUsersHandler {
    gateway: Arc<dyn ScoringGateway>,
}

impl ListUsersHandler {
    pub fn new(gateway: Arc<dyn ScoringGateway>) -> Self {
        Self { gateway }
    }

    pub async fn handle(&self) -> Result<Vec<UserId>, DashboardError> {
        Ok(self.gateway.list_users().await?)
    }
}
