//! GetUserSummaryHandler - Query handler for the sidebar profile table.

use std::sync::Arc;

use crate::domain::dashboard::UserSummary;
use crate::domain::foundation::UserId;
use crate::ports::ScoringGateway;

use super::DashboardError;

/// Query to summarise a user.
#[derive(Debug, Clone)]
pub struct GetUserSummaryQuery {
    pub user_id: UserId,
}

/// Handler for the user summary table.
pub struct GetUserSummaryHandler {
    gateway: Arc<dyn ScoringGateway>,
}

impl GetUserSummaryHandler {
    pub fn new(gateway: Arc<dyn ScoringGateway>) -> Self {
        Self { gateway }
    }

    pub async fn handle(&self, query: GetUserSummaryQuery) -> Result<UserSummary, DashboardError> {
        let record = self.gateway.user_record(&query.user_id).await?;
        Ok(UserSummary::from_record(&record)?)
    }
}
