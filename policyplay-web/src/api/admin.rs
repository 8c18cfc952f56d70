use super::ApiClient;
use policyplay_core::endpoint::paths;
use policyplay_core::{
    AnalyticsSummary, ApiError, PolicyAnalytics, PolicyDeleted, PolicySummary, UserScoreTable,
};

impl ApiClient {
    /// # Errors
    ///
    /// Propagates transport and backend failures.
    pub async fn admin_policies(&self) -> Result<Vec<PolicySummary>, ApiError> {
        self.get(paths::ADMIN_POLICIES).await
    }

    /// # Errors
    ///
    /// Propagates transport and backend failures.
    pub async fn delete_policy(&self, policy_id: &str) -> Result<PolicyDeleted, ApiError> {
        log::warn!("deleting policy {policy_id}");
        self.delete(&paths::admin_policy(policy_id)).await
    }

    /// # Errors
    ///
    /// Propagates transport and backend failures.
    pub async fn analytics_summary(&self) -> Result<AnalyticsSummary, ApiError> {
        self.get(paths::ADMIN_ANALYTICS_SUMMARY).await
    }

    /// # Errors
    ///
    /// Propagates transport and backend failures.
    pub async fn policy_analytics(&self, policy_id: &str) -> Result<PolicyAnalytics, ApiError> {
        self.get(&paths::policy_analytics(policy_id)).await
    }

    /// # Errors
    ///
    /// Propagates transport and backend failures.
    pub async fn user_score_table(&self) -> Result<UserScoreTable, ApiError> {
        self.get(paths::ADMIN_USER_SCORES).await
    }
}
