use super::ApiClient;
use gloo::net::http::Method;
use policyplay_core::endpoint::paths;
use policyplay_core::{
    ApiError, GameListing, GameResult, GameSession, GameSubmission, GeneratedBatch, Leaderboard,
    UserScores,
};

/// Games generated per batch from the games hub.
pub const BATCH_SIZE: u32 = 5;

impl ApiClient {
    /// # Errors
    ///
    /// Propagates transport and backend failures.
    pub async fn start_game(&self, session_id: &str) -> Result<GameSession, ApiError> {
        self.get(&paths::game_start(session_id)).await
    }

    /// Submit a scenario or violation answer after confirming the backend is up.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] when the health check fails.
    pub async fn submit_game(&self, submission: &GameSubmission) -> Result<GameResult, ApiError> {
        self.health(Method::POST).await?;
        self.post(paths::GAME_SUBMIT, submission).await
    }

    /// # Errors
    ///
    /// Propagates transport and backend failures.
    pub async fn policy_games(&self, policy_id: &str) -> Result<Vec<GameListing>, ApiError> {
        self.get(&paths::policy_games(policy_id)).await
    }

    /// # Errors
    ///
    /// Propagates transport and backend failures.
    pub async fn generate_batch(&self, policy_id: &str) -> Result<GeneratedBatch, ApiError> {
        self.post_empty(&paths::generate_batch(policy_id, BATCH_SIZE))
            .await
    }

    /// # Errors
    ///
    /// Propagates transport and backend failures.
    pub async fn user_scores(&self) -> Result<UserScores, ApiError> {
        self.get(paths::USER_SCORES).await
    }

    /// # Errors
    ///
    /// Propagates transport and backend failures.
    pub async fn leaderboard(&self) -> Result<Leaderboard, ApiError> {
        self.get(paths::LEADERBOARD).await
    }
}
