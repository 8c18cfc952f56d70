use super::ApiClient;
use policyplay_core::endpoint::paths;
use policyplay_core::{
    ApiError, FinishTapRequest, Level, StartTapRequest, TapAttempt, TapGameSet, TapLeaderboard,
    TapResults, TapSubmission, TapSubmitResponse,
};

impl ApiClient {
    /// Generate a question set for `level`, then open an attempt on it.
    ///
    /// # Errors
    ///
    /// Propagates the first failing call.
    pub async fn begin_tap(
        &self,
        policy_id: &str,
        level: Level,
    ) -> Result<(TapGameSet, TapAttempt), ApiError> {
        let game_set: TapGameSet = self
            .post_empty(&paths::tap_generate(policy_id, level))
            .await?;
        let attempt: TapAttempt = self
            .post(
                paths::TAP_START,
                &StartTapRequest {
                    game_set_id: game_set.game_set_id.clone(),
                },
            )
            .await?;
        log::info!(
            "tap attempt {} opened on set {} ({level})",
            attempt.attempt_id,
            game_set.game_set_id
        );
        Ok((game_set, attempt))
    }

    /// # Errors
    ///
    /// Propagates transport and backend failures.
    pub async fn tap_game_set(&self, game_set_id: &str) -> Result<TapGameSet, ApiError> {
        self.get(&paths::tap_game_set(game_set_id)).await
    }

    /// # Errors
    ///
    /// Propagates transport and backend failures.
    pub async fn tap_submit(
        &self,
        submission: &TapSubmission,
    ) -> Result<TapSubmitResponse, ApiError> {
        self.post(paths::TAP_SUBMIT, submission).await
    }

    /// # Errors
    ///
    /// Propagates transport and backend failures.
    pub async fn tap_finish(&self, request: &FinishTapRequest) -> Result<TapResults, ApiError> {
        self.post(paths::TAP_FINISH, request).await
    }

    /// # Errors
    ///
    /// Propagates transport and backend failures.
    pub async fn tap_leaderboard(
        &self,
        policy_id: Option<&str>,
        level: Option<Level>,
    ) -> Result<TapLeaderboard, ApiError> {
        self.get(&paths::tap_leaderboard(policy_id, level)).await
    }
}
