use super::ApiClient;
use policyplay_core::endpoint::paths;
use policyplay_core::{
    ApiError, EscapeAttempt, EscapeLeaderboard, EscapeResults, EscapeRoomBundle,
    FinishEscapeRequest, GeneratedEscapeRoom, Level, RoomResult, RoomSubmission,
    StartEscapeRequest,
};

impl ApiClient {
    /// Generate the five rooms for `level` and open an attempt on them.
    ///
    /// # Errors
    ///
    /// Propagates the first failing call.
    pub async fn begin_escape(
        &self,
        policy_id: &str,
        level: Level,
    ) -> Result<EscapeAttempt, ApiError> {
        let generated: GeneratedEscapeRoom = self
            .post_empty(&paths::escape_generate(policy_id, level))
            .await?;
        self.post(
            paths::ESCAPE_START,
            &StartEscapeRequest {
                escape_room_id: generated.escape_room_id,
            },
        )
        .await
    }

    /// # Errors
    ///
    /// Propagates transport and backend failures.
    pub async fn escape_rooms(&self, attempt_id: &str) -> Result<EscapeRoomBundle, ApiError> {
        self.get(&paths::escape_rooms(attempt_id)).await
    }

    /// # Errors
    ///
    /// Propagates transport and backend failures.
    pub async fn escape_submit(&self, submission: &RoomSubmission) -> Result<RoomResult, ApiError> {
        self.post(&paths::escape_submit(&submission.attempt_id), submission)
            .await
    }

    /// Close the attempt. The elapsed time travels in the query and the body.
    ///
    /// # Errors
    ///
    /// Propagates transport and backend failures.
    pub async fn escape_finish(
        &self,
        attempt_id: &str,
        request: &FinishEscapeRequest,
    ) -> Result<EscapeResults, ApiError> {
        self.post(&paths::escape_finish(attempt_id, request.time_taken), request)
            .await
    }

    /// # Errors
    ///
    /// Propagates transport and backend failures.
    pub async fn escape_leaderboard(
        &self,
        level: Option<Level>,
    ) -> Result<EscapeLeaderboard, ApiError> {
        self.get(&paths::escape_leaderboard(level)).await
    }
}
