use crate::level::Level;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TapQuestion {
    pub question: String,
    pub correct: String,
    #[serde(default)]
    pub wrong_options: Vec<String>,
}

impl TapQuestion {
    /// Whether the question can be played at all.
    #[must_use]
    pub fn is_playable(&self) -> bool {
        !self.question.trim().is_empty() && !self.correct.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TapGameSet {
    pub game_set_id: String,
    #[serde(default)]
    pub policy_id: String,
    #[serde(default)]
    pub level: Level,
    #[serde(default)]
    pub questions: Vec<TapQuestion>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartTapRequest {
    pub game_set_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TapAttempt {
    pub attempt_id: String,
    pub game_set_id: String,
    #[serde(default)]
    pub level: Level,
    #[serde(default)]
    pub questions: Vec<TapQuestion>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TapSubmission {
    pub attempt_id: String,
    pub question_index: usize,
    pub selected_option: String,
    /// Seconds since the game started.
    pub time_taken: f64,
    pub was_missed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TapSubmitResponse {
    pub correct: bool,
    pub points: i32,
    pub new_score: i32,
    #[serde(default)]
    pub correct_answer: String,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinishTapRequest {
    pub attempt_id: String,
    pub final_time_taken: u64,
}

/// Final tally shown on the results page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TapResults {
    /// Filled in by the client at hand-off; the finish response leaves it out.
    #[serde(default)]
    pub attempt_id: String,
    #[serde(default)]
    pub final_score: i32,
    #[serde(default)]
    pub correct_answers: u32,
    #[serde(default)]
    pub wrong_answers: u32,
    #[serde(default)]
    pub missed_answers: u32,
    #[serde(default)]
    pub time_taken: u64,
}

impl TapResults {
    #[must_use]
    pub const fn answered(&self) -> u32 {
        self.correct_answers + self.wrong_answers + self.missed_answers
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TapLeaderboardEntry {
    pub rank: u32,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    pub score: i32,
    #[serde(default)]
    pub level: Level,
    #[serde(default)]
    pub correct_answers: u32,
    #[serde(default)]
    pub wrong_answers: u32,
    #[serde(default)]
    pub missed_answers: u32,
    #[serde(default)]
    pub time_taken: u64,
    #[serde(default)]
    pub completed_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TapLeaderboard {
    #[serde(default)]
    pub leaderboard: Vec<TapLeaderboardEntry>,
    #[serde(default)]
    pub policy_id: Option<String>,
    #[serde(default)]
    pub level: Option<Level>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn results_tolerate_missing_fields() {
        let results: TapResults = serde_json::from_str(r#"{"final_score":17}"#).unwrap();
        assert_eq!(results.final_score, 17);
        assert_eq!(results.answered(), 0);
    }

    #[test]
    fn unplayable_questions_are_detected() {
        let q = TapQuestion {
            question: "What is PII?".into(),
            correct: " ".into(),
            wrong_options: vec![],
        };
        assert!(!q.is_playable());
    }
}
