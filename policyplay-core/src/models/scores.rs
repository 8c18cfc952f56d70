use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreStatistics {
    #[serde(default)]
    pub total_games: u32,
    #[serde(default)]
    pub completed_games: u32,
    #[serde(default)]
    pub average_score: f64,
    #[serde(default)]
    pub highest_score: i32,
    #[serde(default)]
    pub total_score: i32,
    #[serde(default)]
    pub correct_answers: u32,
    #[serde(default)]
    pub accuracy: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentGame {
    pub session_id: String,
    #[serde(default)]
    pub policy_id: String,
    #[serde(default)]
    pub policy_title: String,
    #[serde(default)]
    pub game_type: String,
    #[serde(default)]
    pub score: i32,
    #[serde(default)]
    pub correct: bool,
    #[serde(default)]
    pub completed_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserScores {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub user_email: String,
    #[serde(default)]
    pub statistics: ScoreStatistics,
    #[serde(default)]
    pub recent_games: Vec<RecentGame>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub user_email: String,
    #[serde(default)]
    pub completed_games: u32,
    #[serde(default)]
    pub average_score: f64,
    #[serde(default)]
    pub highest_score: i32,
    #[serde(default)]
    pub total_score: i32,
    #[serde(default)]
    pub correct_answers: u32,
    #[serde(default)]
    pub accuracy: f64,
    #[serde(default)]
    pub is_current_user: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Leaderboard {
    #[serde(default)]
    pub leaderboard: Vec<LeaderboardEntry>,
    #[serde(default)]
    pub current_user_rank: Option<u32>,
    #[serde(default)]
    pub total_participants: u32,
}
