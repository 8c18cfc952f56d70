use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameType {
    Scenario,
    Violation,
}

impl GameType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scenario => "scenario",
            Self::Violation => "violation",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub scenario_text: String,
    #[serde(default)]
    pub options: Vec<String>,
    pub correct_answer: usize,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub policy_rule_used: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViolationScenario {
    pub scenario_text: String,
    #[serde(default)]
    pub violation_text: String,
    #[serde(default)]
    pub violation_start: usize,
    #[serde(default)]
    pub violation_end: usize,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub policy_rule_violated: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    pub session_id: String,
    pub policy_id: String,
    pub game_type: GameType,
    #[serde(default)]
    pub scenario: Option<Scenario>,
    #[serde(default)]
    pub violation_scenario: Option<ViolationScenario>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Character span inside a violation scenario text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViolationRange {
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSubmission {
    pub session_id: String,
    pub answer: Option<usize>,
    pub violation_range: Option<ViolationRange>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub session_id: String,
    pub correct: bool,
    pub score: i32,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub policy_rule: String,
    #[serde(default)]
    pub correct_answer: Option<String>,
}

/// Row in a per-policy or per-user game listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameListing {
    pub session_id: String,
    #[serde(default)]
    pub policy_id: String,
    pub game_type: GameType,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub score: Option<i32>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedBatch {
    pub policy_id: String,
    #[serde(default)]
    pub total_games: u32,
    #[serde(default)]
    pub games: Vec<GameListing>,
}
