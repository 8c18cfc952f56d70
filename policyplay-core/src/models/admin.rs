use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleViolations {
    pub rule: String,
    #[serde(default)]
    pub violations: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusingSection {
    pub section: String,
    #[serde(default)]
    pub low_scores: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfusingPolicy {
    #[serde(default)]
    pub policy_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub confusion_rate: f64,
    #[serde(default)]
    pub low_scores: u32,
    #[serde(default)]
    pub total_attempts: u32,
    #[serde(default)]
    pub average_score: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    #[serde(default)]
    pub total_users: u32,
    #[serde(default)]
    pub total_policies: u32,
    #[serde(default)]
    pub total_game_plays: u32,
    #[serde(default)]
    pub completion_rate: f64,
    #[serde(default)]
    pub average_score: f64,
    #[serde(default)]
    pub most_violated_rules: Vec<RuleViolations>,
    #[serde(default)]
    pub most_confusing_policy: Option<ConfusingPolicy>,
    #[serde(default)]
    pub most_confusing_sections: Vec<ConfusingSection>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyAnalytics {
    #[serde(default)]
    pub policy_id: String,
    #[serde(default)]
    pub policy_title: String,
    #[serde(default)]
    pub total_plays: u32,
    #[serde(default)]
    pub completed_plays: u32,
    #[serde(default)]
    pub average_score: f64,
    #[serde(default)]
    pub most_confusing_sections: Vec<ConfusingSection>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserScoreRow {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub user_email: String,
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
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserScoreTable {
    #[serde(default)]
    pub total_users: u32,
    #[serde(default)]
    pub users: Vec<UserScoreRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_without_confusing_policy_decodes() {
        let json = r#"{"total_users":4,"total_policies":2,"total_game_plays":9,
            "completion_rate":66.67,"average_score":42.5,
            "most_violated_rules":[{"rule":"R1","violations":3}],
            "most_confusing_policy":null,"most_confusing_sections":[]}"#;
        let summary: AnalyticsSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.total_users, 4);
        assert!(summary.most_confusing_policy.is_none());
        assert_eq!(summary.most_violated_rules[0].violations, 3);
    }
}
