use crate::level::Level;
use serde::{Deserialize, Serialize};

/// Room 1: match a term to its definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefinitionPuzzle {
    #[serde(default)]
    pub term: String,
    #[serde(default)]
    pub definition: String,
    #[serde(default)]
    pub wrong_options: Vec<String>,
}

/// Room 2: pick the exception that applies to a rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExceptionPuzzle {
    #[serde(default)]
    pub rule: String,
    #[serde(default)]
    pub correct_exception: String,
    #[serde(default)]
    pub wrong_exceptions: Vec<String>,
    #[serde(default)]
    pub scenario: String,
}

/// Room 3: pick the rule that governs a scenario.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulePuzzle {
    #[serde(default)]
    pub scenario: String,
    #[serde(default)]
    pub correct_rule: String,
    #[serde(default)]
    pub wrong_rules: Vec<String>,
}

/// Room 4: write the fix for a violation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepairPuzzle {
    #[serde(default)]
    pub violation: String,
    #[serde(default)]
    pub fix: String,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub scenario: String,
}

/// Room 5: one question of each earlier kind around a shared scenario.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasterPuzzle {
    #[serde(default)]
    pub scenario: String,
    #[serde(default)]
    pub definition_question: DefinitionPuzzle,
    #[serde(default)]
    pub rule_question: RulePuzzle,
    #[serde(default)]
    pub exception_question: ExceptionPuzzle,
    #[serde(default)]
    pub violation_question: RepairPuzzle,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscapeRooms {
    #[serde(default)]
    pub room1: Vec<DefinitionPuzzle>,
    #[serde(default)]
    pub room2: Vec<ExceptionPuzzle>,
    #[serde(default)]
    pub room3: Vec<RulePuzzle>,
    #[serde(default)]
    pub room4: Vec<RepairPuzzle>,
    #[serde(default)]
    pub room5: Option<MasterPuzzle>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomState {
    #[default]
    Pending,
    Done,
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomStatus {
    #[serde(default)]
    pub room1: RoomState,
    #[serde(default)]
    pub room2: RoomState,
    #[serde(default)]
    pub room3: RoomState,
    #[serde(default)]
    pub room4: RoomState,
    #[serde(default)]
    pub room5: RoomState,
}

impl RoomStatus {
    #[must_use]
    pub const fn get(&self, room: u8) -> RoomState {
        match room {
            1 => self.room1,
            2 => self.room2,
            3 => self.room3,
            4 => self.room4,
            _ => self.room5,
        }
    }

    pub const fn set(&mut self, room: u8, state: RoomState) {
        match room {
            1 => self.room1 = state,
            2 => self.room2 = state,
            3 => self.room3 = state,
            4 => self.room4 = state,
            _ => self.room5 = state,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedEscapeRoom {
    pub escape_room_id: String,
    #[serde(default)]
    pub policy_id: String,
    #[serde(default)]
    pub level: Level,
    #[serde(default)]
    pub rooms: EscapeRooms,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartEscapeRequest {
    pub escape_room_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscapeAttempt {
    pub attempt_id: String,
    #[serde(default)]
    pub escape_room_id: String,
    #[serde(default)]
    pub policy_id: String,
    #[serde(default)]
    pub level: Level,
    #[serde(default)]
    pub rooms: EscapeRooms,
}

/// Bundle returned by `GET /escape/rooms/{attempt}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscapeRoomBundle {
    #[serde(default)]
    pub rooms: EscapeRooms,
    #[serde(default)]
    pub score: i32,
    #[serde(default)]
    pub room_status: RoomStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSubmission {
    pub attempt_id: String,
    pub room_number: u8,
    pub answer: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomResult {
    pub correct: bool,
    #[serde(default)]
    pub points_earned: i32,
    #[serde(default)]
    pub new_score: i32,
    #[serde(default)]
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinishEscapeRequest {
    pub time_taken: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscapeResults {
    #[serde(default)]
    pub attempt_id: String,
    #[serde(default)]
    pub final_score: i32,
    #[serde(default)]
    pub time_taken: u64,
    #[serde(default)]
    pub rooms_completed: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscapeLeaderboardEntry {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub user_email: String,
    #[serde(default)]
    pub policy_id: String,
    #[serde(default)]
    pub level: Level,
    pub score: i32,
    #[serde(default)]
    pub time_taken: u64,
    #[serde(default)]
    pub rooms_completed: u32,
    #[serde(default)]
    pub completed_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscapeLeaderboard {
    #[serde(default)]
    pub leaderboard: Vec<EscapeLeaderboardEntry>,
    #[serde(default)]
    pub level: Option<Level>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_room_bundle_with_dict_room_five() {
        let json = r#"{
            "rooms": {
                "room1": [{"term":"PII","definition":"Personal data","wrong_options":["A","B"]}],
                "room2": [],
                "room5": {"scenario":"S","definition_question":{"term":"T","definition":"D"},
                          "rule_question":{"correct_rule":"R"},
                          "exception_question":{"correct_exception":"E"},
                          "violation_question":{"fix":"F"}}
            },
            "score": 15,
            "room_status": {"room1":"done","room2":"failed"}
        }"#;
        let bundle: EscapeRoomBundle = serde_json::from_str(json).unwrap();
        assert_eq!(bundle.rooms.room1[0].term, "PII");
        assert!(bundle.rooms.room3.is_empty());
        let master = bundle.rooms.room5.unwrap();
        assert_eq!(master.violation_question.fix, "F");
        assert_eq!(bundle.room_status.get(1), RoomState::Done);
        assert_eq!(bundle.room_status.get(2), RoomState::Failed);
        assert_eq!(bundle.room_status.get(5), RoomState::Pending);
    }
}
