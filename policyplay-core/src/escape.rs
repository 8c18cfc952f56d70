//! Five-room escape flow: one answer per room, submitted and confirmed in turn.

use crate::models::{
    EscapeRoomBundle, EscapeRooms, FinishEscapeRequest, RoomResult, RoomState, RoomStatus,
    RoomSubmission,
};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use serde_json::{Map, Value};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EscapeError {
    #[error("Please select an answer before submitting")]
    MissingAnswer,
    #[error("An answer for this room is already being checked")]
    AlreadySubmitting,
    #[error("This room has already been answered")]
    AlreadyAnswered,
    #[error("Submit an answer before moving on")]
    NotAnswered,
    #[error("Puzzle data is not available for this room")]
    PuzzleUnavailable,
    #[error("This escape room is already finished")]
    Finished,
    #[error("Room {0} does not exist")]
    NoSuchRoom(u8),
}

/// A room index in `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoomNumber(u8);

impl RoomNumber {
    pub const FIRST: Self = Self(1);
    pub const LAST: Self = Self(5);

    /// # Errors
    ///
    /// Returns [`EscapeError::NoSuchRoom`] outside `1..=5`.
    pub const fn new(room: u8) -> Result<Self, EscapeError> {
        if room >= Self::FIRST.0 && room <= Self::LAST.0 {
            Ok(Self(room))
        } else {
            Err(EscapeError::NoSuchRoom(room))
        }
    }

    /// Rooms in play order.
    pub fn all() -> impl Iterator<Item = Self> {
        (Self::FIRST.0..=Self::LAST.0).map(Self)
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn is_last(self) -> bool {
        self.0 == Self::LAST.0
    }

    #[must_use]
    pub const fn next(self) -> Option<Self> {
        if self.is_last() {
            None
        } else {
            Some(Self(self.0 + 1))
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self.0 {
            1 => "Room 1: Definitions Chamber",
            2 => "Room 2: Exception Maze",
            3 => "Room 3: Rule Vault",
            4 => "Room 4: Violation Repair Workshop",
            _ => "Room 5: Final Compliance Master Lock",
        }
    }

    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self.0 {
            1 => "🏛️",
            2 => "🌀",
            3 => "🔐",
            4 => "🔧",
            _ => "🔓",
        }
    }
}

impl fmt::Display for RoomNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One of the three choice questions inside the final room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MasterPart {
    Definition,
    Rule,
    Exception,
}

/// The player's in-progress answer for the current room.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RoomAnswer {
    #[default]
    Empty,
    /// Rooms 1 to 3.
    Selection(String),
    /// Room 4.
    Fix(String),
    /// Room 5.
    Master {
        definition: Option<String>,
        rule: Option<String>,
        exception: Option<String>,
        violation_fix: String,
    },
}

impl RoomAnswer {
    fn blank_master() -> Self {
        Self::Master {
            definition: None,
            rule: None,
            exception: None,
            violation_fix: String::new(),
        }
    }

    fn filled(value: Option<&String>) -> Option<&str> {
        value.map(String::as_str).filter(|v| !v.trim().is_empty())
    }

    /// Build the backend answer map for `room`, without `time_taken`.
    fn to_map(&self, room: RoomNumber) -> Result<Map<String, Value>, EscapeError> {
        let mut map = Map::new();
        let mut put = |key: &str, value: &str| {
            map.insert(key.to_string(), Value::String(value.to_string()));
        };
        match (room.get(), self) {
            (1, Self::Selection(v)) if !v.trim().is_empty() => put("selected_definition", v),
            (2, Self::Selection(v)) if !v.trim().is_empty() => put("selected_exception", v),
            (3, Self::Selection(v)) if !v.trim().is_empty() => put("selected_rule", v),
            (4, Self::Fix(v)) if !v.trim().is_empty() => put("fix", v),
            (
                5,
                Self::Master {
                    definition,
                    rule,
                    exception,
                    violation_fix,
                },
            ) => {
                let (Some(d), Some(r), Some(e)) = (
                    Self::filled(definition.as_ref()),
                    Self::filled(rule.as_ref()),
                    Self::filled(exception.as_ref()),
                ) else {
                    return Err(EscapeError::MissingAnswer);
                };
                if violation_fix.trim().is_empty() {
                    return Err(EscapeError::MissingAnswer);
                }
                put("definition_answer", d);
                put("rule_answer", r);
                put("exception_answer", e);
                put("violation_fix", violation_fix);
            }
            _ => return Err(EscapeError::MissingAnswer),
        }
        Ok(map)
    }
}

/// What to render for a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomView {
    Unavailable,
    Definition {
        term: String,
        options: Vec<String>,
    },
    Exception {
        rule: String,
        scenario: String,
        options: Vec<String>,
    },
    Rule {
        scenario: String,
        options: Vec<String>,
    },
    Repair {
        scenario: String,
        violation: String,
    },
    Master {
        scenario: String,
        term: String,
        definition_options: Vec<String>,
        rule_options: Vec<String>,
        exception_rule: String,
        exception_options: Vec<String>,
    },
}

/// Where the player goes after confirming a scored room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextStep {
    Next(RoomNumber),
    /// All rooms done; `time_taken` is whole seconds since the flow began.
    Finish { time_taken: u64 },
}

impl NextStep {
    #[must_use]
    pub const fn finish_request(self) -> Option<FinishEscapeRequest> {
        match self {
            Self::Finish { time_taken } => Some(FinishEscapeRequest { time_taken }),
            Self::Next(_) => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct EscapeFlow {
    attempt_id: String,
    rooms: EscapeRooms,
    room_status: RoomStatus,
    score: i32,
    room: RoomNumber,
    answer: RoomAnswer,
    submitting: bool,
    result: Option<RoomResult>,
    seed: u64,
    started_at_ms: u64,
    room_started_at_ms: u64,
    finished: bool,
}

impl EscapeFlow {
    #[must_use]
    pub fn new(attempt_id: impl Into<String>, bundle: EscapeRoomBundle, seed: u64, now_ms: u64) -> Self {
        let mut flow = Self {
            attempt_id: attempt_id.into(),
            rooms: bundle.rooms,
            room_status: bundle.room_status,
            score: bundle.score,
            room: RoomNumber::FIRST,
            answer: RoomAnswer::Empty,
            submitting: false,
            result: None,
            seed,
            started_at_ms: now_ms,
            room_started_at_ms: now_ms,
            finished: false,
        };
        flow.reset_answer();
        flow
    }

    /// Continue from `room` instead of the first room.
    #[must_use]
    pub fn resume_at(mut self, room: RoomNumber) -> Self {
        self.room = room;
        self.reset_answer();
        self
    }

    #[must_use]
    pub fn attempt_id(&self) -> &str {
        &self.attempt_id
    }

    #[must_use]
    pub const fn room(&self) -> RoomNumber {
        self.room
    }

    #[must_use]
    pub const fn score(&self) -> i32 {
        self.score
    }

    #[must_use]
    pub const fn room_status(&self) -> &RoomStatus {
        &self.room_status
    }

    #[must_use]
    pub const fn answer(&self) -> &RoomAnswer {
        &self.answer
    }

    #[must_use]
    pub const fn result(&self) -> Option<&RoomResult> {
        self.result.as_ref()
    }

    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.submitting
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// The submit control is shown until the room is scored.
    #[must_use]
    pub const fn can_submit(&self) -> bool {
        !self.submitting && self.result.is_none() && !self.finished
    }

    #[must_use]
    pub const fn started_at_ms(&self) -> u64 {
        self.started_at_ms
    }

    #[must_use]
    pub fn has_puzzle(&self, room: RoomNumber) -> bool {
        match room.get() {
            1 => !self.rooms.room1.is_empty(),
            2 => !self.rooms.room2.is_empty(),
            3 => !self.rooms.room3.is_empty(),
            4 => !self.rooms.room4.is_empty(),
            _ => self.rooms.room5.is_some(),
        }
    }

    /// Render data for the current room. Options keep a stable order per
    /// room and attempt.
    #[must_use]
    pub fn view(&self) -> RoomView {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed ^ u64::from(self.room.get()));
        let mut options = |correct: &str, wrong: &[String]| {
            let mut all: Vec<String> = Vec::with_capacity(wrong.len() + 1);
            for option in std::iter::once(correct).chain(wrong.iter().map(String::as_str)) {
                if !option.trim().is_empty() && !all.iter().any(|o| o == option) {
                    all.push(option.to_string());
                }
            }
            all.shuffle(&mut rng);
            all
        };
        match self.room.get() {
            1 => self.rooms.room1.first().map_or(RoomView::Unavailable, |p| {
                RoomView::Definition {
                    term: p.term.clone(),
                    options: options(&p.definition, &p.wrong_options),
                }
            }),
            2 => self.rooms.room2.first().map_or(RoomView::Unavailable, |p| {
                RoomView::Exception {
                    rule: p.rule.clone(),
                    scenario: p.scenario.clone(),
                    options: options(&p.correct_exception, &p.wrong_exceptions),
                }
            }),
            3 => self.rooms.room3.first().map_or(RoomView::Unavailable, |p| RoomView::Rule {
                scenario: p.scenario.clone(),
                options: options(&p.correct_rule, &p.wrong_rules),
            }),
            4 => self.rooms.room4.first().map_or(RoomView::Unavailable, |p| {
                RoomView::Repair {
                    scenario: p.scenario.clone(),
                    violation: p.violation.clone(),
                }
            }),
            _ => self.rooms.room5.as_ref().map_or(RoomView::Unavailable, |p| {
                RoomView::Master {
                    scenario: p.scenario.clone(),
                    term: p.definition_question.term.clone(),
                    definition_options: options(
                        &p.definition_question.definition,
                        &p.definition_question.wrong_options,
                    ),
                    rule_options: options(&p.rule_question.correct_rule, &p.rule_question.wrong_rules),
                    exception_rule: p.exception_question.rule.clone(),
                    exception_options: options(
                        &p.exception_question.correct_exception,
                        &p.exception_question.wrong_exceptions,
                    ),
                }
            }),
        }
    }

    // --- answer editing --------------------------------------------------

    /// Pick an option in rooms 1 to 3.
    pub fn select(&mut self, option: impl Into<String>) {
        if self.can_submit() && self.room.get() <= 3 {
            self.answer = RoomAnswer::Selection(option.into());
        }
    }

    /// Edit the free-text fix in room 4 or room 5.
    pub fn set_fix(&mut self, text: impl Into<String>) {
        if !self.can_submit() {
            return;
        }
        let text = text.into();
        match &mut self.answer {
            RoomAnswer::Master { violation_fix, .. } => *violation_fix = text,
            answer if self.room.get() == 4 => *answer = RoomAnswer::Fix(text),
            _ => {}
        }
    }

    /// Pick one part of the final room's composite answer.
    pub fn select_master(&mut self, part: MasterPart, option: impl Into<String>) {
        if !self.can_submit() {
            return;
        }
        if let RoomAnswer::Master {
            definition,
            rule,
            exception,
            ..
        } = &mut self.answer
        {
            let slot = match part {
                MasterPart::Definition => definition,
                MasterPart::Rule => rule,
                MasterPart::Exception => exception,
            };
            *slot = Some(option.into());
        }
    }

    /// Whether a submission would be accepted right now.
    ///
    /// # Errors
    ///
    /// Returns the reason a submission would be rejected.
    pub fn validate(&self) -> Result<(), EscapeError> {
        self.submission_map().map(|_| ())
    }

    // --- submission ------------------------------------------------------

    /// Lock the room and build the payload for `POST /escape/submit/{attempt}`.
    ///
    /// # Errors
    ///
    /// Rejects incomplete answers and repeated submissions.
    pub fn begin_submit(&mut self, now_ms: u64) -> Result<RoomSubmission, EscapeError> {
        let mut answer = self.submission_map()?;
        let secs = now_ms.saturating_sub(self.room_started_at_ms) / 1_000;
        answer.insert("time_taken".to_string(), Value::from(secs));
        self.submitting = true;
        log::debug!("submitting room {} of {}", self.room, self.attempt_id);
        Ok(RoomSubmission {
            attempt_id: self.attempt_id.clone(),
            room_number: self.room.get(),
            answer,
        })
    }

    /// Record the backend's verdict for the current room.
    pub fn on_result(&mut self, result: RoomResult) {
        if !self.submitting {
            return;
        }
        self.submitting = false;
        self.score = result.new_score;
        let state = if result.correct {
            RoomState::Done
        } else {
            RoomState::Failed
        };
        self.room_status.set(self.room.get(), state);
        log::info!(
            "room {} scored {} (correct: {})",
            self.room,
            result.points_earned,
            result.correct
        );
        self.result = Some(result);
    }

    /// Unlock the room after a failed submission and return the alert text.
    pub fn on_submit_failed(&mut self, detail: &str) -> String {
        self.submitting = false;
        log::error!("room {} submission failed: {detail}", self.room);
        format!("Failed to submit: {detail}")
    }

    /// Move past a scored room.
    ///
    /// # Errors
    ///
    /// Fails when the room has not been scored or the flow already finished.
    pub fn confirm(&mut self, now_ms: u64) -> Result<NextStep, EscapeError> {
        if self.finished {
            return Err(EscapeError::Finished);
        }
        if self.result.is_none() {
            return Err(EscapeError::NotAnswered);
        }
        if let Some(next) = self.room.next() {
            self.room = next;
            self.result = None;
            self.room_started_at_ms = now_ms;
            self.reset_answer();
            Ok(NextStep::Next(next))
        } else {
            self.finished = true;
            Ok(NextStep::Finish {
                time_taken: now_ms.saturating_sub(self.started_at_ms) / 1_000,
            })
        }
    }

    /// Closing the attempt failed; let the player confirm the last room again.
    pub fn finish_failed(&mut self, detail: &str) {
        if self.finished {
            log::error!("finishing {} failed: {detail}", self.attempt_id);
            self.finished = false;
        }
    }

    fn submission_map(&self) -> Result<Map<String, Value>, EscapeError> {
        if self.finished {
            return Err(EscapeError::Finished);
        }
        if self.submitting {
            return Err(EscapeError::AlreadySubmitting);
        }
        if self.result.is_some() {
            return Err(EscapeError::AlreadyAnswered);
        }
        if !self.has_puzzle(self.room) {
            return Err(EscapeError::PuzzleUnavailable);
        }
        self.answer.to_map(self.room)
    }

    fn reset_answer(&mut self) {
        self.answer = if self.room.is_last() {
            RoomAnswer::blank_master()
        } else {
            RoomAnswer::Empty
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DefinitionPuzzle, MasterPuzzle, RepairPuzzle};

    fn bundle() -> EscapeRoomBundle {
        EscapeRoomBundle {
            rooms: EscapeRooms {
                room1: vec![DefinitionPuzzle {
                    term: "PII".into(),
                    definition: "Data that identifies a person".into(),
                    wrong_options: vec!["Any public data".into(), "".into()],
                }],
                room4: vec![RepairPuzzle {
                    violation: "Passwords are shared over chat".into(),
                    ..RepairPuzzle::default()
                }],
                room5: Some(MasterPuzzle::default()),
                ..EscapeRooms::default()
            },
            score: 0,
            room_status: RoomStatus::default(),
        }
    }

    #[test]
    fn room_numbers_stay_in_range() {
        assert!(RoomNumber::new(0).is_err());
        assert!(RoomNumber::new(6).is_err());
        assert_eq!(RoomNumber::new(4).unwrap().next(), RoomNumber::new(5).ok());
        assert_eq!(RoomNumber::LAST.next(), None);
        assert_eq!(RoomNumber::FIRST.title(), "Room 1: Definitions Chamber");
    }

    #[test]
    fn missing_selection_is_rejected_locally() {
        let mut flow = EscapeFlow::new("e1", bundle(), 7, 0);
        let err = flow.begin_submit(1_000).unwrap_err();
        assert_eq!(err.to_string(), "Please select an answer before submitting");
        assert!(!flow.is_submitting());
    }

    #[test]
    fn submission_carries_room_time() {
        let mut flow = EscapeFlow::new("e1", bundle(), 7, 0);
        flow.select("Data that identifies a person");
        let sub = flow.begin_submit(12_400).unwrap();
        assert_eq!(sub.room_number, 1);
        assert_eq!(
            sub.answer.get("selected_definition").and_then(Value::as_str),
            Some("Data that identifies a person")
        );
        assert_eq!(sub.answer.get("time_taken").and_then(Value::as_u64), Some(12));
        assert_eq!(flow.begin_submit(13_000), Err(EscapeError::AlreadySubmitting));
    }

    #[test]
    fn failed_submit_unlocks_room() {
        let mut flow = EscapeFlow::new("e1", bundle(), 7, 0);
        flow.select("Any public data");
        flow.begin_submit(0).unwrap();
        let alert = flow.on_submit_failed("Attempt not found");
        assert_eq!(alert, "Failed to submit: Attempt not found");
        assert!(flow.can_submit());
        assert!(flow.begin_submit(0).is_ok());
    }

    #[test]
    fn view_filters_blank_options_and_is_stable() {
        let flow = EscapeFlow::new("e1", bundle(), 7, 0);
        let RoomView::Definition { term, options } = flow.view() else {
            panic!("room 1 should show the definition puzzle");
        };
        assert_eq!(term, "PII");
        assert_eq!(options.len(), 2);
        assert_eq!(flow.view(), flow.view());
    }

    #[test]
    fn missing_puzzle_renders_unavailable() {
        let flow = EscapeFlow::new("e1", bundle(), 7, 0).resume_at(RoomNumber::new(2).unwrap());
        assert_eq!(flow.view(), RoomView::Unavailable);
        assert_eq!(flow.validate(), Err(EscapeError::PuzzleUnavailable));
    }

    #[test]
    fn master_room_needs_all_four_parts() {
        let mut flow = EscapeFlow::new("e1", bundle(), 7, 0).resume_at(RoomNumber::LAST);
        flow.select_master(MasterPart::Definition, "d");
        flow.select_master(MasterPart::Rule, "r");
        flow.select_master(MasterPart::Exception, "x");
        assert_eq!(flow.validate(), Err(EscapeError::MissingAnswer));
        flow.set_fix("Use the password manager");
        let sub = flow.begin_submit(0).unwrap();
        for key in ["definition_answer", "rule_answer", "exception_answer", "violation_fix"] {
            assert!(sub.answer.contains_key(key), "missing {key}");
        }
    }
}
