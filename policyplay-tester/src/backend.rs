//! In-process stand-in for the PolicyPlay backend.
//!
//! Generates game content from a seed and scores answers with the same rules
//! the real service applies, so scripted players can be checked end to end.

use policyplay_core::{
    DefinitionPuzzle, EscapeResults, EscapeRoomBundle, EscapeRooms, ExceptionPuzzle,
    FinishTapRequest, Level, MasterPuzzle, RepairPuzzle, RoomResult, RoomStatus, RoomSubmission,
    RulePuzzle, TapQuestion, TapResults, TapSubmission, TapSubmitResponse,
};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeSet;

const TAP_CORRECT: i32 = 10;
const TAP_FAST_BONUS: i32 = 2;
const TAP_FAST_SECS: f64 = 2.0;
const TAP_PENALTY: i32 = -5;
const ROOM_CORRECT: i32 = 10;
const ROOM_FAST_BONUS: i32 = 5;
const ROOM_FAST_SECS: u64 = 60;
const ROOM_PENALTY: i32 = -5;
const FINISH_BONUS_MAX: i64 = 100;

const TOPICS: [(&str, &str, &str); 6] = [
    ("Remote access", "Connect through the company VPN", "Use any open Wi-Fi"),
    ("Customer data", "Store it in the approved CRM", "Keep a copy on a USB stick"),
    ("Expense claims", "Attach an itemised receipt", "Submit the card statement total"),
    ("Visitor access", "Escort guests at all times", "Lend them a spare badge"),
    ("Password resets", "Verify identity through the helpdesk", "Reset it for whoever asks"),
    ("Incident reports", "File within 24 hours", "Mention it at the next team lunch"),
];

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BackendError {
    #[error("Cannot connect to backend server")]
    Offline,
    #[error("Question {0} does not exist")]
    UnknownQuestion(usize),
    #[error("Room {0} does not exist")]
    UnknownRoom(u8),
}

/// Failures to inject into a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Faults {
    /// Submissions to reject before answering normally.
    pub rejected_submits: u32,
    pub fail_finalize: bool,
}

#[derive(Debug, Default, Clone, Copy)]
struct TapTally {
    correct: u32,
    wrong: u32,
    missed: u32,
}

pub struct MockBackend {
    rng: ChaCha8Rng,
    questions: Vec<TapQuestion>,
    answered: BTreeSet<usize>,
    tap_score: i32,
    tally: TapTally,
    rooms: Option<EscapeRooms>,
    escape_score: i32,
    rooms_completed: Vec<String>,
    fail_next_submits: u32,
    fail_finalize: bool,
}

impl MockBackend {
    #[must_use]
    pub fn with_faults(seed: u64, faults: Faults) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            questions: Vec::new(),
            answered: BTreeSet::new(),
            tap_score: 0,
            tally: TapTally::default(),
            rooms: None,
            escape_score: 0,
            rooms_completed: Vec::new(),
            fail_next_submits: faults.rejected_submits,
            fail_finalize: faults.fail_finalize,
        }
    }

    // --- policy tap ------------------------------------------------------

    /// Build a tap game set; harder levels get more questions.
    pub fn generate_tap(&mut self, level: Level) -> Vec<TapQuestion> {
        let count = match level {
            Level::Beginner => 3,
            Level::Intermediate => 4,
            Level::Expert => 5,
        };
        let mut topics = TOPICS.to_vec();
        topics.shuffle(&mut self.rng);
        self.questions = topics
            .iter()
            .cycle()
            .take(count)
            .enumerate()
            .map(|(i, (topic, right, wrong))| TapQuestion {
                question: format!("Q{}: What does the {topic} policy require?", i + 1),
                correct: (*right).to_string(),
                wrong_options: vec![
                    (*wrong).to_string(),
                    format!("Ask a colleague about {topic}"),
                    format!("Ignore {topic} on weekends"),
                    format!("Email the CEO about {topic}"),
                ],
            })
            .collect();
        self.answered.clear();
        self.tap_score = 0;
        self.tally = TapTally::default();
        self.questions.clone()
    }

    /// Score one tap answer.
    ///
    /// # Errors
    ///
    /// Fails while injected rejections remain, or for an unknown index.
    pub fn submit_tap(&mut self, sub: &TapSubmission) -> Result<TapSubmitResponse, BackendError> {
        if self.fail_next_submits > 0 {
            self.fail_next_submits -= 1;
            return Err(BackendError::Offline);
        }
        let question = self
            .questions
            .get(sub.question_index)
            .ok_or(BackendError::UnknownQuestion(sub.question_index))?;
        let correct_answer = question.correct.clone();
        if !self.answered.insert(sub.question_index) {
            return Ok(TapSubmitResponse {
                correct: false,
                points: 0,
                new_score: self.tap_score,
                correct_answer,
                message: Some("Question already answered".into()),
            });
        }
        let correct = !sub.was_missed && sub.selected_option == question.correct;
        let points = if sub.was_missed {
            self.tally.missed += 1;
            TAP_PENALTY
        } else if correct {
            self.tally.correct += 1;
            if sub.time_taken < TAP_FAST_SECS {
                TAP_CORRECT + TAP_FAST_BONUS
            } else {
                TAP_CORRECT
            }
        } else {
            self.tally.wrong += 1;
            TAP_PENALTY
        };
        self.tap_score += points;
        Ok(TapSubmitResponse {
            correct,
            points,
            new_score: self.tap_score,
            correct_answer,
            message: None,
        })
    }

    /// # Errors
    ///
    /// Fails when the run injects a finalize failure.
    pub fn finish_tap(&mut self, request: &FinishTapRequest) -> Result<TapResults, BackendError> {
        if self.fail_finalize {
            return Err(BackendError::Offline);
        }
        Ok(TapResults {
            attempt_id: request.attempt_id.clone(),
            final_score: self.tap_score,
            correct_answers: self.tally.correct,
            wrong_answers: self.tally.wrong,
            missed_answers: self.tally.missed,
            time_taken: request.final_time_taken,
        })
    }

    #[must_use]
    pub const fn tap_score(&self) -> i32 {
        self.tap_score
    }

    // --- escape room -----------------------------------------------------

    /// Build the five rooms from a shuffled topic list.
    pub fn generate_escape(&mut self) -> EscapeRoomBundle {
        let mut topics = TOPICS.to_vec();
        topics.shuffle(&mut self.rng);
        let pick = |i: usize| topics[i % topics.len()];
        let (term, definition, wrong) = pick(0);
        let definition = DefinitionPuzzle {
            term: term.to_string(),
            definition: definition.to_string(),
            wrong_options: vec![wrong.to_string(), format!("Anything about {term}")],
        };
        let (topic, right, wrong) = pick(1);
        let exception = ExceptionPuzzle {
            rule: format!("{topic}: {right}"),
            correct_exception: format!("A documented emergency waiver for {topic}"),
            wrong_exceptions: vec![wrong.to_string(), "Being in a hurry".into()],
            scenario: format!("A manager wants to skip the {topic} rule"),
        };
        let (topic, right, wrong) = pick(2);
        let rule = RulePuzzle {
            scenario: format!("Someone is unsure how to handle {topic}"),
            correct_rule: right.to_string(),
            wrong_rules: vec![wrong.to_string()],
        };
        let (topic, right, wrong) = pick(3);
        let repair = RepairPuzzle {
            violation: format!("{topic}: a colleague chose to {}", wrong.to_lowercase()),
            fix: right.to_string(),
            explanation: format!("The {topic} policy says: {right}"),
            scenario: String::new(),
        };
        let rooms = EscapeRooms {
            room1: vec![definition.clone()],
            room2: vec![exception.clone()],
            room3: vec![rule.clone()],
            room4: vec![repair.clone()],
            room5: Some(MasterPuzzle {
                scenario: "An auditor reviews last quarter".into(),
                definition_question: definition,
                rule_question: rule,
                exception_question: exception,
                violation_question: repair,
            }),
        };
        self.rooms = Some(rooms.clone());
        self.escape_score = 0;
        self.rooms_completed.clear();
        EscapeRoomBundle {
            rooms,
            score: 0,
            room_status: RoomStatus::default(),
        }
    }

    /// Score one room.
    ///
    /// # Errors
    ///
    /// Fails while injected rejections remain, or for rooms never generated.
    pub fn submit_room(&mut self, sub: &RoomSubmission) -> Result<RoomResult, BackendError> {
        if self.fail_next_submits > 0 {
            self.fail_next_submits -= 1;
            return Err(BackendError::Offline);
        }
        let rooms = self.rooms.as_ref().ok_or(BackendError::UnknownRoom(sub.room_number))?;
        let text = |key: &str| sub.answer.get(key).and_then(Value::as_str).unwrap_or_default();
        let (correct, explanation) = match sub.room_number {
            1 => {
                let p = rooms.room1.first().ok_or(BackendError::UnknownRoom(1))?;
                (text("selected_definition") == p.definition, p.definition.clone())
            }
            2 => {
                let p = rooms.room2.first().ok_or(BackendError::UnknownRoom(2))?;
                (text("selected_exception") == p.correct_exception, p.correct_exception.clone())
            }
            3 => {
                let p = rooms.room3.first().ok_or(BackendError::UnknownRoom(3))?;
                (text("selected_rule") == p.correct_rule, p.correct_rule.clone())
            }
            4 => {
                let p = rooms.room4.first().ok_or(BackendError::UnknownRoom(4))?;
                (fix_matches(text("fix"), &p.fix), p.explanation.clone())
            }
            5 => {
                let p = rooms.room5.as_ref().ok_or(BackendError::UnknownRoom(5))?;
                let ok = text("definition_answer") == p.definition_question.definition
                    && text("rule_answer") == p.rule_question.correct_rule
                    && text("exception_answer") == p.exception_question.correct_exception
                    && fix_matches(text("violation_fix"), &p.violation_question.fix);
                (ok, "All four parts must be right".to_string())
            }
            other => return Err(BackendError::UnknownRoom(other)),
        };
        let secs = sub.answer.get("time_taken").and_then(Value::as_u64).unwrap_or(0);
        let points = match (correct, secs) {
            (true, s) if s > 0 && s < ROOM_FAST_SECS => ROOM_CORRECT + ROOM_FAST_BONUS,
            (true, _) => ROOM_CORRECT,
            (false, _) => ROOM_PENALTY,
        };
        self.escape_score += points;
        if correct {
            self.rooms_completed.push(format!("room{}", sub.room_number));
        }
        Ok(RoomResult {
            correct,
            points_earned: points,
            new_score: self.escape_score,
            explanation,
        })
    }

    /// Close the attempt and add the speed bonus.
    pub fn finish_escape(&mut self, attempt_id: &str, time_taken: u64) -> EscapeResults {
        let bonus = (FINISH_BONUS_MAX - i64::try_from(time_taken / 10).unwrap_or(i64::MAX)).max(0);
        self.escape_score += i32::try_from(bonus).unwrap_or(0);
        EscapeResults {
            attempt_id: attempt_id.to_string(),
            final_score: self.escape_score,
            time_taken,
            rooms_completed: self.rooms_completed.clone(),
        }
    }

    /// Random think time in `[low, high)` milliseconds.
    pub fn jitter(&mut self, low: u64, high: u64) -> u64 {
        self.rng.gen_range(low..high)
    }
}

/// Lenient fix comparison: case-insensitive equality or containment either way.
fn fix_matches(given: &str, expected: &str) -> bool {
    let (given, expected) = (given.trim().to_lowercase(), expected.trim().to_lowercase());
    !given.is_empty() && (given == expected || given.contains(&expected) || expected.contains(&given))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(index: usize, option: &str, secs: f64, missed: bool) -> TapSubmission {
        TapSubmission {
            attempt_id: "a".into(),
            question_index: index,
            selected_option: option.into(),
            time_taken: secs,
            was_missed: missed,
        }
    }

    #[test]
    fn tap_scoring_matches_service_rules() {
        let mut backend = MockBackend::with_faults(1, Faults::default());
        let questions = backend.generate_tap(Level::Intermediate);
        let fast = backend.submit_tap(&submission(0, &questions[0].correct, 1.2, false)).unwrap();
        assert_eq!(fast.points, 12);
        let slow = backend.submit_tap(&submission(1, &questions[1].correct, 4.0, false)).unwrap();
        assert_eq!(slow.points, 10);
        let wrong = backend.submit_tap(&submission(2, "nope", 1.0, false)).unwrap();
        assert_eq!(wrong.points, -5);
        let missed = backend.submit_tap(&submission(3, "", 12.0, true)).unwrap();
        assert_eq!(missed.points, -5);
        let again = backend.submit_tap(&submission(0, &questions[0].correct, 1.0, false)).unwrap();
        assert_eq!(again.points, 0);
        assert_eq!(again.message.as_deref(), Some("Question already answered"));
        assert_eq!(backend.tap_score(), 12);
    }

    #[test]
    fn offline_submissions_fail_then_recover() {
        let faults = Faults { rejected_submits: 1, ..Faults::default() };
        let mut backend = MockBackend::with_faults(2, faults);
        let questions = backend.generate_tap(Level::Beginner);
        let sub = submission(0, &questions[0].correct, 3.0, false);
        assert_eq!(backend.submit_tap(&sub), Err(BackendError::Offline));
        assert!(backend.submit_tap(&sub).unwrap().correct);
    }

    #[test]
    fn fix_comparison_is_lenient() {
        assert!(fix_matches("  use the VPN ", "Use the VPN"));
        assert!(fix_matches("Always use the VPN from home", "use the vpn"));
        assert!(!fix_matches("", "use the vpn"));
        assert!(!fix_matches("call IT", "use the vpn"));
    }

    #[test]
    fn finish_bonus_shrinks_with_time() {
        let mut backend = MockBackend::with_faults(3, Faults::default());
        backend.generate_escape();
        assert_eq!(backend.finish_escape("e", 100).final_score, 90);
        let mut slow = MockBackend::with_faults(3, Faults::default());
        slow.generate_escape();
        assert_eq!(slow.finish_escape("e", 5_000).final_score, 0);
    }
}
