//! Scripted players for the five-room escape game.

use crate::backend::{Faults, MockBackend};
use policyplay_core::{
    EscapeFlow, EscapeResults, EscapeRooms, MasterPart, NextStep, RoomState, RoomView,
};
use serde::Serialize;

const ROOM_THINK_MS: u64 = 20_000;
const WRONG_FIX: &str = "Ask a friend what they would do";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EscapeStrategy {
    /// Knows every answer.
    Solver,
    /// Picks a wrong option in every room.
    Guesser,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct EscapeOutcome {
    pub submissions: Vec<u8>,
    pub rejected: usize,
    pub alerts: Vec<String>,
    pub done_rooms: usize,
    pub failed_rooms: usize,
    pub client_score: i32,
    pub finish_time: Option<u64>,
    pub results: Option<EscapeResults>,
    pub finished: bool,
}

pub struct EscapePlayer {
    strategy: EscapeStrategy,
    flow: EscapeFlow,
    key: EscapeRooms,
    backend: MockBackend,
    now_ms: u64,
    outcome: EscapeOutcome,
}

impl EscapePlayer {
    #[must_use]
    pub fn new(strategy: EscapeStrategy, seed: u64, faults: Faults) -> Self {
        let mut backend = MockBackend::with_faults(seed, faults);
        let bundle = backend.generate_escape();
        let key = bundle.rooms.clone();
        Self {
            strategy,
            flow: EscapeFlow::new(format!("escape-{seed}"), bundle, seed, 0),
            key,
            backend,
            now_ms: 0,
            outcome: EscapeOutcome::default(),
        }
    }

    /// Play every room in order, retrying rejected submissions once each.
    ///
    /// # Errors
    ///
    /// Propagates flow errors such as a missing puzzle or a refused confirm.
    pub fn play(mut self) -> anyhow::Result<EscapeOutcome> {
        loop {
            let room = self.flow.room();
            let view = self.flow.view();
            self.answer(&view)?;
            self.now_ms += ROOM_THINK_MS;

            let result = loop {
                let submission = self.flow.begin_submit(self.now_ms)?;
                self.outcome.submissions.push(submission.room_number);
                match self.backend.submit_room(&submission) {
                    Ok(result) => break result,
                    Err(err) => {
                        self.outcome.rejected += 1;
                        let alert = self.flow.on_submit_failed(&err.to_string());
                        self.outcome.alerts.push(alert);
                        anyhow::ensure!(
                            self.outcome.rejected <= 5,
                            "room {room} kept failing to submit"
                        );
                    }
                }
            };
            self.flow.on_result(result);

            match self.flow.confirm(self.now_ms)? {
                NextStep::Next(_) => {}
                NextStep::Finish { time_taken } => {
                    self.outcome.finish_time = Some(time_taken);
                    let results = self.backend.finish_escape(self.flow.attempt_id(), time_taken);
                    self.outcome.results = Some(results);
                    break;
                }
            }
        }

        let status = self.flow.room_status();
        for n in 1..=5u8 {
            match status.get(n) {
                RoomState::Done => self.outcome.done_rooms += 1,
                RoomState::Failed => self.outcome.failed_rooms += 1,
                _ => {}
            }
        }
        self.outcome.client_score = self.flow.score();
        self.outcome.finished = self.flow.is_finished();
        Ok(self.outcome)
    }

    fn answer(&mut self, view: &RoomView) -> anyhow::Result<()> {
        let solve = self.strategy == EscapeStrategy::Solver;
        let pick = |options: &[String], correct: &str| -> anyhow::Result<String> {
            let found = if solve {
                options.iter().find(|o| o.as_str() == correct)
            } else {
                options.iter().find(|o| o.as_str() != correct)
            };
            found
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("no option to pick among {options:?}"))
        };
        let key = &self.key;
        match view {
            RoomView::Unavailable => anyhow::bail!("room {} has no puzzle", self.flow.room()),
            RoomView::Definition { options, .. } => {
                let expected = key.room1.first().map(|p| p.definition.as_str()).unwrap_or_default();
                self.flow.select(pick(options, expected)?);
            }
            RoomView::Exception { options, .. } => {
                let expected =
                    key.room2.first().map(|p| p.correct_exception.as_str()).unwrap_or_default();
                self.flow.select(pick(options, expected)?);
            }
            RoomView::Rule { options, .. } => {
                let expected = key.room3.first().map(|p| p.correct_rule.as_str()).unwrap_or_default();
                self.flow.select(pick(options, expected)?);
            }
            RoomView::Repair { .. } => {
                let fix = key.room4.first().map(|p| p.fix.as_str()).unwrap_or_default();
                self.flow.set_fix(if solve { fix } else { WRONG_FIX });
            }
            RoomView::Master {
                definition_options,
                rule_options,
                exception_options,
                ..
            } => {
                let master = key
                    .room5
                    .as_ref()
                    .ok_or_else(|| anyhow::anyhow!("master puzzle missing from answer key"))?;
                let definition = pick(definition_options, &master.definition_question.definition)?;
                let rule = pick(rule_options, &master.rule_question.correct_rule)?;
                let exception =
                    pick(exception_options, &master.exception_question.correct_exception)?;
                let fix = if solve {
                    master.violation_question.fix.clone()
                } else {
                    WRONG_FIX.to_string()
                };
                self.flow.select_master(MasterPart::Definition, definition);
                self.flow.select_master(MasterPart::Rule, rule);
                self.flow.select_master(MasterPart::Exception, exception);
                self.flow.set_fix(fix);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solver_escapes_with_speed_bonus() {
        let outcome = EscapePlayer::new(EscapeStrategy::Solver, 11, Faults::default()).play().unwrap();
        assert!(outcome.finished);
        assert_eq!(outcome.done_rooms, 5);
        assert_eq!(outcome.client_score, 75);
        assert_eq!(outcome.finish_time, Some(100));
        let results = outcome.results.unwrap();
        assert_eq!(results.final_score, 75 + 90);
        assert_eq!(results.rooms_completed.len(), 5);
    }

    #[test]
    fn guesser_fails_every_room_but_still_finishes() {
        let outcome = EscapePlayer::new(EscapeStrategy::Guesser, 5, Faults::default()).play().unwrap();
        assert!(outcome.finished);
        assert_eq!(outcome.failed_rooms, 5);
        assert_eq!(outcome.client_score, -25);
    }

    #[test]
    fn rejected_room_is_resubmitted() {
        let faults = Faults { rejected_submits: 1, ..Faults::default() };
        let outcome = EscapePlayer::new(EscapeStrategy::Solver, 2, faults).play().unwrap();
        assert_eq!(outcome.rejected, 1);
        assert_eq!(outcome.submissions.len(), 6);
        assert_eq!(outcome.done_rooms, 5);
    }
}
