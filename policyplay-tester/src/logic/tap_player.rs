//! Scripted players for the policy tap game.

use crate::backend::{Faults, MockBackend};
use policyplay_core::{
    Level, QuestionPhase, TapEffect, TapResults, TapSession, TapSubmission, Tally, VirtualClock,
};
use serde::Serialize;

/// Hard stop for sessions that never end on their own.
const MAX_STEPS: usize = 20_000;
/// Idle beginners are dealt the same question forever; stop after this many deals.
const IDLE_ROUND_CAP: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TapStrategy {
    /// Taps the right ball once everything has spawned.
    AlwaysCorrect,
    /// Taps a wrong ball once everything has spawned.
    AlwaysWrong,
    /// Never taps.
    Idle,
    /// Waits for the countdown to hit zero, then taps the right ball.
    LateTapper,
}

/// Everything a run produced, for the checks in [`crate::logic::tester`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct TapOutcome {
    pub question_count: usize,
    pub accepted: Vec<TapSubmission>,
    pub rejected: usize,
    pub retries: usize,
    pub finalizes: usize,
    pub stored: Vec<TapResults>,
    pub navigations: usize,
    pub alerts: Vec<String>,
    pub late_taps_ignored: usize,
    pub rounds: u32,
    pub final_index: usize,
    pub client_score: i32,
    pub backend_score: i32,
    #[serde(skip)]
    pub tally: Tally,
    pub finished: bool,
    pub steps: usize,
}

pub struct TapPlayer {
    strategy: TapStrategy,
    session: TapSession,
    clock: VirtualClock,
    backend: MockBackend,
    outcome: TapOutcome,
    last_tapped: Option<(usize, u32)>,
}

impl TapPlayer {
    #[must_use]
    pub fn new(strategy: TapStrategy, level: Level, seed: u64, faults: Faults) -> Self {
        let mut backend = MockBackend::with_faults(seed, faults);
        let questions = backend.generate_tap(level);
        let outcome = TapOutcome {
            question_count: questions.len(),
            ..TapOutcome::default()
        };
        Self {
            strategy,
            session: TapSession::new(format!("tap-{seed}"), level, questions, seed),
            clock: VirtualClock::new(),
            backend,
            outcome,
            last_tapped: None,
        }
    }

    #[must_use]
    pub fn play(mut self) -> TapOutcome {
        let effects = self.session.start(self.clock.now_ms());
        self.run(effects);

        while self.outcome.steps < MAX_STEPS {
            self.outcome.steps += 1;
            if self.outcome.navigations > 0 && self.clock.pending() == 0 {
                break;
            }
            if self.strategy == TapStrategy::Idle
                && self.session.level() != Level::Expert
                && self.session.rounds() >= IDLE_ROUND_CAP
            {
                break;
            }
            if self.session.phase() == QuestionPhase::Halted {
                self.outcome.retries += 1;
                let effects = self.session.retry_submit();
                self.run(effects);
                continue;
            }
            if self.wants_tap() {
                self.take_turn();
                continue;
            }
            let Some(timer) = self.clock.pop_next() else {
                break;
            };
            let effects = self.session.fire(timer, self.clock.now_ms());
            self.run(effects);
        }

        self.outcome.rounds = self.session.rounds();
        self.outcome.final_index = self.session.index();
        self.outcome.client_score = self.session.score();
        self.outcome.backend_score = self.backend.tap_score();
        self.outcome.tally = self.session.tally();
        self.outcome.finished = self.session.is_finished();
        self.outcome
    }

    fn wants_tap(&self) -> bool {
        let turn = (self.session.index(), self.session.rounds());
        self.strategy != TapStrategy::Idle
            && matches!(
                self.session.phase(),
                QuestionPhase::Spawning | QuestionPhase::AwaitingAnswer
            )
            && self.last_tapped != Some(turn)
    }

    fn take_turn(&mut self) {
        self.last_tapped = Some((self.session.index(), self.session.rounds()));
        match self.strategy {
            TapStrategy::LateTapper => {
                while self.session.countdown() != Some(0) {
                    let Some(timer) = self.clock.pop_next() else { return };
                    let effects = self.session.fire(timer, self.clock.now_ms());
                    self.run(effects);
                    if !matches!(
                        self.session.phase(),
                        QuestionPhase::Spawning | QuestionPhase::AwaitingAnswer
                    ) {
                        return;
                    }
                }
                if let Some(id) = self.ball_id(true) {
                    let effects = self.session.tap(id, self.clock.now_ms());
                    if effects.is_empty() {
                        self.outcome.late_taps_ignored += 1;
                    }
                    self.run(effects);
                }
            }
            TapStrategy::AlwaysCorrect | TapStrategy::AlwaysWrong => {
                let think = self.backend.jitter(1_300, 1_900);
                self.advance_to(self.clock.now_ms() + think);
                let want_correct = self.strategy == TapStrategy::AlwaysCorrect;
                if let Some(id) = self.ball_id(want_correct) {
                    let effects = self.session.tap(id, self.clock.now_ms());
                    self.run(effects);
                }
            }
            TapStrategy::Idle => {}
        }
    }

    fn ball_id(&self, correct: bool) -> Option<usize> {
        self.session
            .balls()
            .iter()
            .find(|b| b.correct == correct && b.is_live())
            .map(|b| b.id)
    }

    fn advance_to(&mut self, until_ms: u64) {
        while let Some(timer) = self.clock.pop_due(until_ms) {
            let effects = self.session.fire(timer, self.clock.now_ms());
            self.run(effects);
        }
    }

    fn run(&mut self, effects: Vec<TapEffect>) {
        for effect in self.clock.absorb(effects) {
            match effect {
                TapEffect::Submit(sub) => {
                    let more = match self.backend.submit_tap(&sub) {
                        Ok(response) => {
                            self.outcome.accepted.push(sub.clone());
                            self.session.submit_succeeded(sub.question_index, &response)
                        }
                        Err(err) => {
                            self.outcome.rejected += 1;
                            self.session.submit_failed(
                                sub.question_index,
                                &format!("Failed to submit answer: {err}"),
                            )
                        }
                    };
                    self.run(more);
                }
                TapEffect::Finalize(request) => {
                    self.outcome.finalizes += 1;
                    let more = match self.backend.finish_tap(&request) {
                        Ok(results) => self.session.finalize_succeeded(results),
                        Err(err) => self.session.finalize_failed(&err.to_string()),
                    };
                    self.run(more);
                }
                TapEffect::StoreResults(results) => self.outcome.stored.push(results),
                TapEffect::NavigateToResults { .. } => self.outcome.navigations += 1,
                TapEffect::Alert(message) => self.outcome.alerts.push(message),
                TapEffect::Schedule { timer, delay_ms } => self.clock.schedule(timer, delay_ms),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_player_finishes_with_full_tally() {
        let outcome = TapPlayer::new(TapStrategy::AlwaysCorrect, Level::Beginner, 7, Faults::default()).play();
        assert!(outcome.finished);
        assert_eq!(outcome.tally.correct, 3);
        assert_eq!(outcome.accepted.len(), 3);
        assert_eq!(outcome.navigations, 1);
        assert_eq!(outcome.client_score, outcome.backend_score);
    }

    #[test]
    fn idle_beginner_is_dealt_the_same_question_again() {
        let outcome = TapPlayer::new(TapStrategy::Idle, Level::Beginner, 7, Faults::default()).play();
        assert!(!outcome.finished);
        assert!(outcome.accepted.is_empty());
        assert_eq!(outcome.final_index, 0);
        assert!(outcome.rounds >= IDLE_ROUND_CAP);
    }

    #[test]
    fn offline_finish_hands_off_the_local_tally() {
        let faults = Faults { fail_finalize: true, ..Faults::default() };
        let outcome = TapPlayer::new(TapStrategy::AlwaysWrong, Level::Beginner, 9, faults).play();
        assert_eq!(outcome.finalizes, 1);
        assert_eq!(outcome.stored.len(), 1);
        assert_eq!(outcome.stored[0].wrong_answers, 3);
        assert_eq!(outcome.stored[0].final_score, -15);
        assert_eq!(outcome.navigations, 1);
    }

    #[test]
    fn rejected_submission_halts_until_retried() {
        let faults = Faults { rejected_submits: 1, ..Faults::default() };
        let outcome = TapPlayer::new(TapStrategy::AlwaysCorrect, Level::Intermediate, 3, faults).play();
        assert_eq!(outcome.rejected, 1);
        assert_eq!(outcome.retries, 1);
        assert_eq!(outcome.alerts.len(), 1);
        assert_eq!(outcome.tally.correct, 4);
    }
}
