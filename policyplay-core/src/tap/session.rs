use super::ball::{Ball, deal_balls};
use super::{Timer, TimerKind};
use crate::error::{ApiError, Recovery};
use crate::level::{Level, LevelConfig};
use crate::models::{FinishTapRequest, TapQuestion, TapResults, TapSubmission, TapSubmitResponse};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::BTreeSet;

/// Wait after every ball landed before the same question is dealt again.
pub const RESPAWN_DELAY_MS: u64 = 1_000;
/// Explosion time before the field is emptied after a tap.
pub const CLEAR_BALLS_DELAY_MS: u64 = 300;
/// How long the outcome stays on screen once the backend has scored it.
pub const FEEDBACK_HOLD_MS: u64 = 2_000;
pub const ADVANCE_DELAY_MS: u64 = 300;
pub const COUNTDOWN_TICK_MS: u64 = 1_000;
pub const EXPIRY_GRACE_MS: u64 = 100;
pub const NAVIGATE_DELAY_MS: u64 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionPhase {
    Idle,
    Spawning,
    AwaitingAnswer,
    Answered,
    Missed,
    /// Every ball landed untouched; the same question is dealt again shortly.
    Regenerating,
    Transition,
    /// A submission failed; nothing moves until it is retried.
    Halted,
    Finished,
}

impl QuestionPhase {
    const fn accepts_input(self) -> bool {
        matches!(self, Self::Spawning | Self::AwaitingAnswer)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub correct: u32,
    pub wrong: u32,
    pub missed: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Explosion {
    pub ball_id: usize,
    pub correct: bool,
}

/// Side effects requested by the session. Hosts run them in order.
#[derive(Debug, Clone, PartialEq)]
pub enum TapEffect {
    Schedule { timer: Timer, delay_ms: u64 },
    Submit(TapSubmission),
    Finalize(FinishTapRequest),
    StoreResults(TapResults),
    NavigateToResults { attempt_id: String },
    Alert(String),
}

#[derive(Debug, Clone)]
pub struct TapSession {
    attempt_id: String,
    level: Level,
    config: LevelConfig,
    questions: Vec<TapQuestion>,
    index: usize,
    phase: QuestionPhase,
    balls: Vec<Ball>,
    epoch: u64,
    rng: ChaCha8Rng,
    countdown: Option<u32>,
    timer_expired: bool,
    submitting: BTreeSet<usize>,
    pending: Option<TapSubmission>,
    score: i32,
    tally: Tally,
    started_at_ms: u64,
    rounds: u32,
    explosion: Option<Explosion>,
    confetti: bool,
    feedback: Option<TapSubmitResponse>,
    alert: Option<String>,
    finalize_requested: bool,
    elapsed_secs: u64,
    results: Option<TapResults>,
    navigated: bool,
}

impl TapSession {
    #[must_use]
    pub fn new(
        attempt_id: impl Into<String>,
        level: Level,
        questions: Vec<TapQuestion>,
        seed: u64,
    ) -> Self {
        Self {
            attempt_id: attempt_id.into(),
            level,
            config: level.config(),
            questions,
            index: 0,
            phase: QuestionPhase::Idle,
            balls: Vec::new(),
            epoch: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
            countdown: None,
            timer_expired: false,
            submitting: BTreeSet::new(),
            pending: None,
            score: 0,
            tally: Tally::default(),
            started_at_ms: 0,
            rounds: 0,
            explosion: None,
            confetti: false,
            feedback: None,
            alert: None,
            finalize_requested: false,
            elapsed_secs: 0,
            results: None,
            navigated: false,
        }
    }

    // --- accessors -------------------------------------------------------

    #[must_use]
    pub fn attempt_id(&self) -> &str {
        &self.attempt_id
    }

    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    #[must_use]
    pub const fn config(&self) -> &LevelConfig {
        &self.config
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&TapQuestion> {
        self.questions.get(self.index)
    }

    #[must_use]
    pub const fn phase(&self) -> QuestionPhase {
        self.phase
    }

    #[must_use]
    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    #[must_use]
    pub const fn countdown(&self) -> Option<u32> {
        self.countdown
    }

    #[must_use]
    pub const fn score(&self) -> i32 {
        self.score
    }

    #[must_use]
    pub const fn tally(&self) -> Tally {
        self.tally
    }

    #[must_use]
    pub const fn explosion(&self) -> Option<Explosion> {
        self.explosion
    }

    #[must_use]
    pub const fn confetti(&self) -> bool {
        self.confetti
    }

    #[must_use]
    pub const fn feedback(&self) -> Option<&TapSubmitResponse> {
        self.feedback.as_ref()
    }

    #[must_use]
    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    #[must_use]
    pub const fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Times the current question has been dealt.
    #[must_use]
    pub const fn rounds(&self) -> u32 {
        self.rounds
    }

    #[must_use]
    pub fn is_submitting(&self, question_index: usize) -> bool {
        self.submitting.contains(&question_index)
    }

    #[must_use]
    pub const fn results(&self) -> Option<&TapResults> {
        self.results.as_ref()
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self.phase, QuestionPhase::Finished)
    }

    /// Results built from what this client has seen, for when the backend
    /// cannot be asked.
    #[must_use]
    pub fn local_results(&self) -> TapResults {
        TapResults {
            attempt_id: self.attempt_id.clone(),
            final_score: self.score,
            correct_answers: self.tally.correct,
            wrong_answers: self.tally.wrong,
            missed_answers: self.tally.missed,
            time_taken: self.elapsed_secs,
        }
    }

    // --- inputs ----------------------------------------------------------

    /// Start the game clock and deal the first question.
    pub fn start(&mut self, now_ms: u64) -> Vec<TapEffect> {
        if self.phase != QuestionPhase::Idle {
            return Vec::new();
        }
        self.started_at_ms = now_ms;
        log::info!(
            "policy tap attempt {} started: {} questions at {}",
            self.attempt_id,
            self.questions.len(),
            self.level
        );
        self.begin_question(now_ms)
    }

    /// Handle a timer the host scheduled earlier.
    pub fn fire(&mut self, timer: Timer, now_ms: u64) -> Vec<TapEffect> {
        if timer.epoch != self.epoch {
            return Vec::new();
        }
        match timer.kind {
            TimerKind::SpawnBall(id) => self.spawn_ball(id),
            TimerKind::BallLanded(id) => self.ball_landed(id, now_ms),
            TimerKind::CountdownStart => self.start_countdown(),
            TimerKind::CountdownTick => self.tick_countdown(),
            TimerKind::ReportMissed => self.report_missed(now_ms),
            TimerKind::Respawn => {
                if self.phase == QuestionPhase::Regenerating {
                    self.begin_question(now_ms)
                } else {
                    Vec::new()
                }
            }
            TimerKind::ClearBalls => {
                self.balls.clear();
                Vec::new()
            }
            TimerKind::ClearField => self.clear_field(),
            TimerKind::Advance => self.advance(now_ms),
            TimerKind::Navigate => self.navigate(),
        }
    }

    /// The player tapped ball `ball_id`.
    pub fn tap(&mut self, ball_id: usize, now_ms: u64) -> Vec<TapEffect> {
        if !self.phase.accepts_input() || self.timer_expired || self.is_submitting(self.index) {
            return Vec::new();
        }
        let Some(ball) = self.balls.iter().find(|b| b.id == ball_id && b.is_live()) else {
            return Vec::new();
        };
        let option = ball.option.clone();
        let correct = ball.correct;

        self.phase = QuestionPhase::Answered;
        self.epoch += 1;
        self.countdown = None;
        self.explosion = Some(Explosion { ball_id, correct });
        self.confetti = correct;
        log::debug!(
            "question {} tapped '{option}' (correct: {correct})",
            self.index
        );

        let submission = self.submission(option, false, now_ms);
        vec![
            self.schedule(TimerKind::ClearBalls, CLEAR_BALLS_DELAY_MS),
            TapEffect::Submit(submission),
        ]
    }

    /// The backend scored the submission for `question_index`.
    pub fn submit_succeeded(
        &mut self,
        question_index: usize,
        response: &TapSubmitResponse,
    ) -> Vec<TapEffect> {
        if question_index != self.index {
            return Vec::new();
        }
        let Some(pending) = self.pending.take() else {
            return Vec::new();
        };
        if pending.was_missed {
            self.tally.missed += 1;
        } else if response.correct {
            self.tally.correct += 1;
        } else {
            self.tally.wrong += 1;
        }
        if let Some(message) = &response.message {
            log::warn!("question {question_index}: {message}");
        }
        self.score = response.new_score;
        self.feedback = Some(response.clone());
        self.alert = None;
        self.phase = QuestionPhase::Transition;
        vec![self.schedule(TimerKind::ClearField, FEEDBACK_HOLD_MS)]
    }

    /// The submission for `question_index` failed; halt until retried.
    pub fn submit_failed(&mut self, question_index: usize, message: &str) -> Vec<TapEffect> {
        if question_index != self.index || self.pending.is_none() {
            return Vec::new();
        }
        log::error!("failed to submit answer for question {question_index}: {message}");
        self.phase = QuestionPhase::Halted;
        self.alert = Some(message.to_string());
        vec![TapEffect::Alert(message.to_string())]
    }

    /// The backend call for `question_index` failed with `err`.
    ///
    /// Halts like [`Self::submit_failed`]. Auth failures are left to the
    /// relogin or admin-required redirect, so no alert is raised for them.
    pub fn submit_errored(&mut self, question_index: usize, err: &ApiError) -> Vec<TapEffect> {
        let mut effects =
            self.submit_failed(question_index, &format!("Failed to submit answer: {err}"));
        if err.recovery() != Recovery::Alert {
            self.alert = None;
            effects.retain(|effect| !matches!(effect, TapEffect::Alert(_)));
        }
        effects
    }

    /// Re-send the submission that failed.
    pub fn retry_submit(&mut self) -> Vec<TapEffect> {
        if self.phase != QuestionPhase::Halted {
            return Vec::new();
        }
        let Some(pending) = self.pending.clone() else {
            return Vec::new();
        };
        self.phase = if pending.was_missed {
            QuestionPhase::Missed
        } else {
            QuestionPhase::Answered
        };
        self.alert = None;
        vec![TapEffect::Submit(pending)]
    }

    /// The backend closed the attempt.
    pub fn finalize_succeeded(&mut self, mut results: TapResults) -> Vec<TapEffect> {
        if !self.finalize_requested || self.results.is_some() {
            return Vec::new();
        }
        if results.time_taken == 0 {
            results.time_taken = self.elapsed_secs;
        }
        self.hand_off(results)
    }

    /// Closing the attempt failed; hand off what this client tallied.
    pub fn finalize_failed(&mut self, message: &str) -> Vec<TapEffect> {
        if !self.finalize_requested || self.results.is_some() {
            return Vec::new();
        }
        log::error!("failed to finish attempt {}: {message}", self.attempt_id);
        self.hand_off(self.local_results())
    }

    // --- transitions -----------------------------------------------------

    fn schedule(&self, kind: TimerKind, delay_ms: u64) -> TapEffect {
        TapEffect::Schedule {
            timer: Timer {
                epoch: self.epoch,
                kind,
            },
            delay_ms,
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn submission(&mut self, selected_option: String, was_missed: bool, now_ms: u64) -> TapSubmission {
        self.submitting.insert(self.index);
        let submission = TapSubmission {
            attempt_id: self.attempt_id.clone(),
            question_index: self.index,
            selected_option,
            time_taken: now_ms.saturating_sub(self.started_at_ms) as f64 / 1_000.0,
            was_missed,
        };
        self.pending = Some(submission.clone());
        submission
    }

    fn begin_question(&mut self, now_ms: u64) -> Vec<TapEffect> {
        self.epoch += 1;
        let Some(question) = self.questions.get(self.index).filter(|q| q.is_playable()) else {
            if self.index < self.questions.len() {
                log::error!("question {} is not playable; ending game", self.index);
            }
            return self.finish(now_ms);
        };

        if self.phase == QuestionPhase::Regenerating {
            self.rounds += 1;
        } else {
            self.rounds = 1;
        }
        self.balls = deal_balls(question, &self.config, &mut self.rng);
        self.phase = QuestionPhase::Spawning;
        self.countdown = None;
        self.timer_expired = false;
        self.explosion = None;
        self.confetti = false;

        let mut effects: Vec<TapEffect> = self
            .balls
            .iter()
            .map(|ball| self.schedule(TimerKind::SpawnBall(ball.id), ball.spawn_offset_ms))
            .collect();
        if self.config.has_countdown() {
            let delay = self.config.countdown_start_ms(self.balls.len());
            effects.push(self.schedule(TimerKind::CountdownStart, delay));
        }
        effects
    }

    fn spawn_ball(&mut self, id: usize) -> Vec<TapEffect> {
        if !self.phase.accepts_input() {
            return Vec::new();
        }
        let Some(ball) = self.balls.iter_mut().find(|b| b.id == id && !b.spawned) else {
            return Vec::new();
        };
        ball.spawned = true;
        let fall_ms = ball.fall_ms;
        if self.balls.iter().all(|b| b.spawned) {
            self.phase = QuestionPhase::AwaitingAnswer;
        }
        vec![self.schedule(TimerKind::BallLanded(id), fall_ms)]
    }

    fn ball_landed(&mut self, id: usize, now_ms: u64) -> Vec<TapEffect> {
        if !self.phase.accepts_input() {
            return Vec::new();
        }
        if let Some(ball) = self.balls.iter_mut().find(|b| b.id == id) {
            ball.landed = true;
        }
        if !self.balls.iter().all(|b| b.spawned && b.landed) {
            return Vec::new();
        }
        if self.config.has_countdown() {
            return self.report_missed(now_ms);
        }
        log::debug!("question {} fell through; dealing again", self.index);
        self.phase = QuestionPhase::Regenerating;
        vec![self.schedule(TimerKind::Respawn, RESPAWN_DELAY_MS)]
    }

    fn start_countdown(&mut self) -> Vec<TapEffect> {
        let Some(secs) = self.config.countdown_secs else {
            return Vec::new();
        };
        if !self.phase.accepts_input() || !self.balls.iter().any(|b| b.spawned) {
            return Vec::new();
        }
        self.countdown = Some(secs);
        vec![self.schedule(TimerKind::CountdownTick, COUNTDOWN_TICK_MS)]
    }

    fn tick_countdown(&mut self) -> Vec<TapEffect> {
        if !self.phase.accepts_input() || self.timer_expired {
            return Vec::new();
        }
        let Some(remaining) = self.countdown else {
            return Vec::new();
        };
        let remaining = remaining.saturating_sub(1);
        self.countdown = Some(remaining);
        if remaining == 0 {
            self.timer_expired = true;
            vec![self.schedule(TimerKind::ReportMissed, EXPIRY_GRACE_MS)]
        } else {
            vec![self.schedule(TimerKind::CountdownTick, COUNTDOWN_TICK_MS)]
        }
    }

    fn report_missed(&mut self, now_ms: u64) -> Vec<TapEffect> {
        if !self.phase.accepts_input() || self.is_submitting(self.index) {
            return Vec::new();
        }
        self.phase = QuestionPhase::Missed;
        self.epoch += 1;
        self.countdown = None;
        self.balls.clear();
        log::debug!("question {} missed", self.index);
        let submission = self.submission(String::new(), true, now_ms);
        vec![TapEffect::Submit(submission)]
    }

    fn clear_field(&mut self) -> Vec<TapEffect> {
        if self.phase != QuestionPhase::Transition {
            return Vec::new();
        }
        self.balls.clear();
        self.explosion = None;
        self.confetti = false;
        vec![self.schedule(TimerKind::Advance, ADVANCE_DELAY_MS)]
    }

    fn advance(&mut self, now_ms: u64) -> Vec<TapEffect> {
        if self.phase != QuestionPhase::Transition {
            return Vec::new();
        }
        self.submitting.remove(&self.index);
        self.feedback = None;
        if self.index + 1 < self.questions.len() {
            self.index += 1;
            self.begin_question(now_ms)
        } else {
            self.finish(now_ms)
        }
    }

    fn finish(&mut self, now_ms: u64) -> Vec<TapEffect> {
        if self.finalize_requested {
            return Vec::new();
        }
        self.finalize_requested = true;
        self.phase = QuestionPhase::Finished;
        self.balls.clear();
        self.countdown = None;
        self.elapsed_secs = now_ms.saturating_sub(self.started_at_ms) / 1_000;
        log::info!(
            "policy tap attempt {} finished after {}s with score {}",
            self.attempt_id,
            self.elapsed_secs,
            self.score
        );
        vec![TapEffect::Finalize(FinishTapRequest {
            attempt_id: self.attempt_id.clone(),
            final_time_taken: self.elapsed_secs,
        })]
    }

    fn hand_off(&mut self, mut results: TapResults) -> Vec<TapEffect> {
        if results.attempt_id.is_empty() {
            results.attempt_id.clone_from(&self.attempt_id);
        }
        self.results = Some(results.clone());
        vec![
            TapEffect::StoreResults(results),
            self.schedule(TimerKind::Navigate, NAVIGATE_DELAY_MS),
        ]
    }

    fn navigate(&mut self) -> Vec<TapEffect> {
        if self.navigated || self.results.is_none() {
            return Vec::new();
        }
        self.navigated = true;
        vec![TapEffect::NavigateToResults {
            attempt_id: self.attempt_id.clone(),
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn questions(n: usize) -> Vec<TapQuestion> {
        (0..n)
            .map(|i| TapQuestion {
                question: format!("Question {i}"),
                correct: format!("right-{i}"),
                wrong_options: vec![
                    format!("wrong-{i}-a"),
                    format!("wrong-{i}-b"),
                    format!("wrong-{i}-c"),
                    format!("wrong-{i}-d"),
                ],
            })
            .collect()
    }

    fn scheduled(effects: &[TapEffect]) -> Vec<TimerKind> {
        effects
            .iter()
            .filter_map(|e| match e {
                TapEffect::Schedule { timer, .. } => Some(timer.kind),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn start_schedules_staggered_spawns() {
        let mut session = TapSession::new("a1", Level::Intermediate, questions(2), 3);
        let effects = session.start(0);
        assert_eq!(session.phase(), QuestionPhase::Spawning);
        assert_eq!(
            scheduled(&effects),
            vec![
                TimerKind::SpawnBall(0),
                TimerKind::SpawnBall(1),
                TimerKind::SpawnBall(2),
                TimerKind::SpawnBall(3)
            ]
        );
        assert!(session.start(10).is_empty());
    }

    #[test]
    fn expert_start_also_schedules_countdown() {
        let mut session = TapSession::new("a1", Level::Expert, questions(1), 3);
        let effects = session.start(0);
        let countdown = effects.iter().find_map(|e| match e {
            TapEffect::Schedule { timer, delay_ms } if timer.kind == TimerKind::CountdownStart => {
                Some(*delay_ms)
            }
            _ => None,
        });
        assert_eq!(countdown, Some(1_300));
    }

    #[test]
    fn stale_timers_are_ignored() {
        let mut session = TapSession::new("a1", Level::Beginner, questions(1), 3);
        session.start(0);
        let stale = Timer {
            epoch: session.epoch() - 1,
            kind: TimerKind::SpawnBall(0),
        };
        assert!(session.fire(stale, 0).is_empty());
        assert!(session.balls().iter().all(|b| !b.spawned));
    }

    #[test]
    fn unspawned_balls_cannot_be_tapped() {
        let mut session = TapSession::new("a1", Level::Beginner, questions(1), 3);
        session.start(0);
        assert!(session.tap(0, 10).is_empty());
        assert_eq!(session.phase(), QuestionPhase::Spawning);
    }

    #[test]
    fn failed_submission_halts_until_retry() {
        let mut session = TapSession::new("a1", Level::Beginner, questions(1), 3);
        session.start(0);
        let epoch = session.epoch();
        session.fire(
            Timer {
                epoch,
                kind: TimerKind::SpawnBall(0),
            },
            0,
        );
        let effects = session.tap(0, 500);
        assert!(effects.iter().any(|e| matches!(e, TapEffect::Submit(_))));

        let alert = session.submit_failed(0, "Server error: 500");
        assert_eq!(alert, vec![TapEffect::Alert("Server error: 500".into())]);
        assert_eq!(session.phase(), QuestionPhase::Halted);
        assert!(session.tap(1, 600).is_empty());

        let retry = session.retry_submit();
        let [TapEffect::Submit(sub)] = retry.as_slice() else {
            panic!("expected a single resubmission, got {retry:?}");
        };
        assert_eq!(sub.question_index, 0);
        assert!(!sub.was_missed);
        assert!(session.retry_submit().is_empty());
    }

    fn tapped_first_ball(session: &mut TapSession) {
        session.start(0);
        let epoch = session.epoch();
        session.fire(
            Timer {
                epoch,
                kind: TimerKind::SpawnBall(0),
            },
            0,
        );
        session.tap(0, 500);
    }

    #[test]
    fn expired_login_halts_without_an_alert() {
        let mut session = TapSession::new("a1", Level::Beginner, questions(1), 3);
        tapped_first_ball(&mut session);

        let err = ApiError::Unauthorized {
            detail: "Could not validate credentials".into(),
        };
        assert!(session.submit_errored(0, &err).is_empty());
        assert_eq!(session.phase(), QuestionPhase::Halted);
        assert_eq!(session.alert(), None);
    }

    #[test]
    fn missing_admin_rights_halt_without_an_alert() {
        let mut session = TapSession::new("a1", Level::Beginner, questions(1), 3);
        tapped_first_ball(&mut session);

        let err = ApiError::Forbidden {
            detail: "Admin access required".into(),
        };
        assert!(session.submit_errored(0, &err).is_empty());
        assert_eq!(session.phase(), QuestionPhase::Halted);
    }

    #[test]
    fn server_errors_still_alert() {
        let mut session = TapSession::new("a1", Level::Beginner, questions(1), 3);
        tapped_first_ball(&mut session);

        let err = ApiError::Server {
            status: 500,
            detail: "Server error: 500".into(),
        };
        assert_eq!(
            session.submit_errored(0, &err),
            vec![TapEffect::Alert(
                "Failed to submit answer: Server error: 500".into()
            )]
        );
        assert_eq!(session.phase(), QuestionPhase::Halted);
    }

    #[test]
    fn empty_game_finishes_immediately() {
        let mut session = TapSession::new("a1", Level::Beginner, Vec::new(), 3);
        let effects = session.start(2_000);
        assert_eq!(
            effects,
            vec![TapEffect::Finalize(FinishTapRequest {
                attempt_id: "a1".into(),
                final_time_taken: 0,
            })]
        );
        assert!(session.is_finished());
    }

    #[test]
    fn finalize_failure_hands_off_local_tally() {
        let mut session = TapSession::new("a1", Level::Beginner, Vec::new(), 3);
        session.start(0);
        let effects = session.finalize_failed("offline");
        assert!(matches!(
            effects.first(),
            Some(TapEffect::StoreResults(r)) if r.final_score == 0 && r.answered() == 0
        ));
        assert_eq!(scheduled(&effects), vec![TimerKind::Navigate]);
        assert!(session.finalize_succeeded(TapResults::default()).is_empty());
    }
}
