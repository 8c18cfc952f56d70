use policyplay_core::{
    FinishTapRequest, Level, QuestionPhase, TapEffect, TapQuestion, TapResults, TapSession,
    TapSubmission, TapSubmitResponse, VirtualClock,
};
use std::collections::HashSet;

fn questions(n: usize) -> Vec<TapQuestion> {
    (0..n)
        .map(|i| TapQuestion {
            question: format!("Who approves exception request {i}?"),
            correct: format!("Security lead {i}"),
            wrong_options: vec![
                format!("Any manager {i}"),
                format!("The requester {i}"),
                format!("Nobody {i}"),
                format!("HR {i}"),
            ],
        })
        .collect()
}

/// Replays a session on a virtual clock against backend-like scoring.
struct Harness {
    session: TapSession,
    clock: VirtualClock,
    questions: Vec<TapQuestion>,
    answered: HashSet<usize>,
    backend_score: i32,
    submissions: Vec<TapSubmission>,
    finalizes: Vec<FinishTapRequest>,
    stored: Vec<TapResults>,
    navigations: usize,
    alerts: Vec<String>,
    fail_finalize: bool,
}

impl Harness {
    fn new(level: Level, count: usize, seed: u64) -> Self {
        let questions = questions(count);
        Self {
            session: TapSession::new("attempt-1", level, questions.clone(), seed),
            clock: VirtualClock::new(),
            questions,
            answered: HashSet::new(),
            backend_score: 0,
            submissions: Vec::new(),
            finalizes: Vec::new(),
            stored: Vec::new(),
            navigations: 0,
            alerts: Vec::new(),
            fail_finalize: false,
        }
    }

    fn start(&mut self) {
        let effects = self.session.start(self.clock.now_ms());
        self.run(effects);
    }

    fn score(&mut self, sub: &TapSubmission) -> TapSubmitResponse {
        let question = &self.questions[sub.question_index];
        if !self.answered.insert(sub.question_index) {
            return TapSubmitResponse {
                correct: false,
                points: 0,
                new_score: self.backend_score,
                correct_answer: question.correct.clone(),
                message: Some("Question already answered".into()),
            };
        }
        let correct = !sub.was_missed && sub.selected_option == question.correct;
        let points = match (sub.was_missed, correct) {
            (true, _) | (false, false) => -5,
            (false, true) if sub.time_taken < 2.0 => 12,
            (false, true) => 10,
        };
        self.backend_score += points;
        TapSubmitResponse {
            correct,
            points,
            new_score: self.backend_score,
            correct_answer: question.correct.clone(),
            message: None,
        }
    }

    fn run(&mut self, effects: Vec<TapEffect>) {
        for effect in self.clock.absorb(effects) {
            match effect {
                TapEffect::Submit(sub) => {
                    self.submissions.push(sub.clone());
                    let response = self.score(&sub);
                    let more = self.session.submit_succeeded(sub.question_index, &response);
                    self.run(more);
                }
                TapEffect::Finalize(request) => {
                    self.finalizes.push(request.clone());
                    let more = if self.fail_finalize {
                        self.session.finalize_failed("Cannot connect to backend server")
                    } else {
                        self.session.finalize_succeeded(TapResults {
                            attempt_id: String::new(),
                            final_score: self.backend_score,
                            correct_answers: 0,
                            wrong_answers: 0,
                            missed_answers: 0,
                            time_taken: request.final_time_taken,
                        })
                    };
                    self.run(more);
                }
                TapEffect::StoreResults(results) => self.stored.push(results),
                TapEffect::NavigateToResults { attempt_id } => {
                    assert_eq!(attempt_id, "attempt-1");
                    self.navigations += 1;
                }
                TapEffect::Alert(message) => self.alerts.push(message),
                TapEffect::Schedule { .. } => unreachable!("absorbed by the clock"),
            }
        }
    }

    fn advance_to(&mut self, until_ms: u64) {
        while let Some(timer) = self.clock.pop_due(until_ms) {
            let effects = self.session.fire(timer, self.clock.now_ms());
            self.run(effects);
        }
    }

    fn run_out(&mut self) {
        while let Some(timer) = self.clock.pop_next() {
            let effects = self.session.fire(timer, self.clock.now_ms());
            self.run(effects);
        }
    }

    fn ball_id(&self, correct: bool) -> usize {
        self.session
            .balls()
            .iter()
            .find(|b| b.correct == correct && b.is_live())
            .map(|b| b.id)
            .expect("a live ball of the requested kind")
    }

    fn tap(&mut self, correct: bool) {
        let id = self.ball_id(correct);
        let effects = self.session.tap(id, self.clock.now_ms());
        self.run(effects);
    }

    fn play_every_question(&mut self, correct: bool, tap_at_ms: u64) {
        for _ in 0..self.questions.len() {
            let target = self.clock.now_ms() + tap_at_ms;
            self.advance_to(target);
            if self.session.is_finished() {
                break;
            }
            self.tap(correct);
            while !matches!(
                self.session.phase(),
                QuestionPhase::Spawning | QuestionPhase::Finished
            ) {
                let Some(timer) = self.clock.pop_next() else { break };
                let effects = self.session.fire(timer, self.clock.now_ms());
                self.run(effects);
            }
        }
    }
}

#[test]
fn beginner_single_correct_tap_submits_once_and_advances() {
    let mut h = Harness::new(Level::Beginner, 2, 11);
    h.start();
    assert_eq!(h.session.balls().len(), 3);

    h.advance_to(1_000);
    assert!(h.session.balls().iter().all(|b| b.spawned));
    h.tap(true);

    assert_eq!(h.submissions.len(), 1);
    let sub = &h.submissions[0];
    assert!(!sub.was_missed);
    assert_eq!(sub.question_index, 0);
    assert!((sub.time_taken - 1.0).abs() < f64::EPSILON);
    assert_eq!(h.session.score(), 12);
    assert_eq!(h.session.phase(), QuestionPhase::Transition);

    // A second tap on the same question is dropped.
    let again = h.session.tap(0, 1_050);
    assert!(again.is_empty());

    h.advance_to(1_000 + 2_000 + 300);
    assert_eq!(h.session.index(), 1);
    assert_eq!(h.session.phase(), QuestionPhase::Spawning);
    assert_eq!(h.submissions.len(), 1);
}

#[test]
fn expert_countdown_beats_late_tap_with_a_single_missed_submission() {
    let mut h = Harness::new(Level::Expert, 1, 5);
    h.start();
    assert_eq!(h.session.balls().len(), 5);

    // Countdown starts at 1300 ms and reaches zero five ticks later.
    h.advance_to(6_300);
    assert_eq!(h.session.countdown(), Some(0));

    let late = h.ball_id(true);
    assert!(h.session.tap(late, 6_350).is_empty());

    h.advance_to(6_400);
    assert_eq!(h.submissions.len(), 1);
    assert!(h.submissions[0].was_missed);
    assert_eq!(h.submissions[0].selected_option, "");
    assert!(h.session.balls().is_empty());

    h.run_out();
    assert_eq!(h.submissions.len(), 1);
    assert_eq!(h.session.tally().missed, 1);
    assert_eq!(h.finalizes.len(), 1);
    assert_eq!(h.navigations, 1);
}

#[test]
fn untouched_balls_are_dealt_again_on_the_same_question() {
    let mut h = Harness::new(Level::Intermediate, 2, 9);
    h.start();

    // Four balls spawn 350 ms apart and fall for 10 s; respawn waits 1 s more.
    h.advance_to(350 * 3 + 10_000);
    assert_eq!(h.session.phase(), QuestionPhase::Regenerating);
    h.advance_to(350 * 3 + 10_000 + 1_000);

    assert_eq!(h.session.index(), 0);
    assert_eq!(h.session.rounds(), 2);
    assert_eq!(h.session.balls().len(), 4);
    assert!(h.submissions.is_empty());
}

#[test]
fn whole_game_finalizes_and_navigates_exactly_once() {
    let mut h = Harness::new(Level::Beginner, 3, 21);
    h.start();
    h.play_every_question(true, 2_500);
    h.run_out();

    assert_eq!(h.submissions.len(), 3);
    let indices: HashSet<usize> = h.submissions.iter().map(|s| s.question_index).collect();
    assert_eq!(indices.len(), 3);
    assert_eq!(h.finalizes.len(), 1);
    assert_eq!(h.stored.len(), 1);
    assert_eq!(h.navigations, 1);
    assert_eq!(h.session.tally().correct, 3);
    assert_eq!(h.stored[0].final_score, 30);
    assert_eq!(h.stored[0].attempt_id, "attempt-1");
    assert!(h.alerts.is_empty());
}

#[test]
fn wrong_taps_lose_points() {
    let mut h = Harness::new(Level::Intermediate, 2, 4);
    h.start();
    h.play_every_question(false, 1_500);
    h.run_out();

    let tally = h.session.tally();
    assert_eq!(tally.wrong, 2);
    assert_eq!(tally.correct + tally.wrong + tally.missed, 2);
    assert_eq!(h.session.score(), -10);
}

#[test]
fn failed_finalize_stores_local_tally() {
    let mut h = Harness::new(Level::Beginner, 1, 2);
    h.fail_finalize = true;
    h.start();
    h.play_every_question(true, 1_000);
    h.run_out();

    assert_eq!(h.finalizes.len(), 1);
    assert_eq!(h.stored.len(), 1);
    assert_eq!(h.stored[0].correct_answers, 1);
    assert_eq!(h.stored[0].final_score, 12);
    assert_eq!(h.stored[0].attempt_id, "attempt-1");
    assert_eq!(h.navigations, 1);
}
