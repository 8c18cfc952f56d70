//! Named QA scenarios: a plan to play plus the expectations its outcome must meet.

use crate::backend::Faults;
use crate::logic::{EscapeOutcome, EscapeStrategy, TapOutcome, TapStrategy};
use anyhow::{Result, ensure};
use policyplay_core::Level;

#[derive(Debug, Clone, Copy)]
pub enum Plan {
    Tap {
        strategy: TapStrategy,
        level: Level,
        faults: Faults,
    },
    Escape {
        strategy: EscapeStrategy,
        faults: Faults,
    },
}

#[derive(Debug, Clone)]
pub enum Outcome {
    Tap(TapOutcome),
    Escape(EscapeOutcome),
}

pub type Expectation = fn(&Outcome) -> Result<()>;

pub struct Scenario {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub plan: Plan,
    pub expectations: Vec<Expectation>,
}

const fn tap(strategy: TapStrategy, level: Level) -> Plan {
    Plan::Tap {
        strategy,
        level,
        faults: Faults {
            rejected_submits: 0,
            fail_finalize: false,
        },
    }
}

const fn escape(strategy: EscapeStrategy) -> Plan {
    Plan::Escape {
        strategy,
        faults: Faults {
            rejected_submits: 0,
            fail_finalize: false,
        },
    }
}

fn catalog() -> Vec<Scenario> {
    vec![
        Scenario {
            key: "tap-correct-beginner",
            name: "Policy Tap: every answer right",
            description: "Beginner taps the correct ball on each question",
            plan: tap(TapStrategy::AlwaysCorrect, Level::Beginner),
            expectations: vec![all_correct, fast_bonus_earned],
        },
        Scenario {
            key: "tap-correct-expert",
            name: "Policy Tap: expert beats the countdown",
            description: "Expert taps the correct ball before the countdown runs out",
            plan: tap(TapStrategy::AlwaysCorrect, Level::Expert),
            expectations: vec![all_correct],
        },
        Scenario {
            key: "tap-wrong-intermediate",
            name: "Policy Tap: every answer wrong",
            description: "Intermediate taps a wrong ball on each question",
            plan: tap(TapStrategy::AlwaysWrong, Level::Intermediate),
            expectations: vec![all_wrong],
        },
        Scenario {
            key: "tap-idle-beginner",
            name: "Policy Tap: untouched balls are dealt again",
            description: "Beginner never taps; the first question keeps regenerating",
            plan: tap(TapStrategy::Idle, Level::Beginner),
            expectations: vec![regenerates_without_submitting],
        },
        Scenario {
            key: "tap-idle-expert",
            name: "Policy Tap: countdown misses every question",
            description: "Expert never taps; each question is submitted as missed",
            plan: tap(TapStrategy::Idle, Level::Expert),
            expectations: vec![all_missed],
        },
        Scenario {
            key: "tap-late-expert",
            name: "Policy Tap: taps after time-up are ignored",
            description: "Expert taps only once the countdown reads zero",
            plan: tap(TapStrategy::LateTapper, Level::Expert),
            expectations: vec![all_missed, late_taps_ignored],
        },
        Scenario {
            key: "tap-flaky-submit",
            name: "Policy Tap: rejected submission is retried",
            description: "The first submission fails, the game halts, the retry succeeds",
            plan: Plan::Tap {
                strategy: TapStrategy::AlwaysCorrect,
                level: Level::Intermediate,
                faults: Faults {
                    rejected_submits: 1,
                    fail_finalize: false,
                },
            },
            expectations: vec![all_correct, halted_once],
        },
        Scenario {
            key: "tap-offline-finish",
            name: "Policy Tap: finish falls back to the local tally",
            description: "Closing the attempt fails; results come from the client's tally",
            plan: Plan::Tap {
                strategy: TapStrategy::AlwaysCorrect,
                level: Level::Beginner,
                faults: Faults {
                    rejected_submits: 0,
                    fail_finalize: true,
                },
            },
            expectations: vec![all_correct, local_results_handed_off],
        },
        Scenario {
            key: "escape-solver",
            name: "Escape Room: all five rooms solved",
            description: "A player who knows every answer clears the escape room",
            plan: escape(EscapeStrategy::Solver),
            expectations: vec![all_rooms_done, finish_bonus_applied],
        },
        Scenario {
            key: "escape-guesser",
            name: "Escape Room: every room failed",
            description: "Wrong answers fail each room but the player still walks through",
            plan: escape(EscapeStrategy::Guesser),
            expectations: vec![all_rooms_failed],
        },
        Scenario {
            key: "escape-flaky-submit",
            name: "Escape Room: rejected room is resubmitted",
            description: "The first room submission fails and is sent again",
            plan: Plan::Escape {
                strategy: EscapeStrategy::Solver,
                faults: Faults {
                    rejected_submits: 1,
                    fail_finalize: false,
                },
            },
            expectations: vec![all_rooms_done, resubmitted_once],
        },
    ]
}

/// `(key, description)` for every scenario, plus the `smoke` and `all` groups.
pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    let mut entries = vec![
        ("smoke", "Quick pass: one tap game and one escape run"),
        ("all", "Every scenario below"),
    ];
    entries.extend(catalog().into_iter().map(|s| (s.key, s.description)));
    entries
}

/// Expand group names and drop duplicates, keeping order.
pub fn expand_scenarios(requested: &[String]) -> Vec<String> {
    let mut keys: Vec<String> = Vec::new();
    for name in requested {
        let group: Vec<String> = match name.as_str() {
            "all" => catalog().into_iter().map(|s| s.key.to_string()).collect(),
            "smoke" => vec!["tap-correct-beginner".into(), "escape-solver".into()],
            other => vec![other.to_string()],
        };
        for key in group {
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
    }
    keys
}

pub fn get_scenario(key: &str) -> Option<Scenario> {
    catalog().into_iter().find(|s| s.key == key)
}

// --- expectations ----------------------------------------------------------

fn tap_outcome(outcome: &Outcome) -> Result<&TapOutcome> {
    match outcome {
        Outcome::Tap(tap) => Ok(tap),
        Outcome::Escape(_) => anyhow::bail!("expected a policy tap run"),
    }
}

fn escape_outcome(outcome: &Outcome) -> Result<&EscapeOutcome> {
    match outcome {
        Outcome::Escape(escape) => Ok(escape),
        Outcome::Tap(_) => anyhow::bail!("expected an escape room run"),
    }
}

fn all_correct(outcome: &Outcome) -> Result<()> {
    let tap = tap_outcome(outcome)?;
    ensure!(tap.finished, "game did not finish after {} steps", tap.steps);
    let n = u32::try_from(tap.question_count)?;
    ensure!(tap.tally.correct == n, "correct {} of {n}", tap.tally.correct);
    Ok(())
}

/// `time_taken` runs from game start, so only answers sent inside the first
/// two seconds of play earn the bonus.
fn fast_bonus_earned(outcome: &Outcome) -> Result<()> {
    let tap = tap_outcome(outcome)?;
    let first = tap.accepted.first().ok_or_else(|| anyhow::anyhow!("nothing submitted"))?;
    ensure!(first.time_taken < 2.0, "first answer took {:.2}s", first.time_taken);
    let expected: i32 = tap
        .accepted
        .iter()
        .map(|s| if s.time_taken < 2.0 { 12 } else { 10 })
        .sum();
    ensure!(
        tap.client_score == expected,
        "score {} but answers at {:?}s are worth {expected}",
        tap.client_score,
        tap.accepted.iter().map(|s| s.time_taken).collect::<Vec<_>>()
    );
    Ok(())
}

fn all_wrong(outcome: &Outcome) -> Result<()> {
    let tap = tap_outcome(outcome)?;
    ensure!(tap.finished, "game did not finish");
    let n = u32::try_from(tap.question_count)?;
    ensure!(tap.tally.wrong == n, "wrong {} of {n}", tap.tally.wrong);
    ensure!(tap.client_score == -5 * i32::try_from(n)?, "score {}", tap.client_score);
    Ok(())
}

fn all_missed(outcome: &Outcome) -> Result<()> {
    let tap = tap_outcome(outcome)?;
    ensure!(tap.finished, "game did not finish");
    let n = tap.question_count;
    ensure!(
        tap.tally.missed == u32::try_from(n)?,
        "missed {} of {n}",
        tap.tally.missed
    );
    ensure!(
        tap.accepted.iter().all(|s| s.was_missed && s.selected_option.is_empty()),
        "a missed submission carried an answer"
    );
    Ok(())
}

fn late_taps_ignored(outcome: &Outcome) -> Result<()> {
    let tap = tap_outcome(outcome)?;
    ensure!(
        tap.late_taps_ignored == tap.question_count,
        "{} of {} late taps ignored",
        tap.late_taps_ignored,
        tap.question_count
    );
    Ok(())
}

fn regenerates_without_submitting(outcome: &Outcome) -> Result<()> {
    let tap = tap_outcome(outcome)?;
    ensure!(tap.accepted.is_empty(), "idle player submitted {} answers", tap.accepted.len());
    ensure!(tap.final_index == 0, "question advanced to {}", tap.final_index);
    ensure!(tap.rounds >= 3, "only {} deals", tap.rounds);
    ensure!(!tap.finished, "idle beginner finished");
    Ok(())
}

fn halted_once(outcome: &Outcome) -> Result<()> {
    let tap = tap_outcome(outcome)?;
    ensure!(tap.rejected == 1, "{} rejected submissions", tap.rejected);
    ensure!(tap.retries == 1, "{} retries", tap.retries);
    ensure!(tap.alerts.len() == 1, "{} alerts", tap.alerts.len());
    Ok(())
}

fn local_results_handed_off(outcome: &Outcome) -> Result<()> {
    let tap = tap_outcome(outcome)?;
    let stored = tap.stored.first().ok_or_else(|| anyhow::anyhow!("no stored results"))?;
    ensure!(stored.final_score == tap.client_score, "stored score {}", stored.final_score);
    ensure!(stored.correct_answers == tap.tally.correct, "stored tally differs");
    Ok(())
}

fn all_rooms_done(outcome: &Outcome) -> Result<()> {
    let escape = escape_outcome(outcome)?;
    ensure!(escape.finished, "escape did not finish");
    ensure!(escape.done_rooms == 5, "{} rooms done", escape.done_rooms);
    Ok(())
}

fn finish_bonus_applied(outcome: &Outcome) -> Result<()> {
    let escape = escape_outcome(outcome)?;
    let results = escape.results.as_ref().ok_or_else(|| anyhow::anyhow!("no results"))?;
    let time = escape.finish_time.unwrap_or_default();
    let bonus = 100_i32.saturating_sub(i32::try_from(time / 10)?).max(0);
    ensure!(
        results.final_score == escape.client_score + bonus,
        "final {} != rooms {} + bonus {bonus}",
        results.final_score,
        escape.client_score
    );
    Ok(())
}

fn all_rooms_failed(outcome: &Outcome) -> Result<()> {
    let escape = escape_outcome(outcome)?;
    ensure!(escape.finished, "escape did not finish");
    ensure!(escape.failed_rooms == 5, "{} rooms failed", escape.failed_rooms);
    ensure!(escape.client_score == -25, "score {}", escape.client_score);
    Ok(())
}

fn resubmitted_once(outcome: &Outcome) -> Result<()> {
    let escape = escape_outcome(outcome)?;
    ensure!(escape.rejected == 1, "{} rejected", escape.rejected);
    ensure!(escape.submissions.len() == 6, "{} submissions", escape.submissions.len());
    ensure!(escape.alerts.len() == 1, "{} alerts", escape.alerts.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_expand_without_duplicates() {
        let keys = expand_scenarios(&["smoke".into(), "escape-solver".into()]);
        assert_eq!(keys, vec!["tap-correct-beginner", "escape-solver"]);
        let all = expand_scenarios(&["all".into()]);
        assert_eq!(all.len(), catalog().len());
    }

    #[test]
    fn only_the_opening_answer_earns_the_speed_bonus() {
        let scenario = get_scenario("tap-correct-beginner").unwrap();
        let Plan::Tap { strategy, level, faults } = scenario.plan else {
            panic!("tap scenario");
        };
        let outcome = crate::logic::TapPlayer::new(strategy, level, 1, faults).play();
        assert!(outcome.accepted[0].time_taken < 2.0);
        assert!(outcome.accepted[1..].iter().all(|s| s.time_taken >= 2.0));
        assert_eq!(outcome.client_score, 12 + 10 * 2);
        fast_bonus_earned(&Outcome::Tap(outcome)).unwrap();
    }

    #[test]
    fn every_listed_key_resolves() {
        for (key, _) in list_scenarios() {
            if key != "smoke" && key != "all" {
                assert!(get_scenario(key).is_some(), "{key}");
            }
        }
    }
}
