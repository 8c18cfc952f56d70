use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use crate::logic::{EscapePlayer, TapOutcome, TapPlayer};
use crate::scenarios::{Outcome, Plan, Scenario};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub seed: u64,
    pub passed: bool,
    pub iterations_run: usize,
    pub successful_iterations: usize,
    pub failures: Vec<String>,
    #[serde(with = "duration_serde")]
    pub average_duration: Duration,
}

pub struct LogicTester {
    verbose: bool,
}

impl LogicTester {
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn run_scenario(
        &self,
        scenario: &Scenario,
        seeds: &[u64],
        iterations: usize,
    ) -> Vec<ScenarioResult> {
        seeds
            .iter()
            .map(|&seed| {
                if self.verbose {
                    println!(
                        "🧪 Testing scenario: {} (seed: {seed})",
                        scenario.name.bright_white()
                    );
                }
                self.run_single_scenario(scenario, seed, iterations)
            })
            .collect()
    }

    fn run_single_scenario(
        &self,
        scenario: &Scenario,
        seed: u64,
        iterations: usize,
    ) -> ScenarioResult {
        let mut successes = 0;
        let mut failures = Vec::new();
        let mut durations = Vec::new();

        for i in 0..iterations {
            let iteration_seed = seed.wrapping_add(u64::try_from(i).unwrap_or(u64::MAX));
            let start_time = Instant::now();
            let verdict = play(scenario.plan, iteration_seed).and_then(|outcome| {
                check_invariants(&outcome)?;
                scenario
                    .expectations
                    .iter()
                    .try_for_each(|expectation| expectation(&outcome))
            });
            let duration = start_time.elapsed();

            match verdict {
                Ok(()) => {
                    successes += 1;
                    durations.push(duration);
                    if self.verbose {
                        println!(
                            "  ✅ Iteration {}/{iterations} passed ({duration:?})",
                            i + 1
                        );
                    }
                }
                Err(err) => {
                    log::debug!("{} seed {iteration_seed} failed: {err:#}", scenario.key);
                    let message = format!("Iteration {} (seed {iteration_seed}): {err:#}", i + 1);
                    if self.verbose {
                        println!("  ❌ {}", message.clone().red());
                    }
                    failures.push(message);
                }
            }
        }

        let average_duration = if durations.is_empty() {
            Duration::ZERO
        } else {
            durations.iter().sum::<Duration>() / u32::try_from(durations.len()).unwrap_or(1)
        };

        ScenarioResult {
            scenario_name: scenario.name.to_string(),
            seed,
            passed: failures.is_empty(),
            iterations_run: iterations,
            successful_iterations: successes,
            failures,
            average_duration,
        }
    }
}

fn play(plan: Plan, seed: u64) -> anyhow::Result<Outcome> {
    match plan {
        Plan::Tap {
            strategy,
            level,
            faults,
        } => Ok(Outcome::Tap(TapPlayer::new(strategy, level, seed, faults).play())),
        Plan::Escape { strategy, faults } => {
            Ok(Outcome::Escape(EscapePlayer::new(strategy, seed, faults).play()?))
        }
    }
}

/// Rules every run must keep whatever the player does.
fn check_invariants(outcome: &Outcome) -> anyhow::Result<()> {
    match outcome {
        Outcome::Tap(tap) => check_tap(tap),
        Outcome::Escape(escape) => {
            if escape.finished {
                anyhow::ensure!(escape.results.is_some(), "finished without results");
                anyhow::ensure!(
                    escape.done_rooms + escape.failed_rooms == 5,
                    "{} rooms left unscored",
                    5 - escape.done_rooms - escape.failed_rooms
                );
            }
            let rooms: BTreeSet<u8> = escape.submissions.iter().copied().collect();
            anyhow::ensure!(
                escape.submissions.len() == rooms.len() + escape.rejected,
                "a room was scored twice"
            );
            Ok(())
        }
    }
}

fn check_tap(tap: &TapOutcome) -> anyhow::Result<()> {
    let indices: BTreeSet<usize> = tap.accepted.iter().map(|s| s.question_index).collect();
    anyhow::ensure!(
        indices.len() == tap.accepted.len(),
        "a question was submitted twice"
    );
    anyhow::ensure!(tap.finalizes <= 1, "attempt finalized {} times", tap.finalizes);
    anyhow::ensure!(tap.navigations <= 1, "navigated {} times", tap.navigations);
    anyhow::ensure!(
        tap.client_score == tap.backend_score,
        "client score {} but backend score {}",
        tap.client_score,
        tap.backend_score
    );
    if tap.finished {
        let tally = tap.tally;
        let answered = usize::try_from(tally.correct + tally.wrong + tally.missed)?;
        anyhow::ensure!(
            answered == tap.question_count,
            "tally covers {answered} of {} questions",
            tap.question_count
        );
        anyhow::ensure!(tap.finalizes == 1, "finished without finalizing");
        anyhow::ensure!(tap.stored.len() == 1, "results stored {} times", tap.stored.len());
        anyhow::ensure!(tap.navigations == 1, "finished without reaching results");
    }
    Ok(())
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_millis().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u128::deserialize(deserializer)?;
        Ok(Duration::from_millis(u64::try_from(millis).unwrap_or(0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenarios::get_scenario;

    #[test]
    fn smoke_scenarios_pass_across_seeds() {
        let tester = LogicTester::new(false);
        for key in ["tap-correct-beginner", "escape-solver"] {
            let scenario = get_scenario(key).unwrap();
            for result in tester.run_scenario(&scenario, &[1, 42], 2) {
                assert!(result.passed, "{key}: {:?}", result.failures);
                assert_eq!(result.successful_iterations, 2);
            }
        }
    }

    #[test]
    fn default_smoke_run_passes() {
        let tester = LogicTester::new(false);
        for key in crate::scenarios::expand_scenarios(&["smoke".to_string()]) {
            let scenario = get_scenario(&key).unwrap();
            for result in tester.run_scenario(&scenario, &[1337], 10) {
                assert!(result.passed, "{key}: {:?}", result.failures);
            }
        }
    }

    #[test]
    fn duplicate_submission_breaks_invariants() {
        let mut tap = TapPlayer::new(
            crate::logic::TapStrategy::AlwaysCorrect,
            policyplay_core::Level::Beginner,
            3,
            crate::backend::Faults::default(),
        )
        .play();
        let first = tap.accepted[0].clone();
        tap.accepted.push(first);
        let err = check_invariants(&Outcome::Tap(tap)).unwrap_err();
        assert!(err.to_string().contains("submitted twice"));
    }
}
