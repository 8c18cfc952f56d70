use crate::components::loading::Loading;
use crate::i18n::t;
use policyplay_core::TapResults;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub results: Option<TapResults>,
    pub on_play_again: Callback<()>,
    pub on_leaderboard: Callback<()>,
}

/// Share of answered questions that were right, as a whole percentage.
#[must_use]
pub fn accuracy(results: &TapResults) -> u32 {
    let total = results.correct_answers + results.wrong_answers + results.missed_answers;
    if total == 0 {
        return 0;
    }
    (results.correct_answers * 100 + total / 2) / total
}

#[function_component(TapResultsPage)]
pub fn tap_results_page(p: &Props) -> Html {
    let Some(results) = &p.results else {
        return html! { <Loading /> };
    };
    let again = {
        let cb = p.on_play_again.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let board = {
        let cb = p.on_leaderboard.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let stat = |label: &str, value: String, testid: &'static str| {
        html! {
            <div class="stat">
                <div class="stat-title">{ t(label) }</div>
                <div class="stat-value" data-testid={testid}>{ value }</div>
            </div>
        }
    };
    html! {
        <section class="max-w-3xl mx-auto space-y-6 text-center" data-testid="tap-results-page">
            <h1 class="text-5xl font-bold">{ "🎉 " }{ t("results.tap_title") }</h1>
            <div class="text-7xl font-bold text-primary" data-testid="tap-final-score">{ results.final_score }</div>
            <div class="stats stats-vertical md:stats-horizontal shadow">
                { stat("results.correct", results.correct_answers.to_string(), "tap-correct") }
                { stat("results.wrong", results.wrong_answers.to_string(), "tap-wrong") }
                { stat("results.missed", results.missed_answers.to_string(), "tap-missed-count") }
                { stat("results.accuracy", format!("{}%", accuracy(results)), "tap-accuracy") }
                { stat("results.time", format!("{}s", results.time_taken), "tap-time") }
            </div>
            <div class="flex gap-4 justify-center">
                <button class="btn btn-primary" onclick={again} data-testid="tap-play-again">{ t("results.play_again") }</button>
                <button class="btn btn-secondary" onclick={board}>{ "🏆 " }{ t("tap.view_leaderboard") }</button>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accuracy_rounds_and_handles_empty_games() {
        let mut results = TapResults {
            attempt_id: "tap-1".into(),
            final_score: 0,
            correct_answers: 2,
            wrong_answers: 1,
            missed_answers: 0,
            time_taken: 0,
        };
        assert_eq!(accuracy(&results), 67);
        results.correct_answers = 0;
        results.wrong_answers = 0;
        assert_eq!(accuracy(&results), 0);
    }
}
