use crate::components::confetti::Confetti;
use crate::components::loading::Loading;
use crate::components::timer::format_clock;
use crate::i18n::t;
use policyplay_core::EscapeResults;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub results: Option<EscapeResults>,
    /// Shown when nothing was handed off for this attempt.
    #[prop_or_default]
    pub missing: bool,
    pub on_play_again: Callback<()>,
    pub on_leaderboard: Callback<()>,
}

#[function_component(EscapeResultsPage)]
pub fn escape_results_page(p: &Props) -> Html {
    let again = {
        let cb = p.on_play_again.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let board = {
        let cb = p.on_leaderboard.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let body = match (&p.results, p.missing) {
        (Some(results), _) => html! {
            <>
                <Confetti active=true />
                <div class="text-7xl font-bold text-primary" data-testid="escape-final-score">{ results.final_score }</div>
                <div class="stats shadow">
                    <div class="stat">
                        <div class="stat-title">{ t("results.time") }</div>
                        <div class="stat-value" data-testid="escape-time">{ format_clock(results.time_taken) }</div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">{ t("results.rooms") }</div>
                        <div class="stat-value">{ results.rooms_completed.len() }{ " / 5" }</div>
                    </div>
                </div>
            </>
        },
        (None, true) => html! {
            <div class="alert alert-warning" data-testid="escape-results-missing">{ t("results.escape_missing") }</div>
        },
        (None, false) => html! { <Loading /> },
    };
    html! {
        <section class="relative max-w-3xl mx-auto space-y-6 text-center" data-testid="escape-results-page">
            <h1 class="text-5xl font-bold">{ "🔓 " }{ t("results.escape_title") }</h1>
            { body }
            <div class="flex gap-4 justify-center">
                <button class="btn btn-primary" onclick={again}>{ t("results.play_again") }</button>
                <button class="btn btn-secondary" onclick={board}>{ "🏆 " }{ t("escape.view_leaderboard") }</button>
            </div>
        </section>
    }
}
