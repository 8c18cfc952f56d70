use crate::components::alert::AlertBanner;
use crate::components::loading::Loading;
use crate::i18n::t;
use policyplay_core::{RecentGame, UserScores};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub scores: Option<UserScores>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
}

fn stat(label: &str, value: String) -> Html {
    html! {
        <div class="stat">
            <div class="stat-title">{ t(label) }</div>
            <div class="stat-value text-2xl">{ value }</div>
        </div>
    }
}

fn recent_row(game: &RecentGame) -> Html {
    html! {
        <tr>
            <td>{ game.policy_title.clone() }</td>
            <td class="capitalize">{ game.game_type.clone() }</td>
            <td>{ game.score }</td>
            <td>{ if game.correct { "✅" } else { "❌" } }</td>
            <td class="text-xs opacity-70">{ game.completed_at.clone().unwrap_or_default() }</td>
        </tr>
    }
}

#[function_component(UserScoresPage)]
pub fn user_scores_page(p: &Props) -> Html {
    let Some(scores) = &p.scores else {
        return html! {
            <>
                <AlertBanner message={p.error.clone()} />
                if p.error.is_none() { <Loading /> }
            </>
        };
    };
    let s = &scores.statistics;
    html! {
        <section class="space-y-6" data-testid="user-scores-page">
            <header>
                <h1 class="text-4xl font-bold">{ "📊 " }{ t("scores.title") }</h1>
                <p class="opacity-70">{ scores.user_name.clone() }{ " · " }{ scores.user_email.clone() }</p>
            </header>
            <div class="stats stats-vertical lg:stats-horizontal shadow w-full">
                { stat("scores.total_games", s.total_games.to_string()) }
                { stat("scores.completed", s.completed_games.to_string()) }
                { stat("scores.average", format!("{:.1}", s.average_score)) }
                { stat("scores.highest", s.highest_score.to_string()) }
                { stat("scores.total", s.total_score.to_string()) }
                { stat("scores.accuracy", format!("{:.0}%", s.accuracy)) }
            </div>
            <h2 class="text-2xl font-bold">{ t("scores.recent") }</h2>
            if scores.recent_games.is_empty() {
                <p class="opacity-70" data-testid="scores-empty">{ t("scores.none") }</p>
            } else {
                <div class="overflow-x-auto">
                    <table class="table table-zebra">
                        <thead>
                            <tr>
                                <th>{ t("scores.policy") }</th>
                                <th>{ t("scores.type") }</th>
                                <th>{ t("leaderboard.score") }</th>
                                <th>{ t("scores.result") }</th>
                                <th>{ t("scores.when") }</th>
                            </tr>
                        </thead>
                        <tbody>{ for scores.recent_games.iter().map(recent_row) }</tbody>
                    </table>
                </div>
            }
        </section>
    }
}
