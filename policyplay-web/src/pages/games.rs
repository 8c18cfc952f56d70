use crate::components::alert::AlertBanner;
use crate::components::loading::Loading;
use crate::i18n::{t, tr};
use policyplay_core::{GameListing, GameType, PolicySummary};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub loading: bool,
    pub policies: Vec<PolicySummary>,
    /// Policy whose games are listed below its card.
    #[prop_or_default]
    pub expanded: Option<String>,
    #[prop_or_default]
    pub expanded_games: Option<Vec<GameListing>>,
    #[prop_or_default]
    pub generating: Option<String>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    pub on_toggle: Callback<String>,
    pub on_generate: Callback<String>,
    pub on_play: Callback<String>,
}

fn game_row(game: &GameListing, on_play: &Callback<String>) -> Html {
    let cb = on_play.clone();
    let id = game.session_id.clone();
    let onclick = Callback::from(move |_| cb.emit(id.clone()));
    let kind = match game.game_type {
        GameType::Scenario => t("games.kind_scenario"),
        GameType::Violation => t("games.kind_violation"),
    };
    let status = match (game.completed, game.score) {
        (true, Some(score)) => {
            let score = score.to_string();
            tr("games.completed_score", Some(&crate::targs! { "score" => score.as_str() }))
        }
        (true, None) => t("games.completed"),
        (false, _) => t("games.not_played"),
    };
    html! {
        <li class="flex items-center justify-between gap-2 py-2" data-testid={format!("game-{}", game.session_id)}>
            <div>
                <div class="font-semibold">{ game.title.clone() }</div>
                <div class="text-xs opacity-70">{ kind }{ " · " }{ status }</div>
            </div>
            <button class="btn btn-sm btn-primary" {onclick}>{ t("games.play") }</button>
        </li>
    }
}

#[function_component(GamesPage)]
pub fn games_page(p: &Props) -> Html {
    if p.loading {
        return html! { <Loading /> };
    }
    let cards = p.policies.iter().map(|policy| {
        let id = policy.policy_id.clone();
        let expanded = p.expanded.as_deref() == Some(id.as_str());
        let generating = p.generating.as_deref() == Some(id.as_str());
        let on_generate = {
            let cb = p.on_generate.clone();
            let id = id.clone();
            Callback::from(move |_| cb.emit(id.clone()))
        };
        let on_toggle = {
            let cb = p.on_toggle.clone();
            let id = id.clone();
            Callback::from(move |_| cb.emit(id.clone()))
        };
        let rules = policy.rules_count.to_string();
        let games = if expanded {
            match &p.expanded_games {
                None => html! { <Loading /> },
                Some(list) if list.is_empty() => html! { <p class="text-sm opacity-70">{ t("games.none_yet") }</p> },
                Some(list) => html! {
                    <ul class="divide-y">{ for list.iter().map(|g| game_row(g, &p.on_play)) }</ul>
                },
            }
        } else {
            Html::default()
        };
        html! {
            <div class="card bg-base-100 shadow-lg" data-testid={format!("games-policy-{id}")}>
                <div class="card-body">
                    <h3 class="card-title">{ policy.display_title().to_string() }{ " 📚" }</h3>
                    <p class="text-sm">{ tr("games.rules_available", Some(&crate::targs! { "count" => rules.as_str() })) }</p>
                    <div class="card-actions">
                        <button class="btn btn-primary btn-sm" onclick={on_generate} disabled={generating}
                            data-testid={format!("generate-{id}")}>
                            if generating {
                                <span class="loading loading-spinner"></span>
                                { t("games.generating") }
                            } else {
                                { t("games.generate") }
                            }
                        </button>
                        <button class="btn btn-outline btn-sm" onclick={on_toggle}>
                            { if expanded { t("games.hide") } else { t("games.show") } }
                        </button>
                    </div>
                    { games }
                </div>
            </div>
        }
    });
    html! {
        <section class="space-y-6" data-testid="games-page">
            <header class="text-center">
                <h1 class="text-4xl font-bold">{ t("games.title") }</h1>
                <p class="opacity-80">{ t("games.subtitle") }</p>
            </header>
            <AlertBanner message={p.error.clone()} />
            if p.policies.is_empty() {
                <div class="alert">{ t("policies.empty") }</div>
            } else {
                <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">{ for cards }</div>
            }
        </section>
    }
}
