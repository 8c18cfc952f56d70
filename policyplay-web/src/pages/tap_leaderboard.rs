use crate::components::alert::AlertBanner;
use crate::components::leaderboard_table::{LeaderboardRow, LeaderboardTable};
use crate::components::loading::Loading;
use crate::dom;
use crate::i18n::t;
use policyplay_core::{Level, PolicySummary, TapLeaderboardEntry};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub entries: Option<Vec<TapLeaderboardEntry>>,
    pub policies: Vec<PolicySummary>,
    #[prop_or_default]
    pub level: Option<Level>,
    #[prop_or_default]
    pub policy_id: Option<String>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    pub on_filter: Callback<(Option<String>, Option<Level>)>,
    pub on_play: Callback<()>,
}

#[must_use]
pub fn tap_rows(entries: &[TapLeaderboardEntry]) -> Vec<LeaderboardRow> {
    entries
        .iter()
        .map(|entry| {
            let asked = entry.correct_answers + entry.wrong_answers + entry.missed_answers;
            LeaderboardRow {
                rank: entry.rank,
                name: entry.username.clone(),
                email: entry.email.clone(),
                score: entry.score,
                detail: format!(
                    "{} · {}/{} · {}s",
                    entry.level.as_str(),
                    entry.correct_answers,
                    asked,
                    entry.time_taken
                ),
                highlight: false,
            }
        })
        .collect()
}

const ALL: &str = "all";

#[function_component(TapLeaderboardPage)]
pub fn tap_leaderboard_page(p: &Props) -> Html {
    let on_level = {
        let cb = p.on_filter.clone();
        let policy = p.policy_id.clone();
        Callback::from(move |e: Event| {
            let level = dom::input_value(&e).parse::<Level>().ok();
            cb.emit((policy.clone(), level));
        })
    };
    let on_policy = {
        let cb = p.on_filter.clone();
        let level = p.level;
        Callback::from(move |e: Event| {
            let value = dom::input_value(&e);
            let policy = (value != ALL).then_some(value);
            cb.emit((policy, level));
        })
    };
    let play = {
        let cb = p.on_play.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let table = match &p.entries {
        None => html! { <Loading /> },
        Some(entries) => html! {
            <LeaderboardTable rows={tap_rows(entries)} detail_label={AttrValue::from(t("leaderboard.tap_detail"))} />
        },
    };
    let selected_policy = p.policy_id.clone().unwrap_or_else(|| ALL.to_string());
    let selected_level = p.level.map_or(ALL, Level::as_str);

    html! {
        <section class="space-y-6" data-testid="tap-leaderboard-page">
            <h1 class="text-4xl font-bold text-center">{ "🏆 " }{ t("tap.leaderboard_title") }</h1>
            <div class="flex flex-wrap gap-4 justify-center">
                <select class="select select-bordered" onchange={on_level} data-testid="tap-filter-level">
                    <option value={ALL} selected={selected_level == ALL}>{ t("leaderboard.all_levels") }</option>
                    { for Level::ALL.iter().map(|level| html! {
                        <option value={level.as_str()} selected={selected_level == level.as_str()}>
                            { t(&format!("levels.{}.name", level.as_str())) }
                        </option>
                    }) }
                </select>
                <select class="select select-bordered" onchange={on_policy} data-testid="tap-filter-policy">
                    <option value={ALL} selected={selected_policy == ALL}>{ t("leaderboard.all_policies") }</option>
                    { for p.policies.iter().map(|policy| html! {
                        <option value={policy.policy_id.clone()} selected={selected_policy == policy.policy_id}>
                            { policy.display_title().to_string() }
                        </option>
                    }) }
                </select>
            </div>
            <AlertBanner message={p.error.clone()} />
            { table }
            <div class="text-center">
                <button class="btn btn-primary" onclick={play}>{ t("leaderboard.start_playing") }</button>
            </div>
        </section>
    }
}
