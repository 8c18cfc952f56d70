use crate::components::alert::AlertBanner;
use crate::components::leaderboard_table::{LeaderboardRow, LeaderboardTable};
use crate::components::loading::Loading;
use crate::components::timer::format_clock;
use crate::dom;
use crate::i18n::t;
use policyplay_core::{EscapeLeaderboardEntry, Level};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub entries: Option<Vec<EscapeLeaderboardEntry>>,
    #[prop_or_default]
    pub level: Option<Level>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    pub on_level: Callback<Option<Level>>,
    pub on_play: Callback<()>,
}

#[must_use]
pub fn escape_rows(entries: &[EscapeLeaderboardEntry]) -> Vec<LeaderboardRow> {
    entries
        .iter()
        .zip(1u32..)
        .map(|(entry, rank)| LeaderboardRow {
            rank,
            name: entry.user_name.clone(),
            email: entry.user_email.clone(),
            score: entry.score,
            detail: format!(
                "{} · {}/5 · {}",
                entry.level.as_str(),
                entry.rooms_completed,
                format_clock(entry.time_taken)
            ),
            highlight: false,
        })
        .collect()
}

#[function_component(EscapeLeaderboardPage)]
pub fn escape_leaderboard_page(p: &Props) -> Html {
    let on_change = {
        let cb = p.on_level.clone();
        Callback::from(move |e: Event| cb.emit(dom::input_value(&e).parse::<Level>().ok()))
    };
    let play = {
        let cb = p.on_play.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let selected = p.level.map_or("all", Level::as_str);
    let table = match &p.entries {
        None => html! { <Loading /> },
        Some(entries) => html! {
            <LeaderboardTable rows={escape_rows(entries)} detail_label={AttrValue::from(t("leaderboard.escape_detail"))} />
        },
    };
    html! {
        <section class="space-y-6" data-testid="escape-leaderboard-page">
            <h1 class="text-4xl font-bold text-center">{ "🏆 " }{ t("escape.leaderboard_title") }</h1>
            <div class="flex justify-center">
                <select class="select select-bordered" onchange={on_change} data-testid="escape-filter-level">
                    <option value="all" selected={selected == "all"}>{ t("leaderboard.all_levels") }</option>
                    { for Level::ALL.iter().map(|level| html! {
                        <option value={level.as_str()} selected={selected == level.as_str()}>
                            { t(&format!("levels.{}.name", level.as_str())) }
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
