use crate::i18n::t;
use policyplay_core::Level;
use yew::prelude::*;

/// Seconds left at which the countdown turns red.
const URGENT_SECS: u32 = 5;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub score: i32,
    pub question_index: usize,
    pub total_questions: usize,
    pub level: Level,
    #[prop_or_default]
    pub time_remaining: Option<u32>,
}

#[function_component(GameHud)]
pub fn game_hud(p: &Props) -> Html {
    let shown = (p.question_index + 1).min(p.total_questions.max(1));
    let total = p.total_questions.max(1);
    let progress_value = shown.to_string();
    let progress_max = total.to_string();

    let timer = p.time_remaining.map(|secs| {
        let urgent = secs < URGENT_SECS;
        let class = classes!(
            "stat-value",
            "text-lg",
            if urgent { "text-error animate-pulse" } else { "text-info" }
        );
        html! {
            <div class="stat py-1" data-testid="hud-timer">
                <div class="stat-title text-xs uppercase">{ t("hud.time") }</div>
                <div {class}>{ if urgent { "⏰ " } else { "⏱️ " } }{ secs }{ "s" }</div>
            </div>
        }
    });

    html! {
        <div class="stats shadow bg-base-100 w-full" data-testid="game-hud">
            <div class="stat py-1">
                <div class="stat-title text-xs uppercase">{ t("hud.score") }</div>
                <div class="stat-value text-lg text-success" data-testid="hud-score">{ "🏆 " }{ p.score }</div>
            </div>
            <div class="stat py-1">
                <div class="stat-title text-xs uppercase">{ t("hud.progress") }</div>
                <div class="stat-value text-lg">{ format!("{shown} / {total}") }</div>
                <progress class="progress progress-secondary w-full" value={progress_value} max={progress_max}></progress>
                <div class="stat-desc capitalize">{ t("hud.level") }{ ": " }{ p.level.as_str() }</div>
            </div>
            { for timer }
        </div>
    }
}
