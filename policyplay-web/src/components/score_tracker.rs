use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub score: i32,
    /// Pulse the badge after a correct answer.
    #[prop_or_default]
    pub highlight: bool,
}

#[function_component(ScoreTracker)]
pub fn score_tracker(p: &Props) -> Html {
    let class = classes!(
        "badge",
        "badge-lg",
        "gap-2",
        if p.highlight { "badge-success animate-pulse" } else { "badge-primary" }
    );
    html! {
        <div {class} data-testid="score-tracker">
            <span>{ "⭐" }</span>
            <span>{ crate::i18n::t("hud.score") }</span>
            <strong>{ p.score }</strong>
        </div>
    }
}
