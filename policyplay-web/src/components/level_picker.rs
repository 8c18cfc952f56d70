use crate::i18n::t;
use policyplay_core::Level;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_pick: Callback<Level>,
    #[prop_or_default]
    pub busy: Option<Level>,
}

const fn icon(level: Level) -> &'static str {
    match level {
        Level::Beginner => "🌱",
        Level::Intermediate => "🌳",
        Level::Expert => "🌲",
    }
}

#[function_component(LevelPicker)]
pub fn level_picker(p: &Props) -> Html {
    let cards = Level::ALL.iter().copied().map(|level| {
        let cb = p.on_pick.clone();
        let onclick = Callback::from(move |_| cb.emit(level));
        let busy = p.busy == Some(level);
        html! {
            <div class="card bg-base-100 shadow-lg">
                <div class="card-body items-center text-center">
                    <span class="text-5xl">{ icon(level) }</span>
                    <h3 class="card-title capitalize">{ t(&format!("levels.{}.name", level.as_str())) }</h3>
                    <p class="text-sm opacity-80">{ t(&format!("levels.{}.blurb", level.as_str())) }</p>
                    <button class="btn btn-primary" {onclick} disabled={p.busy.is_some()}
                        data-testid={format!("level-{}", level.as_str())}>
                        if busy {
                            <span class="loading loading-spinner"></span>
                            { t("levels.generating") }
                        } else {
                            { t("levels.start") }
                        }
                    </button>
                </div>
            </div>
        }
    });
    html! {
        <div class="grid gap-6 md:grid-cols-3" data-testid="level-picker">{ for cards }</div>
    }
}
