use crate::components::alert::AlertBanner;
use crate::components::level_picker::LevelPicker;
use crate::components::loading::Loading;
use crate::i18n::t;
use policyplay_core::{Level, PolicySummary};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub loading: bool,
    pub policy: Option<PolicySummary>,
    #[prop_or_default]
    pub generating: Option<Level>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    pub on_pick: Callback<Level>,
    pub on_back: Callback<()>,
}

#[function_component(TapLevelsPage)]
pub fn tap_levels_page(p: &Props) -> Html {
    let back = {
        let cb = p.on_back.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let body = match (&p.policy, p.loading) {
        (_, true) => html! { <Loading /> },
        (None, false) => html! {
            <div class="alert alert-warning" data-testid="tap-levels-missing">{ t("levels.policy_missing") }</div>
        },
        (Some(policy), false) => html! {
            <>
                <p class="text-center text-xl font-semibold">{ policy.display_title().to_string() }</p>
                <LevelPicker on_pick={p.on_pick.clone()} busy={p.generating} />
            </>
        },
    };
    html! {
        <section class="space-y-6" data-testid="tap-levels-page">
            <button class="btn btn-ghost btn-sm" onclick={back}>{ "← " }{ t("ui.back") }</button>
            <h1 class="text-4xl font-bold text-center">{ t("levels.title") }</h1>
            <AlertBanner message={p.error.clone()} />
            { body }
        </section>
    }
}
