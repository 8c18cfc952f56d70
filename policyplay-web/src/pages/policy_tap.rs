use crate::components::alert::AlertBanner;
use crate::components::loading::Loading;
use crate::components::policy_list::PolicyList;
use crate::i18n::t;
use policyplay_core::PolicySummary;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub loading: bool,
    pub policies: Vec<PolicySummary>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    pub on_select: Callback<String>,
    pub on_leaderboard: Callback<()>,
}

#[function_component(PolicyTapPage)]
pub fn policy_tap_page(p: &Props) -> Html {
    let leaderboard = {
        let cb = p.on_leaderboard.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <section class="space-y-6" data-testid="policy-tap-page">
            <header class="text-center space-y-2">
                <h1 class="text-5xl font-bold">{ "🎯 " }{ t("tap.title") }</h1>
                <p class="opacity-80">{ t("tap.subtitle") }</p>
                <button class="btn btn-secondary" onclick={leaderboard} data-testid="tap-leaderboard-link">
                    { "🏆 " }{ t("tap.view_leaderboard") }
                </button>
            </header>
            <AlertBanner message={p.error.clone()} />
            if p.loading {
                <Loading />
            } else {
                <PolicyList policies={p.policies.clone()} on_select={p.on_select.clone()}
                    action_label={AttrValue::from(t("tap.choose_policy"))} />
            }
        </section>
    }
}
