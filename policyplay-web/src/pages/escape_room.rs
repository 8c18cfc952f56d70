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

#[function_component(EscapeRoomPage)]
pub fn escape_room_page(p: &Props) -> Html {
    let leaderboard = {
        let cb = p.on_leaderboard.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <section class="space-y-6" data-testid="escape-room-page">
            <header class="text-center space-y-2">
                <h1 class="text-5xl font-bold">{ "🔐 " }{ t("escape.title") }</h1>
                <p class="opacity-80">{ t("escape.subtitle") }</p>
                <ol class="steps steps-vertical lg:steps-horizontal">
                    { for policyplay_core::RoomNumber::all().map(|room| html! {
                        <li class="step">{ room.icon() }{ " " }{ room.title() }</li>
                    }) }
                </ol>
                <div>
                    <button class="btn btn-secondary" onclick={leaderboard} data-testid="escape-leaderboard-link">
                        { "🏆 " }{ t("escape.view_leaderboard") }
                    </button>
                </div>
            </header>
            <AlertBanner message={p.error.clone()} />
            if p.loading {
                <Loading />
            } else {
                <PolicyList policies={p.policies.clone()} on_select={p.on_select.clone()}
                    action_label={AttrValue::from(t("escape.choose_policy"))} />
            }
        </section>
    }
}
