use crate::i18n::{t, tr};
use policyplay_core::PolicySummary;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub policies: Vec<PolicySummary>,
    /// Emits the chosen `policy_id`.
    pub on_select: Callback<String>,
    pub action_label: AttrValue,
    #[prop_or_default]
    pub selected: Option<String>,
}

#[function_component(PolicyList)]
pub fn policy_list(p: &Props) -> Html {
    if p.policies.is_empty() {
        return html! {
            <div class="alert" data-testid="policy-list-empty">{ t("policies.empty") }</div>
        };
    }
    let cards = p.policies.iter().map(|policy| {
        let cb = p.on_select.clone();
        let id = policy.policy_id.clone();
        let onclick = Callback::from(move |_| cb.emit(id.clone()));
        let rules = policy.rules_count.to_string();
        let clauses = policy.clauses_count.to_string();
        let selected = p.selected.as_deref() == Some(policy.policy_id.as_str());
        html! {
            <div class={classes!("card", "bg-base-100", "shadow", selected.then_some("ring ring-primary"))}
                data-testid={format!("policy-{}", policy.policy_id)}>
                <div class="card-body">
                    <h3 class="card-title">{ policy.display_title().to_string() }</h3>
                    <p class="text-xs opacity-70">
                        { tr("policies.counts", Some(&crate::targs! { "rules" => rules.as_str(), "clauses" => clauses.as_str() })) }
                    </p>
                    <div class="card-actions justify-end">
                        <button class="btn btn-primary btn-sm" {onclick}>{ p.action_label.clone() }</button>
                    </div>
                </div>
            </div>
        }
    });
    html! {
        <div class="grid gap-4 md:grid-cols-2 lg:grid-cols-3" data-testid="policy-list">{ for cards }</div>
    }
}
