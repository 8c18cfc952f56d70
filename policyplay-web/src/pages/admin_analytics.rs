use super::admin_dashboard::summary_stats;
use crate::components::alert::AlertBanner;
use crate::components::loading::Loading;
use crate::dom;
use crate::i18n::t;
use policyplay_core::{AnalyticsSummary, ConfusingSection, PolicyAnalytics, PolicySummary};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub summary: Option<AnalyticsSummary>,
    pub policies: Vec<PolicySummary>,
    #[prop_or_default]
    pub selected: Option<String>,
    #[prop_or_default]
    pub policy: Option<PolicyAnalytics>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    pub on_select: Callback<String>,
}

fn sections(list: &[ConfusingSection]) -> Html {
    if list.is_empty() {
        return html! { <p class="opacity-70">{ t("admin.no_confusion") }</p> };
    }
    html! {
        <ul class="list-disc ml-6">
            { for list.iter().map(|s| html! {
                <li>{ s.section.clone() }{ format!(" ({})", s.low_scores) }</li>
            }) }
        </ul>
    }
}

#[function_component(AdminAnalyticsPage)]
pub fn admin_analytics_page(p: &Props) -> Html {
    let on_change = {
        let cb = p.on_select.clone();
        Callback::from(move |e: Event| {
            let value = dom::input_value(&e);
            if !value.is_empty() {
                cb.emit(value);
            }
        })
    };
    let overview = p.summary.as_ref().map_or_else(
        || html! { <Loading /> },
        |summary| {
            html! {
                <>
                    { summary_stats(summary) }
                    <div class="grid gap-6 md:grid-cols-3">
                        <div class="card bg-base-100 shadow">
                            <div class="card-body">
                                <h3 class="card-title">{ t("admin.most_violated") }</h3>
                                <ol class="list-decimal ml-6">
                                    { for summary.most_violated_rules.iter().map(|r| html! {
                                        <li>{ r.rule.clone() }{ format!(" ({})", r.violations) }</li>
                                    }) }
                                </ol>
                            </div>
                        </div>
                        <div class="card bg-base-100 shadow">
                            <div class="card-body">
                                <h3 class="card-title">{ t("admin.most_confusing_policy") }</h3>
                                if let Some(policy) = &summary.most_confusing_policy {
                                    <p class="font-semibold">{ policy.title.clone() }</p>
                                    <p class="text-sm">{ format!("{:.1}% · {}/{}", policy.confusion_rate, policy.low_scores, policy.total_attempts) }</p>
                                } else {
                                    <p class="opacity-70">{ t("admin.no_confusion") }</p>
                                }
                            </div>
                        </div>
                        <div class="card bg-base-100 shadow">
                            <div class="card-body">
                                <h3 class="card-title">{ t("admin.confusing_sections") }</h3>
                                { sections(&summary.most_confusing_sections) }
                            </div>
                        </div>
                    </div>
                </>
            }
        },
    );
    let detail = p.policy.as_ref().map(|policy| {
        html! {
            <div class="card bg-base-100 shadow" data-testid="policy-analytics">
                <div class="card-body">
                    <h3 class="card-title">{ policy.policy_title.clone() }</h3>
                    <p>{ t("admin.total_plays") }{ ": " }{ policy.total_plays }</p>
                    <p>{ t("scores.completed") }{ ": " }{ policy.completed_plays }</p>
                    <p>{ t("admin.average_score") }{ ": " }{ format!("{:.1}", policy.average_score) }</p>
                    <h4 class="font-bold">{ t("admin.confusing_sections") }</h4>
                    { sections(&policy.most_confusing_sections) }
                </div>
            </div>
        }
    });
    let selected = p.selected.clone().unwrap_or_default();
    html! {
        <section class="space-y-6" data-testid="admin-analytics-page">
            <h1 class="text-4xl font-bold">{ t("admin.analytics_title") }</h1>
            <AlertBanner message={p.error.clone()} />
            { overview }
            <h2 class="text-2xl font-bold">{ t("admin.per_policy") }</h2>
            <select class="select select-bordered" onchange={on_change} data-testid="analytics-policy">
                <option value="" selected={selected.is_empty()}>{ t("admin.choose_policy") }</option>
                { for p.policies.iter().map(|policy| html! {
                    <option value={policy.policy_id.clone()} selected={selected == policy.policy_id}>
                        { policy.display_title().to_string() }
                    </option>
                }) }
            </select>
            { for detail }
        </section>
    }
}
