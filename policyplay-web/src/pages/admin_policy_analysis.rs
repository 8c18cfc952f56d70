use crate::components::alert::AlertBanner;
use crate::dom;
use crate::i18n::t;
use policyplay_core::{DraftAnalysis, DraftAnalysisRequest};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    #[prop_or_default]
    pub analyzing: bool,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub analysis: Option<DraftAnalysis>,
    pub on_analyze: Callback<DraftAnalysisRequest>,
}

fn findings(title: String, items: &[String], class: &'static str) -> Html {
    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h3 class={classes!("card-title", class)}>{ title }{ format!(" ({})", items.len()) }</h3>
                if items.is_empty() {
                    <p class="opacity-70">{ t("analysis.none") }</p>
                } else {
                    <ul class="list-disc ml-6">{ for items.iter().map(|i| html! { <li>{ i.clone() }</li> }) }</ul>
                }
            </div>
        </div>
    }
}

#[function_component(AdminPolicyAnalysisPage)]
pub fn admin_policy_analysis_page(p: &Props) -> Html {
    let title = use_state(String::new);
    let text = use_state(String::new);
    let local_error = use_state(|| None::<AttrValue>);

    let on_title = {
        let title = title.clone();
        Callback::from(move |e: InputEvent| title.set(dom::input_value(&e)))
    };
    let on_text = {
        let text = text.clone();
        Callback::from(move |e: InputEvent| text.set(dom::input_value(&e)))
    };
    let onsubmit = {
        let (title, text, local_error) = (title.clone(), text.clone(), local_error.clone());
        let cb = p.on_analyze.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if text.trim().is_empty() {
                local_error.set(Some(t("analysis.missing_text").into()));
                return;
            }
            local_error.set(None);
            cb.emit(DraftAnalysisRequest {
                draft_text: (*text).clone(),
                draft_title: title.trim().to_string(),
            });
        })
    };
    let error = (*local_error).clone().or_else(|| p.error.clone());
    let report = p.analysis.as_ref().map(|a| {
        html! {
            <div class="grid gap-4 md:grid-cols-2" data-testid="draft-analysis">
                { findings(t("analysis.contradictions"), &a.contradictions, "text-error") }
                { findings(t("analysis.missing_sections"), &a.missing_sections, "text-warning") }
                { findings(t("analysis.ambiguous"), &a.ambiguous_phrases, "text-info") }
                { findings(t("analysis.recommendations"), &a.recommendations, "text-success") }
                <div class="card bg-base-100 shadow md:col-span-2">
                    <div class="card-body">
                        <h3 class="card-title">{ t("analysis.overlaps") }</h3>
                        if a.overlapping_content.is_empty() {
                            <p class="opacity-70">{ t("analysis.none") }</p>
                        } else {
                            <ul class="list-disc ml-6">
                                { for a.overlapping_content.iter().map(|o| html! {
                                    <li><span class="font-semibold">{ o.existing_policy.clone() }</span>{ ": " }{ o.overlap_description.clone() }</li>
                                }) }
                            </ul>
                        }
                    </div>
                </div>
            </div>
        }
    });
    html! {
        <section class="space-y-6" data-testid="admin-policy-analysis-page">
            <h1 class="text-4xl font-bold">{ t("analysis.title") }</h1>
            <form class="card bg-base-100 shadow" {onsubmit}>
                <div class="card-body gap-4">
                    <AlertBanner message={error} />
                    <input class="input input-bordered" placeholder={t("analysis.title_placeholder")}
                        value={(*title).clone()} oninput={on_title} data-testid="draft-title" />
                    <label class="form-control">
                        <span class="label-text">{ t("analysis.draft_text") }</span>
                        <textarea class="textarea textarea-bordered h-64" value={(*text).clone()} oninput={on_text}
                            data-testid="draft-text"></textarea>
                    </label>
                    <button class="btn btn-primary" type="submit" disabled={p.analyzing} data-testid="draft-submit">
                        if p.analyzing { <span class="loading loading-spinner"></span> }
                        { t("analysis.submit") }
                    </button>
                </div>
            </form>
            { for report }
        </section>
    }
}
