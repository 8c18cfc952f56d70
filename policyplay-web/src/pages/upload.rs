use crate::components::alert::{AlertBanner, AlertKind};
use crate::i18n::t;
use policyplay_core::StructuredPolicy;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    #[prop_or_default]
    pub admin: bool,
    #[prop_or_default]
    pub file_name: Option<AttrValue>,
    #[prop_or_default]
    pub uploading: bool,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub result: Option<StructuredPolicy>,
    /// Raw `change` event from the file input.
    pub on_pick: Callback<Event>,
    pub on_upload: Callback<()>,
    pub on_reset: Callback<()>,
}

fn section(label: String, items: &[String]) -> Html {
    if items.is_empty() {
        return Html::default();
    }
    html! {
        <div>
            <h3 class="font-semibold text-lg">{ label }{ format!(" ({})", items.len()) }</h3>
            <ul class="list-disc ml-6">{ for items.iter().map(|i| html! { <li>{ i.clone() }</li> }) }</ul>
        </div>
    }
}

fn structured_view(policy: &StructuredPolicy, on_reset: &Callback<()>) -> Html {
    let reset = {
        let cb = on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div class="card bg-base-100 shadow-xl" data-testid="upload-result">
            <div class="card-body gap-4">
                <div class="flex justify-between items-center">
                    <h2 class="card-title">{ t("upload.extracted") }</h2>
                    <button class="btn btn-outline btn-sm" onclick={reset} data-testid="upload-another">{ t("upload.another") }</button>
                </div>
                if let Some(title) = &policy.title {
                    <p class="text-xl font-bold">{ title.clone() }</p>
                }
                if let Some(summary) = &policy.summary {
                    <p>{ summary.clone() }</p>
                }
                { section(t("upload.rules"), &policy.rules) }
                { section(t("upload.roles"), &policy.roles) }
                { section(t("upload.definitions"), &policy.definitions) }
                { section(t("upload.exceptions"), &policy.exceptions) }
                { section(t("upload.clauses"), &policy.clauses) }
                { section(t("upload.risks"), &policy.risks) }
                { section(t("upload.sections"), &policy.policy_sections) }
                if !policy.raw_text.is_empty() {
                    <details>
                        <summary class="font-semibold">{ t("upload.raw_text") }</summary>
                        <pre class="whitespace-pre-wrap text-xs max-h-64 overflow-y-auto">{ policy.raw_text.clone() }</pre>
                    </details>
                }
            </div>
        </div>
    }
}

#[function_component(UploadPage)]
pub fn upload_page(p: &Props) -> Html {
    let onchange = {
        let cb = p.on_pick.clone();
        Callback::from(move |e: Event| cb.emit(e))
    };
    let upload = {
        let cb = p.on_upload.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let title = if p.admin { t("upload.admin_title") } else { t("upload.title") };
    html! {
        <section class="max-w-4xl mx-auto space-y-6" data-testid="upload-page">
            <header>
                <h1 class="text-4xl font-bold">{ title }</h1>
                <p class="opacity-70">{ t("upload.subtitle") }</p>
            </header>
            <AlertBanner message={p.error.clone()} kind={AlertKind::Error} />
            if let Some(result) = &p.result {
                { structured_view(result, &p.on_reset) }
            } else {
                <div class="card bg-base-100 shadow">
                    <div class="card-body gap-4">
                        <input type="file" class="file-input file-input-bordered w-full"
                            accept=".pdf,.docx,.txt" {onchange} data-testid="upload-file" />
                        if let Some(name) = &p.file_name {
                            <p class="text-sm">{ t("upload.selected") }{ ": " }{ name.clone() }</p>
                        }
                        <button class="btn btn-primary" onclick={upload}
                            disabled={p.uploading || p.file_name.is_none()} data-testid="upload-submit">
                            if p.uploading {
                                <span class="loading loading-spinner"></span>
                                { t("upload.uploading") }
                            } else {
                                { t("upload.submit") }
                            }
                        </button>
                    </div>
                </div>
            }
        </section>
    }
}
