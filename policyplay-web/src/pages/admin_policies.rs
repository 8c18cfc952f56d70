use crate::components::alert::{AlertBanner, AlertKind};
use crate::components::loading::Loading;
use crate::i18n::t;
use policyplay_core::PolicySummary;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub policies: Option<Vec<PolicySummary>>,
    #[prop_or_default]
    pub deleting: Option<String>,
    #[prop_or_default]
    pub notice: Option<AttrValue>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    /// Emits the policy to delete; confirmation is the container's job.
    pub on_delete: Callback<PolicySummary>,
}

#[function_component(AdminPoliciesPage)]
pub fn admin_policies_page(p: &Props) -> Html {
    let rows = p.policies.iter().flatten().map(|policy| {
        let cb = p.on_delete.clone();
        let target = policy.clone();
        let busy = p.deleting.as_deref() == Some(policy.policy_id.as_str());
        html! {
            <tr data-testid={format!("admin-policy-{}", policy.policy_id)}>
                <td>{ policy.display_title().to_string() }</td>
                <td class="text-xs">{ policy.filename.clone() }</td>
                <td>{ policy.rules_count }</td>
                <td>{ policy.clauses_count }</td>
                <td class="text-xs">{ policy.uploaded_at.clone().unwrap_or_default() }</td>
                <td>
                    <button class="btn btn-error btn-xs" disabled={busy}
                        onclick={Callback::from(move |_| cb.emit(target.clone()))}
                        data-testid={format!("delete-{}", policy.policy_id)}>
                        { if busy { t("admin.deleting") } else { t("admin.delete") } }
                    </button>
                </td>
            </tr>
        }
    });
    let body = match &p.policies {
        None => html! { <Loading /> },
        Some(list) if list.is_empty() => html! { <div class="alert">{ t("policies.empty") }</div> },
        Some(_) => html! {
            <div class="overflow-x-auto">
                <table class="table table-zebra">
                    <thead>
                        <tr>
                            <th>{ t("admin.policy_title") }</th>
                            <th>{ t("admin.filename") }</th>
                            <th>{ t("upload.rules") }</th>
                            <th>{ t("upload.clauses") }</th>
                            <th>{ t("admin.uploaded") }</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>{ for rows }</tbody>
                </table>
            </div>
        },
    };
    html! {
        <section class="space-y-6" data-testid="admin-policies-page">
            <h1 class="text-4xl font-bold">{ t("admin.policies_title") }</h1>
            <AlertBanner message={p.notice.clone()} kind={AlertKind::Success} />
            <AlertBanner message={p.error.clone()} />
            { body }
        </section>
    }
}
