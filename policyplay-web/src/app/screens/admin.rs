use super::{Screen, use_screen};
use crate::dom;
use crate::i18n::{t, tr};
use crate::pages::admin_analytics::AdminAnalyticsPage;
use crate::pages::admin_dashboard::AdminDashboardPage;
use crate::pages::admin_policies::AdminPoliciesPage;
use crate::pages::admin_policy_analysis::AdminPolicyAnalysisPage;
use policyplay_core::{
    AnalyticsSummary, DraftAnalysis, DraftAnalysisRequest, PolicyAnalytics, PolicySummary,
    UserScoreTable,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[hook]
fn use_summary(screen: &Screen, error: &UseStateHandle<Option<AttrValue>>) -> UseStateHandle<Option<AnalyticsSummary>> {
    let summary = use_state(|| None::<AnalyticsSummary>);
    {
        let (screen, summary, error) = (screen.clone(), summary.clone(), error.clone());
        use_effect_with((), move |()| {
            spawn_local(async move {
                match screen.app.client.analytics_summary().await {
                    Ok(loaded) => summary.set(Some(loaded)),
                    Err(err) => error.set(screen.fail(&err)),
                }
            });
        });
    }
    summary
}

#[function_component(AdminDashboardScreen)]
pub fn admin_dashboard_screen() -> Html {
    let screen = use_screen(true);
    let error = use_state(|| None::<AttrValue>);
    let summary = use_summary(&screen, &error);
    let users = use_state(|| None::<UserScoreTable>);
    {
        let (screen, users, error) = (screen.clone(), users.clone(), error.clone());
        use_effect_with((), move |()| {
            spawn_local(async move {
                match screen.app.client.user_score_table().await {
                    Ok(table) => users.set(Some(table)),
                    Err(err) => error.set(screen.fail(&err)),
                }
            });
        });
    }
    html! {
        <AdminDashboardPage
            summary={(*summary).clone()}
            users={(*users).clone()}
            error={(*error).clone()}
            on_navigate={screen.navigate()}
        />
    }
}

#[function_component(AdminPoliciesScreen)]
pub fn admin_policies_screen() -> Html {
    let screen = use_screen(true);
    let policies = use_state(|| None::<Vec<PolicySummary>>);
    let deleting = use_state(|| None::<String>);
    let notice = use_state(|| None::<AttrValue>);
    let error = use_state(|| None::<AttrValue>);
    let reload = use_state(|| 0u32);

    {
        let (screen, policies, error) = (screen.clone(), policies.clone(), error.clone());
        use_effect_with(*reload, move |_| {
            spawn_local(async move {
                match screen.app.client.admin_policies().await {
                    Ok(list) => policies.set(Some(list)),
                    Err(err) => {
                        policies.set(Some(Vec::new()));
                        error.set(screen.fail(&err));
                    }
                }
            });
        });
    }

    let on_delete = {
        let (screen, deleting, notice, error, reload) = (
            screen.clone(),
            deleting.clone(),
            notice.clone(),
            error.clone(),
            reload.clone(),
        );
        Callback::from(move |policy: PolicySummary| {
            if deleting.is_some() {
                return;
            }
            let question = tr(
                "admin.delete_confirm",
                Some(&crate::targs! {"title" => policy.display_title()}),
            );
            if !dom::confirm(&question) {
                return;
            }
            let (screen, deleting, notice, error, reload) = (
                screen.clone(),
                deleting.clone(),
                notice.clone(),
                error.clone(),
                reload.clone(),
            );
            deleting.set(Some(policy.policy_id.clone()));
            notice.set(None);
            error.set(None);
            spawn_local(async move {
                match screen.app.client.delete_policy(&policy.policy_id).await {
                    Ok(_) => {
                        log::info!("deleted policy {}", policy.policy_id);
                        notice.set(Some(t("admin.delete_done").into()));
                        reload.set(*reload + 1);
                    }
                    Err(err) => {
                        if let Some(message) = screen.fail(&err) {
                            error.set(Some(format!("{}: {message}", t("admin.delete_failed")).into()));
                        }
                    }
                }
                deleting.set(None);
            });
        })
    };

    html! {
        <AdminPoliciesPage
            policies={(*policies).clone()}
            deleting={(*deleting).clone()}
            notice={(*notice).clone()}
            error={(*error).clone()}
            {on_delete}
        />
    }
}

#[function_component(AdminAnalyticsScreen)]
pub fn admin_analytics_screen() -> Html {
    let screen = use_screen(true);
    let error = use_state(|| None::<AttrValue>);
    let summary = use_summary(&screen, &error);
    let policies = use_state(Vec::<PolicySummary>::new);
    let selected = use_state(|| None::<String>);
    let policy = use_state(|| None::<PolicyAnalytics>);

    {
        let (screen, policies, error) = (screen.clone(), policies.clone(), error.clone());
        use_effect_with((), move |()| {
            spawn_local(async move {
                match screen.app.client.admin_policies().await {
                    Ok(list) => policies.set(list),
                    Err(err) => error.set(screen.fail(&err)),
                }
            });
        });
    }
    {
        let (screen, policy, error) = (screen.clone(), policy.clone(), error.clone());
        use_effect_with((*selected).clone(), move |selected| {
            policy.set(None);
            if let Some(policy_id) = selected.clone() {
                spawn_local(async move {
                    match screen.app.client.policy_analytics(&policy_id).await {
                        Ok(loaded) => policy.set(Some(loaded)),
                        Err(err) => error.set(screen.fail(&err)),
                    }
                });
            }
        });
    }

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |policy_id: String| {
            selected.set((!policy_id.is_empty()).then_some(policy_id));
        })
    };

    html! {
        <AdminAnalyticsPage
            summary={(*summary).clone()}
            policies={(*policies).clone()}
            selected={(*selected).clone()}
            policy={(*policy).clone()}
            error={(*error).clone()}
            {on_select}
        />
    }
}

#[function_component(AdminPolicyAnalysisScreen)]
pub fn admin_policy_analysis_screen() -> Html {
    let screen = use_screen(true);
    let analyzing = use_state(|| false);
    let analysis = use_state(|| None::<DraftAnalysis>);
    let error = use_state(|| None::<AttrValue>);

    let on_analyze = {
        let (analyzing, analysis, error) = (analyzing.clone(), analysis.clone(), error.clone());
        Callback::from(move |request: DraftAnalysisRequest| {
            if *analyzing {
                return;
            }
            if request.draft_text.trim().is_empty() {
                error.set(Some(t("analysis.empty").into()));
                return;
            }
            let (screen, analyzing, analysis, error) =
                (screen.clone(), analyzing.clone(), analysis.clone(), error.clone());
            analyzing.set(true);
            error.set(None);
            spawn_local(async move {
                match screen.app.client.analyze_draft(&request).await {
                    Ok(found) => analysis.set(Some(found)),
                    Err(err) => error.set(screen.fail(&err)),
                }
                analyzing.set(false);
            });
        })
    };

    html! {
        <AdminPolicyAnalysisPage
            analyzing={*analyzing}
            error={(*error).clone()}
            analysis={(*analysis).clone()}
            {on_analyze}
        />
    }
}
