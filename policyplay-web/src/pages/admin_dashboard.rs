use crate::components::alert::AlertBanner;
use crate::components::loading::Loading;
use crate::i18n::t;
use crate::router::Route;
use policyplay_core::{AnalyticsSummary, UserScoreRow, UserScoreTable};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub summary: Option<AnalyticsSummary>,
    pub users: Option<UserScoreTable>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    pub on_navigate: Callback<Route>,
}

pub(crate) fn summary_stats(summary: &AnalyticsSummary) -> Html {
    let stat = |label: &str, value: String| {
        html! {
            <div class="stat">
                <div class="stat-title">{ t(label) }</div>
                <div class="stat-value text-2xl">{ value }</div>
            </div>
        }
    };
    html! {
        <div class="stats stats-vertical lg:stats-horizontal shadow w-full" data-testid="analytics-summary">
            { stat("admin.total_users", summary.total_users.to_string()) }
            { stat("admin.total_policies", summary.total_policies.to_string()) }
            { stat("admin.total_plays", summary.total_game_plays.to_string()) }
            { stat("admin.completion_rate", format!("{:.1}%", summary.completion_rate)) }
            { stat("admin.average_score", format!("{:.1}", summary.average_score)) }
        </div>
    }
}

fn user_row(row: &UserScoreRow) -> Html {
    html! {
        <tr>
            <td>
                <div class="font-semibold">{ row.user_name.clone() }</div>
                <div class="text-xs opacity-60">{ row.user_email.clone() }</div>
            </td>
            <td>{ row.completed_games }{ " / " }{ row.total_games }</td>
            <td>{ format!("{:.1}", row.average_score) }</td>
            <td>{ row.highest_score }</td>
            <td>{ row.total_score }</td>
            <td>{ format!("{:.0}%", row.accuracy) }</td>
        </tr>
    }
}

#[function_component(AdminDashboardPage)]
pub fn admin_dashboard_page(p: &Props) -> Html {
    let go = |route: Route| {
        let cb = p.on_navigate.clone();
        Callback::from(move |_| cb.emit(route.clone()))
    };
    let users = match &p.users {
        None => html! { <Loading /> },
        Some(table) if table.users.is_empty() => html! {
            <p class="opacity-70" data-testid="admin-no-scores">{ t("admin.no_scores") }</p>
        },
        Some(table) => html! {
            <div class="overflow-x-auto">
                <table class="table table-zebra" data-testid="admin-user-scores">
                    <thead>
                        <tr>
                            <th>{ t("leaderboard.player") }</th>
                            <th>{ t("scores.completed") }</th>
                            <th>{ t("scores.average") }</th>
                            <th>{ t("scores.highest") }</th>
                            <th>{ t("scores.total") }</th>
                            <th>{ t("scores.accuracy") }</th>
                        </tr>
                    </thead>
                    <tbody>{ for table.users.iter().map(user_row) }</tbody>
                </table>
            </div>
        },
    };
    html! {
        <section class="space-y-6" data-testid="admin-dashboard-page">
            <div class="flex flex-wrap justify-between items-center gap-2">
                <h1 class="text-4xl font-bold">{ t("admin.dashboard_title") }</h1>
                <div class="flex gap-2">
                    <button class="btn btn-primary btn-sm" onclick={go(Route::AdminUpload)}>{ t("admin.upload") }</button>
                    <button class="btn btn-outline btn-sm" onclick={go(Route::AdminPolicies)}>{ t("admin.view_policies") }</button>
                    <button class="btn btn-outline btn-sm" onclick={go(Route::AdminAnalytics)}>{ t("admin.detailed_analytics") }</button>
                    <button class="btn btn-outline btn-sm" onclick={go(Route::AdminPolicyAnalysis)}>{ t("admin.draft_analysis") }</button>
                </div>
            </div>
            <AlertBanner message={p.error.clone()} />
            if let Some(summary) = &p.summary {
                { summary_stats(summary) }
            } else {
                <Loading />
            }
            <h2 class="text-2xl font-bold">{ t("admin.user_scores") }</h2>
            { users }
        </section>
    }
}
