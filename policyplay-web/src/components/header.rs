use crate::i18n::t;
use crate::router::Route;
use policyplay_core::User;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub user: Option<User>,
    pub on_navigate: Callback<Route>,
    pub on_logout: Callback<()>,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let nav = |route: Route, label: &str, testid: &'static str| {
        let cb = p.on_navigate.clone();
        html! {
            <li>
                <button class="btn btn-ghost btn-sm" data-testid={testid}
                    onclick={Callback::from(move |_| cb.emit(route.clone()))}>
                    { t(label) }
                </button>
            </li>
        }
    };
    let logout = {
        let cb = p.on_logout.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let go_home = {
        let cb = p.on_navigate.clone();
        Callback::from(move |_| cb.emit(Route::Home))
    };

    let right = match &p.user {
        Some(user) => html! {
            <>
                <ul class="menu menu-horizontal">
                    { nav(Route::Games, "nav.games", "nav-games") }
                    { nav(Route::PolicyTap, "nav.policy_tap", "nav-policy-tap") }
                    { nav(Route::EscapeRoom, "nav.escape_room", "nav-escape-room") }
                    { nav(Route::Leaderboard, "nav.leaderboard", "nav-leaderboard") }
                    { nav(Route::UserScores, "nav.scores", "nav-scores") }
                    if user.is_admin() {
                        { nav(Route::AdminDashboard, "nav.admin", "nav-admin") }
                    }
                </ul>
                <span class="text-sm opacity-80" data-testid="nav-user">{ user.display_name().to_string() }</span>
                <button class="btn btn-outline btn-sm" onclick={logout} data-testid="nav-logout">
                    { t("nav.logout") }
                </button>
            </>
        },
        None => html! {
            <ul class="menu menu-horizontal">
                { nav(Route::Login, "nav.login", "nav-login") }
                { nav(Route::Signup, "nav.signup", "nav-signup") }
                { nav(Route::AdminLogin, "nav.admin_login", "nav-admin-login") }
            </ul>
        },
    };

    html! {
        <header role="banner" class="navbar bg-base-100 shadow-md sticky top-0 z-50">
            <a href="#main" class="sr-only">{ t("ui.skip_to_content") }</a>
            <div class="navbar-start">
                <button class="btn btn-ghost text-xl font-bold" onclick={go_home} data-testid="nav-home">
                    { t("app.name") }
                </button>
            </div>
            <nav class="navbar-end gap-2" aria-label={t("nav.label")}>
                { right }
            </nav>
        </header>
    }
}
