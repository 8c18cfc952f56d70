//! Route containers: load data, hold page state and call the API.
//!
//! Each screen renders one props-driven page from [`crate::pages`].

mod admin;
mod auth;
mod escape;
mod quiz;
mod tap;

use super::state::{AppContext, use_app};
use crate::i18n::t;
use crate::router::Route;
use policyplay_core::{ApiError, Recovery};
use yew::prelude::*;
use yew_router::prelude::*;

/// Per-screen handle on the app context and router.
#[derive(Clone)]
pub struct Screen {
    pub app: AppContext,
    navigator: Option<Navigator>,
    admin: bool,
}

#[hook]
pub fn use_screen(admin: bool) -> Screen {
    Screen {
        app: use_app(),
        navigator: use_navigator(),
        admin,
    }
}

impl Screen {
    pub fn go(&self, route: &Route) {
        if let Some(nav) = &self.navigator {
            nav.push(route);
        }
    }

    #[must_use]
    pub fn navigate(&self) -> Callback<Route> {
        let screen = self.clone();
        Callback::from(move |route: Route| screen.go(&route))
    }

    /// Navigate on click to a fixed route.
    #[must_use]
    pub fn link(&self, route: Route) -> Callback<()> {
        let screen = self.clone();
        Callback::from(move |()| screen.go(&route))
    }

    /// Apply the recovery for `err`; returns the message to show in place.
    #[must_use]
    pub fn fail(&self, err: &ApiError) -> Option<AttrValue> {
        match err.recovery() {
            Recovery::Relogin => {
                log::warn!("session rejected: {err}");
                self.app.logout();
                self.go(if self.admin { &Route::AdminLogin } else { &Route::Login });
                None
            }
            Recovery::AdminRequired => {
                log::warn!("admin access refused: {err}");
                self.app
                    .set_notice
                    .emit((Route::AdminLogin, t("errors.admin_required").into()));
                self.go(&Route::AdminLogin);
                None
            }
            Recovery::Alert => {
                log::error!("{err}");
                Some(err.to_string().into())
            }
        }
    }
}

/// Screen for each route.
pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <auth::HomeScreen /> },
        Route::Login => html! { <auth::LoginScreen /> },
        Route::Signup => html! { <auth::SignupScreen /> },
        Route::AdminLogin => html! { <auth::AdminLoginScreen /> },
        Route::Games => html! { <quiz::GamesScreen /> },
        Route::GamePlay { session_id } => html! { <quiz::GamePlayScreen {session_id} /> },
        Route::Leaderboard => html! { <quiz::LeaderboardScreen /> },
        Route::UserScores => html! { <quiz::UserScoresScreen /> },
        Route::Upload => html! { <quiz::UploadScreen admin=false /> },
        Route::AdminUpload => html! { <quiz::UploadScreen admin=true /> },
        Route::PolicyTap => html! { <tap::PolicyTapScreen /> },
        Route::TapLevels { policy_id } => html! { <tap::TapLevelsScreen {policy_id} /> },
        Route::TapPlay { attempt_id, game_set_id } => {
            html! { <tap::TapPlayScreen {attempt_id} {game_set_id} /> }
        }
        Route::TapResults { attempt_id } => html! { <tap::TapResultsScreen {attempt_id} /> },
        Route::TapLeaderboard => html! { <tap::TapLeaderboardScreen /> },
        Route::EscapeRoom => html! { <escape::EscapeRoomScreen /> },
        Route::EscapeLevels { policy_id } => html! { <escape::EscapeLevelsScreen {policy_id} /> },
        Route::EscapePlay { attempt_id, room } => {
            html! { <escape::EscapePlayScreen {attempt_id} {room} /> }
        }
        Route::EscapeResults { attempt_id } => {
            html! { <escape::EscapeResultsScreen {attempt_id} /> }
        }
        Route::EscapeLeaderboard => html! { <escape::EscapeLeaderboardScreen /> },
        Route::AdminDashboard => html! { <admin::AdminDashboardScreen /> },
        Route::AdminPolicies => html! { <admin::AdminPoliciesScreen /> },
        Route::AdminAnalytics => html! { <admin::AdminAnalyticsScreen /> },
        Route::AdminPolicyAnalysis => html! { <admin::AdminPolicyAnalysisScreen /> },
        Route::NotFound => html! { <auth::NotFoundScreen /> },
    }
}
