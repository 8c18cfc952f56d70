use policyplay_core::RoomNumber;
use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/signup")]
    Signup,
    #[at("/games")]
    Games,
    #[at("/games/:session_id/play")]
    GamePlay { session_id: String },
    #[at("/policy-tap")]
    PolicyTap,
    #[at("/policy-tap/:policy_id/level-select")]
    TapLevels { policy_id: String },
    #[at("/policy-tap/play/:attempt_id/:game_set_id")]
    TapPlay {
        attempt_id: String,
        game_set_id: String,
    },
    #[at("/policy-tap/results/:attempt_id")]
    TapResults { attempt_id: String },
    #[at("/policy-tap/leaderboard")]
    TapLeaderboard,
    #[at("/escape-room")]
    EscapeRoom,
    #[at("/escape-room/:policy_id/level-select")]
    EscapeLevels { policy_id: String },
    #[at("/escape-room/play/:attempt_id/:room")]
    EscapePlay { attempt_id: String, room: u8 },
    #[at("/escape-room/results/:attempt_id")]
    EscapeResults { attempt_id: String },
    #[at("/escape-room/leaderboard")]
    EscapeLeaderboard,
    #[at("/leaderboard")]
    Leaderboard,
    #[at("/user/scores")]
    UserScores,
    #[at("/upload")]
    Upload,
    #[at("/admin/login")]
    AdminLogin,
    #[at("/admin/dashboard")]
    AdminDashboard,
    #[at("/admin/upload")]
    AdminUpload,
    #[at("/admin/policies")]
    AdminPolicies,
    #[at("/admin/analytics")]
    AdminAnalytics,
    #[at("/admin/policy-analysis")]
    AdminPolicyAnalysis,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    /// Pages that need a signed-in user.
    #[must_use]
    pub const fn requires_auth(&self) -> bool {
        !matches!(
            self,
            Self::Home | Self::Login | Self::Signup | Self::AdminLogin | Self::NotFound
        )
    }

    /// Pages that need the admin role.
    #[must_use]
    pub const fn requires_admin(&self) -> bool {
        matches!(
            self,
            Self::AdminDashboard
                | Self::AdminUpload
                | Self::AdminPolicies
                | Self::AdminAnalytics
                | Self::AdminPolicyAnalysis
        )
    }

    /// Where to send a visitor who may not see this page.
    #[must_use]
    pub const fn login_route(&self) -> Self {
        if self.requires_admin() {
            Self::AdminLogin
        } else {
            Self::Login
        }
    }

    #[must_use]
    pub fn escape_play(attempt_id: &str, room: RoomNumber) -> Self {
        Self::EscapePlay {
            attempt_id: attempt_id.to_string(),
            room: room.get(),
        }
    }

    #[must_use]
    pub fn level_select(policy_id: &str, game: LevelGame) -> Self {
        let policy_id = policy_id.to_string();
        match game {
            LevelGame::Tap => Self::TapLevels { policy_id },
            LevelGame::Escape => Self::EscapeLevels { policy_id },
        }
    }
}

/// Games that start from a level picker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LevelGame {
    Tap,
    Escape,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip_through_recognize() {
        let routes = [
            Route::Home,
            Route::GamePlay {
                session_id: "s1".into(),
            },
            Route::TapPlay {
                attempt_id: "a1".into(),
                game_set_id: "g1".into(),
            },
            Route::TapLevels {
                policy_id: "p1".into(),
            },
            Route::TapLeaderboard,
            Route::EscapePlay {
                attempt_id: "e1".into(),
                room: 3,
            },
            Route::AdminPolicyAnalysis,
        ];
        for route in routes {
            assert_eq!(Route::recognize(&route.to_path()), Some(route.clone()));
        }
    }

    #[test]
    fn guards_match_page_kinds() {
        assert!(!Route::Home.requires_auth());
        assert!(Route::Games.requires_auth());
        assert!(Route::AdminPolicies.requires_admin());
        assert_eq!(Route::AdminUpload.login_route(), Route::AdminLogin);
        assert_eq!(Route::Leaderboard.login_route(), Route::Login);
        assert_eq!(Route::recognize("/no/such/page"), Some(Route::NotFound));
    }
}
