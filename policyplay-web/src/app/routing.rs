use crate::router::Route;
use policyplay_core::User;

/// Where a visitor must go instead of `route`, if anywhere.
///
/// Signed-out visitors to protected pages go to the matching login page.
/// Signed-in non-admins are sent to the admin login for admin pages.
/// Signed-in users skip the login and signup forms.
#[must_use]
pub fn redirect_for(route: &Route, user: Option<&User>) -> Option<Route> {
    match user {
        None if route.requires_auth() => Some(route.login_route()),
        None => None,
        Some(user) if route.requires_admin() && !user.is_admin() => Some(Route::AdminLogin),
        Some(_) if matches!(route, Route::Login | Route::Signup) => Some(Route::Games),
        Some(_) => None,
    }
}

/// Landing page after a successful sign-in.
#[must_use]
pub fn after_login(user: &User) -> Route {
    if user.is_admin() {
        Route::AdminDashboard
    } else {
        Route::Games
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: &str) -> User {
        User {
            id: "u1".into(),
            email: "ana@example.com".into(),
            name: "Ana".into(),
            role: role.into(),
            created_at: None,
        }
    }

    #[test]
    fn anonymous_visitors_are_sent_to_the_right_login() {
        assert_eq!(redirect_for(&Route::Games, None), Some(Route::Login));
        assert_eq!(
            redirect_for(&Route::AdminPolicies, None),
            Some(Route::AdminLogin)
        );
        assert_eq!(redirect_for(&Route::Home, None), None);
        assert_eq!(redirect_for(&Route::Signup, None), None);
    }

    #[test]
    fn admin_pages_need_the_admin_role() {
        let player = user("user");
        assert_eq!(
            redirect_for(&Route::AdminDashboard, Some(&player)),
            Some(Route::AdminLogin)
        );
        let admin = user("admin");
        assert_eq!(redirect_for(&Route::AdminDashboard, Some(&admin)), None);
        assert_eq!(redirect_for(&Route::AdminLogin, Some(&player)), None);
    }

    #[test]
    fn signed_in_users_skip_the_forms() {
        let player = user("user");
        assert_eq!(redirect_for(&Route::Login, Some(&player)), Some(Route::Games));
        assert_eq!(after_login(&player), Route::Games);
        assert_eq!(after_login(&user("admin")), Route::AdminDashboard);
    }
}
