//! Backend URL resolution and REST path builders.

use crate::level::Level;

/// API base used for local development when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";
const BACKEND_PORT: u16 = 8000;
const API_SUFFIX: &str = "/api";

/// Resolved API base plus the backend root it hangs off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoint {
    api_url: String,
    backend_url: String,
}

impl ApiEndpoint {
    #[must_use]
    pub fn from_api_url(api_url: &str) -> Self {
        let api_url = api_url.trim().trim_end_matches('/').to_string();
        let backend_url = api_url
            .strip_suffix(API_SUFFIX)
            .unwrap_or(&api_url)
            .to_string();
        Self {
            api_url,
            backend_url,
        }
    }

    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    #[must_use]
    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    /// Absolute URL for an API path such as `/policies`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path.trim_start_matches('/'))
    }

    #[must_use]
    pub fn health_url(&self) -> String {
        format!("{}/health", self.backend_url)
    }
}

fn is_local_host(hostname: &str) -> bool {
    matches!(hostname, "" | "localhost" | "127.0.0.1")
}

/// Resolve the API base for a page served from `hostname` over `protocol`.
///
/// Remote hosts talk to port 8000 on the same host. Local hosts use the
/// build-time `configured` URL when present.
#[must_use]
pub fn resolve_endpoint(hostname: &str, protocol: &str, configured: Option<&str>) -> ApiEndpoint {
    let hostname = hostname.trim();
    if !is_local_host(hostname) {
        let scheme = protocol.trim().trim_end_matches(':');
        let scheme = if scheme.is_empty() { "http" } else { scheme };
        return ApiEndpoint::from_api_url(&format!(
            "{scheme}://{hostname}:{BACKEND_PORT}{API_SUFFIX}"
        ));
    }
    let configured = configured.map(str::trim).filter(|url| !url.is_empty());
    ApiEndpoint::from_api_url(configured.unwrap_or(DEFAULT_API_URL))
}

/// REST paths relative to the API base.
pub mod paths {
    use super::Level;

    pub const LOGIN: &str = "/auth/login";
    pub const SIGNUP: &str = "/auth/signup";
    pub const ADMIN_LOGIN: &str = "/auth/admin-login";

    pub const POLICIES: &str = "/policies";
    pub const POLICY_UPLOAD: &str = "/policy/upload";
    pub const POLICY_ANALYZE: &str = "/policy/analyze";

    pub const ADMIN_POLICIES: &str = "/admin/policies";
    pub const ADMIN_ANALYTICS_SUMMARY: &str = "/admin/analytics/summary";
    pub const ADMIN_USER_SCORES: &str = "/admin/users/scores";

    pub const GAME_SUBMIT: &str = "/game/submit";
    pub const USER_SCORES: &str = "/user/scores";
    pub const LEADERBOARD: &str = "/leaderboard";

    pub const TAP_START: &str = "/policy-tap/start";
    pub const TAP_SUBMIT: &str = "/policy-tap/submit";
    pub const TAP_FINISH: &str = "/policy-tap/finish";

    pub const ESCAPE_START: &str = "/escape/start";

    #[must_use]
    pub fn admin_policy(policy_id: &str) -> String {
        format!("/admin/policies/{policy_id}")
    }

    #[must_use]
    pub fn policy_analytics(policy_id: &str) -> String {
        format!("/admin/analytics/policy/{policy_id}")
    }

    #[must_use]
    pub fn game_start(session_id: &str) -> String {
        format!("/game/start/{session_id}")
    }

    #[must_use]
    pub fn policy_games(policy_id: &str) -> String {
        format!("/game/policy/{policy_id}/games")
    }

    #[must_use]
    pub fn generate_batch(policy_id: &str, num_games: u32) -> String {
        format!("/game/generate-batch/{policy_id}?num_games={num_games}")
    }

    #[must_use]
    pub fn tap_generate(policy_id: &str, level: Level) -> String {
        format!("/policy-tap/generate/{policy_id}?level={level}")
    }

    #[must_use]
    pub fn tap_game_set(game_set_id: &str) -> String {
        format!("/policy-tap/game-set/{game_set_id}")
    }

    #[must_use]
    pub fn tap_leaderboard(policy_id: Option<&str>, level: Option<Level>) -> String {
        let mut query = Vec::new();
        if let Some(policy_id) = policy_id {
            query.push(format!("policy_id={policy_id}"));
        }
        if let Some(level) = level {
            query.push(format!("level={level}"));
        }
        with_query("/policy-tap/leaderboard", &query)
    }

    #[must_use]
    pub fn escape_generate(policy_id: &str, level: Level) -> String {
        format!("/escape/generate/{policy_id}?level={level}")
    }

    #[must_use]
    pub fn escape_rooms(attempt_id: &str) -> String {
        format!("/escape/rooms/{attempt_id}")
    }

    #[must_use]
    pub fn escape_submit(attempt_id: &str) -> String {
        format!("/escape/submit/{attempt_id}")
    }

    #[must_use]
    pub fn escape_finish(attempt_id: &str, time_taken: u64) -> String {
        format!("/escape/finish/{attempt_id}?time_taken={time_taken}")
    }

    #[must_use]
    pub fn escape_leaderboard(level: Option<Level>) -> String {
        let query: Vec<String> = level.map(|l| format!("level={l}")).into_iter().collect();
        with_query("/escape/leaderboard", &query)
    }

    fn with_query(path: &str, query: &[String]) -> String {
        if query.is_empty() {
            path.to_string()
        } else {
            format!("{path}?{}", query.join("&"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_hosts_use_same_host_on_backend_port() {
        let ep = resolve_endpoint("policyplay.example.org", "https:", Some("http://ignored/api"));
        assert_eq!(ep.api_url(), "https://policyplay.example.org:8000/api");
        assert_eq!(ep.backend_url(), "https://policyplay.example.org:8000");
        assert_eq!(ep.health_url(), "https://policyplay.example.org:8000/health");
    }

    #[test]
    fn localhost_prefers_configured_url() {
        let ep = resolve_endpoint("localhost", "http:", Some("http://10.0.0.5:9000/api/"));
        assert_eq!(ep.api_url(), "http://10.0.0.5:9000/api");
        assert_eq!(ep.backend_url(), "http://10.0.0.5:9000");
    }

    #[test]
    fn localhost_without_config_uses_default() {
        for host in ["localhost", "127.0.0.1"] {
            let ep = resolve_endpoint(host, "http:", None);
            assert_eq!(ep.api_url(), DEFAULT_API_URL);
            assert_eq!(ep.backend_url(), "http://localhost:8000");
        }
        let blank = resolve_endpoint("127.0.0.1", "http:", Some("  "));
        assert_eq!(blank.api_url(), DEFAULT_API_URL);
    }

    #[test]
    fn joins_paths_without_doubled_slashes() {
        let ep = ApiEndpoint::from_api_url("http://localhost:8000/api/");
        assert_eq!(ep.url(paths::POLICIES), "http://localhost:8000/api/policies");
        assert_eq!(ep.url("policies"), "http://localhost:8000/api/policies");
    }

    #[test]
    fn builds_query_paths() {
        assert_eq!(
            paths::tap_generate("p1", Level::Expert),
            "/policy-tap/generate/p1?level=expert"
        );
        assert_eq!(paths::tap_leaderboard(None, None), "/policy-tap/leaderboard");
        assert_eq!(
            paths::tap_leaderboard(Some("p1"), Some(Level::Beginner)),
            "/policy-tap/leaderboard?policy_id=p1&level=beginner"
        );
        assert_eq!(
            paths::escape_leaderboard(Some(Level::Intermediate)),
            "/escape/leaderboard?level=intermediate"
        );
        assert_eq!(paths::escape_finish("a1", 42), "/escape/finish/a1?time_taken=42");
        assert_eq!(
            paths::generate_batch("p9", 5),
            "/game/generate-batch/p9?num_games=5"
        );
    }
}
