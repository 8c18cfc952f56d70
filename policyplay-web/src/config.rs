//! Build-time and runtime configuration.
//!
//! `PUBLIC_URL` sets the router base when the app is hosted under a
//! subdirectory. `POLICYPLAY_API_URL` overrides the API address used on local
//! hosts. `POLICYPLAY_LOG` picks the console log level.
use policyplay_core::ApiEndpoint;

/// Base path for the router (e.g., `/play` when hosted under a subdirectory).
///
/// Returns `None` when no base path is configured so the router falls back to root.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(option_env!("PUBLIC_URL").unwrap_or(""))
}

/// API endpoint for the page currently loaded in the browser.
#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn api_endpoint() -> ApiEndpoint {
    let location = crate::dom::window().location();
    let hostname = location.hostname().unwrap_or_default();
    let protocol = location.protocol().unwrap_or_default();
    endpoint_for(&hostname, &protocol)
}

/// API endpoint for an arbitrary page location.
#[must_use]
pub fn endpoint_for(hostname: &str, protocol: &str) -> ApiEndpoint {
    policyplay_core::resolve_endpoint(hostname, protocol, option_env!("POLICYPLAY_API_URL"))
}

#[must_use]
pub fn log_level() -> log::Level {
    log_level_from(option_env!("POLICYPLAY_LOG"))
}

fn log_level_from(raw: Option<&str>) -> log::Level {
    raw.and_then(|value| value.trim().parse().ok())
        .unwrap_or(log::Level::Info)
}

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim().trim_end_matches('/');
    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn router_base_is_none_by_default() {
        assert_eq!(router_base(), None);
    }

    #[test]
    fn router_base_returns_trimmed_value() {
        assert_eq!(router_base_with_base("/play/"), Some(String::from("/play")));
        assert_eq!(router_base_with_base(" / "), None);
        assert_eq!(router_base_with_base("  /learn/  "), Some(String::from("/learn")));
    }

    #[test]
    fn remote_hosts_use_port_8000() {
        let endpoint = endpoint_for("policy.example.org", "https:");
        assert_eq!(endpoint.api_url(), "https://policy.example.org:8000/api");
        assert_eq!(endpoint.backend_url(), "https://policy.example.org:8000");
    }

    #[test]
    fn log_level_parses_names() {
        assert_eq!(log_level_from(Some("debug")), log::Level::Debug);
        assert_eq!(log_level_from(Some("WARN")), log::Level::Warn);
        assert_eq!(log_level_from(Some("chatty")), log::Level::Info);
        assert_eq!(log_level_from(None), log::Level::Info);
    }
}
