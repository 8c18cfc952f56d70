use serde_json::Value;

/// Failure of a backend call, classified for the UI.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error(
        "Cannot connect to backend server. Please make sure the backend is running on {backend_url}"
    )]
    Network { backend_url: String },
    #[error("{detail}")]
    Unauthorized { detail: String },
    #[error("{detail}")]
    Forbidden { detail: String },
    #[error("{detail}")]
    Server { status: u16, detail: String },
    #[error("Unexpected response from server: {0}")]
    Decode(String),
    #[error("{0}")]
    Invalid(String),
}

/// What a page should do after a failed call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recovery {
    /// Clear the session and send the user to the login page.
    Relogin,
    /// Leave the admin area with an admin-required message.
    AdminRequired,
    /// Show the message and stay.
    Alert,
}

impl ApiError {
    #[must_use]
    pub fn network(backend_url: &str) -> Self {
        Self::Network {
            backend_url: backend_url.to_string(),
        }
    }

    /// Classify a non-success HTTP response.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        let detail = detail_from_body(status, body);
        match status {
            401 => Self::Unauthorized { detail },
            403 => Self::Forbidden { detail },
            _ => Self::Server { status, detail },
        }
    }

    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { .. } => Some(401),
            Self::Forbidden { .. } => Some(403),
            Self::Server { status, .. } => Some(*status),
            Self::Network { .. } | Self::Decode(_) | Self::Invalid(_) => None,
        }
    }

    #[must_use]
    pub const fn recovery(&self) -> Recovery {
        match self {
            Self::Unauthorized { .. } => Recovery::Relogin,
            Self::Forbidden { .. } => Recovery::AdminRequired,
            _ => Recovery::Alert,
        }
    }
}

/// Extract the backend's human-readable error from a response body.
///
/// Understands `{"detail": "..."}`, validation lists of `{"msg": "..."}` and
/// `{"message": "..."}`. Falls back to `Server error: {status}`.
#[must_use]
pub fn detail_from_body(status: u16, body: &str) -> String {
    let parsed: Option<Value> = serde_json::from_str(body).ok();
    let detail = parsed.as_ref().and_then(|value| {
        let detail = match value.get("detail") {
            Some(Value::String(text)) => Some(text.clone()),
            Some(Value::Array(items)) => {
                let msgs: Vec<&str> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(Value::as_str))
                    .collect();
                (!msgs.is_empty()).then(|| msgs.join("; "))
            }
            _ => None,
        };
        detail.or_else(|| {
            value
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
        })
    });
    detail
        .filter(|text| !text.trim().is_empty())
        .unwrap_or_else(|| format!("Server error: {status}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_auth_statuses() {
        let unauth = ApiError::from_response(401, r#"{"detail":"Could not validate credentials"}"#);
        assert_eq!(unauth.recovery(), Recovery::Relogin);
        assert_eq!(unauth.to_string(), "Could not validate credentials");

        let forbidden = ApiError::from_response(403, "");
        assert_eq!(forbidden.recovery(), Recovery::AdminRequired);
        assert_eq!(forbidden.status(), Some(403));

        let server = ApiError::from_response(500, "<html>oops</html>");
        assert_eq!(server.recovery(), Recovery::Alert);
        assert_eq!(server.to_string(), "Server error: 500");
    }

    #[test]
    fn reads_validation_and_message_bodies() {
        let body = r#"{"detail":[{"msg":"field required"},{"msg":"value is not a valid email"}]}"#;
        assert_eq!(
            detail_from_body(422, body),
            "field required; value is not a valid email"
        );
        assert_eq!(detail_from_body(400, r#"{"message":"bad"}"#), "bad");
        assert_eq!(detail_from_body(404, r#"{"detail":""}"#), "Server error: 404");
    }

    #[test]
    fn network_error_names_backend() {
        let err = ApiError::network("http://localhost:8000");
        assert!(err.to_string().contains("http://localhost:8000"));
        assert_eq!(err.status(), None);
        assert_eq!(err.recovery(), Recovery::Alert);
    }
}
