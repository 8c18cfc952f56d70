//! Persisted bearer token and cached user profile.

use crate::models::{AuthResponse, User};
use crate::store::{KeyValueStore, StoreError, get_json, set_json};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Auth state layered over a key-value store.
///
/// The token is never validated locally; the backend answers 401 when it
/// has expired and callers then [`logout`](Self::logout).
#[derive(Debug, Clone)]
pub struct AuthSession<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> AuthSession<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Persist the token and profile from a successful login or signup.
    ///
    /// # Errors
    ///
    /// Returns an error if either value cannot be written.
    pub fn persist(&self, response: &AuthResponse) -> Result<(), StoreError> {
        self.store
            .set_item(TOKEN_KEY, &response.access_token)
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        set_json(&self.store, USER_KEY, &response.user)?;
        log::info!("signed in as {}", response.user.email);
        Ok(())
    }

    /// Forget the token and cached user.
    pub fn logout(&self) {
        for key in [TOKEN_KEY, USER_KEY] {
            if let Err(err) = self.store.remove_item(key) {
                log::warn!("failed to clear {key}: {err}");
            }
        }
    }

    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.store
            .get_item(TOKEN_KEY)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty())
    }

    /// Cached user profile. A corrupt entry reads as signed out.
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        match get_json::<_, User>(&self.store, USER_KEY) {
            Ok(user) => user,
            Err(err) => {
                log::warn!("ignoring unreadable cached user: {err}");
                None
            }
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.current_user().is_some_and(|user| user.is_admin())
    }

    /// Value for the `Authorization` header, when signed in.
    #[must_use]
    pub fn bearer_header(&self) -> Option<String> {
        self.token().map(|token| format!("Bearer {token}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn response(role: &str) -> AuthResponse {
        AuthResponse {
            access_token: "tok-123".into(),
            token_type: "bearer".into(),
            user: User {
                id: "u1".into(),
                email: "ada@example.org".into(),
                name: "Ada".into(),
                role: role.into(),
                created_at: None,
            },
        }
    }

    #[test]
    fn persist_then_logout() {
        let session = AuthSession::new(MemoryStore::new());
        assert!(!session.is_authenticated());
        assert!(session.bearer_header().is_none());

        session.persist(&response("user")).unwrap();
        assert!(session.is_authenticated());
        assert!(!session.is_admin());
        assert_eq!(session.bearer_header().as_deref(), Some("Bearer tok-123"));
        assert_eq!(session.current_user().unwrap().name, "Ada");

        session.logout();
        assert!(!session.is_authenticated());
        assert!(session.current_user().is_none());
        assert!(session.store().is_empty());
    }

    #[test]
    fn admin_role_is_recognised() {
        let session = AuthSession::new(MemoryStore::new());
        session.persist(&response("admin")).unwrap();
        assert!(session.is_admin());
    }

    #[test]
    fn corrupt_user_reads_as_absent() {
        let store = MemoryStore::new();
        store.set_item(TOKEN_KEY, "tok").unwrap();
        store.set_item(USER_KEY, "{broken").unwrap();
        let session = AuthSession::new(store);
        assert!(session.is_authenticated());
        assert!(session.current_user().is_none());
        assert!(!session.is_admin());
    }
}
