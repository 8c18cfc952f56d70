use super::ApiClient;
use gloo::net::http::Method;
use policyplay_core::endpoint::paths;
use policyplay_core::{ApiError, AuthResponse, LoginRequest, SignupRequest, User};

impl ApiClient {
    async fn authenticate<B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<User, ApiError> {
        let response: AuthResponse = self.post(path, body).await?;
        self.auth()
            .persist(&response)
            .map_err(|err| ApiError::Invalid(err.to_string()))?;
        Ok(response.user)
    }

    /// # Errors
    ///
    /// Propagates the backend's rejection or a storage failure.
    pub async fn login(&self, request: &LoginRequest) -> Result<User, ApiError> {
        self.authenticate(paths::LOGIN, request).await
    }

    /// # Errors
    ///
    /// Fails fast with [`ApiError::Network`] when the backend is down.
    pub async fn signup(&self, request: &SignupRequest) -> Result<User, ApiError> {
        self.health(Method::GET).await?;
        self.authenticate(paths::SIGNUP, request).await
    }

    /// Sign in through the admin endpoint and insist on the admin role.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Forbidden`] when the account is not an admin.
    pub async fn admin_login(&self, request: &LoginRequest) -> Result<User, ApiError> {
        self.health(Method::GET).await?;
        let user = self.authenticate(paths::ADMIN_LOGIN, request).await?;
        if user.is_admin() {
            Ok(user)
        } else {
            self.auth().logout();
            Err(ApiError::Forbidden {
                detail: crate::i18n::t("errors.admin_required"),
            })
        }
    }

    pub fn logout(&self) {
        self.auth().logout();
    }
}
