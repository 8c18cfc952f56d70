//! Typed client for the PolicyPlay REST backend.
//!
//! Every call attaches the stored bearer token, classifies failures as
//! [`ApiError`] and decodes JSON bodies into the core models.

mod admin;
mod auth;
mod escape;
mod policies;
mod quiz;
mod tap;

use crate::storage::BrowserStore;
use gloo::net::http::{Method, Request, RequestBuilder};
use policyplay_core::{ApiEndpoint, ApiError, AuthSession};
use serde::Serialize;
use serde::de::DeserializeOwned;

#[derive(Debug, Clone)]
pub struct ApiClient {
    endpoint: ApiEndpoint,
    auth: AuthSession<BrowserStore>,
}

impl ApiClient {
    #[must_use]
    pub const fn new(endpoint: ApiEndpoint, auth: AuthSession<BrowserStore>) -> Self {
        Self { endpoint, auth }
    }

    /// Client for the current page, using `localStorage` for auth.
    #[cfg(target_arch = "wasm32")]
    #[must_use]
    pub fn from_window() -> Self {
        Self::new(
            crate::config::api_endpoint(),
            AuthSession::new(BrowserStore::Local),
        )
    }

    #[must_use]
    pub const fn endpoint(&self) -> &ApiEndpoint {
        &self.endpoint
    }

    #[must_use]
    pub const fn auth(&self) -> &AuthSession<BrowserStore> {
        &self.auth
    }

    fn builder(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.endpoint.url(path);
        log::debug!("{method} {url}");
        let builder = RequestBuilder::new(&url).method(method);
        match self.auth.bearer_header() {
            Some(bearer) => builder.header("Authorization", &bearer),
            None => builder,
        }
    }

    /// Probe `{backend}/health`; any failure is reported as unreachable.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] when the backend does not answer with 2xx.
    pub async fn health(&self, method: Method) -> Result<(), ApiError> {
        let url = self.endpoint.health_url();
        let builder = RequestBuilder::new(&url).method(method.clone());
        let request = if method == Method::POST {
            builder.json(&serde_json::json!({}))
        } else {
            builder.build()
        };
        let unreachable = || ApiError::network(self.endpoint.backend_url());
        let response = request
            .map_err(|_| unreachable())?
            .send()
            .await
            .map_err(|err| {
                log::error!("health check against {url} failed: {err}");
                unreachable()
            })?;
        if response.ok() {
            Ok(())
        } else {
            log::error!("health check returned {}", response.status());
            Err(unreachable())
        }
    }

    async fn dispatch<T: DeserializeOwned>(
        &self,
        request: Result<Request, gloo::net::Error>,
    ) -> Result<T, ApiError> {
        let request = request.map_err(|err| ApiError::Invalid(err.to_string()))?;
        let response = request.send().await.map_err(|err| {
            log::error!("request failed: {err}");
            ApiError::network(self.endpoint.backend_url())
        })?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))?;
        if !response.ok() {
            let error = ApiError::from_response(status, &body);
            log::warn!("{} answered {status}: {error}", response.url());
            return Err(error);
        }
        serde_json::from_str(&body).map_err(|err| {
            log::error!("could not decode {}: {err}", response.url());
            ApiError::Decode(err.to_string())
        })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.dispatch(self.builder(Method::GET, path).build()).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.dispatch(self.builder(Method::DELETE, path).build())
            .await
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.dispatch(self.builder(Method::POST, path).json(body))
            .await
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.post(path, &serde_json::json!({})).await
    }

    async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: web_sys::FormData,
    ) -> Result<T, ApiError> {
        self.dispatch(self.builder(Method::POST, path).body(form))
            .await
    }
}
