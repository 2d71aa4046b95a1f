//! # lgx-client
//!
//! Typed REST client for the Logix back-office API.
//!
//! One [`ApiClient`] wraps a single `reqwest::Client` and the session token.
//! Each resource lives in its own module and adds methods to the client:
//! - `orders` (`/orders`, including the status patch)
//! - `hubs` (`/hub`)
//! - `employees` (`/employees`)
//! - `customers` (`/customer`)
//! - `loaders` (`/loader`)
//! - `routes` (`/routes`)
//! - `organization` (`/organization`)
//! - `manifests` (`/manifest`) and `drs` (`/drs`)
//! - `auth` (`/auth/login`)

pub mod auth;
pub mod customers;
pub mod drs;
pub mod employees;
pub mod hubs;
pub mod loaders;
pub mod manifests;
pub mod orders;
pub mod organization;
pub mod query;
pub mod routes;

mod error;
mod http;

pub use auth::{LoginResponse, LoginUser};
pub use drs::DrsQuery;
pub use error::ApiError;
pub use manifests::ManifestQuery;
pub use orders::OrderFilter;
pub use query::ListQuery;

use std::time::Duration;

use lgx_config::ApiConfig;
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for the back-office REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Build a client from the `[api]` config section.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying `reqwest::Client` fails
    /// to build (e.g. no TLS backend).
    pub fn new(config: &ApiConfig, token: Option<String>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.trimmed_base_url().to_string(),
            token: token.filter(|t| !t.is_empty()),
        })
    }

    /// Replace the bearer token (after login).
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub const fn has_token(&self) -> bool {
        self.token.is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        tracing::debug!(path, "GET");
        let resp = self.request(Method::GET, path).send().await?;
        http::decode(resp).await
    }

    pub(crate) async fn send_json<B, T>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        tracing::debug!(%method, path, "sending");
        let resp = self.request(method, path).json(body).send().await?;
        http::decode(resp).await
    }

    /// DELETE whose body is irrelevant beyond the status code.
    pub(crate) async fn delete_path(&self, path: &str) -> Result<(), ApiError> {
        tracing::debug!(path, "DELETE");
        let resp = self.request(Method::DELETE, path).send().await?;
        http::check_response(resp).await?;
        Ok(())
    }

    /// DELETE whose response carries the updated parent document.
    pub(crate) async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        tracing::debug!(path, "DELETE");
        let resp = self.request(Method::DELETE, path).send().await?;
        http::decode(resp).await
    }
}

/// Percent-encode one path segment (ids are opaque strings).
pub(crate) fn segment(id: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(id)
}
