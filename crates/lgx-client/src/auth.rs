//! `/auth/login`.

use lgx_core::entities::Hub;
use lgx_core::enums::EmployeeRole;
use lgx_core::refs::Ref;
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::{ApiClient, ApiError};

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

/// The user object some deployments return next to the token.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginUser {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<EmployeeRole>,
    pub hub: Option<Ref<Hub>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(alias = "accessToken")]
    pub token: Option<String>,
    pub user: Option<LoginUser>,
}

impl ApiClient {
    /// Exchange credentials for a bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthorized`] or [`ApiError::BadRequest`] for
    /// rejected credentials.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        tracing::debug!(email, "logging in");
        self.send_json(
            Method::POST,
            "/auth/login",
            &Credentials {
                email: email.trim(),
                password,
            },
        )
        .await
    }
}
