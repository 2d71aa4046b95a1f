//! `/hub` resource.

use lgx_core::entities::Hub;
use lgx_core::forms::HubDraft;
use reqwest::Method;

use crate::query::ListQuery;
use crate::{ApiClient, ApiError, segment};

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, a non-success status, or
    /// an unparseable body.
    pub async fn list_hubs(&self, query: &ListQuery) -> Result<Vec<Hub>, ApiError> {
        self.get_json(&format!("/hub{}", query.to_query().to_suffix()))
            .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] for an unknown id.
    pub async fn get_hub(&self, id: &str) -> Result<Hub, ApiError> {
        self.get_json(&format!("/hub/{}", segment(id))).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the server rejects the draft.
    pub async fn create_hub(&self, draft: &HubDraft) -> Result<Hub, ApiError> {
        self.send_json(Method::POST, "/hub", draft).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the server rejects the draft.
    pub async fn update_hub(&self, id: &str, draft: &HubDraft) -> Result<Hub, ApiError> {
        self.send_json(Method::PUT, &format!("/hub/{}", segment(id)), draft)
            .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on failure.
    pub async fn delete_hub(&self, id: &str) -> Result<(), ApiError> {
        self.delete_path(&format!("/hub/{}", segment(id))).await
    }
}
