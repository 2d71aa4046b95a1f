//! `/loader` resource.

use lgx_core::entities::Loader;
use lgx_core::forms::LoaderDraft;
use reqwest::Method;

use crate::query::ListQuery;
use crate::{ApiClient, ApiError, segment};

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, a non-success status, or
    /// an unparseable body.
    pub async fn list_loaders(&self, query: &ListQuery) -> Result<Vec<Loader>, ApiError> {
        self.get_json(&format!("/loader{}", query.to_query().to_suffix()))
            .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] for an unknown id.
    pub async fn get_loader(&self, id: &str) -> Result<Loader, ApiError> {
        self.get_json(&format!("/loader/{}", segment(id))).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the server rejects the draft.
    pub async fn create_loader(&self, draft: &LoaderDraft) -> Result<Loader, ApiError> {
        self.send_json(Method::POST, "/loader", draft).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the server rejects the draft.
    pub async fn update_loader(&self, id: &str, draft: &LoaderDraft) -> Result<Loader, ApiError> {
        self.send_json(Method::PUT, &format!("/loader/{}", segment(id)), draft)
            .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on failure.
    pub async fn delete_loader(&self, id: &str) -> Result<(), ApiError> {
        self.delete_path(&format!("/loader/{}", segment(id))).await
    }
}
