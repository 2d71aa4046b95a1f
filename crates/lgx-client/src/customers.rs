//! `/customer` resource.

use lgx_core::entities::Customer;
use lgx_core::forms::CustomerDraft;
use reqwest::Method;

use crate::query::ListQuery;
use crate::{ApiClient, ApiError, segment};

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, a non-success status, or
    /// an unparseable body.
    pub async fn list_customers(&self, query: &ListQuery) -> Result<Vec<Customer>, ApiError> {
        self.get_json(&format!("/customer{}", query.to_query().to_suffix()))
            .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] for an unknown id.
    pub async fn get_customer(&self, id: &str) -> Result<Customer, ApiError> {
        self.get_json(&format!("/customer/{}", segment(id))).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the server rejects the draft.
    pub async fn create_customer(&self, draft: &CustomerDraft) -> Result<Customer, ApiError> {
        self.send_json(Method::POST, "/customer", draft).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the server rejects the draft.
    pub async fn update_customer(&self, id: &str, draft: &CustomerDraft) -> Result<Customer, ApiError> {
        self.send_json(Method::PUT, &format!("/customer/{}", segment(id)), draft)
            .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on failure.
    pub async fn delete_customer(&self, id: &str) -> Result<(), ApiError> {
        self.delete_path(&format!("/customer/{}", segment(id))).await
    }
}
