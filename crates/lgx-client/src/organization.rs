//! `/organization` resource (one document per tenant).

use lgx_core::entities::Organization;
use lgx_core::forms::OrganizationDraft;
use reqwest::Method;

use crate::{ApiClient, ApiError};

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] before the organization is set up.
    pub async fn get_organization(&self) -> Result<Organization, ApiError> {
        self.get_json("/organization").await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the server rejects the draft.
    pub async fn update_organization(
        &self,
        draft: &OrganizationDraft,
    ) -> Result<Organization, ApiError> {
        self.send_json(Method::PUT, "/organization", draft).await
    }
}
