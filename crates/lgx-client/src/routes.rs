//! `/routes` resource.

use lgx_core::entities::Route;
use lgx_core::forms::RouteDraft;
use reqwest::Method;

use crate::query::ListQuery;
use crate::{ApiClient, ApiError, segment};

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, a non-success status, or
    /// an unparseable body.
    pub async fn list_routes(&self, query: &ListQuery) -> Result<Vec<Route>, ApiError> {
        self.get_json(&format!("/routes{}", query.to_query().to_suffix()))
            .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] for an unknown id.
    pub async fn get_route(&self, id: &str) -> Result<Route, ApiError> {
        self.get_json(&format!("/routes/{}", segment(id))).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the server rejects the draft.
    pub async fn create_route(&self, draft: &RouteDraft) -> Result<Route, ApiError> {
        self.send_json(Method::POST, "/routes", draft).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the server rejects the draft.
    pub async fn update_route(&self, id: &str, draft: &RouteDraft) -> Result<Route, ApiError> {
        self.send_json(Method::PUT, &format!("/routes/{}", segment(id)), draft)
            .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on failure.
    pub async fn delete_route(&self, id: &str) -> Result<(), ApiError> {
        self.delete_path(&format!("/routes/{}", segment(id))).await
    }

    /// Active routes that start, end, or stop at `hub`.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::list_routes`].
    pub async fn routes_serving(&self, hub: &str) -> Result<Vec<Route>, ApiError> {
        let mut routes = self.list_routes(&ListQuery::default()).await?;
        routes.retain(|r| r.is_active && r.serves(hub));
        Ok(routes)
    }
}
