//! `/manifest` resource.

use lgx_core::entities::Manifest;
use lgx_core::enums::ManifestStatus;
use lgx_core::forms::{ManifestDraft, attached_ids_only};
use reqwest::Method;

use crate::query::QueryString;
use crate::{ApiClient, ApiError, segment};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ManifestQuery {
    pub status: Option<ManifestStatus>,
    pub source_hub: Option<String>,
    pub destination_hub: Option<String>,
    pub search: Option<String>,
}

impl ManifestQuery {
    #[must_use]
    pub fn to_query(&self) -> QueryString {
        let mut q = QueryString::new();
        q.push("status", self.status)
            .push("sourceHub", self.source_hub.as_deref())
            .push("destinationHub", self.destination_hub.as_deref())
            .push("search", self.search.as_deref());
        q
    }
}

/// Request body with populated order refs collapsed to ids.
fn wire_body(draft: &ManifestDraft) -> ManifestDraft {
    ManifestDraft {
        orders: attached_ids_only(&draft.orders),
        ..draft.clone()
    }
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, a non-success status, or
    /// an unparseable body.
    pub async fn list_manifests(&self, query: &ManifestQuery) -> Result<Vec<Manifest>, ApiError> {
        self.get_json(&format!("/manifest{}", query.to_query().to_suffix()))
            .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] for an unknown id.
    pub async fn get_manifest(&self, id: &str) -> Result<Manifest, ApiError> {
        self.get_json(&format!("/manifest/{}", segment(id))).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the server rejects the manifest.
    pub async fn create_manifest(&self, draft: &ManifestDraft) -> Result<Manifest, ApiError> {
        self.send_json(Method::POST, "/manifest", &wire_body(draft))
            .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the server rejects the manifest.
    pub async fn update_manifest(
        &self,
        id: &str,
        draft: &ManifestDraft,
    ) -> Result<Manifest, ApiError> {
        self.send_json(
            Method::PUT,
            &format!("/manifest/{}", segment(id)),
            &wire_body(draft),
        )
        .await
    }

    /// Detach one order from a saved manifest; returns the updated manifest.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if the manifest or order is unknown.
    pub async fn remove_manifest_order(
        &self,
        id: &str,
        order_id: &str,
    ) -> Result<Manifest, ApiError> {
        self.delete_json(&format!(
            "/manifest/{}/order/{}",
            segment(id),
            segment(order_id)
        ))
        .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on failure.
    pub async fn delete_manifest(&self, id: &str) -> Result<(), ApiError> {
        self.delete_path(&format!("/manifest/{}", segment(id))).await
    }
}
