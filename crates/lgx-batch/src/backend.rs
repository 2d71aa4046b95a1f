//! The server operations the reconciler depends on.

use async_trait::async_trait;
use lgx_client::{ApiClient, ApiError};
use lgx_core::entities::Order;
use lgx_core::enums::BatchKind;

use crate::draft::{BatchDraft, SavedBatch};

/// Server side of a batch editor.
///
/// Implemented by [`ApiClient`]; tests substitute an in-memory backend.
#[async_trait]
pub trait BatchBackend: Send + Sync {
    /// Orders eligible for a batch of `kind` at `hub`.
    async fn pending_orders(
        &self,
        kind: BatchKind,
        hub: Option<&str>,
    ) -> Result<Vec<Order>, ApiError>;

    async fn fetch(&self, kind: BatchKind, id: &str) -> Result<SavedBatch, ApiError>;

    async fn create(&self, draft: &BatchDraft) -> Result<SavedBatch, ApiError>;

    async fn update(&self, id: &str, draft: &BatchDraft) -> Result<SavedBatch, ApiError>;

    /// Detach one order from a saved batch and return the updated batch.
    async fn remove_order(
        &self,
        kind: BatchKind,
        id: &str,
        order_id: &str,
    ) -> Result<SavedBatch, ApiError>;
}

#[async_trait]
impl BatchBackend for ApiClient {
    async fn pending_orders(
        &self,
        kind: BatchKind,
        hub: Option<&str>,
    ) -> Result<Vec<Order>, ApiError> {
        ApiClient::pending_orders(self, kind, hub).await
    }

    async fn fetch(&self, kind: BatchKind, id: &str) -> Result<SavedBatch, ApiError> {
        Ok(match kind {
            BatchKind::Manifest => self.get_manifest(id).await?.into(),
            BatchKind::Drs => self.get_drs(id).await?.into(),
        })
    }

    async fn create(&self, draft: &BatchDraft) -> Result<SavedBatch, ApiError> {
        Ok(match draft {
            BatchDraft::Manifest(d) => self.create_manifest(d).await?.into(),
            BatchDraft::Drs(d) => self.create_drs(d).await?.into(),
        })
    }

    async fn update(&self, id: &str, draft: &BatchDraft) -> Result<SavedBatch, ApiError> {
        Ok(match draft {
            BatchDraft::Manifest(d) => self.update_manifest(id, d).await?.into(),
            BatchDraft::Drs(d) => self.update_drs(id, d).await?.into(),
        })
    }

    async fn remove_order(
        &self,
        kind: BatchKind,
        id: &str,
        order_id: &str,
    ) -> Result<SavedBatch, ApiError> {
        Ok(match kind {
            BatchKind::Manifest => self.remove_manifest_order(id, order_id).await?.into(),
            BatchKind::Drs => self.remove_drs_order(id, order_id).await?.into(),
        })
    }
}
