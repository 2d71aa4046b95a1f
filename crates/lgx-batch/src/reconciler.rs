//! Attached/pending reconciliation for one batch editor session.

use std::collections::HashSet;

use lgx_core::entities::Order;
use lgx_core::enums::BatchKind;
use lgx_core::responses::BatchTotals;

use crate::backend::BatchBackend;
use crate::draft::{BatchDraft, SavedBatch};
use crate::entry::AttachedEntry;
use crate::error::BatchError;

/// Weights are compared to the gram; summed item weights carry float noise.
const WEIGHT_TOLERANCE_KG: f64 = 0.000_5;

/// What [`Reconciler::toggle_select_all`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectAll {
    /// This many filtered orders were newly attached.
    Selected(usize),
    /// This many staged entries were dropped.
    Cleared(usize),
}

/// Selection state of a manifest or run sheet being built.
pub struct Reconciler<B> {
    backend: B,
    kind: BatchKind,
    hub: Option<String>,
    batch_id: Option<String>,
    loaded: Option<SavedBatch>,
    pending: Vec<Order>,
    attached: Vec<AttachedEntry>,
    search: String,
}

impl<B: BatchBackend> Reconciler<B> {
    #[must_use]
    pub const fn new(backend: B, kind: BatchKind) -> Self {
        Self {
            backend,
            kind,
            hub: None,
            batch_id: None,
            loaded: None,
            pending: Vec::new(),
            attached: Vec::new(),
            search: String::new(),
        }
    }

    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    #[must_use]
    pub const fn kind(&self) -> BatchKind {
        self.kind
    }

    /// Id of the saved batch, once there is one.
    #[must_use]
    pub fn batch_id(&self) -> Option<&str> {
        self.batch_id.as_deref()
    }

    /// The saved batch as last returned by the server.
    #[must_use]
    pub const fn loaded(&self) -> Option<&SavedBatch> {
        self.loaded.as_ref()
    }

    #[must_use]
    pub fn hub(&self) -> Option<&str> {
        self.hub.as_deref()
    }

    #[must_use]
    pub fn attached(&self) -> &[AttachedEntry] {
        &self.attached
    }

    #[must_use]
    pub fn pending(&self) -> &[Order] {
        &self.pending
    }

    /// Fetch pending orders for `hub`, and when `existing` names a saved
    /// batch, seed the attached list from its orders.
    ///
    /// When editing without an explicit hub, the batch's own hub is used.
    ///
    /// # Errors
    ///
    /// Returns [`BatchError::NotEditable`] for a batch past its editable
    /// state, or [`BatchError::Api`] if a fetch fails.
    pub async fn load(&mut self, hub: Option<&str>, existing: Option<&str>) -> Result<(), BatchError> {
        self.hub = hub.map(str::to_string);
        self.attached.clear();
        self.batch_id = None;
        self.loaded = None;

        if let Some(id) = existing {
            let batch = self.backend.fetch(self.kind, id).await?;
            if !batch.is_editable() {
                return Err(BatchError::NotEditable {
                    kind: self.kind,
                    id: batch.number().to_string(),
                    status: batch.status().to_string(),
                });
            }
            if self.hub.is_none() && !batch.hub().is_empty() {
                self.hub = Some(batch.hub().to_string());
            }
            self.attached = batch.orders().iter().map(AttachedEntry::persisted).collect();
            self.batch_id = Some(batch.id().to_string());
            self.loaded = Some(batch);
            tracing::debug!(kind = %self.kind, id, attached = self.attached.len(), "loaded batch");
        }

        self.refresh_pending().await
    }

    /// Re-fetch the pending list with the current hub filter.
    ///
    /// # Errors
    ///
    /// Returns [`BatchError::Api`] if the fetch fails.
    pub async fn refresh_pending(&mut self) -> Result<(), BatchError> {
        self.pending = self
            .backend
            .pending_orders(self.kind, self.hub.as_deref())
            .await?;
        tracing::debug!(kind = %self.kind, pending = self.pending.len(), "pending orders fetched");
        Ok(())
    }

    #[must_use]
    pub fn is_attached(&self, order_id: &str) -> bool {
        self.attached.iter().any(|e| e.order_id == order_id)
    }

    /// Attach a pending order. Returns `false` if it was already attached.
    ///
    /// # Errors
    ///
    /// Returns [`BatchError::UnknownOrder`] if `order_id` is neither attached
    /// nor in the pending list.
    pub fn select(&mut self, order_id: &str) -> Result<bool, BatchError> {
        if self.is_attached(order_id) {
            return Ok(false);
        }
        let order = self
            .pending
            .iter()
            .find(|o| o.id == order_id)
            .ok_or_else(|| BatchError::UnknownOrder(order_id.to_string()))?;
        self.attached.push(AttachedEntry::staged(order));
        tracing::debug!(order_id, "order staged");
        Ok(true)
    }

    /// Detach an order.
    ///
    /// Staged entries are dropped locally. Persisted entries are removed on
    /// the server; the server's updated list then replaces the persisted
    /// entries (staged ones are kept) and pending orders are re-fetched.
    ///
    /// # Errors
    ///
    /// Returns [`BatchError::NotAttached`] for an order that is not attached,
    /// or [`BatchError::Api`] if the server call fails.
    pub async fn deselect(&mut self, order_id: &str) -> Result<(), BatchError> {
        let index = self
            .attached
            .iter()
            .position(|e| e.order_id == order_id)
            .ok_or_else(|| BatchError::NotAttached(order_id.to_string()))?;

        let batch_id = match (&self.batch_id, self.attached[index].persisted) {
            (Some(id), true) => id.clone(),
            _ => {
                self.attached.remove(index);
                tracing::debug!(order_id, "staged order dropped");
                return Ok(());
            }
        };

        let updated = self
            .backend
            .remove_order(self.kind, &batch_id, order_id)
            .await?;
        self.merge_saved(&updated);
        self.loaded = Some(updated);
        tracing::info!(kind = %self.kind, batch = %batch_id, order_id, "order removed from batch");
        self.refresh_pending().await
    }

    /// Attach every filtered pending order, or when all of them are already
    /// attached, drop the staged entries.
    ///
    /// Persisted entries are never cleared here; they need [`Self::deselect`].
    pub fn toggle_select_all(&mut self) -> SelectAll {
        let filtered: Vec<Order> = self.filtered_pending().into_iter().cloned().collect();
        if filtered.is_empty() {
            return SelectAll::Selected(0);
        }

        if filtered.iter().all(|o| self.is_attached(&o.id)) {
            let before = self.attached.len();
            self.attached.retain(|e| e.persisted);
            let cleared = before - self.attached.len();
            tracing::debug!(cleared, "staged orders cleared");
            return SelectAll::Cleared(cleared);
        }

        let mut added = 0;
        for order in &filtered {
            if !self.is_attached(&order.id) {
                self.attached.push(AttachedEntry::staged(order));
                added += 1;
            }
        }
        tracing::debug!(added, "filtered orders staged");
        SelectAll::Selected(added)
    }

    /// Pending orders not yet attached.
    #[must_use]
    pub fn available(&self) -> Vec<&Order> {
        let attached = self.attached_ids();
        self.pending
            .iter()
            .filter(|o| !attached.contains(o.id.as_str()))
            .collect()
    }

    pub fn set_search(&mut self, text: &str) {
        self.search = text.trim().to_lowercase();
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Pending orders matching the search text.
    #[must_use]
    pub fn filtered_pending(&self) -> Vec<&Order> {
        self.pending
            .iter()
            .filter(|o| o.matches_search(&self.search))
            .collect()
    }

    /// Order count, piece count, and weight of the attached list.
    #[must_use]
    pub fn aggregate(&self) -> BatchTotals {
        BatchTotals {
            orders: self.attached.len(),
            items: self
                .attached
                .iter()
                .fold(0, |total, e| total.saturating_add(e.items)),
            weight: self.attached.iter().map(|e| e.weight).sum(),
        }
    }

    /// Validate and save the batch.
    ///
    /// The attached list becomes the draft's orders. Creates when neither
    /// the draft nor this session has an id, updates otherwise. On success
    /// every entry is marked persisted.
    ///
    /// # Errors
    ///
    /// Returns [`BatchError::Empty`] with nothing attached,
    /// [`BatchError::Overweight`] when a manifest's declared loader weight is
    /// below the attached weight, [`BatchError::Form`] for invalid header
    /// fields, or [`BatchError::Api`] if the save fails.
    pub async fn submit(&mut self, mut draft: BatchDraft) -> Result<SavedBatch, BatchError> {
        if draft.kind() != self.kind {
            return Err(BatchError::KindMismatch {
                expected: self.kind,
                got: draft.kind(),
            });
        }
        if self.attached.is_empty() {
            return Err(BatchError::Empty);
        }

        let totals = self.aggregate();
        if let Some(declared) = draft.declared_weight()
            && declared + WEIGHT_TOLERANCE_KG < totals.weight
        {
            return Err(BatchError::Overweight {
                declared,
                actual: totals.weight,
            });
        }

        draft.set_orders(self.attached.iter().map(AttachedEntry::to_attached).collect());
        draft.prepare()?;

        let id = draft.id().map(str::to_string).or_else(|| self.batch_id.clone());
        let saved = match &id {
            Some(id) => {
                draft.set_id(Some(id.clone()));
                self.backend.update(id, &draft).await?
            }
            None => self.backend.create(&draft).await?,
        };

        for entry in &mut self.attached {
            entry.persisted = true;
        }
        self.batch_id = Some(saved.id().to_string());
        self.loaded = Some(saved.clone());
        tracing::info!(
            kind = %self.kind,
            id = saved.id(),
            created = id.is_none(),
            orders = totals.orders,
            weight = totals.weight,
            "batch saved"
        );
        Ok(saved)
    }

    /// Entries still only staged locally.
    #[must_use]
    pub fn staged(&self) -> Vec<&AttachedEntry> {
        self.attached.iter().filter(|e| !e.persisted).collect()
    }

    fn attached_ids(&self) -> HashSet<&str> {
        self.attached.iter().map(|e| e.order_id.as_str()).collect()
    }

    /// Replace persisted entries with the server's list, keeping staged ones
    /// the server does not already hold.
    fn merge_saved(&mut self, saved: &SavedBatch) {
        let mut merged: Vec<AttachedEntry> =
            saved.orders().iter().map(AttachedEntry::persisted).collect();
        let server_ids: HashSet<String> = merged.iter().map(|e| e.order_id.clone()).collect();
        merged.extend(
            self.attached
                .drain(..)
                .filter(|e| !e.persisted && !server_ids.contains(&e.order_id)),
        );
        self.attached = merged;
    }
}
