//! # lgx-batch
//!
//! Keeps the attached-order list of a manifest or delivery run sheet
//! consistent with the separately fetched list of pending orders while an
//! operator builds or edits the batch.
//!
//! Orders are matched by `_id` everywhere. Entries are either *staged*
//! (attached locally, not yet saved) or *persisted* (saved on the server);
//! removing a persisted entry goes through the server.

pub mod backend;
pub mod draft;
pub mod entry;
pub mod error;
pub mod reconciler;

pub use backend::BatchBackend;
pub use draft::{BatchDraft, SavedBatch};
pub use entry::AttachedEntry;
pub use error::BatchError;
pub use lgx_core::responses::BatchTotals as Aggregate;
pub use reconciler::{Reconciler, SelectAll};
