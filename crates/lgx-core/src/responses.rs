//! CLI response types returned as JSON by `lgx` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{BatchKind, OrderStatus};

/// Response from any `lgx <resource> delete`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DeleteResponse {
    pub resource: String,
    pub id: String,
    pub deleted: bool,
}

/// Response from `lgx order update-status`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StatusChangeResponse {
    pub id: String,
    pub order_id: String,
    pub from: OrderStatus,
    pub to: OrderStatus,
}

/// Totals over the orders attached to a batch.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct BatchTotals {
    pub orders: usize,
    pub items: u32,
    pub weight: f64,
}

/// Response from `lgx manifest build` / `lgx drs build`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct BatchBuildResponse {
    pub kind: BatchKind,
    /// Server id once submitted; `None` on dry runs of a new batch.
    pub id: Option<String>,
    pub submitted: bool,
    pub created: bool,
    pub totals: BatchTotals,
    pub attached: Vec<String>,
    pub staged: Vec<String>,
    pub pending_remaining: usize,
}

/// Response from `lgx <kind> export` and `lgx order export`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ExportResponse {
    pub rows: usize,
    pub path: Option<String>,
}
