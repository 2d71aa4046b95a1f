//! Status enums and classification enums for Logix.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! Status enums with state machines provide `allowed_next_states()` so inline
//! status updates can be gated before they reach the server.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// OrderStatus
// ---------------------------------------------------------------------------

/// Status of an order through the delivery lifecycle.
///
/// ```text
/// booked → manifested → in_transit → reached_hub → out_for_delivery → delivered
///        → cancelled                 → cancelled                    → undelivered → reached_hub
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Booked,
    Manifested,
    InTransit,
    ReachedHub,
    OutForDelivery,
    Delivered,
    Undelivered,
    Cancelled,
}

impl OrderStatus {
    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Booked => &[Self::Manifested, Self::Cancelled],
            Self::Manifested => &[Self::InTransit, Self::Booked],
            Self::InTransit => &[Self::ReachedHub],
            Self::ReachedHub => &[Self::Manifested, Self::OutForDelivery, Self::Cancelled],
            Self::OutForDelivery => &[Self::Delivered, Self::Undelivered, Self::ReachedHub],
            Self::Undelivered => &[Self::ReachedHub],
            Self::Delivered | Self::Cancelled => &[],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    /// Terminal orders never show up in pending lists.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Booked => "booked",
            Self::Manifested => "manifested",
            Self::InTransit => "in_transit",
            Self::ReachedHub => "reached_hub",
            Self::OutForDelivery => "out_for_delivery",
            Self::Delivered => "delivered",
            Self::Undelivered => "undelivered",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// PaymentMode
// ---------------------------------------------------------------------------

/// How the freight charge of an order is settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMode {
    Prepaid,
    ToPay,
    Cod,
}

impl PaymentMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Prepaid => "prepaid",
            Self::ToPay => "to_pay",
            Self::Cod => "cod",
        }
    }
}

impl fmt::Display for PaymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EmployeeRole
// ---------------------------------------------------------------------------

/// Role of a back-office employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeRole {
    Admin,
    HubManager,
    Operator,
    DeliveryAgent,
    Driver,
}

impl EmployeeRole {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::HubManager => "hub_manager",
            Self::Operator => "operator",
            Self::DeliveryAgent => "delivery_agent",
            Self::Driver => "driver",
        }
    }

    /// Only delivery agents can be assigned a delivery run sheet.
    #[must_use]
    pub const fn can_run_drs(self) -> bool {
        matches!(self, Self::DeliveryAgent | Self::Driver)
    }
}

impl fmt::Display for EmployeeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ManifestStatus
// ---------------------------------------------------------------------------

/// Status of an inter-hub manifest.
///
/// ```text
/// draft → dispatched → received
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ManifestStatus {
    Draft,
    Dispatched,
    Received,
}

impl ManifestStatus {
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Draft => &[Self::Dispatched],
            Self::Dispatched => &[Self::Received],
            Self::Received => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    /// Orders can only be attached or removed while the manifest is a draft.
    #[must_use]
    pub const fn is_editable(self) -> bool {
        matches!(self, Self::Draft)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Dispatched => "dispatched",
            Self::Received => "received",
        }
    }
}

impl fmt::Display for ManifestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// DrsStatus
// ---------------------------------------------------------------------------

/// Status of a delivery run sheet.
///
/// ```text
/// open → closed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DrsStatus {
    Open,
    Closed,
}

impl DrsStatus {
    #[must_use]
    pub const fn is_editable(self) -> bool {
        matches!(self, Self::Open)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }
}

impl fmt::Display for DrsStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// BatchKind
// ---------------------------------------------------------------------------

/// The two kinds of order batches an operator assembles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum BatchKind {
    Manifest,
    Drs,
}

impl BatchKind {
    /// REST resource path segment.
    #[must_use]
    pub const fn resource(self) -> &'static str {
        match self {
            Self::Manifest => "manifest",
            Self::Drs => "drs",
        }
    }

    /// Order status that makes an order eligible for this kind of batch.
    ///
    /// Manifests pick up freshly booked orders at the source hub; run sheets
    /// pick up orders that reached the delivering hub.
    #[must_use]
    pub const fn pending_status(self) -> OrderStatus {
        match self {
            Self::Manifest => OrderStatus::Booked,
            Self::Drs => OrderStatus::ReachedHub,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Manifest => "manifest",
            Self::Drs => "drs",
        }
    }
}

impl fmt::Display for BatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
