use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Customer, Hub};
use crate::enums::{OrderStatus, PaymentMode};
use crate::refs::{Identified, Ref};

/// Sender or receiver of a consignment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    pub pincode: String,
}

/// One line of an order: a package type with dimensions and per-piece weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(default)]
    pub description: String,
    /// Centimetres.
    #[serde(default)]
    pub length: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    /// Actual weight of one piece in kilograms.
    pub weight: f64,
    pub quantity: u32,
}

impl OrderItem {
    /// Actual weight of the whole line.
    #[must_use]
    pub fn line_weight(&self) -> f64 {
        self.weight * f64::from(self.quantity)
    }
}

/// A consignment booked for delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,
    /// Docket number printed on the consignment note.
    pub order_id: String,
    pub consignor: Party,
    pub consignee: Party,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    pub source_hub: Option<Ref<Hub>>,
    pub destination_hub: Option<Ref<Hub>>,
    pub current_hub: Option<Ref<Hub>>,
    pub customer: Option<Ref<Customer>>,
    pub payment_mode: Option<PaymentMode>,
    #[serde(default)]
    pub declared_value: f64,
    pub status: OrderStatus,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Number of physical pieces across all item lines.
    #[must_use]
    pub fn piece_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0, |total, item| total.saturating_add(item.quantity))
    }

    /// Total actual weight across all item lines, in kilograms.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.items.iter().map(OrderItem::line_weight).sum()
    }

    /// Case-insensitive match against the fields operators search by.
    ///
    /// `needle` must already be lowercased.
    #[must_use]
    pub fn matches_search(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        [
            self.order_id.as_str(),
            self.consignor.name.as_str(),
            self.consignee.name.as_str(),
            self.consignor.phone.as_str(),
            self.consignee.phone.as_str(),
            self.consignor.pincode.as_str(),
            self.consignee.pincode.as_str(),
            self.consignee.city.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
    }
}

impl Identified for Order {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.order_id
    }
}
