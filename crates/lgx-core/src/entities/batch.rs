use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Employee, Hub, Loader, Order};
use crate::enums::{DrsStatus, ManifestStatus};
use crate::refs::{Identified, Ref};

/// An order as carried inside a manifest or delivery run sheet, with the
/// piece count and weight captured when it was attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttachedOrder {
    pub order: Ref<Order>,
    #[serde(default)]
    pub items: u32,
    #[serde(default)]
    pub weight: f64,
}

impl AttachedOrder {
    #[must_use]
    pub fn order_id(&self) -> &str {
        self.order.id()
    }
}

/// A batch of orders moving between two hubs on one vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    #[serde(rename = "_id")]
    pub id: String,
    pub manifest_id: String,
    pub source_hub: Ref<Hub>,
    pub destination_hub: Ref<Hub>,
    pub loader: Option<Ref<Loader>>,
    #[serde(default)]
    pub vehicle_number: String,
    /// Weight declared by the loader at handover, in kilograms.
    #[serde(default)]
    pub loader_weight: f64,
    #[serde(default)]
    pub orders: Vec<AttachedOrder>,
    pub status: ManifestStatus,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Manifest {
    /// Sum of attached order weights.
    #[must_use]
    pub fn actual_weight(&self) -> f64 {
        self.orders.iter().map(|entry| entry.weight).sum()
    }
}

impl Identified for Manifest {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.manifest_id
    }
}

/// A delivery run sheet: orders handed to one agent for last-mile delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Drs {
    #[serde(rename = "_id")]
    pub id: String,
    pub drs_id: String,
    pub hub: Ref<Hub>,
    pub delivery_agent: Ref<Employee>,
    #[serde(default)]
    pub vehicle_number: String,
    #[serde(default)]
    pub orders: Vec<AttachedOrder>,
    pub status: DrsStatus,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Identified for Drs {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.drs_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_accepts_populated_orders() {
        let json = r#"{
            "_id": "man-1",
            "manifestId": "MF-0001",
            "sourceHub": "hub-1",
            "destinationHub": "hub-2",
            "loaderWeight": 120.5,
            "orders": [
                {"order": "ord-1", "items": 2, "weight": 10.0},
                {"order": {"_id": "ord-2", "orderId": "DKT2",
                           "consignor": {"name": "A", "phone": "9876543210", "pincode": "411001"},
                           "consignee": {"name": "B", "phone": "9876543211", "pincode": "411002"},
                           "status": "manifested"},
                 "items": 1, "weight": 4.5}
            ],
            "status": "draft"
        }"#;
        let manifest: Manifest = serde_json::from_str(json).unwrap();
        assert_eq!(manifest.orders.len(), 2);
        assert_eq!(manifest.orders[1].order_id(), "ord-2");
        assert!((manifest.actual_weight() - 14.5).abs() < f64::EPSILON);
        assert!(manifest.loader.is_none());
    }
}
