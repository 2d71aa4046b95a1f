//! Kind-agnostic wrappers over manifest and run-sheet drafts and documents.

use lgx_core::entities::{AttachedOrder, Drs, Manifest};
use lgx_core::enums::BatchKind;
use lgx_core::forms::{DrsDraft, Form, FormErrors, ManifestDraft};

/// Header fields of a batch being saved, plus the id when editing.
#[derive(Debug, Clone, PartialEq)]
pub enum BatchDraft {
    Manifest(ManifestDraft),
    Drs(DrsDraft),
}

impl BatchDraft {
    /// Empty header for a new batch of `kind` at `hub`.
    #[must_use]
    pub fn blank(kind: BatchKind, hub: Option<&str>) -> Self {
        let hub = hub.unwrap_or_default().to_string();
        match kind {
            BatchKind::Manifest => Self::Manifest(ManifestDraft {
                id: None,
                source_hub: hub,
                destination_hub: String::new(),
                loader: None,
                vehicle_number: String::new(),
                loader_weight: 0.0,
                orders: Vec::new(),
            }),
            BatchKind::Drs => Self::Drs(DrsDraft {
                id: None,
                hub,
                delivery_agent: String::new(),
                vehicle_number: String::new(),
                orders: Vec::new(),
            }),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> BatchKind {
        match self {
            Self::Manifest(_) => BatchKind::Manifest,
            Self::Drs(_) => BatchKind::Drs,
        }
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Manifest(d) => d.id.as_deref(),
            Self::Drs(d) => d.id.as_deref(),
        }
    }

    pub fn set_id(&mut self, id: Option<String>) {
        match self {
            Self::Manifest(d) => d.id = id,
            Self::Drs(d) => d.id = id,
        }
    }

    #[must_use]
    pub fn orders(&self) -> &[AttachedOrder] {
        match self {
            Self::Manifest(d) => &d.orders,
            Self::Drs(d) => &d.orders,
        }
    }

    pub fn set_orders(&mut self, orders: Vec<AttachedOrder>) {
        match self {
            Self::Manifest(d) => d.orders = orders,
            Self::Drs(d) => d.orders = orders,
        }
    }

    /// Hub whose pending orders feed this batch.
    #[must_use]
    pub fn hub(&self) -> &str {
        match self {
            Self::Manifest(d) => &d.source_hub,
            Self::Drs(d) => &d.hub,
        }
    }

    /// Declared loader weight; run sheets carry none.
    #[must_use]
    pub const fn declared_weight(&self) -> Option<f64> {
        match self {
            Self::Manifest(d) => Some(d.loader_weight),
            Self::Drs(_) => None,
        }
    }

    /// Normalize and validate the header fields.
    ///
    /// # Errors
    ///
    /// Returns [`FormErrors`] listing every failing field.
    pub fn prepare(&mut self) -> Result<(), FormErrors> {
        match self {
            Self::Manifest(d) => {
                d.normalize();
                d.validate()
            }
            Self::Drs(d) => {
                d.normalize();
                d.validate()
            }
        }
    }
}

/// A batch as the server returned it.
#[derive(Debug, Clone, PartialEq)]
pub enum SavedBatch {
    Manifest(Manifest),
    Drs(Drs),
}

impl SavedBatch {
    #[must_use]
    pub const fn kind(&self) -> BatchKind {
        match self {
            Self::Manifest(_) => BatchKind::Manifest,
            Self::Drs(_) => BatchKind::Drs,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Manifest(m) => &m.id,
            Self::Drs(d) => &d.id,
        }
    }

    /// Human-facing number (`manifestId` / `drsId`).
    #[must_use]
    pub fn number(&self) -> &str {
        match self {
            Self::Manifest(m) => &m.manifest_id,
            Self::Drs(d) => &d.drs_id,
        }
    }

    #[must_use]
    pub fn orders(&self) -> &[AttachedOrder] {
        match self {
            Self::Manifest(m) => &m.orders,
            Self::Drs(d) => &d.orders,
        }
    }

    #[must_use]
    pub fn hub(&self) -> &str {
        match self {
            Self::Manifest(m) => m.source_hub.id(),
            Self::Drs(d) => d.hub.id(),
        }
    }

    #[must_use]
    pub const fn is_editable(&self) -> bool {
        match self {
            Self::Manifest(m) => m.status.is_editable(),
            Self::Drs(d) => d.status.is_editable(),
        }
    }

    #[must_use]
    pub fn status(&self) -> &'static str {
        match self {
            Self::Manifest(m) => m.status.as_str(),
            Self::Drs(d) => d.status.as_str(),
        }
    }
}

impl SavedBatch {
    /// Header of this batch as an editable draft carrying its id.
    #[must_use]
    pub fn to_draft(&self) -> BatchDraft {
        match self {
            Self::Manifest(m) => BatchDraft::Manifest(ManifestDraft {
                id: Some(m.id.clone()),
                source_hub: m.source_hub.id().to_string(),
                destination_hub: m.destination_hub.id().to_string(),
                loader: m.loader.as_ref().map(|l| l.id().to_string()),
                vehicle_number: m.vehicle_number.clone(),
                loader_weight: m.loader_weight,
                orders: m.orders.clone(),
            }),
            Self::Drs(d) => BatchDraft::Drs(DrsDraft {
                id: Some(d.id.clone()),
                hub: d.hub.id().to_string(),
                delivery_agent: d.delivery_agent.id().to_string(),
                vehicle_number: d.vehicle_number.clone(),
                orders: d.orders.clone(),
            }),
        }
    }
}

impl From<Manifest> for SavedBatch {
    fn from(m: Manifest) -> Self {
        Self::Manifest(m)
    }
}

impl From<Drs> for SavedBatch {
    fn from(d: Drs) -> Self {
        Self::Drs(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_manifest_starts_at_hub() {
        let draft = BatchDraft::blank(BatchKind::Manifest, Some("hub-1"));
        assert_eq!(draft.hub(), "hub-1");
        assert_eq!(draft.declared_weight(), Some(0.0));
        assert!(draft.id().is_none());
    }

    #[test]
    fn saved_drs_round_trips_to_draft() {
        let drs: Drs = serde_json::from_value(serde_json::json!({
            "_id": "d-1",
            "drsId": "DRS-7",
            "hub": {"_id": "hub-2", "name": "Delhi", "code": "DEL", "city": "Delhi", "pincode": "110001"},
            "deliveryAgent": "emp-3",
            "vehicleNumber": "DL05CQ0001",
            "status": "open"
        }))
        .unwrap();
        let saved = SavedBatch::from(drs);
        let BatchDraft::Drs(draft) = saved.to_draft() else {
            panic!("expected a drs draft");
        };
        assert_eq!(draft.id.as_deref(), Some("d-1"));
        assert_eq!(draft.hub, "hub-2");
        assert_eq!(draft.delivery_agent, "emp-3");
        assert_eq!(saved.number(), "DRS-7");
        assert!(saved.is_editable());
    }

    #[test]
    fn prepare_normalizes_vehicle_number() {
        let mut draft = BatchDraft::blank(BatchKind::Drs, Some("hub-2"));
        if let BatchDraft::Drs(d) = &mut draft {
            d.delivery_agent = "emp-3".into();
            d.vehicle_number = "ka-01-a-1234".into();
        }
        draft.prepare().unwrap();
        let BatchDraft::Drs(d) = draft else {
            panic!("expected a drs draft");
        };
        assert_eq!(d.vehicle_number, "KA01A1234");
    }
}
