use lgx_core::entities::{AttachedOrder, Order};
use lgx_core::refs::Ref;

/// One order in the attached list of a batch being edited.
#[derive(Debug, Clone, PartialEq)]
pub struct AttachedEntry {
    pub order_id: String,
    /// Full order when known (selected from pending or populated by the server).
    pub order: Option<Order>,
    pub items: u32,
    pub weight: f64,
    /// Saved on the server as part of the batch.
    pub persisted: bool,
}

impl AttachedEntry {
    /// Stage a pending order, snapshotting its piece count and weight.
    #[must_use]
    pub fn staged(order: &Order) -> Self {
        Self {
            order_id: order.id.clone(),
            order: Some(order.clone()),
            items: order.piece_count(),
            weight: order.total_weight(),
            persisted: false,
        }
    }

    /// An entry the server already holds for the batch.
    #[must_use]
    pub fn persisted(attached: &AttachedOrder) -> Self {
        Self {
            order_id: attached.order_id().to_string(),
            order: attached.order.populated().cloned(),
            items: attached.items,
            weight: attached.weight,
            persisted: true,
        }
    }

    /// Docket number when the order is known, else the id.
    #[must_use]
    pub fn label(&self) -> &str {
        self.order
            .as_ref()
            .map_or(self.order_id.as_str(), |o| o.order_id.as_str())
    }

    #[must_use]
    pub fn to_attached(&self) -> AttachedOrder {
        AttachedOrder {
            order: Ref::Id(self.order_id.clone()),
            items: self.items,
            weight: self.weight,
        }
    }
}
