//! `/orders` resource.

use chrono::NaiveDate;
use lgx_core::entities::Order;
use lgx_core::enums::{BatchKind, OrderStatus};
use lgx_core::forms::{OrderDraft, StatusUpdate};
use reqwest::Method;

use crate::query::QueryString;
use crate::{ApiClient, ApiError, segment};

/// Server-side filters for `GET /orders`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OrderFilter {
    pub status: Option<OrderStatus>,
    /// Matches orders whose source, destination, or current hub is this hub.
    pub hub: Option<String>,
    pub current_hub: Option<String>,
    pub source_hub: Option<String>,
    pub destination_hub: Option<String>,
    pub customer: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub search: Option<String>,
}

impl OrderFilter {
    /// Orders eligible for a new batch of `kind` sitting at `hub`.
    #[must_use]
    pub fn pending(kind: BatchKind, hub: Option<&str>) -> Self {
        Self {
            status: Some(kind.pending_status()),
            current_hub: hub.map(str::to_string),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn to_query(&self) -> QueryString {
        let mut q = QueryString::new();
        q.push("status", self.status)
            .push("hub", self.hub.as_deref())
            .push("currentHub", self.current_hub.as_deref())
            .push("sourceHub", self.source_hub.as_deref())
            .push("destinationHub", self.destination_hub.as_deref())
            .push("customer", self.customer.as_deref())
            .push("from", self.from)
            .push("to", self.to)
            .push("search", self.search.as_deref());
        q
    }
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, a non-success status, or
    /// an unparseable body.
    pub async fn list_orders(&self, filter: &OrderFilter) -> Result<Vec<Order>, ApiError> {
        self.get_json(&format!("/orders{}", filter.to_query().to_suffix()))
            .await
    }

    /// Orders waiting to be attached to a batch of `kind`.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::list_orders`].
    pub async fn pending_orders(
        &self,
        kind: BatchKind,
        hub: Option<&str>,
    ) -> Result<Vec<Order>, ApiError> {
        self.list_orders(&OrderFilter::pending(kind, hub)).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] for an unknown id.
    pub async fn get_order(&self, id: &str) -> Result<Order, ApiError> {
        self.get_json(&format!("/orders/{}", segment(id))).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the server rejects the draft.
    pub async fn create_order(&self, draft: &OrderDraft) -> Result<Order, ApiError> {
        self.send_json(Method::POST, "/orders", draft).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the server rejects the draft.
    pub async fn update_order(&self, id: &str, draft: &OrderDraft) -> Result<Order, ApiError> {
        self.send_json(Method::PUT, &format!("/orders/{}", segment(id)), draft)
            .await
    }

    /// `PATCH /orders/{id}/status`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the server refuses the transition.
    pub async fn update_order_status(
        &self,
        id: &str,
        status: OrderStatus,
    ) -> Result<Order, ApiError> {
        self.send_json(
            Method::PATCH,
            &format!("/orders/{}/status", segment(id)),
            &StatusUpdate { status },
        )
        .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on failure.
    pub async fn delete_order(&self, id: &str) -> Result<(), ApiError> {
        self.delete_path(&format!("/orders/{}", segment(id))).await
    }
}
