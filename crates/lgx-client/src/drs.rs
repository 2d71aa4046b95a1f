//! `/drs` resource (delivery run sheets).

use lgx_core::entities::Drs;
use lgx_core::enums::DrsStatus;
use lgx_core::forms::{DrsDraft, attached_ids_only};
use reqwest::Method;

use crate::query::QueryString;
use crate::{ApiClient, ApiError, segment};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DrsQuery {
    pub status: Option<DrsStatus>,
    pub hub: Option<String>,
    pub delivery_agent: Option<String>,
    pub search: Option<String>,
}

impl DrsQuery {
    #[must_use]
    pub fn to_query(&self) -> QueryString {
        let mut q = QueryString::new();
        q.push("status", self.status)
            .push("hub", self.hub.as_deref())
            .push("deliveryAgent", self.delivery_agent.as_deref())
            .push("search", self.search.as_deref());
        q
    }
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, a non-success status, or
    /// an unparseable body.
    pub async fn list_drs(&self, query: &DrsQuery) -> Result<Vec<Drs>, ApiError> {
        self.get_json(&format!("/drs{}", query.to_query().to_suffix()))
            .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] for an unknown id.
    pub async fn get_drs(&self, id: &str) -> Result<Drs, ApiError> {
        self.get_json(&format!("/drs/{}", segment(id))).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the server rejects the run sheet.
    pub async fn create_drs(&self, draft: &DrsDraft) -> Result<Drs, ApiError> {
        let body = DrsDraft {
            orders: attached_ids_only(&draft.orders),
            ..draft.clone()
        };
        self.send_json(Method::POST, "/drs", &body).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the server rejects the run sheet.
    pub async fn update_drs(&self, id: &str, draft: &DrsDraft) -> Result<Drs, ApiError> {
        let body = DrsDraft {
            orders: attached_ids_only(&draft.orders),
            ..draft.clone()
        };
        self.send_json(Method::PUT, &format!("/drs/{}", segment(id)), &body)
            .await
    }

    /// Detach one order from a saved run sheet; returns the updated sheet.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if the sheet or order is unknown.
    pub async fn remove_drs_order(&self, id: &str, order_id: &str) -> Result<Drs, ApiError> {
        self.delete_json(&format!("/drs/{}/order/{}", segment(id), segment(order_id)))
            .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on failure.
    pub async fn delete_drs(&self, id: &str) -> Result<(), ApiError> {
        self.delete_path(&format!("/drs/{}", segment(id))).await
    }
}
