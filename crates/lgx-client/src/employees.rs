//! `/employees` resource.

use lgx_core::entities::Employee;
use lgx_core::forms::EmployeeDraft;
use reqwest::Method;

use crate::query::ListQuery;
use crate::{ApiClient, ApiError, segment};

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, a non-success status, or
    /// an unparseable body.
    pub async fn list_employees(&self, query: &ListQuery) -> Result<Vec<Employee>, ApiError> {
        self.get_json(&format!("/employees{}", query.to_query().to_suffix()))
            .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] for an unknown id.
    pub async fn get_employee(&self, id: &str) -> Result<Employee, ApiError> {
        self.get_json(&format!("/employees/{}", segment(id))).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the server rejects the draft.
    pub async fn create_employee(&self, draft: &EmployeeDraft) -> Result<Employee, ApiError> {
        self.send_json(Method::POST, "/employees", draft).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the server rejects the draft.
    pub async fn update_employee(&self, id: &str, draft: &EmployeeDraft) -> Result<Employee, ApiError> {
        self.send_json(Method::PUT, &format!("/employees/{}", segment(id)), draft)
            .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on failure.
    pub async fn delete_employee(&self, id: &str) -> Result<(), ApiError> {
        self.delete_path(&format!("/employees/{}", segment(id))).await
    }

    /// Active employees at `hub` who can be assigned a delivery run sheet.
    ///
    /// The server filters by hub; the role check happens here because the
    /// list endpoint takes a single role.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::list_employees`].
    pub async fn delivery_agents(&self, hub: Option<&str>) -> Result<Vec<Employee>, ApiError> {
        let query = ListQuery {
            hub: hub.map(str::to_string),
            active: Some(true),
            ..ListQuery::default()
        };
        let mut employees = self.list_employees(&query).await?;
        employees.retain(|e| e.is_active && e.role.can_run_drs());
        Ok(employees)
    }
}

