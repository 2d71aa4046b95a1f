//! Form drafts: the request bodies operators fill in before creating or
//! updating a resource.
//!
//! Every draft implements [`Form`]. `validate()` collects *all* field errors
//! instead of stopping at the first, so the CLI can report every problem in
//! one toast.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entities::{
    AttachedOrder, Customer, Employee, Hub, Loader, Order, OrderItem, Organization, Party, Route,
};
use crate::enums::{EmployeeRole, OrderStatus, PaymentMode};
use crate::refs::Ref;
use crate::validation;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// A single field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// All field errors of one draft.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema, Error)]
#[error("invalid form: {}", joined(.errors))]
pub struct FormErrors {
    pub errors: Vec<FieldError>,
}

impl FormErrors {
    #[must_use]
    pub fn has(&self, field: &str) -> bool {
        self.errors.iter().any(|error| error.field == field)
    }
}

fn joined(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|error| format!("{}: {}", error.field, error.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Accumulates field errors while a draft is checked.
#[derive(Debug, Default)]
pub struct FormCheck {
    errors: Vec<FieldError>,
}

impl FormCheck {
    pub fn fail(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.to_string(),
            message: message.into(),
        });
    }

    pub fn required(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.fail(field, "is required");
        }
    }

    pub fn phone(&mut self, field: &str, value: &str) {
        if !validation::is_valid_phone(value) {
            self.fail(field, "must be a 10-digit mobile number starting with 6-9");
        }
    }

    pub fn pincode(&mut self, field: &str, value: &str) {
        if !validation::is_valid_pincode(value) {
            self.fail(field, "must be a 6-digit pincode not starting with 0");
        }
    }

    pub fn vehicle_number(&mut self, field: &str, value: &str) {
        if !validation::is_valid_vehicle_number(value) {
            self.fail(field, "must look like MH12AB1234");
        }
    }

    pub fn optional_email(&mut self, field: &str, value: Option<&str>) {
        if let Some(email) = value.filter(|v| !v.trim().is_empty())
            && !validation::is_valid_email(email)
        {
            self.fail(field, "is not a valid email address");
        }
    }

    pub fn optional_gst(&mut self, field: &str, value: Option<&str>) {
        if let Some(gst) = value.filter(|v| !v.trim().is_empty())
            && !validation::is_valid_gst_number(gst)
        {
            self.fail(field, "is not a valid GST number");
        }
    }

    pub fn party(&mut self, prefix: &str, party: &Party) {
        self.required(&format!("{prefix}.name"), &party.name);
        self.phone(&format!("{prefix}.phone"), &party.phone);
        self.pincode(&format!("{prefix}.pincode"), &party.pincode);
    }

    /// Finish the check.
    ///
    /// # Errors
    ///
    /// Returns [`FormErrors`] if any field failed.
    pub fn finish(self) -> Result<(), FormErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(FormErrors {
                errors: self.errors,
            })
        }
    }
}

/// A draft that can be normalized and validated before submission.
pub trait Form {
    /// Canonicalize user input in place (trim, uppercase plates).
    fn normalize(&mut self) {}

    fn check(&self, check: &mut FormCheck);

    /// Run every field check.
    ///
    /// # Errors
    ///
    /// Returns [`FormErrors`] listing every failing field.
    fn validate(&self) -> Result<(), FormErrors> {
        let mut check = FormCheck::default();
        self.check(&mut check);
        check.finish()
    }
}

// ---------------------------------------------------------------------------
// Orders
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub consignor: Party,
    pub consignee: Party,
    pub items: Vec<OrderItem>,
    pub source_hub: String,
    pub destination_hub: String,
    pub customer: Option<String>,
    pub payment_mode: PaymentMode,
    pub declared_value: f64,
}

impl Form for OrderDraft {
    fn normalize(&mut self) {
        for party in [&mut self.consignor, &mut self.consignee] {
            party.name = party.name.trim().to_string();
            party.phone = party.phone.trim().to_string();
            party.pincode = party.pincode.trim().to_string();
        }
    }

    fn check(&self, check: &mut FormCheck) {
        check.party("consignor", &self.consignor);
        check.party("consignee", &self.consignee);
        check.required("sourceHub", &self.source_hub);
        check.required("destinationHub", &self.destination_hub);
        if !self.source_hub.is_empty() && self.source_hub == self.destination_hub {
            check.fail("destinationHub", "must differ from the source hub");
        }
        if self.items.is_empty() {
            check.fail("items", "at least one item is required");
        }
        for (index, item) in self.items.iter().enumerate() {
            if item.quantity == 0 {
                check.fail(&format!("items[{index}].quantity"), "must be at least 1");
            }
            if item.weight <= 0.0 {
                check.fail(&format!("items[{index}].weight"), "must be greater than 0");
            }
        }
        if self.declared_value < 0.0 {
            check.fail("declaredValue", "cannot be negative");
        }
    }
}

impl From<&Order> for OrderDraft {
    fn from(order: &Order) -> Self {
        let hub_id = |hub: Option<&Ref<Hub>>| hub.map(|h| h.id().to_string()).unwrap_or_default();
        Self {
            consignor: order.consignor.clone(),
            consignee: order.consignee.clone(),
            items: order.items.clone(),
            source_hub: hub_id(order.source_hub.as_ref()),
            destination_hub: hub_id(order.destination_hub.as_ref()),
            customer: order.customer.as_ref().map(|c| c.id().to_string()),
            payment_mode: order.payment_mode.unwrap_or(PaymentMode::Prepaid),
            declared_value: order.declared_value,
        }
    }
}

/// Body of `PATCH /orders/{id}/status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct StatusUpdate {
    pub status: OrderStatus,
}

// ---------------------------------------------------------------------------
// Hubs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HubDraft {
    pub name: String,
    pub code: String,
    pub address: String,
    pub city: String,
    pub pincode: String,
    pub phone: String,
    pub manager: Option<String>,
    pub is_active: bool,
}

impl From<&Hub> for HubDraft {
    fn from(hub: &Hub) -> Self {
        Self {
            name: hub.name.clone(),
            code: hub.code.clone(),
            address: hub.address.clone(),
            city: hub.city.clone(),
            pincode: hub.pincode.clone(),
            phone: hub.phone.clone(),
            manager: hub.manager.as_ref().map(|m| m.id().to_string()),
            is_active: hub.is_active,
        }
    }
}

impl Form for HubDraft {
    fn normalize(&mut self) {
        self.code = self.code.trim().to_ascii_uppercase();
    }

    fn check(&self, check: &mut FormCheck) {
        check.required("name", &self.name);
        check.required("code", &self.code);
        check.pincode("pincode", &self.pincode);
        if !self.phone.is_empty() {
            check.phone("phone", &self.phone);
        }
    }
}

// ---------------------------------------------------------------------------
// Employees
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub role: EmployeeRole,
    pub hub: Option<String>,
    /// Only sent on create; the server hashes it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub is_active: bool,
}

impl From<&Employee> for EmployeeDraft {
    fn from(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            phone: employee.phone.clone(),
            email: employee.email.clone(),
            role: employee.role,
            hub: employee.hub.as_ref().map(|h| h.id().to_string()),
            password: None,
            is_active: employee.is_active,
        }
    }
}

impl Form for EmployeeDraft {
    fn check(&self, check: &mut FormCheck) {
        check.required("name", &self.name);
        check.phone("phone", &self.phone);
        check.optional_email("email", self.email.as_deref());
        if self.role != EmployeeRole::Admin && self.hub.as_deref().is_none_or(str::is_empty) {
            check.fail("hub", "is required for non-admin roles");
        }
        if let Some(password) = &self.password
            && password.len() < 8
        {
            check.fail("password", "must be at least 8 characters");
        }
    }
}

// ---------------------------------------------------------------------------
// Customers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDraft {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub gst_number: Option<String>,
    pub address: String,
    pub pincode: Option<String>,
    pub is_active: bool,
}

impl From<&Customer> for CustomerDraft {
    fn from(customer: &Customer) -> Self {
        Self {
            name: customer.name.clone(),
            phone: customer.phone.clone(),
            email: customer.email.clone(),
            gst_number: customer.gst_number.clone(),
            address: customer.address.clone(),
            pincode: customer.pincode.clone(),
            is_active: customer.is_active,
        }
    }
}

impl Form for CustomerDraft {
    fn normalize(&mut self) {
        if let Some(gst) = self.gst_number.as_mut() {
            *gst = gst.trim().to_ascii_uppercase();
        }
    }

    fn check(&self, check: &mut FormCheck) {
        check.required("name", &self.name);
        check.phone("phone", &self.phone);
        check.optional_email("email", self.email.as_deref());
        check.optional_gst("gstNumber", self.gst_number.as_deref());
        if let Some(pincode) = self.pincode.as_deref().filter(|p| !p.is_empty()) {
            check.pincode("pincode", pincode);
        }
    }
}

// ---------------------------------------------------------------------------
// Loaders
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoaderDraft {
    pub name: String,
    pub phone: String,
    pub vehicle_number: String,
    pub capacity_kg: f64,
    pub is_active: bool,
}

impl From<&Loader> for LoaderDraft {
    fn from(loader: &Loader) -> Self {
        Self {
            name: loader.name.clone(),
            phone: loader.phone.clone(),
            vehicle_number: loader.vehicle_number.clone(),
            capacity_kg: loader.capacity_kg,
            is_active: loader.is_active,
        }
    }
}

impl Form for LoaderDraft {
    fn normalize(&mut self) {
        self.vehicle_number = validation::normalize_vehicle_number(&self.vehicle_number);
    }

    fn check(&self, check: &mut FormCheck) {
        check.required("name", &self.name);
        check.phone("phone", &self.phone);
        check.vehicle_number("vehicleNumber", &self.vehicle_number);
        if self.capacity_kg < 0.0 {
            check.fail("capacityKg", "cannot be negative");
        }
    }
}

// ---------------------------------------------------------------------------
// Routes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RouteDraft {
    pub name: String,
    pub origin_hub: String,
    pub destination_hub: String,
    pub stops: Vec<String>,
    pub distance_km: f64,
    pub is_active: bool,
}

impl From<&Route> for RouteDraft {
    fn from(route: &Route) -> Self {
        Self {
            name: route.name.clone(),
            origin_hub: route.origin_hub.id().to_string(),
            destination_hub: route.destination_hub.id().to_string(),
            stops: route.stops.iter().map(|s| s.id().to_string()).collect(),
            distance_km: route.distance_km,
            is_active: route.is_active,
        }
    }
}

impl Form for RouteDraft {
    fn check(&self, check: &mut FormCheck) {
        check.required("name", &self.name);
        check.required("originHub", &self.origin_hub);
        check.required("destinationHub", &self.destination_hub);
        if !self.origin_hub.is_empty() && self.origin_hub == self.destination_hub {
            check.fail("destinationHub", "must differ from the origin hub");
        }
        if self
            .stops
            .iter()
            .any(|stop| *stop == self.origin_hub || *stop == self.destination_hub)
        {
            check.fail("stops", "cannot repeat the origin or destination hub");
        }
        if self.distance_km < 0.0 {
            check.fail("distanceKm", "cannot be negative");
        }
    }
}

// ---------------------------------------------------------------------------
// Organization
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationDraft {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: Option<String>,
    pub gst_number: Option<String>,
    pub logo_url: Option<String>,
}

impl From<&Organization> for OrganizationDraft {
    fn from(org: &Organization) -> Self {
        Self {
            name: org.name.clone(),
            address: org.address.clone(),
            phone: org.phone.clone(),
            email: org.email.clone(),
            gst_number: org.gst_number.clone(),
            logo_url: org.logo_url.clone(),
        }
    }
}

impl Form for OrganizationDraft {
    fn normalize(&mut self) {
        if let Some(gst) = self.gst_number.as_mut() {
            *gst = gst.trim().to_ascii_uppercase();
        }
    }

    fn check(&self, check: &mut FormCheck) {
        check.required("name", &self.name);
        if !self.phone.is_empty() {
            check.phone("phone", &self.phone);
        }
        check.optional_email("email", self.email.as_deref());
        check.optional_gst("gstNumber", self.gst_number.as_deref());
    }
}

// ---------------------------------------------------------------------------
// Batches
// ---------------------------------------------------------------------------

/// Create/update body for a manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ManifestDraft {
    /// Present when editing an existing manifest; never sent in the body.
    #[serde(skip)]
    pub id: Option<String>,
    pub source_hub: String,
    pub destination_hub: String,
    pub loader: Option<String>,
    pub vehicle_number: String,
    pub loader_weight: f64,
    pub orders: Vec<AttachedOrder>,
}

impl Form for ManifestDraft {
    fn normalize(&mut self) {
        self.vehicle_number = validation::normalize_vehicle_number(&self.vehicle_number);
    }

    fn check(&self, check: &mut FormCheck) {
        check.required("sourceHub", &self.source_hub);
        check.required("destinationHub", &self.destination_hub);
        if !self.source_hub.is_empty() && self.source_hub == self.destination_hub {
            check.fail("destinationHub", "must differ from the source hub");
        }
        check.vehicle_number("vehicleNumber", &self.vehicle_number);
        if self.loader_weight < 0.0 {
            check.fail("loaderWeight", "cannot be negative");
        }
    }
}

/// Create/update body for a delivery run sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DrsDraft {
    #[serde(skip)]
    pub id: Option<String>,
    pub hub: String,
    pub delivery_agent: String,
    pub vehicle_number: String,
    pub orders: Vec<AttachedOrder>,
}

impl Form for DrsDraft {
    fn normalize(&mut self) {
        self.vehicle_number = validation::normalize_vehicle_number(&self.vehicle_number);
    }

    fn check(&self, check: &mut FormCheck) {
        check.required("hub", &self.hub);
        check.required("deliveryAgent", &self.delivery_agent);
        check.vehicle_number("vehicleNumber", &self.vehicle_number);
    }
}

/// Order refs inside drafts are always sent as bare ids.
#[must_use]
pub fn attached_ids_only(orders: &[AttachedOrder]) -> Vec<AttachedOrder> {
    orders
        .iter()
        .map(|entry| AttachedOrder {
            order: Ref::Id(entry.order_id().to_string()),
            items: entry.items,
            weight: entry.weight,
        })
        .collect()
}
