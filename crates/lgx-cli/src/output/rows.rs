//! Flat summary rows for tables and CSV export.

use lgx_batch::AttachedEntry;
use lgx_core::entities::{Customer, Drs, Employee, Hub, Loader, Manifest, Order, Route};
use serde::Serialize;

fn yes_no(value: bool) -> &'static str {
    if value { "active" } else { "inactive" }
}

#[derive(Debug, Serialize)]
pub struct OrderRow {
    pub id: String,
    pub docket: String,
    pub status: String,
    pub consignor: String,
    pub consignee: String,
    pub city: String,
    pub pincode: String,
    pub items: u32,
    pub weight_kg: f64,
    pub current_hub: String,
    pub booked_at: String,
}

impl From<&Order> for OrderRow {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.clone(),
            docket: order.order_id.clone(),
            status: order.status.to_string(),
            consignor: order.consignor.name.clone(),
            consignee: order.consignee.name.clone(),
            city: order.consignee.city.clone(),
            pincode: order.consignee.pincode.clone(),
            items: order.piece_count(),
            weight_kg: order.total_weight(),
            current_hub: order
                .current_hub
                .as_ref()
                .map_or_else(String::new, |hub| hub.label().to_string()),
            booked_at: order
                .created_at
                .map_or_else(String::new, |at| at.format("%Y-%m-%d %H:%M").to_string()),
        }
    }
}

/// A batch line: attached order with its captured aggregates.
#[derive(Debug, Serialize)]
pub struct AttachedRow {
    pub order_id: String,
    pub docket: String,
    pub consignor: String,
    pub consignee: String,
    pub pincode: String,
    pub items: u32,
    pub weight_kg: f64,
    pub status: String,
    pub state: &'static str,
}

impl From<&AttachedEntry> for AttachedRow {
    fn from(entry: &AttachedEntry) -> Self {
        let order = entry.order.as_ref();
        let text = |f: fn(&Order) -> &str| order.map_or_else(String::new, |o| f(o).to_string());
        Self {
            order_id: entry.order_id.clone(),
            docket: entry.label().to_string(),
            consignor: text(|o| &o.consignor.name),
            consignee: text(|o| &o.consignee.name),
            pincode: text(|o| &o.consignee.pincode),
            items: entry.items,
            weight_kg: entry.weight,
            status: text(|o| o.status.as_str()),
            state: if entry.persisted { "persisted" } else { "staged" },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HubRow {
    pub id: String,
    pub code: String,
    pub name: String,
    pub city: String,
    pub pincode: String,
    pub phone: String,
    pub status: &'static str,
}

impl From<&Hub> for HubRow {
    fn from(hub: &Hub) -> Self {
        Self {
            id: hub.id.clone(),
            code: hub.code.clone(),
            name: hub.name.clone(),
            city: hub.city.clone(),
            pincode: hub.pincode.clone(),
            phone: hub.phone.clone(),
            status: yes_no(hub.is_active),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EmployeeRow {
    pub id: String,
    pub name: String,
    pub role: String,
    pub phone: String,
    pub hub: String,
    pub status: &'static str,
}

impl From<&Employee> for EmployeeRow {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id.clone(),
            name: employee.name.clone(),
            role: employee.role.to_string(),
            phone: employee.phone.clone(),
            hub: employee
                .hub
                .as_ref()
                .map_or_else(String::new, |hub| hub.label().to_string()),
            status: yes_no(employee.is_active),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CustomerRow {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub gst_number: String,
    pub status: &'static str,
}

impl From<&Customer> for CustomerRow {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id.clone(),
            name: customer.name.clone(),
            phone: customer.phone.clone(),
            gst_number: customer.gst_number.clone().unwrap_or_default(),
            status: yes_no(customer.is_active),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoaderRow {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub vehicle_number: String,
    pub capacity_kg: f64,
    pub status: &'static str,
}

impl From<&Loader> for LoaderRow {
    fn from(loader: &Loader) -> Self {
        Self {
            id: loader.id.clone(),
            name: loader.name.clone(),
            phone: loader.phone.clone(),
            vehicle_number: loader.vehicle_number.clone(),
            capacity_kg: loader.capacity_kg,
            status: yes_no(loader.is_active),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RouteRow {
    pub id: String,
    pub name: String,
    pub origin: String,
    pub destination: String,
    pub stops: usize,
    pub distance_km: f64,
    pub status: &'static str,
}

impl From<&Route> for RouteRow {
    fn from(route: &Route) -> Self {
        Self {
            id: route.id.clone(),
            name: route.name.clone(),
            origin: route.origin_hub.label().to_string(),
            destination: route.destination_hub.label().to_string(),
            stops: route.stops.len(),
            distance_km: route.distance_km,
            status: yes_no(route.is_active),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ManifestRow {
    pub id: String,
    pub manifest: String,
    pub status: String,
    pub from: String,
    pub to: String,
    pub vehicle: String,
    pub orders: usize,
    pub weight_kg: f64,
    pub loader_weight_kg: f64,
}

impl From<&Manifest> for ManifestRow {
    fn from(manifest: &Manifest) -> Self {
        Self {
            id: manifest.id.clone(),
            manifest: manifest.manifest_id.clone(),
            status: manifest.status.to_string(),
            from: manifest.source_hub.label().to_string(),
            to: manifest.destination_hub.label().to_string(),
            vehicle: manifest.vehicle_number.clone(),
            orders: manifest.orders.len(),
            weight_kg: manifest.actual_weight(),
            loader_weight_kg: manifest.loader_weight,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DrsRow {
    pub id: String,
    pub drs: String,
    pub status: String,
    pub hub: String,
    pub agent: String,
    pub vehicle: String,
    pub orders: usize,
}

impl From<&Drs> for DrsRow {
    fn from(drs: &Drs) -> Self {
        Self {
            id: drs.id.clone(),
            drs: drs.drs_id.clone(),
            status: drs.status.to_string(),
            hub: drs.hub.label().to_string(),
            agent: drs.delivery_agent.label().to_string(),
            vehicle: drs.vehicle_number.clone(),
            orders: drs.orders.len(),
        }
    }
}
