use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Hub;
use crate::refs::{Identified, Ref};

const fn default_active() -> bool {
    true
}

/// A line-haul route between two hubs with intermediate stops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub origin_hub: Ref<Hub>,
    pub destination_hub: Ref<Hub>,
    #[serde(default)]
    pub stops: Vec<Ref<Hub>>,
    #[serde(default)]
    pub distance_km: f64,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl Route {
    /// Whether the route touches `hub_id` as origin, stop, or destination.
    #[must_use]
    pub fn serves(&self, hub_id: &str) -> bool {
        self.origin_hub.is(hub_id)
            || self.destination_hub.is(hub_id)
            || self.stops.iter().any(|stop| stop.is(hub_id))
    }
}

impl Identified for Route {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}
