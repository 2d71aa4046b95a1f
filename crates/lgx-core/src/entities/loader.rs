use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::refs::Identified;

const fn default_active() -> bool {
    true
}

/// A contracted vehicle operator that carries manifests between hubs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Loader {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub phone: String,
    pub vehicle_number: String,
    /// Rated payload in kilograms.
    #[serde(default)]
    pub capacity_kg: f64,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl Identified for Loader {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}
