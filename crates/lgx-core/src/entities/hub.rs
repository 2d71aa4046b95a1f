use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Employee;
use crate::refs::{Identified, Ref};

const fn default_active() -> bool {
    true
}

/// A sorting/transit facility orders move between.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Hub {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    /// Short code used on dockets (e.g. `PNQ`).
    pub code: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    pub pincode: String,
    #[serde(default)]
    pub phone: String,
    pub manager: Option<Ref<Employee>>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl Identified for Hub {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}
