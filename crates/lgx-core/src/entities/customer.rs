use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::refs::Identified;

const fn default_active() -> bool {
    true
}

/// A contract customer whose orders are billed to an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub gst_number: Option<String>,
    #[serde(default)]
    pub address: String,
    pub pincode: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl Identified for Customer {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}
