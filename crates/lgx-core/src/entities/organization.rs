use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::refs::Identified;

/// The tenant organization; one document per deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    pub email: Option<String>,
    pub gst_number: Option<String>,
    pub logo_url: Option<String>,
}

impl Identified for Organization {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}
