use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Hub;
use crate::enums::EmployeeRole;
use crate::refs::{Identified, Ref};

const fn default_active() -> bool {
    true
}

/// A back-office or field employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub role: EmployeeRole,
    pub hub: Option<Ref<Hub>>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl Identified for Employee {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}
