use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::EmployeeRole;

/// Lightweight authenticated operator identity for cross-crate passing.
///
/// Produced by `lgx-auth` from the session token, consumed by `lgx-cli`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SessionIdentity {
    /// Server-side user id (JWT `sub` or `_id`).
    pub user_id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<EmployeeRole>,
    /// Hub the operator is attached to, used as the default hub filter.
    pub hub: Option<String>,
}
