//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default result limit.
const fn default_limit() -> u32 {
    50
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default result limit for list commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// Hub id used when a command needs a hub and none is given.
    #[serde(default)]
    pub default_hub: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            default_hub: String::new(),
        }
    }
}

impl GeneralConfig {
    #[must_use]
    pub fn default_hub(&self) -> Option<&str> {
        Some(self.default_hub.as_str()).filter(|hub| !hub.is_empty())
    }
}
