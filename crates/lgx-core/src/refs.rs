//! References between entities.
//!
//! The server links entities by `_id` and may populate a reference into the
//! full document on read. [`Ref`] accepts both shapes so the same struct
//! deserializes list responses (bare ids) and detail responses (populated).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An entity with a server-assigned id and a human-readable label.
pub trait Identified {
    fn id(&self) -> &str;

    /// Short label used in tables and toasts.
    fn label(&self) -> &str {
        self.id()
    }
}

/// A reference to another entity, either a bare id or the populated document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Ref<T> {
    Id(String),
    Populated(Box<T>),
}

impl<T: Identified> Ref<T> {
    /// The referenced id regardless of population.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Id(id) => id,
            Self::Populated(entity) => entity.id(),
        }
    }

    /// The populated label, falling back to the id.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Id(id) => id,
            Self::Populated(entity) => entity.label(),
        }
    }

    #[must_use]
    pub fn populated(&self) -> Option<&T> {
        match self {
            Self::Id(_) => None,
            Self::Populated(entity) => Some(entity),
        }
    }

    /// Whether this reference points at `id`.
    #[must_use]
    pub fn is(&self, id: &str) -> bool {
        self.id() == id
    }
}

impl<T> From<String> for Ref<T> {
    fn from(id: String) -> Self {
        Self::Id(id)
    }
}

impl<T> From<&str> for Ref<T> {
    fn from(id: &str) -> Self {
        Self::Id(id.to_string())
    }
}
