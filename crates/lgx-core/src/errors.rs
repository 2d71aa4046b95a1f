//! Cross-cutting error types for Logix.
//!
//! Domain-specific errors (e.g., `ApiError`, `BatchError`) are defined in
//! their respective crates. They converge into `anyhow` in `lgx-cli`.

use thiserror::Error;

use crate::enums::OrderStatus;
use crate::forms::FormErrors;

/// Errors raised by client-side checks before a request is sent.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A status transition was attempted that is not allowed.
    #[error("cannot move {entity_type} {id} from {from} to {to}{}", allowed_suffix(.allowed))]
    InvalidTransition {
        entity_type: String,
        id: String,
        from: String,
        to: String,
        allowed: Vec<String>,
    },

    /// A form draft failed client-side validation.
    #[error(transparent)]
    Form(#[from] FormErrors),

    /// Data failed validation outside of a form (format, constraints).
    #[error("validation error: {0}")]
    Validation(String),
}

fn allowed_suffix(allowed: &[String]) -> String {
    if allowed.is_empty() {
        "; no further status changes are allowed".to_string()
    } else {
        format!("; allowed: {}", allowed.join(", "))
    }
}

impl OrderStatus {
    /// Gate an inline status change before it reaches the server.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidTransition`] listing the allowed targets.
    pub fn check_transition(self, order_id: &str, next: Self) -> Result<(), CoreError> {
        if self.can_transition_to(next) {
            return Ok(());
        }
        Err(CoreError::InvalidTransition {
            entity_type: "order".to_string(),
            id: order_id.to_string(),
            from: self.to_string(),
            to: next.to_string(),
            allowed: self
                .allowed_next_states()
                .iter()
                .map(ToString::to_string)
                .collect(),
        })
    }
}
