use lgx_client::ApiError;
use lgx_core::enums::BatchKind;
use lgx_core::forms::FormErrors;

/// Errors raised while assembling or saving a batch.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Form(#[from] FormErrors),

    /// The order is not in the pending list, so it cannot be attached.
    #[error("order {0} is not pending for this batch")]
    UnknownOrder(String),

    #[error("order {0} is not attached to this batch")]
    NotAttached(String),

    #[error("select at least one order before saving")]
    Empty,

    /// Declared loader weight is below the computed weight of the orders.
    #[error("loader weight {declared} kg is less than the actual weight {actual} kg")]
    Overweight { declared: f64, actual: f64 },

    /// The saved batch has moved past the editable state.
    #[error("{kind} {id} is {status} and can no longer be edited")]
    NotEditable {
        kind: BatchKind,
        id: String,
        status: String,
    },

    #[error("expected a {expected} draft, got a {got} draft")]
    KindMismatch { expected: BatchKind, got: BatchKind },
}

impl BatchError {
    /// Whether the server rejected the session token.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Api(e) if e.is_unauthorized())
    }
}
