//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Invalid checkout state transition.
    #[error("Invalid checkout transition from {from} to {to}")]
    InvalidTransition {
        from: &'static str,
        to: &'static str,
    },

    /// A checkout step did not pass validation.
    #[error("Validation failed for checkout step {0}")]
    ValidationFailed(u8),

    /// Storage error.
    #[error("Storage error: {0}")]
    Storage(#[from] vitrina_storage::StorageError),
}
