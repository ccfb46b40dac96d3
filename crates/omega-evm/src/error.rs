//! Gateway errors.

use omega_core::journal::JournalError;
use omega_core::{TaxError, UnitsError};
use thiserror::Error;

/// The provider rejected a contract read or write.
///
/// `reason` is the provider's message, unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("contract call {method} failed: {reason}")]
pub struct ContractCallError {
    /// ABI method name.
    pub method: String,
    pub reason: String,
}

impl ContractCallError {
    /// Error for `method` carrying the provider's `reason`.
    pub fn new(method: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            reason: reason.into(),
        }
    }
}

/// Errors returned by gateway methods.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error(transparent)]
    ContractCall(#[from] ContractCallError),
    #[error("amount conversion: {0}")]
    Units(#[from] UnitsError),
    #[error("tax conversion: {0}")]
    Tax(#[from] TaxError),
    #[error("factory_address is not configured")]
    MissingFactoryAddress,
    #[error("journal: {0}")]
    Journal(#[from] JournalError),
}

/// Result alias for gateway operations.
pub type Result<T> = std::result::Result<T, GatewayError>;
