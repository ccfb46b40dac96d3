//! Hooks around transaction submission and confirmation.

use alloy::primitives::{Address, B256};

use crate::types::Receipt;

/// A submitted transaction.
#[derive(Debug, Clone, Copy)]
pub struct TxEvent<'a> {
    /// Contract method name as declared in the ABI.
    pub method: &'a str,
    /// Contract the transaction was sent to.
    pub contract: Address,
    /// Transaction hash returned by the provider.
    pub tx_hash: B256,
}

/// Receives notifications for every mutating gateway call.
///
/// `on_submitted` fires once the provider accepted the transaction and
/// before confirmation is awaited; exactly one of `on_confirmed` or
/// `on_failed` follows.
pub trait TxObserver: Send + Sync {
    fn on_submitted(&self, _event: &TxEvent<'_>) {}

    fn on_confirmed(&self, _event: &TxEvent<'_>, _receipt: &Receipt) {}

    fn on_failed(&self, _event: &TxEvent<'_>, _reason: &str) {}
}
