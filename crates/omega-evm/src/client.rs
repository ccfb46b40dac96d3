//! The provider seam.
//!
//! Gateways never talk to a node directly: reads, submissions and
//! confirmation waits all go through a [`ContractClient`], so callers can
//! inject their own provider or a mock.

use std::future::Future;
use std::sync::Arc;

use alloy::primitives::{Bytes, B256};
use alloy::rpc::types::TransactionRequest;
use omega_core::Receipt;
use thiserror::Error;

/// Failure reported by a [`ContractClient`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ProviderError(pub String);

/// Network access, signing and submission for contract calls.
pub trait ContractClient: Send + Sync {
    /// Executes a read-only call and returns the raw returndata.
    fn call(&self, tx: TransactionRequest)
        -> impl Future<Output = Result<Bytes, ProviderError>> + Send;

    /// Signs and submits a transaction, returning its hash once accepted.
    fn send(&self, tx: TransactionRequest)
        -> impl Future<Output = Result<B256, ProviderError>> + Send;

    /// Resolves once the transaction has a receipt.
    fn wait_for_receipt(
        &self,
        tx_hash: B256,
    ) -> impl Future<Output = Result<Receipt, ProviderError>> + Send;
}

impl<T: ContractClient + ?Sized> ContractClient for Arc<T> {
    fn call(
        &self,
        tx: TransactionRequest,
    ) -> impl Future<Output = Result<Bytes, ProviderError>> + Send {
        (**self).call(tx)
    }

    fn send(
        &self,
        tx: TransactionRequest,
    ) -> impl Future<Output = Result<B256, ProviderError>> + Send {
        (**self).send(tx)
    }

    fn wait_for_receipt(
        &self,
        tx_hash: B256,
    ) -> impl Future<Output = Result<Receipt, ProviderError>> + Send {
        (**self).wait_for_receipt(tx_hash)
    }
}

impl<T: ContractClient + ?Sized> ContractClient for &T {
    fn call(
        &self,
        tx: TransactionRequest,
    ) -> impl Future<Output = Result<Bytes, ProviderError>> + Send {
        (**self).call(tx)
    }

    fn send(
        &self,
        tx: TransactionRequest,
    ) -> impl Future<Output = Result<B256, ProviderError>> + Send {
        (**self).send(tx)
    }

    fn wait_for_receipt(
        &self,
        tx_hash: B256,
    ) -> impl Future<Output = Result<Receipt, ProviderError>> + Send {
        (**self).wait_for_receipt(tx_hash)
    }
}
