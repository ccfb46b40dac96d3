//! Address-bound call plumbing shared by both gateways.

use std::sync::Arc;

use alloy::primitives::{Address, U256};
use alloy::rpc::types::TransactionRequest;
use alloy::sol_types::SolCall;
use omega_core::{Receipt, TxEvent, TxObserver};

use crate::client::ContractClient;
use crate::error::ContractCallError;

/// A contract address plus the client used to reach it.
#[derive(Clone)]
pub(crate) struct BoundContract<C> {
    address: Address,
    client: C,
    observer: Option<Arc<dyn TxObserver>>,
}

impl<C> std::fmt::Debug for BoundContract<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundContract")
            .field("address", &self.address)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

/// ABI method name of a call, e.g. `createToken`.
pub(crate) fn method_name<T: SolCall>() -> &'static str {
    T::SIGNATURE
        .split_once('(')
        .map_or(T::SIGNATURE, |(name, _)| name)
}

impl<C: ContractClient> BoundContract<C> {
    pub(crate) fn new(address: Address, client: C) -> Self {
        Self {
            address,
            client,
            observer: None,
        }
    }

    pub(crate) fn set_observer(&mut self, observer: Arc<dyn TxObserver>) {
        self.observer = Some(observer);
    }

    pub(crate) fn address(&self) -> Address {
        self.address
    }

    /// Executes a view call and decodes its return value.
    pub(crate) async fn read<T: SolCall>(&self, call: T) -> Result<T::Return, ContractCallError> {
        let method = method_name::<T>();
        let tx = TransactionRequest::default()
            .to(self.address)
            .input(call.abi_encode().into());

        tracing::debug!(method, contract = %self.address, "contract read");

        let output = self
            .client
            .call(tx)
            .await
            .map_err(|e| ContractCallError::new(method, e.0))?;

        T::abi_decode_returns(&output)
            .map_err(|e| ContractCallError::new(method, format!("ABI decode error: {e}")))
    }

    /// Submits a transaction and returns once it is confirmed.
    ///
    /// A receipt reporting a revert is an error.
    pub(crate) async fn transact<T: SolCall>(
        &self,
        call: T,
        value: Option<U256>,
    ) -> Result<Receipt, ContractCallError> {
        let method = method_name::<T>();
        let mut tx = TransactionRequest::default()
            .to(self.address)
            .input(call.abi_encode().into());
        if let Some(value) = value {
            tx = tx.value(value);
        }

        let tx_hash = self
            .client
            .send(tx)
            .await
            .map_err(|e| ContractCallError::new(method, e.0))?;

        let event = TxEvent {
            method,
            contract: self.address,
            tx_hash,
        };
        tracing::info!(method, contract = %self.address, tx_hash = %tx_hash, "transaction submitted");
        if let Some(observer) = &self.observer {
            observer.on_submitted(&event);
        }

        let receipt = match self.client.wait_for_receipt(tx_hash).await {
            Ok(receipt) => receipt,
            Err(e) => {
                self.notify_failed(&event, &e.0);
                return Err(ContractCallError::new(method, e.0));
            }
        };

        if !receipt.success {
            let reason = format!("transaction {tx_hash} reverted");
            tracing::warn!(method, contract = %self.address, tx_hash = %tx_hash, "transaction reverted");
            self.notify_failed(&event, &reason);
            return Err(ContractCallError::new(method, reason));
        }

        tracing::info!(
            method,
            contract = %self.address,
            tx_hash = %tx_hash,
            block = ?receipt.block_number,
            gas_used = receipt.gas_used,
            "transaction confirmed"
        );
        if let Some(observer) = &self.observer {
            observer.on_confirmed(&event, &receipt);
        }
        Ok(receipt)
    }

    fn notify_failed(&self, event: &TxEvent<'_>, reason: &str) {
        if let Some(observer) = &self.observer {
            observer.on_failed(event, reason);
        }
    }
}
