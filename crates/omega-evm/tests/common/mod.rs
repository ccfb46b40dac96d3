//! Scripted [`ContractClient`] used by the gateway tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use alloy::primitives::{Address, Bytes, B256, U256};
use alloy::rpc::types::TransactionRequest;
use alloy::sol_types::SolCall;
use omega_core::{Receipt, TxEvent, TxObserver};
use omega_evm::{ContractClient, ProviderError};
use tokio::sync::Notify;

/// Answers reads by selector, records sends, and confirms on demand.
#[derive(Default)]
pub struct MockClient {
    responses: Mutex<HashMap<[u8; 4], Bytes>>,
    reads: Mutex<Vec<[u8; 4]>>,
    sent: Mutex<Vec<TransactionRequest>>,
    send_error: Mutex<Option<String>>,
    revert: AtomicBool,
    nonce: AtomicU64,
    gate: Option<Arc<Notify>>,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Confirmation waits until `gate` is notified.
    pub fn gated(gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::default()
        }
    }

    /// Scripts the returndata for every read of `T`.
    pub fn respond<T: SolCall>(&self, returndata: Vec<u8>) {
        self.responses
            .lock()
            .unwrap()
            .insert(T::SELECTOR, Bytes::from(returndata));
    }

    /// Rejects every submission with `reason`.
    pub fn fail_sends(&self, reason: &str) {
        *self.send_error.lock().unwrap() = Some(reason.to_string());
    }

    /// Confirms every transaction with a failed status.
    pub fn revert_receipts(&self) {
        self.revert.store(true, Ordering::SeqCst);
    }

    pub fn sent(&self) -> Vec<TransactionRequest> {
        self.sent.lock().unwrap().clone()
    }

    pub fn reads(&self) -> Vec<[u8; 4]> {
        self.reads.lock().unwrap().clone()
    }

    /// Decodes the last submitted transaction as `T`, with its attached value.
    pub fn last_call<T: SolCall>(&self) -> (T, Option<U256>) {
        let sent = self.sent();
        let tx = sent.last().expect("no transaction sent");
        let input = tx.input.input().cloned().unwrap_or_default();
        assert_eq!(&input[..4], &T::SELECTOR, "unexpected method selector");
        (T::abi_decode(&input).unwrap(), tx.value)
    }
}

impl ContractClient for MockClient {
    async fn call(&self, tx: TransactionRequest) -> Result<Bytes, ProviderError> {
        let input = tx.input.input().cloned().unwrap_or_default();
        let mut selector = [0u8; 4];
        selector.copy_from_slice(&input[..4]);
        self.reads.lock().unwrap().push(selector);
        self.responses
            .lock()
            .unwrap()
            .get(&selector)
            .cloned()
            .ok_or_else(|| ProviderError("execution reverted".into()))
    }

    async fn send(&self, tx: TransactionRequest) -> Result<B256, ProviderError> {
        if let Some(reason) = self.send_error.lock().unwrap().clone() {
            return Err(ProviderError(reason));
        }
        self.sent.lock().unwrap().push(tx);
        let n = self.nonce.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(B256::left_padding_from(&n.to_be_bytes()))
    }

    async fn wait_for_receipt(&self, tx_hash: B256) -> Result<Receipt, ProviderError> {
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        Ok(Receipt {
            tx_hash,
            block_number: Some(1),
            gas_used: 21_000,
            success: !self.revert.load(Ordering::SeqCst),
        })
    }
}

/// Records observer callbacks as `"<event>:<method>"`.
#[derive(Default)]
pub struct RecordingObserver {
    pub events: Mutex<Vec<String>>,
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl TxObserver for RecordingObserver {
    fn on_submitted(&self, event: &TxEvent<'_>) {
        self.events
            .lock()
            .unwrap()
            .push(format!("submitted:{}", event.method));
    }

    fn on_confirmed(&self, event: &TxEvent<'_>, _receipt: &Receipt) {
        self.events
            .lock()
            .unwrap()
            .push(format!("confirmed:{}", event.method));
    }

    fn on_failed(&self, event: &TxEvent<'_>, _reason: &str) {
        self.events
            .lock()
            .unwrap()
            .push(format!("failed:{}", event.method));
    }
}

pub fn addr(byte: u8) -> Address {
    Address::with_last_byte(byte)
}
