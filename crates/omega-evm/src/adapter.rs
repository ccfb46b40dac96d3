//! Chain adapter implementation.
//!
//! Connects to an EVM-compatible JSON-RPC endpoint and implements
//! [`ContractClient`] on top of an alloy provider. Signing, nonces, gas and
//! fees are filled by the provider's wallet and fillers.

use std::time::Duration;

use alloy::network::{Ethereum, EthereumWallet};
use alloy::primitives::{Address, Bytes, B256};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::rpc::types::{TransactionReceipt, TransactionRequest};
use alloy::signers::local::PrivateKeySigner;
use omega_core::config::GatewayConfig;
use omega_core::Receipt;
use thiserror::Error;

use crate::client::{ContractClient, ProviderError};

/// Errors constructing an adapter.
#[derive(Debug, Error)]
pub enum EvmAdapterError {
    #[error("URL parse error: {0}")]
    UrlParse(String),
}

/// Result alias for adapter construction.
pub type Result<T> = std::result::Result<T, EvmAdapterError>;

const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// An EVM chain adapter connected to a specific RPC endpoint.
pub struct EvmAdapter {
    provider: DynProvider<Ethereum>,
    rpc_url: String,
    sender: Option<Address>,
    poll_interval: Duration,
}

impl std::fmt::Debug for EvmAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EvmAdapter")
            .field("rpc_url", &self.rpc_url)
            .field("sender", &self.sender)
            .field("poll_interval", &self.poll_interval)
            .finish()
    }
}

impl EvmAdapter {
    /// Creates a read-only adapter for the given RPC URL.
    ///
    /// Reads work; submissions are rejected by the node unless it manages
    /// the sending account itself.
    pub fn new(rpc_url: &str) -> Result<Self> {
        let url = parse_url(rpc_url)?;
        let provider = ProviderBuilder::new().connect_http(url).erased();

        Ok(Self {
            provider,
            rpc_url: rpc_url.to_string(),
            sender: None,
            poll_interval: DEFAULT_POLL_INTERVAL,
        })
    }

    /// Creates an adapter that signs transactions with `signer`.
    pub fn with_signer(rpc_url: &str, signer: PrivateKeySigner) -> Result<Self> {
        let url = parse_url(rpc_url)?;
        let sender = signer.address();
        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::from(signer))
            .connect_http(url)
            .erased();

        Ok(Self {
            provider,
            rpc_url: rpc_url.to_string(),
            sender: Some(sender),
            poll_interval: DEFAULT_POLL_INTERVAL,
        })
    }

    /// Creates an adapter from a [`GatewayConfig`].
    pub fn from_config(config: &GatewayConfig, signer: Option<PrivateKeySigner>) -> Result<Self> {
        let adapter = match signer {
            Some(signer) => Self::with_signer(&config.rpc_url, signer)?,
            None => Self::new(&config.rpc_url)?,
        };
        Ok(adapter.with_poll_interval(config.poll_interval()))
    }

    /// Sets the delay between receipt polls.
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Returns a reference to the underlying provider.
    pub fn provider(&self) -> &DynProvider<Ethereum> {
        &self.provider
    }

    /// Returns the RPC URL.
    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    /// Address transactions are signed with, if a signer is attached.
    pub fn sender(&self) -> Option<Address> {
        self.sender
    }
}

impl ContractClient for EvmAdapter {
    async fn call(&self, tx: TransactionRequest) -> std::result::Result<Bytes, ProviderError> {
        self.provider
            .call(tx)
            .await
            .map_err(|e| ProviderError(e.to_string()))
    }

    async fn send(&self, tx: TransactionRequest) -> std::result::Result<B256, ProviderError> {
        let tx = match self.sender {
            Some(sender) => tx.from(sender),
            None => tx,
        };
        let pending = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(|e| ProviderError(e.to_string()))?;
        Ok(*pending.tx_hash())
    }

    async fn wait_for_receipt(&self, tx_hash: B256) -> std::result::Result<Receipt, ProviderError> {
        loop {
            let receipt = self
                .provider
                .get_transaction_receipt(tx_hash)
                .await
                .map_err(|e| ProviderError(e.to_string()))?;
            if let Some(receipt) = receipt {
                return Ok(to_receipt(&receipt));
            }
            tracing::trace!(tx_hash = %tx_hash, "receipt not yet available");
            tokio::time::sleep(self.poll_interval).await;
        }
    }
}

fn parse_url(rpc_url: &str) -> Result<alloy::transports::http::reqwest::Url> {
    rpc_url
        .parse()
        .map_err(|e| EvmAdapterError::UrlParse(format!("{e}")))
}

fn to_receipt(receipt: &TransactionReceipt) -> Receipt {
    Receipt {
        tx_hash: receipt.transaction_hash,
        block_number: receipt.block_number,
        gas_used: receipt.gas_used,
        success: receipt.status(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    // anvil's first dev account
    const DEV_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    #[test]
    fn adapter_debug_display() {
        let adapter = EvmAdapter::new("http://localhost:8545").unwrap();
        let debug = format!("{adapter:?}");
        assert!(debug.contains("localhost:8545"));
        assert!(adapter.sender().is_none());
    }

    #[test]
    fn invalid_url_returns_error() {
        let result = EvmAdapter::new("not a valid url");
        assert!(matches!(result, Err(EvmAdapterError::UrlParse(_))));
    }

    #[test]
    fn signer_sets_sender() {
        let signer = PrivateKeySigner::from_str(DEV_KEY).unwrap();
        let adapter = EvmAdapter::with_signer("http://localhost:8545", signer).unwrap();
        let expected: Address = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266".parse().unwrap();
        assert_eq!(adapter.sender(), Some(expected));
    }

    #[test]
    fn from_config_applies_poll_interval() {
        let config =
            GatewayConfig::from_yaml("rpc_url: http://localhost:8545\npoll_interval_ms: 200")
                .unwrap();
        let adapter = EvmAdapter::from_config(&config, None).unwrap();
        assert_eq!(adapter.rpc_url(), "http://localhost:8545");
        assert_eq!(adapter.poll_interval, Duration::from_millis(200));
    }
}
