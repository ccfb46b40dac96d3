//! # omega-evm
//!
//! Typed gateways for the Omega factory and token contracts.
//!
//! ## Modules
//!
//! - [`abi`] — contract ABI definitions using alloy's `sol!` macro
//! - [`client`] — the provider seam gateways talk through
//! - [`adapter`] — JSON-RPC implementation of the client over alloy
//! - [`factory`] — [`FactoryGateway`]
//! - [`token`] — [`TokenGateway`]

pub mod abi;
pub mod adapter;
pub mod client;
mod contract;
pub mod error;
pub mod factory;
pub mod token;

pub use adapter::{EvmAdapter, EvmAdapterError};
pub use client::{ContractClient, ProviderError};
pub use error::{ContractCallError, GatewayError};
pub use factory::{CreateTokenParams, FactoryGateway};
pub use token::TokenGateway;

// Re-export alloy primitives used in the public API.
pub use alloy::primitives::{Address, B256, U256};
pub use rust_decimal::Decimal;
