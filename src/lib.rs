//! # omega
//!
//! Typed async gateways for the Omega factory and token contracts.
//!
//! [`FactoryGateway`] deploys and indexes tokens and manages creation fees;
//! [`TokenGateway`] drives a single deployed token. Both talk to the chain
//! through a [`ContractClient`], normally an [`EvmAdapter`].

pub use omega_core::{config, journal, logging, tax, units};
pub use omega_core::{ContractInfo, CreationStatus, FactoryStats, FeeSchedule, Receipt};
pub use omega_core::{TxEvent, TxObserver};
pub use omega_evm::{
    abi, ContractCallError, ContractClient, CreateTokenParams, EvmAdapter, FactoryGateway,
    GatewayError, TokenGateway,
};

/// Returns the library version string.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
