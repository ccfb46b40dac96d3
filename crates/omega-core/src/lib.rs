//! # omega-core
//!
//! Shared types, unit and tax conversion, configuration, logging and
//! transaction observers for the Omega contract gateways.

pub mod config;
pub mod journal;
pub mod logging;
pub mod observer;
pub mod tax;
pub mod types;
pub mod units;

pub use observer::{TxEvent, TxObserver};
pub use tax::{decode_tax, encode_tax, TaxError};
pub use types::{ContractInfo, CreationStatus, FactoryStats, FeeSchedule, Receipt};
pub use units::{from_fixed_point, to_fixed_point, to_wei, UnitsError, DEFAULT_DECIMALS};
