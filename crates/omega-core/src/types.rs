//! Common types shared across the Omega gateways.

use alloy::primitives::{Address, B256, U256};
use serde::{Deserialize, Serialize};

/// Snapshot of a token contract as reported by the factory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractInfo {
    /// Token contract address.
    pub address: Address,
    /// Token name.
    pub name: String,
    /// Token symbol.
    pub symbol: String,
    /// Number of decimals.
    pub decimals: u8,
    /// Whether the token was created under the partner fee.
    pub is_partner: bool,
    /// Whether the factory manages this token.
    pub is_omega_token: bool,
    /// Total supply in the token's fixed-point units.
    pub total_supply: U256,
}

/// Creation fees held by the factory, in wei.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSchedule {
    /// Fee charged for a standard token.
    pub standard: U256,
    /// Discounted fee charged for a partner token.
    pub partner: U256,
}

impl FeeSchedule {
    /// The fee to attach when creating a token.
    pub fn fee_for(&self, is_partner: bool) -> U256 {
        if is_partner {
            self.partner
        } else {
            self.standard
        }
    }
}

/// Result of the factory's creation-status query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreationStatus {
    /// The address was deployed by the factory.
    pub created: bool,
    /// The address was deployed as a partner token.
    pub partner: bool,
}

/// Aggregate counters reported by the factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactoryStats {
    /// Number of tokens created.
    pub total_contracts: U256,
    /// Number of partner tokens created.
    pub partner_contracts: U256,
}

/// A confirmed transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Transaction hash.
    pub tx_hash: B256,
    /// Block the transaction was included in.
    pub block_number: Option<u64>,
    /// Gas consumed by the transaction.
    pub gas_used: u64,
    /// Execution status reported by the node.
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fee_for_selects_by_partner_flag() {
        let fees = FeeSchedule {
            standard: U256::from(100u64),
            partner: U256::from(50u64),
        };
        assert_eq!(fees.fee_for(false), U256::from(100u64));
        assert_eq!(fees.fee_for(true), U256::from(50u64));
    }

    #[test]
    fn contract_info_serde() {
        let info = ContractInfo {
            address: Address::with_last_byte(7),
            name: "Omega".into(),
            symbol: "OMG".into(),
            decimals: 18,
            is_partner: true,
            is_omega_token: true,
            total_supply: U256::from(1_000_000u64),
        };
        let json = serde_json::to_string(&info).unwrap();
        let parsed: ContractInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, info);
    }
}
