//! Gateway to the Omega factory contract.
//!
//! Reads go straight to the contract; every mutation waits for
//! confirmation before returning its [`Receipt`].

use std::sync::Arc;

use alloy::primitives::{Address, U256};
use omega_core::config::GatewayConfig;
use omega_core::journal::JournalObserver;
use omega_core::{
    encode_tax, ContractInfo, CreationStatus, FactoryStats, FeeSchedule, Receipt, TxObserver,
};
use rust_decimal::Decimal;

use crate::abi::IOmegaFactory;
use crate::client::ContractClient;
use crate::contract::BoundContract;
use crate::error::{ContractCallError, GatewayError, Result};

/// Arguments for [`FactoryGateway::create_token`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTokenParams {
    /// Receiver of collected taxes. `None` sends the zero address.
    pub tax_wallet: Option<Address>,
    pub decimals: u8,
    /// Buy tax in percent, one decimal place at most.
    pub buy_tax: Decimal,
    pub sell_tax: Decimal,
    pub transfer_tax: Decimal,
    /// Initial supply in the token's fixed-point units.
    pub total_supply: U256,
    pub name: String,
    pub symbol: String,
    /// Create under the partner fee.
    pub is_partner: bool,
}

/// Typed access to a deployed factory contract.
#[derive(Clone)]
pub struct FactoryGateway<C> {
    contract: BoundContract<C>,
}

impl<C: ContractClient> FactoryGateway<C> {
    /// Binds a gateway to the factory at `address`.
    pub fn new(address: Address, client: C) -> Self {
        Self {
            contract: BoundContract::new(address, client),
        }
    }

    /// Binds a gateway to `config.factory_address`, journaling to
    /// `config.journal_path` when one is set.
    pub fn from_config(config: &GatewayConfig, client: C) -> Result<Self> {
        let address = config
            .factory_address
            .ok_or(GatewayError::MissingFactoryAddress)?;
        let gateway = Self::new(address, client);
        Ok(match JournalObserver::from_config(config)? {
            Some(journal) => gateway.with_observer(Arc::new(journal)),
            None => gateway,
        })
    }

    /// Notifies `observer` around every transaction this gateway submits.
    pub fn with_observer(mut self, observer: Arc<dyn TxObserver>) -> Self {
        self.contract.set_observer(observer);
        self
    }

    /// The bound factory address.
    pub fn address(&self) -> Address {
        self.contract.address()
    }

    // ---- Queries ----

    /// Whether `contract` was deployed by this factory, and as a partner token.
    pub async fn is_created(&self, contract: Address) -> Result<CreationStatus> {
        let ret = self
            .contract
            .read(IOmegaFactory::isOmegaCreatedCall {
                contractAddr: contract,
            })
            .await?;
        Ok(CreationStatus {
            created: ret.created,
            partner: ret.partner,
        })
    }

    /// Current standard and partner creation fees.
    pub async fn creation_fee(&self) -> Result<FeeSchedule> {
        Ok(self.fee_schedule().await?)
    }

    /// Total and partner token counts.
    pub async fn stats(&self) -> Result<FactoryStats> {
        let ret = self.contract.read(IOmegaFactory::getStatsCall {}).await?;
        Ok(FactoryStats {
            total_contracts: ret.totalContracts,
            partner_contracts: ret.partnerContracts,
        })
    }

    /// Address of the `index`th token deployed by the factory.
    pub async fn contract_address_at(&self, index: u64) -> Result<Address> {
        Ok(self
            .contract
            .read(IOmegaFactory::getContractAddressAtIndexCall {
                index: U256::from(index),
            })
            .await?)
    }

    /// Address of the `index`th partner token.
    pub async fn partner_contract_address_at(&self, index: u64) -> Result<Address> {
        Ok(self
            .contract
            .read(IOmegaFactory::getPartnerContractAddressAtIndexCall {
                index: U256::from(index),
            })
            .await?)
    }

    /// Snapshot of a token deployed by the factory.
    pub async fn contract_details(&self, contract: Address) -> Result<ContractInfo> {
        let info = self
            .contract
            .read(IOmegaFactory::getContractDetailsCall {
                contractAddr: contract,
            })
            .await?;
        Ok(info.into())
    }

    /// Snapshot of the `index`th token deployed by the factory.
    pub async fn contract_at(&self, index: u64) -> Result<ContractInfo> {
        let info = self
            .contract
            .read(IOmegaFactory::getContractAtIndexCall {
                index: U256::from(index),
            })
            .await?;
        Ok(info.into())
    }

    /// Snapshot of the `index`th partner token.
    pub async fn partner_contract_at(&self, index: u64) -> Result<ContractInfo> {
        let info = self
            .contract
            .read(IOmegaFactory::getPartnerContractAtIndexCall {
                index: U256::from(index),
            })
            .await?;
        Ok(info.into())
    }

    /// Number of tokens `creator` has deployed through the factory.
    pub async fn creator_contract_count(&self, creator: Address) -> Result<U256> {
        Ok(self
            .contract
            .read(IOmegaFactory::getCreatorTotalContractsCountsCall { creator })
            .await?)
    }

    /// Addresses of `creator`'s tokens in the index window `from..to`,
    /// as bounded by the contract.
    pub async fn creator_contract_addresses(
        &self,
        creator: Address,
        from: u64,
        to: u64,
    ) -> Result<Vec<Address>> {
        Ok(self
            .contract
            .read(IOmegaFactory::getCreatorContractsAddressesCall {
                creator,
                fromIndex: U256::from(from),
                toIndex: U256::from(to),
            })
            .await?)
    }

    /// Details of `creator`'s tokens in the index window `from..to`.
    pub async fn creator_contract_details(
        &self,
        creator: Address,
        from: u64,
        to: u64,
    ) -> Result<Vec<ContractInfo>> {
        let infos = self
            .contract
            .read(IOmegaFactory::getCreatorContractsDetailCall {
                creator,
                fromIndex: U256::from(from),
                toIndex: U256::from(to),
            })
            .await?;
        Ok(infos.into_iter().map(ContractInfo::from).collect())
    }

    // ---- Mutations ----

    /// Sets the creation fee (wei) and the partner discount percentage.
    pub async fn update_creation_fee(
        &self,
        new_fee: U256,
        partner_percent_off: U256,
    ) -> Result<Receipt> {
        Ok(self
            .contract
            .transact(
                IOmegaFactory::updateCreationFeeCall {
                    creationFee_: new_fee,
                    partnershipPercentOff: partner_percent_off,
                },
                None,
            )
            .await?)
    }

    /// Deploys a new token, paying the fee that matches `params.is_partner`.
    pub async fn create_token(&self, params: CreateTokenParams) -> Result<Receipt> {
        let call = IOmegaFactory::createTokenCall {
            taxWallet: params.tax_wallet.unwrap_or(Address::ZERO),
            decimals: params.decimals,
            buyTax: encode_tax(params.buy_tax)?,
            sellTax: encode_tax(params.sell_tax)?,
            transferTax: encode_tax(params.transfer_tax)?,
            totalSupply: params.total_supply,
            name: params.name,
            symbol: params.symbol,
            isPartner: params.is_partner,
        };

        let fee = self.fee_schedule().await?.fee_for(params.is_partner);
        tracing::debug!(is_partner = params.is_partner, fee = %fee, "attaching creation fee");

        Ok(self.contract.transact(call, Some(fee)).await?)
    }

    /// Sends `amount` wei of the factory's balance to `receiver`.
    pub async fn withdraw_coin(&self, receiver: Address, amount: U256) -> Result<Receipt> {
        Ok(self
            .contract
            .transact(IOmegaFactory::withdrawCoinCall { receiver, amount }, None)
            .await?)
    }

    /// Sends the factory's entire native balance to `receiver`.
    pub async fn withdraw_all_coin(&self, receiver: Address) -> Result<Receipt> {
        Ok(self
            .contract
            .transact(IOmegaFactory::withrawAllCoinCall { receiver }, None)
            .await?)
    }

    /// Sends `amount` of the ERC-20 `token` held by the factory to `receiver`.
    pub async fn withdraw_token(
        &self,
        token: Address,
        receiver: Address,
        amount: U256,
    ) -> Result<Receipt> {
        Ok(self
            .contract
            .transact(
                IOmegaFactory::withdrawTokenCall {
                    tokenAddress: token,
                    receiver,
                    amount,
                },
                None,
            )
            .await?)
    }

    /// Sends the factory's entire `token` balance to `receiver`.
    pub async fn withdraw_all_token(&self, token: Address, receiver: Address) -> Result<Receipt> {
        Ok(self
            .contract
            .transact(
                IOmegaFactory::withdrawAllTokenCall {
                    tokenAddress: token,
                    receiver,
                },
                None,
            )
            .await?)
    }

    async fn fee_schedule(&self) -> std::result::Result<FeeSchedule, ContractCallError> {
        let ret = self
            .contract
            .read(IOmegaFactory::getCreationFeeCall {})
            .await?;
        Ok(FeeSchedule {
            standard: ret.fee,
            partner: ret.partnerFee,
        })
    }
}
