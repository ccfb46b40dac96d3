//! Gateway to a deployed Omega token contract.

use std::sync::Arc;

use alloy::primitives::{Address, U256};
use omega_core::{decode_tax, encode_tax, to_fixed_point, to_wei, Receipt, TxObserver};
use rust_decimal::Decimal;

use crate::abi::IOmegaToken;
use crate::client::ContractClient;
use crate::contract::BoundContract;
use crate::error::Result;

/// Typed access to a deployed token contract.
#[derive(Clone)]
pub struct TokenGateway<C> {
    contract: BoundContract<C>,
}

impl<C: ContractClient> TokenGateway<C> {
    /// Binds a gateway to the token at `address`.
    pub fn new(address: Address, client: C) -> Self {
        Self {
            contract: BoundContract::new(address, client),
        }
    }

    /// Notifies `observer` around every transaction this gateway submits.
    pub fn with_observer(mut self, observer: Arc<dyn TxObserver>) -> Self {
        self.contract.set_observer(observer);
        self
    }

    /// The bound token address.
    pub fn address(&self) -> Address {
        self.contract.address()
    }

    // ---- Queries ----

    /// Whether the owner may still mint.
    pub async fn mint_enabled(&self) -> Result<bool> {
        Ok(self.contract.read(IOmegaToken::mintEnabledCall {}).await?)
    }

    /// Whether holders may burn.
    pub async fn burn_enabled(&self) -> Result<bool> {
        Ok(self.contract.read(IOmegaToken::burnEnabledCall {}).await?)
    }

    /// Whether collected taxes are swapped to native currency.
    pub async fn convert_tax_to_coin(&self) -> Result<bool> {
        Ok(self.contract.read(IOmegaToken::convertTaxToCoinCall {}).await?)
    }

    /// Whether the token was created under the partner fee.
    pub async fn is_partner(&self) -> Result<bool> {
        Ok(self.contract.read(IOmegaToken::isPartnerCall {}).await?)
    }

    /// Buy tax in percent.
    pub async fn buy_tax(&self) -> Result<Decimal> {
        let raw = self.contract.read(IOmegaToken::BUY_TAXCall {}).await?;
        Ok(decode_tax(raw)?)
    }

    /// Sell tax in percent.
    pub async fn sell_tax(&self) -> Result<Decimal> {
        let raw = self.contract.read(IOmegaToken::SELL_TAXCall {}).await?;
        Ok(decode_tax(raw)?)
    }

    /// Transfer tax in percent.
    pub async fn transfer_tax(&self) -> Result<Decimal> {
        let raw = self.contract.read(IOmegaToken::TRANSFER_TAXCall {}).await?;
        Ok(decode_tax(raw)?)
    }

    /// Address of the token's liquidity pool.
    pub async fn liquidity_pool(&self) -> Result<Address> {
        Ok(self.contract.read(IOmegaToken::LIQUIDITY_POOLCall {}).await?)
    }

    /// Current contract owner.
    pub async fn owner(&self) -> Result<Address> {
        Ok(self.contract.read(IOmegaToken::ownerCall {}).await?)
    }

    /// Receiver of collected taxes.
    pub async fn tax_wallet(&self) -> Result<Address> {
        Ok(self.contract.read(IOmegaToken::taxWalletCall {}).await?)
    }

    /// Fixed-point decimals of the token.
    pub async fn decimals(&self) -> Result<u8> {
        Ok(self.contract.read(IOmegaToken::decimalsCall {}).await?)
    }

    /// Tokens obtainable for `eth_value` wei, as quoted by the contract.
    pub async fn price(&self, eth_value: U256) -> Result<U256> {
        Ok(self
            .contract
            .read(IOmegaToken::getPriceCall {
                ethValue: eth_value,
            })
            .await?)
    }

    /// Wei value of `token_value` fixed-point tokens, as quoted by the contract.
    pub async fn eth_value(&self, token_value: U256) -> Result<U256> {
        Ok(self
            .contract
            .read(IOmegaToken::getETHValueCall {
                tokenValue: token_value,
            })
            .await?)
    }

    // ---- Mutations ----

    /// Mints `amount` fixed-point tokens to `receiver`.
    pub async fn mint(&self, receiver: Address, amount: U256) -> Result<Receipt> {
        Ok(self
            .contract
            .transact(IOmegaToken::mintCall { receiver, amount }, None)
            .await?)
    }

    /// Burns `amount` whole tokens, scaled by the token's decimals.
    pub async fn burn(&self, amount: Decimal) -> Result<Receipt> {
        let decimals = self.decimals().await?;
        let amount = to_fixed_point(amount, decimals)?;
        Ok(self
            .contract
            .transact(IOmegaToken::burnCall { amount }, None)
            .await?)
    }

    /// Sets whether transfers involving `addr` are taxed.
    pub async fn set_pay_tax(&self, addr: Address, should_pay_tax: bool) -> Result<Receipt> {
        Ok(self
            .contract
            .transact(
                IOmegaToken::setPayTaxCall {
                    addr,
                    shouldPayTax: should_pay_tax,
                },
                None,
            )
            .await?)
    }

    /// Updates the three tax rates (percent) and the auto-conversion flag.
    pub async fn set_tax(
        &self,
        buy_tax: Decimal,
        sell_tax: Decimal,
        transfer_tax: Decimal,
        convert_tax_to_coin: bool,
    ) -> Result<Receipt> {
        let call = IOmegaToken::setTaxCall {
            buyTax: encode_tax(buy_tax)?,
            sellTax: encode_tax(sell_tax)?,
            transferTax: encode_tax(transfer_tax)?,
            convertTaxToCoin: convert_tax_to_coin,
        };
        Ok(self.contract.transact(call, None).await?)
    }

    /// Enables or disables minting and burning.
    pub async fn update_settings(&self, can_mint: bool, can_burn: bool) -> Result<Receipt> {
        Ok(self
            .contract
            .transact(
                IOmegaToken::updateSettingsCall {
                    canMint: can_mint,
                    canBurn: can_burn,
                },
                None,
            )
            .await?)
    }

    /// Adds liquidity, paying `eth_value` (whole ETH) alongside `amount`
    /// whole tokens. The minimums are fixed-point slippage bounds.
    pub async fn increase_liquidity(
        &self,
        eth_value: Decimal,
        amount: Decimal,
        amount_token_min: U256,
        amount_eth_min: U256,
    ) -> Result<Receipt> {
        let value = to_wei(eth_value)?;
        let decimals = self.decimals().await?;
        let call = IOmegaToken::increaseLiquidityCall {
            amountToken: to_fixed_point(amount, decimals)?,
            amountTokenMin: amount_token_min,
            amountETHMin: amount_eth_min,
        };
        Ok(self.contract.transact(call, Some(value)).await?)
    }

    /// Sends the token contract's native balance to `receiver`.
    pub async fn withdraw_eth(&self, receiver: Address) -> Result<Receipt> {
        Ok(self
            .contract
            .transact(IOmegaToken::withdrawEthCall { receiver }, None)
            .await?)
    }

    /// Sends the contract's balance of `token` to the contract owner.
    pub async fn withdraw_token(&self, token: Address) -> Result<Receipt> {
        Ok(self
            .contract
            .transact(
                IOmegaToken::withdrawTokenCall {
                    tokenAddress: token,
                },
                None,
            )
            .await?)
    }
}
