//! Omega factory and token ABI definitions using alloy's `sol!` macro.
//!
//! Signatures must match the deployed contracts exactly, including the
//! factory's `withrawAllCoin` spelling.

use alloy::sol;

sol! {
    /// Factory that deploys and indexes Omega tokens.
    interface IOmegaFactory {
        struct ContractInfo {
            address addr;
            string name;
            string symbol;
            uint8 decimals;
            bool isPartner;
            bool isOmegaToken;
            uint256 totalSupply;
        }

        function isOmegaCreated(address contractAddr) external view returns (bool created, bool partner);
        function getCreationFee() external view returns (uint256 fee, uint256 partnerFee);
        function getStats() external view returns (uint256 totalContracts, uint256 partnerContracts);
        function getContractAddressAtIndex(uint256 index) external view returns (address);
        function getPartnerContractAddressAtIndex(uint256 index) external view returns (address);
        function getContractDetails(address contractAddr) external view returns (ContractInfo memory);
        function getContractAtIndex(uint256 index) external view returns (ContractInfo memory);
        function getPartnerContractAtIndex(uint256 index) external view returns (ContractInfo memory);
        function getCreatorTotalContractsCounts(address creator) external view returns (uint256);
        function getCreatorContractsAddresses(address creator, uint256 fromIndex, uint256 toIndex) external view returns (address[] memory);
        function getCreatorContractsDetail(address creator, uint256 fromIndex, uint256 toIndex) external view returns (ContractInfo[] memory);

        function updateCreationFee(uint256 creationFee_, uint256 partnershipPercentOff) external;
        function createToken(
            address taxWallet,
            uint8 decimals,
            uint256 buyTax,
            uint256 sellTax,
            uint256 transferTax,
            uint256 totalSupply,
            string calldata name,
            string calldata symbol,
            bool isPartner
        ) external payable returns (address);
        function withdrawCoin(address receiver, uint256 amount) external;
        function withrawAllCoin(address receiver) external;
        function withdrawToken(address tokenAddress, address receiver, uint256 amount) external;
        function withdrawAllToken(address tokenAddress, address receiver) external;
    }
}

sol! {
    /// Taxed, mintable and burnable Omega token.
    interface IOmegaToken {
        function mintEnabled() external view returns (bool);
        function burnEnabled() external view returns (bool);
        function convertTaxToCoin() external view returns (bool);
        function isPartner() external view returns (bool);
        function BUY_TAX() external view returns (uint256);
        function SELL_TAX() external view returns (uint256);
        function TRANSFER_TAX() external view returns (uint256);
        function LIQUIDITY_POOL() external view returns (address);
        function owner() external view returns (address);
        function taxWallet() external view returns (address);
        function decimals() external view returns (uint8);
        function getPrice(uint256 ethValue) external view returns (uint256);
        function getETHValue(uint256 tokenValue) external view returns (uint256);

        function mint(address receiver, uint256 amount) external;
        function burn(uint256 amount) external;
        function setPayTax(address addr, bool shouldPayTax) external;
        function setTax(uint256 buyTax, uint256 sellTax, uint256 transferTax, bool convertTaxToCoin) external;
        function updateSettings(bool canMint, bool canBurn) external;
        function increaseLiquidity(uint256 amountToken, uint256 amountTokenMin, uint256 amountETHMin) external payable;
        function withdrawEth(address receiver) external;
        function withdrawToken(address tokenAddress) external;
    }
}

impl From<IOmegaFactory::ContractInfo> for omega_core::ContractInfo {
    fn from(info: IOmegaFactory::ContractInfo) -> Self {
        Self {
            address: info.addr,
            name: info.name,
            symbol: info.symbol,
            decimals: info.decimals,
            is_partner: info.isPartner,
            is_omega_token: info.isOmegaToken,
            total_supply: info.totalSupply,
        }
    }
}
