//! # Staking Configuration
//!
//! Configuration for the Protected Staking deposit flow: which network it runs
//! on, how much ETH the MAX button leaves behind for gas, and where deposits go.
//!
//! The configuration is an explicit value handed to [`crate::deposit::DepositForm`]
//! and to the UI context. There is no global instance.
//!
//! ## Sources
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `STAKING_NETWORK_ID` | `11155111` (Sepolia) | chain id, hex chain id or network name |
//! | `STAKING_MAX_GAS_FEE` | `0.01` | ETH kept back by the MAX button |
//! | `STAKING_MIN_BALANCE` | `0.001` | balances below this are "Insufficient Balance" |
//! | `STAKING_CONTRACT_ADDRESS` | unset | deposit target |
//! | `STAKING_DEPOSIT_SELECTOR` | `0xd0e30db0` | call data sent with the deposit |
//!
//! ```rust
//! use lib_core::config::StakingConfig;
//! use lib_core::network::Network;
//!
//! let config = StakingConfig::from_lookup(|key| match key {
//!     "STAKING_NETWORK_ID" => Some("1".to_string()),
//!     _ => None,
//! })
//! .unwrap();
//! assert_eq!(config.network, Network::Mainnet);
//! ```

use crate::amount::EthAmount;
use crate::error::{Result, StakingError};
use crate::links::ExplorerLinks;
use crate::network::Network;
use lib_utils::envs::get_env_parse_or;
use lib_utils::validation::validate_eth_address;
use tracing::debug;

/// ETH kept back by the MAX button to pay for the deposit transaction.
pub const DEFAULT_MAX_GAS_FEE: EthAmount = EthAmount::from_milli_eth(10);

/// Balances below this are reported as insufficient.
pub const DEFAULT_MIN_BALANCE: EthAmount = EthAmount::from_milli_eth(1);

/// Selector of the payable `deposit()` function.
pub const DEFAULT_DEPOSIT_SELECTOR: &str = "0xd0e30db0";

pub const DEFAULT_NETWORK: Network = Network::Sepolia;

/// Deposit flow configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StakingConfig {
    /// Network the balance is read from and deposits are sent to.
    pub network: Network,

    /// Amount subtracted from the balance by the MAX button.
    pub max_gas_fee: EthAmount,

    /// Smallest balance that can fund a deposit.
    pub min_balance: EthAmount,

    /// Staking contract receiving deposits. Submission fails while unset.
    pub staking_contract: Option<String>,

    /// Call data sent with the deposit (`0x` + 4-byte selector).
    pub deposit_selector: String,
}

impl Default for StakingConfig {
    fn default() -> Self {
        Self {
            network: DEFAULT_NETWORK,
            max_gas_fee: DEFAULT_MAX_GAS_FEE,
            min_balance: DEFAULT_MIN_BALANCE,
            staking_contract: None,
            deposit_selector: DEFAULT_DEPOSIT_SELECTOR.to_string(),
        }
    }
}

impl StakingConfig {
    /// Load configuration from the process environment (and `.env` if present).
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            debug!(path = %path.display(), "Loaded .env");
        }
        Self::from_lookup(lib_utils::envs::get_env_opt)
    }

    /// Load configuration from an arbitrary key/value source, then validate it.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let network = get_env_parse_or(&lookup, "STAKING_NETWORK_ID", DEFAULT_NETWORK)?;
        let max_gas_fee = get_env_parse_or(&lookup, "STAKING_MAX_GAS_FEE", DEFAULT_MAX_GAS_FEE)?;
        let min_balance = get_env_parse_or(&lookup, "STAKING_MIN_BALANCE", DEFAULT_MIN_BALANCE)?;

        let staking_contract = lookup("STAKING_CONTRACT_ADDRESS")
            .map(|address| address.trim().to_string())
            .filter(|address| !address.is_empty());
        let deposit_selector = lookup("STAKING_DEPOSIT_SELECTOR")
            .map(|selector| selector.trim().to_lowercase())
            .filter(|selector| !selector.is_empty())
            .unwrap_or_else(|| DEFAULT_DEPOSIT_SELECTOR.to_string());

        let config = Self {
            network,
            max_gas_fee,
            min_balance,
            staking_contract,
            deposit_selector,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.min_balance.is_zero() {
            return Err(StakingError::Config(
                "STAKING_MIN_BALANCE must be greater than 0".to_string(),
            ));
        }

        if let Some(contract) = &self.staking_contract {
            validate_eth_address(contract)
                .map_err(|e| StakingError::Config(format!("STAKING_CONTRACT_ADDRESS: {}", e)))?;
        }

        let selector_ok = self
            .deposit_selector
            .strip_prefix("0x")
            .is_some_and(|body| body.len() % 2 == 0 && body.bytes().all(|b| b.is_ascii_hexdigit()));
        if !selector_ok {
            return Err(StakingError::Config(
                "STAKING_DEPOSIT_SELECTOR must be 0x-prefixed hex bytes".to_string(),
            ));
        }

        Ok(())
    }

    /// The configured staking contract, or a config error when unset.
    pub fn staking_contract(&self) -> Result<&str> {
        self.staking_contract
            .as_deref()
            .ok_or_else(|| StakingError::Config("STAKING_CONTRACT_ADDRESS is not set".to_string()))
    }

    /// Explorer link factory for the configured network.
    pub fn links(&self) -> ExplorerLinks {
        ExplorerLinks::for_network(self.network)
    }
}
