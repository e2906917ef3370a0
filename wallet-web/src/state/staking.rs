//! Staking configuration and balance shared by the staking pages

use leptos::prelude::*;
use lib_core::deposit::flow;
use lib_core::{EthAmount, StakingConfig};

use crate::services::ethereum::EthereumBalances;
use crate::state::wallet::WalletContext;

/// Staking settings baked in at build time (`STAKING_*` variables seen by trunk/cargo).
fn build_env(key: &str) -> Option<String> {
    let value = match key {
        "STAKING_NETWORK_ID" => option_env!("STAKING_NETWORK_ID"),
        "STAKING_MAX_GAS_FEE" => option_env!("STAKING_MAX_GAS_FEE"),
        "STAKING_MIN_BALANCE" => option_env!("STAKING_MIN_BALANCE"),
        "STAKING_CONTRACT_ADDRESS" => option_env!("STAKING_CONTRACT_ADDRESS"),
        "STAKING_DEPOSIT_SELECTOR" => option_env!("STAKING_DEPOSIT_SELECTOR"),
        _ => None,
    };
    value.map(str::to_string)
}

/// Build-time configuration, or the defaults if it does not validate.
pub fn load_config() -> StakingConfig {
    match StakingConfig::from_lookup(build_env) {
        Ok(config) => {
            log::info!(
                "Staking on {} (contract: {})",
                config.network,
                config.staking_contract.as_deref().unwrap_or("unset")
            );
            config
        }
        Err(e) => {
            log::error!("Invalid staking configuration, using defaults: {}", e);
            StakingConfig::default()
        }
    }
}

/// Global staking context
#[derive(Clone, Copy)]
pub struct StakingContext {
    pub config: StoredValue<StakingConfig>,
    /// Available balance of the connected account, `None` until loaded.
    pub balance: RwSignal<Option<EthAmount>>,
    pub balance_error: RwSignal<Option<String>>,
}

impl StakingContext {
    pub fn new(config: StakingConfig) -> Self {
        Self {
            config: StoredValue::new(config),
            balance: RwSignal::new(None),
            balance_error: RwSignal::new(None),
        }
    }

    /// Reload the balance of `account` in the background.
    pub fn refresh_balance(&self, account: String) {
        let ctx = *self;
        let network = self.config.with_value(|config| config.network);

        leptos::task::spawn_local(async move {
            match flow::refresh_balance(&EthereumBalances, &account, network).await {
                Ok(balance) => {
                    ctx.balance.set(Some(balance));
                    ctx.balance_error.set(None);
                }
                Err(e) => {
                    log::warn!("Balance refresh failed: {}", e);
                    ctx.balance.set(None);
                    ctx.balance_error.set(Some(e.user_message()));
                }
            }
        });
    }
}

/// Provide the staking context and keep its balance in step with the wallet.
pub fn provide_staking_context(wallet: WalletContext) -> StakingContext {
    let context = StakingContext::new(load_config());

    Effect::new(move || {
        let state = wallet.wallet.get();
        let expected = context.config.with_value(|config| config.network);

        match (state.address(), state.network()) {
            (Some(address), Some(network)) if network == expected => {
                context.refresh_balance(address.to_string());
            }
            (Some(_), _) => {
                context.balance.set(None);
                context
                    .balance_error
                    .set(Some(format!("Switch your wallet to {}", expected)));
            }
            (None, _) => {
                context.balance.set(None);
                context.balance_error.set(None);
            }
        }
    });

    provide_context(context);
    context
}

pub fn use_staking_context() -> StakingContext {
    expect_context::<StakingContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_env_ignores_unknown_keys() {
        assert_eq!(build_env("DATABASE_URL"), None);
    }

    #[test]
    fn test_load_config_is_valid() {
        let config = load_config();
        assert!(config.validate().is_ok());
    }
}
