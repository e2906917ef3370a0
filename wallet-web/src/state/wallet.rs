//! Wallet state management

use leptos::prelude::*;
use lib_core::Network;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::services::ethereum;

/// Wallet connection state
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WalletState {
    Disconnected,
    Connecting,
    Connected { address: String, chain_id: u64 },
    Error(String),
}

impl WalletState {
    pub fn address(&self) -> Option<&str> {
        match self {
            WalletState::Connected { address, .. } => Some(address),
            _ => None,
        }
    }

    pub fn chain_id(&self) -> Option<u64> {
        match self {
            WalletState::Connected { chain_id, .. } => Some(*chain_id),
            _ => None,
        }
    }

    /// Supported network the wallet is on, if any.
    pub fn network(&self) -> Option<Network> {
        self.chain_id().and_then(Network::from_chain_id)
    }

    /// Connected and on `network`; deposits are only offered in this state.
    pub fn is_on(&self, network: Network) -> bool {
        self.network() == Some(network)
    }
}

/// Global wallet context
#[derive(Clone, Copy)]
pub struct WalletContext {
    pub wallet: RwSignal<WalletState>,
}

impl WalletContext {
    pub fn new() -> Self {
        Self {
            wallet: RwSignal::new(WalletState::Disconnected),
        }
    }

    pub fn set_connecting(&self) {
        self.wallet.set(WalletState::Connecting);
    }

    pub fn set_connected(&self, address: String, chain_id: u64) {
        self.wallet.set(WalletState::Connected { address, chain_id });
    }

    pub fn set_error(&self, error: String) {
        self.wallet.set(WalletState::Error(error));
    }

    pub fn disconnect(&self) {
        self.wallet.set(WalletState::Disconnected);
    }

    /// Prompt the wallet for an account.
    pub fn connect(&self) {
        let ctx = *self;
        if !ethereum::hasEthereum() {
            ctx.set_error("No Ethereum wallet found".to_string());
            return;
        }

        ctx.set_connecting();
        leptos::task::spawn_local(async move {
            match ethereum::connect().await {
                Ok((address, chain_id)) => ctx.set_connected(address, chain_id),
                Err(e) => {
                    log::warn!("Wallet connection failed: {}", e);
                    ctx.set_error(e);
                }
            }
        });
    }

    /// Pick up an existing authorization, then follow account and chain changes.
    pub fn watch(&self) {
        let ctx = *self;
        let resync = move || {
            leptos::task::spawn_local(async move {
                match ethereum::restore().await {
                    Ok(Some((address, chain_id))) => ctx.set_connected(address, chain_id),
                    Ok(None) => ctx.disconnect(),
                    Err(e) => {
                        log::warn!("Wallet resync failed: {}", e);
                        ctx.set_error(e);
                    }
                }
            });
        };

        resync();
        if ethereum::hasEthereum() {
            // Listener lives as long as the page
            let listener = Closure::<dyn Fn(JsValue)>::new(move |_| resync());
            ethereum::onAccountsChanged(listener.as_ref().unchecked_ref());
            listener.forget();
        }
    }
}

pub fn provide_wallet_context() -> WalletContext {
    let context = WalletContext::new();
    provide_context(context);
    context
}

pub fn use_wallet_context() -> WalletContext {
    expect_context::<WalletContext>()
}
