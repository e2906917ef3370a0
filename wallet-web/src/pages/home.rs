//! Home Page - wallet status and entry to the staking products

use leptos::prelude::*;
use leptos_router::components::A;
use lib_core::deposit::BALANCE_DISPLAY_DECIMALS;

use crate::state::staking::use_staking_context;
use crate::state::wallet::{use_wallet_context, WalletState};
use crate::utils::constants::{PROTECTED_STAKING_ROUTE, TOKEN_SYMBOL};

#[component]
pub fn HomePage() -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let staking = use_staking_context();
    let network = staking.config.with_value(|config| config.network);

    view! {
        <div class="content-wrapper">
            <div class="left-section">
                <h1 class="main-header">
                    <span class="xf-red">"XF"</span>
                    <span class="terminal-white">"Staking"</span>
                </h1>
                <p class="main-subheader">"Stake ETH on " {network.name()}</p>
            </div>
            <div class="right-section">
                <div class="card">
                    {move || match wallet_ctx.wallet.get() {
                        WalletState::Connected { address, .. } => view! {
                            <div class="info">
                                <p style="font-weight: 600; margin-bottom: 8px;">"Connected"</p>
                                <div class="wallet-address">{address}</div>
                                <p style="margin-top: 8px;">
                                    {move || staking.balance.get()
                                        .map(|balance| format!("{} {}", balance.format_display(BALANCE_DISPLAY_DECIMALS), TOKEN_SYMBOL))
                                        .unwrap_or_else(|| "Balance loading...".to_string())}
                                </p>
                            </div>
                        }.into_any(),
                        WalletState::Error(message) => view! {
                            <div>
                                <div class="error"><p style="text-align: center;">{message}</p></div>
                                <button class="btn" style="width: 100%;" on:click=move |_| wallet_ctx.connect()>
                                    "Try Again"
                                </button>
                            </div>
                        }.into_any(),
                        WalletState::Connecting => view! {
                            <p class="subtitle">"Waiting for wallet..."</p>
                        }.into_any(),
                        WalletState::Disconnected => view! {
                            <button class="btn" style="width: 100%;" on:click=move |_| wallet_ctx.connect()>
                                "Connect Wallet"
                            </button>
                        }.into_any(),
                    }}

                    <A href=PROTECTED_STAKING_ROUTE>
                        <span class="btn" style="margin-top: 20px; display: block; text-align: center;">
                            "Protected Staking"
                        </span>
                    </A>
                </div>
            </div>
        </div>
    }
}
