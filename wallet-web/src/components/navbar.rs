//! Navigation Bar Component

use leptos::prelude::*;
use leptos_router::components::A;
use shared::utils::truncate_address;

use crate::state::wallet::{use_wallet_context, WalletState};

#[component]
pub fn Navbar() -> impl IntoView {
    let wallet_ctx = use_wallet_context();

    view! {
        <nav>
            <div style="max-width: 1200px; margin: 0 auto; padding: 0 24px; display: flex; justify-content: space-between; align-items: center;">
                <A href="/" attr:class="nav-link-clean">
                    <span class="nav-title">
                        <span class="xf-red">"XF"</span><span class="terminal-white">"Staking"</span>
                    </span>
                </A>
                {move || match wallet_ctx.wallet.get() {
                    WalletState::Connected { address, .. } => view! {
                        <span class="wallet-chip" title=address.clone()>{truncate_address(&address)}</span>
                    }.into_any(),
                    WalletState::Connecting => view! {
                        <span class="wallet-chip">"Connecting..."</span>
                    }.into_any(),
                    WalletState::Disconnected | WalletState::Error(_) => view! {
                        <button class="btn btn-small" on:click=move |_| wallet_ctx.connect()>
                            "Connect Wallet"
                        </button>
                    }.into_any(),
                }}
            </div>
        </nav>
    }
}
