//! Blocking dialogs of the deposit flow

use leptos::prelude::*;
use shared::utils::format_address;

/// Overlay shell shared by every dialog. Without `on_close` there is no way out.
#[component]
fn Modal(
    title: &'static str,
    #[prop(optional)] on_close: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="modal-overlay" role="dialog" aria-modal="true">
            <div class="card modal">
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    {on_close.map(|close| view! {
                        <button class="modal-close" aria-label="Close" on:click=move |_| close.run(())>
                            "×"
                        </button>
                    })}
                </div>
                {children()}
            </div>
        </div>
    }
}

/// Shown while the wallet is confirming the deposit.
#[component]
pub fn LoadingModal() -> impl IntoView {
    view! {
        <Modal title="Confirmation Pending">
            <div class="spinner"></div>
            <p class="subtitle" style="text-align: center;">
                "Confirm the deposit in your wallet"
            </p>
        </Modal>
    }
}

#[component]
pub fn ErrorModal(message: String, #[prop(into)] on_retry: Callback<()>) -> impl IntoView {
    view! {
        <Modal title="Deposit Failed" on_close=on_retry>
            <div class="error">
                <p style="text-align: center;">{message}</p>
            </div>
            <button class="btn" style="width: 100%;" on:click=move |_| on_retry.run(())>
                "Try Again"
            </button>
        </Modal>
    }
}

/// Receipt for a processed deposit.
#[component]
fn CompletedTxView(hash: String, link: String) -> impl IntoView {
    let short_hash = format_address(&hash, 10, 8);

    view! {
        <div class="completed-tx">
            <div class="success-icon">"✓"</div>
            <p style="text-align: center;">"Your transaction has processed."</p>
            <a class="tx-link" href=link target="_blank" rel="noopener noreferrer" title=hash>
                "View on Etherscan: "
                <span class="wallet-address">{short_hash}</span>
            </a>
        </div>
    }
}

#[component]
pub fn SuccessDialog(
    hash: String,
    link: String,
    #[prop(into)] on_home: Callback<()>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <Modal title="Success" on_close=on_close>
            <CompletedTxView hash=hash link=link/>
            <button class="btn" style="width: 100%;" on:click=move |_| on_home.run(())>
                "Home"
            </button>
        </Modal>
    }
}
