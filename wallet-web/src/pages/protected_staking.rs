//! Protected Staking Page - ETH deposit form
//!
//! All form rules live in [`DepositForm`]; this page wires it to the wallet,
//! the balance context and the router, and renders the current view mode.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use lib_core::deposit::{flow, DepositForm, Navigation, Navigator, ViewMode};

use crate::components::{ErrorModal, LoadingModal, SuccessDialog};
use crate::services::ethereum::EthereumDepositSubmitter;
use crate::services::navigation::RouterNavigator;
use crate::state::staking::use_staking_context;
use crate::state::wallet::use_wallet_context;
use crate::utils::constants::{PENDING_SETTLE_MS, TOKEN_SYMBOL};

#[component]
pub fn ProtectedStakingPage() -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let staking = use_staking_context();
    let navigator = RouterNavigator::new(use_navigate());

    let config = staking.config;
    let links = config.with_value(|config| config.links());
    let network = config.with_value(|config| config.network);
    let wrong_network = Memo::new(move |_| {
        wallet_ctx
            .wallet
            .with(|state| state.address().is_some() && !state.is_on(network))
    });

    let form = RwSignal::new(config.with_value(DepositForm::new));
    let notice = RwSignal::new(None::<String>);
    let navigation = RwSignal::new(None::<Navigation>);
    let view_mode = Memo::new(move |_| form.with(|f| f.view_mode()));

    // Balance snapshots flow into the form; the form never writes them back
    Effect::new(move || {
        let balance = staking.balance.get();
        form.update(|f| f.set_balance(balance));
    });

    Effect::new(move || {
        if let Some(to) = navigation.get() {
            navigator.navigate(to);
        }
    });

    // Rejected input still notifies, so `prop:value` puts the old text back
    let on_input = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        form.update(|f| {
            f.set_amount(&value);
        });
    };

    let on_max = move |_: web_sys::MouseEvent| form.update(|f| f.set_max_amount());

    let on_back = move |_: web_sys::MouseEvent| navigation.set(Some(form.with_untracked(|f| f.go_back())));

    let on_confirm = move |_: web_sys::MouseEvent| {
        notice.set(None);
        if wrong_network.get_untracked() {
            notice.set(Some(format!("Switch your wallet to {}", network)));
            return;
        }
        let account = wallet_ctx
            .wallet
            .with_untracked(|state| state.address().unwrap_or_default().to_string());

        let request = match form.try_update(|f| f.begin_submit(&account)) {
            Some(Ok(request)) => request,
            Some(Err(e)) => {
                log::warn!("Deposit not started: {}", e);
                notice.set(Some(e.user_message()));
                return;
            }
            None => return,
        };
        let submitter = config.with_value(EthereumDepositSubmitter::from_config);

        leptos::task::spawn_local(async move {
            let outcome = flow::submit_deposit(&submitter, &request).await;
            let succeeded = outcome.is_ok();

            // Keep the pending modal up long enough to register
            TimeoutFuture::new(PENDING_SETTLE_MS).await;

            match form.try_update(|f| f.settle(outcome)) {
                Some(Ok(mode)) => log::info!("Deposit settled: {:?}", mode),
                Some(Err(e)) => log::error!("Deposit could not settle: {}", e),
                None => log::debug!("Deposit settled after the page closed"),
            }
            if succeeded {
                staking.refresh_balance(request.account);
            }
        });
    };

    let on_retry = move |_: ()| {
        form.update(|f| {
            if let Err(e) = f.dismiss_failure() {
                log::warn!("{}", e);
            }
        })
    };

    let on_home = move |_: ()| {
        if let Some(to) = form.try_update(|f| f.dismiss_success()) {
            navigation.set(Some(to));
        }
    };

    let on_close_success = move |_: ()| form.update(|f| f.close_success());

    view! {
        <div class="content-wrapper" style="justify-content: center;">
            <div class="card deposit-card">
                <div class="deposit-header">
                    <button class="back-button" aria-label="Back" on:click=on_back>"←"</button>
                    <h1 class="card-title">"Protected Staking"</h1>
                </div>

                <label class="field-label" for="deposit-amount">"Deposit ETH"</label>
                <div class="amount-field">
                    <input
                        id="deposit-amount"
                        type="text"
                        inputmode="decimal"
                        autocomplete="off"
                        placeholder="Amount"
                        prop:value=move || form.with(|f| f.amount().to_string())
                        prop:disabled=move || view_mode.get() != ViewMode::Entry
                        on:input=on_input
                    />
                    <span class="unit">{TOKEN_SYMBOL}</span>
                    <Show when=move || form.with(|f| f.show_max_button())>
                        <button class="max-button" on:click=on_max>"MAX"</button>
                    </Show>
                </div>

                <div class="amount-meta">
                    <span class="available">
                        "Available: "
                        {move || form.with(|f| f.available_balance_display())}
                        " "
                        {TOKEN_SYMBOL}
                    </span>
                    <span class="inline-error">{move || form.with(|f| f.error_message())}</span>
                </div>

                {move || staking.balance_error.get().map(|message| view! {
                    <div class="info"><p style="text-align: center;">{message}</p></div>
                })}
                {move || notice.get().map(|message| view! {
                    <div class="error"><p style="text-align: center;">{message}</p></div>
                })}

                <button
                    class="btn confirm-button"
                    style="width: 100%;"
                    prop:disabled=move || wrong_network.get() || !form.with(|f| f.can_confirm())
                    on:click=on_confirm
                >
                    "Confirm"
                </button>
            </div>

            {move || match view_mode.get() {
                ViewMode::Entry => None,
                ViewMode::Submitting => Some(view! { <LoadingModal/> }.into_any()),
                ViewMode::Failure => {
                    let message = form.with_untracked(|f| f.failure_message().unwrap_or_default().to_string());
                    Some(view! { <ErrorModal message=message on_retry=on_retry/> }.into_any())
                }
                ViewMode::Success => {
                    let (hash, link) = form.with_untracked(|f| {
                        (
                            f.result().map(|r| r.hash.clone()).unwrap_or_default(),
                            f.result_link(&links).unwrap_or_default(),
                        )
                    });
                    Some(view! {
                        <SuccessDialog hash=hash link=link on_home=on_home on_close=on_close_success/>
                    }.into_any())
                }
            }}
        </div>
    }
}
