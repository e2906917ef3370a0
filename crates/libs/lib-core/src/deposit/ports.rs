//! # Collaborator Traits
//!
//! The deposit form does none of the chain work itself. Balance lookup,
//! submission, explorer links and routing are injected through these traits so
//! the browser bindings and test doubles plug in the same way.
//!
//! Browser futures are not `Send`, so the async traits use `async_trait(?Send)`.

use crate::error::{Result, SubmissionError};
use crate::network::Network;
use async_trait::async_trait;
use shared::{BalanceSnapshot, DepositRequest, TransactionResult};

/// Supplies the available balance of an account on a network.
#[async_trait(?Send)]
pub trait BalanceProvider {
    /// Current balance of `account`. Failures are `StakingError::Provider`.
    async fn balance(&self, account: &str, network: Network) -> Result<BalanceSnapshot>;
}

/// Performs the on-chain deposit.
#[async_trait(?Send)]
pub trait DepositSubmitter {
    async fn submit_deposit(
        &self,
        request: &DepositRequest,
    ) -> std::result::Result<TransactionResult, SubmissionError>;
}

/// Turns a transaction hash into a viewable URL.
pub trait LinkFactory {
    fn transaction_url(&self, hash: &str) -> String;
}

/// Route transitions requested by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Previous route.
    Back,
    /// Application home (`/`).
    Home,
}

pub trait Navigator {
    fn navigate(&self, to: Navigation);
}
