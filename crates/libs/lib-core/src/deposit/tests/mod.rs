//! # Deposit Flow Tests
//!
//! Form, flow and collaborators wired together with in-memory doubles.

mod properties;
mod scenarios;

use super::*;
use crate::amount::EthAmount;
use crate::config::StakingConfig;
use crate::error::{Result, StakingError, SubmissionError};
use crate::network::Network;
use async_trait::async_trait;
use shared::{BalanceSnapshot, DepositRequest, TransactionResult};
use std::cell::RefCell;

pub const ACCOUNT: &str = "0x52908400098527886E0F7030069857D2E4169EE7";

/// Balance provider returning a fixed balance.
pub struct FixedBalance(pub EthAmount);

#[async_trait(?Send)]
impl BalanceProvider for FixedBalance {
    async fn balance(&self, _account: &str, _network: Network) -> Result<BalanceSnapshot> {
        Ok(BalanceSnapshot {
            formatted: self.0.to_decimal_string(),
            wei: self.0.wei().to_string(),
        })
    }
}

/// Submitter that answers with a scripted outcome and records each request.
pub struct ScriptedSubmitter {
    outcome: std::result::Result<TransactionResult, SubmissionError>,
    pub requests: RefCell<Vec<DepositRequest>>,
}

impl ScriptedSubmitter {
    pub fn succeeding(hash: &str) -> Self {
        Self {
            outcome: Ok(TransactionResult::new(hash)),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(reasons: &[&str]) -> Self {
        Self {
            outcome: Err(SubmissionError::from_reasons(
                reasons.iter().map(|r| r.to_string()).collect(),
            )),
            requests: RefCell::new(Vec::new()),
        }
    }
}

#[async_trait(?Send)]
impl DepositSubmitter for ScriptedSubmitter {
    async fn submit_deposit(
        &self,
        request: &DepositRequest,
    ) -> std::result::Result<TransactionResult, SubmissionError> {
        self.requests.borrow_mut().push(request.clone());
        self.outcome.clone()
    }
}

/// Navigator that remembers where it was sent.
#[derive(Default)]
pub struct RecordingNavigator {
    pub visited: RefCell<Vec<Navigation>>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, to: Navigation) {
        self.visited.borrow_mut().push(to);
    }
}

/// Form with its balance loaded through the flow, as the page does on mount.
pub async fn loaded_form(balance: &str) -> DepositForm {
    let config = StakingConfig::default();
    let balance: EthAmount = balance.parse().expect("Test balance should parse");

    let mut form = DepositForm::new(&config);
    let loaded = flow::refresh_balance(&FixedBalance(balance), ACCOUNT, config.network)
        .await
        .expect("Fixed balance should load");
    form.set_balance(Some(loaded));
    form
}

/// Run a full confirm: begin, await the submitter, settle.
pub async fn confirm(form: &mut DepositForm, submitter: &ScriptedSubmitter) -> Result<ViewMode> {
    let request = form.begin_submit(ACCOUNT)?;
    assert_eq!(form.view_mode(), ViewMode::Submitting);
    let outcome = flow::submit_deposit(submitter, &request).await;
    form.settle(outcome)
}

pub fn assert_state_error<T: std::fmt::Debug>(result: Result<T>) {
    assert!(
        matches!(result, Err(StakingError::State(_))),
        "expected state error, got {:?}",
        result
    );
}
