//! # Deposit Form
//!
//! State of the Protected Staking deposit view: the amount being typed, the
//! last known balance, and which of the four views is showing.
//!
//! ## View Modes
//!
//! ```text
//!            begin_submit           settle(Ok)
//!   Entry ─────────────────► Submitting ─────────► Success ──dismiss_success──► (home)
//!     ▲                          │                    │
//!     │                          │ settle(Err)        │ close_success
//!     │   dismiss_failure        ▼                    │
//!     └──────────────────── Failure                   │
//!     └───────────────────────────────────────────────┘
//! ```
//!
//! The phase is a single enum, so "submitting and failed at once" cannot be
//! represented. The form holds no async machinery: the page starts the
//! submission with [`DepositForm::begin_submit`], awaits the submitter, and
//! reports back with [`DepositForm::settle`].

use crate::amount::{parse_amount_input, AmountError, EthAmount};
use crate::config::StakingConfig;
use crate::deposit::ports::{LinkFactory, Navigation};
use crate::error::{
    Result, StakingError, SubmissionError, ValidationError, INSUFFICIENT_BALANCE, INVALID_AMOUNT,
};
use shared::{DepositRequest, TransactionResult};
use tracing::debug;

/// Fraction digits shown in the "Available" line.
pub const BALANCE_DISPLAY_DECIMALS: usize = 4;

/// Where the form is in the deposit flow, with the data each step owns.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Phase {
    Entry,
    Submitting,
    Failed(String),
    Succeeded(TransactionResult),
}

/// Which view the page renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Entry,
    Submitting,
    Failure,
    Success,
}

/// Check `amount` against `balance`.
///
/// An empty amount or an unknown balance is not an error. A balance under
/// `min_balance` is insufficient whatever the amount.
pub fn validate_amount(
    amount: &str,
    balance: Option<EthAmount>,
    min_balance: EthAmount,
) -> std::result::Result<(), ValidationError> {
    let Some(balance) = balance else {
        return Ok(());
    };
    if amount.is_empty() {
        return Ok(());
    }
    if balance < min_balance {
        return Err(ValidationError::InsufficientBalance);
    }

    let amount = EthAmount::parse(amount).map_err(ValidationError::InvalidAmount)?;
    if amount > balance {
        return Err(ValidationError::InsufficientBalance);
    }
    Ok(())
}

/// Inline message for the amount field, `""` when there is nothing to say.
pub fn compute_error_message(
    amount: &str,
    balance: Option<EthAmount>,
    min_balance: EthAmount,
) -> &'static str {
    match validate_amount(amount, balance, min_balance) {
        Ok(()) => "",
        Err(ValidationError::InsufficientBalance) => INSUFFICIENT_BALANCE,
        Err(ValidationError::InvalidAmount(_)) => INVALID_AMOUNT,
    }
}

/// The deposit form.
#[derive(Debug, Clone)]
pub struct DepositForm {
    amount: String,
    balance: Option<EthAmount>,
    max_gas_fee: EthAmount,
    min_balance: EthAmount,
    phase: Phase,
}

impl DepositForm {
    /// Fresh form: empty amount, balance not loaded, entry view.
    pub fn new(config: &StakingConfig) -> Self {
        Self {
            amount: String::new(),
            balance: None,
            max_gas_fee: config.max_gas_fee,
            min_balance: config.min_balance,
            phase: Phase::Entry,
        }
    }

    // region:    --- Accessors

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn balance(&self) -> Option<EthAmount> {
        self.balance
    }

    pub fn view_mode(&self) -> ViewMode {
        match self.phase {
            Phase::Entry => ViewMode::Entry,
            Phase::Submitting => ViewMode::Submitting,
            Phase::Failed(_) => ViewMode::Failure,
            Phase::Succeeded(_) => ViewMode::Success,
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, Phase::Submitting)
    }

    pub fn result(&self) -> Option<&TransactionResult> {
        match &self.phase {
            Phase::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    pub fn failure_message(&self) -> Option<&str> {
        match &self.phase {
            Phase::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    /// Explorer URL of the successful deposit.
    pub fn result_link(&self, links: &dyn LinkFactory) -> Option<String> {
        self.result().map(|result| links.transaction_url(&result.hash))
    }

    // endregion: --- Accessors

    // region:    --- Entry

    /// Store `input` if it is empty or a valid amount. Returns whether it was stored.
    ///
    /// Input is ignored outside the entry view.
    pub fn set_amount(&mut self, input: &str) -> bool {
        if self.phase != Phase::Entry {
            return false;
        }
        match parse_amount_input(input) {
            Ok(_) => {
                self.amount = input.to_string();
                true
            }
            Err(err) => {
                debug!(input, error = %err, "Rejected amount input");
                false
            }
        }
    }

    /// Fill in the balance less the gas reserve (never below zero).
    pub fn set_max_amount(&mut self) {
        if self.phase != Phase::Entry {
            return;
        }
        self.amount = match self.balance {
            Some(balance) => balance.saturating_sub(self.max_gas_fee).to_decimal_string(),
            None => String::new(),
        };
    }

    /// Replace the balance snapshot. `None` while it is loading.
    pub fn set_balance(&mut self, balance: Option<EthAmount>) {
        self.balance = balance;
    }

    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        validate_amount(&self.amount, self.balance, self.min_balance)
    }

    pub fn error_message(&self) -> &'static str {
        compute_error_message(&self.amount, self.balance, self.min_balance)
    }

    /// Whether the Confirm button is enabled.
    pub fn can_confirm(&self) -> bool {
        self.phase == Phase::Entry && !self.amount.is_empty() && self.error_message().is_empty()
    }

    /// The MAX button hides once the amount equals the balance.
    pub fn show_max_button(&self) -> bool {
        let amount = parse_amount_input(&self.amount)
            .ok()
            .flatten()
            .unwrap_or(EthAmount::ZERO);
        amount != self.balance.unwrap_or(EthAmount::ZERO)
    }

    /// Balance for the "Available" line, `0` while unknown.
    pub fn available_balance_display(&self) -> String {
        self.balance
            .unwrap_or(EthAmount::ZERO)
            .format_display(BALANCE_DISPLAY_DECIMALS)
    }

    // endregion: --- Entry

    // region:    --- Submission

    /// Move to the submitting view and build the request for the submitter.
    pub fn begin_submit(&mut self, account: &str) -> Result<DepositRequest> {
        if self.phase != Phase::Entry {
            return Err(StakingError::State(format!(
                "cannot submit while {:?}",
                self.view_mode()
            )));
        }

        let account = account.trim();
        if account.is_empty() {
            return Err(StakingError::WalletNotConnected);
        }

        if self.amount.is_empty() {
            return Err(ValidationError::InvalidAmount(AmountError::Empty).into());
        }
        self.validate()?;
        let value = EthAmount::parse(&self.amount)?;

        self.phase = Phase::Submitting;
        debug!(account, amount = %self.amount, "Deposit submitting");

        Ok(DepositRequest {
            account: account.to_string(),
            amount: self.amount.clone(),
            value_wei: value.wei().to_string(),
        })
    }

    /// Record the submitter's outcome and switch to the success or failure view.
    pub fn settle(
        &mut self,
        outcome: std::result::Result<TransactionResult, SubmissionError>,
    ) -> Result<ViewMode> {
        if self.phase != Phase::Submitting {
            return Err(StakingError::State(format!(
                "nothing to settle while {:?}",
                self.view_mode()
            )));
        }

        self.phase = match outcome {
            Ok(result) => Phase::Succeeded(result),
            Err(err) => Phase::Failed(err.display_message()),
        };
        Ok(self.view_mode())
    }

    // endregion: --- Submission

    // region:    --- Dismissal

    /// "Try Again": back to entry with the amount kept.
    pub fn dismiss_failure(&mut self) -> Result<()> {
        match self.phase {
            Phase::Failed(_) => {
                self.phase = Phase::Entry;
                Ok(())
            }
            _ => Err(StakingError::State(format!(
                "no failure to dismiss while {:?}",
                self.view_mode()
            ))),
        }
    }

    /// "Home": drop the result, clear the amount and leave the page.
    pub fn dismiss_success(&mut self) -> Navigation {
        if matches!(self.phase, Phase::Succeeded(_)) {
            self.phase = Phase::Entry;
            self.amount.clear();
        }
        Navigation::Home
    }

    /// Success dialog closed without "Home": drop the result, stay on the page.
    pub fn close_success(&mut self) {
        if matches!(self.phase, Phase::Succeeded(_)) {
            self.phase = Phase::Entry;
        }
    }

    /// Back arrow. The form itself is untouched.
    pub fn go_back(&self) -> Navigation {
        Navigation::Back
    }

    // endregion: --- Dismissal
}
