//! # Centralized Error Handling
//!
//! This module defines the error taxonomy of the Protected Staking deposit flow.
//! It follows the `thiserror` pattern for ergonomic error handling.
//!
//! ## Error Categories
//!
//! 1. **Validation** ([`ValidationError`]) - local, shown inline next to the
//!    amount field, never in a modal. Blocks submission.
//! 2. **Submission** ([`SubmissionError`]) - raised by the deposit submitter,
//!    shown in the "Deposit Failed" modal. Recoverable by retrying.
//! 3. **Unknown balance** - not an error at all: while the balance is still
//!    loading the form reports no validation message.
//!
//! The umbrella [`StakingError`] adds configuration, state-machine, provider
//! and wallet errors for callers that need a single type.
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{StakingError, SubmissionError};
//!
//! let err = SubmissionError::new("insufficient funds");
//! assert_eq!(err.display_message(), "Insufficient funds");
//!
//! let err: StakingError = err.into();
//! assert_eq!(err.user_message(), "Insufficient funds");
//! ```

use crate::amount::AmountError;
use serde::{Deserialize, Serialize};
use shared::utils::capitalize_first;
use thiserror::Error;

/// Message shown inline when the amount cannot be covered by the balance.
pub const INSUFFICIENT_BALANCE: &str = "Insufficient Balance";

/// Message for amount text outside the decimal grammar.
pub const INVALID_AMOUNT: &str = "Invalid Amount";

/// Fallback failure text when the submitter gives no usable reason.
pub const GENERIC_SUBMISSION_FAILURE: &str = "Transaction failed";

/// Convenience type alias for `Result<T, StakingError>`.
pub type Result<T> = std::result::Result<T, StakingError>;

/// Inline validation failure of the amount field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Balance below the minimum, or amount above the balance.
    #[error("Insufficient Balance")]
    InsufficientBalance,

    /// Amount text that does not parse. The form never stores such text, so
    /// this only surfaces for amounts built outside [`crate::deposit::DepositForm`].
    #[error("Invalid Amount")]
    InvalidAmount(#[source] AmountError),
}

/// Failure reported by the deposit submitter.
///
/// The submitter hands back a list of reasons; the first non-blank one is
/// what the user sees, sentence-cased.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{}", self.display_message())]
pub struct SubmissionError {
    pub reason: Vec<String>,
}

impl SubmissionError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: vec![reason.into()],
        }
    }

    pub fn from_reasons(reason: Vec<String>) -> Self {
        Self { reason }
    }

    /// Text for the failure modal: first non-blank reason with its first
    /// letter capitalized, or [`GENERIC_SUBMISSION_FAILURE`].
    pub fn display_message(&self) -> String {
        self.reason
            .iter()
            .map(|reason| reason.trim())
            .find(|reason| !reason.is_empty())
            .map(capitalize_first)
            .unwrap_or_else(|| GENERIC_SUBMISSION_FAILURE.to_string())
    }
}

/// Error type covering every failure of the deposit flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StakingError {
    /// Amount failed inline validation.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Deposit submitter rejected the deposit.
    #[error("Submission error: {0}")]
    Submission(#[from] SubmissionError),

    /// Invalid or missing configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Operation not allowed in the form's current view mode.
    #[error("State error: {0}")]
    State(String),

    /// Balance provider failure (RPC error, malformed response).
    #[error("Provider error: {0}")]
    Provider(String),

    /// No account is connected.
    #[error("Wallet not connected")]
    WalletNotConnected,
}

impl StakingError {
    /// Get a user-friendly error message.
    ///
    /// Internal errors collapse to a generic message.
    pub fn user_message(&self) -> String {
        match self {
            StakingError::Validation(err) => err.to_string(),
            StakingError::Submission(err) => err.display_message(),
            StakingError::Provider(_) => "Balance temporarily unavailable".to_string(),
            StakingError::WalletNotConnected => "Connect a wallet to continue".to_string(),
            StakingError::Config(_) | StakingError::State(_) => {
                "An internal error occurred".to_string()
            }
        }
    }
}

impl From<AmountError> for StakingError {
    fn from(err: AmountError) -> Self {
        StakingError::Validation(ValidationError::InvalidAmount(err))
    }
}

impl From<lib_utils::envs::Error> for StakingError {
    fn from(err: lib_utils::envs::Error) -> Self {
        StakingError::Config(err.to_string())
    }
}
