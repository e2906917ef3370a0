//! # Protected Staking Deposit
//!
//! - [`form`] - the deposit form state machine
//! - [`flow`] - async calls into the balance provider and deposit submitter
//! - [`ports`] - collaborator traits implemented by the UI and by tests

pub mod flow;
pub mod form;
pub mod ports;

#[cfg(test)]
mod tests;

pub use form::{
    compute_error_message, validate_amount, DepositForm, ViewMode,
    BALANCE_DISPLAY_DECIMALS,
};
pub use ports::{BalanceProvider, DepositSubmitter, LinkFactory, Navigation, Navigator};
