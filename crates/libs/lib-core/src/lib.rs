//! # Core Library
//!
//! Headless core of the Protected Staking deposit flow: amounts, networks,
//! configuration, errors, explorer links and the deposit form itself.
//!
//! Nothing here touches the browser. The wallet frontend implements the
//! collaborator traits in [`deposit::ports`] and drives [`deposit::DepositForm`].

pub mod amount;
pub mod config;
pub mod deposit;
pub mod error;
pub mod links;
pub mod network;

// Re-export commonly used types
pub use amount::{AmountError, EthAmount};
pub use config::StakingConfig;
pub use error::{Result, StakingError, SubmissionError, ValidationError};
pub use links::ExplorerLinks;
pub use network::Network;
