//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged between the deposit form core and its collaborators
//! (balance provider, deposit submitter, link factory).
//!
//! ## Module Organization
//!
//! - [`staking`] - Deposit request, balance snapshot and transaction result DTOs
//!
//! ## Serialization Format
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Optional fields**: Omitted when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **Amounts**: decimal strings (`"1.5"`) and wei strings (`"1500000000000000000"`)

pub mod staking;

pub use staking::*;
