//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the staking core (`lib-core`) and the
//! browser frontend (`wallet-web`). Everything here is plain data plus a couple of
//! display helpers, so both sides agree on one shape for a deposit.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects
//!   - **[`dto::staking`]**: Deposit requests, balance snapshots, transaction results
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Shorten `0x` account addresses for display
//!   - **[`utils::capitalize_first`]**: Sentence-case wallet error reasons
//!
//! ## Wire Format
//!
//! All DTOs serialize to JSON using the default `serde` behavior:
//! - Field names use **snake_case**
//! - Optional fields are omitted from JSON when `None`
//! - Wei quantities travel as decimal strings, never as floats
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::staking::TransactionResult;
//! use shared::utils::truncate_address;
//!
//! let result = TransactionResult::new("0xabc");
//! assert_eq!(result.hash, "0xabc");
//!
//! let short = truncate_address("0x52908400098527886E0F7030069857D2E4169EE7");
//! assert_eq!(short, "0x5290...9EE7");
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
