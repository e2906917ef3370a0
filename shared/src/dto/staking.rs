//! # Staking Data Transfer Objects
//!
//! Defines the data handed between the Protected Staking deposit form and the
//! external collaborators that do the real work.
//!
//! ## Overview
//!
//! - **[`DepositRequest`]**: what the form asks the deposit submitter to perform
//! - **[`BalanceSnapshot`]**: what the balance provider reports for an account
//! - **[`TransactionResult`]**: what the deposit submitter returns on success
//!
//! ## Flow
//!
//! ```text
//! BalanceProvider ──BalanceSnapshot──► DepositForm ──DepositRequest──► DepositSubmitter
//!                                          ▲                                │
//!                                          └──────TransactionResult─────────┘
//! ```
//!
//! ## JSON Example
//!
//! ```text
//! {
//!   "account": "0x52908400098527886E0F7030069857D2E4169EE7",
//!   "amount": "1.5",
//!   "value_wei": "1500000000000000000"
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request to deposit ETH into the protected staking contract.
///
/// Built by the deposit form once its guard passes. The amount is carried twice:
/// the decimal text the user confirmed, and the exact wei value derived from it.
///
/// # Fields
///
/// * `account` - Address of the connected account paying for the deposit
/// * `amount` - Decimal ETH amount as entered (e.g. `"1.5"`)
/// * `value_wei` - Same amount in wei, base-10 string
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DepositRequest {
    pub account: String,
    pub amount: String,
    pub value_wei: String,
}

/// Balance reported by the balance provider.
///
/// `formatted` is the decimal ETH value (`"2.5"`), `wei` the raw base-10 wei string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BalanceSnapshot {
    pub formatted: String,
    pub wei: String,
}

/// Result of a successful deposit submission.
///
/// Only `hash` is guaranteed; the remaining fields are filled in when the
/// submitter knows them and are omitted from JSON otherwise.
///
/// # JSON Example
///
/// ```json
/// {
///   "hash": "0x5c504ed432cb51138bcf09aa5e8a410dd4a1e204ef84bfed1be16dfba1b22060",
///   "from": "0x52908400098527886E0F7030069857D2E4169EE7",
///   "value_wei": "1000000000000000000"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransactionResult {
    pub hash: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_wei: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
}

impl TransactionResult {
    /// Result carrying only a transaction hash.
    pub fn new(hash: impl Into<String>) -> Self {
        Self {
            hash: hash.into(),
            from: None,
            value_wei: None,
            submitted_at: None,
        }
    }

    /// Attach the originating request (sender and value).
    pub fn for_request(mut self, request: &DepositRequest) -> Self {
        self.from = Some(request.account.clone());
        self.value_wei = Some(request.value_wei.clone());
        self
    }

    pub fn submitted_at(mut self, at: DateTime<Utc>) -> Self {
        self.submitted_at = Some(at);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========== TransactionResult Tests ==========

    #[test]
    fn test_transaction_result_optional_fields_omitted() {
        let result = TransactionResult::new("0xabc");

        let json = serde_json::to_string(&result)
            .expect("TransactionResult should serialize to JSON");
        assert_eq!(json, r#"{"hash":"0xabc"}"#);
    }

    #[test]
    fn test_transaction_result_for_request() {
        let request = DepositRequest {
            account: "0x52908400098527886E0F7030069857D2E4169EE7".to_string(),
            amount: "1".to_string(),
            value_wei: "1000000000000000000".to_string(),
        };

        let result = TransactionResult::new("0xabc").for_request(&request);

        assert_eq!(result.from.as_deref(), Some(request.account.as_str()));
        assert_eq!(result.value_wei.as_deref(), Some("1000000000000000000"));
        assert!(result.submitted_at.is_none());
    }

    #[test]
    fn test_transaction_result_deserialize_without_optionals() {
        let json = r#"{"hash":"0xdef"}"#;
        let result: TransactionResult = serde_json::from_str(json)
            .expect("Hash-only JSON should deserialize to TransactionResult");

        assert_eq!(result, TransactionResult::new("0xdef"));
    }

    // ========== BalanceSnapshot Tests ==========

    #[test]
    fn test_balance_snapshot_deserialize() {
        let json = r#"{"formatted":"2.5","wei":"2500000000000000000"}"#;
        let snapshot: BalanceSnapshot = serde_json::from_str(json)
            .expect("Valid JSON should deserialize to BalanceSnapshot");

        assert_eq!(snapshot.formatted, "2.5");
        assert_eq!(snapshot.wei, "2500000000000000000");
    }
}
