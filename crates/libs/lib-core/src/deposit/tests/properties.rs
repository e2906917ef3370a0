//! # Property Tests
//!
//! Invariants of the amount field checked over hand-picked samples.

use super::*;
use crate::error::INSUFFICIENT_BALANCE;

const BALANCES: &[&str] = &["0", "0.0009", "0.001", "0.011", "1", "2.5", "1000000"];
const AMOUNTS: &[&str] = &["0", "0.0001", "0.001", "1", "2.5", "2.500000000000000001", "999"];

fn eth(s: &str) -> EthAmount {
    s.parse().expect("sample should parse")
}

#[test]
fn test_rejected_input_never_changes_amount() {
    let mut form = DepositForm::new(&StakingConfig::default());
    form.set_amount("42");

    for bad in ["4 2", "42a", "--1", "1..", "١٢", "Infinity", "NaN", "0.0000000000000000001"] {
        assert!(!form.set_amount(bad), "{bad:?} should be rejected");
        assert_eq!(form.amount(), "42");
    }
}

#[test]
fn test_no_error_when_amount_within_balance() {
    let min = StakingConfig::default().min_balance;
    for balance in BALANCES.iter().map(|b| eth(b)).filter(|b| *b >= min) {
        for amount in AMOUNTS.iter().filter(|a| eth(a) <= balance) {
            assert_eq!(
                compute_error_message(amount, Some(balance), min),
                "",
                "amount {amount} balance {balance}"
            );
        }
    }
}

#[test]
fn test_low_balance_always_insufficient() {
    let min = StakingConfig::default().min_balance;
    for balance in BALANCES.iter().map(|b| eth(b)).filter(|b| *b < min) {
        for amount in AMOUNTS {
            assert_eq!(
                compute_error_message(amount, Some(balance), min),
                INSUFFICIENT_BALANCE,
                "amount {amount} balance {balance}"
            );
        }
    }
}

#[test]
fn test_confirm_enabled_iff_amount_fits_balance() {
    let min = StakingConfig::default().min_balance;
    for balance in BALANCES.iter().map(|b| eth(b)) {
        for amount in AMOUNTS.iter().chain(std::iter::once(&"")) {
            let mut form = DepositForm::new(&StakingConfig::default());
            form.set_balance(Some(balance));
            form.set_amount(amount);

            let expected = !amount.is_empty() && balance >= min && eth(amount) <= balance;
            assert_eq!(form.can_confirm(), expected, "amount {amount:?} balance {balance}");
        }
    }
}

#[test]
fn test_unknown_balance_never_shows_error() {
    for amount in AMOUNTS.iter().chain(std::iter::once(&"")) {
        let mut form = DepositForm::new(&StakingConfig::default());
        form.set_balance(None);
        form.set_amount(amount);

        assert_eq!(form.error_message(), "", "amount {amount:?}");
        assert_eq!(form.can_confirm(), !amount.is_empty(), "amount {amount:?}");
    }
}

#[test]
fn test_max_amount_valid_when_balance_covers_reserve() {
    let config = StakingConfig::default();
    let reserve = config
        .max_gas_fee
        .checked_add(config.min_balance)
        .expect("Reserve should not overflow");

    for balance in BALANCES.iter().map(|b| eth(b)).filter(|b| *b >= reserve) {
        let mut form = DepositForm::new(&config);
        form.set_balance(Some(balance));
        form.set_max_amount();
        assert_eq!(form.error_message(), "", "balance {balance}");
    }
}
