//! # ETH Amounts
//!
//! Exact, wei-denominated ETH quantities and the decimal grammar the deposit
//! form accepts while the user types.
//!
//! ## Grammar
//!
//! An amount is unsigned decimal text: ASCII digits with at most one `.`, at
//! least one digit overall and at most [`ETH_DECIMALS`] digits after the point.
//!
//! | Input     | Accepted | Value  |
//! |-----------|----------|--------|
//! | `""`      | yes (form only) | none |
//! | `"1"`     | yes      | 1      |
//! | `"1."`    | yes      | 1      |
//! | `".5"`    | yes      | 0.5    |
//! | `"."`     | no       |        |
//! | `"-1"`    | no       |        |
//! | `"1e3"`   | no       |        |
//! | `"1,000"` | no       |        |
//!
//! Values are stored as a `u128` count of wei, so comparisons against the
//! balance and the gas-fee subtraction are exact.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of fraction digits carried by ETH (1 ETH = 10^18 wei).
pub const ETH_DECIMALS: usize = 18;

/// Wei in one ETH.
pub const WEI_PER_ETH: u128 = 1_000_000_000_000_000_000;

const WEI_PER_MILLI_ETH: u128 = WEI_PER_ETH / 1_000;

/// Errors raised while parsing an amount.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("amount is empty")]
    Empty,

    #[error("malformed amount: {0:?}")]
    Malformed(String),

    #[error("at most {max} decimal places are supported")]
    TooManyDecimals { max: usize },

    #[error("amount is too large")]
    Overflow,
}

/// An ETH quantity held as an exact number of wei.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EthAmount(u128);

impl EthAmount {
    pub const ZERO: EthAmount = EthAmount(0);

    pub const fn from_wei(wei: u128) -> Self {
        Self(wei)
    }

    /// Amount in thousandths of an ETH (`from_milli_eth(1)` is 0.001 ETH).
    pub const fn from_milli_eth(milli: u128) -> Self {
        Self(milli * WEI_PER_MILLI_ETH)
    }

    pub const fn wei(self) -> u128 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Parse decimal ETH text (`"2.5"`) using the grammar described in the module docs.
    pub fn parse(input: &str) -> Result<Self, AmountError> {
        if input.is_empty() {
            return Err(AmountError::Empty);
        }

        let (int_part, frac_part) = input.split_once('.').unwrap_or((input, ""));

        let malformed = || AmountError::Malformed(input.to_string());
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(malformed());
        }
        if !int_part.bytes().all(|b| b.is_ascii_digit()) || !frac_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        if frac_part.len() > ETH_DECIMALS {
            return Err(AmountError::TooManyDecimals { max: ETH_DECIMALS });
        }

        let whole = digits_to_u128(int_part)?;
        let fraction = digits_to_u128(frac_part)?
            .checked_mul(10u128.pow((ETH_DECIMALS - frac_part.len()) as u32))
            .ok_or(AmountError::Overflow)?;

        whole
            .checked_mul(WEI_PER_ETH)
            .and_then(|wei| wei.checked_add(fraction))
            .map(Self)
            .ok_or(AmountError::Overflow)
    }

    /// Parse a base-10 wei string (`"2500000000000000000"`).
    pub fn from_wei_str(wei: &str) -> Result<Self, AmountError> {
        let wei = wei.trim();
        if wei.is_empty() {
            return Err(AmountError::Empty);
        }
        if !wei.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AmountError::Malformed(wei.to_string()));
        }
        digits_to_u128(wei).map(Self)
    }

    /// Parse a `0x`-prefixed hex wei quantity, as returned by `eth_getBalance`.
    pub fn from_hex_wei(hex: &str) -> Result<Self, AmountError> {
        let body = hex
            .trim()
            .strip_prefix("0x")
            .ok_or_else(|| AmountError::Malformed(hex.to_string()))?;
        if body.is_empty() || !body.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(AmountError::Malformed(hex.to_string()));
        }

        let significant = body.trim_start_matches('0');
        if significant.is_empty() {
            return Ok(Self::ZERO);
        }
        u128::from_str_radix(significant, 16)
            .map(Self)
            .map_err(|_| AmountError::Overflow)
    }

    /// `0x`-prefixed hex wei quantity for JSON-RPC (`"0x0"` for zero).
    pub fn to_hex_wei(self) -> String {
        format!("{:#x}", self.0)
    }

    pub fn saturating_sub(self, other: EthAmount) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    pub fn checked_add(self, other: EthAmount) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Shortest exact decimal form: `"2.49"`, `"1"`, `"0"`.
    pub fn to_decimal_string(self) -> String {
        let whole = self.0 / WEI_PER_ETH;
        let fraction = self.0 % WEI_PER_ETH;
        if fraction == 0 {
            return whole.to_string();
        }
        let fraction = format!("{:0width$}", fraction, width = ETH_DECIMALS);
        format!("{}.{}", whole, fraction.trim_end_matches('0'))
    }

    /// Human-readable form with thousands separators and at most
    /// `max_fraction_digits` decimals, rounded half up, trailing zeros dropped.
    ///
    /// ```rust
    /// use lib_core::amount::EthAmount;
    ///
    /// let amount: EthAmount = "1234.56789".parse().unwrap();
    /// assert_eq!(amount.format_display(4), "1,234.5679");
    /// assert_eq!(EthAmount::ZERO.format_display(4), "0");
    /// ```
    pub fn format_display(self, max_fraction_digits: usize) -> String {
        let digits = max_fraction_digits.min(ETH_DECIMALS);
        let unit = 10u128.pow((ETH_DECIMALS - digits) as u32);
        let rounded = (self.0.saturating_add(unit / 2) / unit) * unit;

        let whole = group_thousands(&(rounded / WEI_PER_ETH).to_string());
        let fraction = format!("{:0width$}", rounded % WEI_PER_ETH, width = ETH_DECIMALS);
        let fraction = fraction[..digits].trim_end_matches('0');

        if fraction.is_empty() {
            whole
        } else {
            format!("{}.{}", whole, fraction)
        }
    }
}

impl fmt::Display for EthAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_decimal_string())
    }
}

impl FromStr for EthAmount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s.trim())
    }
}

impl TryFrom<String> for EthAmount {
    type Error = AmountError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<EthAmount> for String {
    fn from(amount: EthAmount) -> Self {
        amount.to_decimal_string()
    }
}

/// Parse the amount field: `Ok(None)` when empty, `Ok(Some(_))` when valid.
pub fn parse_amount_input(input: &str) -> Result<Option<EthAmount>, AmountError> {
    if input.is_empty() {
        return Ok(None);
    }
    EthAmount::parse(input).map(Some)
}

fn digits_to_u128(digits: &str) -> Result<u128, AmountError> {
    digits.bytes().try_fold(0u128, |acc, b| {
        acc.checked_mul(10)
            .and_then(|acc| acc.checked_add(u128::from(b - b'0')))
            .ok_or(AmountError::Overflow)
    })
}

/// Insert `,` every three digits from the right ("1234567" -> "1,234,567").
fn group_thousands(integer: &str) -> String {
    let mut result = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, ch) in integer.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}
