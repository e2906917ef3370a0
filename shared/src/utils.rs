//! # Shared Utility Functions
//!
//! Display helpers used by both the staking core and the wallet frontend.
//!
//! ## Address Formatting
//!
//! - [`format_address`] - Keep the first N and last M characters of an address
//! - [`truncate_address`] - `0x` + 4 hex digits ... last 4, the usual wallet-button form
//!
//! ## Text
//!
//! - [`capitalize_first`] - Upper-case the first character of a message
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{capitalize_first, format_address};
//!
//! let address = "0x52908400098527886E0F7030069857D2E4169EE7";
//! assert_eq!(format_address(address, 6, 4), "0x5290...9EE7");
//! assert_eq!(capitalize_first("insufficient funds"), "Insufficient funds");
//! ```

/// Format an address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is shorter than `prefix_len + suffix_len`, it is returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x52908400098527886E0F7030069857D2E4169EE7";
/// assert_eq!(format_address(addr, 6, 4), "0x5290...9EE7");
/// assert_eq!(format_address("0x1234", 6, 4), "0x1234");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let char_count = address.chars().count();

    if char_count <= prefix_len + suffix_len {
        return address.to_string();
    }

    let prefix: String = address.chars().take(prefix_len).collect();
    let suffix: String = address.chars().skip(char_count - suffix_len).collect();

    format!("{}...{}", prefix, suffix)
}

/// Shorten a `0x` address to `0x1234...abcd`.
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// let addr = "0x52908400098527886E0F7030069857D2E4169EE7";
/// assert_eq!(truncate_address(addr), "0x5290...9EE7");
/// ```
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}

/// Upper-case the first character, leaving the rest untouched.
///
/// Wallet providers report reasons in lower case (`"insufficient funds"`); the
/// failure modal shows them sentence-cased.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_address() {
        let addr = "0x52908400098527886E0F7030069857D2E4169EE7";
        assert_eq!(format_address(addr, 6, 4), "0x5290...9EE7");
        assert_eq!(format_address(addr, 4, 2), "0x52...E7");
    }

    #[test]
    fn test_format_address_short() {
        assert_eq!(format_address("0xabc", 6, 4), "0xabc");
        assert_eq!(format_address("", 6, 4), "");
    }

    #[test]
    fn test_truncate_address() {
        let addr = "0x52908400098527886E0F7030069857D2E4169EE7";
        assert_eq!(truncate_address(addr), "0x5290...9EE7");
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("insufficient funds"), "Insufficient funds");
        assert_eq!(capitalize_first("User rejected"), "User rejected");
        assert_eq!(capitalize_first("é"), "É");
        assert_eq!(capitalize_first(""), "");
    }
}
