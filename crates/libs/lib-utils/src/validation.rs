//! # Validation Utilities
//!
//! Input validation helpers for account addresses and required fields.

/// Validate that a string is not empty.
pub fn validate_not_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} cannot be empty", field_name))
    } else {
        Ok(())
    }
}

/// Validate a `0x`-prefixed, 20-byte hex address (checksum not verified).
pub fn validate_eth_address(address: &str) -> Result<(), String> {
    validate_hex(address, 40, "Address")
}

fn validate_hex(value: &str, digits: usize, field_name: &str) -> Result<(), String> {
    validate_not_empty(value, field_name)?;

    let body = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .ok_or_else(|| format!("{} must start with 0x", field_name))?;

    if body.len() != digits {
        return Err(format!("{} must have {} hex digits", field_name, digits));
    }

    if !body.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("{} must be hexadecimal", field_name));
    }

    Ok(())
}
