//! # Environment Variables
//!
//! Utilities for reading and parsing environment variables.
//!
//! Every reader goes through a lookup function so callers can substitute their
//! own source (compile-time values in the browser, a map in tests).

use std::env;
use std::str::FromStr;

/// Get an environment variable, treating unset and blank the same.
pub fn get_env_opt(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

/// Parse a value from `lookup`, falling back to `default` when it is absent.
///
/// A present but unparsable value is an error, not a silent fallback.
pub fn get_env_parse_or<T, F>(lookup: F, name: &'static str, default: T) -> Result<T, Error>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(raw) if !raw.trim().is_empty() => {
            raw.trim().parse::<T>().map_err(|_| Error::WrongFormat(name))
        }
        _ => Ok(default),
    }
}

// region:    --- Error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    WrongFormat(&'static str),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::WrongFormat(name) => write!(fmt, "{name} has an invalid format"),
        }
    }
}

impl std::error::Error for Error {}
// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_parse_or_uses_default_when_absent() {
        let lookup = lookup_from(&[]);
        assert_eq!(get_env_parse_or(lookup, "CHAIN", 5u64), Ok(5));
    }

    #[test]
    fn test_parse_or_uses_default_when_blank() {
        let lookup = lookup_from(&[("CHAIN", "  ")]);
        assert_eq!(get_env_parse_or(lookup, "CHAIN", 5u64), Ok(5));
    }

    #[test]
    fn test_parse_or_parses_trimmed_value() {
        let lookup = lookup_from(&[("CHAIN", " 11155111 ")]);
        assert_eq!(get_env_parse_or(lookup, "CHAIN", 5u64), Ok(11155111));
    }

    #[test]
    fn test_parse_or_rejects_garbage() {
        let lookup = lookup_from(&[("CHAIN", "sepolia")]);
        assert_eq!(
            get_env_parse_or(lookup, "CHAIN", 5u64),
            Err(Error::WrongFormat("CHAIN"))
        );
    }

    #[test]
    fn test_wrong_format_message() {
        assert_eq!(
            Error::WrongFormat("STAKING_NETWORK_ID").to_string(),
            "STAKING_NETWORK_ID has an invalid format"
        );
    }
}
