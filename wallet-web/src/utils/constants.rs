//! Application constants

pub const HOME_ROUTE: &str = "/";
pub const PROTECTED_STAKING_ROUTE: &str = "/deposit/protected";

/// Minimum time the "Confirmation Pending" modal stays up once the wallet answers.
pub const PENDING_SETTLE_MS: u32 = 500;

pub const TOKEN_SYMBOL: &str = "ETH";
