//! Application state shared through Leptos context

pub mod staking;
pub mod wallet;
