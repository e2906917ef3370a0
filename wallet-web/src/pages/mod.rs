//! Page modules

pub mod home;
pub mod protected_staking;

pub use home::HomePage;
pub use protected_staking::ProtectedStakingPage;
