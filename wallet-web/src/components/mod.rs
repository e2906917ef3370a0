//! UI Components

pub mod modals;
pub mod navbar;

pub use modals::{ErrorModal, LoadingModal, SuccessDialog};
pub use navbar::Navbar;
