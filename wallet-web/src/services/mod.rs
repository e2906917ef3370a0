//! Browser services: wallet provider bindings and routing

pub mod ethereum;
pub mod navigation;
