//! Core types and ambient utilities

pub mod error;
pub mod logging;
pub mod random;
pub mod types;

pub use error::Error;
pub use types::*;
