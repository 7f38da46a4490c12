//! Domain layer of the Aurum storefront.
//!
//! Models, pure state transitions and the gateway traits the outer layers
//! implement. Nothing in this crate performs I/O.

pub mod cart;
pub mod catalog;
pub mod concierge;
pub mod config;
pub mod configurator;
pub mod error;
pub mod shop;

// Re-export common error type
pub use error::{AurumError, Result};
