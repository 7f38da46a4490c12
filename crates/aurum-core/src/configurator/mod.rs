//! Configurator domain module.
//!
//! - `material`: Color and price modifier tables for metals and gems
//! - `pricing`: Live price of a configured piece
//! - `draft`: The working copy edited while the configurator is open

mod draft;
mod material;
mod pricing;

pub use draft::ConfigurationDraft;
pub use pricing::configured_price;
