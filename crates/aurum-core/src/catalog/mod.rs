//! Catalog domain module.
//!
//! - `model`: Catalog item and material vocabulary (`Item`, `NewItem`, `Category`, `Metal`, `Gem`)
//! - `repository`: Gateway trait for the remote document collection
//! - `preset`: Static fallback catalog

mod model;
mod preset;
mod repository;

pub use model::{
    Category, Gem, Item, Metal, NewItem, Price, TEMPORARY_ID_PREFIX, is_temporary_id, temporary_id,
};
pub use preset::fallback_catalog;
pub use repository::CatalogRepository;
