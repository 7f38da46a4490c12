//! Shop session domain module.

mod state;

pub use state::{CatalogSource, ShopState};
