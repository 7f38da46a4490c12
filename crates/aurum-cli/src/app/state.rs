use std::sync::Arc;

use aurum_application::{ConciergeService, ShopUseCase};
use aurum_core::config::StoreConfig;
use aurum_core::shop::CatalogSource;

/// Application state shared by the CLI commands.
pub struct AppState {
    pub config: StoreConfig,
    pub shop: Arc<ShopUseCase>,
    pub concierge: Arc<ConciergeService>,
    /// Where the startup catalog came from
    pub catalog_source: CatalogSource,
}
