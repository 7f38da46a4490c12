use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use aurum_application::{ConciergeService, ShopUseCase};
use aurum_core::catalog::CatalogRepository;
use aurum_core::concierge::persona::system_instruction;
use aurum_core::config::StoreConfig;
use aurum_infrastructure::{ConfigService, FirestoreCatalogRepository, InMemoryCatalogRepository};
use aurum_interaction::GeminiConnector;

use crate::app::AppState;

/// Picks the catalog gateway: Firestore when a project is configured,
/// otherwise a process-local store.
fn catalog_repository(config: &StoreConfig) -> Result<Arc<dyn CatalogRepository>> {
    if config.firestore.is_configured() {
        let repository = FirestoreCatalogRepository::from_settings(&config.firestore)
            .context("Failed to configure the Firestore catalog")?;
        tracing::info!(
            "[Bootstrap] Using Firestore collection '{}'",
            config.firestore.collection
        );
        Ok(Arc::new(repository))
    } else {
        tracing::info!("[Bootstrap] No Firestore project configured; using an in-memory catalog");
        Ok(Arc::new(InMemoryCatalogRepository::new()))
    }
}

/// Builds the application state.
///
/// 1. Loads configuration (file, then environment)
/// 2. Loads the catalog, falling back to the house collection
/// 3. Prepares the concierge with the loaded catalog in its instruction
pub async fn bootstrap(config_path: Option<PathBuf>) -> Result<AppState> {
    let config_service = ConfigService::new(config_path);
    let config = config_service
        .get_config()
        .context("Failed to load configuration")?;

    let shop = Arc::new(ShopUseCase::new(catalog_repository(&config)?, &config));
    let catalog_source = shop.load_catalog().await;
    tracing::info!("[Bootstrap] Catalog source: {:?}", catalog_source);

    let instruction = system_instruction(&shop.catalog().await);
    let connector = GeminiConnector::new(config.concierge.clone(), instruction);
    let concierge = Arc::new(ConciergeService::new(Arc::new(connector)));

    Ok(AppState {
        config,
        shop,
        concierge,
        catalog_source,
    })
}
