//! Shop use case implementation.
//!
//! `ShopUseCase` owns the session's [`ShopState`] and reconciles it with the
//! remote catalog gateway. Admin mutations are applied locally first and then
//! confirmed or rolled back once the gateway answers.

use crate::retry::with_backoff;
use aurum_core::cart::CartEntry;
use aurum_core::catalog::{CatalogRepository, Gem, Item, Metal, NewItem, Price, fallback_catalog, is_temporary_id};
use aurum_core::config::{CatalogSettings, RetryPolicy, ShopSettings, StoreConfig};
use aurum_core::shop::{CatalogSource, ShopState};
use aurum_core::{AurumError, Result};
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

const ITEM_ENTITY: &str = "catalog item";

/// Use case for one storefront session.
///
/// # Responsibilities
///
/// - Loading the catalog at startup, falling back to the static catalog
/// - Cart additions
/// - Configurator lifecycle and live pricing
/// - Admin add/remove with optimistic local updates
///
/// # Thread Safety
///
/// The state sits behind a `tokio::sync::RwLock`. The lock is never held
/// while a gateway call is pending, so concurrent admin operations may
/// complete in any order; each one only touches its own catalog entry.
pub struct ShopUseCase {
    state: Arc<RwLock<ShopState>>,
    /// Remote catalog gateway
    catalog_repository: Arc<dyn CatalogRepository>,
    catalog_settings: CatalogSettings,
    shop_settings: ShopSettings,
    retry: RetryPolicy,
}

impl ShopUseCase {
    /// Creates a use case with an empty session state.
    ///
    /// # Arguments
    ///
    /// * `catalog_repository` - Gateway used for loading and admin mutations
    /// * `config` - Storefront configuration (catalog, shop and retry sections)
    pub fn new(catalog_repository: Arc<dyn CatalogRepository>, config: &StoreConfig) -> Self {
        Self {
            state: Arc::new(RwLock::new(ShopState::new())),
            catalog_repository,
            catalog_settings: config.catalog.clone(),
            shop_settings: config.shop.clone(),
            retry: config.retry.clone(),
        }
    }

    /// Returns a copy of the current session state.
    pub async fn snapshot(&self) -> ShopState {
        self.state.read().await.clone()
    }

    pub async fn catalog(&self) -> Vec<Item> {
        self.state.read().await.catalog.clone()
    }

    pub async fn find_item(&self, id: &str) -> Option<Item> {
        self.state.read().await.find_item(id).cloned()
    }

    // ============================================================================
    // Catalog loading
    // ============================================================================

    /// Loads the catalog from the gateway.
    ///
    /// # Returns
    ///
    /// The source the visible catalog now comes from. This never fails: a
    /// gateway error is recorded as `CatalogSource::FallbackUnavailable`.
    pub async fn load_catalog(&self) -> CatalogSource {
        self.state.write().await.is_loading = true;

        let result = self.catalog_repository.list_all().await;

        let (items, source) = match result {
            Ok(items) if !items.is_empty() => {
                tracing::info!("Loaded {} catalog items from the store", items.len());
                (items, CatalogSource::Remote)
            }
            Ok(_) if self.catalog_settings.fallback_on_empty => {
                tracing::info!("Catalog store is empty; showing the house collection");
                (fallback_catalog(), CatalogSource::FallbackEmpty)
            }
            Ok(_) => {
                tracing::info!("Catalog store is empty");
                (Vec::new(), CatalogSource::Remote)
            }
            Err(err) => {
                tracing::warn!("Catalog store unavailable, showing the house collection: {}", err);
                (
                    fallback_catalog(),
                    CatalogSource::FallbackUnavailable {
                        reason: err.to_string(),
                    },
                )
            }
        };

        let mut state = self.state.write().await;
        state.set_catalog(items, source.clone());
        state.is_loading = false;
        source
    }

    // ============================================================================
    // Cart
    // ============================================================================

    /// Appends `item` to the cart under a fresh cart identifier.
    pub async fn add_to_cart(&self, item: Item) -> CartEntry {
        let entry = self.state.write().await.add_to_cart(item);
        tracing::debug!("Added {} to cart as {}", entry.item.id, entry.cart_id);
        entry
    }

    // ============================================================================
    // Admin
    // ============================================================================

    pub async fn set_admin_open(&self, open: bool) {
        self.state.write().await.is_admin_open = open;
    }

    /// Adds a product to the catalog.
    ///
    /// The item appears immediately under a temporary id and is re-keyed with
    /// the store's id once the create succeeds.
    ///
    /// # Returns
    ///
    /// - `Ok(Item)`: The item as stored, carrying the store-assigned id
    /// - `Err(AurumError::Gateway)`: The create failed; the staged item was removed
    /// - `Err(AurumError::NotFound)`: The staged item was removed while the
    ///   create was in flight; the remote copy has been deleted again
    pub async fn add_item(&self, item: NewItem) -> Result<Item> {
        let staged = self.state.write().await.stage_item(item.clone());
        let temporary_id = staged.id.clone();
        tracing::debug!("Staged {} as {}", staged.name, temporary_id);

        let repository = &self.catalog_repository;
        let created = with_backoff(&self.retry, "create catalog item", || repository.create(&item)).await;

        let remote_id = match created {
            Ok(id) => id,
            Err(err) => {
                self.state.write().await.revert_item(&temporary_id);
                tracing::warn!("Failed to add {}, reverted: {}", staged.name, err);
                return Err(err);
            }
        };

        let confirmed = self.state.write().await.confirm_item(&temporary_id, &remote_id);
        if !confirmed {
            tracing::warn!(
                "{} was removed before the store confirmed it; deleting remote {}",
                temporary_id,
                remote_id
            );
            if let Err(err) =
                with_backoff(&self.retry, "delete orphaned item", || repository.delete(&remote_id)).await
            {
                tracing::error!("Orphaned catalog document {} remains: {}", remote_id, err);
            }
            return Err(AurumError::not_found(ITEM_ENTITY, temporary_id));
        }

        tracing::info!("Added {} as {}", staged.name, remote_id);
        Ok(Item {
            id: remote_id,
            ..staged
        })
    }

    /// Removes a product from the catalog.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: The item is gone locally and remotely
    /// - `Err(AurumError::NotFound)`: No item has this id; the store was not called
    /// - `Err(AurumError::Gateway)`: The delete failed; the item is back in its place
    pub async fn remove_item(&self, id: &str) -> Result<()> {
        let (index, item) = self
            .state
            .write()
            .await
            .take_item(id)
            .ok_or_else(|| AurumError::not_found(ITEM_ENTITY, id))?;

        // Still staged: the pending add notices and cleans up after itself
        if is_temporary_id(id) {
            tracing::debug!("Removed staged item {} locally", id);
            return Ok(());
        }

        let repository = &self.catalog_repository;
        match with_backoff(&self.retry, "delete catalog item", || repository.delete(id)).await {
            Ok(()) => {
                tracing::info!("Removed {} ({})", item.name, id);
                Ok(())
            }
            Err(err) => {
                tracing::warn!("Failed to remove {}, restored: {}", item.name, err);
                self.state.write().await.restore_item(index, item);
                Err(err)
            }
        }
    }

    // ============================================================================
    // Configurator
    // ============================================================================

    /// Opens the configurator on `item` with its own metal and gem preselected.
    pub async fn open_configurator(&self, item: Item) {
        tracing::debug!("Opening configurator for {}", item.id);
        self.state.write().await.open_configurator(item);
    }

    /// Closes the configurator and discards the draft.
    ///
    /// The active item is cleared after the configured exit delay unless the
    /// configurator has been reopened by then. The returned handle resolves to
    /// whether the clear happened.
    pub async fn close_configurator(&self) -> JoinHandle<bool> {
        let generation = self.state.write().await.close_configurator();
        let delay = self.shop_settings.configurator_exit_delay();
        let state = Arc::clone(&self.state);

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            state.write().await.clear_active_item(generation)
        })
    }

    /// Updates the draft's metal and returns the new price. `None` when the
    /// configurator is closed or the price overflows.
    pub async fn select_metal(&self, metal: Metal) -> Option<Price> {
        self.state.write().await.select_metal(metal)
    }

    pub async fn select_gem(&self, gem: Gem) -> Option<Price> {
        self.state.write().await.select_gem(gem)
    }

    /// Live price of the open configuration.
    pub async fn configured_price(&self) -> Option<Price> {
        self.state.read().await.configured_price()
    }

    /// Commits the open configuration to the cart and closes the configurator.
    ///
    /// Returns `None` when no configurator is open.
    pub async fn add_configuration_to_cart(&self) -> Option<(CartEntry, JoinHandle<bool>)> {
        let entry = self.state.write().await.add_draft_to_cart()?;
        tracing::debug!("Added configured {} at {}", entry.item.id, entry.item.price);
        let clear = self.close_configurator().await;
        Some((entry, clear))
    }
}
