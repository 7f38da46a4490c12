//! Shop session state.
//!
//! This is the plain data the storefront renders from. All transitions are
//! synchronous; the async reconciliation with the document store lives in
//! the application layer and is built from the staged operations below.

use crate::cart::{Cart, CartEntry};
use crate::catalog::{Gem, Item, Metal, NewItem, Price, temporary_id};
use crate::configurator::ConfigurationDraft;
use serde::Serialize;

/// Where the visible catalog came from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogSource {
    /// Startup load has not completed yet
    #[default]
    NotLoaded,
    /// Items were served by the document store
    Remote,
    /// The document store answered with no items; the static catalog is shown
    FallbackEmpty,
    /// The document store could not be reached; the static catalog is shown
    FallbackUnavailable { reason: String },
}

impl CatalogSource {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::FallbackEmpty | Self::FallbackUnavailable { .. })
    }
}

/// State of one storefront session.
///
/// Created empty, populated once by the startup catalog load, then mutated by
/// user actions. Nothing here outlives the process.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ShopState {
    pub catalog: Vec<Item>,
    pub cart: Cart,
    pub is_configurator_open: bool,
    pub is_admin_open: bool,
    pub active_item: Option<Item>,
    pub draft: Option<ConfigurationDraft>,
    pub is_loading: bool,
    pub catalog_source: CatalogSource,
    #[serde(skip)]
    configurator_generation: u64,
}

impl ShopState {
    pub fn new() -> Self {
        Self::default()
    }

    // ============================================================================
    // Catalog
    // ============================================================================

    pub fn set_catalog(&mut self, items: Vec<Item>, source: CatalogSource) {
        self.catalog = items;
        self.catalog_source = source;
    }

    pub fn find_item(&self, id: &str) -> Option<&Item> {
        self.catalog.iter().find(|item| item.id == id)
    }

    /// Inserts `item` under a fresh temporary identifier (phase one of an admin add).
    pub fn stage_item(&mut self, item: NewItem) -> Item {
        let staged = item.into_item(temporary_id());
        self.catalog.push(staged.clone());
        staged
    }

    /// Replaces a temporary identifier with the one assigned by the store.
    ///
    /// Returns `false` when the staged entry is gone (removed while the create
    /// was in flight).
    pub fn confirm_item(&mut self, temporary_id: &str, remote_id: &str) -> bool {
        match self.catalog.iter_mut().find(|item| item.id == temporary_id) {
            Some(item) => {
                item.id = remote_id.to_string();
                true
            }
            None => false,
        }
    }

    /// Drops a staged entry after its remote create failed.
    pub fn revert_item(&mut self, temporary_id: &str) -> Option<Item> {
        self.take_item(temporary_id).map(|(_, item)| item)
    }

    /// Removes an item, returning it together with its former position.
    pub fn take_item(&mut self, id: &str) -> Option<(usize, Item)> {
        let index = self.catalog.iter().position(|item| item.id == id)?;
        Some((index, self.catalog.remove(index)))
    }

    /// Puts a removed item back at its former position (or at the end when
    /// the catalog has shrunk since).
    pub fn restore_item(&mut self, index: usize, item: Item) {
        let index = index.min(self.catalog.len());
        self.catalog.insert(index, item);
    }

    // ============================================================================
    // Cart
    // ============================================================================

    pub fn add_to_cart(&mut self, item: Item) -> CartEntry {
        self.cart.add(item).clone()
    }

    /// Places the configured piece in the cart. No-op when no draft is open
    /// or the configured price overflows.
    pub fn add_draft_to_cart(&mut self) -> Option<CartEntry> {
        let item = self.draft.as_ref()?.to_item()?;
        Some(self.add_to_cart(item))
    }

    // ============================================================================
    // Configurator
    // ============================================================================

    /// Opens the configurator on `item` and returns the new generation.
    pub fn open_configurator(&mut self, item: Item) -> u64 {
        self.configurator_generation += 1;
        self.draft = Some(ConfigurationDraft::new(item.clone()));
        self.active_item = Some(item);
        self.is_configurator_open = true;
        self.configurator_generation
    }

    /// Hides the configurator and discards the draft. The active item stays
    /// until [`ShopState::clear_active_item`] is called with the returned
    /// generation.
    pub fn close_configurator(&mut self) -> u64 {
        self.is_configurator_open = false;
        self.draft = None;
        self.configurator_generation
    }

    /// Clears the active item unless the configurator was reopened after the
    /// close that produced `generation`.
    pub fn clear_active_item(&mut self, generation: u64) -> bool {
        if self.is_configurator_open || generation != self.configurator_generation {
            return false;
        }
        self.active_item = None;
        true
    }

    pub fn select_metal(&mut self, metal: Metal) -> Option<Price> {
        let draft = self.draft.as_mut()?;
        draft.select_metal(metal);
        draft.price()
    }

    pub fn select_gem(&mut self, gem: Gem) -> Option<Price> {
        let draft = self.draft.as_mut()?;
        draft.select_gem(gem);
        draft.price()
    }

    pub fn configured_price(&self) -> Option<Price> {
        self.draft.as_ref().and_then(ConfigurationDraft::price)
    }
}
