//! In-process catalog gateway.
//!
//! Used when no document store is configured, and as a test double.

use aurum_core::catalog::{CatalogRepository, Item, NewItem};
use aurum_core::Result;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

/// Catalog gateway that keeps documents in memory for the life of the process.
#[derive(Default)]
pub struct InMemoryCatalogRepository {
    items: RwLock<Vec<Item>>,
    next_id: AtomicU64,
}

impl InMemoryCatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `items`.
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items: RwLock::new(items),
            next_id: AtomicU64::new(0),
        }
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }
}

#[async_trait::async_trait]
impl CatalogRepository for InMemoryCatalogRepository {
    async fn list_all(&self) -> Result<Vec<Item>> {
        Ok(self.items.read().await.clone())
    }

    async fn create(&self, item: &NewItem) -> Result<String> {
        let id = format!("mem-{}", self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        self.items.write().await.push(item.clone().into_item(id.clone()));
        Ok(id)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.items.write().await.retain(|item| item.id != id);
        Ok(())
    }
}
