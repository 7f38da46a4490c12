//! Admin add/remove against a scripted catalog gateway.

use async_trait::async_trait;
use aurum_application::ShopUseCase;
use aurum_core::catalog::{
    CatalogRepository, Category, Gem, Item, Metal, NewItem, fallback_catalog, is_temporary_id,
};
use aurum_core::config::{RetryPolicy, StoreConfig};
use aurum_core::shop::CatalogSource;
use aurum_core::{AurumError, Result};
use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::{Mutex, Notify};

/// Gateway whose create/delete outcomes are scripted per call.
#[derive(Default)]
struct ScriptedRepository {
    items: Vec<Item>,
    list_error: Option<AurumError>,
    create_results: Mutex<VecDeque<Result<String>>>,
    delete_results: Mutex<VecDeque<Result<()>>>,
    create_calls: AtomicUsize,
    delete_calls: AtomicUsize,
    deleted_ids: Mutex<Vec<String>>,
    /// When set, `create` waits for a permit before answering
    create_gate: Option<Arc<Notify>>,
    create_started: Arc<Notify>,
}

impl ScriptedRepository {
    fn with_items(items: Vec<Item>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    async fn script_create(&self, result: Result<String>) {
        self.create_results.lock().await.push_back(result);
    }

    async fn script_delete(&self, result: Result<()>) {
        self.delete_results.lock().await.push_back(result);
    }
}

#[async_trait]
impl CatalogRepository for ScriptedRepository {
    async fn list_all(&self) -> Result<Vec<Item>> {
        match &self.list_error {
            Some(err) => Err(err.clone()),
            None => Ok(self.items.clone()),
        }
    }

    async fn create(&self, _item: &NewItem) -> Result<String> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.create_started.notify_one();
        if let Some(gate) = &self.create_gate {
            gate.notified().await;
        }
        self.create_results
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Ok("remote-default".to_string()))
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.deleted_ids.lock().await.push(id.to_string());
        self.delete_results.lock().await.pop_front().unwrap_or(Ok(()))
    }
}

fn config() -> StoreConfig {
    StoreConfig {
        retry: RetryPolicy {
            max_attempts: 3,
            base_delay_ms: 10,
            max_delay_ms: 100,
            jitter: false,
        },
        ..StoreConfig::default()
    }
}

fn unavailable() -> AurumError {
    AurumError::gateway("firestore", "unavailable", Some(503), true)
}

fn denied() -> AurumError {
    AurumError::gateway("firestore", "denied", Some(403), false)
}

fn new_item() -> NewItem {
    NewItem::new("Aurora", 1500, Category::Necklace, Metal::Platinum, Gem::Sapphire)
}

async fn loaded_shop(repository: Arc<ScriptedRepository>) -> ShopUseCase {
    let shop = ShopUseCase::new(repository, &config());
    shop.load_catalog().await;
    shop
}

#[tokio::test]
async fn test_unreachable_store_shows_house_collection() {
    let repository = Arc::new(ScriptedRepository {
        list_error: Some(unavailable()),
        ..ScriptedRepository::default()
    });
    let shop = ShopUseCase::new(repository, &config());

    let source = shop.load_catalog().await;

    assert!(matches!(source, CatalogSource::FallbackUnavailable { .. }));
    assert_eq!(shop.catalog().await, fallback_catalog());
}

#[tokio::test(start_paused = true)]
async fn test_add_retries_transient_failures() {
    let repository = Arc::new(ScriptedRepository::with_items(fallback_catalog()));
    repository.script_create(Err(unavailable())).await;
    repository.script_create(Ok("srv-9".to_string())).await;
    let shop = loaded_shop(repository.clone()).await;

    let added = shop.add_item(new_item()).await.unwrap();

    assert_eq!(added.id, "srv-9");
    assert_eq!(repository.create_calls.load(Ordering::SeqCst), 2);
    let catalog = shop.catalog().await;
    assert_eq!(catalog.len(), 5);
    assert_eq!(catalog.last().map(|item| item.id.as_str()), Some("srv-9"));
}

#[tokio::test(start_paused = true)]
async fn test_failed_add_is_reverted() {
    let repository = Arc::new(ScriptedRepository::with_items(fallback_catalog()));
    repository.script_create(Err(denied())).await;
    let shop = loaded_shop(repository.clone()).await;

    let err = shop.add_item(new_item()).await.unwrap_err();

    assert!(matches!(err, AurumError::Gateway { status: Some(403), .. }));
    assert_eq!(repository.create_calls.load(Ordering::SeqCst), 1);
    assert_eq!(shop.catalog().await, fallback_catalog());
}

#[tokio::test(start_paused = true)]
async fn test_exhausted_retries_revert_add() {
    let repository = Arc::new(ScriptedRepository::with_items(fallback_catalog()));
    for _ in 0..3 {
        repository.script_create(Err(unavailable())).await;
    }
    let shop = loaded_shop(repository.clone()).await;

    assert!(shop.add_item(new_item()).await.unwrap_err().is_retryable());
    assert_eq!(repository.create_calls.load(Ordering::SeqCst), 3);
    assert_eq!(shop.catalog().await.len(), 4);
}

#[tokio::test]
async fn test_staged_item_visible_while_create_in_flight() {
    let gate = Arc::new(Notify::new());
    let repository = Arc::new(ScriptedRepository {
        items: fallback_catalog(),
        create_gate: Some(gate.clone()),
        ..ScriptedRepository::default()
    });
    repository.script_create(Ok("srv-1".to_string())).await;
    let shop = Arc::new(loaded_shop(repository.clone()).await);

    let pending = tokio::spawn({
        let shop = shop.clone();
        async move { shop.add_item(new_item()).await }
    });
    repository.create_started.notified().await;

    let catalog = shop.catalog().await;
    assert_eq!(catalog.len(), 5);
    assert!(is_temporary_id(&catalog[4].id));

    gate.notify_one();
    let added = pending.await.unwrap().unwrap();

    assert_eq!(added.id, "srv-1");
    assert_eq!(shop.catalog().await.len(), 5);
}

#[tokio::test]
async fn test_removing_staged_item_deletes_orphan() {
    let gate = Arc::new(Notify::new());
    let repository = Arc::new(ScriptedRepository {
        items: fallback_catalog(),
        create_gate: Some(gate.clone()),
        ..ScriptedRepository::default()
    });
    repository.script_create(Ok("srv-orphan".to_string())).await;
    let shop = Arc::new(loaded_shop(repository.clone()).await);

    let pending = tokio::spawn({
        let shop = shop.clone();
        async move { shop.add_item(new_item()).await }
    });
    repository.create_started.notified().await;

    let staged_id = shop.catalog().await[4].id.clone();
    shop.remove_item(&staged_id).await.unwrap();
    assert_eq!(repository.delete_calls.load(Ordering::SeqCst), 0);

    gate.notify_one();
    let err = pending.await.unwrap().unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(*repository.deleted_ids.lock().await, vec!["srv-orphan".to_string()]);
    assert_eq!(shop.catalog().await, fallback_catalog());
}

#[tokio::test(start_paused = true)]
async fn test_failed_remove_restores_original_position() {
    let repository = Arc::new(ScriptedRepository::with_items(fallback_catalog()));
    for _ in 0..3 {
        repository.script_delete(Err(unavailable())).await;
    }
    let shop = loaded_shop(repository.clone()).await;

    let err = shop.remove_item("2").await.unwrap_err();

    assert!(err.is_retryable());
    assert_eq!(repository.delete_calls.load(Ordering::SeqCst), 3);
    assert_eq!(shop.catalog().await, fallback_catalog());
}

#[tokio::test]
async fn test_remove_unknown_item_makes_no_remote_call() {
    let repository = Arc::new(ScriptedRepository::with_items(fallback_catalog()));
    let shop = loaded_shop(repository.clone()).await;

    assert!(shop.remove_item("does-not-exist").await.unwrap_err().is_not_found());
    assert_eq!(repository.delete_calls.load(Ordering::SeqCst), 0);
}
