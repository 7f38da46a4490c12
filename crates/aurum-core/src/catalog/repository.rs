//! Catalog repository trait.
//!
//! Defines the interface of the remote document collection holding the catalog.

use super::model::{Item, NewItem};
use crate::error::Result;

/// An abstract gateway to the document collection that stores catalog items.
///
/// This trait decouples the shop logic from the concrete document store
/// (e.g., Firestore over REST, an in-memory store for tests).
///
/// # Implementation Notes
///
/// Implementations must not swallow failures. An empty collection is
/// `Ok(vec![])`; a failed request is `Err(_)`. Callers decide which fallback
/// applies to each case.
#[async_trait::async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Lists every item in the collection, in store order.
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<Item>)`: All stored items (possibly empty)
    /// - `Err(AurumError)`: The store could not be queried
    async fn list_all(&self) -> Result<Vec<Item>>;

    /// Creates a document for `item`.
    ///
    /// # Returns
    ///
    /// - `Ok(String)`: The identifier assigned by the store
    /// - `Err(AurumError)`: The document was not created
    async fn create(&self, item: &NewItem) -> Result<String>;

    /// Deletes the document with the given identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: Document deleted (or already absent)
    /// - `Err(AurumError)`: The delete request failed
    async fn delete(&self, id: &str) -> Result<()>;
}
