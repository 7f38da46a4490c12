//! Shopping bag model.

use crate::catalog::{Item, Price};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An item placed in the bag.
///
/// Each entry has its own identifier, so the same piece (or the same piece in
/// different configurations) can be bagged several times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartEntry {
    /// Process-local identifier of this entry (UUID format)
    pub cart_id: String,
    #[serde(flatten)]
    pub item: Item,
}

impl CartEntry {
    /// Wraps `item` in a new entry with a freshly generated identifier.
    pub fn new(item: Item) -> Self {
        Self {
            cart_id: Uuid::new_v4().to_string(),
            item,
        }
    }
}

/// The session's shopping bag. Entries keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `item` and returns the new entry. Never fails.
    pub fn add(&mut self, item: Item) -> &CartEntry {
        self.entries.push(CartEntry::new(item));
        &self.entries[self.entries.len() - 1]
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of the entry prices, `None` if it overflows.
    pub fn total(&self) -> Option<Price> {
        self.entries
            .iter()
            .try_fold(0, |total: Price, entry| total.checked_add(entry.item.price))
    }
}
