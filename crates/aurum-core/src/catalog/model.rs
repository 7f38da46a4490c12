//! Catalog domain model.
//!
//! Represents the purchasable jewelry pieces and the material vocabulary
//! (category, metal, gem) they are described with.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Prices are whole currency units. All pricing arithmetic stays in integers.
pub type Price = i64;

/// Kind of jewelry piece.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter, AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Category {
    Ring,
    Necklace,
    Earring,
}

/// Precious metal a piece is cast in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter, AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Metal {
    Gold,
    #[serde(rename = "Rose Gold")]
    #[strum(to_string = "Rose Gold", serialize = "rose-gold", serialize = "RoseGold")]
    RoseGold,
    Platinum,
}

/// Center stone of a piece.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter, AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Gem {
    Diamond,
    Ruby,
    Sapphire,
    Emerald,
}

/// A purchasable jewelry piece.
///
/// `id` is unique within a catalog. Pieces added by the admin carry a
/// temporary identifier until the document store confirms them
/// (see [`is_temporary_id`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub name: String,
    pub price: Price,
    pub description: String,
    pub category: Category,
    pub metal: Metal,
    pub gem: Gem,
    /// Hex color used by the 3D viewer for the stone
    pub gem_color: String,
    /// Hex color used by the 3D viewer for the band
    pub metal_color: String,
    /// Optional URL of a .glb model
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_url: Option<String>,
}

/// An item as submitted by the admin, before the document store assigns an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    pub name: String,
    pub price: Price,
    pub description: String,
    pub category: Category,
    pub metal: Metal,
    pub gem: Gem,
    pub gem_color: String,
    pub metal_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_url: Option<String>,
}

/// Prefix of identifiers handed out to items that are not yet persisted.
pub const TEMPORARY_ID_PREFIX: &str = "local-";

/// Returns true when `id` was generated locally and never confirmed remotely.
pub fn is_temporary_id(id: &str) -> bool {
    id.starts_with(TEMPORARY_ID_PREFIX)
}

/// Generates a fresh temporary identifier.
pub fn temporary_id() -> String {
    format!("{}{}", TEMPORARY_ID_PREFIX, uuid::Uuid::new_v4())
}

impl NewItem {
    /// Creates a new item whose colors follow the material tables.
    pub fn new(
        name: impl Into<String>,
        price: Price,
        category: Category,
        metal: Metal,
        gem: Gem,
    ) -> Self {
        Self {
            name: name.into(),
            price,
            description: String::new(),
            category,
            metal,
            gem,
            gem_color: gem.color().to_string(),
            metal_color: metal.color().to_string(),
            model_url: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_model_url(mut self, model_url: impl Into<String>) -> Self {
        self.model_url = Some(model_url.into());
        self
    }

    /// Attaches an identifier, producing a catalog item.
    pub fn into_item(self, id: impl Into<String>) -> Item {
        Item {
            id: id.into(),
            name: self.name,
            price: self.price,
            description: self.description,
            category: self.category,
            metal: self.metal,
            gem: self.gem,
            gem_color: self.gem_color,
            metal_color: self.metal_color,
            model_url: self.model_url,
        }
    }
}

impl From<Item> for NewItem {
    fn from(item: Item) -> Self {
        Self {
            name: item.name,
            price: item.price,
            description: item.description,
            category: item.category,
            metal: item.metal,
            gem: item.gem,
            gem_color: item.gem_color,
            metal_color: item.metal_color,
            model_url: item.model_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_metal_display_and_parse() {
        assert_eq!(Metal::RoseGold.to_string(), "Rose Gold");
        assert_eq!(Metal::from_str("Rose Gold").unwrap(), Metal::RoseGold);
        assert_eq!(Metal::from_str("rose-gold").unwrap(), Metal::RoseGold);
        assert_eq!(Metal::from_str("platinum").unwrap(), Metal::Platinum);
        assert!(Metal::from_str("silver").is_err());
    }

    #[test]
    fn test_item_json_uses_storefront_field_names() {
        let item = NewItem::new("Halo", 100, Category::Ring, Metal::RoseGold, Gem::Ruby).into_item("7");
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["metal"], "Rose Gold");
        assert_eq!(json["gemColor"], "#9B111E");
        assert_eq!(json["metalColor"], "#B76E79");
        assert!(json.get("modelUrl").is_none());
    }

    #[test]
    fn test_temporary_ids_are_unique_and_recognised() {
        let a = temporary_id();
        let b = temporary_id();
        assert_ne!(a, b);
        assert!(is_temporary_id(&a));
        assert!(!is_temporary_id("1"));
    }
}
