use super::pricing::configured_price;
use crate::catalog::{Gem, Item, Metal, Price};
use serde::Serialize;

/// Working copy of the active item's material selection.
///
/// Exists only while the configurator is open. Nothing is committed until
/// [`ConfigurationDraft::to_item`] is placed in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigurationDraft {
    base: Item,
    metal: Metal,
    gem: Gem,
}

impl ConfigurationDraft {
    /// Starts a draft from the item's own materials.
    pub fn new(base: Item) -> Self {
        let metal = base.metal;
        let gem = base.gem;
        Self { base, metal, gem }
    }

    pub fn base(&self) -> &Item {
        &self.base
    }

    pub fn metal(&self) -> Metal {
        self.metal
    }

    pub fn gem(&self) -> Gem {
        self.gem
    }

    pub fn select_metal(&mut self, metal: Metal) {
        self.metal = metal;
    }

    pub fn select_gem(&mut self, gem: Gem) {
        self.gem = gem;
    }

    /// Live price of the current selection, `None` if it overflows.
    pub fn price(&self) -> Option<Price> {
        configured_price(&self.base, self.metal, self.gem)
    }

    /// The configured piece, priced and colored for the current selection.
    pub fn to_item(&self) -> Option<Item> {
        Some(Item {
            price: self.price()?,
            metal: self.metal,
            metal_color: self.metal.color().to_string(),
            gem: self.gem,
            gem_color: self.gem.color().to_string(),
            ..self.base.clone()
        })
    }
}
