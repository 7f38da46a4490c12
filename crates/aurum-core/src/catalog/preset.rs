//! Static fallback catalog.
//!
//! Shown when the document store is unavailable or holds no items.

use super::model::{Category, Gem, Item, Metal, NewItem};

/// Returns the built-in catalog, in display order.
pub fn fallback_catalog() -> Vec<Item> {
    vec![
        NewItem::new("The Ethereal Halo", 12500, Category::Ring, Metal::Gold, Gem::Diamond)
            .with_description(
                "A solitaire diamond ring surrounded by a halo of smaller stones, set in 18k Gold.",
            )
            .into_item("1"),
        NewItem::new(
            "Midnight Sapphire",
            8900,
            Category::Ring,
            Metal::Platinum,
            Gem::Sapphire,
        )
        .with_description(
            "Deep blue sapphire set in cool platinum, evoking the mystery of the night sky.",
        )
        .into_item("2"),
        NewItem::new("Crimson Passion", 15200, Category::Ring, Metal::RoseGold, Gem::Ruby)
            .with_description("A rare pigeon-blood ruby centerpiece set in romantic Rose Gold.")
            .into_item("3"),
        NewItem::new("Emerald Empress", 18000, Category::Ring, Metal::Gold, Gem::Emerald)
            .with_description(
                "A lush green emerald cut in a classic rectangle, radiating regal power.",
            )
            .into_item("4"),
    ]
}
