//! Live price of a configured piece.

use crate::catalog::{Gem, Item, Metal, Price};

/// Price of `item` re-made in `metal` with `gem`.
///
/// The catalog price already includes the modifiers of the item's own
/// materials, so those are taken out before the selected ones are added.
/// Returns `None` when the result does not fit in a [`Price`].
pub fn configured_price(item: &Item, metal: Metal, gem: Gem) -> Option<Price> {
    // Modifiers are small, so only the final add can overflow.
    let delta = metal.price_modifier() - item.metal.price_modifier() + gem.price_modifier()
        - item.gem.price_modifier();
    item.price.checked_add(delta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fallback_catalog;
    use strum::IntoEnumIterator;

    #[test]
    fn test_unmodified_selection_is_base_price() {
        for item in fallback_catalog() {
            assert_eq!(configured_price(&item, item.metal, item.gem), Some(item.price));
        }
    }

    #[test]
    fn test_metal_change_moves_price_by_modifier_difference() {
        for item in fallback_catalog() {
            for metal in Metal::iter() {
                let delta = configured_price(&item, metal, item.gem).unwrap() - item.price;
                assert_eq!(delta, metal.price_modifier() - item.metal.price_modifier());
            }
        }
    }

    #[test]
    fn test_gem_change_moves_price_by_modifier_difference() {
        for item in fallback_catalog() {
            for gem in Gem::iter() {
                let delta = configured_price(&item, item.metal, gem).unwrap() - item.price;
                assert_eq!(delta, gem.price_modifier() - item.gem.price_modifier());
            }
        }
    }

    #[test]
    fn test_known_configuration() {
        // Crimson Passion: 15200 in Rose Gold with a Ruby.
        let item = &fallback_catalog()[2];
        // Platinum (+800 vs +200) with an Emerald (+600 vs -500).
        assert_eq!(
            configured_price(item, Metal::Platinum, Gem::Emerald),
            Some(15200 + 600 + 1100)
        );
    }

    #[test]
    fn test_out_of_range_price_is_none() {
        let mut item = fallback_catalog()[0].clone();
        item.price = Price::MAX;
        item.metal = Metal::Gold;
        item.gem = Gem::Diamond;

        assert_eq!(configured_price(&item, Metal::Platinum, Gem::Diamond), None);
        assert_eq!(configured_price(&item, Metal::Gold, Gem::Diamond), Some(Price::MAX));

        item.price = Price::MIN;
        item.gem = Gem::Sapphire;
        assert_eq!(configured_price(&item, Metal::Gold, Gem::Ruby), None);

        // A result at the edge of the range is still exact.
        item.price = Price::MAX;
        item.gem = Gem::Ruby;
        assert_eq!(configured_price(&item, Metal::Gold, Gem::Ruby), Some(Price::MAX));
    }
}
