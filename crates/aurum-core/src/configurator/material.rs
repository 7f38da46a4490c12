//! Material tables: display color and price modifier per metal and gem.

use crate::catalog::{Gem, Metal, Price};

impl Metal {
    /// Hex color of the metal in the 3D viewer.
    pub fn color(self) -> &'static str {
        match self {
            Metal::Gold => "#FFD700",
            Metal::RoseGold => "#B76E79",
            Metal::Platinum => "#E5E4E2",
        }
    }

    /// Amount added to a piece's price when cast in this metal.
    pub fn price_modifier(self) -> Price {
        match self {
            Metal::Gold => 0,
            Metal::RoseGold => 200,
            Metal::Platinum => 800,
        }
    }
}

impl Gem {
    /// Hex color of the stone in the 3D viewer.
    pub fn color(self) -> &'static str {
        match self {
            Gem::Diamond => "#FFFFFF",
            Gem::Ruby => "#9B111E",
            Gem::Sapphire => "#102E4A",
            Gem::Emerald => "#046307",
        }
    }

    /// Amount added to a piece's price when set with this stone. May be negative.
    pub fn price_modifier(self) -> Price {
        match self {
            Gem::Diamond => 0,
            Gem::Ruby => -500,
            Gem::Sapphire => -400,
            Gem::Emerald => 600,
        }
    }
}
