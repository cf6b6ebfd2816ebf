//! Card definitions - static card data.
//!
//! `Card` holds the immutable properties of a logical card as loaded
//! from the catalog. Placement state (which slot a copy occupies) is
//! tracked separately by `DeckCompositionState`; nothing here changes
//! during an editing session.

use serde::{Deserialize, Serialize};

use super::stats::StatBlock;

/// Unique identifier for a logical card.
///
/// Identifies the printed card (e.g., one entry in the catalog), not a
/// specific copy placed in a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Card type category.
///
/// One closed set, matched exhaustively everywhere. The category drives
/// both layout placement (which slot kind a card belongs to) and stat
/// applicability (see `TypeRuleTable`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeCategory {
    /// Generic creature - lives in the main grid, has power/rest.
    MainCreature,
    /// Protector - two dedicated slots, no energy, no power/rest.
    Protector,
    /// Bio - one dedicated slot, no energy, no power/rest.
    Bio,
    /// Rot - five dedicated slots, no energy, no power/rest.
    Rot,
    /// Ixim - five dedicated slots, no energy, no power/rest.
    Ixim,
    /// Zero-stat creature - main grid, power/rest locked to 0.
    Rava,
    /// Support card - main grid.
    Support,
}

impl TypeCategory {
    /// All categories, in a stable order.
    pub const ALL: [TypeCategory; 7] = [
        TypeCategory::MainCreature,
        TypeCategory::Protector,
        TypeCategory::Bio,
        TypeCategory::Rot,
        TypeCategory::Ixim,
        TypeCategory::Rava,
        TypeCategory::Support,
    ];
}

impl std::fmt::Display for TypeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TypeCategory::MainCreature => "main-creature",
            TypeCategory::Protector => "protector",
            TypeCategory::Bio => "bio",
            TypeCategory::Rot => "rot",
            TypeCategory::Ixim => "ixim",
            TypeCategory::Rava => "rava",
            TypeCategory::Support => "support",
        };
        write!(f, "{name}")
    }
}

/// Energy affinity of a card.
///
/// Absent entirely (`Option::None` on `Card`) for categories whose type
/// rule suppresses energy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Energy {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Colorless,
}

/// Card rarity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Legendary,
    Promo,
}

/// Static card data.
///
/// ## Example
///
/// ```
/// use deck_composer::cards::{Card, CardId, Energy, TypeCategory};
///
/// let card = Card::new(CardId::new(7), "Emberfang", TypeCategory::MainCreature)
///     .with_energy(Energy::Red)
///     .with_power_rest(3, 2);
///
/// assert_eq!(card.stats.power.as_num(), Some(3));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier for this card.
    pub id: CardId,

    /// Card name. Copy limits count by name, not by id.
    pub name: String,

    /// Type category.
    pub category: TypeCategory,

    /// Energy affinity. `None` for categories without energy.
    pub energy: Option<Energy>,

    /// Rarity.
    pub rarity: Rarity,

    /// Set membership code.
    pub set_code: String,

    /// Power/rest values, if meaningful for this category.
    pub stats: StatBlock,

    /// Image reference (resolved by the host UI, opaque here).
    pub image: Option<String>,
}

impl Card {
    /// Create a new card with defaults (common rarity, no energy,
    /// stats per the category handled by the caller or the catalog).
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, category: TypeCategory) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            energy: None,
            rarity: Rarity::Common,
            set_code: String::new(),
            stats: StatBlock::not_applicable(),
            image: None,
        }
    }

    /// Set the energy affinity (builder pattern).
    #[must_use]
    pub fn with_energy(mut self, energy: Energy) -> Self {
        self.energy = Some(energy);
        self
    }

    /// Set the rarity.
    #[must_use]
    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = rarity;
        self
    }

    /// Set the set membership code.
    #[must_use]
    pub fn with_set(mut self, set_code: impl Into<String>) -> Self {
        self.set_code = set_code.into();
        self
    }

    /// Set numeric power/rest values.
    #[must_use]
    pub fn with_power_rest(mut self, power: u32, rest: u32) -> Self {
        self.stats = StatBlock::of(power, rest);
        self
    }

    /// Set the image reference.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}
