//! Card catalog for lookup by id.
//!
//! The `CardCatalog` stores every known card and provides fast lookup
//! by `CardId`. It is loaded once (outside this crate) and consumed
//! read-only by hydration and the editor.
//!
//! ## CatalogProfile
//!
//! Older datasets lack energy or stat data entirely. Instead of hidden
//! cached flags, `CatalogProfile::of` computes the answer once at load
//! time; callers thread the profile through as an explicit parameter.

use rustc_hash::FxHashMap;

use super::card::{Card, CardId, TypeCategory};

/// Catalog of all known cards.
///
/// ## Example
///
/// ```
/// use deck_composer::cards::{Card, CardCatalog, CardId, TypeCategory};
///
/// let mut catalog = CardCatalog::new();
/// catalog.register(Card::new(CardId::new(1), "Thornback", TypeCategory::Protector));
///
/// let found = catalog.get(CardId::new(1)).unwrap();
/// assert_eq!(found.name, "Thornback");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<CardId, Card>,
    next_id: u32,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card.
    ///
    /// Panics if a card with the same ID already exists.
    pub fn register(&mut self, card: Card) {
        if self.cards.contains_key(&card.id) {
            panic!("Card with ID {:?} already registered", card.id);
        }
        self.next_id = self.next_id.max(card.id.raw() + 1);
        self.cards.insert(card.id, card);
    }

    /// Register a card with an auto-assigned ID.
    ///
    /// Returns the assigned ID.
    pub fn register_auto(&mut self, name: impl Into<String>, category: TypeCategory) -> CardId {
        let id = CardId::new(self.next_id);
        self.next_id += 1;

        self.register(Card::new(id, name, category));
        id
    }

    /// Get a card by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all cards.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }

    /// Find cards by type category.
    pub fn find_by_category(&self, category: TypeCategory) -> impl Iterator<Item = &Card> {
        self.cards.values().filter(move |c| c.category == category)
    }

    /// Find cards matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &Card>
    where
        F: Fn(&Card) -> bool,
    {
        self.cards.values().filter(move |c| predicate(c))
    }
}

/// Dataset-level facts computed once at load time.
///
/// Replaces the old implicit "does this dataset carry energy/stat
/// data" side channel. Pass this by value wherever the answer matters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatalogProfile {
    /// At least one card carries an energy affinity.
    pub has_energy_data: bool,
    /// At least one card carries applicable power/rest stats.
    pub has_stat_data: bool,
}

impl CatalogProfile {
    /// Compute the profile for a loaded catalog.
    #[must_use]
    pub fn of(catalog: &CardCatalog) -> Self {
        Self {
            has_energy_data: catalog.iter().any(|c| c.energy.is_some()),
            has_stat_data: catalog.iter().any(|c| c.stats.power.is_applicable()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Energy;

    #[test]
    fn register_and_lookup() {
        let mut catalog = CardCatalog::new();
        let id = catalog.register_auto("Glowmoth", TypeCategory::Support);

        assert!(catalog.contains(id));
        assert_eq!(catalog.get(id).unwrap().name, "Glowmoth");
        assert_eq!(catalog.get(CardId::new(999)), None);
    }

    #[test]
    fn auto_ids_skip_registered_ones() {
        let mut catalog = CardCatalog::new();
        catalog.register(Card::new(CardId::new(5), "Fixed", TypeCategory::Bio));
        let id = catalog.register_auto("Next", TypeCategory::Bio);
        assert_eq!(id, CardId::new(6));
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn duplicate_registration_panics() {
        let mut catalog = CardCatalog::new();
        catalog.register(Card::new(CardId::new(1), "A", TypeCategory::Rot));
        catalog.register(Card::new(CardId::new(1), "B", TypeCategory::Rot));
    }

    #[test]
    fn profile_reflects_dataset() {
        let mut catalog = CardCatalog::new();
        catalog.register(Card::new(CardId::new(1), "Plain", TypeCategory::Rot));
        let profile = CatalogProfile::of(&catalog);
        assert!(!profile.has_energy_data);
        assert!(!profile.has_stat_data);

        catalog.register(
            Card::new(CardId::new(2), "Charged", TypeCategory::MainCreature)
                .with_energy(Energy::Blue)
                .with_power_rest(2, 2),
        );
        let profile = CatalogProfile::of(&catalog);
        assert!(profile.has_energy_data);
        assert!(profile.has_stat_data);
    }
}
