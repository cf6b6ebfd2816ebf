//! Slot identifiers.
//!
//! A slot is an addressable, single-occupant position tagged with a
//! kind. Slot position is a presentation concern: it is never
//! persisted, only the flattened card list is.

use serde::{Deserialize, Serialize};

use crate::cards::TypeCategory;

/// The category of a slot.
///
/// Declaration order doubles as the serialization order: occupied
/// slots are flattened kind-first, then by ordinal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SlotKind {
    Protector,
    Bio,
    Rot,
    Ixim,
    Main,
    Overflow,
}

impl SlotKind {
    /// The home slot kind for a card category.
    ///
    /// Every category that has no dedicated slots lives in the main
    /// grid, the zero-stat creature included. `Overflow` is never a
    /// home kind; cards land there only when their home is full.
    #[must_use]
    pub fn home_for(category: TypeCategory) -> SlotKind {
        match category {
            TypeCategory::Protector => SlotKind::Protector,
            TypeCategory::Bio => SlotKind::Bio,
            TypeCategory::Rot => SlotKind::Rot,
            TypeCategory::Ixim => SlotKind::Ixim,
            TypeCategory::MainCreature | TypeCategory::Rava | TypeCategory::Support => {
                SlotKind::Main
            }
        }
    }

    /// May a card of `category` legally occupy a slot of this kind?
    ///
    /// Strict home-kind match. Overflow admits nothing here: it is a
    /// hydration fallback, not a drop target.
    #[must_use]
    pub fn admits(self, category: TypeCategory) -> bool {
        Self::home_for(category) == self
    }
}

impl std::fmt::Display for SlotKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SlotKind::Protector => "protector",
            SlotKind::Bio => "bio",
            SlotKind::Rot => "rot",
            SlotKind::Ixim => "ixim",
            SlotKind::Main => "main",
            SlotKind::Overflow => "overflow",
        };
        write!(f, "{name}")
    }
}

/// Address of one slot: kind plus ordinal within the kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SlotId {
    pub kind: SlotKind,
    pub ordinal: usize,
}

impl SlotId {
    /// Create a slot ID.
    #[must_use]
    pub const fn new(kind: SlotKind, ordinal: usize) -> Self {
        Self { kind, ordinal }
    }
}

impl std::fmt::Display for SlotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}]", self.kind, self.ordinal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_kind_per_category() {
        assert_eq!(SlotKind::home_for(TypeCategory::Protector), SlotKind::Protector);
        assert_eq!(SlotKind::home_for(TypeCategory::Rava), SlotKind::Main);
        assert_eq!(SlotKind::home_for(TypeCategory::Support), SlotKind::Main);
    }

    #[test]
    fn overflow_admits_nothing() {
        for category in TypeCategory::ALL {
            assert!(!SlotKind::Overflow.admits(category));
        }
    }

    #[test]
    fn ordering_is_kind_then_ordinal() {
        let a = SlotId::new(SlotKind::Protector, 1);
        let b = SlotId::new(SlotKind::Bio, 0);
        let c = SlotId::new(SlotKind::Main, 0);
        assert!(a < b && b < c);
        assert!(SlotId::new(SlotKind::Main, 2) < SlotId::new(SlotKind::Main, 3));
    }
}
