//! The validation gate: may this card be added at all?
//!
//! `can_add` is pure state inspection - no side effects - so the UI can
//! call it ahead of time to disable the "add" affordance. Which slot a
//! card lands in is not this module's concern; that is placement, and
//! it happens in `DeckCompositionState::add_card` after the gate
//! approves.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::Card;

use super::type_rules::{DeckLimits, TypeRuleTable};

/// Deck facts the gate inspects.
///
/// Implemented by `DeckCompositionState`; tests can implement it on a
/// plain struct to exercise the gate in isolation.
pub trait DeckCensus {
    /// Occupied slots across all kinds (empty placeholders excluded).
    fn occupied_total(&self) -> usize;

    /// Copies of a card name already in the deck, counted by logical
    /// name rather than by instance.
    fn count_by_name(&self, name: &str) -> usize;
}

/// Why an addition was refused.
///
/// Expected, user-facing conditions. These are returned, never thrown
/// across the API boundary.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum AddError {
    #[error("deck is full ({ceiling} cards)")]
    DeckFull { ceiling: usize },

    #[error("already holding {limit} copies of \"{name}\"")]
    CopyLimit { name: String, limit: usize },
}

/// Outcome of a `can_add` check.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Allow,
    Deny(AddError),
}

impl Verdict {
    /// Did the gate approve?
    #[must_use]
    pub fn allowed(&self) -> bool {
        matches!(self, Verdict::Allow)
    }

    /// Convert to a `Result` for `?` propagation.
    pub fn into_result(self) -> Result<(), AddError> {
        match self {
            Verdict::Allow => Ok(()),
            Verdict::Deny(err) => Err(err),
        }
    }
}

/// The gate itself: deck limits plus the per-type rule table.
#[derive(Clone, Debug, Default)]
pub struct ValidationGate {
    pub table: TypeRuleTable,
    pub limits: DeckLimits,
}

impl ValidationGate {
    /// Create a gate from explicit configuration.
    #[must_use]
    pub fn new(table: TypeRuleTable, limits: DeckLimits) -> Self {
        Self { table, limits }
    }

    /// May `card` be added to `deck`?
    ///
    /// Checks the total deck ceiling first, then the per-category copy
    /// limit for the card's name. Purely advisory: no side effects.
    #[must_use]
    pub fn can_add(&self, card: &Card, deck: &impl DeckCensus) -> Verdict {
        if deck.occupied_total() >= self.limits.deck_ceiling {
            return Verdict::Deny(AddError::DeckFull {
                ceiling: self.limits.deck_ceiling,
            });
        }

        let limit = self.table.max_copies(card.category);
        if deck.count_by_name(&card.name) >= limit {
            return Verdict::Deny(AddError::CopyLimit {
                name: card.name.clone(),
                limit,
            });
        }

        Verdict::Allow
    }
}
