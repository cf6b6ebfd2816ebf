//! Per-category rules and deck-wide limits.
//!
//! Games tune these numbers; the engine only interprets them. The
//! standard rule set lives in `TypeRuleTable::standard()` and
//! `DeckLimits::standard()` so tests can build stricter or looser
//! variants without touching engine code.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, StatBlock, StatValue, TypeCategory};

/// How power/rest behave for a category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatPolicy {
    /// Power/rest do not exist for this category. Rendered as a dash.
    NotApplicable,
    /// Power/rest exist but are locked to exactly 0.
    LockedZero,
    /// Power/rest default to 0 when unset; any non-negative value is
    /// allowed.
    DefaultZero,
}

/// Behavioral rule for one type category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRule {
    /// Does this category carry an energy affinity?
    pub requires_energy: bool,

    /// Power/rest behavior.
    pub stat_policy: StatPolicy,

    /// Maximum copies of one card name in a deck.
    pub max_copies: usize,
}

impl TypeRule {
    /// Apply this rule's stat policy to an existing stat block.
    ///
    /// One-way transition: values the policy suppresses are discarded,
    /// never merged back.
    #[must_use]
    pub fn normalize_stats(&self, stats: StatBlock) -> StatBlock {
        match self.stat_policy {
            StatPolicy::NotApplicable => StatBlock::not_applicable(),
            StatPolicy::LockedZero => StatBlock::zeroed(),
            StatPolicy::DefaultZero => StatBlock {
                power: StatValue::Num(stats.power.as_num().unwrap_or(0)),
                rest: StatValue::Num(stats.rest.as_num().unwrap_or(0)),
            },
        }
    }
}

/// Category -> rule lookup with a fallback for unlisted categories.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TypeRuleTable {
    rules: FxHashMap<TypeCategory, TypeRule>,
    fallback: TypeRule,
}

impl TypeRuleTable {
    /// Build a table from explicit entries plus a fallback rule.
    #[must_use]
    pub fn new(rules: FxHashMap<TypeCategory, TypeRule>, fallback: TypeRule) -> Self {
        Self { rules, fallback }
    }

    /// The standard rule set.
    ///
    /// Protector/bio/rot/ixim suppress both energy and power/rest and
    /// are capped below generic creatures. Rava keeps its energy but
    /// locks power/rest to 0 - a distinct state from "not applicable".
    #[must_use]
    pub fn standard() -> Self {
        let suppressed = |max_copies| TypeRule {
            requires_energy: false,
            stat_policy: StatPolicy::NotApplicable,
            max_copies,
        };

        let mut rules = FxHashMap::default();
        rules.insert(TypeCategory::Protector, suppressed(2));
        rules.insert(TypeCategory::Bio, suppressed(1));
        rules.insert(TypeCategory::Rot, suppressed(2));
        rules.insert(TypeCategory::Ixim, suppressed(2));
        rules.insert(
            TypeCategory::Rava,
            TypeRule {
                requires_energy: true,
                stat_policy: StatPolicy::LockedZero,
                max_copies: 4,
            },
        );

        let fallback = TypeRule {
            requires_energy: true,
            stat_policy: StatPolicy::DefaultZero,
            max_copies: 4,
        };

        Self::new(rules, fallback)
    }

    /// Look up the rule for a category.
    #[must_use]
    pub fn rule(&self, category: TypeCategory) -> TypeRule {
        self.rules.get(&category).copied().unwrap_or(self.fallback)
    }

    /// Maximum copies of one card name for a category.
    #[must_use]
    pub fn max_copies(&self, category: TypeCategory) -> usize {
        self.rule(category).max_copies
    }

    /// Change a card's category while it is being authored.
    ///
    /// Energy and power/rest are reset per the *new* category's rule.
    /// This is a one-way transition: a value suppressed by the new
    /// category is gone even if the category is changed back later.
    pub fn change_category(&self, card: &mut Card, new_category: TypeCategory) {
        let rule = self.rule(new_category);
        card.category = new_category;
        card.stats = rule.normalize_stats(card.stats);
        if !rule.requires_energy {
            card.energy = None;
        }
    }
}

impl Default for TypeRuleTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Whole-deck ceilings, independent of per-type rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckLimits {
    /// Maximum occupied slots across all kinds.
    pub deck_ceiling: usize,

    /// Maximum cards in the main grid (drives the 8-row cap).
    pub main_ceiling: usize,
}

impl DeckLimits {
    /// The standard limits: 34 cards total, 24 in the main grid.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            deck_ceiling: 34,
            main_ceiling: 24,
        }
    }
}

impl Default for DeckLimits {
    fn default() -> Self {
        Self::standard()
    }
}
