//! Deck-building rules: per-type behavior and the validation gate.
//!
//! ## Key Types
//!
//! - `TypeRule` / `StatPolicy`: per-category behavior (energy
//!   applicability, power/rest policy, copy ceiling)
//! - `TypeRuleTable`: category -> rule lookup with a fallback default
//! - `DeckLimits`: whole-deck ceilings
//! - `ValidationGate`: pure `can_add` inspection, no side effects
//!
//! All of these are plain data built at startup and passed as
//! parameters. Nothing in this module reads global state.

pub mod type_rules;
pub mod validation;

pub use type_rules::{DeckLimits, StatPolicy, TypeRule, TypeRuleTable};
pub use validation::{AddError, DeckCensus, ValidationGate, Verdict};
