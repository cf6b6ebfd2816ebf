//! Power/rest stat values.
//!
//! Stat fields have three meaningful shapes, and the distinction
//! matters for rendering and validation:
//!
//! - `NotApplicable`: the category has no concept of power/rest
//!   (protector, bio, rot, ixim). Rendered as a dash, not as 0.
//! - `Num(0)` forced: the zero-stat creature category locks both
//!   fields to exactly 0.
//! - `Num(n)`: any non-negative value for the remaining categories.

use serde::{Deserialize, Serialize};

/// A single stat field (power or rest).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatValue {
    /// The category suppresses this stat entirely. Distinct from 0.
    NotApplicable,
    /// A concrete non-negative value.
    Num(u32),
}

impl StatValue {
    /// Get the numeric value if applicable.
    #[must_use]
    pub fn as_num(self) -> Option<u32> {
        match self {
            StatValue::Num(v) => Some(v),
            StatValue::NotApplicable => None,
        }
    }

    /// Check whether the stat applies at all.
    #[must_use]
    pub fn is_applicable(self) -> bool {
        matches!(self, StatValue::Num(_))
    }
}

impl From<u32> for StatValue {
    fn from(v: u32) -> Self {
        StatValue::Num(v)
    }
}

impl Default for StatValue {
    fn default() -> Self {
        StatValue::Num(0)
    }
}

/// Power and rest together.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatBlock {
    pub power: StatValue,
    pub rest: StatValue,
}

impl StatBlock {
    /// Both stats suppressed.
    #[must_use]
    pub const fn not_applicable() -> Self {
        Self {
            power: StatValue::NotApplicable,
            rest: StatValue::NotApplicable,
        }
    }

    /// Both stats locked to 0.
    #[must_use]
    pub const fn zeroed() -> Self {
        Self {
            power: StatValue::Num(0),
            rest: StatValue::Num(0),
        }
    }

    /// Concrete values for both stats.
    #[must_use]
    pub const fn of(power: u32, rest: u32) -> Self {
        Self {
            power: StatValue::Num(power),
            rest: StatValue::Num(rest),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_applicable_is_not_zero() {
        assert_ne!(StatValue::NotApplicable, StatValue::Num(0));
        assert_eq!(StatValue::NotApplicable.as_num(), None);
        assert_eq!(StatValue::Num(0).as_num(), Some(0));
    }

    #[test]
    fn default_is_zero() {
        let block = StatBlock::default();
        assert_eq!(block.power, StatValue::Num(0));
        assert_eq!(block.rest, StatValue::Num(0));
    }
}
