//! Slot enumeration for the deck skeleton.
//!
//! Fixed kinds always enumerate their full slot count - empty slots
//! render as placeholders so the user always has visible drop targets.
//! The main grid grows in rows of 3 with the occupancy and the
//! overflow bucket grows one slot per stranded card.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::slot::{SlotId, SlotKind};
use crate::rules::DeckLimits;

/// Fixed slot identifiers fit on the stack.
pub type FixedSlots = SmallVec<[SlotId; 8]>;

/// Deterministic slot enumeration.
///
/// ## Example
///
/// ```
/// use deck_composer::layout::SlotLayout;
///
/// let layout = SlotLayout::standard();
/// assert_eq!(layout.protector_slots().len(), 2);
/// assert_eq!(layout.main_slots(0).len(), 15); // 5 rows of 3
/// assert_eq!(layout.main_slots(16).len(), 18); // grew to 6 rows
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotLayout {
    protector_count: usize,
    bio_count: usize,
    rot_count: usize,
    ixim_count: usize,
    main_columns: usize,
    main_min_rows: usize,
    main_ceiling: usize,
}

impl SlotLayout {
    /// The standard skeleton: 2 protector, 1 bio, 5 rot, 5 ixim, main
    /// grid of 3 columns with at least 5 rows, capped by the standard
    /// main-deck ceiling (24 cards, 8 rows).
    #[must_use]
    pub fn standard() -> Self {
        Self::for_limits(DeckLimits::standard())
    }

    /// Skeleton with the main-grid cap derived from explicit limits.
    #[must_use]
    pub fn for_limits(limits: DeckLimits) -> Self {
        Self {
            protector_count: 2,
            bio_count: 1,
            rot_count: 5,
            ixim_count: 5,
            main_columns: 3,
            main_min_rows: 5,
            main_ceiling: limits.main_ceiling,
        }
    }

    fn fixed(kind: SlotKind, count: usize) -> FixedSlots {
        (0..count).map(|i| SlotId::new(kind, i)).collect()
    }

    /// The two protector slots.
    #[must_use]
    pub fn protector_slots(&self) -> FixedSlots {
        Self::fixed(SlotKind::Protector, self.protector_count)
    }

    /// The bio slot.
    #[must_use]
    pub fn bio_slots(&self) -> FixedSlots {
        Self::fixed(SlotKind::Bio, self.bio_count)
    }

    /// The five rot slots.
    #[must_use]
    pub fn rot_slots(&self) -> FixedSlots {
        Self::fixed(SlotKind::Rot, self.rot_count)
    }

    /// The five ixim slots.
    #[must_use]
    pub fn ixim_slots(&self) -> FixedSlots {
        Self::fixed(SlotKind::Ixim, self.ixim_count)
    }

    /// Rows the main grid needs for `current_main_count` occupants.
    ///
    /// `max(min_rows, ceil(n / columns))`, clamped to the row count
    /// that holds the main ceiling. Over-provisions one row of empty
    /// drop targets past the last full row; never shrinks below the
    /// minimum, never grows past the cap.
    #[must_use]
    pub fn main_rows(&self, current_main_count: usize) -> usize {
        let needed = current_main_count.div_ceil(self.main_columns);
        let max_rows = self.main_ceiling.div_ceil(self.main_columns);
        needed.max(self.main_min_rows).min(max_rows)
    }

    /// Main-grid slot identifiers for the current occupancy.
    #[must_use]
    pub fn main_slots(&self, current_main_count: usize) -> Vec<SlotId> {
        let total = self.main_rows(current_main_count) * self.main_columns;
        (0..total).map(|i| SlotId::new(SlotKind::Main, i)).collect()
    }

    /// One overflow slot per stranded card, unbounded.
    ///
    /// Defensive rendering: a card that does not fit a typed slot is
    /// still shown, never silently dropped. This is not a validation
    /// bypass.
    #[must_use]
    pub fn overflow_slots(&self, count: usize) -> Vec<SlotId> {
        (0..count).map(|i| SlotId::new(SlotKind::Overflow, i)).collect()
    }

    /// Slot capacity of a kind for the current occupancy. `None` means
    /// unbounded (overflow).
    #[must_use]
    pub fn capacity(&self, kind: SlotKind, current_main_count: usize) -> Option<usize> {
        match kind {
            SlotKind::Protector => Some(self.protector_count),
            SlotKind::Bio => Some(self.bio_count),
            SlotKind::Rot => Some(self.rot_count),
            SlotKind::Ixim => Some(self.ixim_count),
            SlotKind::Main => Some(self.main_slots(current_main_count).len()),
            SlotKind::Overflow => None,
        }
    }

    /// Hard ceiling of a kind, ignoring current occupancy. `None` for
    /// overflow.
    #[must_use]
    pub fn max_capacity(&self, kind: SlotKind) -> Option<usize> {
        match kind {
            SlotKind::Main => Some(self.main_ceiling),
            SlotKind::Overflow => None,
            _ => self.capacity(kind, 0),
        }
    }
}

impl Default for SlotLayout {
    fn default() -> Self {
        Self::standard()
    }
}
