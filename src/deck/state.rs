//! The deck composition state: slot <-> occupant bindings.
//!
//! This is the system of record the engine mutates. Bindings live in
//! `im` persistent maps, so cloning a state is O(1); tests snapshot
//! before a mutation and diff after, and a host app gets undo for free.
//!
//! ## Lifecycle
//!
//! 1. `hydrate` a persisted identifier list into slots (by card type,
//!    lowest open ordinal first, overflow for anything stranded).
//! 2. Mutate via `add_card` / `remove_card` / `move_card` during the
//!    editing session.
//! 3. `to_identifier_list` flattens occupied slots back into the
//!    ordered list the persistence layer stores. Slot positions are
//!    presentation state and are deliberately not persisted.

use im::{HashMap as ImHashMap, OrdMap};
use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::{Card, CardCatalog, CardId, TypeCategory};
use crate::layout::{SlotId, SlotKind, SlotLayout};
use crate::rules::{AddError, DeckCensus, ValidationGate};

/// Identifier for one placed copy of a card.
///
/// Allocated by the state itself and moved between slots, never
/// duplicated - which is what makes the "one card instance, one slot"
/// invariant hold by construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InstanceId(pub u32);

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Instance({})", self.0)
    }
}

/// A card copy bound to a slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedCard {
    pub instance: InstanceId,
    pub card: CardId,
    /// Copy limits count by name; keeping it here avoids a catalog
    /// lookup on every gate check.
    pub name: String,
    pub category: TypeCategory,
}

/// What a bound slot holds.
///
/// `Missing` is the hydration placeholder for an identifier the
/// catalog no longer resolves. It stays visible, counts against the
/// deck total, and round-trips through serialization - one bad
/// reference must not corrupt the rest of the deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Occupant {
    Card(PlacedCard),
    Missing { card: CardId },
}

impl Occupant {
    /// The persisted identifier, present for both variants.
    #[must_use]
    pub fn card_id(&self) -> CardId {
        match self {
            Occupant::Card(placed) => placed.card,
            Occupant::Missing { card } => *card,
        }
    }

    /// May this occupant legally sit in a slot of `kind`?
    ///
    /// A `Missing` placeholder has no known category, so it can be
    /// removed but never relocated.
    #[must_use]
    pub fn admitted_by(&self, kind: SlotKind) -> bool {
        match self {
            Occupant::Card(placed) => kind.admits(placed.category),
            Occupant::Missing { .. } => false,
        }
    }
}

/// Why a move/swap was refused.
///
/// An ineligible placement is expected during drag-and-drop; the
/// caller treats it as a cancelled drag. No partial mutation survives
/// a refused move.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum MoveError {
    #[error("source and target are the same slot")]
    SameSlot,

    #[error("source slot {0} is empty")]
    EmptySource(SlotId),

    #[error("target slot {0} is outside the current layout")]
    NoSuchSlot(SlotId),

    #[error("occupant of {from} may not occupy a {target_kind} slot")]
    IneligibleKind { from: SlotId, target_kind: SlotKind },
}

/// Slot <-> occupant bindings.
///
/// Only occupied slots are stored; an absent key is an empty
/// placeholder. `OrdMap` iteration order is `SlotId` order
/// (kind-then-ordinal), which is also the serialization order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DeckCompositionState {
    slots: OrdMap<SlotId, Occupant>,
    by_instance: ImHashMap<InstanceId, SlotId>,
    next_instance: u32,
}

impl DeckCompositionState {
    /// Create an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hydrate a persisted identifier list.
    ///
    /// Each identifier resolves through the catalog and is distributed
    /// to its home kind, lowest open ordinal first. An identifier the
    /// catalog cannot resolve becomes a `Missing` placeholder instead
    /// of aborting the load. No validation gate runs here: illegal
    /// persisted data stays visible (in overflow) for correction.
    #[must_use]
    pub fn hydrate(ids: &[CardId], catalog: &CardCatalog, layout: &SlotLayout) -> Self {
        let mut state = Self::new();
        for &id in ids {
            match catalog.get(id) {
                Some(card) => {
                    state.place_unvalidated(card, layout);
                }
                None => {
                    warn!("deck references unknown card {id}; rendering placeholder");
                    state.place_missing(id, layout);
                }
            }
        }
        state
    }

    /// Occupant of a slot, if any.
    #[must_use]
    pub fn occupant(&self, slot: SlotId) -> Option<&Occupant> {
        self.slots.get(&slot)
    }

    /// Slot currently holding an instance, if it is still placed.
    #[must_use]
    pub fn slot_of(&self, instance: InstanceId) -> Option<SlotId> {
        self.by_instance.get(&instance).copied()
    }

    /// Occupied slots in kind-then-ordinal order.
    pub fn iter(&self) -> impl Iterator<Item = (&SlotId, &Occupant)> {
        self.slots.iter()
    }

    /// Occupied slots of one kind.
    #[must_use]
    pub fn count_of_kind(&self, kind: SlotKind) -> usize {
        self.slots.keys().filter(|s| s.kind == kind).count()
    }

    /// Occupants currently in the main grid.
    #[must_use]
    pub fn main_count(&self) -> usize {
        self.count_of_kind(SlotKind::Main)
    }

    /// One past the highest occupied main ordinal, 0 for an empty grid.
    ///
    /// Moves can park an occupant at a high ordinal while removals
    /// shrink the occupant count; the grid must keep covering the
    /// stragglers, so grid sizing takes `max(main_count, main_span)`.
    #[must_use]
    pub fn main_span(&self) -> usize {
        self.slots
            .keys()
            .filter(|s| s.kind == SlotKind::Main)
            .map(|s| s.ordinal + 1)
            .max()
            .unwrap_or(0)
    }

    /// Main-grid occupancy figure for slot enumeration: whichever of
    /// count and span needs more rows.
    #[must_use]
    pub fn main_extent(&self) -> usize {
        self.main_count().max(self.main_span())
    }

    /// Add a card through the validation gate.
    ///
    /// On approval the card goes to the lowest-ordinal open slot of
    /// its home kind; the main grid grows a row when needed. A full
    /// home kind routes to overflow rather than failing - the illegal
    /// state stays visible for the user to correct.
    pub fn add_card(
        &mut self,
        card: &Card,
        gate: &ValidationGate,
        layout: &SlotLayout,
    ) -> Result<SlotId, AddError> {
        gate.can_add(card, self).into_result()?;
        Ok(self.place_unvalidated(card, layout))
    }

    /// Place a card without consulting the validation gate.
    ///
    /// Hydration and import paths use this so pre-existing illegal
    /// data still renders. Interactive additions go through
    /// `add_card`.
    pub fn place_unvalidated(&mut self, card: &Card, layout: &SlotLayout) -> SlotId {
        let instance = self.alloc_instance();
        let occupant = Occupant::Card(PlacedCard {
            instance,
            card: card.id,
            name: card.name.clone(),
            category: card.category,
        });
        let slot = self.open_slot_for(SlotKind::home_for(card.category), layout);
        self.bind(slot, occupant);
        slot
    }

    fn place_missing(&mut self, id: CardId, layout: &SlotLayout) -> SlotId {
        // No category to route by; the placeholder takes a main slot
        // so it stays in the bulk of the layout, or overflow past that.
        let slot = self.open_slot_for(SlotKind::Main, layout);
        self.bind(slot, Occupant::Missing { card: id });
        slot
    }

    /// Remove the occupant of a slot.
    ///
    /// Other slots are not compacted: the freed slot becomes an empty
    /// placeholder at its original position, keeping the layout stable
    /// across unrelated removals.
    pub fn remove_card(&mut self, slot: SlotId) -> Option<Occupant> {
        let occupant = self.slots.remove(&slot)?;
        if let Occupant::Card(placed) = &occupant {
            self.by_instance.remove(&placed.instance);
        }
        Some(occupant)
    }

    /// Relocate or swap between two slots.
    ///
    /// Empty target: simple relocation. Occupied target: atomic swap.
    /// Either every occupant that would land in a new slot is eligible
    /// for that slot's kind, or nothing mutates at all.
    pub fn move_card(
        &mut self,
        from: SlotId,
        to: SlotId,
        layout: &SlotLayout,
    ) -> Result<(), MoveError> {
        if from == to {
            return Err(MoveError::SameSlot);
        }
        let moving = self
            .slots
            .get(&from)
            .cloned()
            .ok_or(MoveError::EmptySource(from))?;

        if !self.slot_exists(to, layout) {
            return Err(MoveError::NoSuchSlot(to));
        }

        // Eligibility for everything that changes slots, checked
        // before the first mutation.
        if !moving.admitted_by(to.kind) {
            return Err(MoveError::IneligibleKind {
                from,
                target_kind: to.kind,
            });
        }
        let displaced = self.slots.get(&to).cloned();
        if let Some(displaced) = &displaced {
            if !displaced.admitted_by(from.kind) {
                return Err(MoveError::IneligibleKind {
                    from: to,
                    target_kind: from.kind,
                });
            }
        }

        self.unbind(from);
        if let Some(displaced) = displaced {
            self.unbind(to);
            self.bind(from, displaced);
        }
        self.bind(to, moving);
        Ok(())
    }

    /// Flatten occupied slots into the persisted identifier list.
    ///
    /// Kind-then-ordinal order, duplicates expanded, `Missing`
    /// placeholders keep their identifier so nothing is lost on save.
    #[must_use]
    pub fn to_identifier_list(&self) -> Vec<CardId> {
        self.slots.values().map(Occupant::card_id).collect()
    }

    fn alloc_instance(&mut self) -> InstanceId {
        let id = InstanceId(self.next_instance);
        self.next_instance += 1;
        id
    }

    /// Bind an occupant, maintaining the reverse index.
    fn bind(&mut self, slot: SlotId, occupant: Occupant) {
        debug_assert!(
            !self.slots.contains_key(&slot),
            "slot {slot} already occupied"
        );
        if let Occupant::Card(placed) = &occupant {
            debug_assert!(
                !self.by_instance.contains_key(&placed.instance),
                "instance {} already bound",
                placed.instance
            );
            self.by_instance.insert(placed.instance, slot);
        }
        self.slots.insert(slot, occupant);
    }

    /// Clear a binding, maintaining the reverse index.
    fn unbind(&mut self, slot: SlotId) {
        if let Some(Occupant::Card(placed)) = self.slots.remove(&slot) {
            self.by_instance.remove(&placed.instance);
        }
    }

    /// Lowest open ordinal of `kind`, falling back to overflow when
    /// the kind is exhausted.
    fn open_slot_for(&mut self, kind: SlotKind, layout: &SlotLayout) -> SlotId {
        // One more occupant than now, so a full main grid grows a row
        // before we scan for a gap.
        let capacity = layout.capacity(kind, self.main_count() + 1);
        if let Some(capacity) = capacity {
            for ordinal in 0..capacity {
                let slot = SlotId::new(kind, ordinal);
                if !self.slots.contains_key(&slot) {
                    return slot;
                }
            }
        }
        // Home kind full (or unbounded request): first free overflow
        // ordinal. Overflow never rejects.
        let mut ordinal = 0;
        loop {
            let slot = SlotId::new(SlotKind::Overflow, ordinal);
            if !self.slots.contains_key(&slot) {
                return slot;
            }
            ordinal += 1;
        }
    }

    /// Is `slot` part of the currently visible layout?
    fn slot_exists(&self, slot: SlotId, layout: &SlotLayout) -> bool {
        match layout.capacity(slot.kind, self.main_extent()) {
            Some(capacity) => slot.ordinal < capacity,
            // Overflow slots exist only where hydration created them.
            None => self.slots.contains_key(&slot),
        }
    }
}

impl DeckCensus for DeckCompositionState {
    fn occupied_total(&self) -> usize {
        self.slots.len()
    }

    fn count_by_name(&self, name: &str) -> usize {
        self.slots
            .values()
            .filter(|occ| matches!(occ, Occupant::Card(placed) if placed.name == name))
            .count()
    }
}
