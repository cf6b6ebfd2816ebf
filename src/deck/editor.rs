//! Editor glue: the event surface the host UI talks to.
//!
//! The renderer forwards five event categories - `request_add`,
//! `request_remove`, and the three drag events - and reads back a
//! fresh `layout_view` projection after every mutation. Everything
//! else (pointer plumbing, persistence, rendering) stays outside.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardCatalog, CardId};
use crate::drag::{DragController, DragResolution, DropTarget};
use crate::layout::{SlotId, SlotLayout};
use crate::rules::{AddError, ValidationGate, Verdict};

use super::state::{DeckCompositionState, InstanceId, Occupant};

/// Read-only projection of one slot, for rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotView {
    /// Empty placeholder - still a visible drop target.
    Empty,
    /// An occupied slot. The renderer resolves `card` to art/text via
    /// the catalog.
    Card { instance: InstanceId, card: CardId },
    /// A hydration placeholder for an unresolvable identifier.
    Missing { card: CardId },
}

/// What a finished drag did to the deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragOutcome {
    /// Occupant relocated or swapped.
    Dropped { from: SlotId, to: SlotId },
    /// Occupant dropped on the trash and removed.
    Removed { from: SlotId },
    /// Nothing changed: released over void, over the source, or the
    /// move was refused as ineligible.
    Cancelled,
}

/// One editing session over one deck.
///
/// ## Example
///
/// ```
/// use deck_composer::cards::{Card, CardId, TypeCategory};
/// use deck_composer::deck::DeckEditor;
///
/// let mut editor = DeckEditor::new();
/// let card = Card::new(CardId::new(1), "Aegis", TypeCategory::Protector);
/// let slot = editor.request_add(&card).unwrap();
/// assert_eq!(slot.ordinal, 0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct DeckEditor {
    state: DeckCompositionState,
    drag: DragController,
    gate: ValidationGate,
    layout: SlotLayout,
}

impl DeckEditor {
    /// Editor over an empty deck with the standard rules and skeleton.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Editor with explicit configuration.
    #[must_use]
    pub fn with_config(gate: ValidationGate, layout: SlotLayout) -> Self {
        Self {
            state: DeckCompositionState::new(),
            drag: DragController::new(),
            gate,
            layout,
        }
    }

    /// Editor over a persisted deck, hydrated through the catalog.
    #[must_use]
    pub fn open(ids: &[CardId], catalog: &CardCatalog) -> Self {
        let mut editor = Self::new();
        editor.state = DeckCompositionState::hydrate(ids, catalog, &editor.layout);
        editor
    }

    /// The underlying composition state, read-only.
    #[must_use]
    pub fn state(&self) -> &DeckCompositionState {
        &self.state
    }

    /// Pre-flight check so the UI can disable the add affordance.
    #[must_use]
    pub fn can_add(&self, card: &Card) -> Verdict {
        self.gate.can_add(card, &self.state)
    }

    /// Click-to-add.
    pub fn request_add(&mut self, card: &Card) -> Result<SlotId, AddError> {
        self.state.add_card(card, &self.gate, &self.layout)
    }

    /// Click-to-remove.
    pub fn request_remove(&mut self, slot: SlotId) -> Option<Occupant> {
        self.state.remove_card(slot)
    }

    /// Pointer-down over a slot. Returns whether a drag began (it does
    /// not over an empty slot).
    pub fn drag_started(&mut self, slot: SlotId) -> bool {
        match self.state.occupant(slot) {
            Some(occupant) => {
                self.drag.start(slot, occupant.clone());
                true
            }
            None => false,
        }
    }

    /// Pointer moved; `target` is the slot/trash under it, or `None`
    /// over void.
    pub fn drag_moved(&mut self, target: Option<DropTarget>) {
        self.drag.update_target(target);
    }

    /// Pointer-up. Applies the controller's decision to the state; a
    /// refused move comes back as `Cancelled` with no mutation.
    pub fn drag_ended(&mut self) -> DragOutcome {
        match self.drag.release() {
            DragResolution::Move { from, to } => {
                match self.state.move_card(from, to, &self.layout) {
                    Ok(()) => DragOutcome::Dropped { from, to },
                    Err(err) => {
                        debug!("move {from} -> {to} refused ({err}); drag cancelled");
                        DragOutcome::Cancelled
                    }
                }
            }
            DragResolution::Trash { from } => match self.state.remove_card(from) {
                Some(_) => DragOutcome::Removed { from },
                None => DragOutcome::Cancelled,
            },
            DragResolution::Cancel => DragOutcome::Cancelled,
        }
    }

    /// Serialize for persistence: the flat ordered identifier list.
    #[must_use]
    pub fn save(&self) -> Vec<CardId> {
        self.state.to_identifier_list()
    }

    /// The full layout projection, empty placeholders included, in
    /// render order. Recompute after every mutation.
    #[must_use]
    pub fn layout_view(&self) -> Vec<(SlotId, SlotView)> {
        let mut view = Vec::new();

        let fixed = self
            .layout
            .protector_slots()
            .into_iter()
            .chain(self.layout.bio_slots())
            .chain(self.layout.rot_slots())
            .chain(self.layout.ixim_slots())
            .chain(self.layout.main_slots(self.state.main_extent()));
        for slot in fixed {
            view.push((slot, self.view_of(slot)));
        }

        // Overflow slots exist only where hydration or forced routing
        // created them; gaps from removals are not re-rendered.
        for (slot, occupant) in self.state.iter() {
            if slot.kind == crate::layout::SlotKind::Overflow {
                view.push((*slot, Self::occupied_view(occupant)));
            }
        }

        view
    }

    fn view_of(&self, slot: SlotId) -> SlotView {
        match self.state.occupant(slot) {
            Some(occupant) => Self::occupied_view(occupant),
            None => SlotView::Empty,
        }
    }

    fn occupied_view(occupant: &Occupant) -> SlotView {
        match occupant {
            Occupant::Card(placed) => SlotView::Card {
                instance: placed.instance,
                card: placed.card,
            },
            Occupant::Missing { card } => SlotView::Missing { card: *card },
        }
    }
}
