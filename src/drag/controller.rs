//! The drag state machine.
//!
//! `Idle -> Dragging -> (Dropped | Cancelled) -> Idle`. The controller
//! never touches the composition state: `release` produces a
//! `DragResolution` and the editor applies it, mapping a refused move
//! back to a cancelled drag. Cancellation is therefore always
//! side-effect-free by construction.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::deck::Occupant;
use crate::layout::SlotId;

/// Something the dragged card can be released over.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DropTarget {
    /// A slot in the layout.
    Slot(SlotId),
    /// The trash affordance - dropping here removes the card.
    Trash,
}

/// The ephemeral record of an in-progress drag.
///
/// Created on pointer-down over an occupied slot, destroyed on
/// pointer-up. The occupant snapshot lets the UI render a floating
/// preview without consulting the composition state mid-drag.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DragSession {
    /// Slot the drag started from.
    pub source: SlotId,
    /// Snapshot of the occupant being dragged.
    pub occupant: Occupant,
    /// Target currently under the pointer. `None` = over void.
    pub hover: Option<DropTarget>,
}

/// Observable phase of the controller, for the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPhase {
    Idle,
    Dragging,
}

/// The decision produced by releasing a drag.
///
/// Pure data - the editor applies it to the composition state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragResolution {
    /// Attempt a relocation/swap from source to target slot.
    Move { from: SlotId, to: SlotId },
    /// Remove the source occupant.
    Trash { from: SlotId },
    /// No mutation: released over void, over the source itself, or
    /// the session was cancelled.
    Cancel,
}

/// Single-session drag state machine.
#[derive(Clone, Debug, Default)]
pub struct DragController {
    session: Option<DragSession>,
}

impl DragController {
    /// Create an idle controller.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> DragPhase {
        if self.session.is_some() {
            DragPhase::Dragging
        } else {
            DragPhase::Idle
        }
    }

    /// The live session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Begin a drag from `source`.
    ///
    /// Single-pointer input cannot start a second drag, but if a stray
    /// event tries, the live session is force-cancelled first rather
    /// than silently leaked.
    pub fn start(&mut self, source: SlotId, occupant: Occupant) {
        if let Some(stale) = self.session.take() {
            warn!("drag started while one was live; cancelling session from {}", stale.source);
        }
        debug!("drag start from {source}");
        self.session = Some(DragSession {
            source,
            occupant,
            hover: None,
        });
    }

    /// Update the target under the pointer. `None` = over void.
    ///
    /// Ignored while idle (hover events can trail a release).
    pub fn update_target(&mut self, target: Option<DropTarget>) {
        if let Some(session) = self.session.as_mut() {
            session.hover = target;
        }
    }

    /// Release the drag and produce the placement decision.
    ///
    /// Over another slot: `Move`. Over the trash: `Trash`. Over void
    /// or the source slot: `Cancel`. The controller returns to idle
    /// either way.
    pub fn release(&mut self) -> DragResolution {
        let Some(session) = self.session.take() else {
            return DragResolution::Cancel;
        };
        let resolution = match session.hover {
            Some(DropTarget::Slot(slot)) if slot != session.source => DragResolution::Move {
                from: session.source,
                to: slot,
            },
            Some(DropTarget::Trash) => DragResolution::Trash {
                from: session.source,
            },
            _ => DragResolution::Cancel,
        };
        debug!("drag from {} resolved: {resolution:?}", session.source);
        resolution
    }

    /// Abandon the live session without producing a decision.
    pub fn cancel(&mut self) {
        if let Some(session) = self.session.take() {
            debug!("drag from {} cancelled", session.source);
        }
    }
}
