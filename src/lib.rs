//! # deck-composer
//!
//! The deck composition engine for a trading-card-game companion app.
//!
//! ## Design Principles
//!
//! 1. **Pure In-Process**: No I/O, no wire protocol. The host app owns
//!    persistence and rendering; this crate owns slot/card semantics.
//!
//! 2. **Closed Type Set**: Every card type category is a variant of one
//!    exhaustively-matched enum. No category can fall through a default
//!    branch unnoticed.
//!
//! 3. **Configuration Over Convention**: Copy limits, deck ceilings and
//!    stat policies are plain data (`TypeRuleTable`, `DeckLimits`)
//!    constructed at startup and threaded as parameters.
//!
//! 4. **Recoverable Errors As Values**: Validation refusals and
//!    ineligible placements come back as `Result`/enum values, never as
//!    panics across the public API.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Slot bindings live in `im` maps so
//!   snapshots are O(1) and every mutation is auditable and replayable.
//!
//! - **Drag As A Pure State Machine**: The pointer plumbing stays in
//!   the host UI. It forwards `start`/`update_target`/`release` events;
//!   the controller produces a placement decision, the editor applies it.
//!
//! ## Modules
//!
//! - `cards`: Card model, stat block, catalog lookup
//! - `rules`: Type rule table, deck limits, validation gate
//! - `layout`: Slot identifiers and the deck skeleton
//! - `deck`: Composition state (the system of record) and editor glue
//! - `drag`: Drag session state machine and drop-target geometry

pub mod cards;
pub mod rules;
pub mod layout;
pub mod deck;
pub mod drag;

// Re-export commonly used types
pub use crate::cards::{
    Card, CardCatalog, CardId, CatalogProfile, Energy, Rarity, StatBlock, StatValue, TypeCategory,
};

pub use crate::rules::{
    AddError, DeckLimits, StatPolicy, TypeRule, TypeRuleTable, ValidationGate, Verdict,
};

pub use crate::layout::{SlotId, SlotKind, SlotLayout};

pub use crate::deck::{
    DeckCompositionState, DeckEditor, DragOutcome, InstanceId, MoveError, Occupant, PlacedCard,
    SlotView,
};

pub use crate::drag::{
    resolve_drop_target, DragController, DragPhase, DragResolution, DragSession, DropTarget, Rect,
};
