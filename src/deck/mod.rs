//! Deck composition: the mutable system of record and the editor glue.
//!
//! ## Key Types
//!
//! - `InstanceId`: one placed copy of a card
//! - `Occupant`: what a bound slot holds (a card, or a hydration
//!   placeholder for an identifier the catalog no longer resolves)
//! - `DeckCompositionState`: slot <-> occupant bindings plus the
//!   add/remove/move operations and hydrate/serialize lifecycle
//! - `DeckEditor`: the event surface the host UI talks to
//!   (`request_add`, `request_remove`, the three drag events, and the
//!   read-only layout projection)

pub mod editor;
pub mod state;

pub use editor::{DeckEditor, DragOutcome, SlotView};
pub use state::{DeckCompositionState, InstanceId, MoveError, Occupant, PlacedCard};
