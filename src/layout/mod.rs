//! The deck skeleton: slot identifiers and slot enumeration.
//!
//! ## Key Types
//!
//! - `SlotKind`: the six slot categories (protector, bio, rot, ixim,
//!   main, overflow)
//! - `SlotId`: kind + ordinal, the address of one single-occupant slot
//! - `SlotLayout`: deterministically enumerates the slot set for a
//!   given occupancy count (fixed kinds, growable main grid, unbounded
//!   overflow)

pub mod grid;
pub mod slot;

pub use grid::SlotLayout;
pub use slot::{SlotId, SlotKind};
