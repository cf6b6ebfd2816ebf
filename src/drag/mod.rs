//! Drag-and-drop: the interaction state machine and drop-target
//! geometry.
//!
//! The pointer plumbing stays in the host UI. It forwards three events
//! (`start`, `update_target`, `release`); the controller tracks the
//! session and produces a placement decision the editor applies. That
//! keeps the whole state machine testable without simulating pointer
//! hardware.
//!
//! `geometry` resolves which drop target the dragged element is over,
//! by greatest rectangle-intersection area rather than nearest center,
//! so tightly packed slots do not flicker.

pub mod controller;
pub mod geometry;

pub use controller::{DragController, DragPhase, DragResolution, DragSession, DropTarget};
pub use geometry::{overlap_area, resolve_drop_target, Rect};
