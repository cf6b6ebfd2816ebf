//! Drag interaction tests.
//!
//! Drives the editor the way a renderer would: geometry resolves the
//! drop target from reported rectangles, the editor applies the
//! resulting decision.

use deck_composer::cards::{Card, CardId, TypeCategory};
use deck_composer::deck::{DeckEditor, DragOutcome};
use deck_composer::drag::{resolve_drop_target, DropTarget, Rect};
use deck_composer::layout::{SlotId, SlotKind};

fn card(id: u32, name: &str, category: TypeCategory) -> Card {
    Card::new(CardId::new(id), name, category)
}

fn main_slot(ordinal: usize) -> SlotId {
    SlotId::new(SlotKind::Main, ordinal)
}

/// A full pointer gesture: down, a few moves, up over another slot.
#[test]
fn drag_between_main_slots() {
    let mut editor = DeckEditor::new();
    let from = editor
        .request_add(&card(1, "Wisp", TypeCategory::Support))
        .unwrap();

    assert!(editor.drag_started(from));
    editor.drag_moved(Some(DropTarget::Slot(main_slot(1))));
    editor.drag_moved(Some(DropTarget::Slot(main_slot(2))));
    editor.drag_moved(Some(DropTarget::Slot(main_slot(8))));

    assert_eq!(
        editor.drag_ended(),
        DragOutcome::Dropped {
            from,
            to: main_slot(8)
        }
    );
    assert!(editor.state().occupant(main_slot(8)).is_some());
}

/// Dropping on an occupied slot swaps; both cards remain placed.
#[test]
fn drag_onto_occupied_slot_swaps() {
    let mut editor = DeckEditor::new();
    let a = editor
        .request_add(&card(1, "First", TypeCategory::MainCreature))
        .unwrap();
    let b = editor
        .request_add(&card(2, "Second", TypeCategory::MainCreature))
        .unwrap();

    assert!(editor.drag_started(a));
    editor.drag_moved(Some(DropTarget::Slot(b)));
    assert_eq!(editor.drag_ended(), DragOutcome::Dropped { from: a, to: b });

    assert_eq!(
        editor.state().occupant(a).unwrap().card_id(),
        CardId::new(2)
    );
    assert_eq!(
        editor.state().occupant(b).unwrap().card_id(),
        CardId::new(1)
    );
}

/// Releasing over void cancels with no mutation, even after hovering
/// valid targets on the way.
#[test]
fn drag_released_over_void_cancels() {
    let mut editor = DeckEditor::new();
    let from = editor
        .request_add(&card(1, "Wisp", TypeCategory::Support))
        .unwrap();
    let before = editor.save();

    assert!(editor.drag_started(from));
    editor.drag_moved(Some(DropTarget::Slot(main_slot(4))));
    editor.drag_moved(None);
    assert_eq!(editor.drag_ended(), DragOutcome::Cancelled);
    assert_eq!(editor.save(), before);
}

/// The trash target removes the dragged card.
#[test]
fn drag_to_trash_removes_card() {
    let mut editor = DeckEditor::new();
    let keep = editor
        .request_add(&card(1, "Keeper", TypeCategory::MainCreature))
        .unwrap();
    let toss = editor
        .request_add(&card(2, "Tosser", TypeCategory::MainCreature))
        .unwrap();

    assert!(editor.drag_started(toss));
    editor.drag_moved(Some(DropTarget::Trash));
    assert_eq!(editor.drag_ended(), DragOutcome::Removed { from: toss });

    assert_eq!(editor.save(), vec![CardId::new(1)]);
    assert!(editor.state().occupant(keep).is_some());
}

/// A protector dragged into a rot slot is refused and the drag behaves
/// exactly like a cancellation.
#[test]
fn ineligible_drop_is_treated_as_cancelled() {
    let mut editor = DeckEditor::new();
    let from = editor
        .request_add(&card(1, "Aegis", TypeCategory::Protector))
        .unwrap();
    let before = editor.save();

    assert!(editor.drag_started(from));
    editor.drag_moved(Some(DropTarget::Slot(SlotId::new(SlotKind::Rot, 2))));
    assert_eq!(editor.drag_ended(), DragOutcome::Cancelled);
    assert_eq!(editor.save(), before);
    assert!(editor.state().occupant(from).is_some());
}

/// A card parked at a high main ordinal stays rendered after removals
/// shrink the occupant count below what that ordinal needs.
#[test]
fn parked_card_survives_grid_shrinkage() {
    let mut editor = DeckEditor::new();
    for i in 0..16 {
        editor
            .request_add(&card(i, &format!("Creature {i}"), TypeCategory::MainCreature))
            .unwrap();
    }

    // 16 occupants grew the grid to 18 slots; park one on the last row.
    assert!(editor.drag_started(main_slot(0)));
    editor.drag_moved(Some(DropTarget::Slot(main_slot(17))));
    assert_eq!(
        editor.drag_ended(),
        DragOutcome::Dropped {
            from: main_slot(0),
            to: main_slot(17)
        }
    );

    editor.request_remove(main_slot(1));
    editor.request_remove(main_slot(2));

    // Count alone would size the grid at 15 slots; the parked card at
    // ordinal 17 must still be rendered, never silently dropped.
    let view = editor.layout_view();
    let parked = view
        .iter()
        .find(|(slot, _)| *slot == main_slot(17))
        .map(|(_, v)| *v);
    assert!(matches!(parked, Some(deck_composer::deck::SlotView::Card { .. })));

    let main_slots = view
        .iter()
        .filter(|(slot, _)| slot.kind == SlotKind::Main)
        .count();
    assert_eq!(main_slots, 18);
    assert_eq!(editor.save().len(), 14);
}

/// Geometry feeds the controller: the slot with the greatest overlap
/// under the dragged card's bounding box becomes the target.
#[test]
fn geometry_resolved_target_drives_the_drop() {
    let mut editor = DeckEditor::new();
    let from = editor
        .request_add(&card(1, "Wisp", TypeCategory::Support))
        .unwrap();

    // Two adjacent 100x140 slot regions; the dragged card sits mostly
    // over the second one.
    let regions = vec![
        (
            DropTarget::Slot(main_slot(1)),
            Rect::new(0.0, 0.0, 100.0, 140.0),
        ),
        (
            DropTarget::Slot(main_slot(2)),
            Rect::new(100.0, 0.0, 100.0, 140.0),
        ),
    ];
    let dragged = Rect::new(60.0, 10.0, 100.0, 140.0);
    let target = resolve_drop_target(dragged, &regions);
    assert_eq!(target, Some(DropTarget::Slot(main_slot(2))));

    assert!(editor.drag_started(from));
    editor.drag_moved(target);
    assert_eq!(
        editor.drag_ended(),
        DragOutcome::Dropped {
            from,
            to: main_slot(2)
        }
    );
}
