//! Deck composition scenarios.
//!
//! End-to-end placement behavior through the public API: fill order,
//! copy limits, overflow routing, and main-grid growth.

use deck_composer::cards::{Card, CardCatalog, CardId, TypeCategory};
use deck_composer::deck::{DeckCompositionState, DeckEditor};
use deck_composer::layout::{SlotId, SlotKind, SlotLayout};
use deck_composer::rules::{AddError, DeckCensus, ValidationGate};

fn card(id: u32, name: &str, category: TypeCategory) -> Card {
    Card::new(CardId::new(id), name, category)
}

/// Protectors fill ordinal 0, then 1; a third copy of the same name is
/// refused by the gate; force-placed anyway it lands in overflow and
/// never vanishes.
#[test]
fn protector_fill_order_and_copy_limit() {
    let layout = SlotLayout::standard();
    let gate = ValidationGate::default();
    let mut state = DeckCompositionState::new();

    let aegis = card(1, "Aegis", TypeCategory::Protector);
    let first = state.add_card(&aegis, &gate, &layout).unwrap();
    let second = state.add_card(&aegis, &gate, &layout).unwrap();
    assert_eq!(first, SlotId::new(SlotKind::Protector, 0));
    assert_eq!(second, SlotId::new(SlotKind::Protector, 1));

    let refusal = state.add_card(&aegis, &gate, &layout).unwrap_err();
    assert_eq!(
        refusal,
        AddError::CopyLimit {
            name: "Aegis".into(),
            limit: 2
        }
    );

    // Simulate a corrupted import forcing past the gate: the card must
    // render into overflow, never silently vanish.
    let forced = state.place_unvalidated(&aegis, &layout);
    assert_eq!(forced.kind, SlotKind::Overflow);
    assert_eq!(state.count_by_name("Aegis"), 3);
    assert_eq!(state.to_identifier_list().len(), 3);
}

/// Main grid: 5 rows at 0 occupants, 6 rows after 16, capped at 8
/// rows regardless of attempted over-addition.
#[test]
fn main_grid_growth_and_cap() {
    let layout = SlotLayout::standard();
    assert_eq!(layout.main_slots(0).len(), 15);

    let gate = ValidationGate::default();
    let mut state = DeckCompositionState::new();
    for i in 0..16 {
        state
            .add_card(
                &card(i, &format!("Creature {i}"), TypeCategory::MainCreature),
                &gate,
                &layout,
            )
            .unwrap();
    }
    assert_eq!(layout.main_slots(state.main_count()).len(), 18);

    // Force the grid past its ceiling: the 25th main card overflows,
    // the grid itself never exceeds 8 rows.
    for i in 16..30 {
        state.place_unvalidated(
            &card(i, &format!("Creature {i}"), TypeCategory::MainCreature),
            &layout,
        );
    }
    assert_eq!(state.main_count(), 24);
    assert_eq!(layout.main_slots(state.main_count()).len(), 24);
    assert_eq!(state.count_of_kind(SlotKind::Overflow), 6);
}

/// The gate stops additions at the 34-card ceiling.
#[test]
fn deck_ceiling_is_enforced() {
    let gate = ValidationGate::default();
    let layout = SlotLayout::standard();
    let mut state = DeckCompositionState::new();

    let mut id = 0;
    let mut add = |state: &mut DeckCompositionState, category| {
        id += 1;
        state.add_card(
            &card(id, &format!("Card {id}"), category),
            &gate,
            &layout,
        )
    };

    // Fill every kind: 2 + 1 + 5 + 5 + 21 main = 34.
    for _ in 0..2 {
        add(&mut state, TypeCategory::Protector).unwrap();
    }
    add(&mut state, TypeCategory::Bio).unwrap();
    for _ in 0..5 {
        add(&mut state, TypeCategory::Rot).unwrap();
    }
    for _ in 0..5 {
        add(&mut state, TypeCategory::Ixim).unwrap();
    }
    for _ in 0..21 {
        add(&mut state, TypeCategory::MainCreature).unwrap();
    }
    assert_eq!(state.occupied_total(), 34);

    let refusal = add(&mut state, TypeCategory::Support).unwrap_err();
    assert_eq!(refusal, AddError::DeckFull { ceiling: 34 });
    assert_eq!(state.occupied_total(), 34);
}

/// Zero-stat creatures live in the main grid like any other creature.
#[test]
fn rava_routes_to_main_grid() {
    let mut editor = DeckEditor::new();
    let slot = editor
        .request_add(&card(1, "Nullfang", TypeCategory::Rava))
        .unwrap();
    assert_eq!(slot, SlotId::new(SlotKind::Main, 0));
}

/// Serialize then hydrate reproduces the same identifier multiset.
#[test]
fn serialize_hydrate_round_trip() {
    let mut catalog = CardCatalog::new();
    catalog.register(card(1, "Aegis", TypeCategory::Protector));
    catalog.register(card(2, "Sporeling", TypeCategory::Rot));
    catalog.register(card(3, "Wisp", TypeCategory::Support));

    let gate = ValidationGate::default();
    let layout = SlotLayout::standard();
    let mut state = DeckCompositionState::new();
    for id in [3, 1, 3, 2, 3] {
        let c = catalog.get(CardId::new(id)).unwrap().clone();
        state.add_card(&c, &gate, &layout).unwrap();
    }

    let saved = state.to_identifier_list();
    let reloaded = DeckCompositionState::hydrate(&saved, &catalog, &layout);

    let mut before = saved.clone();
    let mut after = reloaded.to_identifier_list();
    before.sort();
    after.sort();
    assert_eq!(before, after);
}
