//! Drop-target resolution by rectangle overlap.
//!
//! The host UI reports slot regions and the dragged element's bounding
//! box in whatever coordinate space it likes; only relative overlap
//! matters here.

use serde::{Deserialize, Serialize};

use super::controller::DropTarget;

/// Axis-aligned rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a rectangle from origin and size.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Intersection area of two rectangles. 0.0 when disjoint.
#[must_use]
pub fn overlap_area(a: Rect, b: Rect) -> f32 {
    let w = (a.x + a.width).min(b.x + b.width) - a.x.max(b.x);
    let h = (a.y + a.height).min(b.y + b.height) - a.y.max(b.y);
    if w > 0.0 && h > 0.0 {
        w * h
    } else {
        0.0
    }
}

/// Pick the drop target with the greatest overlap with the dragged
/// element's bounding box.
///
/// Greatest-area resolution (not nearest-center) avoids flicker when
/// the pointer sits over several tightly packed slots at once. Ties go
/// to the earlier region in `regions`, which the UI lists in layout
/// order. Returns `None` when nothing overlaps - the drag is over
/// void.
#[must_use]
pub fn resolve_drop_target(dragged: Rect, regions: &[(DropTarget, Rect)]) -> Option<DropTarget> {
    let mut best: Option<(DropTarget, f32)> = None;
    for &(target, region) in regions {
        let area = overlap_area(dragged, region);
        if area <= 0.0 {
            continue;
        }
        match best {
            Some((_, best_area)) if area <= best_area => {}
            _ => best = Some((target, area)),
        }
    }
    best.map(|(target, _)| target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{SlotId, SlotKind};

    fn slot_target(ordinal: usize) -> DropTarget {
        DropTarget::Slot(SlotId::new(SlotKind::Main, ordinal))
    }

    #[test]
    fn disjoint_rects_have_zero_area() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 0.0, 10.0, 10.0);
        assert_eq!(overlap_area(a, b), 0.0);
    }

    #[test]
    fn touching_edges_do_not_count_as_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert_eq!(overlap_area(a, b), 0.0);
    }

    #[test]
    fn greatest_overlap_wins() {
        let dragged = Rect::new(6.0, 0.0, 10.0, 10.0);
        let regions = vec![
            (slot_target(0), Rect::new(0.0, 0.0, 10.0, 10.0)),  // 4x10
            (slot_target(1), Rect::new(10.0, 0.0, 10.0, 10.0)), // 6x10
        ];
        assert_eq!(resolve_drop_target(dragged, &regions), Some(slot_target(1)));
    }

    #[test]
    fn no_overlap_resolves_to_void() {
        let dragged = Rect::new(100.0, 100.0, 5.0, 5.0);
        let regions = vec![(slot_target(0), Rect::new(0.0, 0.0, 10.0, 10.0))];
        assert_eq!(resolve_drop_target(dragged, &regions), None);
    }

    #[test]
    fn ties_go_to_the_earlier_region() {
        let dragged = Rect::new(5.0, 0.0, 10.0, 10.0);
        let regions = vec![
            (slot_target(0), Rect::new(0.0, 0.0, 10.0, 10.0)),
            (slot_target(1), Rect::new(10.0, 0.0, 10.0, 10.0)),
        ];
        assert_eq!(resolve_drop_target(dragged, &regions), Some(slot_target(0)));
    }

    #[test]
    fn trash_competes_like_any_region() {
        let dragged = Rect::new(0.0, 0.0, 4.0, 4.0);
        let regions = vec![
            (slot_target(0), Rect::new(2.0, 0.0, 10.0, 10.0)),
            (DropTarget::Trash, Rect::new(0.0, 0.0, 10.0, 10.0)),
        ];
        assert_eq!(
            resolve_drop_target(dragged, &regions),
            Some(DropTarget::Trash)
        );
    }
}
