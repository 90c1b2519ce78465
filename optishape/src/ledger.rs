use log::trace;

use crate::entities::Sheet;
use crate::geometry::Outline;
use crate::geometry::geo_traits::{Overlaps, Shape};
use crate::geometry::primitives::Rect;
use crate::search::{Candidate, Slot};
use crate::util::{CollisionMode, FPA, StrategyKind};

/// Record of everything committed to the sheet so far.
///
/// Placement strategies only query it, [`OccupancyLedger::commit`] is the single mutator.
#[derive(Clone, Debug)]
pub struct OccupancyLedger {
    /// Committed outlines with their bounding boxes, in commit order
    committed: Vec<(Outline, Rect)>,
    free_space: FreeSpace,
}

/// Bookkeeping of the unused part of the sheet, depends on the placement strategy.
#[derive(Clone, Debug)]
pub enum FreeSpace {
    /// No explicit bookkeeping, free space is whatever does not overlap a committed outline
    Unbounded,
    /// Free rectangles in the order they are scanned, and the rectangles consumed by committed items.
    /// The free rectangles are pairwise disjoint but never merged, so they do not cover all unused area.
    Guillotine { free: Vec<Rect>, consumed: Vec<Rect> },
    Shelf(ShelfCursor),
}

/// Position where the next item of the current row goes, and the height of that row so far.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ShelfCursor {
    pub x: f64,
    pub y: f64,
    pub row_height: f64,
}

impl OccupancyLedger {
    pub fn new(sheet: &Sheet, strategy: StrategyKind) -> Self {
        let free_space = match strategy {
            StrategyKind::Exhaustive => FreeSpace::Unbounded,
            StrategyKind::Guillotine => FreeSpace::Guillotine {
                free: vec![sheet.rect()],
                consumed: vec![],
            },
            StrategyKind::Shelf => FreeSpace::Shelf(ShelfCursor::default()),
        };
        OccupancyLedger {
            committed: vec![],
            free_space,
        }
    }

    /// Registers a candidate as placed and updates the free space accordingly.
    pub fn commit(&mut self, candidate: &Candidate) {
        let footprint = candidate.footprint;
        match (&mut self.free_space, candidate.slot) {
            (FreeSpace::Guillotine { free, consumed }, Slot::FreeRect(i)) => {
                //remaining rectangles keep their relative order, remainders go to the back
                let source = free.remove(i);
                let (right, bottom) =
                    guillotine_split(&source, footprint.width(), footprint.height());
                free.extend(right);
                free.extend(bottom);
                consumed.push(Rect {
                    x_min: source.x_min,
                    y_min: source.y_min,
                    x_max: source.x_min + footprint.width(),
                    y_max: source.y_min + footprint.height(),
                });
                trace!(
                    "[LEDGER] split free rectangle #{i}, {} free rectangles left",
                    free.len()
                );
            }
            (FreeSpace::Shelf(cursor), Slot::Shelf { new_row }) => {
                *cursor = match new_row {
                    true => ShelfCursor {
                        x: footprint.x_max,
                        y: footprint.y_min,
                        row_height: footprint.height(),
                    },
                    false => ShelfCursor {
                        x: footprint.x_max,
                        y: cursor.y,
                        row_height: f64::max(cursor.row_height, footprint.height()),
                    },
                };
                trace!("[LEDGER] shelf cursor moved to {:?}", cursor);
            }
            (FreeSpace::Unbounded, Slot::Anchor) => {}
            (_, slot) => {
                //strategy and ledger disagree, the outline is still recorded so overlap queries stay correct
                debug_assert!(false, "slot {slot:?} does not match the free space bookkeeping");
            }
        }
        self.committed
            .push((candidate.shape.clone(), candidate.shape.bbox()));
    }

    /// Returns true if `outline` overlaps any committed outline, according to `mode`.
    pub fn query_overlap(&self, outline: &Outline, mode: CollisionMode) -> bool {
        let bbox = outline.bbox();
        self.committed.iter().any(|(other, other_bbox)| {
            bbox.overlaps(other_bbox)
                && match mode {
                    CollisionMode::Bbox => true,
                    CollisionMode::Exact => outline.overlaps(other),
                }
        })
    }

    /// Free rectangles in scan order, empty unless the ledger does guillotine bookkeeping.
    pub fn free_rects(&self) -> &[Rect] {
        match &self.free_space {
            FreeSpace::Guillotine { free, .. } => free,
            _ => &[],
        }
    }

    /// Rectangles claimed by committed items, empty unless the ledger does guillotine bookkeeping.
    pub fn consumed_rects(&self) -> &[Rect] {
        match &self.free_space {
            FreeSpace::Guillotine { consumed, .. } => consumed,
            _ => &[],
        }
    }

    /// Current shelf cursor, the origin unless the ledger does shelf bookkeeping.
    pub fn shelf_cursor(&self) -> ShelfCursor {
        match &self.free_space {
            FreeSpace::Shelf(cursor) => *cursor,
            _ => ShelfCursor::default(),
        }
    }

    pub fn free_space(&self) -> &FreeSpace {
        &self.free_space
    }

    pub fn committed(&self) -> impl Iterator<Item = &Outline> {
        self.committed.iter().map(|(o, _)| o)
    }

    pub fn n_committed(&self) -> usize {
        self.committed.len()
    }
}

/// Guillotine cut of `free` after a `w` x `h` rectangle is placed in its lower-left corner.
///
/// Returns the right remainder `(x + w, y, fw - w, h)` and the remainder above the placed rectangle
/// `(x, y + h, w, fh - h)`, each omitted when it has no width or height left.
pub fn guillotine_split(free: &Rect, w: f64, h: f64) -> (Option<Rect>, Option<Rect>) {
    let right = (FPA(free.width() - w) > FPA(0.0)).then(|| Rect {
        x_min: free.x_min + w,
        y_min: free.y_min,
        x_max: free.x_max,
        y_max: free.y_min + h,
    });
    let bottom = (FPA(free.height() - h) > FPA(0.0)).then(|| Rect {
        x_min: free.x_min,
        y_min: free.y_min + h,
        x_max: free.x_min + w,
        y_max: free.y_max,
    });
    (right, bottom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::DTransformation;
    use crate::geometry::primitives::SPolygon;

    fn rect(x: f64, y: f64, w: f64, h: f64) -> Rect {
        Rect {
            x_min: x,
            y_min: y,
            x_max: x + w,
            y_max: y + h,
        }
    }

    #[test]
    fn split_produces_right_and_bottom_remainder() {
        let (right, bottom) = guillotine_split(&rect(0.0, 0.0, 500.0, 500.0), 100.0, 50.0);
        assert_eq!(right, Some(rect(100.0, 0.0, 400.0, 50.0)));
        assert_eq!(bottom, Some(rect(0.0, 50.0, 100.0, 450.0)));
    }

    #[test]
    fn split_omits_empty_remainders() {
        let (right, bottom) = guillotine_split(&rect(10.0, 10.0, 100.0, 50.0), 100.0, 20.0);
        assert_eq!(right, None);
        assert_eq!(bottom, Some(rect(10.0, 30.0, 100.0, 30.0)));

        let (right, bottom) = guillotine_split(&rect(0.0, 0.0, 100.0, 50.0), 100.0, 50.0);
        assert_eq!((right, bottom), (None, None));
    }

    #[test]
    fn commit_consumes_the_free_rectangle() {
        let sheet = Sheet::new(500.0, 500.0).unwrap();
        let mut ledger = OccupancyLedger::new(&sheet, StrategyKind::Guillotine);
        let footprint = rect(0.0, 0.0, 100.0, 50.0);
        let candidate = Candidate {
            rotation: 0.0,
            d_transf: DTransformation::new(0.0, (0.0, 0.0)),
            shape: Outline::Polygon(SPolygon::from(footprint)),
            footprint,
            slot: Slot::FreeRect(0),
        };
        ledger.commit(&candidate);

        assert_eq!(ledger.n_committed(), 1);
        assert_eq!(ledger.consumed_rects(), &[footprint]);
        assert_eq!(
            ledger.free_rects(),
            &[rect(100.0, 0.0, 400.0, 50.0), rect(0.0, 50.0, 100.0, 450.0)]
        );
        assert!(ledger.query_overlap(&candidate.shape, CollisionMode::Exact));
        assert!(matches!(ledger.free_space(), FreeSpace::Guillotine { .. }));

        let committed = ledger.committed().collect::<Vec<_>>();
        assert_eq!(committed.len(), 1);
        assert_eq!(committed[0].vertices(), Some(&footprint.corners()[..]));
    }

    #[test]
    fn shelf_commit_moves_the_cursor() {
        let sheet = Sheet::new(100.0, 100.0).unwrap();
        let mut ledger = OccupancyLedger::new(&sheet, StrategyKind::Shelf);
        let footprint = rect(0.0, 0.0, 20.0, 15.0);
        let candidate = Candidate {
            rotation: 0.0,
            d_transf: DTransformation::new(0.0, (0.0, 0.0)),
            shape: Outline::Polygon(SPolygon::from(footprint)),
            footprint,
            slot: Slot::Shelf { new_row: false },
        };
        ledger.commit(&candidate);

        let expected = ShelfCursor {
            x: 20.0,
            y: 0.0,
            row_height: 15.0,
        };
        assert_eq!(ledger.shelf_cursor(), expected);
        assert!(matches!(ledger.free_space(), FreeSpace::Shelf(c) if *c == expected));
        assert!(ledger.free_rects().is_empty());
    }

    #[test]
    fn remainders_do_not_overlap_the_placed_rectangle() {
        let placed = rect(0.0, 0.0, 30.0, 20.0);
        let (right, bottom) = guillotine_split(&rect(0.0, 0.0, 100.0, 100.0), 30.0, 20.0);
        for r in [right, bottom].into_iter().flatten() {
            assert!(!r.overlaps(&placed));
        }
    }
}
