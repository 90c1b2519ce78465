use log::debug;

use crate::entities::{Item, Sheet};
use crate::geometry::primitives::Point;
use crate::ledger::OccupancyLedger;
use crate::search::{Orientation, PlacementSearch, SearchOutcome, Slot};
use crate::util::{CollisionMode, FPA};

/// Row-based placement: items are laid out left to right, a new row starts on top of the tallest item
/// of the current one.
///
/// Only two positions are considered per item: the shelf cursor and the start of the next row.
/// An item fitting neither is unplaced, the cursor stays where it is.
/// Works on bounding boxes only.
pub struct ShelfSearch {
    /// Maximum number of (position, rotation) pairs evaluated per item
    pub max_iterations: usize,
}

impl PlacementSearch for ShelfSearch {
    fn collision_mode(&self) -> CollisionMode {
        CollisionMode::Bbox
    }

    fn search(&self, item: &Item, sheet: &Sheet, ledger: &OccupancyLedger) -> SearchOutcome {
        let cursor = ledger.shelf_cursor();
        let sheet_rect = sheet.rect();

        let mut positions = vec![(Point(cursor.x, cursor.y), false)];
        if FPA(cursor.row_height) > FPA(0.0) {
            positions.push((Point(0.0, cursor.y + cursor.row_height), true));
        }

        let orientations = Orientation::all(item);
        let mut n_evals = 0;

        for (anchor, new_row) in positions {
            for o in orientations.iter() {
                if n_evals == self.max_iterations {
                    debug!("[SHELF] part {} ran out of budget", item.part_id);
                    return SearchOutcome::BudgetExceeded { n_evals };
                }
                n_evals += 1;

                if sheet_rect.almost_contains(&o.footprint_at(anchor)) {
                    debug!(
                        "[SHELF] part {} fits at ({:.3}, {:.3}){} rotated {}°",
                        item.part_id,
                        anchor.0,
                        anchor.1,
                        if new_row { " on a new row" } else { "" },
                        o.rotation
                    );
                    let candidate = o.candidate_at(item, anchor, Slot::Shelf { new_row });
                    return SearchOutcome::Found { candidate, n_evals };
                }
            }
        }

        debug!("[SHELF] part {} fits neither this row nor the next", item.part_id);
        SearchOutcome::Exhausted { n_evals }
    }
}
