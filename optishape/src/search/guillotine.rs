use log::debug;

use crate::entities::{Item, Sheet};
use crate::ledger::OccupancyLedger;
use crate::search::{Orientation, PlacementSearch, SearchOutcome, Slot};
use crate::util::CollisionMode;

/// First-fit over the free rectangles kept by the ledger.
///
/// For every rotation (in order) the free rectangles are scanned in list order, the item's bounding box
/// is placed in the lower-left corner of the first rectangle it fits in.
/// Works on bounding boxes only: non-rectangular items claim their entire bounding box.
pub struct GuillotineSearch {
    /// Maximum number of free rectangles inspected per item
    pub max_iterations: usize,
}

impl PlacementSearch for GuillotineSearch {
    fn collision_mode(&self) -> CollisionMode {
        CollisionMode::Bbox
    }

    fn search(&self, item: &Item, _sheet: &Sheet, ledger: &OccupancyLedger) -> SearchOutcome {
        let free_rects = ledger.free_rects();
        let mut n_evals = 0;

        for o in Orientation::all(item) {
            for (i, free) in free_rects.iter().enumerate() {
                if n_evals == self.max_iterations {
                    debug!(
                        "[GUILLOTINE] part {} ran out of budget after {} inspections",
                        item.part_id, n_evals
                    );
                    return SearchOutcome::BudgetExceeded { n_evals };
                }
                n_evals += 1;

                if free.fits(o.width(), o.height()) {
                    debug!(
                        "[GUILLOTINE] part {} fits in free rectangle #{i} ({:.3}, {:.3}, {:.3}, {:.3}) rotated {}°",
                        item.part_id,
                        free.x_min,
                        free.y_min,
                        free.width(),
                        free.height(),
                        o.rotation
                    );
                    let candidate = o.candidate_at(item, free.lower_left(), Slot::FreeRect(i));
                    return SearchOutcome::Found { candidate, n_evals };
                }
            }
        }

        debug!(
            "[GUILLOTINE] none of the {} free rectangles fits part {}",
            free_rects.len(),
            item.part_id
        );
        SearchOutcome::Exhausted { n_evals }
    }
}
