use itertools::Itertools;
use log::debug;
use ordered_float::OrderedFloat;

use crate::entities::{Item, Sheet};
use crate::geometry::geo_traits::TransformableFrom;
use crate::geometry::primitives::Point;
use crate::ledger::OccupancyLedger;
use crate::search::{Candidate, Orientation, PlacementSearch, SearchOutcome, Slot};
use crate::util::{CollisionMode, FPA};

/// Exhaustive raster scan over a regular grid of anchors.
///
/// Anchors are visited row by row (`y` in the outer loop, `x` in the inner loop), starting at the origin.
/// At every anchor each rotation is tried in order, the anchor is where the lower-left corner of the
/// rotated item's bounding box goes. The first candidate that is contained in the sheet and does not
/// overlap any committed outline is returned.
///
/// With [`CollisionMode::Bbox`] the scan can reject positions where the outlines themselves would not overlap.
pub struct GridSearch {
    /// Distance between two consecutive anchors, in both directions
    pub step: f64,
    pub collision_mode: CollisionMode,
    /// Maximum number of anchors visited per item
    pub max_iterations: usize,
}

impl PlacementSearch for GridSearch {
    fn collision_mode(&self) -> CollisionMode {
        self.collision_mode
    }

    fn search(&self, item: &Item, sheet: &Sheet, ledger: &OccupancyLedger) -> SearchOutcome {
        let sheet_rect = sheet.rect();

        //rotations in which the item cannot fit the empty sheet are never worth trying
        let orientations = Orientation::all(item)
            .into_iter()
            .filter(|o| sheet_rect.fits(o.width(), o.height()))
            .collect_vec();

        let (Some(min_w), Some(min_h)) = (
            orientations.iter().map(|o| OrderedFloat(o.width())).min(),
            orientations.iter().map(|o| OrderedFloat(o.height())).min(),
        ) else {
            debug!("[GRID] part {} exceeds the sheet in every rotation", item.part_id);
            return SearchOutcome::Exhausted { n_evals: 0 };
        };

        //buffer shape, reused for every evaluated candidate
        let mut buffer = item.shape.clone();
        let (mut n_anchors, mut n_evals) = (0, 0);

        for y in anchors(self.step, sheet.height() - min_h.0) {
            for x in anchors(self.step, sheet.width() - min_w.0) {
                if n_anchors == self.max_iterations {
                    debug!(
                        "[GRID] part {} ran out of budget after {} anchors",
                        item.part_id, n_anchors
                    );
                    return SearchOutcome::BudgetExceeded { n_evals };
                }
                n_anchors += 1;

                let anchor = Point(x, y);
                for o in orientations.iter() {
                    n_evals += 1;
                    let footprint = o.footprint_at(anchor);
                    if !sheet_rect.almost_contains(&footprint) {
                        continue;
                    }
                    let d_transf = o.d_transf_at(anchor);
                    buffer.transform_from(&item.shape, &d_transf.compose());
                    if !ledger.query_overlap(&buffer, self.collision_mode) {
                        debug!(
                            "[GRID] part {} fits at ({x:.3}, {y:.3}) rotated {}°, {} evaluations",
                            item.part_id, o.rotation, n_evals
                        );
                        let candidate = Candidate {
                            rotation: o.rotation,
                            d_transf,
                            shape: buffer,
                            footprint,
                            slot: Slot::Anchor,
                        };
                        return SearchOutcome::Found { candidate, n_evals };
                    }
                }
            }
        }

        debug!("[GRID] no position for part {} after {} evaluations", item.part_id, n_evals);
        SearchOutcome::Exhausted { n_evals }
    }
}

/// Multiples of `step` from 0 up to and including `limit` (tolerant).
/// Each anchor is computed as `i * step` so that rounding errors do not accumulate.
fn anchors(step: f64, limit: f64) -> impl Iterator<Item = f64> {
    (0_u64..)
        .map(move |i| i as f64 * step)
        .take_while(move |v| FPA(*v) <= FPA(limit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_include_the_limit() {
        let a = anchors(5.0, 20.0).collect_vec();
        assert_eq!(a, vec![0.0, 5.0, 10.0, 15.0, 20.0]);
    }

    #[test]
    fn anchors_do_not_drift() {
        let a = anchors(0.1, 1.0).collect_vec();
        assert_eq!(a.len(), 11);
        assert_eq!(a[3], 3.0 * 0.1);
    }
}
