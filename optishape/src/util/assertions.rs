//Checks on the state of a finished run
//Used in debug_assert!() blocks and in tests

use itertools::Itertools;
use log::error;

use crate::engine::NestingSolution;
use crate::entities::{PlacedPart, Sheet};
use crate::geometry::geo_traits::Overlaps;

/// Every placed outline lies inside the sheet.
pub fn layout_is_contained(sheet: &Sheet, placed: &[PlacedPart]) -> bool {
    let sheet_rect = sheet.rect();
    placed.iter().all(|p| {
        let contained = p.shape.contained_in(&sheet_rect);
        if !contained {
            error!("part {} sticks out of the sheet: {}", p.part_id, p.d_transf);
        }
        contained
    })
}

/// No two placed outlines share a region of positive area.
pub fn layout_has_no_overlap(placed: &[PlacedPart]) -> bool {
    placed.iter().tuple_combinations().all(|(a, b)| {
        let overlap = a.shape.overlaps(&b.shape);
        if overlap {
            error!("parts {} and {} overlap", a.part_id, b.part_id);
        }
        !overlap
    })
}

/// Every input part ends up in exactly one of placed, unplaced or rejected.
pub fn outcomes_partition_input(n_parts: usize, solution: &NestingSolution) -> bool {
    let placed_indices = solution.placed.iter().map(|p| p.input_index).unique().count();
    placed_indices == solution.placed.len()
        && solution.placed.len() + solution.unplaced.len() + solution.rejected.len() == n_parts
}
