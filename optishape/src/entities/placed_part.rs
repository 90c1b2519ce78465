use crate::entities::Item;
use crate::geometry::{DTransformation, Outline};
use crate::search::Candidate;

/// A part that has been committed to the sheet. Its transformation never changes afterwards.
#[derive(Clone, Debug)]
pub struct PlacedPart {
    pub part_id: u64,
    pub input_index: usize,
    /// Rotation in degrees, exactly as it appears in the rotation set of the part
    pub rotation: f64,
    /// Rotation about the local origin followed by the translation
    pub d_transf: DTransformation,
    /// Outline of the part with `d_transf` applied
    pub shape: Outline,
}

impl PlacedPart {
    pub fn new(item: &Item, candidate: Candidate) -> Self {
        let Candidate {
            rotation,
            d_transf,
            shape,
            footprint: _,
            slot: _,
        } = candidate;
        PlacedPart {
            part_id: item.part_id,
            input_index: item.input_index,
            rotation,
            d_transf,
            shape,
        }
    }

    pub fn offset(&self) -> (f64, f64) {
        self.d_transf.translation()
    }
}
