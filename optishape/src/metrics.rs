use serde::{Deserialize, Serialize};

use crate::entities::{PlacedPart, Sheet};
use crate::geometry::geo_traits::Shape;

/// Summary of a finished layout.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Metrics {
    /// Fraction of the sheet covered by placed parts, in `[0, 1]`
    pub utilization: f64,
    /// `100 * (1 - utilization)`
    pub waste_percent: f64,
    pub placed_count: usize,
    /// Number of parts supplied, rejected ones included
    pub total_count: usize,
    pub rejected_count: usize,
    /// Ids of the parts for which no position was found
    pub unplaced: Vec<u64>,
    pub placed_area: f64,
    pub sheet_area: f64,
}

impl Metrics {
    pub fn compute(
        sheet: &Sheet,
        placed: &[PlacedPart],
        unplaced: &[u64],
        rejected_count: usize,
    ) -> Self {
        let placed_area: f64 = placed.iter().map(|p| p.shape.area()).sum();
        let sheet_area = sheet.area();
        let utilization = (placed_area / sheet_area).clamp(0.0, 1.0);

        Metrics {
            utilization,
            waste_percent: 100.0 * (1.0 - utilization),
            placed_count: placed.len(),
            total_count: placed.len() + unplaced.len() + rejected_count,
            rejected_count,
            unplaced: unplaced.to_vec(),
            placed_area,
            sheet_area,
        }
    }
}
