use itertools::Itertools;

use crate::engine::NestingSolution;
use crate::entities::PlacedPart;
use crate::geometry::Outline;
use crate::io::ext_repr::{ExtFinalShape, ExtPlacedPart, ExtRejectedPart, ExtSolution};

/// Exports a [`NestingSolution`] by composing an [`ExtSolution`] from it.
pub fn export_solution(solution: &NestingSolution) -> ExtSolution {
    ExtSolution {
        placed: solution.placed.iter().map(export_placed_part).collect_vec(),
        unplaced: solution.unplaced.clone(),
        rejected: solution
            .rejected
            .iter()
            .map(|r| ExtRejectedPart {
                part_id: r.part_id,
                reason: r.reason.to_string(),
            })
            .collect_vec(),
        metrics: solution.metrics.clone(),
    }
}

pub fn export_placed_part(placed: &PlacedPart) -> ExtPlacedPart {
    ExtPlacedPart {
        part_id: placed.part_id,
        rotation: placed.rotation,
        offset: placed.offset(),
        final_shape: export_outline(&placed.shape),
    }
}

pub fn export_outline(outline: &Outline) -> ExtFinalShape {
    match outline {
        Outline::Polygon(p) => {
            ExtFinalShape::Polygon(p.vertices.iter().map(|&v| v.into()).collect_vec())
        }
        Outline::Circle(c) => ExtFinalShape::Circle {
            center: c.center.into(),
            radius: c.radius,
        },
    }
}
