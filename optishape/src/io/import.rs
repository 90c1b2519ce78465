use itertools::Itertools;

use crate::entities::{Part, PartKind, Sheet};
use crate::error::ConfigError;
use crate::geometry::primitives::Point;
use crate::io::ext_repr::{ExtInstance, ExtPart, ExtShape};

/// Converts an [`ExtInstance`] into a sheet and the list of parts, in input order.
/// Parts are not validated here, that happens per part when they are nested.
pub fn import_instance(ext_instance: &ExtInstance) -> Result<(Sheet, Vec<Part>), ConfigError> {
    let sheet = Sheet::new(ext_instance.sheet.width, ext_instance.sheet.height)?;
    let parts = ext_instance.parts.iter().map(import_part).collect_vec();
    Ok((sheet, parts))
}

pub fn import_part(ext_part: &ExtPart) -> Part {
    Part {
        id: ext_part.id,
        kind: import_shape(&ext_part.shape),
        allowed_rotations: ext_part.allowed_rotations.clone(),
    }
}

pub fn import_shape(ext_shape: &ExtShape) -> PartKind {
    match ext_shape {
        ExtShape::Circle { radius } => PartKind::Circle { radius: *radius },
        ExtShape::Rectangle { width, height } => PartKind::Rectangle {
            width: *width,
            height: *height,
        },
        ExtShape::Square { side } => PartKind::Square { side: *side },
        ExtShape::Triangle { base, height } => PartKind::Triangle {
            base: *base,
            height: *height,
        },
        ExtShape::Parallelogram { base, height, skew } => PartKind::Parallelogram {
            base: *base,
            height: *height,
            skew: *skew,
        },
        ExtShape::Polygon(points) => PartKind::Polygon {
            vertices: points.iter().map(|&p| Point::from(p)).collect(),
        },
    }
}
