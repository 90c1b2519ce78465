use crate::entities::Part;
use crate::error::InvalidPartError;
use crate::geometry::Outline;
use crate::geometry::geo_traits::Shape;

/// A validated [`Part`], ready to be placed.
#[derive(Clone, Debug)]
pub struct Item {
    pub part_id: u64,
    /// Position of the part in the input list
    pub input_index: usize,
    /// Outline in the local frame of the part
    pub shape: Outline,
    /// Rotations (in degrees) in the order they are tried
    pub rotations: Vec<f64>,
    pub area: f64,
    pub axis_aligned: bool,
}

impl Item {
    pub fn new(
        part: &Part,
        input_index: usize,
        default_rotations: &[f64],
    ) -> Result<Self, InvalidPartError> {
        let shape = part.outline()?;
        let rotations = part
            .allowed_rotations
            .clone()
            .unwrap_or_else(|| default_rotations.to_vec());
        Ok(Item {
            part_id: part.id,
            input_index,
            area: shape.area(),
            axis_aligned: part.is_axis_aligned(),
            shape,
            rotations,
        })
    }

    pub fn bbox_area(&self) -> f64 {
        self.shape.bbox().area()
    }
}
