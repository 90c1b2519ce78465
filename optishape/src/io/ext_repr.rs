use serde::{Deserialize, Serialize};

use crate::metrics::Metrics;

/// External representation of a nesting problem: a sheet and the parts to place on it.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtInstance {
    /// Name of the instance
    pub name: String,
    pub sheet: ExtSheet,
    pub parts: Vec<ExtPart>,
}

/// External representation of a [`Sheet`](crate::entities::Sheet).
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct ExtSheet {
    pub width: f64,
    pub height: f64,
}

/// External representation of a [`Part`](crate::entities::Part).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPart {
    pub id: u64,
    pub shape: ExtShape,
    /// Rotations to try, in degrees.
    /// The configured default set if not specified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_rotations: Option<Vec<f64>>,
}

/// Shapes a part can have, see [`PartKind`](crate::entities::PartKind)
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(tag = "type", content = "data")]
#[serde(rename_all = "snake_case")]
pub enum ExtShape {
    Circle { radius: f64 },
    Rectangle { width: f64, height: f64 },
    Square { side: f64 },
    Triangle { base: f64, height: f64 },
    /// `skew` in degrees
    Parallelogram { base: f64, height: f64, skew: f64 },
    Polygon(Vec<(f64, f64)>),
}

/// External representation of a [`NestingSolution`](crate::engine::NestingSolution).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSolution {
    pub placed: Vec<ExtPlacedPart>,
    pub unplaced: Vec<u64>,
    pub rejected: Vec<ExtRejectedPart>,
    pub metrics: Metrics,
}

/// External representation of a [`PlacedPart`](crate::entities::PlacedPart).
/// The final shape is the part's local outline rotated about the local origin, then translated by `offset`.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPlacedPart {
    pub part_id: u64,
    /// Rotation in degrees
    pub rotation: f64,
    pub offset: (f64, f64),
    pub final_shape: ExtFinalShape,
}

/// Outline of a part after placement
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(tag = "type", content = "data")]
#[serde(rename_all = "snake_case")]
pub enum ExtFinalShape {
    Circle { center: (f64, f64), radius: f64 },
    Polygon(Vec<(f64, f64)>),
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtRejectedPart {
    pub part_id: u64,
    pub reason: String,
}
