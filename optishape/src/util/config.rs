use serde::{Deserialize, Serialize};

/// Configuration of a nesting run.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct NestConfig {
    /// Which [`PlacementSearch`](crate::search::PlacementSearch) is used for every part
    pub strategy: StrategyKind,
    /// Distance between consecutive anchors of the grid scan, only used by [`StrategyKind::Exhaustive`]
    pub step_size: f64,
    /// Collision semantics of the grid scan, the other strategies always work with bounding boxes
    pub collision_mode: CollisionMode,
    /// Budget per part before it is reported unplaced. What is counted depends on the strategy:
    /// anchors for the grid scan, free rectangle inspections for guillotine and
    /// (position, rotation) pairs for shelf
    pub max_iterations: usize,
    /// Order in which parts are offered to the search
    pub sort_key: SortKey,
    /// Rotations (in degrees) tried for parts that do not specify their own
    pub default_rotations: Vec<f64>,
}

impl Default for NestConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::Exhaustive,
            step_size: 5.0,
            collision_mode: CollisionMode::Exact,
            max_iterations: 1_000_000,
            sort_key: SortKey::AreaDesc,
            default_rotations: vec![0.0, 90.0, 180.0, 270.0],
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Raster scan over a regular grid of anchors
    #[default]
    Exhaustive,
    /// First fitting rectangle of a list of free rectangles, split with guillotine cuts
    Guillotine,
    /// Left to right in rows, a new row starts above the tallest part of the current one
    Shelf,
}

/// Semantics of the overlap test between a candidate and the parts already placed.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum CollisionMode {
    /// Outlines overlap only if their interiors share a region of positive area
    #[default]
    Exact,
    /// Outlines overlap if their axis-aligned bounding boxes do.
    /// Conservative: rotated or non-rectangular parts whose boxes intersect are rejected
    /// even when the outlines themselves are disjoint.
    Bbox,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Largest area first, input order at equal area
    #[default]
    AreaDesc,
    /// Largest area first, rectangles and squares ahead of other shapes at equal area
    RegularFirst,
    /// Largest bounding box first
    BboxAreaDesc,
    /// No reordering
    InputOrder,
}
