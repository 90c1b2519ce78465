use crate::entities::{Item, Sheet};
use crate::geometry::geo_traits::{Shape, Transformable};
use crate::geometry::primitives::{Point, Rect};
use crate::geometry::{DTransformation, Outline, Transformation};
use crate::ledger::OccupancyLedger;
use crate::util::{CollisionMode, NestConfig, StrategyKind};

mod grid;
mod guillotine;
mod shelf;

#[doc(inline)]
pub use grid::GridSearch;
#[doc(inline)]
pub use guillotine::GuillotineSearch;
#[doc(inline)]
pub use shelf::ShelfSearch;

/// Strategy that looks for a legal position of a single item.
///
/// Implementations only read the ledger, committing a found [`Candidate`] is up to the caller.
/// Rotations are tried in the order of [`Item::rotations`] and the first legal candidate is returned.
pub trait PlacementSearch {
    /// Overlap semantics the strategy relies on
    fn collision_mode(&self) -> CollisionMode;

    fn search(&self, item: &Item, sheet: &Sheet, ledger: &OccupancyLedger) -> SearchOutcome;
}

/// Creates the search strategy selected in the configuration.
pub fn from_config(config: &NestConfig) -> Box<dyn PlacementSearch> {
    match config.strategy {
        StrategyKind::Exhaustive => Box::new(GridSearch {
            step: config.step_size,
            collision_mode: config.collision_mode,
            max_iterations: config.max_iterations,
        }),
        StrategyKind::Guillotine => Box::new(GuillotineSearch {
            max_iterations: config.max_iterations,
        }),
        StrategyKind::Shelf => Box::new(ShelfSearch {
            max_iterations: config.max_iterations,
        }),
    }
}

/// Result of a search, every variant carries the number of evaluated (position, rotation) pairs.
#[derive(Debug)]
pub enum SearchOutcome {
    Found { candidate: Candidate, n_evals: usize },
    /// Every position and rotation was tried, none is legal
    Exhausted { n_evals: usize },
    /// The iteration budget ran out before the search space was covered
    BudgetExceeded { n_evals: usize },
}

impl SearchOutcome {
    pub fn n_evals(&self) -> usize {
        match self {
            SearchOutcome::Found { n_evals, .. }
            | SearchOutcome::Exhausted { n_evals }
            | SearchOutcome::BudgetExceeded { n_evals } => *n_evals,
        }
    }
}

/// A legal position for an item, not yet committed.
#[derive(Clone, Debug)]
pub struct Candidate {
    /// Rotation in degrees
    pub rotation: f64,
    pub d_transf: DTransformation,
    /// Outline of the item with `d_transf` applied
    pub shape: Outline,
    /// Bounding box of the item at this position, as computed by the search
    pub footprint: Rect,
    pub slot: Slot,
}

/// Free space the candidate claims, determines how the ledger updates its bookkeeping on commit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    /// Anywhere on the sheet, the ledger only records the outline
    Anchor,
    /// Lower-left corner of the free rectangle with this index
    FreeRect(usize),
    /// At the shelf cursor, or at the start of a new row
    Shelf { new_row: bool },
}

/// One of the rotations of an item, with the bounding box of the rotated outline (before translation).
#[derive(Clone, Debug)]
pub(crate) struct Orientation {
    pub rotation: f64,
    pub bbox: Rect,
}

impl Orientation {
    pub fn all(item: &Item) -> Vec<Orientation> {
        item.rotations
            .iter()
            .map(|&rotation| {
                let t = Transformation::from_rotation(rotation.to_radians());
                Orientation {
                    rotation,
                    bbox: item.shape.transform_clone(&t).bbox(),
                }
            })
            .collect()
    }

    pub fn width(&self) -> f64 {
        self.bbox.width()
    }

    pub fn height(&self) -> f64 {
        self.bbox.height()
    }

    /// Transformation that rotates the item and moves the lower-left corner of its bounding box to `anchor`
    pub fn d_transf_at(&self, anchor: Point) -> DTransformation {
        let offset = (anchor.0 - self.bbox.x_min, anchor.1 - self.bbox.y_min);
        DTransformation::from_degrees(self.rotation, offset)
    }

    pub fn footprint_at(&self, anchor: Point) -> Rect {
        Rect {
            x_min: anchor.0,
            y_min: anchor.1,
            x_max: anchor.0 + self.width(),
            y_max: anchor.1 + self.height(),
        }
    }

    /// Builds a complete candidate with the item's lower-left bounding box corner at `anchor`
    pub fn candidate_at(&self, item: &Item, anchor: Point, slot: Slot) -> Candidate {
        let d_transf = self.d_transf_at(anchor);
        Candidate {
            rotation: self.rotation,
            shape: item.shape.transform_clone(&d_transf.compose()),
            footprint: self.footprint_at(anchor),
            d_transf,
            slot,
        }
    }
}
