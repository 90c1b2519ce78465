use thiserror::Error;

/// Fatal problems with the sheet or the configuration, a run is refused before any part is processed.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("sheet dimensions must be positive and finite, got {width} x {height}")]
    InvalidSheet { width: f64, height: f64 },

    #[error("step size of the grid scan must be positive and finite, got {0}")]
    InvalidStepSize(f64),

    #[error("iteration budget must be at least 1")]
    ZeroIterationBudget,

    #[error("default rotation set is empty")]
    EmptyDefaultRotations,

    #[error("part {part_id} has an empty rotation set")]
    EmptyPartRotations { part_id: u64 },

    #[error("rotation angle must be finite, got {0}")]
    NonFiniteRotation(f64),
}

/// Reason why a single part is excluded from a run.
/// Such a part is reported as rejected, it never competes for a position.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InvalidPartError {
    #[error("{name} must be positive and finite, got {value}")]
    InvalidDimension { name: &'static str, value: f64 },

    #[error("skew must lie strictly between -90 and 90 degrees, got {0}")]
    InvalidSkew(f64),

    #[error("polygon needs at least 3 distinct vertices, got {0}")]
    TooFewVertices(usize),

    #[error("polygon contains duplicate vertices")]
    DuplicateVertices,

    #[error("vertex coordinates must be finite")]
    NonFiniteVertex,

    #[error("polygon has no area")]
    ZeroArea,

    #[error("polygon outline intersects itself")]
    SelfIntersecting,
}

/// A part that failed validation, with the reason why.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedPart {
    pub part_id: u64,
    pub reason: InvalidPartError,
}
