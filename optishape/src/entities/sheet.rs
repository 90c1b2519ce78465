use crate::error::ConfigError;
use crate::geometry::primitives::Rect;

/// Rectangular sheet with its lower-left corner at the origin.
/// Parts are placed inside `[0, width] x [0, height]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sheet {
    width: f64,
    height: f64,
}

impl Sheet {
    pub fn new(width: f64, height: f64) -> Result<Self, ConfigError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        match valid(width) && valid(height) {
            true => Ok(Sheet { width, height }),
            false => Err(ConfigError::InvalidSheet { width, height }),
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn rect(&self) -> Rect {
        Rect {
            x_min: 0.0,
            y_min: 0.0,
            x_max: self.width,
            y_max: self.height,
        }
    }
}
