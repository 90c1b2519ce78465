use itertools::Itertools;

use crate::error::InvalidPartError;
use crate::geometry::Outline;
use crate::geometry::primitives::{Circle, Point, Rect, SPolygon};
use crate::util::FPA;

/// Shape of a part, described in its own local frame.
///
/// The parametric kinds are laid out with the lower-left corner of their bounding box at the origin.
/// Polygons keep the coordinates they were given.
#[derive(Clone, Debug, PartialEq)]
pub enum PartKind {
    /// Circle with its centre at `(radius, radius)`
    Circle { radius: f64 },
    Rectangle { width: f64, height: f64 },
    Square { side: f64 },
    /// Isosceles triangle with vertices `(0, 0)`, `(base, 0)` and `(base / 2, height)`
    Triangle { base: f64, height: f64 },
    /// Rectangle sheared horizontally, its top edge is offset by `height * tan(skew)`.
    /// `skew` is in degrees.
    Parallelogram { base: f64, height: f64, skew: f64 },
    /// Arbitrary simple outline
    Polygon { vertices: Vec<Point> },
}

/// A part as supplied by the caller. Never modified by the engine.
#[derive(Clone, Debug, PartialEq)]
pub struct Part {
    pub id: u64,
    pub kind: PartKind,
    /// Rotations (in degrees) to try, in order. `None` defers to the configured default set.
    pub allowed_rotations: Option<Vec<f64>>,
}

impl Part {
    pub fn new(id: u64, kind: PartKind) -> Self {
        Part {
            id,
            kind,
            allowed_rotations: None,
        }
    }

    pub fn with_rotations(mut self, rotations: Vec<f64>) -> Self {
        self.allowed_rotations = Some(rotations);
        self
    }

    /// Rectangles and squares pack predictably, they are preferred at equal area by [`SortKey::RegularFirst`](crate::util::SortKey::RegularFirst).
    pub fn is_axis_aligned(&self) -> bool {
        matches!(
            self.kind,
            PartKind::Rectangle { .. } | PartKind::Square { .. }
        )
    }

    /// Builds the outline of the part in its local frame, validating the dimensions on the way.
    pub fn outline(&self) -> Result<Outline, InvalidPartError> {
        match &self.kind {
            PartKind::Circle { radius } => {
                let r = positive("radius", *radius)?;
                Ok(Outline::Circle(Circle {
                    center: Point(r, r),
                    radius: r,
                }))
            }
            PartKind::Rectangle { width, height } => {
                let (w, h) = (positive("width", *width)?, positive("height", *height)?);
                Ok(rectangle(w, h))
            }
            PartKind::Square { side } => {
                let s = positive("side", *side)?;
                Ok(rectangle(s, s))
            }
            PartKind::Triangle { base, height } => {
                let (b, h) = (positive("base", *base)?, positive("height", *height)?);
                polygon(vec![Point(0.0, 0.0), Point(b, 0.0), Point(b / 2.0, h)])
            }
            PartKind::Parallelogram { base, height, skew } => {
                let (b, h) = (positive("base", *base)?, positive("height", *height)?);
                if !skew.is_finite() || skew.abs() >= 90.0 {
                    return Err(InvalidPartError::InvalidSkew(*skew));
                }
                let shift = h * skew.to_radians().tan();
                //keep the bounding box in the positive quadrant for negative skews
                let x0 = f64::max(0.0, -shift);
                polygon(vec![
                    Point(x0, 0.0),
                    Point(x0 + b, 0.0),
                    Point(x0 + b + shift, h),
                    Point(x0 + shift, h),
                ])
            }
            PartKind::Polygon { vertices } => polygon(vertices.clone()),
        }
    }
}

fn positive(name: &'static str, value: f64) -> Result<f64, InvalidPartError> {
    match value.is_finite() && value > 0.0 {
        true => Ok(value),
        false => Err(InvalidPartError::InvalidDimension { name, value }),
    }
}

fn rectangle(w: f64, h: f64) -> Outline {
    Outline::Polygon(SPolygon::from(Rect {
        x_min: 0.0,
        y_min: 0.0,
        x_max: w,
        y_max: h,
    }))
}

fn polygon(vertices: Vec<Point>) -> Result<Outline, InvalidPartError> {
    if vertices.iter().any(|p| !p.0.is_finite() || !p.1.is_finite()) {
        return Err(InvalidPartError::NonFiniteVertex);
    }
    let n_distinct = vertices.iter().unique().count();
    if n_distinct < 3 {
        return Err(InvalidPartError::TooFewVertices(n_distinct));
    }
    if n_distinct != vertices.len() {
        return Err(InvalidPartError::DuplicateVertices);
    }
    if FPA(SPolygon::calculate_area(&vertices)) == FPA(0.0) {
        return Err(InvalidPartError::ZeroArea);
    }
    if !SPolygon::calculate_simplicity(&vertices) {
        return Err(InvalidPartError::SelfIntersecting);
    }
    //every condition SPolygon::new checks has been verified above
    SPolygon::new(vertices)
        .map(Outline::Polygon)
        .map_err(|_| InvalidPartError::ZeroArea)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::geo_traits::Shape;
    use float_cmp::approx_eq;

    #[test]
    fn parallelogram_with_negative_skew_stays_in_positive_quadrant() {
        let part = Part::new(
            0,
            PartKind::Parallelogram {
                base: 20.0,
                height: 10.0,
                skew: -45.0,
            },
        );
        let outline = part.outline().unwrap();
        let bbox = outline.bbox();
        assert!(approx_eq!(f64, bbox.x_min, 0.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, bbox.width(), 30.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, outline.area(), 200.0, epsilon = 1e-9));
    }

    #[test]
    fn polygon_with_repeated_vertex_is_rejected() {
        let part = Part::new(
            1,
            PartKind::Polygon {
                vertices: vec![Point(0.0, 0.0), Point(1.0, 0.0), Point(1.0, 0.0), Point(0.0, 1.0)],
            },
        );
        assert_eq!(part.outline().unwrap_err(), InvalidPartError::DuplicateVertices);
    }

    #[test]
    fn signed_zero_does_not_hide_a_repeated_vertex() {
        let part = Part::new(
            2,
            PartKind::Polygon {
                vertices: vec![Point(0.0, 0.0), Point(10.0, 0.0), Point(5.0, 8.0), Point(-0.0, 0.0)],
            },
        );
        assert_eq!(part.outline().unwrap_err(), InvalidPartError::DuplicateVertices);
    }

    #[test]
    fn bow_tie_is_rejected() {
        let part = Part::new(
            3,
            PartKind::Polygon {
                vertices: vec![Point(0.0, 0.0), Point(10.0, 10.0), Point(10.0, 0.0), Point(0.0, 4.0)],
            },
        );
        assert_eq!(part.outline().unwrap_err(), InvalidPartError::SelfIntersecting);
    }

    #[test]
    fn only_rectangles_and_squares_are_axis_aligned() {
        assert!(Part::new(0, PartKind::Square { side: 1.0 }).is_axis_aligned());
        assert!(!Part::new(0, PartKind::Circle { radius: 1.0 }).is_axis_aligned());
    }
}
