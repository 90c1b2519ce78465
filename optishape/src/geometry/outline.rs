use crate::geometry::Transformation;
use crate::geometry::geo_traits::{Overlaps, Shape, Transformable, TransformableFrom};
use crate::geometry::primitives::{Circle, Point, Rect, SPolygon};

/// Geometry of a part: either a simple polygon or a circle.
/// Circles are kept analytical instead of being approximated by a polygon.
#[derive(Clone, Debug)]
pub enum Outline {
    Polygon(SPolygon),
    Circle(Circle),
}

impl Outline {
    /// Returns true if the outline lies inside `container`, boundary contact allowed.
    /// For a polygon this is equivalent to every vertex lying inside, for a circle to its bounding box doing so.
    pub fn contained_in(&self, container: &Rect) -> bool {
        container.almost_contains(&self.bbox())
    }

    /// Vertices of a polygon outline, `None` for a circle.
    pub fn vertices(&self) -> Option<&[Point]> {
        match self {
            Outline::Polygon(p) => Some(&p.vertices),
            Outline::Circle(_) => None,
        }
    }
}

impl Shape for Outline {
    fn centroid(&self) -> Point {
        match self {
            Outline::Polygon(p) => p.centroid(),
            Outline::Circle(c) => c.centroid(),
        }
    }

    fn area(&self) -> f64 {
        match self {
            Outline::Polygon(p) => p.area(),
            Outline::Circle(c) => c.area(),
        }
    }

    fn bbox(&self) -> Rect {
        match self {
            Outline::Polygon(p) => p.bbox(),
            Outline::Circle(c) => c.bbox(),
        }
    }
}

impl Transformable for Outline {
    fn transform(&mut self, t: &Transformation) -> &mut Self {
        match self {
            Outline::Polygon(p) => {
                p.transform(t);
            }
            Outline::Circle(c) => {
                c.transform(t);
            }
        }
        self
    }
}

impl TransformableFrom for Outline {
    fn transform_from(&mut self, reference: &Self, t: &Transformation) -> &mut Self {
        match (&mut *self, reference) {
            (Outline::Polygon(p), Outline::Polygon(ref_p)) => {
                p.transform_from(ref_p, t);
            }
            (Outline::Circle(c), Outline::Circle(ref_c)) => {
                c.transform_from(ref_c, t);
            }
            //buffer of another kind, fall back to a fresh copy
            _ => *self = reference.transform_clone(t),
        }
        self
    }
}

impl Overlaps<Outline> for Outline {
    fn overlaps(&self, other: &Outline) -> bool {
        match (self, other) {
            (Outline::Polygon(a), Outline::Polygon(b)) => a.overlaps(b),
            (Outline::Polygon(a), Outline::Circle(b)) => a.overlaps(b),
            (Outline::Circle(a), Outline::Polygon(b)) => a.overlaps(b),
            (Outline::Circle(a), Outline::Circle(b)) => a.overlaps(b),
        }
    }
}
