use std::f64::consts::PI;

use anyhow::Result;
use anyhow::ensure;

use crate::geometry::Transformation;
use crate::geometry::geo_traits::{
    CollidesWith, DistanceTo, Overlaps, Shape, Transformable, TransformableFrom,
};
use crate::geometry::primitives::Point;
use crate::geometry::primitives::Rect;
use crate::geometry::primitives::SPolygon;
use crate::util::FPA;

/// Geometric primitive representing a circle
#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub fn try_new(center: Point, radius: f64) -> Result<Self> {
        ensure!(
            radius.is_finite() && radius > 0.0,
            "invalid circle radius: {radius}"
        );
        ensure!(
            center.0.is_finite() && center.1.is_finite(),
            "invalid circle center: {center:?}"
        );

        Ok(Self { center, radius })
    }
}

impl Transformable for Circle {
    fn transform(&mut self, t: &Transformation) -> &mut Self {
        let Circle { center, radius: _ } = self;
        center.transform(t);
        self
    }
}

impl TransformableFrom for Circle {
    fn transform_from(&mut self, reference: &Self, t: &Transformation) -> &mut Self {
        let Circle { center, radius: _ } = self;
        center.transform_from(&reference.center, t);
        self
    }
}

impl CollidesWith<Point> for Circle {
    fn collides_with(&self, point: &Point) -> bool {
        point.sq_distance_to(&self.center) <= self.radius.powi(2)
    }
}

impl Overlaps<Circle> for Circle {
    fn overlaps(&self, other: &Circle) -> bool {
        //tangent circles only touch
        FPA(self.center.distance_to(&other.center)) < FPA(self.radius + other.radius)
    }
}

impl Overlaps<SPolygon> for Circle {
    fn overlaps(&self, poly: &SPolygon) -> bool {
        if !self.bbox().overlaps(&poly.bbox) {
            return false;
        }
        if poly.collides_with(&self.center) {
            //center inside (or on the border of) the polygon
            return true;
        }
        //disk reaches into the polygon if its boundary is strictly closer than the radius
        FPA(poly.distance_to(&self.center)) < FPA(self.radius)
    }
}

impl Shape for Circle {
    fn centroid(&self) -> Point {
        self.center
    }

    fn area(&self) -> f64 {
        self.radius * self.radius * PI
    }

    fn bbox(&self) -> Rect {
        let (r, x, y) = (self.radius, self.center.0, self.center.1);
        Rect {
            x_min: x - r,
            y_min: y - r,
            x_max: x + r,
            y_max: y + r,
        }
    }
}
