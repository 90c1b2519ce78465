use anyhow::Result;
use anyhow::ensure;

use crate::geometry::geo_traits::Overlaps;
use crate::geometry::primitives::Point;
use crate::util::FPA;

///Axis-aligned rectangle
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rect {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Rect {
    pub fn try_new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Result<Self> {
        ensure!(
            x_min < x_max && y_min < y_max,
            "invalid rectangle, x_min: {x_min}, x_max: {x_max}, y_min: {y_min}, y_max: {y_max}"
        );
        Ok(Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    /// Rectangle with its lower-left corner at `(x, y)`, a width `w` and height `h`.
    pub fn from_xywh(x: f64, y: f64, w: f64, h: f64) -> Result<Self> {
        Rect::try_new(x, y, x + w, y + h)
    }

    /// Returns true if `other` lies inside `self`, boundaries included, with a tolerance for floating point precision.
    pub fn almost_contains(&self, other: &Rect) -> bool {
        FPA(self.x_min) <= FPA(other.x_min)
            && FPA(self.y_min) <= FPA(other.y_min)
            && FPA(self.x_max) >= FPA(other.x_max)
            && FPA(self.y_max) >= FPA(other.y_max)
    }

    /// Returns true if `point` lies inside `self`, boundaries included, with a tolerance for floating point precision.
    pub fn almost_contains_point(&self, point: &Point) -> bool {
        let Point(x, y) = *point;
        FPA(x) >= FPA(self.x_min)
            && FPA(x) <= FPA(self.x_max)
            && FPA(y) >= FPA(self.y_min)
            && FPA(y) <= FPA(self.y_max)
    }

    /// Returns true if a `w` x `h` rectangle fits inside `self` (tolerant).
    pub fn fits(&self, w: f64, h: f64) -> bool {
        FPA(self.width()) >= FPA(w) && FPA(self.height()) >= FPA(h)
    }

    /// Returns the four corners of `self`, counterclockwise starting at the lower-left corner.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point(self.x_min, self.y_min),
            Point(self.x_max, self.y_min),
            Point(self.x_max, self.y_max),
            Point(self.x_min, self.y_max),
        ]
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn lower_left(&self) -> Point {
        Point(self.x_min, self.y_min)
    }

    pub fn area(&self) -> f64 {
        (self.x_max - self.x_min) * (self.y_max - self.y_min)
    }
}

impl Overlaps<Rect> for Rect {
    /// `!(ax+aw<=bx || bx+bw<=ax || ay+ah<=by || by+bh<=ay)`, with tolerant comparisons.
    #[inline(always)]
    fn overlaps(&self, other: &Rect) -> bool {
        !(FPA(self.x_max) <= FPA(other.x_min)
            || FPA(other.x_max) <= FPA(self.x_min)
            || FPA(self.y_max) <= FPA(other.y_min)
            || FPA(other.y_max) <= FPA(self.y_min))
    }
}
