use crate::geometry::geo_traits::{CollidesWith, DistanceTo};
use crate::geometry::primitives::Point;
use crate::util::FPA;

/// Line segment between two [`Point`]s
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Edge {
    pub start: Point,
    pub end: Point,
}

impl Edge {
    /// Unit vector perpendicular to the edge, pointing to the right of the direction `start -> end`.
    /// For a counterclockwise polygon this is the outward normal.
    pub fn outward_normal(&self) -> Point {
        let (dx, dy) = (self.end.0 - self.start.0, self.end.1 - self.start.1);
        let l = self.length();
        Point(dy / l, -dx / l)
    }

    /// Returns the closest point which lies on the edge to the given point
    pub fn closest_point_on_edge(&self, point: &Point) -> Point {
        //from https://stackoverflow.com/a/6853926
        let Point(x1, y1) = self.start;
        let Point(x2, y2) = self.end;
        let Point(x, y) = point;

        let a = x - x1;
        let b = y - y1;
        let c = x2 - x1;
        let d = y2 - y1;

        let dot = a * c + b * d;
        let len_sq = c * c + d * d;
        let mut param = -1.0;
        if len_sq != 0.0 {
            param = dot / len_sq;
        }
        let (xx, yy) = match param {
            p if p < 0.0 => (x1, y1),              //start is the closest point
            p if p > 1.0 => (x2, y2),              //end is the closest point
            _ => (x1 + param * c, y1 + param * d), //closest point is on the edge
        };

        Point(xx, yy)
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }
}

impl DistanceTo<Point> for Edge {
    #[inline(always)]
    fn distance_to(&self, point: &Point) -> f64 {
        f64::sqrt(self.sq_distance_to(point))
    }

    #[inline(always)]
    fn sq_distance_to(&self, point: &Point) -> f64 {
        let Point(x, y) = point;
        let Point(xx, yy) = self.closest_point_on_edge(point);

        let (dx, dy) = (x - xx, y - yy);
        dx.powi(2) + dy.powi(2)
    }
}

impl CollidesWith<Edge> for Edge {
    fn collides_with(&self, other: &Edge) -> bool {
        let (p1, p2, q1, q2) = (self.start, self.end, other.start, other.end);
        let o1 = turn(&p1, &p2, &q1);
        let o2 = turn(&p1, &p2, &q2);
        let o3 = turn(&q1, &q2, &p1);
        let o4 = turn(&q1, &q2, &p2);

        if o1 * o2 < 0 && o3 * o4 < 0 {
            //proper crossing
            return true;
        }
        //an endpoint lying on the other segment
        (o1 == 0 && within_bounds(self, &q1))
            || (o2 == 0 && within_bounds(self, &q2))
            || (o3 == 0 && within_bounds(other, &p1))
            || (o4 == 0 && within_bounds(other, &p2))
    }
}

/// Sign of the turn `a -> b -> c`: 1 counterclockwise, -1 clockwise, 0 collinear within tolerance
fn turn(a: &Point, b: &Point, c: &Point) -> i8 {
    let cross = FPA(a.cross(b, c));
    if cross > FPA(0.0) {
        1
    } else if cross < FPA(0.0) {
        -1
    } else {
        0
    }
}

/// Checks whether `p`, collinear with `edge`, lies between its endpoints
fn within_bounds(edge: &Edge, p: &Point) -> bool {
    let (x_min, x_max) = (edge.start.0.min(edge.end.0), edge.start.0.max(edge.end.0));
    let (y_min, y_max) = (edge.start.1.min(edge.end.1), edge.start.1.max(edge.end.1));
    FPA(x_min) <= FPA(p.0) && FPA(p.0) <= FPA(x_max) && FPA(y_min) <= FPA(p.1) && FPA(p.1) <= FPA(y_max)
}
