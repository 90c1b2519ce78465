use std::borrow::Borrow;

use anyhow::{Result, bail};
use itertools::Itertools;
use ordered_float::OrderedFloat;

use crate::geometry::Transformation;
use crate::geometry::geo_traits::{
    CollidesWith, DistanceTo, Overlaps, Shape, Transformable, TransformableFrom,
};
use crate::geometry::primitives::Circle;
use crate::geometry::primitives::Edge;
use crate::geometry::primitives::Point;
use crate::geometry::primitives::Rect;
use crate::geometry::triangulation::triangulate;
use crate::util::FPA;

/// A Simple Polygon is a polygon that does not intersect itself and contains no holes.
/// It is a closed shape with a finite number of vertices and edges.
/// [read more](https://en.wikipedia.org/wiki/Simple_polygon)
#[derive(Clone, Debug)]
pub struct SPolygon {
    /// Set of points that form the polygon, ordered counterclockwise
    pub vertices: Vec<Point>,
    /// Bounding box
    pub bbox: Rect,
    /// Area of its interior
    pub area: f64,
    /// Decomposition into triangles, only present if the polygon is concave.
    /// Convex polygons are their own (single) piece.
    pub convex_pieces: Option<Vec<[Point; 3]>>,
}

impl SPolygon {
    /// Create a new simple polygon from a set of points, the triangulation of concave polygons is performed here!
    /// Use [Self::clone()] or [Self::transform()] to avoid recomputation.
    pub fn new(mut points: Vec<Point>) -> Result<Self> {
        if points.len() < 3 {
            bail!("Simple polygon must have at least 3 points: {points:?}");
        }
        if points.iter().unique().count() != points.len() {
            bail!("Simple polygon should not contain duplicate points: {points:?}");
        }
        if points.iter().any(|p| !p.0.is_finite() || !p.1.is_finite()) {
            bail!("Simple polygon contains non-finite coordinates: {points:?}");
        }

        let area = match SPolygon::calculate_area(&points) {
            area if FPA(area) == FPA(0.0) => bail!("Simple polygon has no area: {points:?}"),
            area if area < 0.0 => {
                //edges should always be ordered counterclockwise (positive area)
                points.reverse();
                -area
            }
            area => area,
        };
        if !SPolygon::calculate_simplicity(&points) {
            bail!("Simple polygon intersects itself: {points:?}");
        }

        let bbox = SPolygon::generate_bounding_box(&points);
        let convex_pieces = match SPolygon::calculate_convexity(&points) {
            true => None,
            false => Some(triangulate(&points)),
        };

        Ok(SPolygon {
            vertices: points,
            bbox,
            area,
            convex_pieces,
        })
    }

    pub fn vertex(&self, i: usize) -> Point {
        self.vertices[i]
    }

    pub fn edge(&self, i: usize) -> Edge {
        let j = (i + 1) % self.n_vertices();
        //vertices are unique, so no edge is degenerate
        Edge {
            start: self.vertices[i],
            end: self.vertices[j],
        }
    }

    pub fn edge_iter(&self) -> impl Iterator<Item = Edge> + '_ {
        (0..self.n_vertices()).map(move |i| self.edge(i))
    }

    pub fn n_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_convex(&self) -> bool {
        self.convex_pieces.is_none()
    }

    /// Iterates over convex pieces whose union is the polygon.
    pub fn convex_piece_iter(&self) -> Box<dyn Iterator<Item = &[Point]> + '_> {
        match &self.convex_pieces {
            None => Box::new(std::iter::once(self.vertices.as_slice())),
            Some(triangles) => Box::new(triangles.iter().map(|t| t.as_slice())),
        }
    }

    pub fn generate_bounding_box(points: &[Point]) -> Rect {
        let (mut x_min, mut y_min) = (f64::MAX, f64::MAX);
        let (mut x_max, mut y_max) = (f64::MIN, f64::MIN);

        for point in points.iter() {
            x_min = x_min.min(point.0);
            y_min = y_min.min(point.1);
            x_max = x_max.max(point.0);
            y_max = y_max.max(point.1);
        }
        Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    //https://en.wikipedia.org/wiki/Shoelace_formula
    //counterclockwise = positive area, clockwise = negative area
    pub fn calculate_area(points: &[Point]) -> f64 {
        let mut sigma: f64 = 0.0;
        for i in 0..points.len() {
            //next point
            let j = (i + 1) % points.len();

            let (x_i, y_i) = points[i].into();
            let (x_j, y_j) = points[j].into();

            sigma += (y_i + y_j) * (x_i - x_j)
        }

        0.5 * sigma
    }

    /// Checks that no two non-adjacent edges touch or cross.
    pub fn calculate_simplicity(points: &[Point]) -> bool {
        let n = points.len();
        let edges = edges_of(points).collect_vec();
        (0..n).tuple_combinations().all(|(i, j)| {
            let adjacent = j == i + 1 || (i == 0 && j == n - 1);
            adjacent || !edges[i].collides_with(&edges[j])
        })
    }

    /// Points must be ordered counterclockwise. Collinear vertices do not break convexity.
    pub fn calculate_convexity(points: &[Point]) -> bool {
        let n = points.len();
        (0..n).all(|i| {
            let (prev, curr, next) = (points[(i + n - 1) % n], points[i], points[(i + 1) % n]);
            FPA(prev.cross(&curr, &next)) >= FPA(0.0)
        })
    }
}

impl Shape for SPolygon {
    fn centroid(&self) -> Point {
        //based on: https://en.wikipedia.org/wiki/Centroid#Of_a_polygon
        let area = self.area;
        let mut c_x = 0.0;
        let mut c_y = 0.0;

        for i in 0..self.n_vertices() {
            let j = if i == self.n_vertices() - 1 { 0 } else { i + 1 };
            let Point(x_i, y_i) = self.vertex(i);
            let Point(x_j, y_j) = self.vertex(j);
            c_x += (x_i + x_j) * (x_i * y_j - x_j * y_i);
            c_y += (y_i + y_j) * (x_i * y_j - x_j * y_i);
        }

        c_x /= 6.0 * area;
        c_y /= 6.0 * area;

        (c_x, c_y).into()
    }

    fn area(&self) -> f64 {
        self.area
    }

    fn bbox(&self) -> Rect {
        self.bbox
    }
}

impl Transformable for SPolygon {
    fn transform(&mut self, t: &Transformation) -> &mut Self {
        //destructuring pattern to ensure that the code is updated when the struct changes
        let SPolygon {
            vertices: points,
            bbox,
            area: _,
            convex_pieces,
        } = self;

        //transform all points of the simple poly
        points.iter_mut().for_each(|p| {
            p.transform(t);
        });

        //transform the decomposition
        if let Some(triangles) = convex_pieces.as_mut() {
            triangles.iter_mut().flatten().for_each(|p| {
                p.transform(t);
            });
        }

        //regenerate bounding box
        *bbox = SPolygon::generate_bounding_box(points);

        self
    }
}

impl TransformableFrom for SPolygon {
    fn transform_from(&mut self, reference: &Self, t: &Transformation) -> &mut Self {
        //destructuring pattern to ensure that the code is updated when the struct changes
        let SPolygon {
            vertices: points,
            bbox,
            area: _,
            convex_pieces,
        } = self;

        for (p, ref_p) in points.iter_mut().zip(&reference.vertices) {
            p.transform_from(ref_p, t);
        }

        if let (Some(triangles), Some(ref_triangles)) =
            (convex_pieces.as_mut(), reference.convex_pieces.as_ref())
        {
            for (p, ref_p) in triangles
                .iter_mut()
                .flatten()
                .zip(ref_triangles.iter().flatten())
            {
                p.transform_from(ref_p, t);
            }
        }

        //regenerate bounding box
        *bbox = SPolygon::generate_bounding_box(points);

        self
    }
}

impl CollidesWith<Point> for SPolygon {
    /// Points on the border (within tolerance) are considered colliding.
    fn collides_with(&self, point: &Point) -> bool {
        if !self.bbox.almost_contains_point(point) {
            return false;
        }
        if self
            .edge_iter()
            .any(|e| FPA(e.distance_to(point)) == FPA(0.0))
        {
            return true;
        }
        //crossing number: https://en.wikipedia.org/wiki/Point_in_polygon#Ray_casting_algorithm
        let Point(px, py) = *point;
        let mut inside = false;
        for Edge {
            start: Point(x_i, y_i),
            end: Point(x_j, y_j),
        } in self.edge_iter()
        {
            if (y_i > py) != (y_j > py) {
                let x_cross = x_i + (py - y_i) * (x_j - x_i) / (y_j - y_i);
                if px < x_cross {
                    inside = !inside;
                }
            }
        }
        inside
    }
}

impl DistanceTo<Point> for SPolygon {
    fn distance_to(&self, point: &Point) -> f64 {
        self.sq_distance_to(point).sqrt()
    }

    fn sq_distance_to(&self, point: &Point) -> f64 {
        match self.collides_with(point) {
            true => 0.0,
            false => self
                .edge_iter()
                .map(|edge| OrderedFloat(edge.sq_distance_to(point)))
                .min()
                .map_or(f64::MAX, |d| d.0),
        }
    }
}

impl Overlaps<SPolygon> for SPolygon {
    fn overlaps(&self, other: &SPolygon) -> bool {
        if !self.bbox.overlaps(&other.bbox) {
            return false;
        }
        //the interiors share area if and only if a pair of convex pieces does
        self.convex_piece_iter().any(|piece_a| {
            other
                .convex_piece_iter()
                .any(|piece_b| convex_pieces_overlap(piece_a, piece_b))
        })
    }
}

impl Overlaps<Circle> for SPolygon {
    fn overlaps(&self, other: &Circle) -> bool {
        other.overlaps(self)
    }
}

/// Separating axis test for two convex, counterclockwise point sets.
/// Projections that only touch (within tolerance) count as separated.
fn convex_pieces_overlap(a: &[Point], b: &[Point]) -> bool {
    let axes = edges_of(a).chain(edges_of(b)).map(|e| e.outward_normal());
    for axis in axes {
        let (a_min, a_max) = project(a, &axis);
        let (b_min, b_max) = project(b, &axis);
        if FPA(a_max) <= FPA(b_min) || FPA(b_max) <= FPA(a_min) {
            return false;
        }
    }
    true
}

fn edges_of(points: &[Point]) -> impl Iterator<Item = Edge> + '_ {
    let n = points.len();
    (0..n).map(move |i| Edge {
        start: points[i],
        end: points[(i + 1) % n],
    })
}

fn project(points: &[Point], axis: &Point) -> (f64, f64) {
    points
        .iter()
        .map(|p| p.dot(axis))
        .fold((f64::MAX, f64::MIN), |(min, max), d| {
            (min.min(d), max.max(d))
        })
}

impl<T> From<T> for SPolygon
where
    T: Borrow<Rect>,
{
    fn from(r: T) -> Self {
        let r = r.borrow();
        let vertices = r.corners().to_vec();
        let area = r.area();
        SPolygon {
            vertices,
            bbox: *r,
            area,
            convex_pieces: None,
        }
    }
}
