use crate::geometry::primitives::Point;
use crate::util::FPA;

/// Decomposes a simple, counterclockwise polygon into triangles by ear clipping.
///
/// Every returned triangle is counterclockwise and has positive area.
/// Collinear vertices are dropped along the way, they do not contribute any area.
/// Runs in O(n³) in the worst case, which is irrelevant for the vertex counts of typical parts.
pub fn triangulate(points: &[Point]) -> Vec<[Point; 3]> {
    let mut remaining = points.to_vec();
    let mut triangles = Vec::with_capacity(points.len().saturating_sub(2));

    while remaining.len() > 3 {
        let n = remaining.len();
        let ear = (0..n).find(|&i| is_ear(&remaining, i));
        match ear {
            Some(i) => {
                let (prev, curr, next) = neighbours(&remaining, i);
                if FPA(prev.cross(&curr, &next)) > FPA(0.0) {
                    triangles.push([prev, curr, next]);
                }
                remaining.remove(i);
            }
            None => {
                //no strict ear left: the remaining chain contains collinear vertices, drop one
                match (0..n).find(|&i| {
                    let (prev, curr, next) = neighbours(&remaining, i);
                    FPA(prev.cross(&curr, &next)) == FPA(0.0)
                }) {
                    Some(i) => {
                        remaining.remove(i);
                    }
                    //only reachable for self-intersecting input
                    None => break,
                }
            }
        }
    }

    if remaining.len() == 3 {
        let [a, b, c] = [remaining[0], remaining[1], remaining[2]];
        if FPA(a.cross(&b, &c)) > FPA(0.0) {
            triangles.push([a, b, c]);
        }
    }

    triangles
}

fn neighbours(points: &[Point], i: usize) -> (Point, Point, Point) {
    let n = points.len();
    (points[(i + n - 1) % n], points[i], points[(i + 1) % n])
}

fn is_ear(points: &[Point], i: usize) -> bool {
    let (prev, curr, next) = neighbours(points, i);
    if FPA(prev.cross(&curr, &next)) <= FPA(0.0) {
        //reflex or collinear corner
        return false;
    }
    //no other vertex may lie inside or on the candidate triangle
    points
        .iter()
        .filter(|p| **p != prev && **p != curr && **p != next)
        .all(|p| !in_triangle(p, &prev, &curr, &next))
}

fn in_triangle(p: &Point, a: &Point, b: &Point, c: &Point) -> bool {
    FPA(a.cross(b, p)) >= FPA(0.0) && FPA(b.cross(c, p)) >= FPA(0.0) && FPA(c.cross(a, p)) >= FPA(0.0)
}
