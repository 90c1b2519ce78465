#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use float_cmp::approx_eq;
    use test_case::test_case;

    use optishape::geometry::geo_traits::{Overlaps, Shape, Transformable};
    use optishape::geometry::primitives::{Circle, Point, Rect, SPolygon};
    use optishape::geometry::{Outline, Transformation};

    fn poly(raw: &[(f64, f64)]) -> SPolygon {
        SPolygon::new(raw.iter().map(|&p| p.into()).collect()).unwrap()
    }

    fn square(x: f64, y: f64, side: f64) -> SPolygon {
        SPolygon::from(Rect::from_xywh(x, y, side, side).unwrap())
    }

    fn l_shape() -> SPolygon {
        poly(&[
            (0.0, 0.0),
            (20.0, 0.0),
            (20.0, 10.0),
            (10.0, 10.0),
            (10.0, 30.0),
            (0.0, 30.0),
        ])
    }

    #[test_case(&[(0.0, 0.0), (10.0, 0.0), (5.0, 8.0)], 40.0; "small triangle")]
    #[test_case(&[(0.0, 0.0), (20.0, 0.0), (10.0, 15.0)], 150.0; "medium triangle")]
    #[test_case(&[(0.0, 0.0), (15.0, 0.0), (7.0, 12.0)], 90.0; "large triangle")]
    #[test_case(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)], 100.0; "clockwise square")]
    fn shoelace_area(points: &[(f64, f64)], expected: f64) {
        let p = poly(points);
        assert!(approx_eq!(f64, p.area(), expected, epsilon = 1e-9));
        //winding is normalized to counterclockwise
        assert!(SPolygon::calculate_area(&p.vertices) > 0.0);
    }

    #[test]
    fn bounding_box_of_polygon_and_circle() {
        let p = poly(&[(0.0, 0.0), (15.0, 0.0), (7.0, 12.0)]);
        assert_eq!(p.bbox(), Rect::from_xywh(0.0, 0.0, 15.0, 12.0).unwrap());

        let c = Circle::try_new(Point(5.0, 5.0), 5.0).unwrap();
        assert!(approx_eq!(f64, c.bbox().width(), 10.0));
        assert!(approx_eq!(f64, c.bbox().height(), 10.0));
    }

    #[test_case(0.0; "0 degrees")]
    #[test_case(37.5; "37.5 degrees")]
    #[test_case(90.0; "90 degrees")]
    #[test_case(123.0; "123 degrees")]
    #[test_case(270.0; "270 degrees")]
    fn rotation_preserves_area(angle: f64) {
        let l = l_shape();
        let t = Transformation::from_rotation(angle.to_radians()).translate((3.0, -7.0));
        let rotated = l.transform_clone(&t);
        let recomputed = SPolygon::calculate_area(&rotated.vertices);
        assert!(approx_eq!(f64, recomputed, l.area(), epsilon = 1e-9));
        //the triangulation moves along with the outline
        let triangles = rotated.convex_pieces.as_ref().unwrap();
        let sum: f64 = triangles.iter().map(|t| SPolygon::calculate_area(t)).sum();
        assert!(approx_eq!(f64, sum, l.area(), epsilon = 1e-9));
    }

    #[test]
    fn four_quarter_turns_are_exact() {
        let original = poly(&[(0.0, 0.0), (15.0, 0.0), (7.0, 12.0)]);
        let mut p = original.clone();
        let quarter = Transformation::empty().rotate(FRAC_PI_2);
        for _ in 0..4 {
            p.transform(&quarter);
        }
        assert_eq!(p.vertices, original.vertices);
    }

    #[test]
    fn rotation_about_pivot() {
        //a quarter turn about the center of a square maps it onto itself
        let sq = square(10.0, 10.0, 10.0);
        let t = Transformation::empty().rotate_about(FRAC_PI_2, (15.0, 15.0));
        let rotated = sq.transform_clone(&t);
        assert_eq!(rotated.bbox, sq.bbox);

        //about the origin it ends up in the second quadrant
        let rotated = sq.transform_clone(&Transformation::from_rotation(FRAC_PI_2));
        assert_eq!(rotated.bbox, Rect::from_xywh(-20.0, 10.0, 10.0, 10.0).unwrap());
    }

    #[test]
    fn shared_edge_is_not_an_overlap() {
        let a = square(0.0, 0.0, 10.0);
        let b = square(10.0, 0.0, 10.0);
        assert!(!a.overlaps(&b));
        assert!(!a.bbox.overlaps(&b.bbox));

        let c = square(5.0, 5.0, 10.0);
        assert!(a.overlaps(&c));
        assert!(c.overlaps(&a));
    }

    #[test]
    fn bounding_boxes_overlap_where_outlines_do_not() {
        let a = poly(&[(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)]);
        let b = poly(&[(10.0, 10.0), (1.0, 10.0), (10.0, 1.0)]);
        assert!(a.bbox.overlaps(&b.bbox));
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn complementary_triangles_touch_along_the_diagonal() {
        let a = poly(&[(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)]);
        let b = poly(&[(10.0, 10.0), (0.0, 10.0), (10.0, 0.0)]);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn concave_polygon_notch_is_free() {
        let l = l_shape();
        assert!(!l.is_convex());
        let in_notch = square(10.0, 10.0, 10.0);
        assert!(!l.overlaps(&in_notch));
        assert!(!in_notch.overlaps(&l));

        let across = square(5.0, 5.0, 10.0);
        assert!(l.overlaps(&across));
    }

    #[test]
    fn circle_overlaps() {
        let sq = Outline::Polygon(square(0.0, 0.0, 10.0));
        let touching = Outline::Circle(Circle::try_new(Point(15.0, 5.0), 5.0).unwrap());
        let inside = Outline::Circle(Circle::try_new(Point(5.0, 5.0), 2.0).unwrap());
        let crossing = Outline::Circle(Circle::try_new(Point(12.0, 5.0), 5.0).unwrap());
        let corner = Outline::Circle(Circle::try_new(Point(14.0, 14.0), 5.0).unwrap());

        assert!(!sq.overlaps(&touching));
        assert!(sq.overlaps(&inside));
        assert!(inside.overlaps(&sq));
        assert!(sq.overlaps(&crossing));
        //bounding boxes overlap, the disk stays clear of the corner
        assert!(!corner.overlaps(&sq));

        let tangent = Outline::Circle(Circle::try_new(Point(25.0, 5.0), 5.0).unwrap());
        assert!(!touching.overlaps(&tangent));
        assert!(crossing.overlaps(&touching));
    }

    #[test]
    fn containment_in_sheet() {
        let sheet = Rect::from_xywh(0.0, 0.0, 100.0, 50.0).unwrap();
        assert!(Outline::Polygon(square(90.0, 40.0, 10.0)).contained_in(&sheet));
        assert!(!Outline::Polygon(square(91.0, 40.0, 10.0)).contained_in(&sheet));
        assert!(!Outline::Circle(Circle::try_new(Point(3.0, 25.0), 5.0).unwrap()).contained_in(&sheet));
    }

    #[test]
    fn degenerate_polygons_are_refused() {
        let collinear: Vec<Point> = vec![(0.0, 0.0).into(), (5.0, 0.0).into(), (10.0, 0.0).into()];
        assert!(SPolygon::new(collinear).is_err());
        let two: Vec<Point> = vec![(0.0, 0.0).into(), (5.0, 0.0).into()];
        assert!(SPolygon::new(two).is_err());
        let bow_tie: Vec<Point> = vec![(0.0, 0.0).into(), (10.0, 10.0).into(), (10.0, 0.0).into(), (0.0, 4.0).into()];
        assert!(SPolygon::new(bow_tie).is_err());
    }
}
