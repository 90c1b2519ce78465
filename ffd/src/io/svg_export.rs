use svg::node::element::path::Data;
use svg::node::element::{Circle, Path};

use optishape::geometry::Outline;
use optishape::geometry::primitives::{Rect, SPolygon};

pub fn simple_polygon_data(s_poly: &SPolygon) -> Data {
    let mut data = Data::new().move_to::<(f64, f64)>(s_poly.vertex(0).into());
    for i in 1..s_poly.n_vertices() {
        data = data.line_to::<(f64, f64)>(s_poly.vertex(i).into());
    }
    data.close()
}

pub fn rect_data(rect: &Rect) -> Data {
    Data::new()
        .move_to((rect.x_min, rect.y_min))
        .line_to((rect.x_max, rect.y_min))
        .line_to((rect.x_max, rect.y_max))
        .line_to((rect.x_min, rect.y_max))
        .close()
}

pub fn data_to_path(data: Data, params: &[(&str, &str)]) -> Path {
    let mut path = Path::new();
    for param in params {
        path = path.set(param.0, param.1)
    }
    path.set("d", data)
}

pub fn circle(circle: &optishape::geometry::primitives::Circle, params: &[(&str, &str)]) -> Circle {
    let mut circle = Circle::new()
        .set("cx", circle.center.0)
        .set("cy", circle.center.1)
        .set("r", circle.radius);
    for param in params {
        circle = circle.set(param.0, param.1)
    }
    circle
}

/// Converts an outline into an svg node, a path for polygons and a circle element for circles.
pub fn outline(outline: &Outline, params: &[(&str, &str)]) -> Box<dyn svg::Node> {
    match outline {
        Outline::Polygon(p) => Box::new(data_to_path(simple_polygon_data(p), params)),
        Outline::Circle(c) => Box::new(circle(c, params)),
    }
}
