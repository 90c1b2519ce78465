use svg::Document;
use svg::node::element::{Group, Text, Title};

use optishape::engine::NestingSolution;
use optishape::entities::Sheet;
use optishape::geometry::geo_traits::Shape;
use optishape::geometry::primitives::Rect;

use crate::io::svg_export;
use crate::io::svg_util::SvgDrawOptions;

/// Draws the sheet and every placed part of a solution.
/// Coordinates are written as-is: the sheet's y axis points down in the rendered image.
pub fn solution_to_svg(sheet: &Sheet, solution: &NestingSolution, options: SvgDrawOptions) -> Document {
    let sheet_rect = sheet.rect();
    let vbox = scaled_view_box(&sheet_rect, 1.05);

    let colors = options.theme.colors();
    let stroke_width = f64::min(vbox.width(), vbox.height()) * 0.001 * colors.stroke_width_multiplier;

    //draw sheet
    let sheet_group = Group::new()
        .set("id", "sheet")
        .add(
            svg_export::data_to_path(
                svg_export::rect_data(&sheet_rect),
                &[
                    ("fill", colors.sheet_fill),
                    ("stroke", "black"),
                    ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
                ],
            )
            .add(Title::new(format!(
                "sheet, width: {:.3}, height: {:.3}",
                sheet.width(),
                sheet.height()
            ))),
        );

    //draw parts
    let mut parts_group = Group::new().set("id", "parts");
    for pp in solution.placed.iter() {
        let (dx, dy) = pp.offset();
        let title = Title::new(format!(
            "part, id: {}, rotation: {:.3}, offset: ({:.3}, {:.3})",
            pp.part_id, pp.rotation, dx, dy
        ));
        let mut part_group = Group::new()
            .set("id", format!("part_{}", pp.part_id))
            .add(title)
            .add(svg_export::outline(
                &pp.shape,
                &[
                    ("fill", colors.part_fill),
                    ("fill-opacity", "0.90"),
                    ("stroke", "black"),
                    ("stroke-width", &*format!("{stroke_width}")),
                ],
            ));
        if options.bboxes {
            part_group = part_group.add(svg_export::data_to_path(
                svg_export::rect_data(&pp.shape.bbox()),
                &[
                    ("fill", "none"),
                    ("stroke", colors.bbox_stroke),
                    ("stroke-width", &*format!("{stroke_width}")),
                    ("stroke-dasharray", &*format!("{}", 3.0 * stroke_width)),
                ],
            ));
        }
        if options.labels {
            let centroid = pp.shape.centroid();
            let font_size = f64::min(pp.shape.bbox().width(), pp.shape.bbox().height()) * 0.3;
            part_group = part_group.add(
                Text::new(format!("{}", pp.part_id))
                    .set("x", centroid.x())
                    .set("y", centroid.y())
                    .set("font-size", font_size)
                    .set("font-family", "monospace")
                    .set("text-anchor", "middle")
                    .set("dominant-baseline", "middle"),
            );
        }
        parts_group = parts_group.add(part_group);
    }

    let metrics = &solution.metrics;
    let label = Text::new(format!(
        "placed: {}/{} | utilization: {:.2}% | rejected: {}",
        metrics.placed_count,
        metrics.total_count,
        metrics.utilization * 100.0,
        metrics.rejected_count
    ))
    .set("x", vbox.x_min + vbox.width() * 0.01)
    .set("y", vbox.y_min + vbox.height() * 0.015)
    .set("font-size", vbox.height() * 0.015)
    .set("font-family", "monospace")
    .set("dominant-baseline", "middle");

    Document::new()
        .set(
            "viewBox",
            (vbox.x_min, vbox.y_min, vbox.width(), vbox.height()),
        )
        .add(sheet_group)
        .add(parts_group)
        .add(label)
}

/// Grows `rect` around its center by `factor`
fn scaled_view_box(rect: &Rect, factor: f64) -> Rect {
    let dx = rect.width() * (factor - 1.0) / 2.0;
    let dy = rect.height() * (factor - 1.0) / 2.0;
    Rect {
        x_min: rect.x_min - dx,
        y_min: rect.y_min - dy,
        x_max: rect.x_max + dx,
        y_max: rect.y_max + dy,
    }
}
