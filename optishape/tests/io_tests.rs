#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;

    use optishape::engine::NestingEngine;
    use optishape::entities::PartKind;
    use optishape::io::ext_repr::{ExtFinalShape, ExtInstance};
    use optishape::io::{export, import};
    use optishape::util::{NestConfig, SortKey, StrategyKind};

    const INSTANCE: &str = r#"{
        "name": "io",
        "sheet": { "width": 100, "height": 50 },
        "parts": [
            { "id": 0, "shape": { "type": "rectangle", "data": { "width": 30, "height": 20 } }, "allowed_rotations": [0] },
            { "id": 1, "shape": { "type": "circle", "data": { "radius": 5 } }, "allowed_rotations": [0] },
            { "id": 2, "shape": { "type": "parallelogram", "data": { "base": 10, "height": 5, "skew": 90 } } },
            { "id": 3, "shape": { "type": "polygon", "data": [[0, 0], [4, 0], [2, 3]] } }
        ]
    }"#;

    #[test]
    fn instance_is_imported_in_input_order() {
        let ext_instance: ExtInstance = serde_json::from_str(INSTANCE).unwrap();
        let (sheet, parts) = import::import_instance(&ext_instance).unwrap();

        assert_eq!((sheet.width(), sheet.height()), (100.0, 50.0));
        assert_eq!(parts.iter().map(|p| p.id).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        assert_eq!(parts[1].kind, PartKind::Circle { radius: 5.0 });
        assert_eq!(parts[0].allowed_rotations, Some(vec![0.0]));
        assert_eq!(parts[3].allowed_rotations, None);
    }

    #[test]
    fn exported_solution_reports_final_outlines() {
        let ext_instance: ExtInstance = serde_json::from_str(INSTANCE).unwrap();
        let (sheet, parts) = import::import_instance(&ext_instance).unwrap();
        let engine = NestingEngine::new(sheet, NestConfig::default()).unwrap();
        let solution = export::export_solution(&engine.nest(&parts).unwrap());

        assert_eq!(solution.rejected.len(), 1);
        assert_eq!(solution.rejected[0].part_id, 2);
        assert_eq!(solution.placed.len(), 3);

        //largest part first, in the lower-left corner
        let rect = &solution.placed[0];
        assert_eq!(rect.part_id, 0);
        assert_eq!(rect.offset, (0.0, 0.0));

        //the circle touches the rectangle's right edge
        let circle = &solution.placed[1];
        assert_eq!(circle.part_id, 1);
        assert_eq!(circle.offset, (30.0, 0.0));
        match circle.final_shape {
            ExtFinalShape::Circle { center, radius } => {
                assert!(approx_eq!(f64, center.0, 35.0));
                assert!(approx_eq!(f64, center.1, 5.0));
                assert!(approx_eq!(f64, radius, 5.0));
            }
            ExtFinalShape::Polygon(_) => panic!("circle exported as polygon"),
        }

        let json = serde_json::to_value(&solution).unwrap();
        assert_eq!(json["placed"][1]["final_shape"]["type"], "circle");
        assert_eq!(json["metrics"]["total_count"], 4);
    }

    #[test]
    fn missing_config_fields_take_defaults() {
        let config: NestConfig =
            serde_json::from_str(r#"{ "strategy": "guillotine", "sort_key": "bbox_area_desc" }"#)
                .unwrap();
        assert_eq!(config.strategy, StrategyKind::Guillotine);
        assert_eq!(config.sort_key, SortKey::BboxAreaDesc);
        assert_eq!(config.default_rotations, NestConfig::default().default_rotations);
    }
}
