#[cfg(test)]
mod tests {
    use std::path::Path;

    use float_cmp::approx_eq;
    use test_case::test_case;

    use ffd::config::FFDConfig;
    use ffd::ffd_optimizer::FFDOptimizer;
    use ffd::io;
    use ffd::io::layout_to_svg::solution_to_svg;
    use ffd::io::output::FFDOutput;
    use optishape::geometry::geo_traits::Shape;
    use optishape::io::export;
    use optishape::util::{NestConfig, StrategyKind, assertions};

    #[test_case("assets/three_triangles.json"; "three_triangles")]
    #[test_case("assets/small_triangles.json"; "small_triangles")]
    #[test_case("assets/mixed_shapes.json"; "mixed_shapes")]
    #[test_case("assets/quadrilaterals.json"; "quadrilaterals")]
    #[test_case("assets/parallelograms.json"; "parallelograms")]
    fn test_instance(instance_path: &str) {
        let _ = env_logger::builder().is_test(true).try_init();
        let ext_instance = io::read_instance(Path::new(instance_path)).unwrap();

        for strategy in [
            StrategyKind::Exhaustive,
            StrategyKind::Guillotine,
            StrategyKind::Shelf,
        ] {
            let config = FFDConfig {
                nest: NestConfig {
                    strategy,
                    ..NestConfig::default()
                },
                ..FFDConfig::default()
            };
            let optimizer = FFDOptimizer::new(&ext_instance, &config.nest).unwrap();
            let solution = optimizer.solve().unwrap();

            assert!(assertions::layout_is_contained(&optimizer.sheet, &solution.placed));
            assert!(assertions::layout_has_no_overlap(&solution.placed));
            assert!(assertions::outcomes_partition_input(
                ext_instance.parts.len(),
                &solution
            ));

            let placed_area: f64 = solution.placed.iter().map(|pp| pp.shape.area()).sum();
            assert!(approx_eq!(
                f64,
                solution.metrics.placed_area,
                placed_area,
                epsilon = 1e-6
            ));
            assert!((0.0..=1.0).contains(&solution.metrics.utilization));

            let output = FFDOutput {
                instance: ext_instance.clone(),
                solution: export::export_solution(&solution),
                config: config.clone(),
                run_time_ms: 0,
            };
            let json = serde_json::to_string(&output).unwrap();
            let parsed: FFDOutput = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed.solution.placed.len(), solution.placed.len());
            assert_eq!(parsed.instance.parts.len(), ext_instance.parts.len());

            let svg = solution_to_svg(&optimizer.sheet, &solution, config.svg_draw_options);
            assert!(svg.to_string().contains("viewBox"));
        }
    }

    #[test]
    fn skew_of_ninety_degrees_is_rejected() {
        let ext_instance = io::read_instance(Path::new("assets/parallelograms.json")).unwrap();
        let optimizer = FFDOptimizer::new(&ext_instance, &NestConfig::default()).unwrap();
        let solution = optimizer.solve().unwrap();

        let rejected = solution.rejected.iter().map(|r| r.part_id).collect::<Vec<_>>();
        assert_eq!(rejected, vec![4]);
        assert_eq!(solution.metrics.total_count, 5);

        let ext_solution = export::export_solution(&solution);
        assert_eq!(ext_solution.rejected.len(), 1);
        assert!(ext_solution.rejected[0].reason.contains("skew"));
    }

    #[test]
    fn three_triangles_are_all_placed() {
        let ext_instance = io::read_instance(Path::new("assets/three_triangles.json")).unwrap();
        let optimizer = FFDOptimizer::new(&ext_instance, &NestConfig::default()).unwrap();
        let solution = optimizer.solve().unwrap();

        assert_eq!(solution.placed.len(), 3);
        assert!(solution.unplaced.is_empty());
        //areas 1000 + 900 + 700 on a 100x100 sheet
        assert!(approx_eq!(f64, solution.metrics.utilization, 0.26, epsilon = 1e-9));
    }

    #[test]
    fn config_file_fields_default_when_missing() {
        let config: FFDConfig = serde_json::from_str(r#"{"nest": {"strategy": "shelf"}}"#).unwrap();
        assert_eq!(config.nest.strategy, StrategyKind::Shelf);
        assert_eq!(config.nest.step_size, NestConfig::default().step_size);
        assert_eq!(config.svg_draw_options, FFDConfig::default().svg_draw_options);
    }
}
