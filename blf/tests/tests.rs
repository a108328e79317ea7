#[cfg(test)]
mod tests {
    use std::path::Path;

    use test_case::test_case;

    use blf::config::BLFConfig;
    use blf::io;
    use blf::io::export::export_solution;
    use blf::io::import::import_scenario;
    use blf::io::svg_export::{SvgDrawOptions, View, session_to_svg};
    use blf::stuff::Stuffer;
    use stowage::util::assertions;

    fn init_test_logger() {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .try_init();
    }

    #[test_case("../assets/20ft_mixed.json"; "20ft mixed")]
    #[test_case("../assets/40ft_barrels.json"; "40ft barrels")]
    #[test_case("../assets/high_cube_dense.json"; "high cube dense")]
    fn stuff_scenario(scenario_path: &str) {
        init_test_logger();

        let scenario = io::read_scenario(Path::new(scenario_path)).unwrap();
        let (container, items) = import_scenario(&scenario).unwrap();
        let total_units: usize = items.iter().map(|(_, qty)| qty).sum();

        let mut stuffer = Stuffer::new(container, BLFConfig::default());
        let report = stuffer.run(&items);

        assert_eq!(report.placed + report.rejected.len(), total_units);
        assert!(report.placed > 0, "no unit of the scenario was placed");

        let session = &stuffer.session;
        assert!(assertions::placements_disjoint(session.placed_items()));
        assert!(assertions::placements_within_container(
            session.placed_items(),
            session.container.dims
        ));
        assert!(assertions::volume_tally_matches(
            session.placed_items(),
            session.used_volume()
        ));
        assert!(session.utilization() <= 100);

        let solution = export_solution(session, &report);
        assert_eq!(solution.placed_items.len(), report.placed);
        assert_eq!(
            solution.used_volume + solution.remaining_volume,
            solution.total_volume
        );

        for view in [View::Top, View::Side] {
            let doc = session_to_svg(session, view, SvgDrawOptions::default());
            let rendered = doc.to_string();
            assert!(rendered.contains("container_"));
        }
    }

    #[test]
    fn oversized_unit_is_reported_not_dropped_silently() {
        init_test_logger();

        let scenario = io::read_scenario(Path::new("../assets/20ft_mixed.json")).unwrap();
        let (container, items) = import_scenario(&scenario).unwrap();

        let mut stuffer = Stuffer::new(container, BLFConfig::default());
        let report = stuffer.run(&items);

        // the machine crate exceeds the envelope in every orientation
        assert!(report.rejected.contains(&"p-machine-crate".to_string()));
    }

    #[test]
    fn identical_runs_produce_identical_solutions() {
        init_test_logger();

        let scenario = io::read_scenario(Path::new("../assets/40ft_barrels.json")).unwrap();

        let solutions: Vec<_> = (0..2)
            .map(|_| {
                let (container, items) = import_scenario(&scenario).unwrap();
                let mut stuffer = Stuffer::new(container, BLFConfig::default());
                let report = stuffer.run(&items);
                export_solution(&stuffer.session, &report)
            })
            .collect();

        let positions = |s: &blf::io::ext_repr::ExtSolution| {
            s.placed_items
                .iter()
                .map(|pi| (pi.item_id.clone(), pi.position, pi.rotation))
                .collect::<Vec<_>>()
        };
        assert_eq!(positions(&solutions[0]), positions(&solutions[1]));
        assert_eq!(solutions[0].used_volume, solutions[1].used_volume);
    }

    #[test]
    fn zero_quantity_items_are_rejected_at_import() {
        init_test_logger();

        let mut scenario = io::read_scenario(Path::new("../assets/20ft_mixed.json")).unwrap();
        scenario.items[0].quantity = 0;
        assert!(import_scenario(&scenario).is_err());
    }
}
