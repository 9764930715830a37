#[cfg(test)]
mod tests {
    use anyhow::Result;
    use float_cmp::approx_eq;
    use test_case::test_case;

    use panelizer::entities::{
        BoardFootprint, Infeasibility, JumboMultiplier, LayoutCandidate, PanelOption,
        PlacementConfig, PlacementConfigBuilder, StyleClass,
    };
    use panelizer::io::ext_repr::ExtPanelCatalog;
    use panelizer::io::import::import_catalog;
    use panelizer::layout::validator;
    use panelizer::util::{MIN_OVERHEAD, assertions};
    use panelizer::{compute_candidates, panelize, summarize};

    fn init_logger() {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .is_test(true)
            .try_init();
    }

    fn panel(id: &str, width: f64, height: f64) -> PanelOption {
        let style = StyleClass::from_letter(id.chars().next().unwrap()).unwrap();
        PanelOption::try_new(id, style, width, height).unwrap()
    }

    /// margins 5mm, gaps 2mm, no kerf
    fn standard_config() -> PlacementConfig {
        PlacementConfig::builder()
            .edge_margins(5.0, 5.0)
            .gaps(2.0, 2.0)
            .build()
            .unwrap()
    }

    fn find(candidates: &[LayoutCandidate], id: &str, rotated: bool) -> LayoutCandidate {
        candidates
            .iter()
            .find(|c| c.panel().id() == id && c.rotated() == rotated)
            .cloned()
            .unwrap_or_else(|| panic!("no candidate for panel {id}, rotated: {rotated}"))
    }

    #[test]
    fn example_1_unrotated_board() -> Result<()> {
        init_logger();
        let board = BoardFootprint::try_new(100.0, 150.0, false)?;
        let panels = [panel("A1", 500.0, 700.0)];

        let candidates = compute_candidates(&board, &panels, &standard_config())?;
        assert_eq!(candidates.len(), 1);

        let c = &candidates[0];
        assert_eq!(c.cols(), 4);
        assert_eq!(c.rows(), 4);
        assert_eq!(c.board_count(), 16);
        assert!(!c.rotated());
        assert!(approx_eq!(f64, c.utilization(), 16.0 * 100.0 * 150.0 / (500.0 * 700.0), ulps = 4));
        assert!((c.utilization() - 0.686).abs() < 1e-3);
        Ok(())
    }

    #[test]
    fn example_2_rotation_is_preferred() -> Result<()> {
        let board = BoardFootprint::try_new(100.0, 150.0, true)?;
        let panels = [panel("A1", 500.0, 700.0)];
        let config = standard_config();

        let candidates = compute_candidates(&board, &panels, &config)?;
        assert_eq!(candidates.len(), 2);

        let rotated = find(&candidates, "A1", true);
        assert_eq!(rotated.cols(), 3);
        assert_eq!(rotated.rows(), 6);
        assert_eq!(rotated.board_count(), 18);
        assert_eq!(rotated.board_width(), 150.0);
        assert_eq!(rotated.board_height(), 100.0);

        let summary = summarize(&candidates, &config);
        let best = summary.best.as_ref().unwrap();
        assert!(best.rotated());
        assert_eq!(best.board_count(), 18);
        assert_eq!(summary.candidates[1].board_count(), 16);
        Ok(())
    }

    #[test]
    fn example_3_board_larger_than_panel() -> Result<()> {
        let board = BoardFootprint::try_new(600.0, 600.0, true)?;
        let panels = [panel("A1", 500.0, 700.0)];
        let config = PlacementConfig::builder().build()?;

        let (candidates, summary) = panelize(&board, &panels, &config)?;

        //a square board is only tried once
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].cols(), 0);
        assert_eq!(candidates[0].board_count(), 0);
        assert_eq!(candidates[0].infeasibility(), Some(Infeasibility::NoColumns));

        assert_eq!(summary.considered, 1);
        assert_eq!(summary.feasible, 0);
        assert!(summary.best.is_none());
        assert!(summary.candidates.is_empty());
        assert_eq!(summary.max_utilization, None);
        assert_eq!(summary.min_utilization, None);
        assert_eq!(summary.message(), "No feasible layouts under current constraints.");
        Ok(())
    }

    #[test]
    fn example_4_result_limit_zero_keeps_best() -> Result<()> {
        let board = BoardFootprint::try_new(100.0, 150.0, true)?;
        let panels = [panel("A1", 500.0, 700.0)];
        let config = PlacementConfig::builder()
            .edge_margins(5.0, 5.0)
            .gaps(2.0, 2.0)
            .result_limit(0)
            .build()?;

        let (_, summary) = panelize(&board, &panels, &config)?;

        assert!(summary.candidates.is_empty());
        assert_eq!(summary.shown, 0);
        assert_eq!(summary.feasible, 2);
        assert_eq!(summary.best.as_ref().map(|b| b.board_count()), Some(18));
        assert!(summary.max_utilization.is_some());
        assert!(summary.min_utilization.is_some());
        assert_eq!(
            summary.message(),
            "Found 2 feasible layouts. Showing top 0 by Utilization."
        );
        Ok(())
    }

    #[test_case(52.0, 76.2, true; "default single pcb")]
    #[test_case(100.0, 150.0, true; "medium board")]
    #[test_case(33.3, 33.3, true; "square board")]
    #[test_case(7.5, 410.0, true; "long strip")]
    #[test_case(420.0, 600.0, false; "barely fits")]
    fn candidates_are_consistent(width: f64, height: f64, allow_rotation: bool) {
        let board = BoardFootprint::try_new(width, height, allow_rotation).unwrap();
        let panels = import_catalog(&ExtPanelCatalog::default()).unwrap();
        let config = PlacementConfig::builder()
            .edge_margins(5.0, 7.0)
            .gaps(2.0, 1.5)
            .kerf(0.2)
            .build()
            .unwrap();

        let (candidates, summary) = panelize(&board, &panels, &config).unwrap();

        for c in &candidates {
            assert!(assertions::candidate_is_consistent(c));
            assert_eq!(c.board_count(), c.rows() * c.cols());
            assert!(c.utilization() >= 0.0 && c.utilization() < 1.0);
            assert_eq!(c.placements().count() as u64, c.board_count());
            assert!(validator::validate(c, &config).is_ok());
        }
        assert!(summary.feasible > 0);
        assert!(assertions::summary_matches_candidates(&summary, &candidates));
    }

    #[test]
    fn exact_fit_without_overhead_fills_the_panel() -> Result<()> {
        let board = BoardFootprint::try_new(100.0, 140.0, false)?;
        let panels = [panel("C1", 500.0, 700.0)];
        let config = PlacementConfig::builder().build()?;

        let candidates = compute_candidates(&board, &panels, &config)?;
        let c = &candidates[0];
        assert_eq!((c.cols(), c.rows()), (5, 5));
        assert!(approx_eq!(f64, c.utilization(), 1.0, ulps = 4));
        assert!(approx_eq!(f64, c.margins().right, 0.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, c.margins().top, 0.0, epsilon = 1e-9));
        Ok(())
    }

    #[test]
    fn rotation_matches_swapped_board() -> Result<()> {
        let panels = import_catalog(&ExtPanelCatalog::default())?;
        let config = standard_config();

        let rotatable = BoardFootprint::try_new(52.0, 76.2, true)?;
        let swapped = BoardFootprint::try_new(76.2, 52.0, false)?;

        let with_rotation = compute_candidates(&rotatable, &panels, &config)?;
        let swapped_candidates = compute_candidates(&swapped, &panels, &config)?;

        for expected in &swapped_candidates {
            let rotated = find(&with_rotation, expected.panel().id(), true);
            assert_eq!(rotated.rows(), expected.rows());
            assert_eq!(rotated.cols(), expected.cols());
            assert_eq!(rotated.board_count(), expected.board_count());
            assert_eq!(rotated.board_width(), expected.board_width());
            assert_eq!(rotated.board_height(), expected.board_height());
            assert_eq!(rotated.utilization(), expected.utilization());
            assert_eq!(rotated.margins(), expected.margins());
        }
        Ok(())
    }

    #[test_case(|b, v| b.gaps(v, 2.0); "gap_w")]
    #[test_case(|b, v| b.gaps(2.0, v); "gap_h")]
    #[test_case(|b, v| b.kerf(v); "kerf")]
    #[test_case(|b, v| b.edge_margins(v, 5.0); "edge_margin_w")]
    #[test_case(|b, v| b.edge_margins(5.0, v); "edge_margin_h")]
    fn overhead_never_increases_board_count(set: fn(PlacementConfigBuilder, f64) -> PlacementConfigBuilder) {
        let board = BoardFootprint::try_new(52.0, 76.2, true).unwrap();
        let panels = import_catalog(&ExtPanelCatalog::default()).unwrap();
        let base = PlacementConfig::builder().edge_margins(5.0, 5.0).gaps(2.0, 2.0);

        let mut previous: Option<Vec<u64>> = None;
        for step in 0..=60 {
            let config = set(base.clone(), step as f64 * 0.5).build().unwrap();
            let counts = compute_candidates(&board, &panels, &config)
                .unwrap()
                .iter()
                .map(|c| c.board_count())
                .collect::<Vec<_>>();
            if let Some(previous) = &previous {
                assert_eq!(previous.len(), counts.len());
                assert!(previous.iter().zip(&counts).all(|(p, c)| c <= p));
            }
            previous = Some(counts);
        }
    }

    #[test]
    fn overhead_keeps_utilization_below_one() -> Result<()> {
        let board = BoardFootprint::try_new(100.0, 100.0, false)?;
        let panels = [panel("A1", 500.0, 500.0)];
        let config = PlacementConfig::builder().kerf(0.001).build()?;

        let candidates = compute_candidates(&board, &panels, &config)?;
        assert!(config.has_overhead());
        assert_eq!(candidates[0].board_count(), 16);
        assert!(candidates[0].utilization() < 1.0);
        Ok(())
    }

    #[test]
    fn identical_inputs_give_identical_output() -> Result<()> {
        let board = BoardFootprint::try_new(52.0, 76.2, true)?;
        let panels = import_catalog(&ExtPanelCatalog::default())?;
        let config = standard_config();

        let (candidates_1, summary_1) = panelize(&board, &panels, &config)?;
        let (candidates_2, summary_2) = panelize(&board, &panels, &config)?;

        assert_eq!(candidates_1, candidates_2);
        assert_eq!(summary_1, summary_2);
        assert_eq!(
            serde_json::to_string(&summary_1)?,
            serde_json::to_string(&summary_2)?
        );
        Ok(())
    }

    #[test]
    fn concurrent_calls_agree() -> Result<()> {
        let board = BoardFootprint::try_new(52.0, 76.2, true)?;
        let panels = import_catalog(&ExtPanelCatalog::default())?;
        let config = standard_config();

        let expected = panelize(&board, &panels, &config)?;
        let results = std::thread::scope(|s| {
            let handles = (0..4)
                .map(|_| s.spawn(|| panelize(&board, &panels, &config)))
                .collect::<Vec<_>>();
            handles
                .into_iter()
                .map(|h| h.join().unwrap())
                .collect::<Result<Vec<_>>>()
        })?;

        assert!(results.iter().all(|r| *r == expected));
        Ok(())
    }

    #[test]
    fn jumbo_variant_wins_tie_on_board_count() -> Result<()> {
        let board = BoardFootprint::try_new(100.0, 150.0, true)?;
        let jumbo = JumboMultiplier::try_new(Some(2.0), None)?;
        let panels = [panel("A1", 500.0, 700.0).with_jumbo_multiplier(jumbo)];
        let config = standard_config();

        let (candidates, summary) = panelize(&board, &panels, &config)?;
        assert_eq!(candidates.len(), 4);

        let jumbo_normal = find(&candidates, "A1-J", false);
        assert_eq!(jumbo_normal.panel().width(), 1000.0);
        assert_eq!(jumbo_normal.panel().height(), 700.0);
        assert_eq!((jumbo_normal.cols(), jumbo_normal.rows()), (9, 4));

        //36 boards on the jumbo and 18 rotated boards on the base panel have the same utilization
        let ranked = summary
            .candidates
            .iter()
            .map(|c| (c.panel().id(), c.rotated(), c.board_count()))
            .collect::<Vec<_>>();
        assert_eq!(
            ranked,
            vec![
                ("A1-J", false, 36),
                ("A1-J", true, 36),
                ("A1", true, 18),
                ("A1", false, 16),
            ]
        );
        Ok(())
    }

    #[test]
    fn panel_id_breaks_remaining_ties() -> Result<()> {
        let board = BoardFootprint::try_new(80.0, 80.0, false)?;
        let panels = [panel("B7", 415.0, 622.5), panel("A9", 415.0, 622.5)];
        let config = standard_config();

        let (_, summary) = panelize(&board, &panels, &config)?;
        let ids = summary
            .candidates
            .iter()
            .map(|c| c.panel().id())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["A9", "B7"]);
        Ok(())
    }

    #[test]
    fn excluded_styles_are_not_considered() -> Result<()> {
        let board = BoardFootprint::try_new(52.0, 76.2, false)?;
        let panels = import_catalog(&ExtPanelCatalog::default())?;
        let config = PlacementConfig::builder()
            .include_styles([StyleClass::B, StyleClass::D])
            .build()?;

        let candidates = compute_candidates(&board, &panels, &config)?;
        assert_eq!(candidates.len(), 8);
        assert!(candidates.iter().all(|c| matches!(
            c.panel().style_class(),
            StyleClass::B | StyleClass::D
        )));

        let nothing = PlacementConfig::builder().include_styles([]).build()?;
        let (candidates, summary) = panelize(&board, &panels, &nothing)?;
        assert!(candidates.is_empty());
        assert!(summary.best.is_none());
        Ok(())
    }

    #[test]
    fn infeasible_candidates_explain_themselves() -> Result<()> {
        let panels = [panel("A1", 500.0, 700.0)];

        let wide_margins = PlacementConfig::builder().edge_margins(250.0, 5.0).build()?;
        let board = BoardFootprint::try_new(10.0, 10.0, false)?;
        let candidates = compute_candidates(&board, &panels, &wide_margins)?;
        assert_eq!(candidates[0].infeasibility(), Some(Infeasibility::NoUsableArea));

        let tall_board = BoardFootprint::try_new(100.0, 800.0, false)?;
        let candidates = compute_candidates(&tall_board, &panels, &standard_config())?;
        assert_eq!(candidates[0].cols(), 4);
        assert_eq!(candidates[0].rows(), 0);
        assert_eq!(candidates[0].infeasibility(), Some(Infeasibility::NoRows));
        assert_eq!(
            candidates[0].infeasibility().unwrap().to_string(),
            "board does not fit along the panel height"
        );
        Ok(())
    }

    #[test]
    fn result_limit_truncates_ranked_list() -> Result<()> {
        let board = BoardFootprint::try_new(52.0, 76.2, true)?;
        let panels = import_catalog(&ExtPanelCatalog::default())?;
        let config = PlacementConfig::builder()
            .edge_margins(5.0, 5.0)
            .gaps(2.0, 2.0)
            .result_limit(3)
            .build()?;

        let (candidates, summary) = panelize(&board, &panels, &config)?;

        assert_eq!(summary.considered, 40);
        assert_eq!(summary.feasible, 40);
        assert_eq!(summary.shown, 3);
        assert_eq!(summary.candidates.len(), 3);
        assert_eq!(summary.best.as_ref(), summary.candidates.first());
        assert_eq!(summary.max_utilization, Some(summary.candidates[0].utilization()));
        assert!(summary.min_utilization <= summary.max_utilization);
        assert!(assertions::ranking_is_sorted(&summary.candidates));
        assert!(assertions::summary_matches_candidates(&summary, &candidates));
        assert_eq!(
            summary.message(),
            "Found 40 feasible layouts. Showing top 3 by Utilization."
        );
        Ok(())
    }

    #[test]
    fn huge_grids_are_counted_in_closed_form() -> Result<()> {
        let board = BoardFootprint::try_new(0.1, 0.1, false)?;
        let panels = [panel("E1", 100_000.0, 100_000.0)];
        let config = PlacementConfig::builder().build()?;

        let candidates = compute_candidates(&board, &panels, &config)?;
        assert_eq!(candidates[0].cols(), 1_000_000);
        assert_eq!(candidates[0].rows(), 1_000_000);
        assert_eq!(candidates[0].board_count(), 1_000_000_000_000);
        Ok(())
    }

    #[test]
    fn board_count_overflow_is_an_error() {
        let board = BoardFootprint::try_new(1e-4, 1e-4, false).unwrap();
        let panels = [panel("E1", 1e6, 1e6)];
        let config = PlacementConfig::builder().build().unwrap();

        let err = compute_candidates(&board, &panels, &config).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("E1"), "unexpected error: {msg}");
        assert!(msg.contains("more than can be counted"), "unexpected error: {msg}");
        assert!(panelize(&board, &panels, &config).is_err());
    }

    #[test_case(|b| b.gaps(1e-7, 1e-7), "gap_w"; "gap below tolerance")]
    #[test_case(|b| b.edge_margins(5.0, 1e-7), "edge_margin_h"; "margin below tolerance")]
    #[test_case(|b| b.kerf(5e-7), "kerf"; "kerf below tolerance")]
    fn overhead_finer_than_tolerance_is_rejected(set: fn(PlacementConfigBuilder) -> PlacementConfigBuilder, field: &str) {
        let err = set(PlacementConfig::builder()).build().unwrap_err();
        assert!(format!("{err:#}").contains(field), "unexpected error: {err:#}");
    }

    #[test_case(|b| b.gaps(MIN_OVERHEAD, MIN_OVERHEAD); "gaps")]
    #[test_case(|b| b.edge_margins(MIN_OVERHEAD, MIN_OVERHEAD); "margins")]
    #[test_case(|b| b.kerf(MIN_OVERHEAD); "kerf")]
    fn smallest_overhead_stays_on_the_panel(set: fn(PlacementConfigBuilder) -> PlacementConfigBuilder) {
        let board = BoardFootprint::try_new(50.0, 50.0, false).unwrap();
        let panels = [panel("A1", 500.0, 500.0)];
        let config = set(PlacementConfig::builder()).build().unwrap();
        assert!(config.has_overhead());

        let c = &compute_candidates(&board, &panels, &config).unwrap()[0];
        assert_eq!((c.cols(), c.rows()), (9, 9));
        assert!(c.utilization() < 1.0);
        let m = c.margins();
        assert!([m.left, m.right, m.bottom, m.top].iter().all(|&v| v >= 0.0));
    }

    #[test]
    fn boards_per_jumbo_follows_the_catalog() -> Result<()> {
        let board = BoardFootprint::try_new(100.0, 150.0, false)?;
        let panels = import_catalog(&ExtPanelCatalog::default())?;
        let config = standard_config();

        let (candidates, summary) = panelize(&board, &panels, &config)?;

        let a1 = find(&candidates, "A1", false);
        assert_eq!(a1.board_count(), 20);
        assert_eq!(a1.boards_per_jumbo(), 80);
        for c in &candidates {
            assert_eq!(c.boards_per_jumbo(), c.board_count() * u64::from(c.panel().panels_per_jumbo()));
        }
        assert_eq!(
            summary.max_boards_per_jumbo,
            candidates.iter().map(|c| c.boards_per_jumbo()).max()
        );
        assert!(assertions::summary_matches_candidates(&summary, &candidates));
        Ok(())
    }
}
