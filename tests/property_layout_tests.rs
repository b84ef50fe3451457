use graphview_rs::core::{
    ChartLayoutRequest, ChartMode, DataPoint, HeuristicTextMetrics, Padding, PlotGeometry,
    ValueScale, Viewport,
};
use proptest::prelude::*;

fn series_strategy() -> impl Strategy<Value = Vec<DataPoint>> {
    proptest::collection::vec(("[A-Z]{1,4}", 0.1f64..5_000.0), 1..32).prop_map(|entries| {
        entries
            .into_iter()
            .map(|(label, value)| DataPoint::new(label, value))
            .collect()
    })
}

fn request(points: &[DataPoint], width: u32, height: u32) -> ChartLayoutRequest<'_> {
    ChartLayoutRequest {
        points,
        viewport: Viewport::new(width, height),
        padding: Padding::new(40.0, 20.0, 20.0, 30.0),
        section_size: 50.0,
        mode: ChartMode::LineWithMarkers,
        font_size_px: 14.0,
        bar_unit_px: 10.0,
    }
}

proptest! {
    #[test]
    fn x_label_count_matches_point_count(
        points in series_strategy(),
        width in 100u32..2_000,
        height in 100u32..2_000,
    ) {
        let layout = request(&points, width, height)
            .compute(&HeuristicTextMetrics)
            .expect("layout");
        prop_assert_eq!(layout.x_labels.len(), points.len());
    }

    #[test]
    fn marker_centers_are_spaced_by_exactly_one_section(
        points in series_strategy(),
        width in 100u32..2_000,
        height in 100u32..2_000,
    ) {
        let layout = request(&points, width, height)
            .compute(&HeuristicTextMetrics)
            .expect("layout");

        let PlotGeometry::Line(line) = &layout.plot else {
            panic!("expected line plot geometry");
        };
        for pair in line.markers.windows(2) {
            let spacing = pair[1].x - pair[0].x;
            prop_assert!((spacing - layout.section_width).abs() <= 1e-9 * layout.section_width);
        }
    }

    #[test]
    fn section_count_is_ceil_of_max_over_section_size(
        max_value in 0.1f64..100_000.0,
        section_size in 1.0f64..500.0,
    ) {
        let scale = ValueScale::from_max(max_value, section_size).expect("scale");
        let expected = (max_value / section_size).ceil() as usize;
        prop_assert_eq!(scale.section_count(), expected);
        prop_assert!(scale.ceiling() + 1e-9 >= max_value);
        prop_assert!(scale.ceiling() - max_value < section_size);
    }

    #[test]
    fn bands_sit_exactly_on_odd_rows(
        points in series_strategy(),
        section_size in 1.0f64..500.0,
    ) {
        let mut req = request(&points, 400, 300);
        req.section_size = section_size;
        let layout = req.compute(&HeuristicTextMetrics).expect("layout");

        for (index, row) in layout.grid_rows.iter().enumerate() {
            prop_assert_eq!(row.band.is_some(), index % 2 == 1);
        }
    }

    #[test]
    fn layout_is_idempotent(
        points in series_strategy(),
        width in 100u32..2_000,
        height in 100u32..2_000,
    ) {
        let req = request(&points, width, height);
        let first = req.compute(&HeuristicTextMetrics).expect("layout");
        let second = req.compute(&HeuristicTextMetrics).expect("layout");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn all_layout_coordinates_are_finite(
        points in series_strategy(),
        width in 100u32..2_000,
        height in 100u32..2_000,
    ) {
        let layout = request(&points, width, height)
            .compute(&HeuristicTextMetrics)
            .expect("layout");

        for label in &layout.x_labels {
            prop_assert!(label.x.is_finite());
            prop_assert!(label.y.is_finite());
        }
        for row in &layout.grid_rows {
            prop_assert!(row.y.is_finite());
            prop_assert!(row.label_baseline_y.is_finite());
        }
        let PlotGeometry::Line(line) = &layout.plot else {
            panic!("expected line plot geometry");
        };
        for marker in &line.markers {
            prop_assert!(marker.x.is_finite());
            prop_assert!(marker.y.is_finite());
        }
    }
}
