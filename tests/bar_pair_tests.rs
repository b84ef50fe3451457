use approx::assert_relative_eq;
use graphview_rs::core::{
    ChartLayoutRequest, ChartMode, DataPoint, HeuristicTextMetrics, Padding, PlotGeometry,
    Viewport,
};
use graphview_rs::error::GraphError;

fn request(points: &[DataPoint]) -> ChartLayoutRequest<'_> {
    ChartLayoutRequest {
        points,
        viewport: Viewport::new(400, 300),
        padding: Padding::new(40.0, 20.0, 20.0, 30.0),
        section_size: 50.0,
        mode: ChartMode::BarPair,
        font_size_px: 14.0,
        bar_unit_px: 10.0,
    }
}

fn cost_earnings() -> Vec<DataPoint> {
    vec![DataPoint::new("Cost", 10.0), DataPoint::new("Earnings", 15.0)]
}

#[test]
fn larger_value_takes_full_height_and_smaller_scales_proportionally() {
    let points = cost_earnings();
    let layout = request(&points)
        .compute(&HeuristicTextMetrics)
        .expect("layout");

    let PlotGeometry::BarPair(pair) = &layout.plot else {
        panic!("expected bar-pair geometry");
    };

    // max bar height = 300 - 5 * 10 = 250, bar bottoms at 300 - 3 * 10 = 270.
    let cost = &pair.bars[0];
    let earnings = &pair.bars[1];
    assert_relative_eq!(earnings.bottom - earnings.top, 250.0, epsilon = 1e-9);
    assert_relative_eq!(
        cost.bottom - cost.top,
        10.0 / 15.0 * 250.0,
        epsilon = 1e-9
    );
    assert_eq!(cost.bottom, 270.0);
    assert_eq!(earnings.bottom, 270.0);
}

#[test]
fn bars_sit_either_side_of_the_midpoint() {
    let points = cost_earnings();
    let layout = request(&points)
        .compute(&HeuristicTextMetrics)
        .expect("layout");

    let PlotGeometry::BarPair(pair) = &layout.plot else {
        panic!("expected bar-pair geometry");
    };
    let cost = &pair.bars[0];
    let earnings = &pair.bars[1];

    assert_eq!(cost.left, 20.0);
    assert_eq!(cost.right, 190.0);
    assert_eq!(earnings.left, 210.0);
    assert_eq!(earnings.right, 380.0);
}

#[test]
fn label_anchors_stack_above_the_bar_top() {
    let points = cost_earnings();
    let layout = request(&points)
        .compute(&HeuristicTextMetrics)
        .expect("layout");

    let PlotGeometry::BarPair(pair) = &layout.plot else {
        panic!("expected bar-pair geometry");
    };
    for bar in &pair.bars {
        assert_relative_eq!(bar.label_y, bar.top - 10.0, epsilon = 1e-9);
        assert_relative_eq!(bar.value_label_y, bar.top - 10.0 - 14.0, epsilon = 1e-9);
        assert_relative_eq!(bar.center_x(), (bar.left + bar.right) / 2.0);
    }
}

#[test]
fn first_value_larger_flips_the_full_height_bar() {
    let points = vec![DataPoint::new("Cost", 20.0), DataPoint::new("Earnings", 5.0)];
    let layout = request(&points)
        .compute(&HeuristicTextMetrics)
        .expect("layout");

    let PlotGeometry::BarPair(pair) = &layout.plot else {
        panic!("expected bar-pair geometry");
    };
    assert_relative_eq!(pair.bars[0].bottom - pair.bars[0].top, 250.0, epsilon = 1e-9);
    assert_relative_eq!(
        pair.bars[1].bottom - pair.bars[1].top,
        5.0 / 20.0 * 250.0,
        epsilon = 1e-9
    );
}

#[test]
fn equal_values_give_two_full_height_bars() {
    let points = vec![DataPoint::new("Cost", 12.0), DataPoint::new("Earnings", 12.0)];
    let layout = request(&points)
        .compute(&HeuristicTextMetrics)
        .expect("layout");

    let PlotGeometry::BarPair(pair) = &layout.plot else {
        panic!("expected bar-pair geometry");
    };
    assert_relative_eq!(pair.bars[0].bottom - pair.bars[0].top, 250.0, epsilon = 1e-9);
    assert_relative_eq!(pair.bars[1].bottom - pair.bars[1].top, 250.0, epsilon = 1e-9);
}

#[test]
fn bar_pair_requires_exactly_two_points() {
    let points = vec![DataPoint::new("Cost", 10.0)];
    let result = request(&points).compute(&HeuristicTextMetrics);
    assert!(matches!(result, Err(GraphError::InvalidData(_))));

    let points = vec![
        DataPoint::new("A", 1.0),
        DataPoint::new("B", 2.0),
        DataPoint::new("C", 3.0),
    ];
    let result = request(&points).compute(&HeuristicTextMetrics);
    assert!(matches!(result, Err(GraphError::InvalidData(_))));
}

#[test]
fn non_positive_bar_values_are_rejected() {
    let points = vec![DataPoint::new("Cost", 0.0), DataPoint::new("Earnings", 15.0)];
    let result = request(&points).compute(&HeuristicTextMetrics);
    assert!(matches!(result, Err(GraphError::InvalidData(_))));
}

#[test]
fn unit_padding_consuming_viewport_height_is_rejected() {
    let points = cost_earnings();
    let mut req = request(&points);
    req.bar_unit_px = 60.0;
    let result = req.compute(&HeuristicTextMetrics);
    assert!(matches!(result, Err(GraphError::DegeneratePlotArea(_))));
}
