use graphview_rs::api::{GraphEngine, GraphEngineConfig};
use graphview_rs::core::{ChartMode, DataPoint, Viewport};
use graphview_rs::render::NullRenderer;

fn month_series() -> Vec<DataPoint> {
    vec![
        DataPoint::new("JAN", 266.7),
        DataPoint::new("FEB", 250.4),
        DataPoint::new("MAR", 330.0),
        DataPoint::new("JUN", 126.0),
    ]
}

#[test]
fn engine_smoke_flow() {
    let renderer = NullRenderer::default();
    let config = GraphEngineConfig::new(Viewport::new(400, 300), ChartMode::LineWithMarkers)
        .with_section_size(50.0);
    let mut engine = GraphEngine::new(renderer, config).expect("engine init");

    engine.set_data(month_series());
    engine.append_point(DataPoint::new("JUL", 220.0));
    assert_eq!(engine.points().len(), 5);

    engine.render().expect("render should succeed");

    // 5 markers, 4 connecting segments plus 2 axes, 7 rows with bands at
    // rows 1/3/5.
    assert_eq!(engine.renderer().last_circle_count, 5);
    assert_eq!(engine.renderer().last_line_count, 4 + 2);
    assert_eq!(engine.renderer().last_rect_count, 3);
    // 5 x labels + 7 y labels + 5 marker value labels.
    assert_eq!(engine.renderer().last_text_count, 5 + 7 + 5);
}

#[test]
fn resize_recomputes_layout_on_next_render() {
    let config = GraphEngineConfig::new(Viewport::new(400, 300), ChartMode::LineWithMarkers)
        .with_section_size(50.0);
    let mut engine = GraphEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.set_data(month_series());

    let before = engine.compute_layout().expect("layout");
    engine.set_viewport(Viewport::new(800, 600)).expect("resize");
    let after = engine.compute_layout().expect("layout");

    assert_eq!(before.axes.horizontal.x2, 380.0);
    assert_eq!(after.axes.horizontal.x2, 780.0);
}

#[test]
fn invalid_resize_is_rejected_and_state_unchanged() {
    let config = GraphEngineConfig::new(Viewport::new(400, 300), ChartMode::LineWithMarkers);
    let mut engine = GraphEngine::new(NullRenderer::default(), config).expect("engine init");

    assert!(engine.set_viewport(Viewport::new(0, 0)).is_err());
    assert_eq!(engine.viewport(), Viewport::new(400, 300));
}

#[test]
fn density_scales_padding_and_style() {
    let config = GraphEngineConfig::new(Viewport::new(800, 600), ChartMode::LineWithMarkers)
        .with_density(2.0);
    let engine = GraphEngine::new(NullRenderer::default(), config).expect("engine init");

    assert_eq!(engine.padding().left, 80.0);
    assert_eq!(engine.padding().bottom, 60.0);
    assert_eq!(engine.style().font_size_px, 28.0);
    assert_eq!(engine.style().marker_radius_px, 10.0);
    assert_eq!(engine.density(), 2.0);
}

#[test]
fn bar_pair_mode_renders_two_bars_and_stacked_labels() {
    let config = GraphEngineConfig::new(Viewport::new(400, 300), ChartMode::BarPair);
    let mut engine = GraphEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.set_data(vec![
        DataPoint::new("Cost", 10.0),
        DataPoint::new("Earnings", 15.0),
    ]);

    engine.render().expect("render should succeed");

    // Two bar rects; max value 15 gives a single gridline row, so no bands.
    assert_eq!(engine.renderer().last_rect_count, 2);
    assert_eq!(engine.renderer().last_circle_count, 0);
    // Axes only.
    assert_eq!(engine.renderer().last_line_count, 2);
    // Per bar: name + value label; plus 2 x labels and 1 y label.
    assert_eq!(engine.renderer().last_text_count, 4 + 2 + 1);
}

#[test]
fn render_surfaces_layout_errors() {
    let config = GraphEngineConfig::new(Viewport::new(400, 300), ChartMode::LineWithMarkers);
    let mut engine = GraphEngine::new(NullRenderer::default(), config).expect("engine init");

    // No data set: layout must fail loudly instead of emitting NaN geometry.
    assert!(engine.render().is_err());
}

#[test]
fn invalid_config_is_rejected_at_construction() {
    let bad_viewport = GraphEngineConfig::new(Viewport::new(0, 300), ChartMode::LineWithMarkers);
    assert!(GraphEngine::new(NullRenderer::default(), bad_viewport).is_err());

    let bad_section = GraphEngineConfig::new(Viewport::new(400, 300), ChartMode::LineWithMarkers)
        .with_section_size(0.0);
    assert!(GraphEngine::new(NullRenderer::default(), bad_section).is_err());

    let bad_density = GraphEngineConfig::new(Viewport::new(400, 300), ChartMode::LineWithMarkers)
        .with_density(-1.0);
    assert!(GraphEngine::new(NullRenderer::default(), bad_density).is_err());
}
