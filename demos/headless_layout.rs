//! Prints the deterministic layout snapshot for the sample monthly series.
//!
//! Run with `cargo run --example headless_layout`.

use graphview_rs::api::{GraphEngine, GraphEngineConfig};
use graphview_rs::core::{ChartMode, DataPoint, Viewport};
use graphview_rs::render::NullRenderer;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = graphview_rs::telemetry::init_default_tracing();

    let config = GraphEngineConfig::new(Viewport::new(400, 300), ChartMode::LineWithMarkers)
        .with_section_size(100.0);
    let mut engine = GraphEngine::new(NullRenderer::default(), config)?;

    engine.set_data(vec![
        DataPoint::new("JAN", 266.7),
        DataPoint::new("FEB", 250.4),
        DataPoint::new("MAR", 330.0),
        DataPoint::new("JUN", 126.0),
        DataPoint::new("JUL", 220.0),
        DataPoint::new("AUG", 230.0),
        DataPoint::new("SEP", 266.0),
    ]);
    engine.set_series_metadata("series-id", "monthly-sales");

    engine.render()?;
    println!("{}", engine.snapshot_json_pretty()?);
    Ok(())
}
