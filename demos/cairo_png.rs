//! Renders the sample series to `line_chart.png` with the Cairo backend.
//!
//! Run with `cargo run --example cairo_png --features cairo-backend`.

use std::fs::File;

use graphview_rs::api::{GraphEngine, GraphEngineConfig};
use graphview_rs::core::{ChartMode, DataPoint, Viewport};
use graphview_rs::render::{CairoRenderer, PangoTextMetrics};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = graphview_rs::telemetry::init_default_tracing();

    let viewport = Viewport::new(800, 600);
    let config = GraphEngineConfig::new(viewport, ChartMode::LineWithMarkers)
        .with_section_size(100.0)
        .with_density(2.0);
    let renderer = CairoRenderer::new(800, 600)?;
    let mut engine = GraphEngine::new(renderer, config)?;
    engine.set_text_metrics(Box::new(PangoTextMetrics::new()?));

    engine.set_data(vec![
        DataPoint::new("JAN", 266.7),
        DataPoint::new("FEB", 250.4),
        DataPoint::new("MAR", 330.0),
        DataPoint::new("JUN", 126.0),
        DataPoint::new("JUL", 220.0),
        DataPoint::new("AUG", 230.0),
        DataPoint::new("SEP", 266.0),
    ]);

    engine.render()?;
    let stats = engine.renderer().last_stats();
    println!(
        "drew {} lines, {} rects, {} circles, {} texts",
        stats.lines_drawn, stats.rects_drawn, stats.circles_drawn, stats.texts_drawn
    );

    let mut file = File::create("line_chart.png")?;
    engine.renderer_mut().surface().write_to_png(&mut file)?;
    Ok(())
}
