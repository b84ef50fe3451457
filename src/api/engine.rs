use tracing::{debug, trace};

use crate::core::{
    ChartLayout, ChartLayoutRequest, ChartMode, DataPoint, HeuristicTextMetrics, Padding,
    TextMetrics, Viewport,
};
use crate::error::{GraphError, GraphResult};
use crate::render::Renderer;

use super::{GraphEngineConfig, GraphStyle};

/// Stateful facade around the pure layout engine.
///
/// Owns the renderer, the data series, and the resolved pixel configuration;
/// every draw request recomputes the layout from scratch, so there is no
/// cached geometry to invalidate.
pub struct GraphEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) viewport: Viewport,
    pub(super) padding: Padding,
    pub(super) section_size: f64,
    pub(super) mode: ChartMode,
    pub(super) density: f64,
    pub(super) style: GraphStyle,
    pub(super) metrics: Box<dyn TextMetrics>,
    pub(super) points: Vec<DataPoint>,
    pub(super) series_metadata: indexmap::IndexMap<String, String>,
}

impl<R: Renderer> GraphEngine<R> {
    pub fn new(renderer: R, config: GraphEngineConfig) -> GraphResult<Self> {
        if !config.viewport.is_valid() {
            return Err(GraphError::InvalidViewport {
                width: config.viewport.width,
                height: config.viewport.height,
            });
        }
        if !config.section_size.is_finite() || config.section_size <= 0.0 {
            return Err(GraphError::InvalidData(
                "section size must be finite and > 0".to_owned(),
            ));
        }
        config.padding.validate()?;
        let style = GraphStyle::for_density(config.density)?;

        Ok(Self {
            renderer,
            viewport: config.viewport,
            padding: config.padding.scaled_by(config.density),
            section_size: config.section_size,
            mode: config.mode,
            density: config.density,
            style,
            metrics: Box::new(HeuristicTextMetrics),
            points: Vec::new(),
            series_metadata: indexmap::IndexMap::new(),
        })
    }

    /// Replaces the data series.
    pub fn set_data(&mut self, points: Vec<DataPoint>) {
        debug!(count = points.len(), "set data points");
        self.points = points;
    }

    /// Appends a single sample to the end of the series.
    pub fn append_point(&mut self, point: DataPoint) {
        self.points.push(point);
        trace!(count = self.points.len(), "append data point");
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    /// Resizes the drawing surface; the next draw recomputes from it.
    pub fn set_viewport(&mut self, viewport: Viewport) -> GraphResult<()> {
        if !viewport.is_valid() {
            return Err(GraphError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        debug!(width = viewport.width, height = viewport.height, "resize viewport");
        self.viewport = viewport;
        Ok(())
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn padding(&self) -> Padding {
        self.padding
    }

    #[must_use]
    pub fn section_size(&self) -> f64 {
        self.section_size
    }

    #[must_use]
    pub fn density(&self) -> f64 {
        self.density
    }

    pub fn set_mode(&mut self, mode: ChartMode) {
        self.mode = mode;
    }

    #[must_use]
    pub fn mode(&self) -> ChartMode {
        self.mode
    }

    pub fn set_style(&mut self, style: GraphStyle) -> GraphResult<()> {
        style.validate()?;
        self.style = style;
        Ok(())
    }

    #[must_use]
    pub fn style(&self) -> GraphStyle {
        self.style
    }

    /// Injects backend text measurement, replacing the deterministic default.
    pub fn set_text_metrics(&mut self, metrics: Box<dyn TextMetrics>) {
        self.metrics = metrics;
    }

    /// Attaches a host-defined metadata tag to the series (kept in snapshots).
    pub fn set_series_metadata(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.series_metadata.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Computes a fresh layout from the current inputs.
    pub fn compute_layout(&self) -> GraphResult<ChartLayout> {
        ChartLayoutRequest {
            points: &self.points,
            viewport: self.viewport,
            padding: self.padding,
            section_size: self.section_size,
            mode: self.mode,
            font_size_px: self.style.font_size_px,
            bar_unit_px: self.style.bar_unit_px,
        }
        .compute(self.metrics.as_ref())
    }

    /// Recomputes the layout, materializes primitives, and hands them to the
    /// backend.
    pub fn render(&mut self) -> GraphResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)
    }
}
