use serde::{Deserialize, Serialize};

use crate::core::axis::AxisFrame;
use crate::core::bar_pair::{BarPairLayout, project_bar_pair};
use crate::core::grid::{GridRow, grid_rows};
use crate::core::line_plot::{LinePlotLayout, project_line_plot};
use crate::core::scale::{SectionScale, ValueScale};
use crate::core::text::TextMetrics;
use crate::core::types::{DataPoint, Padding, Viewport, max_series_value};
use crate::error::{GraphError, GraphResult};

/// How the series is plotted inside the axis frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ChartMode {
    /// Two-value comparison bars (first point vs second point).
    BarPair,
    /// N-point series with markers and connecting segments.
    #[default]
    LineWithMarkers,
}

/// X-axis label placement: the text's left edge and baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XAxisLabel {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// Mode-specific plot geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlotGeometry {
    BarPair(BarPairLayout),
    Line(LinePlotLayout),
}

/// Complete geometric description of one chart draw pass.
///
/// Everything a renderer needs, nothing it draws itself: axis segments, label
/// placements, gridline rows with optional shaded bands, and the plotted
/// series geometry. Identical inputs always produce an identical layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub axes: AxisFrame,
    pub x_labels: Vec<XAxisLabel>,
    pub grid_rows: Vec<GridRow>,
    pub section_width: f64,
    pub plot: PlotGeometry,
}

/// Inputs of one layout computation.
#[derive(Debug, Clone, Copy)]
pub struct ChartLayoutRequest<'a> {
    pub points: &'a [DataPoint],
    pub viewport: Viewport,
    pub padding: Padding,
    pub section_size: f64,
    pub mode: ChartMode,
    pub font_size_px: f64,
    /// Block unit for bar-pair placement, already density-scaled.
    pub bar_unit_px: f64,
}

impl ChartLayoutRequest<'_> {
    /// Computes the full chart layout.
    ///
    /// Pure and synchronous: no state survives between calls, and every
    /// invalid input is rejected here before any coordinate is produced.
    pub fn compute(&self, metrics: &dyn TextMetrics) -> GraphResult<ChartLayout> {
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(GraphError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        let axes = AxisFrame::from_insets(self.viewport, self.padding)?;
        let max_value = max_series_value(self.points)?;
        let scale = ValueScale::from_max(max_value, self.section_size)?;
        let sections = SectionScale::new(
            axes.horizontal.x1,
            axes.horizontal.x2,
            self.points.len(),
        )?;

        let x_labels = self.x_labels(&axes, sections, metrics);
        let grid_rows = grid_rows(&axes, scale, self.font_size_px, metrics);

        let plot = match self.mode {
            ChartMode::BarPair => PlotGeometry::BarPair(project_bar_pair(
                self.points,
                self.viewport,
                self.bar_unit_px,
                self.font_size_px,
            )?),
            ChartMode::LineWithMarkers => {
                PlotGeometry::Line(project_line_plot(self.points, &axes, sections, scale)?)
            }
        };

        Ok(ChartLayout {
            axes,
            x_labels,
            grid_rows,
            section_width: sections.section_width(),
            plot,
        })
    }

    /// One label per data point, horizontally centered in its section and
    /// sitting one font size below the horizontal axis.
    fn x_labels(
        &self,
        axes: &AxisFrame,
        sections: SectionScale,
        metrics: &dyn TextMetrics,
    ) -> Vec<XAxisLabel> {
        self.points
            .iter()
            .enumerate()
            .map(|(index, point)| {
                let center = sections.center(index);
                let half_text = metrics.text_width(&point.label, self.font_size_px) / 2.0;
                XAxisLabel {
                    text: point.label.clone(),
                    x: center - half_text,
                    y: axes.horizontal.y1 + self.font_size_px,
                }
            })
            .collect()
    }
}
