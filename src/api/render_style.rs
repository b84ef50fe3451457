use crate::error::{GraphError, GraphResult};
use crate::render::Color;

/// Style contract for the current render frame.
///
/// A flat immutable record so layout math never touches colors or stroke
/// state; builders read it, backends never see it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphStyle {
    pub axis_color: Color,
    pub axis_stroke_width_px: f64,
    pub band_color: Color,
    pub series_line_color: Color,
    pub series_stroke_width_px: f64,
    pub marker_color: Color,
    pub marker_radius_px: f64,
    pub label_color: Color,
    pub font_size_px: f64,
    /// Gap between the vertical axis and the right edge of Y-axis labels.
    pub y_label_offset_px: f64,
    /// Block unit for bar-pair placement.
    pub bar_unit_px: f64,
    pub bar_fill_colors: [Color; 2],
    pub show_marker_value_labels: bool,
}

const AXIS_COLOR: Color = Color::from_rgb_u32(0x37474F);
const SERIES_LINE_COLOR: Color = Color::from_rgb_u32(0xFF5722);
const MARKER_COLOR: Color = Color::from_rgb_u32(0x448AFF);
const BAND_COLOR: Color = Color::from_rgb_u32(0xEEEEEE);
const BAR_FILL_COLORS: [Color; 2] = [Color::rgb(0.0, 0.0, 1.0), Color::rgb(1.0, 1.0, 0.0)];

impl GraphStyle {
    /// Builds the default style at a given density factor.
    ///
    /// Every pixel-valued constant scales linearly with `density` so the same
    /// logical layout renders consistently across display resolutions.
    pub fn for_density(density: f64) -> GraphResult<Self> {
        if !density.is_finite() || density <= 0.0 {
            return Err(GraphError::InvalidData(
                "density factor must be finite and > 0".to_owned(),
            ));
        }

        let base = Self::default();
        Ok(Self {
            axis_stroke_width_px: base.axis_stroke_width_px * density,
            series_stroke_width_px: base.series_stroke_width_px * density,
            marker_radius_px: base.marker_radius_px * density,
            font_size_px: base.font_size_px * density,
            y_label_offset_px: base.y_label_offset_px * density,
            bar_unit_px: base.bar_unit_px * density,
            ..base
        })
    }

    #[must_use]
    pub fn with_show_marker_value_labels(mut self, show: bool) -> Self {
        self.show_marker_value_labels = show;
        self
    }

    pub fn validate(&self) -> GraphResult<()> {
        for (name, value) in [
            ("axis stroke width", self.axis_stroke_width_px),
            ("series stroke width", self.series_stroke_width_px),
            ("marker radius", self.marker_radius_px),
            ("font size", self.font_size_px),
            ("bar unit", self.bar_unit_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(GraphError::InvalidData(format!(
                    "style `{name}` must be finite and > 0"
                )));
            }
        }
        if !self.y_label_offset_px.is_finite() || self.y_label_offset_px < 0.0 {
            return Err(GraphError::InvalidData(
                "style `y label offset` must be finite and >= 0".to_owned(),
            ));
        }
        self.axis_color.validate()?;
        self.band_color.validate()?;
        self.series_line_color.validate()?;
        self.marker_color.validate()?;
        self.label_color.validate()?;
        for color in self.bar_fill_colors {
            color.validate()?;
        }
        Ok(())
    }
}

impl Default for GraphStyle {
    /// Density-1 baseline palette and logical stroke/font constants.
    fn default() -> Self {
        Self {
            axis_color: AXIS_COLOR,
            axis_stroke_width_px: 2.0,
            band_color: BAND_COLOR,
            series_line_color: SERIES_LINE_COLOR,
            series_stroke_width_px: 2.0,
            marker_color: MARKER_COLOR,
            marker_radius_px: 5.0,
            label_color: AXIS_COLOR,
            font_size_px: 14.0,
            y_label_offset_px: 2.0,
            bar_unit_px: 10.0,
            bar_fill_colors: BAR_FILL_COLORS,
            show_marker_value_labels: true,
        }
    }
}
