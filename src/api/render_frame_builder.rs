use crate::core::PlotGeometry;
use crate::error::GraphResult;
use crate::render::{
    CirclePrimitive, LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign,
    TextPrimitive,
};

use super::GraphEngine;
use super::label_format::{format_currency_k, format_marker_value, format_y_axis_label};

impl<R: Renderer> GraphEngine<R> {
    /// Materializes backend-agnostic primitives for one draw pass.
    ///
    /// This keeps geometry computation deterministic and centralized in the
    /// layout engine while renderer backends only execute drawing commands.
    pub fn build_render_frame(&self) -> GraphResult<RenderFrame> {
        let layout = self.compute_layout()?;
        let style = self.style;
        let mut frame = RenderFrame::new(self.viewport);

        for row in &layout.grid_rows {
            if let Some(band) = row.band {
                frame = frame.with_rect(RectPrimitive::new(
                    band.x,
                    band.y,
                    band.width,
                    band.height,
                    style.band_color,
                ));
            }
        }

        match &layout.plot {
            PlotGeometry::Line(line) => {
                for segment in &line.segments {
                    frame = frame.with_line(LinePrimitive::new(
                        segment.x1,
                        segment.y1,
                        segment.x2,
                        segment.y2,
                        style.series_stroke_width_px,
                        style.series_line_color,
                    ));
                }
                for marker in &line.markers {
                    frame = frame.with_circle(CirclePrimitive::new(
                        marker.x,
                        marker.y,
                        style.marker_radius_px,
                        style.marker_color,
                    ));
                    if style.show_marker_value_labels {
                        frame = frame.with_text(TextPrimitive::new(
                            format_marker_value(marker.value),
                            marker.x,
                            marker.y,
                            style.font_size_px,
                            style.label_color,
                            TextHAlign::Left,
                        ));
                    }
                }
            }
            PlotGeometry::BarPair(pair) => {
                for (bar, fill) in pair.bars.iter().zip(style.bar_fill_colors) {
                    frame = frame.with_rect(RectPrimitive::new(
                        bar.left,
                        bar.top,
                        bar.right - bar.left,
                        bar.bottom - bar.top,
                        fill,
                    ));
                    frame = frame.with_text(TextPrimitive::new(
                        bar.label.clone(),
                        bar.center_x(),
                        bar.label_y,
                        style.font_size_px,
                        style.label_color,
                        TextHAlign::Center,
                    ));
                    frame = frame.with_text(TextPrimitive::new(
                        format_currency_k(bar.value),
                        bar.center_x(),
                        bar.value_label_y,
                        style.font_size_px,
                        style.label_color,
                        TextHAlign::Center,
                    ));
                }
            }
        }

        // Axes go after the plot so they stay crisp over bands and bars.
        for axis in [layout.axes.horizontal, layout.axes.vertical] {
            frame = frame.with_line(LinePrimitive::new(
                axis.x1,
                axis.y1,
                axis.x2,
                axis.y2,
                style.axis_stroke_width_px,
                style.axis_color,
            ));
        }

        for label in &layout.x_labels {
            frame = frame.with_text(TextPrimitive::new(
                label.text.clone(),
                label.x,
                label.y,
                style.font_size_px,
                style.label_color,
                TextHAlign::Left,
            ));
        }

        let y_label_x = layout.axes.vertical.x1 - style.y_label_offset_px;
        for row in &layout.grid_rows {
            frame = frame.with_text(TextPrimitive::new(
                format_y_axis_label(row.value),
                y_label_x,
                row.label_baseline_y,
                style.font_size_px,
                style.label_color,
                TextHAlign::Right,
            ));
        }

        Ok(frame)
    }
}
