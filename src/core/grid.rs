use serde::{Deserialize, Serialize};

use crate::core::axis::AxisFrame;
use crate::core::scale::ValueScale;
use crate::core::text::TextMetrics;

/// Shaded rectangle drawn behind alternating gridline rows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// One Y-axis gridline row.
///
/// `y` is the geometric row position on the vertical axis; `label_baseline_y`
/// is shifted down by half the font ascent so the label reads as optically
/// centered on the row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridRow {
    pub value: f64,
    pub y: f64,
    pub label_baseline_y: f64,
    pub band: Option<BandRect>,
}

/// Computes gridline rows for the vertical axis, bottom row first.
///
/// Rows subdivide the vertical span into `scale.section_count()` equal
/// sections. A band is attached to every odd row strictly below the section
/// count, covering the full horizontal axis width and one row height above
/// the row line.
pub(crate) fn grid_rows(
    axes: &AxisFrame,
    scale: ValueScale,
    font_size_px: f64,
    metrics: &dyn TextMetrics,
) -> Vec<GridRow> {
    let section_count = scale.section_count();
    let row_height = axes.plot_height() / section_count as f64;
    let half_ascent = metrics.ascent(font_size_px) / 2.0;

    (0..section_count)
        .map(|row| {
            let y = axes.vertical.y2 - row_height * row as f64;
            let band = (row % 2 == 1 && row < section_count).then(|| BandRect {
                x: axes.horizontal.x1,
                y: y - row_height,
                width: axes.plot_width(),
                height: row_height,
            });
            GridRow {
                value: scale.row_value(row),
                y,
                label_baseline_y: y + half_ascent,
                band,
            }
        })
        .collect()
}
