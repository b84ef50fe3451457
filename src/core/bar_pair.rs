use serde::{Deserialize, Serialize};

use crate::core::types::{DataPoint, Viewport};
use crate::error::{GraphError, GraphResult};

/// One bar of a two-value comparison, with its stacked label anchors.
///
/// The name label sits one unit above the bar top; the value label sits one
/// text line above the name label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub label: String,
    pub value: f64,
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub label_y: f64,
    pub value_label_y: f64,
}

impl BarGeometry {
    /// Horizontal center of the bar, where its labels anchor.
    #[must_use]
    pub fn center_x(&self) -> f64 {
        (self.left + self.right) / 2.0
    }
}

/// Bar-pair plot geometry: two bars normalized to a shared maximum height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarPairLayout {
    pub bars: [BarGeometry; 2],
}

/// Projects a two-point series into side-by-side comparison bars.
///
/// The larger value occupies the full available height
/// (`viewport height - 5 * unit`), the smaller is scaled proportionally.
/// Bars sit left and right of the horizontal midpoint, inset by `unit_px`.
pub(crate) fn project_bar_pair(
    points: &[DataPoint],
    viewport: Viewport,
    unit_px: f64,
    font_size_px: f64,
) -> GraphResult<BarPairLayout> {
    let [first, second] = points else {
        return Err(GraphError::InvalidData(format!(
            "bar-pair mode requires exactly two data points, got {}",
            points.len()
        )));
    };
    if !unit_px.is_finite() || unit_px <= 0.0 {
        return Err(GraphError::InvalidData(
            "bar unit padding must be finite and > 0".to_owned(),
        ));
    }
    for point in [first, second] {
        if !point.value.is_finite() || point.value <= 0.0 {
            return Err(GraphError::InvalidData(format!(
                "bar value for label `{}` must be finite and > 0",
                point.label
            )));
        }
    }

    let width = viewport.width_px();
    let height = viewport.height_px();
    let max_bar_height = height - 5.0 * unit_px;
    if max_bar_height <= 0.0 {
        return Err(GraphError::DegeneratePlotArea(format!(
            "bar unit padding {unit_px} consumes viewport height {height}"
        )));
    }

    let (first_height, second_height) = if second.value > first.value {
        (first.value / second.value * max_bar_height, max_bar_height)
    } else {
        (max_bar_height, second.value / first.value * max_bar_height)
    };

    let middle = width * 0.5;
    let bottom = height - 3.0 * unit_px;

    let make_bar = |point: &DataPoint, left: f64, right: f64, bar_height: f64| {
        let top = bottom - bar_height;
        let label_y = top - unit_px;
        BarGeometry {
            label: point.label.clone(),
            value: point.value,
            left,
            top,
            right,
            bottom,
            label_y,
            value_label_y: label_y - font_size_px,
        }
    };

    Ok(BarPairLayout {
        bars: [
            make_bar(first, 2.0 * unit_px, middle - unit_px, first_height),
            make_bar(second, middle + unit_px, width - 2.0 * unit_px, second_height),
        ],
    })
}
