use serde::{Deserialize, Serialize};

use crate::core::axis::AxisFrame;
use crate::core::scale::{SectionScale, ValueScale};
use crate::core::types::{DataPoint, LineSegment};
use crate::error::GraphResult;

/// Marker position for one plotted point, with the value it represents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotMarker {
    pub x: f64,
    pub y: f64,
    pub value: f64,
}

/// Line-with-markers plot geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinePlotLayout {
    pub markers: Vec<PlotMarker>,
    pub segments: Vec<LineSegment>,
}

/// Projects the series onto markers at section centers plus connecting
/// segments between consecutive points.
///
/// Values are normalized against the scale ceiling so the top section
/// boundary corresponds to the full vertical span.
pub(crate) fn project_line_plot(
    points: &[DataPoint],
    axes: &AxisFrame,
    sections: SectionScale,
    scale: ValueScale,
) -> GraphResult<LinePlotLayout> {
    let span = axes.plot_height();

    let mut markers = Vec::with_capacity(points.len());
    for (index, point) in points.iter().enumerate() {
        let x = sections.center(index);
        let y = axes.vertical.y2 - scale.value_to_offset(point.value, span);
        markers.push(PlotMarker {
            x,
            y,
            value: point.value,
        });
    }

    let segments = markers
        .windows(2)
        .map(|pair| LineSegment::new(pair[0].x, pair[0].y, pair[1].x, pair[1].y))
        .collect();

    Ok(LinePlotLayout { markers, segments })
}
