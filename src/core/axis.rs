use serde::{Deserialize, Serialize};

use crate::core::types::{LineSegment, Padding, Viewport};
use crate::error::{GraphError, GraphResult};

/// The two axis segments of a chart, derived from viewport and padding.
///
/// The horizontal axis runs along the bottom inset, the vertical axis along
/// the left inset; they meet at the chart origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisFrame {
    pub horizontal: LineSegment,
    pub vertical: LineSegment,
}

impl AxisFrame {
    pub fn from_insets(viewport: Viewport, padding: Padding) -> GraphResult<Self> {
        if !viewport.is_valid() {
            return Err(GraphError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        padding.validate()?;

        let width = viewport.width_px();
        let height = viewport.height_px();
        if padding.left + padding.right >= width {
            return Err(GraphError::DegeneratePlotArea(format!(
                "horizontal padding {}+{} consumes viewport width {width}",
                padding.left, padding.right
            )));
        }
        if padding.top + padding.bottom >= height {
            return Err(GraphError::DegeneratePlotArea(format!(
                "vertical padding {}+{} consumes viewport height {height}",
                padding.top, padding.bottom
            )));
        }

        let horizontal = LineSegment::new(
            padding.left,
            height - padding.bottom,
            width - padding.right,
            height - padding.bottom,
        );
        let vertical = LineSegment::new(
            padding.left,
            padding.top,
            padding.left,
            height - padding.bottom,
        );

        Ok(Self {
            horizontal,
            vertical,
        })
    }

    /// Horizontal axis span in pixels.
    #[must_use]
    pub fn plot_width(&self) -> f64 {
        self.horizontal.x2 - self.horizontal.x1
    }

    /// Vertical axis span in pixels.
    #[must_use]
    pub fn plot_height(&self) -> f64 {
        self.vertical.y2 - self.vertical.y1
    }
}
