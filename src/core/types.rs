use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    #[must_use]
    pub fn width_px(self) -> f64 {
        f64::from(self.width)
    }

    #[must_use]
    pub fn height_px(self) -> f64 {
        f64::from(self.height)
    }
}

/// One ordered sample of the series: a category label and its value.
///
/// Order inside the series is significant (it defines the X position);
/// labels need not be unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub label: String,
    pub value: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Pixel insets from the drawing-surface edges, all non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Padding {
    #[must_use]
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Default graph insets in logical units, before density scaling.
    #[must_use]
    pub const fn graph_default() -> Self {
        Self::new(40.0, 20.0, 20.0, 30.0)
    }

    #[must_use]
    pub fn scaled_by(self, factor: f64) -> Self {
        Self {
            left: self.left * factor,
            right: self.right * factor,
            top: self.top * factor,
            bottom: self.bottom * factor,
        }
    }

    pub fn validate(self) -> GraphResult<()> {
        for (side, value) in [
            ("left", self.left),
            ("right", self.right),
            ("top", self.top),
            ("bottom", self.bottom),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(GraphError::InvalidData(format!(
                    "padding `{side}` must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

impl Default for Padding {
    fn default() -> Self {
        Self::graph_default()
    }
}

/// A line segment in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl LineSegment {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

/// Returns the largest finite value in the series.
///
/// Errors when the series is empty or contains a non-finite value.
pub fn max_series_value(points: &[DataPoint]) -> GraphResult<f64> {
    if points.is_empty() {
        return Err(GraphError::InvalidData(
            "data series must not be empty".to_owned(),
        ));
    }

    let mut max = f64::NEG_INFINITY;
    for point in points {
        if !point.value.is_finite() {
            return Err(GraphError::InvalidData(format!(
                "value for label `{}` must be finite",
                point.label
            )));
        }
        max = max.max(point.value);
    }
    Ok(max)
}
