use crate::error::{GraphError, GraphResult};

/// Equal subdivision of an axis span into `count` sections.
///
/// Used for spacing X labels and data points: point `i` sits at the center of
/// section `i`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionScale {
    start: f64,
    end: f64,
    count: usize,
}

impl SectionScale {
    pub fn new(start: f64, end: f64, count: usize) -> GraphResult<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(GraphError::InvalidData(
                "section scale span must be finite".to_owned(),
            ));
        }
        if count == 0 {
            return Err(GraphError::InvalidData(
                "section scale requires at least one section".to_owned(),
            ));
        }
        if end <= start {
            return Err(GraphError::DegeneratePlotArea(format!(
                "axis span is empty: start={start}, end={end}"
            )));
        }

        Ok(Self { start, end, count })
    }

    #[must_use]
    pub fn count(self) -> usize {
        self.count
    }

    #[must_use]
    pub fn section_width(self) -> f64 {
        (self.end - self.start) / self.count as f64
    }

    /// Returns the horizontal center of section `index`.
    #[must_use]
    pub fn center(self, index: usize) -> f64 {
        self.section_width() * (index as f64 + 0.5) + self.start
    }
}

/// Vertical value scale quantized to whole sections.
///
/// The domain ceiling is the smallest multiple of `section_size` at or above
/// the maximum data value, so the top gridline row always lands on a section
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueScale {
    section_size: f64,
    section_count: usize,
}

impl ValueScale {
    pub fn from_max(max_value: f64, section_size: f64) -> GraphResult<Self> {
        if !section_size.is_finite() || section_size <= 0.0 {
            return Err(GraphError::InvalidData(
                "section size must be finite and > 0".to_owned(),
            ));
        }
        if !max_value.is_finite() || max_value <= 0.0 {
            return Err(GraphError::InvalidData(format!(
                "maximum series value must be > 0 to derive a section count, got {max_value}"
            )));
        }

        let count = (max_value / section_size).ceil();
        debug_assert!(count >= 1.0);
        #[allow(clippy::cast_possible_truncation)]
        #[allow(clippy::cast_sign_loss)]
        let section_count = count as usize;

        Ok(Self {
            section_size,
            section_count,
        })
    }

    #[must_use]
    pub fn section_size(self) -> f64 {
        self.section_size
    }

    #[must_use]
    pub fn section_count(self) -> usize {
        self.section_count
    }

    /// The smallest multiple of the section size >= the maximum data value.
    #[must_use]
    pub fn ceiling(self) -> f64 {
        self.section_count as f64 * self.section_size
    }

    /// Returns the value at gridline row `row` (row 0 is the axis itself).
    #[must_use]
    pub fn row_value(self, row: usize) -> f64 {
        row as f64 * self.section_size
    }

    /// Maps a data value to a vertical pixel offset above the axis, where the
    /// ceiling value spans the full `span_px`.
    #[must_use]
    pub fn value_to_offset(self, value: f64, span_px: f64) -> f64 {
        value * span_px / self.ceiling()
    }
}
