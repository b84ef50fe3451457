pub mod axis;
pub mod bar_pair;
pub mod grid;
pub mod layout;
pub mod line_plot;
pub mod scale;
pub mod text;
pub mod types;

pub use axis::AxisFrame;
pub use bar_pair::{BarGeometry, BarPairLayout};
pub use grid::{BandRect, GridRow};
pub use layout::{ChartLayout, ChartLayoutRequest, ChartMode, PlotGeometry, XAxisLabel};
pub use line_plot::{LinePlotLayout, PlotMarker};
pub use scale::{SectionScale, ValueScale};
pub use text::{HeuristicTextMetrics, TextMetrics};
pub use types::{DataPoint, LineSegment, Padding, Viewport, max_series_value};
