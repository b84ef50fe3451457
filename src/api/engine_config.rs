use serde::{Deserialize, Serialize};

use crate::core::{ChartMode, Padding, Viewport};

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format. `padding` and `section_size` are
/// in logical units; the engine resolves them against `density` at layout
/// time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphEngineConfig {
    pub viewport: Viewport,
    pub mode: ChartMode,
    #[serde(default = "default_section_size")]
    pub section_size: f64,
    #[serde(default = "default_density")]
    pub density: f64,
    #[serde(default)]
    pub padding: Padding,
}

impl GraphEngineConfig {
    /// Creates a config with default section size, density, and padding.
    #[must_use]
    pub fn new(viewport: Viewport, mode: ChartMode) -> Self {
        Self {
            viewport,
            mode,
            section_size: default_section_size(),
            density: default_density(),
            padding: Padding::default(),
        }
    }

    /// Sets the Y-axis section granularity (e.g. 50 or 100 value units).
    #[must_use]
    pub fn with_section_size(mut self, section_size: f64) -> Self {
        self.section_size = section_size;
        self
    }

    /// Sets the logical-to-physical pixel density factor.
    #[must_use]
    pub fn with_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    /// Sets the logical padding insets.
    #[must_use]
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }
}

fn default_section_size() -> f64 {
    100.0
}

fn default_density() -> f64 {
    1.0
}
