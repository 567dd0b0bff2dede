use serde::{Deserialize, Serialize};

use crate::config::RgbColor;
use crate::core::{MAX_CURVE_SEGMENTS, MAX_TICKS};
use crate::error::{ChartError, ChartResult};

/// Presentation knobs of the line-chart engine.
///
/// Every field has a default, so a JSON file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineOptions {
    pub padding_px: f64,
    pub font_size_px: f64,
    pub line_width_px: f64,
    pub point_radius_px: f64,
    pub max_ticks: usize,
    pub curve_segments: usize,
    pub show_legend: bool,
    pub background_color: RgbColor,
    pub grid_color: RgbColor,
    pub text_color: RgbColor,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            padding_px: 12.0,
            font_size_px: 12.0,
            line_width_px: 3.0,
            point_radius_px: 3.0,
            max_ticks: 8,
            curve_segments: 12,
            show_legend: true,
            background_color: RgbColor::new(255, 255, 255),
            grid_color: RgbColor::new(229, 229, 229),
            text_color: RgbColor::new(102, 102, 102),
        }
    }
}

impl EngineOptions {
    #[must_use]
    pub fn with_show_legend(mut self, show_legend: bool) -> Self {
        self.show_legend = show_legend;
        self
    }

    #[must_use]
    pub fn with_curve_segments(mut self, curve_segments: usize) -> Self {
        self.curve_segments = curve_segments;
        self
    }

    #[must_use]
    pub fn with_point_radius(mut self, point_radius_px: f64) -> Self {
        self.point_radius_px = point_radius_px;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        for (name, value) in [
            ("padding", self.padding_px),
            ("point radius", self.point_radius_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "engine option `{name}` must be finite and >= 0"
                )));
            }
        }
        for (name, value) in [
            ("font size", self.font_size_px),
            ("line width", self.line_width_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "engine option `{name}` must be finite and > 0"
                )));
            }
        }
        if !(2..=MAX_TICKS).contains(&self.max_ticks) {
            return Err(ChartError::InvalidData(format!(
                "engine option `max_ticks` must be in 2..={MAX_TICKS}"
            )));
        }
        if !(1..=MAX_CURVE_SEGMENTS).contains(&self.curve_segments) {
            return Err(ChartError::InvalidData(format!(
                "engine option `curve_segments` must be in 1..={MAX_CURVE_SEGMENTS}"
            )));
        }
        Ok(())
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let options: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse engine options json: {e}"))
        })?;
        options.validate()?;
        Ok(options)
    }
}
