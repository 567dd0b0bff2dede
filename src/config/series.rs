use serde::{Deserialize, Serialize};

use crate::config::RgbColor;

/// One named numeric sequence plotted against the chart's category labels.
///
/// Styling fields stay `None` unless set explicitly; engines decide what an
/// absent attribute means. Nothing here checks `data.len()` against the
/// label count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    pub label: String,
    pub data: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<RgbColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
}

impl Series {
    #[must_use]
    pub fn new(label: impl Into<String>, data: impl Into<Vec<f64>>) -> Self {
        Self {
            label: label.into(),
            data: data.into(),
            fill: None,
            border_color: None,
            tension: None,
        }
    }

    #[must_use]
    pub fn with_fill(mut self, fill: bool) -> Self {
        self.fill = Some(fill);
        self
    }

    #[must_use]
    pub fn with_border_color(mut self, color: RgbColor) -> Self {
        self.border_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_tension(mut self, tension: f64) -> Self {
        self.tension = Some(tension);
        self
    }

    #[must_use]
    pub fn has_styling(&self) -> bool {
        self.fill.is_some() || self.border_color.is_some() || self.tension.is_some()
    }
}
