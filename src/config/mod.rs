//! Plain-data chart configuration.
//!
//! These records are built once, moved into a chart constructor, and never
//! validated or defaulted on the way.

mod chart_config;
mod color;
mod series;

pub use chart_config::{ChartConfig, ChartData, ChartKind};
pub use color::RgbColor;
pub use series::Series;
