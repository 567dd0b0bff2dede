//! Built-in line-chart engine.
//!
//! Turns a `ChartConfig` into a `RenderFrame` for a surface and hands it to
//! a `Renderer`. Styling defaults live here, never in the config layer.

mod frame_builder;
mod line_chart;
mod options;
mod palette;

pub use frame_builder::build_line_frame;
pub use line_chart::{LineChart, LineChartConstructor};
pub use options::EngineOptions;
pub use palette::{DEFAULT_PALETTE, default_series_color};
