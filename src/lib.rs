//! linechart-rs: line charts mounted onto named host surfaces.
//!
//! Chart configuration is plain data. It is handed, untouched, to an engine
//! behind the `ChartConstructor` trait; the crate ships a line-chart engine
//! with SVG, null and optional Cairo renderers.

pub mod api;
pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod host;
pub mod render;
pub mod telemetry;

pub use api::{ChartConstructor, mount_chart};
pub use config::{ChartConfig, ChartData, ChartKind, RgbColor, Series};
pub use engine::{EngineOptions, LineChart, LineChartConstructor};
pub use error::{ChartError, ChartResult};
pub use host::{Surface, SurfaceRegistry, Viewport};
