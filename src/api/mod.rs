//! Chart invocation: resolve a surface, then hand it and a configuration
//! to whatever engine sits behind `ChartConstructor`.

pub mod demo;
mod mount;
mod recording;

pub use demo::{
    DemoMount, EXAMPLE_SURFACE_ID, HEARTBEAT_SURFACE_ID, demo_host, example_chart_config,
    heartbeat_chart_config, mount_demo_charts,
};
pub use mount::{ChartConstructor, mount_chart};
pub use recording::{RecordedChart, RecordingConstructor};
