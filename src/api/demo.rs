use tracing::{info, warn};

use crate::api::{ChartConstructor, mount_chart};
use crate::config::{ChartConfig, ChartData, RgbColor, Series};
use crate::error::{ChartError, ChartResult};
use crate::host::{Surface, SurfaceRegistry, Viewport};

pub const EXAMPLE_SURFACE_ID: &str = "line_chart";
pub const HEARTBEAT_SURFACE_ID: &str = "my_chart";

/// Six month labels against seven values in the first series. The extra
/// value and the "Feburary" spelling are kept as authored.
#[must_use]
pub fn example_chart_config() -> ChartConfig {
    ChartConfig::line(
        ChartData::new(["January", "Feburary", "March", "April", "May", "June"])
            .with_series(
                Series::new("My First Dataset", [65.0, 59.0, 80.0, 81.0, 20.0, 55.0, 40.0])
                    .with_fill(false)
                    .with_border_color(RgbColor::new(75, 192, 192))
                    .with_tension(0.1),
            )
            .with_series(
                Series::new("My Second dataset", [65.0, 2.0, 80.0, 81.0, 3.0, 55.0, 40.0])
                    .with_border_color(RgbColor::new(235, 185, 0)),
            ),
    )
}

#[must_use]
pub fn heartbeat_chart_config() -> ChartConfig {
    ChartConfig::line(
        ChartData::new(["Day 1", "Day 2"])
            .with_series(Series::new("Your heart beat", [56.0, 78.0]))
            .with_series(Series::new("Average heart beat", [90.0, 90.0])),
    )
}

/// Host with both demo surfaces, each sized `viewport`.
#[must_use]
pub fn demo_host(viewport: Viewport) -> SurfaceRegistry {
    SurfaceRegistry::new()
        .with_surface(Surface::new(EXAMPLE_SURFACE_ID, viewport))
        .with_surface(Surface::new(HEARTBEAT_SURFACE_ID, viewport))
}

/// Outcome of mounting the demo charts.
#[derive(Debug)]
pub struct DemoMount<T> {
    pub mounted: Vec<(String, T)>,
    pub omitted: Vec<String>,
}

impl<T> Default for DemoMount<T> {
    fn default() -> Self {
        Self {
            mounted: Vec::new(),
            omitted: Vec::new(),
        }
    }
}

/// Mounts the example chart and then the heartbeat chart.
///
/// A chart whose surface is missing is skipped and listed in `omitted`.
/// Any other error stops the run and is returned as is.
pub fn mount_demo_charts<C: ChartConstructor>(
    host: &SurfaceRegistry,
    constructor: &mut C,
) -> ChartResult<DemoMount<C::Chart>> {
    let mut outcome = DemoMount::default();
    for (surface_id, config) in [
        (EXAMPLE_SURFACE_ID, example_chart_config()),
        (HEARTBEAT_SURFACE_ID, heartbeat_chart_config()),
    ] {
        match mount_chart(host, constructor, surface_id, config) {
            Ok(chart) => outcome.mounted.push((surface_id.to_owned(), chart)),
            Err(ChartError::SurfaceNotFound { surface_id }) => {
                warn!(%surface_id, "demo chart omitted");
                outcome.omitted.push(surface_id);
            }
            Err(err) => return Err(err),
        }
    }
    info!(
        mounted = outcome.mounted.len(),
        omitted = outcome.omitted.len(),
        "demo charts mounted"
    );
    Ok(outcome)
}
