use tracing::{debug, warn};

use crate::config::ChartConfig;
use crate::error::ChartResult;
use crate::host::{Surface, SurfaceRegistry};

/// Construction entry point of a charting engine.
///
/// Implementations take ownership of both the surface and the
/// configuration; callers keep nothing once a chart is constructed.
pub trait ChartConstructor {
    type Chart;

    fn construct(&mut self, surface: Surface, config: ChartConfig) -> ChartResult<Self::Chart>;
}

/// Resolves `surface_id` on `host` and hands the surface and `config` to
/// `constructor` exactly once.
///
/// A missing surface returns `SurfaceNotFound` without calling the
/// constructor. Constructor errors are returned unchanged.
pub fn mount_chart<C: ChartConstructor>(
    host: &SurfaceRegistry,
    constructor: &mut C,
    surface_id: &str,
    config: ChartConfig,
) -> ChartResult<C::Chart> {
    let surface = match host.resolve(surface_id) {
        Ok(surface) => surface,
        Err(err) => {
            warn!(surface_id, error = %err, "chart surface lookup failed");
            return Err(err);
        }
    };

    debug!(
        surface_id,
        kind = config.kind.as_str(),
        labels = config.data.labels.len(),
        datasets = config.data.datasets.len(),
        "construct chart"
    );
    constructor.construct(surface, config)
}
