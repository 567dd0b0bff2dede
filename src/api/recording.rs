use crate::api::ChartConstructor;
use crate::config::ChartConfig;
use crate::error::{ChartError, ChartResult};
use crate::host::Surface;

/// Handle returned by `RecordingConstructor` for each accepted call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedChart {
    pub index: usize,
    pub surface_id: String,
}

/// Constructor double that keeps every `(surface, config)` it receives.
///
/// Used by tests and dry runs to observe exactly what an engine would get.
#[derive(Debug, Default)]
pub struct RecordingConstructor {
    calls: Vec<(Surface, ChartConfig)>,
    failure: Option<String>,
}

impl RecordingConstructor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records calls but answers each one with `InvalidData(message)`.
    #[must_use]
    pub fn failing_with(message: impl Into<String>) -> Self {
        Self {
            calls: Vec::new(),
            failure: Some(message.into()),
        }
    }

    #[must_use]
    pub fn calls(&self) -> &[(Surface, ChartConfig)] {
        &self.calls
    }

    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.len()
    }

    #[must_use]
    pub fn into_calls(self) -> Vec<(Surface, ChartConfig)> {
        self.calls
    }
}

impl ChartConstructor for RecordingConstructor {
    type Chart = RecordedChart;

    fn construct(&mut self, surface: Surface, config: ChartConfig) -> ChartResult<Self::Chart> {
        let index = self.calls.len();
        let surface_id = surface.id.clone();
        self.calls.push((surface, config));
        if let Some(message) = &self.failure {
            return Err(ChartError::InvalidData(message.clone()));
        }
        Ok(RecordedChart { index, surface_id })
    }
}
