use tracing::debug;

use crate::api::ChartConstructor;
use crate::config::ChartConfig;
use crate::engine::{EngineOptions, build_line_frame};
use crate::error::ChartResult;
use crate::host::Surface;
use crate::render::{RenderFrame, Renderer};

/// One line chart bound to a surface.
///
/// Construction lays out the frame and draws it immediately, so a chart
/// that exists has been rendered at least once.
#[derive(Debug)]
pub struct LineChart<R: Renderer> {
    renderer: R,
    surface: Surface,
    config: ChartConfig,
    options: EngineOptions,
    frame: RenderFrame,
}

impl<R: Renderer> LineChart<R> {
    pub fn new(
        renderer: R,
        surface: Surface,
        config: ChartConfig,
        options: EngineOptions,
    ) -> ChartResult<Self> {
        let frame = build_line_frame(&surface, &config, &options)?;
        let mut chart = Self {
            renderer,
            surface,
            config,
            options,
            frame,
        };
        chart.render()?;
        Ok(chart)
    }

    /// Draws the current frame again.
    pub fn render(&mut self) -> ChartResult<()> {
        debug!(
            surface_id = %self.surface.id,
            lines = self.frame.lines.len(),
            rects = self.frame.rects.len(),
            polygons = self.frame.polygons.len(),
            texts = self.frame.texts.len(),
            "render line chart"
        );
        self.renderer.render(&self.frame)
    }

    #[must_use]
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    #[must_use]
    pub fn frame(&self) -> &RenderFrame {
        &self.frame
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

/// `ChartConstructor` backed by the line-chart engine.
///
/// The factory creates one renderer per surface.
pub struct LineChartConstructor<F> {
    options: EngineOptions,
    renderer_factory: F,
}

impl<F> LineChartConstructor<F> {
    #[must_use]
    pub fn new(options: EngineOptions, renderer_factory: F) -> Self {
        Self {
            options,
            renderer_factory,
        }
    }

    #[must_use]
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }
}

impl<R, F> ChartConstructor for LineChartConstructor<F>
where
    R: Renderer,
    F: FnMut(&Surface) -> ChartResult<R>,
{
    type Chart = LineChart<R>;

    fn construct(&mut self, surface: Surface, config: ChartConfig) -> ChartResult<Self::Chart> {
        let renderer = (self.renderer_factory)(&surface)?;
        LineChart::new(renderer, surface, config, self.options.clone())
    }
}
