use tracing::{debug, trace};

use crate::config::{ChartConfig, Series};
use crate::core::{CategoryScale, ChartArea, LayoutInsets, ValueScale, smooth_run};
use crate::engine::EngineOptions;
use crate::engine::palette::default_series_color;
use crate::error::{ChartError, ChartResult};
use crate::host::Surface;
use crate::render::{
    Color, LinePrimitive, PolygonPrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

const LEGEND_BOX_WIDTH_PX: f64 = 40.0;
const LEGEND_ITEM_GAP_PX: f64 = 10.0;
const AXIS_LABEL_GAP_PX: f64 = 6.0;
const FILL_ALPHA: f64 = 0.25;
const MARKER_ALPHA: f64 = 0.5;
// average glyph advance relative to font size, used for layout estimates
const GLYPH_WIDTH_RATIO: f64 = 0.6;
const MAX_TICK_DIGITS: usize = 17;
const PLAIN_TICK_LIMIT: f64 = 1e15;
const SMALL_STEP_LIMIT: f64 = 1e-6;

/// Series styling after engine defaults are applied.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ResolvedStyle {
    color: Color,
    tension: f64,
    fill: bool,
}

/// Builds the full scene for one line chart on `surface`.
///
/// Each series is plotted for `min(labels, data)` categories; values past
/// the last label are clipped and non-finite values break the line.
pub fn build_line_frame(
    surface: &Surface,
    config: &ChartConfig,
    options: &EngineOptions,
) -> ChartResult<RenderFrame> {
    options.validate()?;
    let labels = &config.data.labels;
    let datasets = &config.data.datasets;

    let styles = datasets
        .iter()
        .enumerate()
        .map(|(index, series)| resolve_style(index, series))
        .collect::<ChartResult<Vec<_>>>()?;

    let value_scale = ValueScale::fit(
        datasets
            .iter()
            .flat_map(|series| series.data.iter().take(labels.len()).copied()),
        options.max_ticks,
    )?;
    let ticks = value_scale.ticks();
    let tick_labels: Vec<String> = ticks
        .iter()
        .map(|&tick| format_tick(tick, value_scale.step()))
        .collect();

    let font = options.font_size_px;
    let widest_tick = tick_labels
        .iter()
        .map(|label| estimate_text_width(label, font))
        .fold(0.0, f64::max);
    let insets = LayoutInsets {
        padding: options.padding_px,
        legend_band: if options.show_legend && !datasets.is_empty() {
            font + 2.0 * LEGEND_ITEM_GAP_PX
        } else {
            0.0
        },
        y_axis_gutter: widest_tick + 2.0 * AXIS_LABEL_GAP_PX,
        x_axis_band: font + 2.0 * AXIS_LABEL_GAP_PX,
    };
    let area = ChartArea::resolve(surface.viewport, insets)?;
    let categories = CategoryScale::new(labels.len(), area);

    debug!(
        surface_id = %surface.id,
        labels = labels.len(),
        datasets = datasets.len(),
        y_min = value_scale.domain().0,
        y_max = value_scale.domain().1,
        "build line chart frame"
    );

    let background = options.background_color.to_render_color(1.0);
    let grid = options.grid_color.to_render_color(1.0);
    let text = options.text_color.to_render_color(1.0);

    let mut frame = RenderFrame::new(surface.viewport).with_rect(RectPrimitive::new(
        0.0,
        0.0,
        f64::from(surface.viewport.width),
        f64::from(surface.viewport.height),
        background,
    ));

    for (tick, label) in ticks.iter().zip(tick_labels) {
        let y = value_scale.value_to_pixel(*tick, area)?;
        frame
            .lines
            .push(LinePrimitive::new(area.left, y, area.right, y, 1.0, grid));
        frame.texts.push(TextPrimitive::new(
            label,
            area.left - AXIS_LABEL_GAP_PX,
            y - font / 2.0,
            font,
            text,
            TextHAlign::Right,
        ));
    }

    for (index, label) in labels.iter().enumerate() {
        let Some(x) = categories.position(index) else {
            continue;
        };
        frame
            .lines
            .push(LinePrimitive::new(x, area.top, x, area.bottom, 1.0, grid));
        if !label.is_empty() {
            frame.texts.push(TextPrimitive::new(
                label.clone(),
                x,
                area.bottom + AXIS_LABEL_GAP_PX,
                font,
                text,
                TextHAlign::Center,
            ));
        }
    }

    if options.show_legend {
        append_legend(&mut frame, datasets, &styles, options, text);
    }

    for (index, (series, style)) in datasets.iter().zip(&styles).enumerate() {
        let runs = plotted_runs(series, categories, value_scale, area)?;
        trace!(
            series = index,
            label = %series.label,
            values = series.data.len(),
            plotted = runs.iter().map(Vec::len).sum::<usize>(),
            "plot series"
        );
        for run in runs {
            append_run(&mut frame, &run, *style, options, area);
        }
    }

    Ok(frame)
}

fn resolve_style(index: usize, series: &Series) -> ChartResult<ResolvedStyle> {
    let tension = series.tension.unwrap_or(0.0);
    if !tension.is_finite() || tension < 0.0 {
        return Err(ChartError::InvalidData(format!(
            "series `{}` tension must be finite and >= 0",
            series.label
        )));
    }
    Ok(ResolvedStyle {
        color: series
            .border_color
            .unwrap_or_else(|| default_series_color(index))
            .to_render_color(1.0),
        tension,
        fill: series.fill.unwrap_or(false),
    })
}

/// Splits a series into contiguous runs of pixel points, breaking at gaps.
fn plotted_runs(
    series: &Series,
    categories: CategoryScale,
    value_scale: ValueScale,
    area: ChartArea,
) -> ChartResult<Vec<Vec<(f64, f64)>>> {
    let mut runs = Vec::new();
    let mut current = Vec::new();
    for (index, &value) in series.data.iter().enumerate() {
        let Some(x) = categories.position(index) else {
            break;
        };
        if value.is_finite() {
            current.push((x, value_scale.value_to_pixel(value, area)?));
        } else if !current.is_empty() {
            runs.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    Ok(runs)
}

fn append_run(
    frame: &mut RenderFrame,
    run: &[(f64, f64)],
    style: ResolvedStyle,
    options: &EngineOptions,
    area: ChartArea,
) {
    let path = smooth_run(run, style.tension, options.curve_segments, area);

    if style.fill && path.len() >= 2 {
        let mut outline = path.clone();
        if let (Some(&(first_x, _)), Some(&(last_x, _))) = (path.first(), path.last()) {
            outline.push((last_x, area.bottom));
            outline.push((first_x, area.bottom));
        }
        frame.polygons.push(PolygonPrimitive::new(
            outline,
            style.color.with_alpha(FILL_ALPHA),
        ));
    }

    for pair in path.windows(2) {
        frame.lines.push(LinePrimitive::new(
            pair[0].0,
            pair[0].1,
            pair[1].0,
            pair[1].1,
            options.line_width_px,
            style.color,
        ));
    }

    let radius = options.point_radius_px;
    if radius > 0.0 {
        for &(x, y) in run {
            frame.rects.push(
                RectPrimitive::new(
                    x - radius,
                    y - radius,
                    radius * 2.0,
                    radius * 2.0,
                    style.color.with_alpha(MARKER_ALPHA),
                )
                .with_border(1.0, style.color)
                .with_corner_radius(radius),
            );
        }
    }
}

fn append_legend(
    frame: &mut RenderFrame,
    datasets: &[Series],
    styles: &[ResolvedStyle],
    options: &EngineOptions,
    text: Color,
) {
    let font = options.font_size_px;
    let item_widths: Vec<f64> = datasets
        .iter()
        .map(|series| {
            LEGEND_BOX_WIDTH_PX + AXIS_LABEL_GAP_PX + estimate_text_width(&series.label, font)
        })
        .collect();
    let total: f64 = item_widths.iter().sum::<f64>()
        + LEGEND_ITEM_GAP_PX * item_widths.len().saturating_sub(1) as f64;

    let mut x = ((f64::from(frame.viewport.width) - total) / 2.0).max(options.padding_px);
    let y = options.padding_px + LEGEND_ITEM_GAP_PX / 2.0;
    for ((series, style), width) in datasets.iter().zip(styles).zip(item_widths) {
        frame.rects.push(
            RectPrimitive::new(
                x,
                y,
                LEGEND_BOX_WIDTH_PX,
                font,
                style.color.with_alpha(MARKER_ALPHA),
            )
            .with_border(1.0, style.color),
        );
        if !series.label.is_empty() {
            frame.texts.push(TextPrimitive::new(
                series.label.clone(),
                x + LEGEND_BOX_WIDTH_PX + AXIS_LABEL_GAP_PX,
                y,
                font,
                text,
                TextHAlign::Left,
            ));
        }
        x += width + LEGEND_ITEM_GAP_PX;
    }
}

fn estimate_text_width(text: &str, font_size_px: f64) -> f64 {
    text.chars().count() as f64 * font_size_px * GLYPH_WIDTH_RATIO
}

/// Formats a tick with just enough precision to tell neighbouring ticks apart.
///
/// Magnitudes past `PLAIN_TICK_LIMIT` and steps below `SMALL_STEP_LIMIT`
/// switch to exponent notation so labels stay narrow.
fn format_tick(value: f64, step: f64) -> String {
    let usable_step = step.is_finite() && step > 0.0;
    if value != 0.0
        && (value.abs() >= PLAIN_TICK_LIMIT || (usable_step && step < SMALL_STEP_LIMIT))
    {
        let precision = if usable_step {
            saturating_digits((value.abs() / step).log10())
        } else {
            0
        };
        return format!("{value:.precision$e}");
    }

    let decimals = if usable_step && step < 1.0 {
        saturating_digits(-step.log10())
    } else {
        0
    };
    let formatted = format!("{value:.decimals$}");
    // avoid "-0" for ticks that round to zero
    if formatted.trim_start_matches('-').chars().all(|c| c == '0' || c == '.') {
        formatted.trim_start_matches('-').to_owned()
    } else {
        formatted
    }
}

fn saturating_digits(log10: f64) -> usize {
    if log10.is_nan() {
        return 0;
    }
    log10.ceil().clamp(0.0, MAX_TICK_DIGITS as f64) as usize
}
