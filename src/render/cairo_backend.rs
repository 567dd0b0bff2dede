use cairo::{Context, Format, ImageSurface, Operator};
use pango::FontDescription;
use std::f64::consts::{FRAC_PI_2, PI};
use std::fs::File;
use std::path::Path;

use crate::error::{ChartError, ChartResult};
use crate::host::Viewport;
use crate::render::{
    Color, LinePrimitive, PolygonPrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign,
    TextPrimitive,
};

/// Primitive counts from the last completed draw pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub polygons_drawn: usize,
    pub rects_drawn: usize,
    pub lines_drawn: usize,
    pub texts_drawn: usize,
}

/// Rasterizes frames into an offscreen ARGB32 image that can be saved as PNG.
#[derive(Debug)]
pub struct CairoRenderer {
    image: ImageSurface,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(viewport: Viewport) -> ChartResult<Self> {
        let invalid = || ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        };
        if !viewport.is_valid() {
            return Err(invalid());
        }
        let width = i32::try_from(viewport.width).map_err(|_| invalid())?;
        let height = i32::try_from(viewport.height).map_err(|_| invalid())?;

        let image = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| backend_error("failed to create image surface", err))?;
        Ok(Self {
            image,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango"
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    pub fn write_png(&self, path: impl AsRef<Path>) -> ChartResult<()> {
        let mut file = File::create(path)?;
        self.image
            .write_to_png(&mut file)
            .map_err(|err| ChartError::InvalidData(format!("failed to encode png: {err}")))
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        let context = Context::new(&self.image)
            .map_err(|err| backend_error("failed to create cairo context", err))?;

        // wipe the previous pass; the frame carries its own background
        context.set_operator(Operator::Clear);
        context
            .paint()
            .map_err(|err| backend_error("failed to clear image", err))?;
        context.set_operator(Operator::Over);

        let mut stats = CairoRenderStats::default();
        for polygon in &frame.polygons {
            draw_polygon(&context, polygon)?;
            stats.polygons_drawn += 1;
        }
        for rect in &frame.rects {
            draw_rect(&context, *rect)?;
            stats.rects_drawn += 1;
        }
        for line in &frame.lines {
            draw_line(&context, *line)?;
            stats.lines_drawn += 1;
        }
        for text in &frame.texts {
            draw_text(&context, text);
            stats.texts_drawn += 1;
        }

        self.last_stats = stats;
        Ok(())
    }
}

fn set_source(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn draw_polygon(context: &Context, polygon: &PolygonPrimitive) -> ChartResult<()> {
    let mut points = polygon.points.iter();
    if let Some(&(x, y)) = points.next() {
        context.move_to(x, y);
    }
    for &(x, y) in points {
        context.line_to(x, y);
    }
    context.close_path();
    set_source(context, polygon.fill_color);
    context
        .fill()
        .map_err(|err| backend_error("failed to fill polygon", err))
}

fn draw_rect(context: &Context, rect: RectPrimitive) -> ChartResult<()> {
    let radius = rect
        .corner_radius
        .min(rect.width * 0.5)
        .min(rect.height * 0.5);
    if radius > 0.0 {
        let right = rect.x + rect.width;
        let bottom = rect.y + rect.height;
        context.new_sub_path();
        context.arc(right - radius, rect.y + radius, radius, -FRAC_PI_2, 0.0);
        context.arc(right - radius, bottom - radius, radius, 0.0, FRAC_PI_2);
        context.arc(rect.x + radius, bottom - radius, radius, FRAC_PI_2, PI);
        context.arc(rect.x + radius, rect.y + radius, radius, PI, PI + FRAC_PI_2);
        context.close_path();
    } else {
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
    }

    set_source(context, rect.fill_color);
    if rect.border_width <= 0.0 {
        return context
            .fill()
            .map_err(|err| backend_error("failed to fill rect", err));
    }
    context
        .fill_preserve()
        .map_err(|err| backend_error("failed to fill rect", err))?;
    set_source(context, rect.border_color);
    context.set_line_width(rect.border_width);
    context
        .stroke()
        .map_err(|err| backend_error("failed to stroke rect border", err))
}

fn draw_line(context: &Context, line: LinePrimitive) -> ChartResult<()> {
    set_source(context, line.color);
    context.set_line_width(line.stroke_width);
    context.move_to(line.x1, line.y1);
    context.line_to(line.x2, line.y2);
    context
        .stroke()
        .map_err(|err| backend_error("failed to stroke line", err))
}

fn draw_text(context: &Context, text: &TextPrimitive) {
    let layout = pangocairo::functions::create_layout(context);
    let font = FontDescription::from_string(&format!("Sans {}px", text.font_size_px));
    layout.set_font_description(Some(&font));
    layout.set_text(&text.text);

    let (width, _) = layout.pixel_size();
    let width = f64::from(width);
    let x = match text.h_align {
        TextHAlign::Left => text.x,
        TextHAlign::Center => text.x - width / 2.0,
        TextHAlign::Right => text.x - width,
    };
    set_source(context, text.color);
    context.move_to(x, text.y);
    pangocairo::functions::show_layout(context, &layout);
}

fn backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
