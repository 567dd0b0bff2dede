use std::fmt::Write as _;
use std::path::Path;

use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, LinePrimitive, PolygonPrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign,
    TextPrimitive,
};

/// Renderer that serializes each frame into a standalone SVG document.
///
/// The latest document replaces the previous one on every `render` call.
#[derive(Debug, Clone, Default)]
pub struct SvgRenderer {
    document: String,
    render_count: usize,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "svg"
    }

    /// SVG markup of the last rendered frame; empty before the first render.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn render_count(&self) -> usize {
        self.render_count
    }

    pub fn write_to(&self, path: impl AsRef<Path>) -> ChartResult<()> {
        if self.document.is_empty() {
            return Err(ChartError::InvalidData(
                "nothing rendered yet; svg document is empty".to_owned(),
            ));
        }
        std::fs::write(path, self.document.as_bytes())?;
        Ok(())
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        let width = frame.viewport.width;
        let height = frame.viewport.height;
        let mut svg = String::with_capacity(4096);
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        );

        for polygon in &frame.polygons {
            let _ = writeln!(svg, "  {}", polygon_to_svg(polygon));
        }
        for rect in &frame.rects {
            let _ = writeln!(svg, "  {}", rect_to_svg(*rect));
        }
        for line in &frame.lines {
            let _ = writeln!(svg, "  {}", line_to_svg(*line));
        }
        for text in &frame.texts {
            let _ = writeln!(svg, "  {}", text_to_svg(text));
        }

        svg.push_str("</svg>\n");
        self.document = svg;
        self.render_count += 1;
        Ok(())
    }
}

fn color_to_css(color: Color) -> String {
    let channel = |value: f64| (value * 255.0).round() as u8;
    if color.alpha >= 1.0 {
        format!(
            "rgb({},{},{})",
            channel(color.red),
            channel(color.green),
            channel(color.blue)
        )
    } else {
        format!(
            "rgba({},{},{},{:.3})",
            channel(color.red),
            channel(color.green),
            channel(color.blue),
            color.alpha
        )
    }
}

fn polygon_to_svg(polygon: &PolygonPrimitive) -> String {
    let points = polygon
        .points
        .iter()
        .map(|(x, y)| format!("{x:.2},{y:.2}"))
        .collect::<Vec<_>>()
        .join(" ");
    format!(
        r#"<polygon points="{points}" fill="{}"/>"#,
        color_to_css(polygon.fill_color)
    )
}

fn rect_to_svg(rect: RectPrimitive) -> String {
    let stroke = if rect.border_width > 0.0 {
        format!(
            r#" stroke="{}" stroke-width="{}""#,
            color_to_css(rect.border_color),
            rect.border_width
        )
    } else {
        String::new()
    };
    let radius = if rect.corner_radius > 0.0 {
        let r = rect.corner_radius.min(rect.width * 0.5).min(rect.height * 0.5);
        format!(r#" rx="{r:.2}" ry="{r:.2}""#)
    } else {
        String::new()
    };
    format!(
        r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}"{radius} fill="{}"{stroke}/>"#,
        rect.x,
        rect.y,
        rect.width,
        rect.height,
        color_to_css(rect.fill_color)
    )
}

fn line_to_svg(line: LinePrimitive) -> String {
    format!(
        r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="{}"/>"#,
        line.x1,
        line.y1,
        line.x2,
        line.y2,
        color_to_css(line.color),
        line.stroke_width
    )
}

fn text_to_svg(text: &TextPrimitive) -> String {
    let anchor = match text.h_align {
        TextHAlign::Left => "start",
        TextHAlign::Center => "middle",
        TextHAlign::Right => "end",
    };
    format!(
        r#"<text x="{:.2}" y="{:.2}" font-family="sans-serif" font-size="{}" text-anchor="{anchor}" dominant-baseline="hanging" fill="{}">{}</text>"#,
        text.x,
        text.y,
        text.font_size_px,
        color_to_css(text.color),
        escape_xml(&text.text)
    )
}

fn escape_xml(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::{SvgRenderer, color_to_css, escape_xml};
    use crate::host::Viewport;
    use crate::render::{Color, RenderFrame, Renderer, TextHAlign, TextPrimitive};

    #[test]
    fn css_colors_switch_to_rgba_below_full_alpha() {
        assert_eq!(color_to_css(Color::rgb(1.0, 0.0, 0.0)), "rgb(255,0,0)");
        assert_eq!(
            color_to_css(Color::rgba(0.0, 0.0, 1.0, 0.25)),
            "rgba(0,0,255,0.250)"
        );
    }

    #[test]
    fn text_content_is_escaped() {
        assert_eq!(escape_xml("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");

        let frame = RenderFrame::new(Viewport::new(40, 20)).with_text(TextPrimitive::new(
            "<x>",
            1.0,
            1.0,
            10.0,
            Color::rgb(0.0, 0.0, 0.0),
            TextHAlign::Left,
        ));
        let mut renderer = SvgRenderer::new();
        renderer.render(&frame).expect("render");
        assert!(renderer.document().contains("&lt;x&gt;"));
        assert!(renderer.document().starts_with("<svg"));
    }

    #[test]
    fn write_before_render_is_rejected() {
        let renderer = SvgRenderer::new();
        assert!(renderer.write_to("unused.svg").is_err());
    }
}
