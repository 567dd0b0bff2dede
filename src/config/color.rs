use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// 8-bit RGB triple carried by series styling.
///
/// Serialized as the CSS functional notation `rgb(r, g, b)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RgbColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl RgbColor {
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parses `rgb(r, g, b)` (whitespace around components is ignored) or `#rrggbb`.
    pub fn parse(input: &str) -> ChartResult<Self> {
        let trimmed = input.trim();
        if let Some(hex) = trimmed.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| invalid_color(input));
        }

        let lowered = trimmed.to_ascii_lowercase();
        let body = lowered
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| invalid_color(input))?;

        let mut channels = [0_u8; 3];
        let mut parts = body.split(',');
        for channel in &mut channels {
            let part = parts.next().ok_or_else(|| invalid_color(input))?;
            *channel = part.trim().parse().map_err(|_| invalid_color(input))?;
        }
        if parts.next().is_some() {
            return Err(invalid_color(input));
        }

        Ok(Self::new(channels[0], channels[1], channels[2]))
    }

    /// Converts to a normalized render color with the given alpha.
    #[must_use]
    pub fn to_render_color(self, alpha: f64) -> Color {
        Color::rgba(
            f64::from(self.red) / 255.0,
            f64::from(self.green) / 255.0,
            f64::from(self.blue) / 255.0,
            alpha,
        )
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}

impl TryFrom<String> for RgbColor {
    type Error = ChartError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<RgbColor> for String {
    fn from(value: RgbColor) -> Self {
        value.to_string()
    }
}

fn parse_hex(hex: &str) -> Option<RgbColor> {
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(RgbColor::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

fn invalid_color(input: &str) -> ChartError {
    ChartError::InvalidData(format!("unsupported color `{input}`"))
}

#[cfg(test)]
mod tests {
    use super::RgbColor;

    #[test]
    fn parses_functional_notation_with_irregular_spacing() {
        let color = RgbColor::parse("rgb(75,192, 192)").expect("parse");
        assert_eq!(color, RgbColor::new(75, 192, 192));
        assert_eq!(color.to_string(), "rgb(75, 192, 192)");
    }

    #[test]
    fn parses_hex_notation() {
        assert_eq!(
            RgbColor::parse("#eBb900").expect("hex"),
            RgbColor::new(235, 185, 0)
        );
    }

    #[test]
    fn rejects_out_of_range_and_malformed_inputs() {
        for input in ["rgb(256, 0, 0)", "rgb(1, 2)", "rgb(1, 2, 3, 4)", "#12345", "blue"] {
            assert!(RgbColor::parse(input).is_err(), "{input} should be rejected");
        }
    }

    #[test]
    fn serde_uses_css_string_form() {
        let json = serde_json::to_string(&RgbColor::new(1, 2, 3)).expect("serialize");
        assert_eq!(json, "\"rgb(1, 2, 3)\"");
        let back: RgbColor = serde_json::from_str("\"rgb( 1 ,2,3 )\"").expect("deserialize");
        assert_eq!(back, RgbColor::new(1, 2, 3));
    }
}
