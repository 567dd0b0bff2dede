use crate::error::{ChartError, ChartResult};
use crate::host::Viewport;

/// Space reserved around the plot area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutInsets {
    pub padding: f64,
    pub legend_band: f64,
    pub y_axis_gutter: f64,
    pub x_axis_band: f64,
}

/// Plot rectangle inside a surface viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartArea {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl ChartArea {
    /// Carves the plot rectangle out of `viewport`.
    ///
    /// Fails with `InvalidViewport` when the insets leave no drawable room.
    pub fn resolve(viewport: Viewport, insets: LayoutInsets) -> ChartResult<Self> {
        for (name, value) in [
            ("padding", insets.padding),
            ("legend band", insets.legend_band),
            ("y axis gutter", insets.y_axis_gutter),
            ("x axis band", insets.x_axis_band),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "layout {name} must be finite and >= 0"
                )));
            }
        }

        let area = Self {
            left: insets.padding + insets.y_axis_gutter,
            top: insets.padding + insets.legend_band,
            right: f64::from(viewport.width) - insets.padding,
            bottom: f64::from(viewport.height) - insets.padding - insets.x_axis_band,
        };
        if !viewport.is_valid() || area.width() <= 0.0 || area.height() <= 0.0 {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        Ok(area)
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }

    #[must_use]
    pub fn clamp_point(self, x: f64, y: f64) -> (f64, f64) {
        (x.clamp(self.left, self.right), y.clamp(self.top, self.bottom))
    }
}

#[cfg(test)]
mod tests {
    use super::{ChartArea, LayoutInsets};
    use crate::error::ChartError;
    use crate::host::Viewport;

    const INSETS: LayoutInsets = LayoutInsets {
        padding: 10.0,
        legend_band: 20.0,
        y_axis_gutter: 30.0,
        x_axis_band: 15.0,
    };

    #[test]
    fn area_subtracts_all_insets() {
        let area = ChartArea::resolve(Viewport::new(200, 100), INSETS).expect("area");
        assert_eq!(area.left, 40.0);
        assert_eq!(area.top, 30.0);
        assert_eq!(area.right, 190.0);
        assert_eq!(area.bottom, 75.0);
    }

    #[test]
    fn too_small_viewport_is_rejected() {
        let err = ChartArea::resolve(Viewport::new(30, 30), INSETS).expect_err("too small");
        assert!(matches!(err, ChartError::InvalidViewport { width: 30, height: 30 }));
    }
}
