use crate::core::ChartArea;
use crate::error::{ChartError, ChartResult};

/// Upper bound on requested ticks; larger counts are rejected.
pub const MAX_TICKS: usize = 64;

// spans narrower than this many ulps of the data magnitude count as flat
const FLAT_SPAN_ULPS: f64 = 1024.0;

/// Linear y scale with "nice" bounds aligned to its tick step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueScale {
    min: f64,
    max: f64,
    step: f64,
}

impl ValueScale {
    /// Fits a scale around the finite values in `values`.
    ///
    /// Non-finite values are ignored. Flat data is widened by at least one
    /// unit on each side; no data at all yields `0..1`. Bounds stay finite
    /// for any finite input, even near `f64::MAX`.
    pub fn fit<I>(values: I, max_ticks: usize) -> ChartResult<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        if !(2..=MAX_TICKS).contains(&max_ticks) {
            return Err(ChartError::InvalidData(format!(
                "value scale needs between 2 and {MAX_TICKS} ticks, got {max_ticks}"
            )));
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for value in values.into_iter().filter(|v| v.is_finite()) {
            min = min.min(value);
            max = max.max(value);
        }

        let (min, max) = if min.is_finite() {
            widen_flat(min, max)
        } else {
            (0.0, 1.0)
        };

        // divide before subtracting so spans wider than f64::MAX stay finite
        let intervals = (max_ticks - 1) as f64;
        let step = nice_step((max / intervals - min / intervals).min(f64::MAX));
        if !step.is_finite() || step <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "no usable tick step for value range {min}..{max}"
            )));
        }

        Ok(Self {
            min: lower_bound(min, step),
            max: upper_bound(max, step),
            step,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.min, self.max)
    }

    #[must_use]
    pub fn step(self) -> f64 {
        self.step
    }

    /// Step multiples inside the domain, ascending.
    ///
    /// Bounds that had to fall back to the raw data extremes may not be
    /// multiples; the domain ends are returned when fewer than two fit.
    #[must_use]
    pub fn ticks(self) -> Vec<f64> {
        // tolerance for bounds that are multiples up to rounding
        let first = (self.min / self.step - 1e-9).ceil();
        let last = (self.max / self.step + 1e-9).floor();
        if last <= first {
            return vec![self.min, self.max];
        }

        let count = (last - first) as usize + 1;
        let ticks: Vec<f64> = (0..count)
            .map(|i| (first + i as f64) * self.step)
            .filter(|tick| (self.min..=self.max).contains(tick))
            .collect();
        if ticks.len() < 2 {
            return vec![self.min, self.max];
        }
        ticks
    }

    /// Maps a value to a pixel y inside `area`; larger values sit higher.
    pub fn value_to_pixel(self, value: f64, area: ChartArea) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }
        // halved operands keep differences finite across the whole f64 range
        let normalized = (value * 0.5 - self.min * 0.5) / (self.max * 0.5 - self.min * 0.5);
        Ok(area.bottom - normalized * area.height())
    }
}

/// Widens a range too narrow to resolve into distinct ticks.
fn widen_flat(min: f64, max: f64) -> (f64, f64) {
    let magnitude = min.abs().max(max.abs());
    let resolution = magnitude * f64::EPSILON * FLAT_SPAN_ULPS;
    if max - min > resolution {
        return (min, max);
    }
    let spread = resolution.max(1.0);
    ((min - spread).max(f64::MIN), (max + spread).min(f64::MAX))
}

fn lower_bound(min: f64, step: f64) -> f64 {
    let mut bound = (min / step).floor() * step;
    // rounding in the division can land one step inside the data
    if bound > min {
        bound -= step;
    }
    if bound.is_finite() { bound } else { min }
}

fn upper_bound(max: f64, step: f64) -> f64 {
    let mut bound = (max / step).ceil() * step;
    if bound < max {
        bound += step;
    }
    if bound.is_finite() { bound } else { max }
}

/// Rounds a raw step up to 1, 2 or 5 times a power of ten.
///
/// Falls back to `raw` when the rounded step would overflow.
fn nice_step(raw: f64) -> f64 {
    let magnitude = 10_f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    let stepped = nice * magnitude;
    if stepped.is_finite() { stepped } else { raw }
}

#[cfg(test)]
mod tests {
    use super::{MAX_TICKS, ValueScale, nice_step};
    use crate::core::ChartArea;
    use approx::assert_relative_eq;

    const AREA: ChartArea = ChartArea {
        left: 0.0,
        top: 10.0,
        right: 100.0,
        bottom: 110.0,
    };

    fn assert_usable(scale: ValueScale, values: &[f64]) {
        let (min, max) = scale.domain();
        assert!(min.is_finite() && max.is_finite() && min < max);
        for value in values {
            assert!((min..=max).contains(value), "{value} outside {min}..{max}");
        }
        let ticks = scale.ticks();
        assert!(ticks.len() >= 2);
        assert!(ticks.windows(2).all(|pair| pair[0] < pair[1]));
        for tick in ticks {
            let y = scale.value_to_pixel(tick, AREA).expect("tick pixel");
            assert!(y.is_finite());
        }
    }

    #[test]
    fn nice_step_picks_one_two_five() {
        assert_relative_eq!(nice_step(0.7), 1.0);
        assert_relative_eq!(nice_step(1.3), 2.0);
        assert_relative_eq!(nice_step(4.86), 5.0);
        assert_relative_eq!(nice_step(7.0), 10.0);
        assert_relative_eq!(nice_step(130.0), 200.0);
        assert_eq!(nice_step(f64::MAX), f64::MAX);
    }

    #[test]
    fn heart_rate_values_get_round_bounds() {
        let scale = ValueScale::fit([56.0, 78.0, 90.0, 90.0], 8).expect("scale");
        assert_eq!(scale.domain(), (55.0, 90.0));
        assert_eq!(scale.ticks(), vec![55.0, 60.0, 65.0, 70.0, 75.0, 80.0, 85.0, 90.0]);
    }

    #[test]
    fn flat_and_empty_inputs_are_widened() {
        let flat = ValueScale::fit([3.0, 3.0, f64::NAN], 5).expect("flat");
        let (min, max) = flat.domain();
        assert!(min <= 2.0 && max >= 4.0);

        let empty = ValueScale::fit(std::iter::empty(), 5).expect("empty");
        let (min, max) = empty.domain();
        assert!(min <= 0.0 && max >= 1.0);
    }

    #[test]
    fn flat_data_at_large_magnitude_keeps_a_positive_step() {
        let scale = ValueScale::fit([1e17, 1e17], 8).expect("scale");
        assert!(scale.step() > 0.0);
        assert_usable(scale, &[1e17]);

        let top = ValueScale::fit([f64::MAX, f64::MAX], 8).expect("scale at f64::MAX");
        assert_usable(top, &[f64::MAX]);
    }

    #[test]
    fn ranges_wider_than_f64_max_stay_finite() {
        let scale = ValueScale::fit([-1e308, 1e308], 8).expect("scale");
        assert_usable(scale, &[-1e308, 1e308]);

        let extreme = ValueScale::fit([f64::MIN, f64::MAX], 2).expect("two ticks");
        assert_usable(extreme, &[f64::MIN, f64::MAX]);
    }

    #[test]
    fn tick_count_outside_supported_range_is_rejected() {
        assert!(ValueScale::fit([1.0, 2.0], 1).is_err());
        assert!(ValueScale::fit([1.0, 2.0], MAX_TICKS).is_ok());
        assert!(ValueScale::fit([1.0, 2.0], usize::MAX).is_err());
    }

    #[test]
    fn pixel_mapping_is_inverted() {
        let scale = ValueScale::fit([0.0, 100.0], 6).expect("scale");
        assert_relative_eq!(scale.value_to_pixel(0.0, AREA).expect("min"), 110.0);
        assert_relative_eq!(scale.value_to_pixel(100.0, AREA).expect("max"), 10.0);
        assert!(scale.value_to_pixel(f64::INFINITY, AREA).is_err());
    }
}
