use crate::core::ChartArea;

/// Most line segments a single Bézier span is flattened into.
pub const MAX_CURVE_SEGMENTS: usize = 256;

/// Bézier control points on either side of one plotted point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoints {
    pub previous: (f64, f64),
    pub next: (f64, f64),
}

/// Computes tension-scaled control points for a run of points.
///
/// Each control pair lies on the line parallel to `previous -> next`,
/// offset in proportion to the neighbour distances. Run endpoints use the
/// point itself as the outer neighbour, and control points are kept inside
/// `area` so curves cannot overshoot the plot.
#[must_use]
pub fn control_points(points: &[(f64, f64)], tension: f64, area: ChartArea) -> Vec<ControlPoints> {
    let mut controls = Vec::with_capacity(points.len());
    for (index, &current) in points.iter().enumerate() {
        let previous = if index == 0 {
            current
        } else {
            points[index - 1]
        };
        let next = points.get(index + 1).copied().unwrap_or(current);

        let d01 = distance(previous, current);
        let d12 = distance(current, next);
        let total = d01 + d12;
        let (s01, s12) = if total > 0.0 {
            (d01 / total, d12 / total)
        } else {
            (0.0, 0.0)
        };

        let fa = tension * s01;
        let fb = tension * s12;
        let dx = next.0 - previous.0;
        let dy = next.1 - previous.1;

        controls.push(ControlPoints {
            previous: area.clamp_point(current.0 - fa * dx, current.1 - fa * dy),
            next: area.clamp_point(current.0 + fb * dx, current.1 + fb * dy),
        });
    }
    controls
}

/// Samples a cubic Bézier into `segments + 1` points, endpoints included.
///
/// `segments` is clamped to `1..=MAX_CURVE_SEGMENTS`.
#[must_use]
pub fn flatten_cubic(
    start: (f64, f64),
    control_a: (f64, f64),
    control_b: (f64, f64),
    end: (f64, f64),
    segments: usize,
) -> Vec<(f64, f64)> {
    let segments = segments.clamp(1, MAX_CURVE_SEGMENTS);
    (0..=segments)
        .map(|step| {
            let t = step as f64 / segments as f64;
            let mt = 1.0 - t;
            let a = mt * mt * mt;
            let b = 3.0 * mt * mt * t;
            let c = 3.0 * mt * t * t;
            let d = t * t * t;
            (
                a * start.0 + b * control_a.0 + c * control_b.0 + d * end.0,
                a * start.1 + b * control_a.1 + c * control_b.1 + d * end.1,
            )
        })
        .collect()
}

/// Produces the polyline for one contiguous run of points.
///
/// Zero tension returns the points unchanged.
#[must_use]
pub fn smooth_run(
    points: &[(f64, f64)],
    tension: f64,
    segments: usize,
    area: ChartArea,
) -> Vec<(f64, f64)> {
    if points.len() < 2 || tension <= 0.0 {
        return points.to_vec();
    }

    let controls = control_points(points, tension, area);
    let spans = points.len() - 1;
    let mut path = Vec::with_capacity(
        spans
            .saturating_mul(segments.clamp(1, MAX_CURVE_SEGMENTS))
            .saturating_add(1),
    );
    path.push(points[0]);
    for index in 0..spans {
        let sampled = flatten_cubic(
            points[index],
            controls[index].next,
            controls[index + 1].previous,
            points[index + 1],
            segments,
        );
        path.extend(sampled.into_iter().skip(1));
    }
    path
}

fn distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    (b.0 - a.0).hypot(b.1 - a.1)
}
