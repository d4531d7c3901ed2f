//! Per-segment easing curves.
//!
//! Every timeline owns a [`CurveTable`] with one [`Curve`] per segment (the
//! span between keyframe `i` and keyframe `i + 1`). A curve maps the linear
//! fraction of time elapsed in a segment to an eased fraction that the
//! timeline then uses to interpolate keyframe values.
//!
//! Bezier curves are not solved exactly at playback time. When a curve is
//! set, the cubic is sampled at [`BEZIER_SEGMENTS`] uniform parameter steps
//! and evaluation interpolates linearly between the two samples bracketing
//! the query.

use glam::Vec2;

/// Number of straight segments a Bezier curve is approximated with.
pub const BEZIER_SEGMENTS: usize = 10;

const BEZIER_SAMPLES: usize = BEZIER_SEGMENTS - 1;

/// Easing of a single keyframe segment.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Curve {
    /// Identity: the eased fraction equals the linear fraction.
    #[default]
    Linear,
    /// Holds the left keyframe until the segment is fully traversed.
    Stepped,
    /// Cubic Bezier from `(0, 0)` to `(1, 1)`.
    Bezier(BezierSamples),
}

impl Curve {
    #[must_use]
    pub fn bezier(cx1: f32, cy1: f32, cx2: f32, cy2: f32) -> Self {
        Self::Bezier(BezierSamples::new(cx1, cy1, cx2, cy2))
    }

    /// Maps a linear fraction in `[0, 1]` to an eased fraction in `[0, 1]`.
    #[inline]
    #[must_use]
    pub fn percent(&self, percent: f32) -> f32 {
        match self {
            Self::Linear => percent,
            Self::Stepped => {
                if percent >= 1.0 {
                    1.0
                } else {
                    0.0
                }
            }
            Self::Bezier(samples) => samples.percent(percent),
        }
    }
}

/// Precomputed interior points of a cubic Bezier easing curve.
///
/// The endpoints `(0, 0)` and `(1, 1)` are implicit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BezierSamples {
    points: [Vec2; BEZIER_SAMPLES],
}

impl BezierSamples {
    /// Samples the curve with control points `(cx1, cy1)` and `(cx2, cy2)`.
    #[must_use]
    pub fn new(cx1: f32, cy1: f32, cx2: f32, cy2: f32) -> Self {
        let p1 = Vec2::new(cx1, cy1);
        let p2 = Vec2::new(cx2, cy2);

        let mut points = [Vec2::ZERO; BEZIER_SAMPLES];
        for (i, point) in points.iter_mut().enumerate() {
            let t = (i + 1) as f32 / BEZIER_SEGMENTS as f32;
            *point = cubic_bezier(Vec2::ZERO, p1, p2, Vec2::ONE, t);
        }
        Self { points }
    }

    #[must_use]
    pub fn points(&self) -> &[Vec2; BEZIER_SAMPLES] {
        &self.points
    }

    fn percent(&self, percent: f32) -> f32 {
        if percent <= 0.0 {
            return 0.0;
        }
        if percent >= 1.0 {
            return 1.0;
        }

        let mut prev = Vec2::ZERO;
        for &point in &self.points {
            if point.x >= percent {
                return interpolate_segment(prev, point, percent);
            }
            prev = point;
        }
        interpolate_segment(prev, Vec2::ONE, percent)
    }
}

#[inline]
fn cubic_bezier(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let h = 1.0 - t;
    p0 * (h * h * h) + p1 * (3.0 * t * h * h) + p2 * (3.0 * t * t * h) + p3 * (t * t * t)
}

#[inline]
fn interpolate_segment(a: Vec2, b: Vec2, x: f32) -> f32 {
    let dx = b.x - a.x;
    if dx <= f32::EPSILON {
        return b.y;
    }
    a.y + (b.y - a.y) * (x - a.x) / dx
}

/// One [`Curve`] per keyframe segment of a timeline.
///
/// Segments default to [`Curve::Linear`]. The table is filled while the
/// owning timeline is being built and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CurveTable {
    curves: Vec<Curve>,
}

impl CurveTable {
    #[must_use]
    pub fn new(segment_count: usize) -> Self {
        Self {
            curves: vec![Curve::Linear; segment_count],
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn curve(&self, segment: usize) -> &Curve {
        &self.curves[segment]
    }

    pub fn set(&mut self, segment: usize, curve: Curve) {
        self.curves[segment] = curve;
    }

    pub fn set_linear(&mut self, segment: usize) {
        self.set(segment, Curve::Linear);
    }

    pub fn set_stepped(&mut self, segment: usize) {
        self.set(segment, Curve::Stepped);
    }

    pub fn set_bezier(&mut self, segment: usize, cx1: f32, cy1: f32, cx2: f32, cy2: f32) {
        self.set(segment, Curve::bezier(cx1, cy1, cx2, cy2));
    }

    /// Eased fraction for `percent` of the way through `segment`.
    #[inline]
    #[must_use]
    pub fn curve_percent(&self, segment: usize, percent: f32) -> f32 {
        self.curves[segment].percent(percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_linear_is_identity() {
        let table = CurveTable::new(1);
        for i in 0..=10 {
            let f = i as f32 / 10.0;
            assert_eq!(table.curve_percent(0, f), f);
        }
    }

    #[test]
    fn test_stepped_holds_until_end() {
        let mut table = CurveTable::new(2);
        table.set_stepped(1);
        assert_eq!(table.curve_percent(1, 0.0), 0.0);
        assert_eq!(table.curve_percent(1, 0.5), 0.0);
        assert_eq!(table.curve_percent(1, 0.999), 0.0);
        assert_eq!(table.curve_percent(1, 1.0), 1.0);
        // untouched segment stays linear
        assert_eq!(table.curve_percent(0, 0.5), 0.5);
    }

    #[test]
    fn test_bezier_endpoints_exact() {
        let curve = Curve::bezier(0.25, 0.1, 0.25, 1.0);
        assert_eq!(curve.percent(0.0), 0.0);
        assert_eq!(curve.percent(1.0), 1.0);
    }

    #[test]
    fn test_bezier_on_diagonal_is_near_linear() {
        let curve = Curve::bezier(1.0 / 3.0, 1.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0);
        for i in 0..=20 {
            let f = i as f32 / 20.0;
            assert!(
                (curve.percent(f) - f).abs() < EPSILON,
                "f={f}: got {}",
                curve.percent(f)
            );
        }
    }

    #[test]
    fn test_bezier_ease_in_is_below_diagonal() {
        let curve = Curve::bezier(0.9, 0.0, 1.0, 0.1);
        for f in [0.2, 0.4, 0.6, 0.8] {
            assert!(curve.percent(f) < f, "f={f}: got {}", curve.percent(f));
        }
    }

    #[test]
    fn test_bezier_is_monotonic() {
        let curve = Curve::bezier(0.1, 0.8, 0.4, 0.2);
        let mut last = 0.0;
        for i in 0..=100 {
            let v = curve.percent(i as f32 / 100.0);
            assert!(v >= last - EPSILON, "non-monotonic at {i}: {v} < {last}");
            last = v;
        }
    }

    #[test]
    fn test_bezier_hits_its_own_samples() {
        let samples = BezierSamples::new(0.3, 0.0, 0.7, 1.0);
        let curve = Curve::Bezier(samples);
        for point in samples.points() {
            assert!((curve.percent(point.x) - point.y).abs() < EPSILON);
        }
    }

    #[test]
    fn test_out_of_range_input_clamped_for_bezier() {
        let curve = Curve::bezier(0.5, 0.0, 0.5, 1.0);
        assert_eq!(curve.percent(-0.5), 0.0);
        assert_eq!(curve.percent(1.5), 1.0);
    }
}
