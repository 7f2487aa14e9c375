//! Per-corner curve geometry
//!
//! A smooth corner is traced as two mirror-image cubic bezier "shoulders"
//! joined by a circular arc. `CornerProfile` holds the derived control
//! distances for one corner; the profile is orientation-free and gets
//! reflected into place by the path assembler.

use std::f32::consts::SQRT_2;

/// Derived geometry for one corner's composite curve
///
/// Distances are in length units along the corner's local axes. `p` is the
/// total linear footprint the curve consumes along an adjacent edge, measured
/// from the corner vertex.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CornerProfile {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    /// Total footprint of the corner along one edge
    pub p: f32,
    /// Per-axis displacement of the central arc segment (chord / sqrt(2))
    pub arc_section_length: f32,
    /// The radius this profile was computed for
    pub corner_radius: f32,
}

impl CornerProfile {
    /// Degenerate profile: a straight right-angle join consuming no edge space
    pub const ZERO: CornerProfile = CornerProfile {
        a: 0.0,
        b: 0.0,
        c: 0.0,
        d: 0.0,
        p: 0.0,
        arc_section_length: 0.0,
        corner_radius: 0.0,
    };

    /// Compute the curve geometry for one corner.
    ///
    /// `smoothing` is the shared factor in `[0, 1]`: 0 traces a plain
    /// circular arc, 1 the maximal continuous blend. `budget` is the largest
    /// footprint this corner may consume along an edge (see
    /// [`normalize`](crate::normalize)).
    ///
    /// When the natural footprint `(1 + smoothing) * radius` exceeds the
    /// budget, one of two clamp modes applies:
    /// - `preserve_smoothing == false`: the smoothing factor itself is
    ///   reduced until the footprint fits, keeping the radius authoritative.
    /// - `preserve_smoothing == true`: the shoulder lengths are compressed
    ///   against the budget while the smoothing character is kept.
    ///
    /// A non-positive radius or budget yields [`CornerProfile::ZERO`]. All
    /// finite non-negative inputs produce finite output; validating against
    /// negative or non-finite values is the caller's job.
    pub fn compute(radius: f32, smoothing: f32, preserve_smoothing: bool, budget: f32) -> Self {
        if radius <= 0.0 || budget <= 0.0 {
            return CornerProfile::ZERO;
        }

        let mut smoothing = smoothing;
        let mut p = (1.0 + smoothing) * radius;

        if !preserve_smoothing && p > budget {
            let max_smoothing = budget / radius - 1.0;
            smoothing = smoothing.min(max_smoothing);
            p = p.min(budget);
        }

        // Angular split of the 90-degree corner: the circular arc covers
        // `arc_measure`, the two bezier shoulders absorb the rest.
        let arc_measure = 90.0 * (1.0 - smoothing);
        let arc_section_length = (arc_measure / 2.0).to_radians().sin() * radius * SQRT_2;

        let alpha = (90.0 - arc_measure) / 2.0;
        let p3_to_p4 = radius * (alpha / 2.0).to_radians().tan();
        let beta = 45.0 * smoothing;

        let c = p3_to_p4 * beta.to_radians().cos();
        let d = c * beta.to_radians().tan();
        let mut b = (p - arc_section_length - c - d) / 3.0;
        let mut a = 2.0 * b;

        if preserve_smoothing && p > budget {
            let p1_to_p3_max = budget - d - arc_section_length - c;
            let min_a = p1_to_p3_max / 6.0;
            let max_b = p1_to_p3_max - min_a;
            b = b.min(max_b);
            a = p1_to_p3_max - b;
            p = p.min(budget);
        }

        CornerProfile {
            a,
            b,
            c,
            d,
            p,
            arc_section_length,
            corner_radius: radius,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.a.is_finite()
            && self.b.is_finite()
            && self.c.is_finite()
            && self.d.is_finite()
            && self.p.is_finite()
            && self.arc_section_length.is_finite()
            && self.corner_radius.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn test_degenerate_corner_is_zero() {
        assert_eq!(CornerProfile::compute(0.0, 0.6, false, 50.0), CornerProfile::ZERO);
        assert_eq!(CornerProfile::compute(10.0, 0.6, false, 0.0), CornerProfile::ZERO);
        assert_eq!(CornerProfile::compute(-4.0, 0.6, true, 50.0), CornerProfile::ZERO);
    }

    #[test]
    fn test_zero_smoothing_is_pure_arc() {
        // With smoothing 0 the shoulders vanish and the whole footprint is
        // the quarter-circle arc of the given radius.
        let profile = CornerProfile::compute(10.0, 0.0, false, 50.0);
        assert!(profile.a.abs() < EPS);
        assert!(profile.b.abs() < EPS);
        assert!(profile.c.abs() < EPS);
        assert!(profile.d.abs() < EPS);
        assert!((profile.p - 10.0).abs() < EPS);
        assert!((profile.arc_section_length - 10.0).abs() < EPS);
    }

    #[test]
    fn test_footprint_scales_with_smoothing() {
        let profile = CornerProfile::compute(10.0, 0.6, false, 50.0);
        assert!((profile.p - 16.0).abs() < EPS);
        assert!(profile.is_finite());
    }

    #[test]
    fn test_footprint_respects_budget() {
        // 40 * 1.6 = 64 would overflow a budget of 50 in both clamp modes.
        for preserve in [false, true] {
            let profile = CornerProfile::compute(40.0, 0.6, preserve, 50.0);
            assert!(profile.p <= 50.0 + EPS, "preserve={preserve}: p={}", profile.p);
            assert!(profile.is_finite());
        }
    }

    #[test]
    fn test_preserve_smoothing_keeps_arc_sweep() {
        // The shrink-smoothing mode widens the arc back toward a circle; the
        // preserve mode must keep the arc segment of the unclamped shape.
        let free = CornerProfile::compute(40.0, 0.6, false, 1000.0);
        let clamped = CornerProfile::compute(40.0, 0.6, false, 50.0);
        let preserved = CornerProfile::compute(40.0, 0.6, true, 50.0);
        assert!((preserved.arc_section_length - free.arc_section_length).abs() < EPS);
        assert!(clamped.arc_section_length > preserved.arc_section_length);
    }

    #[test]
    fn test_smoothing_monotonicity() {
        // Increasing smoothing never grows the arc sweep and never shrinks
        // the footprint (until the budget caps it).
        let mut last_arc = f32::INFINITY;
        let mut last_p = 0.0f32;
        for i in 0..=10 {
            let smoothing = i as f32 / 10.0;
            let profile = CornerProfile::compute(10.0, smoothing, false, 100.0);
            assert!(profile.arc_section_length <= last_arc + EPS);
            assert!(profile.p >= last_p - EPS);
            last_arc = profile.arc_section_length;
            last_p = profile.p;
        }
    }

    #[test]
    fn test_all_finite_over_input_grid() {
        for radius in [0.5, 1.0, 10.0, 40.0, 500.0] {
            for smoothing in [0.0, 0.1, 0.5, 0.9, 1.0] {
                for budget in [0.5, 10.0, 50.0, 1000.0] {
                    for preserve in [false, true] {
                        let profile =
                            CornerProfile::compute(radius, smoothing, preserve, budget);
                        assert!(
                            profile.is_finite(),
                            "r={radius} s={smoothing} preserve={preserve} budget={budget}"
                        );
                    }
                }
            }
        }
    }
}
