//! Easing curves
//!
//! The engine stages easing choices on batches and chain nodes; the playback
//! runtime applies them when producing intermediate values. `apply` is still
//! implemented here so hosts and tests can evaluate curves directly.

/// Easing function selection
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    #[default]
    Linear,
    /// Quadratic ease-in (accelerate from zero velocity)
    EaseIn,
    /// Quadratic ease-out (decelerate to zero velocity)
    EaseOut,
    EaseInOut,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    /// Sinusoidal oscillation, `cycles` full periods over the duration.
    /// Integer cycle counts start and end at zero displacement.
    Cycle(f32),
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::EaseInCubic => t * t * t,
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::Cycle(cycles) => (std::f32::consts::TAU * cycles * t).sin(),
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier_ease(t, *x1, *y1, *x2, *y2),
        }
    }
}

/// CSS-style cubic bezier easing: invert x(p) = t by bisection, then
/// evaluate y at the found parameter. Bisection always converges on the
/// monotonic x ranges valid bezier control points produce.
fn cubic_bezier_ease(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    let mut lo = 0.0_f32;
    let mut hi = 1.0_f32;
    let mut p = t;
    for _ in 0..24 {
        let x = bezier_axis(p, x1, x2);
        if (x - t).abs() < 1e-5 {
            break;
        }
        if x < t {
            lo = p;
        } else {
            hi = p;
        }
        p = (lo + hi) * 0.5;
    }

    bezier_axis(p, y1, y2)
}

/// One axis of a cubic bezier with endpoints pinned at 0 and 1
#[inline]
fn bezier_axis(t: f32, p1: f32, p2: f32) -> f32 {
    let u = 1.0 - t;
    3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_are_exact() {
        let curves = [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
            Easing::EaseInCubic,
            Easing::EaseOutCubic,
            Easing::EaseInOutCubic,
            Easing::CubicBezier(0.25, 0.1, 0.25, 1.0),
        ];
        for curve in curves {
            assert!((curve.apply(0.0)).abs() < 1e-4, "{curve:?} at 0");
            assert!((curve.apply(1.0) - 1.0).abs() < 1e-4, "{curve:?} at 1");
        }
    }

    #[test]
    fn test_ease_in_is_below_linear() {
        assert!(Easing::EaseIn.apply(0.3) < 0.3);
        assert!(Easing::EaseInCubic.apply(0.3) < Easing::EaseIn.apply(0.3));
    }

    #[test]
    fn test_ease_out_is_above_linear() {
        assert!(Easing::EaseOut.apply(0.3) > 0.3);
    }

    #[test]
    fn test_cycle_returns_to_zero_on_whole_cycles() {
        let cycle = Easing::Cycle(5.0);
        assert!(cycle.apply(0.0).abs() < 1e-4);
        assert!(cycle.apply(1.0).abs() < 1e-3);
        // Quarter period of the first cycle peaks at 1.0
        assert!((cycle.apply(0.05) - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_cubic_bezier_matches_known_curve() {
        // ease-in-out-ish curve, midpoint should be close to 0.5
        let curve = Easing::CubicBezier(0.42, 0.0, 0.58, 1.0);
        assert!((curve.apply(0.5) - 0.5).abs() < 1e-3);
        // and it should be slow near the start
        assert!(curve.apply(0.1) < 0.1);
    }
}
