//=========================================================================
// Easing Curves
//=========================================================================
//
// Normalized easing functions: input and output both in [0, 1].
//
// The families cover every curve the site uses: quadratic through
// quartic power curves in each direction, plus the exponential in-out
// used by the loader reveal.
//
//=========================================================================

/// Easing curve applied to a normalized progress value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Easing {
    Linear,
    QuadIn,
    QuadOut,
    QuadInOut,
    CubicIn,
    CubicOut,
    CubicInOut,
    QuartIn,
    QuartOut,
    QuartInOut,
    ExpoInOut,
}

impl Easing {
    /// Evaluates the curve at `t`, clamping the input to [0, 1].
    ///
    /// Every curve maps 0 → 0 and 1 → 1 and is monotone non-decreasing
    /// in between, which is what keeps scrubbed animation reversible.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,

            Easing::QuadIn => t * t,
            Easing::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::QuadInOut => in_out(t, 2),

            Easing::CubicIn => t * t * t,
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
            Easing::CubicInOut => in_out(t, 3),

            Easing::QuartIn => t.powi(4),
            Easing::QuartOut => 1.0 - (1.0 - t).powi(4),
            Easing::QuartInOut => in_out(t, 4),

            Easing::ExpoInOut => {
                if t == 0.0 {
                    0.0
                } else if t == 1.0 {
                    1.0
                } else if t < 0.5 {
                    (2.0f32).powf(20.0 * t - 10.0) / 2.0
                } else {
                    (2.0 - (2.0f32).powf(-20.0 * t + 10.0)) / 2.0
                }
            }
        }
    }
}

impl Default for Easing {
    fn default() -> Self {
        Easing::Linear
    }
}

// Symmetric power in-out: accelerate on the first half, mirror on the
// second.
fn in_out(t: f32, power: i32) -> f32 {
    if t < 0.5 {
        (2.0f32).powi(power - 1) * t.powi(power)
    } else {
        1.0 - (-2.0 * t + 2.0).powi(power) / (2.0f32).powi(power)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 11] = [
        Easing::Linear,
        Easing::QuadIn,
        Easing::QuadOut,
        Easing::QuadInOut,
        Easing::CubicIn,
        Easing::CubicOut,
        Easing::CubicInOut,
        Easing::QuartIn,
        Easing::QuartOut,
        Easing::QuartInOut,
        Easing::ExpoInOut,
    ];

    #[test]
    fn endpoints_are_fixed() {
        for easing in ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{:?} at 0", easing);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{:?} at 1", easing);
        }
    }

    #[test]
    fn every_curve_is_monotone() {
        for easing in ALL {
            let mut previous = easing.apply(0.0);
            for step in 1..=100 {
                let value = easing.apply(step as f32 / 100.0);
                assert!(
                    value >= previous - 1e-6,
                    "{:?} decreased at t={}",
                    easing,
                    step as f32 / 100.0
                );
                previous = value;
            }
        }
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        for easing in ALL {
            assert_eq!(easing.apply(-1.0), 0.0);
            assert!((easing.apply(2.0) - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn quad_out_front_loads_motion() {
        assert!(Easing::QuadOut.apply(0.25) > 0.25);
        assert!(Easing::QuadIn.apply(0.25) < 0.25);
    }

    #[test]
    fn in_out_curves_cross_center() {
        for easing in [Easing::QuadInOut, Easing::CubicInOut, Easing::QuartInOut, Easing::ExpoInOut] {
            assert!((easing.apply(0.5) - 0.5).abs() < 1e-6, "{:?}", easing);
        }
    }
}
