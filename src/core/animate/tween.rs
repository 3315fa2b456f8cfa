//=========================================================================
// Tween
//=========================================================================
//
// Fixed-duration eased transition between two values, advanced by frame
// time. This is the one timed-animation primitive in the crate: reveal
// bindings, the modal fade, the cursor scale and the hero intro all run
// on it, driven from the per-frame scheduler rather than any timeline
// engine.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::easing::Easing;

//=== Tween ===============================================================

/// Eased transition from `from` to `to` over `duration` seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    duration: f32,
    easing: Easing,
    elapsed: f32,
}

impl Tween {
    /// Creates a tween. A non-positive duration completes immediately at
    /// `to`.
    pub fn new(from: f32, to: f32, duration: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            easing,
            elapsed: 0.0,
        }
    }

    /// Advances by `dt` seconds and returns the current value.
    pub fn advance(&mut self, dt: f32) -> f32 {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration);
        self.value()
    }

    /// Current value without advancing.
    pub fn value(&self) -> f32 {
        if self.duration == 0.0 {
            return self.to;
        }
        let progress = self.easing.apply(self.elapsed / self.duration);
        self.from + (self.to - self.from) * progress
    }

    /// Normalized progress in [0, 1] (before easing).
    pub fn progress(&self) -> f32 {
        if self.duration == 0.0 {
            1.0
        } else {
            self.elapsed / self.duration
        }
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    /// Redirects the tween toward a new target, restarting from the
    /// current value with the full duration. This is how an in-flight
    /// transition is overridden without a visual snap.
    pub fn retarget(&mut self, to: f32) {
        *self = Tween::new(self.value(), to, self.duration, self.easing);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_from_start_to_end() {
        let mut tween = Tween::new(0.0, 100.0, 1.0, Easing::Linear);
        assert_eq!(tween.value(), 0.0);

        assert_eq!(tween.advance(0.25), 25.0);
        assert_eq!(tween.advance(0.25), 50.0);
        assert!(!tween.is_finished());

        assert_eq!(tween.advance(0.5), 100.0);
        assert!(tween.is_finished());
    }

    #[test]
    fn overshooting_dt_clamps_at_end() {
        let mut tween = Tween::new(10.0, 20.0, 0.5, Easing::QuadOut);
        assert_eq!(tween.advance(5.0), 20.0);
        assert!(tween.is_finished());
    }

    #[test]
    fn zero_duration_completes_immediately() {
        let tween = Tween::new(0.0, 42.0, 0.0, Easing::Linear);
        assert_eq!(tween.value(), 42.0);
        assert!(tween.is_finished());
    }

    #[test]
    fn descending_range_works() {
        let mut tween = Tween::new(100.0, 0.0, 1.0, Easing::Linear);
        assert_eq!(tween.advance(0.5), 50.0);
    }

    #[test]
    fn retarget_restarts_from_current_value() {
        let mut tween = Tween::new(0.0, 100.0, 1.0, Easing::Linear);
        tween.advance(0.5);
        assert_eq!(tween.value(), 50.0);

        tween.retarget(0.0);
        assert_eq!(tween.value(), 50.0, "no snap on override");
        assert!(!tween.is_finished());

        assert_eq!(tween.advance(0.5), 25.0, "full duration toward new target");
        assert_eq!(tween.advance(0.5), 0.0);
    }

    #[test]
    fn negative_dt_is_ignored() {
        let mut tween = Tween::new(0.0, 10.0, 1.0, Easing::Linear);
        tween.advance(0.3);
        let value = tween.value();
        assert_eq!(tween.advance(-1.0), value);
    }
}
