//=========================================================================
// Boot Sequencer
//=========================================================================
//
// Startup gate blocking interaction until initial content is ready.
//
// State machine:
//   Booting ──(displayed ≥ 99, hold elapses)──> Revealing
//   Revealing ──(exit transition completes)──> Ready   (terminal)
//
// Progress handling:
// - The platform reports measured asset progress; reports are clamped
//   to [0, 100] and never regress.
// - The displayed value chases the measured value (exponential
//   smoothing, snapping within 0.5) so the bar fills continuously
//   instead of jumping.
// - A fallback forces completion after a bounded wait even if the load
//   signal never fires: a stuck boot screen is unrecoverable without a
//   reload, so the worst case must be a bounded wait, not an infinite
//   one. With default timings the gate drops within 3.5 s.
//
// While gating (Booting or Revealing) the scroll engine stays locked;
// the lock is taken at construction and released exactly once on the
// transition to Ready.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use crate::core::animate::{Easing, Tween};
use crate::core::scroll::ScrollEngine;
use crate::core::store::UiStore;

//=== BootConfig ==========================================================

/// Timing knobs for the boot gate.
#[derive(Debug, Clone, PartialEq)]
pub struct BootConfig {
    /// Seconds to wait for the load signal before forcing completion.
    pub fallback_after: f32,

    /// Seconds to hold the full bar before the reveal starts.
    pub hold: f32,

    /// Reveal transition length in seconds.
    pub reveal_duration: f32,

    /// Fraction of the displayed/measured gap closed per 60 Hz step.
    pub smoothing: f32,
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            fallback_after: 1.7,
            hold: 0.5,
            reveal_duration: 1.2,
            smoothing: 0.1,
        }
    }
}

//=== BootPhase ===========================================================

/// Current boot gate phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootPhase {
    Booting,
    Revealing,
    Ready,
}

//=== BootSequencer =======================================================

/// Drives the boot gate; the single writer of the store's `is_booting`
/// and `boot_progress` fields.
pub struct BootSequencer {
    config: BootConfig,
    store: UiStore,
    scroll: ScrollEngine,
    phase: BootPhase,
    measured: f32,
    displayed: f32,
    elapsed: f32,
    hold_remaining: Option<f32>,
    reveal: Option<Tween>,
}

impl BootSequencer {
    /// Creates the sequencer and takes the boot-time scroll lock.
    pub fn new(config: BootConfig, store: UiStore, scroll: ScrollEngine) -> Self {
        scroll.lock();
        debug!(target: "boot", "Boot gate armed ({:?})", config);
        Self {
            config,
            store,
            scroll,
            phase: BootPhase::Booting,
            measured: 0.0,
            displayed: 0.0,
            elapsed: 0.0,
            hold_remaining: None,
            reveal: None,
        }
    }

    //--- Progress Input ---------------------------------------------------

    /// Records a measured load-progress report.
    ///
    /// Values are clamped to [0, 100]; progress never regresses.
    pub fn report_progress(&mut self, progress: f32) {
        self.measured = self.measured.max(progress.clamp(0.0, 100.0));
    }

    //--- Frame Advance ----------------------------------------------------

    /// Advances the gate by one frame.
    pub fn advance(&mut self, dt: f32) {
        match self.phase {
            BootPhase::Booting => self.advance_booting(dt),
            BootPhase::Revealing => self.advance_revealing(dt),
            BootPhase::Ready => {}
        }
    }

    //--- Query API --------------------------------------------------------

    pub fn phase(&self) -> BootPhase {
        self.phase
    }

    /// True while the gate still blocks interaction.
    pub fn is_gating(&self) -> bool {
        self.phase != BootPhase::Ready
    }

    /// Smoothed progress shown on the loader, `0..=100`.
    pub fn displayed_progress(&self) -> f32 {
        self.displayed
    }

    /// Exit-transition progress in [0, 1]; 0 until the reveal starts,
    /// 1 once the page is live. The loader binds its exit clip to this.
    pub fn reveal_progress(&self) -> f32 {
        match self.phase {
            BootPhase::Booting => 0.0,
            BootPhase::Revealing => self.reveal.as_ref().map_or(0.0, Tween::value),
            BootPhase::Ready => 1.0,
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn advance_booting(&mut self, dt: f32) {
        self.elapsed += dt;

        if self.elapsed >= self.config.fallback_after && self.measured < 100.0 {
            warn!(
                target: "boot",
                "Load signal stalled at {:.0}%, forcing completion after {:.1}s",
                self.measured, self.elapsed
            );
            self.measured = 100.0;
            self.displayed = 100.0;
        }

        // Chase the measured value; snap the tail so the bar terminates.
        let factor = 1.0 - (1.0 - self.config.smoothing).powf(dt * 60.0);
        self.displayed += (self.measured - self.displayed) * factor;
        if (self.measured - self.displayed).abs() < 0.5 {
            self.displayed = self.measured;
        }
        self.store.set_boot_progress(self.displayed.clamp(0.0, 100.0));

        if self.displayed >= 99.0 {
            let remaining = self.hold_remaining.get_or_insert(self.config.hold);
            *remaining -= dt;
            if *remaining <= 0.0 {
                info!(target: "boot", "Load complete, revealing page");
                self.phase = BootPhase::Revealing;
                self.reveal = Some(Tween::new(
                    0.0,
                    1.0,
                    self.config.reveal_duration,
                    Easing::ExpoInOut,
                ));
            }
        }
    }

    fn advance_revealing(&mut self, dt: f32) {
        let finished = match &mut self.reveal {
            Some(tween) => {
                tween.advance(dt);
                tween.is_finished()
            }
            None => true,
        };

        if finished {
            self.phase = BootPhase::Ready;
            self.reveal = None;
            self.store.set_is_booting(false);
            self.scroll.unlock();
            info!(target: "boot", "Boot gate released");
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    //--- Test Helpers -----------------------------------------------------

    fn sequencer() -> (BootSequencer, UiStore, ScrollEngine) {
        let store = UiStore::new();
        let scroll = ScrollEngine::new();
        scroll.set_content_extent(10_000.0, 800.0);
        let seq = BootSequencer::new(BootConfig::default(), store.clone(), scroll.clone());
        (seq, store, scroll)
    }

    fn run_frames(seq: &mut BootSequencer, frames: usize) {
        for _ in 0..frames {
            seq.advance(DT);
        }
    }

    //=====================================================================
    // Fallback Tests
    //=====================================================================

    #[test]
    fn gate_releases_within_bound_without_any_progress_signal() {
        let (mut seq, store, _scroll) = sequencer();

        // 3.5 s of simulated frames, no report_progress call ever.
        let mut frames_to_ready = None;
        for frame in 0..210 {
            seq.advance(DT);
            if !store.state().is_booting {
                frames_to_ready = Some(frame + 1);
                break;
            }
        }

        let frames = frames_to_ready.expect("boot gate never released");
        assert!(
            frames as f32 * DT <= 3.5,
            "took {:.2}s, bound is 3.5s",
            frames as f32 * DT
        );
        assert_eq!(seq.phase(), BootPhase::Ready);
    }

    #[test]
    fn fallback_slams_the_bar_full() {
        let (mut seq, store, _scroll) = sequencer();
        seq.report_progress(30.0);

        run_frames(&mut seq, 110); // past fallback_after = 1.7s
        assert_eq!(store.state().boot_progress, 100.0);
    }

    //=====================================================================
    // Progress Smoothing Tests
    //=====================================================================

    #[test]
    fn displayed_progress_chases_reports_smoothly() {
        let (mut seq, store, _scroll) = sequencer();

        seq.report_progress(60.0);
        seq.advance(DT);
        let first = store.state().boot_progress;
        assert!(first > 0.0 && first < 60.0, "one frame must not jump to 60");

        seq.advance(DT);
        assert!(store.state().boot_progress > first);
    }

    #[test]
    fn displayed_progress_is_monotone_under_monotone_reports() {
        let (mut seq, store, _scroll) = sequencer();

        let mut previous = 0.0;
        for frame in 0..120 {
            if frame % 10 == 0 {
                seq.report_progress(frame as f32);
            }
            seq.advance(DT);
            let shown = store.state().boot_progress;
            assert!(shown >= previous);
            previous = shown;
        }
    }

    #[test]
    fn reports_never_regress() {
        let (mut seq, _store, _scroll) = sequencer();
        seq.report_progress(80.0);
        seq.report_progress(20.0);
        run_frames(&mut seq, 60);
        assert!(seq.displayed_progress() >= 20.0);
        // Still chasing 80, not 20.
        assert!((seq.displayed_progress() - 80.0).abs() < 1.0);
    }

    #[test]
    fn reports_are_clamped_to_domain() {
        let (mut seq, _store, _scroll) = sequencer();
        seq.report_progress(250.0);
        assert_eq!(seq.displayed_progress(), 0.0);
        run_frames(&mut seq, 1);
        assert!(seq.displayed_progress() <= 100.0);
    }

    //=====================================================================
    // Phase Transition Tests
    //=====================================================================

    #[test]
    fn full_signal_holds_then_reveals_then_readies() {
        let (mut seq, store, _scroll) = sequencer();
        seq.report_progress(100.0);

        // Smoothing needs a moment to reach 99.
        while seq.displayed_progress() < 99.0 {
            seq.advance(DT);
        }
        assert_eq!(seq.phase(), BootPhase::Booting, "hold keeps the gate up");

        // Hold (0.5s), then the reveal plays (1.2s).
        run_frames(&mut seq, 31);
        assert_eq!(seq.phase(), BootPhase::Revealing);
        assert!(store.state().is_booting);

        run_frames(&mut seq, 73);
        assert_eq!(seq.phase(), BootPhase::Ready);
        assert!(!store.state().is_booting);
    }

    #[test]
    fn reveal_progress_is_monotone_and_terminal() {
        let (mut seq, _store, _scroll) = sequencer();
        seq.report_progress(100.0);

        assert_eq!(seq.reveal_progress(), 0.0);

        let mut previous = 0.0;
        while seq.phase() != BootPhase::Ready {
            seq.advance(DT);
            let progress = seq.reveal_progress();
            assert!(progress >= previous);
            previous = progress;
        }
        assert_eq!(seq.reveal_progress(), 1.0);
    }

    //=====================================================================
    // Scroll Gate Tests
    //=====================================================================

    #[test]
    fn scroll_is_locked_while_gating_and_released_after() {
        let (mut seq, _store, scroll) = sequencer();
        assert!(scroll.is_locked());

        // Input during boot is discarded, not queued.
        scroll.add_delta(500.0);
        assert_eq!(scroll.target(), 0.0);

        seq.report_progress(100.0);
        while seq.is_gating() {
            seq.advance(DT);
        }

        assert!(!scroll.is_locked());
        scroll.add_delta(500.0);
        assert_eq!(scroll.target(), 500.0, "scroll resumes from the held target");
    }

    #[test]
    fn ready_is_terminal_and_unlock_happens_once() {
        let (mut seq, _store, scroll) = sequencer();
        seq.report_progress(100.0);
        while seq.is_gating() {
            seq.advance(DT);
        }

        // Extra frames must not unlock a lock someone else now holds.
        scroll.lock();
        run_frames(&mut seq, 30);
        assert!(scroll.is_locked());
        assert_eq!(seq.phase(), BootPhase::Ready);
    }
}
