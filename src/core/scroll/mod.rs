//=========================================================================
// Scroll Engine
//=========================================================================
//
// Replaces instantaneous native scrolling with a smoothed virtual
// position, giving the page its heavy, deliberate feel.
//
// State machine, advanced once per frame:
//   input delta → target (clamped accumulator)
//   current += (target - current) * lerp_factor
//   velocity = current - previous current
//
// The per-frame listener dispatch is the single timing source for all
// scroll-linked work: every consumer samples the same position at the
// same pipeline point, so no two surfaces can disagree within a frame.
//
// Locking: while locked (boot, modal), incoming deltas are DISCARDED,
// not queued; unlocking resumes from whatever `target` held at lock
// time. Lock/unlock calls nest.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::RefCell;
use std::rc::Rc;

use log::trace;

//=== Constants ===========================================================

/// Default exponential smoothing constant. Lower = heavier, laggier.
pub const DEFAULT_LERP_FACTOR: f32 = 0.08;

/// `current` snaps onto `target` once within this many pixels, so the
/// tail of the interpolation terminates instead of asymptoting forever.
const SNAP_WITHIN: f32 = 0.05;

//=== ScrollListener ======================================================

/// Handle identifying a registered per-frame listener.
///
/// Pass back to [`ScrollEngine::remove_listener`]. Removing an unknown
/// or already-removed handle is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScrollListener(u64);

//--- Listener slots -------------------------------------------------------
//
// Same removal-safe dispatch shape as the store: the callback box is
// taken out of its slot while running, so a listener may remove itself
// or any other listener mid-dispatch.
//
struct Slot {
    id: u64,
    dead: bool,
    callback: Option<Box<dyn FnMut(f32, f32)>>,
}

struct ScrollInner {
    target: f32,
    current: f32,
    velocity: f32,
    lerp_factor: f32,
    max_scroll: f32,
    lock_depth: u32,
    slots: Vec<Slot>,
    next_id: u64,
    dispatch_depth: u32,
}

//=== ScrollEngine ========================================================

/// Smoothed virtual scroll position with a per-frame listener registry.
///
/// Cheap to clone; all clones share the same state. The engine is the
/// sole writer of the scroll state — consumers read `position()` /
/// `velocity()` or subscribe with [`ScrollEngine::on_scroll`].
#[derive(Clone)]
pub struct ScrollEngine {
    inner: Rc<RefCell<ScrollInner>>,
}

impl ScrollEngine {
    pub fn new() -> Self {
        Self::with_lerp_factor(DEFAULT_LERP_FACTOR)
    }

    /// Creates an engine with a custom smoothing constant.
    ///
    /// # Panics
    ///
    /// Panics if `lerp_factor` is outside `(0, 1]`.
    pub fn with_lerp_factor(lerp_factor: f32) -> Self {
        assert!(
            lerp_factor > 0.0 && lerp_factor <= 1.0,
            "lerp factor must be in (0, 1], got {}",
            lerp_factor
        );
        Self {
            inner: Rc::new(RefCell::new(ScrollInner {
                target: 0.0,
                current: 0.0,
                velocity: 0.0,
                lerp_factor,
                max_scroll: 0.0,
                lock_depth: 0,
                slots: Vec::new(),
                next_id: 0,
                dispatch_depth: 0,
            })),
        }
    }

    //--- Input ------------------------------------------------------------

    /// Accumulates a wheel/touch delta into the target position.
    ///
    /// Discarded while locked — boot-time scroll input must not replay
    /// once the page reveals.
    pub fn add_delta(&self, delta: f32) {
        let mut inner = self.inner.borrow_mut();
        if inner.lock_depth > 0 {
            trace!(target: "scroll", "Locked, discarding delta {}", delta);
            return;
        }
        let max = inner.max_scroll;
        inner.target = (inner.target + delta).clamp(0.0, max);
    }

    /// Declares the scrollable document extent.
    ///
    /// `target` is re-clamped immediately; `current` eases toward the
    /// new bound on its own.
    pub fn set_content_extent(&self, content_height: f32, viewport_height: f32) {
        let mut inner = self.inner.borrow_mut();
        inner.max_scroll = (content_height - viewport_height).max(0.0);
        let max = inner.max_scroll;
        inner.target = inner.target.clamp(0.0, max);
    }

    //--- Locking ----------------------------------------------------------

    /// Suppresses scroll input. Calls nest; each `lock` needs a matching
    /// [`ScrollEngine::unlock`].
    pub fn lock(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.lock_depth += 1;
        trace!(target: "scroll", "Locked (depth {})", inner.lock_depth);
    }

    /// Releases one level of scroll lock.
    pub fn unlock(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.lock_depth = inner.lock_depth.saturating_sub(1);
        trace!(target: "scroll", "Unlocked (depth {})", inner.lock_depth);
    }

    pub fn is_locked(&self) -> bool {
        self.inner.borrow().lock_depth > 0
    }

    //--- Frame Advance ----------------------------------------------------

    /// Advances the smoothed position one frame and dispatches to every
    /// listener with `(current, velocity)`.
    ///
    /// Called exactly once per frame by the orchestrator, before any
    /// binding sampling, so the whole frame reads one coherent position.
    pub fn advance(&self) {
        let (current, velocity) = {
            let mut inner = self.inner.borrow_mut();
            let previous = inner.current;
            let step = (inner.target - inner.current) * inner.lerp_factor;
            inner.current += step;
            if (inner.target - inner.current).abs() < SNAP_WITHIN {
                inner.current = inner.target;
            }
            inner.velocity = inner.current - previous;
            (inner.current, inner.velocity)
        };
        self.dispatch(current, velocity);
    }

    //--- Listener Registry ------------------------------------------------

    /// Registers a per-frame listener receiving `(current, velocity)`.
    pub fn on_scroll(&self, callback: impl FnMut(f32, f32) + 'static) -> ScrollListener {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.slots.push(Slot {
            id,
            dead: false,
            callback: Some(Box::new(callback)),
        });
        ScrollListener(id)
    }

    /// Removes a listener. Safe mid-dispatch, including self-removal.
    pub fn remove_listener(&self, listener: ScrollListener) {
        let mut inner = self.inner.borrow_mut();
        if let Some(slot) = inner.slots.iter_mut().find(|s| s.id == listener.0) {
            slot.dead = true;
            slot.callback = None;
        }
        if inner.dispatch_depth == 0 {
            inner.slots.retain(|s| !s.dead);
        }
    }

    /// Removes every listener. Teardown path — a listener left behind
    /// here would be a dangling registration outliving its surface.
    pub fn clear_listeners(&self) {
        let mut inner = self.inner.borrow_mut();
        if inner.dispatch_depth == 0 {
            inner.slots.clear();
        } else {
            for slot in &mut inner.slots {
                slot.dead = true;
                slot.callback = None;
            }
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().slots.iter().filter(|s| !s.dead).count()
    }

    //--- Query API --------------------------------------------------------

    /// Smoothed scroll position.
    pub fn position(&self) -> f32 {
        self.inner.borrow().current
    }

    /// Position change over the last frame.
    pub fn velocity(&self) -> f32 {
        self.inner.borrow().velocity
    }

    /// Raw accumulated input position the smoothed position chases.
    pub fn target(&self) -> f32 {
        self.inner.borrow().target
    }

    pub fn max_scroll(&self) -> f32 {
        self.inner.borrow().max_scroll
    }

    //--- Internal Helpers -------------------------------------------------

    fn dispatch(&self, current: f32, velocity: f32) {
        let ids: Vec<u64> = {
            let mut inner = self.inner.borrow_mut();
            inner.dispatch_depth += 1;
            inner
                .slots
                .iter()
                .filter(|s| !s.dead)
                .map(|s| s.id)
                .collect()
        };

        for id in ids {
            let taken = {
                let mut inner = self.inner.borrow_mut();
                match inner.slots.iter_mut().find(|s| s.id == id && !s.dead) {
                    Some(slot) => slot.callback.take(),
                    None => None,
                }
            };

            let Some(mut callback) = taken else { continue };
            callback(current, velocity);

            let mut inner = self.inner.borrow_mut();
            if let Some(slot) = inner.slots.iter_mut().find(|s| s.id == id) {
                if !slot.dead {
                    slot.callback = Some(callback);
                }
            }
        }

        let mut inner = self.inner.borrow_mut();
        inner.dispatch_depth -= 1;
        if inner.dispatch_depth == 0 {
            inner.slots.retain(|s| !s.dead);
        }
    }
}

impl Default for ScrollEngine {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
