//=========================================================================
// Pointer Tracker
//=========================================================================
//
// Samples raw pointer input, normalizes it, and publishes it.
//
// Frame lifecycle: begin_frame() → process_events() → query
//
// Every pointer-move event produces a store write — there is no
// debouncing here. Consumers that want smoothing (the cursor follower,
// the hero scene) apply their own easing on top.
//
// Normalization maps window pixels to the GL convention:
//   x = (client_x / viewport_w) * 2 - 1      (right edge → +1)
//   y = -(client_y / viewport_h) * 2 + 1     (top edge   → +1)
//
//=========================================================================

//=== Submodules ==========================================================

pub mod event;

pub use event::{HostEvent, PointerButton};

//=== Internal Dependencies ===============================================

use crate::core::store::{PointerNdc, UiStore};

//=== PointerTracker ======================================================

/// Tracks the pointer across frames and writes the normalized position
/// into the store (the store's single `pointer` writer).
///
/// Also records per-frame press/release deltas in window pixels so
/// surfaces can hit-test clicks against stage bounds.
pub struct PointerTracker {
    store: UiStore,
    viewport: (f32, f32),
    position_px: (f32, f32),
    presses: Vec<(PointerButton, f32, f32)>,
    releases: Vec<(PointerButton, f32, f32)>,
    primary_down: bool,
}

impl PointerTracker {
    /// Creates a tracker publishing into `store`.
    ///
    /// The viewport starts at zero; until the first `Resized` event
    /// arrives, pointer moves update the pixel position but produce no
    /// store write (a zero-sized viewport has no meaningful NDC).
    pub fn new(store: UiStore) -> Self {
        Self {
            store,
            viewport: (0.0, 0.0),
            position_px: (0.0, 0.0),
            presses: Vec::new(),
            releases: Vec::new(),
            primary_down: false,
        }
    }

    //--- Frame Processing -------------------------------------------------

    /// Clears the per-frame press/release deltas.
    pub fn begin_frame(&mut self) {
        self.presses.clear();
        self.releases.clear();
    }

    /// Ingests this frame's host events.
    ///
    /// Non-pointer events are ignored; `Resized` is consumed here as well
    /// so normalization always uses the current viewport.
    pub fn process_events(&mut self, events: &[HostEvent]) {
        for event in events {
            match *event {
                HostEvent::PointerMoved { x, y } => {
                    self.position_px = (x, y);
                    self.publish();
                }
                HostEvent::PointerPressed { button, x, y } => {
                    self.position_px = (x, y);
                    if button == PointerButton::Primary {
                        self.primary_down = true;
                    }
                    self.presses.push((button, x, y));
                }
                HostEvent::PointerReleased { button, x, y } => {
                    self.position_px = (x, y);
                    if button == PointerButton::Primary {
                        self.primary_down = false;
                    }
                    self.releases.push((button, x, y));
                }
                HostEvent::Resized { width, height } => {
                    self.viewport = (width, height);
                    self.publish();
                }
                _ => {}
            }
        }
    }

    //--- Query API --------------------------------------------------------

    /// Current pointer position in window pixels.
    pub fn position_px(&self) -> (f32, f32) {
        self.position_px
    }

    /// Presses recorded this frame, as `(button, x, y)` in window pixels.
    pub fn presses(&self) -> &[(PointerButton, f32, f32)] {
        &self.presses
    }

    /// Releases recorded this frame, as `(button, x, y)` in window pixels.
    pub fn releases(&self) -> &[(PointerButton, f32, f32)] {
        &self.releases
    }

    /// Primary-button presses this frame, as `(x, y)` in window pixels.
    pub fn clicks(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.presses
            .iter()
            .filter(|(button, _, _)| *button == PointerButton::Primary)
            .map(|(_, x, y)| (*x, *y))
    }

    /// True while the primary button is held.
    pub fn primary_down(&self) -> bool {
        self.primary_down
    }

    //--- Internal Helpers -------------------------------------------------

    fn publish(&self) {
        let (w, h) = self.viewport;
        if w <= 0.0 || h <= 0.0 {
            return;
        }
        let (px, py) = self.position_px;
        let x = (px / w) * 2.0 - 1.0;
        let y = -(py / h) * 2.0 + 1.0;
        self.store.set_pointer(PointerNdc::new(x, y));
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
