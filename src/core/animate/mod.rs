//=========================================================================
// Scroll-Linked Animator
//=========================================================================
//
// Binds element properties to the virtual scroll position.
//
// Three binding kinds:
//   Scrub  — property is a pure function of scroll position. Fully
//            reversible: scrubbing back restores the exact value, no
//            "already played" memory.
//   Reveal — crossing a visibility threshold (either direction) starts
//            a fixed-duration eased tween toward the matching target;
//            an in-flight tween is retargeted from its current value,
//            never queued, never snapped.
//   Skew   — property chases the instantaneous scroll velocity, clamped
//            to a bounded range and easing back to zero as velocity
//            settles. Layered on top of a primary scrub binding.
//
// Bindings register under a group; a visual unit retires its whole
// group on teardown so nothing keeps driving removed elements. A
// binding whose element has no stage bounds silently skips its frame —
// animation is cosmetic and must never raise.
//
// Sampling happens once per frame, after the scroll engine advances,
// so every binding reads the same scroll state.
//
//=========================================================================

//=== Submodules ==========================================================

mod easing;
mod tween;

pub use easing::Easing;
pub use tween::Tween;

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use crate::core::stage::{ElementId, PropertyValue, Stage};

//=== Group & Range Types =================================================

/// Handle grouping bindings that tear down together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupId(u64);

/// Element edge used when resolving a viewport-relative trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
}

/// A point on the trigger element pinned to a fraction of the viewport.
///
/// `EdgeAnchor { edge: Top, anchor: 0.8 }` reads "when the element's top
/// reaches 80% of the way down the viewport".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeAnchor {
    pub edge: Edge,
    pub anchor: f32,
}

impl EdgeAnchor {
    pub const fn top(anchor: f32) -> Self {
        Self { edge: Edge::Top, anchor }
    }

    pub const fn bottom(anchor: f32) -> Self {
        Self { edge: Edge::Bottom, anchor }
    }
}

/// Scroll range a scrub binding maps onto [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TriggerRange {
    /// Fixed scroll positions in document pixels.
    Absolute { start: f32, end: f32 },

    /// Range derived from a trigger element's layout each frame, so it
    /// survives relayouts and resizes.
    Band {
        trigger: ElementId,
        start: EdgeAnchor,
        end: EdgeAnchor,
    },
}

impl TriggerRange {
    // Resolves to (start, end) scroll positions; None when the trigger
    // element has no bounds yet.
    fn resolve(&self, stage: &dyn Stage) -> Option<(f32, f32)> {
        match *self {
            TriggerRange::Absolute { start, end } => Some((start, end)),
            TriggerRange::Band { trigger, start, end } => {
                let rect = stage.bounds(trigger)?;
                let (_, viewport_h) = stage.viewport();
                Some((
                    edge_position(&rect, start) - start.anchor * viewport_h,
                    edge_position(&rect, end) - end.anchor * viewport_h,
                ))
            }
        }
    }
}

fn edge_position(rect: &crate::core::stage::Rect, anchor: EdgeAnchor) -> f32 {
    match anchor.edge {
        Edge::Top => rect.top(),
        Edge::Bottom => rect.bottom(),
    }
}

//=== Binding Specs =======================================================

/// Scrubbed binding: property = curve(progress through `range`), mapped
/// into `[from, to]`.
#[derive(Debug, Clone)]
pub struct ScrubSpec {
    pub element: ElementId,
    pub property: String,
    pub range: TriggerRange,
    pub from: f32,
    pub to: f32,
    pub easing: Easing,
}

/// Reveal binding: crossing the trigger's visibility threshold starts a
/// timed transition between `hidden` and `shown`.
#[derive(Debug, Clone)]
pub struct RevealSpec {
    pub element: ElementId,
    pub property: String,
    /// Element whose top crossing the anchor line defines visibility.
    pub trigger: ElementId,
    /// Viewport fraction of the threshold line (0 = top, 1 = bottom).
    pub anchor: f32,
    pub hidden: f32,
    pub shown: f32,
    pub duration: f32,
    pub easing: Easing,
}

/// Velocity-reactive binding: property chases `velocity * gain`, clamped
/// to `±limit`, easing toward the target by `ease_factor` per frame.
#[derive(Debug, Clone)]
pub struct SkewSpec {
    pub element: ElementId,
    pub property: String,
    pub gain: f32,
    pub limit: f32,
    pub ease_factor: f32,
}

//=== Binding State =======================================================

struct RevealState {
    inside: bool,
    current: f32,
    tween: Option<Tween>,
}

enum Binding {
    Scrub(ScrubSpec),
    Reveal(RevealSpec, RevealState),
    Skew(SkewSpec, f32),
}

impl Binding {
    fn slot(&self) -> (ElementId, &str) {
        match self {
            Binding::Scrub(spec) => (spec.element, spec.property.as_str()),
            Binding::Reveal(spec, _) => (spec.element, spec.property.as_str()),
            Binding::Skew(spec, _) => (spec.element, spec.property.as_str()),
        }
    }
}

struct Entry {
    group: GroupId,
    binding: Binding,
}

//=== Animator ============================================================

/// Registry and per-frame sampler for scroll-linked bindings.
pub struct Animator {
    entries: Vec<Entry>,
    next_group: u64,
}

impl Animator {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_group: 0,
        }
    }

    //--- Registration -----------------------------------------------------

    /// Allocates a binding group for one visual unit.
    pub fn group(&mut self) -> GroupId {
        let id = GroupId(self.next_group);
        self.next_group += 1;
        id
    }

    /// Registers a scrub binding.
    pub fn bind_scrub(&mut self, group: GroupId, spec: ScrubSpec) {
        self.displace(spec.element, &spec.property);
        self.entries.push(Entry {
            group,
            binding: Binding::Scrub(spec),
        });
    }

    /// Registers a reveal binding. Its property starts at `hidden`.
    pub fn bind_reveal(&mut self, group: GroupId, spec: RevealSpec) {
        self.displace(spec.element, &spec.property);
        let state = RevealState {
            inside: false,
            current: spec.hidden,
            tween: None,
        };
        self.entries.push(Entry {
            group,
            binding: Binding::Reveal(spec, state),
        });
    }

    /// Registers a velocity-skew binding.
    pub fn bind_skew(&mut self, group: GroupId, spec: SkewSpec) {
        self.displace(spec.element, &spec.property);
        self.entries.push(Entry {
            group,
            binding: Binding::Skew(spec, 0.0),
        });
    }

    /// Removes every binding registered under `group`.
    pub fn retire_group(&mut self, group: GroupId) {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.group != group);
        let removed = before - self.entries.len();
        if removed > 0 {
            debug!(target: "animate", "Retired group {:?} ({} bindings)", group, removed);
        }
    }

    pub fn binding_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    //--- Sampling ---------------------------------------------------------

    /// Samples every binding against the frame's scroll state and writes
    /// the results to the stage.
    pub fn sample(&mut self, scroll: f32, velocity: f32, dt: f32, stage: &mut dyn Stage) {
        for entry in &mut self.entries {
            match &mut entry.binding {
                Binding::Scrub(spec) => sample_scrub(spec, scroll, stage),
                Binding::Reveal(spec, state) => sample_reveal(spec, state, scroll, dt, stage),
                Binding::Skew(spec, current) => sample_skew(spec, current, velocity, stage),
            }
        }
    }

    //--- Internal Helpers -------------------------------------------------

    // Last-registered wins: a new binding for an occupied
    // (element, property) slot replaces the old one.
    fn displace(&mut self, element: ElementId, property: &str) {
        let before = self.entries.len();
        self.entries
            .retain(|entry| entry.binding.slot() != (element, property));
        if self.entries.len() != before {
            debug!(
                target: "animate",
                "Binding for ({:?}, {}) replaced by a later registration",
                element, property
            );
        }
    }
}

impl Default for Animator {
    fn default() -> Self {
        Self::new()
    }
}

//--- Per-kind sampling ----------------------------------------------------

fn sample_scrub(spec: &ScrubSpec, scroll: f32, stage: &mut dyn Stage) {
    // Element may not be laid out yet; skip quietly.
    if stage.bounds(spec.element).is_none() {
        return;
    }
    let Some((start, end)) = spec.range.resolve(stage) else {
        return;
    };

    let progress = if end > start {
        ((scroll - start) / (end - start)).clamp(0.0, 1.0)
    } else {
        // Degenerate range acts as a hard threshold.
        if scroll >= start { 1.0 } else { 0.0 }
    };

    let eased = spec.easing.apply(progress);
    let value = spec.from + (spec.to - spec.from) * eased;
    stage.set_property(spec.element, &spec.property, PropertyValue::Number(value));
}

fn sample_reveal(spec: &RevealSpec, state: &mut RevealState, scroll: f32, dt: f32, stage: &mut dyn Stage) {
    if stage.bounds(spec.element).is_none() {
        return;
    }

    // The trigger's top against the anchor line, in viewport space.
    if let Some(trigger) = stage.bounds(spec.trigger) {
        let (_, viewport_h) = stage.viewport();
        let inside = trigger.top() - scroll <= spec.anchor * viewport_h;

        if inside != state.inside {
            state.inside = inside;
            let target = if inside { spec.shown } else { spec.hidden };
            match &mut state.tween {
                Some(tween) => tween.retarget(target),
                None => {
                    state.tween = Some(Tween::new(state.current, target, spec.duration, spec.easing))
                }
            }
        }
    }

    if let Some(tween) = &mut state.tween {
        state.current = tween.advance(dt);
        if tween.is_finished() {
            state.tween = None;
        }
    }

    stage.set_property(spec.element, &spec.property, PropertyValue::Number(state.current));
}

fn sample_skew(spec: &SkewSpec, current: &mut f32, velocity: f32, stage: &mut dyn Stage) {
    if stage.bounds(spec.element).is_none() {
        return;
    }

    let target = (velocity * spec.gain).clamp(-spec.limit, spec.limit);
    *current += (target - *current) * spec.ease_factor;
    if target == 0.0 && current.abs() < 0.005 {
        *current = 0.0;
    }

    stage.set_property(spec.element, &spec.property, PropertyValue::Number(*current));
}

//=========================================================================
// Unit Tests
//=========================================================================
