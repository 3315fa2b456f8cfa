//=========================================================================
// UI State Store
//=========================================================================
//
// Process-wide observable state container with field-level setters and
// selector-based subscriptions.
//
// Architecture:
//   setter → shallow update → synchronous dispatch
//                                  ↓
//   Watcher: select(state) → changed? → callback(new slice)
//
// Dispatch rules:
// - Callbacks fire in registration order, at most once per set
// - A callback only fires when its selected slice changed
// - A callback may unsubscribe itself or any other subscription
//   mid-dispatch without panicking or skipping unrelated watchers
// - Callbacks may call setters re-entrantly; no borrow is held while a
//   callback runs
//
// Writer discipline: exactly one component writes each field. The store
// does not enforce domains (e.g. progress within [0, 100]); writers clamp.
//
//=========================================================================

//=== Submodules ==========================================================

mod state;

pub use state::{CursorMode, Language, PointerNdc, UiState};

//=== External Dependencies ===============================================

use std::cell::RefCell;
use std::rc::Rc;

use log::trace;

//=== Subscription ========================================================

/// Handle identifying a registered watcher.
///
/// Pass back to [`UiStore::unsubscribe`] to release the watcher. Handles
/// stay valid across dispatches; unsubscribing an already-released handle
/// is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

//=== Watcher machinery ===================================================
//
// Each subscription is type-erased behind `Watch`. The concrete watcher
// remembers the last selected slice and only invokes its callback when
// the slice changes.
//

trait Watch {
    fn run(&mut self, state: &UiState);
}

struct Watcher<T, S, F> {
    select: S,
    last: T,
    callback: F,
}

impl<T, S, F> Watch for Watcher<T, S, F>
where
    T: PartialEq + Clone,
    S: Fn(&UiState) -> T,
    F: FnMut(&T),
{
    fn run(&mut self, state: &UiState) {
        let next = (self.select)(state);
        if next != self.last {
            self.last = next.clone();
            (self.callback)(&next);
        }
    }
}

//--- Slot ----------------------------------------------------------------
//
// `watcher` is taken out of the slot while its callback runs so no borrow
// of the store is held during user code. `dead` marks slots released
// mid-dispatch; they are compacted once the outermost dispatch returns.
//
struct Slot {
    id: u64,
    dead: bool,
    watcher: Option<Box<dyn Watch>>,
}

struct StoreInner {
    state: UiState,
    slots: Vec<Slot>,
    next_id: u64,
    dispatch_depth: u32,
}

//=== UiStore =============================================================

/// Shared observable UI state store.
///
/// Cheap to clone; all clones refer to the same state. Single-threaded by
/// design — the engine's concurrency model is cooperative frame
/// scheduling, so no `Send`/`Sync` is required or provided.
///
/// # Examples
///
/// ```
/// use velour_engine::core::store::{Language, UiStore};
///
/// let store = UiStore::new();
/// let seen = std::rc::Rc::new(std::cell::Cell::new(None));
///
/// let seen_in = seen.clone();
/// store.subscribe(|s| s.language, move |lang| seen_in.set(Some(*lang)));
///
/// store.set_language(Language::En);
/// assert_eq!(seen.get(), Some(Language::En));
/// ```
#[derive(Clone)]
pub struct UiStore {
    inner: Rc<RefCell<StoreInner>>,
}

impl UiStore {
    /// Creates a store holding the default boot-time state.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(StoreInner {
                state: UiState::default(),
                slots: Vec::new(),
                next_id: 0,
                dispatch_depth: 0,
            })),
        }
    }

    //--- Reads ------------------------------------------------------------

    /// Returns a snapshot of the full state.
    pub fn state(&self) -> UiState {
        self.inner.borrow().state.clone()
    }

    /// Runs `f` against the current state without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&UiState) -> R) -> R {
        f(&self.inner.borrow().state)
    }

    //--- Subscriptions ----------------------------------------------------

    /// Registers a watcher on the slice produced by `select`.
    ///
    /// The callback fires synchronously inside any setter that changes
    /// the selected slice, receiving the new value. The initial slice is
    /// captured at registration time; no callback fires for it.
    pub fn subscribe<T, S, F>(&self, select: S, callback: F) -> Subscription
    where
        T: PartialEq + Clone + 'static,
        S: Fn(&UiState) -> T + 'static,
        F: FnMut(&T) + 'static,
    {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;

        let last = select(&inner.state);
        inner.slots.push(Slot {
            id,
            dead: false,
            watcher: Some(Box::new(Watcher { select, last, callback })),
        });

        trace!(target: "store", "Subscription {} registered", id);
        Subscription(id)
    }

    /// Releases a subscription.
    ///
    /// Safe to call from inside a callback, including the callback being
    /// released. Unknown handles are ignored.
    pub fn unsubscribe(&self, subscription: Subscription) {
        let mut inner = self.inner.borrow_mut();
        if let Some(slot) = inner.slots.iter_mut().find(|s| s.id == subscription.0) {
            slot.dead = true;
            // Drop the watcher eagerly unless it is currently running
            // (its box was taken out of the slot for the dispatch).
            slot.watcher = None;
            trace!(target: "store", "Subscription {} released", subscription.0);
        }
        if inner.dispatch_depth == 0 {
            inner.slots.retain(|s| !s.dead);
        }
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().slots.iter().filter(|s| !s.dead).count()
    }

    //--- Setters ----------------------------------------------------------
    //
    // One setter per field, each a shallow update followed by a
    // synchronous dispatch. Writer paths:
    //   is_booting / boot_progress → boot sequencer
    //   pointer                    → pointer tracker
    //   language                   → language toggle surface
    //   cursor_mode                → orchestrator hover sweep
    //   active_section             → orchestrator section sweep
    //

    pub fn set_is_booting(&self, is_booting: bool) {
        self.update(|state| state.is_booting = is_booting);
    }

    pub fn set_boot_progress(&self, boot_progress: f32) {
        self.update(|state| state.boot_progress = boot_progress);
    }

    pub fn set_pointer(&self, pointer: PointerNdc) {
        self.update(|state| state.pointer = pointer);
    }

    pub fn set_language(&self, language: Language) {
        self.update(|state| state.language = language);
    }

    pub fn set_cursor_mode(&self, cursor_mode: CursorMode) {
        self.update(|state| state.cursor_mode = cursor_mode);
    }

    pub fn set_active_section(&self, active_section: impl Into<String>) {
        let active_section = active_section.into();
        self.update(|state| state.active_section = active_section);
    }

    //--- Internal Helpers -------------------------------------------------

    fn update(&self, mutate: impl FnOnce(&mut UiState)) {
        {
            let mut inner = self.inner.borrow_mut();
            mutate(&mut inner.state);
            inner.dispatch_depth += 1;
        }
        self.dispatch();
        let mut inner = self.inner.borrow_mut();
        inner.dispatch_depth -= 1;
        if inner.dispatch_depth == 0 {
            inner.slots.retain(|s| !s.dead);
        }
    }

    // Walks the watcher list by id snapshot. Each watcher is taken out of
    // its slot before running so the store is not borrowed during user
    // code; watchers registered mid-dispatch are not notified until the
    // next set.
    fn dispatch(&self) {
        let ids: Vec<u64> = {
            let inner = self.inner.borrow();
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
                    Some(slot) => slot.watcher.take(),
                    None => None,
                }
            };

            let Some(mut watcher) = taken else { continue };

            let state = self.inner.borrow().state.clone();
            watcher.run(&state);

            let mut inner = self.inner.borrow_mut();
            if let Some(slot) = inner.slots.iter_mut().find(|s| s.id == id) {
                if !slot.dead {
                    slot.watcher = Some(watcher);
                }
            }
        }
    }
}

impl Default for UiStore {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    //--- Test Helpers -----------------------------------------------------

    fn recorder() -> (Rc<RefCell<Vec<String>>>, Rc<RefCell<Vec<String>>>) {
        let log = Rc::new(RefCell::new(Vec::<String>::new()));
        (log.clone(), log)
    }

    //=====================================================================
    // Snapshot & Setter Tests
    //=====================================================================

    #[test]
    fn snapshot_reflects_latest_set() {
        let store = UiStore::new();
        store.set_boot_progress(42.0);
        assert_eq!(store.state().boot_progress, 42.0);

        store.set_pointer(PointerNdc::new(0.5, -0.5));
        assert_eq!(store.state().pointer, PointerNdc::new(0.5, -0.5));
    }

    #[test]
    fn set_is_synchronously_observable() {
        let store = UiStore::new();
        store.set_language(Language::En);
        // Observable before the setter's caller regains control elsewhere.
        assert_eq!(store.state().language, Language::En);
    }

    //=====================================================================
    // Subscription Tests
    //=====================================================================

    #[test]
    fn subscriber_fires_on_selected_slice_change() {
        let store = UiStore::new();
        let (log, writer) = recorder();

        store.subscribe(
            |s| s.language,
            move |lang| writer.borrow_mut().push(format!("{:?}", lang)),
        );

        store.set_language(Language::En);
        assert_eq!(log.borrow().as_slice(), ["En"]);
    }

    #[test]
    fn subscriber_silent_when_unrelated_field_changes() {
        let store = UiStore::new();
        let (log, writer) = recorder();

        store.subscribe(
            |s| s.language,
            move |_| writer.borrow_mut().push("fired".into()),
        );

        store.set_boot_progress(10.0);
        store.set_cursor_mode(CursorMode::Hover);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn subscriber_silent_when_slice_value_unchanged() {
        let store = UiStore::new();
        let (log, writer) = recorder();

        store.subscribe(
            |s| s.cursor_mode,
            move |_| writer.borrow_mut().push("fired".into()),
        );

        // Same value as the default: dispatch runs, watcher stays quiet.
        store.set_cursor_mode(CursorMode::Default);
        assert!(log.borrow().is_empty());

        store.set_cursor_mode(CursorMode::Hover);
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn two_subscribers_fire_once_each_in_registration_order() {
        let store = UiStore::new();
        let log = Rc::new(RefCell::new(Vec::<String>::new()));

        let w1 = log.clone();
        store.subscribe(
            |s| s.boot_progress,
            move |p| w1.borrow_mut().push(format!("first:{}", p)),
        );
        let w2 = log.clone();
        store.subscribe(
            |s| s.boot_progress,
            move |p| w2.borrow_mut().push(format!("second:{}", p)),
        );

        store.set_boot_progress(50.0);
        assert_eq!(log.borrow().as_slice(), ["first:50", "second:50"]);
    }

    #[test]
    fn unsubscribed_watcher_stops_firing() {
        let store = UiStore::new();
        let (log, writer) = recorder();

        let sub = store.subscribe(
            |s| s.language,
            move |_| writer.borrow_mut().push("fired".into()),
        );

        store.set_language(Language::En);
        store.unsubscribe(sub);
        store.set_language(Language::Fr);

        assert_eq!(log.borrow().len(), 1);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn self_unsubscribe_mid_dispatch_does_not_skip_others() {
        let store = UiStore::new();
        let log = Rc::new(RefCell::new(Vec::<String>::new()));

        // First watcher unsubscribes itself on first fire.
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let slot_in = slot.clone();
        let store_in = store.clone();
        let w1 = log.clone();
        let sub = store.subscribe(
            |s| s.language,
            move |_| {
                w1.borrow_mut().push("first".into());
                if let Some(own) = slot_in.borrow_mut().take() {
                    store_in.unsubscribe(own);
                }
            },
        );
        *slot.borrow_mut() = Some(sub);

        let w2 = log.clone();
        store.subscribe(
            |s| s.language,
            move |_| w2.borrow_mut().push("second".into()),
        );

        store.set_language(Language::En);
        assert_eq!(log.borrow().as_slice(), ["first", "second"]);

        // First watcher is gone; second keeps firing.
        store.set_language(Language::Fr);
        assert_eq!(log.borrow().as_slice(), ["first", "second", "second"]);
    }

    #[test]
    fn unsubscribing_a_later_watcher_mid_dispatch_suppresses_it() {
        let store = UiStore::new();
        let log = Rc::new(RefCell::new(Vec::<String>::new()));

        let victim: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

        let victim_in = victim.clone();
        let store_in = store.clone();
        let w1 = log.clone();
        store.subscribe(
            |s| s.language,
            move |_| {
                w1.borrow_mut().push("killer".into());
                if let Some(v) = victim_in.borrow_mut().take() {
                    store_in.unsubscribe(v);
                }
            },
        );

        let w2 = log.clone();
        let sub = store.subscribe(
            |s| s.language,
            move |_| w2.borrow_mut().push("victim".into()),
        );
        *victim.borrow_mut() = Some(sub);

        let w3 = log.clone();
        store.subscribe(
            |s| s.language,
            move |_| w3.borrow_mut().push("bystander".into()),
        );

        store.set_language(Language::En);
        // Victim was released before its turn; bystander unaffected.
        assert_eq!(log.borrow().as_slice(), ["killer", "bystander"]);
    }

    #[test]
    fn callback_may_set_another_field_re_entrantly() {
        let store = UiStore::new();
        let (log, writer) = recorder();

        let store_in = store.clone();
        store.subscribe(
            |s| s.is_booting,
            move |booting| {
                if !booting {
                    store_in.set_active_section("hero");
                }
            },
        );
        store.subscribe(
            |s| s.active_section.clone(),
            move |section| writer.borrow_mut().push(section.clone()),
        );

        store.set_active_section("warming-up");
        store.set_is_booting(false);

        assert_eq!(log.borrow().as_slice(), ["warming-up", "hero"]);
    }

    #[test]
    fn watcher_registered_mid_dispatch_waits_for_next_set() {
        let store = UiStore::new();
        let log = Rc::new(RefCell::new(Vec::<String>::new()));

        let store_in = store.clone();
        let log_in = log.clone();
        store.subscribe(
            |s| s.language,
            move |_| {
                let log_nested = log_in.clone();
                store_in.subscribe(
                    |s| s.language,
                    move |_| log_nested.borrow_mut().push("nested".into()),
                );
            },
        );

        store.set_language(Language::En);
        assert!(log.borrow().is_empty(), "nested watcher must not fire this dispatch");

        store.set_language(Language::Fr);
        assert_eq!(log.borrow().len(), 1);
    }
}
