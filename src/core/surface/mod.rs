//=========================================================================
// Surface System
//=========================================================================
//
// Lifecycle management for visual units (sections and overlays).
//
// Architecture:
//   SurfaceManager
//     ├─ surfaces: HashMap<K, Box<dyn Surface>>
//     └─ stack: Vec<K>
//
// Flow:
//   update() → collect_active() → Surface::update()
//   process_transitions() at the frame boundary
//
// `on_enter`/`on_exit` bracket every resource a surface holds: binding
// groups, scroll listeners, store subscriptions, scroll locks. A
// surface that acquires in `on_enter` and releases in `on_exit` cannot
// leak a registration past its own lifetime.
//
//=========================================================================

//=== Module Declarations =================================================

mod manager;
mod transition_queue;

//=== Public API ==========================================================

pub use manager::SurfaceManager;
pub use transition_queue::TransitionQueue;

//=== Internal Dependencies ===============================================

use std::fmt::Debug;
use std::hash::Hash;

use crate::core::context::FrameContext;

//=== SurfaceKey Trait ====================================================

/// Marker trait for surface identifiers.
///
/// Typically implemented by an application enum naming every section
/// and overlay of the page.
pub trait SurfaceKey: Clone + Copy + Eq + Hash + Debug + 'static {}

//=== SurfaceTransition ===================================================

/// Stack operations processed at frame boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceTransition<K: SurfaceKey> {
    /// Adds a surface to the top of the stack.
    Push(K),

    /// Removes a surface from the stack by key.
    Remove(K),

    /// Replaces one stacked surface with another.
    Replace(K, K),

    /// Clears the whole stack.
    Clear,
}

//=== Surface Trait =======================================================

/// A visual unit with lifecycle hooks and per-frame update logic.
///
/// Only `update` is required; the lifecycle hooks default to no-ops.
pub trait Surface<K: SurfaceKey> {
    /// Called when the surface enters the active stack. Acquire bindings
    /// and listeners here.
    fn on_enter(&mut self, _ctx: &mut FrameContext<'_, K>) {}

    /// Called when the surface leaves the active stack. Release
    /// everything acquired in `on_enter`.
    fn on_exit(&mut self, _ctx: &mut FrameContext<'_, K>) {}

    /// Called every frame while the surface is active.
    fn update(&mut self, ctx: &mut FrameContext<'_, K>);

    /// Whether surfaces below this one keep updating.
    ///
    /// Overlays (modal, cursor, loader) leave the page running
    /// underneath; a non-overlay surface blocks everything under it.
    fn is_overlay(&self) -> bool {
        false
    }
}
