//=========================================================================
// Surface Manager
//=========================================================================
//
// Registration, stack operations and lifecycle dispatch for surfaces.
//
// Surfaces are stored by key and referenced through a stack of keys, so
// a surface keeps its state across remove/push cycles (closing and
// reopening the modal does not rebuild it).
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use crate::core::context::FrameContext;
use super::{Surface, SurfaceKey, SurfaceTransition};

//=== SurfaceManager ======================================================

/// Owns every registered surface and the active stack.
pub struct SurfaceManager<K: SurfaceKey> {
    surfaces: HashMap<K, Box<dyn Surface<K>>>,
    stack: Vec<K>,
    started: bool,
}

impl<K: SurfaceKey> SurfaceManager<K> {
    //--- Construction -----------------------------------------------------

    /// Creates a manager with an empty stack.
    pub fn new() -> Self {
        Self {
            surfaces: HashMap::new(),
            stack: Vec::new(),
            started: false,
        }
    }

    //--- Registration -----------------------------------------------------

    /// Registers a surface. Surfaces must be registered before any
    /// transition references them.
    pub fn register<T>(&mut self, key: K, surface: T)
    where
        T: Surface<K> + 'static,
    {
        if self.surfaces.insert(key, Box::new(surface)).is_some() {
            warn!(target: "surface", "Surface {:?} was already registered and has been replaced", key);
        }
    }

    /// Registers a surface and places it on the initial stack. Its
    /// `on_enter` runs when the manager starts.
    pub fn register_default<T>(&mut self, key: K, surface: T)
    where
        T: Surface<K> + 'static,
    {
        self.register(key, surface);
        if self.stack.contains(&key) {
            warn!(target: "surface", "Surface {:?} is already in the stack", key);
        } else {
            self.stack.push(key);
        }
    }

    /// Runs `on_enter` for the initial stack, bottom-up. Idempotent.
    pub fn start(&mut self, ctx: &mut FrameContext<'_, K>) {
        if self.started {
            return;
        }
        self.started = true;
        debug!(target: "surface", "Starting with initial stack {:?}", self.stack);
        for key in self.stack.clone() {
            if let Some(surface) = self.surfaces.get_mut(&key) {
                surface.on_enter(ctx);
            } else {
                warn!(target: "surface", "Initial surface {:?} not registered", key);
            }
        }
    }

    //--- Update Loop ------------------------------------------------------

    /// Updates active surfaces bottom-up.
    ///
    /// Active means: everything from the topmost non-overlay surface to
    /// the top of the stack. Overlays leave the page running beneath.
    pub fn update(&mut self, ctx: &mut FrameContext<'_, K>) {
        if self.stack.is_empty() {
            return;
        }

        for key in self.collect_active() {
            if let Some(surface) = self.surfaces.get_mut(&key) {
                surface.update(ctx);
            }
        }
    }

    //--- Transition Processing --------------------------------------------

    /// Applies queued transitions in FIFO order with enter/exit hooks.
    ///
    /// Called at the frame boundary, after surface updates.
    pub fn process_transitions(
        &mut self,
        transitions: Vec<SurfaceTransition<K>>,
        ctx: &mut FrameContext<'_, K>,
    ) {
        for transition in transitions {
            match transition {
                SurfaceTransition::Push(key) => self.push_internal(key, ctx),
                SurfaceTransition::Remove(key) => self.remove_internal(key, ctx),
                SurfaceTransition::Replace(old_key, new_key) => {
                    self.replace_internal(old_key, new_key, ctx)
                }
                SurfaceTransition::Clear => self.clear_internal(ctx),
            }
        }
    }

    //--- Query API --------------------------------------------------------

    pub fn is_on_stack(&self, key: K) -> bool {
        self.stack.contains(&key)
    }

    pub fn stack_len(&self) -> usize {
        self.stack.len()
    }

    //--- Internal Helpers -------------------------------------------------

    fn push_internal(&mut self, key: K, ctx: &mut FrameContext<'_, K>) {
        if self.stack.contains(&key) {
            warn!(target: "surface", "Surface {:?} already stacked, skipping push", key);
            return;
        }
        if !self.surfaces.contains_key(&key) {
            warn!(target: "surface", "Attempted to push unregistered surface {:?}", key);
            return;
        }

        debug!(target: "surface", "Pushing {:?}", key);
        self.stack.push(key);
        if let Some(surface) = self.surfaces.get_mut(&key) {
            surface.on_enter(ctx);
        }
    }

    fn remove_internal(&mut self, key: K, ctx: &mut FrameContext<'_, K>) {
        if let Some(pos) = self.stack.iter().position(|&k| k == key) {
            debug!(target: "surface", "Removing {:?}", key);
            self.stack.remove(pos);
            if let Some(surface) = self.surfaces.get_mut(&key) {
                surface.on_exit(ctx);
            }
        } else {
            debug!(target: "surface", "Surface {:?} not stacked, skipping removal", key);
        }
    }

    fn replace_internal(&mut self, old_key: K, new_key: K, ctx: &mut FrameContext<'_, K>) {
        let Some(pos) = self.stack.iter().position(|&k| k == old_key) else {
            warn!(target: "surface", "Surface {:?} not stacked, skipping replacement", old_key);
            return;
        };
        if self.stack.contains(&new_key) {
            warn!(target: "surface", "Surface {:?} already stacked, skipping replacement", new_key);
            return;
        }
        if !self.surfaces.contains_key(&new_key) {
            warn!(target: "surface", "Attempted to replace with unregistered surface {:?}", new_key);
            return;
        }

        debug!(target: "surface", "Replacing {:?} with {:?}", old_key, new_key);
        if let Some(surface) = self.surfaces.get_mut(&old_key) {
            surface.on_exit(ctx);
        }
        self.stack[pos] = new_key;
        if let Some(surface) = self.surfaces.get_mut(&new_key) {
            surface.on_enter(ctx);
        }
    }

    fn clear_internal(&mut self, ctx: &mut FrameContext<'_, K>) {
        debug!(target: "surface", "Clearing surface stack");
        for key in std::mem::take(&mut self.stack) {
            if let Some(surface) = self.surfaces.get_mut(&key) {
                surface.on_exit(ctx);
            }
        }
    }

    fn collect_active(&self) -> Vec<K> {
        let mut active = Vec::new();
        for &key in self.stack.iter().rev() {
            active.insert(0, key);
            if let Some(surface) = self.surfaces.get(&key) {
                if !surface.is_overlay() {
                    break;
                }
            }
        }
        active
    }
}

impl<K: SurfaceKey> Default for SurfaceManager<K> {
    fn default() -> Self {
        Self::new()
    }
}
