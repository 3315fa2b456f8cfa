//=========================================================================
// Frame Orchestrator
//
// Central coordinator for all engine subsystems, advanced once per
// animation frame.
//
// Responsibilities:
// - Drain host events into the systems that consume them
// - Enforce the frame pipeline order so every consumer samples the
//   same state within a frame
// - Run the two single-writer sweeps (cursor mode, active section)
// - Surface outward-facing actions to the host
//
// Pipeline, fixed order:
//   1. route host events (viewport, pointer, scroll input, progress)
//   2. boot gate advance (store writes, scroll lock management)
//   3. scroll engine advance → per-frame listener dispatch
//   4. animator sampling (reads the position written in 3)
//   5. surface updates (hit tests, binding registration, transitions)
//   6. transition processing (enter/exit hooks)
//   7. cursor-mode and active-section sweeps
//
// Scroll state is therefore always fully updated before any binding
// samples it; no two surfaces can observe different positions in the
// same frame.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod animate;
pub mod boot;
pub mod content;
pub mod context;
pub mod input;
pub mod scroll;
pub mod stage;
pub mod store;
pub mod surface;

//=== External Crates =====================================================

use log::info;

//=== Internal Modules ====================================================

use animate::Animator;
use boot::{BootConfig, BootSequencer};
use content::SiteContent;
use context::{ExternalAction, FrameContext, HoverRegion, SectionMarker};
use input::{HostEvent, PointerTracker};
use scroll::ScrollEngine;
use stage::Stage;
use store::{CursorMode, UiStore};
use surface::{SurfaceKey, SurfaceManager, TransitionQueue};

//=== TickControl =========================================================
//
// Control flow for the frame loop. Each tick signals either to continue
// or to terminate the loop.
//
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    Exit,
}

//=== FrameOrchestrator ===================================================

/// Owns every core system and advances them one frame at a time.
///
/// The platform layer (or a test) calls [`FrameOrchestrator::tick`] with
/// the frame's elapsed time and host events; everything else follows
/// from the pipeline above.
pub struct FrameOrchestrator<K: SurfaceKey, S: Stage> {
    store: UiStore,
    scroll: ScrollEngine,
    boot: BootSequencer,
    pointer: PointerTracker,
    animator: Animator,
    surfaces: SurfaceManager<K>,
    transitions: TransitionQueue<K>,
    content: SiteContent,
    stage: S,
    content_height: f32,
    native_scroll_suppressed: bool,
    hover_regions: Vec<HoverRegion>,
    sections: Vec<SectionMarker>,
    external: Vec<ExternalAction>,
    pending_external: Vec<ExternalAction>,
}

impl<K: SurfaceKey, S: Stage> FrameOrchestrator<K, S> {
    //--- Construction -----------------------------------------------------

    /// Creates the orchestrator. The boot gate arms immediately: scroll
    /// is locked and native scrolling suppressed until the gate drops.
    pub fn new(content: SiteContent, mut stage: S, boot_config: BootConfig, lerp_factor: f32) -> Self {
        let store = UiStore::new();
        let scroll = ScrollEngine::with_lerp_factor(lerp_factor);
        let boot = BootSequencer::new(boot_config, store.clone(), scroll.clone());

        // Second line of defense behind the scroll-input lock.
        stage.suppress_native_scroll(true);

        Self {
            pointer: PointerTracker::new(store.clone()),
            store,
            scroll,
            boot,
            animator: Animator::new(),
            surfaces: SurfaceManager::new(),
            transitions: TransitionQueue::new(),
            content,
            stage,
            content_height: 0.0,
            native_scroll_suppressed: true,
            hover_regions: Vec::new(),
            sections: Vec::new(),
            external: Vec::new(),
            pending_external: Vec::new(),
        }
    }

    //--- Assembly ---------------------------------------------------------

    /// Surface registry, for wiring the page before the first tick.
    pub fn surfaces_mut(&mut self) -> &mut SurfaceManager<K> {
        &mut self.surfaces
    }

    /// Declares the scrollable document height. Together with the
    /// viewport this bounds the virtual scroll range.
    pub fn set_content_height(&mut self, height: f32) {
        self.content_height = height;
        let (_, viewport_h) = self.stage.viewport();
        self.scroll.set_content_extent(height, viewport_h);
    }

    //--- Accessors --------------------------------------------------------

    pub fn store(&self) -> &UiStore {
        &self.store
    }

    pub fn scroll(&self) -> &ScrollEngine {
        &self.scroll
    }

    pub fn stage(&self) -> &S {
        &self.stage
    }

    pub fn stage_mut(&mut self) -> &mut S {
        &mut self.stage
    }

    /// Outward-facing actions requested since the last call.
    pub fn take_external_actions(&mut self) -> Vec<ExternalAction> {
        std::mem::take(&mut self.pending_external)
    }

    //--- Frame Advance ----------------------------------------------------

    /// Advances every system by one frame.
    pub fn tick(&mut self, dt: f32, events: &[HostEvent]) -> TickControl {
        let mut control = TickControl::Continue;

        //--- 1. Route host events ----------------------------------------
        self.pointer.begin_frame();
        for event in events {
            match *event {
                HostEvent::CloseRequested => {
                    info!(target: "core", "Close requested, ending frame loop");
                    control = TickControl::Exit;
                }
                HostEvent::Resized { width, height } => {
                    self.stage.set_viewport(width, height);
                    self.scroll.set_content_extent(self.content_height, height);
                }
                HostEvent::AssetProgress(progress) => self.boot.report_progress(progress),
                HostEvent::Wheel { delta } | HostEvent::TouchDrag { delta } => {
                    self.scroll.add_delta(delta)
                }
                _ => {}
            }
        }
        self.pointer.process_events(events);

        //--- 2. Boot gate -------------------------------------------------
        self.boot.advance(dt);
        let gating = self.boot.is_gating();
        if gating != self.native_scroll_suppressed {
            self.native_scroll_suppressed = gating;
            self.stage.suppress_native_scroll(gating);
        }

        //--- 3 & 4. Scroll, then bindings ---------------------------------
        self.scroll.advance();
        self.animator.sample(
            self.scroll.position(),
            self.scroll.velocity(),
            dt,
            &mut self.stage,
        );

        //--- 5 & 6. Surfaces and transitions ------------------------------
        self.hover_regions.clear();
        self.sections.clear();
        {
            let Self {
                store,
                scroll,
                boot,
                pointer,
                animator,
                surfaces,
                transitions,
                content,
                stage,
                hover_regions,
                sections,
                external,
                ..
            } = self;

            let mut ctx = FrameContext {
                store,
                scroll,
                content,
                animator,
                stage,
                pointer,
                transitions,
                boot_phase: boot.phase(),
                boot_reveal: boot.reveal_progress(),
                dt,
                hover_regions,
                sections,
                external,
            };

            surfaces.start(&mut ctx);
            surfaces.update(&mut ctx);
            let queued = ctx.transitions.take();
            surfaces.process_transitions(queued, &mut ctx);
        }

        //--- 7. Single-writer sweeps --------------------------------------
        self.sweep_cursor_mode();
        self.sweep_active_section();

        //--- Outward actions ----------------------------------------------
        for action in self.external.drain(..) {
            match &action {
                ExternalAction::OpenUrl(url) => {
                    info!(target: "core", "External open requested: {}", url)
                }
            }
            self.pending_external.push(action);
        }

        control
    }

    //--- Internal Helpers -------------------------------------------------

    // The store's single `cursor_mode` writer. The last-declared region
    // containing the pointer wins, matching stack order (overlays update
    // after the page and out-declare it).
    fn sweep_cursor_mode(&mut self) {
        let (px, py) = self.pointer.position_px();
        let scroll = self.scroll.position();

        let mut mode = CursorMode::Default;
        for region in &self.hover_regions {
            if let Some(rect) = self.stage.bounds(region.element) {
                let dy = if region.fixed { 0.0 } else { -scroll };
                if rect.offset(0.0, dy).contains(px, py) {
                    mode = if region.drag && self.pointer.primary_down() {
                        CursorMode::Drag
                    } else {
                        CursorMode::Hover
                    };
                }
            }
        }
        self.store.set_cursor_mode(mode);
    }

    // The store's single `active_section` writer: the last-declared
    // section spanning the viewport's vertical center.
    fn sweep_active_section(&mut self) {
        let (_, viewport_h) = self.stage.viewport();
        let center = self.scroll.position() + viewport_h / 2.0;

        let mut active = None;
        for marker in &self.sections {
            if let Some(rect) = self.stage.bounds(marker.element) {
                if center >= rect.top() && center <= rect.bottom() {
                    active = Some(marker.name.clone());
                }
            }
        }
        if let Some(name) = active {
            self.store.set_active_section(name);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
