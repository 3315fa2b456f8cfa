//=========================================================================
// Frame Context
//=========================================================================
//
// Shared data handed to surfaces during lifecycle and update calls.
//
// The context is rebuilt every frame by the orchestrator and borrows
// the engine's systems; surfaces never own a system, they only use it
// through here. Hit regions and section markers are declared fresh each
// frame (immediate mode), so a surface that stops updating stops
// declaring — there is nothing to leak.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::animate::Animator;
use crate::core::boot::BootPhase;
use crate::core::content::SiteContent;
use crate::core::input::PointerTracker;
use crate::core::scroll::ScrollEngine;
use crate::core::stage::{ElementId, Stage};
use crate::core::store::UiStore;
use crate::core::surface::{SurfaceKey, TransitionQueue};

//=== Frame Declarations ==================================================

/// Hit region declared by a surface for the cursor sweep.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HoverRegion {
    pub element: ElementId,
    /// Drag-capable regions show the drag cursor while the primary
    /// button is held over them.
    pub drag: bool,
    /// Fixed regions live in viewport space (overlays); scrolling does
    /// not move them.
    pub fixed: bool,
}

/// Section marker for the active-section sweep.
#[derive(Debug, Clone)]
pub(crate) struct SectionMarker {
    pub name: String,
    pub element: ElementId,
}

/// Outward-facing action requested by a surface, resolved by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExternalAction {
    /// Open a `mailto:` or web URL in a new context.
    OpenUrl(String),
}

//=== FrameContext ========================================================

/// Everything a surface may touch during one frame.
pub struct FrameContext<'a, K: SurfaceKey> {
    /// Shared UI state store (read + the fields this surface owns).
    pub store: &'a UiStore,

    /// Virtual scroll state, read-only by convention — the engine is
    /// its only writer.
    pub scroll: &'a ScrollEngine,

    /// The loaded content document.
    pub content: &'a SiteContent,

    /// Binding registry; surfaces bind in `on_enter` and retire their
    /// group in `on_exit`.
    pub animator: &'a mut Animator,

    /// Rendering boundary.
    pub stage: &'a mut (dyn Stage + 'a),

    /// Pointer state for this frame (pixel position, click deltas).
    pub pointer: &'a PointerTracker,

    /// Queue for surface stack changes, processed at the frame boundary.
    pub transitions: &'a mut TransitionQueue<K>,

    /// Boot gate phase this frame.
    pub boot_phase: BootPhase,

    /// Boot exit-transition progress in [0, 1].
    pub boot_reveal: f32,

    /// Seconds elapsed since the previous frame.
    pub dt: f32,

    pub(crate) hover_regions: &'a mut Vec<HoverRegion>,
    pub(crate) sections: &'a mut Vec<SectionMarker>,
    pub(crate) external: &'a mut Vec<ExternalAction>,
}

impl<'a, K: SurfaceKey> FrameContext<'a, K> {
    //--- Declarations -----------------------------------------------------

    /// Declares a hover hit region for this frame's cursor sweep.
    pub fn declare_hover_region(&mut self, element: ElementId, drag: bool) {
        self.hover_regions.push(HoverRegion { element, drag, fixed: false });
    }

    /// Declares a viewport-space hover region (fixed overlays).
    pub fn declare_fixed_hover_region(&mut self, element: ElementId, drag: bool) {
        self.hover_regions.push(HoverRegion { element, drag, fixed: true });
    }

    /// Declares a section marker for this frame's active-section sweep.
    pub fn declare_section(&mut self, name: impl Into<String>, element: ElementId) {
        self.sections.push(SectionMarker {
            name: name.into(),
            element,
        });
    }

    /// Requests an outward-facing action from the host.
    pub fn request_external(&mut self, action: ExternalAction) {
        self.external.push(action);
    }

    //--- Hit Testing ------------------------------------------------------

    /// True if the window-pixel point lies inside the element, accounting
    /// for the current scroll position. Elements without bounds hit
    /// nothing.
    pub fn hit(&self, element: ElementId, x: f32, y: f32) -> bool {
        match self.stage.bounds(element) {
            Some(rect) => rect.offset(0.0, -self.scroll.position()).contains(x, y),
            None => false,
        }
    }

    /// Viewport-space hit test for fixed overlay elements, which do not
    /// move with the scroll position.
    pub fn hit_fixed(&self, element: ElementId, x: f32, y: f32) -> bool {
        match self.stage.bounds(element) {
            Some(rect) => rect.contains(x, y),
            None => false,
        }
    }

    /// True if any of this frame's primary-button presses landed on the
    /// element.
    pub fn clicked(&self, element: ElementId) -> bool {
        self.pointer
            .clicks()
            .any(|(x, y)| self.hit(element, x, y))
    }

    /// [`FrameContext::clicked`] for fixed overlay elements.
    pub fn clicked_fixed(&self, element: ElementId) -> bool {
        self.pointer
            .clicks()
            .any(|(x, y)| self.hit_fixed(element, x, y))
    }

    /// True if the pointer currently rests on the element.
    pub fn hovered(&self, element: ElementId) -> bool {
        let (x, y) = self.pointer.position_px();
        self.hit(element, x, y)
    }

    /// [`FrameContext::hovered`] for fixed overlay elements.
    pub fn hovered_fixed(&self, element: ElementId) -> bool {
        let (x, y) = self.pointer.position_px();
        self.hit_fixed(element, x, y)
    }
}

//=========================================================================
// Test Rig
//=========================================================================
//
// Owns one of everything a context borrows, so tests can hand surfaces
// a real context without assembling a full engine.
//


//=========================================================================
// Unit Tests
//=========================================================================
