//=========================================================================
// Cursor Follower
//=========================================================================
//
// Custom cursor: a dot easing after the raw pointer, scaling with the
// cursor mode the orchestrator's hover sweep computes. The mode change
// is consumed through a store subscription so the scale tween retargets
// the instant the mode flips; the subscription is released on exit.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::RefCell;
use std::rc::Rc;

//=== Internal Dependencies ===============================================

use crate::core::animate::{Easing, Tween};
use crate::core::context::FrameContext;
use crate::core::stage::PropertyValue;
use crate::core::store::{CursorMode, Subscription};
use crate::core::surface::Surface;

use super::{el, SiteSurface};

//=== Constants ===========================================================

/// Per-frame fraction of the pointer gap the dot closes.
const FOLLOW_FACTOR: f32 = 0.35;

const SCALE_DURATION: f32 = 0.3;

fn scale_for(mode: CursorMode) -> f32 {
    match mode {
        CursorMode::Default => 1.0,
        CursorMode::Hover => 4.0,
        CursorMode::Drag => 0.5,
    }
}

//=== CursorSurface =======================================================

pub struct CursorSurface {
    position: (f32, f32),
    scale: Rc<RefCell<Tween>>,
    subscription: Option<Subscription>,
}

impl CursorSurface {
    pub fn new() -> Self {
        Self {
            position: (0.0, 0.0),
            scale: Rc::new(RefCell::new(Tween::new(1.0, 1.0, SCALE_DURATION, Easing::QuadOut))),
            subscription: None,
        }
    }
}

impl Surface<SiteSurface> for CursorSurface {
    fn on_enter(&mut self, ctx: &mut FrameContext<'_, SiteSurface>) {
        let scale = self.scale.clone();
        self.subscription = Some(ctx.store.subscribe(
            |s| s.cursor_mode,
            move |mode| scale.borrow_mut().retarget(scale_for(*mode)),
        ));
    }

    fn on_exit(&mut self, ctx: &mut FrameContext<'_, SiteSurface>) {
        if let Some(subscription) = self.subscription.take() {
            ctx.store.unsubscribe(subscription);
        }
    }

    fn update(&mut self, ctx: &mut FrameContext<'_, SiteSurface>) {
        let dot = ctx.stage.element(el::CURSOR_DOT);

        let (px, py) = ctx.pointer.position_px();
        self.position.0 += (px - self.position.0) * FOLLOW_FACTOR;
        self.position.1 += (py - self.position.1) * FOLLOW_FACTOR;
        ctx.stage.set_property(dot, "x", PropertyValue::Number(self.position.0));
        ctx.stage.set_property(dot, "y", PropertyValue::Number(self.position.1));

        let scale = self.scale.borrow_mut().advance(ctx.dt);
        ctx.stage.set_property(dot, "scale", PropertyValue::Number(scale));
    }

    fn is_overlay(&self) -> bool {
        true
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
