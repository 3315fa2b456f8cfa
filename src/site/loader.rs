//=========================================================================
// Loader Overlay
//=========================================================================
//
// Boot screen: progress bar, percentage counter, exit wipe. Reads the
// smoothed progress from the store and the reveal progress from the
// boot gate, and removes itself from the stack once the gate drops.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::boot::BootPhase;
use crate::core::context::FrameContext;
use crate::core::stage::PropertyValue;
use crate::core::surface::{Surface, SurfaceTransition};

use super::{el, SiteSurface};

//=== LoaderSurface =======================================================

pub struct LoaderSurface {
    remove_queued: bool,
}

impl LoaderSurface {
    pub fn new() -> Self {
        Self { remove_queued: false }
    }
}

impl Surface<SiteSurface> for LoaderSurface {
    fn update(&mut self, ctx: &mut FrameContext<'_, SiteSurface>) {
        let root = ctx.stage.element(el::LOADER_ROOT);
        let bar = ctx.stage.element(el::LOADER_BAR);
        let counter = ctx.stage.element(el::LOADER_COUNTER);

        let progress = ctx.store.with(|s| s.boot_progress);
        ctx.stage.set_property(bar, "width", PropertyValue::Number(progress));
        ctx.stage.set_property(
            counter,
            "text",
            PropertyValue::Text(format!("{}%", progress.floor() as i32)),
        );

        // 0 = covering the page, 1 = fully wiped away.
        ctx.stage.set_property(root, "clip", PropertyValue::Number(ctx.boot_reveal));

        if ctx.boot_phase == BootPhase::Ready && !self.remove_queued {
            self.remove_queued = true;
            ctx.transitions.push(SurfaceTransition::Remove(SiteSurface::Loader));
        }
    }

    fn is_overlay(&self) -> bool {
        true
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::context::test_rig::TestRig;
    use crate::core::stage::Stage;

    #[test]
    fn loader_mirrors_boot_progress_onto_the_bar() {
        let mut rig: TestRig<SiteSurface> = TestRig::new();
        rig.store.set_boot_progress(37.5);
        rig.boot_phase = BootPhase::Booting;
        rig.boot_reveal = 0.0;

        let mut loader = LoaderSurface::new();
        loader.update(&mut rig.ctx());

        let bar = rig.stage.element("loader.bar");
        assert_eq!(rig.stage.number(bar, "width"), Some(37.5));
        let counter = rig.stage.element("loader.counter");
        assert_eq!(rig.stage.text(counter, "text"), Some("37%"));
    }

    #[test]
    fn loader_queues_its_own_removal_exactly_once() {
        let mut rig: TestRig<SiteSurface> = TestRig::new();
        rig.boot_phase = BootPhase::Ready;
        rig.boot_reveal = 1.0;

        let mut loader = LoaderSurface::new();
        loader.update(&mut rig.ctx());
        loader.update(&mut rig.ctx());

        assert_eq!(rig.transitions.len(), 1);
    }

    #[test]
    fn exit_wipe_tracks_the_reveal_progress() {
        let mut rig: TestRig<SiteSurface> = TestRig::new();
        rig.boot_phase = BootPhase::Revealing;
        rig.boot_reveal = 0.4;

        let mut loader = LoaderSurface::new();
        loader.update(&mut rig.ctx());

        let root = rig.stage.element("loader.root");
        assert_eq!(rig.stage.number(root, "clip"), Some(0.4));
        assert!(rig.transitions.is_empty(), "not ready yet, no removal");
    }
}
