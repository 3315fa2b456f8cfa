//=========================================================================
// About Section
//=========================================================================
//
// Bio paragraph lifted and brightened by a scrub as it crosses the
// viewport band; the info items reveal once when the section comes in.
// All bindings live in one group retired on exit.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::animate::{Easing, EdgeAnchor, GroupId, RevealSpec, ScrubSpec, TriggerRange};
use crate::core::context::FrameContext;
use crate::core::stage::PropertyValue;
use crate::core::store::Language;
use crate::core::surface::Surface;

use super::{el, SiteSurface};

//=== AboutSection ========================================================

pub struct AboutSection {
    group: Option<GroupId>,
    rendered: Option<Language>,
}

impl AboutSection {
    pub fn new() -> Self {
        Self {
            group: None,
            rendered: None,
        }
    }
}

impl Surface<SiteSurface> for AboutSection {
    fn on_enter(&mut self, ctx: &mut FrameContext<'_, SiteSurface>) {
        let group = ctx.animator.group();
        let root = ctx.stage.element(el::ABOUT_ROOT);
        let bio = ctx.stage.element(el::ABOUT_BIO);

        // Bio scrubs from dimmed/offset to resting as it crosses the
        // band — fully reversible on the way back up.
        let band = TriggerRange::Band {
            trigger: bio,
            start: EdgeAnchor::top(0.8),
            end: EdgeAnchor::bottom(0.6),
        };
        ctx.animator.bind_scrub(group, ScrubSpec {
            element: bio,
            property: "opacity".into(),
            range: band,
            from: 0.3,
            to: 1.0,
            easing: Easing::Linear,
        });
        ctx.animator.bind_scrub(group, ScrubSpec {
            element: bio,
            property: "y".into(),
            range: band,
            from: 50.0,
            to: 0.0,
            easing: Easing::Linear,
        });

        // Info items play a one-shot rise when the section is 70% up
        // the viewport, reversing if scrolled back out.
        for (offset, key) in [(0.0f32, el::ABOUT_LOCATION), (0.2, el::ABOUT_AVAILABILITY)] {
            let element = ctx.stage.element(key);
            ctx.animator.bind_reveal(group, RevealSpec {
                element,
                property: "opacity".into(),
                trigger: root,
                anchor: 0.7,
                hidden: 0.0,
                shown: 1.0,
                duration: 1.0 + offset,
                easing: Easing::CubicOut,
            });
            ctx.animator.bind_reveal(group, RevealSpec {
                element,
                property: "y".into(),
                trigger: root,
                anchor: 0.7,
                hidden: 30.0,
                shown: 0.0,
                duration: 1.0 + offset,
                easing: Easing::CubicOut,
            });
        }

        self.group = Some(group);
    }

    fn on_exit(&mut self, ctx: &mut FrameContext<'_, SiteSurface>) {
        if let Some(group) = self.group.take() {
            ctx.animator.retire_group(group);
        }
    }

    fn update(&mut self, ctx: &mut FrameContext<'_, SiteSurface>) {
        let root = ctx.stage.element(el::ABOUT_ROOT);
        ctx.declare_section("about", root);

        let language = ctx.store.with(|s| s.language);
        if self.rendered != Some(language) {
            self.rendered = Some(language);
            let about = &ctx.content.locale(language).about;
            let bio = ctx.stage.element(el::ABOUT_BIO);
            let location = ctx.stage.element(el::ABOUT_LOCATION);
            let availability = ctx.stage.element(el::ABOUT_AVAILABILITY);
            ctx.stage.set_property(bio, "text", PropertyValue::Text(about.bio.clone()));
            ctx.stage.set_property(location, "text", PropertyValue::Text(about.location.clone()));
            ctx.stage.set_property(
                availability,
                "text",
                PropertyValue::Text(about.availability.clone()),
            );
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
