//=========================================================================
// Contact Section
//=========================================================================
//
// Contact links with a magnetic pull: while the pointer rests on a
// link it leans toward the pointer at a third of the offset, easing
// back to rest when the pointer leaves. Clicking requests the matching
// external open (`mailto:` or profile URL) from the host.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::context::{ExternalAction, FrameContext};
use crate::core::stage::PropertyValue;
use crate::core::store::Language;
use crate::core::surface::Surface;

use super::{el, SiteSurface};

//=== Constants ===========================================================

/// Fraction of the pointer offset a link leans by while hovered.
const MAGNET_PULL: f32 = 0.3;

/// Per-frame fraction of the lean gap closed.
const MAGNET_EASE: f32 = 0.2;

//=== ContactSection ======================================================

pub struct ContactSection {
    rendered: Option<Language>,
    offsets: [(f32, f32); el::CONTACT_LINKS.len()],
}

impl ContactSection {
    pub fn new() -> Self {
        Self {
            rendered: None,
            offsets: [(0.0, 0.0); el::CONTACT_LINKS.len()],
        }
    }

    fn link_targets(ctx: &FrameContext<'_, SiteSurface>, language: Language) -> [String; 4] {
        let contact = &ctx.content.locale(language).contact;
        [
            format!("mailto:{}", contact.email),
            contact.github.clone(),
            contact.linkedin.clone(),
            contact.twitter.clone(),
        ]
    }
}

impl Surface<SiteSurface> for ContactSection {
    fn update(&mut self, ctx: &mut FrameContext<'_, SiteSurface>) {
        let root = ctx.stage.element(el::CONTACT_ROOT);
        ctx.declare_section("contact", root);

        let language = ctx.store.with(|s| s.language);

        //--- Copy ---------------------------------------------------------
        if self.rendered != Some(language) {
            self.rendered = Some(language);
            let contact = &ctx.content.locale(language).contact;
            let labels = [contact.email.clone(), "GITHUB".into(), "LINKEDIN".into(), "TWITTER".into()];
            for (key, label) in el::CONTACT_LINKS.iter().zip(labels) {
                let element = ctx.stage.element(key);
                ctx.stage.set_property(element, "text", PropertyValue::Text(label));
            }
        }

        //--- Magnetic pull + clicks ---------------------------------------
        let interactive = !ctx.scroll.is_locked();
        let targets = Self::link_targets(ctx, language);
        let (px, py) = ctx.pointer.position_px();
        let scroll = ctx.scroll.position();

        for (index, key) in el::CONTACT_LINKS.iter().enumerate() {
            let element = ctx.stage.element(key);
            if interactive {
                ctx.declare_hover_region(element, false);
            }

            let lean = &mut self.offsets[index];
            let target = match ctx.stage.bounds(element) {
                Some(rect) if rect.offset(0.0, -scroll).contains(px, py) => {
                    let (cx, cy) = rect.offset(0.0, -scroll).center();
                    ((px - cx) * MAGNET_PULL, (py - cy) * MAGNET_PULL)
                }
                _ => (0.0, 0.0),
            };
            lean.0 += (target.0 - lean.0) * MAGNET_EASE;
            lean.1 += (target.1 - lean.1) * MAGNET_EASE;
            ctx.stage.set_property(element, "x", PropertyValue::Number(lean.0));
            ctx.stage.set_property(element, "y", PropertyValue::Number(lean.1));

            if interactive && ctx.clicked(element) {
                ctx.request_external(ExternalAction::OpenUrl(targets[index].clone()));
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
