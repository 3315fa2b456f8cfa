//=========================================================================
// Language Toggle
//=========================================================================
//
// Fixed switch showing the other language's code; one click flips the
// store's language and every text-bearing surface re-renders from the
// other locale. This surface is the store's single `language` writer.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::context::FrameContext;
use crate::core::stage::PropertyValue;
use crate::core::store::Language;
use crate::core::surface::Surface;

use super::{el, SiteSurface};

//=== LanguageToggleSurface ===============================================

pub struct LanguageToggleSurface {
    rendered: Option<Language>,
}

impl LanguageToggleSurface {
    pub fn new() -> Self {
        Self { rendered: None }
    }
}

impl Surface<SiteSurface> for LanguageToggleSurface {
    fn update(&mut self, ctx: &mut FrameContext<'_, SiteSurface>) {
        let toggle = ctx.stage.element(el::LANGUAGE_TOGGLE);
        let language = ctx.store.with(|s| s.language);

        if self.rendered != Some(language) {
            self.rendered = Some(language);
            ctx.stage.set_property(
                toggle,
                "text",
                PropertyValue::Text(language.toggled().code().to_uppercase()),
            );
        }

        ctx.declare_fixed_hover_region(toggle, false);

        if ctx.clicked_fixed(toggle) {
            ctx.store.set_language(language.toggled());
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
    use crate::core::input::{HostEvent, PointerButton};
    use crate::core::stage::{Rect, Stage};

    fn rig_with_toggle() -> TestRig<SiteSurface> {
        let mut rig: TestRig<SiteSurface> = TestRig::new();
        rig.stage.place(el::LANGUAGE_TOGGLE, Rect::new(900.0, 40.0, 60.0, 32.0));
        rig
    }

    #[test]
    fn label_shows_the_other_language() {
        let mut rig = rig_with_toggle();
        let mut toggle = LanguageToggleSurface::new();
        toggle.update(&mut rig.ctx());

        let element = rig.stage.element(el::LANGUAGE_TOGGLE);
        assert_eq!(rig.stage.text(element, "text"), Some("EN"));

        rig.store.set_language(Language::En);
        toggle.update(&mut rig.ctx());
        assert_eq!(rig.stage.text(element, "text"), Some("FR"));
    }

    #[test]
    fn click_flips_the_language_both_ways() {
        let mut rig = rig_with_toggle();
        let mut toggle = LanguageToggleSurface::new();

        rig.pointer_frame(&[HostEvent::PointerPressed {
            button: PointerButton::Primary,
            x: 930.0,
            y: 50.0,
        }]);
        toggle.update(&mut rig.ctx());
        assert_eq!(rig.store.state().language, Language::En);

        rig.pointer_frame(&[HostEvent::PointerPressed {
            button: PointerButton::Primary,
            x: 930.0,
            y: 50.0,
        }]);
        toggle.update(&mut rig.ctx());
        assert_eq!(rig.store.state().language, Language::Fr);
    }

    #[test]
    fn click_elsewhere_changes_nothing() {
        let mut rig = rig_with_toggle();
        let mut toggle = LanguageToggleSurface::new();

        rig.pointer_frame(&[HostEvent::PointerPressed {
            button: PointerButton::Primary,
            x: 100.0,
            y: 500.0,
        }]);
        toggle.update(&mut rig.ctx());
        assert_eq!(rig.store.state().language, Language::Fr);
    }
}
