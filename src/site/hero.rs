//=========================================================================
// Hero Section
//=========================================================================
//
// First screen: name, display title, subtitle, scroll hint. Plays a
// staggered rise-in the moment the boot gate drops; text re-renders on
// language change.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::animate::{Easing, Tween};
use crate::core::boot::BootPhase;
use crate::core::context::FrameContext;
use crate::core::stage::PropertyValue;
use crate::core::store::Language;
use crate::core::surface::Surface;

use super::{el, SiteSurface};

//=== Intro Tracks ========================================================
//
// One timed property transition, optionally delayed. The delay burns
// down first; leftover frame time flows into the tween so stagger
// boundaries do not quantize to frames.
//
struct IntroTrack {
    key: &'static str,
    property: &'static str,
    delay: f32,
    tween: Tween,
}

fn track(key: &'static str, property: &'static str, delay: f32, tween: Tween) -> IntroTrack {
    IntroTrack { key, property, delay, tween }
}

//=== HeroSection =========================================================

pub struct HeroSection {
    rendered: Option<Language>,
    intro: Vec<IntroTrack>,
    intro_started: bool,
}

impl HeroSection {
    pub fn new() -> Self {
        Self {
            rendered: None,
            intro: Vec::new(),
            intro_started: false,
        }
    }

    fn start_intro(&mut self) {
        self.intro = vec![
            track(el::HERO_NAME, "y", 0.0, Tween::new(100.0, 0.0, 1.2, Easing::QuartOut)),
            track(el::HERO_NAME, "opacity", 0.0, Tween::new(0.0, 1.0, 1.2, Easing::QuartOut)),
            track(el::HERO_TITLE, "y", 0.4, Tween::new(100.0, 0.0, 1.0, Easing::QuartOut)),
            track(el::HERO_TITLE, "opacity", 0.4, Tween::new(0.0, 1.0, 1.0, Easing::QuartOut)),
            track(el::HERO_SUBTITLE, "y", 0.7, Tween::new(50.0, 0.0, 1.0, Easing::CubicOut)),
            track(el::HERO_SUBTITLE, "opacity", 0.7, Tween::new(0.0, 1.0, 1.0, Easing::CubicOut)),
            track(el::HERO_SCROLL_HINT, "opacity", 1.0, Tween::new(0.0, 1.0, 0.8, Easing::QuadOut)),
        ];
    }
}

impl Surface<SiteSurface> for HeroSection {
    fn update(&mut self, ctx: &mut FrameContext<'_, SiteSurface>) {
        let root = ctx.stage.element(el::HERO_ROOT);
        ctx.declare_section("hero", root);

        //--- Copy ---------------------------------------------------------
        let language = ctx.store.with(|s| s.language);
        if self.rendered != Some(language) {
            self.rendered = Some(language);
            let hero = &ctx.content.locale(language).hero;
            let name = ctx.stage.element(el::HERO_NAME);
            let title = ctx.stage.element(el::HERO_TITLE);
            let subtitle = ctx.stage.element(el::HERO_SUBTITLE);
            ctx.stage.set_property(name, "text", PropertyValue::Text(hero.name.clone()));
            ctx.stage.set_property(title, "text", PropertyValue::Text(hero.title.clone()));
            ctx.stage.set_property(subtitle, "text", PropertyValue::Text(hero.subtitle.clone()));
        }

        //--- Intro --------------------------------------------------------
        if !self.intro_started && ctx.boot_phase == BootPhase::Ready {
            self.intro_started = true;
            self.start_intro();
        }

        for item in &mut self.intro {
            let mut step = ctx.dt;
            if item.delay > 0.0 {
                item.delay -= step;
                if item.delay > 0.0 {
                    continue;
                }
                step = -item.delay;
            }
            let value = item.tween.advance(step);
            let element = ctx.stage.element(item.key);
            ctx.stage.set_property(element, item.property, PropertyValue::Number(value));
        }
        self.intro.retain(|item| !item.tween.is_finished());
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

    fn frames(hero: &mut HeroSection, rig: &mut TestRig<SiteSurface>, count: usize) {
        for _ in 0..count {
            hero.update(&mut rig.ctx());
        }
    }

    #[test]
    fn copy_renders_and_follows_the_language() {
        let mut rig: TestRig<SiteSurface> = TestRig::new();
        let mut hero = HeroSection::new();
        hero.update(&mut rig.ctx());

        let name = rig.stage.element(el::HERO_NAME);
        assert_eq!(rig.stage.text(name, "text"), Some("Nfr"));

        rig.store.set_language(Language::En);
        hero.update(&mut rig.ctx());
        assert_eq!(rig.stage.text(name, "text"), Some("Nen"));
    }

    #[test]
    fn intro_plays_once_after_boot() {
        let mut rig: TestRig<SiteSurface> = TestRig::new();
        rig.boot_phase = BootPhase::Booting;

        let mut hero = HeroSection::new();
        frames(&mut hero, &mut rig, 10);

        let name = rig.stage.element(el::HERO_NAME);
        assert!(rig.stage.number(name, "opacity").is_none(), "no intro while booting");

        rig.boot_phase = BootPhase::Ready;
        hero.update(&mut rig.ctx());
        let early = rig.stage.number(name, "opacity").unwrap();
        assert!(early < 1.0);

        // Run the whole stagger out (~2s).
        frames(&mut hero, &mut rig, 150);
        assert_eq!(rig.stage.number(name, "opacity"), Some(1.0));
        assert_eq!(rig.stage.number(name, "y"), Some(0.0));
        let hint = rig.stage.element(el::HERO_SCROLL_HINT);
        assert_eq!(rig.stage.number(hint, "opacity"), Some(1.0));
        assert!(hero.intro.is_empty(), "finished tracks are dropped");
    }

    #[test]
    fn delayed_tracks_wait_their_turn() {
        let mut rig: TestRig<SiteSurface> = TestRig::new();
        let mut hero = HeroSection::new();

        hero.update(&mut rig.ctx());
        // Frame 1 after boot: the name moves, the subtitle (0.7s delay)
        // does not.
        let subtitle = rig.stage.element(el::HERO_SUBTITLE);
        assert!(rig.stage.number(subtitle, "opacity").is_none());

        frames(&mut hero, &mut rig, 60); // one second in
        let opacity = rig.stage.number(subtitle, "opacity").unwrap();
        assert!(opacity > 0.0 && opacity < 1.0, "mid-stagger at 1s");
    }

    #[test]
    fn section_marker_is_declared_every_frame() {
        let mut rig: TestRig<SiteSurface> = TestRig::new();
        let mut hero = HeroSection::new();
        hero.update(&mut rig.ctx());
        assert_eq!(rig.sections.len(), 1);
        assert_eq!(rig.sections[0].name, "hero");
    }
}
