//=========================================================================
// Skills Section
//=========================================================================
//
// Two skill lists fading up as they cross the viewport. Each item
// scrubs over its own band, so the stagger falls straight out of the
// layout: lower items start later because they sit lower.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::animate::{Easing, EdgeAnchor, GroupId, ScrubSpec, TriggerRange};
use crate::core::context::FrameContext;
use crate::core::stage::PropertyValue;
use crate::core::store::Language;
use crate::core::surface::Surface;

use super::{el, SiteSurface};

//=== SkillsSection =======================================================

pub struct SkillsSection {
    group: Option<GroupId>,
    rendered: Option<Language>,
}

impl SkillsSection {
    pub fn new() -> Self {
        Self {
            group: None,
            rendered: None,
        }
    }

    fn lists(ctx: &FrameContext<'_, SiteSurface>, language: Language) -> [(&'static str, Vec<String>); 2] {
        let skills = &ctx.content.locale(language).skills;
        [
            ("technical", skills.technical.clone()),
            ("design", skills.design.clone()),
        ]
    }
}

impl Surface<SiteSurface> for SkillsSection {
    fn on_enter(&mut self, ctx: &mut FrameContext<'_, SiteSurface>) {
        let group = ctx.animator.group();
        let language = ctx.store.with(|s| s.language);

        for (list, items) in Self::lists(ctx, language) {
            for index in 0..items.len() {
                let element = ctx.stage.element(&el::skills_item(list, index));
                let band = TriggerRange::Band {
                    trigger: element,
                    start: EdgeAnchor::top(0.9),
                    end: EdgeAnchor::top(0.6),
                };
                ctx.animator.bind_scrub(group, ScrubSpec {
                    element,
                    property: "opacity".into(),
                    range: band,
                    from: 0.0,
                    to: 1.0,
                    easing: Easing::QuadOut,
                });
                ctx.animator.bind_scrub(group, ScrubSpec {
                    element,
                    property: "y".into(),
                    range: band,
                    from: 50.0,
                    to: 0.0,
                    easing: Easing::QuadOut,
                });
            }
        }

        self.group = Some(group);
    }

    fn on_exit(&mut self, ctx: &mut FrameContext<'_, SiteSurface>) {
        if let Some(group) = self.group.take() {
            ctx.animator.retire_group(group);
        }
    }

    fn update(&mut self, ctx: &mut FrameContext<'_, SiteSurface>) {
        let root = ctx.stage.element(el::SKILLS_ROOT);
        ctx.declare_section("skills", root);

        let language = ctx.store.with(|s| s.language);
        if self.rendered != Some(language) {
            self.rendered = Some(language);
            for (list, items) in Self::lists(ctx, language) {
                for (index, item) in items.iter().enumerate() {
                    let element = ctx.stage.element(&el::skills_item(list, index));
                    ctx.stage.set_property(element, "text", PropertyValue::Text(item.clone()));
                }
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::context::test_rig::TestRig;
    use crate::core::stage::{Rect, Stage};

    fn rig_with_layout() -> TestRig<SiteSurface> {
        let mut rig: TestRig<SiteSurface> = TestRig::new();
        rig.stage.place(el::SKILLS_ROOT, Rect::new(0.0, 3000.0, 1000.0, 800.0));
        rig.stage.place(&el::skills_item("technical", 0), Rect::new(80.0, 3160.0, 360.0, 40.0));
        rig.stage.place(&el::skills_item("design", 0), Rect::new(580.0, 3160.0, 360.0, 40.0));
        rig
    }

    #[test]
    fn items_fade_in_over_their_own_band() {
        let mut rig = rig_with_layout();
        let mut skills = SkillsSection::new();
        skills.on_enter(&mut rig.ctx());

        let item = rig.stage.element(&el::skills_item("technical", 0));

        // start = 3160 - 0.9*800 = 2440, end = 3160 - 0.6*800 = 2680
        rig.animator.sample(2440.0, 0.0, 1.0 / 60.0, &mut rig.stage);
        assert_eq!(rig.stage.number(item, "opacity"), Some(0.0));

        rig.animator.sample(2680.0, 0.0, 1.0 / 60.0, &mut rig.stage);
        assert_eq!(rig.stage.number(item, "opacity"), Some(1.0));
        assert_eq!(rig.stage.number(item, "y"), Some(0.0));
    }

    #[test]
    fn enter_binds_both_lists_and_exit_clears() {
        let mut rig = rig_with_layout();
        let mut skills = SkillsSection::new();
        skills.on_enter(&mut rig.ctx());
        // Fixture: one item per list, two properties each.
        assert_eq!(rig.animator.binding_count(), 4);

        skills.on_exit(&mut rig.ctx());
        assert!(rig.animator.is_empty());
    }

    #[test]
    fn copy_follows_the_language() {
        let mut rig = rig_with_layout();
        let mut skills = SkillsSection::new();
        skills.update(&mut rig.ctx());

        let item = rig.stage.element(&el::skills_item("technical", 0));
        assert_eq!(rig.stage.text(item, "text"), Some("Rust"));

        rig.store.set_language(Language::En);
        skills.update(&mut rig.ctx());
        assert_eq!(rig.stage.text(item, "text"), Some("Rust"));
    }
}
