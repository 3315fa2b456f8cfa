//=========================================================================
// Project Gallery
//=========================================================================
//
// Horizontally-travelling card strip driven by vertical scroll: the
// track scrubs left across the section's pinned range, each card image
// runs a small counter-parallax, and the cards skew with scroll
// velocity. Clicking a card selects its project and pushes the modal.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::Cell;
use std::rc::Rc;

use log::debug;

//=== Internal Dependencies ===============================================

use crate::core::animate::{Easing, GroupId, ScrubSpec, SkewSpec, TriggerRange};
use crate::core::context::FrameContext;
use crate::core::stage::PropertyValue;
use crate::core::store::Language;
use crate::core::surface::{Surface, SurfaceTransition};

use super::{el, SiteSurface};

//=== Constants ===========================================================

/// Degrees of skew per pixel-per-frame of scroll velocity.
const SKEW_GAIN: f32 = 1.0 / 400.0;

/// Skew clamp in degrees.
const SKEW_LIMIT: f32 = 8.0;

/// Per-frame fraction of the skew gap closed while settling.
const SKEW_EASE: f32 = 0.15;

/// Image parallax travel as a fraction of card width.
const PARALLAX: f32 = 0.1;

//=== GallerySection ======================================================

pub struct GallerySection {
    selected: Rc<Cell<Option<u32>>>,
    group: Option<GroupId>,
    rendered: Option<Language>,
    card_count: usize,
}

impl GallerySection {
    pub fn new(selected: Rc<Cell<Option<u32>>>) -> Self {
        Self {
            selected,
            group: None,
            rendered: None,
            card_count: 0,
        }
    }
}

impl Surface<SiteSurface> for GallerySection {
    fn on_enter(&mut self, ctx: &mut FrameContext<'_, SiteSurface>) {
        let group = ctx.animator.group();
        let root = ctx.stage.element(el::GALLERY_ROOT);
        let track = ctx.stage.element(el::GALLERY_TRACK);
        let (viewport_w, _) = ctx.stage.viewport();

        self.card_count = ctx.content.locale(ctx.store.with(|s| s.language)).projects.len();

        // Scrub range: the section's pinned span. Travel covers however
        // much of the track hangs past the viewport.
        let travel = ctx
            .stage
            .bounds(track)
            .map(|rect| (rect.width - viewport_w).max(0.0))
            .unwrap_or(0.0);
        let range = match ctx.stage.bounds(root) {
            Some(rect) => TriggerRange::Absolute {
                start: rect.top(),
                end: rect.top() + travel.max(1.0),
            },
            None => TriggerRange::Absolute { start: 0.0, end: travel.max(1.0) },
        };
        debug!(target: "site", "Gallery travel {}px over {} cards", travel, self.card_count);

        ctx.animator.bind_scrub(group, ScrubSpec {
            element: track,
            property: "x".into(),
            range,
            from: 0.0,
            to: -travel,
            easing: Easing::Linear,
        });

        for index in 0..self.card_count {
            let card = ctx.stage.element(&el::gallery_card(index));
            let image = ctx.stage.element(&el::gallery_card_image(index));
            let card_w = ctx.stage.bounds(card).map(|r| r.width).unwrap_or(viewport_w * 0.6);

            ctx.animator.bind_skew(group, SkewSpec {
                element: card,
                property: "skew_y".into(),
                gain: SKEW_GAIN,
                limit: SKEW_LIMIT,
                ease_factor: SKEW_EASE,
            });

            ctx.animator.bind_scrub(group, ScrubSpec {
                element: image,
                property: "x".into(),
                range,
                from: -card_w * PARALLAX,
                to: card_w * PARALLAX,
                easing: Easing::Linear,
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
        let root = ctx.stage.element(el::GALLERY_ROOT);
        ctx.declare_section("gallery", root);

        let language = ctx.store.with(|s| s.language);

        //--- Copy ---------------------------------------------------------
        if self.rendered != Some(language) {
            self.rendered = Some(language);
            let title = ctx.stage.element(el::GALLERY_TITLE);
            ctx.stage.set_property(title, "text", PropertyValue::Text("SELECTED WORKS".into()));

            let projects = &ctx.content.locale(language).projects;
            for (index, project) in projects.iter().enumerate() {
                let card_title = ctx.stage.element(&el::gallery_card_title(index));
                let card_meta = ctx.stage.element(&el::gallery_card_meta(index));
                ctx.stage.set_property(card_title, "text", PropertyValue::Text(project.title.clone()));
                ctx.stage.set_property(
                    card_meta,
                    "text",
                    PropertyValue::Text(format!("{} · {}", project.category, project.year)),
                );
            }
        }

        //--- Interaction --------------------------------------------------
        // Locked scroll means an overlay (boot gate or modal) owns
        // interaction; cards neither hover nor open underneath it.
        if ctx.scroll.is_locked() {
            return;
        }
        for index in 0..self.card_count {
            let card = ctx.stage.element(&el::gallery_card(index));
            ctx.declare_hover_region(card, true);

            if ctx.clicked(card) {
                let projects = &ctx.content.locale(language).projects;
                if let Some(project) = projects.get(index) {
                    self.selected.set(Some(project.id));
                    ctx.transitions.push(SurfaceTransition::Push(SiteSurface::Modal));
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
    use crate::core::input::{HostEvent, PointerButton};
    use crate::core::stage::{Rect, Stage};

    //--- Test Helpers -----------------------------------------------------

    fn rig_with_layout() -> TestRig<SiteSurface> {
        let mut rig: TestRig<SiteSurface> = TestRig::new();
        // Two cards, 600px wide, 48px gaps → 1344px track in a 1000px
        // viewport → 344px of travel.
        rig.stage.place(el::GALLERY_ROOT, Rect::new(0.0, 1600.0, 1000.0, 1144.0));
        rig.stage.place(el::GALLERY_TITLE, Rect::new(80.0, 1660.0, 600.0, 80.0));
        rig.stage.place(el::GALLERY_TRACK, Rect::new(0.0, 1800.0, 1344.0, 560.0));
        for index in 0..2 {
            let x = 48.0 + index as f32 * 648.0;
            rig.stage.place(&el::gallery_card(index), Rect::new(x, 1800.0, 600.0, 560.0));
            rig.stage.place(&el::gallery_card_image(index), Rect::new(x, 1800.0, 600.0, 400.0));
            rig.stage.place(&el::gallery_card_title(index), Rect::new(x + 40.0, 2200.0, 520.0, 60.0));
            rig.stage.place(&el::gallery_card_meta(index), Rect::new(x + 40.0, 2270.0, 520.0, 30.0));
        }
        rig
    }

    fn selection() -> Rc<Cell<Option<u32>>> {
        Rc::new(Cell::new(None))
    }

    //--- Tests ------------------------------------------------------------

    #[test]
    fn track_scrubs_left_across_the_pinned_range() {
        let mut rig = rig_with_layout();
        let mut gallery = GallerySection::new(selection());
        gallery.on_enter(&mut rig.ctx());

        let track = rig.stage.element(el::GALLERY_TRACK);

        rig.animator.sample(1600.0, 0.0, 1.0 / 60.0, &mut rig.stage);
        assert_eq!(rig.stage.number(track, "x"), Some(0.0));

        rig.animator.sample(1600.0 + 344.0, 0.0, 1.0 / 60.0, &mut rig.stage);
        assert_eq!(rig.stage.number(track, "x"), Some(-344.0));

        // Half way, and reversible.
        rig.animator.sample(1600.0 + 172.0, 0.0, 1.0 / 60.0, &mut rig.stage);
        assert_eq!(rig.stage.number(track, "x"), Some(-172.0));
    }

    #[test]
    fn card_images_counter_parallax() {
        let mut rig = rig_with_layout();
        let mut gallery = GallerySection::new(selection());
        gallery.on_enter(&mut rig.ctx());

        let image = rig.stage.element(&el::gallery_card_image(0));

        rig.animator.sample(1600.0, 0.0, 1.0 / 60.0, &mut rig.stage);
        assert_eq!(rig.stage.number(image, "x"), Some(-60.0));

        rig.animator.sample(1944.0, 0.0, 1.0 / 60.0, &mut rig.stage);
        assert_eq!(rig.stage.number(image, "x"), Some(60.0));
    }

    #[test]
    fn cards_skew_with_velocity_and_settle() {
        let mut rig = rig_with_layout();
        let mut gallery = GallerySection::new(selection());
        gallery.on_enter(&mut rig.ctx());

        let card = rig.stage.element(&el::gallery_card(0));

        for _ in 0..30 {
            rig.animator.sample(1700.0, 2000.0, 1.0 / 60.0, &mut rig.stage);
        }
        let skewed = rig.stage.number(card, "skew_y").unwrap();
        assert!(skewed > 3.0 && skewed <= SKEW_LIMIT);

        for _ in 0..120 {
            rig.animator.sample(1700.0, 0.0, 1.0 / 60.0, &mut rig.stage);
        }
        assert_eq!(rig.stage.number(card, "skew_y"), Some(0.0));
    }

    #[test]
    fn click_selects_the_project_and_queues_the_modal() {
        let mut rig = rig_with_layout();
        let selected = selection();
        let mut gallery = GallerySection::new(selected.clone());
        gallery.on_enter(&mut rig.ctx());

        // Scroll parked at the gallery top; card 1 center in viewport
        // space is (996, 2080 - 1600 = 480).
        rig.scroll.add_delta(1600.0);
        for _ in 0..600 {
            rig.scroll.advance();
        }
        rig.pointer_frame(&[HostEvent::PointerPressed {
            button: PointerButton::Primary,
            x: 996.0,
            y: 480.0,
        }]);
        gallery.update(&mut rig.ctx());

        // Fixture index 1 carries project id 3.
        assert_eq!(selected.get(), Some(3));
        assert_eq!(rig.transitions.len(), 1);
    }

    #[test]
    fn card_copy_follows_the_language() {
        let mut rig = rig_with_layout();
        let mut gallery = GallerySection::new(selection());
        gallery.on_enter(&mut rig.ctx());
        gallery.update(&mut rig.ctx());

        let title = rig.stage.element(&el::gallery_card_title(1));
        assert_eq!(rig.stage.text(title, "text"), Some("Three fr"));

        rig.store.set_language(Language::En);
        gallery.update(&mut rig.ctx());
        assert_eq!(rig.stage.text(title, "text"), Some("Three en"));

        let meta = rig.stage.element(&el::gallery_card_meta(1));
        assert_eq!(rig.stage.text(meta, "text"), Some("App · 2024"));
    }

    #[test]
    fn exit_retires_every_gallery_binding() {
        let mut rig = rig_with_layout();
        let mut gallery = GallerySection::new(selection());
        gallery.on_enter(&mut rig.ctx());
        // 1 track scrub + 2 cards × (skew + parallax)
        assert_eq!(rig.animator.binding_count(), 5);

        gallery.on_exit(&mut rig.ctx());
        assert!(rig.animator.is_empty());
    }
}
