//=========================================================================
// Project Modal
//=========================================================================
//
// Detail overlay for the project a gallery card selected. Fades in over
// a backdrop, rises the content panel, and locks scrolling for as long
// as it is up. Closes on the close control or a backdrop click —
// clicks inside the panel stay inside the panel. Optional narrative
// blocks render only when the project carries them.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::Cell;
use std::rc::Rc;

use log::warn;

//=== Internal Dependencies ===============================================

use crate::core::animate::{Easing, Tween};
use crate::core::context::FrameContext;
use crate::core::stage::{ElementId, PropertyValue};
use crate::core::store::Language;
use crate::core::surface::{Surface, SurfaceTransition};

use super::{el, SiteSurface};

//=== ProjectModalSurface =================================================

pub struct ProjectModalSurface {
    selected: Rc<Cell<Option<u32>>>,
    rendered: Option<(Language, u32)>,
    backdrop_fade: Tween,
    panel_rise: Tween,
    panel_fade: Tween,
    panel_delay: f32,
    closing: bool,
    remove_queued: bool,
}

impl ProjectModalSurface {
    pub fn new(selected: Rc<Cell<Option<u32>>>) -> Self {
        Self {
            selected,
            rendered: None,
            backdrop_fade: Tween::new(0.0, 0.0, 0.0, Easing::Linear),
            panel_rise: Tween::new(0.0, 0.0, 0.0, Easing::Linear),
            panel_fade: Tween::new(0.0, 0.0, 0.0, Easing::Linear),
            panel_delay: 0.0,
            closing: false,
            remove_queued: false,
        }
    }

    //--- Rendering --------------------------------------------------------

    fn render(&mut self, ctx: &mut FrameContext<'_, SiteSurface>, language: Language, id: u32) {
        let Some(project) = ctx.content.project(language, id) else {
            // Content entry vanished out from under the selection; the
            // modal simply goes away instead of erroring.
            warn!(target: "site", "Project {} missing from content, closing modal", id);
            self.begin_close();
            return;
        };
        let project = project.clone();
        self.rendered = Some((language, id));

        let title = ctx.stage.element(el::MODAL_TITLE);
        let meta = ctx.stage.element(el::MODAL_META);
        let description = ctx.stage.element(el::MODAL_DESCRIPTION);
        let tech = ctx.stage.element(el::MODAL_TECH);
        ctx.stage.set_property(title, "text", PropertyValue::Text(project.title.clone()));
        ctx.stage.set_property(
            meta,
            "text",
            PropertyValue::Text(format!("{} · {}", project.category, project.year)),
        );
        ctx.stage.set_property(description, "text", PropertyValue::Text(project.description.clone()));
        ctx.stage.set_property(tech, "text", PropertyValue::Text(project.tech.join(" · ")));

        let narratives: [(&str, &Option<String>); 3] = [
            (el::MODAL_CHALLENGES, &project.challenges),
            (el::MODAL_LEARNINGS, &project.learnings),
            (el::MODAL_IMPACT, &project.impact),
        ];
        for (key, copy) in narratives {
            let element = ctx.stage.element(key);
            match copy {
                Some(text) => {
                    ctx.stage.set_property(element, "visible", PropertyValue::Number(1.0));
                    ctx.stage.set_property(element, "text", PropertyValue::Text(text.clone()));
                }
                None => ctx.stage.set_property(element, "visible", PropertyValue::Number(0.0)),
            }
        }
    }

    fn begin_close(&mut self) {
        if !self.closing {
            self.closing = true;
            self.backdrop_fade = Tween::new(self.backdrop_fade.value(), 0.0, 0.4, Easing::QuadIn);
        }
    }

    fn close_clicked(&self, ctx: &FrameContext<'_, SiteSurface>, backdrop: ElementId, panel: ElementId, close: ElementId) -> bool {
        ctx.pointer.clicks().any(|(x, y)| {
            if ctx.hit_fixed(close, x, y) {
                return true;
            }
            ctx.hit_fixed(backdrop, x, y) && !ctx.hit_fixed(panel, x, y)
        })
    }
}

impl Surface<SiteSurface> for ProjectModalSurface {
    fn on_enter(&mut self, ctx: &mut FrameContext<'_, SiteSurface>) {
        ctx.scroll.lock();
        self.closing = false;
        self.remove_queued = false;
        self.rendered = None;
        self.backdrop_fade = Tween::new(0.0, 1.0, 0.5, Easing::QuadOut);
        self.panel_rise = Tween::new(50.0, 0.0, 0.6, Easing::CubicOut);
        self.panel_fade = Tween::new(0.0, 1.0, 0.6, Easing::CubicOut);
        self.panel_delay = 0.2;

        // Render immediately so the open frame already shows the right
        // project.
        let language = ctx.store.with(|s| s.language);
        if let Some(id) = self.selected.get() {
            self.render(ctx, language, id);
        }
    }

    fn on_exit(&mut self, ctx: &mut FrameContext<'_, SiteSurface>) {
        ctx.scroll.unlock();
        self.selected.set(None);
    }

    fn update(&mut self, ctx: &mut FrameContext<'_, SiteSurface>) {
        let backdrop = ctx.stage.element(el::MODAL_BACKDROP);
        let panel = ctx.stage.element(el::MODAL_PANEL);
        let close = ctx.stage.element(el::MODAL_CLOSE);

        //--- Selection & copy ---------------------------------------------
        let language = ctx.store.with(|s| s.language);
        match self.selected.get() {
            Some(id) if self.rendered != Some((language, id)) && !self.closing => {
                self.render(ctx, language, id);
            }
            None if !self.closing => {
                // Nothing selected; close rather than show a stale panel.
                self.begin_close();
            }
            _ => {}
        }

        //--- Transitions --------------------------------------------------
        let backdrop_opacity = self.backdrop_fade.advance(ctx.dt);
        ctx.stage.set_property(backdrop, "opacity", PropertyValue::Number(backdrop_opacity));

        if self.panel_delay > 0.0 {
            self.panel_delay -= ctx.dt;
        } else if !self.closing {
            let rise = self.panel_rise.advance(ctx.dt);
            let fade = self.panel_fade.advance(ctx.dt);
            ctx.stage.set_property(panel, "y", PropertyValue::Number(rise));
            ctx.stage.set_property(panel, "opacity", PropertyValue::Number(fade));
        }

        if self.closing {
            ctx.stage.set_property(panel, "opacity", PropertyValue::Number(backdrop_opacity));
            if self.backdrop_fade.is_finished() && !self.remove_queued {
                self.remove_queued = true;
                ctx.transitions.push(SurfaceTransition::Remove(SiteSurface::Modal));
            }
            return;
        }

        //--- Interaction --------------------------------------------------
        ctx.declare_fixed_hover_region(close, false);

        if self.close_clicked(ctx, backdrop, panel, close) {
            self.begin_close();
        }
    }

    fn is_overlay(&self) -> bool {
        true
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
