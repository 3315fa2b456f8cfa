//=========================================================================
// Site Composition
//=========================================================================
//
// The portfolio page itself, expressed through the engine's contracts.
//
// Stack layout (bottom → top):
//   Page            — hero, about, gallery, skills, contact, composed
//   LanguageToggle  — fixed language switch, always clickable
//   Cursor          — custom cursor follower
//   Loader          — boot overlay, removes itself once the gate drops
//   Modal           — project detail, pushed by a gallery card click
//
// The page surface owns the five sections and updates them in document
// order; the overlays ride the surface stack above it.
//
//=========================================================================

//=== Submodules ==========================================================

mod about;
mod contact;
mod cursor;
mod gallery;
mod hero;
mod language;
mod loader;
mod modal;
mod page;
mod skills;

pub use cursor::CursorSurface;
pub use language::LanguageToggleSurface;
pub use loader::LoaderSurface;
pub use modal::ProjectModalSurface;
pub use page::PageSurface;

//=== External Dependencies ===============================================

use std::cell::Cell;
use std::rc::Rc;

//=== Internal Dependencies ===============================================

use crate::core::stage::{HeadlessStage, Rect, Stage};
use crate::core::surface::SurfaceKey;
use crate::core::FrameOrchestrator;

//=== SiteSurface =========================================================

/// Every surface of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SiteSurface {
    Page,
    LanguageToggle,
    Cursor,
    Loader,
    Modal,
}

impl SurfaceKey for SiteSurface {}

//=== Element Keys ========================================================
//
// Stage element names shared between the surfaces and whatever lays the
// page out. Dynamic keys (gallery cards) are built by the helpers.
//
pub(crate) mod el {
    pub const HERO_ROOT: &str = "hero.root";
    pub const HERO_NAME: &str = "hero.name";
    pub const HERO_TITLE: &str = "hero.title";
    pub const HERO_SUBTITLE: &str = "hero.subtitle";
    pub const HERO_SCROLL_HINT: &str = "hero.scroll-hint";

    pub const ABOUT_ROOT: &str = "about.root";
    pub const ABOUT_BIO: &str = "about.bio";
    pub const ABOUT_LOCATION: &str = "about.location";
    pub const ABOUT_AVAILABILITY: &str = "about.availability";

    pub const GALLERY_ROOT: &str = "gallery.root";
    pub const GALLERY_TITLE: &str = "gallery.title";
    pub const GALLERY_TRACK: &str = "gallery.track";

    pub fn gallery_card(index: usize) -> String {
        format!("gallery.card.{}", index)
    }

    pub fn gallery_card_image(index: usize) -> String {
        format!("gallery.card.{}.image", index)
    }

    pub fn gallery_card_title(index: usize) -> String {
        format!("gallery.card.{}.title", index)
    }

    pub fn gallery_card_meta(index: usize) -> String {
        format!("gallery.card.{}.meta", index)
    }

    pub const SKILLS_ROOT: &str = "skills.root";

    pub fn skills_item(list: &str, index: usize) -> String {
        format!("skills.{}.{}", list, index)
    }

    pub const CONTACT_ROOT: &str = "contact.root";
    pub const CONTACT_LINKS: [&str; 4] = [
        "contact.email",
        "contact.github",
        "contact.linkedin",
        "contact.twitter",
    ];

    pub const LANGUAGE_TOGGLE: &str = "language.toggle";

    pub const CURSOR_DOT: &str = "cursor.dot";

    pub const LOADER_ROOT: &str = "loader.root";
    pub const LOADER_BAR: &str = "loader.bar";
    pub const LOADER_COUNTER: &str = "loader.counter";

    pub const MODAL_BACKDROP: &str = "modal.backdrop";
    pub const MODAL_PANEL: &str = "modal.panel";
    pub const MODAL_CLOSE: &str = "modal.close";
    pub const MODAL_TITLE: &str = "modal.title";
    pub const MODAL_META: &str = "modal.meta";
    pub const MODAL_DESCRIPTION: &str = "modal.description";
    pub const MODAL_TECH: &str = "modal.tech";
    pub const MODAL_CHALLENGES: &str = "modal.challenges";
    pub const MODAL_LEARNINGS: &str = "modal.learnings";
    pub const MODAL_IMPACT: &str = "modal.impact";
}

//=== Assembly ============================================================

/// Registers the whole page on an orchestrator.
///
/// The loader sits on top of the initial stack and removes itself once
/// the boot gate drops; the modal is registered but only enters when a
/// gallery card is clicked.
pub fn install<S: Stage>(orchestrator: &mut FrameOrchestrator<SiteSurface, S>) {
    let selected_project: Rc<Cell<Option<u32>>> = Rc::new(Cell::new(None));

    let surfaces = orchestrator.surfaces_mut();
    surfaces.register_default(SiteSurface::Page, PageSurface::new(selected_project.clone()));
    surfaces.register_default(SiteSurface::LanguageToggle, LanguageToggleSurface::new());
    surfaces.register_default(SiteSurface::Cursor, CursorSurface::new());
    surfaces.register_default(SiteSurface::Loader, LoaderSurface::new());
    surfaces.register(SiteSurface::Modal, ProjectModalSurface::new(selected_project));
}

//=== Demo Layout =========================================================

/// Lays the page out on a headless stage with plausible document-space
/// geometry, returning the content height.
///
/// A real renderer owns layout; this stands in for it in the demo
/// binary and the scenario tests.
pub fn demo_layout(stage: &mut HeadlessStage, project_count: usize) -> f32 {
    let (viewport_w, viewport_h) = stage.viewport();

    //--- Hero: first full screen -----------------------------------------
    stage.place(el::HERO_ROOT, Rect::new(0.0, 0.0, viewport_w, viewport_h));
    stage.place(el::HERO_NAME, Rect::new(80.0, viewport_h * 0.30, 400.0, 40.0));
    stage.place(el::HERO_TITLE, Rect::new(80.0, viewport_h * 0.40, viewport_w - 160.0, 120.0));
    stage.place(el::HERO_SUBTITLE, Rect::new(80.0, viewport_h * 0.62, 520.0, 60.0));
    stage.place(el::HERO_SCROLL_HINT, Rect::new(viewport_w / 2.0 - 60.0, viewport_h - 80.0, 120.0, 30.0));

    //--- About -----------------------------------------------------------
    let about_top = viewport_h;
    stage.place(el::ABOUT_ROOT, Rect::new(0.0, about_top, viewport_w, viewport_h));
    stage.place(el::ABOUT_BIO, Rect::new(80.0, about_top + 160.0, viewport_w / 2.0, 240.0));
    stage.place(el::ABOUT_LOCATION, Rect::new(viewport_w / 2.0 + 80.0, about_top + 160.0, 300.0, 40.0));
    stage.place(el::ABOUT_AVAILABILITY, Rect::new(viewport_w / 2.0 + 80.0, about_top + 220.0, 300.0, 40.0));

    //--- Gallery: pinned band tall enough to scrub the whole track -------
    let gallery_top = about_top + viewport_h;
    let card_w = viewport_w * 0.6;
    let gap = 48.0;
    let track_w = project_count as f32 * (card_w + gap) + gap;
    let travel = (track_w - viewport_w).max(0.0);
    let gallery_h = viewport_h + travel;
    stage.place(el::GALLERY_ROOT, Rect::new(0.0, gallery_top, viewport_w, gallery_h));
    stage.place(el::GALLERY_TITLE, Rect::new(80.0, gallery_top + 60.0, 600.0, 80.0));
    stage.place(el::GALLERY_TRACK, Rect::new(0.0, gallery_top + 200.0, track_w, viewport_h * 0.7));
    for index in 0..project_count {
        let x = gap + index as f32 * (card_w + gap);
        stage.place(&el::gallery_card(index), Rect::new(x, gallery_top + 200.0, card_w, viewport_h * 0.7));
        stage.place(&el::gallery_card_image(index), Rect::new(x, gallery_top + 200.0, card_w, viewport_h * 0.5));
        stage.place(&el::gallery_card_title(index), Rect::new(x + 40.0, gallery_top + 200.0 + viewport_h * 0.5, card_w - 80.0, 60.0));
        stage.place(&el::gallery_card_meta(index), Rect::new(x + 40.0, gallery_top + 200.0 + viewport_h * 0.5 + 70.0, card_w - 80.0, 30.0));
    }

    //--- Skills ----------------------------------------------------------
    let skills_top = gallery_top + gallery_h;
    stage.place(el::SKILLS_ROOT, Rect::new(0.0, skills_top, viewport_w, viewport_h));
    for (list, column) in [("technical", 0.0), ("design", 1.0)] {
        for index in 0..8 {
            stage.place(
                &el::skills_item(list, index),
                Rect::new(
                    80.0 + column * (viewport_w / 2.0),
                    skills_top + 160.0 + index as f32 * 56.0,
                    360.0,
                    40.0,
                ),
            );
        }
    }

    //--- Contact ---------------------------------------------------------
    let contact_top = skills_top + viewport_h;
    stage.place(el::CONTACT_ROOT, Rect::new(0.0, contact_top, viewport_w, viewport_h));
    for (index, key) in el::CONTACT_LINKS.iter().enumerate() {
        stage.place(key, Rect::new(80.0, contact_top + 200.0 + index as f32 * 80.0, 320.0, 48.0));
    }

    //--- Fixed overlays (viewport-space rectangles) ----------------------
    stage.place(el::LANGUAGE_TOGGLE, Rect::new(viewport_w - 120.0, 40.0, 60.0, 32.0));
    stage.place(el::LOADER_ROOT, Rect::new(0.0, 0.0, viewport_w, viewport_h));
    stage.place(el::LOADER_BAR, Rect::new(viewport_w / 2.0 - 128.0, viewport_h / 2.0, 256.0, 2.0));
    stage.place(el::LOADER_COUNTER, Rect::new(viewport_w / 2.0 - 30.0, viewport_h / 2.0 + 24.0, 60.0, 24.0));
    stage.place(el::CURSOR_DOT, Rect::new(0.0, 0.0, 20.0, 20.0));

    let panel = Rect::new(viewport_w / 2.0 - 400.0, 100.0, 800.0, viewport_h - 200.0);
    stage.place(el::MODAL_BACKDROP, Rect::new(0.0, 0.0, viewport_w, viewport_h));
    stage.place(el::MODAL_PANEL, panel);
    stage.place(el::MODAL_CLOSE, Rect::new(panel.right() - 100.0, panel.top() + 24.0, 76.0, 24.0));
    stage.place(el::MODAL_TITLE, Rect::new(panel.left() + 40.0, panel.top() + 80.0, 500.0, 60.0));
    stage.place(el::MODAL_META, Rect::new(panel.left() + 40.0, panel.top() + 150.0, 300.0, 24.0));
    stage.place(el::MODAL_DESCRIPTION, Rect::new(panel.left() + 40.0, panel.top() + 190.0, 700.0, 80.0));
    stage.place(el::MODAL_TECH, Rect::new(panel.left() + 40.0, panel.top() + 280.0, 700.0, 30.0));
    stage.place(el::MODAL_CHALLENGES, Rect::new(panel.left() + 40.0, panel.top() + 320.0, 700.0, 60.0));
    stage.place(el::MODAL_LEARNINGS, Rect::new(panel.left() + 40.0, panel.top() + 390.0, 700.0, 60.0));
    stage.place(el::MODAL_IMPACT, Rect::new(panel.left() + 40.0, panel.top() + 460.0, 700.0, 60.0));

    contact_top + viewport_h
}

//=========================================================================
// Scenario Tests
//=========================================================================
//
// End-to-end behavior of the assembled page, driven headless through
// the orchestrator.
//
