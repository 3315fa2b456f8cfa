//=========================================================================
// Page Surface
//=========================================================================
//
// Composes the five document sections in reading order. The surface
// stack sees one page; the sections inside it are plain surfaces whose
// lifecycle calls are forwarded top to bottom.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::Cell;
use std::rc::Rc;

//=== Internal Dependencies ===============================================

use crate::core::context::FrameContext;
use crate::core::surface::Surface;

use super::about::AboutSection;
use super::contact::ContactSection;
use super::gallery::GallerySection;
use super::hero::HeroSection;
use super::skills::SkillsSection;
use super::SiteSurface;

//=== PageSurface =========================================================

pub struct PageSurface {
    hero: HeroSection,
    about: AboutSection,
    gallery: GallerySection,
    skills: SkillsSection,
    contact: ContactSection,
}

impl PageSurface {
    pub fn new(selected_project: Rc<Cell<Option<u32>>>) -> Self {
        Self {
            hero: HeroSection::new(),
            about: AboutSection::new(),
            gallery: GallerySection::new(selected_project),
            skills: SkillsSection::new(),
            contact: ContactSection::new(),
        }
    }

    fn each(&mut self, mut visit: impl FnMut(&mut dyn Surface<SiteSurface>)) {
        visit(&mut self.hero);
        visit(&mut self.about);
        visit(&mut self.gallery);
        visit(&mut self.skills);
        visit(&mut self.contact);
    }
}

impl Surface<SiteSurface> for PageSurface {
    fn on_enter(&mut self, ctx: &mut FrameContext<'_, SiteSurface>) {
        self.each(|section| section.on_enter(ctx));
    }

    fn on_exit(&mut self, ctx: &mut FrameContext<'_, SiteSurface>) {
        self.each(|section| section.on_exit(ctx));
    }

    fn update(&mut self, ctx: &mut FrameContext<'_, SiteSurface>) {
        self.each(|section| section.update(ctx));
    }
}
