//=========================================================================
// Headless Stage
//=========================================================================
//
// In-memory `Stage` implementation. Backs the unit tests and the demo
// binary: layout is declared up front with `place`, and every property
// write is recorded so behavior can be asserted without a renderer.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

//=== Internal Dependencies ===============================================

use super::{ElementId, PropertyValue, Rect, Stage};

//=== HeadlessStage =======================================================

/// Renderer-free stage with declarative layout and a property log.
pub struct HeadlessStage {
    ids: HashMap<String, ElementId>,
    keys: Vec<String>,
    bounds: HashMap<ElementId, Rect>,
    applied: HashMap<(ElementId, String), PropertyValue>,
    writes: Vec<(ElementId, String, PropertyValue)>,
    viewport: (f32, f32),
    native_scroll_suppressed: bool,
}

impl HeadlessStage {
    /// Creates an empty stage with the given viewport.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            ids: HashMap::new(),
            keys: Vec::new(),
            bounds: HashMap::new(),
            applied: HashMap::new(),
            writes: Vec::new(),
            viewport: (width, height),
            native_scroll_suppressed: false,
        }
    }

    //--- Layout -----------------------------------------------------------

    /// Declares (or moves) an element's document-space rectangle and
    /// returns its handle.
    pub fn place(&mut self, key: &str, rect: Rect) -> ElementId {
        let id = self.element(key);
        self.bounds.insert(id, rect);
        id
    }

    /// Removes an element's layout; the handle stays interned but the
    /// element reports no bounds from then on.
    pub fn unplace(&mut self, key: &str) {
        if let Some(id) = self.ids.get(key) {
            self.bounds.remove(id);
        }
    }

    //--- Inspection -------------------------------------------------------

    /// Last value written to `(element, property)`, if any.
    pub fn property(&self, element: ElementId, property: &str) -> Option<&PropertyValue> {
        self.applied.get(&(element, property.to_string()))
    }

    /// Last numeric value written to `(element, property)`.
    pub fn number(&self, element: ElementId, property: &str) -> Option<f32> {
        self.property(element, property).and_then(PropertyValue::as_number)
    }

    /// Last text value written to `(element, property)`.
    pub fn text(&self, element: ElementId, property: &str) -> Option<&str> {
        self.property(element, property).and_then(PropertyValue::as_text)
    }

    /// Key of an interned element, for diagnostics.
    pub fn key_of(&self, element: ElementId) -> Option<&str> {
        self.keys.get(element.0 as usize).map(String::as_str)
    }

    /// Drains the chronological write log.
    pub fn take_writes(&mut self) -> Vec<(ElementId, String, PropertyValue)> {
        std::mem::take(&mut self.writes)
    }

    pub fn write_count(&self) -> usize {
        self.writes.len()
    }

    pub fn native_scroll_suppressed(&self) -> bool {
        self.native_scroll_suppressed
    }
}

//--- Stage Implementation -------------------------------------------------

impl Stage for HeadlessStage {
    fn element(&mut self, key: &str) -> ElementId {
        if let Some(id) = self.ids.get(key) {
            return *id;
        }
        let id = ElementId(self.keys.len() as u32);
        self.keys.push(key.to_string());
        self.ids.insert(key.to_string(), id);
        id
    }

    fn bounds(&self, element: ElementId) -> Option<Rect> {
        self.bounds.get(&element).copied()
    }

    fn set_property(&mut self, element: ElementId, property: &str, value: PropertyValue) {
        self.applied
            .insert((element, property.to_string()), value.clone());
        self.writes.push((element, property.to_string(), value));
    }

    fn viewport(&self) -> (f32, f32) {
        self.viewport
    }

    fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = (width, height);
    }

    fn suppress_native_scroll(&mut self, suppressed: bool) {
        self.native_scroll_suppressed = suppressed;
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_handles_are_stable() {
        let mut stage = HeadlessStage::new(1280.0, 720.0);
        let a = stage.element("hero.title");
        let b = stage.element("hero.subtitle");
        assert_ne!(a, b);
        assert_eq!(stage.element("hero.title"), a);
        assert_eq!(stage.key_of(a), Some("hero.title"));
    }

    #[test]
    fn unplaced_element_has_no_bounds() {
        let mut stage = HeadlessStage::new(1280.0, 720.0);
        let el = stage.element("ghost");
        assert!(stage.bounds(el).is_none());

        stage.place("ghost", Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(stage.bounds(el).is_some());

        stage.unplace("ghost");
        assert!(stage.bounds(el).is_none());
    }

    #[test]
    fn property_writes_are_recorded_in_order() {
        let mut stage = HeadlessStage::new(1280.0, 720.0);
        let el = stage.element("bar");

        stage.set_property(el, "width", PropertyValue::Number(10.0));
        stage.set_property(el, "width", PropertyValue::Number(20.0));

        assert_eq!(stage.number(el, "width"), Some(20.0));
        let writes = stage.take_writes();
        assert_eq!(writes.len(), 2);
        assert_eq!(writes[0].2, PropertyValue::Number(10.0));
        assert_eq!(stage.write_count(), 0);
    }

    #[test]
    fn viewport_updates() {
        let mut stage = HeadlessStage::new(800.0, 600.0);
        assert_eq!(stage.viewport(), (800.0, 600.0));
        stage.set_viewport(1920.0, 1080.0);
        assert_eq!(stage.viewport(), (1920.0, 1080.0));
    }
}
