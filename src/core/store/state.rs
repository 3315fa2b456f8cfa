//=========================================================================
// UI State
//=========================================================================
//
// The single shared state record observed by every surface.
//
// Ownership rules:
// - Exactly one writer path per field (see module docs in `store`)
// - Readers receive snapshots or selected slices, never mutable access
//
//=========================================================================

//=== PointerNdc ==========================================================

/// Pointer position in normalized device coordinates.
///
/// Center of the viewport is `(0, 0)`; `x = +1` at the right edge,
/// `y = +1` at the top edge (Y is inverted relative to window pixels,
/// matching the GL convention the render surfaces consume).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerNdc {
    pub x: f32,
    pub y: f32,
}

impl PointerNdc {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

//=== Language ============================================================

/// Active content language.
///
/// The site boots in French; the toggle shows the other language's code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Fr,
    En,
}

impl Language {
    /// Returns the other language.
    pub fn toggled(self) -> Self {
        match self {
            Language::Fr => Language::En,
            Language::En => Language::Fr,
        }
    }

    /// Two-letter code used for content lookup and the toggle label.
    pub fn code(self) -> &'static str {
        match self {
            Language::Fr => "fr",
            Language::En => "en",
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::Fr
    }
}

//=== CursorMode ==========================================================

/// Visual mode of the custom cursor follower.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorMode {
    Default,
    Hover,
    Drag,
}

impl Default for CursorMode {
    fn default() -> Self {
        CursorMode::Default
    }
}

//=== UiState =============================================================

/// Snapshot of the shared UI state.
///
/// Field domains:
/// - `boot_progress` lives in `[0, 100]`; the store does not clamp,
///   writers do
/// - `pointer` lives in `[-1, 1]²`
/// - `active_section` is a section identifier such as `"hero"`
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    /// True until the boot sequencer finishes its reveal transition.
    pub is_booting: bool,

    /// Smoothed load progress, `0..=100`.
    pub boot_progress: f32,

    /// Normalized pointer position.
    pub pointer: PointerNdc,

    /// Active content language.
    pub language: Language,

    /// Visual mode of the cursor follower.
    pub cursor_mode: CursorMode,

    /// Identifier of the section currently spanning the viewport center.
    pub active_section: String,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            is_booting: true,
            boot_progress: 0.0,
            pointer: PointerNdc::default(),
            language: Language::default(),
            cursor_mode: CursorMode::default(),
            active_section: "hero".to_string(),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_matches_boot_conditions() {
        let state = UiState::default();
        assert!(state.is_booting);
        assert_eq!(state.boot_progress, 0.0);
        assert_eq!(state.pointer, PointerNdc::new(0.0, 0.0));
        assert_eq!(state.language, Language::Fr);
        assert_eq!(state.cursor_mode, CursorMode::Default);
        assert_eq!(state.active_section, "hero");
    }

    #[test]
    fn language_toggle_round_trips() {
        assert_eq!(Language::Fr.toggled(), Language::En);
        assert_eq!(Language::En.toggled(), Language::Fr);
        assert_eq!(Language::Fr.toggled().toggled(), Language::Fr);
    }

    #[test]
    fn language_codes() {
        assert_eq!(Language::Fr.code(), "fr");
        assert_eq!(Language::En.code(), "en");
    }
}
