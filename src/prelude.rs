//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use velour_engine::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine core
pub use crate::engine::{Engine, EngineBuilder};
pub use crate::core::{FrameOrchestrator, TickControl};

// State store
pub use crate::core::store::{CursorMode, Language, PointerNdc, Subscription, UiState, UiStore};

// Scroll engine
pub use crate::core::scroll::{ScrollEngine, ScrollListener};

// Animation
pub use crate::core::animate::{
    Animator, Easing, EdgeAnchor, GroupId, RevealSpec, ScrubSpec, SkewSpec, TriggerRange, Tween,
};

// Boot gate
pub use crate::core::boot::{BootConfig, BootPhase};

// Surfaces
pub use crate::core::context::{ExternalAction, FrameContext};
pub use crate::core::surface::{Surface, SurfaceKey, SurfaceManager, SurfaceTransition};

// Stage boundary
pub use crate::core::stage::{ElementId, HeadlessStage, PropertyValue, Rect, Stage};

// Content
pub use crate::core::content::{ContentError, Project, SiteContent};

// Input
pub use crate::core::input::{HostEvent, PointerButton};

// Site composition
pub use crate::site::SiteSurface;
