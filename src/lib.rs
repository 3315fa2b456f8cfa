//=========================================================================
// Velour Engine — Library Root
//
// This crate defines the public API surface of the Velour engine.
//
// Responsibilities:
// - Expose the core motion systems (store, scroll, animator, boot,
//   surfaces, stage boundary, content model)
// - Keep internal modules (like `platform`) hidden from end users
// - Provide clean separation between the high-level engine facade
//   and lower-level subsystems (input, scroll smoothing, OS
//   integration)
//
// Typical usage:
// ```no_run
// use velour_engine::prelude::*;
//
// # #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
// # enum Section { Hero }
// # impl SurfaceKey for Section {}
// fn main() {
//     let content = SiteContent::from_path("assets/content.json").unwrap();
//     let stage = HeadlessStage::new(1280.0, 720.0);
//     EngineBuilder::<Section, _>::new(content, stage).build().run();
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains all internal engine systems and logic (state store,
// scroll engine, animator, boot gate, surfaces). It is exposed publicly
// for engine-level extensibility, but normal application code will
// mostly use the top-level `Engine` facade and the prelude.
//
// `site` is the portfolio page built on those systems: every section
// and overlay of the single-page site, expressed as surfaces.
//
pub mod core;
pub mod prelude;
pub mod site;

//--- Internal Modules ----------------------------------------------------
//
// `platform` contains OS-specific logic (window, Winit integration,
// event loop) and is kept private, as it is not part of the public API
// surface.
//
// `engine` defines the main engine entry point and initialization
// logic.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------
//
// Re-exports the `Engine` types as the main entry point for
// applications. This allows users to simply `use velour_engine::Engine;`
// without having to know the internal module structure.
//
pub use engine::{Engine, EngineBuilder};
