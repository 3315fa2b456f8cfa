//=========================================================================
// Velour Engine
//
// Main entry point and coordinator for the engine.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [Runtime]
//         │                          │
//         ├─ with_lerp_factor()      └─ runs the platform event loop,
//         ├─ with_boot_config()         ticking the orchestrator every
//         └─ with_window_title()        frame until the window closes
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{unbounded, Sender};
use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::core::boot::BootConfig;
use crate::core::content::SiteContent;
use crate::core::input::HostEvent;
use crate::core::scroll::DEFAULT_LERP_FACTOR;
use crate::core::stage::Stage;
use crate::core::surface::SurfaceKey;
use crate::core::FrameOrchestrator;
use crate::platform::Platform;

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **Lerp factor**: 0.08 (heavy, deliberate scroll feel)
/// - **Boot config**: [`BootConfig::default`]
/// - **Window title**: `"Velour"`
///
/// # Examples
///
/// ```no_run
/// use velour_engine::prelude::*;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum Section { Hero }
/// impl SurfaceKey for Section {}
///
/// let content = SiteContent::from_path("assets/content.json").unwrap();
/// let stage = HeadlessStage::new(1280.0, 720.0);
///
/// EngineBuilder::<Section, _>::new(content, stage)
///     .with_lerp_factor(0.06)
///     .build()
///     .run();
/// ```
pub struct EngineBuilder<K: SurfaceKey, S: Stage> {
    content: SiteContent,
    stage: S,
    lerp_factor: f32,
    boot_config: BootConfig,
    window_title: String,
    _phantom: std::marker::PhantomData<K>,
}

impl<K: SurfaceKey, S: Stage> EngineBuilder<K, S> {
    /// Creates a builder over the loaded content document and the stage
    /// the renderer exposes.
    pub fn new(content: SiteContent, stage: S) -> Self {
        Self {
            content,
            stage,
            lerp_factor: DEFAULT_LERP_FACTOR,
            boot_config: BootConfig::default(),
            window_title: "Velour".to_string(),
            _phantom: std::marker::PhantomData,
        }
    }

    /// Sets the scroll smoothing constant. Lower values feel heavier.
    ///
    /// # Panics
    ///
    /// Panics if `lerp_factor` is outside `(0, 1]`.
    pub fn with_lerp_factor(mut self, lerp_factor: f32) -> Self {
        assert!(
            lerp_factor > 0.0 && lerp_factor <= 1.0,
            "lerp factor must be in (0, 1], got {}",
            lerp_factor
        );
        self.lerp_factor = lerp_factor;
        self
    }

    /// Overrides the boot gate timings.
    pub fn with_boot_config(mut self, boot_config: BootConfig) -> Self {
        self.boot_config = boot_config;
        self
    }

    /// Sets the platform window title.
    pub fn with_window_title(mut self, title: impl Into<String>) -> Self {
        self.window_title = title.into();
        self
    }

    /// Builds the engine instance.
    pub fn build(self) -> Engine<K, S> {
        info!(
            "Building engine (lerp: {}, boot fallback: {}s)",
            self.lerp_factor, self.boot_config.fallback_after
        );

        let (sender, receiver) = unbounded();

        Engine {
            orchestrator: FrameOrchestrator::new(
                self.content,
                self.stage,
                self.boot_config,
                self.lerp_factor,
            ),
            sender,
            receiver,
            window_title: self.window_title,
        }
    }
}

//=== Engine ==============================================================

/// Velour engine runtime.
///
/// Coordinates the platform event loop with the frame orchestrator.
/// Create via [`EngineBuilder`], wire surfaces in [`Engine::init`], then
/// [`Engine::run`].
///
/// # Architecture
///
/// ```text
/// Engine (Main Thread)
///   ├─► Platform (Winit Event Loop)
///   │     └─► maps OS input → HostEvent → channel
///   │
///   └─► FrameOrchestrator (ticked per redraw)
///         └─► Store, Scroll, Animator, Boot, Surfaces
/// ```
///
/// Single-threaded by design: the channel only decouples the OS
/// callback context from the frame tick, both ends live on the main
/// thread.
pub struct Engine<K: SurfaceKey, S: Stage> {
    orchestrator: FrameOrchestrator<K, S>,
    sender: Sender<HostEvent>,
    receiver: crossbeam_channel::Receiver<HostEvent>,
    window_title: String,
}

impl<K: SurfaceKey, S: Stage> Engine<K, S> {
    //--- Initialization ---------------------------------------------------

    /// Wires the page before execution: register surfaces, declare the
    /// content height, lay out the stage.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use velour_engine::prelude::*;
    /// # #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    /// # enum Section { Hero }
    /// # impl SurfaceKey for Section {}
    /// # struct HeroSurface;
    /// # impl Surface<Section> for HeroSurface {
    /// #     fn update(&mut self, _ctx: &mut FrameContext<'_, Section>) {}
    /// # }
    /// # let content = SiteContent::from_path("assets/content.json").unwrap();
    /// # let stage = HeadlessStage::new(1280.0, 720.0);
    /// EngineBuilder::<Section, _>::new(content, stage)
    ///     .build()
    ///     .init(|orchestrator| {
    ///         orchestrator.set_content_height(6000.0);
    ///         orchestrator.surfaces_mut().register_default(Section::Hero, HeroSurface);
    ///     })
    ///     .run();
    /// ```
    pub fn init<F>(mut self, init_fn: F) -> Self
    where
        F: FnOnce(&mut FrameOrchestrator<K, S>),
    {
        info!("Initializing engine surfaces");
        init_fn(&mut self.orchestrator);
        self
    }

    /// Sender for injecting host events from outside the platform layer
    /// (an asset loader reporting [`HostEvent::AssetProgress`], for
    /// instance). Clone freely; delivery happens at the next frame.
    pub fn event_sender(&self) -> Sender<HostEvent> {
        self.sender.clone()
    }

    /// Direct access to the orchestrator, for headless hosts that drive
    /// frames themselves instead of running the platform loop.
    pub fn orchestrator_mut(&mut self) -> &mut FrameOrchestrator<K, S> {
        &mut self.orchestrator
    }

    //--- Execution --------------------------------------------------------

    /// Starts the platform event loop and blocks until the window
    /// closes.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the platform with the shared host-event channel
    /// 2. Runs the winit event loop; every redraw drains the channel
    ///    and ticks the orchestrator once
    /// 3. On close request (or a tick returning exit) the loop ends and
    ///    `run` returns
    ///
    /// Errors from the platform layer are logged; the engine shuts down
    /// as cleanly as it can either way.
    pub fn run(self) {
        info!("Starting engine runtime");

        let platform = Platform::new(
            self.window_title,
            self.sender,
            self.receiver,
            self.orchestrator,
        );

        if let Err(e) = platform.run() {
            error!("Platform error: {}", e);
        }

        info!("Engine shutdown complete");
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::content::fixtures::sample_content;
    use crate::core::stage::HeadlessStage;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestKey {
        Page,
    }
    impl SurfaceKey for TestKey {}

    fn builder() -> EngineBuilder<TestKey, HeadlessStage> {
        EngineBuilder::new(sample_content(), HeadlessStage::new(1000.0, 800.0))
    }

    //=====================================================================
    // EngineBuilder Tests
    //=====================================================================

    #[test]
    fn builder_defaults() {
        let built = builder();
        assert_eq!(built.lerp_factor, DEFAULT_LERP_FACTOR);
        assert_eq!(built.boot_config, BootConfig::default());
        assert_eq!(built.window_title, "Velour");
    }

    #[test]
    fn builder_with_lerp_factor() {
        let built = builder().with_lerp_factor(0.2);
        assert_eq!(built.lerp_factor, 0.2);
    }

    #[test]
    #[should_panic(expected = "lerp factor must be in (0, 1]")]
    fn builder_with_lerp_factor_panics_on_zero() {
        builder().with_lerp_factor(0.0);
    }

    #[test]
    #[should_panic(expected = "lerp factor must be in (0, 1]")]
    fn builder_with_lerp_factor_panics_above_one() {
        builder().with_lerp_factor(1.5);
    }

    #[test]
    fn builder_with_window_title() {
        let built = builder().with_window_title("Portfolio");
        assert_eq!(built.window_title, "Portfolio");
    }

    #[test]
    fn builder_build_creates_engine() {
        let _engine = builder().build();
    }

    #[test]
    fn init_runs_against_the_orchestrator() {
        let engine = builder().build().init(|orch| {
            orch.set_content_height(4000.0);
        });
        // 4000 content − 800 viewport
        assert_eq!(engine.orchestrator.scroll().max_scroll(), 3200.0);
    }

    #[test]
    fn injected_events_arrive_through_the_channel() {
        let engine = builder().build();
        let sender = engine.event_sender();
        sender
            .send(crate::core::input::HostEvent::AssetProgress(50.0))
            .unwrap();
        assert_eq!(engine.receiver.len(), 1);
    }
}
