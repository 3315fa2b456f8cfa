//=========================================================================
// Platform Subsystem
//
// Bridges Winit (OS-level events) with the frame orchestrator.
//
// Architecture:
// ```text
//  ┌────────────────────────────────────────────┐
//  │  Winit Event Loop (main thread)            │
//  │   ↓                                        │
//  │  EventMapper                               │
//  │   ├─ Winit event → HostEvent               │
//  │   └─ tracks cursor / touch anchor          │
//  │   ↓                                        │
//  │  Channel (HostEvent) ──┐                   │
//  │                        ↓                   │
//  │  RedrawRequested → drain → tick(dt, batch) │
//  └────────────────────────────────────────────┘
//
//  Frame Boundary: RedrawRequested
//    → All buffered input drained atomically
//    → Orchestrator ticks exactly once per frame
//    → Next redraw requested immediately (continuous animation)
// ```
//
// Key Design Decisions:
// - **Single thread**: the engine's concurrency model is cooperative
//   frame scheduling; the channel only decouples OS callback context
//   from the tick, and also gives embedders (asset loaders) a safe way
//   to inject events between frames
// - **RedrawRequested = frame boundary**: all input buffered since the
//   previous frame is applied atomically, so event order within a
//   frame is deterministic
// - **Window draws nothing**: rendering happens behind the Stage
//   boundary; the window exists for input, pacing and lifecycle
//
//=========================================================================

//=== Submodules ==========================================================

mod event_mapper;

//=== External Crates =====================================================

use std::time::Instant;

use crossbeam_channel::{Receiver, Sender};
use log::{debug, error, info, trace, warn};
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes},
};

//=== Internal Imports ====================================================

use crate::core::input::HostEvent;
use crate::core::stage::Stage;
use crate::core::surface::SurfaceKey;
use crate::core::{FrameOrchestrator, TickControl};
use event_mapper::EventMapper;

//=== PlatformError =======================================================

/// Platform initialization and runtime errors.
///
/// These are typically fatal - if the event loop can't be created, the
/// engine cannot run.
#[derive(Debug)]
pub enum PlatformError {
    /// Failed to create event loop (rare, indicates OS-level issue).
    EventLoopCreation(winit::error::EventLoopError),

    /// Event loop execution error (rare, indicates corruption).
    EventLoopExecution(winit::error::EventLoopError),
}

//--- Trait Implementations -----------------------------------------------

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventLoopCreation(e) => write!(f, "Event loop creation failed: {}", e),
            Self::EventLoopExecution(e) => write!(f, "Event loop error: {}", e),
        }
    }
}

impl std::error::Error for PlatformError {}

//=== Platform ============================================================

/// Window manager and frame driver.
///
/// Runs on the main thread (Winit requirement on macOS/iOS). Input is
/// mapped to [`HostEvent`]s and buffered in the channel; every
/// `RedrawRequested` the buffer is drained and the orchestrator ticks
/// once.
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(...)` - takes the orchestrator
/// 2. **Execution**: `platform.run()` - starts event loop
/// 3. **Event processing**: Winit calls `ApplicationHandler` methods
/// 4. **Shutdown**: close request → final tick returns Exit → loop ends
pub(crate) struct Platform<K: SurfaceKey, S: Stage> {
    /// OS window handle (None until `resumed()` called).
    window: Option<Window>,

    title: String,

    /// Producing side of the host-event channel; embedders hold clones.
    sender: Sender<HostEvent>,

    /// Draining side, consumed at every frame boundary.
    receiver: Receiver<HostEvent>,

    orchestrator: FrameOrchestrator<K, S>,

    /// Converts Winit events to engine HostEvents.
    mapper: EventMapper,

    /// Previous frame timestamp for dt computation.
    last_frame: Option<Instant>,

    /// Reused drain buffer.
    batch: Vec<HostEvent>,
}

impl<K: SurfaceKey, S: Stage> Platform<K, S> {
    //--- Construction -----------------------------------------------------

    /// Creates a new platform instance. Does not create the window yet -
    /// that happens lazily in `resumed()`.
    pub fn new(
        title: String,
        sender: Sender<HostEvent>,
        receiver: Receiver<HostEvent>,
        orchestrator: FrameOrchestrator<K, S>,
    ) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            title,
            sender,
            receiver,
            orchestrator,
            mapper: EventMapper::new(),
            last_frame: None,
            batch: Vec::new(),
        }
    }

    //--- Execution --------------------------------------------------------

    /// Starts the event loop, blocking until the application exits.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if event loop creation or execution
    /// fails. Once running, input errors are handled internally.
    pub fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;

        event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)
    }

    //--- Internal Helpers -------------------------------------------------

    fn enqueue(&self, event: HostEvent) {
        if self.sender.send(event).is_err() {
            warn!(target: "platform", "Host-event channel disconnected, dropping event");
        }
    }

    /// Drains buffered input and advances the orchestrator one frame.
    fn drive_frame(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        let dt = match self.last_frame.replace(now) {
            Some(previous) => (now - previous).as_secs_f32().min(0.1),
            None => 1.0 / 60.0,
        };

        self.batch.clear();
        while let Ok(event) = self.receiver.try_recv() {
            self.batch.push(event);
        }
        trace!(target: "platform", "Frame dt={:.4}s, {} events", dt, self.batch.len());

        if self.orchestrator.tick(dt, &self.batch) == TickControl::Exit {
            info!(target: "platform", "Orchestrator requested exit");
            event_loop.exit();
        }
    }
}

//=== Winit Integration ===================================================

impl<K: SurfaceKey, S: Stage> ApplicationHandler for Platform<K, S> {
    /// Called when app becomes active (startup or mobile resume).
    ///
    /// Creates the window if it doesn't exist yet and seeds the engine
    /// with the initial viewport size.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(self.title.clone())
            .with_inner_size(LogicalSize::new(1280, 720));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                let size = window.inner_size();
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    size.width,
                    size.height,
                    window.scale_factor()
                );
                self.enqueue(HostEvent::Resized {
                    width: size.width as f32,
                    height: size.height as f32,
                });
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                event_loop.exit();
            }
        }
    }

    /// Handles per-window events.
    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                self.enqueue(HostEvent::CloseRequested);
                // One final frame so surfaces observe the close cleanly.
                self.drive_frame(event_loop);
                event_loop.exit();
            }

            WindowEvent::RedrawRequested => {
                self.drive_frame(event_loop);

                // Continuous animation: always request the next frame.
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {
                if let Some(host_event) = self.mapper.map(&event) {
                    self.enqueue(host_event);
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
    use crate::core::boot::BootConfig;
    use crate::core::content::fixtures::sample_content;
    use crate::core::scroll::DEFAULT_LERP_FACTOR;
    use crate::core::stage::HeadlessStage;
    use crossbeam_channel::unbounded;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestKey {
        Page,
    }
    impl SurfaceKey for TestKey {}

    fn platform() -> (Platform<TestKey, HeadlessStage>, crossbeam_channel::Receiver<HostEvent>) {
        let orchestrator = FrameOrchestrator::new(
            sample_content(),
            HeadlessStage::new(1000.0, 800.0),
            BootConfig::default(),
            DEFAULT_LERP_FACTOR,
        );
        let (tx, rx) = unbounded();
        let probe = rx.clone();
        (Platform::new("Test".into(), tx, rx, orchestrator), probe)
    }

    #[test]
    fn window_is_created_lazily() {
        let (platform, _probe) = platform();
        assert!(platform.window.is_none(), "window should be created lazily");
    }

    #[test]
    fn enqueue_buffers_until_the_frame_boundary() {
        let (platform, probe) = platform();
        platform.enqueue(HostEvent::AssetProgress(40.0));
        platform.enqueue(HostEvent::Wheel { delta: 12.0 });
        assert_eq!(probe.len(), 2);
    }

    #[test]
    fn enqueue_survives_a_disconnected_channel() {
        let (platform, probe) = platform();
        drop(probe);
        // The platform's own receiver clone keeps the channel alive; a
        // send never panics either way.
        platform.enqueue(HostEvent::CloseRequested);
    }
}
