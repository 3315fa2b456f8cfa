//=========================================================================
// Host Events
//=========================================================================
//
// Normalized input delivered by the platform layer into the frame
// pipeline. The platform buffers these during OS callbacks and the
// orchestrator drains them at the top of each frame, so every consumer
// sees the same event batch at the same pipeline point.
//
//=========================================================================

//=== PointerButton =======================================================

/// Pointer device button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary,
    Secondary,
    Auxiliary,
    Other,
}

//=== HostEvent ===========================================================

/// Input and lifecycle events crossing the platform → core boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    /// Pointer moved to the given window-pixel position.
    PointerMoved { x: f32, y: f32 },

    /// Pointer button went down at the given window-pixel position.
    PointerPressed { button: PointerButton, x: f32, y: f32 },

    /// Pointer button came up at the given window-pixel position.
    PointerReleased { button: PointerButton, x: f32, y: f32 },

    /// Wheel scroll delta in pixels (positive scrolls the page down).
    Wheel { delta: f32 },

    /// Touch drag delta folded into the same scroll accumulator as wheel
    /// input; no separate momentum model.
    TouchDrag { delta: f32 },

    /// Viewport resized to the given pixel dimensions.
    Resized { width: f32, height: f32 },

    /// Measured asset-load progress report, `0..=100`.
    AssetProgress(f32),

    /// Window close requested; the engine shuts down cleanly.
    CloseRequested,
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_are_cloneable_and_comparable() {
        let event = HostEvent::PointerPressed {
            button: PointerButton::Primary,
            x: 10.0,
            y: 20.0,
        };
        assert_eq!(event.clone(), event);
    }
}
