//=========================================================================
// Platform Event Mapper
//
// Converts Winit input events to engine-level `HostEvent` types.
// Provides a clean separation between OS-specific input and the
// engine's internal event representation.
//
// Responsibilities:
// - Translate pointer, wheel and touch events
// - Track the cursor position so button events carry coordinates
// - Fold touch drags into the same scroll-delta stream as the wheel
// - Ignore unsupported or irrelevant Winit events
//
//=========================================================================

use winit::event::{ElementState, MouseButton as WinitMouseButton, MouseScrollDelta, TouchPhase, WindowEvent};

use crate::core::input::{HostEvent, PointerButton};

//=== Constants ===========================================================

/// Pixels of scroll per wheel "line" on line-based mice.
const WHEEL_LINE_PX: f32 = 60.0;

//=== Button Conversion ===================================================
//
// Maps Winit mouse button identifiers to engine pointer buttons.
//

impl From<WinitMouseButton> for PointerButton {
    fn from(button: WinitMouseButton) -> Self {
        match button {
            WinitMouseButton::Left => PointerButton::Primary,
            WinitMouseButton::Right => PointerButton::Secondary,
            WinitMouseButton::Middle => PointerButton::Auxiliary,
            _ => PointerButton::Other,
        }
    }
}

//=== EventMapper =========================================================

/// Stateful Winit → `HostEvent` translator.
///
/// Keeps the last cursor position (button events do not carry one) and
/// the active touch point (drag deltas are relative).
pub(crate) struct EventMapper {
    cursor: (f32, f32),
    touch: Option<(u64, f32)>,
}

impl EventMapper {
    pub fn new() -> Self {
        Self {
            cursor: (0.0, 0.0),
            touch: None,
        }
    }

    /// Translates one window event; `None` for events the engine does
    /// not consume.
    pub fn map(&mut self, event: &WindowEvent) -> Option<HostEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = (position.x as f32, position.y as f32);
                Some(HostEvent::PointerMoved {
                    x: self.cursor.0,
                    y: self.cursor.1,
                })
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let button = PointerButton::from(*button);
                let (x, y) = self.cursor;
                Some(match state {
                    ElementState::Pressed => HostEvent::PointerPressed { button, x, y },
                    ElementState::Released => HostEvent::PointerReleased { button, x, y },
                })
            }

            WindowEvent::MouseWheel { delta, .. } => Some(HostEvent::Wheel {
                delta: wheel_to_delta(*delta),
            }),

            WindowEvent::Touch(touch) => self.on_touch(
                touch.id,
                touch.phase,
                touch.location.y as f32,
            ),

            WindowEvent::Resized(size) => Some(HostEvent::Resized {
                width: size.width as f32,
                height: size.height as f32,
            }),

            WindowEvent::CloseRequested => Some(HostEvent::CloseRequested),

            _ => None,
        }
    }

    //--- Internal Helpers -------------------------------------------------

    // Dragging the finger up (y shrinking) scrolls the page down
    // (positive delta), matching native touch scrolling.
    fn on_touch(&mut self, id: u64, phase: TouchPhase, y: f32) -> Option<HostEvent> {
        match phase {
            TouchPhase::Started => {
                self.touch = Some((id, y));
                None
            }
            TouchPhase::Moved => match self.touch {
                Some((active, last)) if active == id => {
                    self.touch = Some((id, y));
                    Some(HostEvent::TouchDrag { delta: last - y })
                }
                _ => None,
            },
            TouchPhase::Ended | TouchPhase::Cancelled => {
                if matches!(self.touch, Some((active, _)) if active == id) {
                    self.touch = None;
                }
                None
            }
        }
    }
}

//=== Wheel Conversion ====================================================
//
// Winit reports positive y for scrolling up; the scroll engine treats
// positive deltas as scrolling down the page.
//
fn wheel_to_delta(delta: MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => -y * WHEEL_LINE_PX,
        MouseScrollDelta::PixelDelta(position) => -position.y as f32,
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalPosition;

    #[test]
    fn wheel_lines_scale_and_invert() {
        let delta = wheel_to_delta(MouseScrollDelta::LineDelta(0.0, -2.0));
        assert_eq!(delta, 120.0, "two lines down scroll the page down");

        let delta = wheel_to_delta(MouseScrollDelta::LineDelta(0.0, 1.0));
        assert_eq!(delta, -60.0);
    }

    #[test]
    fn wheel_pixels_pass_through_inverted() {
        let delta = wheel_to_delta(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, -35.0)));
        assert_eq!(delta, 35.0);
    }

    #[test]
    fn button_mapping() {
        assert_eq!(PointerButton::from(WinitMouseButton::Left), PointerButton::Primary);
        assert_eq!(PointerButton::from(WinitMouseButton::Right), PointerButton::Secondary);
        assert_eq!(PointerButton::from(WinitMouseButton::Middle), PointerButton::Auxiliary);
        assert_eq!(PointerButton::from(WinitMouseButton::Back), PointerButton::Other);
    }

    #[test]
    fn touch_drag_produces_deltas_relative_to_last_sample() {
        let mut mapper = EventMapper::new();

        assert_eq!(mapper.on_touch(7, TouchPhase::Started, 500.0), None);
        assert_eq!(
            mapper.on_touch(7, TouchPhase::Moved, 460.0),
            Some(HostEvent::TouchDrag { delta: 40.0 })
        );
        assert_eq!(
            mapper.on_touch(7, TouchPhase::Moved, 480.0),
            Some(HostEvent::TouchDrag { delta: -20.0 })
        );
        assert_eq!(mapper.on_touch(7, TouchPhase::Ended, 480.0), None);
    }

    #[test]
    fn secondary_finger_is_ignored() {
        let mut mapper = EventMapper::new();
        mapper.on_touch(1, TouchPhase::Started, 500.0);

        assert_eq!(mapper.on_touch(2, TouchPhase::Moved, 100.0), None);
        // Ending the stray finger does not drop the active one.
        mapper.on_touch(2, TouchPhase::Ended, 100.0);
        assert_eq!(
            mapper.on_touch(1, TouchPhase::Moved, 490.0),
            Some(HostEvent::TouchDrag { delta: 10.0 })
        );
    }
}
