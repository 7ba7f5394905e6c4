//! Translator for winit window events.

use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::keyboard::PhysicalKey;

use super::event::{InputEvent, WheelDirection};
use super::keys::{canonical_key_name, Modifiers};

/// Converts [`WindowEvent`]s into [`InputEvent`]s.
///
/// winit reports button presses without a position, so the last cursor
/// position is tracked here.
#[derive(Debug, Default)]
pub struct WinitFrontend {
    cursor: (f32, f32),
}

impl WinitFrontend {
    /// Create a translator with the cursor at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate one window event. Events the dispatcher has no use for
    /// (resize, focus, redraw) yield `None`.
    pub fn translate(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = (position.x as f32, position.y as f32);
                Some(InputEvent::CursorMoved {
                    x: self.cursor.0,
                    y: self.cursor.1,
                })
            }
            WindowEvent::MouseInput { button, state, .. } => {
                Some(InputEvent::MouseButton {
                    button: (*button).into(),
                    pressed: *state == ElementState::Pressed,
                    x: self.cursor.0,
                    y: self.cursor.1,
                })
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let scroll = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32,
                };
                WheelDirection::from_delta(scroll).map(|direction| {
                    InputEvent::Wheel {
                        direction,
                        x: self.cursor.0,
                        y: self.cursor.1,
                    }
                })
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                let state = modifiers.state();
                Some(InputEvent::ModifiersChanged(Modifiers {
                    ctrl: state.control_key(),
                    alt: state.alt_key(),
                    shift: state.shift_key(),
                }))
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.repeat {
                    return None;
                }
                let PhysicalKey::Code(code) = event.physical_key else {
                    log::warn!("unidentified key {:?}", event.physical_key);
                    return None;
                };
                let Some(key) = canonical_key_name(&format!("{code:?}")) else {
                    log::warn!("unknown key code {code:?}");
                    return None;
                };
                Some(if event.state == ElementState::Pressed {
                    InputEvent::KeyPressed { key }
                } else {
                    InputEvent::KeyReleased { key }
                })
            }
            _ => None,
        }
    }
}
