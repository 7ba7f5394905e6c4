//! Translator for DOM events delivered to a canvas element.
//!
//! DOM events carry their own modifier flags, so each translation may
//! emit a [`InputEvent::ModifiersChanged`] ahead of the event itself.

use web_sys::{KeyboardEvent, MouseEvent, WheelEvent};

use super::event::{InputEvent, MouseButton, WheelDirection};
use super::keys::{canonical_key_name, Modifiers};

/// Converts DOM mouse, wheel and keyboard events into [`InputEvent`]s.
#[derive(Debug, Default)]
pub struct WebFrontend {
    modifiers: Modifiers,
}

impl WebFrontend {
    /// Create a translator with no modifiers held.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `mousedown` / `mouseup`.
    pub fn mouse_button(
        &mut self,
        event: &MouseEvent,
        pressed: bool,
    ) -> impl Iterator<Item = InputEvent> {
        let changed = self.sync_mouse_modifiers(event);
        let button = match event.button() {
            0 => Some(MouseButton::Left),
            1 => Some(MouseButton::Middle),
            2 => Some(MouseButton::Right),
            _ => None,
        };
        let translated = button.map(|button| InputEvent::MouseButton {
            button,
            pressed,
            x: event.offset_x() as f32,
            y: event.offset_y() as f32,
        });
        changed.into_iter().chain(translated)
    }

    /// `mousemove`.
    pub fn mouse_move(
        &mut self,
        event: &MouseEvent,
    ) -> impl Iterator<Item = InputEvent> {
        let changed = self.sync_mouse_modifiers(event);
        let moved = InputEvent::CursorMoved {
            x: event.offset_x() as f32,
            y: event.offset_y() as f32,
        };
        changed.into_iter().chain(Some(moved))
    }

    /// `wheel`. DOM `deltaY` is negative when scrolling away from the user.
    pub fn wheel(
        &mut self,
        event: &WheelEvent,
    ) -> impl Iterator<Item = InputEvent> {
        let changed = self.sync_mouse_modifiers(event);
        let notch = WheelDirection::from_delta(-event.delta_y() as f32).map(
            |direction| InputEvent::Wheel {
                direction,
                x: event.offset_x() as f32,
                y: event.offset_y() as f32,
            },
        );
        changed.into_iter().chain(notch)
    }

    /// `keydown` / `keyup`, keyed on the physical `code`.
    pub fn key(
        &mut self,
        event: &KeyboardEvent,
        pressed: bool,
    ) -> impl Iterator<Item = InputEvent> {
        let changed = self.sync(Modifiers {
            ctrl: event.ctrl_key(),
            alt: event.alt_key(),
            shift: event.shift_key(),
        });
        let code = event.code();
        let translated = if event.repeat() {
            None
        } else if let Some(key) = canonical_key_name(&code) {
            Some(if pressed {
                InputEvent::KeyPressed { key }
            } else {
                InputEvent::KeyReleased { key }
            })
        } else {
            log::warn!("unknown key code {code}");
            None
        };
        changed.into_iter().chain(translated)
    }

    fn sync_mouse_modifiers(&mut self, event: &MouseEvent) -> Option<InputEvent> {
        self.sync(Modifiers {
            ctrl: event.ctrl_key(),
            alt: event.alt_key(),
            shift: event.shift_key(),
        })
    }

    fn sync(&mut self, mods: Modifiers) -> Option<InputEvent> {
        if mods == self.modifiers {
            return None;
        }
        self.modifiers = mods;
        Some(InputEvent::ModifiersChanged(mods))
    }
}
