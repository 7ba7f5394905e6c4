use std::path::Path;

use serde::{Deserialize, Serialize};

use super::keys::Modifiers;
use crate::error::LookoutError;

/// Platform-agnostic input events.
///
/// Front-end adapters ([`GlutFrontend`](super::GlutFrontend) and the
/// feature-gated winit / web translators) produce these; a
/// [`GestureDispatcher`](crate::gesture::GestureDispatcher) consumes them.
///
/// # Example
///
/// ```ignore
/// let cmd = dispatcher.handle_event(
///     &InputEvent::CursorMoved { x: 100.0, y: 200.0 },
///     &camera,
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    /// A key went down. `key` is a canonical lowercase name without
    /// modifier prefix (`"home"`, `"a"`, `"f5"`, `"ctrl"`).
    KeyPressed {
        /// Canonical key name.
        key: String,
    },
    /// A key went up.
    KeyReleased {
        /// Canonical key name.
        key: String,
    },
    /// Mouse button pressed or released at a cursor position.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
        /// Horizontal position in pixels.
        x: f32,
        /// Vertical position in pixels (grows downward).
        y: f32,
    },
    /// Cursor moved to absolute viewport position.
    CursorMoved {
        /// Horizontal position in pixels.
        x: f32,
        /// Vertical position in pixels (grows downward).
        y: f32,
    },
    /// One wheel notch. Wheels only ever press.
    Wheel {
        /// Notch direction.
        direction: WheelDirection,
        /// Horizontal position in pixels.
        x: f32,
        /// Vertical position in pixels.
        y: f32,
    },
    /// Modifier key state changed.
    ModifiersChanged(Modifiers),
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Middle mouse button (wheel click).
    Middle,
    /// Secondary (right) mouse button.
    Right,
}

impl MouseButton {
    /// Single-letter token used in event symbols.
    #[must_use]
    pub const fn token(self) -> char {
        match self {
            Self::Left => 'L',
            Self::Middle => 'M',
            Self::Right => 'R',
        }
    }
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Left,
        }
    }
}

/// Direction of a single wheel notch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WheelDirection {
    /// Away from the user.
    Up,
    /// Toward the user.
    Down,
}

impl WheelDirection {
    /// Token used in event symbols.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Up => "wheelup",
            Self::Down => "wheeldown",
        }
    }

    /// Direction for a signed scroll amount (positive = up), or `None` for
    /// zero.
    #[must_use]
    pub fn from_delta(delta: f32) -> Option<Self> {
        if delta > 0.0 {
            Some(Self::Up)
        } else if delta < 0.0 {
            Some(Self::Down)
        } else {
            None
        }
    }
}

/// Parse a replay script: a JSON array of events.
pub fn parse_script(json: &str) -> Result<Vec<InputEvent>, LookoutError> {
    serde_json::from_str(json).map_err(|e| LookoutError::Script(e.to_string()))
}

/// Read and parse a replay script from disk.
pub fn load_script(path: &Path) -> Result<Vec<InputEvent>, LookoutError> {
    let content = std::fs::read_to_string(path)?;
    parse_script(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_tokens() {
        assert_eq!(MouseButton::Left.token(), 'L');
        assert_eq!(MouseButton::Middle.token(), 'M');
        assert_eq!(MouseButton::Right.token(), 'R');
    }

    #[test]
    fn wheel_direction_from_signed_delta() {
        assert_eq!(WheelDirection::from_delta(1.0), Some(WheelDirection::Up));
        assert_eq!(
            WheelDirection::from_delta(-0.25),
            Some(WheelDirection::Down)
        );
        assert_eq!(WheelDirection::from_delta(0.0), None);
    }

    #[test]
    fn events_parse_from_json() {
        let json = r#"[
            {"type": "modifiers_changed", "ctrl": true},
            {"type": "mouse_button", "button": "left", "pressed": true, "x": 10.0, "y": 20.0},
            {"type": "key_pressed", "key": "home"}
        ]"#;
        let events = parse_script(json).unwrap();
        assert_eq!(events.len(), 3);
        assert_eq!(
            events[0],
            InputEvent::ModifiersChanged(Modifiers {
                ctrl: true,
                ..Modifiers::default()
            })
        );
        assert_eq!(
            events[1],
            InputEvent::MouseButton {
                button: MouseButton::Left,
                pressed: true,
                x: 10.0,
                y: 20.0,
            }
        );
    }

    #[test]
    fn malformed_script_is_a_script_error() {
        let err = parse_script(r#"[{"type": "teleport"}]"#).unwrap_err();
        assert!(matches!(err, LookoutError::Script(_)), "{err}");
        assert!(parse_script("{}").is_err());
        assert!(parse_script("[]").unwrap().is_empty());
    }

    #[test]
    fn missing_script_is_an_io_error() {
        let err = load_script(Path::new("/nonexistent/lookout/script.json"))
            .unwrap_err();
        assert!(matches!(err, LookoutError::Io(_)));
    }
}
