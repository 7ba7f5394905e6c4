//! Translator for raw GLUT callback data.
//!
//! GLUT reports keys as bytes (with Ctrl folding letters into control
//! characters), special keys as integer codes, and modifiers as a bitmask
//! that is only queryable inside keyboard/mouse callbacks. Motion callbacks
//! therefore reuse the last modifier state seen.

use super::event::{InputEvent, MouseButton, WheelDirection};
use super::keys::Modifiers;

/// `GLUT_ACTIVE_SHIFT`.
pub const ACTIVE_SHIFT: i32 = 0x1;
/// `GLUT_ACTIVE_CTRL`.
pub const ACTIVE_CTRL: i32 = 0x2;
/// `GLUT_ACTIVE_ALT`.
pub const ACTIVE_ALT: i32 = 0x4;

/// `GLUT_DOWN`.
pub const DOWN: i32 = 0;
/// `GLUT_UP`.
pub const UP: i32 = 1;

/// Decode a `glutGetModifiers()` bitmask.
#[must_use]
pub const fn modifiers_from_bits(bits: i32) -> Modifiers {
    Modifiers {
        ctrl: bits & ACTIVE_CTRL != 0,
        alt: bits & ACTIVE_ALT != 0,
        shift: bits & ACTIVE_SHIFT != 0,
    }
}

/// Canonical name of a `glutKeyboardFunc` byte.
///
/// Control characters 1..=26 are Ctrl+letter; a handful of punctuation
/// codes arrive as virtual-key values on some platforms. Space and DEL take
/// the same names the other frontends use; NUL and other unprintable bytes
/// have no name.
#[must_use]
pub fn key_name(byte: u8) -> Option<String> {
    let name = match byte {
        b' ' => return Some("space".to_owned()),
        0x7f => return Some("delete".to_owned()),
        1..=26 => char::from(b'a' + byte - 1),
        0xba => ':',
        0xbb => ';',
        0x1b => '[',
        0xdb => '{',
        0xbc => ',',
        0x1c => '\\',
        0xdc => '|',
        0xbd | 0x1f => '-',
        0x1d => ']',
        0xdd => '}',
        0xbe => '.',
        0x1e => '^',
        0xde => '~',
        0xbf => '/',
        0xc0 => '@',
        0xe2 => '_',
        _ if byte.is_ascii_graphic() => char::from(byte).to_ascii_lowercase(),
        _ => return None,
    };
    Some(name.to_string())
}

/// Canonical name of a `glutSpecialFunc` code.
#[must_use]
pub fn special_key_name(code: i32) -> Option<&'static str> {
    let name = match code {
        1 => "f1",
        2 => "f2",
        3 => "f3",
        4 => "f4",
        5 => "f5",
        6 => "f6",
        7 => "f7",
        8 => "f8",
        9 => "f9",
        10 => "f10",
        11 => "f11",
        12 => "f12",
        100 => "left",
        101 => "up",
        102 => "right",
        103 => "down",
        104 => "pageup",
        105 => "pagedown",
        106 => "home",
        107 => "end",
        108 => "insert",
        112 => "shift",
        114 => "ctrl",
        116 => "alt",
        _ => return None,
    };
    Some(name)
}

/// Stateful GLUT translator. Feed it the arguments of each GLUT callback.
#[derive(Debug, Default)]
pub struct GlutFrontend {
    modifiers: Modifiers,
}

impl GlutFrontend {
    /// Create a translator with no modifiers held.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last modifier state seen.
    #[must_use]
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// `glutKeyboardFunc` / `glutKeyboardUpFunc`.
    pub fn keyboard(
        &mut self,
        byte: u8,
        modifier_bits: i32,
        pressed: bool,
    ) -> impl Iterator<Item = InputEvent> {
        let changed = self.sync_modifiers(modifiers_from_bits(modifier_bits));
        let event = key_name(byte).map(|key| key_event(key, pressed));
        if event.is_none() {
            log::warn!("unknown key code {byte:#04x}");
        }
        changed.into_iter().chain(event)
    }

    /// `glutSpecialFunc` / `glutSpecialUpFunc`.
    ///
    /// Shift/Ctrl/Alt arrive here as special keys; their own press and
    /// release update the held modifier state.
    pub fn special(
        &mut self,
        code: i32,
        modifier_bits: i32,
        pressed: bool,
    ) -> impl Iterator<Item = InputEvent> {
        let mut mods = modifiers_from_bits(modifier_bits);
        let name = special_key_name(code);
        match name {
            Some("shift") => mods.shift = pressed,
            Some("ctrl") => mods.ctrl = pressed,
            Some("alt") => mods.alt = pressed,
            Some(_) => {}
            None => log::warn!("unknown special key code {code}"),
        }
        let changed = self.sync_modifiers(mods);
        let event = name.map(|key| key_event(key.to_owned(), pressed));
        changed.into_iter().chain(event)
    }

    /// `glutMouseFunc`. Buttons 3 and 4 are wheel notches and only report
    /// on press.
    pub fn mouse(
        &mut self,
        button: i32,
        state: i32,
        modifier_bits: i32,
        x: i32,
        y: i32,
    ) -> impl Iterator<Item = InputEvent> {
        let changed = self.sync_modifiers(modifiers_from_bits(modifier_bits));
        let (x, y) = (x as f32, y as f32);
        let event = match button {
            0 | 1 | 2 => {
                let button = match button {
                    0 => MouseButton::Left,
                    1 => MouseButton::Middle,
                    _ => MouseButton::Right,
                };
                Some(InputEvent::MouseButton {
                    button,
                    pressed: state == DOWN,
                    x,
                    y,
                })
            }
            3 | 4 if state == DOWN => Some(InputEvent::Wheel {
                direction: if button == 3 {
                    WheelDirection::Up
                } else {
                    WheelDirection::Down
                },
                x,
                y,
            }),
            3 | 4 => None,
            _ => {
                log::warn!("unknown mouse button {button}");
                None
            }
        };
        changed.into_iter().chain(event)
    }

    /// `glutMotionFunc`.
    #[must_use]
    pub fn motion(x: i32, y: i32) -> InputEvent {
        InputEvent::CursorMoved {
            x: x as f32,
            y: y as f32,
        }
    }

    fn sync_modifiers(&mut self, mods: Modifiers) -> Option<InputEvent> {
        if mods == self.modifiers {
            return None;
        }
        self.modifiers = mods;
        Some(InputEvent::ModifiersChanged(mods))
    }
}

fn key_event(key: String, pressed: bool) -> InputEvent {
    if pressed {
        InputEvent::KeyPressed { key }
    } else {
        InputEvent::KeyReleased { key }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_characters_fold_back_to_letters() {
        assert_eq!(key_name(1).as_deref(), Some("a"));
        assert_eq!(key_name(26).as_deref(), Some("z"));
        assert_eq!(key_name(b'Q').as_deref(), Some("q"));
        assert_eq!(key_name(0x1b).as_deref(), Some("["));
        assert_eq!(key_name(0xbd).as_deref(), Some("-"));
        assert_eq!(key_name(0xff), None);
    }

    #[test]
    fn unprintable_bytes_have_no_name() {
        assert_eq!(key_name(0x00), None);
        assert_eq!(key_name(0x7f).as_deref(), Some("delete"));
        assert_eq!(key_name(b' ').as_deref(), Some("space"));
        let mut glut = GlutFrontend::new();
        assert_eq!(glut.keyboard(0x00, 0, true).count(), 0);
    }

    #[test]
    fn modifier_bits_decode() {
        let mods = modifiers_from_bits(ACTIVE_CTRL | ACTIVE_SHIFT);
        assert!(mods.ctrl && mods.shift && !mods.alt);
        assert_eq!(mods.prefix(), "C-S-");
    }

    #[test]
    fn key_press_emits_modifier_change_first() {
        let mut glut = GlutFrontend::new();
        let events: Vec<_> = glut.keyboard(8, ACTIVE_CTRL, true).collect();
        assert_eq!(
            events,
            vec![
                InputEvent::ModifiersChanged(Modifiers {
                    ctrl: true,
                    ..Modifiers::NONE
                }),
                InputEvent::KeyPressed { key: "h".into() },
            ]
        );

        // Same modifiers again: no repeated change event.
        let events: Vec<_> = glut.keyboard(8, ACTIVE_CTRL, false).collect();
        assert_eq!(events, vec![InputEvent::KeyReleased { key: "h".into() }]);
    }

    #[test]
    fn unknown_codes_are_dropped() {
        let mut glut = GlutFrontend::new();
        assert_eq!(glut.keyboard(0xf0, 0, true).count(), 0);
        assert_eq!(glut.special(999, 0, true).count(), 0);
    }

    #[test]
    fn modifier_special_keys_track_held_state() {
        let mut glut = GlutFrontend::new();
        let events: Vec<_> = glut.special(114, 0, true).collect();
        assert_eq!(events.len(), 2);
        assert!(glut.modifiers().ctrl);
        assert_eq!(events[1], InputEvent::KeyPressed { key: "ctrl".into() });

        let _ = glut.special(114, ACTIVE_CTRL, false).count();
        assert!(!glut.modifiers().ctrl);
    }

    #[test]
    fn home_special_key() {
        let mut glut = GlutFrontend::new();
        let events: Vec<_> = glut.special(106, 0, true).collect();
        assert_eq!(events, vec![InputEvent::KeyPressed { key: "home".into() }]);
    }

    #[test]
    fn wheel_buttons_only_press() {
        let mut glut = GlutFrontend::new();
        let down: Vec<_> = glut.mouse(3, DOWN, 0, 5, 6).collect();
        assert_eq!(
            down,
            vec![InputEvent::Wheel {
                direction: WheelDirection::Up,
                x: 5.0,
                y: 6.0,
            }]
        );
        assert_eq!(glut.mouse(4, UP, 0, 5, 6).count(), 0);
    }

    #[test]
    fn extra_mouse_buttons_are_dropped() {
        let mut glut = GlutFrontend::new();
        assert_eq!(glut.mouse(7, DOWN, 0, 5, 6).count(), 0);
        assert_eq!(glut.mouse(5, UP, 0, 5, 6).count(), 0);
        assert_eq!(glut.mouse(-1, DOWN, 0, 5, 6).count(), 0);
    }

    #[test]
    fn mouse_buttons_carry_position() {
        let mut glut = GlutFrontend::new();
        let events: Vec<_> = glut.mouse(2, UP, 0, 40, 50).collect();
        assert_eq!(
            events,
            vec![InputEvent::MouseButton {
                button: MouseButton::Right,
                pressed: false,
                x: 40.0,
                y: 50.0,
            }]
        );
        assert_eq!(
            GlutFrontend::motion(1, 2),
            InputEvent::CursorMoved { x: 1.0, y: 2.0 }
        );
    }
}
