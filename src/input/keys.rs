//! Key, button and modifier normalization.
//!
//! Every toolkit spells keys differently. Everything that reaches the
//! gesture dispatcher is first reduced to one vocabulary: lowercase key
//! names (`"a"`, `"home"`, `"pageup"`, `"f5"`) and a modifier prefix in the
//! fixed order `C-` (ctrl), `M-` (alt/meta), `S-` (shift).

use serde::{Deserialize, Serialize};

/// Held modifier keys.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(default)]
pub struct Modifiers {
    /// Control key.
    pub ctrl: bool,
    /// Alt / meta key.
    pub alt: bool,
    /// Shift key.
    pub shift: bool,
}

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Self = Self {
        ctrl: false,
        alt: false,
        shift: false,
    };

    /// Canonical symbol prefix, e.g. `"C-S-"`.
    #[must_use]
    pub fn prefix(self) -> String {
        let mut prefix = String::new();
        if self.ctrl {
            prefix.push_str("C-");
        }
        if self.alt {
            prefix.push_str("M-");
        }
        if self.shift {
            prefix.push_str("S-");
        }
        prefix
    }

    /// Prefix for a key event on `key`. A modifier key never prefixes
    /// itself: pressing shift while holding ctrl is `"C-shift"`, not
    /// `"C-S-shift"`.
    #[must_use]
    pub fn prefix_for(self, key: &str) -> String {
        let mut mods = self;
        match key {
            "ctrl" => mods.ctrl = false,
            "alt" => mods.alt = false,
            "shift" => mods.shift = false,
            _ => {}
        }
        mods.prefix()
    }
}

/// Split the leading modifier prefix off an event symbol.
///
/// `"C-S-Lbutton pressed"` → `("C-S-", "Lbutton pressed")`.
#[must_use]
pub fn split_modifiers(symbol: &str) -> (&str, &str) {
    let mut end = 0;
    let bytes = symbol.as_bytes();
    while end + 1 < bytes.len()
        && matches!(bytes[end], b'C' | b'M' | b'S')
        && bytes[end + 1] == b'-'
    {
        end += 2;
    }
    symbol.split_at(end)
}

/// Normalize a toolkit-style key spelling to canonical form.
///
/// `ctrl+`, `alt+`, `shift+` and `win+` become `C-`, `M-`, `S-` and
/// `win-`, and modifier tokens are reordered to `C-M-S-`. Already-canonical
/// names pass through unchanged.
#[must_use]
pub fn regulate_key(key: &str) -> String {
    let abbreviated = key
        .replace("ctrl+", "C-")
        .replace("alt+", "M-")
        .replace("shift+", "S-")
        .replace("win+", "win-");

    let (prefix, rest) = split_modifiers(&abbreviated);
    let mods = Modifiers {
        ctrl: prefix.contains("C-"),
        alt: prefix.contains("M-"),
        shift: prefix.contains("S-"),
    };
    format!("{}{rest}", mods.prefix())
}

/// Map a physical key name (W3C `KeyboardEvent.code` / winit `KeyCode`
/// debug spelling) to its canonical lowercase name.
///
/// Returns `None` for keys without a canonical name.
#[must_use]
pub fn canonical_key_name(code: &str) -> Option<String> {
    if let Some(letter) = code.strip_prefix("Key") {
        if letter.len() == 1 {
            return Some(letter.to_ascii_lowercase());
        }
    }
    if let Some(digit) = code.strip_prefix("Digit") {
        if digit.len() == 1 {
            return Some(digit.to_owned());
        }
    }
    if let Some(n) = code.strip_prefix('F') {
        if n.parse::<u8>().is_ok_and(|n| (1..=24).contains(&n)) {
            return Some(code.to_ascii_lowercase());
        }
    }

    let name = match code {
        "ArrowUp" => "up",
        "ArrowDown" => "down",
        "ArrowLeft" => "left",
        "ArrowRight" => "right",
        "PageUp" => "pageup",
        "PageDown" => "pagedown",
        "Home" => "home",
        "End" => "end",
        "Insert" => "insert",
        "Delete" => "delete",
        "Escape" => "escape",
        "Tab" => "tab",
        "Enter" => "enter",
        "Space" => "space",
        "Backspace" => "backspace",
        "ShiftLeft" | "ShiftRight" => "shift",
        "ControlLeft" | "ControlRight" => "ctrl",
        "AltLeft" | "AltRight" => "alt",
        "SuperLeft" | "SuperRight" | "MetaLeft" | "MetaRight" => "win",
        "Minus" => "-",
        "Equal" => "=",
        "BracketLeft" => "[",
        "BracketRight" => "]",
        "Semicolon" => ";",
        "Quote" => "'",
        "Backquote" => "`",
        "Backslash" => "\\",
        "Comma" => ",",
        "Period" => ".",
        "Slash" => "/",
        _ => return None,
    };
    Some(name.to_owned())
}
