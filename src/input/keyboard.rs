use serde::{Deserialize, Serialize};

/// Viewport actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// home = "home"
/// toggle_projection = "p"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Return the camera to its home axes around the origin.
    Home,
    /// Switch between perspective and orthogonal projection.
    ToggleProjection,
}
