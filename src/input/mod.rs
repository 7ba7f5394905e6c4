//! Input handling: platform-agnostic event types, key normalization, and
//! the front-end translators that turn toolkit events into them.

/// Platform-agnostic input events.
pub mod event;
/// Translator for raw GLUT callback data.
pub mod glut;
/// Key actions bindable through options.
mod keyboard;
/// Key, button and modifier normalization.
pub mod keys;

/// Translator for DOM canvas events.
#[cfg(feature = "web")]
pub mod browser;
/// Translator for winit window events.
#[cfg(feature = "viewer")]
pub mod native;

#[cfg(feature = "web")]
pub use browser::WebFrontend;
pub use event::{load_script, parse_script, InputEvent, MouseButton, WheelDirection};
pub use glut::GlutFrontend;
pub use keyboard::KeyAction;
pub use keys::Modifiers;
#[cfg(feature = "viewer")]
pub use native::WinitFrontend;
