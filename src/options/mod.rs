//! Centralized camera and gesture options with TOML preset support.
//!
//! All tweakable settings (initial camera, gesture sensitivity,
//! keybindings) are consolidated here. Options serialize to/from TOML so a
//! viewport setup can be stored as a preset file.

mod camera;
mod gesture;
mod keybindings;

use std::path::Path;

pub use camera::CameraOptions;
pub use gesture::GestureOptions;
pub use keybindings::KeybindingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::LookoutError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Initial camera state and limits.
    pub camera: CameraOptions,
    /// Gesture sensitivity constants.
    pub gesture: GestureOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, LookoutError> {
        let content = std::fs::read_to_string(path).map_err(LookoutError::Io)?;
        Self::from_toml(&content)
    }

    /// Parse options from TOML text. Missing fields use defaults; values
    /// that break a camera or gesture invariant are rejected.
    pub fn from_toml(content: &str) -> Result<Self, LookoutError> {
        let mut opts: Self = toml::from_str(content)
            .map_err(|e| LookoutError::OptionsParse(e.to_string()))?;
        opts.validate()?;
        opts.keybindings.rebuild_reverse_map();
        Ok(opts)
    }

    /// Check camera and gesture invariants.
    pub fn validate(&self) -> Result<(), LookoutError> {
        self.camera.validate()?;
        self.gesture.validate()
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), LookoutError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| LookoutError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(LookoutError::Io)?;
        }
        std::fs::write(path, content).map_err(LookoutError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use glam::Vec3;

    use super::*;
    use crate::camera::{Camera, Projection};
    use crate::input::KeyAction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[camera]
projection = "orthogonal"
distance = 12.5
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.camera.projection, Projection::Orthogonal);
        assert_eq!(opts.camera.distance, 12.5);
        // Everything else should be default
        assert_eq!(opts.camera.fovy, 0.1 * PI);
        assert_eq!(opts.gesture.scroll_zoom_rate, 1.25);
        assert_eq!(opts.keybindings.lookup("home"), Some(KeyAction::Home));
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(opts.keybindings.lookup("home"), Some(KeyAction::Home));
        assert_eq!(
            opts.keybindings.lookup("p"),
            Some(KeyAction::ToggleProjection)
        );
        assert_eq!(opts.keybindings.lookup("end"), None);
    }

    #[test]
    fn toolkit_spelled_bindings_are_regulated() {
        let toml_str = r#"
[keybindings.bindings]
home = "shift+ctrl+h"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.keybindings.lookup("C-S-h"), Some(KeyAction::Home));
        assert_eq!(
            opts.keybindings.key_for(KeyAction::Home).as_deref(),
            Some("C-S-h")
        );
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml("[camera\nfovy = ").unwrap_err();
        assert!(matches!(err, LookoutError::OptionsParse(_)));
    }

    fn rejected(camera: CameraOptions) -> String {
        let err = camera.validate().unwrap_err();
        assert!(matches!(err, LookoutError::InvalidOptions(_)), "{err}");
        err.to_string()
    }

    #[test]
    fn default_camera_is_valid_at_fov_lower_bound() {
        let camera = CameraOptions::default();
        assert_eq!(camera.fovy, camera.fovy_range[0]);
        assert!(camera.validate().is_ok());
        assert!(Options::default().validate().is_ok());
    }

    #[test]
    fn non_positive_distance_is_rejected() {
        let msg = rejected(CameraOptions {
            distance: -5.0,
            ..CameraOptions::default()
        });
        assert!(msg.contains("camera.distance"), "{msg}");
        let _ = rejected(CameraOptions {
            distance: 0.0,
            ..CameraOptions::default()
        });
    }

    #[test]
    fn inverted_depth_range_is_rejected() {
        let msg = rejected(CameraOptions {
            depth_range: [10.0, 1.0],
            distance: 5.0,
            ..CameraOptions::default()
        });
        assert!(msg.contains("depth_range"), "{msg}");
        let _ = rejected(CameraOptions {
            depth_range: [0.0, 100.0],
            ..CameraOptions::default()
        });
    }

    #[test]
    fn distance_outside_depth_range_is_rejected() {
        for distance in [0.05, 100.0, 150.0] {
            let msg = rejected(CameraOptions {
                distance,
                ..CameraOptions::default()
            });
            assert!(msg.contains("outside depth_range"), "{msg}");
        }
    }

    #[test]
    fn fovy_outside_range_is_rejected() {
        for fovy in [0.05 * PI, 0.9 * PI, 0.95 * PI] {
            let msg = rejected(CameraOptions {
                fovy,
                ..CameraOptions::default()
            });
            assert!(msg.contains("outside fovy_range"), "{msg}");
        }
        let _ = rejected(CameraOptions {
            fovy_range: [0.5, 0.2],
            fovy: 0.3,
            ..CameraOptions::default()
        });
        let _ = rejected(CameraOptions {
            fovy: f32::NAN,
            ..CameraOptions::default()
        });
    }

    #[test]
    fn bad_gesture_constants_are_rejected() {
        let mut opts = Options::default();
        opts.gesture.scroll_zoom_rate = 1.0;
        assert!(matches!(
            opts.validate(),
            Err(LookoutError::InvalidOptions(_))
        ));
        opts.gesture = GestureOptions {
            rotate_divisor: 0.0,
            ..GestureOptions::default()
        };
        assert!(matches!(
            opts.validate(),
            Err(LookoutError::InvalidOptions(_))
        ));
    }

    #[test]
    fn parsed_options_are_validated() {
        let toml_str = r#"
[camera]
distance = -5.0
"#;
        let err = Options::from_toml(toml_str).unwrap_err();
        assert!(matches!(err, LookoutError::InvalidOptions(_)));
    }

    #[test]
    fn load_rejects_bad_preset() {
        let dir = std::env::temp_dir()
            .join(format!("lookout-bad-preset-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("inverted.toml");
        std::fs::write(&path, "[camera]\ndepth_range = [10.0, 1.0]\n").unwrap();

        let err = Options::load(&path).unwrap_err();
        assert!(matches!(err, LookoutError::InvalidOptions(_)), "{err}");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn camera_from_bad_options_uses_defaults() {
        let camera = Camera::new(&CameraOptions {
            distance: 500.0,
            ..CameraOptions::default()
        });
        assert_eq!(camera.distance(), 30.0);
        assert_eq!(camera.eye(), Vec3::Z * 30.0);
        assert_eq!(camera.depth_range(), (0.1, 100.0));
    }

    #[test]
    fn save_then_load_preserves_values() {
        let dir = std::env::temp_dir()
            .join(format!("lookout-options-{}", std::process::id()));
        let path = dir.join("wide.toml");
        let mut opts = Options::default();
        opts.camera.fovy = 0.5;
        opts.gesture.rotate_divisor = 2.0;

        opts.save(&path).unwrap();
        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(Options::list_presets(&dir), vec!["wide".to_owned()]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("gesture"));
        assert!(!props.contains_key("keybindings"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("fovy").is_some());
        assert!(camera.get("distance").is_some());
        assert!(camera.get("depth_range").is_none());
    }
}
