use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::LookoutError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Gestures", inline)]
#[serde(default)]
/// Sensitivity constants for mouse gestures.
pub struct GestureOptions {
    /// Orbit drags move `dpu / rotate_divisor` pixels per logical unit.
    #[schemars(title = "Rotate Divisor", range(min = 0.5, max = 16.0), extend("step" = 0.5))]
    pub rotate_divisor: f32,
    /// Pixels of drag per unit of zoom rate / fov radian.
    #[schemars(title = "Drag Scale", range(min = 10.0, max = 1000.0), extend("step" = 10.0))]
    pub drag_scale: f32,
    /// Zoom rate applied per Ctrl+wheel notch.
    #[schemars(title = "Scroll Zoom", range(min = 1.01, max = 4.0), extend("step" = 0.01))]
    pub scroll_zoom_rate: f32,
    /// Squared pixel radius around the viewport center where tilt is
    /// ignored.
    #[schemars(skip)]
    pub tilt_dead_zone: f32,
}

impl Default for GestureOptions {
    fn default() -> Self {
        Self {
            rotate_divisor: 4.0,
            drag_scale: 100.0,
            scroll_zoom_rate: 1.25,
            tilt_dead_zone: 10.0,
        }
    }
}

impl GestureOptions {
    /// Drag constants must be positive, the dead zone non-negative and the
    /// scroll rate above 1.
    pub fn validate(&self) -> Result<(), LookoutError> {
        let fields = [
            ("rotate_divisor", self.rotate_divisor),
            ("drag_scale", self.drag_scale),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(LookoutError::InvalidOptions(format!(
                    "gesture.{name} must be positive, got {value}"
                )));
            }
        }
        if !self.tilt_dead_zone.is_finite() || self.tilt_dead_zone < 0.0 {
            return Err(LookoutError::InvalidOptions(format!(
                "gesture.tilt_dead_zone must not be negative, got {}",
                self.tilt_dead_zone
            )));
        }
        if !self.scroll_zoom_rate.is_finite() || self.scroll_zoom_rate <= 1.0 {
            return Err(LookoutError::InvalidOptions(format!(
                "gesture.scroll_zoom_rate must exceed 1, got {}",
                self.scroll_zoom_rate
            )));
        }
        Ok(())
    }
}
