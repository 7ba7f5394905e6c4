use std::f32::consts::PI;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::Projection;
use crate::error::LookoutError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Construction-time camera parameters.
pub struct CameraOptions {
    /// Orthogonal or perspective projection.
    #[schemars(title = "Projection")]
    pub projection: Projection,
    /// Vertical field of view in radians.
    #[schemars(title = "Field of View", range(min = 0.1, max = 3.0), extend("step" = 0.01))]
    pub fovy: f32,
    /// Open interval the field of view must stay inside.
    #[schemars(skip)]
    pub fovy_range: [f32; 2],
    /// Open interval `(near, far)` bounding the eye-to-focus distance.
    #[schemars(skip)]
    pub depth_range: [f32; 2],
    /// Initial eye-to-focus distance.
    #[schemars(title = "Distance", range(min = 0.1, max = 100.0), extend("step" = 0.5))]
    pub distance: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            projection: Projection::Perspective,
            fovy: 0.1 * PI,
            fovy_range: [0.1 * PI, 0.9 * PI],
            depth_range: [0.1, 100.0],
            distance: 30.0,
        }
    }
}

impl CameraOptions {
    /// Check the orbit invariants a [`Camera`](crate::Camera) relies on:
    /// `0 < near < distance < far` and `fovy` inside
    /// `[fovy_range.0, fovy_range.1)`.
    pub fn validate(&self) -> Result<(), LookoutError> {
        let [near, far] = self.depth_range;
        let [fovy_min, fovy_max] = self.fovy_range;
        let all_finite = [self.fovy, fovy_min, fovy_max, near, far, self.distance]
            .iter()
            .all(|v| v.is_finite());
        if !all_finite {
            return Err(invalid("camera values must be finite"));
        }
        if self.distance <= 0.0 {
            return Err(invalid(format!(
                "camera.distance must be positive, got {}",
                self.distance
            )));
        }
        if near <= 0.0 || near >= far {
            return Err(invalid(format!(
                "camera.depth_range must satisfy 0 < near < far, got [{near}, {far}]"
            )));
        }
        if self.distance <= near || self.distance >= far {
            return Err(invalid(format!(
                "camera.distance {} outside depth_range ({near}, {far})",
                self.distance
            )));
        }
        if fovy_min <= 0.0 || fovy_min >= fovy_max {
            return Err(invalid(format!(
                "camera.fovy_range must satisfy 0 < min < max, got [{fovy_min}, {fovy_max}]"
            )));
        }
        if self.fovy < fovy_min || self.fovy >= fovy_max {
            return Err(invalid(format!(
                "camera.fovy {} outside fovy_range [{fovy_min}, {fovy_max})",
                self.fovy
            )));
        }
        Ok(())
    }
}

fn invalid(msg: impl Into<String>) -> LookoutError {
    LookoutError::InvalidOptions(msg.into())
}
