use glam::{Mat4, Vec3};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::basis::Basis;
use super::view::ViewTransform;
use crate::options::CameraOptions;

/// Projection model.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Projection {
    /// Parallel projection; `fovy` only sets the visible half-height.
    Orthogonal,
    /// Pinhole projection with vertical field of view `fovy`.
    #[default]
    Perspective,
}

/// Orbit camera around a logical focus point.
///
/// The eye always sits at `focus + forward * distance`. Every mutating
/// operation either keeps that relation and an orthonormal basis, or
/// returns `false` and leaves the camera untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    projection: Projection,
    /// Vertical field of view in radians.
    fovy: f32,
    fovy_range: (f32, f32),
    distance: f32,
    basis: Basis,
    eye: Vec3,
    focus: Vec3,
    depth_range: (f32, f32),
    viewport: (u32, u32),
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(&CameraOptions::default())
    }
}

impl Camera {
    /// Create a camera on the home axes, looking at the origin.
    ///
    /// Options that fail [`CameraOptions::validate`] are replaced by the
    /// defaults with a warning.
    #[must_use]
    pub fn new(options: &CameraOptions) -> Self {
        let defaults;
        let options = match options.validate() {
            Ok(()) => options,
            Err(e) => {
                log::warn!("{e}; using default camera options");
                defaults = CameraOptions::default();
                &defaults
            }
        };
        let basis = Basis::IDENTITY;
        Self {
            projection: options.projection,
            fovy: options.fovy,
            fovy_range: (options.fovy_range[0], options.fovy_range[1]),
            distance: options.distance,
            basis,
            eye: basis.forward * options.distance,
            focus: Vec3::ZERO,
            depth_range: (options.depth_range[0], options.depth_range[1]),
            viewport: (200, 200),
        }
    }

    /// Current projection model.
    #[must_use]
    pub fn projection(&self) -> Projection {
        self.projection
    }

    /// Vertical field of view in radians.
    #[must_use]
    pub fn fovy(&self) -> f32 {
        self.fovy
    }

    /// Open interval the field of view is kept in.
    #[must_use]
    pub fn fovy_range(&self) -> (f32, f32) {
        self.fovy_range
    }

    /// Eye-to-focus distance.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Camera frame.
    #[must_use]
    pub fn basis(&self) -> Basis {
        self.basis
    }

    /// Eye position.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    /// Look-at target.
    #[must_use]
    pub fn focus(&self) -> Vec3 {
        self.focus
    }

    /// Open interval `(near, far)` the distance is kept in.
    #[must_use]
    pub fn depth_range(&self) -> (f32, f32) {
        self.depth_range
    }

    /// Viewport size in pixels.
    #[must_use]
    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    /// Logical half-height of the view at the focal plane.
    #[must_use]
    pub fn half_height(&self) -> f32 {
        self.distance * (self.fovy / 2.0).tan()
    }

    /// Dots per logical unit at the focal plane.
    #[must_use]
    pub fn dpu(&self) -> f32 {
        self.viewport.1 as f32 / 2.0 / self.half_height()
    }

    /// Record a new viewport size without touching the projection.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.viewport = (width, height);
    }

    /// Switch projection model.
    pub fn set_projection(&mut self, projection: Projection) {
        self.projection = projection;
    }

    /// Flip between perspective and orthogonal projection.
    pub fn toggle_projection(&mut self) {
        self.projection = match self.projection {
            Projection::Orthogonal => Projection::Perspective,
            Projection::Perspective => Projection::Orthogonal,
        };
    }

    /// Re-seat the camera on new axes around `center`.
    ///
    /// `forward` and `up` must already be orthogonal unit vectors; they
    /// are not renormalized.
    pub fn set_axes(&mut self, forward: Vec3, up: Vec3, center: Vec3) {
        self.focus = center;
        self.eye = center + forward * self.distance;
        self.basis = Basis::from_forward_up(forward, up);
    }

    /// Return to the home axes (forward = Z, up = Y) around the origin.
    pub fn home(&mut self) {
        self.set_axes(Vec3::Z, Vec3::Y, Vec3::ZERO);
    }

    /// Orbit the eye around the focus by logical offsets along right/up.
    pub fn rotate(&mut self, dx: f32, dy: f32) -> bool {
        let offset = self.basis.right * dx + self.basis.up * dy;
        let Some(basis) = self.swing(self.eye - self.focus + offset) else {
            return false;
        };
        self.basis = basis;
        self.eye = self.focus + basis.forward * self.distance;
        true
    }

    /// Pan the focus by logical offsets while the eye stays put.
    pub fn shift(&mut self, dx: f32, dy: f32) -> bool {
        let offset = self.basis.right * dx + self.basis.up * dy;
        let Some(basis) = self.swing(self.eye - self.focus - offset) else {
            return false;
        };
        self.basis = basis;
        self.focus = self.eye - basis.forward * self.distance;
        true
    }

    /// Roll right/up about the view axis by `angle` radians.
    pub fn tilt(&mut self, angle: f32) -> bool {
        self.basis = self.basis.tilted(angle);
        true
    }

    /// Dolly the eye so the distance becomes `distance / rate`.
    ///
    /// Refused when the new distance would leave the open depth range.
    pub fn zoom(&mut self, rate: f32) -> bool {
        let target = self.distance / rate;
        let (near, far) = self.depth_range;
        if !(near < target && target < far) {
            log::debug!("zoom {rate} clamped: distance {target} out of range");
            return false;
        }
        self.eye += self.basis.forward * (target - self.distance);
        self.distance = target;
        true
    }

    /// Widen or narrow the field of view by `angle` radians, dollying
    /// proportionally so framing stays roughly stable.
    ///
    /// Perspective only. Refused when either the new angle or the matching
    /// zoom would leave its range.
    pub fn magnify(&mut self, angle: f32) -> bool {
        if self.projection == Projection::Orthogonal {
            return false;
        }
        let fovy = self.fovy + angle;
        let (min, max) = self.fovy_range;
        if !(min < fovy && fovy < max) {
            log::debug!("magnify {angle} clamped: fovy {fovy} out of range");
            return false;
        }
        if !self.zoom(fovy / self.fovy) {
            return false;
        }
        self.fovy = fovy;
        true
    }

    /// Store the viewport size and build the projection and look-at
    /// transforms for it (OpenGL clip conventions).
    pub fn set_view(&mut self, width: u32, height: u32) -> ViewTransform {
        self.viewport = (width, height);
        let aspect = width as f32 / height.max(1) as f32;
        let (near, far) = self.depth_range;

        let projection = match self.projection {
            Projection::Perspective => {
                Mat4::perspective_rh_gl(self.fovy, aspect, near, far)
            }
            // Orthogonal depth spans (-far, far): the near plane sits
            // behind the eye.
            Projection::Orthogonal => {
                let h = self.half_height();
                let w = h * aspect;
                Mat4::orthographic_rh_gl(-w, w, -h, h, -far, far)
            }
        };
        let view = Mat4::look_at_rh(self.eye, self.focus, self.basis.up);

        ViewTransform { projection, view }
    }

    /// Unit vector along `view`, with the current up swung onto it.
    fn swing(&self, view: Vec3) -> Option<Basis> {
        let forward = view.try_normalize()?;
        self.basis.reoriented(forward)
    }
}
