//! Rendering boundary.
//!
//! The crate never issues graphics API calls. A [`RenderSurface`] receives
//! the view transform once per frame and the primitives of each visible
//! object; how it rasterizes them is its own business.

use glam::Vec3;

use crate::camera::ViewTransform;
use crate::scene::Shading;

/// Primitive sink for scene objects.
///
/// Coordinates are object-local; `begin_object` carries the translation.
pub trait Painter {
    /// Start an object: translate by `position`, select shading, and enable
    /// source-alpha blending if `blend`.
    fn begin_object(&mut self, position: Vec3, shading: &Shading, blend: bool);

    /// Enable or disable depth-buffer writes for the following primitives.
    fn set_depth_write(&mut self, enabled: bool);

    /// Point primitives.
    fn points(&mut self, points: &[Vec3]);

    /// Line segments.
    fn lines(&mut self, lines: &[[Vec3; 2]]);

    /// Filled triangles, counter-clockwise front faces.
    fn triangles(&mut self, triangles: &[[Vec3; 3]]);

    /// Undo everything `begin_object` set up.
    fn end_object(&mut self);
}

/// A window or canvas the stream draws into.
pub trait RenderSurface: Painter {
    /// Install the projection and look-at transform for the coming frame.
    fn apply_view(&mut self, view: &ViewTransform);

    /// Schedule one future frame. Calling it again before that frame runs
    /// must not schedule another.
    fn request_redraw(&mut self);
}

/// One call received by a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    /// [`RenderSurface::apply_view`].
    ApplyView(ViewTransform),
    /// [`RenderSurface::request_redraw`].
    RequestRedraw,
    /// [`Painter::begin_object`].
    BeginObject {
        /// Object translation.
        position: Vec3,
        /// Object shading.
        shading: Shading,
        /// Blend enabled.
        blend: bool,
    },
    /// [`Painter::set_depth_write`].
    SetDepthWrite(bool),
    /// [`Painter::points`].
    Points(Vec<Vec3>),
    /// [`Painter::lines`].
    Lines(Vec<[Vec3; 2]>),
    /// [`Painter::triangles`].
    Triangles(Vec<[Vec3; 3]>),
    /// [`Painter::end_object`].
    EndObject,
}

/// Headless surface that records every call in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    calls: Vec<SurfaceCall>,
}

impl RecordingSurface {
    /// Empty recording.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls received so far.
    #[must_use]
    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    /// Drain the recording.
    pub fn take(&mut self) -> Vec<SurfaceCall> {
        std::mem::take(&mut self.calls)
    }

    /// Number of redraw requests received.
    #[must_use]
    pub fn redraw_requests(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, SurfaceCall::RequestRedraw))
            .count()
    }

    /// Most recent view transform, if any.
    #[must_use]
    pub fn last_view(&self) -> Option<&ViewTransform> {
        self.calls.iter().rev().find_map(|c| match c {
            SurfaceCall::ApplyView(v) => Some(v),
            _ => None,
        })
    }
}

impl Painter for RecordingSurface {
    fn begin_object(&mut self, position: Vec3, shading: &Shading, blend: bool) {
        self.calls.push(SurfaceCall::BeginObject {
            position,
            shading: *shading,
            blend,
        });
    }

    fn set_depth_write(&mut self, enabled: bool) {
        self.calls.push(SurfaceCall::SetDepthWrite(enabled));
    }

    fn points(&mut self, points: &[Vec3]) {
        self.calls.push(SurfaceCall::Points(points.to_vec()));
    }

    fn lines(&mut self, lines: &[[Vec3; 2]]) {
        self.calls.push(SurfaceCall::Lines(lines.to_vec()));
    }

    fn triangles(&mut self, triangles: &[[Vec3; 3]]) {
        self.calls.push(SurfaceCall::Triangles(triangles.to_vec()));
    }

    fn end_object(&mut self) {
        self.calls.push(SurfaceCall::EndObject);
    }
}

impl RenderSurface for RecordingSurface {
    fn apply_view(&mut self, view: &ViewTransform) {
        self.calls.push(SurfaceCall::ApplyView(*view));
    }

    fn request_redraw(&mut self) {
        self.calls.push(SurfaceCall::RequestRedraw);
    }
}
