use glam::Mat4;

/// Projection and look-at transforms produced by
/// [`Camera::set_view`](crate::Camera::set_view).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    /// Clip-space projection (OpenGL depth convention).
    pub projection: Mat4,
    /// World-to-eye look-at transform.
    pub view: Mat4,
}

impl ViewTransform {
    /// Combined `projection * view`.
    #[must_use]
    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view
    }
}
