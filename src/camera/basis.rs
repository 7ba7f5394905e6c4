use glam::Vec3;

/// Orthonormal, right-handed camera frame.
///
/// `forward` points from the focus toward the eye, so the camera looks
/// along `-forward`. `right × up == forward`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basis {
    /// Screen-right direction.
    pub right: Vec3,
    /// Screen-up direction.
    pub up: Vec3,
    /// Focus-to-eye direction.
    pub forward: Vec3,
}

impl Default for Basis {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Basis {
    /// World axes: right = X, up = Y, forward = Z.
    pub const IDENTITY: Self = Self {
        right: Vec3::X,
        up: Vec3::Y,
        forward: Vec3::Z,
    };

    /// Frame from a forward and up direction; right is `up × forward`.
    /// Inputs are trusted to be orthogonal unit vectors.
    #[must_use]
    pub fn from_forward_up(forward: Vec3, up: Vec3) -> Self {
        Self {
            right: up.cross(forward),
            up,
            forward,
        }
    }

    /// Swing the frame onto a new unit `forward`, keeping `up` as close to
    /// the old one as possible.
    ///
    /// Returns `None` when the old up is parallel to the new forward and
    /// right would be undefined.
    #[must_use]
    pub fn reoriented(&self, forward: Vec3) -> Option<Self> {
        let right = self.up.cross(forward).try_normalize()?;
        Some(Self {
            right,
            up: forward.cross(right),
            forward,
        })
    }

    /// Rotate right/up by `angle` radians about forward.
    #[must_use]
    pub fn tilted(&self, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            right: self.right * cos + self.up * sin,
            up: -self.right * sin + self.up * cos,
            forward: self.forward,
        }
    }

    /// Whether the frame is orthonormal and right-handed within `eps`.
    #[must_use]
    pub fn is_orthonormal(&self, eps: f32) -> bool {
        let unit = |v: Vec3| (v.length() - 1.0).abs() <= eps;
        unit(self.right)
            && unit(self.up)
            && unit(self.forward)
            && self.right.dot(self.up).abs() <= eps
            && self.up.dot(self.forward).abs() <= eps
            && self.forward.dot(self.right).abs() <= eps
            && self.right.cross(self.up).abs_diff_eq(self.forward, eps)
    }
}
