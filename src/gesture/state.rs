use glam::Vec2;

/// Dispatcher state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GestureState {
    /// No button held.
    #[default]
    Idle,
    /// Left button drag in progress.
    DraggingLeft,
    /// Right button drag in progress.
    DraggingRight,
}

/// Cursor bookkeeping for an active drag.
///
/// Positions are screen pixels (y grows downward). `reference` is the
/// cursor relative to the viewport center with y flipped to grow upward,
/// so counter-clockwise motion on screen is a positive rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragAnchor {
    /// Cursor position at the previous applied step.
    pub last: Vec2,
    /// Viewport center captured when the drag began.
    pub center: Vec2,
    /// Center-relative vector at the previous tilt step.
    pub reference: Vec2,
}

impl DragAnchor {
    /// Anchor a drag at `cursor` in a viewport of `size` pixels.
    #[must_use]
    pub fn new(cursor: Vec2, size: Vec2) -> Self {
        let center = size / 2.0;
        Self {
            last: cursor,
            center,
            reference: Self::relative(cursor, center),
        }
    }

    /// Screen delta since the last applied step.
    #[must_use]
    pub fn delta(&self, cursor: Vec2) -> Vec2 {
        cursor - self.last
    }

    /// Center-relative, y-up vector for `cursor`.
    #[must_use]
    pub fn relative(cursor: Vec2, center: Vec2) -> Vec2 {
        Vec2::new(cursor.x - center.x, center.y - cursor.y)
    }
}

/// Incremental roll between two center-relative vectors.
///
/// Cross product over the squared norm of the new vector: a small-angle
/// estimate, exact only in the limit. `(100, 0) → (0, 100)` yields `1.0`,
/// not π/2.
#[must_use]
pub fn tilt_angle(reference: Vec2, current: Vec2) -> f32 {
    reference.perp_dot(current) / current.length_squared()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_turn_estimates_one_radian() {
        let angle = tilt_angle(Vec2::new(100.0, 0.0), Vec2::new(0.0, 100.0));
        assert_eq!(angle, 1.0);
    }

    #[test]
    fn clockwise_is_negative() {
        let angle = tilt_angle(Vec2::new(0.0, 50.0), Vec2::new(50.0, 0.0));
        assert_eq!(angle, -1.0);
    }

    #[test]
    fn small_steps_approach_true_angle() {
        let step = 0.01_f32;
        let current = Vec2::new(step.cos(), step.sin()) * 80.0;
        let angle = tilt_angle(Vec2::new(80.0, 0.0), current);
        assert!((angle - step).abs() < 1e-5);
    }

    #[test]
    fn anchor_flips_y_around_center() {
        let anchor = DragAnchor::new(Vec2::new(150.0, 50.0), Vec2::new(200.0, 200.0));
        assert_eq!(anchor.center, Vec2::new(100.0, 100.0));
        assert_eq!(anchor.reference, Vec2::new(50.0, 50.0));
        assert_eq!(anchor.delta(Vec2::new(160.0, 45.0)), Vec2::new(10.0, -5.0));
    }
}
