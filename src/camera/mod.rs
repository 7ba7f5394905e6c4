//! Camera system for 3D viewport navigation.
//!
//! Provides an orbit camera around a logical focus point with rotate,
//! shift, tilt, dolly zoom and field-of-view magnify, plus the projection
//! and look-at transforms for a viewport.

/// Orthonormal camera frame.
pub mod basis;
/// Core camera struct and its geometric operations.
pub mod core;
/// Projection and view transforms.
pub mod view;

pub use self::basis::Basis;
pub use self::core::{Camera, Projection};
pub use self::view::ViewTransform;
