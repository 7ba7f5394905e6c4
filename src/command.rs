//! The viewport's complete interactive vocabulary.
//!
//! Every camera change, whether triggered by a key press, a mouse gesture
//! or a programmatic call, is represented as a `ViewCommand`. The gesture
//! dispatcher produces them; [`Stream::execute`](crate::Stream::execute)
//! applies them.

use serde::{Deserialize, Serialize};

/// A camera operation plus the redraw it implies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViewCommand {
    /// Return to the home axes around the origin.
    Home,
    /// Orbit by logical offsets.
    Rotate {
        /// Offset along right.
        dx: f32,
        /// Offset along up.
        dy: f32,
    },
    /// Pan the focus by logical offsets.
    Shift {
        /// Offset along right.
        dx: f32,
        /// Offset along up.
        dy: f32,
    },
    /// Roll about the view axis.
    Tilt {
        /// Radians, counter-clockwise on screen.
        angle: f32,
    },
    /// Dolly by a distance divisor.
    Zoom {
        /// `> 1` moves closer.
        rate: f32,
    },
    /// Change the field of view.
    Magnify {
        /// Radians added to fovy.
        angle: f32,
    },
    /// Flip perspective/orthogonal.
    ToggleProjection,
    /// Nothing to change, but the frame is stale.
    Redraw,
}
