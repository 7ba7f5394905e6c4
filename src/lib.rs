// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Interactive orbit camera and gesture state machine for 3D viewports.
//!
//! Lookout maps mouse and keyboard gestures into orbit, pan, roll, dolly
//! and field-of-view changes around a logical focus point, and draws an
//! ordered list of scene objects through an abstract render surface.
//!
//! # Key entry points
//!
//! - [`Stream`] - one viewport: camera, gesture state, scene and surface
//! - [`camera::Camera`] - the geometric view state and its operations
//! - [`gesture::GestureDispatcher`] - input events to [`ViewCommand`]s
//! - [`input`] - the normalized [`InputEvent`] and toolkit adapters
//! - [`options::Options`] - runtime configuration (camera, gestures, keys)
//!
//! # Architecture
//!
//! A toolkit adapter translates platform events into [`InputEvent`]s. The
//! dispatcher turns each into a symbol such as `"C-Ldrag move"`, looks it
//! up in a per-state transition table and emits a [`ViewCommand`].
//! [`Stream::execute`] applies the command to the camera and asks the
//! [`render::RenderSurface`] for a frame; repeated requests before that
//! frame collapse into one.

pub mod camera;
pub mod command;
pub mod error;
pub mod gesture;
pub mod input;
pub mod options;
pub mod render;
pub mod scene;
pub mod stream;

pub use camera::{Camera, Projection};
pub use command::ViewCommand;
pub use error::LookoutError;
pub use input::InputEvent;
pub use options::Options;
pub use stream::Stream;
