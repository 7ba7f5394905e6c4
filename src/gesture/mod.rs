//! Gesture finite-state machine.
//!
//! Raw input is normalized into symbolic event names (`"S-Ldrag move"`,
//! `"*Rbutton released"`), looked up in a per-state transition table, and
//! turned into [`ViewCommand`](crate::ViewCommand)s.

/// Event-to-command dispatcher.
pub mod dispatcher;
/// FSM states and drag anchor bookkeeping.
pub mod state;
/// Symbol-keyed transition table.
pub mod table;

pub use dispatcher::GestureDispatcher;
pub use state::{tilt_angle, DragAnchor, GestureState};
pub use table::{GestureAction, Transition, TransitionTable};
