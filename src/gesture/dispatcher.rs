//! Turns [`InputEvent`]s into [`ViewCommand`]s.
//!
//! The dispatcher owns all transient input state (held modifiers, the
//! button that opened the current drag, the drag anchor) and the
//! transition table. It never touches the camera itself: it reads the
//! camera for scale (dots per unit, viewport size) and returns the command
//! to apply.

use glam::Vec2;

use super::state::{tilt_angle, DragAnchor, GestureState};
use super::table::{GestureAction, TransitionTable};
use crate::camera::Camera;
use crate::command::ViewCommand;
use crate::input::{InputEvent, Modifiers, MouseButton};
use crate::options::{GestureOptions, KeybindingOptions};

/// Finite-state machine over symbolic event names.
///
/// # Usage
///
/// ```ignore
/// if let Some(cmd) = dispatcher.handle_event(&event, &camera) {
///     stream.execute(cmd);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct GestureDispatcher {
    table: TransitionTable,
    options: GestureOptions,
    state: GestureState,
    modifiers: Modifiers,
    /// Button currently held, if any. Drag symbols are only produced while
    /// one is.
    button: Option<MouseButton>,
    cursor: Vec2,
    anchor: Option<DragAnchor>,
}

impl Default for GestureDispatcher {
    fn default() -> Self {
        Self::new(GestureOptions::default(), &KeybindingOptions::default())
    }
}

impl GestureDispatcher {
    /// Dispatcher over the standard table.
    #[must_use]
    pub fn new(options: GestureOptions, keys: &KeybindingOptions) -> Self {
        Self::with_table(TransitionTable::standard(keys), options)
    }

    /// Dispatcher over a custom table.
    #[must_use]
    pub fn with_table(table: TransitionTable, options: GestureOptions) -> Self {
        Self {
            table,
            options,
            state: GestureState::Idle,
            modifiers: Modifiers::NONE,
            button: None,
            cursor: Vec2::ZERO,
            anchor: None,
        }
    }

    /// Current FSM state.
    #[must_use]
    pub fn state(&self) -> GestureState {
        self.state
    }

    /// Held modifiers as last reported.
    #[must_use]
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Active drag anchor, if a drag is in progress.
    #[must_use]
    pub fn anchor(&self) -> Option<DragAnchor> {
        self.anchor
    }

    /// Read-only access to the transition table.
    #[must_use]
    pub fn table(&self) -> &TransitionTable {
        &self.table
    }

    /// Mutable access to the transition table for reconfiguration.
    pub fn table_mut(&mut self) -> &mut TransitionTable {
        &mut self.table
    }

    /// Process one event and return the command it produced, if any.
    pub fn handle_event(
        &mut self,
        event: &InputEvent,
        camera: &Camera,
    ) -> Option<ViewCommand> {
        let symbol = self.symbol_for(event)?;
        self.dispatch(&symbol, camera)
    }

    /// Normalize an event into its symbol, updating tracked input state.
    /// Returns `None` for events that only update state.
    fn symbol_for(&mut self, event: &InputEvent) -> Option<String> {
        let prefix = self.modifiers.prefix();
        match event {
            InputEvent::ModifiersChanged(mods) => {
                self.modifiers = *mods;
                None
            }
            InputEvent::KeyPressed { key } => {
                Some(format!("{}{key} pressed", self.modifiers.prefix_for(key)))
            }
            InputEvent::KeyReleased { key } => Some(format!(
                "{}{key} released",
                self.modifiers.prefix_for(key)
            )),
            InputEvent::MouseButton {
                button,
                pressed,
                x,
                y,
            } => {
                self.cursor = Vec2::new(*x, *y);
                let phase = if *pressed {
                    self.button = Some(*button);
                    "pressed"
                } else {
                    self.button = None;
                    "released"
                };
                Some(format!("{prefix}{}button {phase}", button.token()))
            }
            InputEvent::CursorMoved { x, y } => {
                self.cursor = Vec2::new(*x, *y);
                let button = self.button?;
                Some(format!("{prefix}{}drag move", button.token()))
            }
            InputEvent::Wheel { direction, x, y } => {
                self.cursor = Vec2::new(*x, *y);
                Some(format!("{prefix}{} pressed", direction.token()))
            }
        }
    }

    fn dispatch(
        &mut self,
        symbol: &str,
        camera: &Camera,
    ) -> Option<ViewCommand> {
        let Some(transition) = self.table.lookup(self.state, symbol) else {
            log::trace!("{:?}: ignored `{symbol}`", self.state);
            return None;
        };
        log::trace!(
            "{:?} --`{symbol}`--> {:?}",
            self.state,
            transition.next
        );
        self.state = transition.next;
        self.run(transition.action, camera)
    }

    fn run(
        &mut self,
        action: GestureAction,
        camera: &Camera,
    ) -> Option<ViewCommand> {
        let cursor = self.cursor;
        match action {
            GestureAction::Home => Some(ViewCommand::Home),
            GestureAction::ToggleProjection => {
                Some(ViewCommand::ToggleProjection)
            }
            GestureAction::ScrollZoomIn => Some(ViewCommand::Zoom {
                rate: self.options.scroll_zoom_rate,
            }),
            GestureAction::ScrollZoomOut => Some(ViewCommand::Zoom {
                rate: 1.0 / self.options.scroll_zoom_rate,
            }),
            GestureAction::BeginDrag => {
                let (width, height) = camera.viewport();
                self.anchor = Some(DragAnchor::new(
                    cursor,
                    Vec2::new(width as f32, height as f32),
                ));
                None
            }
            GestureAction::EndDrag => {
                self.anchor = None;
                Some(ViewCommand::Redraw)
            }
            GestureAction::Rotate => {
                let d = camera.dpu() / self.options.rotate_divisor;
                let delta = self.advance(cursor)?;
                Some(ViewCommand::Rotate {
                    dx: -delta.x / d,
                    dy: delta.y / d,
                })
            }
            GestureAction::Shift => {
                let d = camera.dpu();
                let delta = self.advance(cursor)?;
                Some(ViewCommand::Shift {
                    dx: -delta.x / d,
                    dy: delta.y / d,
                })
            }
            GestureAction::DragZoom => {
                let ds = self.drag_scalar(cursor)?;
                Some(ViewCommand::Zoom { rate: 1.0 + ds })
            }
            GestureAction::DragMagnify => {
                let ds = self.drag_scalar(cursor)?;
                Some(ViewCommand::Magnify { angle: ds })
            }
            GestureAction::Tilt => self.tilt(cursor),
        }
    }

    /// Delta since the last step; moves the anchor to `cursor`.
    fn advance(&mut self, cursor: Vec2) -> Option<Vec2> {
        let anchor = self.anchor.as_mut()?;
        let delta = anchor.delta(cursor);
        anchor.last = cursor;
        Some(delta)
    }

    /// Right/up drag distance in drag-scale units: `(Δx - Δy) / scale`
    /// with screen y growing downward.
    fn drag_scalar(&mut self, cursor: Vec2) -> Option<f32> {
        let delta = self.advance(cursor)?;
        Some((delta.x - delta.y) / self.options.drag_scale)
    }

    fn tilt(&mut self, cursor: Vec2) -> Option<ViewCommand> {
        let dead_zone = self.options.tilt_dead_zone;
        let anchor = self.anchor.as_mut()?;
        let current = DragAnchor::relative(cursor, anchor.center);
        if current.length_squared() < dead_zone {
            return None;
        }
        let angle = tilt_angle(anchor.reference, current);
        anchor.last = cursor;
        anchor.reference = current;
        Some(ViewCommand::Tilt { angle })
    }
}
