//! Transition table keyed by `(state, symbol)`.
//!
//! Symbols look like `"C-Ldrag move"`: a canonical modifier prefix, a
//! token, a space and a phase. A pattern written with a leading `*`
//! (`"*Lbutton pressed"`) ignores the modifier prefix; the prefix is split
//! off the incoming symbol at lookup time.

use rustc_hash::FxHashMap;

use super::state::GestureState;
use crate::input::keys::split_modifiers;
use crate::input::KeyAction;
use crate::options::KeybindingOptions;

/// What a transition does besides changing state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureAction {
    /// Return the camera to its home axes.
    Home,
    /// Flip perspective/orthogonal.
    ToggleProjection,
    /// Record the drag anchor.
    BeginDrag,
    /// Orbit by the cursor delta.
    Rotate,
    /// Roll by the angle swept around the viewport center.
    Tilt,
    /// Pan by the cursor delta.
    Shift,
    /// Dolly by the cursor delta.
    DragZoom,
    /// Change fov by the cursor delta.
    DragMagnify,
    /// One wheel notch closer.
    ScrollZoomIn,
    /// One wheel notch farther.
    ScrollZoomOut,
    /// Release the drag anchor.
    EndDrag,
}

/// Target state and action of one table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// State after the transition.
    pub next: GestureState,
    /// Action to run.
    pub action: GestureAction,
}

/// Symbol-driven transition table.
#[derive(Debug, Clone, Default)]
pub struct TransitionTable {
    exact: FxHashMap<GestureState, FxHashMap<String, Transition>>,
    any_modifiers: FxHashMap<GestureState, FxHashMap<String, Transition>>,
}

impl TransitionTable {
    /// Empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard viewport table, with key rows taken from `keys`.
    #[must_use]
    pub fn standard(keys: &KeybindingOptions) -> Self {
        use self::GestureAction as A;
        use super::state::GestureState::{DraggingLeft, DraggingRight, Idle};

        let mut table = Self::new();
        table.insert(Idle, "*Lbutton pressed", DraggingLeft, A::BeginDrag);
        table.insert(Idle, "*Rbutton pressed", DraggingRight, A::BeginDrag);
        table.insert(Idle, "C-wheelup pressed", Idle, A::ScrollZoomIn);
        table.insert(Idle, "C-wheeldown pressed", Idle, A::ScrollZoomOut);

        table.insert(DraggingLeft, "Ldrag move", DraggingLeft, A::Rotate);
        table.insert(DraggingLeft, "M-Ldrag move", DraggingLeft, A::Tilt);
        table.insert(DraggingLeft, "S-Ldrag move", DraggingLeft, A::Shift);
        table.insert(DraggingLeft, "C-Ldrag move", DraggingLeft, A::DragZoom);
        table.insert(DraggingLeft, "*Lbutton released", Idle, A::EndDrag);

        table.insert(
            DraggingRight,
            "C-Rdrag move",
            DraggingRight,
            A::DragMagnify,
        );
        table.insert(DraggingRight, "*Rbutton released", Idle, A::EndDrag);

        for (key_action, action) in [
            (KeyAction::Home, A::Home),
            (KeyAction::ToggleProjection, A::ToggleProjection),
        ] {
            if let Some(key) = keys.key_for(key_action) {
                table.insert(Idle, &format!("{key} pressed"), Idle, action);
            }
        }
        table
    }

    /// Add or replace an entry. A leading `*` in `pattern` matches any
    /// modifier prefix.
    pub fn insert(
        &mut self,
        state: GestureState,
        pattern: &str,
        next: GestureState,
        action: GestureAction,
    ) {
        let transition = Transition { next, action };
        let (rows, symbol) = match pattern.strip_prefix('*') {
            Some(rest) => (&mut self.any_modifiers, rest),
            None => (&mut self.exact, pattern),
        };
        let replaced = rows
            .entry(state)
            .or_default()
            .insert(symbol.to_owned(), transition);
        if let Some(old) = replaced {
            log::debug!("{state:?} `{pattern}` rebound (was {old:?})");
        }
    }

    /// Transition for `symbol` in `state`. Exact patterns win over
    /// wildcard ones.
    #[must_use]
    pub fn lookup(&self, state: GestureState, symbol: &str) -> Option<Transition> {
        if let Some(t) = self.exact.get(&state).and_then(|rows| rows.get(symbol)) {
            return Some(*t);
        }
        let (_, rest) = split_modifiers(symbol);
        self.any_modifiers
            .get(&state)
            .and_then(|rows| rows.get(rest))
            .copied()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.exact
            .values()
            .chain(self.any_modifiers.values())
            .map(FxHashMap::len)
            .sum()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::GestureState::{DraggingLeft, DraggingRight, Idle};
    use super::*;

    fn standard() -> TransitionTable {
        TransitionTable::standard(&KeybindingOptions::default())
    }

    #[test]
    fn standard_table_has_every_row() {
        assert_eq!(standard().len(), 13);
    }

    #[test]
    fn wildcard_matches_any_prefix() {
        let table = standard();
        for symbol in [
            "Lbutton pressed",
            "C-Lbutton pressed",
            "C-M-S-Lbutton pressed",
        ] {
            assert_eq!(
                table.lookup(Idle, symbol),
                Some(Transition {
                    next: DraggingLeft,
                    action: GestureAction::BeginDrag,
                }),
                "{symbol}"
            );
        }
        assert_eq!(
            table.lookup(DraggingRight, "S-Rbutton released").map(|t| t.next),
            Some(Idle)
        );
    }

    #[test]
    fn exact_rows_require_their_prefix() {
        let table = standard();
        assert_eq!(
            table.lookup(DraggingLeft, "M-Ldrag move").map(|t| t.action),
            Some(GestureAction::Tilt)
        );
        assert_eq!(
            table.lookup(DraggingLeft, "Ldrag move").map(|t| t.action),
            Some(GestureAction::Rotate)
        );
        assert_eq!(table.lookup(DraggingLeft, "C-S-Ldrag move"), None);
        assert_eq!(table.lookup(Idle, "wheelup pressed"), None);
        assert_eq!(table.lookup(DraggingRight, "Rdrag move"), None);
    }

    #[test]
    fn rows_are_scoped_to_state() {
        let table = standard();
        assert_eq!(table.lookup(DraggingLeft, "home pressed"), None);
        assert_eq!(table.lookup(DraggingLeft, "Rbutton released"), None);
        assert_eq!(table.lookup(Idle, "Ldrag move"), None);
    }

    #[test]
    fn exact_beats_wildcard() {
        let mut table = standard();
        table.insert(Idle, "S-Lbutton pressed", Idle, GestureAction::Home);
        assert_eq!(
            table.lookup(Idle, "S-Lbutton pressed").map(|t| t.action),
            Some(GestureAction::Home)
        );
        assert_eq!(
            table.lookup(Idle, "C-Lbutton pressed").map(|t| t.action),
            Some(GestureAction::BeginDrag)
        );
    }

    #[test]
    fn key_rows_follow_bindings() {
        let mut keys = KeybindingOptions::default();
        let _ = keys.bindings.insert(KeyAction::Home, "ctrl+h".into());
        keys.rebuild_reverse_map();
        let table = TransitionTable::standard(&keys);
        assert_eq!(table.lookup(Idle, "home pressed"), None);
        assert_eq!(
            table.lookup(Idle, "C-h pressed").map(|t| t.action),
            Some(GestureAction::Home)
        );
    }
}
