use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::{keys::regulate_key, KeyAction};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping actions to key names.
///
/// Key names use the dispatcher's canonical spelling (`"home"`, `"p"`,
/// `"C-home"`). Toolkit-style spellings such as `"ctrl+home"` are
/// normalized when the reverse map is built.
pub struct KeybindingOptions {
    /// Maps action → key name (e.g. `Home` → `"home"`).
    pub bindings: HashMap<KeyAction, String>,
    /// Reverse lookup cache (key name → action). Rebuilt on load.
    #[serde(skip)]
    key_to_action: HashMap<String, KeyAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (KeyAction::Home, "home".into()),
            (KeyAction::ToggleProjection, "p".into()),
        ]);

        let mut opts = Self {
            bindings,
            key_to_action: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl KeybindingOptions {
    /// Rebuild the reverse lookup map (key name → action).
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        for (action, key) in &self.bindings {
            let _ = self.key_to_action.insert(regulate_key(key), *action);
        }
    }

    /// Look up the action for a canonical key name.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.key_to_action.get(key).copied()
    }

    /// Canonical key name bound to `action`, if any.
    #[must_use]
    pub fn key_for(&self, action: KeyAction) -> Option<String> {
        self.bindings.get(&action).map(|key| regulate_key(key))
    }
}
