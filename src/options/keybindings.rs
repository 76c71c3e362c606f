use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::input::Action;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
/// Configurable keyboard bindings mapping actions to key codes.
///
/// Key strings are winit `KeyCode` debug names (`"KeyW"`, `"Space"`,
/// `"ShiftLeft"`).
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `Jump` → `"Space"`).
    pub bindings: HashMap<Action, String>,
    /// Reverse lookup cache (key string → action). Rebuilt on load.
    #[serde(skip)]
    key_to_action: HashMap<String, Action>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        Self::from_bindings(HashMap::from([
            (Action::MoveForward, "KeyW".into()),
            (Action::MoveBackward, "KeyS".into()),
            (Action::StrafeLeft, "KeyA".into()),
            (Action::StrafeRight, "KeyD".into()),
            (Action::Jump, "Space".into()),
            (Action::SpinModels, "ShiftLeft".into()),
            (Action::Quit, "Escape".into()),
        ]))
    }
}

impl<'de> Deserialize<'de> for KeybindingOptions {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            #[serde(default)]
            bindings: HashMap<Action, String>,
        }

        // Actions missing from the file keep their default key.
        let raw = Raw::deserialize(deserializer)?;
        let mut bindings = KeybindingOptions::default().bindings;
        bindings.extend(raw.bindings);
        Ok(Self::from_bindings(bindings))
    }
}

impl KeybindingOptions {
    fn from_bindings(bindings: HashMap<Action, String>) -> Self {
        let mut opts = Self {
            bindings,
            key_to_action: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }

    /// Rebuild the reverse lookup map (key string → action).
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        for (action, key) in &self.bindings {
            let _ = self.key_to_action.insert(key.clone(), *action);
        }
    }

    /// Rebind `action` to `key`, replacing its previous key.
    pub fn bind(&mut self, action: Action, key: impl Into<String>) {
        let _ = self.bindings.insert(action, key.into());
        self.rebuild_reverse_map();
    }

    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<Action> {
        self.key_to_action.get(key).copied()
    }

    /// Key strings bound to more than one action.
    #[must_use]
    pub fn conflicts(&self) -> Vec<&str> {
        let mut seen = HashMap::new();
        for key in self.bindings.values() {
            *seen.entry(key.as_str()).or_insert(0_u32) += 1;
        }
        let mut keys: Vec<&str> = seen
            .into_iter()
            .filter_map(|(key, count)| (count > 1).then_some(key))
            .collect();
        keys.sort_unstable();
        keys
    }
}
