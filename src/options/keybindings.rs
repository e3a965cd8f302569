use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "BindingTable", into = "BindingTable")]
/// Configurable keyboard bindings mapping actions to key codes.
///
/// In TOML the section is a flat `action = "Key"` table; actions missing
/// from a file keep their default key. An empty string leaves the action
/// unbound. A key drives at most one action: a default binding whose key
/// the file assigns elsewhere is dropped, and among file entries sharing
/// a key the last in action order wins.
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `CycleCameraMode` → `"Tab"`).
    bindings: FxHashMap<KeyAction, String>,
    /// Reverse lookup cache (key string → action).
    key_to_action: FxHashMap<String, KeyAction>,
}

/// On-disk form, sorted so saved presets diff cleanly.
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
struct BindingTable(BTreeMap<KeyAction, String>);

impl From<BindingTable> for KeybindingOptions {
    fn from(table: BindingTable) -> Self {
        let mut opts = Self::default();
        for (action, key) in table.0 {
            opts.bind(action, key);
        }
        opts
    }
}

impl From<KeybindingOptions> for BindingTable {
    fn from(opts: KeybindingOptions) -> Self {
        Self(opts.bindings.into_iter().collect())
    }
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = [
            (KeyAction::MoveForward, "KeyW"),
            (KeyAction::MoveBackward, "KeyS"),
            (KeyAction::MoveLeft, "KeyA"),
            (KeyAction::MoveRight, "KeyD"),
            (KeyAction::MoveUp, "Space"),
            (KeyAction::MoveDown, "ShiftLeft"),
            (KeyAction::CycleCameraMode, "Tab"),
            (KeyAction::ToggleAutoRotate, "KeyR"),
            (KeyAction::ResetCamera, "KeyF"),
            (KeyAction::FirstPerson, "Digit1"),
            (KeyAction::ThirdPerson, "Digit2"),
            (KeyAction::FreeFlight, "Digit3"),
            (KeyAction::Orbit, "Digit4"),
        ]
        .into_iter()
        .map(|(action, key)| (action, key.to_owned()))
        .collect();

        let mut opts = Self {
            bindings,
            key_to_action: FxHashMap::default(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl KeybindingOptions {
    /// Rebuild the reverse lookup map (key string → action).
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        for (action, key) in &self.bindings {
            if !key.is_empty() {
                let _ = self.key_to_action.insert(key.clone(), *action);
            }
        }
    }

    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.key_to_action.get(key).copied()
    }

    /// Key currently bound to an action.
    #[must_use]
    pub fn key_for(&self, action: KeyAction) -> Option<&str> {
        self.bindings
            .get(&action)
            .map(String::as_str)
            .filter(|key| !key.is_empty())
    }

    /// Rebind an action, replacing its previous key.
    ///
    /// Any other action holding `key` loses it and becomes unbound. An
    /// empty `key` just unbinds `action`.
    pub fn bind(&mut self, action: KeyAction, key: impl Into<String>) {
        let key = key.into();
        if !key.is_empty() {
            for (other, bound) in &mut self.bindings {
                if *other != action && *bound == key {
                    log::debug!("{key} moved from {other:?} to {action:?}");
                    bound.clear();
                }
            }
        }
        let _ = self.bindings.insert(action, key);
        self.rebuild_reverse_map();
    }

    /// Remove an action's key.
    pub fn unbind(&mut self, action: KeyAction) {
        self.bind(action, String::new());
    }
}
