use std::collections::{BTreeMap, HashMap};
use std::fmt;

use super::{KeyCode, ModifierMask};

/// Remapping context selected from the held triggers and the real Shift key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Layer {
    M1,     // base
    M2,     // Shift
    M3,     // Caps or AE
    M4,     // Grave
    M5,     // Caps + Shift
    M6,     // Caps + Grave
}

impl Layer {
    pub const ALL: [Layer; 6] = [Layer::M1, Layer::M2, Layer::M3, Layer::M4, Layer::M5, Layer::M6];

    /// Parse a layer id as written in mapping files ("M1".."M6")
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "M1" => Some(Layer::M1),
            "M2" => Some(Layer::M2),
            "M3" => Some(Layer::M3),
            "M4" => Some(Layer::M4),
            "M5" => Some(Layer::M5),
            "M6" => Some(Layer::M6),
            _ => None,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Layer::M1 => "M1",
            Layer::M2 => "M2",
            Layer::M3 => "M3",
            Layer::M4 => "M4",
            Layer::M5 => "M5",
            Layer::M6 => "M6",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// One press of a sequence: modifiers held around a single key tap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub key: KeyCode,
    pub modifiers: ModifierMask,
}

impl Step {
    pub fn new(key: KeyCode, modifiers: ModifierMask) -> Self {
        Self { key, modifiers }
    }

    pub fn plain(key: KeyCode) -> Self {
        Self::new(key, ModifierMask::empty())
    }
}

/// What a source key produces on a given layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Emit `target` instead of the source key, with extra modifiers OR-ed in
    KeyCode { target: KeyCode, modifiers: ModifierMask },
    /// Commit literal text
    Text(String),
    /// Synthesize a chord for every step, in order
    Sequence(Vec<Step>),
}

impl Action {
    pub fn key(target: KeyCode) -> Self {
        Action::KeyCode { target, modifiers: ModifierMask::empty() }
    }

    pub fn key_with(target: KeyCode, modifiers: ModifierMask) -> Self {
        Action::KeyCode { target, modifiers }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Action::Text(text.into())
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::KeyCode { target, modifiers } if modifiers.is_empty() => {
                write!(f, "KEYCODE {}", target)
            }
            Action::KeyCode { target, modifiers } => {
                write!(f, "KEYCODE {} meta={:#06x}", target, modifiers.bits())
            }
            Action::Text(text) => write!(f, "TEXT {:?}", text),
            Action::Sequence(steps) => {
                write!(f, "SEQUENCE [")?;
                for (i, step) in steps.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    if step.modifiers.is_empty() {
                        write!(f, "{}", step.key)?;
                    } else {
                        write!(f, "{} meta={:#06x}", step.key, step.modifiers.bits())?;
                    }
                }
                write!(f, "]")
            }
        }
    }
}

/// Per-layer lookup from source key to action.
///
/// Read-only once handed to the engine. Layers other than M1 may be sparse;
/// `lookup` falls back to M1 for keys they do not override.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MappingTable {
    layers: BTreeMap<Layer, HashMap<KeyCode, Action>>,
}

impl MappingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the entry for `key` on `layer`
    pub fn insert(&mut self, layer: Layer, key: KeyCode, action: Action) -> Option<Action> {
        self.layers.entry(layer).or_default().insert(key, action)
    }

    /// Builder-style `insert`
    pub fn with(mut self, layer: Layer, key: KeyCode, action: Action) -> Self {
        self.insert(layer, key, action);
        self
    }

    /// Exact entry on one layer, without fallback
    pub fn get(&self, layer: Layer, key: KeyCode) -> Option<&Action> {
        self.layers.get(&layer).and_then(|entries| entries.get(&key))
    }

    /// Entry on `layer`, falling back to the base layer
    pub fn lookup(&self, layer: Layer, key: KeyCode) -> Option<&Action> {
        match self.get(layer, key) {
            Some(action) => Some(action),
            None if layer != Layer::M1 => self.get(Layer::M1, key),
            None => None,
        }
    }

    /// Entries of one layer sorted by source key
    pub fn entries(&self, layer: Layer) -> Vec<(KeyCode, &Action)> {
        let mut entries: Vec<_> = self
            .layers
            .get(&layer)
            .map(|e| e.iter().map(|(k, a)| (*k, a)).collect())
            .unwrap_or_default();
        entries.sort_by_key(|(k, _)| *k);
        entries
    }

    pub fn layer_len(&self, layer: Layer) -> usize {
        self.layers.get(&layer).map_or(0, |e| e.len())
    }

    pub fn len(&self) -> usize {
        self.layers.values().map(|e| e.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
