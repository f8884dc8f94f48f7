use super::layer::{resolve_layer, TriggerHold};
use super::modifiers::ModifierCoordinator;
use super::tracker::KeyTracker;
use crate::types::{KeyCode, Layer, ModifierMask};

/// All session-scoped state of one engine instance
#[derive(Debug, Clone, Default)]
pub struct EngineState {
    /// Physically held non-trigger keys
    pub keys: KeyTracker,
    /// Real-modifier state machine
    pub modifiers: ModifierCoordinator,
    /// Trigger hold flags
    pub triggers: TriggerHold,
}

impl EngineState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether either Shift key is physically held, emitted or not
    pub fn shift_held(&self) -> bool {
        self.keys.is_held(KeyCode::SHIFT_LEFT) || self.keys.is_held(KeyCode::SHIFT_RIGHT)
    }

    pub fn active_layer(&self) -> Layer {
        resolve_layer(self.triggers, self.shift_held())
    }

    pub fn modifier_mask(&self) -> ModifierMask {
        self.modifiers.mask()
    }

    /// True when nothing is held, sent or suppressed
    pub fn is_clear(&self) -> bool {
        self.keys.is_empty() && self.modifiers.is_idle() && !self.triggers.any()
    }

    /// Drop everything without emitting
    pub fn reset(&mut self) {
        self.keys.clear();
        self.modifiers.reset();
        self.triggers = TriggerHold::default();
    }
}
