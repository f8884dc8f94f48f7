//! Real-modifier DOWN/UP protocol, including Shift suppression under Caps.
//!
//! Every modifier key has exactly one state. The active mask is never stored:
//! it is the union of the masks of the keys currently in `SentDown`.

use log::{debug, warn};

use super::output::{EventSink, KeyEvent};
use crate::types::{ModifierKey, ModifierMask};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModifierState {
    #[default]
    Idle,
    /// DOWN was emitted at `down_time`
    SentDown { down_time: u64 },
    /// Shift pressed under Caps: no DOWN went out, swallow the release
    SuppressedNoDown,
    /// Shift was down when Caps suppression hit: UP forced early, swallow the release
    SuppressedSentUp,
}

#[derive(Debug, Clone, Default)]
pub struct ModifierCoordinator {
    states: [ModifierState; 6],
}

impl ModifierCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, key: ModifierKey) -> ModifierState {
        self.states[key.index()]
    }

    /// Mask for forwarded and synthesized events
    pub fn mask(&self) -> ModifierMask {
        ModifierKey::ALL
            .iter()
            .filter(|key| matches!(self.state(**key), ModifierState::SentDown { .. }))
            .fold(ModifierMask::empty(), |mask, key| mask | key.mask())
    }

    /// Handle a physical DOWN (first press or repeat) of a modifier key
    pub fn press(&mut self, key: ModifierKey, time: u64, caps_held: bool, sink: &mut dyn EventSink) {
        let state = self.state(key);

        if key.is_shift() && caps_held {
            match state {
                ModifierState::SentDown { down_time } => {
                    self.set(key, ModifierState::SuppressedSentUp);
                    debug!("{:?} suppressed under Caps, forcing UP", key);
                    sink.emit(KeyEvent::up(key.key_code(), down_time, time, self.mask()));
                }
                ModifierState::Idle => {
                    debug!("{:?} suppressed under Caps", key);
                    self.set(key, ModifierState::SuppressedNoDown);
                }
                ModifierState::SuppressedNoDown | ModifierState::SuppressedSentUp => {}
            }
            return;
        }

        match state {
            ModifierState::Idle => {
                let before = self.mask();
                self.set(key, ModifierState::SentDown { down_time: time });
                sink.emit(KeyEvent::down(key.key_code(), time, time, before));
            }
            // Suppression lasts until the key itself is released, even when
            // Caps has been let go in the meantime.
            ModifierState::SentDown { .. }
            | ModifierState::SuppressedNoDown
            | ModifierState::SuppressedSentUp => {}
        }
    }

    /// Handle a physical UP of a modifier key
    pub fn release(&mut self, key: ModifierKey, time: u64, sink: &mut dyn EventSink) {
        match self.state(key) {
            ModifierState::SentDown { down_time } => {
                self.set(key, ModifierState::Idle);
                sink.emit(KeyEvent::up(key.key_code(), down_time, time, self.mask()));
            }
            ModifierState::SuppressedNoDown | ModifierState::SuppressedSentUp => {
                debug!("{:?} released while suppressed, swallowing", key);
                self.set(key, ModifierState::Idle);
            }
            ModifierState::Idle => {
                warn!("{:?} released without a recorded press, forwarding UP", key);
                sink.emit(KeyEvent::up(key.key_code(), time, time, self.mask()));
            }
        }
    }

    /// Emit an UP for every modifier still sent down and return to idle
    pub fn release_all(&mut self, time: u64, sink: &mut dyn EventSink) {
        for key in ModifierKey::ALL {
            if let ModifierState::SentDown { down_time } = self.state(key) {
                self.set(key, ModifierState::Idle);
                debug!("Releasing stuck {:?}", key);
                sink.emit(KeyEvent::up(key.key_code(), down_time, time, self.mask()));
            }
        }
        self.reset();
    }

    pub fn reset(&mut self) {
        self.states = [ModifierState::Idle; 6];
    }

    pub fn is_idle(&self) -> bool {
        self.states.iter().all(|s| *s == ModifierState::Idle)
    }

    fn set(&mut self, key: ModifierKey, state: ModifierState) {
        self.states[key.index()] = state;
    }
}
