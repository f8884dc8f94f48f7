use log::debug;

use super::clock::Clock;
use super::output::{EventSink, KeyEvent};
use crate::types::{KeyCode, ModifierMask, Step};

/// Plays chords: for each step, press its modifiers, tap the key, release
/// the modifiers in reverse order.
pub struct SequenceExecutor<'a> {
    clock: &'a dyn Clock,
    sink: &'a mut dyn EventSink,
}

impl<'a> SequenceExecutor<'a> {
    pub fn new(clock: &'a dyn Clock, sink: &'a mut dyn EventSink) -> Self {
        Self { clock, sink }
    }

    pub fn run(&mut self, steps: &[Step]) {
        for step in steps {
            self.run_step(step);
        }
    }

    fn run_step(&mut self, step: &Step) {
        let time = self.clock.now_millis();
        let mask = step.modifiers;
        let modifiers = Self::modifier_keys(mask);
        debug!("Sequence step {} meta={:#06x} at {}", step.key, mask.bits(), time);

        for key in &modifiers {
            self.sink.emit(KeyEvent::down(*key, time, time, mask));
        }
        self.sink.emit(KeyEvent::down(step.key, time, time, mask));
        self.sink.emit(KeyEvent::up(step.key, time, time, mask));
        for key in modifiers.iter().rev() {
            self.sink.emit(KeyEvent::up(*key, time, time, mask));
        }
    }

    /// Physical keys to hold for a step mask. Alt always goes through the
    /// right Alt key so the host does not treat it as a menu Alt.
    fn modifier_keys(mask: ModifierMask) -> Vec<KeyCode> {
        let mut keys = Vec::with_capacity(3);
        if mask.has_shift() {
            keys.push(KeyCode::SHIFT_LEFT);
        }
        if mask.has_ctrl() {
            keys.push(KeyCode::CTRL_LEFT);
        }
        if mask.has_alt() {
            keys.push(KeyCode::ALT_RIGHT);
        }
        keys
    }
}
