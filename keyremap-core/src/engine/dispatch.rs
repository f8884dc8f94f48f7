use log::{debug, warn};

use super::clock::Clock;
use super::output::{EventSink, KeyEvent};
use super::sequence::SequenceExecutor;
use super::tracker::{HeldKey, PendingRecord};
use crate::types::{Action, KeyCode, Layer, MappingTable, ModifierMask};

/// Applies the mapped action for a non-modifier, non-trigger key
pub struct Dispatcher<'a> {
    mapping: &'a MappingTable,
    clock: &'a dyn Clock,
    sink: &'a mut dyn EventSink,
}

impl<'a> Dispatcher<'a> {
    pub fn new(mapping: &'a MappingTable, clock: &'a dyn Clock, sink: &'a mut dyn EventSink) -> Self {
        Self { mapping, clock, sink }
    }

    /// Handle the DOWN of `key` on `layer` and report what was emitted
    pub fn key_down(&mut self, key: KeyCode, down_time: u64, layer: Layer, mask: ModifierMask) -> PendingRecord {
        match self.mapping.lookup(layer, key) {
            None => {
                debug!("{}: {} passthrough", layer, key);
                self.sink.emit(KeyEvent::down(key, down_time, down_time, mask));
                PendingRecord::Forwarded { mask }
            }
            Some(Action::KeyCode { target, modifiers }) => {
                let mask = mask | *modifiers;
                debug!("{}: {} => {} meta={:#06x}", layer, key, target, mask.bits());
                self.sink.emit(KeyEvent::down(*target, down_time, down_time, mask));
                PendingRecord::Synthesized { target: *target, mask }
            }
            Some(Action::Text(text)) => {
                debug!("{}: {} => text {:?}", layer, key, text);
                self.sink.commit_text(text);
                PendingRecord::Consumed
            }
            Some(Action::Sequence(steps)) => {
                debug!("{}: {} => sequence of {} steps", layer, key, steps.len());
                SequenceExecutor::new(self.clock, &mut *self.sink).run(steps);
                PendingRecord::Consumed
            }
        }
    }

    /// Re-emit the DOWN of a key the host auto-repeats
    pub fn key_repeat(&mut self, key: KeyCode, held: &HeldKey, time: u64) {
        match held.record {
            Some(PendingRecord::Forwarded { mask }) => {
                self.sink.emit(KeyEvent::down(key, held.down_time, time, mask));
            }
            Some(PendingRecord::Synthesized { target, mask }) => {
                self.sink.emit(KeyEvent::down(target, held.down_time, time, mask));
            }
            Some(PendingRecord::Consumed) | None => {}
        }
    }

    /// Mirror the DOWN of `key` on its UP. `held` is `None` when the press was
    /// lost (session reset mid-hold); the UP is then forwarded as-is.
    pub fn key_up(&mut self, key: KeyCode, held: Option<HeldKey>, time: u64, current_mask: ModifierMask) {
        let Some(held) = held else {
            warn!("UP for {} without a recorded press, forwarding", key);
            self.sink.emit(KeyEvent::up(key, time, time, current_mask));
            return;
        };

        match held.record {
            Some(PendingRecord::Forwarded { mask }) => {
                self.sink.emit(KeyEvent::up(key, held.down_time, time, mask));
            }
            Some(PendingRecord::Synthesized { target, mask }) => {
                self.sink.emit(KeyEvent::up(target, held.down_time, time, mask));
            }
            Some(PendingRecord::Consumed) => {}
            None => {
                warn!("UP for {} without a pending record, forwarding", key);
                self.sink.emit(KeyEvent::up(key, held.down_time, time, current_mask));
            }
        }
    }
}
