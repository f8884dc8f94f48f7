use log::{debug, info};

use super::clock::{Clock, MonotonicClock};
use super::dispatch::Dispatcher;
use super::layer::TriggerKeys;
use super::output::EventSink;
use super::state::EngineState;
use crate::types::{KeyCode, Layer, MappingTable, ModifierKey, ModifierMask};

/// The key remapping engine.
///
/// The host calls `on_key_down` / `on_key_up` for every hardware key
/// transition while a session is active. Callbacks run to completion one at a
/// time; the engine owns all of its state.
pub struct RemapEngine<S: EventSink> {
    /// Mapping for the current session
    mapping: MappingTable,
    triggers: TriggerKeys,
    clock: Box<dyn Clock>,
    /// Receiving application, present only during a session
    sink: Option<S>,
    state: EngineState,
}

impl<S: EventSink> RemapEngine<S> {
    /// Create an engine on a real-time clock that follows the host timestamps
    pub fn new(mapping: MappingTable) -> Self {
        Self::with_clock(mapping, MonotonicClock::new())
    }

    pub fn with_clock(mapping: MappingTable, clock: impl Clock + 'static) -> Self {
        Self {
            mapping,
            triggers: TriggerKeys::default(),
            clock: Box::new(clock),
            sink: None,
            state: EngineState::new(),
        }
    }

    /// Use different physical keys as layer triggers
    pub fn with_triggers(mut self, triggers: TriggerKeys) -> Self {
        self.triggers = triggers;
        self
    }

    /// Attach the receiving application. Any previous session is ended first.
    pub fn start_session(&mut self, sink: S) {
        if self.sink.is_some() {
            self.end_session();
        }
        info!("Session started");
        self.sink = Some(sink);
        self.state.reset();
    }

    /// Release stuck modifiers, clear all session state and detach the sink
    pub fn end_session(&mut self) -> Option<S> {
        self.reset_session();
        if self.sink.is_some() {
            info!("Session ended");
        }
        self.sink.take()
    }

    /// Emit an UP for every modifier still down and clear all session state,
    /// keeping the sink attached
    pub fn reset_session(&mut self) {
        let now = self.clock.now_millis();
        if let Some(sink) = self.sink.as_mut() {
            self.state.modifiers.release_all(now, sink);
        }
        self.state.reset();
    }

    /// Swap the mapping table. Keys held across the swap keep their pending
    /// records and are released exactly as they were pressed.
    pub fn reload(&mut self, mapping: MappingTable) {
        info!("Mapping reloaded: {} entries", mapping.len());
        self.mapping = mapping;
    }

    /// Physical key pressed. Returns whether the event was consumed.
    pub fn on_key_down(&mut self, key: KeyCode, time: u64) -> bool {
        let Some(sink) = self.sink.as_mut() else {
            return false;
        };
        self.clock.observe(time);

        if let Some(trigger) = self.triggers.classify(key) {
            debug!("Trigger {:?} down", trigger);
            self.state.triggers.set(trigger, true);
            return true;
        }

        let first_press = self.state.keys.on_physical_down(key, time);

        if let Some(modifier) = ModifierKey::from_key_code(key) {
            let caps_held = self.state.triggers.caps;
            self.state.modifiers.press(modifier, time, caps_held, sink);
            return true;
        }

        let mut dispatcher = Dispatcher::new(&self.mapping, self.clock.as_ref(), sink);

        if !first_press {
            if let Some(held) = self.state.keys.get(key) {
                dispatcher.key_repeat(key, held, time);
            }
            return true;
        }

        let layer = self.state.active_layer();
        let record = dispatcher.key_down(key, time, layer, self.state.modifier_mask());
        self.state.keys.set_record(key, record);
        true
    }

    /// Physical key released. Returns whether the event was consumed.
    pub fn on_key_up(&mut self, key: KeyCode, time: u64) -> bool {
        let Some(sink) = self.sink.as_mut() else {
            return false;
        };
        self.clock.observe(time);

        if let Some(trigger) = self.triggers.classify(key) {
            debug!("Trigger {:?} up", trigger);
            self.state.triggers.set(trigger, false);
            return true;
        }

        let held = self.state.keys.on_physical_up(key);

        if let Some(modifier) = ModifierKey::from_key_code(key) {
            self.state.modifiers.release(modifier, time, sink);
            return true;
        }

        let mask = self.state.modifier_mask();
        Dispatcher::new(&self.mapping, self.clock.as_ref(), sink).key_up(key, held, time, mask);
        true
    }

    pub fn has_session(&self) -> bool {
        self.sink.is_some()
    }

    pub fn active_layer(&self) -> Layer {
        self.state.active_layer()
    }

    pub fn modifier_mask(&self) -> ModifierMask {
        self.state.modifier_mask()
    }

    pub fn mapping(&self) -> &MappingTable {
        &self.mapping
    }

    pub fn sink(&self) -> Option<&S> {
        self.sink.as_ref()
    }

    pub fn sink_mut(&mut self) -> Option<&mut S> {
        self.sink.as_mut()
    }

    /// Get the current engine state (for debugging)
    pub fn state(&self) -> &EngineState {
        &self.state
    }
}
