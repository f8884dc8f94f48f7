#![allow(dead_code)]

use keyremap_core::engine::ManualClock;
use keyremap_core::{
    Action, KeyAction, KeyCode, KeyEvent, Layer, MappingTable, ModifierMask, RecordingSink, RemapEngine, SinkEvent,
};

pub type TestEngine = RemapEngine<RecordingSink>;

/// Creates an engine with a recording sink attached and a manual clock
pub fn create_engine(mapping: MappingTable) -> (TestEngine, ManualClock) {
    let clock = ManualClock::new(0);
    let mut engine = RemapEngine::with_clock(mapping, clock.clone());
    engine.start_session(RecordingSink::new());
    (engine, clock)
}

/// Mapping with a single remap on the base layer
pub fn single_remap(from: KeyCode, to: KeyCode) -> MappingTable {
    MappingTable::new().with(Layer::M1, from, Action::key(to))
}

pub fn tap(engine: &mut TestEngine, key: KeyCode, down: u64, up: u64) {
    assert!(engine.on_key_down(key, down));
    assert!(engine.on_key_up(key, up));
}

/// Drain everything the sink has recorded so far
pub fn take_events(engine: &mut TestEngine) -> Vec<SinkEvent> {
    engine.sink_mut().expect("session active").take()
}

/// Drain only key events
pub fn take_key_events(engine: &mut TestEngine) -> Vec<KeyEvent> {
    take_events(engine)
        .into_iter()
        .filter_map(|e| match e {
            SinkEvent::Key(event) => Some(event),
            SinkEvent::Text(_) => None,
        })
        .collect()
}

pub fn down(key: KeyCode, time: u64, meta: ModifierMask) -> KeyEvent {
    KeyEvent::down(key, time, time, meta)
}

pub fn up(key: KeyCode, down_time: u64, time: u64, meta: ModifierMask) -> KeyEvent {
    KeyEvent::up(key, down_time, time, meta)
}

pub fn shift_left() -> ModifierMask {
    ModifierMask::SHIFT | ModifierMask::SHIFT_LEFT
}

/// DOWN and UP counts per key must match
pub fn assert_balanced(events: &[KeyEvent]) {
    use std::collections::HashMap;
    let mut open: HashMap<KeyCode, i32> = HashMap::new();
    for event in events {
        let count = open.entry(event.key_code).or_default();
        match event.action {
            KeyAction::Down => *count += 1,
            KeyAction::Up => *count -= 1,
        }
    }
    for (key, count) in open {
        assert_eq!(count, 0, "unbalanced DOWN/UP for {}", key);
    }
}
