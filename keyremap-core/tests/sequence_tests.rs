mod common;

use common::*;
use keyremap_core::{Action, KeyCode, Layer, MappingTable, ModifierMask, Step};
use pretty_assertions::assert_eq;

#[test]
fn test_shifted_digit_chord() {
    let mapping = MappingTable::new().with(
        Layer::M4,
        KeyCode::DIGIT_1,
        Action::Sequence(vec![Step::new(KeyCode::DIGIT_1, shift_left())]),
    );
    let (mut engine, clock) = create_engine(mapping);

    engine.on_key_down(KeyCode::GRAVE, 0);
    clock.set(1234);
    assert!(engine.on_key_down(KeyCode::DIGIT_1, 100));

    assert_eq!(
        take_key_events(&mut engine),
        vec![
            down(KeyCode::SHIFT_LEFT, 1234, shift_left()),
            down(KeyCode::DIGIT_1, 1234, shift_left()),
            up(KeyCode::DIGIT_1, 1234, 1234, shift_left()),
            up(KeyCode::SHIFT_LEFT, 1234, 1234, shift_left()),
        ]
    );

    assert!(engine.on_key_up(KeyCode::DIGIT_1, 200));
    assert!(take_events(&mut engine).is_empty());
}

#[test]
fn test_steps_run_in_order_with_own_masks() {
    let ctrl = ModifierMask::CTRL | ModifierMask::CTRL_LEFT;
    let mapping = MappingTable::new().with(
        Layer::M1,
        KeyCode::F1,
        Action::Sequence(vec![
            Step::new(KeyCode::A, ctrl),
            Step::new(KeyCode::C, ctrl),
            Step::plain(KeyCode::MOVE_END),
        ]),
    );
    let (mut engine, clock) = create_engine(mapping);
    clock.set(50);

    // An ambient Shift does not leak into the sequence
    engine.on_key_down(KeyCode::SHIFT_LEFT, 0);
    take_events(&mut engine);
    tap(&mut engine, KeyCode::F1, 10, 20);

    let events = take_key_events(&mut engine);
    assert_eq!(events.len(), 10);
    assert_eq!(events[0], down(KeyCode::CTRL_LEFT, 50, ctrl));
    assert_eq!(events[1], down(KeyCode::A, 50, ctrl));
    assert_eq!(events[4], down(KeyCode::CTRL_LEFT, 50, ctrl));
    assert_eq!(events[5], down(KeyCode::C, 50, ctrl));
    assert_eq!(events[8], down(KeyCode::MOVE_END, 50, ModifierMask::empty()));
    assert_eq!(events[9], up(KeyCode::MOVE_END, 50, 50, ModifierMask::empty()));
    assert_balanced(&events);
}

#[test]
fn test_alt_steps_use_right_alt() {
    let altgr = ModifierMask::ALT | ModifierMask::ALT_RIGHT;
    let alt = ModifierMask::ALT | ModifierMask::ALT_LEFT;
    let mapping = MappingTable::new()
        .with(Layer::M1, KeyCode::Q, Action::Sequence(vec![Step::new(KeyCode::Q, altgr)]))
        .with(Layer::M1, KeyCode::W, Action::Sequence(vec![Step::new(KeyCode::W, alt)]));
    let (mut engine, _clock) = create_engine(mapping);

    tap(&mut engine, KeyCode::Q, 10, 20);
    tap(&mut engine, KeyCode::W, 30, 40);

    let modifier_keys: Vec<KeyCode> = take_key_events(&mut engine)
        .iter()
        .map(|e| e.key_code)
        .filter(|k| *k != KeyCode::Q && *k != KeyCode::W)
        .collect();
    assert_eq!(modifier_keys, vec![KeyCode::ALT_RIGHT; 4]);
}

#[test]
fn test_each_step_takes_its_own_timestamp() {
    use keyremap_core::engine::{Clock, SequenceExecutor};
    use keyremap_core::RecordingSink;
    use std::cell::Cell;

    struct TickingClock(Cell<u64>);

    impl Clock for TickingClock {
        fn now_millis(&self) -> u64 {
            let now = self.0.get();
            self.0.set(now + 10);
            now
        }
    }

    let clock = TickingClock(Cell::new(100));
    let mut sink = RecordingSink::new();
    SequenceExecutor::new(&clock, &mut sink).run(&[
        Step::new(KeyCode::A, shift_left()),
        Step::plain(KeyCode::B),
    ]);

    let times: Vec<u64> = sink.key_events().iter().map(|e| e.event_time).collect();
    assert_eq!(times, vec![100, 100, 100, 100, 110, 110]);
}
