use keyremap_core::{KeyCode, KeyEvent, MappingLoader, ModifierMask, SinkEvent};
use keyremap_tools::{load_mapping, parse_script, Replayer};
use pretty_assertions::assert_eq;

const MAPPING: &str = r#"{
    "M3": { "A": { "type": "TEXT", "text": "ä" } },
    "M4": { "DIGIT_1": { "type": "SEQUENCE", "steps": [ { "key": "DIGIT_1", "modifiers": ["SHIFT"] } ] } },
    "M5": { "A": { "type": "TEXT", "text": "Ä" } }
}"#;

fn key(event: KeyEvent) -> SinkEvent {
    SinkEvent::Key(event)
}

#[test]
fn test_demo_script_end_to_end() {
    let table = MappingLoader::load_str(MAPPING).unwrap().table;
    let script = parse_script(include_str!("../scripts/caps_layers.keys")).unwrap();

    let events = Replayer::new(table).run(&script);

    let shift = ModifierMask::SHIFT | ModifierMask::SHIFT_LEFT;
    assert_eq!(
        events,
        vec![
            SinkEvent::Text("ä".into()),
            SinkEvent::Text("Ä".into()),
            key(KeyEvent::down(KeyCode::SHIFT_LEFT, 110, 110, shift)),
            key(KeyEvent::down(KeyCode::DIGIT_1, 110, 110, shift)),
            key(KeyEvent::up(KeyCode::DIGIT_1, 110, 110, shift)),
            key(KeyEvent::up(KeyCode::SHIFT_LEFT, 110, 110, shift)),
            key(KeyEvent::down(KeyCode::CTRL_LEFT, 200, 200, ModifierMask::empty())),
            key(KeyEvent::up(KeyCode::CTRL_LEFT, 200, 200, ModifierMask::empty())),
        ]
    );
}

#[test]
fn test_passthrough_without_mapping() {
    let script = parse_script("down X 5\nup X 9\n").unwrap();
    let events = Replayer::new(Default::default()).run(&script);

    assert_eq!(
        events,
        vec![
            key(KeyEvent::down(KeyCode::X, 5, 5, ModifierMask::empty())),
            key(KeyEvent::up(KeyCode::X, 5, 9, ModifierMask::empty())),
        ]
    );
}

#[test]
fn test_session_restarts_after_end() {
    let script = parse_script("down CAPS_LOCK 0\nend\ndown A 10\nup A 20\n").unwrap();
    let table = MappingLoader::load_str(MAPPING).unwrap().table;
    let events = Replayer::new(table).run(&script);

    // Caps was forgotten with the old session, so A is back on the base layer
    assert_eq!(
        events,
        vec![
            key(KeyEvent::down(KeyCode::A, 10, 10, ModifierMask::empty())),
            key(KeyEvent::up(KeyCode::A, 10, 20, ModifierMask::empty())),
        ]
    );
}

#[test]
fn test_missing_mapping_file_uses_bundled_default() {
    let loaded = load_mapping(Some(std::path::Path::new("/nonexistent/keyremap.json")));
    assert!(!loaded.table.is_empty());
    assert_eq!(loaded.table, load_mapping(None).table);
}
