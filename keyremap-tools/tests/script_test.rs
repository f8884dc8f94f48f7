use keyremap_core::KeyCode;
use keyremap_tools::{parse_script, ScriptCommand, ScriptError};
use pretty_assertions::assert_eq;

#[test]
fn test_bundled_demo_script_parses() {
    let script = parse_script(include_str!("../scripts/caps_layers.keys")).unwrap();
    assert_eq!(script.len(), 14);
    assert_eq!(script.commands[0], ScriptCommand::Down(KeyCode::CAPS_LOCK, 0));
    assert_eq!(script.commands[9], ScriptCommand::Down(KeyCode::DIGIT_1, 110));
    assert_eq!(script.commands[13], ScriptCommand::End);
}

#[test]
fn test_key_name_aliases() {
    let script = parse_script("down KEYCODE_A 1\ndown key_b 2\ndown DIGIT_3 3\n").unwrap();
    assert_eq!(
        script.commands,
        vec![
            ScriptCommand::Down(KeyCode::A, 1),
            ScriptCommand::Down(KeyCode::B, 2),
            ScriptCommand::Down(KeyCode::DIGIT_3, 3),
        ]
    );
}

#[test]
fn test_empty_and_comment_only_scripts() {
    assert!(parse_script("").unwrap().is_empty());
    assert!(parse_script("# nothing\n\n   \n# here").unwrap().is_empty());
}

#[test]
fn test_bom_is_ignored() {
    let script = parse_script("\u{feff}end\n").unwrap();
    assert_eq!(script.commands, vec![ScriptCommand::End]);
}

#[test]
fn test_errors_carry_line_numbers() {
    let cases = [
        ("down A 1\nup A two\n", 2),
        ("down A 1\n\n\nup A 5 6\n", 4),
        ("down\n", 1),
        ("down A 1\nsideways A 2\n", 2),
        ("up UNKNOWN_KEY 1", 1),
    ];

    for (input, line) in cases {
        let err = parse_script(input).unwrap_err();
        assert_eq!(err.line(), line, "input {:?} gave {}", input, err);
    }
}

#[test]
fn test_error_message_format() {
    let err = parse_script("down A 1\ndown NOPE 2\n").unwrap_err();
    assert_eq!(
        err,
        ScriptError::UnknownKey {
            line: 2,
            name: "NOPE".into()
        }
    );
    assert_eq!(err.to_string(), "Line 2: unknown key name 'NOPE'");
}
