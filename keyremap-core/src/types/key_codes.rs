use std::fmt;

/// Opaque key identifier as delivered by the host.
///
/// Values follow the host platform's key code numbering. The engine only ever
/// compares them for identity; the named constants below exist for mapping
/// files, triggers and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyCode(pub u16);

impl KeyCode {
    pub const UNKNOWN: Self = Self(0);

    // Digits
    pub const DIGIT_0: Self = Self(7);
    pub const DIGIT_1: Self = Self(8);
    pub const DIGIT_2: Self = Self(9);
    pub const DIGIT_3: Self = Self(10);
    pub const DIGIT_4: Self = Self(11);
    pub const DIGIT_5: Self = Self(12);
    pub const DIGIT_6: Self = Self(13);
    pub const DIGIT_7: Self = Self(14);
    pub const DIGIT_8: Self = Self(15);
    pub const DIGIT_9: Self = Self(16);
    pub const STAR: Self = Self(17);
    pub const POUND: Self = Self(18);

    // Navigation
    pub const DPAD_UP: Self = Self(19);
    pub const DPAD_DOWN: Self = Self(20);
    pub const DPAD_LEFT: Self = Self(21);
    pub const DPAD_RIGHT: Self = Self(22);

    // Letters
    pub const A: Self = Self(29);
    pub const B: Self = Self(30);
    pub const C: Self = Self(31);
    pub const D: Self = Self(32);
    pub const E: Self = Self(33);
    pub const F: Self = Self(34);
    pub const G: Self = Self(35);
    pub const H: Self = Self(36);
    pub const I: Self = Self(37);
    pub const J: Self = Self(38);
    pub const K: Self = Self(39);
    pub const L: Self = Self(40);
    pub const M: Self = Self(41);
    pub const N: Self = Self(42);
    pub const O: Self = Self(43);
    pub const P: Self = Self(44);
    pub const Q: Self = Self(45);
    pub const R: Self = Self(46);
    pub const S: Self = Self(47);
    pub const T: Self = Self(48);
    pub const U: Self = Self(49);
    pub const V: Self = Self(50);
    pub const W: Self = Self(51);
    pub const X: Self = Self(52);
    pub const Y: Self = Self(53);
    pub const Z: Self = Self(54);

    // Punctuation and editing
    pub const COMMA: Self = Self(55);
    pub const PERIOD: Self = Self(56);
    pub const ALT_LEFT: Self = Self(57);
    pub const ALT_RIGHT: Self = Self(58);
    pub const SHIFT_LEFT: Self = Self(59);
    pub const SHIFT_RIGHT: Self = Self(60);
    pub const TAB: Self = Self(61);
    pub const SPACE: Self = Self(62);
    pub const ENTER: Self = Self(66);
    pub const DEL: Self = Self(67);
    pub const GRAVE: Self = Self(68);
    pub const MINUS: Self = Self(69);
    pub const EQUALS: Self = Self(70);
    pub const LEFT_BRACKET: Self = Self(71);
    pub const RIGHT_BRACKET: Self = Self(72);
    pub const BACKSLASH: Self = Self(73);
    pub const SEMICOLON: Self = Self(74);
    pub const APOSTROPHE: Self = Self(75);
    pub const SLASH: Self = Self(76);
    pub const AT: Self = Self(77);
    pub const PLUS: Self = Self(81);
    pub const PAGE_UP: Self = Self(92);
    pub const PAGE_DOWN: Self = Self(93);
    pub const ESCAPE: Self = Self(111);
    pub const FORWARD_DEL: Self = Self(112);
    pub const CTRL_LEFT: Self = Self(113);
    pub const CTRL_RIGHT: Self = Self(114);
    pub const CAPS_LOCK: Self = Self(115);
    pub const MOVE_HOME: Self = Self(122);
    pub const MOVE_END: Self = Self(123);
    pub const INSERT: Self = Self(124);

    // Function keys
    pub const F1: Self = Self(131);
    pub const F2: Self = Self(132);
    pub const F3: Self = Self(133);
    pub const F4: Self = Self(134);
    pub const F5: Self = Self(135);
    pub const F6: Self = Self(136);
    pub const F7: Self = Self(137);
    pub const F8: Self = Self(138);
    pub const F9: Self = Self(139);
    pub const F10: Self = Self(140);
    pub const F11: Self = Self(141);
    pub const F12: Self = Self(142);

    /// Raw host value
    pub fn raw(&self) -> u16 {
        self.0
    }

    /// Resolve a key name from a mapping file.
    ///
    /// Matching is case-insensitive and an optional `KEYCODE_` prefix is
    /// stripped first. Letters also resolve as `KEY_A`, digits as `DIGIT_1`
    /// or `KEY_1`.
    pub fn from_name(name: &str) -> Option<Self> {
        let upper = name.trim().to_ascii_uppercase();
        let bare = upper.strip_prefix("KEYCODE_").unwrap_or(&upper);
        let bare = match bare.strip_prefix("KEY_") {
            Some(rest) if rest.len() == 1 => rest,
            _ => bare,
        };

        if bare.len() == 1 {
            if let Some(digit) = bare.chars().next().and_then(|c| c.to_digit(10)) {
                return Some(Self(Self::DIGIT_0.0 + digit as u16));
            }
        }

        KEY_NAMES
            .iter()
            .find(|(n, _)| *n == bare)
            .map(|(_, code)| *code)
    }

    /// Canonical name, if the code is in the static table
    pub fn name(&self) -> Option<&'static str> {
        KEY_NAMES
            .iter()
            .find(|(_, code)| code == self)
            .map(|(n, _)| *n)
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "#{}", self.0),
        }
    }
}

impl From<u16> for KeyCode {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

/// Static name table. The first entry for a code is its canonical name.
pub static KEY_NAMES: &[(&str, KeyCode)] = &[
    ("DIGIT_0", KeyCode::DIGIT_0),
    ("DIGIT_1", KeyCode::DIGIT_1),
    ("DIGIT_2", KeyCode::DIGIT_2),
    ("DIGIT_3", KeyCode::DIGIT_3),
    ("DIGIT_4", KeyCode::DIGIT_4),
    ("DIGIT_5", KeyCode::DIGIT_5),
    ("DIGIT_6", KeyCode::DIGIT_6),
    ("DIGIT_7", KeyCode::DIGIT_7),
    ("DIGIT_8", KeyCode::DIGIT_8),
    ("DIGIT_9", KeyCode::DIGIT_9),
    ("STAR", KeyCode::STAR),
    ("POUND", KeyCode::POUND),
    ("DPAD_UP", KeyCode::DPAD_UP),
    ("UP", KeyCode::DPAD_UP),
    ("DPAD_DOWN", KeyCode::DPAD_DOWN),
    ("DOWN", KeyCode::DPAD_DOWN),
    ("DPAD_LEFT", KeyCode::DPAD_LEFT),
    ("LEFT", KeyCode::DPAD_LEFT),
    ("DPAD_RIGHT", KeyCode::DPAD_RIGHT),
    ("RIGHT", KeyCode::DPAD_RIGHT),
    ("A", KeyCode::A),
    ("B", KeyCode::B),
    ("C", KeyCode::C),
    ("D", KeyCode::D),
    ("E", KeyCode::E),
    ("F", KeyCode::F),
    ("G", KeyCode::G),
    ("H", KeyCode::H),
    ("I", KeyCode::I),
    ("J", KeyCode::J),
    ("K", KeyCode::K),
    ("L", KeyCode::L),
    ("M", KeyCode::M),
    ("N", KeyCode::N),
    ("O", KeyCode::O),
    ("P", KeyCode::P),
    ("Q", KeyCode::Q),
    ("R", KeyCode::R),
    ("S", KeyCode::S),
    ("T", KeyCode::T),
    ("U", KeyCode::U),
    ("V", KeyCode::V),
    ("W", KeyCode::W),
    ("X", KeyCode::X),
    ("Y", KeyCode::Y),
    ("Z", KeyCode::Z),
    ("COMMA", KeyCode::COMMA),
    ("PERIOD", KeyCode::PERIOD),
    ("ALT_LEFT", KeyCode::ALT_LEFT),
    ("ALT_RIGHT", KeyCode::ALT_RIGHT),
    ("SHIFT_LEFT", KeyCode::SHIFT_LEFT),
    ("SHIFT_RIGHT", KeyCode::SHIFT_RIGHT),
    ("TAB", KeyCode::TAB),
    ("SPACE", KeyCode::SPACE),
    ("ENTER", KeyCode::ENTER),
    ("DEL", KeyCode::DEL),
    ("BACKSPACE", KeyCode::DEL),
    ("GRAVE", KeyCode::GRAVE),
    ("MINUS", KeyCode::MINUS),
    ("EQUALS", KeyCode::EQUALS),
    ("LEFT_BRACKET", KeyCode::LEFT_BRACKET),
    ("RIGHT_BRACKET", KeyCode::RIGHT_BRACKET),
    ("BACKSLASH", KeyCode::BACKSLASH),
    ("SEMICOLON", KeyCode::SEMICOLON),
    ("APOSTROPHE", KeyCode::APOSTROPHE),
    ("SLASH", KeyCode::SLASH),
    ("AT", KeyCode::AT),
    ("PLUS", KeyCode::PLUS),
    ("PAGE_UP", KeyCode::PAGE_UP),
    ("PAGE_DOWN", KeyCode::PAGE_DOWN),
    ("ESCAPE", KeyCode::ESCAPE),
    ("ESC", KeyCode::ESCAPE),
    ("FORWARD_DEL", KeyCode::FORWARD_DEL),
    ("DELETE", KeyCode::FORWARD_DEL),
    ("CTRL_LEFT", KeyCode::CTRL_LEFT),
    ("CTRL_RIGHT", KeyCode::CTRL_RIGHT),
    ("CAPS_LOCK", KeyCode::CAPS_LOCK),
    ("CAPS", KeyCode::CAPS_LOCK),
    ("MOVE_HOME", KeyCode::MOVE_HOME),
    ("HOME", KeyCode::MOVE_HOME),
    ("MOVE_END", KeyCode::MOVE_END),
    ("END", KeyCode::MOVE_END),
    ("INSERT", KeyCode::INSERT),
    ("F1", KeyCode::F1),
    ("F2", KeyCode::F2),
    ("F3", KeyCode::F3),
    ("F4", KeyCode::F4),
    ("F5", KeyCode::F5),
    ("F6", KeyCode::F6),
    ("F7", KeyCode::F7),
    ("F8", KeyCode::F8),
    ("F9", KeyCode::F9),
    ("F10", KeyCode::F10),
    ("F11", KeyCode::F11),
    ("F12", KeyCode::F12),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_plain_names() {
        assert_eq!(KeyCode::from_name("A"), Some(KeyCode::A));
        assert_eq!(KeyCode::from_name("SPACE"), Some(KeyCode::SPACE));
        assert_eq!(KeyCode::from_name("CAPS_LOCK"), Some(KeyCode::CAPS_LOCK));
    }

    #[test]
    fn test_resolve_prefixed_and_aliased_names() {
        assert_eq!(KeyCode::from_name("KEYCODE_A"), Some(KeyCode::A));
        assert_eq!(KeyCode::from_name("KEY_A"), Some(KeyCode::A));
        assert_eq!(KeyCode::from_name("key_z"), Some(KeyCode::Z));
        assert_eq!(KeyCode::from_name("KEYCODE_DPAD_LEFT"), Some(KeyCode::DPAD_LEFT));
        assert_eq!(KeyCode::from_name("backspace"), Some(KeyCode::DEL));
    }

    #[test]
    fn test_resolve_digits() {
        assert_eq!(KeyCode::from_name("DIGIT_1"), Some(KeyCode::DIGIT_1));
        assert_eq!(KeyCode::from_name("KEY_1"), Some(KeyCode::DIGIT_1));
        assert_eq!(KeyCode::from_name("KEYCODE_9"), Some(KeyCode::DIGIT_9));
        assert_eq!(KeyCode::from_name("0"), Some(KeyCode::DIGIT_0));
    }

    #[test]
    fn test_unknown_names() {
        assert_eq!(KeyCode::from_name(""), None);
        assert_eq!(KeyCode::from_name("KEY_"), None);
        assert_eq!(KeyCode::from_name("NOT_A_KEY"), None);
        assert_eq!(KeyCode::from_name("KEY_AB"), None);
    }

    #[test]
    fn test_canonical_name_round_trip() {
        for (name, code) in KEY_NAMES {
            let canonical = code.name().unwrap();
            assert_eq!(KeyCode::from_name(canonical), Some(*code), "{}", name);
        }
        assert_eq!(KeyCode::DEL.name(), Some("DEL"));
        assert_eq!(KeyCode(999).to_string(), "#999");
    }
}
