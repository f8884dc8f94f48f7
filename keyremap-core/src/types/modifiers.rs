use bitflags::bitflags;

use super::KeyCode;

bitflags! {
    /// Meta state attached to every emitted key event.
    ///
    /// Bit values follow the host meta-state layout so the mask can be handed
    /// to the host unchanged.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ModifierMask: u32 {
        const SHIFT = 0x0001;
        const ALT = 0x0002;
        const ALT_LEFT = 0x0010;
        const ALT_RIGHT = 0x0020;
        const SHIFT_LEFT = 0x0040;
        const SHIFT_RIGHT = 0x0080;
        const CTRL = 0x1000;
        const CTRL_LEFT = 0x2000;
        const CTRL_RIGHT = 0x4000;
    }
}

impl ModifierMask {
    /// Modifier names accepted in mapping files. Each name selects the
    /// generic bit together with the side the synthesized key is pressed on.
    pub fn from_config_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_uppercase().as_str() {
            "SHIFT" => Some(Self::SHIFT | Self::SHIFT_LEFT),
            "CTRL" | "CONTROL" => Some(Self::CTRL | Self::CTRL_LEFT),
            "ALT" => Some(Self::ALT | Self::ALT_LEFT),
            "ALTGR" | "ALT_GR" => Some(Self::ALT | Self::ALT_RIGHT),
            _ => None,
        }
    }

    pub fn has_shift(&self) -> bool {
        self.contains(Self::SHIFT)
    }

    pub fn has_ctrl(&self) -> bool {
        self.contains(Self::CTRL)
    }

    pub fn has_alt(&self) -> bool {
        self.contains(Self::ALT)
    }
}

/// The real modifier keys the engine forwards and tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModifierKey {
    ShiftLeft,
    ShiftRight,
    CtrlLeft,
    CtrlRight,
    AltLeft,
    AltRight,
}

impl ModifierKey {
    pub const ALL: [ModifierKey; 6] = [
        ModifierKey::ShiftLeft,
        ModifierKey::ShiftRight,
        ModifierKey::CtrlLeft,
        ModifierKey::CtrlRight,
        ModifierKey::AltLeft,
        ModifierKey::AltRight,
    ];

    pub fn from_key_code(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::SHIFT_LEFT => Some(ModifierKey::ShiftLeft),
            KeyCode::SHIFT_RIGHT => Some(ModifierKey::ShiftRight),
            KeyCode::CTRL_LEFT => Some(ModifierKey::CtrlLeft),
            KeyCode::CTRL_RIGHT => Some(ModifierKey::CtrlRight),
            KeyCode::ALT_LEFT => Some(ModifierKey::AltLeft),
            KeyCode::ALT_RIGHT => Some(ModifierKey::AltRight),
            _ => None,
        }
    }

    pub fn key_code(self) -> KeyCode {
        match self {
            ModifierKey::ShiftLeft => KeyCode::SHIFT_LEFT,
            ModifierKey::ShiftRight => KeyCode::SHIFT_RIGHT,
            ModifierKey::CtrlLeft => KeyCode::CTRL_LEFT,
            ModifierKey::CtrlRight => KeyCode::CTRL_RIGHT,
            ModifierKey::AltLeft => KeyCode::ALT_LEFT,
            ModifierKey::AltRight => KeyCode::ALT_RIGHT,
        }
    }

    /// Contribution of this key to the active mask while it is sent down
    pub fn mask(self) -> ModifierMask {
        match self {
            ModifierKey::ShiftLeft => ModifierMask::SHIFT | ModifierMask::SHIFT_LEFT,
            ModifierKey::ShiftRight => ModifierMask::SHIFT | ModifierMask::SHIFT_RIGHT,
            ModifierKey::CtrlLeft => ModifierMask::CTRL | ModifierMask::CTRL_LEFT,
            ModifierKey::CtrlRight => ModifierMask::CTRL | ModifierMask::CTRL_RIGHT,
            ModifierKey::AltLeft => ModifierMask::ALT | ModifierMask::ALT_LEFT,
            ModifierKey::AltRight => ModifierMask::ALT | ModifierMask::ALT_RIGHT,
        }
    }

    pub fn is_shift(self) -> bool {
        matches!(self, ModifierKey::ShiftLeft | ModifierKey::ShiftRight)
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}
