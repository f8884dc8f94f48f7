//! Trigger keys and layer resolution

use crate::types::{KeyCode, Layer};

/// The three momentary layer triggers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    Caps,
    Ae,
    Grave,
}

/// Which physical keys act as triggers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerKeys {
    pub caps: KeyCode,
    pub ae: KeyCode,
    pub grave: KeyCode,
}

impl Default for TriggerKeys {
    fn default() -> Self {
        Self {
            caps: KeyCode::CAPS_LOCK,
            // Ä position on a German layout
            ae: KeyCode::APOSTROPHE,
            grave: KeyCode::GRAVE,
        }
    }
}

impl TriggerKeys {
    pub fn classify(&self, key: KeyCode) -> Option<Trigger> {
        if key == self.caps {
            Some(Trigger::Caps)
        } else if key == self.ae {
            Some(Trigger::Ae)
        } else if key == self.grave {
            Some(Trigger::Grave)
        } else {
            None
        }
    }
}

/// Hold state of the triggers, set between each trigger's own DOWN and UP
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TriggerHold {
    pub caps: bool,
    pub ae: bool,
    pub grave: bool,
}

impl TriggerHold {
    pub fn set(&mut self, trigger: Trigger, held: bool) {
        match trigger {
            Trigger::Caps => self.caps = held,
            Trigger::Ae => self.ae = held,
            Trigger::Grave => self.grave = held,
        }
    }

    pub fn any(&self) -> bool {
        self.caps || self.ae || self.grave
    }
}

/// Active layer for the given trigger and Shift hold state. First match wins.
pub fn resolve_layer(triggers: TriggerHold, shift_held: bool) -> Layer {
    let TriggerHold { caps, ae, grave } = triggers;

    if caps && grave {
        Layer::M6
    } else if caps && shift_held {
        Layer::M5
    } else if grave {
        Layer::M4
    } else if shift_held {
        Layer::M2
    } else if caps || ae {
        Layer::M3
    } else {
        Layer::M1
    }
}
