//! Output side of the engine: synthesized key events and committed text

use std::fmt;

use crate::types::{KeyCode, ModifierMask};

/// Direction of a synthesized key event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    Down,
    Up,
}

/// A key event delivered to the receiving application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub action: KeyAction,
    pub key_code: KeyCode,
    /// Time of the DOWN this event belongs to
    pub down_time: u64,
    pub event_time: u64,
    pub meta: ModifierMask,
}

impl KeyEvent {
    pub fn down(key_code: KeyCode, down_time: u64, event_time: u64, meta: ModifierMask) -> Self {
        Self {
            action: KeyAction::Down,
            key_code,
            down_time,
            event_time,
            meta,
        }
    }

    pub fn up(key_code: KeyCode, down_time: u64, event_time: u64, meta: ModifierMask) -> Self {
        Self {
            action: KeyAction::Up,
            key_code,
            down_time,
            event_time,
            meta,
        }
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let action = match self.action {
            KeyAction::Down => "DOWN",
            KeyAction::Up => "UP",
        };
        write!(
            f,
            "{} {} down={} t={} meta={:#06x}",
            action,
            self.key_code,
            self.down_time,
            self.event_time,
            self.meta.bits()
        )
    }
}

/// Where the engine delivers what it produces.
///
/// Implemented by the host glue that forwards synthetic events to the focused
/// application.
pub trait EventSink {
    fn emit(&mut self, event: KeyEvent);

    /// Insert literal text in one shot
    fn commit_text(&mut self, text: &str);
}

/// Everything a sink received, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    Key(KeyEvent),
    Text(String),
}

impl fmt::Display for SinkEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkEvent::Key(event) => event.fmt(f),
            SinkEvent::Text(text) => write!(f, "TEXT {:?}", text),
        }
    }
}

/// Sink that keeps every delivered event
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    events: Vec<SinkEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[SinkEvent] {
        &self.events
    }

    /// Only the key events, without committed text
    pub fn key_events(&self) -> Vec<KeyEvent> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SinkEvent::Key(event) => Some(*event),
                SinkEvent::Text(_) => None,
            })
            .collect()
    }

    pub fn committed_text(&self) -> String {
        self.events
            .iter()
            .filter_map(|e| match e {
                SinkEvent::Text(text) => Some(text.as_str()),
                SinkEvent::Key(_) => None,
            })
            .collect()
    }

    /// Remove and return everything recorded so far
    pub fn take(&mut self) -> Vec<SinkEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: KeyEvent) {
        self.events.push(SinkEvent::Key(event));
    }

    fn commit_text(&mut self, text: &str) {
        self.events.push(SinkEvent::Text(text.to_string()));
    }
}
