use std::collections::HashMap;

use crate::types::{KeyCode, ModifierMask};

/// What was emitted for a held key on its DOWN, so its UP can mirror it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingRecord {
    /// The physical key itself was re-emitted with this mask
    Forwarded { mask: ModifierMask },
    /// A different key was emitted in its place
    Synthesized { target: KeyCode, mask: ModifierMask },
    /// The DOWN was fully handled (text commit, sequence); the UP emits nothing
    Consumed,
}

/// A physically held non-trigger key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeldKey {
    pub down_time: u64,
    /// `None` until the DOWN has been dispatched; modifier keys keep `None`
    pub record: Option<PendingRecord>,
}

/// Set of physically held keys with their press time and pending record
#[derive(Debug, Clone, Default)]
pub struct KeyTracker {
    held: HashMap<KeyCode, HeldKey>,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a physical DOWN. Returns `false` when the key was already held
    /// (host auto-repeat); the original press time is kept in that case.
    pub fn on_physical_down(&mut self, key: KeyCode, timestamp: u64) -> bool {
        if self.held.contains_key(&key) {
            return false;
        }
        self.held.insert(
            key,
            HeldKey {
                down_time: timestamp,
                record: None,
            },
        );
        true
    }

    /// Fill in what the DOWN produced
    pub fn set_record(&mut self, key: KeyCode, record: PendingRecord) {
        if let Some(held) = self.held.get_mut(&key) {
            held.record = Some(record);
        }
    }

    /// Record a physical UP, handing back the key's press state
    pub fn on_physical_up(&mut self, key: KeyCode) -> Option<HeldKey> {
        self.held.remove(&key)
    }

    pub fn get(&self, key: KeyCode) -> Option<&HeldKey> {
        self.held.get(&key)
    }

    pub fn is_held(&self, key: KeyCode) -> bool {
        self.held.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.held.len()
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }

    pub fn clear(&mut self) {
        self.held.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_down_up_round() {
        let mut tracker = KeyTracker::new();
        assert!(tracker.on_physical_down(KeyCode::A, 100));
        tracker.set_record(KeyCode::A, PendingRecord::Consumed);

        let held = tracker.on_physical_up(KeyCode::A).unwrap();
        assert_eq!(held.down_time, 100);
        assert_eq!(held.record, Some(PendingRecord::Consumed));
        assert!(tracker.is_empty());
        assert_eq!(tracker.on_physical_up(KeyCode::A), None);
    }

    #[test]
    fn test_repeat_keeps_first_press() {
        let mut tracker = KeyTracker::new();
        assert!(tracker.on_physical_down(KeyCode::A, 100));
        assert!(!tracker.on_physical_down(KeyCode::A, 140));
        assert_eq!(tracker.get(KeyCode::A).unwrap().down_time, 100);
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn test_record_for_unknown_key_is_ignored() {
        let mut tracker = KeyTracker::new();
        tracker.set_record(KeyCode::B, PendingRecord::Consumed);
        assert!(!tracker.is_held(KeyCode::B));
    }
}
