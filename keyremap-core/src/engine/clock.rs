use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// Millisecond time source in the host's time base
pub trait Clock {
    fn now_millis(&self) -> u64;

    /// Called with the timestamp of every host key event before it is handled
    fn observe(&self, _host_time: u64) {}
}

/// Real-time clock anchored to the host's timestamps.
///
/// Each observed host timestamp becomes the new anchor; `now_millis` is that
/// timestamp plus the real time elapsed since it was seen. Before the first
/// host event it counts from the clock's creation.
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    origin: Instant,
    anchor: Cell<Option<(u64, Instant)>>,
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            anchor: Cell::new(None),
        }
    }
}

impl Clock for MonotonicClock {
    fn now_millis(&self) -> u64 {
        match self.anchor.get() {
            Some((host_time, seen_at)) => host_time.saturating_add(seen_at.elapsed().as_millis() as u64),
            None => self.origin.elapsed().as_millis() as u64,
        }
    }

    fn observe(&self, host_time: u64) {
        self.anchor.set(Some((host_time, Instant::now())));
    }
}

/// Clock set by hand. Clones share the same time, so a test can keep one
/// handle while the engine owns another. Host timestamps are not observed.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<u64>>,
}

impl ManualClock {
    pub fn new(start: u64) -> Self {
        Self { now: Rc::new(Cell::new(start)) }
    }

    pub fn set(&self, millis: u64) {
        self.now.set(millis);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> u64 {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monotonic_clock_follows_host_time() {
        let clock = MonotonicClock::new();
        assert!(clock.now_millis() < 1_000);

        clock.observe(5_000_000);
        let now = clock.now_millis();
        assert!((5_000_000..5_001_000).contains(&now), "{}", now);

        clock.observe(7_000_000);
        assert!(clock.now_millis() >= 7_000_000);
    }

    #[test]
    fn test_manual_clock_ignores_host_time() {
        let clock = ManualClock::new(10);
        let handle = clock.clone();
        clock.observe(5_000);
        assert_eq!(handle.now_millis(), 10);
        handle.set(20);
        assert_eq!(clock.now_millis(), 20);
    }
}
