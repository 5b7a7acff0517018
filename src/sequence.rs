//! Event log of the sequence being profiled.
//!
//! A [`Session`] is a name plus a fixed-capacity, ordered list of [`Event`]s. The one
//! session owned by the profiler is reused by every `begin()`; nothing is ever
//! allocated or freed.

use heapless::Vec;

use crate::config::MAX_EVENTS;
use crate::error::ProfileError;

/// Profiler lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum State {
    /// Init failed (or the profiler is compiled out); every call is a no-op.
    Disabled,
    /// Ready for `begin()`.
    Idle,
    /// Between `begin()` and `end()`.
    Recording,
}

/// A named checkpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Event {
    /// Caller-supplied label, never copied.
    pub name: &'static str,
    /// Raw counter value at capture time.
    pub timestamp: u32,
}

impl Event {
    #[inline]
    pub const fn new(
        name: &'static str,
        timestamp: u32,
    ) -> Self {
        Self { name, timestamp }
    }
}

/// One profiling sequence: its name and the checkpoints captured so far.
#[derive(Clone, Debug)]
pub struct Session {
    name: &'static str,
    events: Vec<Event, MAX_EVENTS>,
}

impl Session {
    /// An unnamed, empty session.
    pub const fn new() -> Self {
        Self {
            name: "",
            events: Vec::new(),
        }
    }

    /// Start over under a new name, discarding any recorded events.
    pub fn restart(
        &mut self,
        name: &'static str,
    ) {
        self.name = name;
        self.events.clear();
    }

    /// Append a checkpoint. Fails without touching the log when it is full.
    pub fn push(
        &mut self,
        event: Event,
    ) -> Result<(), ProfileError> {
        self.events.push(event).map_err(|_| ProfileError::LogFull)
    }

    #[inline]
    pub const fn name(&self) -> &'static str { self.name }

    /// Recorded events in capture order.
    #[inline]
    pub fn events(&self) -> &[Event] { &self.events }

    #[inline]
    pub fn len(&self) -> usize { self.events.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.events.is_empty() }

    #[inline]
    pub fn is_full(&self) -> bool { self.events.is_full() }
}

impl Default for Session {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_in_order() {
        let mut session = Session::new();
        session.restart("boot");
        session.push(Event::new("a", 10)).unwrap();
        session.push(Event::new("b", 20)).unwrap();

        assert_eq!(session.name(), "boot");
        assert_eq!(session.events(), &[Event::new("a", 10), Event::new("b", 20)]);
    }

    #[test]
    fn test_push_when_full() {
        let mut session = Session::new();
        for i in 0..MAX_EVENTS {
            session.push(Event::new("fill", i as u32)).unwrap();
        }
        assert!(session.is_full());

        assert_eq!(session.push(Event::new("extra", 999)), Err(ProfileError::LogFull));
        assert_eq!(session.len(), MAX_EVENTS);
        assert_eq!(session.events().last(), Some(&Event::new("fill", MAX_EVENTS as u32 - 1)));
    }

    #[test]
    fn test_restart_discards_events() {
        let mut session = Session::new();
        session.restart("first");
        session.push(Event::new("a", 1)).unwrap();

        session.restart("second");
        assert!(session.is_empty());
        assert_eq!(session.name(), "second");
    }
}
