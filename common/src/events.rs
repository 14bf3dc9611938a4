//! Widget lifecycle event log.
//!
//! Keeps the most recent widget events in a fixed ring buffer so a host can
//! show them on a debug overlay. Every event is also emitted through
//! `tracing`.
//!
//! # Usage
//!
//! ```ignore
//! let mut log = EventLog::new();
//! log.push(ChipEvent::Mounted);
//! log.push(ChipEvent::TimerAcquired);
//!
//! for event in log.iter() {
//!     println!("{}", event.label());
//! }
//! ```

use heapless::Deque;

/// Maximum number of events kept in the ring buffer.
pub const EVENT_LOG_SIZE: usize = 8;

/// Something observable that happened to a widget instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChipEvent {
    Mounted,
    Unmounted,
    Reconfigured,
    TimerAcquired,
    TimerReleased,
    HoverEntered,
    HoverLeft,
}

impl ChipEvent {
    /// Short label for on-screen display.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Mounted => "mounted",
            Self::Unmounted => "unmounted",
            Self::Reconfigured => "reconfigured",
            Self::TimerAcquired => "timer acquired",
            Self::TimerReleased => "timer released",
            Self::HoverEntered => "hover entered",
            Self::HoverLeft => "hover left",
        }
    }
}

/// Ring buffer of [`ChipEvent`]s. The oldest event is dropped when full.
#[derive(Debug)]
pub struct EventLog {
    buffer: Deque<ChipEvent, EVENT_LOG_SIZE>,
}

impl EventLog {
    pub const fn new() -> Self { Self { buffer: Deque::new() } }

    /// Record an event, dropping the oldest one if the buffer is full.
    pub fn push(&mut self, event: ChipEvent) {
        tracing::debug!(event = event.label(), "chip event");

        if self.buffer.is_full() {
            self.buffer.pop_front();
        }
        self.buffer.push_back(event).ok();
    }

    /// Iterate over events, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = ChipEvent> + '_ { self.buffer.iter().copied() }

    /// Most recent event.
    pub fn last(&self) -> Option<ChipEvent> { self.buffer.back().copied() }

    #[inline]
    pub fn len(&self) -> usize { self.buffer.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.buffer.is_empty() }
}

impl Default for EventLog {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_log_push() {
        let mut log = EventLog::new();
        assert!(log.is_empty());

        log.push(ChipEvent::Mounted);
        assert_eq!(log.len(), 1);
        assert_eq!(log.last(), Some(ChipEvent::Mounted));

        log.push(ChipEvent::TimerAcquired);
        assert_eq!(log.len(), 2);
        assert_eq!(log.last(), Some(ChipEvent::TimerAcquired));
    }

    #[test]
    fn test_event_log_ring_buffer() {
        let mut log = EventLog::new();
        log.push(ChipEvent::Mounted);
        for _ in 1..EVENT_LOG_SIZE {
            log.push(ChipEvent::HoverEntered);
        }
        assert_eq!(log.len(), EVENT_LOG_SIZE);

        // Push one more - should drop the oldest
        log.push(ChipEvent::Unmounted);
        assert_eq!(log.len(), EVENT_LOG_SIZE);
        assert_eq!(log.iter().next(), Some(ChipEvent::HoverEntered), "mount event was dropped");
        assert_eq!(log.last(), Some(ChipEvent::Unmounted));
    }

    #[test]
    fn test_event_labels_are_distinct() {
        let events = [
            ChipEvent::Mounted,
            ChipEvent::Unmounted,
            ChipEvent::Reconfigured,
            ChipEvent::TimerAcquired,
            ChipEvent::TimerReleased,
            ChipEvent::HoverEntered,
            ChipEvent::HoverLeft,
        ];
        for (i, a) in events.iter().enumerate() {
            for b in &events[i + 1..] {
                assert_ne!(a.label(), b.label(), "{a:?} and {b:?} share a label");
            }
        }
    }
}
