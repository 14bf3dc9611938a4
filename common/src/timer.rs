//! Periodic pulse timer.
//!
//! The timer is the one scoped resource of the widget. It lives in a
//! [`TimerSlot`] owned by the widget instance: acquired on mount while
//! animation is enabled, released on unmount, on reconfiguration with
//! animation disabled, and when the instance is dropped.
//!
//! Time is pushed in by the host (`advance(dt_ms)`), so the timer holds no
//! clock of its own and stops the moment it leaves its slot.

/// A repeating timer driven by elapsed milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PulseTimer {
    period_ms: u32,
    carry_ms: u32,
}

impl PulseTimer {
    /// Start a timer firing every `period_ms` (at least 1 ms).
    pub const fn start(period_ms: u32) -> Self {
        Self {
            period_ms: if period_ms == 0 { 1 } else { period_ms },
            carry_ms: 0,
        }
    }

    #[inline]
    pub const fn period_ms(&self) -> u32 { self.period_ms }

    /// Feed `dt_ms` of elapsed time and return how many periods completed.
    ///
    /// Leftover time carries into the next call.
    pub fn advance(&mut self, dt_ms: u32) -> u32 {
        let total = self.carry_ms.saturating_add(dt_ms);
        self.carry_ms = total % self.period_ms;
        total / self.period_ms
    }
}

/// Owner of at most one [`PulseTimer`].
#[derive(Debug, Default)]
pub struct TimerSlot {
    timer: Option<PulseTimer>,
}

impl TimerSlot {
    pub const fn empty() -> Self { Self { timer: None } }

    /// Start a timer if none is held. Returns `true` if one was acquired.
    pub fn acquire(&mut self, period_ms: u32) -> bool {
        if self.timer.is_some() {
            return false;
        }
        self.timer = Some(PulseTimer::start(period_ms));
        true
    }

    /// Drop the held timer. Returns `true` if one was released.
    pub fn release(&mut self) -> bool { self.timer.take().is_some() }

    #[inline]
    pub const fn is_active(&self) -> bool { self.timer.is_some() }

    /// Advance the held timer, if any. Returns completed periods.
    pub fn advance(&mut self, dt_ms: u32) -> u32 { self.timer.as_mut().map_or(0, |timer| timer.advance(dt_ms)) }
}

// =============================================================================
// Tests
// =============================================================================
