//! Animation effects for the chip widget.
//!
//! - **Pulse phase**: an angle advanced by the periodic timer
//! - **Pin shimmer**: a traveling-wave opacity across the four pin groups
//! - **LED pulse**: a 1 s breathing cycle on the two status LEDs
//! - **Hover tween**: an eased 0 → 1 progress that drives scale, shadow and
//!   indicator opacity
//!
//! # Pin Shimmer
//!
//! Every pin draws its opacity from one stateless formula:
//! ```text
//! opacity = sin((phase + index * step + offset) deg) * 0.3 + 0.7
//! ```
//! Top/bottom groups step 30° per pin, left/right step 40°. The group offsets
//! (0°, 180°, 90°, 270°) put opposite sides half a wave apart, so the shimmer
//! appears to travel around the housing. Nothing is stored per pin.

use core::f32::consts::PI;

// =============================================================================
// Timing Constants
// =============================================================================

/// Period of the pulse timer in milliseconds.
pub const PULSE_TICK_MS: u32 = 50;

/// Degrees the pulse phase advances per tick.
pub const PULSE_STEP_DEG: u16 = 6;

/// Scale applied to the chip while hovered with animation enabled.
pub const HOVER_SCALE: f32 = 1.05;

/// Duration of the hover transition in milliseconds.
pub const HOVER_TRANSITION_MS: u32 = 300;

/// Period of one LED breathing cycle.
pub const LED_PULSE_PERIOD_MS: u32 = 1000;

/// Start delay of the second LED's cycle.
pub const LED_PULSE_DELAY_MS: u32 = 500;

/// Lowest LED opacity within a cycle.
const LED_PULSE_MIN: f32 = 0.6;

const SHIMMER_AMPLITUDE: f32 = 0.3;
const SHIMMER_BASE: f32 = 0.7;

// =============================================================================
// Pin Groups
// =============================================================================

/// One side of the chip housing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PinGroup {
    Top,
    Bottom,
    Left,
    Right,
}

impl PinGroup {
    /// Back-to-front draw order of the groups.
    pub const ALL: [Self; 4] = [Self::Top, Self::Bottom, Self::Left, Self::Right];

    /// Number of pins on this side.
    pub const fn count(self) -> usize {
        match self {
            Self::Top | Self::Bottom => 7,
            Self::Left | Self::Right => 5,
        }
    }

    /// Phase difference between neighbouring pins, in degrees.
    pub const fn phase_step(self) -> u32 {
        match self {
            Self::Top | Self::Bottom => 30,
            Self::Left | Self::Right => 40,
        }
    }

    /// Phase offset of the whole group, in degrees.
    pub const fn phase_offset(self) -> u32 {
        match self {
            Self::Top => 0,
            Self::Bottom => 180,
            Self::Left => 90,
            Self::Right => 270,
        }
    }
}

// =============================================================================
// Pulse Phase
// =============================================================================

/// Periodic animation phase in whole degrees, always within `0..360`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PulsePhase(u16);

impl PulsePhase {
    pub const fn new() -> Self { Self(0) }

    #[inline]
    pub const fn degrees(self) -> u16 { self.0 }

    /// Advance by `ticks` steps, wrapping at 360.
    ///
    /// Only the remainder within one full turn is applied.
    pub fn advance(&mut self, ticks: u32) {
        let step = u32::from(PULSE_STEP_DEG);
        let turn = 360 / step;
        self.0 = ((u32::from(self.0) + (ticks % turn) * step) % 360) as u16;
    }
}

// =============================================================================
// Pin Shimmer
// =============================================================================

/// Shimmer opacity of pin `index` in `group` at `phase`.
///
/// Result is within `0.4..=1.0`.
pub fn pin_opacity(phase: PulsePhase, group: PinGroup, index: usize) -> f32 {
    let degrees = u32::from(phase.degrees()) + index as u32 * group.phase_step() + group.phase_offset();
    let radians = (degrees % 360) as f32 * PI / 180.0;
    micromath::F32(radians).sin().0 * SHIMMER_AMPLITUDE + SHIMMER_BASE
}

// =============================================================================
// LED Pulse
// =============================================================================

/// LED opacity `since_hover_ms` after hover began, for a cycle delayed by `delay_ms`.
///
/// Before the delay elapses the LED sits at full opacity. Each cycle runs
/// 0.6 → 1.0 → 0.6.
pub fn led_pulse_opacity(since_hover_ms: u32, delay_ms: u32) -> f32 {
    let Some(running) = since_hover_ms.checked_sub(delay_ms) else {
        return 1.0;
    };

    let t = (running % LED_PULSE_PERIOD_MS) as f32 / LED_PULSE_PERIOD_MS as f32;
    let rise = if t < 0.5 { t * 2.0 } else { (1.0 - t) * 2.0 };
    LED_PULSE_MIN + (1.0 - LED_PULSE_MIN) * rise
}

// =============================================================================
// Hover Tween
// =============================================================================

/// Eased hover transition progress.
///
/// Moves toward 1 while hovered and toward 0 otherwise, at a rate that
/// completes the transition in [`HOVER_TRANSITION_MS`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoverTween {
    elapsed_ms: u32,
}

impl HoverTween {
    pub const fn new() -> Self { Self { elapsed_ms: 0 } }

    /// Advance the tween by `dt_ms` toward the `hovered` end.
    pub fn advance(&mut self, dt_ms: u32, hovered: bool) {
        self.elapsed_ms = if hovered {
            self.elapsed_ms.saturating_add(dt_ms).min(HOVER_TRANSITION_MS)
        } else {
            self.elapsed_ms.saturating_sub(dt_ms)
        };
    }

    /// Eased progress in `0.0..=1.0`.
    pub fn progress(&self) -> f32 {
        let t = self.elapsed_ms as f32 / HOVER_TRANSITION_MS as f32;
        smoothstep(t)
    }
}

/// Cubic ease-in-out on `0.0..=1.0`.
#[inline]
fn smoothstep(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Linear interpolation from `a` to `b`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 { a + (b - a) * t }

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.01;

    fn phase_at(degrees: u16) -> PulsePhase {
        let mut phase = PulsePhase::new();
        while phase.degrees() != degrees {
            phase.advance(1);
        }
        phase
    }

    // -------------------------------------------------------------------------
    // Pulse Phase Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_pulse_phase_advances_by_step() {
        let mut phase = PulsePhase::new();
        phase.advance(1);
        assert_eq!(phase.degrees(), 6);
        phase.advance(1);
        assert_eq!(phase.degrees(), 12);
        phase.advance(3);
        assert_eq!(phase.degrees(), 30);
    }

    #[test]
    fn test_pulse_phase_wraps() {
        let mut phase = PulsePhase::new();
        for _ in 0..60 {
            phase.advance(1);
        }
        assert_eq!(phase.degrees(), 0, "60 ticks of 6 degrees is a full turn");

        for _ in 0..1000 {
            phase.advance(1);
            assert!(phase.degrees() < 360, "phase must stay below 360");
        }
    }

    #[test]
    fn test_pulse_phase_skips_whole_turns() {
        let mut stepped = PulsePhase::new();
        for _ in 0..125 {
            stepped.advance(1);
        }
        let mut jumped = PulsePhase::new();
        jumped.advance(125);
        assert_eq!(jumped, stepped, "a batch of ticks lands where single steps do");

        let mut phase = phase_at(354);
        phase.advance(u32::MAX);
        // u32::MAX % 60 == 15
        assert_eq!(phase.degrees(), (354 + 15 * 6) % 360);
    }

    // -------------------------------------------------------------------------
    // Pin Shimmer Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_pin_counts() {
        assert_eq!(PinGroup::Top.count(), 7);
        assert_eq!(PinGroup::Bottom.count(), 7);
        assert_eq!(PinGroup::Left.count(), 5);
        assert_eq!(PinGroup::Right.count(), 5);
    }

    #[test]
    fn test_pin_opacity_known_points() {
        let zero = PulsePhase::new();
        // sin(0) = 0
        assert!((pin_opacity(zero, PinGroup::Top, 0) - 0.7).abs() < EPSILON);
        // sin(90) = 1
        assert!((pin_opacity(zero, PinGroup::Top, 3) - 1.0).abs() < EPSILON);
        assert!((pin_opacity(zero, PinGroup::Left, 0) - 1.0).abs() < EPSILON);
        // sin(270) = -1
        assert!((pin_opacity(zero, PinGroup::Right, 0) - 0.4).abs() < EPSILON);
        // sin(180) = 0
        assert!((pin_opacity(zero, PinGroup::Bottom, 0) - 0.7).abs() < EPSILON);
    }

    #[test]
    fn test_pin_opacity_opposite_sides_are_half_a_wave_apart() {
        let phase = phase_at(36);
        for index in 0..PinGroup::Top.count() {
            let top = pin_opacity(phase, PinGroup::Top, index) - 0.7;
            let bottom = pin_opacity(phase, PinGroup::Bottom, index) - 0.7;
            assert!((top + bottom).abs() < EPSILON, "pin {index}: top {top} bottom {bottom}");
        }
    }

    #[test]
    fn test_pin_opacity_bounded() {
        let mut phase = PulsePhase::new();
        for _ in 0..60 {
            for group in PinGroup::ALL {
                for index in 0..group.count() {
                    let opacity = pin_opacity(phase, group, index);
                    assert!(
                        (0.4 - EPSILON..=1.0 + EPSILON).contains(&opacity),
                        "{group:?}[{index}] at {}: {opacity}",
                        phase.degrees()
                    );
                }
            }
            phase.advance(1);
        }
    }

    // -------------------------------------------------------------------------
    // LED Pulse Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_led_pulse_cycle() {
        assert!((led_pulse_opacity(0, 0) - 0.6).abs() < EPSILON, "cycle starts dim");
        assert!((led_pulse_opacity(500, 0) - 1.0).abs() < EPSILON, "cycle peaks halfway");
        assert!((led_pulse_opacity(1000, 0) - 0.6).abs() < EPSILON, "cycle repeats");
    }

    #[test]
    fn test_led_pulse_delay_holds_full_opacity() {
        assert_eq!(led_pulse_opacity(0, LED_PULSE_DELAY_MS), 1.0);
        assert_eq!(led_pulse_opacity(499, LED_PULSE_DELAY_MS), 1.0);
        assert!((led_pulse_opacity(500, LED_PULSE_DELAY_MS) - 0.6).abs() < EPSILON);
    }

    // -------------------------------------------------------------------------
    // Hover Tween Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_hover_tween_converges() {
        let mut tween = HoverTween::new();
        assert_eq!(tween.progress(), 0.0);

        for _ in 0..10 {
            tween.advance(50, true);
        }
        assert_eq!(tween.progress(), 1.0, "tween saturates at 1");
        tween.advance(50, true);
        assert_eq!(tween.progress(), 1.0, "stays at rest while hovered");

        tween.advance(150, false);
        let halfway = tween.progress();
        assert!(halfway > 0.0 && halfway < 1.0, "tween eases back, got {halfway}");

        tween.advance(1000, false);
        assert_eq!(tween.progress(), 0.0);
    }

    #[test]
    fn test_hover_tween_is_monotonic() {
        let mut tween = HoverTween::new();
        let mut last = 0.0;
        for _ in 0..30 {
            tween.advance(10, true);
            let now = tween.progress();
            assert!(now >= last, "progress went backwards: {last} -> {now}");
            last = now;
        }
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(1.0, HOVER_SCALE, 0.0), 1.0);
        assert_eq!(lerp(1.0, HOVER_SCALE, 1.0), HOVER_SCALE);
        assert!((lerp(0.7, 0.9, 0.5) - 0.8).abs() < 1e-6);
    }
}
