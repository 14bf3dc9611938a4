//! Hover/animation state machine.
//!
//! # States
//!
//! `{idle, hovered} × {animation enabled, animation disabled}`. The hover half
//! is held here; the animation half is a configuration flag passed to
//! [`InteractionState::visuals`].
//!
//! | Event | Effect |
//! |-------|--------|
//! | pointer enter | `hovered = true`, LED pulse clock restarts |
//! | pointer leave | `hovered = false` |
//! | pulse tick | phase advances 6°, wrapping at 360 |
//! | clock advance | hover tween and LED pulse clock move forward |
//!
//! Entering while already hovered and leaving while idle change nothing.

use crate::animations::{
    HOVER_SCALE,
    HoverTween,
    LED_PULSE_DELAY_MS,
    PinGroup,
    PulsePhase,
    led_pulse_opacity,
    lerp,
    pin_opacity,
};
use crate::colors::{SHADOW_DARK, SHADOW_LIGHT, TEXT_SHADOW, TEXT_SHADOW_HOVER};

/// Housing shadow drop while idle / hovered, in pixels.
const SHADOW_OFFSET_IDLE: f32 = 10.0;
const SHADOW_OFFSET_HOVER: f32 = 20.0;

/// Label drop shadow offset while idle / hovered, in pixels.
const TEXT_SHADOW_OFFSET_IDLE: f32 = 2.0;
const TEXT_SHADOW_OFFSET_HOVER: f32 = 3.0;

/// Label lift while hovered with animation, in pixels.
const LABEL_LIFT: f32 = 2.0;

/// Indicator opacity while idle / hovered.
const INDICATOR_IDLE: f32 = 0.7;
const INDICATOR_HOVER: f32 = 0.9;

/// Local interaction state of one widget instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InteractionState {
    hovered: bool,
    phase: PulsePhase,
    hovered_for_ms: u32,
    tween: HoverTween,
}

impl InteractionState {
    pub const fn new() -> Self {
        Self {
            hovered: false,
            phase: PulsePhase::new(),
            hovered_for_ms: 0,
            tween: HoverTween::new(),
        }
    }

    #[inline]
    pub const fn is_hovered(&self) -> bool { self.hovered }

    #[inline]
    pub const fn phase(&self) -> PulsePhase { self.phase }

    /// Pulse angle in degrees, within `0..360`.
    #[inline]
    pub const fn pulse_angle(&self) -> u16 { self.phase.degrees() }

    /// Milliseconds since hover began (0 while idle).
    #[inline]
    pub const fn hovered_for_ms(&self) -> u32 { self.hovered_for_ms }

    /// Pointer entered the hover box. Returns `true` on an actual transition.
    pub fn pointer_enter(&mut self) -> bool {
        if self.hovered {
            return false;
        }
        self.hovered = true;
        self.hovered_for_ms = 0;
        true
    }

    /// Pointer left the hover box. Returns `true` on an actual transition.
    pub fn pointer_leave(&mut self) -> bool {
        if !self.hovered {
            return false;
        }
        self.hovered = false;
        self.hovered_for_ms = 0;
        true
    }

    /// `ticks` periods of the pulse timer elapsed.
    #[inline]
    pub fn tick(&mut self, ticks: u32) { self.phase.advance(ticks); }

    /// Move the transition clocks forward by `dt_ms`.
    pub fn advance_clock(&mut self, dt_ms: u32) {
        self.tween.advance(dt_ms, self.hovered);
        if self.hovered {
            self.hovered_for_ms = self.hovered_for_ms.saturating_add(dt_ms);
        }
    }

    /// Resolve the current visual parameters.
    pub fn visuals(&self, animated: bool) -> Visuals {
        let p = self.tween.progress();
        let live = animated && self.hovered;

        Visuals {
            scale: if animated { lerp(1.0, HOVER_SCALE, p) } else { 1.0 },
            shadow_offset: if self.hovered { SHADOW_OFFSET_HOVER } else { SHADOW_OFFSET_IDLE },
            shadow_alpha: if self.hovered { SHADOW_DARK } else { SHADOW_LIGHT },
            led_glow: self.hovered,
            led_opacity: if live {
                [
                    led_pulse_opacity(self.hovered_for_ms, 0),
                    led_pulse_opacity(self.hovered_for_ms, LED_PULSE_DELAY_MS),
                ]
            } else {
                [1.0, 1.0]
            },
            indicator_opacity: lerp(INDICATOR_IDLE, INDICATOR_HOVER, p),
            label_lift: if animated { lerp(0.0, LABEL_LIFT, p) } else { 0.0 },
            label_shadow_offset: lerp(TEXT_SHADOW_OFFSET_IDLE, TEXT_SHADOW_OFFSET_HOVER, p),
            label_shadow_alpha: lerp(TEXT_SHADOW, TEXT_SHADOW_HOVER, p),
            shimmer: live,
            phase: self.phase,
        }
    }
}

/// Visual parameters derived from [`InteractionState`] for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Visuals {
    /// Scale of the whole chip about its center.
    pub scale: f32,
    /// Vertical drop of the housing shadow, in pixels.
    pub shadow_offset: f32,
    pub shadow_alpha: f32,
    pub led_glow: bool,
    pub led_opacity: [f32; 2],
    pub indicator_opacity: f32,
    /// Upward shift of the label, in pixels.
    pub label_lift: f32,
    pub label_shadow_offset: f32,
    pub label_shadow_alpha: f32,
    /// Whether pin opacities follow the shimmer wave.
    pub shimmer: bool,
    phase: PulsePhase,
}

impl Visuals {
    /// Opacity of pin `index` on `group`. Full opacity unless shimmering.
    pub fn pin_opacity(&self, group: PinGroup, index: usize) -> f32 {
        if self.shimmer { pin_opacity(self.phase, group, index) } else { 1.0 }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animations::HOVER_TRANSITION_MS;

    #[test]
    fn test_hover_enter_is_idempotent() {
        let mut once = InteractionState::new();
        assert!(once.pointer_enter());

        let mut twice = InteractionState::new();
        assert!(twice.pointer_enter());
        assert!(!twice.pointer_enter(), "second enter is not a transition");

        assert_eq!(once, twice, "entering twice equals entering once");
    }

    #[test]
    fn test_hover_enter_twice_after_time_keeps_clock() {
        let mut state = InteractionState::new();
        state.pointer_enter();
        state.advance_clock(400);
        state.pointer_enter();
        assert_eq!(state.hovered_for_ms(), 400, "re-entering does not restart the LED clock");
    }

    #[test]
    fn test_leave_while_idle_is_noop() {
        let mut state = InteractionState::new();
        assert!(!state.pointer_leave());
        assert_eq!(state, InteractionState::new());
    }

    #[test]
    fn test_enter_leave_round_trip() {
        let mut state = InteractionState::new();
        state.pointer_enter();
        assert!(state.is_hovered());
        state.advance_clock(HOVER_TRANSITION_MS);
        state.pointer_leave();
        assert!(!state.is_hovered());
        state.advance_clock(HOVER_TRANSITION_MS);
        assert_eq!(state.visuals(true).scale, 1.0, "scale returns to rest");
    }

    #[test]
    fn test_tick_advances_phase() {
        let mut state = InteractionState::new();
        state.tick(1);
        state.tick(1);
        assert_eq!(state.pulse_angle(), 12);
        state.tick(60);
        assert_eq!(state.pulse_angle(), 12, "a full turn lands in place");
    }

    #[test]
    fn test_idle_visuals() {
        let v = InteractionState::new().visuals(true);
        assert_eq!(v.scale, 1.0);
        assert_eq!(v.shadow_offset, 10.0);
        assert!(!v.led_glow);
        assert_eq!(v.led_opacity, [1.0, 1.0]);
        assert!((v.indicator_opacity - 0.7).abs() < 1e-6);
        assert!(!v.shimmer);
        assert_eq!(v.label_lift, 0.0);
        for group in PinGroup::ALL {
            for index in 0..group.count() {
                assert_eq!(v.pin_opacity(group, index), 1.0, "idle pins are opaque");
            }
        }
    }

    #[test]
    fn test_hovered_animated_visuals() {
        let mut state = InteractionState::new();
        state.pointer_enter();
        state.advance_clock(HOVER_TRANSITION_MS);

        let v = state.visuals(true);
        assert!((v.scale - HOVER_SCALE).abs() < 1e-6, "scale reaches 5% growth");
        assert_eq!(v.shadow_offset, 20.0, "shadow deepens");
        assert!(v.led_glow);
        assert!((v.indicator_opacity - 0.9).abs() < 1e-6);
        assert!((v.label_lift - 2.0).abs() < 1e-6);
        assert!(v.shimmer);
        // phase 0: top pin 0 sits at sin(0)
        assert!((v.pin_opacity(PinGroup::Top, 0) - 0.7).abs() < 0.01);
    }

    #[test]
    fn test_housing_shadow_switches_without_easing() {
        let mut state = InteractionState::new();
        state.pointer_enter();
        let v = state.visuals(true);
        assert_eq!(v.shadow_offset, 20.0, "deep shadow on the first hovered frame");
        assert!((v.shadow_alpha - 0.3).abs() < 1e-6);
        assert_eq!(v.scale, 1.0, "scale still eases from rest");

        state.advance_clock(HOVER_TRANSITION_MS);
        state.pointer_leave();
        let v = state.visuals(true);
        assert_eq!(v.shadow_offset, 10.0, "shallow shadow right after leaving");
        assert!((v.shadow_alpha - 0.2).abs() < 1e-6);
        assert!(v.scale > 1.0, "scale eases back");
    }

    #[test]
    fn test_hovered_without_animation() {
        let mut state = InteractionState::new();
        state.pointer_enter();
        state.advance_clock(HOVER_TRANSITION_MS);

        let v = state.visuals(false);
        assert_eq!(v.scale, 1.0, "no scale without animation");
        assert_eq!(v.label_lift, 0.0, "no lift without animation");
        assert!(!v.shimmer, "no shimmer without animation");
        assert_eq!(v.led_opacity, [1.0, 1.0], "no LED pulse without animation");
        assert!(v.led_glow, "glow follows hover regardless of animation");
        assert!((v.indicator_opacity - 0.9).abs() < 1e-6, "indicator follows hover regardless");
        assert_eq!(v.pin_opacity(PinGroup::Right, 4), 1.0);
    }
}
