//! Mounted chip widget instance.
//!
//! [`ChipWidget`] owns everything one instance needs: configuration, derived
//! geometry, interaction state, its pulse timer slot and event log. Nothing
//! is shared between instances.
//!
//! # Lifecycle
//!
//! ```text
//! new ──mount──▶ mounted ──unmount / drop──▶ unmounted
//!                  │  ▲
//!                  └──┘ reconfigure, pointer events, advance
//! ```
//!
//! The pulse timer is held exactly while the widget is mounted with animation
//! enabled. Any path out of that condition releases it.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::DrawTarget;

use crate::animations::PULSE_TICK_MS;
use crate::config::{COMPONENT_NAME, ChipConfig};
use crate::events::{ChipEvent, EventLog};
use crate::geometry::Geometry;
use crate::layout::{Placement, PointF, RectF};
use crate::scene::Scene;
use crate::state::InteractionState;
use crate::timer::TimerSlot;
use crate::widgets::draw_scene;

/// One chip widget instance.
#[derive(Debug)]
pub struct ChipWidget<'a> {
    config: ChipConfig<'a>,
    geometry: Geometry,
    state: InteractionState,
    timer: TimerSlot,
    mounted: bool,
    events: EventLog,
}

impl<'a> ChipWidget<'a> {
    /// Create an unmounted widget for `config`.
    pub fn new(config: ChipConfig<'a>) -> Self {
        Self {
            geometry: Geometry::resolve(config.size, config.padding),
            config,
            state: InteractionState::new(),
            timer: TimerSlot::empty(),
            mounted: false,
            events: EventLog::new(),
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Mount the widget. Interaction state starts fresh.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        self.state = InteractionState::new();
        tracing::info!(
            component = COMPONENT_NAME,
            size = self.geometry.chip_size,
            mode = self.config.container_mode.name(),
            "chip mounted"
        );
        self.events.push(ChipEvent::Mounted);
        self.sync_timer();
    }

    /// Unmount the widget, releasing its timer.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.sync_timer();
        tracing::info!("chip unmounted");
        self.events.push(ChipEvent::Unmounted);
    }

    /// Replace the configuration. Geometry is re-derived and the timer follows
    /// the new animation flag.
    pub fn reconfigure(&mut self, config: ChipConfig<'a>) {
        self.config = config;
        self.geometry = Geometry::resolve(config.size, config.padding);
        tracing::debug!(size = self.geometry.chip_size, animated = config.enable_animation, "chip reconfigured");
        self.events.push(ChipEvent::Reconfigured);
        self.sync_timer();
    }

    /// Hold the timer iff mounted with animation enabled.
    fn sync_timer(&mut self) {
        if self.mounted && self.config.enable_animation {
            if self.timer.acquire(PULSE_TICK_MS) {
                self.events.push(ChipEvent::TimerAcquired);
            }
        } else if self.timer.release() {
            self.events.push(ChipEvent::TimerReleased);
        }
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Pointer entered the hover box.
    pub fn pointer_enter(&mut self) {
        if self.mounted && self.state.pointer_enter() {
            self.events.push(ChipEvent::HoverEntered);
        }
    }

    /// Pointer left the hover box.
    pub fn pointer_leave(&mut self) {
        if self.mounted && self.state.pointer_leave() {
            self.events.push(ChipEvent::HoverLeft);
        }
    }

    /// Pointer moved to `point`. Hit tests against the hover box at its
    /// current scale and emits enter/leave as needed.
    pub fn pointer_moved(&mut self, point: PointF, parent: RectF) {
        let scale = self.state.visuals(self.config.enable_animation).scale;
        let inside = self.placement(parent).hover_box(&self.geometry, scale).contains(point);
        if inside {
            self.pointer_enter();
        } else {
            self.pointer_leave();
        }
    }

    /// Advance time by `dt_ms`. Does nothing while unmounted.
    pub fn advance(&mut self, dt_ms: u32) {
        if !self.mounted {
            return;
        }
        self.state.advance_clock(dt_ms);
        self.state.tick(self.timer.advance(dt_ms));
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub const fn is_mounted(&self) -> bool { self.mounted }

    /// Whether the pulse timer is currently held.
    #[inline]
    pub const fn timer_active(&self) -> bool { self.timer.is_active() }

    #[inline]
    pub const fn state(&self) -> &InteractionState { &self.state }

    #[inline]
    pub const fn geometry(&self) -> &Geometry { &self.geometry }

    #[inline]
    pub const fn config(&self) -> &ChipConfig<'a> { &self.config }

    #[inline]
    pub const fn events(&self) -> &EventLog { &self.events }

    /// Placement of this widget inside `parent`.
    pub fn placement(&self, parent: RectF) -> Placement {
        let border = self.config.container_style().border_width;
        Placement::compute(&self.geometry, self.config.container_mode, border, parent)
    }

    /// Render tree of the current frame.
    pub fn scene(&self, parent: RectF) -> Scene<'a> {
        let visuals = self.state.visuals(self.config.enable_animation);
        Scene::build(&self.config, &self.geometry, &visuals, &self.placement(parent))
    }

    /// Draw the current frame inside `parent`.
    pub fn draw<D>(&self, display: &mut D, parent: RectF)
    where
        D: DrawTarget<Color = Rgb565>,
    {
        draw_scene(display, &self.scene(parent));
    }
}

impl Drop for ChipWidget<'_> {
    fn drop(&mut self) { self.unmount(); }
}

// =============================================================================
// Tests
// =============================================================================
