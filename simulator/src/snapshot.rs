//! Headless rendering to PNG.

use std::path::Path;

use anyhow::Context;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay};
use retro_chip_common::ChipWidget;

use crate::host::HostPage;
use crate::timing::FRAME_TIME_MS;

/// What to simulate before the frame is captured.
#[derive(Clone, Copy, Debug, Default)]
pub struct SnapshotPlan {
    /// Pointer rests over the chip.
    pub hover: bool,
    /// Simulated time before capture.
    pub elapsed_ms: u32,
}

/// Run `plan` on a mounted `widget` and render the resulting frame.
pub fn render(widget: &mut ChipWidget<'_>, host: &HostPage, size: Size, plan: SnapshotPlan) -> SimulatorDisplay<Rgb565> {
    if plan.hover {
        widget.pointer_enter();
    }

    // Frame-sized steps, as the window loop would deliver them
    let mut remaining = plan.elapsed_ms;
    while remaining > 0 {
        let step = remaining.min(FRAME_TIME_MS);
        widget.advance(step);
        remaining -= step;
    }

    let mut display = SimulatorDisplay::new(size);
    host.draw(&mut display);
    widget.draw(&mut display, host.content_area());
    display
}

/// Render one frame and save it as a PNG at `path`.
pub fn save(
    widget: &mut ChipWidget<'_>,
    host: &HostPage,
    size: Size,
    scale: u32,
    plan: SnapshotPlan,
    path: &Path,
) -> anyhow::Result<()> {
    let display = render(widget, host, size, plan);
    let settings = OutputSettingsBuilder::new().scale(scale).build();

    display
        .to_rgb_output_image(&settings)
        .save_png(path)
        .with_context(|| format!("failed to write snapshot to {}", path.display()))?;

    tracing::info!(path = %path.display(), hover = plan.hover, elapsed_ms = plan.elapsed_ms, "snapshot saved");
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
