//! Retro microchip simulator for desktop.
//!
//! Hosts the widget on a page and either renders one frame to PNG
//! (`--snapshot`) or opens an interactive window (`window` feature).

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod cli;
mod host;
mod logging;
#[cfg(any(feature = "window", test))]
mod overlay;
mod snapshot;
mod timing;
#[cfg(feature = "window")]
mod window;

use clap::Parser;
use embedded_graphics::prelude::Size;
use retro_chip_common::ChipWidget;

use crate::cli::Cli;
use crate::host::HostPage;
use crate::logging::setup_logging;
use crate::snapshot::SnapshotPlan;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    let size = Size::new(cli.width, cli.height);
    let host = HostPage::new(size);
    let mut widget = ChipWidget::new(cli.chip_config());
    widget.mount();
    log_placement(&widget, &host);

    let result = match &cli.snapshot {
        Some(path) => {
            let plan = SnapshotPlan {
                hover: cli.hover,
                elapsed_ms: cli.elapsed_ms,
            };
            snapshot::save(&mut widget, &host, size, cli.scale, plan, path)
        }
        None => run_interactive(&mut widget, &host, size, cli.scale),
    };

    widget.unmount();
    result
}

fn log_placement(widget: &ChipWidget<'_>, host: &HostPage) {
    let placement = widget.placement(host.content_area());
    let classes: Vec<&str> = widget.config().class_names().collect();
    tracing::debug!(
        classes = %classes.join(" "),
        flow = ?placement.container.flow,
        min_size = placement.container.min_size,
        width = placement.container.width,
        height = placement.container.height,
        "widget placed"
    );
}

#[cfg(feature = "window")]
fn run_interactive(widget: &mut ChipWidget<'_>, host: &HostPage, size: Size, scale: u32) -> anyhow::Result<()> {
    window::run(widget, host, size, scale);
    Ok(())
}

#[cfg(not(feature = "window"))]
fn run_interactive(_widget: &mut ChipWidget<'_>, _host: &HostPage, _size: Size, _scale: u32) -> anyhow::Result<()> {
    anyhow::bail!("built without the `window` feature; pass --snapshot PATH to render headless")
}
