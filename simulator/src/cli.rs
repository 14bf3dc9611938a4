//! Command-line options of the simulator.
//!
//! Every widget option is optional. Anything left out keeps the host page's
//! configuration.

use std::convert::Infallible;
use std::path::PathBuf;

use clap::Parser;
use embedded_graphics::pixelcolor::Rgb565;
use retro_chip_common::{BorderStyle, ChipConfig, ChipSize, ContainerMode, StyleOverrides, parse_hex_color};

use crate::host::host_config;

#[derive(Debug, Parser)]
#[command(name = "simulator")]
#[command(about = "Desktop host for the retro microchip widget", version)]
pub struct Cli {
    /// Chip size: small, medium, large or a pixel count
    #[arg(long, value_parser = parse_size)]
    pub size: Option<ChipSize>,

    /// Label text
    #[arg(long)]
    pub text: Option<String>,

    /// Hide the background stripe bands
    #[arg(long)]
    pub no_stripes: bool,

    /// Disable hover scale, shimmer and the pulse timer
    #[arg(long)]
    pub no_animation: bool,

    /// Container background (#rgb or #rrggbb)
    #[arg(long, value_parser = parse_hex_color)]
    pub background: Option<Rgb565>,

    /// Container mode: inline, fill or fixed
    #[arg(long, value_parser = parse_mode)]
    pub mode: Option<ContainerMode>,

    #[arg(long)]
    pub border_width: Option<f32>,

    #[arg(long, value_parser = parse_hex_color)]
    pub border_color: Option<Rgb565>,

    /// Border style: solid, dashed, dotted, double or none
    #[arg(long, value_parser = parse_border_style)]
    pub border_style: Option<BorderStyle>,

    #[arg(long)]
    pub border_radius: Option<f32>,

    #[arg(long)]
    pub padding: Option<f32>,

    /// Extra container classes, whitespace separated
    #[arg(long)]
    pub class_name: Option<String>,

    /// Reserved palette name
    #[arg(long)]
    pub color_scheme: Option<String>,

    /// Style override: background
    #[arg(long, value_parser = parse_hex_color)]
    pub style_background: Option<Rgb565>,

    /// Style override: border color
    #[arg(long, value_parser = parse_hex_color)]
    pub style_border_color: Option<Rgb565>,

    /// Style override: border width
    #[arg(long)]
    pub style_border_width: Option<f32>,

    /// Style override: border radius
    #[arg(long)]
    pub style_border_radius: Option<f32>,

    /// Style override: border style
    #[arg(long, value_parser = parse_border_style)]
    pub style_border_style: Option<BorderStyle>,

    /// Display width in pixels
    #[arg(long, default_value_t = 640)]
    pub width: u32,

    /// Display height in pixels
    #[arg(long, default_value_t = 640)]
    pub height: u32,

    /// Window / snapshot pixel scale
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=8))]
    pub scale: u32,

    /// Render one frame to a PNG file instead of opening a window
    #[arg(long)]
    pub snapshot: Option<PathBuf>,

    /// Snapshot with the pointer over the chip
    #[arg(long)]
    pub hover: bool,

    /// Milliseconds to simulate before the snapshot
    #[arg(long, default_value_t = 0)]
    pub elapsed_ms: u32,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,
}

impl Cli {
    /// Widget configuration: the host page's, with every given flag applied.
    pub fn chip_config(&self) -> ChipConfig<'_> {
        let base = host_config();
        ChipConfig {
            size: self.size.unwrap_or(base.size),
            text: self.text.as_deref().unwrap_or(base.text),
            show_stripes: base.show_stripes && !self.no_stripes,
            enable_animation: base.enable_animation && !self.no_animation,
            background_color: self.background.unwrap_or(base.background_color),
            container_mode: self.mode.unwrap_or(base.container_mode),
            border_width: self.border_width.unwrap_or(base.border_width),
            border_color: self.border_color.unwrap_or(base.border_color),
            border_style: self.border_style.unwrap_or(base.border_style),
            border_radius: self.border_radius.unwrap_or(base.border_radius),
            padding: self.padding.unwrap_or(base.padding),
            class_name: self.class_name.as_deref().unwrap_or(base.class_name),
            style: StyleOverrides {
                background: self.style_background,
                border_color: self.style_border_color,
                border_width: self.style_border_width,
                border_style: self.style_border_style,
                border_radius: self.style_border_radius,
            },
            color_scheme: self.color_scheme.as_deref().unwrap_or(base.color_scheme),
        }
    }
}

fn parse_size(input: &str) -> Result<ChipSize, Infallible> { Ok(ChipSize::parse(input)) }

fn parse_mode(input: &str) -> Result<ContainerMode, Infallible> { Ok(ContainerMode::parse(input)) }

fn parse_border_style(input: &str) -> Result<BorderStyle, Infallible> { Ok(BorderStyle::parse(input)) }

// =============================================================================
// Tests
// =============================================================================
