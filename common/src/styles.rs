//! Pre-computed text styles and font references.
//!
//! The label font is magnified at draw time to reach the label size derived
//! from the chip geometry, so only the base font is fixed here.

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::text::{Alignment, Baseline, TextStyle, TextStyleBuilder};
use profont::PROFONT_24_POINT;

use crate::colors::DEFAULT_BORDER;

/// Centered horizontally and vertically on the text position.
pub const CENTERED_MIDDLE: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

/// Left-aligned, top baseline. Used for overlay lines.
pub const TOP_LEFT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .build();

/// Base font of the chip label (`ProFont` 24pt).
pub const LABEL_FONT: &MonoFont<'static> = &PROFONT_24_POINT;

/// Small font for debug overlays (6x10 pixels).
pub const OVERLAY_FONT: &MonoFont<'static> = &FONT_6X10;

/// Overlay text on the light host page.
pub const OVERLAY_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, DEFAULT_BORDER);
