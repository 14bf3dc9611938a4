//! Color palette for the retro microchip widget.
//!
//! # Rgb565 Conversion
//!
//! The palette is authored as 24-bit hex values and narrowed to Rgb565 at
//! compile time by [`rgb`], which keeps the top 5/6/5 bits of each channel.
//! Rgb565 is the native format of the simulator display and of the SPI panels
//! embedded-graphics targets, so no conversion happens while drawing.
//!
//! # Opacity
//!
//! Embedded-graphics draw targets cannot be read back, so translucent layers
//! (pin shimmer, shadows, LED glow) are pre-blended against the color known to
//! sit underneath them with [`mix`].

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use thiserror::Error;

// =============================================================================
// Conversion Helpers
// =============================================================================

/// Narrow an 8-bit-per-channel color to Rgb565.
#[inline]
pub const fn rgb(r: u8, g: u8, b: u8) -> Rgb565 { Rgb565::new(r >> 3, g >> 2, b >> 3) }

/// Blend `fg` over `bg` with opacity `alpha` (0.0 = `bg`, 1.0 = `fg`).
///
/// Alpha outside `0.0..=1.0` is clamped.
pub fn mix(bg: Rgb565, fg: Rgb565, alpha: f32) -> Rgb565 {
    let t = alpha.clamp(0.0, 1.0);
    let channel = |from: u8, to: u8| -> u8 {
        let value = f32::from(from) + (f32::from(to) - f32::from(from)) * t;
        micromath::F32(value).round().0 as u8
    };

    Rgb565::new(channel(bg.r(), fg.r()), channel(bg.g(), fg.g()), channel(bg.b(), fg.b()))
}

// =============================================================================
// Standard Colors
// =============================================================================

/// Pure black. Base of every drop shadow.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. Base of the LED glow.
pub const WHITE: Rgb565 = Rgb565::WHITE;

// =============================================================================
// Widget Palette
// =============================================================================

/// Default container fill (#f5e6d3, warm paper).
pub const DEFAULT_BACKGROUND: Rgb565 = rgb(0xf5, 0xe6, 0xd3);

/// Default container border (#2a2a2a).
pub const DEFAULT_BORDER: Rgb565 = rgb(0x2a, 0x2a, 0x2a);

/// Chip housing and pins (#1f2f2a).
pub const CHIP_OUTER: Rgb565 = rgb(0x1f, 0x2f, 0x2a);

/// Chip body (#89b097).
pub const CHIP_INNER: Rgb565 = rgb(0x89, 0xb0, 0x97);

/// Label text (#1f2f2a).
pub const LABEL_TEXT: Rgb565 = rgb(0x1f, 0x2f, 0x2a);

/// Status LED lens (#c5d4c8).
pub const LED: Rgb565 = rgb(0xc5, 0xd4, 0xc8);

/// Bottom-right indicator square (#8b6544).
pub const INDICATOR: Rgb565 = rgb(0x8b, 0x65, 0x44);

/// Top stripe band (#d4924b).
pub const STRIPE_TOP: Rgb565 = rgb(0xd4, 0x92, 0x4b);

/// Middle stripe band (#6bb5c7).
pub const STRIPE_MIDDLE: Rgb565 = rgb(0x6b, 0xb5, 0xc7);

/// Bottom stripe band (#7b6b9f).
pub const STRIPE_BOTTOM: Rgb565 = rgb(0x7b, 0x6b, 0x9f);

/// Host page background.
pub const HOST_BACKGROUND: Rgb565 = WHITE;

/// Host page frame (#ccc).
pub const HOST_BORDER: Rgb565 = rgb(0xcc, 0xcc, 0xcc);

// =============================================================================
// Translucency Levels
// =============================================================================

/// Housing shadow opacity while hovered.
pub const SHADOW_DARK: f32 = 0.3;

/// Housing shadow and LED inset opacity while idle.
pub const SHADOW_LIGHT: f32 = 0.2;

/// LED glow opacity while hovered.
pub const LED_GLOW: f32 = 0.8;

/// Label drop shadow opacity while hovered.
pub const TEXT_SHADOW_HOVER: f32 = 0.2;

/// Label drop shadow opacity while idle.
pub const TEXT_SHADOW: f32 = 0.1;

// =============================================================================
// Hex Parsing
// =============================================================================

/// Error returned when a `#rgb` / `#rrggbb` color string is malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("color must start with '#'")]
    MissingHash,
    #[error("expected 3 or 6 hex digits, got {0}")]
    InvalidLength(usize),
    #[error("invalid hex digit in color")]
    InvalidDigit,
}

/// Parse a CSS-style hex color (`#rgb` or `#rrggbb`).
pub fn parse_hex_color(input: &str) -> Result<Rgb565, ColorParseError> {
    let digits = input.trim().strip_prefix('#').ok_or(ColorParseError::MissingHash)?;
    if !digits.is_ascii() {
        return Err(ColorParseError::InvalidDigit);
    }

    let byte = |s: &str| u8::from_str_radix(s, 16).map_err(|_| ColorParseError::InvalidDigit);

    match digits.len() {
        3 => {
            // #abc expands to #aabbcc
            let r = byte(&digits[0..1])?;
            let g = byte(&digits[1..2])?;
            let b = byte(&digits[2..3])?;
            Ok(rgb(r * 17, g * 17, b * 17))
        }
        6 => Ok(rgb(byte(&digits[0..2])?, byte(&digits[2..4])?, byte(&digits[4..6])?)),
        n => Err(ColorParseError::InvalidLength(n)),
    }
}

// =============================================================================
// Tests
// =============================================================================
