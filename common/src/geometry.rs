//! Geometry resolver.
//!
//! Every pixel measurement of the widget is derived from the base chip size
//! (and the container padding), so the layout can never drift out of
//! proportion:
//!
//! ```text
//! chip_size            = resolve(size)
//! pin_width            = chip_size * 0.057
//! pin_length           = chip_size * 0.114
//! pin_gap              = chip_size * 0.043
//! chip_border_radius   = chip_size * 0.086
//! chip_total_size      = chip_size + 2 * pin_length + 40
//! container_total_size = chip_total_size + 2 * padding
//! ```

use crate::config::ChipSize;

// =============================================================================
// Preset Table
// =============================================================================

/// `small` preset in pixels.
pub const PRESET_SMALL: f32 = 140.0;

/// `medium` preset in pixels. Fallback for anything unrecognized.
pub const PRESET_MEDIUM: f32 = 280.0;

/// `large` preset in pixels.
pub const PRESET_LARGE: f32 = 420.0;

// =============================================================================
// Ratios
// =============================================================================

pub const PIN_WIDTH_RATIO: f32 = 0.057;
pub const PIN_LENGTH_RATIO: f32 = 0.114;
pub const PIN_GAP_RATIO: f32 = 0.043;
pub const CHIP_RADIUS_RATIO: f32 = 0.086;

/// Margin added around the pinned chip, in pixels.
pub const CHIP_MARGIN: f32 = 40.0;

/// Extra size of the housing over the body, in pixels.
pub const HOUSING_EXTRA: f32 = 16.0;

/// Body corner radius is the housing radius minus this.
pub const BODY_RADIUS_INSET: f32 = 4.0;

pub const LED_INSET_RATIO: f32 = 0.08;
pub const LED_GAP_RATIO: f32 = 0.04;
pub const LED_DIAMETER_RATIO: f32 = 0.086;
pub const INDICATOR_SIZE_RATIO: f32 = 0.114;
pub const INDICATOR_RADIUS_RATIO: f32 = 0.014;
pub const INDICATOR_INSET_RATIO: f32 = 0.08;
pub const LABEL_FONT_RATIO: f32 = 0.45;
pub const STRIPE_HEIGHT_RATIO: f32 = 0.25;

/// Resolve a [`ChipSize`] to its base dimension in pixels.
///
/// Explicit sizes that are not finite and positive degrade to `medium`.
pub fn resolve_chip_size(size: ChipSize) -> f32 {
    match size {
        ChipSize::Small => PRESET_SMALL,
        ChipSize::Medium => PRESET_MEDIUM,
        ChipSize::Large => PRESET_LARGE,
        ChipSize::Pixels(px) if px.is_finite() && px > 0.0 => px,
        ChipSize::Pixels(_) => PRESET_MEDIUM,
    }
}

// =============================================================================
// Geometry
// =============================================================================

/// Derived pixel measurements of one widget.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    pub chip_size: f32,
    pub pin_width: f32,
    pub pin_length: f32,
    pub pin_gap: f32,
    pub chip_border_radius: f32,
    pub chip_total_size: f32,
    pub container_total_size: f32,
}

impl Geometry {
    /// Derive the geometry for `size` and `padding`.
    ///
    /// Total over its domain: a negative or non-finite padding counts as zero.
    pub fn resolve(size: ChipSize, padding: f32) -> Self {
        let chip_size = resolve_chip_size(size);
        let padding = if padding.is_finite() { padding.max(0.0) } else { 0.0 };

        let pin_width = chip_size * PIN_WIDTH_RATIO;
        let pin_length = chip_size * PIN_LENGTH_RATIO;
        let pin_gap = chip_size * PIN_GAP_RATIO;
        let chip_border_radius = chip_size * CHIP_RADIUS_RATIO;
        let chip_total_size = chip_size + pin_length * 2.0 + CHIP_MARGIN;
        let container_total_size = chip_total_size + padding * 2.0;

        Self {
            chip_size,
            pin_width,
            pin_length,
            pin_gap,
            chip_border_radius,
            chip_total_size,
            container_total_size,
        }
    }

    /// Side of the chip housing (body plus its dark rim).
    #[inline]
    pub fn housing_size(&self) -> f32 { self.chip_size + HOUSING_EXTRA }

    /// Side of the hover target, which is also the box the hover scale applies to.
    #[inline]
    pub fn hover_box_size(&self) -> f32 { self.chip_size + self.pin_length * 2.0 + HOUSING_EXTRA }

    #[inline]
    pub fn body_radius(&self) -> f32 { (self.chip_border_radius - BODY_RADIUS_INSET).max(0.0) }

    #[inline]
    pub fn led_inset(&self) -> f32 { self.chip_size * LED_INSET_RATIO }

    #[inline]
    pub fn led_gap(&self) -> f32 { self.chip_size * LED_GAP_RATIO }

    #[inline]
    pub fn led_diameter(&self) -> f32 { self.chip_size * LED_DIAMETER_RATIO }

    #[inline]
    pub fn indicator_size(&self) -> f32 { self.chip_size * INDICATOR_SIZE_RATIO }

    #[inline]
    pub fn indicator_radius(&self) -> f32 { self.chip_size * INDICATOR_RADIUS_RATIO }

    #[inline]
    pub fn indicator_inset(&self) -> f32 { self.chip_size * INDICATOR_INSET_RATIO }

    #[inline]
    pub fn label_font_size(&self) -> f32 { self.chip_size * LABEL_FONT_RATIO }

    #[inline]
    pub fn stripe_height(&self) -> f32 { self.chip_size * STRIPE_HEIGHT_RATIO }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-3;

    fn assert_close(actual: f32, expected: f32, what: &str) {
        assert!(
            (actual - expected).abs() < EPSILON,
            "{what}: expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_presets_follow_ratios() {
        for size in [ChipSize::Small, ChipSize::Medium, ChipSize::Large] {
            let g = Geometry::resolve(size, 20.0);
            let c = g.chip_size;
            assert_eq!(g.pin_width, c * 0.057, "{size}: pin width");
            assert_eq!(g.pin_length, c * 0.114, "{size}: pin length");
            assert_eq!(g.pin_gap, c * 0.043, "{size}: pin gap");
            assert_eq!(g.chip_border_radius, c * 0.086, "{size}: chip radius");
            assert_eq!(g.chip_total_size, c + g.pin_length * 2.0 + 40.0, "{size}: chip total");
            assert_eq!(g.container_total_size, g.chip_total_size + 40.0, "{size}: container total");
        }
    }

    #[test]
    fn test_preset_table() {
        assert_eq!(Geometry::resolve(ChipSize::Small, 0.0).chip_size, 140.0);
        assert_eq!(Geometry::resolve(ChipSize::Medium, 0.0).chip_size, 280.0);
        assert_eq!(Geometry::resolve(ChipSize::Large, 0.0).chip_size, 420.0);
    }

    #[test]
    fn test_unknown_preset_is_medium() {
        for name in ["tiny", "", "MEDIUM", "xl"] {
            let g = Geometry::resolve(ChipSize::parse(name), 20.0);
            assert_eq!(g.chip_size, 280.0, "{name:?} should resolve to medium");
        }
    }

    #[test]
    fn test_numeric_size_bypasses_presets() {
        let g = Geometry::resolve(ChipSize::Pixels(200.0), 20.0);
        assert_eq!(g.chip_size, 200.0);

        let g = Geometry::resolve(ChipSize::Pixels(140.5), 0.0);
        assert_eq!(g.chip_size, 140.5);
    }

    #[test]
    fn test_invalid_numeric_size_degrades_to_medium() {
        for px in [0.0, -10.0, f32::NAN, f32::INFINITY] {
            let g = Geometry::resolve(ChipSize::Pixels(px), 0.0);
            assert_eq!(g.chip_size, PRESET_MEDIUM, "{px} should degrade to medium");
        }
    }

    #[test]
    fn test_small_example() {
        let g = Geometry::resolve(ChipSize::Small, 20.0);
        assert_eq!(g.chip_size, 140.0);
        assert_close(g.pin_length, 15.96, "pin length");
        assert_close(g.container_total_size, 251.92, "container total");
    }

    #[test]
    fn test_container_total_formula() {
        for padding in [0.0, 5.0, 20.0, 64.0] {
            for chip in [50.0, 140.0, 333.0] {
                let g = Geometry::resolve(ChipSize::Pixels(chip), padding);
                let expected = chip + 2.0 * (chip * 0.114) + 40.0 + 2.0 * padding;
                assert_close(g.container_total_size, expected, "container total");
            }
        }
    }

    #[test]
    fn test_negative_padding_is_zero() {
        let g = Geometry::resolve(ChipSize::Medium, -5.0);
        assert_eq!(g.container_total_size, g.chip_total_size);
    }

    #[test]
    fn test_secondary_measurements() {
        let g = Geometry::resolve(ChipSize::Medium, 20.0);
        assert_eq!(g.housing_size(), 296.0);
        assert_close(g.hover_box_size(), 280.0 + 2.0 * 31.92 + 16.0, "hover box");
        assert_close(g.body_radius(), 280.0 * 0.086 - 4.0, "body radius");
        assert_close(g.stripe_height(), 70.0, "stripe height");
        assert_close(g.label_font_size(), 126.0, "label font");

        let tiny = Geometry::resolve(ChipSize::Pixels(10.0), 0.0);
        assert_eq!(tiny.body_radius(), 0.0, "body radius never goes negative");
    }
}
