//! Widget configuration.
//!
//! A [`ChipConfig`] is the complete, immutable input of one render. Every
//! field has a default, and every string-typed option degrades to a default
//! instead of failing when it is not recognized.

use core::fmt;

use embedded_graphics::pixelcolor::Rgb565;

use crate::colors::{DEFAULT_BACKGROUND, DEFAULT_BORDER};

/// Class every container carries before the caller's `class_name`.
pub const CONTAINER_CLASS: &str = "RetroMicrochipContainer";

/// Component identifier exposed to hosts (the `data-component` attribute).
pub const COMPONENT_NAME: &str = "retro-microchip";

/// Default label text.
pub const DEFAULT_TEXT: &str = "BG";

/// Default container border width in pixels.
pub const DEFAULT_BORDER_WIDTH: f32 = 3.0;

/// Default container corner radius in pixels.
pub const DEFAULT_BORDER_RADIUS: f32 = 12.0;

/// Default container padding in pixels.
pub const DEFAULT_PADDING: f32 = 20.0;

/// Default (and currently only) color scheme name.
pub const DEFAULT_COLOR_SCHEME: &str = "default";

// =============================================================================
// Size
// =============================================================================

/// Base chip dimension: a named preset or an explicit pixel size.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum ChipSize {
    Small,
    #[default]
    Medium,
    Large,
    /// Explicit size in pixels, used verbatim when finite and positive.
    Pixels(f32),
}

impl ChipSize {
    /// Parse a size option.
    ///
    /// Numeric strings become [`ChipSize::Pixels`]; anything else is looked up
    /// as a preset name.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        match input.parse::<f32>() {
            Ok(pixels) => Self::Pixels(pixels),
            Err(_) => Self::from_preset(input),
        }
    }

    /// Look up a preset by name. Unknown names fall back to `medium`.
    pub fn from_preset(name: &str) -> Self {
        match name {
            "small" => Self::Small,
            "large" => Self::Large,
            _ => Self::Medium,
        }
    }
}

impl fmt::Display for ChipSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Small => f.write_str("small"),
            Self::Medium => f.write_str("medium"),
            Self::Large => f.write_str("large"),
            Self::Pixels(px) => write!(f, "{px}"),
        }
    }
}

// =============================================================================
// Container Mode
// =============================================================================

/// How the outer container occupies its parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ContainerMode {
    /// Exactly `container_total_size` square, inline flow.
    #[default]
    Inline,
    /// Stretch to the parent, floored at `container_total_size`.
    Fill,
    /// Exactly `container_total_size` square, block flow.
    Fixed,
}

impl ContainerMode {
    /// Parse a mode name. Unknown names fall back to `inline`.
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "fill" => Self::Fill,
            "fixed" => Self::Fixed,
            _ => Self::Inline,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Inline => "inline",
            Self::Fill => "fill",
            Self::Fixed => "fixed",
        }
    }
}

impl fmt::Display for ContainerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name()) }
}

// =============================================================================
// Border Style
// =============================================================================

/// Container border line style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BorderStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    Double,
    None,
}

impl BorderStyle {
    /// Parse a style name. Unknown names fall back to `solid`.
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "dashed" => Self::Dashed,
            "dotted" => Self::Dotted,
            "double" => Self::Double,
            "none" | "hidden" => Self::None,
            _ => Self::Solid,
        }
    }
}

// =============================================================================
// Style Overrides
// =============================================================================

/// Caller-supplied appearance overrides. Any field set here wins over the
/// corresponding [`ChipConfig`] field.
///
/// Overrides only touch appearance. Sizing always comes from the geometry.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct StyleOverrides {
    pub background: Option<Rgb565>,
    pub border_color: Option<Rgb565>,
    pub border_width: Option<f32>,
    pub border_style: Option<BorderStyle>,
    pub border_radius: Option<f32>,
}

impl StyleOverrides {
    pub const fn empty() -> Self {
        Self {
            background: None,
            border_color: None,
            border_width: None,
            border_style: None,
            border_radius: None,
        }
    }
}

/// Final container appearance after overrides are merged.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerStyle {
    pub background: Rgb565,
    pub border_color: Rgb565,
    pub border_width: f32,
    pub border_style: BorderStyle,
    pub border_radius: f32,
}

// =============================================================================
// Configuration
// =============================================================================

/// Widget configuration. Borrowed strings keep the type `no_std` friendly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChipConfig<'a> {
    pub size: ChipSize,
    pub text: &'a str,
    pub show_stripes: bool,
    pub enable_animation: bool,
    pub background_color: Rgb565,
    pub container_mode: ContainerMode,
    pub border_width: f32,
    pub border_color: Rgb565,
    pub border_style: BorderStyle,
    pub border_radius: f32,
    pub padding: f32,
    pub class_name: &'a str,
    pub style: StyleOverrides,
    /// Reserved for palette selection. Accepted and passed through, but the
    /// palette is fixed.
    pub color_scheme: &'a str,
}

impl ChipConfig<'_> {
    pub const fn new() -> Self {
        Self {
            size: ChipSize::Medium,
            text: DEFAULT_TEXT,
            show_stripes: true,
            enable_animation: true,
            background_color: DEFAULT_BACKGROUND,
            container_mode: ContainerMode::Inline,
            border_width: DEFAULT_BORDER_WIDTH,
            border_color: DEFAULT_BORDER,
            border_style: BorderStyle::Solid,
            border_radius: DEFAULT_BORDER_RADIUS,
            padding: DEFAULT_PADDING,
            class_name: "",
            style: StyleOverrides::empty(),
            color_scheme: DEFAULT_COLOR_SCHEME,
        }
    }

    /// Container appearance with the caller's overrides merged last.
    pub fn container_style(&self) -> ContainerStyle {
        ContainerStyle {
            background: self.style.background.unwrap_or(self.background_color),
            border_color: self.style.border_color.unwrap_or(self.border_color),
            border_width: self.style.border_width.unwrap_or(self.border_width).max(0.0),
            border_style: self.style.border_style.unwrap_or(self.border_style),
            border_radius: self.style.border_radius.unwrap_or(self.border_radius).max(0.0),
        }
    }

    /// Container classes: [`CONTAINER_CLASS`] followed by the caller's classes.
    pub fn class_names(&self) -> impl Iterator<Item = &str> {
        core::iter::once(CONTAINER_CLASS).chain(self.class_name.split_whitespace())
    }
}

impl Default for ChipConfig<'_> {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLACK, WHITE};

    #[test]
    fn test_defaults_match_option_table() {
        let config = ChipConfig::default();
        assert_eq!(config.size, ChipSize::Medium);
        assert_eq!(config.text, "BG");
        assert!(config.show_stripes);
        assert!(config.enable_animation);
        assert_eq!(config.background_color, DEFAULT_BACKGROUND);
        assert_eq!(config.container_mode, ContainerMode::Inline);
        assert_eq!(config.border_width, 3.0);
        assert_eq!(config.border_color, DEFAULT_BORDER);
        assert_eq!(config.border_style, BorderStyle::Solid);
        assert_eq!(config.border_radius, 12.0);
        assert_eq!(config.padding, 20.0);
        assert_eq!(config.color_scheme, "default");
    }

    #[test]
    fn test_chip_size_parse() {
        assert_eq!(ChipSize::parse("small"), ChipSize::Small);
        assert_eq!(ChipSize::parse("large"), ChipSize::Large);
        assert_eq!(ChipSize::parse("200"), ChipSize::Pixels(200.0));
        assert_eq!(ChipSize::parse(" 12.5 "), ChipSize::Pixels(12.5));
        assert_eq!(ChipSize::parse("huge"), ChipSize::Medium, "unknown preset falls back to medium");
        assert_eq!(ChipSize::parse("Small"), ChipSize::Medium, "preset lookup is exact");
    }

    #[test]
    fn test_container_mode_parse() {
        assert_eq!(ContainerMode::parse("fill"), ContainerMode::Fill);
        assert_eq!(ContainerMode::parse("fixed"), ContainerMode::Fixed);
        assert_eq!(ContainerMode::parse("inline"), ContainerMode::Inline);
        assert_eq!(ContainerMode::parse("grid"), ContainerMode::Inline);
    }

    #[test]
    fn test_border_style_parse() {
        assert_eq!(BorderStyle::parse("dashed"), BorderStyle::Dashed);
        assert_eq!(BorderStyle::parse("none"), BorderStyle::None);
        assert_eq!(BorderStyle::parse("groove"), BorderStyle::Solid);
    }

    #[test]
    fn test_style_overrides_win() {
        let config = ChipConfig {
            style: StyleOverrides {
                background: Some(BLACK),
                border_width: Some(1.0),
                ..StyleOverrides::empty()
            },
            ..ChipConfig::default()
        };

        let style = config.container_style();
        assert_eq!(style.background, BLACK, "override background wins");
        assert_eq!(style.border_width, 1.0, "override border width wins");
        assert_eq!(style.border_color, DEFAULT_BORDER, "unset override keeps config value");
        assert_eq!(style.border_radius, 12.0);
    }

    #[test]
    fn test_container_style_without_overrides() {
        let config = ChipConfig {
            background_color: WHITE,
            border_style: BorderStyle::Dotted,
            ..ChipConfig::default()
        };
        let style = config.container_style();
        assert_eq!(style.background, WHITE);
        assert_eq!(style.border_style, BorderStyle::Dotted);
    }

    #[test]
    fn test_class_names() {
        let config = ChipConfig { class_name: "hero  wide", ..ChipConfig::default() };
        let mut names = config.class_names();
        assert_eq!(names.next(), Some(CONTAINER_CLASS));
        assert_eq!(names.next(), Some("hero"));
        assert_eq!(names.next(), Some("wide"));
        assert_eq!(names.next(), None);
    }
}
