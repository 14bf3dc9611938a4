//! Render tree of the chip widget.
//!
//! A [`Scene`] is a flat display list in back-to-front order. Building it is a
//! pure function of configuration, geometry, interaction visuals and
//! placement, so the same inputs always produce the same scene and tests can
//! inspect it without drawing anything.
//!
//! # Layer Order
//!
//! ```text
//! Container → Stripes × 3 → HousingShadow → Housing
//!   → Pins(Top) × 7 → Pins(Bottom) × 7 → Pins(Left) × 5 → Pins(Right) × 5
//!   → Body → LedGlow × 2 (hovered only) → Led × 2
//!   → LabelShadow → Label → Indicator
//! ```
//!
//! # Translucency
//!
//! Each element carries its logical `opacity` and a `color` that is already
//! blended over whatever sits underneath it (see [`crate::colors::mix`]).

use embedded_graphics::pixelcolor::Rgb565;
use heapless::Vec;

use crate::animations::PinGroup;
use crate::colors::{
    BLACK,
    CHIP_INNER,
    CHIP_OUTER,
    INDICATOR,
    LABEL_TEXT,
    LED,
    LED_GLOW,
    STRIPE_BOTTOM,
    STRIPE_MIDDLE,
    STRIPE_TOP,
    WHITE,
    mix,
};
use crate::config::{BorderStyle, ChipConfig, ContainerStyle};
use crate::geometry::Geometry;
use crate::layout::{Placement, PointF, RectF};
use crate::state::Visuals;

/// Upper bound on elements in one scene.
pub const SCENE_CAPACITY: usize = 40;

/// Blur radius of the LED glow, in pixels.
const LED_GLOW_SPREAD: f32 = 10.0;

/// A blurred shadow is approximated by a hard one at this fraction of its opacity.
const SHADOW_SOFTNESS: f32 = 0.5;

// =============================================================================
// Elements
// =============================================================================

/// Which visual layer an element belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    Container,
    Stripes,
    HousingShadow,
    Housing,
    Pins(PinGroup),
    Body,
    LedGlow,
    Led,
    LabelShadow,
    Label,
    Indicator,
}

/// Per-corner radii in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Corners {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl Corners {
    pub const fn uniform(radius: f32) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }

    /// Rounded only on the outward-facing end of a pin.
    pub const fn pin_tip(group: PinGroup, radius: f32) -> Self {
        match group {
            PinGroup::Top => Self { top_left: radius, top_right: radius, bottom_right: 0.0, bottom_left: 0.0 },
            PinGroup::Bottom => Self { top_left: 0.0, top_right: 0.0, bottom_right: radius, bottom_left: radius },
            PinGroup::Left => Self { top_left: radius, top_right: 0.0, bottom_right: 0.0, bottom_left: radius },
            PinGroup::Right => Self { top_left: 0.0, top_right: radius, bottom_right: radius, bottom_left: 0.0 },
        }
    }

    fn scaled(self, factor: f32) -> Self {
        Self {
            top_left: self.top_left * factor,
            top_right: self.top_right * factor,
            bottom_right: self.bottom_right * factor,
            bottom_left: self.bottom_left * factor,
        }
    }
}

/// Geometry of an element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape<'a> {
    /// Container box with its border.
    Panel {
        rect: RectF,
        radius: f32,
        border_width: f32,
        border_color: Rgb565,
        border_style: BorderStyle,
    },
    /// Filled rounded rectangle, optionally clipped.
    Rect {
        rect: RectF,
        corners: Corners,
        clip: Option<RectF>,
    },
    /// Filled circle.
    Circle { center: PointF, diameter: f32 },
    /// Centered text line.
    Text {
        center: PointF,
        font_px: f32,
        content: &'a str,
    },
}

impl Shape<'_> {
    /// Area the shape may paint, or `None` when it is only known at draw time.
    pub fn bounds(&self) -> Option<RectF> {
        match *self {
            Self::Panel { rect, .. } | Self::Rect { rect, clip: None, .. } => Some(rect),
            Self::Rect { clip: Some(clip), .. } => Some(clip),
            Self::Circle { center, diameter } => Some(RectF::centered(center, diameter, diameter)),
            Self::Text { .. } => None,
        }
    }
}

/// One entry of the display list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Element<'a> {
    pub layer: Layer,
    pub shape: Shape<'a>,
    /// Final color, already blended over the backdrop.
    pub color: Rgb565,
    /// Logical opacity before blending.
    pub opacity: f32,
}

// =============================================================================
// Scene
// =============================================================================

/// Ordered display list of one widget frame.
#[derive(Clone, Debug, Default)]
pub struct Scene<'a> {
    elements: Vec<Element<'a>, SCENE_CAPACITY>,
}

impl<'a> Scene<'a> {
    /// Build the scene for one frame.
    pub fn build(config: &ChipConfig<'a>, geometry: &Geometry, visuals: &Visuals, placement: &Placement) -> Self {
        let mut builder = SceneBuilder {
            scene: Scene::default(),
            geometry,
            visuals,
            placement,
            style: config.container_style(),
            show_stripes: config.show_stripes,
        };

        builder.container();
        if config.show_stripes {
            builder.stripes();
        }
        builder.housing();
        for group in PinGroup::ALL {
            builder.pins(group);
        }
        builder.body(config.text);

        builder.scene
    }

    #[inline]
    pub fn elements(&self) -> &[Element<'a>] { &self.elements }

    #[inline]
    pub fn len(&self) -> usize { self.elements.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.elements.is_empty() }

    /// Elements on `layer`, in draw order.
    pub fn layer(&self, layer: Layer) -> impl Iterator<Item = &Element<'a>> {
        self.elements.iter().filter(move |e| e.layer == layer)
    }

    /// Number of pins drawn on `group`.
    pub fn pin_count(&self, group: PinGroup) -> usize { self.layer(Layer::Pins(group)).count() }

    /// Distinct layers in draw order (consecutive duplicates collapsed).
    pub fn layer_order(&self) -> impl Iterator<Item = Layer> + '_ {
        let mut previous = None;
        self.elements.iter().filter_map(move |e| {
            if previous == Some(e.layer) {
                None
            } else {
                previous = Some(e.layer);
                Some(e.layer)
            }
        })
    }

    fn push(&mut self, layer: Layer, shape: Shape<'a>, color: Rgb565, opacity: f32) {
        self.elements
            .push(Element {
                layer,
                shape,
                color,
                opacity,
            })
            .ok();
    }
}

struct SceneBuilder<'s, 'a> {
    scene: Scene<'a>,
    geometry: &'s Geometry,
    visuals: &'s Visuals,
    placement: &'s Placement,
    style: ContainerStyle,
    show_stripes: bool,
}

impl<'a> SceneBuilder<'_, 'a> {
    /// Stripe bands: top edge of the stack and band height.
    fn stripe_layout(&self) -> (f32, f32) {
        let band = self.geometry.stripe_height();
        let top = self.placement.padding_box.center().y - band * 1.5;
        (top, band)
    }

    /// Color showing behind the chip at height `y`.
    fn backdrop_at(&self, y: f32) -> Rgb565 {
        if self.show_stripes {
            let (top, band) = self.stripe_layout();
            for (i, color) in [STRIPE_TOP, STRIPE_MIDDLE, STRIPE_BOTTOM].into_iter().enumerate() {
                let start = top + band * i as f32;
                if y >= start && y < start + band {
                    return color;
                }
            }
        }
        self.style.background
    }

    /// Apply the hover scale about the chip center.
    fn scale_rect(&self, rect: RectF) -> RectF { rect.scaled_about(self.placement.chip_center, self.visuals.scale) }

    fn scale_point(&self, point: PointF) -> PointF { point.scaled_about(self.placement.chip_center, self.visuals.scale) }

    fn body_rect(&self) -> RectF {
        let size = self.geometry.chip_size;
        RectF::centered(self.placement.chip_center, size, size)
    }

    fn container(&mut self) {
        let shape = Shape::Panel {
            rect: self.placement.outer,
            radius: self.style.border_radius,
            border_width: self.style.border_width,
            border_color: self.style.border_color,
            border_style: self.style.border_style,
        };
        self.scene.push(Layer::Container, shape, self.style.background, 1.0);
    }

    fn stripes(&mut self) {
        let (top, band) = self.stripe_layout();
        let area = self.placement.padding_box;
        for (i, color) in [STRIPE_TOP, STRIPE_MIDDLE, STRIPE_BOTTOM].into_iter().enumerate() {
            let rect = RectF::new(area.x, top + band * i as f32, area.width, band);
            let shape = Shape::Rect {
                rect,
                corners: Corners::default(),
                clip: Some(area),
            };
            self.scene.push(Layer::Stripes, shape, color, 1.0);
        }
    }

    fn housing(&mut self) {
        let side = self.geometry.housing_size();
        let housing = RectF::centered(self.placement.chip_center, side, side);
        let corners = Corners::uniform(self.geometry.chip_border_radius).scaled(self.visuals.scale);

        let shadow = self.scale_rect(housing.translated(0.0, self.visuals.shadow_offset));
        let alpha = self.visuals.shadow_alpha * SHADOW_SOFTNESS;
        let under = self.backdrop_at(shadow.bottom() - self.visuals.shadow_offset / 2.0);
        let shape = Shape::Rect {
            rect: shadow,
            corners,
            clip: None,
        };
        self.scene.push(Layer::HousingShadow, shape, mix(under, BLACK, alpha), alpha);

        let shape = Shape::Rect {
            rect: self.scale_rect(housing),
            corners,
            clip: None,
        };
        self.scene.push(Layer::Housing, shape, CHIP_OUTER, 1.0);
    }

    /// Unscaled rectangle of pin `index` on `group`.
    fn pin_rect(&self, group: PinGroup, index: usize) -> RectF {
        let g = self.geometry;
        let side = g.housing_size();
        let housing = RectF::centered(self.placement.chip_center, side, side);

        let count = group.count() as f32;
        let run = count * g.pin_width + (count - 1.0) * g.pin_gap;
        let along = index as f32 * (g.pin_width + g.pin_gap);

        match group {
            PinGroup::Top | PinGroup::Bottom => {
                let x = housing.center().x - run / 2.0 + along;
                let y = if group == PinGroup::Top { housing.y - g.pin_length } else { housing.bottom() };
                RectF::new(x, y, g.pin_width, g.pin_length)
            }
            PinGroup::Left | PinGroup::Right => {
                let y = housing.center().y - run / 2.0 + along;
                let x = if group == PinGroup::Left { housing.x - g.pin_length } else { housing.right() };
                RectF::new(x, y, g.pin_length, g.pin_width)
            }
        }
    }

    fn pins(&mut self, group: PinGroup) {
        let corners = Corners::pin_tip(group, self.geometry.pin_width / 2.0).scaled(self.visuals.scale);
        for index in 0..group.count() {
            let rect = self.scale_rect(self.pin_rect(group, index));
            let opacity = self.visuals.pin_opacity(group, index);
            let color = mix(self.backdrop_at(rect.center().y), CHIP_OUTER, opacity);
            let shape = Shape::Rect {
                rect,
                corners,
                clip: None,
            };
            self.scene.push(Layer::Pins(group), shape, color, opacity);
        }
    }

    fn body(&mut self, text: &'a str) {
        let g = self.geometry;
        let v = self.visuals;
        let s = v.scale;
        let body = self.body_rect();

        let shape = Shape::Rect {
            rect: self.scale_rect(body),
            corners: Corners::uniform(g.body_radius()).scaled(s),
            clip: None,
        };
        self.scene.push(Layer::Body, shape, CHIP_INNER, 1.0);

        // Status LEDs, top-left
        let diameter = g.led_diameter();
        let first = PointF::new(body.x + g.led_inset() + diameter / 2.0, body.y + g.led_inset() + diameter / 2.0);
        let centers = [first, first.offset(diameter + g.led_gap(), 0.0)];

        if v.led_glow {
            let glow_alpha = LED_GLOW * SHADOW_SOFTNESS;
            for center in centers {
                let shape = Shape::Circle {
                    center: self.scale_point(center),
                    diameter: (diameter + LED_GLOW_SPREAD * 2.0) * s,
                };
                self.scene.push(Layer::LedGlow, shape, mix(CHIP_INNER, WHITE, glow_alpha), glow_alpha);
            }
        }
        for (center, opacity) in centers.into_iter().zip(v.led_opacity) {
            let shape = Shape::Circle {
                center: self.scale_point(center),
                diameter: diameter * s,
            };
            let under = if v.led_glow { mix(CHIP_INNER, WHITE, LED_GLOW * SHADOW_SOFTNESS) } else { CHIP_INNER };
            self.scene.push(Layer::Led, shape, mix(under, LED, opacity), opacity);
        }

        // Label with drop shadow
        let label_center = body.center().offset(0.0, -v.label_lift);
        let font_px = g.label_font_size() * s;
        let shadow = Shape::Text {
            center: self.scale_point(label_center.offset(v.label_shadow_offset, v.label_shadow_offset)),
            font_px,
            content: text,
        };
        let shadow_color = mix(CHIP_INNER, BLACK, v.label_shadow_alpha);
        self.scene.push(Layer::LabelShadow, shadow, shadow_color, v.label_shadow_alpha);

        let label = Shape::Text {
            center: self.scale_point(label_center),
            font_px,
            content: text,
        };
        self.scene.push(Layer::Label, label, LABEL_TEXT, 1.0);

        // Indicator, bottom-right
        let size = g.indicator_size();
        let inset = g.indicator_inset();
        let indicator = RectF::new(body.right() - inset - size, body.bottom() - inset - size, size, size);
        let shape = Shape::Rect {
            rect: self.scale_rect(indicator),
            corners: Corners::uniform(g.indicator_radius()).scaled(s),
            clip: None,
        };
        let opacity = v.indicator_opacity;
        self.scene.push(Layer::Indicator, shape, mix(CHIP_INNER, INDICATOR, opacity), opacity);
    }
}

// =============================================================================
// Tests
// =============================================================================
