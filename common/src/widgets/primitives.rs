//! Low-level drawing primitives shared across widgets.
//!
//! All coordinates arrive as sub-pixel [`RectF`]/[`PointF`] values and are
//! snapped to the pixel grid here, at the last moment.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{
    Circle,
    CornerRadii,
    PrimitiveStyle,
    PrimitiveStyleBuilder,
    Rectangle,
    RoundedRectangle,
    StrokeAlignment,
};
use embedded_graphics::text::Text;

use crate::config::BorderStyle;
use crate::layout::{PointF, RectF, round_px};
use crate::scene::Corners;
use crate::styles::{CENTERED_MIDDLE, LABEL_FONT};

/// Dash length of a dashed border, in border widths.
const DASH_LENGTH: u32 = 3;

/// Gap between dashes, in border widths.
const DASH_GAP: u32 = 2;

// =============================================================================
// Filled Shapes
// =============================================================================

/// Convert a radius to a corner size, confined to half the shorter side.
fn corner(radius: f32, max: u32) -> Size {
    let px = (round_px(radius).max(0) as u32).min(max);
    Size::new(px, px)
}

/// Fill a rounded rectangle with per-corner radii.
pub fn fill_rounded<D>(display: &mut D, rect: RectF, corners: Corners, color: Rgb565)
where
    D: DrawTarget<Color = Rgb565>,
{
    let area = rect.to_rectangle();
    if area.is_zero_sized() {
        return;
    }

    let visible = area.intersection(&display.bounding_box());
    if visible.is_zero_sized() {
        return;
    }

    let max = area.size.width.min(area.size.height) / 2;
    let radii = CornerRadii {
        top_left: corner(corners.top_left, max),
        top_right: corner(corners.top_right, max),
        bottom_right: corner(corners.bottom_right, max),
        bottom_left: corner(corners.bottom_left, max),
    };

    // Only the straight middle is visible: a plain fill is exact
    if !touches_corner(&area, &radii, &visible) {
        display.fill_solid(&visible, color).ok();
        return;
    }

    RoundedRectangle::new(area, radii)
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
}

/// Whether `visible` overlaps any rounded corner square of `area`.
fn touches_corner(area: &Rectangle, radii: &CornerRadii, visible: &Rectangle) -> bool {
    let left = area.top_left.x;
    let top = area.top_left.y;
    let right = left + area.size.width as i32;
    let bottom = top + area.size.height as i32;
    [
        Rectangle::new(Point::new(left, top), radii.top_left),
        Rectangle::new(Point::new(right - radii.top_right.width as i32, top), radii.top_right),
        Rectangle::new(
            Point::new(right - radii.bottom_right.width as i32, bottom - radii.bottom_right.height as i32),
            radii.bottom_right,
        ),
        Rectangle::new(Point::new(left, bottom - radii.bottom_left.height as i32), radii.bottom_left),
    ]
    .iter()
    .any(|square| !square.intersection(visible).is_zero_sized())
}

/// Fill a circle of `diameter` around `center`.
pub fn fill_circle<D>(display: &mut D, center: PointF, diameter: f32, color: Rgb565)
where
    D: DrawTarget<Color = Rgb565>,
{
    let diameter = round_px(diameter);
    if diameter <= 0 {
        return;
    }
    Circle::with_center(center.to_point(), diameter as u32)
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
}

// =============================================================================
// Borders
// =============================================================================

fn stroke_rounded<D>(display: &mut D, area: Rectangle, radius: u32, width: u32, color: Rgb565)
where
    D: DrawTarget<Color = Rgb565>,
{
    let style = PrimitiveStyleBuilder::new()
        .stroke_color(color)
        .stroke_width(width)
        .stroke_alignment(StrokeAlignment::Inside)
        .build();
    let max = area.size.width.min(area.size.height) / 2;
    RoundedRectangle::with_equal_corners(area, Size::new(radius.min(max), radius.min(max)))
        .into_styled(style)
        .draw(display)
        .ok();
}

/// Repeat `dash`-long segments separated by `gap` from `start` to `end`.
fn dash_run<D, F>(display: &mut D, start: i32, end: i32, dash: u32, gap: u32, color: Rgb565, segment: F)
where
    D: DrawTarget<Color = Rgb565>,
    F: Fn(i32, u32) -> Rectangle,
{
    let fill = PrimitiveStyle::with_fill(color);
    let mut pos = start;
    while pos < end {
        let len = dash.min((end - pos) as u32);
        segment(pos, len).into_styled(fill).draw(display).ok();
        pos += (dash + gap) as i32;
    }
}

/// Dashed or dotted border: broken straight edges, solid corner arcs.
fn broken_frame<D>(display: &mut D, area: Rectangle, radius: u32, width: u32, dash: u32, gap: u32, color: Rgb565)
where
    D: DrawTarget<Color = Rgb565>,
{
    let left = area.top_left.x;
    let top = area.top_left.y;
    let right = left + area.size.width as i32;
    let bottom = top + area.size.height as i32;
    let r = radius.min(area.size.width.min(area.size.height) / 2) as i32;
    let w = width;

    dash_run(display, left + r, right - r, dash, gap, color, |x, len| {
        Rectangle::new(Point::new(x, top), Size::new(len, w))
    });
    dash_run(display, left + r, right - r, dash, gap, color, |x, len| {
        Rectangle::new(Point::new(x, bottom - w as i32), Size::new(len, w))
    });
    dash_run(display, top + r, bottom - r, dash, gap, color, |y, len| {
        Rectangle::new(Point::new(left, y), Size::new(w, len))
    });
    dash_run(display, top + r, bottom - r, dash, gap, color, |y, len| {
        Rectangle::new(Point::new(right - w as i32, y), Size::new(w, len))
    });

    if r > 0 {
        let arc = Size::new(r as u32, r as u32);
        for corner_origin in [
            Point::new(left, top),
            Point::new(right - r, top),
            Point::new(right - r, bottom - r),
            Point::new(left, bottom - r),
        ] {
            let clip = Rectangle::new(corner_origin, arc);
            stroke_rounded(&mut display.clipped(&clip), area, r as u32, w, color);
        }
    }
}

/// Draw a container border of `width` in `style` inside `rect`.
pub fn draw_frame<D>(display: &mut D, rect: RectF, radius: f32, width: f32, color: Rgb565, style: BorderStyle)
where
    D: DrawTarget<Color = Rgb565>,
{
    let w = round_px(width).max(0) as u32;
    let area = rect.to_rectangle();
    if w == 0 || area.is_zero_sized() {
        return;
    }
    let r = round_px(radius).max(0) as u32;

    match style {
        BorderStyle::None => {}
        BorderStyle::Solid => stroke_rounded(display, area, r, w, color),
        BorderStyle::Double if w >= 3 => {
            let line = w / 3;
            let step = w - line;
            stroke_rounded(display, area, r, line, color);
            stroke_rounded(display, area.offset(-(step as i32)), r.saturating_sub(step), line, color);
        }
        BorderStyle::Double => stroke_rounded(display, area, r, w, color),
        BorderStyle::Dashed => broken_frame(display, area, r, w, w * DASH_LENGTH, w * DASH_GAP, color),
        BorderStyle::Dotted => broken_frame(display, area, r, w, w, w, color),
    }
}

// =============================================================================
// Magnified Text
// =============================================================================

/// Draw target adapter that paints every pixel as a `factor` × `factor` block
/// offset by `origin`.
///
/// Lets fixed-size mono fonts reach label sizes derived from the geometry.
struct Magnified<'d, D> {
    target: &'d mut D,
    origin: Point,
    factor: u32,
}

impl<D> Dimensions for Magnified<'_, D>
where
    D: DrawTarget,
{
    fn bounding_box(&self) -> Rectangle {
        let outer = self.target.bounding_box();
        let f = self.factor as i32;
        let top_left = Point::new(
            (outer.top_left.x - self.origin.x).div_euclid(f),
            (outer.top_left.y - self.origin.y).div_euclid(f),
        );
        Rectangle::new(
            top_left,
            Size::new(outer.size.width / self.factor + 2, outer.size.height / self.factor + 2),
        )
    }
}

impl<D> DrawTarget for Magnified<'_, D>
where
    D: DrawTarget,
{
    type Color = D::Color;
    type Error = D::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let f = self.factor as i32;
        let block = Size::new(self.factor, self.factor);
        let bounds = self.target.bounding_box();
        for Pixel(point, color) in pixels {
            let area = Rectangle::new(self.origin + point * f, block).intersection(&bounds);
            if !area.is_zero_sized() {
                self.target.fill_solid(&area, color)?;
            }
        }
        Ok(())
    }
}

/// Magnification that brings [`LABEL_FONT`] closest to `font_px` tall.
pub fn label_scale(font_px: f32) -> u32 {
    let base = LABEL_FONT.character_size.height as f32;
    round_px(font_px / base).max(1) as u32
}

/// Draw a heavy, centered label of roughly `font_px` height around `center`.
pub fn draw_label<D>(display: &mut D, text: &str, center: PointF, font_px: f32, color: Rgb565)
where
    D: DrawTarget<Color = Rgb565>,
{
    let factor = label_scale(font_px);
    let style = MonoTextStyle::new(LABEL_FONT, color);
    let origin = center.to_point();

    // Second pass nudged right thickens the strokes
    let bold = (factor / 2).max(1) as i32;
    for dx in [0, bold] {
        let mut target = Magnified {
            target: &mut *display,
            origin: origin + Point::new(dx, 0),
            factor,
        };
        Text::with_text_style(text, Point::zero(), style, CENTERED_MIDDLE)
            .draw(&mut target)
            .ok();
    }
}

// =============================================================================
// Tests
// =============================================================================
