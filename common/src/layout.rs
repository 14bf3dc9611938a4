//! Layout compositor: container sizing policy and placement.
//!
//! | Mode | Width / height | Flow |
//! |------|----------------|------|
//! | `fill` | parent size, floored at `container_total_size` | block |
//! | `fixed` | `container_total_size` | block |
//! | `inline` | `container_total_size` | inline |
//!
//! The host centers the container within its area. A `fill` container that
//! matches its parent therefore covers it exactly, and one floored above the
//! parent overflows evenly on both sides. The chip is always centered in the
//! container.

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

use crate::config::ContainerMode;
use crate::geometry::Geometry;

/// Largest pixel coordinate or extent handed to the draw target.
///
/// Far beyond any display, and small enough that edge and size arithmetic
/// on the integer grid can never overflow.
pub const PIXEL_LIMIT: i32 = 1 << 16;

/// Round a pixel measure to the nearest integer, within `±PIXEL_LIMIT`.
#[inline]
pub fn round_px(value: f32) -> i32 {
    let limit = PIXEL_LIMIT as f32;
    micromath::F32(value).round().0.clamp(-limit, limit) as i32
}

// =============================================================================
// Float Geometry Types
// =============================================================================

/// A point with sub-pixel coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointF {
    pub x: f32,
    pub y: f32,
}

impl PointF {
    pub const fn new(x: f32, y: f32) -> Self { Self { x, y } }

    #[inline]
    pub fn offset(self, dx: f32, dy: f32) -> Self { Self::new(self.x + dx, self.y + dy) }

    /// Scale this point about `origin` by `factor`.
    #[inline]
    pub fn scaled_about(self, origin: Self, factor: f32) -> Self {
        Self::new(origin.x + (self.x - origin.x) * factor, origin.y + (self.y - origin.y) * factor)
    }

    #[inline]
    pub fn to_point(self) -> Point { Point::new(round_px(self.x), round_px(self.y)) }
}

/// An axis-aligned rectangle with sub-pixel coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RectF {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl RectF {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self { Self { x, y, width, height } }

    /// Rectangle of `width` × `height` centered on `center`.
    pub fn centered(center: PointF, width: f32, height: f32) -> Self {
        Self::new(center.x - width / 2.0, center.y - height / 2.0, width, height)
    }

    #[inline]
    pub fn right(&self) -> f32 { self.x + self.width }

    #[inline]
    pub fn bottom(&self) -> f32 { self.y + self.height }

    #[inline]
    pub fn center(&self) -> PointF { PointF::new(self.x + self.width / 2.0, self.y + self.height / 2.0) }

    /// Shrink by `amount` on every side. Never goes below zero size.
    pub fn inset(&self, amount: f32) -> Self {
        let width = (self.width - amount * 2.0).max(0.0);
        let height = (self.height - amount * 2.0).max(0.0);
        Self::centered(self.center(), width, height)
    }

    #[inline]
    pub fn translated(&self, dx: f32, dy: f32) -> Self { Self::new(self.x + dx, self.y + dy, self.width, self.height) }

    /// Scale this rectangle about `origin` by `factor`.
    pub fn scaled_about(&self, origin: PointF, factor: f32) -> Self {
        let top_left = PointF::new(self.x, self.y).scaled_about(origin, factor);
        Self::new(top_left.x, top_left.y, self.width * factor, self.height * factor)
    }

    /// Whether `point` lies inside (edges inclusive).
    pub fn contains(&self, point: PointF) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }

    /// Snap to the pixel grid. Edges are rounded independently so neighbours
    /// stay seamless.
    pub fn to_rectangle(&self) -> Rectangle {
        let left = round_px(self.x);
        let top = round_px(self.y);
        let right = round_px(self.right()).max(left);
        let bottom = round_px(self.bottom()).max(top);
        Rectangle::new(
            Point::new(left, top),
            Size::new(right.saturating_sub(left) as u32, bottom.saturating_sub(top) as u32),
        )
    }
}

// =============================================================================
// Container Sizing
// =============================================================================

/// Display flow of the container box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayFlow {
    /// Block-level box.
    Block,
    /// Inline-flow box.
    Inline,
}

/// Size of the outer container under a sizing policy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerBox {
    pub width: f32,
    pub height: f32,
    /// Minimum size in each axis.
    pub min_size: f32,
    pub flow: DisplayFlow,
}

impl ContainerBox {
    /// Size the container for `mode` within a parent offering `available`.
    pub fn compose(geometry: &Geometry, mode: ContainerMode, available: (f32, f32)) -> Self {
        let total = geometry.container_total_size;
        match mode {
            ContainerMode::Fill => Self {
                width: available.0.max(total),
                height: available.1.max(total),
                min_size: total,
                flow: DisplayFlow::Block,
            },
            ContainerMode::Fixed => Self::exact(total, DisplayFlow::Block),
            ContainerMode::Inline => Self::exact(total, DisplayFlow::Inline),
        }
    }

    const fn exact(total: f32, flow: DisplayFlow) -> Self {
        Self {
            width: total,
            height: total,
            min_size: total,
            flow,
        }
    }
}

// =============================================================================
// Placement
// =============================================================================

/// Where a widget sits inside its parent area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub container: ContainerBox,
    /// Outer border box of the container.
    pub outer: RectF,
    /// Area inside the border; stripes fill this.
    pub padding_box: RectF,
    /// Center of the chip.
    pub chip_center: PointF,
}

impl Placement {
    /// Place the container in `parent` and the chip in the container.
    pub fn compute(geometry: &Geometry, mode: ContainerMode, border_width: f32, parent: RectF) -> Self {
        let container = ContainerBox::compose(geometry, mode, (parent.width, parent.height));

        let outer = RectF::centered(parent.center(), container.width, container.height);

        let padding_box = outer.inset(border_width.max(0.0));

        Self {
            container,
            outer,
            padding_box,
            chip_center: outer.center(),
        }
    }

    /// Hover target of the chip at the given scale.
    pub fn hover_box(&self, geometry: &Geometry, scale: f32) -> RectF {
        let side = geometry.hover_box_size() * scale;
        RectF::centered(self.chip_center, side, side)
    }
}

// =============================================================================
// Tests
// =============================================================================
