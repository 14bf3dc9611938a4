//! Scene rasterizer.
//!
//! Walks a [`Scene`] back to front and issues one primitive per element.
//! Elements entirely off the display are skipped, and the rest are clipped
//! to it, so oversized widgets cost no more than the visible area.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use super::primitives::{draw_frame, draw_label, fill_circle, fill_rounded};
use crate::scene::{Corners, Element, Scene, Shape};

/// Draw every element of `scene` onto `display`.
pub fn draw_scene<D>(display: &mut D, scene: &Scene<'_>)
where
    D: DrawTarget<Color = Rgb565>,
{
    let screen = display.bounding_box();
    let mut display = display.clipped(&screen);
    for element in scene.elements() {
        if on_screen(element, &screen) {
            draw_element(&mut display, element);
        }
    }
}

fn on_screen(element: &Element<'_>, screen: &Rectangle) -> bool {
    element
        .shape
        .bounds()
        .is_none_or(|bounds| !screen.intersection(&bounds.to_rectangle()).is_zero_sized())
}

fn draw_element<D>(display: &mut D, element: &Element<'_>)
where
    D: DrawTarget<Color = Rgb565>,
{
    let color = element.color;
    match element.shape {
        Shape::Panel {
            rect,
            radius,
            border_width,
            border_color,
            border_style,
        } => {
            fill_rounded(display, rect, Corners::uniform(radius), color);
            draw_frame(display, rect, radius, border_width, border_color, border_style);
        }
        Shape::Rect { rect, corners, clip: Some(clip) } => {
            fill_rounded(&mut display.clipped(&clip.to_rectangle()), rect, corners, color);
        }
        Shape::Rect { rect, corners, clip: None } => fill_rounded(display, rect, corners, color),
        Shape::Circle { center, diameter } => fill_circle(display, center, diameter, color),
        Shape::Text { center, font_px, content } => draw_label(display, content, center, font_px, color),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{CHIP_INNER, CHIP_OUTER, STRIPE_MIDDLE, WHITE};
    use crate::config::ChipConfig;
    use crate::geometry::Geometry;
    use crate::layout::{Placement, RectF};
    use crate::state::InteractionState;
    use crate::widgets::test_canvas::Canvas;

    fn render(config: &ChipConfig<'_>, side: u32) -> Canvas {
        let geometry = Geometry::resolve(config.size, config.padding);
        let visuals = InteractionState::new().visuals(config.enable_animation);
        let parent = RectF::new(0.0, 0.0, side as f32, side as f32);
        let placement = Placement::compute(&geometry, config.container_mode, config.border_width, parent);
        let scene = Scene::build(config, &geometry, &visuals, &placement);

        let mut canvas = Canvas::new(side, side, WHITE);
        draw_scene(&mut canvas, &scene);
        canvas
    }

    #[test]
    fn test_body_color_at_center_offset() {
        let canvas = render(&ChipConfig { text: "", ..ChipConfig::default() }, 400);
        // Halfway between center and body edge, clear of label and LEDs
        assert_eq!(canvas.pixel(200, 200 + 70), CHIP_INNER);
    }

    #[test]
    fn test_housing_ring_visible() {
        let canvas = render(&ChipConfig::default(), 400);
        // Housing extends 8px past the 280px body on each side
        assert_eq!(canvas.pixel(200 - 140 - 4, 200), CHIP_OUTER);
    }

    #[test]
    fn test_middle_stripe_behind_chip() {
        let canvas = render(&ChipConfig::default(), 400);
        // Left pins begin near x = 20, so x = 10 shows the band behind them
        assert_eq!(canvas.pixel(10, 200), STRIPE_MIDDLE);
    }

    #[test]
    fn test_no_stripes_shows_background() {
        let config = ChipConfig { show_stripes: false, ..ChipConfig::default() };
        let canvas = render(&config, 400);
        assert_eq!(canvas.pixel(10, 200), config.background_color);
    }
}
