//! Host page around the widget.
//!
//! A white page with a 2px dashed light gray frame. The widget is laid out in
//! the area inside the frame.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use retro_chip_common::colors::{HOST_BACKGROUND, HOST_BORDER};
use retro_chip_common::widgets::draw_frame;
use retro_chip_common::{BorderStyle, ChipConfig, ContainerMode, RectF};

/// Host frame border width in pixels.
pub const HOST_FRAME_WIDTH: f32 = 2.0;

/// Label the host page mounts the widget with.
pub const HOST_TEXT: &str = "AI";

/// Configuration the host page mounts the widget with.
pub fn host_config() -> ChipConfig<'static> {
    ChipConfig {
        text: HOST_TEXT,
        container_mode: ContainerMode::Fill,
        show_stripes: true,
        enable_animation: true,
        ..ChipConfig::default()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct HostPage {
    bounds: RectF,
}

impl HostPage {
    /// Page covering a display of `size`.
    pub fn new(size: Size) -> Self {
        Self {
            bounds: RectF::new(0.0, 0.0, size.width as f32, size.height as f32),
        }
    }

    /// Area offered to the widget, inside the frame.
    pub fn content_area(&self) -> RectF { self.bounds.inset(HOST_FRAME_WIDTH) }

    /// Clear the page and draw its frame.
    pub fn draw<D>(&self, display: &mut D)
    where
        D: DrawTarget<Color = Rgb565>,
    {
        display.clear(HOST_BACKGROUND).ok();
        draw_frame(display, self.bounds, 0.0, HOST_FRAME_WIDTH, HOST_BORDER, BorderStyle::Dashed);
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics_simulator::SimulatorDisplay;

    #[test]
    fn test_content_area_inside_frame() {
        let host = HostPage::new(Size::new(200, 100));
        assert_eq!(host.content_area(), RectF::new(2.0, 2.0, 196.0, 96.0));
    }

    #[test]
    fn test_frame_is_dashed() {
        let host = HostPage::new(Size::new(100, 50));
        let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(100, 50));
        host.draw(&mut display);

        let top: Vec<Rgb565> = (0..100).map(|x| display.get_pixel(Point::new(x, 0))).collect();
        assert!(top.contains(&HOST_BORDER), "frame dashes drawn");
        assert!(top.contains(&HOST_BACKGROUND), "gaps between dashes");
        assert_eq!(display.get_pixel(Point::new(50, 25)), HOST_BACKGROUND);
    }
}
