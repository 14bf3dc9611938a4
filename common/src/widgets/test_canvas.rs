//! In-memory draw target for rendering tests.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgb565>,
}

impl Canvas {
    pub fn new(width: u32, height: u32, fill: Rgb565) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; (width * height) as usize],
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgb565 { self.pixels[(y * self.width + x) as usize] }

    pub fn count(&self, color: Rgb565) -> usize { self.pixels.iter().filter(|p| **p == color).count() }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size { Size::new(self.width, self.height) }
}

impl DrawTarget for Canvas {
    type Color = Rgb565;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x >= 0 && point.y >= 0 && (point.x as u32) < self.width && (point.y as u32) < self.height {
                self.pixels[(point.y as u32 * self.width + point.x as u32) as usize] = color;
            }
        }
        Ok(())
    }
}
