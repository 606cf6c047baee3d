//! In-memory frame buffer for rendering tests.

use std::vec;
use std::vec::Vec;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::pen::Pen;

/// Heap-backed [`DrawTarget`] that silently clips out-of-bounds pixels,
/// the way the host frame buffer does.
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgb565>,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb565::BLACK; (width * height) as usize],
        }
    }

    pub fn pixel(&self, x: i32, y: i32) -> Rgb565 {
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    pub fn is(&self, x: i32, y: i32, pen: Pen) -> bool {
        self.pixel(x, y) == pen.to_rgb565()
    }

    /// Number of pixels of color `pen` inside the given row range.
    pub fn count_in_rows(&self, rows: core::ops::Range<i32>, pen: Pen) -> usize {
        let color = pen.to_rgb565();
        rows.flat_map(|y| (0..self.width as i32).map(move |x| (x, y)))
            .filter(|&(x, y)| self.pixel(x, y) == color)
            .count()
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DrawTarget for Framebuffer {
    type Color = Rgb565;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(p, color) in pixels {
            if p.x >= 0 && p.y >= 0 && (p.x as u32) < self.width && (p.y as u32) < self.height {
                let idx = p.y as usize * self.width as usize + p.x as usize;
                self.pixels[idx] = color;
            }
        }
        Ok(())
    }
}
