use image::{Rgba, RgbaImage};

use super::raster;
use super::{Polyline, Rgb, Surface};

/// Fill value of a fresh canvas: white at zero alpha.
pub const TRANSPARENT: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// A square RGBA pixel buffer that starts fully transparent.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    pub fn new(size: u32) -> Self {
        Self {
            image: RgbaImage::from_pixel(size, size, TRANSPARENT),
        }
    }

    /// Side length in pixels
    pub fn size(&self) -> u32 {
        self.image.width()
    }

    /// RGBA value at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.image.get_pixel_checked(x, y).map(|p| p.0)
    }

    /// Coordinates of every pixel with non-zero alpha, row-major.
    pub fn painted(&self) -> Vec<(u32, u32)> {
        self.image
            .enumerate_pixels()
            .filter(|(_, _, p)| p.0[3] != 0)
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }
}

impl Surface for Canvas {
    fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    fn stroke_polyline(&mut self, polyline: &Polyline, color: Rgb, width: u32) {
        let (w, h) = self.image.dimensions();
        let ink = Rgba(color.to_rgba());
        let image = &mut self.image;
        raster::stroke_polyline(polyline, width, w, h, |x, y| image.put_pixel(x, y, ink));
    }
}
