//! Rendering: glyph geometry, stroke rasterization and the pixel canvas

pub mod canvas;
pub mod glyph;
pub mod paint;
pub mod raster;

pub use canvas::Canvas;
pub use glyph::{draw_scan_glyph, ScanGlyph};
pub use paint::{Point, Polyline, Rgb};

/// A drawing surface the glyph renderer can stroke onto.
///
/// `Canvas` is the real implementation; tests use recording surfaces to
/// inspect exactly what the renderer asked for.
pub trait Surface {
    /// Width and height in pixels
    fn dimensions(&self) -> (u32, u32);

    /// Stroke `polyline` with an opaque `color` at `width` pixels.
    fn stroke_polyline(&mut self, polyline: &Polyline, color: Rgb, width: u32);
}
