//! Stroke rasterizer backed by tiny-skia.
//!
//! Coordinates are pixel edges: pixel `(x, y)` spans `[x, x+1) x [y, y+1)`.
//! Strokes use square caps and miter joins with anti-aliasing off, so every
//! pixel is either fully covered or untouched and right-angle joints come out
//! filled.

use tiny_skia::{LineCap, LineJoin, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform};

use super::Polyline;

/// Stroke `polyline` at `line_width` onto a `width x height` grid, calling
/// `plot` once per covered pixel. Pixels outside the grid are never reported.
///
/// A polyline whose points all coincide paints a `line_width` square.
pub fn stroke_polyline<F>(polyline: &Polyline, line_width: u32, width: u32, height: u32, mut plot: F)
where
    F: FnMut(u32, u32),
{
    let Some(first) = polyline.points.first() else {
        return;
    };
    if line_width == 0 {
        return;
    }
    let Some(mut coverage) = Pixmap::new(width, height) else {
        return;
    };

    let mut paint = Paint::default();
    paint.set_color_rgba8(0, 0, 0, 255);
    paint.anti_alias = false;

    let w = line_width as f32;
    if polyline.points.iter().all(|p| p == first) {
        let half = w / 2.0;
        if let Some(rect) = Rect::from_xywh(first.x as f32 - half, first.y as f32 - half, w, w) {
            coverage.fill_rect(rect, &paint, Transform::identity(), None);
        }
    } else {
        let mut pb = PathBuilder::new();
        pb.move_to(first.x as f32, first.y as f32);
        for p in &polyline.points[1..] {
            pb.line_to(p.x as f32, p.y as f32);
        }
        let Some(path) = pb.finish() else {
            return;
        };
        let stroke = Stroke {
            width: w,
            line_cap: LineCap::Square,
            line_join: LineJoin::Miter,
            ..Default::default()
        };
        coverage.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    for (i, px) in coverage.pixels().iter().enumerate() {
        if px.alpha() != 0 {
            let i = i as u32;
            plot(i % width, i / width);
        }
    }
}
