//! Scan-code glyph geometry: four corner brackets and a centered crosshair.

use log::{debug, warn};

use super::{Point, Polyline, Rgb, Surface};

/// Side length below which the glyph degenerates (brackets touch the crosshair).
pub const MIN_SANE_SIZE: u32 = 10;

/// Derived layout of the scan glyph for one canvas size.
///
/// All quantities are integer fractions of `size`, so the same size always
/// yields the same geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanGlyph {
    pub size: i32,
    /// Inset of the brackets from the canvas edge, `floor(size * 0.2)`
    pub padding: i32,
    /// Leg length of each bracket, `floor(size * 0.25)`
    pub corner_size: i32,
    /// Crosshair position on both axes, `floor(size / 2)`
    pub center: i32,
}

impl ScanGlyph {
    pub fn new(size: u32) -> Self {
        let size = size.min(i32::MAX as u32) as i32;
        // size * 0.2 and size * 0.25 in integer math so large sizes stay exact
        let padding = (size as i64 * 2 / 10) as i32;
        let corner_size = size / 4;
        Self {
            size,
            padding,
            corner_size,
            center: size / 2,
        }
    }

    /// True when brackets end before the crosshair starts.
    pub fn is_well_formed(&self) -> bool {
        self.padding + self.corner_size < self.center
    }

    /// The six strokes of the glyph: top-left, top-right, bottom-left and
    /// bottom-right brackets, then the horizontal and vertical crosshair.
    pub fn polylines(&self) -> Vec<Polyline> {
        let (s, p, c, m) = (self.size, self.padding, self.corner_size, self.center);
        let near = p;
        let far = s - p;
        let bracket = |a: (i32, i32), corner: (i32, i32), b: (i32, i32)| {
            Polyline::new(vec![
                Point::new(a.0, a.1),
                Point::new(corner.0, corner.1),
                Point::new(b.0, b.1),
            ])
        };

        vec![
            bracket((near, near + c), (near, near), (near + c, near)),
            bracket((far - c, near), (far, near), (far, near + c)),
            bracket((near, far - c), (near, far), (near + c, far)),
            bracket((far - c, far), (far, far), (far, far - c)),
            Polyline::new(vec![Point::new(near + c, m), Point::new(far - c, m)]),
            Polyline::new(vec![Point::new(m, near + c), Point::new(m, far - c)]),
        ]
    }
}

/// Paint the scan glyph onto `surface` in `color` with `line_width` strokes.
///
/// The glyph is laid out for the surface's width; surfaces are expected to be
/// square. Pixels the glyph does not cover are left untouched.
pub fn draw_scan_glyph<S: Surface + ?Sized>(surface: &mut S, color: Rgb, line_width: u32) {
    let (width, height) = surface.dimensions();
    if width != height {
        warn!("scan glyph drawn on non-square surface {}x{}", width, height);
    }
    let glyph = ScanGlyph::new(width);
    if !glyph.is_well_formed() {
        warn!(
            "canvas size {} is too small for a clean scan glyph (minimum {})",
            width, MIN_SANE_SIZE
        );
    }
    debug!("scan glyph layout {:?} color {} width {}", glyph, color, line_width);

    for line in glyph.polylines() {
        surface.stroke_polyline(&line, color, line_width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Recorder {
        size: u32,
        strokes: Vec<(Polyline, Rgb, u32)>,
    }

    impl Surface for Recorder {
        fn dimensions(&self) -> (u32, u32) {
            (self.size, self.size)
        }

        fn stroke_polyline(&mut self, polyline: &Polyline, color: Rgb, width: u32) {
            self.strokes.push((polyline.clone(), color, width));
        }
    }

    #[test]
    fn layout_for_default_size() {
        let g = ScanGlyph::new(81);
        assert_eq!((g.padding, g.corner_size, g.center), (16, 20, 40));
        assert!(g.is_well_formed());
    }

    #[test]
    fn layout_at_minimum_size() {
        let g = ScanGlyph::new(MIN_SANE_SIZE);
        assert_eq!((g.padding, g.corner_size, g.center), (2, 2, 5));
        assert!(g.is_well_formed());
        assert!(!ScanGlyph::new(1).is_well_formed());
    }

    #[test]
    fn default_size_coordinates() {
        let lines = ScanGlyph::new(81).polylines();
        let pts = |i: usize| -> Vec<(i32, i32)> {
            lines[i].points.iter().map(|p| (p.x, p.y)).collect()
        };
        assert_eq!(pts(0), vec![(16, 36), (16, 16), (36, 16)]);
        assert_eq!(pts(1), vec![(45, 16), (65, 16), (65, 36)]);
        assert_eq!(pts(2), vec![(16, 45), (16, 65), (36, 65)]);
        assert_eq!(pts(3), vec![(45, 65), (65, 65), (65, 45)]);
        assert_eq!(pts(4), vec![(36, 40), (45, 40)]);
        assert_eq!(pts(5), vec![(40, 36), (40, 45)]);
    }

    #[test]
    fn draw_strokes_six_lines_with_given_style() {
        let mut r = Recorder { size: 64, strokes: Vec::new() };
        draw_scan_glyph(&mut r, Rgb::SCAN_ACTIVE, 3);
        assert_eq!(r.strokes.len(), 6);
        assert!(r.strokes.iter().all(|(_, c, w)| *c == Rgb::SCAN_ACTIVE && *w == 3));
        let point_counts: Vec<usize> = r.strokes.iter().map(|(l, _, _)| l.points.len()).collect();
        assert_eq!(point_counts, vec![3, 3, 3, 3, 2, 2]);
    }

    #[test]
    fn padding_does_not_overflow_for_huge_sizes() {
        let g = ScanGlyph::new(u32::MAX);
        assert_eq!(g.size, i32::MAX);
        assert_eq!(g.padding, (i32::MAX as i64 * 2 / 10) as i32);
    }
}
