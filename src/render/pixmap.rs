//! RGB pixel-buffer surface with PNG output.
//!
//! Rectangles and polygons sample pixel centers, so identical input always
//! produces identical pixels. Text glyphs go through `fontdue` with alpha
//! blending against whatever is already in the buffer.

use std::io;
use std::path::{Path, PathBuf};

use fontdue::Font;
use image::RgbImage;
use thiserror::Error;
use tracing::debug;

use super::surface::Surface;
use crate::style::Rgb;

/// Errors from the pixel surface and its font handling.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to read font {path}: {source}")]
    FontRead { path: PathBuf, source: io::Error },

    #[error("failed to parse font {path}: {message}")]
    FontParse { path: PathBuf, message: String },

    #[error("no usable font found in system locations (pass one explicitly)")]
    NoSystemFont,

    #[error("PNG encoding failed: {0}")]
    Png(#[from] image::ImageError),
}

/// An axis-aligned clip region in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ClipRect {
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
}

impl ClipRect {
    fn full(width: u32, height: u32) -> Self {
        Self {
            x0: 0.0,
            y0: 0.0,
            x1: width as f32,
            y1: height as f32,
        }
    }

    fn intersect(self, other: ClipRect) -> Self {
        Self {
            x0: self.x0.max(other.x0),
            y0: self.y0.max(other.y0),
            x1: self.x1.min(other.x1),
            y1: self.y1.min(other.y1),
        }
    }

    /// Whether the pixel whose center is at (px + 0.5, py + 0.5) is inside.
    fn contains(&self, px: u32, py: u32) -> bool {
        let cx = px as f32 + 0.5;
        let cy = py as f32 + 0.5;
        cx >= self.x0 && cx < self.x1 && cy >= self.y0 && cy < self.y1
    }
}

/// Pixel-buffer implementation of [`Surface`].
pub struct PixmapSurface {
    image: RgbImage,
    fill: Rgb,
    clip: ClipRect,
    stack: Vec<(Rgb, ClipRect)>,
    font: Option<Font>,
    font_px: f32,
}

impl PixmapSurface {
    /// Create a surface of the given pixel dimensions, cleared to black.
    ///
    /// Without a font, `fill_text` skips text glyphs; procedural shapes
    /// render either way.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbImage::new(width, height),
            fill: Rgb::BLACK,
            clip: ClipRect::full(width, height),
            stack: Vec::new(),
            font: None,
            font_px: 0.0,
        }
    }

    /// Attach a font for text glyphs, rendered at `px` pixels.
    pub fn set_font(&mut self, font: Font, px: f32) {
        self.font = Some(font);
        self.font_px = px;
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Read one pixel. Used by tests and by callers post-processing the
    /// buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        let p = self.image.get_pixel(x, y);
        Rgb(p.0[0], p.0[1], p.0[2])
    }

    /// Encode the buffer as PNG.
    pub fn write_png(&self, path: &Path) -> Result<(), RenderError> {
        self.image.save_with_format(path, image::ImageFormat::Png)?;
        Ok(())
    }

    /// Hand the pixel buffer to the caller.
    pub fn into_image(self) -> RgbImage {
        self.image
    }

    fn put(&mut self, x: u32, y: u32, color: Rgb) {
        self.image.put_pixel(x, y, image::Rgb([color.0, color.1, color.2]));
    }

    /// Clamped integer pixel range covering `[a, b)` rows or columns.
    fn pixel_span(a: f32, b: f32, limit: u32) -> std::ops::Range<u32> {
        let start = a.floor().max(0.0) as u32;
        let end = (b.ceil().max(0.0) as u32).min(limit);
        start.min(limit)..end
    }

    fn blend(&mut self, x: u32, y: u32, color: Rgb, alpha: u8) {
        if alpha == 0 {
            return;
        }
        if alpha == 255 {
            self.put(x, y, color);
            return;
        }
        let existing = self.pixel(x, y);
        let a = u32::from(alpha);
        let ia = 255 - a;
        let mix = |fg: u8, bg: u8| ((u32::from(fg) * a + u32::from(bg) * ia) / 255) as u8;
        self.put(
            x,
            y,
            Rgb(
                mix(color.0, existing.0),
                mix(color.1, existing.1),
                mix(color.2, existing.2),
            ),
        );
    }

    /// Sum of glyph advances for `text` at `px`.
    fn measure(font: &Font, text: &str, px: f32) -> f32 {
        text.chars()
            .map(|c| font.metrics(c, px).advance_width)
            .sum()
    }
}

impl Surface for PixmapSurface {
    fn set_fill_color(&mut self, color: Rgb) {
        self.fill = color;
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        let region = self.clip.intersect(ClipRect {
            x0: x,
            y0: y,
            x1: x + width,
            y1: y + height,
        });

        let color = self.fill;
        for py in Self::pixel_span(region.y0, region.y1, self.image.height()) {
            for px in Self::pixel_span(region.x0, region.x1, self.image.width()) {
                if region.contains(px, py) {
                    self.put(px, py, color);
                }
            }
        }
    }

    fn fill_polygon(&mut self, points: &[(f32, f32)]) {
        if points.len() < 3 {
            return;
        }

        let min_y = points.iter().map(|p| p.1).fold(f32::INFINITY, f32::min);
        let max_y = points.iter().map(|p| p.1).fold(f32::NEG_INFINITY, f32::max);
        let color = self.fill;

        // Even-odd scanline fill sampled at pixel centers.
        for py in Self::pixel_span(min_y.max(self.clip.y0), max_y.min(self.clip.y1), self.image.height()) {
            let scan_y = py as f32 + 0.5;
            let mut crossings: Vec<f32> = Vec::with_capacity(points.len());

            for i in 0..points.len() {
                let (x1, y1) = points[i];
                let (x2, y2) = points[(i + 1) % points.len()];
                if (y1 <= scan_y && scan_y < y2) || (y2 <= scan_y && scan_y < y1) {
                    let t = (scan_y - y1) / (y2 - y1);
                    crossings.push(x1 + t * (x2 - x1));
                }
            }

            crossings.sort_by(|a, b| a.total_cmp(b));
            for span in crossings.chunks_exact(2) {
                let x0 = span[0].max(self.clip.x0);
                let x1 = span[1].min(self.clip.x1);
                for px in Self::pixel_span(x0, x1, self.image.width()) {
                    let cx = px as f32 + 0.5;
                    if cx >= x0 && cx < x1 {
                        self.put(px, py, color);
                    }
                }
            }
        }
    }

    fn fill_text(&mut self, text: &str, cx: f32, cy: f32, max_width: f32) {
        // Borrow the font out of self so glyph blits can mutate the buffer.
        let Some(font) = self.font.take() else {
            debug!(text, "no font attached; skipping text glyph");
            return;
        };
        if text.is_empty() || self.font_px <= 0.0 {
            self.font = Some(font);
            return;
        }

        // Shrink to fit, the way canvas fillText honors maxWidth.
        let mut px = self.font_px;
        let mut total = Self::measure(&font, text, px);
        if total > max_width && total > 0.0 {
            px *= max_width / total;
            total = Self::measure(&font, text, px);
        }

        let baseline = match font.horizontal_line_metrics(px) {
            // Center the ascent..descent box on cy.
            Some(lm) => cy + (lm.ascent + lm.descent) / 2.0,
            None => cy,
        };

        let color = self.fill;
        let mut pen_x = cx - total / 2.0;
        for c in text.chars() {
            let (metrics, bitmap) = font.rasterize(c, px);
            let glyph_x = (pen_x + metrics.xmin as f32).round() as i64;
            let glyph_y =
                (baseline - (metrics.height as i64 + i64::from(metrics.ymin)) as f32).round() as i64;

            for row in 0..metrics.height {
                let y = glyph_y + row as i64;
                if y < 0 || y >= i64::from(self.image.height()) {
                    continue;
                }
                for col in 0..metrics.width {
                    let x = glyph_x + col as i64;
                    if x < 0 || x >= i64::from(self.image.width()) {
                        continue;
                    }
                    let (x, y) = (x as u32, y as u32);
                    if !self.clip.contains(x, y) {
                        continue;
                    }
                    self.blend(x, y, color, bitmap[row * metrics.width + col]);
                }
            }

            pen_x += metrics.advance_width;
        }

        self.font = Some(font);
    }

    fn save(&mut self) {
        self.stack.push((self.fill, self.clip));
    }

    fn restore(&mut self) {
        if let Some((fill, clip)) = self.stack.pop() {
            self.fill = fill;
            self.clip = clip;
        }
    }

    fn clip_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.clip = self.clip.intersect(ClipRect {
            x0: x,
            y0: y,
            x1: x + width,
            y1: y + height,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb(255, 0, 0);
    const BLACK: Rgb = Rgb(0, 0, 0);

    #[test]
    fn test_starts_black() {
        let surface = PixmapSurface::new(4, 4);
        assert_eq!(surface.pixel(0, 0), BLACK);
        assert_eq!(surface.pixel(3, 3), BLACK);
    }

    #[test]
    fn test_fill_rect() {
        let mut surface = PixmapSurface::new(8, 8);
        surface.set_fill_color(RED);
        surface.fill_rect(2.0, 2.0, 4.0, 4.0);

        assert_eq!(surface.pixel(2, 2), RED);
        assert_eq!(surface.pixel(5, 5), RED);
        assert_eq!(surface.pixel(1, 2), BLACK);
        assert_eq!(surface.pixel(6, 6), BLACK);
    }

    #[test]
    fn test_fill_rect_respects_clip() {
        let mut surface = PixmapSurface::new(8, 8);
        surface.save();
        surface.clip_rect(0.0, 0.0, 4.0, 8.0);
        surface.set_fill_color(RED);
        surface.fill_rect(0.0, 0.0, 8.0, 8.0);
        surface.restore();

        assert_eq!(surface.pixel(3, 4), RED);
        assert_eq!(surface.pixel(4, 4), BLACK);

        // clip was popped; a new fill covers the right side again
        surface.set_fill_color(RED);
        surface.fill_rect(4.0, 0.0, 4.0, 8.0);
        assert_eq!(surface.pixel(4, 4), RED);
    }

    #[test]
    fn test_nested_clips_intersect() {
        let mut surface = PixmapSurface::new(8, 8);
        surface.save();
        surface.clip_rect(0.0, 0.0, 6.0, 6.0);
        surface.save();
        surface.clip_rect(2.0, 2.0, 6.0, 6.0);

        surface.set_fill_color(RED);
        surface.fill_rect(0.0, 0.0, 8.0, 8.0);

        // only the 2..6 square is writable
        assert_eq!(surface.pixel(2, 2), RED);
        assert_eq!(surface.pixel(5, 5), RED);
        assert_eq!(surface.pixel(1, 1), BLACK);
        assert_eq!(surface.pixel(6, 6), BLACK);

        surface.restore();
        surface.restore();
    }

    #[test]
    fn test_fill_polygon_square_matches_rect() {
        let mut a = PixmapSurface::new(8, 8);
        a.set_fill_color(RED);
        a.fill_polygon(&[(1.0, 1.0), (7.0, 1.0), (7.0, 7.0), (1.0, 7.0)]);

        let mut b = PixmapSurface::new(8, 8);
        b.set_fill_color(RED);
        b.fill_rect(1.0, 1.0, 6.0, 6.0);

        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(a.pixel(x, y), b.pixel(x, y), "pixel ({x},{y})");
            }
        }
    }

    #[test]
    fn test_fill_polygon_diamond() {
        let mut surface = PixmapSurface::new(8, 8);
        surface.set_fill_color(RED);
        surface.fill_polygon(&[(4.0, 0.0), (0.0, 4.0), (4.0, 8.0), (8.0, 4.0)]);

        // center is inside, corners are outside
        assert_eq!(surface.pixel(4, 4), RED);
        assert_eq!(surface.pixel(0, 0), BLACK);
        assert_eq!(surface.pixel(7, 0), BLACK);
        assert_eq!(surface.pixel(0, 7), BLACK);
        assert_eq!(surface.pixel(7, 7), BLACK);
    }

    #[test]
    fn test_fill_text_without_font_is_noop() {
        let mut surface = PixmapSurface::new(8, 8);
        surface.set_fill_color(RED);
        surface.fill_text("A", 4.0, 4.0, 8.0);

        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(surface.pixel(x, y), BLACK);
            }
        }
    }

    #[test]
    fn test_save_restore_fill_color() {
        let mut surface = PixmapSurface::new(2, 2);
        surface.set_fill_color(RED);
        surface.save();
        surface.set_fill_color(Rgb(0, 255, 0));
        surface.restore();
        surface.fill_rect(0.0, 0.0, 2.0, 2.0);
        assert_eq!(surface.pixel(0, 0), RED);
    }
}
