//! The abstract 2D drawing surface.

use crate::style::Rgb;

/// Drawing operations the rasterizer needs.
///
/// Coordinates are in pixels, origin top-left, y growing downward. The
/// surface keeps a current fill color and a clip region; `save`/`restore`
/// stack both.
pub trait Surface {
    /// Set the color used by subsequent fill calls.
    fn set_fill_color(&mut self, color: Rgb);

    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    /// Fill a closed polygon given its vertices in order.
    fn fill_polygon(&mut self, points: &[(f32, f32)]);

    /// Draw `text` centered at `(cx, cy)`, shrunk if it would exceed
    /// `max_width`.
    fn fill_text(&mut self, text: &str, cx: f32, cy: f32, max_width: f32);

    /// Push the current fill color and clip region.
    fn save(&mut self);

    /// Pop the most recently saved state.
    fn restore(&mut self);

    /// Intersect the clip region with a rectangle.
    fn clip_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
}

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    SetFillColor(Rgb),
    FillRect { x: f32, y: f32, width: f32, height: f32 },
    FillPolygon(Vec<(f32, f32)>),
    FillText { text: String, cx: f32, cy: f32, max_width: f32 },
    Save,
    Restore,
    ClipRect { x: f32, y: f32, width: f32, height: f32 },
}

/// A surface that records every call instead of producing pixels.
///
/// Used by the rasterizer tests to pin down exact call sequences; also handy
/// for dry-running a render.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Surface for RecordingSurface {
    fn set_fill_color(&mut self, color: Rgb) {
        self.ops.push(SurfaceOp::SetFillColor(color));
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.ops.push(SurfaceOp::FillRect {
            x,
            y,
            width,
            height,
        });
    }

    fn fill_polygon(&mut self, points: &[(f32, f32)]) {
        self.ops.push(SurfaceOp::FillPolygon(points.to_vec()));
    }

    fn fill_text(&mut self, text: &str, cx: f32, cy: f32, max_width: f32) {
        self.ops.push(SurfaceOp::FillText {
            text: text.to_string(),
            cx,
            cy,
            max_width,
        });
    }

    fn save(&mut self) {
        self.ops.push(SurfaceOp::Save);
    }

    fn restore(&mut self) {
        self.ops.push(SurfaceOp::Restore);
    }

    fn clip_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.ops.push(SurfaceOp::ClipRect {
            x,
            y,
            width,
            height,
        });
    }
}
