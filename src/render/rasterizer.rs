//! Walking the grid and issuing surface calls.

use super::shape::{Corner, Direction, Shape};
use super::surface::Surface;
use crate::grid::{CharStyles, Grid};
use crate::style::Style;

/// Pixel dimensions a grid needs on a surface.
///
/// One column is half of `cell_width`; one row is `cell_height`.
pub fn canvas_size(grid: &Grid, cell_width: f32, cell_height: f32) -> (u32, u32) {
    let width = (grid.columns() as f32 * cell_width / 2.0).ceil() as u32;
    let height = (grid.rows() as f32 * cell_height).ceil() as u32;
    (width, height)
}

/// Draw the whole grid onto `surface`.
///
/// `cell_width`/`cell_height` are the pixel dimensions of a full-width cell;
/// half-width characters get half of `cell_width`. The caller must have
/// sized the surface per [`canvas_size`] beforehand. Calls are issued in
/// row-major order, so output is deterministic.
pub fn rasterize(grid: &Grid, cell_width: f32, cell_height: f32, surface: &mut dyn Surface) {
    let half_width = cell_width / 2.0;

    for (row, line) in grid.lines.iter().enumerate() {
        let y = row as f32 * cell_height;
        let mut column = 0usize;

        for ch in &line.chars {
            let x = column as f32 * half_width;

            match ch.styles {
                CharStyles::Single(style) => {
                    draw_clipped(surface, x, y, half_width, cell_height, |s| {
                        draw_text_cell(s, &ch.text, x, y, half_width, cell_height, &style);
                    });
                }
                CharStyles::Split { left, right } => {
                    let shape = Shape::for_text(&ch.text);
                    if left == right {
                        draw_clipped(surface, x, y, cell_width, cell_height, |s| {
                            draw_shape(s, shape, &ch.text, x, y, cell_width, cell_height, &left);
                        });
                    } else {
                        // Each half clips the same full-cell geometry, so
                        // shapes crossing the midline compose into one
                        // bichromatic glyph.
                        draw_clipped(surface, x, y, half_width, cell_height, |s| {
                            draw_shape(s, shape, &ch.text, x, y, cell_width, cell_height, &left);
                        });
                        draw_clipped(surface, x + half_width, y, half_width, cell_height, |s| {
                            draw_shape(s, shape, &ch.text, x, y, cell_width, cell_height, &right);
                        });
                    }
                }
            }

            column += ch.display_width();
        }
    }
}

fn draw_clipped(
    surface: &mut dyn Surface,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    draw: impl FnOnce(&mut dyn Surface),
) {
    surface.save();
    surface.clip_rect(x, y, width, height);
    draw(surface);
    surface.restore();
}

/// Background fill plus the centered text glyph.
fn draw_text_cell(
    surface: &mut dyn Surface,
    text: &str,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    style: &Style,
) {
    surface.set_fill_color(style.back);
    surface.fill_rect(x, y, width, height);
    surface.set_fill_color(style.front);
    surface.fill_text(text, x + width / 2.0, y + height / 2.0, width);
}

/// Draw one glyph's plan over the full cell rectangle.
#[allow(clippy::too_many_arguments)]
fn draw_shape(
    surface: &mut dyn Surface,
    shape: Shape,
    text: &str,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    style: &Style,
) {
    let fill_background = |surface: &mut dyn Surface| {
        surface.set_fill_color(style.back);
        surface.fill_rect(x, y, width, height);
    };

    match shape {
        Shape::Solid => {
            surface.set_fill_color(style.front);
            surface.fill_rect(x, y, width, height);
        }
        Shape::TallBar { eighths } => {
            fill_background(surface);
            let head_pad = (height * (1.0 - f32::from(eighths) / 8.0)).floor();
            surface.set_fill_color(style.front);
            surface.fill_rect(x, y + head_pad, width, height - head_pad);
        }
        Shape::WideBar { eighths } => {
            fill_background(surface);
            let bar = (width * f32::from(eighths) / 8.0).floor();
            surface.set_fill_color(style.front);
            surface.fill_rect(x, y, bar, height);
        }
        Shape::Triangle(direction) => {
            fill_background(surface);
            surface.set_fill_color(style.front);
            let points = match direction {
                Direction::Up => [
                    (x + width / 2.0, y),
                    (x, y + height),
                    (x + width, y + height),
                ],
                Direction::Down => [(x, y), (x + width / 2.0, y + height), (x + width, y)],
            };
            surface.fill_polygon(&points);
        }
        Shape::CornerTriangle(corner) => {
            fill_background(surface);
            surface.set_fill_color(style.front);
            let points = match corner {
                Corner::LowerLeft => [(x, y), (x, y + height), (x + width, y + height)],
                Corner::LowerRight => {
                    [(x + width, y), (x, y + height), (x + width, y + height)]
                }
                Corner::UpperRight => [(x, y), (x + width, y + height), (x + width, y)],
                Corner::UpperLeft => [(x, y), (x, y + height), (x + width, y)],
            };
            surface.fill_polygon(&points);
        }
        Shape::Diamond => {
            fill_background(surface);
            surface.set_fill_color(style.front);
            surface.fill_polygon(&[
                (x + width / 2.0, y),
                (x, y + height / 2.0),
                (x + width / 2.0, y + height),
                (x + width, y + height / 2.0),
            ]);
        }
        Shape::Text => {
            fill_background(surface);
            surface.set_fill_color(style.front);
            surface.fill_text(text, x + width / 2.0, y + height / 2.0, width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{CharStyles, Character, Line};
    use crate::render::surface::{RecordingSurface, SurfaceOp};
    use crate::style::{Rgb, Style};

    fn grid_of(chars: Vec<Character>) -> Grid {
        Grid {
            lines: vec![Line { chars }],
        }
    }

    fn red_on_navy() -> Style {
        Style {
            front: Rgb(255, 0, 0),
            back: Rgb(0, 0, 128),
            front_code: 31,
            back_code: 44,
            light: true,
            blink: false,
        }
    }

    #[test]
    fn test_canvas_size() {
        let grid = grid_of(vec![
            Character {
                text: "A".into(),
                styles: CharStyles::Single(Style::default()),
            },
            Character {
                text: "█".into(),
                styles: CharStyles::Split {
                    left: Style::default(),
                    right: Style::default(),
                },
            },
        ]);
        // 3 columns at 24px cells: 3 * 12 wide, 1 * 24 tall
        assert_eq!(canvas_size(&grid, 24.0, 24.0), (36, 24));
    }

    #[test]
    fn test_single_width_call_sequence() {
        let style = red_on_navy();
        let grid = grid_of(vec![Character {
            text: "A".into(),
            styles: CharStyles::Single(style),
        }]);

        let mut surface = RecordingSurface::new();
        rasterize(&grid, 24.0, 24.0, &mut surface);

        assert_eq!(
            surface.ops,
            vec![
                SurfaceOp::Save,
                SurfaceOp::ClipRect {
                    x: 0.0,
                    y: 0.0,
                    width: 12.0,
                    height: 24.0
                },
                SurfaceOp::SetFillColor(style.back),
                SurfaceOp::FillRect {
                    x: 0.0,
                    y: 0.0,
                    width: 12.0,
                    height: 24.0
                },
                SurfaceOp::SetFillColor(style.front),
                SurfaceOp::FillText {
                    text: "A".into(),
                    cx: 6.0,
                    cy: 12.0,
                    max_width: 12.0
                },
                SurfaceOp::Restore,
            ]
        );
    }

    #[test]
    fn test_uniform_double_width_clips_once() {
        let style = red_on_navy();
        let grid = grid_of(vec![Character {
            text: "█".into(),
            styles: CharStyles::Split {
                left: style,
                right: style,
            },
        }]);

        let mut surface = RecordingSurface::new();
        rasterize(&grid, 24.0, 24.0, &mut surface);

        assert_eq!(
            surface.ops,
            vec![
                SurfaceOp::Save,
                SurfaceOp::ClipRect {
                    x: 0.0,
                    y: 0.0,
                    width: 24.0,
                    height: 24.0
                },
                SurfaceOp::SetFillColor(style.front),
                SurfaceOp::FillRect {
                    x: 0.0,
                    y: 0.0,
                    width: 24.0,
                    height: 24.0
                },
                SurfaceOp::Restore,
            ]
        );
    }

    #[test]
    fn test_split_double_width_draws_each_half() {
        let left = Style::default();
        let right = red_on_navy();
        let grid = grid_of(vec![Character {
            text: "▲".into(),
            styles: CharStyles::Split { left, right },
        }]);

        let mut surface = RecordingSurface::new();
        rasterize(&grid, 24.0, 24.0, &mut surface);

        // two clip regions, one per half
        let clips: Vec<_> = surface
            .ops
            .iter()
            .filter_map(|op| match op {
                SurfaceOp::ClipRect { x, width, .. } => Some((*x, *width)),
                _ => None,
            })
            .collect();
        assert_eq!(clips, vec![(0.0, 12.0), (12.0, 12.0)]);

        // the full-cell triangle is drawn twice with identical geometry
        let polygons: Vec<_> = surface
            .ops
            .iter()
            .filter(|op| matches!(op, SurfaceOp::FillPolygon(_)))
            .collect();
        assert_eq!(polygons.len(), 2);
        assert_eq!(polygons[0], polygons[1]);
    }

    #[test]
    fn test_tall_bar_geometry() {
        let style = red_on_navy();
        let grid = grid_of(vec![Character {
            text: "▆".into(),
            styles: CharStyles::Split {
                left: style,
                right: style,
            },
        }]);

        let mut surface = RecordingSurface::new();
        rasterize(&grid, 24.0, 32.0, &mut surface);

        // 6/8 of 32 = 24; head pad = 8
        let rects: Vec<_> = surface
            .ops
            .iter()
            .filter_map(|op| match op {
                SurfaceOp::FillRect {
                    x,
                    y,
                    width,
                    height,
                } => Some((*x, *y, *width, *height)),
                _ => None,
            })
            .collect();
        assert_eq!(
            rects,
            vec![(0.0, 0.0, 24.0, 32.0), (0.0, 8.0, 24.0, 24.0)]
        );
    }

    #[test]
    fn test_cursor_advances_by_display_width() {
        let style = Style::default();
        let grid = grid_of(vec![
            Character {
                text: "█".into(),
                styles: CharStyles::Split {
                    left: style,
                    right: style,
                },
            },
            Character {
                text: "A".into(),
                styles: CharStyles::Single(style),
            },
        ]);

        let mut surface = RecordingSurface::new();
        rasterize(&grid, 24.0, 24.0, &mut surface);

        let clip_xs: Vec<f32> = surface
            .ops
            .iter()
            .filter_map(|op| match op {
                SurfaceOp::ClipRect { x, .. } => Some(*x),
                _ => None,
            })
            .collect();
        assert_eq!(clip_xs, vec![0.0, 24.0]);
    }
}
