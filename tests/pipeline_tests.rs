//! End-to-end tests: raw bytes in, styled grid and pixels out.

use ansart::render::{canvas_size, rasterize, PixmapSurface};
use ansart::style::Rgb;
use ansart::{decode, CharStyles};

const SILVER: Rgb = Rgb(192, 192, 192);
const BLACK: Rgb = Rgb(0, 0, 0);

fn single(styles: &CharStyles) -> &ansart::style::Style {
    match styles {
        CharStyles::Single(style) => style,
        other => panic!("expected single style, got {other:?}"),
    }
}

#[test]
fn test_colored_ascii_line() {
    let grid = decode(b"\x1b[31mA\x1b[0m\n").unwrap();

    assert_eq!(grid.rows(), 1);
    let line = &grid.lines[0];
    assert_eq!(line.chars.len(), 1);
    assert_eq!(line.chars[0].text, "A");

    let style = single(&line.chars[0].styles);
    assert_eq!(style.front, Rgb(128, 0, 0));
    assert_eq!(style.back, BLACK);
    assert!(!style.light);
}

#[test]
fn test_style_resets_at_newline() {
    let grid = decode(b"\x1b[31mA\nB\n").unwrap();

    let first = single(&grid.lines[0].chars[0].styles);
    let second = single(&grid.lines[1].chars[0].styles);
    assert_eq!(first.front, Rgb(128, 0, 0));
    assert_eq!(second.front, SILVER);
}

#[test]
fn test_split_styles_across_double_byte_pair() {
    // blue background, then brighten between the two bytes of the pair:
    // the left half keeps the pre-pair style, the right half picks up bold
    let mut input = Vec::new();
    input.extend_from_slice(b"\x1b[44m");
    input.push(0xA2);
    input.extend_from_slice(b"\x1b[1m");
    input.push(0x69);
    input.push(b'\n');

    let grid = decode(&input).unwrap();
    let ch = &grid.lines[0].chars[0];
    assert_eq!(ch.text, "\u{2588}");
    assert_eq!(ch.display_width(), 2);

    match &ch.styles {
        CharStyles::Split { left, right } => {
            assert_eq!(left.back, Rgb(0, 0, 128));
            assert_eq!(left.front, SILVER);
            assert!(!left.light);
            assert_eq!(right.back, Rgb(0, 0, 128));
            assert_eq!(right.front, Rgb(255, 255, 255));
            assert!(right.light);
        },
        other => panic!("expected split styles, got {other:?}"),
    }
}

#[test]
fn test_bold_order_within_one_token() {
    // "1;31" brightens, then 31 overwrites with the plain shade;
    // "31;1" keeps the shade set moments earlier in the same token
    let bright = decode(b"\x1b[1;31mA\n").unwrap();
    let plain = decode(b"\x1b[31;1mA\n").unwrap();

    let bright = single(&bright.lines[0].chars[0].styles);
    let plain = single(&plain.lines[0].chars[0].styles);

    assert_eq!(bright.front, Rgb(255, 0, 0));
    assert!(bright.light);
    assert_eq!(plain.front, Rgb(128, 0, 0));
    assert!(plain.light);
}

#[test]
fn test_trailing_empty_line_dropped() {
    let grid = decode(b"A\n").unwrap();
    assert_eq!(grid.rows(), 1);

    let grid = decode(b"A\n\n").unwrap();
    assert_eq!(grid.rows(), 2);
    assert!(grid.lines[1].is_empty());
}

#[test]
fn test_malformed_sequence_reports_offset() {
    let err = decode(b"ok\x1b[31;xm").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("0x7"), "unexpected message: {message}");
}

#[test]
fn test_block_art_renders_without_font() {
    // a full block renders from geometry alone, no font needed
    let grid = decode(b"\x1b[31m\xa2\x69\n").unwrap();

    let (width, height) = canvas_size(&grid, 8.0, 8.0);
    assert_eq!((width, height), (8, 8));

    let mut surface = PixmapSurface::new(width, height);
    rasterize(&grid, 8.0, 8.0, &mut surface);

    assert_eq!(surface.pixel(0, 0), Rgb(128, 0, 0));
    assert_eq!(surface.pixel(7, 7), Rgb(128, 0, 0));
}

#[test]
fn test_half_block_render_split() {
    // lower half block: top is background, bottom is foreground
    let grid = decode(b"\x1b[31;44m\xa2\x63\n").unwrap();

    let mut surface = PixmapSurface::new(8, 8);
    rasterize(&grid, 8.0, 8.0, &mut surface);

    assert_eq!(surface.pixel(3, 0), Rgb(0, 0, 128));
    assert_eq!(surface.pixel(3, 7), Rgb(128, 0, 0));
}

#[test]
fn test_png_written_to_disk() {
    let grid = decode(b"\x1b[42m\xa2\x69\n").unwrap();

    let (width, height) = canvas_size(&grid, 16.0, 16.0);
    let mut surface = PixmapSurface::new(width, height);
    rasterize(&grid, 16.0, 16.0, &mut surface);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.png");
    surface.write_png(&path).unwrap();

    let metadata = std::fs::metadata(&path).unwrap();
    assert!(metadata.len() > 0);
}

#[test]
fn test_grid_serializes_to_json() {
    let grid = decode(b"\x1b[31mA\n").unwrap();
    let json = serde_json::to_string(&grid).unwrap();
    assert!(json.contains("\"A\""));
}
