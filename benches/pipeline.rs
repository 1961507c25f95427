//! Throughput benches for the decode pipeline.

use ansart::render::{canvas_size, rasterize, PixmapSurface};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

/// A synthetic art file: colored block runs with per-line color changes.
fn sample_input(lines: usize) -> Vec<u8> {
    let mut input = Vec::new();
    for row in 0..lines {
        let fg = 31 + (row % 7);
        let bg = 40 + (row % 8);
        input.extend_from_slice(format!("\x1b[1;{fg};{bg}m").as_bytes());
        for col in 0..40 {
            // cycle the eighth-height bars and the full block
            let low = 0x62 + ((row + col) % 8) as u8;
            input.push(0xA2);
            input.push(low);
        }
        input.extend_from_slice(b"\x1b[0m\r\n");
    }
    input
}

fn bench_lexer(c: &mut Criterion) {
    let input = sample_input(100);
    let mut group = c.benchmark_group("lexer");
    group.throughput(Throughput::Bytes(input.len() as u64));
    group.bench_function("lex_block_art", |b| {
        b.iter(|| ansart::lexer::lex(black_box(&input)).unwrap());
    });
    group.finish();
}

fn bench_resolver(c: &mut Criterion) {
    let input = sample_input(100);
    let cells = ansart::lexer::lex(&input).unwrap().cells;
    c.bench_function("resolve_block_art", |b| {
        b.iter(|| ansart::style::resolve(black_box(&cells)));
    });
}

fn bench_rasterize(c: &mut Criterion) {
    let input = sample_input(100);
    let grid = ansart::decode(&input).unwrap();
    let (width, height) = canvas_size(&grid, 16.0, 16.0);
    c.bench_function("rasterize_block_art", |b| {
        b.iter(|| {
            let mut surface = PixmapSurface::new(width, height);
            rasterize(black_box(&grid), 16.0, 16.0, &mut surface);
            surface
        });
    });
}

criterion_group!(benches, bench_lexer, bench_resolver, bench_rasterize);
criterion_main!(benches);
