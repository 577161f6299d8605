// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the average-color sampler behind the glow effect.
//!
//! Sampling runs once per image per set change, so it is not hot, but the
//! decode-and-average path sits on the startup critical path for the
//! carousel and should stay comfortably in the microsecond range for the
//! 100×100 renditions it is fed.

use criterion::{criterion_group, criterion_main, Criterion};
use galeria::media::glow;
use image_rs::{Rgba, RgbaImage};
use std::hint::black_box;

/// A synthetic rendition with some channel variety.
fn gradient_image(size: u32) -> RgbaImage {
    RgbaImage::from_fn(size, size, |x, y| {
        Rgba([
            (x * 255 / size.max(1)) as u8,
            (y * 255 / size.max(1)) as u8,
            ((x + y) * 127 / size.max(1)) as u8,
            255,
        ])
    })
}

fn bench_average_color(c: &mut Criterion) {
    let mut group = c.benchmark_group("glow_sampling");

    let small = gradient_image(100);
    group.bench_function("average_color_100x100", |b| {
        b.iter(|| {
            let color = glow::average_color(black_box(&small));
            black_box(color);
        });
    });

    let large = gradient_image(400);
    group.bench_function("average_color_400x400", |b| {
        b.iter(|| {
            let color = glow::average_color(black_box(&large));
            black_box(color);
        });
    });

    group.finish();
}

fn bench_decode_average(c: &mut Criterion) {
    let mut group = c.benchmark_group("glow_sampling");

    let pixels = gradient_image(100);
    let mut png = Vec::new();
    pixels
        .write_to(
            &mut std::io::Cursor::new(&mut png),
            image_rs::ImageFormat::Png,
        )
        .expect("encode bench png");

    group.bench_function("decode_average_100x100_png", |b| {
        b.iter(|| {
            let color = glow::decode_average(black_box(&png)).expect("decode");
            black_box(color);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_average_color, bench_decode_average);
criterion_main!(benches);
