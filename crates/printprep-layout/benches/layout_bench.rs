// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for grid selection in the printprep-layout crate.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use printprep_core::Rectangle;
use printprep_layout::choose_best_grid;

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Benchmark 24 photos of mixed aspect ratios on an A4 page (in mm) with a
/// 5mm gap, sweeping the default eight row counts plus the square grid.
fn bench_mixed_photos(c: &mut Criterion) {
    let photos: Vec<Rectangle> = (0..24)
        .map(|i| match i % 3 {
            0 => Rectangle::new(4000.0, 3000.0),
            1 => Rectangle::new(3000.0, 4000.0),
            _ => Rectangle::new(1920.0, 1080.0),
        })
        .collect();

    c.bench_function("choose_best_grid (24 photos, A4)", |b| {
        b.iter(|| choose_best_grid(black_box(&photos), 210.0, 297.0, 5.0, 8));
    });
}

criterion_group!(benches, bench_mixed_photos);
criterion_main!(benches);
