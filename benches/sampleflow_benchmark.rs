use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use sampleflow::interleave::{cycle_leader, interleave, interleave_inplace};
use sampleflow::ops::{binary, fill, horizontal, unary};
use sampleflow::signals::{aligned_zeroed, sine, SignalBuilder};

const SIZES: [usize; 4] = [256, 1024, 4096, 16384];

fn bench_kernels(c: &mut Criterion) {
    let mut group = c.benchmark_group("kernels");

    for &size in &SIZES {
        let src = SignalBuilder::new()
            .extend((0..size + 1).map(|i| sine(64, i, 1.0)))
            .build();
        let other = src.clone();
        let mut dst = aligned_zeroed(size + 1);

        group.bench_with_input(BenchmarkId::new("multiply", size), &size, |b, &n| {
            b.iter(|| unary::multiply(black_box(&mut dst[..n]), black_box(&src[..n]), 0.5))
        });

        // same work, operands one sample apart
        group.bench_with_input(BenchmarkId::new("multiply_misaligned", size), &size, |b, &n| {
            b.iter(|| unary::multiply(black_box(&mut dst[..n]), black_box(&src[1..n + 1]), 0.5))
        });

        group.bench_with_input(BenchmarkId::new("cubic_clip", size), &size, |b, &n| {
            b.iter(|| unary::cubic_clip(black_box(&mut dst[..n]), black_box(&src[..n])))
        });

        group.bench_with_input(BenchmarkId::new("mix_add", size), &size, |b, &n| {
            b.iter(|| binary::mix_add(black_box(&mut dst[..n]), &src[..n], &other[..n], 0.3))
        });

        let mut rng = StdRng::seed_from_u64(0);
        group.bench_with_input(BenchmarkId::new("randomize", size), &size, |b, &n| {
            b.iter(|| fill::randomize(black_box(&mut dst[..n]), -1.0, 1.0, &mut rng))
        });
    }
    group.finish();
}

fn bench_reductions(c: &mut Criterion) {
    let mut group = c.benchmark_group("reductions");

    for &size in &SIZES {
        let src = SignalBuilder::new()
            .extend((0..size).map(|i| sine(100, i, 0.8)))
            .build();

        group.bench_with_input(BenchmarkId::new("sum", size), &size, |b, _| {
            b.iter(|| horizontal::sum(black_box(&src)))
        });

        group.bench_with_input(BenchmarkId::new("max_abs_value", size), &size, |b, _| {
            b.iter(|| horizontal::max_abs_value(black_box(&src)))
        });

        group.bench_with_input(BenchmarkId::new("rms", size), &size, |b, _| {
            b.iter(|| horizontal::rms(black_box(&src)))
        });
    }
    group.finish();
}

fn bench_interleave(c: &mut Criterion) {
    let mut group = c.benchmark_group("interleave");
    group.sample_size(50);

    for &size in &SIZES {
        let planar: Vec<f64> = (0..2 * size).map(|i| i as f64).collect();

        group.bench_with_input(BenchmarkId::new("divide_and_conquer", size), &size, |b, _| {
            b.iter_batched_ref(
                || planar.clone(),
                |buf| interleave_inplace(black_box(&mut buf[..])),
                criterion::BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("cycle_leader", size), &size, |b, _| {
            b.iter_batched_ref(
                || planar.clone(),
                |buf| cycle_leader::interleave_inplace(black_box(&mut buf[..])),
                criterion::BatchSize::SmallInput,
            )
        });

        let left = SignalBuilder::new().extend(planar[..size].iter().copied()).build();
        let right = SignalBuilder::new().extend(planar[size..].iter().copied()).build();
        let mut out = aligned_zeroed(2 * size);
        group.bench_with_input(BenchmarkId::new("copy", size), &size, |b, _| {
            b.iter(|| interleave(black_box(&left[..]), black_box(&right[..]), &mut out[..]))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_kernels, bench_reductions, bench_interleave);
criterion_main!(benches);
