// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::hint::black_box;
use structunits::math;
use structunits::prelude::*;
use structunits::registry;

const BATCH_SIZES: [usize; 3] = [64, 1024, 16384];

fn random_lengths(n: usize, seed: u64) -> Vec<Length> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Length::from_feet(rng.random_range(0.5..50.0)))
        .collect()
}

fn random_forces(n: usize, seed: u64) -> Vec<Force> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Force::from_kips(rng.random_range(-250.0..250.0)))
        .collect()
}

fn bench_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion");
    for &n in &BATCH_SIZES {
        let lengths = random_lengths(n, 1);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("value_in_mm", n), &lengths, |b, lengths| {
            b.iter(|| {
                let mut acc = 0.0;
                for l in lengths {
                    acc += l.value_in(LengthUnit::Millimeter);
                }
                black_box(acc)
            })
        });
    }
    group.finish();
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    for &n in &BATCH_SIZES {
        let lengths = random_lengths(n, 2);
        let forces = random_forces(n, 3);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(
            BenchmarkId::new("force_times_length", n),
            &(forces, lengths),
            |b, (forces, lengths)| {
                b.iter(|| {
                    let mut acc = 0.0;
                    for (f, l) in forces.iter().zip(lengths) {
                        acc += (*f * *l).standard_value();
                    }
                    black_box(acc)
                })
            },
        );
    }

    group.bench_function("resolve_undefined", |b| {
        let dimension = Dimension::new(2, -5, 1);
        b.iter(|| black_box(registry::build(black_box(dimension), 1.0)))
    });
    group.finish();
}

fn bench_envelope(c: &mut Criterion) {
    let mut group = c.benchmark_group("envelope");
    for &n in &BATCH_SIZES {
        let forces = random_forces(n, 4);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("abs_envelope_of", n), &forces, |b, forces| {
            b.iter(|| black_box(math::abs_envelope_of(forces)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_conversion, bench_dispatch, bench_envelope);
criterion_main!(benches);
