// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Performance benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use stairframe::{validate, StairGenerator, StaircaseSpec, Typology};

fn spec_for(typology: Typology, risers: u32) -> StaircaseSpec {
    let mut spec = StaircaseSpec::straight(1.2, 0.275, 0.175, risers);
    spec.typology = typology;
    match typology {
        Typology::Straight | Typology::LShaped | Typology::UShaped => {
            spec.risers_per_flight = vec![risers / 2, risers - risers / 2];
            spec.num_flights = 2;
            spec.landing_lengths = vec![1.2];
            spec.landing_widths = vec![1.2];
        }
        Typology::Spiral => spec.spiral_radius = Some(1.0),
        Typology::Cantilever => spec.waist_thickness = 0.0,
    }
    spec
}

fn bench_validate(c: &mut Criterion) {
    let spec = spec_for(Typology::Straight, 16);
    c.bench_function("validate", |b| {
        b.iter(|| validate(black_box(&spec)).is_ok());
    });
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    let generator = StairGenerator::new();

    for typology in Typology::ALL {
        let spec = spec_for(typology, 16);
        group.bench_with_input(
            BenchmarkId::new(typology.as_str(), 16),
            &spec,
            |b, spec| {
                b.iter(|| generator.generate(black_box(spec)).unwrap());
            },
        );
    }

    group.finish();
}

fn bench_tall_stair(c: &mut Criterion) {
    let mut group = c.benchmark_group("tall_straight");
    let generator = StairGenerator::new();

    for risers in [16, 64, 256] {
        let spec = spec_for(Typology::Straight, risers);
        group.bench_with_input(BenchmarkId::from_parameter(risers), &spec, |b, spec| {
            b.iter(|| {
                let model = generator.generate(black_box(spec)).unwrap();
                model.stats()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_validate, bench_generate, bench_tall_stair);
criterion_main!(benches);
