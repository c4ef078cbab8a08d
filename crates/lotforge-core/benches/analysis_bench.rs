use criterion::{criterion_group, criterion_main, Criterion};
use lotforge_core::config::AnalysisConfig;
use lotforge_core::engine::Engine;
use lotforge_core::parcel::{LaborCommitments, Parcel};
use lotforge_core::rhna::{IncomeLevel, RhnaDirectory, RhnaRequirement};
use lotforge_core::standards::StandardsTable;
use std::hint::black_box;

fn bench_engine() -> Engine {
    let mut rhna = RhnaDirectory::new();
    rhna.insert(
        "Santa Monica",
        "Los Angeles",
        RhnaRequirement {
            percentage: 10.0,
            income_levels: vec![IncomeLevel::Low],
            is_exempt: false,
        },
    );
    Engine::new(StandardsTable::embedded(), rhna, AnalysisConfig::default())
}

fn corridor_parcel() -> Parcel {
    Parcel::builder()
        .apn("4293-002-014")
        .city("Santa Monica")
        .county("Los Angeles")
        .lot_size_sqft(15_000.0)
        .zone_code("C-2")
        .street_row_width_ft(Some(120.0))
        .labor(LaborCommitments {
            prevailing_wage: true,
            skilled_and_trained_workforce: true,
        })
        .build()
}

fn r1_parcel() -> Parcel {
    Parcel::builder()
        .apn("4293-001-001")
        .city("Santa Monica")
        .county("Los Angeles")
        .lot_size_sqft(6000.0)
        .zone_code("R1")
        .build()
}

fn criterion_benchmark(c: &mut Criterion) {
    let engine = bench_engine();
    let corridor = corridor_parcel();
    let r1 = r1_parcel();

    c.bench_function("analyze_corridor_parcel", |b| {
        b.iter(|| engine.analyze(black_box(&corridor)).unwrap())
    });

    c.bench_function("analyze_r1_parcel", |b| {
        b.iter(|| engine.analyze(black_box(&r1)).unwrap())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
