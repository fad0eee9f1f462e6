use criterion::{black_box, criterion_group, criterion_main, Criterion};

use gradebook_core::parser::{
    embedded_dataset_str, parse_dataset_str, to_dataset_string, DATASET_HEADER,
};
use gradebook_core::validation::parse_lab_scores;

fn bench_parse_dataset(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_dataset");

    let embedded = embedded_dataset_str();

    let large = {
        let mut s = String::from(DATASET_HEADER);
        s.push('\n');
        for i in 0..1000 {
            s.push_str(&format!(
                "{i:09},First{i},Last{i},{},{},{},{},{}\n",
                i % 101,
                (i * 7) % 101,
                (i * 13) % 101,
                (i * 3) % 101,
                i % 120
            ));
        }
        s
    };

    let with_skips = {
        let mut s = String::from(embedded);
        for _ in 0..20 {
            s.push_str("short,row\n");
        }
        s
    };

    group.bench_function("embedded", |b| {
        b.iter(|| parse_dataset_str(black_box(embedded)))
    });

    group.bench_function("large_1000", |b| {
        b.iter(|| parse_dataset_str(black_box(&large)))
    });

    group.bench_function("with_skipped_rows", |b| {
        b.iter(|| parse_dataset_str(black_box(&with_skips)))
    });

    group.finish();
}

fn bench_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize_dataset");

    if let Ok(dataset) = parse_dataset_str(embedded_dataset_str()) {
        group.bench_function("embedded", |b| {
            b.iter(|| to_dataset_string(black_box(&dataset.roster)))
        });
    }

    group.bench_function("parse_lab_scores", |b| {
        b.iter(|| parse_lab_scores(black_box("69, 5, 52")))
    });

    group.finish();
}

criterion_group!(benches, bench_parse_dataset, bench_serialize);
criterion_main!(benches);
