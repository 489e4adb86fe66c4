use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_decimal_macros::dec;

use csvout::{CsvOptions, Field, escape_field, generate_csv, generate_csv_all_quoted};

fn build_rows(n: usize) -> Vec<Vec<Field>> {
    (0..n)
        .map(|i| {
            vec![
                Field::from(i as i64),
                Field::from(format!("Participant {i}")),
                Field::from(format!("participant{i}@example.com")),
                Field::from(format!("Notes for {i}, with a comma")),
                Field::from(dec!(24.95)),
                Field::Empty,
            ]
        })
        .collect()
}

const HEADERS: [&str; 6] = ["id", "name", "email", "notes", "fee", "remarks"];

fn bench_escape(c: &mut Criterion) {
    c.bench_function("escape_plain", |b| {
        b.iter(|| escape_field(black_box("john@example.com"), false))
    });
    c.bench_function("escape_special", |b| {
        b.iter(|| escape_field(black_box("say \"hello\", twice\nplease"), false))
    });
}

fn bench_generate(c: &mut Criterion) {
    let rows_100 = build_rows(100);
    let rows_10k = build_rows(10_000);
    let options = CsvOptions::default();

    c.bench_function("generate_100_rows", |b| {
        b.iter(|| generate_csv(black_box(&HEADERS), black_box(&rows_100), &options))
    });
    c.bench_function("generate_10k_rows", |b| {
        b.iter(|| generate_csv(black_box(&HEADERS), black_box(&rows_10k), &options))
    });
    c.bench_function("generate_10k_rows_all_quoted", |b| {
        b.iter(|| generate_csv_all_quoted(black_box(&HEADERS), black_box(&rows_10k), "\n"))
    });
}

criterion_group!(benches, bench_escape, bench_generate);
criterion_main!(benches);
