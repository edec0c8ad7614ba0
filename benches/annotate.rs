// benches/annotate.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use papyrus_scrape::explore::annotate::{excerpt, query_matcher, spans, splice};
use papyrus_scrape::record::Irregularity;

fn sample_text() -> String {
    "παρα τον παραδεισον εἶπεν ὁ Λόγος καὶ ἐγένετο φως ".repeat(200)
}

fn sample_irregularities() -> Vec<String> {
    vec![
        "παρα: read παρά".to_string(),
        "τον: read τὸν".to_string(),
        "φως: read φῶς".to_string(),
        "καὶ: read καί".to_string(),
    ]
}

fn bench_annotate(c: &mut Criterion) {
    let text = sample_text();
    let entries = sample_irregularities();

    c.bench_function("splice", |b| {
        b.iter(|| {
            let pairs = entries.iter().filter_map(|e| Irregularity::parse(e));
            let out = splice(black_box(&text), pairs);
            black_box(out.len())
        })
    });

    let matcher = query_matcher("λόγος").expect("valid query");
    c.bench_function("excerpt", |b| {
        b.iter(|| black_box(excerpt(black_box(&text), &matcher, 500)))
    });

    let pairs = entries.iter().filter_map(|e| Irregularity::parse(e));
    let marked = splice(&text, pairs);
    c.bench_function("spans", |b| {
        b.iter(|| black_box(spans(black_box(&marked)).len()))
    });
}

criterion_group!(benches, bench_annotate);
criterion_main!(benches);
