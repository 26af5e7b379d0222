//! Criterion benchmarks for popdict.
//!
//! Covers the pieces that scale with collection size:
//! - Snippet query parsing and matching
//! - Cloze stripping
//! - Full tooltip composition

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use popdict::cloze::strip_cloze;
use popdict::collection::{Collection, MemoryCollection};
use popdict::config::PopupConfig;
use popdict::document::Note;
use popdict::lookup::TooltipComposer;

/// Generate a collection with a dictionary section and free-text notes.
fn generate_collection(count: usize) -> MemoryCollection {
    let words = [
        "cat", "dog", "river", "mountain", "city", "language", "verb", "noun", "capital",
        "history", "travel", "music",
    ];

    let collection = MemoryCollection::new();
    for (i, word) in words.iter().enumerate() {
        collection.add_note(
            Note::builder(i as i64 + 1, "Dictionary")
                .field("Term", *word)
                .field("Definition", format!("definition of {word}"))
                .card(10_000 + i as i64, 0)
                .build(),
        );
    }

    for i in 0..count {
        let a = words[i % words.len()];
        let b = words[(i * 7 + 3) % words.len()];
        collection.add_note(
            Note::builder(1_000 + i as i64, "Basic")
                .field("Front", format!("{{{{c1::{a}}}}} and the {b} number {i}"))
                .field("Back", format!("notes about {b}"))
                .field("Notes", "private")
                .build(),
        );
    }
    collection
}

fn bench_find_notes(c: &mut Criterion) {
    let collection = generate_collection(5_000);
    let mut group = c.benchmark_group("find_notes");
    group.throughput(Throughput::Elements(collection.len() as u64));

    group.bench_function("snippet_query", |b| {
        b.iter(|| {
            collection
                .find_notes(black_box(r#""river" -nid:1001 -nid:1002"#))
                .unwrap()
        })
    });
    group.finish();
}

fn bench_cloze(c: &mut Criterion) {
    let text = "{{c1::Paris::capital}} lies on the {{c2::Seine}} and ".repeat(50);
    c.bench_function("strip_cloze", |b| b.iter(|| strip_cloze(black_box(&text)).len()));
}

fn bench_compose(c: &mut Criterion) {
    let collection = generate_collection(5_000);
    let config = PopupConfig::default()
        .with_warn_limit(0)
        .with_excluded_fields(["Notes"]);
    let composer = TooltipComposer::new(&collection, &config);

    let mut group = c.benchmark_group("compose");
    for term in ["cat", "number 42", "absent"] {
        group.bench_function(term, |b| {
            b.iter(|| composer.compose(black_box(term), None).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_find_notes, bench_cloze, bench_compose);
criterion_main!(benches);
