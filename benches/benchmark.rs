use criterion::{criterion_group, criterion_main, Criterion};
use tfidf_summarizer::Summarizer;

const PARAGRAPHS: [&str; 4] = [
    "Rust is a systems programming language focused on safety, speed and concurrency. \
     The borrow checker enforces memory safety without a garbage collector.",
    "Ownership rules decide when values are dropped. \
     Borrowing lets functions use data without taking ownership of it.",
    "Many developers enjoy cooking pasta on weekends. \
     The weather was mild in April and the gardens bloomed early.",
    "Cargo builds the project, downloads its dependencies and runs the tests. \
     Crates published to the registry can be shared across projects.",
];

fn build_text(repeat: usize) -> String {
    let mut text = String::new();
    for i in 0..repeat {
        text.push_str(PARAGRAPHS[i % PARAGRAPHS.len()]);
        text.push(' ');
    }
    text
}

fn summarize_benchmark(c: &mut Criterion) {
    let summarizer = Summarizer::new();
    let short = build_text(4);
    let long = build_text(400);

    c.bench_function("summarize_short", |b| {
        b.iter(|| summarizer.summarize(&short, 0.3))
    });

    c.bench_function("summarize_long", |b| {
        b.iter(|| summarizer.summarize(&long, 0.3))
    });

    let documents: Vec<String> = (1..=32).map(build_text).collect();
    c.bench_function("summarize_many", |b| {
        b.iter(|| summarizer.summarize_many(&documents, 0.3))
    });
}

criterion_group!(benches, summarize_benchmark);
criterion_main!(benches);
