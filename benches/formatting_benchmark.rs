use criterion::{black_box, criterion_group, criterion_main, Criterion};
use khmer_locale::{format_currency, khmer_to_latin, normalize_text, FormatOptions};

fn benchmark_formatting(c: &mut Criterion) {
    let text = "កងកម្លាំងរក្សាសន្តិសុខនិងសណ្តាប់ធ្នាប់សាធារណៈ"; // "Security and public order forces"
    let options = FormatOptions::default();

    c.bench_function("transliterate_short_sentence", |b| {
        b.iter(|| khmer_to_latin(black_box(text)))
    });

    c.bench_function("normalize_short_sentence", |b| {
        b.iter(|| normalize_text(black_box(text)))
    });

    c.bench_function("format_currency", |b| {
        b.iter(|| format_currency(black_box(1234567.891), &options))
    });
}

criterion_group!(benches, benchmark_formatting);
criterion_main!(benches);
