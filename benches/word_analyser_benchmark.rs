use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::io::Cursor;
use word_analyser::{generate_word_map, rank_words, StopwordFilter};

fn benchmark_generate_and_rank(c: &mut Criterion) {
    let stopwords = StopwordFilter::from_words(["the", "of", "and", "a", "it", "was"]);

    let text = "It was the best of times, it was the worst of times, it was the age of wisdom, \
                it was the age of foolishness, it was the epoch of belief\n"
        .repeat(500);

    c.bench_function("generate_word_map", |b| {
        b.iter(|| generate_word_map(Cursor::new(black_box(text.as_str())), black_box(&stopwords)))
    });

    let frequency_map = generate_word_map(Cursor::new(text.as_str()), &stopwords).unwrap();

    c.bench_function("rank_words", |b| b.iter(|| rank_words(black_box(&frequency_map))));
}

criterion_group!(benches, benchmark_generate_and_rank);
criterion_main!(benches);
