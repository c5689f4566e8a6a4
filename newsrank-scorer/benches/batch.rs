//! Benchmarks keyword scoring over a batch of synthetic articles.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use newsrank_core::{Article, TopicKeywordSet, TopicScoreTable};
use newsrank_scorer::KeywordScorer;

const BODY: &str = "An investigation uncovered leaked documents showing how machine \
learning models trained on public datasets enabled a zero-day exploit against \
European Parliament systems.";

fn synthetic_batch(size: usize) -> Vec<Article> {
    (0..size)
        .filter_map(|i| {
            Article::new(
                format!("bench-{i}"),
                format!("Story {i}: breakthrough in neural networks"),
                BODY,
                1_700_000_000,
            )
            .ok()
        })
        .collect()
}

fn bench_batch(c: &mut Criterion) {
    let scorer = KeywordScorer::new(TopicKeywordSet::default(), TopicScoreTable::new());
    let articles = synthetic_batch(500);
    c.bench_function("score_articles_batch/500", |b| {
        b.iter(|| scorer.score_articles_batch(black_box(articles.clone())));
    });
}

criterion_group!(benches, bench_batch);
criterion_main!(benches);
