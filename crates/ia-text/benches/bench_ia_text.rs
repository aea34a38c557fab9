use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ia_text::{normalize, tokenize_default, Normalizer};
use rand::Rng;

fn random_sentence(rng: &mut impl Rng, words: usize) -> String {
    const POOL: &[&str] = &[
        "Hello,", "как", "СКАЗАТЬ", "variable?", "takk!", "går", "det", "функция", "React",
        "«привет»", "...", "HTML/CSS", "snake_case", "ÆØÅ",
    ];
    (0..words).map(|_| POOL[rng.gen_range(0..POOL.len())]).collect::<Vec<_>>().join(" ")
}

fn bench_normalize(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let inputs: Vec<String> = (0..1000).map(|_| random_sentence(&mut rng, 12)).collect();
    let normalizer = Normalizer::default();

    c.bench_function("normalize_1000_sentences", |b| {
        b.iter(|| {
            for s in &inputs {
                black_box(normalizer.normalize(s));
            }
        })
    });

    c.bench_function("normalize_tokenize_1000_sentences", |b| {
        b.iter(|| {
            for s in &inputs {
                let n = normalize(s);
                black_box(tokenize_default(&n).len());
            }
        })
    });
}

criterion_group!(benches, bench_normalize);
criterion_main!(benches);
