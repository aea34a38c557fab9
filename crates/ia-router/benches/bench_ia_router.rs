use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ia_router::{classify, route, config::default_intent_config};

fn bench_classify(c: &mut Criterion) {
    let config = default_intent_config();
    let queries = vec![
        "дай новое слово",
        "расскажи про артикли",
        "как сказать собака",
        "hello",
        "спасибо",
        "tell me about variable",
        "what does react do with props and state",
        "",
    ];

    c.bench_function("classify_1000_mixed_queries", |b| {
        b.iter(|| {
            for _ in 0..125 {
                for q in &queries {
                    black_box(classify(q, &config));
                }
            }
        })
    });

    c.bench_function("route_1000_no_intent", |b| {
        b.iter(|| {
            for _ in 0..1000 {
                black_box(route("tell me about variable scoping in javascript", &config));
            }
        })
    });
}

criterion_group!(benches, bench_classify);
criterion_main!(benches);
