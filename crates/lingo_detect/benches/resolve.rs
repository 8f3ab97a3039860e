use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lingo_detect::{
    resolve_uncached, DetectOptions, Detector, Resolver, StaticSource,
};

const CASES: &[&[&str]] = &[
    &["zh-Hans-CN"],
    &["en-US"],
    &["fr-CA"],
    &["zh-Hans-CN", "en-US"],
    &["unknown-XX", "zh-CN", "en"],
    &["de-DE", "fr-FR", "es-ES", "it-IT", "pt-BR"],
    &["zh-Hans-CN-x-test", "zh-Hans-CN", "zh-Hans", "zh-CN", "zh"],
];

fn bench_resolve(c: &mut Criterion) {
    let resolver = Resolver::new();
    c.bench_function("resolve cached", |b| {
        let mut i = 0;
        b.iter(|| {
            let tags = CASES[i % CASES.len()];
            i += 1;
            black_box(resolver.resolve(black_box(tags)))
        })
    });

    c.bench_function("resolve uncached", |b| {
        let mut i = 0;
        b.iter(|| {
            let tags = CASES[i % CASES.len()];
            i += 1;
            black_box(resolve_uncached(black_box(tags)))
        })
    });
}

fn bench_detect(c: &mut Criterion) {
    let resolver = Resolver::new();
    let source =
        StaticSource::new().with_languages(["zh-Hans-CN", "zh-CN", "zh", "en-US", "en"]);

    let mut group = c.benchmark_group("detect");
    for (name, options) in [
        ("compat", DetectOptions::compat()),
        ("cached", DetectOptions::default()),
        ("uncached", DetectOptions::default().use_cache(false)),
        ("unstandardized", DetectOptions::default().standardize(false)),
    ] {
        let detector = Detector::new(&source)
            .with_resolver(&resolver)
            .with_options(options);
        group.bench_function(name, |b| b.iter(|| black_box(detector.detect())));
    }
    group.finish();
}

criterion_group!(benches, bench_resolve, bench_detect);
criterion_main!(benches);
