use criterion::{criterion_group, criterion_main, Criterion};
use splasm::{assets, translator};

fn translate_demo(c: &mut Criterion) {
    let source = assets::demo_prog();

    c.bench_function("translate_demo", |b| {
        b.iter(|| translator::translate(source))
    });
}

criterion_group!(benches, translate_demo);
criterion_main!(benches);
