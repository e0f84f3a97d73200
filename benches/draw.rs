use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sorteio::draw::draw_winners;
use sorteio::pool::{parse_names, Pool};

fn bench_draw(c: &mut Criterion) {
    let text: String = (0..10_000).map(|i| format!("Participante {i}\n")).collect();
    let names = Pool::Names(parse_names(&text));
    let range = Pool::Range {
        min: 1,
        max: 1_000_000_000,
    };
    let mut rng = StdRng::seed_from_u64(1);

    c.bench_function("draw_10_of_10k_names", |b| {
        b.iter(|| draw_winners(&names, 10, &mut rng))
    });
    c.bench_function("draw_all_10k_names", |b| {
        b.iter(|| draw_winners(&names, 10_000, &mut rng))
    });
    c.bench_function("draw_10_of_1e9_range", |b| {
        b.iter(|| draw_winners(&range, 10, &mut rng))
    });
}

criterion_group!(benches, bench_draw);
criterion_main!(benches);
