use criterion::{criterion_group, criterion_main, Criterion};
use mazegrid::generators;
use rand::{SeedableRng, XorShiftRng};

fn bench_recursive_backtracker_41(c: &mut Criterion) {
    let mut rng = XorShiftRng::from_seed([3, 5, 7, 11]);

    c.bench_function("recursive_backtracker_41", move |b| {
        b.iter(|| generators::generate(41, false, &mut rng))
    });
}

fn bench_open_plaza_41(c: &mut Criterion) {
    let mut rng = XorShiftRng::from_seed([13, 17, 19, 23]);

    c.bench_function("open_plaza_41", move |b| {
        b.iter(|| generators::generate(41, true, &mut rng))
    });
}

criterion_group!(
    benches,
    bench_recursive_backtracker_41,
    bench_open_plaza_41
);
criterion_main!(benches);
