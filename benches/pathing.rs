use criterion::{
    Criterion,
    criterion_group,
    criterion_main
};
use mazegrid::generators;
use mazegrid::pathing;
use mazegrid::tiles::Coordinate;
use rand::{SeedableRng, XorShiftRng};

fn bench_walk_section(c: &mut Criterion) {
    c.bench_function("walk_section_41", |b| {
        let mut rng = XorShiftRng::from_seed([7, 11, 13, 17]);
        let g = generators::generate(41, false, &mut rng);
        b.iter(|| pathing::walk_section(&g, Coordinate::new(0, 0), None, &mut rng))
    });
}

fn bench_walk_to_target(c: &mut Criterion) {
    c.bench_function("walk_to_target_41", |b| {
        let mut rng = XorShiftRng::from_seed([19, 23, 29, 31]);
        let g = generators::generate(41, false, &mut rng);
        let start = Coordinate::new(0, 0);
        let end = Coordinate::new(40, 40);
        b.iter(|| pathing::walk_to_target(&g, start, end, None, &mut rng))
    });
}

fn bench_next_intersection(c: &mut Criterion) {
    c.bench_function("next_intersection_41", |b| {
        let mut rng = XorShiftRng::from_seed([37, 41, 43, 47]);
        let g = generators::generate(41, false, &mut rng);
        b.iter(|| pathing::next_intersection(&g, Coordinate::new(0, 0), None, 20, &mut rng))
    });
}

criterion_group!(
    benches,
    bench_walk_section,
    bench_walk_to_target,
    bench_next_intersection
);
criterion_main!(benches);
