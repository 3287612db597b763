use gameboard_generator::board::GameBoard;
use gameboard_generator::generator::GameBoardGenerator;
use rand::{rngs::SmallRng, SeedableRng};

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

fn criterion_benchmark(c: &mut Criterion) {
    let mut g = c.benchmark_group("GenerateWalls");
    let mut rng = SmallRng::seed_from_u64(3);

    g.bench_function("single wall 10x20", |b| {
        b.iter_batched(
            || GameBoardGenerator::new(GameBoard::standard()),
            |mut gen| gen.generate_wall(black_box(7), &mut rng),
            BatchSize::SmallInput,
        )
    });

    g.bench_function("ten walls 10x20", |b| {
        b.iter_batched(
            || GameBoardGenerator::new(GameBoard::standard()),
            |mut gen| gen.generate_walls(10, black_box(5), &mut rng),
            BatchSize::SmallInput,
        )
    });

    g.bench_function("fill 16x16", |b| {
        b.iter_batched(
            || GameBoardGenerator::new(GameBoard::new(16, 16)),
            |mut gen| gen.generate_walls(60, black_box(3), &mut rng),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
