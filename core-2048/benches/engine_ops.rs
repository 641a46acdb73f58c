use core_2048::{moves, spawn, terminal, Direction, Grid};
use criterion::{criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;

fn corpus() -> Vec<Grid> {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut grid = spawn::spawn_tile(&mut rng, &Grid::EMPTY);
    let mut grids = vec![grid];

    let seq = [Direction::Left, Direction::Up, Direction::Right, Direction::Down];
    for i in 0..64 {
        let result = moves::apply(&grid, seq[i % seq.len()]);
        if result.changed {
            grid = spawn::spawn_tile(&mut rng, &result.grid);
        }
        grids.push(grid);
    }

    grids
}

fn bench_moves(c: &mut Criterion) {
    let grids = corpus();

    for direction in Direction::iter() {
        c.bench_function(&format!("apply/{direction}"), |b| {
            b.iter(|| {
                grids
                    .iter()
                    .filter(|&grid| moves::apply(grid, black_box(direction)).changed)
                    .count()
            })
        });
    }
}

fn bench_terminal(c: &mut Criterion) {
    let grids = corpus();

    c.bench_function("is_terminal", |b| {
        b.iter(|| grids.iter().filter(|&grid| terminal::is_terminal(black_box(grid))).count())
    });
}

fn bench_spawn(c: &mut Criterion) {
    let grids = corpus();
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    c.bench_function("spawn_tile", |b| {
        b.iter(|| {
            grids
                .iter()
                .map(|grid| spawn::spawn_tile(&mut rng, black_box(grid)).tile_sum())
                .sum::<u64>()
        })
    });
}

criterion_group!(benches, bench_moves, bench_terminal, bench_spawn);
criterion_main!(benches);
