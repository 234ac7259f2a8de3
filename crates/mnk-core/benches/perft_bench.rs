//! perft / negamax のベンチマーク
//!
//! 計測ごとに置換表をクリアして条件を揃える。

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use mnk_core::{Solver, SolverConfig};
use std::hint::black_box;

const TT_CAPACITY: usize = 1 << 20;

fn bench_perft_4x3(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft_4x3_k3");
    let config = SolverConfig::default()
        .with_tt_capacity(TT_CAPACITY)
        .with_zobrist_seed(42);
    let mut solver = Solver::new(&config).expect("solver");
    let mut pos = config.position(4, 3, 3).expect("4x3 board");

    for depth in [4u32, 8, 12] {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| {
                solver.clear_tt();
                black_box(solver.perft(&mut pos, black_box(depth)))
            });
        });
    }

    group.finish();
}

fn bench_perft_no_tt(c: &mut Criterion) {
    // 容量1: ほぼすべて置換表ミスになる素の列挙速度
    let config = SolverConfig::default().with_tt_capacity(1).with_zobrist_seed(42);
    let mut solver = Solver::new(&config).expect("solver");
    let mut pos = config.position(3, 3, 3).expect("3x3 board");

    c.bench_function("perft_3x3_k3_no_tt", |b| {
        b.iter(|| black_box(solver.perft(&mut pos, 9)));
    });
}

fn bench_negamax(c: &mut Criterion) {
    let mut group = c.benchmark_group("negamax");
    let config = SolverConfig::default()
        .with_tt_capacity(TT_CAPACITY)
        .with_zobrist_seed(42);
    let mut solver = Solver::new(&config).expect("solver");

    for (m, n, k) in [(3usize, 3usize, 3usize), (4, 3, 3), (4, 4, 3)] {
        let mut pos = config.position(m, n, k).expect("board");
        group.bench_function(format!("{m}x{n}_k{k}"), |b| {
            b.iter(|| {
                solver.clear_tt();
                black_box(solver.negamax(&mut pos))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_perft_4x3, bench_perft_no_tt, bench_negamax);
criterion_main!(benches);
