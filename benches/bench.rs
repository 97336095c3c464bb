use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use sudoku_solver::sudoku::backtracking::{HeuristicBacktracking, NaiveBacktracking};
use sudoku_solver::sudoku::candidates::scan_all;
use sudoku_solver::sudoku::grid::Grid;
use sudoku_solver::sudoku::random_walk::RandomWalk;
use sudoku_solver::sudoku::search::Search;

const PUZZLE: &str =
    "070000043040009610800634900094052000358460020000800530080070091902100005007040802";

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("known_puzzle");

    group.bench_function("naive_backtracking", |b| {
        b.iter(|| {
            let mut grid = Grid::from_line(black_box(PUZZLE)).unwrap();
            NaiveBacktracking.search(&mut grid)
        });
    });

    group.bench_function("heuristic_backtracking", |b| {
        b.iter(|| {
            let mut grid = Grid::from_line(black_box(PUZZLE)).unwrap();
            HeuristicBacktracking.search(&mut grid)
        });
    });

    group.bench_function("random_walk_seeded", |b| {
        b.iter(|| {
            let mut grid = Grid::from_line(black_box(PUZZLE)).unwrap();
            RandomWalk::with_seed(42).search(&mut grid)
        });
    });

    group.finish();
}

fn bench_candidate_scan(c: &mut Criterion) {
    let grid = Grid::from_line(PUZZLE).unwrap();
    c.bench_function("scan_all", |b| {
        b.iter(|| scan_all(black_box(&grid)));
    });
}

criterion_group!(benches, bench_strategies, bench_candidate_scan);
criterion_main!(benches);
