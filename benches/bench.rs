use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use sudoku_csp::csp::solver::Solver;
use sudoku_csp::csp::backtracking::Backtracking;
use sudoku_csp::sudoku::geometry::BoxSize;
use sudoku_csp::sudoku::puzzle::Puzzle;
use sudoku_csp::sudoku::solver::{as_problem, solve};

const REFERENCE_PUZZLE: &str = "2 5 . . 3 . 9 . 1 \
                                . 1 . . . 4 . . . \
                                4 . 7 . . . 2 . 8 \
                                . . 5 2 . . . . . \
                                . . . . 9 8 1 . . \
                                . 4 . . . 3 . . . \
                                . . . 3 6 . . 7 2 \
                                . 7 . . . . . . 3 \
                                9 . 3 . . . 6 . 4";

fn bench_empty_grids(c: &mut Criterion) {
    let mut group = c.benchmark_group("empty_grid");
    for k in [2usize, 3] {
        let box_size = BoxSize::new(k).expect("valid box size");
        group.bench_function(format!("k{k}"), |b| {
            b.iter(|| solve(black_box(&Puzzle::empty(box_size))).expect("satisfiable"));
        });
    }
    group.finish();
}

fn bench_reference_puzzle(c: &mut Criterion) {
    let box_size = BoxSize::new(3).expect("valid box size");
    let puzzle = Puzzle::parse(REFERENCE_PUZZLE, box_size).expect("parses");

    c.bench_function("reference_puzzle/solve", |b| {
        b.iter(|| solve(black_box(&puzzle)).expect("satisfiable"));
    });

    c.bench_function("reference_puzzle/build_state", |b| {
        b.iter(|| {
            let solver: Backtracking = Solver::new(as_problem(black_box(&puzzle)));
            solver
        });
    });
}

criterion_group!(benches, bench_empty_grids, bench_reference_puzzle);
criterion_main!(benches);
