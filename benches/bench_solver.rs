use criterion::{criterion_group, criterion_main, Criterion};

use mixupcube::cube::Cube;
use mixupcube::heuristic::Heuristics;
use mixupcube::solver::solve;
use mixupcube::turn::turn;

fn apply_39_turns() {
    let mut c = Cube::new_solved();
    for t in 0..39 {
        c = turn(&c, t);
    }
}

fn bench_turns(c: &mut Criterion) {
    let mut group = c.benchmark_group("Turn Engine");
    group.bench_function("apply_all_39_turns", |b| b.iter(apply_39_turns));
    group.finish();
}

fn bench_solver(c: &mut Criterion) {
    let heuristics = Heuristics::empty();
    c.bench_function("solve depth-4 scramble, no heuristics", |b| {
        b.iter(|| {
            let mut cube = Cube::new_solved();
            for t in [5, 0, 17, 22] {
                cube = turn(&cube, t);
            }
            solve(&cube, &heuristics)
        })
    });
}

criterion_group!(benches, bench_solver, bench_turns);
criterion_main!(benches);
