use ismcts::*;
use rand::SeedableRng;

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        searching_tictactoe_sequential,
        searching_tictactoe_root_parallel,
        searching_tictactoe_tree_parallel,
        searching_phantom_multi_observer,
        searching_goofspiel_exp3,
        determinizing_phantom,
}

const ITERATIONS: usize = 1000;

fn searching_tictactoe_sequential(c: &mut criterion::Criterion) {
    let root = Mnk::tictactoe();
    let solver: SoSolver<Mnk> = Solver::new(Budget::Count(ITERATIONS)).with_seed(0);
    c.bench_function("search tic-tac-toe, sequential", |b| {
        b.iter(|| solver.search(&root).choice())
    });
}

fn searching_tictactoe_root_parallel(c: &mut criterion::Criterion) {
    let root = Mnk::tictactoe();
    let solver: SoSolver<Mnk, RootParallel> = Solver::new(Budget::Count(ITERATIONS));
    c.bench_function("search tic-tac-toe, root parallel", |b| {
        b.iter(|| solver.search(&root).choice())
    });
}

fn searching_tictactoe_tree_parallel(c: &mut criterion::Criterion) {
    let root = Mnk::tictactoe();
    let solver: SoSolver<Mnk, TreeParallel> = Solver::new(Budget::Count(ITERATIONS));
    c.bench_function("search tic-tac-toe, tree parallel", |b| {
        b.iter(|| solver.search(&root).choice())
    });
}

fn searching_phantom_multi_observer(c: &mut criterion::Criterion) {
    let mut root = Phantom::new(4, 4, 3);
    root.do_move(5);
    let solver: MoSolver<Phantom> = Solver::new(Budget::Count(ITERATIONS)).with_seed(0);
    c.bench_function("search phantom 4,4,3-game, multi observer", |b| {
        b.iter(|| solver.search(&root).choice())
    });
}

fn searching_goofspiel_exp3(c: &mut criterion::Criterion) {
    let ref mut rng = rand::rngs::SmallRng::seed_from_u64(0);
    let mut root = Goofspiel::new(13, rng);
    let prize = root.valid_moves()[0];
    root.do_move(prize);
    let solver: MoSolver<Goofspiel, Sequential, Exp3> =
        Solver::new(Budget::Count(ITERATIONS)).with_seed(0);
    c.bench_function("search 13-card goofspiel, exp3", |b| {
        b.iter(|| solver.search(&root).choice())
    });
}

fn determinizing_phantom(c: &mut criterion::Criterion) {
    let ref mut rng = rand::rngs::SmallRng::seed_from_u64(0);
    let mut root = Phantom::new(5, 5, 4);
    for m in [12, 0, 6, 24, 18, 4] {
        root.do_move(m);
    }
    c.bench_function("determinize a phantom 5,5,4-game", |b| {
        b.iter(|| root.determinize(0, rng))
    });
}
