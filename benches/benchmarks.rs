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
        hashing_a_bin_configuration,
        assigning_and_unassigning_an_item,
        checking_feasibility_of_a_small_multiset,
        finding_the_maximum_feasible_item,
        evaluating_the_adversary_step_on_an_empty_root,
        enumerating_load_configurations,
        building_the_item_configuration_universe,
        computing_a_shallow_minibs_layer,
}

fn hashing_a_bin_configuration(c: &mut criterion::Criterion) {
    let z = Zobrist::fixed();
    let bc = BinConf::empty(&z);
    c.bench_function("compute state hash of the empty bc", |b| {
        b.iter(|| z.state_hash(bc.load_hash(), bc.item_hash(), bc.lowest_load() as usize))
    });
}

fn assigning_and_unassigning_an_item(c: &mut criterion::Criterion) {
    let z = Zobrist::fixed();
    c.bench_function("assign then unassign one item", |b| {
        b.iter(|| {
            let mut bc = BinConf::empty(&z);
            let undo = bc.assign(bc.loads().len() - 1, 9, &z);
            bc.unassign(undo);
        })
    });
}

fn checking_feasibility_of_a_small_multiset(c: &mut criterion::Criterion) {
    let z = Zobrist::fixed();
    let mut cache = DpCache::new(12);
    let loads = [0u8, 0, 0];
    let mut items = vec![0u32; S + 1];
    items[9] = 3;
    c.bench_function("DP feasibility of {9,9,9} on empty bins", |b| {
        b.iter(|| is_feasible(&loads, &items, &z, &mut cache))
    });
}

fn finding_the_maximum_feasible_item(c: &mut criterion::Criterion) {
    let z = Zobrist::fixed();
    let mut cache = DpCache::new(12);
    let loads = [5u8, 3, 0];
    let items = vec![0u32; S + 1];
    c.bench_function("DP max feasible item from a partially loaded bc", |b| {
        b.iter(|| max_feasible_item(&loads, &items, &z, &mut cache))
    });
}

fn evaluating_the_adversary_step_on_an_empty_root(c: &mut criterion::Criterion) {
    c.bench_function("generating-mode minimax from an empty root", |b| {
        b.iter(|| {
            let z = Zobrist::fixed();
            let mut dp_cache = DpCache::new(14);
            let mut state_cache = StateCache::new(14);
            let known_sum = KnownSumCache::new();
            let heuristics = HeuristicStrategy::new();
            let mut st = SearchState::new(
                &z,
                &mut dp_cache,
                &mut state_cache,
                &known_sum,
                &heuristics,
                MinimaxMode::Generating,
            );
            let mut dag = Dag::new();
            let mut tasks = TaskTable::new();
            let mut bc = BinConf::empty(&z);
            let root_hash = z.adv_hash(bc.load_hash(), bc.item_hash(), 0);
            let root = dag.add_root(bc.clone(), root_hash);
            let boundary = TaskBoundary { depth: 3, load: 20 };
            generate(&mut st, &mut dag, &mut tasks, &mut bc, root, boundary)
        })
    });
}

fn enumerating_load_configurations(c: &mut criterion::Criterion) {
    c.bench_function("enumerate every sorted load tuple in [0,R)^m", |b| {
        b.iter(|| LoadConf::enumerate().count())
    });
}

fn building_the_item_configuration_universe(c: &mut criterion::Criterion) {
    c.bench_function("enumerate the feasible quantised item universe", |b| {
        b.iter(|| ItemConfUniverse::build().len())
    });
}

fn computing_a_shallow_minibs_layer(c: &mut criterion::Criterion) {
    let universe = ItemConfUniverse::build();
    let binomial = BinomialTable::new();
    let z = Zobrist::fixed();
    c.bench_function("compute the minibs layer near the endgame threshold", |b| {
        b.iter(|| {
            let mut known_sum = KnownSumCache::new();
            MinibsLayer::compute(&universe, &binomial, &z, &mut known_sum, (R * M) as u32 - 6)
        })
    });
}

use binstretch::binconf::{BinConf, BinomialTable, LoadConf};
use binstretch::cache::{KnownSumCache, StateCache};
use binstretch::config::{M, R, S};
use binstretch::dag::{Dag, MinimaxMode};
use binstretch::dp::{is_feasible, max_feasible_item, DpCache};
use binstretch::heuristics::HeuristicStrategy;
use binstretch::minibs::{ItemConfUniverse, MinibsLayer};
use binstretch::minimax::{generate, SearchState, TaskBoundary};
use binstretch::zobrist::Zobrist;
