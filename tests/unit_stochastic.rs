// tests/unit_stochastic.rs
//! Tests for the random-walk estimator, using seeded RNGs throughout.

use rand::rngs::StdRng;
use rand::SeedableRng;

use walkrank_core::error::RankError;
use walkrank_core::graph::Graph;
use walkrank_core::rank::{stochastic_rank, stochastic_rank_parallel};

const TOLERANCE: f64 = 1e-9;

fn cycle() -> Graph {
    Graph::from_pairs([("A", "B"), ("B", "C"), ("C", "A")])
}

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[test]
fn test_hit_frequencies_sum_to_one() {
    let graph = cycle();
    let hits = stochastic_rank(&graph, 1_000, 10, &mut rng(7)).expect("no dangling nodes");
    let total: f64 = hits.iter().sum();
    assert!(
        (total - 1.0).abs() < TOLERANCE,
        "Frequencies should sum to 1.0, got {total}"
    );
    assert!(hits.iter().all(|&h| h >= 0.0), "Frequencies are non-negative");
}

#[test]
fn test_self_loop_collects_all_hits() {
    let graph = Graph::from_pairs([("A", "A")]);
    let hits = stochastic_rank(&graph, 10, 5, &mut rng(1)).expect("self-loop is not dangling");
    assert!(
        (hits[0] - 1.0).abs() < TOLERANCE,
        "Every walk lands on the only node"
    );
}

#[test]
fn test_single_repeat_puts_all_mass_on_one_node() {
    let graph = cycle();
    let hits = stochastic_rank(&graph, 1, 4, &mut rng(3)).expect("no dangling nodes");
    let ones = hits.iter().filter(|&&h| (h - 1.0).abs() < TOLERANCE).count();
    let zeros = hits.iter().filter(|&&h| h == 0.0).count();
    assert_eq!(ones, 1, "Exactly one landing node scores 1.0");
    assert_eq!(zeros, graph.node_count() - 1, "All other nodes score 0.0");
}

#[test]
fn test_same_seed_reproduces_the_result() {
    let graph = cycle();
    let first = stochastic_rank(&graph, 500, 8, &mut rng(42)).expect("no dangling nodes");
    let second = stochastic_rank(&graph, 500, 8, &mut rng(42)).expect("no dangling nodes");
    assert_eq!(first, second, "Seeded runs are reproducible");
}

#[test]
fn test_walk_onto_dangling_node_is_a_typed_error() {
    // A -> B and B has nowhere to go: with two steps every walk fails,
    // whichever node it starts from.
    let graph = Graph::from_pairs([("A", "B")]);
    let err = stochastic_rank(&graph, 10, 2, &mut rng(0)).expect_err("walk must hit B");
    match err {
        RankError::DanglingNode(node) => assert_eq!(node, "B", "Error names the node"),
        other => panic!("Expected DanglingNode, got {other:?}"),
    }
}

#[test]
fn test_zero_repeats_is_a_config_error() {
    let graph = cycle();
    let err = stochastic_rank(&graph, 0, 5, &mut rng(0)).expect_err("no trials to run");
    assert!(
        matches!(err, RankError::Config(_)),
        "Expected Config error, got {err:?}"
    );
}

#[test]
fn test_empty_graph_is_a_config_error() {
    let graph = Graph::default();
    let err = stochastic_rank(&graph, 10, 5, &mut rng(0)).expect_err("nothing to walk on");
    assert!(
        matches!(err, RankError::Config(_)),
        "Expected Config error, got {err:?}"
    );
}

#[test]
fn test_duplicate_edges_still_reach_both_nodes() {
    // A's out-list is [B, B]: both choices lead to B, so walks alternate.
    let graph = Graph::from_pairs([("A", "B"), ("A", "B"), ("B", "A")]);
    let hits = stochastic_rank(&graph, 200, 3, &mut rng(11)).expect("no dangling nodes");
    assert!(hits.iter().all(|&h| h > 0.0), "Both nodes get visited");
    let total: f64 = hits.iter().sum();
    assert!((total - 1.0).abs() < TOLERANCE);
}

#[test]
fn test_parallel_same_seed_is_deterministic() {
    let graph = cycle();
    let first = stochastic_rank_parallel(&graph, 10_000, 6, 99).expect("no dangling nodes");
    let second = stochastic_rank_parallel(&graph, 10_000, 6, 99).expect("no dangling nodes");
    assert_eq!(first, second, "Parallel runs with one seed are reproducible");
}

#[test]
fn test_parallel_mass_sums_to_one() {
    let graph = cycle();
    // More repeats than one chunk, so the merge path is exercised.
    let hits = stochastic_rank_parallel(&graph, 70_000, 4, 5).expect("no dangling nodes");
    let total: f64 = hits.iter().sum();
    assert!(
        (total - 1.0).abs() < 1e-6,
        "Chunked merge still conserves mass, got {total}"
    );
}

#[test]
fn test_parallel_surfaces_dangling_error() {
    let graph = Graph::from_pairs([("A", "B")]);
    let err = stochastic_rank_parallel(&graph, 100, 2, 0).expect_err("walk must hit B");
    assert!(
        matches!(err, RankError::DanglingNode(_)),
        "Expected DanglingNode, got {err:?}"
    );
}
