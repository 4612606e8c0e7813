//! Sampling tests for the unweighted model generators.

use std::collections::BTreeSet;

use proptest::prelude::*;
use rand::Rng;
use rstest::rstest;

use super::*;
use crate::{SequenceSeedSource, test_utils::suite_proptest_config};

fn draw(generator: &mut ModelGenerator, rounds: usize) -> Vec<Graph> {
    (0..rounds).map(|_| generator.generate()).collect()
}

#[rstest]
#[case::gnp(GraphModel::Gnp { nodes: 30, probability: 0.2 })]
#[case::sinkless_gnp(GraphModel::SinklessGnp { nodes: 30, probability: 0.05 })]
#[case::gnc(GraphModel::Gnc { nodes: 30, expected_degree: 4.0 })]
#[case::sinkless_gnc(GraphModel::SinklessGnc { nodes: 30, expected_degree: 1.5 })]
#[case::stochastic_gnp(GraphModel::UniformlyStochasticSinklessGnp {
    nodes: NodeRange::new(5, 40),
    probability: DensityRange::new(0.05, 0.5),
})]
#[case::stochastic_gnc(GraphModel::UniformlyStochasticSinklessGnc {
    nodes: NodeRange::new(5, 40),
    expected_degree: DensityRange::new(1.0, 6.0),
})]
fn equal_seeds_reproduce_the_whole_sequence(#[case] model: GraphModel) {
    let mut left = ModelGenerator::new(model, 1234).expect("valid model");
    let mut right = ModelGenerator::new(model, 1234).expect("valid model");
    assert_eq!(draw(&mut left, 4), draw(&mut right, 4));
}

#[test]
fn successive_calls_yield_fresh_samples() {
    let mut generator = ModelGenerator::gnp(40, 0.3, 9).expect("valid model");
    let first = generator.generate();
    let second = generator.generate();
    assert_ne!(first, second);
}

#[test]
fn different_seeds_yield_different_graphs() {
    let mut left = ModelGenerator::gnp(40, 0.3, 1).expect("valid model");
    let mut right = ModelGenerator::gnp(40, 0.3, 2).expect("valid model");
    assert_ne!(left.generate(), right.generate());
}

#[test]
fn zero_probability_gives_empty_neighbour_sets() {
    let mut generator = ModelGenerator::gnp(5, 0.0, 42).expect("valid model");
    let graph = generator.generate();
    assert_eq!(graph.node_count(), 5);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn sinkless_full_probability_gives_complete_digraph_with_loops() {
    let mut generator = ModelGenerator::sinkless_gnp(5, 1.0, 42).expect("valid model");
    let graph = generator.generate();
    let everyone: BTreeSet<usize> = (0..5).collect();
    for node in 0..5 {
        assert_eq!(graph.neighbours(node), Some(&everyone));
    }
}

#[test]
fn zero_nodes_is_not_an_error() {
    let mut generator = ModelGenerator::sinkless_gnp(0, 0.0, 3).expect("valid model");
    assert_eq!(generator.generate().node_count(), 0);
}

#[rstest]
#[case(10, 3.0)]
#[case(25, 0.5)]
#[case(8, 8.0)]
#[case(6, 40.0)]
fn gnc_matches_gnp_with_mapped_probability(#[case] nodes: usize, #[case] degree: f64) {
    let probability = (degree / nodes as f64).min(1.0);
    let mut gnc = ModelGenerator::gnc(nodes, degree, 77).expect("valid model");
    let mut gnp = ModelGenerator::gnp(nodes, probability, 77).expect("valid model");
    assert_eq!(draw(&mut gnc, 3), draw(&mut gnp, 3));

    let mut sinkless_gnc = ModelGenerator::sinkless_gnc(nodes, degree, 77).expect("valid model");
    let mut sinkless_gnp =
        ModelGenerator::sinkless_gnp(nodes, probability, 77).expect("valid model");
    assert_eq!(draw(&mut sinkless_gnc, 3), draw(&mut sinkless_gnp, 3));
}

#[test]
fn saturated_gnc_gives_complete_digraph() {
    let mut generator = ModelGenerator::gnc(6, 100.0, 5).expect("valid model");
    assert_eq!(generator.generate().edge_count(), 36);
}

#[test]
fn stochastic_round_matches_a_fresh_sinkless_generator() {
    let nodes = NodeRange::new(4, 12);
    let probability = DensityRange::new(0.2, 0.6);
    let seed = 31;
    let mut stochastic =
        ModelGenerator::uniformly_stochastic_sinkless_gnp(nodes, probability, seed)
            .expect("valid model");

    let mut parent = GeneratorRng::new(seed);
    let engine = parent.engine();
    let node_count: usize = engine.gen_range(nodes.min..=nodes.max);
    let drawn: f64 = engine.gen_range(probability.min..=probability.max);
    let child_seed = parent.derive_seed();
    let mut expected =
        ModelGenerator::sinkless_gnp(node_count, drawn, child_seed).expect("valid model");

    assert_eq!(stochastic.generate(), expected.generate());
}

#[test]
fn stochastic_gnc_round_maps_the_drawn_degree_with_the_drawn_size() {
    let nodes = NodeRange::new(3, 15);
    let expected_degree = DensityRange::new(1.0, 5.0);
    let seed = 47;
    let mut stochastic =
        ModelGenerator::uniformly_stochastic_sinkless_gnc(nodes, expected_degree, seed)
            .expect("valid model");

    let mut parent = GeneratorRng::new(seed);
    let mut expected = Vec::new();
    for _ in 0..3 {
        let engine = parent.engine();
        let node_count: usize = engine.gen_range(nodes.min..=nodes.max);
        let drawn: f64 = engine.gen_range(expected_degree.min..=expected_degree.max);
        let child_seed = parent.derive_seed();
        let mut round =
            ModelGenerator::sinkless_gnc(node_count, drawn, child_seed).expect("valid model");
        expected.push(round.generate());
    }

    assert_eq!(draw(&mut stochastic, 3), expected);
}

#[rstest]
#[case::sinkless_gnc(GraphModel::SinklessGnc { nodes: 5, expected_degree: 5e-324 })]
#[case::stochastic_gnc(GraphModel::UniformlyStochasticSinklessGnc {
    nodes: NodeRange::new(5, 5),
    expected_degree: DensityRange::new(5e-324, 5e-324),
})]
fn degree_that_maps_to_zero_probability_is_rejected(#[case] model: GraphModel) {
    let err = ModelGenerator::new(model, 1).expect_err("model must be rejected");
    assert_eq!(err.code(), crate::GeneratorErrorCode::SinklessWithoutEdges);
}

#[test]
fn stochastic_models_vary_size_within_bounds() {
    let mut generator = ModelGenerator::uniformly_stochastic_sinkless_gnc(
        NodeRange::new(3, 9),
        DensityRange::new(1.0, 2.0),
        8,
    )
    .expect("valid model");
    let sizes: BTreeSet<usize> = (0..60)
        .map(|_| {
            let graph = generator.generate();
            assert!(graph.is_sinkless());
            graph.node_count()
        })
        .collect();
    assert!(sizes.iter().all(|size| (3..=9).contains(size)));
    assert!(sizes.len() > 1, "node count should vary between calls");
}

#[test]
fn degenerate_ranges_pin_the_parameters() {
    let mut generator = ModelGenerator::uniformly_stochastic_sinkless_gnp(
        NodeRange::new(4, 4),
        DensityRange::new(1.0, 1.0),
        2,
    )
    .expect("valid model");
    for _ in 0..3 {
        assert_eq!(generator.generate().edge_count(), 16);
    }
}

#[test]
fn seed_source_construction_matches_explicit_seed() {
    let model = GraphModel::Gnp {
        nodes: 20,
        probability: 0.25,
    };
    let mut source = SequenceSeedSource::new(100);
    let mut sourced = ModelGenerator::from_source(model, &mut source).expect("valid model");
    let seed = sourced.seed();
    assert_eq!(seed, SequenceSeedSource::new(100).next_seed());
    let mut explicit = ModelGenerator::new(model, seed).expect("valid model");
    assert_eq!(sourced.generate(), explicit.generate());
}

#[test]
fn stub_seed_source_is_used_verbatim() {
    let model = GraphModel::SinklessGnc {
        nodes: 12,
        expected_degree: 2.0,
    };
    let mut stub = || 555_u64;
    let generator = ModelGenerator::from_source(model, &mut stub).expect("valid model");
    assert_eq!(generator.seed(), 555);
    assert_eq!(generator.model(), &model);
}

proptest! {
    #![proptest_config(suite_proptest_config(64))]

    #[test]
    fn sinkless_models_never_emit_sinks(
        nodes in 0_usize..40,
        probability in 0.001_f64..=1.0,
        seed in any::<u64>(),
    ) {
        let mut generator = ModelGenerator::sinkless_gnp(nodes, probability, seed)
            .expect("valid model");
        let graph = generator.generate();
        prop_assert_eq!(graph.node_count(), nodes);
        prop_assert!(graph.is_sinkless());
    }

    #[test]
    fn neighbour_ids_stay_in_range(
        nodes in 0_usize..40,
        degree in 0.0_f64..50.0,
        seed in any::<u64>(),
    ) {
        let mut generator = ModelGenerator::gnc(nodes, degree, seed).expect("valid model");
        let graph = generator.generate();
        prop_assert!(graph.edges().all(|(from, to)| from < nodes && to < nodes));
    }

    #[test]
    fn construction_is_a_pure_function_of_model_and_seed(
        nodes in 1_usize..30,
        degree in 0.1_f64..10.0,
        seed in any::<u64>(),
    ) {
        let mut left = ModelGenerator::sinkless_gnc(nodes, degree, seed).expect("valid model");
        let mut right = ModelGenerator::sinkless_gnc(nodes, degree, seed).expect("valid model");
        prop_assert_eq!(draw(&mut left, 2), draw(&mut right, 2));
    }
}
