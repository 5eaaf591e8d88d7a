use cactus::{algo::*, gens::*, prelude::*};
use proptest::prelude::*;
use rand::{Rng, SeedableRng, seq::SliceRandom};
use rand_pcg::Pcg64Mcg;

/// Random cactus with `chords` additional edges; each chord merges the blocks along its path
fn random_graph(seed: u64, blocks: usize, chords: usize) -> Vec<(VertexId, VertexId)> {
    let mut rng = Pcg64Mcg::seed_from_u64(seed);
    let mut graph = RandomCactus::new()
        .blocks(blocks)
        .max_cycle_len(5)
        .graph(&mut rng)
        .unwrap();

    let n = graph.number_of_nodes();
    for _ in 0..chords {
        let u = rng.random_range(1..=n);
        let v = rng.random_range(1..=n);
        if u != v && !graph.contains_edge(u, v) {
            graph.add_edge(u, v).unwrap();
        }
    }
    graph.id_edges()
}

fn canonical(blocks: &[Graph]) -> Vec<Vec<(VertexId, VertexId)>> {
    let mut blocks: Vec<_> = blocks.iter().map(Graph::id_edges).collect();
    blocks.sort();
    blocks
}

fn shuffled(edges: &[(VertexId, VertexId)], seed: u64) -> Graph {
    let mut rng = Pcg64Mcg::seed_from_u64(seed);
    let mut edges = edges.to_vec();
    edges.shuffle(&mut rng);
    Graph::try_from_edges(
        edges
            .into_iter()
            .map(|(u, v)| if rng.random_bool(0.5) { (u, v) } else { (v, u) }),
    )
    .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_cacti_are_recognized(seed in any::<u64>(), blocks in 0usize..60) {
        let mut rng = Pcg64Mcg::seed_from_u64(seed);
        let graph = RandomCactus::new().blocks(blocks).graph(&mut rng).unwrap();
        let report = graph.cactus_report().unwrap();

        prop_assert!(report.is_cactus());
        prop_assert!(report.offending_vertices().is_empty());
        prop_assert_eq!(report.blocks().len(), blocks);
    }

    #[test]
    fn blocks_do_not_depend_on_insertion_order(
        seed in any::<u64>(),
        blocks in 1usize..30,
        chords in 0usize..4,
        order_seed in any::<u64>(),
    ) {
        let edges = random_graph(seed, blocks, chords);
        let reference = Graph::try_from_edges(edges.iter().copied()).unwrap();
        let permuted = shuffled(&edges, order_seed);

        let expected = canonical(&CactusAnalysis::new().decompose(&reference).unwrap());
        let actual = canonical(&CactusAnalysis::new().decompose(&permuted).unwrap());
        prop_assert_eq!(&expected, &actual);

        let expected = CactusAnalysis::new().analyze(&reference).unwrap();
        let actual = CactusAnalysis::new().analyze(&permuted).unwrap();
        prop_assert_eq!(expected.is_cactus(), actual.is_cactus());

        let mut offending_expected = expected.offending_vertices().to_vec();
        let mut offending_actual = actual.offending_vertices().to_vec();
        offending_expected.sort_unstable();
        offending_actual.sort_unstable();
        prop_assert_eq!(offending_expected, offending_actual);
    }

    #[test]
    fn blocks_do_not_depend_on_start_vertex(
        seed in any::<u64>(),
        blocks in 1usize..30,
        chords in 0usize..4,
        start_seed in any::<u64>(),
    ) {
        let graph = Graph::try_from_edges(random_graph(seed, blocks, chords)).unwrap();
        let start = Pcg64Mcg::seed_from_u64(start_seed).random_range(1..=graph.number_of_nodes());

        let expected = canonical(&CactusAnalysis::new().decompose(&graph).unwrap());
        let actual = canonical(
            &CactusAnalysis::new()
                .start_vertex(StartVertex::Id(start))
                .decompose(&graph)
                .unwrap(),
        );
        prop_assert_eq!(expected, actual);
    }

    #[test]
    fn blocks_partition_the_edges(seed in any::<u64>(), blocks in 1usize..30, chords in 0usize..6) {
        let edges = random_graph(seed, blocks, chords);
        let mut graph = Graph::try_from_edges(edges.iter().copied()).unwrap();

        let mut covered: Vec<_> = graph
            .decompose()
            .unwrap()
            .iter()
            .flat_map(Graph::id_edges)
            .collect();
        covered.sort_unstable();
        prop_assert_eq!(&covered, &edges);
    }

    #[test]
    fn decompose_is_repeatable(seed in any::<u64>(), blocks in 1usize..30, chords in 0usize..4) {
        let mut graph = Graph::try_from_edges(random_graph(seed, blocks, chords)).unwrap();

        let first = canonical(graph.decompose().unwrap());
        let second = canonical(graph.decompose().unwrap());
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(canonical(graph.components()), first);
    }
}
