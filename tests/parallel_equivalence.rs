#![cfg(feature = "parallel")]

use bsp_mst::{
    mst::{self, CompressionMode, MstRun},
    EngineConfig, GraphBuilder, VertexId,
};
use proptest::prelude::*;

type Edge = (VertexId, VertexId, f64);

fn solve(edges: &[Edge], workers: usize, partitions: usize, mode: CompressionMode) -> MstRun {
    let mut b = GraphBuilder::new();
    for &(u, v, w) in edges {
        b.add_undirected_edge(u, v, w);
    }
    let config = EngineConfig { workers, partitions };
    mst::solve(b.build(), &config, mode).unwrap()
}

fn arb_edges() -> impl Strategy<Value = Vec<Edge>> {
    (1u64..40)
        .prop_flat_map(|n| prop::collection::vec((0..n, 0..n, 0.5f64..50.0), 0..80))
}

proptest! {
    #[test]
    fn worker_count_does_not_change_the_result(
        edges in arb_edges(),
        workers in 2usize..8,
        partitions in 1usize..16,
    ) {
        for mode in [CompressionMode::SingleJump, CompressionMode::UntilStable] {
            let serial = solve(&edges, 1, partitions, mode);
            let parallel = solve(&edges, workers, partitions, mode);
            // Same partitions means the same merge order, so even the float
            // sum matches bit for bit.
            prop_assert_eq!(serial.weight.to_bits(), parallel.weight.to_bits());
            prop_assert_eq!(&serial.components, &parallel.components);
            prop_assert_eq!(serial.supersteps, parallel.supersteps);
            prop_assert_eq!(serial.roots, parallel.roots);
        }
    }

    #[test]
    fn partitioning_does_not_change_the_forest(
        edges in arb_edges(),
        a in 1usize..16,
        b in 1usize..64,
    ) {
        let left = solve(&edges, 3, a, CompressionMode::SingleJump);
        let right = solve(&edges, 3, b, CompressionMode::SingleJump);
        prop_assert!((left.weight - right.weight).abs() < 1e-6);
        prop_assert_eq!(left.components, right.components);
        prop_assert_eq!(left.supersteps, right.supersteps);
        prop_assert_eq!(left.cycles, right.cycles);
    }
}
