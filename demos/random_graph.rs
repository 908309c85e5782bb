//! Example: MST of a random connected graph, checked against both
//! compression modes.
//!
//! Run with:
//! `cargo run --release --example random_graph -- 100000`

use std::env;
use std::time::Instant;

use bsp_mst::{
    io::format_mst_weight,
    mst::{self, CompressionMode},
    EngineConfig, GraphBuilder,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn main() {
    let vertices: u64 = env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(10_000);

    let mut rng = StdRng::seed_from_u64(2024);
    let mut builder = GraphBuilder::new();
    for v in 1..vertices {
        let u = rng.gen_range(0..v);
        builder.add_undirected_edge(u, v, rng.gen_range(1.0..100.0));
    }
    for _ in 0..vertices * 2 {
        let u = rng.gen_range(0..vertices);
        let v = rng.gen_range(0..vertices);
        builder.add_undirected_edge(u, v, rng.gen_range(1.0..100.0));
    }
    let graph = builder.build();
    println!(
        "graph: {} vertices, {} directed edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    let config = EngineConfig::default();
    for mode in [CompressionMode::SingleJump, CompressionMode::UntilStable] {
        let started = Instant::now();
        let run = mst::solve(graph.clone(), &config, mode).expect("valid config");
        println!(
            "{mode:?}: {} roots={} cycles={} supersteps={} in {:.3}s",
            format_mst_weight(run.weight),
            run.roots,
            run.cycles,
            run.supersteps,
            started.elapsed().as_secs_f64()
        );
    }
}
