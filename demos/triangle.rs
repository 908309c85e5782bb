//! Example: Boruvka on a weighted triangle, printing pointers per cycle.
//!
//! Run with:
//! `cargo run --example triangle`

use bsp_mst::{
    io::format_mst_weight,
    mst::{BoruvkaMst, CompressionMode},
    BspEngineBuilder, GraphBuilder,
};

fn main() {
    let mut builder = GraphBuilder::new();
    builder
        .add_undirected_edge(1, 2, 5.0)
        .add_undirected_edge(2, 3, 1.0)
        .add_undirected_edge(1, 3, 10.0);

    let program = BoruvkaMst::new(CompressionMode::SingleJump);
    let mut engine = BspEngineBuilder::new(program, builder.build())
        .with_workers(2)
        .with_partitions(2)
        .build()
        .expect("positive workers and partitions");

    // Print the pointer of every vertex after each cycle.
    let summary = engine.run_with_observer(|report| {
        if report.superstep > 0 && report.superstep % 6 == 0 {
            let mut pointers: Vec<_> = report.values().map(|(id, p)| (id, *p)).collect();
            pointers.sort_unstable();
            println!(
                "superstep {:>2}: roots={} hooks={} pointers={pointers:?}",
                report.superstep, report.merged.root_count, report.merged.hook_count
            );
        }
    });

    println!("{}", format_mst_weight(summary.aggregates.mst_weight));
    println!("supersteps: {}", summary.supersteps);
}
