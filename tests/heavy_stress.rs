#![cfg(feature = "heavy")]
use std::collections::HashMap;

use bsp_mst::{
    mst::{self, CompressionMode},
    EngineConfig, GraphBuilder, VertexId,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

type Edge = (VertexId, VertexId, f64);

fn random_edges(rng: &mut StdRng, vertices: u64, extra: usize) -> Vec<Edge> {
    // A random spanning path keeps the graph connected; extra edges add cycles.
    let mut edges: Vec<Edge> = (1..vertices)
        .map(|v| (rng.gen_range(0..v), v, f64::from(rng.gen_range(1u32..1_000))))
        .collect();
    for _ in 0..extra {
        let u = rng.gen_range(0..vertices);
        let v = rng.gen_range(0..vertices);
        edges.push((u, v, f64::from(rng.gen_range(1u32..1_000))));
    }
    edges
}

fn kruskal(edges: &[Edge]) -> f64 {
    fn find(parent: &mut HashMap<VertexId, VertexId>, x: VertexId) -> VertexId {
        let mut root = x;
        while let Some(&p) = parent.get(&root) {
            if p == root {
                break;
            }
            root = p;
        }
        let mut cur = x;
        while cur != root {
            let next = parent.get(&cur).copied().unwrap_or(root);
            parent.insert(cur, root);
            cur = next;
        }
        root
    }

    let mut sorted = edges.to_vec();
    sorted.sort_by(|a, b| a.2.total_cmp(&b.2));
    let mut parent: HashMap<VertexId, VertexId> = HashMap::new();
    let mut weight = 0.0;
    for &(u, v, w) in &sorted {
        let ru = find(&mut parent, u);
        let rv = find(&mut parent, v);
        if ru != rv {
            parent.insert(ru.max(rv), ru.min(rv));
            weight += w;
        }
    }
    weight
}

#[test]
fn heavy_stress_random_connected_graph() {
    let mut rng = StdRng::seed_from_u64(123);
    let edges = random_edges(&mut rng, 50_000, 150_000);
    let mut b = GraphBuilder::new();
    for &(u, v, w) in &edges {
        b.add_undirected_edge(u, v, w);
    }
    let config = EngineConfig::default();
    let run = mst::solve(b.build(), &config, CompressionMode::UntilStable).unwrap();
    assert_eq!(run.weight, kruskal(&edges));
    assert_eq!(run.roots, 1);
    assert!(run.components.iter().all(|&(_, root)| root == 0));
}

#[test]
fn heavy_stress_single_jump_terminates() {
    let mut rng = StdRng::seed_from_u64(7);
    let edges = random_edges(&mut rng, 50_000, 100_000);
    let mut b = GraphBuilder::new();
    for &(u, v, w) in &edges {
        b.add_undirected_edge(u, v, w);
    }
    let vertices = 50_000u64;
    let run = mst::solve(b.build(), &EngineConfig::default(), CompressionMode::SingleJump).unwrap();
    assert!(run.cycles <= vertices + 1);
    assert!(run.weight > 0.0);
    assert!(run.components.iter().all(|&(id, root)| root <= id));
}
