//! Immutable weighted adjacency shared by all workers.
//!
//! Edges are directed records; an undirected edge is two reciprocal records.
//! Parallel edges are kept as-is.

use std::collections::{BTreeMap, HashMap};

use crate::traits::VertexId;

/// Vertex set plus out-adjacency, frozen after [`GraphBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// Vertex ids in ascending order; a vertex's position is its slot.
    ids: Vec<VertexId>,
    slots: HashMap<VertexId, usize>,
    /// adjacency[slot] = out-edges `(neighbor, weight)` in insertion order.
    adjacency: Vec<Vec<(VertexId, f64)>>,
    edge_count: usize,
}

impl Graph {
    /// Build a graph from directed `(src, dst, weight)` records.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (VertexId, VertexId, f64)>,
    {
        let mut builder = GraphBuilder::new();
        for (src, dst, weight) in edges {
            builder.add_edge(src, dst, weight);
        }
        builder.build()
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.ids.len()
    }

    /// Number of directed edge records.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    #[inline]
    pub fn contains(&self, id: VertexId) -> bool {
        self.slots.contains_key(&id)
    }

    /// Vertex ids in ascending order.
    #[inline]
    pub fn vertex_ids(&self) -> &[VertexId] {
        &self.ids
    }

    /// Out-edges of `id`; empty for unknown ids.
    pub fn neighbors(&self, id: VertexId) -> &[(VertexId, f64)] {
        match self.slots.get(&id) {
            Some(&slot) => self.adjacency[slot].as_slice(),
            None => &[],
        }
    }

    #[inline]
    pub(crate) fn neighbors_at(&self, slot: usize) -> &[(VertexId, f64)] {
        &self.adjacency[slot]
    }

    /// Iterate all directed records as `(src, dst, weight)`.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId, f64)> + '_ {
        self.ids
            .iter()
            .zip(&self.adjacency)
            .flat_map(|(&src, out)| out.iter().map(move |&(dst, w)| (src, dst, w)))
    }
}

/// Incremental constructor for [`Graph`].
#[derive(Debug, Default)]
pub struct GraphBuilder {
    adjacency: BTreeMap<VertexId, Vec<(VertexId, f64)>>,
    edge_count: usize,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a vertex without edges. No-op if it already exists.
    pub fn add_vertex(&mut self, id: VertexId) -> &mut Self {
        self.adjacency.entry(id).or_default();
        self
    }

    /// Add a directed record `src -> dst`. Both endpoints become vertices.
    pub fn add_edge(&mut self, src: VertexId, dst: VertexId, weight: f64) -> &mut Self {
        self.adjacency.entry(src).or_default().push((dst, weight));
        self.adjacency.entry(dst).or_default();
        self.edge_count += 1;
        self
    }

    /// Add both `a -> b` and `b -> a`.
    pub fn add_undirected_edge(&mut self, a: VertexId, b: VertexId, weight: f64) -> &mut Self {
        self.add_edge(a, b, weight);
        self.add_edge(b, a, weight);
        self
    }

    pub fn build(&mut self) -> Graph {
        let adjacency_map = std::mem::take(&mut self.adjacency);
        let edge_count = std::mem::take(&mut self.edge_count);
        let mut ids = Vec::with_capacity(adjacency_map.len());
        let mut adjacency = Vec::with_capacity(adjacency_map.len());
        for (id, out) in adjacency_map {
            ids.push(id);
            adjacency.push(out);
        }
        let slots = ids.iter().enumerate().map(|(slot, &id)| (id, slot)).collect();
        Graph {
            ids,
            slots,
            adjacency,
            edge_count,
        }
    }
}
