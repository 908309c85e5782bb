//! Partition-level vertex storage used by the engine.
//!
//! A `Partition` owns the values and mailboxes of the vertices hashed to it.
//! Adjacency stays in the shared [`Graph`]; a partition only records each
//! vertex's slot there.

use std::collections::HashMap;

use crate::context::ComputeContext;
use crate::graph::Graph;
use crate::traits::{VertexId, VertexProgram};
use crate::utils::partition_of;

/// Values and mailboxes of one partition's vertices.
#[derive(Debug)]
pub struct Partition<V, M> {
    index: usize,
    ids: Vec<VertexId>,
    /// Slot of each local vertex in the shared graph.
    graph_slots: Vec<usize>,
    values: Vec<V>,
    /// inbox[i] = messages for local vertex i, consumed by its next turn.
    inbox: Vec<Vec<M>>,
    local: HashMap<VertexId, usize>,
}

/// What one partition produced during a superstep.
pub(crate) struct PartitionOutput<M, A> {
    /// outgoing[t] = `(target, message)` pairs for partition `t`.
    pub(crate) outgoing: Vec<Vec<(VertexId, M)>>,
    pub(crate) aggregates: A,
    pub(crate) sent: usize,
}

impl<V, M> Partition<V, M> {
    pub(crate) fn new(index: usize) -> Self {
        Self {
            index,
            ids: Vec::new(),
            graph_slots: Vec::new(),
            values: Vec::new(),
            inbox: Vec::new(),
            local: HashMap::new(),
        }
    }

    pub(crate) fn insert(&mut self, id: VertexId, graph_slot: usize, value: V) {
        self.local.insert(id, self.ids.len());
        self.ids.push(id);
        self.graph_slots.push(graph_slot);
        self.values.push(value);
        self.inbox.push(Vec::new());
    }

    pub(crate) fn value(&self, id: VertexId) -> Option<&V> {
        self.local.get(&id).map(|&i| &self.values[i])
    }

    /// `(id, value)` pairs in insertion order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (VertexId, &V)> + '_ {
        self.ids.iter().copied().zip(self.values.iter())
    }

    /// Run every local vertex's turn for `superstep`.
    ///
    /// Each vertex consumes its mailbox; everything it sends is bucketed by
    /// target partition and only becomes visible after [`Partition::deliver`].
    pub(crate) fn compute<P>(
        &mut self,
        program: &P,
        graph: &Graph,
        superstep: u64,
        partition_count: usize,
    ) -> PartitionOutput<M, P::Aggregates>
    where
        P: VertexProgram<Value = V, Message = M>,
    {
        let span = tracing::trace_span!(
            "partition_compute",
            partition = self.index,
            vertices = self.ids.len(),
            superstep
        );
        let _enter = span.enter();

        let mut outgoing: Vec<Vec<(VertexId, M)>> =
            (0..partition_count).map(|_| Vec::new()).collect();
        let mut aggregates = P::Aggregates::default();
        let mut outbox = Vec::new();
        let mut sent = 0usize;

        for local in 0..self.ids.len() {
            let messages = std::mem::take(&mut self.inbox[local]);
            let mut ctx = ComputeContext::<P>::new(
                superstep,
                self.ids[local],
                &mut self.values[local],
                graph.neighbors_at(self.graph_slots[local]),
                &messages,
                &mut outbox,
                &mut aggregates,
            );
            program.compute(&mut ctx);

            sent += outbox.len();
            for (target, message) in outbox.drain(..) {
                outgoing[partition_of(target, partition_count)].push((target, message));
            }
        }

        PartitionOutput {
            outgoing,
            aggregates,
            sent,
        }
    }

    /// Place routed messages into local mailboxes.
    ///
    /// Returns the number of messages addressed to ids this partition does not
    /// own; those are dropped.
    pub(crate) fn deliver(&mut self, batches: Vec<Vec<(VertexId, M)>>) -> usize {
        let mut dropped = 0usize;
        for batch in batches {
            for (target, message) in batch {
                match self.local.get(&target) {
                    Some(&i) => self.inbox[i].push(message),
                    None => dropped += 1,
                }
            }
        }
        dropped
    }
}
