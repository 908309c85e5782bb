//! Core trait definitions for vertex-centric BSP programs.
//!
//! To run a computation on [`BspEngine`](crate::engine::BspEngine), implement
//! [`VertexProgram`] for a struct that carries the program's configuration and
//! any master-owned global state.
//!
//! The trait encodes the classic Pregel contract:
//! - Vertex turns: `compute` sees one vertex, its value, its out-edges and the
//!   messages sent to it during the previous superstep.
//! - Messages: addressed by vertex id, delivered after the superstep barrier.
//! - Aggregates: per-vertex contributions folded with an associative and
//!   commutative [`Aggregate::merge`].
//! - Master step: `master_compute` runs once between supersteps, reads the
//!   merged aggregates, may reset them and decides whether the run halts.

use std::fmt::Debug;

use crate::context::ComputeContext;

/// Externally assigned, stable vertex identifier.
pub type VertexId = u64;

/// Global value reduced from per-vertex contributions once per superstep.
///
/// `merge` must be associative and commutative. Results then do not depend
/// on how vertices are spread over partitions.
pub trait Aggregate: Clone + Default + Debug + Send + Sync {
    /// Fold `other` into `self`.
    fn merge(&mut self, other: &Self);
}

/// Outcome of a master step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MasterDecision {
    /// Advance to the next superstep.
    Continue,
    /// Stop the run after the current superstep.
    Halt,
}

/// A vertex-centric program driven by the BSP engine.
///
/// `compute` takes `&self` because vertex turns of one superstep run in
/// parallel; anything the vertices must agree on for a superstep (such as the
/// current phase of a multi-phase algorithm) lives in the program and is only
/// changed by `master_compute`, which takes `&mut self` and runs while no
/// vertex turn is in flight.
pub trait VertexProgram: Sync {
    /// Per-vertex mutable state.
    type Value: Clone + Send + Sync;

    /// Payload exchanged between vertices.
    type Message: Send + Sync;

    /// Global aggregates contributed to by vertices and read by the master.
    type Aggregates: Aggregate;

    /// Value a vertex holds before its superstep-0 turn.
    fn initial_value(&self, id: VertexId) -> Self::Value;

    /// One vertex turn.
    ///
    /// Requirements:
    /// - Must only write the value of the vertex the context belongs to.
    /// - Must not depend on the order in which vertices of the same superstep
    ///   are visited.
    fn compute(&self, ctx: &mut ComputeContext<'_, Self>);

    /// Master step, run after every superstep once all contributions are merged.
    fn master_compute(&mut self, superstep: u64, aggregates: &mut Self::Aggregates)
        -> MasterDecision;
}
