//! Generic bulk-synchronous parallel engine.
//!
//! Every superstep goes through the same four stages:
//! 1. Compute: each partition runs its vertices' turns, one task per
//!    partition on the worker pool, joined by a barrier.
//! 2. Route: outgoing messages are moved into the target partitions'
//!    mailboxes, where they wait for the next superstep.
//! 3. Reduce: partition aggregate partials are merged into the global
//!    aggregates.
//! 4. Master: [`VertexProgram::master_compute`] inspects the aggregates and
//!    either halts the run or lets the engine advance the superstep counter.
//!
//! The engine is completely generic over implementations of [`VertexProgram`].

use crate::builder::EngineConfig;
use crate::error::ConfigError;
use crate::graph::Graph;
use crate::partition::{Partition, PartitionOutput};
use crate::traits::{Aggregate, MasterDecision, VertexId, VertexProgram};
use crate::utils::partition_of;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

type RoutedBatches<M> = Vec<Vec<Vec<(VertexId, M)>>>;

/// BSP engine for a given vertex program `P`.
///
/// Typical usage:
/// ```
/// use bsp_mst::mst::{BoruvkaMst, CompressionMode};
/// use bsp_mst::{BspEngine, GraphBuilder};
///
/// let mut builder = GraphBuilder::new();
/// builder.add_undirected_edge(1, 2, 3.0);
/// let mut engine = BspEngine::new(BoruvkaMst::new(CompressionMode::SingleJump), builder.build())
///     .unwrap();
/// let summary = engine.run();
/// assert_eq!(summary.aggregates.mst_weight, 3.0);
/// assert_eq!(engine.value(2), Some(&1));
/// ```
pub struct BspEngine<P: VertexProgram> {
    program: P,
    graph: Graph,
    config: EngineConfig,
    partitions: Vec<Partition<P::Value, P::Message>>,
    aggregates: P::Aggregates,
    superstep: u64,
    halted: bool,
    #[cfg(feature = "parallel")]
    pool: rayon::ThreadPool,
}

/// Result of a completed run.
#[derive(Debug, Clone)]
pub struct RunSummary<A> {
    /// Number of supersteps executed, including superstep 0.
    pub supersteps: u64,
    /// Index of the superstep after which the master halted.
    pub halted_at: u64,
    /// Aggregates after the final master step (resets included).
    pub aggregates: A,
    /// Aggregates as merged at the halting superstep, before the master ran.
    pub last_merged: A,
}

/// What an observer sees after each superstep.
pub struct SuperstepReport<'a, P: VertexProgram> {
    pub superstep: u64,
    /// Aggregates as merged for this superstep, before the master step.
    pub merged: &'a P::Aggregates,
    /// Aggregates after the master step.
    pub aggregates: &'a P::Aggregates,
    /// Messages sent during this superstep.
    pub messages_sent: usize,
    pub decision: MasterDecision,
    partitions: &'a [Partition<P::Value, P::Message>],
}

impl<P: VertexProgram> SuperstepReport<'_, P> {
    /// Value of vertex `id` at the end of this superstep.
    pub fn value(&self, id: VertexId) -> Option<&P::Value> {
        self.partitions[partition_of(id, self.partitions.len())].value(id)
    }

    /// All `(id, value)` pairs, partition by partition.
    pub fn values(&self) -> impl Iterator<Item = (VertexId, &P::Value)> + '_ {
        self.partitions.iter().flat_map(|p| p.iter())
    }
}

impl<P: VertexProgram> BspEngine<P> {
    /// Create an engine with the default [`EngineConfig`].
    pub fn new(program: P, graph: Graph) -> Result<Self, ConfigError> {
        Self::with_config(program, graph, EngineConfig::default())
    }

    /// Create an engine with an explicit configuration.
    pub fn with_config(
        program: P,
        graph: Graph,
        config: EngineConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        #[cfg(feature = "parallel")]
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.workers)
            .thread_name(|i| format!("bsp-worker-{i}"))
            .build()
            .map_err(|e| ConfigError::ThreadPool(e.to_string()))?;

        let mut partitions: Vec<Partition<P::Value, P::Message>> =
            (0..config.partitions).map(Partition::new).collect();
        for (slot, &id) in graph.vertex_ids().iter().enumerate() {
            partitions[partition_of(id, config.partitions)].insert(
                id,
                slot,
                program.initial_value(id),
            );
        }

        Ok(Self {
            program,
            graph,
            config,
            partitions,
            aggregates: P::Aggregates::default(),
            superstep: 0,
            halted: false,
            #[cfg(feature = "parallel")]
            pool,
        })
    }

    /// Expose immutable reference to the underlying program.
    pub fn program(&self) -> &P {
        &self.program
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Current global aggregates.
    pub fn aggregates(&self) -> &P::Aggregates {
        &self.aggregates
    }

    /// Index of the next superstep to run, or of the halting one once halted.
    pub fn superstep(&self) -> u64 {
        self.superstep
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Value of vertex `id`.
    pub fn value(&self, id: VertexId) -> Option<&P::Value> {
        self.partitions[partition_of(id, self.partitions.len())].value(id)
    }

    /// All `(id, value)` pairs sorted by id.
    pub fn values(&self) -> Vec<(VertexId, P::Value)> {
        let mut all: Vec<_> = self
            .partitions
            .iter()
            .flat_map(|p| p.iter().map(|(id, v)| (id, v.clone())))
            .collect();
        all.sort_unstable_by_key(|(id, _)| *id);
        all
    }

    /// Drive supersteps until the master halts.
    pub fn run(&mut self) -> RunSummary<P::Aggregates> {
        self.run_with_observer(|_| {})
    }

    /// Drive supersteps until the master halts, calling `observer` after each.
    ///
    /// Calling this on an engine that already halted returns immediately.
    pub fn run_with_observer<F>(&mut self, mut observer: F) -> RunSummary<P::Aggregates>
    where
        F: FnMut(&SuperstepReport<'_, P>),
    {
        let span = tracing::info_span!(
            "bsp_run",
            vertices = self.graph.vertex_count(),
            edges = self.graph.edge_count(),
            partitions = self.config.partitions,
            workers = self.config.workers
        );
        let _enter = span.enter();

        let mut last_merged = self.aggregates.clone();
        while !self.halted {
            let superstep = self.superstep;
            let outputs = self.compute_superstep(superstep);

            let mut delta = P::Aggregates::default();
            let mut messages_sent = 0usize;
            let mut routed: RoutedBatches<P::Message> =
                (0..self.partitions.len()).map(|_| Vec::new()).collect();
            for output in outputs {
                delta.merge(&output.aggregates);
                messages_sent += output.sent;
                for (target, batch) in output.outgoing.into_iter().enumerate() {
                    if !batch.is_empty() {
                        routed[target].push(batch);
                    }
                }
            }

            let dropped = self.deliver(routed);
            if dropped > 0 {
                tracing::warn!(superstep, dropped, "messages addressed to unknown vertices");
            }

            self.aggregates.merge(&delta);
            let merged = self.aggregates.clone();
            let decision = self.program.master_compute(superstep, &mut self.aggregates);

            tracing::debug!(
                superstep,
                messages_sent,
                ?delta,
                aggregates = ?merged,
                ?decision,
                "superstep complete"
            );

            observer(&SuperstepReport {
                superstep,
                merged: &merged,
                aggregates: &self.aggregates,
                messages_sent,
                decision,
                partitions: &self.partitions,
            });

            last_merged = merged;
            match decision {
                MasterDecision::Halt => self.halted = true,
                MasterDecision::Continue => self.superstep += 1,
            }
        }

        tracing::info!(halted_at = self.superstep, "run halted");
        RunSummary {
            supersteps: self.superstep + 1,
            halted_at: self.superstep,
            aggregates: self.aggregates.clone(),
            last_merged,
        }
    }

    #[cfg(feature = "parallel")]
    fn compute_superstep(
        &mut self,
        superstep: u64,
    ) -> Vec<PartitionOutput<P::Message, P::Aggregates>> {
        let program = &self.program;
        let graph = &self.graph;
        let partition_count = self.partitions.len();
        let partitions = &mut self.partitions;
        self.pool.install(|| {
            partitions
                .par_iter_mut()
                .map(|p| p.compute(program, graph, superstep, partition_count))
                .collect()
        })
    }

    #[cfg(not(feature = "parallel"))]
    fn compute_superstep(
        &mut self,
        superstep: u64,
    ) -> Vec<PartitionOutput<P::Message, P::Aggregates>> {
        let program = &self.program;
        let graph = &self.graph;
        let partition_count = self.partitions.len();
        self.partitions
            .iter_mut()
            .map(|p| p.compute(program, graph, superstep, partition_count))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn deliver(&mut self, routed: RoutedBatches<P::Message>) -> usize {
        let partitions = &mut self.partitions;
        self.pool.install(|| {
            partitions
                .par_iter_mut()
                .zip(routed.into_par_iter())
                .map(|(p, batches)| p.deliver(batches))
                .sum()
        })
    }

    #[cfg(not(feature = "parallel"))]
    fn deliver(&mut self, routed: RoutedBatches<P::Message>) -> usize {
        self.partitions
            .iter_mut()
            .zip(routed)
            .map(|(p, batches)| p.deliver(batches))
            .sum()
    }
}
