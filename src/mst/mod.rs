//! Boruvka minimum spanning forest as a vertex program.
//!
//! Each vertex's value is its component pointer. Superstep 0 points every
//! vertex at itself; afterwards a six-superstep cycle repeats:
//!
//! | phase            | vertex action                                                   |
//! |------------------|-----------------------------------------------------------------|
//! | `Announce`       | tell every neighbor `(id, pointer)`                             |
//! | `FindCandidate`  | pick the cheapest edge to a different root, send it to own root |
//! | `Hook`           | roots pick their cheapest candidate; a larger root re-points    |
//! |                  | onto the smaller target root and books the edge weight          |
//! | `QueryParent`    | ask the pointer for its pointer                                 |
//! | `ReplyParent`    | answer every query with own pointer                             |
//! | `Compress`       | adopt the grandparent, count roots                              |
//!
//! Only a root with the larger id ever re-points, so every pointer satisfies
//! `pointer <= id` with equality exactly for roots. Pointer chains are strictly
//! decreasing and can never close a cycle.
//!
//! The master stops the run at the end of a cycle once a single root is left
//! or no hook happened during the cycle.

mod aggregates;
mod candidate;
mod message;
mod phase;

pub use aggregates::MstAggregates;
pub use candidate::{select_min, CandidateEdge};
pub use message::MstMessage;
pub use phase::Phase;

use std::collections::HashMap;

use crate::builder::EngineConfig;
use crate::context::ComputeContext;
use crate::engine::{BspEngine, RunSummary};
use crate::error::ConfigError;
use crate::graph::Graph;
use crate::traits::{MasterDecision, VertexId, VertexProgram};

/// How far pointer jumping runs before the next `Announce`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompressionMode {
    /// One pointer jump per cycle; superstep `s` is always in phase
    /// `Phase::for_superstep(s)`.
    ///
    /// Known limitation: when hooking builds pointer chains deeper than one
    /// jump can flatten, members of a component announce different roots in
    /// the next cycle. Their candidates then reach non-root vertices and are
    /// dropped, so a root may book a heavier edge than its component's
    /// cheapest, or the run may stop on a hook-free cycle before every
    /// component is spanned.
    #[default]
    SingleJump,
    /// Repeat `QueryParent`/`ReplyParent`/`Compress` until no pointer moves,
    /// then announce. Every vertex points at its root when candidates are
    /// collected, and the result equals a sequential MST.
    UntilStable,
}

/// The Boruvka vertex program plus its master-owned phase.
#[derive(Debug, Clone)]
pub struct BoruvkaMst {
    compression: CompressionMode,
    phase: Phase,
    cycles: u64,
    compress_rounds: u64,
}

impl BoruvkaMst {
    pub fn new(compression: CompressionMode) -> Self {
        Self {
            compression,
            phase: Phase::Init,
            cycles: 0,
            compress_rounds: 0,
        }
    }

    /// Phase the next superstep runs in.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn compression(&self) -> CompressionMode {
        self.compression
    }

    /// Completed announce-to-compress cycles.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Executed `Compress` supersteps, repeats included.
    pub fn compress_rounds(&self) -> u64 {
        self.compress_rounds
    }
}

impl Default for BoruvkaMst {
    fn default() -> Self {
        Self::new(CompressionMode::default())
    }
}

impl VertexProgram for BoruvkaMst {
    type Value = VertexId;
    type Message = MstMessage;
    type Aggregates = MstAggregates;

    fn initial_value(&self, id: VertexId) -> VertexId {
        id
    }

    fn compute(&self, ctx: &mut ComputeContext<'_, Self>) {
        match self.phase {
            Phase::Init => {
                let id = ctx.id();
                ctx.set_value(id);
            }
            Phase::Announce => announce(ctx),
            Phase::FindCandidate => find_candidate(ctx),
            Phase::Hook => hook(ctx),
            Phase::QueryParent => query_parent(ctx),
            Phase::ReplyParent => reply_parent(ctx),
            Phase::Compress => compress(ctx),
        }
    }

    fn master_compute(&mut self, superstep: u64, aggregates: &mut MstAggregates) -> MasterDecision {
        let finished = self.phase;
        tracing::debug!(superstep, phase = finished.as_str(), "phase finished");
        if finished != Phase::Compress {
            self.phase = finished.next();
            return MasterDecision::Continue;
        }
        self.compress_rounds += 1;

        if self.compression == CompressionMode::UntilStable && aggregates.parent_changes > 0 {
            tracing::debug!(
                superstep,
                parent_changes = aggregates.parent_changes,
                "pointers still moving, repeating compression"
            );
            aggregates.root_count = 0;
            aggregates.parent_changes = 0;
            self.phase = Phase::QueryParent;
            return MasterDecision::Continue;
        }

        self.cycles += 1;
        let roots = aggregates.root_count;
        let hooks = aggregates.hook_count;
        tracing::debug!(
            superstep,
            cycle = self.cycles,
            roots,
            hooks,
            parent_changes = aggregates.parent_changes,
            mst_weight = aggregates.mst_weight,
            "cycle complete"
        );
        aggregates.reset_cycle();
        self.phase = Phase::Announce;

        if roots == 1 || hooks == 0 {
            tracing::info!(
                superstep,
                roots,
                mst_weight = aggregates.mst_weight,
                "converged"
            );
            MasterDecision::Halt
        } else {
            MasterDecision::Continue
        }
    }
}

fn announce(ctx: &mut ComputeContext<'_, BoruvkaMst>) {
    let message = MstMessage::Announce {
        src_id: ctx.id(),
        src_root: *ctx.value(),
    };
    ctx.send_to_all_edges(message);
}

fn find_candidate(ctx: &mut ComputeContext<'_, BoruvkaMst>) {
    let id = ctx.id();
    let my_root = *ctx.value();

    let neighbor_root: HashMap<VertexId, VertexId> = ctx
        .messages()
        .iter()
        .filter_map(|m| match *m {
            MstMessage::Announce { src_id, src_root } => Some((src_id, src_root)),
            _ => None,
        })
        .collect();

    let best = select_min(ctx.edges().iter().filter_map(|&(neighbor, weight)| {
        let root = *neighbor_root.get(&neighbor)?;
        (root != my_root).then(|| CandidateEdge::new(weight, id, neighbor, root))
    }));

    if let Some(best) = best {
        ctx.send(
            my_root,
            MstMessage::Candidate {
                src_root: my_root,
                target_root: best.target_root,
                weight: best.weight,
                tie_a: best.tie_a,
                tie_b: best.tie_b,
            },
        );
    }
}

fn hook(ctx: &mut ComputeContext<'_, BoruvkaMst>) {
    let id = ctx.id();
    if *ctx.value() != id {
        return;
    }

    let best = select_min(ctx.messages().iter().filter_map(|m| match *m {
        MstMessage::Candidate {
            src_root,
            target_root,
            weight,
            tie_a,
            tie_b,
        } if src_root == id => Some(CandidateEdge {
            weight,
            tie_a,
            tie_b,
            target_root,
        }),
        _ => None,
    }));

    let Some(best) = best else {
        return;
    };
    if id > best.target_root {
        ctx.set_value(best.target_root);
        let agg = ctx.aggregate();
        agg.mst_weight += best.weight;
        agg.hook_count += 1;
        ctx.send(
            best.target_root,
            MstMessage::Hook {
                higher_root: id,
                lower_root: best.target_root,
                weight: best.weight,
            },
        );
    }
}

fn query_parent(ctx: &mut ComputeContext<'_, BoruvkaMst>) {
    let id = ctx.id();
    for m in ctx.messages() {
        match *m {
            MstMessage::Hook {
                higher_root,
                lower_root,
                weight,
            } => tracing::trace!(vertex = id, higher_root, lower_root, weight, "hook received"),
            other => tracing::trace!(vertex = id, kind = other.kind(), "ignored message"),
        }
    }
    let parent = *ctx.value();
    ctx.send(parent, MstMessage::ParentQuery { child_id: id });
}

fn reply_parent(ctx: &mut ComputeContext<'_, BoruvkaMst>) {
    let parent = *ctx.value();
    for m in ctx.messages() {
        if let MstMessage::ParentQuery { child_id } = *m {
            ctx.send(
                child_id,
                MstMessage::ParentReply {
                    child_id,
                    grandparent: parent,
                },
            );
        }
    }
}

fn compress(ctx: &mut ComputeContext<'_, BoruvkaMst>) {
    let id = ctx.id();
    let old_parent = *ctx.value();
    let new_parent = ctx
        .messages()
        .iter()
        .filter_map(|m| match *m {
            MstMessage::ParentReply { grandparent, .. } => Some(grandparent),
            _ => None,
        })
        .last()
        .unwrap_or(old_parent);

    if new_parent != old_parent {
        ctx.set_value(new_parent);
        ctx.aggregate().parent_changes += 1;
    }
    if new_parent == id {
        ctx.aggregate().root_count += 1;
    }
}

/// Outcome of [`solve`].
#[derive(Debug, Clone)]
pub struct MstRun {
    /// Total weight of the accepted hook edges.
    pub weight: f64,
    /// Roots counted at the final compression.
    pub roots: u64,
    /// Supersteps executed, superstep 0 included.
    pub supersteps: u64,
    /// Completed cycles.
    pub cycles: u64,
    /// `(vertex, component pointer)` at halt, sorted by vertex id.
    pub components: Vec<(VertexId, VertexId)>,
}

impl MstRun {
    fn from_engine(engine: &BspEngine<BoruvkaMst>, summary: RunSummary<MstAggregates>) -> Self {
        Self {
            weight: summary.aggregates.mst_weight,
            roots: summary.last_merged.root_count,
            supersteps: summary.supersteps,
            cycles: engine.program().cycles(),
            components: engine.values(),
        }
    }
}

/// Run Boruvka on `graph` with the given engine configuration.
pub fn solve(
    graph: Graph,
    config: &EngineConfig,
    compression: CompressionMode,
) -> Result<MstRun, ConfigError> {
    let mut engine = BspEngine::with_config(BoruvkaMst::new(compression), graph, config.clone())?;
    let summary = engine.run();
    Ok(MstRun::from_engine(&engine, summary))
}
