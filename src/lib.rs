//! Vertex-centric Boruvka MST on a bulk-synchronous parallel (BSP) engine.
//!
//! This crate computes the weight of a minimum spanning tree (a minimum
//! spanning forest for disconnected input) by running a Boruvka variant as a
//! sequence of barrier-synchronised supersteps over a partitioned vertex set.
//! Vertices only talk to each other through messages, and a message sent in
//! superstep `S` is visible in superstep `S + 1` and never earlier.
//!
//! ## Core idea
//! 1. Model a vertex-centric computation by implementing [`VertexProgram`]:
//!    a per-vertex `compute` turn plus a `master_compute` step that inspects
//!    the merged global aggregates between supersteps.
//! 2. Hand the program and a [`Graph`] to [`BspEngine`], which partitions the
//!    vertices, runs each superstep on a fixed worker pool, routes messages and
//!    reduces aggregator contributions.
//! 3. [`mst::BoruvkaMst`] is the Boruvka program: components announce their
//!    roots, pick their cheapest outgoing edge, hook the larger root onto the
//!    smaller one and then shorten their pointer chains by pointer jumping.
//!
//! ## Quick start
//! ```
//! use bsp_mst::{mst, EngineConfig, GraphBuilder};
//!
//! let mut builder = GraphBuilder::new();
//! builder.add_undirected_edge(1, 2, 5.0);
//! builder.add_undirected_edge(2, 3, 1.0);
//! builder.add_undirected_edge(1, 3, 10.0);
//!
//! let config = EngineConfig::default().with_workers(2);
//! let run = mst::solve(builder.build(), &config, mst::CompressionMode::SingleJump).unwrap();
//! assert_eq!(bsp_mst::io::format_mst_weight(run.weight), "MST_WEIGHT=6.000000");
//! ```

pub mod builder;
pub mod context;
pub mod engine;
pub mod error;
pub mod graph;
pub mod io;
pub mod mst;
mod partition;
pub mod traits;
pub mod utils;

pub use crate::builder::{BspEngineBuilder, EngineConfig};
pub use crate::context::ComputeContext;
pub use crate::engine::{BspEngine, RunSummary, SuperstepReport};
pub use crate::error::{ConfigError, Error, LoadError, Result};
pub use crate::graph::{Graph, GraphBuilder};
pub use crate::traits::{Aggregate, MasterDecision, VertexId, VertexProgram};
