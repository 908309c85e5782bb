use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use bsp_mst::io::{self, ConversionStats};
use bsp_mst::mst::{self, CompressionMode};
use bsp_mst::utils::{default_partition_count, default_workers};
use bsp_mst::{EngineConfig, Error, LoadError};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bsp_mst", version, about = "Boruvka MST on a bulk-synchronous parallel engine")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute the MST weight of an edge list and print `MST_WEIGHT=<w>`.
    Run {
        /// Edge list with `src dst weight` lines (both directions per edge).
        #[arg(long)]
        input: PathBuf,
        /// Directory to write the per-vertex component assignment into.
        #[arg(long)]
        output: Option<PathBuf>,
        /// Worker threads (default: available parallelism).
        #[arg(long)]
        threads: Option<usize>,
        /// Vertex partitions (default: max(threads * 10, 50)).
        #[arg(long)]
        partitions: Option<usize>,
        /// Repeat pointer jumping until every vertex points at its root.
        #[arg(long)]
        compress_until_stable: bool,
    },
    /// Convert a `gr` graph into a symmetric Matrix Market file.
    GrToMtx {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        output: PathBuf,
    },
    /// Convert a Matrix Market coordinate file into an edge list.
    MtxToEdgeList {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        output: PathBuf,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Run {
            input,
            output,
            threads,
            partitions,
            compress_until_stable,
        } => run(&input, output.as_deref(), threads, partitions, compress_until_stable),
        Command::GrToMtx { input, output } => {
            convert(&input, &output, io::gr_to_mtx).map(|stats| {
                tracing::info!(
                    input = %input.display(),
                    output = %output.display(),
                    vertices = stats.max_vertex_id,
                    unique_edges = stats.edges,
                    "converted"
                );
            })
        }
        Command::MtxToEdgeList { input, output } => {
            convert(&input, &output, io::mtx_to_edge_list).map(|stats| {
                tracing::info!(
                    input = %input.display(),
                    output = %output.display(),
                    records = stats.edges,
                    "converted"
                );
            })
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("bsp_mst: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(
    input: &Path,
    output: Option<&Path>,
    threads: Option<usize>,
    partitions: Option<usize>,
    compress_until_stable: bool,
) -> Result<(), Error> {
    let workers = threads.unwrap_or_else(default_workers);
    let config = EngineConfig {
        workers,
        partitions: partitions.unwrap_or_else(|| default_partition_count(workers)),
    };
    let compression = if compress_until_stable {
        CompressionMode::UntilStable
    } else {
        CompressionMode::SingleJump
    };

    let graph = io::load_edge_list(input)?;
    if graph.is_empty() {
        tracing::warn!(input = %input.display(), "edge list has no vertices");
    }
    tracing::info!(
        workers = config.workers,
        partitions = config.partitions,
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        ?compression,
        "starting run"
    );

    let started = Instant::now();
    let run = mst::solve(graph, &config, compression)?;
    tracing::info!(
        wall_s = started.elapsed().as_secs_f64(),
        supersteps = run.supersteps,
        cycles = run.cycles,
        roots = run.roots,
        "run finished"
    );

    println!("{}", io::format_mst_weight(run.weight));

    if let Some(dir) = output {
        let path = io::write_components_file(dir, &run.components)?;
        tracing::info!(path = %path.display(), "wrote components");
    }
    Ok(())
}

fn convert<F>(input: &Path, output: &Path, f: F) -> Result<ConversionStats, Error>
where
    F: FnOnce(BufReader<File>, BufWriter<File>) -> Result<ConversionStats, Error>,
{
    let reader = File::open(input).map_err(|source| LoadError::Io {
        path: input.to_path_buf(),
        source,
    })?;
    let writer = File::create(output).map_err(|source| Error::Write {
        path: output.to_path_buf(),
        source,
    })?;
    f(BufReader::new(reader), BufWriter::new(writer)).map_err(|err| match err {
        Error::Load(load) => Error::Load(load.with_path(input)),
        Error::Io(source) => Error::Write {
            path: output.to_path_buf(),
            source,
        },
        other => other,
    })
}
