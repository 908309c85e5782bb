use crate::error::ConfigError;
use crate::graph::Graph;
use crate::traits::VertexProgram;
use crate::utils::{default_partition_count, default_workers};
use crate::BspEngine;

/// Execution parameters for [`BspEngine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Size of the worker pool.
    pub workers: usize,
    /// Number of vertex partitions; several may share one worker.
    pub partitions: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        let workers = default_workers();
        Self {
            workers,
            partitions: default_partition_count(workers),
        }
    }
}

impl EngineConfig {
    /// Set the worker count and re-derive the partition count from it.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self.partitions = default_partition_count(workers);
        self
    }

    pub fn with_partitions(mut self, partitions: usize) -> Self {
        self.partitions = partitions;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.workers == 0 {
            return Err(ConfigError::ZeroWorkers);
        }
        if self.partitions == 0 {
            return Err(ConfigError::ZeroPartitions);
        }
        Ok(())
    }
}

pub struct BspEngineBuilder<P: VertexProgram> {
    program: P,
    graph: Graph,
    workers: Option<usize>,
    partitions: Option<usize>,
}

impl<P: VertexProgram> BspEngineBuilder<P> {
    pub fn new(program: P, graph: Graph) -> Self {
        Self {
            program,
            graph,
            workers: None,
            partitions: None,
        }
    }
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }
    pub fn with_partitions(mut self, partitions: usize) -> Self {
        self.partitions = Some(partitions);
        self
    }
    pub fn build(self) -> Result<BspEngine<P>, ConfigError> {
        let workers = self.workers.unwrap_or_else(default_workers);
        let partitions = self
            .partitions
            .unwrap_or_else(|| default_partition_count(workers));
        BspEngine::with_config(
            self.program,
            self.graph,
            EngineConfig {
                workers,
                partitions,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::MIN_PARTITIONS;

    #[test]
    fn default_config_is_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.partitions >= MIN_PARTITIONS);
    }

    #[test]
    fn with_workers_rederives_partitions() {
        let config = EngineConfig::default().with_workers(8);
        assert_eq!(config.workers, 8);
        assert_eq!(config.partitions, 80);
        let config = config.with_partitions(3);
        assert_eq!(config.partitions, 3);
    }

    #[test]
    fn zero_values_are_rejected() {
        let config = EngineConfig {
            workers: 0,
            partitions: 4,
        };
        assert!(matches!(config.validate(), Err(ConfigError::ZeroWorkers)));
        let config = EngineConfig {
            workers: 2,
            partitions: 0,
        };
        assert!(matches!(config.validate(), Err(ConfigError::ZeroPartitions)));
    }
}
