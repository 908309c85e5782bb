//! Assorted sizing and placement helpers.

use crate::traits::VertexId;

/// Minimum number of partitions the default heuristic produces.
pub const MIN_PARTITIONS: usize = 50;

/// Partitions created per worker by the default heuristic.
pub const PARTITIONS_PER_WORKER: usize = 10;

/// Number of workers to use when none is configured.
///
/// One per available hardware thread, never zero.
#[inline]
pub fn default_workers() -> usize {
    num_cpus::get().max(1)
}

/// Partition count for `workers` workers.
///
/// Several partitions per worker keep the pool busy when partitions are
/// unevenly loaded; the floor keeps small pools from degenerating into a
/// handful of huge partitions.
#[inline]
pub fn default_partition_count(workers: usize) -> usize {
    workers
        .saturating_mul(PARTITIONS_PER_WORKER)
        .max(MIN_PARTITIONS)
}

/// Partition owning vertex `id` (hash partitioning by id modulo count).
///
/// # Panics
/// Panics if `partitions == 0`.
#[inline]
pub fn partition_of(id: VertexId, partitions: usize) -> usize {
    assert!(partitions > 0, "partition count must be positive");
    (id % partitions as u64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partition_count_has_a_floor() {
        assert_eq!(default_partition_count(0), MIN_PARTITIONS);
        assert_eq!(default_partition_count(1), MIN_PARTITIONS);
        assert_eq!(default_partition_count(5), MIN_PARTITIONS);
        assert_eq!(default_partition_count(6), 60);
        assert_eq!(default_partition_count(32), 320);
    }

    #[test]
    fn partition_count_monotonic_non_decreasing() {
        let mut prev = 0;
        for workers in 0..200 {
            let p = default_partition_count(workers);
            assert!(p >= prev, "partition count decreased at workers={workers}: {p} < {prev}");
            prev = p;
        }
    }

    #[test]
    fn partition_of_stays_in_range() {
        for id in 0..1_000u64 {
            assert!(partition_of(id, 7) < 7);
        }
        assert_eq!(partition_of(u64::MAX, 1), 0);
        assert_eq!(partition_of(12, 5), 2);
    }

    #[test]
    #[should_panic]
    fn partition_of_panics_on_zero() {
        let _ = partition_of(3, 0);
    }

    #[test]
    fn default_workers_is_positive() {
        assert!(default_workers() >= 1);
    }
}
