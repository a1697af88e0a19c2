//! Size-driven chunk planning.

use core::ops::Range;

/// Largest payload processed by a single worker.
pub const SINGLE_WORKER_MAX: usize = 100;
/// Largest payload split across two workers.
pub const TWO_WORKERS_MAX: usize = 1_000;
/// Largest payload split across three workers.
pub const THREE_WORKERS_MAX: usize = 10_000;
/// Fan-out ceiling.
pub const MAX_WORKERS: usize = 4;

/// Number of parallel chunks used for a payload of `len` records.
pub fn fan_out(len: usize) -> usize {
    if len <= SINGLE_WORKER_MAX {
        1
    } else if len <= TWO_WORKERS_MAX {
        2
    } else if len <= THREE_WORKERS_MAX {
        3
    } else {
        MAX_WORKERS
    }
}

/// Contiguous, ordered, non-overlapping partition of `0..len`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkPlan {
    len: usize,
    ranges: Vec<Range<usize>>,
}

impl ChunkPlan {
    /// Every chunk but the last holds `len / delta` records; the last one
    /// takes the remainder.
    pub fn for_len(len: usize) -> Self {
        let delta = fan_out(len);
        let base = len / delta;

        let ranges = (0..delta)
            .map(|i| {
                let start = i * base;
                let end = if i + 1 == delta { len } else { start + base };
                start..end
            })
            .collect();

        Self { len, ranges }
    }

    /// Fan-out degree.
    pub fn delta(&self) -> usize {
        self.ranges.len()
    }

    /// Number of records covered by the plan.
    pub fn records(&self) -> usize {
        self.len
    }

    pub fn ranges(&self) -> &[Range<usize>] {
        &self.ranges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fan_out_buckets_use_inclusive_bounds() {
        let cases = [
            (0, 1),
            (1, 1),
            (100, 1),
            (101, 2),
            (1_000, 2),
            (1_001, 3),
            (10_000, 3),
            (10_001, 4),
            (1_000_000, 4),
        ];
        for (len, delta) in cases {
            assert_eq!(fan_out(len), delta, "len = {len}");
        }
    }

    #[test]
    fn empty_payload_gets_one_empty_range() {
        let plan = ChunkPlan::for_len(0);
        assert_eq!(plan.delta(), 1);
        assert_eq!(plan.ranges(), &[0..0]);
        assert_eq!(plan.records(), 0);
    }

    #[test]
    fn last_chunk_absorbs_remainder() {
        let plan = ChunkPlan::for_len(1_001);
        assert_eq!(plan.ranges(), &[0..333, 333..666, 666..1_001]);

        let plan = ChunkPlan::for_len(10_003);
        assert_eq!(
            plan.ranges(),
            &[0..2_500, 2_500..5_000, 5_000..7_500, 7_500..10_003]
        );
    }

    #[test]
    fn even_split() {
        let plan = ChunkPlan::for_len(1_000);
        assert_eq!(plan.ranges(), &[0..500, 500..1_000]);
        assert_eq!(plan.records(), 1_000);
    }
}
