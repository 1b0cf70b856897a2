//! Deterministic division of interior image rows into worker bands.
use serde::Serialize;

/// Half-open band of rows `[begin, end)` assigned to one worker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowRange {
    pub begin: usize,
    pub end: usize,
}

impl RowRange {
    pub fn len(&self) -> usize {
        self.end - self.begin
    }

    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }
}

/// Contiguous, gap-free assignment of the interior rows `[1, height-1)` to
/// a fixed number of workers.
///
/// Each band gets `floor((height-2)/workers)` rows; the last band absorbs
/// the remainder. Bands are emitted in ascending row order, so worker `i`
/// always receives the same rows for the same `(height, workers)` pair.
/// When the image has fewer interior rows than workers, some bands are
/// degenerate (`begin == end`) and assigned no work.
#[derive(Clone, Debug)]
pub struct Partition {
    ranges: Vec<RowRange>,
}

impl Partition {
    pub fn new(height: usize, workers: usize) -> Self {
        assert!(workers > 0, "worker count must be positive");

        let interior_end = height.saturating_sub(1);
        let interior_begin = 1.min(interior_end);
        let interior_rows = interior_end - interior_begin;
        let band = interior_rows / workers;

        let mut ranges = Vec::with_capacity(workers);
        let mut begin = interior_begin;
        for worker in 0..workers {
            let end = if worker + 1 == workers {
                interior_end
            } else {
                begin + band
            };
            ranges.push(RowRange { begin, end });
            begin = end;
        }

        debug_assert!(
            ranges.windows(2).all(|pair| pair[0].end == pair[1].begin),
            "bands must be contiguous"
        );
        debug_assert_eq!(
            ranges.iter().map(RowRange::len).sum::<usize>(),
            interior_rows,
            "bands must cover every interior row exactly once"
        );

        Self { ranges }
    }

    /// Bands in ascending row order, one per worker id `0..workers`.
    pub fn ranges(&self) -> &[RowRange] {
        &self.ranges
    }
}
