//! Timing diagnostics and lifecycle observation for filter runs.
use crate::partition::RowRange;
use log::debug;
use serde::Serialize;

/// Wall-clock timing of a single worker and the band it processed.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerTiming {
    pub worker: usize,
    pub rows: RowRange,
    pub elapsed_ms: f64,
}

/// Aggregated timing trace for one filter run.
///
/// `total_ms` is the wall-clock span of the whole parallel phase (first
/// spawn to last join), not the sum of the per-worker durations.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterReport {
    pub width: usize,
    pub height: usize,
    pub workers: usize,
    pub total_ms: f64,
    pub worker_timings: Vec<WorkerTiming>,
}

/// Callbacks fired at well-defined lifecycle points of a filter run.
///
/// Workers invoke the start/finish hooks from their own threads, hence the
/// `Sync` bound. Implementations should be cheap; they run inside the
/// timed parallel phase.
pub trait FilterObserver: Sync {
    fn worker_started(&self, _worker: usize, _rows: RowRange) {}
    fn worker_finished(&self, _worker: usize, _rows: RowRange, _elapsed_ms: f64) {}
    fn run_finished(&self, _total_ms: f64) {}
}

/// Observer that ignores every event.
pub struct NullObserver;

impl FilterObserver for NullObserver {}

/// Observer forwarding lifecycle events to the `log` facade.
pub struct LogObserver;

impl FilterObserver for LogObserver {
    fn worker_started(&self, worker: usize, rows: RowRange) {
        debug!("worker {worker} started rows [{}, {})", rows.begin, rows.end);
    }

    fn worker_finished(&self, worker: usize, rows: RowRange, elapsed_ms: f64) {
        debug!(
            "worker {worker} finished rows [{}, {}) in {elapsed_ms:.3} ms",
            rows.begin, rows.end
        );
    }

    fn run_finished(&self, total_ms: f64) {
        debug!("parallel phase finished in {total_ms:.3} ms");
    }
}
