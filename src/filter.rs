//! Banded multi-threaded Sobel filter.
//!
//! The [`SobelFilter`] owns the run lifecycle: allocate the output buffer,
//! apply the border policy, partition the interior rows, carve the output
//! into disjoint row bands, spawn one worker thread per non-degenerate band,
//! join them all and aggregate timings. Workers share the input read-only
//! and each writes only its own band, so the parallel phase needs no locks;
//! disjointness is enforced by `split_at_mut`, not by convention.
use crate::diagnostics::{FilterObserver, FilterReport, LogObserver, WorkerTiming};
use crate::error::FilterError;
use crate::image::{GrayBuffer, ImageU8};
use crate::kernel::sobel_magnitude;
use crate::partition::{Partition, RowRange};
use log::debug;
use serde::{Deserialize, Serialize};
use std::mem;
use std::thread;
use std::time::Instant;

/// Default number of worker threads.
pub const DEFAULT_WORKERS: usize = 32;

/// What to write into the one-pixel output border the kernel never touches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderFill {
    /// Leave the border at zero (black frame).
    #[default]
    Zero,
    /// Copy the source image's border pixels.
    Source,
}

/// Runtime configuration of a filter run.
#[derive(Clone, Copy, Debug)]
pub struct FilterParams {
    pub workers: usize,
    pub border: BorderFill,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            border: BorderFill::default(),
        }
    }
}

/// Completed edge map plus the timing report for the run.
#[derive(Clone, Debug)]
pub struct FilterOutput {
    pub image: GrayBuffer,
    pub report: FilterReport,
}

/// Parallel Sobel edge mapper over a fixed pool of row-band workers.
pub struct SobelFilter {
    params: FilterParams,
}

impl SobelFilter {
    /// Create a filter with the supplied parameters.
    pub fn new(params: FilterParams) -> Self {
        assert!(params.workers > 0, "worker count must be positive");
        Self { params }
    }

    /// Run the filter, logging lifecycle events via the `log` facade.
    pub fn run(&self, input: &ImageU8<'_>) -> Result<FilterOutput, FilterError> {
        self.run_observed(input, &LogObserver)
    }

    /// Run the filter, reporting lifecycle events to `observer`.
    ///
    /// Either every worker completes and a full output buffer is returned,
    /// or the first fatal error is surfaced with no partial output. A spawn
    /// failure still joins the workers spawned before it.
    pub fn run_observed(
        &self,
        input: &ImageU8<'_>,
        observer: &dyn FilterObserver,
    ) -> Result<FilterOutput, FilterError> {
        let (width, height) = (input.w, input.h);
        debug!(
            "SobelFilter::run start w={width} h={height} workers={}",
            self.params.workers
        );

        let mut output = GrayBuffer::try_filled(width, height, 0)?;
        if self.params.border == BorderFill::Source {
            copy_border(input, output.data_mut());
        }

        // No interior pixels: only the border policy applies.
        if width < 3 || height < 3 {
            observer.run_finished(0.0);
            return Ok(FilterOutput {
                image: output,
                report: FilterReport {
                    width,
                    height,
                    workers: self.params.workers,
                    total_ms: 0.0,
                    worker_timings: Vec::new(),
                },
            });
        }

        let partition = Partition::new(height, self.params.workers);
        let bands = carve_bands(&partition, output.data_mut(), width);

        let total_start = Instant::now();
        let worker_timings = thread::scope(|scope| {
            let mut handles = Vec::with_capacity(bands.len());
            for (worker, rows, band) in bands {
                let builder = thread::Builder::new().name(format!("sobel-worker-{worker}"));
                let handle = builder
                    .spawn_scoped(scope, move || {
                        process_band(worker, rows, input, band, observer)
                    })
                    .map_err(|source| FilterError::ThreadSpawn { worker, source })?;
                handles.push(handle);
            }

            let mut timings = Vec::with_capacity(handles.len());
            for handle in handles {
                match handle.join() {
                    Ok(timing) => timings.push(timing),
                    // A worker fault is a programming error, not a
                    // recoverable condition.
                    Err(panic) => std::panic::resume_unwind(panic),
                }
            }
            Ok(timings)
        })?;
        let total_ms = total_start.elapsed().as_secs_f64() * 1000.0;

        observer.run_finished(total_ms);
        debug!("SobelFilter::run done total_ms={total_ms:.3}");

        Ok(FilterOutput {
            image: output,
            report: FilterReport {
                width,
                height,
                workers: self.params.workers,
                total_ms,
                worker_timings,
            },
        })
    }
}

/// Split the output into per-worker row bands. Bands of empty ranges are
/// skipped; the returned slices are mutually disjoint by construction.
fn carve_bands<'b>(
    partition: &Partition,
    data: &'b mut [u8],
    width: usize,
) -> Vec<(usize, RowRange, &'b mut [u8])> {
    let ranges = partition.ranges();
    let first_row = ranges.first().map_or(0, |r| r.begin);

    let (_, mut rest) = data.split_at_mut(first_row * width);
    let mut bands = Vec::with_capacity(ranges.len());
    for (worker, &rows) in ranges.iter().enumerate() {
        let (band, tail) = mem::take(&mut rest).split_at_mut(rows.len() * width);
        rest = tail;
        if rows.is_empty() {
            continue;
        }
        bands.push((worker, rows, band));
    }
    bands
}

/// Worker body: apply the kernel over every interior column of every row in
/// the band, timing the whole sweep.
fn process_band(
    worker: usize,
    rows: RowRange,
    input: &ImageU8<'_>,
    band: &mut [u8],
    observer: &dyn FilterObserver,
) -> WorkerTiming {
    let start = Instant::now();
    observer.worker_started(worker, rows);

    let width = input.w;
    for (band_row, y) in (rows.begin..rows.end).enumerate() {
        let out_row = &mut band[band_row * width..(band_row + 1) * width];
        for x in 1..width - 1 {
            out_row[x] = sobel_magnitude(input, x, y);
        }
    }

    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    observer.worker_finished(worker, rows, elapsed_ms);
    WorkerTiming {
        worker,
        rows,
        elapsed_ms,
    }
}

fn copy_border(input: &ImageU8<'_>, out: &mut [u8]) {
    let (w, h) = (input.w, input.h);
    if w == 0 || h == 0 {
        return;
    }
    out[..w].copy_from_slice(input.row(0));
    out[(h - 1) * w..h * w].copy_from_slice(input.row(h - 1));
    for y in 0..h {
        out[y * w] = input.get(0, y);
        out[y * w + w - 1] = input.get(w - 1, y);
    }
}
