#![doc = include_str!("../README.md")]

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod filter;
pub mod image;
pub mod kernel;
pub mod partition;

// --- High-level re-exports -------------------------------------------------

// Main entry points: filter + results.
pub use crate::filter::{BorderFill, FilterOutput, FilterParams, SobelFilter};

// Run diagnostics and lifecycle observers.
pub use crate::diagnostics::{
    FilterObserver, FilterReport, LogObserver, NullObserver, WorkerTiming,
};

pub use crate::error::FilterError;
pub use crate::partition::{Partition, RowRange};

/// Small prelude for quick experiments.
///
/// ```no_run
/// use sobel_bands::prelude::*;
///
/// # fn main() {
/// let (w, h) = (640usize, 480usize);
/// let gray = vec![0u8; w * h];
/// let img = ImageU8 { w, h, stride: w, data: &gray };
///
/// let filter = SobelFilter::new(FilterParams::default());
/// let out = filter.run(&img).expect("filter run");
/// println!("workers={} total_ms={:.3}", out.report.workers, out.report.total_ms);
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{GrayBuffer, ImageU8};
    pub use crate::{BorderFill, FilterParams, FilterReport, SobelFilter};
}
