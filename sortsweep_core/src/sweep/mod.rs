//! The benchmark sweep driver.
//!
//! A sweep runs a chosen [`Sorter`] on progressively larger prefixes of a
//! fixed dataset and records the wall-clock time of each run. The result is a
//! [`TimingSeries`], one millisecond value per prefix length, which the
//! [`chart`](crate::chart) module renders.
//!
//! # Example
//!
//! ```
//! use sortsweep_core::sorters::MergeSorter;
//! use sortsweep_core::sweep::run_sweep_points;
//!
//! let dataset = vec![1, 2, 3, 4, 5];
//! let series = run_sweep_points(&dataset, &MergeSorter, 5).unwrap();
//! assert_eq!(series.len(), 5);
//! ```

use std::error::Error as StdError;
use std::fmt;
use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};

use crate::sorters::{SortError, Sorter};

/// How much the prefix grows between consecutive sweep points.
pub const SWEEP_INCREMENT: usize = 1;

/// Number of prefix lengths a full sweep measures.
pub const TOTAL_SWEEP_POINTS: usize = 100;

/// Number of integers a dataset file must hold.
pub const DATASET_LEN: usize = 10_000;

/// Milliseconds taken per sweep point, index `i` holding the time to sort a
/// prefix of length `(i + 1) * SWEEP_INCREMENT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimingSeries(Vec<u64>);

impl TimingSeries {
    /// The recorded millisecond values, in sweep order.
    pub fn values(&self) -> &[u64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Largest recorded value, `0` for an empty series.
    pub fn max(&self) -> u64 {
        self.0.iter().copied().max().unwrap_or(0)
    }
}

/// Reasons a sweep can abort. No partial series is ever produced; either all
/// points are measured or the caller gets one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepError {
    /// A sorter signalled its designated failure.
    Sort(SortError),

    /// The dataset holds fewer values than the sweep needs.
    DatasetTooSmall { needed: usize, have: usize },
}

impl fmt::Display for SweepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweepError::Sort(e) => write!(f, "sort failed: {e}"),
            SweepError::DatasetTooSmall { needed, have } => {
                write!(f, "dataset too small for sweep: need {needed} values, have {have}")
            }
        }
    }
}

impl StdError for SweepError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            SweepError::Sort(e) => Some(e),
            SweepError::DatasetTooSmall { .. } => None,
        }
    }
}

impl From<SortError> for SweepError {
    fn from(e: SortError) -> Self {
        SweepError::Sort(e)
    }
}

/// Runs the full sweep of [`TOTAL_SWEEP_POINTS`] points over `dataset`.
pub fn run_sweep(dataset: &[i32], sorter: &dyn Sorter) -> Result<TimingSeries, SweepError> {
    run_sweep_points(dataset, sorter, TOTAL_SWEEP_POINTS)
}

/// Runs a sweep of `points` points over `dataset` with `sorter`.
///
/// Point `i` (1-based) deep-copies the first `i * SWEEP_INCREMENT` values of
/// the dataset and times a single synchronous sort of that copy. Copying
/// matters: the sorters mutate their input, and later points must see the
/// dataset exactly as loaded. A sort failure aborts the sweep at once.
pub fn run_sweep_points(
    dataset: &[i32],
    sorter: &dyn Sorter,
    points: usize,
) -> Result<TimingSeries, SweepError> {
    let needed = points * SWEEP_INCREMENT;
    if dataset.len() < needed {
        return Err(SweepError::DatasetTooSmall {
            needed,
            have: dataset.len(),
        });
    }

    let pb = ProgressBar::new(points as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "Sweep -> {spinner:.green} [{elapsed_precise}] [{bar:50.cyan/blue}] ({pos}/{len}, ETA: {eta})",
        )
        .unwrap(),
    );

    let mut timings = Vec::with_capacity(points);
    for i in 1..=points {
        let prefix = dataset[..i * SWEEP_INCREMENT].to_vec();

        // The timestamps bracket nothing but the sort itself; the progress
        // bar ticks outside the measured window.
        let start = Instant::now();
        let sorted = sorter.sort(prefix)?;
        let elapsed = start.elapsed().as_millis() as u64;

        debug_assert_eq!(sorted.len(), i * SWEEP_INCREMENT);
        timings.push(elapsed);
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(TimingSeries(timings))
}
