//! Batch sampling over a folder of videos.
//!
//! [`sample_folder`] runs the frame sampler once per direct entry of a
//! folder, isolating per-file failures so one bad video never aborts the
//! batch. Per-item outcomes are collected into a [`BatchReport`] instead of
//! letting any error cross the batch boundary.

use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use crate::{
    error::FramegrabError,
    sampler::{self, SampleSummary},
};

/// The outcome of sampling one entry of the input folder.
#[derive(Debug)]
pub struct BatchItem {
    /// Path of the entry that was processed.
    pub path: PathBuf,
    /// The sampler's result for this entry.
    pub outcome: Result<SampleSummary, FramegrabError>,
}

/// Per-item outcomes of one batch run.
///
/// # Example
///
/// ```no_run
/// let report = framegrab::sample_folder("videos", "frames", 10.0)?;
/// println!("{report}");
/// for item in &report.items {
///     if let Err(error) = &item.outcome {
///         eprintln!("{}: {error}", item.path.display());
///     }
/// }
/// # Ok::<(), framegrab::FramegrabError>(())
/// ```
#[derive(Debug, Default)]
pub struct BatchReport {
    /// One entry per processed path, in enumeration order.
    pub items: Vec<BatchItem>,
}

impl BatchReport {
    /// Number of entries that sampled successfully.
    pub fn succeeded(&self) -> usize {
        self.items
            .iter()
            .filter(|item| item.outcome.is_ok())
            .count()
    }

    /// Number of entries that failed.
    pub fn failed(&self) -> usize {
        self.items.len() - self.succeeded()
    }

    /// Total number of frames written across all successful entries.
    pub fn frames_saved(&self) -> u64 {
        self.items
            .iter()
            .filter_map(|item| item.outcome.as_ref().ok())
            .map(|summary| summary.saved)
            .sum()
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} video(s) processed, {} failed, {} frame(s) saved",
            self.succeeded(),
            self.failed(),
            self.frames_saved(),
        )
    }
}

/// Extract frames from every video in a folder at a fixed time interval.
///
/// Enumerates the direct entries of `input_folder` (non-recursive, OS order)
/// and invokes [`sampler::sample`] for each with the shared `output_folder`
/// and interval. A failure on one entry is logged at error level, recorded
/// in the report, and processing continues with the next entry.
///
/// # Errors
///
/// Returns [`FramegrabError::PathNotFound`] when `input_folder` is not an
/// existing directory, or [`FramegrabError::Io`] when it cannot be read.
/// Per-entry failures are captured in the returned [`BatchReport`], never
/// raised.
pub fn sample_folder<P: AsRef<Path>, Q: AsRef<Path>>(
    input_folder: P,
    output_folder: Q,
    interval_seconds: f64,
) -> Result<BatchReport, FramegrabError> {
    let input_folder = input_folder.as_ref();
    let output_folder = output_folder.as_ref();

    if !input_folder.is_dir() {
        return Err(FramegrabError::PathNotFound {
            path: input_folder.to_path_buf(),
        });
    }

    log::info!("Sampling videos in {}", input_folder.display());

    let mut report = BatchReport::default();

    for entry in fs::read_dir(input_folder)? {
        let path = entry?.path();

        let outcome = sampler::sample(&path, output_folder, interval_seconds);
        if let Err(error) = &outcome {
            log::error!("Skipping {}: {error}", path.display());
        }

        report.items.push(BatchItem { path, outcome });
    }

    log::info!("Batch finished: {report}");
    Ok(report)
}
