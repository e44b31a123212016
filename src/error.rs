//! Error types for the `framegrab` crate.
//!
//! This module defines [`FramegrabError`], the unified error type returned by
//! all fallible operations in the crate. Errors carry enough context to
//! diagnose the problem at the call site, including file paths, frame indices,
//! and upstream error messages.

use std::{io::Error as IoError, path::PathBuf};

use ffmpeg_next::Error as FfmpegError;
use image::ImageError;
use thiserror::Error;

/// The unified error type for all `framegrab` operations.
///
/// Every public function that can fail returns `Result<T, FramegrabError>`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FramegrabError {
    /// The input file or folder does not exist.
    #[error("Path not found: {path}")]
    PathNotFound {
        /// Path that was checked before any decode attempt.
        path: PathBuf,
    },

    /// The video file could not be opened by the decoder.
    #[error("Failed to open video file at {path}: {reason}")]
    FileOpen {
        /// Path that was passed to [`crate::VideoHandle::open`].
        path: PathBuf,
        /// Underlying reason the open failed.
        reason: String,
    },

    /// The file does not contain a video stream.
    #[error("No video stream found in file")]
    NoVideoStream,

    /// The video reports a frame rate of zero.
    #[error(
        "Could not determine a frame rate for {path}: the file may be corrupt or use an unsupported codec"
    )]
    InvalidFrameRate {
        /// Path of the offending video.
        path: PathBuf,
    },

    /// A non-positive (or NaN) sampling interval was requested.
    #[error("Sampling interval must be greater than zero (got {interval})")]
    InvalidInterval {
        /// The rejected interval, in seconds.
        interval: f64,
    },

    /// A specific frame could not be read after seeking.
    #[error("Failed to read frame {frame_index}: {reason}")]
    FrameRead {
        /// The frame index that was requested.
        frame_index: u64,
        /// Underlying reason the read failed.
        reason: String,
    },

    /// An error originating from the FFmpeg libraries.
    #[error("FFmpeg error: {0}")]
    Ffmpeg(String),

    /// An I/O error occurred while creating directories or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    /// An error from the `image` crate while encoding a frame.
    #[error("Image encoding error: {0}")]
    Image(#[from] ImageError),
}

impl From<FfmpegError> for FramegrabError {
    fn from(error: FfmpegError) -> Self {
        FramegrabError::Ffmpeg(error.to_string())
    }
}
