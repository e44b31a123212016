//! # framegrab
//!
//! Grab still frames from videos at fixed time intervals, named by their
//! timestamp.
//!
//! `framegrab` walks a video from start to finish in fixed steps (10 seconds
//! by default), decodes the frame at each step, and writes it as a JPEG named
//! `<video file name>_<HHhMMmSSsMMMms>.jpg`. It can process a single video or
//! a whole folder, isolating per-file failures so one corrupt video never
//! aborts a batch. Decoding is powered by FFmpeg via the
//! [`ffmpeg-next`](https://crates.io/crates/ffmpeg-next) crate.
//!
//! ## Quick Start
//!
//! ### Sample a Single Video
//!
//! ```no_run
//! // One frame every 10 seconds, written into ./frames
//! let summary = framegrab::sample("input.mp4", "frames", 10.0).unwrap();
//! println!("{} frame(s) saved", summary.saved);
//! ```
//!
//! ### Sample a Folder of Videos
//!
//! ```no_run
//! let report = framegrab::sample_folder("videos", "frames", 10.0).unwrap();
//! println!("{report}");
//! ```
//!
//! ## Behavior Notes
//!
//! - The sampling position is mapped to a frame index with
//!   `floor(time * frame_rate)`; a video shorter than the interval yields
//!   exactly one frame, at t = 0.
//! - A frame that fails to decode is logged as a warning and skipped; the
//!   rest of the video is still sampled.
//! - Diagnostics go through the [`log`](https://crates.io/crates/log) facade;
//!   install a logger such as `env_logger` to see them.
//!
//! ## Requirements
//!
//! FFmpeg development libraries must be installed on your system.

pub mod batch;
pub mod decoder;
pub mod error;
pub mod sampler;
pub mod timecode;

pub use batch::{BatchItem, BatchReport, sample_folder};
pub use decoder::VideoHandle;
pub use error::FramegrabError;
pub use sampler::{SampleSummary, sample};
pub use timecode::{format_timestamp, frame_index_at};
