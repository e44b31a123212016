//! Interval-based frame sampling for a single video.
//!
//! [`sample`] walks a video from t = 0 to its duration in fixed steps, maps
//! each step to a frame index, and writes each decodable frame as a JPEG
//! named by its timestamp. A frame that fails to decode is skipped with a
//! warning; it never aborts the video.

use std::{fmt, fs, path::Path};

use crate::{decoder::VideoHandle, error::FramegrabError, timecode};

/// Outcome of sampling one video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SampleSummary {
    /// Number of frames written to disk.
    pub saved: u64,
    /// Number of sampling points where the frame could not be read.
    pub skipped: u64,
}

impl fmt::Display for SampleSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} frame(s) saved, {} skipped", self.saved, self.skipped)
    }
}

/// Extract frames from one video at a fixed time interval.
///
/// Frames are written into `output_dir` (created with its parents if absent)
/// as `<video file name>_<HHhMMmSSsMMMms>.jpg`. Output filenames are strictly
/// increasing in timestamp with no duplicates: each iteration advances the
/// sampling position by `interval_seconds`, which must be positive.
///
/// The decoding session is released on every exit path, including the early
/// returns for invalid metadata.
///
/// # Errors
///
/// - [`FramegrabError::InvalidInterval`] when `interval_seconds` is not a
///   positive number (a non-positive interval would never advance).
/// - [`FramegrabError::PathNotFound`] when `video_path` is not an existing
///   regular file.
/// - [`FramegrabError::FileOpen`] / [`FramegrabError::NoVideoStream`] when
///   the decoder cannot open the file.
/// - [`FramegrabError::InvalidFrameRate`] when the video reports a frame
///   rate of zero.
/// - [`FramegrabError::Io`] / [`FramegrabError::Image`] when the output
///   directory or an image file cannot be written.
///
/// A failed read of an individual frame is logged as a warning and counted
/// in [`SampleSummary::skipped`]; it is not an error.
///
/// # Example
///
/// ```no_run
/// let summary = framegrab::sample("input.mp4", "frames", 10.0)?;
/// println!("{summary}");
/// # Ok::<(), framegrab::FramegrabError>(())
/// ```
pub fn sample<P: AsRef<Path>, Q: AsRef<Path>>(
    video_path: P,
    output_dir: Q,
    interval_seconds: f64,
) -> Result<SampleSummary, FramegrabError> {
    let video_path = video_path.as_ref();
    let output_dir = output_dir.as_ref();

    if interval_seconds <= 0.0 || interval_seconds.is_nan() {
        return Err(FramegrabError::InvalidInterval {
            interval: interval_seconds,
        });
    }

    if !video_path.is_file() {
        return Err(FramegrabError::PathNotFound {
            path: video_path.to_path_buf(),
        });
    }

    let mut handle = VideoHandle::open(video_path)?;

    let frame_rate = handle.frame_rate();
    if frame_rate == 0.0 {
        return Err(FramegrabError::InvalidFrameRate {
            path: video_path.to_path_buf(),
        });
    }

    let frame_count = handle.frame_count();
    let duration = handle.duration_seconds();

    log::info!(
        "{}: {frame_rate:.2} fps, {frame_count} frames, {duration:.2}s; sampling every {interval_seconds}s",
        video_path.display(),
    );

    // Created up front so the directory exists even when every read fails.
    fs::create_dir_all(output_dir)?;
    log::info!("Writing frames to {}", output_dir.display());

    let mut summary = SampleSummary::default();
    let mut current_time = 0.0_f64;

    while current_time <= duration {
        let target_frame = timecode::frame_index_at(current_time, frame_rate);

        // Past the end of the stream.
        if target_frame >= frame_count {
            break;
        }

        match handle.read_frame(target_frame) {
            Ok(image) => {
                let output_path = output_dir.join(output_file_name(video_path, current_time));
                image.save(&output_path)?;
                summary.saved += 1;
                log::info!("Saved {} (frame {target_frame})", output_path.display());
            }
            Err(error) => {
                log::warn!(
                    "Failed to read frame {target_frame} at {current_time:.2}s: {error}"
                );
                summary.skipped += 1;
            }
        }

        current_time += interval_seconds;
    }

    log::info!("Finished {}: {summary}", video_path.display());
    Ok(summary)
}

/// Derive the output filename for a sampling position.
///
/// The source file name keeps its extension, matching the flat
/// `<name>_<timestamp>.jpg` layout of the output folder.
fn output_file_name(video_path: &Path, seconds: f64) -> String {
    let source_name = video_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "frame".to_string());
    format!("{source_name}_{}.jpg", timecode::format_timestamp(seconds))
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::output_file_name;

    #[test]
    fn filename_keeps_source_extension() {
        let name = output_file_name(Path::new("/videos/holiday.mp4"), 0.0);
        assert_eq!(name, "holiday.mp4_00h00m00s000ms.jpg");
    }

    #[test]
    fn filename_embeds_the_formatted_timestamp() {
        let name = output_file_name(Path::new("clip.mkv"), 3661.5);
        assert_eq!(name, "clip.mkv_01h01m01s500ms.jpg");
    }
}
