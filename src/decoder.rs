//! The decoding session behind frame sampling.
//!
//! [`VideoHandle`] wraps an FFmpeg demuxer context for one video file. It
//! caches the stream metadata the sampler needs (frame rate, frame count,
//! derived duration) and reads individual frames by index as
//! [`image::DynamicImage`] values. The underlying FFmpeg session is closed
//! when the handle is dropped, on every exit path.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use ffmpeg_next::{
    Rational,
    codec::context::Context as CodecContext,
    format::{Pixel, context::Input},
    frame::Video as VideoFrame,
    media::Type,
    software::scaling::{Context as ScalingContext, Flags as ScalingFlags},
};
use image::{DynamicImage, RgbImage};

use crate::error::FramegrabError;

/// An opened, exclusively-owned decoding session bound to one video file.
///
/// Created via [`VideoHandle::open`]. A handle with a frame rate of zero is
/// still returned by `open` so the caller can report the invalid metadata;
/// callers must check [`frame_rate`](VideoHandle::frame_rate) before trusting
/// [`duration_seconds`](VideoHandle::duration_seconds).
///
/// # Example
///
/// ```no_run
/// use framegrab::VideoHandle;
///
/// let mut handle = VideoHandle::open("input.mp4")?;
/// println!("{:.2} fps, {} frames", handle.frame_rate(), handle.frame_count());
/// let frame = handle.read_frame(0)?;
/// frame.save("first_frame.jpg")?;
/// # Ok::<(), framegrab::FramegrabError>(())
/// ```
pub struct VideoHandle {
    /// The opened FFmpeg input (demuxer) context.
    input: Input,
    /// Index of the best video stream.
    stream_index: usize,
    /// Time base of the video stream.
    time_base: Rational,
    /// Frames per second, 0.0 when the container does not declare one.
    frame_rate: f64,
    /// Total frame count, declared by the container or estimated.
    frame_count: u64,
    /// Path to the opened file (kept for error messages).
    #[allow(dead_code)]
    path: PathBuf,
}

impl VideoHandle {
    /// Open a video file for frame extraction.
    ///
    /// Initializes FFmpeg (idempotent), opens the file, locates the best
    /// video stream, and caches its frame rate and frame count. The frame
    /// count comes from the container's declared `nb_frames` when present,
    /// otherwise it is estimated from the container duration and frame rate.
    ///
    /// # Errors
    ///
    /// Returns [`FramegrabError::FileOpen`] if the file cannot be opened and
    /// [`FramegrabError::NoVideoStream`] if it contains no video stream.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, FramegrabError> {
        let path = path.as_ref().to_path_buf();

        log::debug!("Opening video file: {}", path.display());

        // Initialise ffmpeg (safe to call multiple times).
        ffmpeg_next::init().map_err(|error| FramegrabError::FileOpen {
            path: path.clone(),
            reason: format!("FFmpeg initialisation failed: {error}"),
        })?;

        let input = ffmpeg_next::format::input(&path).map_err(|error| FramegrabError::FileOpen {
            path: path.clone(),
            reason: error.to_string(),
        })?;

        let (stream_index, time_base, frame_rate, declared_frames) = {
            let stream = input
                .streams()
                .best(Type::Video)
                .ok_or(FramegrabError::NoVideoStream)?;

            // Frames per second from the stream's average frame rate, with
            // the real base frame rate as fallback.
            let average = stream.avg_frame_rate();
            let frame_rate = if average.denominator() != 0 {
                f64::from(average.numerator()) / f64::from(average.denominator())
            } else {
                let rate = stream.rate();
                if rate.denominator() != 0 {
                    f64::from(rate.numerator()) / f64::from(rate.denominator())
                } else {
                    0.0
                }
            };

            (
                stream.index(),
                stream.time_base(),
                frame_rate,
                stream.frames(),
            )
        };

        // Container-level duration, used to estimate the frame count when the
        // container does not declare one.
        let duration_microseconds = input.duration();
        let container_duration = if duration_microseconds > 0 {
            Duration::from_micros(duration_microseconds as u64).as_secs_f64()
        } else {
            0.0
        };

        let frame_count = if declared_frames > 0 {
            declared_frames as u64
        } else if frame_rate > 0.0 {
            (container_duration * frame_rate) as u64
        } else {
            0
        };

        log::debug!(
            "Video stream: index={stream_index}, {frame_rate:.2} fps, ~{frame_count} frames",
        );

        Ok(Self {
            input,
            stream_index,
            time_base,
            frame_rate,
            frame_count,
            path,
        })
    }

    /// Frames per second of the video stream, or 0.0 when unknown.
    pub fn frame_rate(&self) -> f64 {
        self.frame_rate
    }

    /// Total number of frames in the video stream.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Duration in seconds, derived as `frame_count / frame_rate`.
    ///
    /// Returns 0.0 when the frame rate is unknown.
    pub fn duration_seconds(&self) -> f64 {
        if self.frame_rate > 0.0 {
            self.frame_count as f64 / self.frame_rate
        } else {
            0.0
        }
    }

    /// Seek to a frame index and decode it as an RGB image.
    ///
    /// Seeks to the nearest keyframe before the target, then decodes forward
    /// until the target frame (or the first frame past it) is reached.
    ///
    /// # Errors
    ///
    /// Returns [`FramegrabError::FrameRead`] if no frame at or after the
    /// target index can be decoded, or an FFmpeg error if seeking or
    /// decoding fails outright.
    pub fn read_frame(&mut self, frame_index: u64) -> Result<DynamicImage, FramegrabError> {
        // Build a fresh decoder from the stream parameters.
        let codec_parameters = {
            let stream = self
                .input
                .stream(self.stream_index)
                .ok_or(FramegrabError::NoVideoStream)?;
            stream.parameters()
        };
        let decoder_context = CodecContext::from_parameters(codec_parameters)?;
        let mut decoder = decoder_context.decoder().video()?;

        let width = decoder.width();
        let height = decoder.height();

        // Pixel-format converter (source format -> RGB24).
        let mut scaler = ScalingContext::get(
            decoder.format(),
            width,
            height,
            Pixel::RGB24,
            width,
            height,
            ScalingFlags::BILINEAR,
        )?;

        let stream_index = self.stream_index;
        let time_base = self.time_base;
        let frame_rate = self.frame_rate;

        // Seek to the nearest keyframe before the target frame.
        let target_timestamp = frame_index_to_stream_timestamp(frame_index, frame_rate, time_base);
        self.input.seek(target_timestamp, ..target_timestamp)?;

        let mut decoded_frame = VideoFrame::empty();
        let mut rgb_frame = VideoFrame::empty();

        for (stream, packet) in self.input.packets() {
            if stream.index() != stream_index {
                continue;
            }

            decoder.send_packet(&packet)?;

            while decoder.receive_frame(&mut decoded_frame).is_ok() {
                let pts = decoded_frame.pts().unwrap_or(0);
                let current_index = pts_to_frame_index(pts, time_base, frame_rate);

                // A seek can land past the target; the first frame at or
                // after the requested index is the answer either way.
                if current_index >= frame_index {
                    scaler.run(&decoded_frame, &mut rgb_frame)?;
                    return image_from_rgb_frame(&rgb_frame, width, height, frame_index);
                }
            }
        }

        // Flush the decoder.
        decoder.send_eof()?;
        while decoder.receive_frame(&mut decoded_frame).is_ok() {
            let pts = decoded_frame.pts().unwrap_or(0);
            let current_index = pts_to_frame_index(pts, time_base, frame_rate);

            if current_index >= frame_index {
                scaler.run(&decoded_frame, &mut rgb_frame)?;
                return image_from_rgb_frame(&rgb_frame, width, height, frame_index);
            }
        }

        Err(FramegrabError::FrameRead {
            frame_index,
            reason: "no frame could be decoded at or after the target index".to_string(),
        })
    }
}

/// Convert a frame index to a timestamp in the stream's time base, suitable
/// for passing to FFmpeg seeking functions.
fn frame_index_to_stream_timestamp(frame_index: u64, frame_rate: f64, time_base: Rational) -> i64 {
    if frame_rate <= 0.0 {
        return 0;
    }
    let seconds = frame_index as f64 / frame_rate;
    let numerator = f64::from(time_base.numerator());
    let denominator = f64::from(time_base.denominator());
    (seconds * denominator / numerator) as i64
}

/// Rescale a PTS value from the stream time base to a frame index.
fn pts_to_frame_index(pts: i64, time_base: Rational, frame_rate: f64) -> u64 {
    let seconds =
        pts as f64 * f64::from(time_base.numerator()) / f64::from(time_base.denominator());
    (seconds * frame_rate) as u64
}

/// Convert a scaled RGB24 frame to an [`image::DynamicImage`].
///
/// FFmpeg frames frequently carry per-row padding (stride > width * 3); the
/// padding is stripped so the buffer can go straight into
/// [`image::RgbImage::from_raw`].
fn image_from_rgb_frame(
    rgb_frame: &VideoFrame,
    width: u32,
    height: u32,
    frame_index: u64,
) -> Result<DynamicImage, FramegrabError> {
    let stride = rgb_frame.stride(0);
    let expected_stride = (width as usize) * 3;
    let data = rgb_frame.data(0);

    let buffer = if stride == expected_stride {
        data[..expected_stride * (height as usize)].to_vec()
    } else {
        let mut buffer = Vec::with_capacity(expected_stride * (height as usize));
        for row in 0..(height as usize) {
            let row_start = row * stride;
            buffer.extend_from_slice(&data[row_start..row_start + expected_stride]);
        }
        buffer
    };

    let rgb_image =
        RgbImage::from_raw(width, height, buffer).ok_or_else(|| FramegrabError::FrameRead {
            frame_index,
            reason: "failed to construct an RGB image from the decoded frame data".to_string(),
        })?;
    Ok(DynamicImage::ImageRgb8(rgb_image))
}
