//! Timestamp formatting and time-to-frame-index mapping.
//!
//! These are the pure arithmetic helpers at the heart of interval sampling:
//! a timestamp formatter used to derive deterministic output filenames, and
//! the mapping from a wall-clock position to a frame index.

/// Format a position in seconds as `HHhMMmSSsMMMms`.
///
/// Hours are zero-padded to at least two digits and grow wider as needed;
/// minutes and seconds are two digits, milliseconds three. Every unit is
/// truncated, never rounded, so `1.9996` formats as `...s999ms` and two
/// positions at least one millisecond apart always format differently.
///
/// # Examples
///
/// ```
/// use framegrab::format_timestamp;
///
/// assert_eq!(format_timestamp(0.0), "00h00m00s000ms");
/// assert_eq!(format_timestamp(3661.5), "01h01m01s500ms");
/// ```
pub fn format_timestamp(seconds: f64) -> String {
    let hours = (seconds / 3600.0) as u64;
    let minutes = ((seconds % 3600.0) / 60.0) as u64;
    let whole_seconds = (seconds % 60.0) as u64;
    let milliseconds = ((seconds - seconds.trunc()) * 1000.0) as u64;
    format!("{hours:02}h{minutes:02}m{whole_seconds:02}s{milliseconds:03}ms")
}

/// Map a position in seconds to a frame index using the video's frame rate.
///
/// Uses `floor(seconds * frame_rate)`. Near floating-point boundaries this
/// can select a frame one index earlier than a rounding approach would; the
/// floor semantics are deliberate and must not change.
pub fn frame_index_at(seconds: f64, frame_rate: f64) -> u64 {
    (seconds * frame_rate).floor() as u64
}
