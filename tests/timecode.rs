//! Timestamp formatting and frame-index mapping tests.
//!
//! These cover the pure arithmetic that drives output naming and frame
//! selection; none of them need media fixtures.

use std::collections::HashSet;

use framegrab::{format_timestamp, frame_index_at};

#[test]
fn zero_formats_as_all_zeros() {
    assert_eq!(format_timestamp(0.0), "00h00m00s000ms");
}

#[test]
fn hours_minutes_seconds_milliseconds() {
    assert_eq!(format_timestamp(3661.5), "01h01m01s500ms");
}

#[test]
fn sub_second_positions_only_fill_milliseconds() {
    assert_eq!(format_timestamp(0.25), "00h00m00s250ms");
}

#[test]
fn milliseconds_truncate_instead_of_rounding() {
    // 0.4ms of slack must not round up to the next millisecond.
    assert_eq!(format_timestamp(0.0004), "00h00m00s000ms");
    assert_eq!(format_timestamp(119.5), "00h01m59s500ms");
}

#[test]
fn hours_grow_past_two_digits() {
    assert_eq!(format_timestamp(360_000.0), "100h00m00s000ms");
}

#[test]
fn interval_spaced_positions_format_distinctly() {
    // Positions half a second apart over several minutes: every formatted
    // timestamp must be unique and lexically increasing.
    let mut formatted = Vec::new();
    let mut current = 0.0_f64;
    while current <= 300.0 {
        formatted.push(format_timestamp(current));
        current += 0.5;
    }

    let unique: HashSet<&String> = formatted.iter().collect();
    assert_eq!(unique.len(), formatted.len(), "duplicate timestamps");

    for pair in formatted.windows(2) {
        assert!(pair[0] < pair[1], "{} should sort before {}", pair[0], pair[1]);
    }
}

#[test]
fn frame_index_uses_floor() {
    assert_eq!(frame_index_at(0.0, 30.0), 0);
    assert_eq!(frame_index_at(2.5, 24.0), 60);
    assert_eq!(frame_index_at(10.0, 29.97), 299);
}

#[test]
fn frame_index_floor_can_pick_the_earlier_frame() {
    // 0.99 * 100 lands just below 99.0 in f64; floor semantics keep 98
    // rather than rounding up.
    assert_eq!(frame_index_at(0.99, 100.0), 98);
}
